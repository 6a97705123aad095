/// A planet of the catalog: drawn on a circular orbit around the sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialBody {
    /// Distance from the origin in scene units.
    pub orbit_radius: f32,
    /// Sphere radius in scene units.
    pub visual_radius: f32,
    pub color: [f32; 3],
    pub name: &'static str,
}

/// The body fixed at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sun {
    pub visual_radius: f32,
    pub color: [f32; 3],
    pub name: &'static str,
}

/// Gap between the bottom of a sphere and the anchor of its label.
pub const LABEL_GAP: f32 = 0.2;

impl CelestialBody {
    /// Label anchor in the body's own frame, just below the sphere.
    pub fn label_offset(&self) -> [f32; 3] {
        [0.0, -(self.visual_radius + LABEL_GAP), 0.0]
    }
}

impl Sun {
    pub fn label_offset(&self) -> [f32; 3] {
        [0.0, -(self.visual_radius + LABEL_GAP), 0.0]
    }
}
