pub const DEFAULT_ZOOM: f32 = 10.0;
/// Closest the camera may get before it would cross into the scene.
pub const MIN_ZOOM: f32 = 1.0;

/// Orbit camera around the scene origin.
///
/// Rotations are in degrees and deliberately unbounded; they only ever feed
/// periodic functions.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    pub zoom: f32,
    pub rotation_x: f32,
    pub rotation_y: f32,
}

impl CameraState {
    pub fn new(zoom: f32, rotation_x: f32, rotation_y: f32) -> Self {
        Self {
            zoom: zoom.max(MIN_ZOOM),
            rotation_x,
            rotation_y,
        }
    }

    /// Horizontal movement turns about the vertical axis and vice versa.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.rotation_x += dy;
        self.rotation_y += dx;
    }

    pub fn zoom_by(&mut self, delta: f32) {
        self.zoom = (self.zoom + delta).max(MIN_ZOOM);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn get_orientation(&self) -> (f32, f32) {
        (self.rotation_x, self.rotation_y)
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(DEFAULT_ZOOM, 0.0, 0.0)
    }
}
