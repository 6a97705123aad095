/// Fixed-function style surface response used for every sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub shininess: f32,
}

const AMBIENT_FACTOR: f32 = 0.2;
const SHININESS: f32 = 50.0;

impl Material {
    /// Material tinted by a body color: dimmed ambient, full diffuse, white highlights.
    pub fn from_color(color: [f32; 3]) -> Self {
        Self {
            ambient: color.map(|c| c * AMBIENT_FACTOR),
            diffuse: color,
            specular: [1.0, 1.0, 1.0],
            shininess: SHININESS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_color_scales_ambient() {
        let m = Material::from_color([1.0, 0.5, 0.0]);
        assert_eq!(m.diffuse, [1.0, 0.5, 0.0]);
        assert!((m.ambient[0] - 0.2).abs() < 1e-6);
        assert!((m.ambient[1] - 0.1).abs() < 1e-6);
        assert_eq!(m.ambient[2], 0.0);
        assert_eq!(m.specular, [1.0; 3]);
        assert_eq!(m.shininess, 50.0);
    }
}
