use nalgebra_glm as glm;

use crate::renderer::frame::{DrawCommand, Frame};
use crate::renderer::line_vertex::LineVertex;
use crate::renderer::orbit::loop_segments;
use crate::renderer::projection::project_to_screen;
use crate::renderer::sphere::unit_sphere;
use crate::renderer::vertex::{CameraUniform, MeshVertex};

/// A label already placed in window pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenLabel {
    pub position: [f32; 2],
    pub text: &'static str,
}

/// GPU-ready contents of one frame: world-space vertex lists plus
/// projected labels.
#[derive(Debug, Clone)]
pub struct FrameBatch {
    pub clear_color: [f32; 3],
    pub camera: CameraUniform,
    pub mesh: Vec<MeshVertex>,
    pub lines: Vec<LineVertex>,
    pub labels: Vec<ScreenLabel>,
}

impl FrameBatch {
    pub fn build(frame: &Frame, viewport: [f32; 2]) -> Self {
        let view_proj = frame.projection * frame.view;
        let mut batch = Self {
            clear_color: [0.0; 3],
            camera: CameraUniform::new(&frame.view, &frame.projection),
            mesh: Vec::new(),
            lines: Vec::new(),
            labels: Vec::new(),
        };
        // Tessellation only depends on resolution, reuse it across spheres.
        let mut sphere_cache: Option<((u32, u32), Vec<glm::Vec3>)> = None;

        for command in &frame.commands {
            match command {
                DrawCommand::Clear { color } => batch.clear_color = *color,
                DrawCommand::Sphere {
                    model,
                    radius,
                    slices,
                    stacks,
                    material,
                } => {
                    let key = (*slices, *stacks);
                    let unit = match sphere_cache.take() {
                        Some((cached, mesh)) if cached == key => mesh,
                        _ => unit_sphere(*slices, *stacks),
                    };
                    let r = *radius;
                    batch.mesh.extend(unit.iter().map(|n| {
                        let position = (model * glm::vec4(n.x * r, n.y * r, n.z * r, 1.0)).xyz();
                        let normal = (model * glm::vec4(n.x, n.y, n.z, 0.0)).xyz();
                        MeshVertex::new(&position, &normal, material)
                    }));
                    sphere_cache = Some((key, unit));
                }
                DrawCommand::LineLoop {
                    model,
                    points,
                    color,
                } => {
                    let world: Vec<glm::Vec3> = points
                        .iter()
                        .map(|p| (model * glm::vec4(p.x, p.y, p.z, 1.0)).xyz())
                        .collect();
                    for (a, b) in loop_segments(&world) {
                        batch.lines.push(LineVertex::new(&a, *color));
                        batch.lines.push(LineVertex::new(&b, *color));
                    }
                }
                DrawCommand::Label { position, text } => {
                    if let Some(screen) = project_to_screen(&view_proj, position, viewport) {
                        batch.labels.push(ScreenLabel {
                            position: screen,
                            text: *text,
                        });
                    }
                }
            }
        }

        batch
    }

    pub fn mesh_vertex_count(&self) -> u32 {
        self.mesh.len() as u32
    }

    pub fn line_vertex_count(&self) -> u32 {
        self.lines.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::input::InputEvent;
    use crate::model::CATALOG;
    use crate::renderer::camera::ScrollDirection;
    use crate::renderer::frame::build_frame;
    use crate::renderer::orbit::ORBIT_SEGMENTS;
    use crate::scene::SceneState;
    use crate::settings::DisplaySettings;

    fn default_batch(scene: &SceneState) -> FrameBatch {
        let frame = build_frame(scene, &DisplaySettings::default(), 1.0);
        FrameBatch::build(&frame, [400.0, 400.0])
    }

    #[test]
    fn vertex_counts() {
        let batch = default_batch(&SceneState::new());
        assert_eq!(batch.line_vertex_count() as usize, CATALOG.len() * ORBIT_SEGMENTS * 2);
        assert_eq!(batch.mesh_vertex_count() as usize, (CATALOG.len() + 1) * 20 * 16 * 6);
    }

    #[test]
    fn orbit_lines_are_white_and_on_their_circles() {
        let batch = default_batch(&SceneState::new());
        for (ring, body) in CATALOG.iter().enumerate() {
            let start = ring * ORBIT_SEGMENTS * 2;
            for vertex in &batch.lines[start..start + ORBIT_SEGMENTS * 2] {
                assert_eq!(vertex.color, [1.0; 3]);
                let [x, _, z] = vertex.position;
                let r2 = x * x + z * z;
                assert!((r2 - body.orbit_radius * body.orbit_radius).abs() < 1e-2);
            }
        }
    }

    #[test]
    fn sun_vertices_are_radius_one_with_outward_normals() {
        let batch = default_batch(&SceneState::new());
        for vertex in &batch.mesh[..20 * 16 * 6] {
            let p = glm::make_vec3(&vertex.position);
            let n = glm::make_vec3(&vertex.normal);
            assert!((p.norm() - 1.0).abs() < 1e-5);
            assert!((p - n).norm() < 1e-5);
            assert_eq!(vertex.diffuse, [1.0, 1.0, 0.0]);
        }
    }

    fn label_names(batch: &FrameBatch) -> Vec<&'static str> {
        batch.labels.iter().map(|l| l.text).collect()
    }

    #[test]
    fn default_view_shows_the_inner_system() {
        let batch = default_batch(&SceneState::new());
        assert_eq!(
            label_names(&batch),
            ["Sun", "Mercury", "Venus", "Earth", "Mars", "Jupiter"]
        );
        for label in &batch.labels {
            assert!((0.0..=400.0).contains(&label.position[0]));
            assert!((0.0..=400.0).contains(&label.position[1]));
        }
    }

    #[test]
    fn labels_are_not_hidden_by_spheres() {
        // The Sun's label sits under the Sun as seen from above
        let batch = default_batch(&SceneState::new());
        let sun = batch.labels.iter().find(|l| l.text == "Sun").expect("Sun label");
        let [x, y] = sun.position;
        assert!((x - 200.0).abs() < 1e-3);
        assert!((y - 200.0).abs() < 1e-3);
    }

    #[test]
    fn zooming_out_reveals_outer_labels() {
        let mut scene = SceneState::new();
        for _ in 0..5 {
            scene.apply(InputEvent::Scroll(ScrollDirection::Down));
        }
        let names = label_names(&default_batch(&scene));
        assert!(names.contains(&"Saturn"));
        assert!(names.contains(&"Uranus"));
        assert!(!names.contains(&"Pluto"));
    }

    #[test]
    fn labels_beyond_the_far_plane_are_dropped() {
        let mut scene = SceneState::new();
        for _ in 0..10 {
            scene.apply(InputEvent::Scroll(ScrollDirection::Down));
        }
        let names = label_names(&default_batch(&scene));
        assert!(!names.contains(&"Sun"));
    }

    #[test]
    fn clear_color_comes_from_the_frame() {
        let settings = DisplaySettings {
            clear_color: [0.1, 0.2, 0.3],
            ..DisplaySettings::default()
        };
        let frame = build_frame(&SceneState::new(), &settings, 1.0);
        let batch = FrameBatch::build(&frame, [10.0, 10.0]);
        assert_eq!(batch.clear_color, [0.1, 0.2, 0.3]);
    }
}
