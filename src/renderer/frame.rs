//! Per-frame draw list: a pure function of the scene state.

use nalgebra_glm as glm;

use crate::material::Material;
use crate::model::{CATALOG, SUN};
use crate::renderer::orbit::orbit_loop;
use crate::renderer::projection::{projection_matrix, view_matrix};
use crate::scene::SceneState;
use crate::settings::DisplaySettings;

pub const ORBIT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear color and depth.
    Clear { color: [f32; 3] },
    Sphere {
        model: glm::Mat4,
        radius: f32,
        slices: u32,
        stacks: u32,
        material: Material,
    },
    /// Closed polyline, points in model space.
    LineLoop {
        model: glm::Mat4,
        points: Vec<glm::Vec3>,
        color: [f32; 3],
    },
    /// Text anchored at a world-space point.
    Label {
        position: glm::Vec3,
        text: &'static str,
    },
}

#[derive(Debug, Clone)]
pub struct Frame {
    pub view: glm::Mat4,
    pub projection: glm::Mat4,
    pub commands: Vec<DrawCommand>,
}

fn transform_point(model: &glm::Mat4, p: [f32; 3]) -> glm::Vec3 {
    (model * glm::vec4(p[0], p[1], p[2], 1.0)).xyz()
}

/// Placement of a catalog body: on +X at its orbit radius, optionally
/// carried around the orbit by the animation angle.
fn body_transform(scene: &SceneState, index: usize, orbit_radius: f32, animate: bool) -> glm::Mat4 {
    let mut model = glm::Mat4::identity();
    if animate {
        let angle = scene.animation.orbit_angle(index).to_radians();
        model = glm::rotate_y(&model, angle);
    }
    glm::translate(&model, &glm::vec3(orbit_radius, 0.0, 0.0))
}

pub fn build_frame(scene: &SceneState, settings: &DisplaySettings, aspect: f32) -> Frame {
    let view = view_matrix(scene.camera.state());
    let projection = projection_matrix(aspect, settings);

    let mut commands = Vec::with_capacity(3 + CATALOG.len() * 3);
    commands.push(DrawCommand::Clear {
        color: settings.clear_color,
    });

    let sun_model = glm::Mat4::identity();
    commands.push(DrawCommand::Sphere {
        model: sun_model,
        radius: SUN.visual_radius,
        slices: settings.sphere_slices,
        stacks: settings.sphere_stacks,
        material: Material::from_color(SUN.color),
    });
    commands.push(DrawCommand::Label {
        position: transform_point(&sun_model, SUN.label_offset()),
        text: SUN.name,
    });

    for (index, body) in CATALOG.iter().enumerate() {
        commands.push(DrawCommand::LineLoop {
            model: glm::Mat4::identity(),
            points: orbit_loop(body.orbit_radius),
            color: ORBIT_COLOR,
        });

        let model = body_transform(scene, index, body.orbit_radius, settings.animate_orbits);
        commands.push(DrawCommand::Sphere {
            model,
            radius: body.visual_radius,
            slices: settings.sphere_slices,
            stacks: settings.sphere_stacks,
            material: Material::from_color(body.color),
        });
        commands.push(DrawCommand::Label {
            position: transform_point(&model, body.label_offset()),
            text: body.name,
        });
    }

    Frame {
        view,
        projection,
        commands,
    }
}
