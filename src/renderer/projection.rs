use nalgebra_glm as glm;

use crate::renderer::camera::CameraState;
use crate::settings::DisplaySettings;

/// Base orientation: looking straight down at the orbit plane with -Z as screen up.
const TOP_DOWN_TILT_DEGREES: f32 = 90.0;

/// `T(0,0,-zoom) * Rx(rotation_x) * Ry(rotation_y) * top-down tilt`.
pub fn view_matrix(camera: &CameraState) -> glm::Mat4 {
    let view = glm::translate(&glm::Mat4::identity(), &glm::vec3(0.0, 0.0, -camera.zoom));
    let view = glm::rotate_x(&view, camera.rotation_x.to_radians());
    let view = glm::rotate_y(&view, camera.rotation_y.to_radians());
    glm::rotate_x(&view, TOP_DOWN_TILT_DEGREES.to_radians())
}

pub fn projection_matrix(aspect: f32, settings: &DisplaySettings) -> glm::Mat4 {
    glm::perspective_rh_zo(
        aspect,
        settings.field_of_view.to_radians(),
        settings.near_plane,
        settings.far_plane,
    )
}

/// Window pixel position of a world point, top-left origin.
///
/// Points behind the eye or outside the clip volume have no position, the
/// same way a raster position becomes invalid.
pub fn project_to_screen(
    view_proj: &glm::Mat4,
    point: &glm::Vec3,
    viewport: [f32; 2],
) -> Option<[f32; 2]> {
    let clip = view_proj * glm::vec4(point.x, point.y, point.z, 1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.xyz() / clip.w;
    let inside = (-1.0..=1.0).contains(&ndc.x)
        && (-1.0..=1.0).contains(&ndc.y)
        && (0.0..=1.0).contains(&ndc.z);
    if !inside {
        return None;
    }
    Some([
        (ndc.x + 1.0) * 0.5 * viewport[0],
        (1.0 - ndc.y) * 0.5 * viewport[1],
    ])
}
