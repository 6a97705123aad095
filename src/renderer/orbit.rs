use nalgebra_glm as glm;
use std::f32::consts::TAU;

/// Points per orbit ring.
pub const ORBIT_SEGMENTS: usize = 100;

/// Evenly spaced points on a circle of `radius` in the XZ plane, starting on +X.
/// The loop is implicitly closed: the last point connects back to the first.
pub fn orbit_loop(radius: f32) -> Vec<glm::Vec3> {
    (0..ORBIT_SEGMENTS)
        .map(|i| {
            let theta = TAU * (i as f32 / ORBIT_SEGMENTS as f32);
            glm::vec3(radius * theta.cos(), 0.0, radius * theta.sin())
        })
        .collect()
}

/// Consecutive point pairs of a closed loop, including the closing edge.
pub fn loop_segments(points: &[glm::Vec3]) -> impl Iterator<Item = (glm::Vec3, glm::Vec3)> + '_ {
    let n = points.len();
    (0..n).map(move |i| (points[i], points[(i + 1) % n]))
}
