use nalgebra_glm as glm;
use std::f32::consts::{PI, TAU};

/// Triangle list of a unit sphere with poles on the Y axis.
/// Every position doubles as its own normal.
pub fn unit_sphere(slices: u32, stacks: u32) -> Vec<glm::Vec3> {
    let point = |stack: u32, slice: u32| {
        let phi = PI * stack as f32 / stacks as f32;
        let theta = TAU * slice as f32 / slices as f32;
        glm::vec3(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin())
    };

    let mut triangles = Vec::with_capacity((slices * stacks * 6) as usize);
    for stack in 0..stacks {
        for slice in 0..slices {
            let p00 = point(stack, slice);
            let p01 = point(stack, slice + 1);
            let p10 = point(stack + 1, slice);
            let p11 = point(stack + 1, slice + 1);
            triangles.extend_from_slice(&[p00, p10, p11, p00, p11, p01]);
        }
    }
    triangles
}
