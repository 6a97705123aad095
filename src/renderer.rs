pub mod batch;
pub mod camera;
pub mod frame;
pub mod line_vertex;
pub mod orbit;
pub mod projection;
pub mod render;
pub mod renderer;
pub mod sphere;
pub mod vertex;
