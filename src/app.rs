pub mod app;
pub mod handler;
pub mod input;
pub mod timer;
