use log::info;
use winit::event_loop::{ControlFlow, EventLoop};

mod animation;
mod app;
mod error;
mod material;
mod model;
mod renderer;
mod scene;
mod settings;
mod ui;

use crate::app::handler::AppHandler;
use crate::error::VisError;
use crate::settings::DisplaySettings;

fn main() -> Result<(), VisError> {
    env_logger::init();

    let settings = DisplaySettings::load();
    info!("Display settings: {settings:?}");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut handler = AppHandler::new(settings);
    event_loop.run_app(&mut handler)?;

    match handler.startup_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
