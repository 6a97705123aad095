use std::sync::Arc;
use std::time::Instant;

use log::{error, info};
use winit::application::ApplicationHandler;
use winit::event::{StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use crate::app::app::App;
use crate::error::VisError;
use crate::settings::DisplaySettings;

pub const WINDOW_TITLE: &str = "Interactive Solar System";

pub struct AppHandler {
    pub app: Option<App>,
    settings: DisplaySettings,
    /// Set when the window or GPU could not be brought up.
    pub startup_error: Option<VisError>,
}

impl AppHandler {
    pub fn new(settings: DisplaySettings) -> Self {
        Self {
            app: None,
            settings,
            startup_error: None,
        }
    }

    fn create_app(&self, event_loop: &ActiveEventLoop) -> Result<App, VisError> {
        let window_attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.settings.window_width,
                self.settings.window_height,
            ));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        info!("Created window {:?}", window.inner_size());
        App::new(window, self.settings.clone())
    }
}

impl ApplicationHandler for AppHandler {
    fn new_events(&mut self, _event_loop: &ActiveEventLoop, _cause: StartCause) {
        // A wakeup may be caused by input after the deadline passed, so check
        // the timer on every wakeup rather than only on ResumeTimeReached.
        if let Some(app) = &mut self.app {
            app.on_timer(Instant::now());
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_some() {
            return;
        }
        match self.create_app(event_loop) {
            Ok(app) => {
                app.window.request_redraw();
                self.app = Some(app);
            }
            Err(e) => {
                error!("Startup failed: {e}");
                self.startup_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(app) = &mut self.app {
            let response = app.handle_event(&event);
            if response.repaint {
                app.window.request_redraw();
            }
            if response.exit {
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let control_flow = match self.app.as_ref().and_then(App::next_tick) {
            Some(deadline) => ControlFlow::WaitUntil(deadline),
            None => ControlFlow::Wait,
        };
        event_loop.set_control_flow(control_flow);
    }
}
