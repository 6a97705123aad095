use std::sync::Arc;
use std::time::Instant;

use egui_wgpu::ScreenDescriptor;
use egui_winit::State;
use log::{debug, error, warn};
use winit::event::{ElementState, WindowEvent};
use winit::window::Window;

use crate::app::input::{InputTranslator, is_exit_key};
use crate::app::timer::TickTimer;
use crate::error::VisError;
use crate::renderer::batch::FrameBatch;
use crate::renderer::frame::build_frame;
use crate::renderer::renderer::Renderer;
use crate::scene::SceneState;
use crate::settings::DisplaySettings;
use crate::ui::Ui;

pub struct EventResponse {
    pub repaint: bool,
    pub exit: bool,
}

impl EventResponse {
    const NONE: Self = Self {
        repaint: false,
        exit: false,
    };
    const REPAINT: Self = Self {
        repaint: true,
        exit: false,
    };
    const EXIT: Self = Self {
        repaint: false,
        exit: true,
    };
}

pub struct App {
    pub window: Arc<Window>,
    ui: Ui,
    renderer: Renderer,
    scene: SceneState,
    input: InputTranslator,
    timer: TickTimer,
    egui_state: State,
    settings: DisplaySettings,
}

impl App {
    pub fn new(window: Arc<Window>, settings: DisplaySettings) -> Result<Self, VisError> {
        let renderer = pollster::block_on(Renderer::new(window.clone()))?;

        let egui_state = State::new(
            renderer.egui_context(),
            egui::viewport::ViewportId::ROOT,
            &window,
            None,
            None,
            None,
        );

        let mut timer = TickTimer::new(settings.tick_interval());
        timer.arm(Instant::now());

        Ok(Self {
            window,
            ui: Ui::new(settings.label_font_size),
            renderer,
            scene: SceneState::new(),
            input: InputTranslator::new(),
            timer,
            egui_state,
            settings,
        })
    }

    pub fn handle_event(&mut self, event: &WindowEvent) -> EventResponse {
        // egui only paints labels here, so it never consumes input
        let _ = self.egui_state.on_window_event(&self.window, event);

        match event {
            WindowEvent::CloseRequested => return EventResponse::EXIT,
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed && is_exit_key(&event.logical_key) =>
            {
                return EventResponse::EXIT;
            }
            WindowEvent::Resized(size) => {
                self.renderer.resize(*size);
                return EventResponse::REPAINT;
            }
            WindowEvent::RedrawRequested => {
                self.render();
                return EventResponse::NONE;
            }
            _ => {}
        }

        match self.input.translate(event) {
            Some(input) => {
                debug!("Input: {input:?}");
                if self.scene.apply(input) {
                    EventResponse::REPAINT
                } else {
                    EventResponse::NONE
                }
            }
            None => EventResponse::NONE,
        }
    }

    /// Advance the animation if the tick is due, then re-arm for the next one.
    pub fn on_timer(&mut self, now: Instant) {
        if self.scene.on_tick(&mut self.timer, now) {
            self.window.request_redraw();
        }
    }

    pub fn next_tick(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    pub fn render(&mut self) {
        let size = self.window.inner_size();
        // Nothing to draw into while minimized
        if size.width == 0 || size.height == 0 {
            return;
        }
        let viewport = [size.width as f32, size.height as f32];

        let frame = build_frame(&self.scene, &self.settings, viewport[0] / viewport[1]);
        let batch = FrameBatch::build(&frame, viewport);

        let raw_input = self.egui_state.take_egui_input(&self.window);
        let egui_ctx = self.renderer.egui_context();
        let full_output = egui_ctx.run(raw_input, |ctx| {
            self.ui.show(ctx, &batch.labels);
        });
        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);

        let paint_jobs = egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);
        let screen_descriptor = ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        match self
            .renderer
            .render(&batch, paint_jobs, full_output.textures_delta, screen_descriptor)
        {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("Surface lost or outdated, reconfiguring");
                self.renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("Out of GPU memory while rendering");
            }
            Err(e) => warn!("Render error: {e:?}"),
        }
    }
}
