use std::time::Instant;

use log::debug;

use crate::animation::AnimationState;
use crate::app::input::InputEvent;
use crate::app::timer::TickTimer;
use crate::renderer::camera::{CameraController, CameraState};

/// Everything the input handlers mutate and the frame builder reads.
pub struct SceneState {
    pub camera: CameraController,
    pub animation: AnimationState,
}

impl SceneState {
    pub fn new() -> Self {
        Self {
            camera: CameraController::new(CameraState::default()),
            animation: AnimationState::new(),
        }
    }

    /// Run the animation tick if `timer` is due and re-arm it from `now`.
    /// Returns whether a redraw should be requested.
    pub fn on_tick(&mut self, timer: &mut TickTimer, now: Instant) -> bool {
        if !timer.fire(now) {
            return false;
        }
        let repaint = self.apply(InputEvent::Tick);
        timer.arm(now);
        repaint
    }

    /// Apply one input event. Returns whether a redraw should be requested.
    pub fn apply(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Tick => {
                self.animation.advance();
                debug!("Tick: angle {}", self.animation.angle());
                true
            }
            InputEvent::Rotate(direction) => {
                self.camera.rotate_step(direction);
                true
            }
            InputEvent::ResetView => {
                self.camera.reset();
                true
            }
            InputEvent::PointerPressed(x, y) => {
                self.camera.begin_drag((x, y));
                false
            }
            InputEvent::PointerReleased => {
                debug!("Pointer released while {:?}", self.camera.drag());
                self.camera.end_drag();
                false
            }
            InputEvent::PointerMoved(x, y) => self.camera.update_drag((x, y)),
            InputEvent::Scroll(direction) => {
                self.camera.scroll(direction);
                true
            }
        }
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}
