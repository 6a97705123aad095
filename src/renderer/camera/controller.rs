use log::debug;

use super::CameraState;

/// Degrees turned per arrow key press.
pub const KEY_ROTATION_STEP: f32 = 5.0;
/// Zoom change per scroll notch.
pub const SCROLL_ZOOM_STEP: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateDirection {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Towards the scene.
    Up,
    /// Away from the scene.
    Down,
}

/// Pointer gesture state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    /// `anchor` is the last sampled pointer position.
    Dragging { anchor: (f64, f64) },
}

/// Applies keyboard, pointer and wheel input to the camera.
pub struct CameraController {
    state: CameraState,
    drag: DragState,
}

impl CameraController {
    pub fn new(state: CameraState) -> Self {
        Self {
            state,
            drag: DragState::Idle,
        }
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    /// Primary button went down at `position`.
    pub fn begin_drag(&mut self, position: (f64, f64)) {
        self.drag = DragState::Dragging { anchor: position };
    }

    /// Rotate by the pointer movement since the last sample, then re-anchor.
    /// Returns whether the camera changed.
    pub fn update_drag(&mut self, position: (f64, f64)) -> bool {
        let DragState::Dragging { anchor } = self.drag else {
            return false;
        };
        let delta_x = position.0 - anchor.0;
        let delta_y = position.1 - anchor.1;
        self.state.rotate(delta_x as f32, delta_y as f32);
        self.drag = DragState::Dragging { anchor: position };
        true
    }

    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    pub fn rotate_step(&mut self, direction: RotateDirection) {
        let (dx, dy) = match direction {
            RotateDirection::Up => (0.0, -KEY_ROTATION_STEP),
            RotateDirection::Down => (0.0, KEY_ROTATION_STEP),
            RotateDirection::Left => (-KEY_ROTATION_STEP, 0.0),
            RotateDirection::Right => (KEY_ROTATION_STEP, 0.0),
        };
        self.state.rotate(dx, dy);
        let (x, y) = self.state.get_orientation();
        debug!("Camera rotated {direction:?}: x={x} y={y}");
    }

    pub fn scroll(&mut self, direction: ScrollDirection) {
        match direction {
            ScrollDirection::Up => self.state.zoom_by(-SCROLL_ZOOM_STEP),
            ScrollDirection::Down => self.state.zoom_by(SCROLL_ZOOM_STEP),
        }
        debug!("Camera zoom: {}", self.state.zoom);
    }

    /// Reset camera to defaults. An active drag keeps its anchor.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(CameraState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_uses_incremental_deltas() {
        let mut controller = CameraController::default();
        controller.begin_drag((10.0, 10.0));
        assert!(controller.update_drag((15.0, 12.0)));
        assert!(controller.update_drag((20.0, 8.0)));

        let state = controller.state();
        assert_eq!(state.rotation_y, 10.0);
        assert_eq!(state.rotation_x, -2.0);
        assert_eq!(controller.drag(), DragState::Dragging { anchor: (20.0, 8.0) });
    }

    #[test]
    fn motion_while_idle_is_ignored() {
        let mut controller = CameraController::default();
        assert!(!controller.update_drag((50.0, 50.0)));
        assert_eq!(controller.state(), &CameraState::default());
    }

    #[test]
    fn release_returns_to_idle() {
        let mut controller = CameraController::default();
        controller.begin_drag((0.0, 0.0));
        assert!(matches!(controller.drag(), DragState::Dragging { .. }));
        controller.end_drag();
        assert_eq!(controller.drag(), DragState::Idle);
        assert!(!controller.update_drag((30.0, 30.0)));
        assert_eq!(controller.state().get_orientation(), (0.0, 0.0));
    }

    #[test]
    fn new_press_re_anchors() {
        let mut controller = CameraController::default();
        controller.begin_drag((0.0, 0.0));
        controller.update_drag((4.0, 0.0));
        controller.begin_drag((100.0, 100.0));
        controller.update_drag((101.0, 100.0));
        assert_eq!(controller.state().rotation_y, 5.0);
    }

    #[test]
    fn arrow_steps() {
        let mut controller = CameraController::default();
        controller.rotate_step(RotateDirection::Up);
        assert_eq!(controller.state().get_orientation(), (-5.0, 0.0));
        controller.rotate_step(RotateDirection::Down);
        controller.rotate_step(RotateDirection::Down);
        assert_eq!(controller.state().get_orientation(), (5.0, 0.0));
        controller.rotate_step(RotateDirection::Left);
        assert_eq!(controller.state().get_orientation(), (5.0, -5.0));
        controller.rotate_step(RotateDirection::Right);
        controller.rotate_step(RotateDirection::Right);
        assert_eq!(controller.state().get_orientation(), (5.0, 5.0));
    }

    #[test]
    fn scroll_up_is_clamped_and_down_is_not() {
        let mut controller = CameraController::default();
        for _ in 0..20 {
            controller.scroll(ScrollDirection::Up);
        }
        assert_eq!(controller.state().zoom, 1.0);
        for _ in 0..30 {
            controller.scroll(ScrollDirection::Down);
        }
        assert_eq!(controller.state().zoom, 31.0);
    }

    #[test]
    fn reset_after_any_input() {
        let mut controller = CameraController::default();
        controller.rotate_step(RotateDirection::Left);
        controller.scroll(ScrollDirection::Down);
        controller.begin_drag((1.0, 1.0));
        controller.update_drag((40.0, -3.0));
        controller.reset();
        controller.reset();
        assert_eq!(controller.state(), &CameraState::new(10.0, 0.0, 0.0));
    }
}
