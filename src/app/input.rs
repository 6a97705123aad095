use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{Key, NamedKey};

use crate::renderer::camera::{RotateDirection, ScrollDirection};

/// Scene-level input, decoupled from winit so handlers can be driven without a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Tick,
    Rotate(RotateDirection),
    ResetView,
    PointerPressed(f64, f64),
    PointerReleased,
    PointerMoved(f64, f64),
    Scroll(ScrollDirection),
}

/// Turns raw window events into [`InputEvent`]s.
///
/// Button events carry no position in winit, so the last cursor position is
/// tracked here.
#[derive(Debug, Default)]
pub struct InputTranslator {
    cursor: Option<(f64, f64)>,
}

impl InputTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return None;
                }
                key_to_input(&event.logical_key)
            }
            WindowEvent::MouseInput { state, button, .. } => self.button_to_input(*button, *state),
            WindowEvent::CursorMoved { position, .. } => {
                self.set_cursor((position.x, position.y));
                Some(InputEvent::PointerMoved(position.x, position.y))
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                None
            }
            WindowEvent::MouseWheel { delta, .. } => scroll_to_input(*delta),
            _ => None,
        }
    }

    pub fn button_to_input(&self, button: MouseButton, state: ElementState) -> Option<InputEvent> {
        if button != MouseButton::Left {
            return None;
        }
        match state {
            ElementState::Pressed => {
                let (x, y) = self.cursor?;
                Some(InputEvent::PointerPressed(x, y))
            }
            ElementState::Released => Some(InputEvent::PointerReleased),
        }
    }

    pub fn set_cursor(&mut self, position: (f64, f64)) {
        self.cursor = Some(position);
    }
}

pub fn key_to_input(key: &Key) -> Option<InputEvent> {
    match key {
        Key::Named(NamedKey::ArrowUp) => Some(InputEvent::Rotate(RotateDirection::Up)),
        Key::Named(NamedKey::ArrowDown) => Some(InputEvent::Rotate(RotateDirection::Down)),
        Key::Named(NamedKey::ArrowLeft) => Some(InputEvent::Rotate(RotateDirection::Left)),
        Key::Named(NamedKey::ArrowRight) => Some(InputEvent::Rotate(RotateDirection::Right)),
        Key::Character(c) if c.as_str() == "r" => Some(InputEvent::ResetView),
        _ => None,
    }
}

/// One zoom step per wheel event, whatever its magnitude.
pub fn scroll_to_input(delta: MouseScrollDelta) -> Option<InputEvent> {
    let y = match delta {
        MouseScrollDelta::LineDelta(_, y) => y as f64,
        MouseScrollDelta::PixelDelta(pos) => pos.y,
    };
    if y > 0.0 {
        Some(InputEvent::Scroll(ScrollDirection::Up))
    } else if y < 0.0 {
        Some(InputEvent::Scroll(ScrollDirection::Down))
    } else {
        None
    }
}

/// Keys that close the window.
pub fn is_exit_key(key: &Key) -> bool {
    *key == Key::Named(NamedKey::Escape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn arrows_map_to_rotation() {
        let cases = [
            (NamedKey::ArrowUp, RotateDirection::Up),
            (NamedKey::ArrowDown, RotateDirection::Down),
            (NamedKey::ArrowLeft, RotateDirection::Left),
            (NamedKey::ArrowRight, RotateDirection::Right),
        ];
        for (key, direction) in cases {
            assert_eq!(
                key_to_input(&Key::Named(key)),
                Some(InputEvent::Rotate(direction))
            );
        }
    }

    #[test]
    fn lowercase_r_resets() {
        assert_eq!(
            key_to_input(&Key::Character("r".into())),
            Some(InputEvent::ResetView)
        );
        assert_eq!(key_to_input(&Key::Character("R".into())), None);
        assert_eq!(key_to_input(&Key::Character("x".into())), None);
        assert_eq!(key_to_input(&Key::Named(NamedKey::Enter)), None);
    }

    #[test]
    fn escape_exits() {
        assert!(is_exit_key(&Key::Named(NamedKey::Escape)));
        assert!(!is_exit_key(&Key::Character("r".into())));
    }

    #[test]
    fn wheel_direction() {
        assert_eq!(
            scroll_to_input(MouseScrollDelta::LineDelta(0.0, 3.0)),
            Some(InputEvent::Scroll(ScrollDirection::Up))
        );
        assert_eq!(
            scroll_to_input(MouseScrollDelta::LineDelta(0.0, -1.0)),
            Some(InputEvent::Scroll(ScrollDirection::Down))
        );
        assert_eq!(
            scroll_to_input(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -12.5))),
            Some(InputEvent::Scroll(ScrollDirection::Down))
        );
        assert_eq!(scroll_to_input(MouseScrollDelta::LineDelta(2.0, 0.0)), None);
    }

    #[test]
    fn press_needs_a_known_cursor() {
        let mut translator = InputTranslator::new();
        assert_eq!(
            translator.button_to_input(MouseButton::Left, ElementState::Pressed),
            None
        );
        translator.set_cursor((12.0, 34.0));
        assert_eq!(
            translator.button_to_input(MouseButton::Left, ElementState::Pressed),
            Some(InputEvent::PointerPressed(12.0, 34.0))
        );
        assert_eq!(
            translator.button_to_input(MouseButton::Left, ElementState::Released),
            Some(InputEvent::PointerReleased)
        );
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut translator = InputTranslator::new();
        translator.set_cursor((1.0, 1.0));
        assert_eq!(
            translator.button_to_input(MouseButton::Right, ElementState::Pressed),
            None
        );
        assert_eq!(
            translator.button_to_input(MouseButton::Middle, ElementState::Released),
            None
        );
    }
}
