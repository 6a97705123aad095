use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

pub const CONFY_APP_NAME: &str = "solarvis-rs";

/// Presentation parameters of the window and GPU backend.
///
/// Scene contents (catalog, camera defaults, step sizes) are compiled in and
/// are not part of this file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub window_width: u32,
    pub window_height: u32,
    pub clear_color: [f32; 3],
    pub tick_interval_ms: u64,
    /// Vertical field of view in degrees.
    pub field_of_view: f32,
    pub near_plane: f32,
    pub far_plane: f32,
    pub sphere_slices: u32,
    pub sphere_stacks: u32,
    pub label_font_size: f32,
    /// Move bodies along their orbits using the animation angle.
    pub animate_orbits: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            window_width: 400,
            window_height: 400,
            clear_color: [0.0, 0.0, 0.0],
            tick_interval_ms: 50,
            field_of_view: 60.0,
            near_plane: 1.0,
            far_plane: 20.0,
            sphere_slices: 20,
            sphere_stacks: 16,
            label_font_size: 12.0,
            animate_orbits: false,
        }
    }
}

impl DisplaySettings {
    pub fn load() -> Self {
        match confy::load::<DisplaySettings>(CONFY_APP_NAME, "display") {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                warn!("Failed to load display settings, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Replace values the renderer cannot work with by their defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if self.window_width == 0 || self.window_height == 0 {
            self.window_width = defaults.window_width;
            self.window_height = defaults.window_height;
        }
        if self.tick_interval_ms == 0 {
            self.tick_interval_ms = defaults.tick_interval_ms;
        }
        if !(self.field_of_view > 0.0 && self.field_of_view < 180.0) {
            self.field_of_view = defaults.field_of_view;
        }
        if !(self.near_plane > 0.0 && self.far_plane > self.near_plane) {
            self.near_plane = defaults.near_plane;
            self.far_plane = defaults.far_plane;
        }
        if self.sphere_slices < 3 {
            self.sphere_slices = defaults.sphere_slices;
        }
        if self.sphere_stacks < 2 {
            self.sphere_stacks = defaults.sphere_stacks;
        }
        if !(self.label_font_size > 0.0) {
            self.label_font_size = defaults.label_font_size;
        }
        for channel in &mut self.clear_color {
            *channel = channel.clamp(0.0, 1.0);
        }

        self
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_window() {
        let s = DisplaySettings::default();
        assert_eq!((s.window_width, s.window_height), (400, 400));
        assert_eq!(s.tick_interval(), Duration::from_millis(50));
        assert_eq!(s.field_of_view, 60.0);
        assert_eq!((s.near_plane, s.far_plane), (1.0, 20.0));
        assert_eq!((s.sphere_slices, s.sphere_stacks), (20, 16));
        assert!(!s.animate_orbits);
    }

    #[test]
    fn sanitized_keeps_valid_values() {
        let s = DisplaySettings {
            far_plane: 50.0,
            animate_orbits: true,
            ..DisplaySettings::default()
        };
        assert_eq!(s.clone().sanitized(), s);
    }

    #[test]
    fn sanitized_repairs_invalid_values() {
        let s = DisplaySettings {
            window_width: 0,
            tick_interval_ms: 0,
            field_of_view: 190.0,
            near_plane: 5.0,
            far_plane: 2.0,
            sphere_slices: 1,
            sphere_stacks: 0,
            label_font_size: -3.0,
            clear_color: [2.0, -1.0, 0.5],
            ..DisplaySettings::default()
        }
        .sanitized();

        let d = DisplaySettings::default();
        assert_eq!(s.window_width, d.window_width);
        assert_eq!(s.tick_interval_ms, d.tick_interval_ms);
        assert_eq!(s.field_of_view, d.field_of_view);
        assert_eq!((s.near_plane, s.far_plane), (d.near_plane, d.far_plane));
        assert_eq!(s.sphere_slices, d.sphere_slices);
        assert_eq!(s.sphere_stacks, d.sphere_stacks);
        assert_eq!(s.label_font_size, d.label_font_size);
        assert_eq!(s.clear_color, [1.0, 0.0, 0.5]);
    }

    #[test]
    fn nan_field_of_view_falls_back() {
        let s = DisplaySettings {
            field_of_view: f32::NAN,
            ..DisplaySettings::default()
        }
        .sanitized();
        assert_eq!(s.field_of_view, 60.0);
    }
}
