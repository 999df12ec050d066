// src/app/sketch.rs
//
// The capability interface a sketch implements. Every hook has a no-op
// default; only update() is mandatory. The loop holds the sketch as a plain
// generic value and calls these with a fresh Context each time.

use nannou::event::{Key, MouseButton, MouseScrollDelta, TouchPhase};

use super::context::Context;
use crate::config::Settings;

pub trait Sketch: 'static {
    /// Construction-time configuration. The default reads `easel.toml` when
    /// one is present and falls back to the built-in defaults.
    fn settings() -> Settings
    where
        Self: Sized,
    {
        Settings::load().unwrap_or_else(|e| {
            tracing::warn!("ignoring unreadable settings file: {e}");
            Settings::default()
        })
    }

    /// Called once before the window exists. size() and set_title() here
    /// change the requested window dimensions.
    fn setup(&mut self, _ctx: &mut Context) {}

    /// Called once per frame. All drawing happens here.
    fn update(&mut self, ctx: &mut Context);

    /// Called once when the application shuts down.
    fn cleanup(&mut self, _ctx: &mut Context) {}

    /// Intercepts the window close request. Return false to keep running.
    fn on_window_close(&mut self, _ctx: &mut Context) -> bool {
        true
    }

    /// A character was typed. For key bindings use on_key_pressed() instead.
    fn on_text_input(&mut self, _ctx: &mut Context, _character: char) {}

    fn on_key_pressed(&mut self, _ctx: &mut Context, _key: Key) {}

    fn on_key_released(&mut self, _ctx: &mut Context, _key: Key) {}

    fn on_mouse_pressed(&mut self, _ctx: &mut Context, _button: MouseButton) {}

    fn on_mouse_released(&mut self, _ctx: &mut Context, _button: MouseButton) {}

    /// The mouse moved to (x, y) in sketch coordinates.
    fn on_mouse_moved(&mut self, _ctx: &mut Context, _x: f32, _y: f32) {}

    fn on_mouse_wheel(&mut self, _ctx: &mut Context, _delta: MouseScrollDelta, _phase: TouchPhase) {}

    fn on_mouse_enter(&mut self, _ctx: &mut Context) {}

    fn on_mouse_leave(&mut self, _ctx: &mut Context) {}

    /// The window was resized; width/height state is already updated.
    fn on_window_resize(&mut self, _ctx: &mut Context, _width: u32, _height: u32) {}

    fn on_window_focus(&mut self, _ctx: &mut Context) {}

    fn on_window_unfocus(&mut self, _ctx: &mut Context) {}
}
