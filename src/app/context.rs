// src/app/context.rs
//
// The context handed to every sketch callback. It lends out the loop-owned
// state (style stack, input snapshot, frame timing) and forwards window and
// drawing calls to nannou. There is no global accessor: the loop creates a
// fresh Context for each callback and the sketch borrows it.

use nannou::prelude::*;
use nannou::text::Font;
use nannou::window::Window;
use nannou_egui::egui;
use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::{Rng, SeedableRng};
use std::cell::Ref;
use std::path::Path;

use super::state::{AppState, LoopPhase};
use crate::error::EaselError;
use crate::graphics::draw::{self, ViewTransform};
use crate::graphics::{text, Color, LineCap, RectMode, TextAlign};

pub struct Context<'a> {
    pub(crate) app: &'a App,
    pub(crate) state: &'a mut AppState,
    pub(crate) draw: &'a Draw,
    pub(crate) overlay: Option<&'a egui::Context>,
}

impl<'a> Context<'a> {
    fn view(&self) -> ViewTransform {
        ViewTransform::new(self.state.width, self.state.height)
    }

    /// The live window, if the loop has one to forward to. None while the
    /// loop is Uninitialized: setup()-time mutators record only, and the
    /// runner applies the recorded values when the window is revealed.
    fn live_window(&self) -> Option<Ref<'a, Window>> {
        if self.state.phase == LoopPhase::Uninitialized {
            return None;
        }
        self.state.window_id.and_then(|id| self.app.window(id))
    }

    // =======================================
    // =====       Published fields    =======
    // =======================================

    /// Current window width in pixels.
    pub fn width(&self) -> u32 {
        self.state.width
    }

    /// Current window height in pixels.
    pub fn height(&self) -> u32 {
        self.state.height
    }

    /// Pixel width of the primary monitor.
    pub fn display_width(&self) -> u32 {
        self.state.display_width
    }

    /// Pixel height of the primary monitor.
    pub fn display_height(&self) -> u32 {
        self.state.display_height
    }

    pub fn title(&self) -> &str {
        &self.state.title
    }

    pub fn focused(&self) -> bool {
        self.state.focused
    }

    /// Frames completed since the sketch started. 0 during the first frame.
    pub fn frame_count(&self) -> u64 {
        self.state.frame_count
    }

    /// Seconds elapsed between the previous frame and this one.
    pub fn frame_time(&self) -> f32 {
        self.state.frame_time
    }

    /// Frames per second, derived from the last frame delta.
    pub fn frame_rate(&self) -> f32 {
        self.state.frame_rate
    }

    pub fn mouse_x(&self) -> f32 {
        self.state.mouse_x
    }

    pub fn mouse_y(&self) -> f32 {
        self.state.mouse_y
    }

    /// Mouse position of the previous frame.
    pub fn pmouse_x(&self) -> f32 {
        self.state.pmouse_x
    }

    pub fn pmouse_y(&self) -> f32 {
        self.state.pmouse_y
    }

    /// mouse_x - pmouse_x for this frame.
    pub fn dmouse_x(&self) -> f32 {
        self.state.dmouse_x
    }

    pub fn dmouse_y(&self) -> f32 {
        self.state.dmouse_y
    }

    pub fn mouse_pressed(&self) -> bool {
        self.state.mouse_pressed
    }

    /// Milliseconds since the sketch started.
    pub fn millis(&self) -> u64 {
        self.state.started.elapsed().as_millis() as u64
    }

    /// Microseconds since the sketch started.
    pub fn micros(&self) -> u64 {
        self.state.started.elapsed().as_micros() as u64
    }

    /// The egui overlay context. Available during update() only.
    pub fn overlay(&self) -> Option<&egui::Context> {
        self.overlay
    }

    // =======================================
    // =====         Window API        =======
    // =======================================

    /// Resize the window. Inside setup() this records the requested size,
    /// applied when the window is revealed.
    pub fn size(&mut self, width: u32, height: u32) {
        self.state.width = width;
        self.state.height = height;
        if let Some(window) = self.live_window() {
            window.set_inner_size_points(width as f32, height as f32);
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.state.title = title.into();
        if let Some(window) = self.live_window() {
            window.winit_window().set_title(&self.state.title);
        }
    }

    /// Cap the frame rate. The loop sleeps off any unused frame budget.
    pub fn set_frame_rate(&mut self, fps: f32) {
        self.state.frame_rate_cap = fps;
    }

    /// Switch to fullscreen, remembering the current size for
    /// exit_fullscreen().
    pub fn fullscreen(&mut self) {
        self.state.restore_size = (self.state.width, self.state.height);
        self.state.is_fullscreen = true;
        if let Some(window) = self.live_window() {
            window.set_fullscreen(true);
        }
    }

    /// Leave fullscreen and restore the pre-fullscreen window size.
    pub fn exit_fullscreen(&mut self) {
        self.state.is_fullscreen = false;
        let (w, h) = self.state.restore_size;
        if let Some(window) = self.live_window() {
            window.set_fullscreen(false);
            window.set_inner_size_points(w as f32, h as f32);
        }
        self.state.width = w;
        self.state.height = h;
    }

    /// Stop the application. cleanup() still runs on the way out.
    pub fn close(&mut self) {
        self.state.request_close(true);
        self.app.quit();
    }

    /// Ask the OS to give the window input focus. Not guaranteed immediate;
    /// the window manager has the final word.
    pub fn focus(&self) {
        if let Some(window) = self.live_window() {
            window.winit_window().focus_window();
        }
    }

    /// Request a dark (or light) title bar; reconciled at the start of the
    /// next frame.
    pub fn set_dark_title_bar(&mut self, enabled: bool) {
        self.state.dark_title_bar = enabled;
    }

    // =======================================
    // =====        Graphics API       =======
    // =======================================

    /// Paint the whole frame with one color, covering anything drawn so far.
    pub fn background(&mut self, color: impl Into<Color>) {
        self.draw.background().color(color.into().to_rgba8());
    }

    /// Set the infill color for primitives.
    pub fn fill(&mut self, color: impl Into<Color>) {
        self.state.styles.current_mut().fill = color.into();
    }

    /// Disable the infill for primitives.
    pub fn no_fill(&mut self) {
        self.state.styles.current_mut().fill = Color::TRANSPARENT;
    }

    /// Set the outline color for primitives.
    pub fn stroke(&mut self, color: impl Into<Color>) {
        self.state.styles.current_mut().stroke = color.into();
    }

    /// Disable the outline for primitives.
    pub fn no_stroke(&mut self) {
        self.state.styles.current_mut().stroke = Color::TRANSPARENT;
    }

    /// Outline thickness in pixels.
    pub fn stroke_weight(&mut self, weight: f32) {
        self.state.styles.current_mut().stroke_weight = weight;
    }

    pub fn line_cap(&mut self, cap: LineCap) {
        self.state.styles.current_mut().line_cap = cap;
    }

    pub fn rect_mode(&mut self, mode: RectMode) {
        self.state.styles.current_mut().rect_mode = mode;
    }

    pub fn text_align(&mut self, align: TextAlign) {
        self.state.styles.current_mut().text_align = align;
    }

    pub fn text_size(&mut self, size: u32) {
        self.state.styles.current_mut().font_size = size;
    }

    pub fn text_font(&mut self, font: Font) {
        self.state.styles.current_mut().font = font;
    }

    /// Save the current draw style; restore it with pop().
    pub fn push(&mut self) {
        self.state.styles.push();
    }

    /// Restore the style saved by the matching push(). Panics when there is
    /// nothing to pop.
    pub fn pop(&mut self) {
        self.state.styles.pop();
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        draw::draw_line(
            self.draw,
            &self.view(),
            self.state.styles.current(),
            (x1, y1),
            (x2, y2),
        );
    }

    /// Draw a rectangle; how (x, y, w, h) are interpreted depends on the
    /// current rect mode.
    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        draw::draw_rect(self.draw, &self.view(), self.state.styles.current(), x, y, w, h);
    }

    pub fn circle(&mut self, x: f32, y: f32, radius: f32) {
        draw::draw_circle(self.draw, &self.view(), self.state.styles.current(), x, y, radius);
    }

    pub fn ellipse(&mut self, x: f32, y: f32, w: f32, h: f32) {
        draw::draw_ellipse(self.draw, &self.view(), self.state.styles.current(), x, y, w, h);
    }

    pub fn triangle(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) {
        draw::draw_triangle(
            self.draw,
            &self.view(),
            self.state.styles.current(),
            (x1, y1),
            (x2, y2),
            (x3, y3),
        );
    }

    /// Draw an arrow for the vector (vx, vy) anchored at (ox, oy). A zero
    /// vector draws nothing.
    pub fn vector(&mut self, vx: f32, vy: f32, ox: f32, oy: f32) {
        draw::draw_vector(self.draw, &self.view(), self.state.styles.current(), vx, vy, ox, oy);
    }

    /// Draw text at (x, y) with the current font, size and alignment.
    pub fn text(&mut self, text: &str, x: f32, y: f32) {
        text::draw_text(self.draw, &self.view(), self.state.styles.current(), text, x, y);
    }

    /// Width of `text` in pixels under the current font and size.
    pub fn text_width(&self, text: &str) -> f32 {
        let style = self.state.styles.current();
        text::measure_width(&style.font, style.font_size, text)
    }

    /// Load a font from disk for use with text_font().
    pub fn load_font<P: AsRef<Path>>(&self, path: P) -> Result<Font, EaselError> {
        text::load_font(path)
    }

    // =======================================
    // =====          Random API       =======
    // =======================================

    /// A uniformly random f32 in [0, 1).
    pub fn random(&mut self) -> f32 {
        self.state.rng.gen()
    }

    /// A uniformly random value from the given range.
    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.state.rng.gen_range(range)
    }

    /// Reseed the generator for a reproducible sequence.
    pub fn random_seed(&mut self, seed: u64) {
        self.state.rng = rand::rngs::StdRng::seed_from_u64(seed);
    }
}
