// src/app/state.rs
//
// All per-run mutable state owned by the loop: window metrics, the input
// snapshot, frame timing, the style stack and the loop phase. The runner
// lends this out to user code through Context; nothing here touches the
// window itself.

use nannou::window::Id as WindowId;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

use crate::config::Settings;
use crate::graphics::StyleStack;

/// Where the loop currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    Uninitialized,
    Running,
    Closing,
    Terminated,
}

/// A frame-rate delta below this is treated as "no time passed" and the
/// previous rate is retained instead of dividing by (nearly) zero.
const MIN_FRAME_DELTA: f32 = 1e-6;

pub struct AppState {
    // Window. The id is refreshed whenever the window is (re)created; the
    // loop never asks nannou which window is "main".
    pub(crate) window_id: Option<WindowId>,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) display_width: u32,
    pub(crate) display_height: u32,
    pub(crate) title: String,
    pub(crate) focused: bool,
    pub(crate) restore_size: (u32, u32),
    pub(crate) is_fullscreen: bool,
    pub(crate) dark_title_bar: bool,
    pub(crate) dark_title_bar_applied: bool,
    pub(crate) dark_title_bar_unsupported: bool,

    // Input snapshot
    pub(crate) mouse_x: f32,
    pub(crate) mouse_y: f32,
    pub(crate) pmouse_x: f32,
    pub(crate) pmouse_y: f32,
    pub(crate) dmouse_x: f32,
    pub(crate) dmouse_y: f32,
    pub(crate) mouse_pressed: bool,

    // Timing
    pub(crate) frame_count: u64,
    pub(crate) frame_time: f32,
    pub(crate) frame_rate: f32,
    pub(crate) frame_rate_cap: f32,
    pub(crate) started: Instant,

    // Loop
    pub(crate) phase: LoopPhase,
    pub(crate) styles: StyleStack,
    pub(crate) rng: StdRng,
}

impl AppState {
    pub(crate) fn new(settings: &Settings, styles: StyleStack) -> Self {
        Self {
            window_id: None,
            width: settings.window.width,
            height: settings.window.height,
            display_width: 0,
            display_height: 0,
            title: settings.window.title.clone(),
            focused: true,
            restore_size: (settings.window.width, settings.window.height),
            is_fullscreen: false,
            dark_title_bar: settings.window.dark_title_bar,
            dark_title_bar_applied: false,
            dark_title_bar_unsupported: false,

            mouse_x: 0.0,
            mouse_y: 0.0,
            pmouse_x: 0.0,
            pmouse_y: 0.0,
            dmouse_x: 0.0,
            dmouse_y: 0.0,
            mouse_pressed: false,

            frame_count: 0,
            frame_time: 0.0,
            frame_rate: 0.0,
            frame_rate_cap: settings.run_loop.frame_rate,
            started: Instant::now(),

            phase: LoopPhase::Uninitialized,
            styles,
            rng: StdRng::from_entropy(),
        }
    }

    /// Record frame timing for the iteration that is about to run. A zero
    /// (or sub-microsecond) delta keeps the previous frame rate instead of
    /// producing infinity.
    pub(crate) fn begin_frame(&mut self, delta_seconds: f32) {
        self.frame_time = delta_seconds;
        if delta_seconds >= MIN_FRAME_DELTA {
            self.frame_rate = 1.0 / delta_seconds;
        }
    }

    /// Rotate the mouse snapshot: current becomes previous, then the new
    /// position and the per-frame delta are recorded.
    pub(crate) fn snapshot_mouse(&mut self, x: f32, y: f32) {
        self.pmouse_x = self.mouse_x;
        self.pmouse_y = self.mouse_y;
        self.mouse_x = x;
        self.mouse_y = y;
        self.dmouse_x = self.mouse_x - self.pmouse_x;
        self.dmouse_y = self.mouse_y - self.pmouse_y;
    }

    /// One completed loop iteration.
    pub(crate) fn end_frame(&mut self) {
        self.frame_count += 1;
    }

    /// A close request arrived; `allow` is the on_window_close() verdict.
    /// Returns true when the loop should actually shut down.
    pub(crate) fn request_close(&mut self, allow: bool) -> bool {
        if allow && self.phase == LoopPhase::Running {
            self.phase = LoopPhase::Closing;
        }
        allow && self.phase == LoopPhase::Closing
    }

    /// True when the dark-title-bar wish differs from what the window shows
    /// and the platform has not already declared itself unable to change it.
    pub(crate) fn title_bar_needs_reconcile(&self) -> bool {
        !self.dark_title_bar_unsupported && self.dark_title_bar != self.dark_title_bar_applied
    }

    /// Record the outcome of a title-bar reconcile attempt. A failed attempt
    /// marks the platform unsupported; `applied` never silently tracks the
    /// wish.
    pub(crate) fn title_bar_reconciled(&mut self, applied: bool) {
        if applied {
            self.dark_title_bar_applied = self.dark_title_bar;
        } else {
            self.dark_title_bar_unsupported = true;
        }
    }

    pub(crate) fn mark_running(&mut self) {
        self.phase = LoopPhase::Running;
    }

    pub(crate) fn mark_terminated(&mut self) {
        self.phase = LoopPhase::Terminated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::text::default_font;

    fn state() -> AppState {
        let settings = Settings::default();
        AppState::new(&settings, StyleStack::new(default_font()))
    }

    #[test]
    fn frame_counter_starts_at_zero_and_counts_iterations() {
        let mut state = state();
        assert_eq!(state.frame_count, 0);
        for expected in 1..=5 {
            state.begin_frame(1.0 / 60.0);
            state.end_frame();
            assert_eq!(state.frame_count, expected);
        }
    }

    #[test]
    fn frame_rate_is_reciprocal_of_delta() {
        let mut state = state();
        state.begin_frame(0.02);
        assert!((state.frame_rate - 50.0).abs() < 1e-3);
        assert_eq!(state.frame_time, 0.02);
    }

    #[test]
    fn zero_delta_retains_previous_frame_rate() {
        let mut state = state();
        state.begin_frame(0.01);
        assert!((state.frame_rate - 100.0).abs() < 1e-3);
        state.begin_frame(0.0);
        assert!((state.frame_rate - 100.0).abs() < 1e-3);
        assert!(state.frame_rate.is_finite());
        assert_eq!(state.frame_time, 0.0);
    }

    #[test]
    fn mouse_snapshot_maintains_delta_law() {
        let mut state = state();
        let positions = [(10.0, 20.0), (15.0, 18.0), (15.0, 18.0), (-3.0, 40.0)];
        for (x, y) in positions {
            let (prev_x, prev_y) = (state.mouse_x, state.mouse_y);
            state.snapshot_mouse(x, y);
            assert_eq!(state.pmouse_x, prev_x);
            assert_eq!(state.pmouse_y, prev_y);
            assert_eq!(state.dmouse_x, state.mouse_x - state.pmouse_x);
            assert_eq!(state.dmouse_y, state.mouse_y - state.pmouse_y);
        }
    }

    #[test]
    fn denied_close_request_keeps_running() {
        let mut state = state();
        state.mark_running();
        assert!(!state.request_close(false));
        assert_eq!(state.phase, LoopPhase::Running);
    }

    #[test]
    fn allowed_close_request_transitions_to_closing_then_terminated() {
        let mut state = state();
        state.mark_running();
        assert!(state.request_close(true));
        assert_eq!(state.phase, LoopPhase::Closing);
        state.mark_terminated();
        assert_eq!(state.phase, LoopPhase::Terminated);
    }

    #[test]
    fn refused_close_leaves_state_ready_for_a_later_request() {
        let mut state = state();
        state.mark_running();
        // First request refused: still Running, window state intact for a
        // rebuild, and a later allowed request still goes through.
        assert!(!state.request_close(false));
        assert_eq!(state.phase, LoopPhase::Running);
        assert_eq!((state.width, state.height), (800, 600));
        assert!(state.request_close(true));
        assert_eq!(state.phase, LoopPhase::Closing);
    }

    #[test]
    fn title_bar_reconcile_flag() {
        let mut state = state();
        assert!(!state.title_bar_needs_reconcile());
        state.dark_title_bar = true;
        assert!(state.title_bar_needs_reconcile());
        state.title_bar_reconciled(true);
        assert!(state.dark_title_bar_applied);
        assert!(!state.title_bar_needs_reconcile());
    }

    #[test]
    fn title_bar_failure_marks_unsupported_instead_of_applied() {
        let mut state = state();
        state.dark_title_bar = true;
        assert!(state.title_bar_needs_reconcile());
        state.title_bar_reconciled(false);
        assert!(!state.dark_title_bar_applied);
        assert!(state.dark_title_bar_unsupported);
        // An unsupported platform stops reporting a pending wish.
        assert!(!state.title_bar_needs_reconcile());
    }
}
