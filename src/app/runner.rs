// src/app/runner.rs
//
// The single event loop. nannou owns the OS loop; this module wires the
// Uninitialized → Running → Closing → Terminated lifecycle around it:
// startup in model(), one iteration per Update, hook dispatch in event(),
// cleanup in exit().

use nannou::prelude::*;
use nannou::window::Id as WindowId;
use nannou_egui::Egui;
use std::path::Path;
use std::time::{Duration, Instant};

use super::context::Context;
use super::platform;
use super::sketch::Sketch;
use super::state::{AppState, LoopPhase};
use crate::graphics::draw::ViewTransform;
use crate::graphics::text;
use crate::graphics::{Color, StyleStack};
use crate::utilities::output;

/// Frame clear color when the sketch does not call background().
const DEFAULT_BACKGROUND: Color = Color::rgb(60, 60, 60);

pub(crate) struct Model<S: Sketch> {
    sketch: S,
    state: AppState,
    draw: Draw,
    egui: Egui,
}

/// Run a sketch to completion. This blocks for the lifetime of the window
/// and is the only entry point; one sketch per process.
pub fn run<S>()
where
    S: Sketch + Default,
{
    output::init_logging();
    nannou::app(model::<S>)
        .update(update::<S>)
        .event(event::<S>)
        .exit(exit::<S>)
        .run();
}

// =======================================
// =====          Startup          =======
// =======================================

fn model<S>(app: &App) -> Model<S>
where
    S: Sketch + Default,
{
    let settings = S::settings();
    tracing::info!(
        width = settings.window.width,
        height = settings.window.height,
        "starting sketch"
    );

    // Font failures are fatal; the sketch asked for this font by name.
    let default_font = match &settings.run_loop.font {
        Some(path) => text::load_font(path).expect("failed to load the configured font"),
        None => text::default_font(),
    };

    let mut state = AppState::new(&settings, StyleStack::new(default_font));
    let draw = Draw::new();
    let mut sketch = S::default();

    // The window is created hidden before setup() so the display metrics
    // can be probed and read inside setup(); it is shown only once the
    // setup-requested size and title have been applied.
    let window_id = create_window::<S>(app, &state, false);
    state.window_id = Some(window_id);
    {
        let window = app.window(window_id).expect("window vanished during startup");
        if let Some(monitor) = window.winit_window().primary_monitor() {
            state.display_width = monitor.size().width;
            state.display_height = monitor.size().height;
        }
    }

    // setup() runs while the loop is still Uninitialized; size() and
    // set_title() only record the requested values here.
    {
        let mut ctx = Context {
            app,
            state: &mut state,
            draw: &draw,
            overlay: None,
        };
        sketch.setup(&mut ctx);
    }

    let window = app.window(window_id).expect("window vanished during startup");
    window.set_inner_size_points(state.width as f32, state.height as f32);
    window.winit_window().set_title(&state.title);
    reconcile_title_bar(&window, &mut state);

    // A missing or broken icon is not worth dying over.
    if let Some(icon_path) = &settings.window.icon {
        if let Some(icon) = load_window_icon(icon_path) {
            window.winit_window().set_window_icon(Some(icon));
        }
    }

    // The immediate-mode overlay; failure here would panic, which is the
    // intended fatal-at-startup behavior.
    let egui = Egui::from_window(&window);
    window.winit_window().set_visible(true);

    state.mark_running();

    Model {
        sketch,
        state,
        draw,
        egui,
    }
}

fn create_window<S: Sketch>(app: &App, state: &AppState, visible: bool) -> WindowId {
    app.new_window()
        .title(state.title.clone())
        .size(state.width, state.height)
        .visible(visible)
        .view(view::<S>)
        .raw_event(raw_window_event::<S>)
        .build()
        .expect("failed to create the sketch window")
}

fn reconcile_title_bar(window: &nannou::window::Window, state: &mut AppState) {
    if state.title_bar_needs_reconcile() {
        let applied = platform::apply_dark_title_bar(window, state.dark_title_bar);
        state.title_bar_reconciled(applied);
    }
}

fn load_window_icon(path: &Path) -> Option<nannou::winit::window::Icon> {
    let image = match nannou::image::open(path) {
        Ok(image) => image,
        Err(e) => {
            tracing::warn!("skipping window icon {path:?}: {e}");
            return None;
        }
    };
    let rgba = image.into_rgba8();
    let (w, h) = rgba.dimensions();
    match nannou::winit::window::Icon::from_rgba(rgba.into_raw(), w, h) {
        Ok(icon) => Some(icon),
        Err(e) => {
            tracing::warn!("skipping window icon {path:?}: {e}");
            None
        }
    }
}

// =======================================
// =====        Frame update       =======
// =======================================

fn update<S: Sketch>(app: &App, model: &mut Model<S>, update: Update) {
    let frame_start = Instant::now();
    let Model {
        sketch,
        state,
        draw,
        egui,
    } = model;

    if let Some(window) = state.window_id.and_then(|id| app.window(id)) {
        reconcile_title_bar(&window, state);
        if let Some(monitor) = window.winit_window().primary_monitor() {
            state.display_width = monitor.size().width;
            state.display_height = monitor.size().height;
        }
    }

    state.begin_frame(update.since_last.as_secs_f32());

    let view = ViewTransform::new(state.width, state.height);
    let (mouse_x, mouse_y) = view.to_sketch(pt2(app.mouse.x, app.mouse.y));
    state.snapshot_mouse(mouse_x, mouse_y);

    // Fresh frame: clear to the default background and reset the style
    // stack to the fixed default before the user callback.
    draw.reset();
    draw.background().color(DEFAULT_BACKGROUND.to_rgba8());
    state.styles.reset();

    egui.set_elapsed_time(update.since_start);
    let frame_ctx = egui.begin_frame();
    let gui = (*frame_ctx).clone();
    {
        let mut ctx = Context {
            app,
            state: &mut *state,
            draw: &*draw,
            overlay: Some(&gui),
        };
        sketch.update(&mut ctx);
    }
    drop(frame_ctx);

    state.end_frame();

    // Sleep off whatever is left of this frame's budget.
    if state.frame_rate_cap > 0.0 {
        let budget = Duration::from_secs_f32(1.0 / state.frame_rate_cap);
        let spent = frame_start.elapsed();
        if spent < budget {
            std::thread::sleep(budget - spent);
        }
    }
}

// Present the recorded frame, overlay on top.
fn view<S: Sketch>(app: &App, model: &Model<S>, frame: Frame) {
    model
        .draw
        .to_frame(app, &frame)
        .expect("failed to render the frame");
    model
        .egui
        .draw_to_frame(&frame)
        .expect("failed to render the overlay");
}

fn raw_window_event<S: Sketch>(
    _app: &App,
    model: &mut Model<S>,
    event: &nannou::winit::event::WindowEvent,
) {
    model.egui.handle_raw_event(event);
}

// =======================================
// =====       Event dispatch      =======
// =======================================

fn event<S: Sketch>(app: &App, model: &mut Model<S>, event: Event) {
    let Event::WindowEvent {
        simple: Some(event),
        ..
    } = event
    else {
        return;
    };

    let Model {
        sketch,
        state,
        draw,
        egui,
    } = model;
    let view = ViewTransform::new(state.width, state.height);
    let mut ctx = Context {
        app,
        state: &mut *state,
        draw: &*draw,
        overlay: None,
    };

    match event {
        WindowEvent::ReceivedCharacter(c) => sketch.on_text_input(&mut ctx, c),
        WindowEvent::KeyPressed(key) => sketch.on_key_pressed(&mut ctx, key),
        WindowEvent::KeyReleased(key) => sketch.on_key_released(&mut ctx, key),
        WindowEvent::MousePressed(button) => {
            ctx.state.mouse_pressed = true;
            sketch.on_mouse_pressed(&mut ctx, button);
        }
        WindowEvent::MouseReleased(button) => {
            ctx.state.mouse_pressed = false;
            sketch.on_mouse_released(&mut ctx, button);
        }
        WindowEvent::MouseMoved(position) => {
            let (x, y) = view.to_sketch(position);
            sketch.on_mouse_moved(&mut ctx, x, y);
        }
        WindowEvent::MouseWheel(delta, phase) => sketch.on_mouse_wheel(&mut ctx, delta, phase),
        WindowEvent::MouseEntered => sketch.on_mouse_enter(&mut ctx),
        WindowEvent::MouseExited => sketch.on_mouse_leave(&mut ctx),
        WindowEvent::Resized(size) => {
            ctx.state.width = size.x as u32;
            ctx.state.height = size.y as u32;
            let (w, h) = (ctx.state.width, ctx.state.height);
            sketch.on_window_resize(&mut ctx, w, h);
        }
        WindowEvent::Focused => {
            ctx.state.focused = true;
            sketch.on_window_focus(&mut ctx);
        }
        WindowEvent::Unfocused => {
            ctx.state.focused = false;
            sketch.on_window_unfocus(&mut ctx);
        }
        WindowEvent::Closed => {
            let allow = sketch.on_window_close(&mut ctx);
            let shutting_down = ctx.state.request_close(allow);
            drop(ctx);
            if shutting_down {
                tracing::info!("close request accepted, shutting down");
                app.quit();
            } else {
                // nannou delivers Closed only after the window is already
                // gone, so a refused close rebuilds the window from the
                // recorded state before the next frame touches it.
                tracing::info!("close request refused, rebuilding the window");
                let window_id = create_window::<S>(app, state, true);
                state.window_id = Some(window_id);
                // The fresh window starts with the stock title bar.
                state.dark_title_bar_applied = false;
                let window = app
                    .window(window_id)
                    .expect("window vanished during rebuild");
                reconcile_title_bar(&window, state);
                *egui = Egui::from_window(&window);
            }
        }
        _ => (),
    }
}

// =======================================
// =====          Shutdown         =======
// =======================================

fn exit<S: Sketch>(app: &App, mut model: Model<S>) {
    let Model { sketch, state, draw, .. } = &mut model;
    if state.phase == LoopPhase::Running {
        state.request_close(true);
    }

    let mut ctx = Context {
        app,
        state: &mut *state,
        draw: &*draw,
        overlay: None,
    };
    sketch.cleanup(&mut ctx);

    state.mark_terminated();
    tracing::info!(frames = state.frame_count, "sketch terminated");
    // The egui overlay is released when the model drops here.
}
