// src/main.rs
// Demo sketch exercising the easel surface: primitives, the style stack,
// input hooks and the egui overlay. Run with `cargo run`.

use easel::{egui, Color, Context, Key, MouseButton, RectMode, Sketch, TextAlign};

#[derive(Default)]
struct SimpleSketch {
    show_overlay: bool,
    trail: Vec<(f32, f32)>,
    close_armed: bool,
}

impl Sketch for SimpleSketch {
    fn setup(&mut self, ctx: &mut Context) {
        // easel.toml already requests this; calling size() here keeps the
        // sketch self-contained when the file is missing.
        ctx.size(1024, 768);
        ctx.set_title("easel: simple sketch");
        self.show_overlay = true;
    }

    fn update(&mut self, ctx: &mut Context) {
        ctx.background(Color::gray(30));

        // A rectangle pinned at (100, 100) stretching to the mouse.
        ctx.push();
        ctx.rect_mode(RectMode::Corners);
        ctx.fill((90, 120, 200));
        ctx.stroke(Color::WHITE);
        ctx.rect(100.0, 100.0, ctx.mouse_x(), ctx.mouse_y());
        ctx.pop();

        // Vector arrow from the window center to the mouse.
        ctx.push();
        ctx.stroke((240, 180, 60));
        ctx.stroke_weight(3.0);
        let cx = ctx.width() as f32 / 2.0;
        let cy = ctx.height() as f32 / 2.0;
        ctx.vector(ctx.mouse_x() - cx, ctx.mouse_y() - cy, cx, cy);
        ctx.pop();

        // Trail of clicks.
        for &(x, y) in &self.trail {
            ctx.circle(x, y, 6.0);
        }

        ctx.fill(Color::WHITE);
        ctx.text_align(TextAlign::Right);
        ctx.text_size(16);
        ctx.text(
            &format!("{:.0} fps", ctx.frame_rate()),
            ctx.width() as f32 - 12.0,
            24.0,
        );

        if self.show_overlay {
            let frame_count = ctx.frame_count();
            let mouse = (ctx.mouse_x(), ctx.mouse_y());
            if let Some(gui) = ctx.overlay() {
                egui::Window::new("easel").show(gui, |ui| {
                    ui.label(format!("frame {frame_count}"));
                    ui.label(format!("mouse {:.0}, {:.0}", mouse.0, mouse.1));
                    ui.label("F fullscreen / G windowed / O overlay / Esc quit");
                });
            }
        }
    }

    fn on_key_pressed(&mut self, ctx: &mut Context, key: Key) {
        match key {
            Key::F => ctx.fullscreen(),
            Key::G => ctx.exit_fullscreen(),
            Key::O => self.show_overlay = !self.show_overlay,
            Key::C => self.trail.clear(),
            Key::Escape => ctx.close(),
            _ => (),
        }
    }

    fn on_mouse_pressed(&mut self, ctx: &mut Context, _button: MouseButton) {
        self.trail.push((ctx.mouse_x(), ctx.mouse_y()));
    }

    // A stray X click doesn't kill the sketch; the second one goes through.
    fn on_window_close(&mut self, _ctx: &mut Context) -> bool {
        if self.close_armed {
            true
        } else {
            self.close_armed = true;
            tracing::info!("close again to quit");
            false
        }
    }

    fn cleanup(&mut self, _ctx: &mut Context) {
        tracing::info!(clicks = self.trail.len(), "bye");
    }
}

fn main() {
    easel::run::<SimpleSketch>();
}
