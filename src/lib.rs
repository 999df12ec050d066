// src/lib.rs
//
// easel: Processing-style creative coding on top of nannou.
//
// Implement the Sketch trait, override the hooks you care about, and call
// run(). The Context passed to every hook carries the drawing primitives,
// the per-frame style stack and the window controls; nannou and egui stay
// behind it.
//
//     #[derive(Default)]
//     struct MySketch;
//
//     impl easel::Sketch for MySketch {
//         fn update(&mut self, ctx: &mut easel::Context) {
//             ctx.circle(ctx.mouse_x(), ctx.mouse_y(), 20.0);
//         }
//     }
//
//     fn main() {
//         easel::run::<MySketch>();
//     }

pub mod app;
pub mod config;
pub mod error;
pub mod graphics;
pub mod utilities;

pub use app::{run, Context, Sketch};
pub use config::Settings;
pub use error::EaselError;
pub use graphics::{load_font, Color, LineCap, RectMode, TextAlign};

// Event payloads and the font handle are forwarded nannou types.
pub use nannou::event::{Key, MouseButton, MouseScrollDelta, TouchPhase};
pub use nannou::text::Font;

// The overlay GUI; see Context::overlay().
pub use nannou_egui::egui;
