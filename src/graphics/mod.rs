// src/graphics/mod.rs
// Draw styles, the style stack, and the sketch-space → nannou forwarding.

pub mod style;
pub mod text;

pub(crate) mod draw;

pub use style::{Color, DrawStyle, LineCap, RectMode, StyleStack, TextAlign};
pub use text::load_font;
