// src/graphics/style.rs
//
// The per-frame draw style and its stack. Primitives only ever read the top
// entry; the setters only ever mutate it. push()/pop() save and restore.

use nannou::color::Rgba8;
use nannou::text::Font;

/// An 8-bit RGBA color. "No fill" and "no stroke" are fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// A shade of gray, applied to all three channels.
    pub const fn gray(shade: u8) -> Self {
        Self::rgb(shade, shade, shade)
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    pub(crate) fn to_rgba8(self) -> Rgba8 {
        nannou::color::rgba8(self.r, self.g, self.b, self.a)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Color::rgba(r, g, b, a)
    }
}

impl From<u8> for Color {
    fn from(shade: u8) -> Self {
        Color::gray(shade)
    }
}

/// Whether line endpoints get a round cap drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Round,
    Square,
}

/// How the four numeric parameters of rect() are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RectMode {
    /// (x, y) is the center, (w, h) the size.
    Center,
    /// (x, y) is the top-left corner, (w, h) the size.
    #[default]
    Corner,
    /// (x, y) is the top-left corner, (w, h) the absolute bottom-right corner.
    Corners,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// One snapshot of the current drawing style. Cloned on push().
/// No Debug: the font handle has no useful representation.
#[derive(Clone)]
pub struct DrawStyle {
    pub fill: Color,
    pub stroke: Color,
    pub stroke_weight: f32,
    pub line_cap: LineCap,
    pub rect_mode: RectMode,
    pub text_align: TextAlign,
    pub font: Font,
    pub font_size: u32,
}

impl DrawStyle {
    /// The fixed per-frame default: white fill, black stroke, weight 2.
    pub fn base(font: Font) -> Self {
        Self {
            fill: Color::WHITE,
            stroke: Color::BLACK,
            stroke_weight: 2.0,
            line_cap: LineCap::default(),
            rect_mode: RectMode::default(),
            text_align: TextAlign::default(),
            font,
            font_size: 18,
        }
    }
}

/// LIFO stack of draw styles. Holds at least the base entry for the lifetime
/// of a frame; popping below that is a programming error and panics.
pub struct StyleStack {
    default_font: Font,
    entries: Vec<DrawStyle>,
}

impl StyleStack {
    pub fn new(default_font: Font) -> Self {
        Self {
            entries: vec![DrawStyle::base(default_font.clone())],
            default_font,
        }
    }

    /// Duplicate the current top entry.
    pub fn push(&mut self) {
        let top = self.current().clone();
        self.entries.push(top);
    }

    /// Remove the top entry. Panics when only the base entry remains.
    pub fn pop(&mut self) {
        if self.entries.len() <= 1 {
            panic!("style stack: pop() without a matching push(): nothing to pop");
        }
        self.entries.pop();
    }

    pub fn current(&self) -> &DrawStyle {
        self.entries
            .last()
            .expect("style stack holds at least the base entry")
    }

    pub fn current_mut(&mut self) -> &mut DrawStyle {
        self.entries
            .last_mut()
            .expect("style stack holds at least the base entry")
    }

    /// Drop everything and restore the fixed default. Runs once per frame
    /// before the user callback.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.entries
            .push(DrawStyle::base(self.default_font.clone()));
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nannou::text::font::default_notosans;

    fn stack() -> StyleStack {
        StyleStack::new(default_notosans())
    }

    #[test]
    fn base_style_matches_frame_default() {
        let stack = stack();
        let style = stack.current();
        assert_eq!(style.fill, Color::WHITE);
        assert_eq!(style.stroke, Color::BLACK);
        assert_eq!(style.stroke_weight, 2.0);
        assert_eq!(style.line_cap, LineCap::Round);
        assert_eq!(style.rect_mode, RectMode::Corner);
        assert_eq!(style.text_align, TextAlign::Left);
        assert_eq!(style.font_size, 18);
    }

    #[test]
    fn push_mutate_pop_restores_previous_style() {
        let mut stack = stack();
        stack.current_mut().fill = Color::rgb(255, 0, 0);
        stack.current_mut().stroke_weight = 7.0;

        stack.push();
        stack.current_mut().fill = Color::rgb(0, 255, 0);
        stack.current_mut().rect_mode = RectMode::Center;
        assert_eq!(stack.current().fill, Color::rgb(0, 255, 0));

        stack.pop();
        assert_eq!(stack.current().fill, Color::rgb(255, 0, 0));
        assert_eq!(stack.current().stroke_weight, 7.0);
        assert_eq!(stack.current().rect_mode, RectMode::Corner);
    }

    #[test]
    fn lifo_law_holds_for_nested_pushes() {
        let mut stack = stack();
        let weights = [3.0_f32, 5.0, 11.0, 42.0];
        for w in weights {
            stack.push();
            stack.current_mut().stroke_weight = w;
        }
        for w in weights.iter().rev() {
            assert_eq!(stack.current().stroke_weight, *w);
            stack.pop();
        }
        // Back at the base entry, untouched.
        assert_eq!(stack.current().stroke_weight, 2.0);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    #[should_panic(expected = "nothing to pop")]
    fn popping_the_base_entry_panics() {
        let mut stack = stack();
        stack.current_mut().fill = Color::TRANSPARENT;
        stack.pop();
    }

    #[test]
    #[should_panic(expected = "nothing to pop")]
    fn popping_the_base_entry_panics_after_balanced_history() {
        let mut stack = stack();
        stack.push();
        stack.push();
        stack.pop();
        stack.pop();
        stack.pop();
    }

    #[test]
    fn reset_restores_the_default_regardless_of_depth() {
        let mut stack = stack();
        stack.push();
        stack.push();
        stack.current_mut().fill = Color::TRANSPARENT;
        stack.reset();
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current().fill, Color::WHITE);
    }

    #[test]
    fn color_conversions() {
        assert_eq!(Color::from(128u8), Color::rgb(128, 128, 128));
        assert_eq!(Color::from((1, 2, 3)), Color::rgba(1, 2, 3, 255));
        assert_eq!(Color::from((1, 2, 3, 4)).a, 4);
        assert!(Color::TRANSPARENT.is_transparent());
        assert!(!Color::BLACK.is_transparent());
    }
}
