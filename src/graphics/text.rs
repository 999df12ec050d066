// src/graphics/text.rs
//
// Font loading and text measurement/drawing. Glyph metrics come straight
// from the font via nannou's rusttype re-exports; layout stays single-line,
// positioned according to the current text alignment.

use nannou::prelude::*;
use nannou::text::{font, Font, Scale};
use std::path::Path;

use super::draw::ViewTransform;
use super::style::{DrawStyle, TextAlign};
use crate::error::EaselError;

/// The built-in font used until the sketch registers its own.
pub(crate) fn default_font() -> Font {
    font::default_notosans()
}

/// Load a .ttf/.otf font from disk. Failing to load a font the sketch asked
/// for is fatal to startup; callers decide how loudly to die.
pub fn load_font<P: AsRef<Path>>(path: P) -> Result<Font, EaselError> {
    let path = path.as_ref();
    font::from_file(path).map_err(|source| EaselError::FontLoad {
        path: path.to_path_buf(),
        source,
    })
}

/// Width of `text` in pixels when drawn with `font` at `size`, advance
/// widths plus pair kerning.
pub(crate) fn measure_width(font: &Font, size: u32, text: &str) -> f32 {
    let scale = Scale::uniform(size as f32);
    let mut width = 0.0;
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if c.is_control() {
            continue;
        }
        if let Some(p) = prev {
            width += font.pair_kerning(scale, p, c);
        }
        width += font.glyph(c).scaled(scale).h_metrics().advance_width;
        prev = Some(c);
    }
    width
}

pub(crate) fn draw_text(
    draw: &Draw,
    view: &ViewTransform,
    style: &DrawStyle,
    text: &str,
    x: f32,
    y: f32,
) {
    let measured = measure_width(&style.font, style.font_size, text);
    // Pad the layout block a little so rounding never triggers a line wrap.
    let block_w = measured + style.font_size as f32;
    let block_h = style.font_size as f32 * 1.5;

    // The block is laid out left-justified, so only its left edge moves with
    // the alignment; the glyphs inside stay put.
    let block_left = match style.text_align {
        TextAlign::Left => x,
        TextAlign::Center => x - measured / 2.0,
        TextAlign::Right => x - measured,
    };
    let center = view.to_screen(block_left + block_w / 2.0, y);

    draw.text(text)
        .xy(center)
        .w_h(block_w, block_h)
        .left_justify()
        .align_text_middle_y()
        .font(style.font.clone())
        .font_size(style.font_size)
        .color(style.fill.to_rgba8());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_zero_width() {
        let font = default_font();
        assert_eq!(measure_width(&font, 18, ""), 0.0);
    }

    #[test]
    fn wider_text_measures_wider() {
        let font = default_font();
        let short = measure_width(&font, 18, "hi");
        let long = measure_width(&font, 18, "hello there");
        assert!(short > 0.0);
        assert!(long > short);
    }

    #[test]
    fn width_scales_with_font_size() {
        let font = default_font();
        let small = measure_width(&font, 12, "sample");
        let big = measure_width(&font, 24, "sample");
        // Advance widths are linear in the uniform scale.
        assert!((big - small * 2.0).abs() < 0.5);
    }

    #[test]
    fn loading_a_missing_font_is_an_error() {
        let result = load_font("/definitely/not/a/font.ttf");
        assert!(matches!(result, Err(EaselError::FontLoad { .. })));
    }
}
