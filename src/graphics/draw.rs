// src/graphics/draw.rs
//
// Translation of sketch-space primitives to nannou Draw calls.
//
// The public API speaks Processing's coordinate system: origin at the top
// left of the window, y pointing down, units in pixels. Nannou's Draw is
// centered with y pointing up, so every primitive goes through ViewTransform
// on its way out.

use nannou::prelude::*;

use super::style::{DrawStyle, LineCap, RectMode};

/// Maps sketch-space coordinates (top-left origin, y down) to nannou's
/// centered, y-up space and back.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ViewTransform {
    pub width: f32,
    pub height: f32,
}

impl ViewTransform {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    pub fn to_screen(&self, x: f32, y: f32) -> Point2 {
        // invert y to match nannou
        pt2(x - self.width / 2.0, self.height / 2.0 - y)
    }

    pub fn to_sketch(&self, p: Point2) -> (f32, f32) {
        (p.x + self.width / 2.0, self.height / 2.0 - p.y)
    }
}

/// Resolve rect() parameters to a top-left corner and size in sketch space,
/// according to the current rect mode.
pub(crate) fn resolve_rect(mode: RectMode, x: f32, y: f32, w: f32, h: f32) -> (f32, f32, f32, f32) {
    match mode {
        RectMode::Corner => (x, y, w, h),
        RectMode::Center => (x - w / 2.0, y - h / 2.0, w, h),
        RectMode::Corners => (x, y, w - x, h - y),
    }
}

/// The line shaft and head triangle of a vector arrow, in sketch space.
/// None when the vector is exactly zero-length: nothing is drawn at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ArrowGeometry {
    pub shaft_end: (f32, f32),
    pub tip: (f32, f32),
    pub head_left: (f32, f32),
    pub head_right: (f32, f32),
}

pub(crate) fn arrow_geometry(
    vx: f32,
    vy: f32,
    ox: f32,
    oy: f32,
    stroke_weight: f32,
) -> Option<ArrowGeometry> {
    if vx == 0.0 && vy == 0.0 {
        return None;
    }

    let magnitude = (vx * vx + vy * vy).sqrt();
    let angle = vy.atan2(vx);
    let head_length = (15.0 * stroke_weight).min(magnitude);
    let half_angle = std::f32::consts::PI / 12.0; // 15 degrees

    let tip = (ox + vx, oy + vy);
    let base_at = |theta: f32| (tip.0 - head_length * theta.cos(), tip.1 - head_length * theta.sin());

    Some(ArrowGeometry {
        shaft_end: base_at(angle),
        tip,
        head_left: base_at(angle - half_angle),
        head_right: base_at(angle + half_angle),
    })
}

pub(crate) fn draw_line(
    draw: &Draw,
    view: &ViewTransform,
    style: &DrawStyle,
    (x1, y1): (f32, f32),
    (x2, y2): (f32, f32),
) {
    let start = view.to_screen(x1, y1);
    let end = view.to_screen(x2, y2);

    let drawing = draw
        .line()
        .start(start)
        .end(end)
        .stroke_weight(style.stroke_weight)
        .color(style.stroke.to_rgba8());

    match style.line_cap {
        LineCap::Round => drawing.caps_round(),
        LineCap::Square => drawing.caps_square(),
    };
}

pub(crate) fn draw_rect(
    draw: &Draw,
    view: &ViewTransform,
    style: &DrawStyle,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
) {
    let (left, top, w, h) = resolve_rect(style.rect_mode, x, y, w, h);
    let center = view.to_screen(left + w / 2.0, top + h / 2.0);

    draw.rect()
        .xy(center)
        .w_h(w, h)
        .color(style.fill.to_rgba8())
        .stroke(style.stroke.to_rgba8())
        .stroke_weight(style.stroke_weight);
}

pub(crate) fn draw_circle(
    draw: &Draw,
    view: &ViewTransform,
    style: &DrawStyle,
    x: f32,
    y: f32,
    radius: f32,
) {
    draw.ellipse()
        .xy(view.to_screen(x, y))
        .radius(radius)
        .color(style.fill.to_rgba8())
        .stroke(style.stroke.to_rgba8())
        .stroke_weight(style.stroke_weight);
}

pub(crate) fn draw_ellipse(
    draw: &Draw,
    view: &ViewTransform,
    style: &DrawStyle,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
) {
    draw.ellipse()
        .xy(view.to_screen(x, y))
        .w_h(w, h)
        .color(style.fill.to_rgba8())
        .stroke(style.stroke.to_rgba8())
        .stroke_weight(style.stroke_weight);
}

pub(crate) fn draw_triangle(
    draw: &Draw,
    view: &ViewTransform,
    style: &DrawStyle,
    (x1, y1): (f32, f32),
    (x2, y2): (f32, f32),
    (x3, y3): (f32, f32),
) {
    draw.tri()
        .points(
            view.to_screen(x1, y1),
            view.to_screen(x2, y2),
            view.to_screen(x3, y3),
        )
        .color(style.fill.to_rgba8())
        .stroke(style.stroke.to_rgba8())
        .stroke_weight(style.stroke_weight);
}

/// Draw an arrow from (ox, oy) to (ox + vx, oy + vy): a shaft line plus a
/// filled head triangle in the stroke color, with no outline of its own.
pub(crate) fn draw_vector(
    draw: &Draw,
    view: &ViewTransform,
    style: &DrawStyle,
    vx: f32,
    vy: f32,
    ox: f32,
    oy: f32,
) {
    let Some(arrow) = arrow_geometry(vx, vy, ox, oy, style.stroke_weight) else {
        return;
    };

    draw_line(draw, view, style, (ox, oy), arrow.shaft_end);

    draw.tri()
        .points(
            view.to_screen(arrow.tip.0, arrow.tip.1),
            view.to_screen(arrow.head_left.0, arrow.head_left.1),
            view.to_screen(arrow.head_right.0, arrow.head_right.1),
        )
        .color(style.stroke.to_rgba8());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_corner_mode_is_passthrough() {
        let (x, y, w, h) = resolve_rect(RectMode::Corner, 10.0, 10.0, 50.0, 20.0);
        assert_eq!((x, y), (10.0, 10.0));
        assert_eq!((w, h), (50.0, 20.0));
    }

    #[test]
    fn rect_center_mode_offsets_by_half_size() {
        let (x, y, w, h) = resolve_rect(RectMode::Center, 10.0, 10.0, 50.0, 20.0);
        assert_eq!((x, y), (-15.0, 0.0));
        assert_eq!((w, h), (50.0, 20.0));
    }

    #[test]
    fn rect_corners_mode_treats_wh_as_bottom_right() {
        let (x, y, w, h) = resolve_rect(RectMode::Corners, 10.0, 10.0, 60.0, 30.0);
        assert_eq!((x, y), (10.0, 10.0));
        assert_eq!((w, h), (50.0, 20.0));
    }

    #[test]
    fn zero_vector_yields_no_geometry() {
        assert_eq!(arrow_geometry(0.0, 0.0, 100.0, 200.0, 2.0), None);
    }

    #[test]
    fn arrow_head_length_is_capped_by_magnitude() {
        // Vector of length 10 with stroke weight 2: head would be 30 px,
        // capped to the full magnitude, so the shaft collapses to the origin.
        let arrow = arrow_geometry(10.0, 0.0, 0.0, 0.0, 2.0).unwrap();
        assert_eq!(arrow.tip, (10.0, 0.0));
        assert!((arrow.shaft_end.0 - 0.0).abs() < 1e-4);
        assert!((arrow.shaft_end.1 - 0.0).abs() < 1e-4);
    }

    #[test]
    fn arrow_along_x_axis_has_symmetric_head() {
        let arrow = arrow_geometry(100.0, 0.0, 0.0, 0.0, 1.0).unwrap();
        assert_eq!(arrow.tip, (100.0, 0.0));
        // Shaft stops one head-length (15 * 1.0) before the tip.
        assert!((arrow.shaft_end.0 - 85.0).abs() < 1e-3);
        assert!(arrow.shaft_end.1.abs() < 1e-3);
        // Head base points mirror each other across the shaft.
        assert!((arrow.head_left.0 - arrow.head_right.0).abs() < 1e-3);
        assert!((arrow.head_left.1 + arrow.head_right.1).abs() < 1e-3);
    }

    #[test]
    fn view_transform_maps_corners_and_center() {
        let view = ViewTransform::new(100, 100);
        // Top-left of the sketch is nannou (-50, 50).
        let p = view.to_screen(0.0, 0.0);
        assert_eq!((p.x, p.y), (-50.0, 50.0));
        // Bottom-right is (50, -50).
        let p = view.to_screen(100.0, 100.0);
        assert_eq!((p.x, p.y), (50.0, -50.0));
        // Center maps to the origin.
        let p = view.to_screen(50.0, 50.0);
        assert_eq!((p.x, p.y), (0.0, 0.0));
    }

    #[test]
    fn view_transform_round_trips() {
        let view = ViewTransform::new(800, 600);
        let (x, y) = view.to_sketch(view.to_screen(123.0, 456.0));
        assert!((x - 123.0).abs() < 1e-4);
        assert!((y - 456.0).abs() < 1e-4);
    }
}
