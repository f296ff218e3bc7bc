//! Drawing onto [embedded_graphics] targets.

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{Point, Size},
    primitives::Rectangle,
};

use crate::render::{Rect, Surface};

/// Adapts an embedded-graphics [DrawTarget] to a [Surface].
///
/// Rectangle edges are rounded to the nearest pixel independently, so two
/// bars that touch in real coordinates touch on screen too.
pub struct Canvas<'a, D> {
    target: &'a mut D,
}

impl<'a, D: DrawTarget> Canvas<'a, D> {
    pub fn new(target: &'a mut D) -> Self {
        Self { target }
    }

    pub fn into_inner(self) -> &'a mut D {
        self.target
    }
}

/// Rounds both ends of a span and orders them.
#[inline]
fn snap(from: f64, to: f64) -> (i32, i32) {
    let (a, b) = (from.round() as i32, to.round() as i32);
    if a <= b { (a, b) } else { (b, a) }
}

impl<'a, D: DrawTarget> Surface for Canvas<'a, D> {
    type Color = D::Color;
    type Error = D::Error;

    fn fill_rect(&mut self, rect: Rect, color: &D::Color) -> Result<(), D::Error> {
        let (x0, x1) = snap(rect.x, rect.x + rect.width);
        let (y0, y1) = snap(rect.y, rect.y + rect.height);
        if x0 == x1 || y0 == y1 {
            return Ok(());
        }

        let area = Rectangle::new(Point::new(x0, y0), Size::new(x1.abs_diff(x0), y1.abs_diff(y0)));
        self.target.fill_solid(&area, *color)
    }
}
