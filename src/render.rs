use core::{convert::Infallible, iter, slice};

use crate::geometry::Geometry;
use crate::pattern::{Element, Elements};
use crate::{tables, DrawError, Error};

/// Axis aligned rectangle in the caller's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Destination of the rendered bars. The only capability required is
/// filling a borderless rectangle with a solid color.
pub trait Surface {
    type Color;
    type Error;

    fn fill_rect(&mut self, rect: Rect, color: &Self::Color) -> Result<(), Self::Error>;
}

/// One recorded bar.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawInstruction<C> {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: C,
}

impl<C> DrawInstruction<C> {
    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, width: self.width, height: self.height }
    }
}

/// Records every bar instead of drawing it.
impl<C: Clone> Surface for Vec<DrawInstruction<C>> {
    type Color = C;
    type Error = Infallible;

    fn fill_rect(&mut self, rect: Rect, color: &C) -> Result<(), Infallible> {
        self.push(DrawInstruction {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            color: color.clone(),
        });
        Ok(())
    }
}

/// What was rendered, for logging and verification by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub symbol_count: usize,
    pub module_width: f64,
    pub quiet_zone_modules: u32,
}

/// Iterator over the rectangles of the bars of a symbol sequence, left to
/// right. Spaces only move the cursor.
#[derive(Debug, Clone)]
pub struct Bars<'a> {
    symbols: slice::Iter<'a, u8>,
    elements: Elements,
    // one state for the whole pass, flipped after every element
    state: Element,
    cursor: f64,
    module_width: f64,
    y: f64,
    height: f64,
}

impl<'a> Bars<'a> {
    /// Checks every symbol against the pattern table up front, so iterating
    /// never fails half way.
    pub fn new(symbols: &'a [u8], geometry: &Geometry, y: f64, height: f64) -> Result<Self, Error> {
        for &code in symbols {
            tables::pattern(code)?;
        }

        Ok(Self {
            symbols: symbols.iter(),
            elements: Elements::default(),
            state: Element::Bar,
            cursor: geometry.start_x,
            module_width: geometry.module_width,
            y,
            height,
        })
    }

    /// Position of the cursor: the left edge of the next element.
    #[inline]
    pub fn cursor(&self) -> f64 {
        self.cursor
    }
}

impl<'a> iter::Iterator for Bars<'a> {
    type Item = Rect;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (element, modules) = match self.elements.next() {
                Some(next) => next,
                None => {
                    let &code = self.symbols.next()?;
                    self.elements = tables::PATTERNS[code as usize].into_iter();
                    continue;
                }
            };
            debug_assert_eq!(element, self.state, "patterns alternate from a leading bar");

            let width = modules as f64 * self.module_width;
            let x = self.cursor;
            let state = self.state;

            self.cursor += width;
            self.state = state.toggle();

            if state.is_bar() {
                return Some(Rect { x, y: self.y, width, height: self.height });
            }
        }
    }
}

impl<'a> iter::FusedIterator for Bars<'a> {}

/// Draws the bars of `symbols` onto `surface` following `geometry`.
/// All symbols are validated before the first rectangle is drawn.
pub fn render<S: Surface>(
    surface: &mut S,
    symbols: &[u8],
    geometry: &Geometry,
    y: f64,
    height: f64,
    color: &S::Color,
) -> Result<Summary, DrawError<S::Error>> {
    for rect in Bars::new(symbols, geometry, y, height)? {
        surface.fill_rect(rect, color).map_err(DrawError::Surface)?;
    }

    Ok(Summary {
        symbol_count: symbols.len(),
        module_width: geometry.module_width,
        quiet_zone_modules: geometry.quiet_zone_modules,
    })
}
