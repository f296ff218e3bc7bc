//! CODE128 Subset-B encoder and bar renderer.
//!
//! Text is turned into a checksummed symbol sequence by [encode], laid out
//! inside a target box by [Geometry::compute] and drawn as filled
//! rectangles onto any [Surface] by [render]. [draw] chains the three and
//! validates everything before the first rectangle is emitted.
//!
//! ```
//! use code128::{draw, DrawInstruction, DrawOptions};
//!
//! let mut bars: Vec<DrawInstruction<&str>> = Vec::new();
//! let summary = draw(&mut bars, "ABC-123456", DrawOptions::new()
//!     .at(50.0, 50.0)
//!     .size(300.0, 80.0)
//!     .color("black")).unwrap();
//!
//! assert_eq!(summary.symbol_count, 13);
//! assert_eq!(summary.quiet_zone_modules, 10);
//! ```

mod error;
mod pattern;
pub mod tables;
pub mod encoder;
pub mod geometry;
pub mod render;
#[cfg(feature = "embedded-graphics")]
pub mod graphics;

pub use error::{DrawError, Error};
pub use pattern::{Element, Elements, Pattern};
pub use encoder::{checksum, encode, encode_into, Symbols};
pub use geometry::{Geometry, DEFAULT_QUIET_ZONE};
pub use render::{render, Bars, DrawInstruction, Rect, Summary, Surface};

/// Number of modules of a Subset-B symbol encoding `chars` characters,
/// optionally including `quiet_zone` modules on both sides.
///
/// ```
/// assert_eq!(code128::code128_modules!(1), 46);
/// assert_eq!(code128::code128_modules!(1, 10), 66);
/// ```
#[macro_export]
macro_rules! code128_modules {
    ($chars:expr) => {
        $crate::code128_modules!($chars, 0)
    };
    ($chars:expr, $quiet_zone:expr) => {
        // start, data and checksum symbols are 11 modules wide, stop is 13
        11 * ($chars + 2) + 13 + 2 * $quiet_zone
    };
}

/// Creates a color from normalized red, green and blue components.
pub type ColorFactory<'a, C> = &'a dyn Fn(f32, f32, f32) -> C;

/// Placement and styling of a barcode drawn by [draw].
pub struct DrawOptions<'a, C> {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Blank modules kept on each side of the symbol.
    pub quiet_zone_modules: u32,
    /// Bar color. When unset, black is requested from `rgb`.
    pub color: Option<C>,
    pub rgb: Option<ColorFactory<'a, C>>,
}

impl<'a, C> Default for DrawOptions<'a, C> {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 200.0,
            height: 50.0,
            quiet_zone_modules: DEFAULT_QUIET_ZONE,
            color: None,
            rgb: None,
        }
    }
}

impl<'a, C> DrawOptions<'a, C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bottom left corner of the target box.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn quiet_zone(mut self, modules: u32) -> Self {
        self.quiet_zone_modules = modules;
        self
    }

    pub fn color(mut self, color: C) -> Self {
        self.color = Some(color);
        self
    }

    pub fn rgb(mut self, rgb: ColorFactory<'a, C>) -> Self {
        self.rgb = Some(rgb);
        self
    }

    fn take_color(&mut self) -> Result<C, Error> {
        match (self.color.take(), self.rgb) {
            (Some(color), _) => Ok(color),
            (None, Some(rgb)) => Ok(rgb(0.0, 0.0, 0.0)),
            (None, None) => Err(Error::MissingColor),
        }
    }
}

/// Encodes `text` and draws it onto `surface` inside the box described by
/// `options`. Nothing is drawn unless the text, the color and the geometry
/// are all valid.
pub fn draw<S: Surface>(
    surface: &mut S,
    text: &str,
    mut options: DrawOptions<'_, S::Color>,
) -> Result<Summary, DrawError<S::Error>> {
    let prepared = options.take_color().and_then(|color| {
        let symbols = encode(text)?;
        let geometry = Geometry::compute(&symbols, options.x, options.width, options.quiet_zone_modules)?;
        Ok((symbols, geometry, color))
    });
    let (symbols, geometry, color) = prepared.map_err(|err| {
        #[cfg(feature = "tracing")]
        tracing::debug!(%err, "refusing to draw CODE128 symbol");
        DrawError::Codec(err)
    })?;

    let summary = render(surface, &symbols, &geometry, options.y, options.height, &color)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        symbols = summary.symbol_count,
        module_width = summary.module_width,
        quiet_zone = summary.quiet_zone_modules,
        "drew CODE128 symbol"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Rgb(f32, f32, f32);

    fn rgb(r: f32, g: f32, b: f32) -> Rgb {
        Rgb(r, g, b)
    }

    #[test]
    fn test_draw_defaults() {
        let mut out: Vec<DrawInstruction<Rgb>> = Vec::new();
        let summary = draw(&mut out, "A", DrawOptions::<Rgb>::new().rgb(&rgb)).unwrap();

        assert_eq!(summary.symbol_count, 4);
        assert_eq!(summary.quiet_zone_modules, 10);
        assert_eq!(summary.module_width, 200.0 / 66.0);
        assert_eq!(out.len(), 13);
        assert!(out.iter().all(|bar| bar.color == Rgb(0.0, 0.0, 0.0)));
        assert!(out.iter().all(|bar| bar.y == 0.0 && bar.height == 50.0));
    }

    #[test]
    fn test_draw_explicit_color_wins() {
        let mut out: Vec<DrawInstruction<Rgb>> = Vec::new();
        let options = DrawOptions::<Rgb>::new()
            .rgb(&rgb)
            .color(Rgb(0.2, 0.4, 0.6))
            .at(50.0, 50.0)
            .size(300.0, 80.0);
        draw(&mut out, "ABC-123456", options).unwrap();

        assert!(out.iter().all(|bar| bar.color == Rgb(0.2, 0.4, 0.6)));
        assert!(out.iter().all(|bar| bar.y == 50.0 && bar.height == 80.0));
        assert!(out[0].x > 50.0);
    }

    #[test]
    fn test_draw_module_count_macro() {
        let mut out: Vec<DrawInstruction<()>> = Vec::new();
        let text = "ABC-123456";
        let width = code128_modules!(text.len(), 4) as f64;
        let summary = draw(&mut out, text, DrawOptions::new().color(()).size(width, 1.0).quiet_zone(4)).unwrap();
        assert_eq!(summary.module_width, 1.0);
        assert_eq!(out[0].x, 4.0);
    }

    #[test]
    fn test_draw_requires_color() {
        let mut out: Vec<DrawInstruction<Rgb>> = Vec::new();
        let res = draw(&mut out, "A", DrawOptions::new());
        assert!(matches!(res, Err(DrawError::Codec(Error::MissingColor))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_draw_rejects_bad_text_before_drawing() {
        let mut out: Vec<DrawInstruction<Rgb>> = Vec::new();
        let res = draw(&mut out, "AB\u{7}", DrawOptions::<Rgb>::new().rgb(&rgb));
        assert!(matches!(res, Err(DrawError::Codec(Error::UnsupportedChar { index: 2, ch: '\u{7}' }))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_draw_rejects_zero_width() {
        let mut out: Vec<DrawInstruction<Rgb>> = Vec::new();
        let res = draw(&mut out, "A", DrawOptions::<Rgb>::new().rgb(&rgb).size(0.0, 50.0));
        assert!(matches!(res, Err(DrawError::Codec(Error::DegenerateGeometry { .. }))));
        assert!(out.is_empty());
    }
}
