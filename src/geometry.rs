use crate::{tables, Error};

/// Quiet zone on each side of the symbol, in modules.
pub const DEFAULT_QUIET_ZONE: u32 = 10;

/// Sums the module widths of every symbol in `symbols`.
pub fn data_modules(symbols: &[u8]) -> Result<u64, Error> {
    symbols.iter()
        .try_fold(0u64, |total, &code| -> Result<u64, Error> {
            Ok(total + tables::pattern(code)?.modules() as u64)
        })
}

/// Horizontal layout of a symbol sequence inside a target box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Width of one module. Fractional so the symbol fills the box exactly.
    pub module_width: f64,
    /// Modules of the symbol sequence alone.
    pub data_modules: u64,
    /// Data modules plus both quiet zones.
    pub total_modules: u64,
    pub quiet_zone_modules: u32,
    /// Left edge of the first bar.
    pub start_x: f64,
}

impl Geometry {
    /// Fits `symbols` into a box starting at `x` and `width` units wide,
    /// keeping `quiet_zone_modules` blank modules on both sides.
    pub fn compute(symbols: &[u8], x: f64, width: f64, quiet_zone_modules: u32) -> Result<Self, Error> {
        let data_modules = data_modules(symbols)?;
        // u64 holds twice any u32 quiet zone plus the data modules
        let total_modules = data_modules + 2 * quiet_zone_modules as u64;

        if !(width > 0.0 && width.is_finite()) || total_modules == 0 {
            return Err(Error::DegenerateGeometry { width, total_modules });
        }

        let module_width = width / total_modules as f64;
        Ok(Self {
            module_width,
            data_modules,
            total_modules,
            quiet_zone_modules,
            start_x: x + quiet_zone_modules as f64 * module_width,
        })
    }

    /// Width of one quiet zone.
    #[inline]
    pub fn quiet_zone_width(&self) -> f64 {
        self.quiet_zone_modules as f64 * self.module_width
    }

    /// Right edge of the last bar.
    #[inline]
    pub fn end_x(&self) -> f64 {
        self.start_x + self.data_modules as f64 * self.module_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode;

    const EPSILON: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_data_modules() {
        // start, 'A', checksum: 11 each, stop: 13
        assert_eq!(data_modules(&[104, 33, 34, 106]), Ok(46));
        assert_eq!(data_modules(&[]), Ok(0));
        assert_eq!(data_modules(&[104, 107]), Err(Error::InvalidSymbol(107)));
    }

    #[test]
    fn test_compute_single_char() {
        let symbols = encode("A").unwrap();
        let g = Geometry::compute(&symbols, 0.0, 100.0, DEFAULT_QUIET_ZONE).unwrap();
        assert_eq!(g.data_modules, 46);
        assert_eq!(g.total_modules, 66);
        assert!(approx(g.module_width, 100.0 / 66.0));
        assert!(approx(g.start_x, 10.0 * 100.0 / 66.0));
    }

    #[test]
    fn test_compute_fills_box() {
        for text in ["", "A", "ABC-123456", "a much longer label with spaces"] {
            let symbols = encode(text).unwrap();
            for quiet in [0, 1, 10, 25] {
                let g = Geometry::compute(&symbols, 12.5, 300.0, quiet).unwrap();
                assert_eq!(g.total_modules, symbols.modules().unwrap() + 2 * quiet as u64);
                assert!(approx(g.module_width * g.total_modules as f64, 300.0));
                assert!(approx(g.end_x() + g.quiet_zone_width(), 12.5 + 300.0));
            }
        }
    }

    #[test]
    fn test_compute_without_quiet_zone() {
        let symbols = encode("ABC-123456").unwrap();
        let g = Geometry::compute(&symbols, 50.0, 300.0, 0).unwrap();
        assert_eq!(g.start_x, 50.0);
        assert_eq!(g.total_modules, g.data_modules);
    }

    #[test]
    fn test_compute_degenerate() {
        let symbols = encode("A").unwrap();
        for width in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Geometry::compute(&symbols, 0.0, width, DEFAULT_QUIET_ZONE),
                Err(Error::DegenerateGeometry { .. })
            ));
        }
        assert_eq!(
            Geometry::compute(&[], 0.0, 100.0, 0),
            Err(Error::DegenerateGeometry { width: 100.0, total_modules: 0 })
        );
    }

    #[test]
    fn test_compute_huge_quiet_zone() {
        let quiet = u32::MAX / 2 + 1;
        let g = Geometry::compute(&[104, 1, 106], 0.0, 100.0, quiet).unwrap();
        assert_eq!(g.data_modules, 35);
        assert_eq!(g.total_modules, 35 + (1u64 << 32));
        assert!(approx(g.module_width * g.total_modules as f64, 100.0));
        assert!(g.start_x > 0.0 && g.start_x < 50.0);
        assert!(approx(g.end_x() + g.quiet_zone_width(), 100.0));

        let g = Geometry::compute(&[104, 1, 106], 0.0, 100.0, u32::MAX).unwrap();
        assert_eq!(g.total_modules, 35 + 2 * u32::MAX as u64);
    }

    #[test]
    fn test_compute_propagates_lookup_failure() {
        assert_eq!(Geometry::compute(&[104, 200, 106], 0.0, 100.0, 10), Err(Error::InvalidSymbol(200)));
    }
}
