//! CODE128 symbol patterns and the named symbol values of Subset B.

use crate::{pattern::Pattern, Error};

/// Number of symbols defined by CODE128 (values 0 to 106).
pub const SYMBOL_COUNT: usize = 107;
/// Start symbol selecting code set B.
pub const START_B: u8 = 104;
/// Switch from code set B to code set C. Never emitted by this crate.
pub const CODE_C: u8 = 105;
/// Stop symbol, the only 7-element pattern.
pub const STOP: u8 = 106;
/// Modulus of the weighted checksum.
pub const CHECKSUM_MODULO: u32 = 103;

macro_rules! p {
    ($($w:literal),+) => { Pattern::new(&[$($w),+]) };
}

/// Bar/space module widths of every symbol, indexed by symbol value.
pub const PATTERNS: [Pattern; SYMBOL_COUNT] = [
    /*   0 */ p!(2, 1, 2, 2, 2, 2), p!(2, 2, 2, 1, 2, 2), p!(2, 2, 2, 2, 2, 1), p!(1, 2, 1, 2, 2, 3), p!(1, 2, 1, 3, 2, 2),
    /*   5 */ p!(1, 3, 1, 2, 2, 2), p!(1, 2, 2, 2, 1, 3), p!(1, 2, 2, 3, 1, 2), p!(1, 3, 2, 2, 1, 2), p!(2, 2, 1, 2, 1, 3),
    /*  10 */ p!(2, 2, 1, 3, 1, 2), p!(2, 3, 1, 2, 1, 2), p!(1, 1, 2, 2, 3, 2), p!(1, 2, 2, 1, 3, 2), p!(1, 2, 2, 2, 3, 1),
    /*  15 */ p!(1, 1, 3, 2, 2, 2), p!(1, 2, 3, 1, 2, 2), p!(1, 2, 3, 2, 2, 1), p!(2, 2, 3, 2, 1, 1), p!(2, 2, 1, 1, 3, 2),
    /*  20 */ p!(2, 2, 1, 2, 3, 1), p!(2, 1, 3, 2, 1, 2), p!(2, 2, 3, 1, 1, 2), p!(3, 1, 2, 1, 3, 1), p!(3, 1, 1, 2, 2, 2),
    /*  25 */ p!(3, 2, 1, 1, 2, 2), p!(3, 2, 1, 2, 2, 1), p!(3, 1, 2, 2, 1, 2), p!(3, 2, 2, 1, 1, 2), p!(3, 2, 2, 2, 1, 1),
    /*  30 */ p!(2, 1, 2, 1, 2, 3), p!(2, 1, 2, 3, 2, 1), p!(2, 3, 2, 1, 2, 1), p!(1, 1, 1, 3, 2, 3), p!(1, 3, 1, 1, 2, 3),
    /*  35 */ p!(1, 3, 1, 3, 2, 1), p!(1, 1, 2, 3, 1, 3), p!(1, 3, 2, 1, 1, 3), p!(1, 3, 2, 3, 1, 1), p!(2, 1, 1, 3, 1, 3),
    /*  40 */ p!(2, 3, 1, 1, 1, 3), p!(2, 3, 1, 3, 1, 1), p!(1, 1, 2, 1, 3, 3), p!(1, 1, 2, 3, 3, 1), p!(1, 3, 2, 1, 3, 1),
    /*  45 */ p!(1, 1, 3, 1, 2, 3), p!(1, 1, 3, 3, 2, 1), p!(1, 3, 3, 1, 2, 1), p!(3, 1, 3, 1, 2, 1), p!(2, 1, 1, 3, 3, 1),
    /*  50 */ p!(2, 3, 1, 1, 3, 1), p!(2, 1, 3, 1, 1, 3), p!(2, 1, 3, 3, 1, 1), p!(2, 1, 3, 1, 3, 1), p!(3, 1, 1, 1, 2, 3),
    /*  55 */ p!(3, 1, 1, 3, 2, 1), p!(3, 3, 1, 1, 2, 1), p!(3, 1, 2, 1, 1, 3), p!(3, 1, 2, 3, 1, 1), p!(3, 3, 2, 1, 1, 1),
    /*  60 */ p!(3, 1, 4, 1, 1, 1), p!(2, 2, 1, 4, 1, 1), p!(4, 3, 1, 1, 1, 1), p!(1, 1, 1, 2, 2, 4), p!(1, 1, 1, 4, 2, 2),
    /*  65 */ p!(1, 2, 1, 1, 2, 4), p!(1, 2, 1, 4, 2, 1), p!(1, 4, 1, 1, 2, 2), p!(1, 4, 1, 2, 2, 1), p!(1, 1, 2, 2, 1, 4),
    /*  70 */ p!(1, 1, 2, 4, 1, 2), p!(1, 2, 2, 1, 1, 4), p!(1, 2, 2, 4, 1, 1), p!(1, 4, 2, 1, 1, 2), p!(1, 4, 2, 2, 1, 1),
    /*  75 */ p!(2, 4, 1, 2, 1, 1), p!(2, 2, 1, 1, 1, 4), p!(4, 1, 3, 1, 1, 1), p!(2, 4, 1, 1, 1, 2), p!(1, 3, 4, 1, 1, 1),
    /*  80 */ p!(1, 1, 1, 2, 4, 2), p!(1, 2, 1, 1, 4, 2), p!(1, 2, 1, 2, 4, 1), p!(1, 1, 4, 2, 1, 2), p!(1, 2, 4, 1, 1, 2),
    /*  85 */ p!(1, 2, 4, 2, 1, 1), p!(4, 1, 1, 2, 1, 2), p!(4, 2, 1, 1, 1, 2), p!(4, 2, 1, 2, 1, 1), p!(2, 1, 2, 1, 4, 1),
    /*  90 */ p!(2, 1, 4, 1, 2, 1), p!(4, 1, 2, 1, 2, 1), p!(1, 1, 1, 1, 4, 3), p!(1, 1, 1, 3, 4, 1), p!(1, 3, 1, 1, 4, 1),
    /*  95 */ p!(1, 1, 4, 1, 1, 3), p!(1, 1, 4, 3, 1, 1), p!(4, 1, 1, 1, 1, 3), p!(4, 1, 1, 3, 1, 1), p!(1, 1, 3, 1, 4, 1),
    /* 100 */ p!(1, 1, 4, 1, 3, 1), p!(3, 1, 1, 1, 4, 1), p!(4, 1, 1, 1, 3, 1), p!(2, 1, 1, 4, 1, 2), p!(2, 1, 1, 2, 1, 4),
    /* 105 */ p!(2, 1, 1, 2, 3, 2), p!(2, 3, 3, 1, 1, 1, 2),
];

/// Returns the pattern of the symbol `code`.
pub fn pattern(code: u8) -> Result<Pattern, Error> {
    PATTERNS.get(code as usize)
        .copied()
        .ok_or(Error::InvalidSymbol(code))
}
