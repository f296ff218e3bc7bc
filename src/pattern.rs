use core::iter;

/// Bar/space state of one pattern element. Patterns always open with a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Bar,
    Space,
}

impl Element {
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Element::Bar => Element::Space,
            Element::Space => Element::Bar,
        }
    }

    #[inline]
    pub const fn is_bar(self) -> bool {
        matches!(self, Element::Bar)
    }
}

/// Module widths of one symbol, alternating bar, space, bar, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern(&'static [u8]);

impl Pattern {
    pub const fn new(widths: &'static [u8]) -> Self {
        debug_assert!(!widths.is_empty(), "a pattern has at least one element");

        Self(widths)
    }

    #[inline]
    pub const fn widths(&self) -> &'static [u8] {
        self.0
    }

    /// Number of bar/space elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total width of the pattern in modules.
    pub const fn modules(&self) -> u32 {
        let mut sum = 0;
        let mut i = 0;
        while i < self.0.len() {
            sum += self.0[i] as u32;
            i += 1;
        }
        sum
    }
}

impl iter::IntoIterator for Pattern {
    type Item = (Element, u8);
    type IntoIter = Elements;

    fn into_iter(self) -> Self::IntoIter {
        Elements { widths: self.0, front: 0, back: self.0.len() }
    }
}

/// Iterator over the `(element, width)` pairs of a [Pattern].
#[derive(Debug, Clone, Default)]
pub struct Elements {
    widths: &'static [u8],
    front: usize,
    back: usize,
}

impl Elements {
    #[inline]
    fn element_at(i: usize) -> Element {
        if i % 2 == 0 { Element::Bar } else { Element::Space }
    }
}

impl iter::Iterator for Elements {
    type Item = (Element, u8);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            Some((Self::element_at(i), self.widths[i]))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.back - self.front;
        (count, Some(count))
    }
}

impl iter::DoubleEndedIterator for Elements {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            Some((Self::element_at(self.back), self.widths[self.back]))
        } else {
            None
        }
    }
}

impl iter::ExactSizeIterator for Elements {}
impl iter::FusedIterator for Elements {}
