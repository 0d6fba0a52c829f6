//! Text segmenter
//!
//! Splits a string into the ordered display units of a vertical column.
//! Two consecutive ASCII digits form one paired unit that renders
//! rotated horizontal; every other character is one unit of its own.

/// One display unit produced by [`segment`].
///
/// A paired unit covers exactly two ASCII digits; a single unit covers
/// exactly one character of any kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit<'a> {
    pub text: &'a str,
    pub paired: bool,
}

impl Unit<'_> {
    /// Whether this unit is set upright inside the vertical column.
    ///
    /// Paired digits rotate with their cell instead, and everything
    /// outside ASCII alphanumerics rotates with the column flow.
    pub fn is_upright(&self) -> bool {
        if self.paired {
            return false;
        }
        let mut chars = self.text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.is_ascii_alphanumeric(),
            _ => false,
        }
    }
}

/// Segment `text` into display units.
///
/// The scan is greedy and non-overlapping: at each position two
/// consecutive ASCII digits are consumed as one paired unit, otherwise
/// exactly one character is consumed. Every input character lands in
/// exactly one unit, so concatenating the unit texts reconstructs the
/// input.
pub fn segment(text: &str) -> Segments<'_> {
    Segments { rest: text }
}

/// Iterator state for [`segment`]. Pure and restartable: calling
/// [`segment`] again on the same string yields the same sequence.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Unit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;

        let bytes = self.rest.as_bytes();
        if bytes.len() >= 2 && bytes[0].is_ascii_digit() && bytes[1].is_ascii_digit() {
            let (text, rest) = self.rest.split_at(2);
            self.rest = rest;
            return Some(Unit { text, paired: true });
        }

        let (text, rest) = self.rest.split_at(first.len_utf8());
        self.rest = rest;
        Some(Unit { text, paired: false })
    }
}

impl std::iter::FusedIterator for Segments<'_> {}
