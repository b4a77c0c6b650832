//! Source text positions and offset encodings.

use std::fmt;

// Re-export from text-size for compatibility
pub use text_size::TextRange;
pub use text_size::TextSize;

/// A line and column position in source text.
///
/// Both line and column are 0-indexed internally, but displayed as 1-indexed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct LineCol {
    /// 0-indexed line number
    pub line: u32,
    /// 0-indexed column, in units of the [`PositionEncoding`] it was computed with
    pub col: u32,
}

impl LineCol {
    /// Create a new LineCol position.
    #[inline]
    pub const fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

impl fmt::Debug for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

/// The unit a client counts columns in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PositionEncoding {
    /// UTF-8 code units (bytes)
    #[cfg_attr(feature = "serde", serde(rename = "utf-8"))]
    Utf8,
    /// UTF-16 code units, the LSP default
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "utf-16"))]
    Utf16,
    /// Unicode code points
    #[cfg_attr(feature = "serde", serde(rename = "utf-32"))]
    Utf32,
}

impl PositionEncoding {
    /// Length of `text` in this encoding's units.
    pub fn measure(self, text: &str) -> u32 {
        let len = match self {
            PositionEncoding::Utf8 => text.len(),
            PositionEncoding::Utf16 => text.chars().map(char::len_utf16).sum(),
            PositionEncoding::Utf32 => text.chars().count(),
        };
        u32::try_from(len).unwrap_or(u32::MAX)
    }
}

/// Streams ascending byte offsets into [`LineCol`] positions.
///
/// Each call to [`advance_to`](Self::advance_to) scans only the text between
/// the previous offset and the new one, so converting a sorted batch costs
/// one pass over the covered text instead of one pass per offset.
#[derive(Clone, Debug)]
pub struct PositionCursor<'a> {
    text: &'a str,
    encoding: PositionEncoding,
    offset: usize,
    position: LineCol,
}

impl<'a> PositionCursor<'a> {
    /// A cursor at the start of `text`.
    pub fn new(text: &'a str, encoding: PositionEncoding) -> Self {
        Self {
            text,
            encoding,
            offset: 0,
            position: LineCol::default(),
        }
    }

    /// Move to `offset` and return its position.
    ///
    /// Offsets past the end clamp to the end of the text, and offsets inside
    /// a multi-byte character round down to the character start. Moving
    /// backwards restarts the scan from the beginning.
    pub fn advance_to(&mut self, offset: TextSize) -> LineCol {
        let target = self.char_boundary(usize::from(offset));
        if target < self.offset {
            self.offset = 0;
            self.position = LineCol::default();
        }

        let scanned = &self.text[self.offset..target];
        let newlines = scanned.bytes().filter(|&b| b == b'\n').count();
        match scanned.rfind('\n') {
            Some(last) => {
                let lines = u32::try_from(newlines).unwrap_or(u32::MAX);
                self.position.line = self.position.line.saturating_add(lines);
                self.position.col = self.encoding.measure(&scanned[last + 1..]);
            }
            None => {
                self.position.col = self
                    .position
                    .col
                    .saturating_add(self.encoding.measure(scanned));
            }
        }

        self.offset = target;
        self.position
    }

    fn char_boundary(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }
}
