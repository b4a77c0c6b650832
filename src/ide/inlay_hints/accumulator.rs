//! Raw hint collection and final position conversion.

use text_size::TextSize;

use super::{HintError, InlayHint, InlayHintKind, InlayHintTooltip};
use crate::base::{PositionCursor, PositionEncoding};

/// A hint anchored at a byte offset, before position conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RawHint {
    pub offset: TextSize,
    pub label: String,
    pub kind: InlayHintKind,
    pub tooltip: Option<InlayHintTooltip>,
}

/// Append-only hint list shared by all writers of one request.
#[derive(Debug, Default)]
pub(super) struct HintAccumulator {
    hints: Vec<RawHint>,
}

impl HintAccumulator {
    pub fn push(&mut self, hint: RawHint) -> Result<(), HintError> {
        self.hints.try_reserve(1)?;
        self.hints.push(hint);
        Ok(())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.hints.len()
    }

    /// Sort by offset (stable, so ties keep insertion order) and convert
    /// offsets to positions in one forward pass over `text`.
    pub fn finish(
        mut self,
        text: &str,
        encoding: PositionEncoding,
    ) -> Result<Vec<InlayHint>, HintError> {
        self.hints.sort_by_key(|hint| hint.offset);

        let mut out = Vec::new();
        out.try_reserve_exact(self.hints.len())?;

        let end = TextSize::of(text);
        let mut cursor = PositionCursor::new(text, encoding);
        for hint in self.hints {
            let position = cursor.advance_to(hint.offset.min(end));
            out.push(InlayHint {
                line: position.line,
                col: position.col,
                label: hint.label,
                kind: hint.kind,
                tooltip: hint.tooltip,
                padding_left: false,
                padding_right: hint.kind == InlayHintKind::Parameter,
            });
        }
        Ok(out)
    }
}
