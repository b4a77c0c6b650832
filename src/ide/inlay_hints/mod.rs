//! Inlay hints: inline type and parameter annotations.
//!
//! Hints are computed for the smallest nodes overlapping the requested
//! range. Every node inside such a node is visited, so a call nested inside
//! a selected statement still gets its parameter names even when the range
//! ends before it.
//!
//! Three writers contribute:
//! - [`params`] - parameter names at ordinary and field-access call sites
//! - [`builtins`] - parameter names at builtin calls, from static metadata
//! - [`variables`] - inferred types after untyped `const`/`var` names
//!
//! All of them append to one [`HintAccumulator`], which sorts the hints and
//! converts byte offsets into the client's position encoding at the end.

mod accumulator;
mod builtins;
mod params;
mod variables;

use std::collections::TryReserveError;

use text_size::{TextRange, TextSize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::base::PositionEncoding;
use crate::hir::{BuiltinTable, Semantics};
use crate::syntax::ast::{self, AstNode};
use crate::syntax::{SourceFile, SyntaxKind, SyntaxNode};

use accumulator::{HintAccumulator, RawHint};

/// Kind of inlay hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlayHintKind {
    /// Type annotation hint (e.g., `: u32`)
    Type,
    /// Parameter name hint (e.g., `width:`)
    Parameter,
}

/// Markup format a client accepts for tooltips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MarkupKind {
    #[default]
    PlainText,
    Markdown,
}

/// Hover text attached to a hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlayHintTooltip {
    pub kind: MarkupKind,
    pub value: String,
}

/// An inlay hint to display in the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlayHint {
    /// Line where the hint should appear (0-indexed)
    pub line: u32,
    /// Column where the hint should appear (0-indexed, in the requested encoding)
    pub col: u32,
    /// The text to display
    pub label: String,
    /// The kind of hint
    pub kind: InlayHintKind,
    /// Optional hover text
    pub tooltip: Option<InlayHintTooltip>,
    /// Whether to add padding before the hint
    pub padding_left: bool,
    /// Whether to add padding after the hint
    pub padding_right: bool,
}

/// User-facing switches for inlay hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct InlayHintsConfig {
    /// Parameter names at call sites.
    pub show_parameter_names: bool,
    /// Inferred types of untyped variable declarations.
    pub show_variable_declarations: bool,
    /// Parameter names at builtin calls (also needs `show_parameter_names`).
    pub show_builtins: bool,
    /// No parameter name hints for calls with exactly one argument.
    pub exclude_single_argument_calls: bool,
    /// Hide `b:` before an argument that is just the identifier `b`.
    pub hide_redundant_param_names: bool,
    /// Hide `b:` before a longer argument ending in the identifier `b`, like `self.b`.
    pub hide_redundant_param_names_last_token: bool,
}

impl Default for InlayHintsConfig {
    fn default() -> Self {
        Self {
            show_parameter_names: true,
            show_variable_declarations: true,
            show_builtins: true,
            exclude_single_argument_calls: true,
            hide_redundant_param_names: false,
            hide_redundant_param_names_last_token: false,
        }
    }
}

/// Everything about a hint request besides the document and range.
#[derive(Debug, Clone, Copy)]
pub struct HintOptions<'a> {
    pub config: InlayHintsConfig,
    /// Preferred tooltip markup of the client.
    pub markup: MarkupKind,
    /// Column unit of the client.
    pub encoding: PositionEncoding,
    /// Builtin metadata; [`BuiltinTable::standard`] unless overridden.
    pub builtins: &'a BuiltinTable,
}

impl Default for HintOptions<'static> {
    fn default() -> Self {
        Self {
            config: InlayHintsConfig::default(),
            markup: MarkupKind::default(),
            encoding: PositionEncoding::default(),
            builtins: BuiltinTable::standard(),
        }
    }
}

/// Failure of a whole hint request. No partial results are returned.
#[derive(Debug, Error)]
pub enum HintError {
    #[error("out of memory while collecting inlay hints")]
    OutOfMemory(#[from] TryReserveError),
}

/// Get inlay hints for a file.
///
/// # Arguments
///
/// * `semantics` - Analyser answering symbol, alias, and type queries
/// * `file` - The parsed document
/// * `range` - Byte range; top-level declarations touching it are hinted in full
/// * `options` - Config switches, client markup and encoding, builtin table
///
/// # Returns
///
/// Hints ordered by source offset; hints at the same offset keep the order
/// they were produced in.
#[instrument(level = "debug", skip_all, fields(range = ?range))]
pub fn inlay_hints<S: Semantics>(
    semantics: &S,
    file: &SourceFile,
    range: TextRange,
    options: &HintOptions<'_>,
) -> Result<Vec<InlayHint>, HintError> {
    let mut ctx = HintContext {
        semantics,
        options,
        hints: HintAccumulator::default(),
    };

    for top in nodes_overlapping(&file.syntax(), range) {
        for node in top.descendants() {
            ctx.visit(&node)?;
        }
    }

    let hints = ctx.hints.finish(file.text(), options.encoding)?;
    debug!(count = hints.len(), "inlay hints computed");
    Ok(hints)
}

/// Smallest nodes whose spans touch `range` (both ends inclusive).
///
/// Starting at the file, descend into a child while it is the only child
/// touching the range, it contains the range, and the range touches none of
/// the current node's own tokens. A node whose own tokens are touched, or
/// whose children miss the range, is returned itself.
fn nodes_overlapping(root: &SyntaxNode, range: TextRange) -> Vec<SyntaxNode> {
    let mut parent = root.clone();
    let mut at_root = true;
    loop {
        if !at_root && touches_own_token(&parent, range) {
            return vec![parent];
        }
        let mut overlapping: Vec<SyntaxNode> = parent
            .children()
            .filter(|node| touches(node.text_range(), range))
            .collect();
        match overlapping.len() {
            0 if at_root => return Vec::new(),
            0 => return vec![parent],
            1 if overlapping[0].text_range().contains_range(range) => {
                parent = overlapping.swap_remove(0);
                at_root = false;
            }
            _ => return overlapping,
        }
    }
}

fn touches(span: TextRange, range: TextRange) -> bool {
    span.start() <= range.end() && range.start() <= span.end()
}

fn touches_own_token(node: &SyntaxNode, range: TextRange) -> bool {
    node.children_with_tokens()
        .filter_map(|element| element.into_token())
        .any(|token| !token.kind().is_trivia() && touches(token.text_range(), range))
}

/// Per-request state threaded through the writers.
struct HintContext<'a, S> {
    semantics: &'a S,
    options: &'a HintOptions<'a>,
    hints: HintAccumulator,
}

impl<S: Semantics> HintContext<'_, S> {
    fn config(&self) -> &InlayHintsConfig {
        &self.options.config
    }

    fn visit(&mut self, node: &SyntaxNode) -> Result<(), HintError> {
        match node.kind() {
            SyntaxKind::CallExpr => {
                if !self.config().show_parameter_names {
                    return Ok(());
                }
                let Some(call) = ast::CallExpr::cast(node.clone()) else {
                    return Ok(());
                };
                if self.config().exclude_single_argument_calls && call.args().count() == 1 {
                    return Ok(());
                }
                params::write_call_hints(self, &call)
            }
            SyntaxKind::BuiltinCall => {
                if !(self.config().show_parameter_names && self.config().show_builtins) {
                    return Ok(());
                }
                match ast::BuiltinCall::cast(node.clone()) {
                    Some(call) => builtins::write_builtin_hints(self, &call),
                    None => Ok(()),
                }
            }
            SyntaxKind::VarDecl => {
                if !self.config().show_variable_declarations {
                    return Ok(());
                }
                match ast::VarDecl::cast(node.clone()) {
                    Some(decl) => variables::write_variable_hint(self, &decl),
                    None => Ok(()),
                }
            }
            _ => Ok(()),
        }
    }

    /// Emit `name:` before `argument`, with a tooltip describing the parameter.
    fn push_parameter_hint(
        &mut self,
        argument: &ast::Expr,
        name: &str,
        qualifiers: Qualifiers,
        type_text: &str,
    ) -> Result<(), HintError> {
        let Some(anchor) = argument.first_token() else {
            return Ok(());
        };
        let tooltip = parameter_tooltip(self.options.markup, qualifiers, type_text);
        self.hints.push(RawHint {
            offset: anchor.text_range().start(),
            label: format!("{name}:"),
            kind: InlayHintKind::Parameter,
            tooltip: Some(tooltip),
        })
    }

    fn push_type_hint(&mut self, offset: TextSize, type_text: &str) -> Result<(), HintError> {
        self.hints.push(RawHint {
            offset,
            label: format!(": {type_text}"),
            kind: InlayHintKind::Type,
            tooltip: None,
        })
    }
}

/// `noalias`/`comptime` flags of a parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Qualifiers {
    noalias: bool,
    comptime: bool,
}

impl Qualifiers {
    fn prefix(self) -> &'static str {
        match (self.noalias, self.comptime) {
            (true, true) => "noalias comptime ",
            (true, false) => "noalias ",
            (false, true) => "comptime ",
            (false, false) => "",
        }
    }
}

fn parameter_tooltip(markup: MarkupKind, qualifiers: Qualifiers, body: &str) -> InlayHintTooltip {
    let value = if body.is_empty() {
        String::new()
    } else {
        let prefix = qualifiers.prefix();
        match markup {
            MarkupKind::Markdown => format!("```zig\n{prefix}{body}\n```"),
            MarkupKind::PlainText => format!("{prefix}{body}"),
        }
    };
    InlayHintTooltip {
        kind: markup,
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(false, false, "u32")]
    #[case(true, false, "noalias u32")]
    #[case(false, true, "comptime u32")]
    #[case(true, true, "noalias comptime u32")]
    fn test_tooltip_prefix(#[case] noalias: bool, #[case] comptime: bool, #[case] expected: &str) {
        let tooltip = parameter_tooltip(MarkupKind::PlainText, Qualifiers { noalias, comptime }, "u32");
        assert_eq!(tooltip.value, expected);
        assert_eq!(tooltip.kind, MarkupKind::PlainText);
    }

    #[test]
    fn test_tooltip_markdown_fence() {
        let tooltip = parameter_tooltip(
            MarkupKind::Markdown,
            Qualifiers { noalias: false, comptime: true },
            "type",
        );
        assert_eq!(tooltip.value, "```zig\ncomptime type\n```");
    }

    #[test]
    fn test_tooltip_empty_body_is_empty() {
        let tooltip = parameter_tooltip(
            MarkupKind::Markdown,
            Qualifiers { noalias: true, comptime: false },
            "",
        );
        assert_eq!(tooltip.value, "");
    }

    fn range(start: u32, end: u32) -> TextRange {
        TextRange::new(TextSize::from(start), TextSize::from(end))
    }

    fn texts(nodes: Vec<SyntaxNode>) -> Vec<String> {
        nodes.into_iter().map(|node| node.text().to_string()).collect()
    }

    #[test]
    fn test_overlapping_nodes_are_inclusive() {
        let file = SourceFile::parse("const a = 1;\nconst b = 2;\nconst c = 3;\n");
        // `a` spans 0..12, `b` 13..25, `c` 26..38
        assert_eq!(texts(nodes_overlapping(&file.syntax(), range(13, 13))), vec!["const b = 2;"]);
        assert_eq!(
            texts(nodes_overlapping(&file.syntax(), range(12, 26))),
            vec!["const a = 1;", "const b = 2;", "const c = 3;"]
        );
        assert!(nodes_overlapping(&file.syntax(), range(40, 40)).is_empty());
    }

    #[rstest]
    // `foo(3, 4);`
    #[case(36, 46, &["foo(3, 4);"])]
    // `3, 4`
    #[case(40, 44, &["(3, 4)"])]
    // inside the second `foo`
    #[case(37, 38, &["foo"])]
    // both statements
    #[case(21, 46, &["foo(1, 2);", "foo(3, 4);"])]
    // indentation between the statements
    #[case(32, 35, &["{\n    foo(1, 2);\n    foo(3, 4);\n}"])]
    fn test_overlapping_nodes_descend_to_smallest(
        #[case] start: u32,
        #[case] end: u32,
        #[case] expected: &[&str],
    ) {
        let file = SourceFile::parse("fn main() void {\n    foo(1, 2);\n    foo(3, 4);\n}\n");
        assert_eq!(texts(nodes_overlapping(&file.syntax(), range(start, end))), expected);
    }

    #[test]
    fn test_config_defaults() {
        let config = InlayHintsConfig::default();
        assert!(config.show_parameter_names);
        assert!(config.show_variable_declarations);
        assert!(config.show_builtins);
        assert!(config.exclude_single_argument_calls);
        assert!(!config.hide_redundant_param_names);
        assert!(!config.hide_redundant_param_names_last_token);
    }
}
