//! Function signatures as seen by call-site features.

use smol_str::SmolStr;

use crate::syntax::SyntaxKind;
use crate::syntax::ast::{self, AstNode};

/// One declared parameter of a function.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Parameter {
    /// `None` for unnamed parameters such as those of function types.
    pub name: Option<SmolStr>,
    /// Source text of the type expression; empty when there is none.
    pub type_text: SmolStr,
    pub is_anytype: bool,
    pub is_noalias: bool,
    pub is_comptime: bool,
}

impl Parameter {
    /// A named parameter with the given type text and no qualifiers.
    pub fn new(name: impl Into<SmolStr>, type_text: impl Into<SmolStr>) -> Self {
        Self {
            name: Some(name.into()),
            type_text: type_text.into(),
            ..Self::default()
        }
    }
}

/// The ordered parameter list of a function prototype.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FunctionSignature {
    pub params: Vec<Parameter>,
}

impl FunctionSignature {
    pub fn new(params: Vec<Parameter>) -> Self {
        Self { params }
    }

    /// Build the signature of a parsed function declaration.
    pub fn from_fn_decl(decl: &ast::FnDecl) -> Self {
        Self {
            params: decl.params().map(|param| parameter_from_syntax(&param)).collect(),
        }
    }
}

fn parameter_from_syntax(param: &ast::Param) -> Parameter {
    let (is_noalias, is_comptime) = qualifiers(param);
    Parameter {
        name: param.name_token().map(|token| SmolStr::new(token.text())),
        type_text: param
            .type_expr()
            .map(|expr| SmolStr::new(expr.syntax().text().to_string()))
            .unwrap_or_default(),
        is_anytype: param.anytype_token().is_some(),
        is_noalias,
        is_comptime,
    }
}

/// Qualifier flags from the marker token and the token right before it.
fn qualifiers(param: &ast::Param) -> (bool, bool) {
    let Some(marker) = param.qualifier_token() else {
        return (false, false);
    };
    let preceding = ast::prev_significant_token(&marker)
        .filter(|token| token.text_range().start() >= param.syntax().text_range().start());

    let mut is_noalias = false;
    let mut is_comptime = false;
    for kind in std::iter::once(marker.kind()).chain(preceding.map(|token| token.kind())) {
        match kind {
            SyntaxKind::NoaliasKw => is_noalias = true,
            SyntaxKind::ComptimeKw => is_comptime = true,
            _ => {}
        }
    }
    (is_noalias, is_comptime)
}
