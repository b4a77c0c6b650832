//! Inferred type hints after untyped declarations.

use super::{HintContext, HintError};
use crate::hir::Semantics;
use crate::syntax::ast;

pub(super) fn write_variable_hint<S: Semantics>(
    ctx: &mut HintContext<'_, S>,
    decl: &ast::VarDecl,
) -> Result<(), HintError> {
    if decl.type_annotation().is_some() {
        return Ok(());
    }
    let Some(ty) = ctx.semantics.resolve_declared_type(decl) else {
        return Ok(());
    };
    let text = ty.display_text();
    if text.is_empty() {
        return Ok(());
    }
    // Render as `const name: T`, right after the token following `const`/`var`.
    let Some(name) = decl.name_token() else {
        return Ok(());
    };
    ctx.push_type_hint(name.text_range().end(), text)
}
