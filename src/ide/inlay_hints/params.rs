//! Parameter name hints at call sites.

use text_size::TextSize;
use tracing::{debug, trace};

use super::{HintContext, HintError, Qualifiers};
use crate::hir::{Declaration, Semantics};
use crate::syntax::SyntaxKind;
use crate::syntax::ast::{self, AstNode};

/// Outcome of resolving a callee, before checking it is a function.
enum Resolution {
    Unresolved,
    Direct(Declaration),
    ViaAlias(Declaration),
}

impl Resolution {
    /// Follow at most one alias hop from `decl`.
    fn from_lookup<S: Semantics>(semantics: &S, decl: Option<Declaration>) -> Self {
        match decl {
            None => Resolution::Unresolved,
            Some(decl) => match semantics.resolve_alias(&decl) {
                Some(target) => Resolution::ViaAlias(target),
                None => Resolution::Direct(decl),
            },
        }
    }

    /// The resolved declaration if it is a function prototype.
    fn into_function(self) -> Option<Declaration> {
        match self {
            Resolution::Unresolved => None,
            Resolution::Direct(decl) | Resolution::ViaAlias(decl) => {
                if decl.signature().is_some() {
                    Some(decl)
                } else {
                    trace!(name = %decl.name, "callee is not a function");
                    None
                }
            }
        }
    }
}

pub(super) fn write_call_hints<S: Semantics>(
    ctx: &mut HintContext<'_, S>,
    call: &ast::CallExpr,
) -> Result<(), HintError> {
    let Some(callee) = call.callee() else {
        return Ok(());
    };
    let origin = call.syntax().text_range().start();
    let Some(decl) = resolve_callee(ctx.semantics, &callee, origin).into_function() else {
        return Ok(());
    };
    let Some(signature) = decl.signature() else {
        return Ok(());
    };

    let args: Vec<ast::Expr> = call.args().collect();
    let mut params = signature.params.as_slice();
    if params.len() == args.len() + 1 && ctx.semantics.is_instance_style_call(call, &decl) {
        params = &params[1..];
    }

    for (param, arg) in params.iter().zip(&args) {
        let Some(name) = param.name.as_deref() else {
            continue;
        };
        if is_redundant(ctx, name, arg) {
            continue;
        }
        let body = if param.is_anytype {
            "anytype"
        } else {
            param.type_text.as_str()
        };
        let qualifiers = Qualifiers {
            noalias: param.is_noalias,
            comptime: param.is_comptime,
        };
        ctx.push_parameter_hint(arg, name, qualifiers, body)?;
    }
    Ok(())
}

fn resolve_callee<S: Semantics>(semantics: &S, callee: &ast::Expr, origin: TextSize) -> Resolution {
    let found = match callee.syntax().kind() {
        SyntaxKind::NameRef => ast::NameRef::cast(callee.syntax().clone())
            .and_then(|name| name.ident())
            .and_then(|ident| semantics.lookup_global_symbol(ident.text(), origin)),
        SyntaxKind::FieldExpr => {
            let Some(field) = ast::FieldExpr::cast(callee.syntax().clone()) else {
                return Resolution::Unresolved;
            };
            let (Some(receiver), Some(member)) = (field.receiver(), field.field_name()) else {
                return Resolution::Unresolved;
            };
            semantics
                .resolve_receiver_type(&receiver, origin)
                .and_then(|ty| semantics.lookup_member(&ty, member.text()))
        }
        kind => {
            debug!(?kind, "no parameter hints for this callee shape");
            return Resolution::Unresolved;
        }
    };
    if found.is_none() {
        trace!(callee = %callee.syntax().text(), "callee unresolved");
    }
    Resolution::from_lookup(semantics, found)
}

/// Whether the argument already spells the parameter name and the config
/// asks to hide such hints.
fn is_redundant<S: Semantics>(ctx: &HintContext<'_, S>, name: &str, arg: &ast::Expr) -> bool {
    let Some(last) = arg.last_token() else {
        return false;
    };
    if last.kind() != SyntaxKind::Ident || last.text() != name {
        return false;
    }
    let config = ctx.config();
    if arg.is_single_token() {
        config.hide_redundant_param_names
    } else {
        config.hide_redundant_param_names_last_token
    }
}
