//! Parameter name hints at builtin calls.

use tracing::trace;

use super::{HintContext, HintError, Qualifiers};
use crate::hir::builtins::{self, BuiltinArgument};
use crate::hir::Semantics;
use crate::syntax::ast;

pub(super) fn write_builtin_hints<S: Semantics>(
    ctx: &mut HintContext<'_, S>,
    call: &ast::BuiltinCall,
) -> Result<(), HintError> {
    let Some(name_token) = call.name_token() else {
        return Ok(());
    };
    let name = name_token.text();
    if builtins::is_excluded(name) {
        trace!(name, "builtin excluded from hints");
        return Ok(());
    }
    let Some(descriptor) = ctx.options.builtins.get(name) else {
        trace!(name, "unknown builtin");
        return Ok(());
    };

    for (arg, raw) in call.args().zip(descriptor.arguments) {
        if raw.is_empty() {
            continue;
        }
        let parsed = BuiltinArgument::parse(raw);
        if parsed.ends_arguments() {
            break;
        }
        let qualifiers = Qualifiers {
            noalias: parsed.is_noalias,
            comptime: parsed.is_comptime,
        };
        ctx.push_parameter_hint(&arg, parsed.label, qualifiers, parsed.type_text)?;
    }
    Ok(())
}
