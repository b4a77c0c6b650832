//! Typed views over [`SyntaxNode`]s.
//!
//! Each wrapper is a newtype around a node of one kind. Accessors return
//! `Option` because the tree may be incomplete after error recovery.

use super::{SyntaxKind, SyntaxNode, SyntaxToken};

/// Common interface of the typed node wrappers.
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;

    /// First token of the node that is not whitespace or a comment.
    fn first_token(&self) -> Option<SyntaxToken> {
        first_significant_token(self.syntax())
    }

    /// Last token of the node that is not whitespace or a comment.
    fn last_token(&self) -> Option<SyntaxToken> {
        last_significant_token(self.syntax())
    }
}

macro_rules! ast_node {
    ($(#[$meta:meta])* $name:ident, $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                Self::can_cast(node.kind()).then(|| Self(node))
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(
    /// A function call `callee(args...)`.
    CallExpr, CallExpr
);
ast_node!(
    /// A compiler-intrinsic call `@name(args...)`.
    BuiltinCall, BuiltinCall
);
ast_node!(ArgList, ArgList);
ast_node!(
    /// Member access `receiver.field`.
    FieldExpr, FieldExpr
);
ast_node!(
    /// A bare identifier used as an expression.
    NameRef, NameRef
);
ast_node!(
    /// `const`/`var` declaration, at top level, in a block, or in a container.
    VarDecl, VarDecl
);
ast_node!(TypeAnnotation, TypeAnnotation);
ast_node!(FnDecl, FnDecl);
ast_node!(ParamList, ParamList);
ast_node!(Param, Param);
ast_node!(ContainerDecl, ContainerDecl);

/// Any expression node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expr(SyntaxNode);

impl AstNode for Expr {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind.is_expr()
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        Self::can_cast(node.kind()).then(|| Self(node))
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.0
    }
}

impl Expr {
    /// Whether the expression is exactly one significant token.
    pub fn is_single_token(&self) -> bool {
        match (self.first_token(), self.last_token()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }
}

impl CallExpr {
    pub fn callee(&self) -> Option<Expr> {
        child(&self.0)
    }

    pub fn arg_list(&self) -> Option<ArgList> {
        child(&self.0)
    }

    /// Arguments in source order.
    pub fn args(&self) -> impl Iterator<Item = Expr> + use<> {
        self.arg_list().into_iter().flat_map(|list| list.args())
    }
}

impl BuiltinCall {
    /// The `@name` token.
    pub fn name_token(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::BuiltinIdent)
    }

    pub fn arg_list(&self) -> Option<ArgList> {
        child(&self.0)
    }

    pub fn args(&self) -> impl Iterator<Item = Expr> + use<> {
        self.arg_list().into_iter().flat_map(|list| list.args())
    }
}

impl ArgList {
    pub fn args(&self) -> impl Iterator<Item = Expr> + use<> {
        self.0.children().filter_map(Expr::cast)
    }
}

impl FieldExpr {
    /// The expression left of the dot.
    pub fn receiver(&self) -> Option<Expr> {
        child(&self.0)
    }

    /// The member identifier right of the dot.
    pub fn field_name(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|element| element.into_token())
            .filter(|token| token.kind() == SyntaxKind::Ident)
            .last()
    }
}

impl NameRef {
    pub fn ident(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Ident)
    }
}

impl VarDecl {
    /// The `const` or `var` keyword.
    pub fn mut_token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|element| element.into_token())
            .find(|token| matches!(token.kind(), SyntaxKind::ConstKw | SyntaxKind::VarKw))
    }

    /// The significant token right after the mutability keyword, i.e. the
    /// declared name when the declaration is well formed.
    pub fn name_token(&self) -> Option<SyntaxToken> {
        next_significant_token(&self.mut_token()?)
    }

    pub fn is_const(&self) -> bool {
        self.mut_token()
            .is_some_and(|token| token.kind() == SyntaxKind::ConstKw)
    }

    pub fn type_annotation(&self) -> Option<TypeAnnotation> {
        child(&self.0)
    }

    /// The expression after `=`.
    pub fn initializer(&self) -> Option<Expr> {
        let eq = token(&self.0, SyntaxKind::Eq)?;
        self.0
            .children()
            .filter(|node| node.text_range().start() >= eq.text_range().end())
            .find_map(Expr::cast)
    }
}

impl TypeAnnotation {
    pub fn type_expr(&self) -> Option<Expr> {
        child(&self.0)
    }
}

impl FnDecl {
    pub fn name_token(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Ident)
    }

    pub fn param_list(&self) -> Option<ParamList> {
        child(&self.0)
    }

    pub fn params(&self) -> impl Iterator<Item = Param> + use<> {
        self.param_list()
            .into_iter()
            .flat_map(|list| list.0.children().filter_map(Param::cast))
    }
}

impl Param {
    /// The last `noalias`/`comptime` keyword before the name.
    pub fn qualifier_token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|element| element.into_token())
            .filter(|token| token.kind().is_param_qualifier())
            .last()
    }

    /// The parameter name, absent for unnamed parameters.
    pub fn name_token(&self) -> Option<SyntaxToken> {
        let colon = token(&self.0, SyntaxKind::Colon)?;
        prev_significant_token(&colon).filter(|token| token.kind() == SyntaxKind::Ident)
    }

    pub fn anytype_token(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::AnytypeKw)
    }

    pub fn type_expr(&self) -> Option<Expr> {
        child(&self.0)
    }
}

impl ContainerDecl {
    /// Functions declared directly inside the container.
    pub fn fns(&self) -> impl Iterator<Item = FnDecl> + use<> {
        self.0.children().filter_map(FnDecl::cast)
    }
}

fn child<N: AstNode>(parent: &SyntaxNode) -> Option<N> {
    parent.children().find_map(N::cast)
}

fn token(parent: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    parent
        .children_with_tokens()
        .filter_map(|element| element.into_token())
        .find(|token| token.kind() == kind)
}

pub(crate) fn first_significant_token(node: &SyntaxNode) -> Option<SyntaxToken> {
    let first = node.first_token()?;
    if first.kind().is_trivia() {
        next_significant_token(&first).filter(|token| token.text_range().end() <= node.text_range().end())
    } else {
        Some(first)
    }
}

pub(crate) fn last_significant_token(node: &SyntaxNode) -> Option<SyntaxToken> {
    let last = node.last_token()?;
    if last.kind().is_trivia() {
        prev_significant_token(&last).filter(|token| token.text_range().start() >= node.text_range().start())
    } else {
        Some(last)
    }
}

/// The next non-trivia token in the whole tree.
pub fn next_significant_token(token: &SyntaxToken) -> Option<SyntaxToken> {
    let mut current = token.next_token();
    while let Some(next) = current {
        if !next.kind().is_trivia() {
            return Some(next);
        }
        current = next.next_token();
    }
    None
}

/// The previous non-trivia token in the whole tree.
pub fn prev_significant_token(token: &SyntaxToken) -> Option<SyntaxToken> {
    let mut current = token.prev_token();
    while let Some(prev) = current {
        if !prev.kind().is_trivia() {
            return Some(prev);
        }
        current = prev.prev_token();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::SourceFile;

    fn first<N: AstNode>(text: &str) -> N {
        SourceFile::parse(text)
            .syntax()
            .descendants()
            .find_map(N::cast)
            .unwrap()
    }

    #[test]
    fn test_call_args() {
        let call: CallExpr = first("foo(a, b.c, 3);");
        let args: Vec<String> = call.args().map(|a| a.syntax().text().to_string()).collect();
        assert_eq!(args, vec!["a", "b.c", "3"]);
        assert!(matches!(call.callee(), Some(e) if e.syntax().kind() == SyntaxKind::NameRef));
    }

    #[test]
    fn test_field_expr_parts() {
        let field: FieldExpr = first("a.b.c;");
        assert_eq!(field.field_name().unwrap().text(), "c");
        assert_eq!(field.receiver().unwrap().syntax().text().to_string(), "a.b");
    }

    #[test]
    fn test_var_decl_parts() {
        let decl: VarDecl = first("pub const answer = 42;");
        assert!(decl.is_const());
        assert_eq!(decl.name_token().unwrap().text(), "answer");
        assert!(decl.type_annotation().is_none());
        assert_eq!(decl.initializer().unwrap().syntax().text().to_string(), "42");

        let typed: VarDecl = first("var n: u32 = 1;");
        assert!(!typed.is_const());
        let ty = typed.type_annotation().and_then(|t| t.type_expr()).unwrap();
        assert_eq!(ty.syntax().text().to_string(), "u32");
        assert_eq!(typed.initializer().unwrap().syntax().text().to_string(), "1");
    }

    #[test]
    fn test_param_parts() {
        let decl: FnDecl = first("fn f(noalias comptime a: *T, u32, x: anytype) void {}");
        let params: Vec<Param> = decl.params().collect();
        assert_eq!(params.len(), 3);

        assert_eq!(params[0].qualifier_token().unwrap().text(), "comptime");
        assert_eq!(params[0].name_token().unwrap().text(), "a");
        assert_eq!(params[0].type_expr().unwrap().syntax().text().to_string(), "*T");

        assert!(params[1].name_token().is_none());
        assert!(params[1].qualifier_token().is_none());

        assert!(params[2].anytype_token().is_some());
        assert!(params[2].type_expr().is_none());
    }

    #[test]
    fn test_single_token_expr() {
        let call: CallExpr = first("foo(b, self.b);");
        let args: Vec<Expr> = call.args().collect();
        assert!(args[0].is_single_token());
        assert!(!args[1].is_single_token());
        assert_eq!(args[1].last_token().unwrap().text(), "b");
    }
}
