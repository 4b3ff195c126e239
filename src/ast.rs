//! arrowc Abstract Syntax Tree
//!
//! The source AST mirrors the surface grammar: a program is a flat list of
//! `const` declarations, each binding a name to an arrow-function literal
//! whose body is at most a two-operand addition.

use crate::error::{ArrowcError, ArrowcResult};
use crate::span::Span;
use std::fmt;

/// A complete surface program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub body: Vec<VariableDeclaration>,
    pub span: Span,
}

/// `const name = <arrow function>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclaration {
    pub kind: DeclKind,
    pub declarations: Vec<VariableDeclarator>,
    pub span: Span,
}

/// One `name = init` binding inside a declaration.
///
/// `init` is `None` when the parser's arrow-function lookahead failed (or no
/// `=` followed the name): the permissive placeholder. Later stages treat a
/// placeholder as a contract violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclarator {
    pub id: Identifier,
    pub init: Option<ArrowFunctionExpression>,
    pub span: Span,
}

/// `(a, b) => a + b`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrowFunctionExpression {
    pub params: Vec<Identifier>,
    pub body: Option<BinaryExpression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

/// `left + right`, or a bare identifier when `op` and `right` are unset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpression {
    pub left: Identifier,
    pub op: Option<BinaryOp>,
    pub right: Option<Identifier>,
    pub span: Span,
}

/// Declaration keyword. The parser only ever produces `Const`; lowering
/// rewrites to `Var`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Const,
    Var,
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclKind::Const => write!(f, "const"),
            DeclKind::Var => write!(f, "var"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOp::Add => write!(f, "+"),
        }
    }
}

/// Callbacks invoked on entry while walking a source tree. Every method
/// defaults to a no-op, so implementors only override the nodes they care
/// about.
pub trait Visitor {
    fn enter_program(&mut self, _node: &Program) -> ArrowcResult<()> {
        Ok(())
    }

    fn enter_declaration(
        &mut self,
        _node: &VariableDeclaration,
        _parent: &Program,
    ) -> ArrowcResult<()> {
        Ok(())
    }

    fn enter_declarator(
        &mut self,
        _node: &VariableDeclarator,
        _parent: &VariableDeclaration,
    ) -> ArrowcResult<()> {
        Ok(())
    }

    fn enter_identifier(
        &mut self,
        _node: &Identifier,
        _parent: &ArrowFunctionExpression,
    ) -> ArrowcResult<()> {
        Ok(())
    }
}

/// Walk a program in source order: declarations, their declarators, and each
/// committed initializer's parameters. Identifiers are leaves.
///
/// A placeholder initializer has no traversal rule and aborts the walk.
pub fn walk<V: Visitor>(program: &Program, visitor: &mut V) -> ArrowcResult<()> {
    visitor.enter_program(program)?;
    for declaration in &program.body {
        visitor.enter_declaration(declaration, program)?;
        for declarator in &declaration.declarations {
            visitor.enter_declarator(declarator, declaration)?;
            match &declarator.init {
                Some(init) => {
                    for param in &init.params {
                        visitor.enter_identifier(param, init)?;
                    }
                }
                None => {
                    return Err(ArrowcError::internal(format!(
                        "no traversal rule for initializer of '{}': not an arrow function",
                        declarator.id.name
                    )));
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Identifier {
        Identifier {
            name: name.to_string(),
            span: Span::default(),
        }
    }

    struct NameCollector {
        names: Vec<String>,
    }

    impl Visitor for NameCollector {
        fn enter_identifier(
            &mut self,
            node: &Identifier,
            _parent: &ArrowFunctionExpression,
        ) -> ArrowcResult<()> {
            self.names.push(node.name.clone());
            Ok(())
        }
    }

    fn one_declaration(init: Option<ArrowFunctionExpression>) -> Program {
        Program {
            body: vec![VariableDeclaration {
                kind: DeclKind::Const,
                declarations: vec![VariableDeclarator {
                    id: ident("f"),
                    init,
                    span: Span::default(),
                }],
                span: Span::default(),
            }],
            span: Span::default(),
        }
    }

    #[test]
    fn test_walk_visits_params_in_order() {
        let program = one_declaration(Some(ArrowFunctionExpression {
            params: vec![ident("a"), ident("b")],
            body: None,
            span: Span::default(),
        }));
        let mut collector = NameCollector { names: vec![] };
        walk(&program, &mut collector).unwrap();
        assert_eq!(collector.names, vec!["a", "b"]);
    }

    #[test]
    fn test_walk_rejects_placeholder_initializer() {
        let program = one_declaration(None);
        let mut collector = NameCollector { names: vec![] };
        let err = walk(&program, &mut collector).unwrap_err();
        assert!(matches!(err, ArrowcError::Internal { .. }));
    }
}
