//! ES5 JavaScript output
//!
//! Pure structural recursion over the lowered tree. Rendering concatenates
//! child renderings in source order with single-space separators; it does not
//! validate anything beyond the shape the lowered node family already
//! guarantees.

use crate::ast::BinaryExpression;
use crate::transform::{
    BlockStatement, FunctionExpression, Program, ReturnStatement, VariableDeclaration,
    VariableDeclarator,
};

/// Render a lowered program. Declarations are concatenated directly, with no
/// separator between them.
pub fn generate(program: &Program) -> String {
    program.body.iter().map(render_declaration).collect()
}

fn render_declaration(declaration: &VariableDeclaration) -> String {
    let declarators: Vec<String> = declaration.declarations.iter().map(render_declarator).collect();
    format!("{} {}", declaration.kind, declarators.join(", "))
}

fn render_declarator(declarator: &VariableDeclarator) -> String {
    format!(
        "{} = function{}",
        declarator.id.name,
        render_function(&declarator.init)
    )
}

fn render_function(function: &FunctionExpression) -> String {
    let params: Vec<&str> = function.params.iter().map(|p| p.name.as_str()).collect();
    format!(
        " {} ({}) {}",
        function.id.name,
        params.join(", "),
        render_block(&function.body)
    )
}

fn render_block(block: &BlockStatement) -> String {
    let body: String = block.body.iter().map(render_return).collect();
    format!("{{{}}}", body)
}

fn render_return(statement: &ReturnStatement) -> String {
    format!("return {}", render_binary(&statement.argument))
}

fn render_binary(expr: &BinaryExpression) -> String {
    match (&expr.op, &expr.right) {
        (Some(op), Some(right)) => format!("{} {} {}", expr.left.name, op, right.name),
        _ => expr.left.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::Parser;
    use crate::transform::transform;
    use pretty_assertions::assert_eq;

    fn generate_source(source: &str) -> String {
        let tokens = Lexer::new(source).tokenize().unwrap();
        let program = Parser::new(&tokens).parse().unwrap();
        generate(&transform(&program).unwrap())
    }

    #[test]
    fn test_canonical_output() {
        assert_eq!(
            generate_source("const add = (a, b) => a + b"),
            "var add = function add (a, b) {return a + b}"
        );
    }

    #[test]
    fn test_bare_identifier_body() {
        assert_eq!(
            generate_source("const id = (a) => a"),
            "var id = function id (a) {return a}"
        );
    }

    #[test]
    fn test_lone_identifier_head_drops_param() {
        assert_eq!(
            generate_source("const id = a => a"),
            "var id = function id () {return a}"
        );
    }

    #[test]
    fn test_zero_params() {
        assert_eq!(
            generate_source("const f = () => x"),
            "var f = function f () {return x}"
        );
    }

    #[test]
    fn test_declarations_concatenate_without_separator() {
        assert_eq!(
            generate_source("const f = (x) => x + y const g = (z) => z"),
            "var f = function f (x) {return x + y}var g = function g (z) {return z}"
        );
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(generate_source(""), "");
    }
}
