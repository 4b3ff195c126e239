//! # arrowc - arrow functions in, ES5 out
//!
//! A minimal source-to-source compiler for a deliberately tiny surface
//! language: named `const` bindings to single-expression arrow functions,
//! with bodies that are a bare identifier or a two-operand addition.
//!
//! ## Pipeline
//!
//! ```text
//! Source -> Lexer -> Parser -> Transformer -> Code Generator -> Target
//! ```
//!
//! 1. [`lexer`] - source text to a token stream
//! 2. [`parser`] - recursive descent with mark/rewind lookahead, tokens to AST
//! 3. [`transform`] - lowers arrow functions to named function expressions
//! 4. [`codegen`] - renders the lowered tree as ES5 text
//!
//! ## Example
//!
//! ```
//! let output = arrowc::compile("const add = (a, b) => a + b").unwrap();
//! assert_eq!(output, "var add = function add (a, b) {return a + b}");
//! ```

pub mod ast;
pub mod codegen;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod transform;

pub use error::{ArrowcError, ArrowcResult};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;
pub use span::Span;

/// Compile surface source text to target text, composing the four stages in
/// fixed order. The first stage error aborts the whole invocation.
pub fn compile(source: &str) -> ArrowcResult<String> {
    // 1. Lex
    let tokens = Lexer::new(source).tokenize()?;

    // 2. Parse
    let ast = Parser::new(&tokens).parse()?;

    // 3. Lower
    let lowered = transform::transform(&ast)?;

    // 4. Generate code
    Ok(codegen::js::generate(&lowered))
}

/// Version of the arrowc compiler
pub const VERSION: &str = "0.1.0";

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_end_to_end() {
        assert_eq!(
            compile("const add = (a, b) => a + b").unwrap(),
            "var add = function add (a, b) {return a + b}"
        );
    }

    #[test]
    fn test_deterministic() {
        let source = "const add = (a, b) => a + b";
        assert_eq!(compile(source).unwrap(), compile(source).unwrap());
    }

    #[test]
    fn test_unrecognized_character_fails_in_lexer() {
        let err = compile("const x = 1").unwrap_err();
        assert!(matches!(err, ArrowcError::Lexer { .. }));
    }

    #[test]
    fn test_missing_name_fails_in_parser() {
        let err = compile("const = (a) => a").unwrap_err();
        assert!(matches!(err, ArrowcError::Parser { .. }));
    }

    #[test]
    fn test_failed_lookahead_fails_in_transformer() {
        // Known permissive edge case: the parser swallows the failed arrow
        // lookahead and the gap surfaces as an internal fault downstream.
        let err = compile("const x = (a, b)").unwrap_err();
        assert!(matches!(err, ArrowcError::Internal { .. }));
    }

    #[test]
    fn test_output_is_not_in_the_surface_grammar() {
        // The target dialect uses `{`/`}` and keywords the lexer does not
        // know, so feeding the output back is out of contract.
        let output = compile("const add = (a, b) => a + b").unwrap();
        let err = compile(&output).unwrap_err();
        assert!(matches!(err, ArrowcError::Lexer { .. }));
    }

    #[test]
    fn test_empty_source_compiles_to_empty_output() {
        assert_eq!(compile("").unwrap(), "");
    }
}
