//! arrowc Lexer - tokenizes the surface language
//!
//! The surface language is deliberately tiny: the `const` and `return`
//! keywords, identifiers, and the punctuators `=`, `(`, `,`, `)`, `+` and
//! `=>`. Everything else is a fatal lexing error.

use crate::error::{ArrowcError, ArrowcResult};
use crate::span::Span;
use logos::Logos;

#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    // === Keywords ===
    #[token("const")]
    Const,
    #[token("return")]
    Return,

    // === Identifiers ===
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*", |lex| lex.slice().to_string())]
    Ident(String),

    // === Punctuators ===
    // `=>` must outrank `=`; logos picks the longest match, so `=>` is
    // always a single token.
    #[token("=>")]
    FatArrow,
    #[token("=")]
    Eq,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token("+")]
    Plus,

    // Synthetic end-of-input marker, appended after the scan
    Eof,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

pub struct Lexer<'a> {
    source: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Scan the whole input. Fails fast on the first unrecognized
    /// character; no partial token list is returned.
    pub fn tokenize(&self) -> ArrowcResult<Vec<Token>> {
        let mut lex = TokenKind::lexer(self.source);
        let mut tokens = Vec::new();

        while let Some(result) = lex.next() {
            let span = Span::new(lex.span().start, lex.span().end);
            match result {
                Ok(kind) => tokens.push(Token::new(kind, span)),
                Err(_) => {
                    return Err(ArrowcError::lexer(
                        format!("Unexpected character: '{}'", &self.source[span.start..span.end]),
                        span,
                    ));
                }
            }
        }

        let end = Span::new(self.source.len(), self.source.len());
        tokens.push(Token::new(TokenKind::Eof, end));
        Ok(tokens)
    }
}
