//! arrowc Parser - recursive descent with explicit backtracking
//!
//! The grammar is a single declaration form: `const NAME = <arrow function>`.
//! Arrow-function literals are recognized with a two-pass lookahead: the
//! parser marks its position, scans ahead over what may be a parameter list,
//! and checks for a trailing `=>`. Only when that check succeeds does it
//! rewind and parse params and body for real; otherwise the initializer is
//! left as a placeholder and the cursor stays where the probe stopped.

use crate::ast;
use crate::ast::{BinaryOp, DeclKind};
use crate::error::{ArrowcError, ArrowcResult};
use crate::lexer::{Token, TokenKind};
use crate::span::Span;

static EOF: TokenKind = TokenKind::Eof;

pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    marks: Vec<usize>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            marks: Vec::new(),
        }
    }

    /// Parse a whole program: declarations until the first position where no
    /// declaration can be recognized. Stopping there is normal termination,
    /// not an error.
    pub fn parse(&mut self) -> ArrowcResult<ast::Program> {
        let start = self.current_span();
        let mut body = Vec::new();

        while !self.at_end() {
            match self.parse_declaration()? {
                Some(declaration) => body.push(declaration),
                None => break,
            }
        }

        let span = start.merge(self.prev_span());
        Ok(ast::Program { body, span })
    }

    fn parse_declaration(&mut self) -> ArrowcResult<Option<ast::VariableDeclaration>> {
        if !self.check(&TokenKind::Const) {
            return Ok(None);
        }
        let start = self.current_span();
        self.advance();

        let id = match self.eat_identifier() {
            Some(id) => id,
            None => {
                return Err(ArrowcError::parser(
                    "Expected variable name after 'const'",
                    self.current_span(),
                ));
            }
        };

        let init = if self.check(&TokenKind::Eq) {
            self.advance();
            self.parse_arrow_function()
        } else {
            None
        };

        let span = start.merge(self.prev_span());
        let declarator = ast::VariableDeclarator { id, init, span };
        Ok(Some(ast::VariableDeclaration {
            kind: DeclKind::Const,
            declarations: vec![declarator],
            span,
        }))
    }

    /// Arrow-function literal, or `None` (the permissive placeholder) when
    /// the lookahead finds no trailing `=>`. Params are re-parsed after the
    /// rewind, never reused from the probe.
    fn parse_arrow_function(&mut self) -> Option<ast::ArrowFunctionExpression> {
        if !matches!(self.peek_kind(), TokenKind::LParen | TokenKind::Ident(_)) {
            return None;
        }

        self.mark();
        if !self.scan_arrow_head() {
            // Probe failed: no rewind, the cursor stays where it stopped.
            return None;
        }
        self.rewind();

        let start = self.current_span();
        let params = self.parse_params();
        let body = self.parse_body();
        let span = start.merge(self.prev_span());
        Some(ast::ArrowFunctionExpression { params, body, span })
    }

    /// Probe for an arrow head: step past either a lone identifier or a
    /// parenthesized identifier/comma run, then report whether `=>` follows.
    fn scan_arrow_head(&mut self) -> bool {
        match self.peek_kind() {
            TokenKind::LParen => {
                self.advance();
                while matches!(self.peek_kind(), TokenKind::Ident(_) | TokenKind::Comma) {
                    self.advance();
                }
                if !self.check(&TokenKind::RParen) {
                    return false;
                }
                self.advance();
                self.check(&TokenKind::FatArrow)
            }
            TokenKind::Ident(_) => {
                self.advance();
                self.check(&TokenKind::FatArrow)
            }
            _ => false,
        }
    }

    /// Committed parameter parse: identifiers collected, commas skipped,
    /// until `)`. Without a leading `(` the list stays empty. The closing
    /// `)` (or the lone-identifier head) is left for the body parse to step
    /// over.
    fn parse_params(&mut self) -> Vec<ast::Identifier> {
        let mut params = Vec::new();
        if self.check(&TokenKind::LParen) {
            self.advance();
            while !self.check(&TokenKind::RParen) && !self.at_end() {
                match self.eat_identifier() {
                    Some(id) => params.push(id),
                    None => self.advance(),
                }
            }
        }
        params
    }

    /// Committed body parse: step past the head close, skip an optional
    /// leading `=>`, then an identifier as the left operand. A `+` captures
    /// the operator and a following identifier as the right operand; a bare
    /// identifier yields a left-only expression. No identifier at all yields
    /// an empty body.
    fn parse_body(&mut self) -> Option<ast::BinaryExpression> {
        self.advance();
        if self.check(&TokenKind::FatArrow) {
            self.advance();
        }

        let left = self.eat_identifier()?;
        let start = left.span;

        let (op, right) = if self.check(&TokenKind::Plus) {
            self.advance();
            (Some(BinaryOp::Add), self.eat_identifier())
        } else {
            (None, None)
        };

        let span = start.merge(self.prev_span());
        Some(ast::BinaryExpression {
            left,
            op,
            right,
            span,
        })
    }

    fn eat_identifier(&mut self) -> Option<ast::Identifier> {
        if let TokenKind::Ident(name) = self.peek_kind() {
            let id = ast::Identifier {
                name: name.clone(),
                span: self.current_span(),
            };
            self.advance();
            Some(id)
        } else {
            None
        }
    }

    fn peek_kind(&self) -> &TokenKind {
        self.tokens.get(self.pos).map(|t| &t.kind).unwrap_or(&EOF)
    }

    fn check(&self, kind: &TokenKind) -> bool {
        self.peek_kind() == kind
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn at_end(&self) -> bool {
        matches!(self.peek_kind(), TokenKind::Eof)
    }

    fn current_span(&self) -> Span {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|t| t.span)
            .unwrap_or_default()
    }

    fn prev_span(&self) -> Span {
        match self.pos.checked_sub(1) {
            Some(prev) => self.tokens.get(prev).map(|t| t.span).unwrap_or_default(),
            None => Span::default(),
        }
    }

    fn mark(&mut self) {
        self.marks.push(self.pos);
    }

    fn rewind(&mut self) {
        if let Some(pos) = self.marks.pop() {
            self.pos = pos;
        }
    }
}
