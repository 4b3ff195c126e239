//! Error types for the arrowc pipeline

use crate::span::Span;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArrowcError {
    #[error("Lexer error at {span:?}: {message}")]
    Lexer { message: String, span: Span },

    #[error("Parser error at {span:?}: {message}")]
    Parser { message: String, span: Span },

    /// A node with no traversal or lowering rule reached a stage dispatch.
    /// This is a pipeline contract violation, not a user input error.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ArrowcError {
    pub fn lexer(message: impl Into<String>, span: Span) -> Self {
        ArrowcError::Lexer {
            message: message.into(),
            span,
        }
    }

    pub fn parser(message: impl Into<String>, span: Span) -> Self {
        ArrowcError::Parser {
            message: message.into(),
            span,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ArrowcError::Internal {
            message: message.into(),
        }
    }
}

pub type ArrowcResult<T> = Result<T, ArrowcError>;
