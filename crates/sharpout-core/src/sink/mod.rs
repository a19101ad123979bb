//! Token output sink
//!
//! The printer emits a stream of discrete write events into a [`TokenWriter`].
//! Stages wrap one another by ownership; each one adds a concern and forwards
//! every event to the stage it wraps:
//!
//! ```text
//! RequiredSpaces<PositionTracker<TextSink<String>>>
//! ```

mod position;
mod required_spaces;
mod text;

pub use position::{NodeSpan, PositionTracker};
pub use required_spaces::RequiredSpaces;
pub use text::TextSink;

use crate::ast::{CommentKind, DirectiveKind, Literal, NodeRef};
use serde::{Deserialize, Serialize};

/// Position in the produced text. Line and column are 1-based, the offset
/// counts bytes from the start of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct TextLocation {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Default for TextLocation {
    fn default() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

/// Classification attached to identifier tokens for consumers that
/// re-colorize output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenClass {
    Text,
    Keyword,
    Operator,
    Punctuation,
    Brace,
    Number,
    String,
    Char,
    Comment,
    Directive,
    Label,
    Type,
    Namespace,
    Method,
    Field,
    Property,
    Event,
    Local,
    Parameter,
    TypeParameter,
    EnumMember,
}

/// Syntactic role of a punctuation or operator token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRole {
    Comma,
    Semicolon,
    Colon,
    Dot,
    DoubleColon,
    /// `->`
    Arrow,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
    OpenChevron,
    CloseChevron,
    /// `?` of a nullable type
    Nullable,
    /// `*` of a pointer type
    Pointer,
    /// Unary, binary, assignment, conditional and lambda operators
    Operator,
}

impl TokenRole {
    pub fn class(self) -> TokenClass {
        match self {
            TokenRole::OpenBrace | TokenRole::CloseBrace => TokenClass::Brace,
            TokenRole::Operator | TokenRole::Arrow => TokenClass::Operator,
            _ => TokenClass::Punctuation,
        }
    }
}

/// Receives the printer's write events.
///
/// `start_node`/`end_node` nest exactly like the tree; `indent`/`unindent`
/// are balanced within any node that introduces them.
pub trait TokenWriter {
    fn start_node(&mut self, node: NodeRef<'_>);
    fn end_node(&mut self, node: NodeRef<'_>);

    /// `text` is already escaped (`@` prefix) by the caller
    fn write_identifier(&mut self, text: &str, class: TokenClass);
    fn write_keyword(&mut self, keyword: &str);
    fn write_token(&mut self, role: TokenRole, text: &str);
    /// `raw`, when present, is written instead of the rendered value
    fn write_primitive_value(&mut self, value: &Literal, raw: Option<&str>);
    fn write_primitive_type(&mut self, keyword: &str);
    fn write_comment(&mut self, kind: CommentKind, content: &str);
    fn write_preprocessor_directive(&mut self, kind: DirectiveKind, argument: Option<&str>);

    fn space(&mut self);
    fn new_line(&mut self);
    fn indent(&mut self);
    fn unindent(&mut self);

    /// Where the next token will start
    fn location(&self) -> TextLocation;
}
