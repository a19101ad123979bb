//! Inserts the spaces the grammar needs between adjacent tokens

use super::{TextLocation, TokenClass, TokenRole, TokenWriter};
use crate::ast::{CommentKind, DirectiveKind, Literal, NodeRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LastWritten {
    Whitespace,
    Other,
    KeywordOrIdentifier,
    Plus,
    Minus,
    Ampersand,
    QuestionMark,
    Division,
}

/// Keeps `a b`, `+ +`, `- -`, `& &`, `? ?` and `/ *` from fusing into a
/// different token sequence when the printer emits them back to back.
pub struct RequiredSpaces<W> {
    inner: W,
    last: LastWritten,
}

impl<W: TokenWriter> RequiredSpaces<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            last: LastWritten::Whitespace,
        }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    fn separate_word(&mut self) {
        if self.last == LastWritten::KeywordOrIdentifier {
            self.inner.space();
        }
    }
}

impl<W: TokenWriter> TokenWriter for RequiredSpaces<W> {
    fn start_node(&mut self, node: NodeRef<'_>) {
        self.inner.start_node(node);
    }

    fn end_node(&mut self, node: NodeRef<'_>) {
        self.inner.end_node(node);
    }

    fn write_identifier(&mut self, text: &str, class: TokenClass) {
        self.separate_word();
        self.inner.write_identifier(text, class);
        self.last = LastWritten::KeywordOrIdentifier;
    }

    fn write_keyword(&mut self, keyword: &str) {
        self.separate_word();
        self.inner.write_keyword(keyword);
        self.last = LastWritten::KeywordOrIdentifier;
    }

    fn write_token(&mut self, role: TokenRole, text: &str) {
        let fuses = match text.chars().next() {
            Some('+') => self.last == LastWritten::Plus,
            Some('-') => self.last == LastWritten::Minus,
            Some('&') => self.last == LastWritten::Ampersand,
            Some('?') => self.last == LastWritten::QuestionMark,
            Some('*') | Some('/') => self.last == LastWritten::Division,
            _ => false,
        };
        if fuses {
            self.inner.space();
        }
        self.inner.write_token(role, text);
        self.last = match text {
            "+" => LastWritten::Plus,
            "-" => LastWritten::Minus,
            "&" => LastWritten::Ampersand,
            "?" => LastWritten::QuestionMark,
            "/" => LastWritten::Division,
            _ => LastWritten::Other,
        };
    }

    fn write_primitive_value(&mut self, value: &Literal, raw: Option<&str>) {
        let negative = match raw {
            Some(raw) => raw.starts_with('-'),
            None => value.is_negative_number(),
        };
        if self.last == LastWritten::KeywordOrIdentifier
            || (self.last == LastWritten::Minus && negative)
        {
            self.inner.space();
        }
        self.inner.write_primitive_value(value, raw);
        self.last = match value {
            Literal::String(_) | Literal::Char(_) => LastWritten::Other,
            _ => LastWritten::KeywordOrIdentifier,
        };
    }

    fn write_primitive_type(&mut self, keyword: &str) {
        self.separate_word();
        self.inner.write_primitive_type(keyword);
        self.last = if keyword == "new" {
            LastWritten::Other
        } else {
            LastWritten::KeywordOrIdentifier
        };
    }

    fn write_comment(&mut self, kind: CommentKind, content: &str) {
        if self.last == LastWritten::Division {
            self.inner.space();
        }
        self.inner.write_comment(kind, content);
        self.last = LastWritten::Whitespace;
    }

    fn write_preprocessor_directive(&mut self, kind: DirectiveKind, argument: Option<&str>) {
        self.inner.write_preprocessor_directive(kind, argument);
        self.last = LastWritten::Whitespace;
    }

    fn space(&mut self) {
        self.inner.space();
        self.last = LastWritten::Whitespace;
    }

    fn new_line(&mut self) {
        self.inner.new_line();
        self.last = LastWritten::Whitespace;
    }

    fn indent(&mut self) {
        self.inner.indent();
    }

    fn unindent(&mut self) {
        self.inner.unindent();
    }

    fn location(&self) -> TextLocation {
        self.inner.location()
    }
}
