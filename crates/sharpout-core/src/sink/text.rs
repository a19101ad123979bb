//! Raw text stage

use super::{TextLocation, TokenClass, TokenRole, TokenWriter};
use crate::ast::{CommentKind, DirectiveKind, Literal, NodeRef};
use crate::error::SharpoutError;
use crate::literal::format_literal;
use crate::Result;
use std::fmt;

/// Writes tokens to a `fmt::Write` destination.
///
/// Indentation is written lazily before the first token of a line, so an
/// `unindent` right after a newline still affects that line.
pub struct TextSink<W: fmt::Write> {
    out: W,
    indent_unit: String,
    line_ending: &'static str,
    indentation: usize,
    at_line_start: bool,
    line: usize,
    column: usize,
    offset: usize,
    failed: bool,
}

impl<W: fmt::Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            indent_unit: "\t".to_string(),
            line_ending: "\n",
            indentation: 0,
            at_line_start: true,
            line: 1,
            column: 1,
            offset: 0,
            failed: false,
        }
    }

    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    pub fn with_line_ending(mut self, ending: &'static str) -> Self {
        self.line_ending = ending;
        self
    }

    /// Returns the destination, or the first write error
    pub fn finish(self) -> Result<W> {
        if self.failed {
            return Err(SharpoutError::OutputError {
                message: "the output destination rejected a write".to_string(),
            });
        }
        Ok(self.out)
    }

    fn write_raw(&mut self, text: &str) {
        if self.failed || text.is_empty() {
            return;
        }
        if self.out.write_str(text).is_err() {
            self.failed = true;
            return;
        }
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset += text.len();
    }

    fn write_indentation(&mut self) {
        if self.at_line_start {
            self.at_line_start = false;
            for _ in 0..self.indentation {
                let unit = std::mem::take(&mut self.indent_unit);
                self.write_raw(&unit);
                self.indent_unit = unit;
            }
        }
    }

    fn write_text(&mut self, text: &str) {
        self.write_indentation();
        self.write_raw(text);
    }
}

impl<W: fmt::Write> TokenWriter for TextSink<W> {
    fn start_node(&mut self, _node: NodeRef<'_>) {}

    fn end_node(&mut self, _node: NodeRef<'_>) {}

    fn write_identifier(&mut self, text: &str, _class: TokenClass) {
        self.write_text(text);
    }

    fn write_keyword(&mut self, keyword: &str) {
        self.write_text(keyword);
    }

    fn write_token(&mut self, _role: TokenRole, text: &str) {
        self.write_text(text);
    }

    fn write_primitive_value(&mut self, value: &Literal, raw: Option<&str>) {
        match raw {
            Some(raw) => self.write_text(raw),
            None => self.write_text(&format_literal(value)),
        }
    }

    fn write_primitive_type(&mut self, keyword: &str) {
        self.write_text(keyword);
        if keyword == "new" {
            // constraint form `where T : new()`
            self.write_raw("()");
        }
    }

    fn write_comment(&mut self, kind: CommentKind, content: &str) {
        self.write_indentation();
        match kind {
            CommentKind::SingleLine => {
                self.write_raw("//");
                self.write_raw(content);
                self.new_line();
            }
            CommentKind::Documentation => {
                self.write_raw("///");
                self.write_raw(content);
                self.new_line();
            }
            CommentKind::MultiLine => {
                self.write_raw("/*");
                self.write_raw(content);
                self.write_raw("*/");
            }
            CommentKind::MultiLineDocumentation => {
                self.write_raw("/**");
                self.write_raw(content);
                self.write_raw("*/");
            }
            CommentKind::InactiveCode => self.write_raw(content),
        }
    }

    fn write_preprocessor_directive(&mut self, kind: DirectiveKind, argument: Option<&str>) {
        if !self.at_line_start {
            self.new_line();
        }
        // directives always start at column 0
        self.at_line_start = false;
        self.write_raw("#");
        self.write_raw(kind.keyword());
        if let Some(argument) = argument.filter(|a| !a.is_empty()) {
            self.write_raw(" ");
            self.write_raw(argument);
        }
        self.new_line();
    }

    fn space(&mut self) {
        self.write_text(" ");
    }

    fn new_line(&mut self) {
        self.write_raw(self.line_ending);
        self.at_line_start = true;
    }

    fn indent(&mut self) {
        self.indentation += 1;
    }

    fn unindent(&mut self) {
        self.indentation = self.indentation.saturating_sub(1);
    }

    fn location(&self) -> TextLocation {
        let (columns, bytes) = if self.at_line_start {
            (
                self.indentation * self.indent_unit.chars().count(),
                self.indentation * self.indent_unit.len(),
            )
        } else {
            (0, 0)
        };
        TextLocation {
            line: self.line,
            column: self.column + columns,
            offset: self.offset + bytes,
        }
    }
}
