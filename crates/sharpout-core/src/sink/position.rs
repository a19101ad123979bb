//! Node-to-text position mapping

use super::{TextLocation, TokenClass, TokenRole, TokenWriter};
use crate::ast::{CommentKind, DirectiveKind, Literal, NodeKind, NodeRef};
use serde::Serialize;

/// Text range produced for one node. `index` is the node's position in a
/// pre-order walk of the printed tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSpan {
    pub index: usize,
    pub kind: NodeKind,
    pub depth: usize,
    pub start: TextLocation,
    pub end: TextLocation,
}

struct OpenSpan {
    slot: usize,
    started: bool,
}

/// Records a [`NodeSpan`] for every `start_node`/`end_node` pair.
///
/// A span starts at the first token written inside the node and ends right
/// after its last token; a node that writes nothing gets an empty span at
/// the current location.
pub struct PositionTracker<W> {
    inner: W,
    spans: Vec<NodeSpan>,
    open: Vec<OpenSpan>,
    last_token_end: TextLocation,
}

impl<W: TokenWriter> PositionTracker<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            spans: Vec::new(),
            open: Vec::new(),
            last_token_end: TextLocation::default(),
        }
    }

    /// Returns the wrapped stage and the spans in pre-order
    pub fn into_parts(self) -> (W, Vec<NodeSpan>) {
        (self.inner, self.spans)
    }

    fn before_token(&mut self) {
        if self.open.iter().all(|span| span.started) {
            return;
        }
        let start = self.inner.location();
        for open in self.open.iter_mut().rev() {
            if open.started {
                break;
            }
            open.started = true;
            self.spans[open.slot].start = start;
        }
    }

    fn after_token(&mut self) {
        self.last_token_end = self.inner.location();
    }
}

impl<W: TokenWriter> TokenWriter for PositionTracker<W> {
    fn start_node(&mut self, node: NodeRef<'_>) {
        let here = self.inner.location();
        self.open.push(OpenSpan {
            slot: self.spans.len(),
            started: false,
        });
        self.spans.push(NodeSpan {
            index: self.spans.len(),
            kind: node.kind(),
            depth: self.open.len() - 1,
            start: here,
            end: here,
        });
        self.inner.start_node(node);
    }

    fn end_node(&mut self, node: NodeRef<'_>) {
        self.inner.end_node(node);
        if let Some(open) = self.open.pop() {
            let span = &mut self.spans[open.slot];
            if open.started {
                span.end = self.last_token_end;
            } else {
                let here = self.inner.location();
                span.start = here;
                span.end = here;
            }
        }
    }

    fn write_identifier(&mut self, text: &str, class: TokenClass) {
        self.before_token();
        self.inner.write_identifier(text, class);
        self.after_token();
    }

    fn write_keyword(&mut self, keyword: &str) {
        self.before_token();
        self.inner.write_keyword(keyword);
        self.after_token();
    }

    fn write_token(&mut self, role: TokenRole, text: &str) {
        self.before_token();
        self.inner.write_token(role, text);
        self.after_token();
    }

    fn write_primitive_value(&mut self, value: &Literal, raw: Option<&str>) {
        self.before_token();
        self.inner.write_primitive_value(value, raw);
        self.after_token();
    }

    fn write_primitive_type(&mut self, keyword: &str) {
        self.before_token();
        self.inner.write_primitive_type(keyword);
        self.after_token();
    }

    fn write_comment(&mut self, kind: CommentKind, content: &str) {
        self.before_token();
        self.inner.write_comment(kind, content);
        self.after_token();
    }

    fn write_preprocessor_directive(&mut self, kind: DirectiveKind, argument: Option<&str>) {
        self.before_token();
        self.inner.write_preprocessor_directive(kind, argument);
        self.after_token();
    }

    fn space(&mut self) {
        self.inner.space();
    }

    fn new_line(&mut self) {
        self.inner.new_line();
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expression, Statement};
    use crate::sink::TextSink;

    #[test]
    fn test_spans_cover_first_to_last_token() {
        let stmt = Statement::expression(Expression::identifier("x"));
        let Statement::Expression(expr_stmt) = &stmt else {
            unreachable!()
        };
        let expr = &expr_stmt.expression;

        let mut tracker = PositionTracker::new(TextSink::new(String::new()));
        tracker.indent();
        tracker.start_node(NodeRef::from(&stmt));
        tracker.start_node(NodeRef::from(expr));
        tracker.write_identifier("x", TokenClass::Local);
        tracker.end_node(NodeRef::from(expr));
        tracker.write_token(TokenRole::Semicolon, ";");
        tracker.new_line();
        tracker.end_node(NodeRef::from(&stmt));

        let (sink, spans) = tracker.into_parts();
        let text = sink.finish().unwrap();
        assert_eq!(text, "\tx;\n");
        assert_eq!(spans.len(), 2);

        assert_eq!(spans[0].kind, NodeKind::ExpressionStatement);
        assert_eq!(spans[0].depth, 0);
        assert_eq!(&text[spans[0].start.offset..spans[0].end.offset], "x;");

        assert_eq!(spans[1].kind, NodeKind::Identifier);
        assert_eq!(spans[1].depth, 1);
        assert_eq!(spans[1].start.column, 2);
        assert_eq!(&text[spans[1].start.offset..spans[1].end.offset], "x");
    }

    #[test]
    fn test_empty_node_gets_empty_span() {
        let stmt = Statement::Empty;
        let mut tracker = PositionTracker::new(TextSink::new(String::new()));
        tracker.write_keyword("a");
        tracker.start_node(NodeRef::from(&stmt));
        tracker.end_node(NodeRef::from(&stmt));
        let (_, spans) = tracker.into_parts();
        assert_eq!(spans[0].start, spans[0].end);
        assert_eq!(spans[0].start.offset, 1);
    }
}
