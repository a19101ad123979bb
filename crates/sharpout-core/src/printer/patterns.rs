use super::Printer;
use crate::ast::{Pattern, PatternNode};
use crate::sink::{TokenClass, TokenRole, TokenWriter};
use crate::Result;

/// Printed in place of an unbounded repeat maximum
const UNBOUNDED: &str = "2147483647";

impl<'a, W: TokenWriter> Printer<'a, W> {
    /// Placeholders print in rewrite-template notation. Nested placeholders
    /// are part of the outermost one and get no node markers of their own.
    pub(super) fn visit_pattern(&mut self, pattern: &'a Pattern) -> Result<()> {
        match pattern {
            Pattern::Any { group_name } => {
                self.group_prefix(group_name.as_deref());
            }
            Pattern::Backreference { group_name } => {
                self.keyword("backreference");
                self.token(TokenRole::OpenParen, "(");
                self.raw_identifier(group_name, TokenClass::Text);
                self.token(TokenRole::CloseParen, ")");
            }
            Pattern::IdentifierBackreference { group_name } => {
                self.keyword("identifierBackreference");
                self.token(TokenRole::OpenParen, "(");
                self.raw_identifier(group_name, TokenClass::Text);
                self.token(TokenRole::CloseParen, ")");
            }
            Pattern::Choice { alternatives } => {
                self.keyword("choice");
                self.space();
                self.token(TokenRole::OpenParen, "(");
                self.new_line();
                self.indent();
                for (i, alternative) in alternatives.iter().enumerate() {
                    self.pattern_node(alternative)?;
                    if i + 1 < alternatives.len() {
                        self.token(TokenRole::Comma, ",");
                    }
                    self.new_line();
                }
                self.unindent();
                self.token(TokenRole::CloseParen, ")");
            }
            Pattern::Named { group_name, child } => {
                self.group_prefix(group_name.as_deref());
                self.pattern_node(child)?;
            }
            Pattern::Repeat { min, max, child } => {
                self.keyword("repeat");
                self.token(TokenRole::OpenParen, "(");
                if *min != 0 || max.is_some() {
                    self.raw_identifier(&min.to_string(), TokenClass::Number);
                    self.token(TokenRole::Comma, ",");
                    match max {
                        Some(max) => self.raw_identifier(&max.to_string(), TokenClass::Number),
                        None => self.raw_identifier(UNBOUNDED, TokenClass::Number),
                    }
                    self.token(TokenRole::Comma, ",");
                }
                self.pattern_node(child)?;
                self.token(TokenRole::CloseParen, ")");
            }
            Pattern::Optional { child } => {
                self.keyword("optional");
                self.token(TokenRole::OpenParen, "(");
                self.pattern_node(child)?;
                self.token(TokenRole::CloseParen, ")");
            }
        }
        Ok(())
    }

    fn group_prefix(&mut self, group_name: Option<&str>) {
        if let Some(name) = group_name.filter(|name| !name.is_empty()) {
            self.raw_identifier(name, TokenClass::Text);
            self.token(TokenRole::Colon, ":");
        }
    }

    fn pattern_node(&mut self, node: &'a PatternNode) -> Result<()> {
        match node {
            PatternNode::Pattern(nested) => self.visit_pattern(nested),
            PatternNode::Type(ty) => self.visit_child(ty),
            PatternNode::Expression(expr) => self.visit_child(expr),
            PatternNode::Statement(stmt) => self.visit_child(stmt),
            PatternNode::Value(value) => {
                self.writer.write_primitive_value(value, None);
                self.at_line_start = false;
                Ok(())
            }
        }
    }
}
