//! Placeholder nodes for rewrite templates
//!
//! A placeholder may stand in for a type, an expression or a statement. It
//! renders in template notation (`choice (...)`, `repeat(...)`, ...) and its
//! embedded nodes are printed as if they were its children.

use super::{AstType, Expression, Literal, Statement};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "pattern")]
pub enum Pattern {
    /// Matches any node; `group:` prefix when captured
    Any {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        group_name: Option<String>,
    },
    Backreference { group_name: String },
    IdentifierBackreference { group_name: String },
    Choice { alternatives: Vec<PatternNode> },
    Named {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        group_name: Option<String>,
        child: Box<PatternNode>,
    },
    /// `max: None` is unbounded
    Repeat {
        #[serde(default)]
        min: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<u32>,
        child: Box<PatternNode>,
    },
    Optional { child: Box<PatternNode> },
}

/// A node nested inside a placeholder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PatternNode {
    Pattern(Pattern),
    Type(AstType),
    Expression(Expression),
    Statement(Statement),
    /// A bare value, e.g. a literal a template matches against
    Value(Literal),
}
