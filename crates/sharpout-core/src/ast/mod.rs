//! Syntax tree model
//!
//! The tree is a plain owned value handed over by an external parser (or
//! deserialized from JSON). Every node family is a closed sum type so the
//! printer can dispatch with one exhaustive `match` per family. Layout facts
//! that only the source knew, such as a trailing comma or explicit braces,
//! are explicit fields so the printer propagates them instead of guessing.

mod declarations;
mod expressions;
mod node_ref;
mod patterns;
mod statements;
mod trivia;
mod types;

pub use declarations::*;
pub use expressions::*;
pub use node_ref::{NodeKind, NodeRef};
pub use patterns::{Pattern, PatternNode};
pub use statements::*;
pub use trivia::{Comment, CommentKind, DirectiveKind, PreprocessorDirective};
pub use types::{ArraySpecifier, AstType, ComposedType, MemberType, PrimitiveType, SimpleType};

use crate::sink::TokenClass;
use serde::{Deserialize, Serialize};

/// A name token.
///
/// `verbatim` records a source spelling with a leading `@`; the printer
/// also adds the `@` on its own when the name would otherwise read as a
/// keyword in its context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub verbatim: bool,
    /// Semantic classification for re-colorizing consumers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<TokenClass>,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            verbatim: false,
            class: None,
        }
    }

    pub fn with_class(mut self, class: TokenClass) -> Self {
        self.class = Some(class);
        self
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Identifier::new(name)
    }
}

/// Declaration modifiers, printed in the order the tree lists them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    New,
    Public,
    Protected,
    Private,
    Internal,
    Abstract,
    Virtual,
    Sealed,
    Static,
    Override,
    Readonly,
    Volatile,
    Extern,
    Partial,
    Const,
    Async,
    Unsafe,
    Fixed,
}

impl Modifier {
    pub fn keyword(self) -> &'static str {
        match self {
            Modifier::New => "new",
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Internal => "internal",
            Modifier::Abstract => "abstract",
            Modifier::Virtual => "virtual",
            Modifier::Sealed => "sealed",
            Modifier::Static => "static",
            Modifier::Override => "override",
            Modifier::Readonly => "readonly",
            Modifier::Volatile => "volatile",
            Modifier::Extern => "extern",
            Modifier::Partial => "partial",
            Modifier::Const => "const",
            Modifier::Async => "async",
            Modifier::Unsafe => "unsafe",
            Modifier::Fixed => "fixed",
        }
    }
}
