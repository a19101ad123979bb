//! Type references

use super::{Identifier, Pattern};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum AstType {
    /// `int`, `string`, `void`, ... (also `new` in a `new()` constraint)
    Primitive(PrimitiveType),
    Simple(SimpleType),
    Member(MemberType),
    Composed(ComposedType),
    Pattern(Box<Pattern>),
}

impl AstType {
    pub fn primitive(keyword: impl Into<String>) -> Self {
        AstType::Primitive(PrimitiveType {
            keyword: keyword.into(),
        })
    }

    pub fn simple(name: impl Into<Identifier>) -> Self {
        AstType::Simple(SimpleType {
            identifier: name.into(),
            type_arguments: Vec::new(),
        })
    }

    pub fn generic(name: impl Into<Identifier>, type_arguments: Vec<AstType>) -> Self {
        AstType::Simple(SimpleType {
            identifier: name.into(),
            type_arguments,
        })
    }

    /// `target.name`
    pub fn member(target: AstType, name: impl Into<Identifier>) -> Self {
        AstType::Member(MemberType {
            target: Box::new(target),
            is_double_colon: false,
            member_name: name.into(),
            type_arguments: Vec::new(),
        })
    }

    /// Builds `a.b.c` from a dotted name
    pub fn qualified(dotted: &str) -> Self {
        let mut parts = dotted.split('.');
        let first = parts.next().unwrap_or_default();
        parts.fold(AstType::simple(first), AstType::member)
    }

    /// `T[]` with one dimension per specifier entry
    pub fn array(base: AstType, dimensions: &[u32]) -> Self {
        AstType::Composed(ComposedType {
            base_type: Box::new(base),
            has_nullable_specifier: false,
            pointer_rank: 0,
            array_specifiers: dimensions
                .iter()
                .map(|&dimensions| ArraySpecifier { dimensions })
                .collect(),
        })
    }

    pub fn nullable(base: AstType) -> Self {
        AstType::Composed(ComposedType {
            base_type: Box::new(base),
            has_nullable_specifier: true,
            pointer_rank: 0,
            array_specifiers: Vec::new(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimitiveType {
    pub keyword: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleType {
    pub identifier: Identifier,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_arguments: Vec<AstType>,
}

/// `Target.Name` or `alias::Name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberType {
    pub target: Box<AstType>,
    #[serde(default)]
    pub is_double_colon: bool,
    pub member_name: Identifier,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_arguments: Vec<AstType>,
}

/// Base type decorated with `?`, `*` and array specifiers, in that order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposedType {
    pub base_type: Box<AstType>,
    #[serde(default)]
    pub has_nullable_specifier: bool,
    #[serde(default)]
    pub pointer_rank: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub array_specifiers: Vec<ArraySpecifier>,
}

/// `[]`, `[,]`, ... ; `dimensions` is the rank, at least one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArraySpecifier {
    pub dimensions: u32,
}
