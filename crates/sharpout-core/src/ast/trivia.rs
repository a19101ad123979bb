//! Comments and preprocessor directives

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentKind {
    /// `// text`
    SingleLine,
    /// `/* text */`
    MultiLine,
    /// `/// text`
    Documentation,
    /// `/** text */`
    MultiLineDocumentation,
    /// Code excluded by `#if`, written as-is
    InactiveCode,
}

impl CommentKind {
    /// Single-line kinds end their line
    pub fn ends_line(self) -> bool {
        matches!(self, CommentKind::SingleLine | CommentKind::Documentation)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub comment_type: CommentKind,
    /// Text without the comment delimiters
    pub content: String,
}

impl Comment {
    pub fn single_line(content: impl Into<String>) -> Self {
        Self {
            comment_type: CommentKind::SingleLine,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectiveKind {
    Define,
    Undef,
    If,
    Elif,
    Else,
    Endif,
    Region,
    Endregion,
    Pragma,
    Warning,
    Error,
    Line,
}

impl DirectiveKind {
    pub fn keyword(self) -> &'static str {
        match self {
            DirectiveKind::Define => "define",
            DirectiveKind::Undef => "undef",
            DirectiveKind::If => "if",
            DirectiveKind::Elif => "elif",
            DirectiveKind::Else => "else",
            DirectiveKind::Endif => "endif",
            DirectiveKind::Region => "region",
            DirectiveKind::Endregion => "endregion",
            DirectiveKind::Pragma => "pragma",
            DirectiveKind::Warning => "warning",
            DirectiveKind::Error => "error",
            DirectiveKind::Line => "line",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreprocessorDirective {
    pub directive_type: DirectiveKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argument: Option<String>,
}
