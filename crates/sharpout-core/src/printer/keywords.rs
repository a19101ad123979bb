//! Contextual keyword detection for identifier escaping

use super::Printer;
use crate::ast::{Expression, Modifier, NodeRef};
use crate::sink::TokenWriter;

/// Words that are keywords wherever they appear
const UNCONDITIONAL_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Keywords only inside a query expression
const QUERY_KEYWORDS: &[&str] = &[
    "from",
    "where",
    "join",
    "on",
    "equals",
    "into",
    "let",
    "orderby",
    "ascending",
    "descending",
    "select",
    "group",
    "by",
];

pub fn is_unconditional_keyword(name: &str) -> bool {
    UNCONDITIONAL_KEYWORDS.contains(&name)
}

pub fn is_query_keyword(name: &str) -> bool {
    QUERY_KEYWORDS.contains(&name)
}

/// Modifiers of the nearest declaration that can carry `async`
fn entity_modifiers(node: NodeRef<'_>) -> Option<&[Modifier]> {
    let modifiers = match node {
        NodeRef::TypeDeclaration(n) => &n.modifiers,
        NodeRef::Delegate(n) => &n.modifiers,
        NodeRef::Field(n) => &n.modifiers,
        NodeRef::FixedField(n) => &n.modifiers,
        NodeRef::Method(n) => &n.modifiers,
        NodeRef::Constructor(n) => &n.modifiers,
        NodeRef::Destructor(n) => &n.modifiers,
        NodeRef::Property(n) => &n.modifiers,
        NodeRef::Indexer(n) => &n.modifiers,
        NodeRef::Accessor(n) => &n.modifiers,
        NodeRef::Event(n) => &n.modifiers,
        NodeRef::CustomEvent(n) => &n.modifiers,
        NodeRef::Operator(n) => &n.modifiers,
        NodeRef::EnumMember(n) => &n.modifiers,
        _ => return None,
    };
    Some(modifiers.as_slice())
}

impl<'a, W: TokenWriter> Printer<'a, W> {
    /// Whether `name` would be read as a keyword at the current position.
    ///
    /// Query keywords count inside a query expression; `await` counts inside
    /// an async lambda or anonymous method, or else inside an async member.
    pub(super) fn is_keyword(&self, name: &str) -> bool {
        if is_unconditional_keyword(name) {
            return true;
        }
        let query_keyword = is_query_keyword(name);
        for ancestor in self.ancestors() {
            if query_keyword && matches!(ancestor, NodeRef::Query(_)) {
                return true;
            }
            if name == "await" {
                match ancestor {
                    NodeRef::Expression(Expression::Lambda(lambda)) => return lambda.is_async,
                    NodeRef::Expression(Expression::AnonymousMethod(method)) => {
                        return method.is_async;
                    }
                    _ => {}
                }
                if let Some(modifiers) = entity_modifiers(ancestor) {
                    return modifiers.contains(&Modifier::Async);
                }
            }
        }
        false
    }
}
