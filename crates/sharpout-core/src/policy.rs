//! Formatting policy
//!
//! An immutable bundle of layout decisions consulted by the printer. Only
//! whitespace depends on the policy; the token sequence never does.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Placement of an opening and closing brace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum BraceStyle {
    /// Printed like `SameLine`
    DoNotChange,
    /// `header {`
    SameLine,
    /// `header{`
    SameLineNoSpace,
    /// Brace on its own line at the header's indentation
    NextLine,
    /// Brace on its own line, indented one level; the body shares its level
    NextLineIndented,
    /// Brace on its own line, indented one level; the body one level deeper
    NextLineIndented2,
    /// `header {` with the closing brace aligned to the body
    BannerStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    Tabs,
    Spaces,
}

/// Array and object initializer layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Wrapping {
    DoNotWrap,
    /// Treated as `DoNotWrap`; no line width is measured
    WrapIfTooLong,
    /// Each element on its own line, braces on their own lines
    WrapAlways,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum NewLine {
    Lf,
    CrLf,
}

impl NewLine {
    pub fn as_str(self) -> &'static str {
        match self {
            NewLine::Lf => "\n",
            NewLine::CrLf => "\r\n",
        }
    }
}

/// Named starting points for a policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Every brace on its own line
    #[default]
    Allman,
    /// Opening braces on the header line
    Kr,
    /// Mono coding guidelines
    Mono,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BraceSettings {
    pub namespace: BraceStyle,
    pub class: BraceStyle,
    pub interface: BraceStyle,
    pub r#struct: BraceStyle,
    pub r#enum: BraceStyle,
    pub method: BraceStyle,
    /// Anonymous methods and lambda bodies
    pub anonymous_method: BraceStyle,
    pub constructor: BraceStyle,
    pub destructor: BraceStyle,
    /// Property and indexer accessor lists
    pub property: BraceStyle,
    pub property_get: BraceStyle,
    pub property_set: BraceStyle,
    pub event: BraceStyle,
    pub event_add: BraceStyle,
    pub event_remove: BraceStyle,
    /// Blocks of control statements and free-standing blocks
    pub statement: BraceStyle,
}

impl BraceSettings {
    fn uniform(style: BraceStyle) -> Self {
        Self {
            namespace: style,
            class: style,
            interface: style,
            r#struct: style,
            r#enum: style,
            method: style,
            anonymous_method: style,
            constructor: style,
            destructor: style,
            property: style,
            property_get: style,
            property_set: style,
            event: style,
            event_add: style,
            event_remove: style,
            statement: style,
        }
    }
}

/// Space decisions. `before_*` and `after_*` place a space outside a
/// token, `within_*` inside a pair of parentheses or brackets, `around_*`
/// on both sides of a binary operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpacingSettings {
    pub before_comma: bool,
    pub after_comma: bool,
    pub within_brackets: bool,

    pub before_method_call_parentheses: bool,
    pub within_method_call_parentheses: bool,
    pub before_method_declaration_parentheses: bool,
    pub within_method_declaration_parentheses: bool,
    pub before_constructor_declaration_parentheses: bool,
    pub before_delegate_declaration_parentheses: bool,

    pub around_assignment: bool,
    pub around_bitwise_operator: bool,
    pub around_logical_operator: bool,
    pub around_relational_operator: bool,
    pub around_equality_operator: bool,
    pub around_additive_operator: bool,
    pub around_multiplicative_operator: bool,
    pub around_shift_operator: bool,

    pub within_cast_parentheses: bool,
    pub after_typecast: bool,
    pub within_checked_parentheses: bool,
    pub before_conditional_operator_condition: bool,
    pub after_conditional_operator_condition: bool,
    pub before_conditional_operator_separator: bool,
    pub after_conditional_operator_separator: bool,
    /// `typeof(...)` and `default(...)`
    pub within_typeof_parentheses: bool,
    pub within_sizeof_parentheses: bool,
    pub within_parentheses: bool,

    pub before_if_parentheses: bool,
    pub within_if_parentheses: bool,
    pub before_while_parentheses: bool,
    pub within_while_parentheses: bool,
    pub before_for_parentheses: bool,
    pub within_for_parentheses: bool,
    pub before_foreach_parentheses: bool,
    pub within_foreach_parentheses: bool,
    pub before_catch_parentheses: bool,
    pub within_catch_parentheses: bool,
    pub before_switch_parentheses: bool,
    pub within_switch_parentheses: bool,
    pub before_lock_parentheses: bool,
    pub within_lock_parentheses: bool,
    /// Also used by `fixed`
    pub before_using_parentheses: bool,
    pub within_using_parentheses: bool,
    pub before_for_semicolon: bool,
    pub after_for_semicolon: bool,
}

impl Default for SpacingSettings {
    fn default() -> Self {
        Self {
            before_comma: false,
            after_comma: true,
            within_brackets: false,

            before_method_call_parentheses: false,
            within_method_call_parentheses: false,
            before_method_declaration_parentheses: false,
            within_method_declaration_parentheses: false,
            before_constructor_declaration_parentheses: false,
            before_delegate_declaration_parentheses: false,

            around_assignment: true,
            around_bitwise_operator: true,
            around_logical_operator: true,
            around_relational_operator: true,
            around_equality_operator: true,
            around_additive_operator: true,
            around_multiplicative_operator: true,
            around_shift_operator: true,

            within_cast_parentheses: false,
            after_typecast: false,
            within_checked_parentheses: false,
            before_conditional_operator_condition: true,
            after_conditional_operator_condition: true,
            before_conditional_operator_separator: true,
            after_conditional_operator_separator: true,
            within_typeof_parentheses: false,
            within_sizeof_parentheses: false,
            within_parentheses: false,

            before_if_parentheses: true,
            within_if_parentheses: false,
            before_while_parentheses: true,
            within_while_parentheses: false,
            before_for_parentheses: true,
            within_for_parentheses: false,
            before_foreach_parentheses: true,
            within_foreach_parentheses: false,
            before_catch_parentheses: true,
            within_catch_parentheses: false,
            before_switch_parentheses: true,
            within_switch_parentheses: false,
            before_lock_parentheses: true,
            within_lock_parentheses: false,
            before_using_parentheses: true,
            within_using_parentheses: false,
            before_for_semicolon: false,
            after_for_semicolon: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndentationSettings {
    pub style: IndentStyle,
    /// Columns per level when `style` is `Spaces`
    pub size: usize,
    /// Indent case sections inside the switch braces
    pub indent_switch_body: bool,
    /// Indent statements under their case labels
    pub indent_case_body: bool,
}

impl IndentationSettings {
    /// Text written once per indentation level
    pub fn unit(&self) -> String {
        match self.style {
            IndentStyle::Tabs => "\t".to_string(),
            IndentStyle::Spaces => " ".repeat(self.size),
        }
    }
}

impl Default for IndentationSettings {
    fn default() -> Self {
        Self {
            style: IndentStyle::Tabs,
            size: 4,
            indent_switch_body: true,
            indent_case_body: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlankLineSettings {
    /// Blank lines between type members
    pub between_members: usize,
    /// Blank lines after the last of a run of using directives
    pub after_usings: usize,
}

impl Default for BlankLineSettings {
    fn default() -> Self {
        Self {
            between_members: 1,
            after_usings: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrappingSettings {
    pub array_initializer: Wrapping,
}

impl Default for WrappingSettings {
    fn default() -> Self {
        Self {
            array_initializer: Wrapping::WrapIfTooLong,
        }
    }
}

/// Complete set of layout decisions for one print session.
///
/// A policy is never mutated while printing, so one value can be shared by
/// any number of concurrent print calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattingPolicy {
    pub braces: BraceSettings,
    pub spacing: SpacingSettings,
    pub indentation: IndentationSettings,
    pub blank_lines: BlankLineSettings,
    pub wrapping: WrappingSettings,
    pub new_line: NewLine,
}

impl FormattingPolicy {
    pub fn allman() -> Self {
        Self {
            braces: BraceSettings::uniform(BraceStyle::NextLine),
            spacing: SpacingSettings::default(),
            indentation: IndentationSettings::default(),
            blank_lines: BlankLineSettings::default(),
            wrapping: WrappingSettings::default(),
            new_line: NewLine::Lf,
        }
    }

    pub fn kr() -> Self {
        Self {
            braces: BraceSettings::uniform(BraceStyle::SameLine),
            ..Self::allman()
        }
    }

    pub fn mono() -> Self {
        let mut policy = Self {
            braces: BraceSettings::uniform(BraceStyle::SameLine),
            ..Self::allman()
        };
        let braces = &mut policy.braces;
        braces.namespace = BraceStyle::NextLine;
        braces.class = BraceStyle::NextLine;
        braces.interface = BraceStyle::NextLine;
        braces.r#struct = BraceStyle::NextLine;
        braces.r#enum = BraceStyle::NextLine;
        braces.method = BraceStyle::NextLine;
        braces.constructor = BraceStyle::NextLine;
        braces.destructor = BraceStyle::NextLine;

        let spacing = &mut policy.spacing;
        spacing.before_method_call_parentheses = true;
        spacing.before_method_declaration_parentheses = true;
        spacing.before_constructor_declaration_parentheses = true;
        spacing.before_delegate_declaration_parentheses = true;

        policy.indentation.indent_switch_body = false;
        policy
    }

    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Allman => Self::allman(),
            Preset::Kr => Self::kr(),
            Preset::Mono => Self::mono(),
        }
    }
}

impl Default for FormattingPolicy {
    fn default() -> Self {
        Self::allman()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_allman() {
        let policy = FormattingPolicy::default();
        assert_eq!(policy, FormattingPolicy::allman());
        assert_eq!(policy.braces.statement, BraceStyle::NextLine);
        assert!(policy.spacing.before_if_parentheses);
        assert!(!policy.spacing.before_method_call_parentheses);
    }

    #[test]
    fn test_mono_splits_declaration_and_statement_braces() {
        let policy = FormattingPolicy::mono();
        assert_eq!(policy.braces.class, BraceStyle::NextLine);
        assert_eq!(policy.braces.method, BraceStyle::NextLine);
        assert_eq!(policy.braces.property, BraceStyle::SameLine);
        assert_eq!(policy.braces.statement, BraceStyle::SameLine);
        assert!(policy.spacing.before_method_call_parentheses);
        assert!(!policy.indentation.indent_switch_body);
    }

    #[test]
    fn test_kr_keeps_allman_spacing() {
        let kr = FormattingPolicy::kr();
        assert_eq!(kr.braces.namespace, BraceStyle::SameLine);
        assert_eq!(kr.spacing, FormattingPolicy::allman().spacing);
    }

    #[test]
    fn test_indent_unit() {
        let mut indentation = IndentationSettings::default();
        assert_eq!(indentation.unit(), "\t");
        indentation.style = IndentStyle::Spaces;
        indentation.size = 2;
        assert_eq!(indentation.unit(), "  ");
    }

    #[test]
    fn test_policy_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<FormattingPolicy>();
    }
}
