//! Configuration file types
//!
//! Every option is optional; unset options fall back to the selected preset.

use crate::policy::{BraceStyle, IndentStyle, NewLine, Preset, Wrapping};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Root of a sharpout configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SharpoutConfig {
    /// JSON Schema reference for editor support
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    #[schemars(description = "JSON Schema reference")]
    pub schema: Option<String>,

    /// Stop configuration discovery at this file
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Mark this as the root configuration")]
    pub root: Option<bool>,

    /// Parent configurations, resolved relative to this file
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Configuration files to inherit from; this file wins on conflicts")]
    pub extends: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Output layout options")]
    pub formatter: Option<FormatterConfiguration>,
}

/// Formatter configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FormatterConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Enable or disable the formatter section")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Starting point for every option: 'allman', 'kr' or 'mono'")]
    pub preset: Option<Preset>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Indentation style: 'tabs' or 'spaces'")]
    pub indent_style: Option<IndentStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Number of spaces per level when indentStyle is 'spaces'")]
    pub indent_size: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Line terminator: 'lf' or 'crlf'")]
    pub new_line: Option<NewLine>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Indent case sections inside switch braces")]
    pub indent_switch_body: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Indent statements under case labels")]
    pub indent_case_body: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Brace placement per construct")]
    pub braces: Option<BracesConfiguration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Space placement around tokens")]
    pub spacing: Option<SpacingConfiguration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Line breaks between members and after usings")]
    pub blank_lines: Option<BlankLinesConfiguration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Array and object initializer wrapping")]
    pub wrapping: Option<WrappingConfiguration>,
}

/// Brace placement per construct
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BracesConfiguration {
    pub namespace: Option<BraceStyle>,
    pub class: Option<BraceStyle>,
    pub interface: Option<BraceStyle>,
    pub r#struct: Option<BraceStyle>,
    pub r#enum: Option<BraceStyle>,
    pub method: Option<BraceStyle>,
    /// Anonymous methods and lambda bodies
    pub anonymous_method: Option<BraceStyle>,
    pub constructor: Option<BraceStyle>,
    pub destructor: Option<BraceStyle>,
    pub property: Option<BraceStyle>,
    pub property_get: Option<BraceStyle>,
    pub property_set: Option<BraceStyle>,
    pub event: Option<BraceStyle>,
    pub event_add: Option<BraceStyle>,
    pub event_remove: Option<BraceStyle>,
    /// Statement blocks
    pub statement: Option<BraceStyle>,
}

/// Space placement around tokens
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SpacingConfiguration {
    pub before_comma: Option<bool>,
    pub after_comma: Option<bool>,
    pub within_brackets: Option<bool>,

    pub before_method_call_parentheses: Option<bool>,
    pub within_method_call_parentheses: Option<bool>,
    pub before_method_declaration_parentheses: Option<bool>,
    pub within_method_declaration_parentheses: Option<bool>,
    pub before_constructor_declaration_parentheses: Option<bool>,
    pub before_delegate_declaration_parentheses: Option<bool>,

    pub around_assignment: Option<bool>,
    pub around_bitwise_operator: Option<bool>,
    pub around_logical_operator: Option<bool>,
    pub around_relational_operator: Option<bool>,
    pub around_equality_operator: Option<bool>,
    pub around_additive_operator: Option<bool>,
    pub around_multiplicative_operator: Option<bool>,
    pub around_shift_operator: Option<bool>,

    pub within_cast_parentheses: Option<bool>,
    pub after_typecast: Option<bool>,
    pub within_checked_parentheses: Option<bool>,
    pub before_conditional_operator_condition: Option<bool>,
    pub after_conditional_operator_condition: Option<bool>,
    pub before_conditional_operator_separator: Option<bool>,
    pub after_conditional_operator_separator: Option<bool>,
    pub within_typeof_parentheses: Option<bool>,
    pub within_sizeof_parentheses: Option<bool>,
    pub within_parentheses: Option<bool>,

    pub before_if_parentheses: Option<bool>,
    pub within_if_parentheses: Option<bool>,
    pub before_while_parentheses: Option<bool>,
    pub within_while_parentheses: Option<bool>,
    pub before_for_parentheses: Option<bool>,
    pub within_for_parentheses: Option<bool>,
    pub before_foreach_parentheses: Option<bool>,
    pub within_foreach_parentheses: Option<bool>,
    pub before_catch_parentheses: Option<bool>,
    pub within_catch_parentheses: Option<bool>,
    pub before_switch_parentheses: Option<bool>,
    pub within_switch_parentheses: Option<bool>,
    pub before_lock_parentheses: Option<bool>,
    pub within_lock_parentheses: Option<bool>,
    pub before_using_parentheses: Option<bool>,
    pub within_using_parentheses: Option<bool>,
    pub before_for_semicolon: Option<bool>,
    pub after_for_semicolon: Option<bool>,
}

/// Line breaks between members and after usings
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BlankLinesConfiguration {
    pub between_members: Option<usize>,
    pub after_usings: Option<usize>,
}

/// Initializer wrapping
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WrappingConfiguration {
    pub array_initializer: Option<Wrapping>,
}
