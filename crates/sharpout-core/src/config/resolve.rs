//! Turning a configuration into a formatting policy

use super::sharpout_config::*;
use crate::error::SharpoutError;
use crate::policy::{FormattingPolicy, IndentStyle};
use crate::Result;

const MAX_INDENT_SIZE: usize = 16;

fn set<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

impl FormatterConfiguration {
    /// Checks option values that deserialization alone cannot rule out
    pub fn validate(&self) -> Result<()> {
        if let Some(size) = self.indent_size {
            if size == 0 || size > MAX_INDENT_SIZE {
                return Err(SharpoutError::config_error(format!(
                    "indentSize must be between 1 and {MAX_INDENT_SIZE}, got {size}"
                )));
            }
        }
        if self.indent_style == Some(IndentStyle::Tabs) && self.indent_size.is_some() {
            tracing::debug!("indentSize has no effect with indentStyle 'tabs'");
        }
        Ok(())
    }
}

impl SharpoutConfig {
    /// Policy described by this configuration.
    ///
    /// A missing or disabled formatter section yields the default policy.
    pub fn policy(&self) -> Result<FormattingPolicy> {
        match &self.formatter {
            Some(formatter) if formatter.enabled == Some(false) => {
                tracing::warn!("Formatter section is disabled; using the default policy");
                Ok(FormattingPolicy::default())
            }
            Some(formatter) => FormattingPolicy::from_config(formatter),
            None => Ok(FormattingPolicy::default()),
        }
    }
}

impl FormattingPolicy {
    /// Starts from the configured preset and applies every specified option
    pub fn from_config(config: &FormatterConfiguration) -> Result<Self> {
        config.validate()?;

        let mut policy = FormattingPolicy::preset(config.preset.unwrap_or_default());

        let indentation = &mut policy.indentation;
        set(&mut indentation.style, config.indent_style);
        set(&mut indentation.size, config.indent_size);
        set(&mut indentation.indent_switch_body, config.indent_switch_body);
        set(&mut indentation.indent_case_body, config.indent_case_body);
        set(&mut policy.new_line, config.new_line);

        if let Some(braces) = &config.braces {
            let target = &mut policy.braces;
            set(&mut target.namespace, braces.namespace);
            set(&mut target.class, braces.class);
            set(&mut target.interface, braces.interface);
            set(&mut target.r#struct, braces.r#struct);
            set(&mut target.r#enum, braces.r#enum);
            set(&mut target.method, braces.method);
            set(&mut target.anonymous_method, braces.anonymous_method);
            set(&mut target.constructor, braces.constructor);
            set(&mut target.destructor, braces.destructor);
            set(&mut target.property, braces.property);
            set(&mut target.property_get, braces.property_get);
            set(&mut target.property_set, braces.property_set);
            set(&mut target.event, braces.event);
            set(&mut target.event_add, braces.event_add);
            set(&mut target.event_remove, braces.event_remove);
            set(&mut target.statement, braces.statement);
        }

        if let Some(spacing) = &config.spacing {
            let target = &mut policy.spacing;
            set(&mut target.before_comma, spacing.before_comma);
            set(&mut target.after_comma, spacing.after_comma);
            set(&mut target.within_brackets, spacing.within_brackets);
            set(
                &mut target.before_method_call_parentheses,
                spacing.before_method_call_parentheses,
            );
            set(
                &mut target.within_method_call_parentheses,
                spacing.within_method_call_parentheses,
            );
            set(
                &mut target.before_method_declaration_parentheses,
                spacing.before_method_declaration_parentheses,
            );
            set(
                &mut target.within_method_declaration_parentheses,
                spacing.within_method_declaration_parentheses,
            );
            set(
                &mut target.before_constructor_declaration_parentheses,
                spacing.before_constructor_declaration_parentheses,
            );
            set(
                &mut target.before_delegate_declaration_parentheses,
                spacing.before_delegate_declaration_parentheses,
            );
            set(&mut target.around_assignment, spacing.around_assignment);
            set(
                &mut target.around_bitwise_operator,
                spacing.around_bitwise_operator,
            );
            set(
                &mut target.around_logical_operator,
                spacing.around_logical_operator,
            );
            set(
                &mut target.around_relational_operator,
                spacing.around_relational_operator,
            );
            set(
                &mut target.around_equality_operator,
                spacing.around_equality_operator,
            );
            set(
                &mut target.around_additive_operator,
                spacing.around_additive_operator,
            );
            set(
                &mut target.around_multiplicative_operator,
                spacing.around_multiplicative_operator,
            );
            set(&mut target.around_shift_operator, spacing.around_shift_operator);
            set(
                &mut target.within_cast_parentheses,
                spacing.within_cast_parentheses,
            );
            set(&mut target.after_typecast, spacing.after_typecast);
            set(
                &mut target.within_checked_parentheses,
                spacing.within_checked_parentheses,
            );
            set(
                &mut target.before_conditional_operator_condition,
                spacing.before_conditional_operator_condition,
            );
            set(
                &mut target.after_conditional_operator_condition,
                spacing.after_conditional_operator_condition,
            );
            set(
                &mut target.before_conditional_operator_separator,
                spacing.before_conditional_operator_separator,
            );
            set(
                &mut target.after_conditional_operator_separator,
                spacing.after_conditional_operator_separator,
            );
            set(
                &mut target.within_typeof_parentheses,
                spacing.within_typeof_parentheses,
            );
            set(
                &mut target.within_sizeof_parentheses,
                spacing.within_sizeof_parentheses,
            );
            set(&mut target.within_parentheses, spacing.within_parentheses);
            set(&mut target.before_if_parentheses, spacing.before_if_parentheses);
            set(&mut target.within_if_parentheses, spacing.within_if_parentheses);
            set(
                &mut target.before_while_parentheses,
                spacing.before_while_parentheses,
            );
            set(
                &mut target.within_while_parentheses,
                spacing.within_while_parentheses,
            );
            set(&mut target.before_for_parentheses, spacing.before_for_parentheses);
            set(&mut target.within_for_parentheses, spacing.within_for_parentheses);
            set(
                &mut target.before_foreach_parentheses,
                spacing.before_foreach_parentheses,
            );
            set(
                &mut target.within_foreach_parentheses,
                spacing.within_foreach_parentheses,
            );
            set(
                &mut target.before_catch_parentheses,
                spacing.before_catch_parentheses,
            );
            set(
                &mut target.within_catch_parentheses,
                spacing.within_catch_parentheses,
            );
            set(
                &mut target.before_switch_parentheses,
                spacing.before_switch_parentheses,
            );
            set(
                &mut target.within_switch_parentheses,
                spacing.within_switch_parentheses,
            );
            set(
                &mut target.before_lock_parentheses,
                spacing.before_lock_parentheses,
            );
            set(
                &mut target.within_lock_parentheses,
                spacing.within_lock_parentheses,
            );
            set(
                &mut target.before_using_parentheses,
                spacing.before_using_parentheses,
            );
            set(
                &mut target.within_using_parentheses,
                spacing.within_using_parentheses,
            );
            set(&mut target.before_for_semicolon, spacing.before_for_semicolon);
            set(&mut target.after_for_semicolon, spacing.after_for_semicolon);
        }

        if let Some(blank_lines) = &config.blank_lines {
            set(
                &mut policy.blank_lines.between_members,
                blank_lines.between_members,
            );
            set(&mut policy.blank_lines.after_usings, blank_lines.after_usings);
        }

        if let Some(wrapping) = &config.wrapping {
            set(
                &mut policy.wrapping.array_initializer,
                wrapping.array_initializer,
            );
        }

        Ok(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{BraceStyle, Preset, Wrapping};

    #[test]
    fn test_empty_config_is_allman() {
        let policy = FormattingPolicy::from_config(&FormatterConfiguration::default()).unwrap();
        assert_eq!(policy, FormattingPolicy::allman());
    }

    #[test]
    fn test_options_override_preset() {
        let config = FormatterConfiguration {
            preset: Some(Preset::Mono),
            indent_style: Some(IndentStyle::Spaces),
            indent_size: Some(2),
            braces: Some(BracesConfiguration {
                statement: Some(BraceStyle::NextLineIndented),
                ..Default::default()
            }),
            spacing: Some(SpacingConfiguration {
                before_method_call_parentheses: Some(false),
                ..Default::default()
            }),
            wrapping: Some(WrappingConfiguration {
                array_initializer: Some(Wrapping::WrapAlways),
            }),
            ..Default::default()
        };
        let policy = FormattingPolicy::from_config(&config).unwrap();

        assert_eq!(policy.indentation.unit(), "  ");
        assert_eq!(policy.braces.statement, BraceStyle::NextLineIndented);
        assert_eq!(policy.braces.class, BraceStyle::NextLine);
        assert!(!policy.spacing.before_method_call_parentheses);
        assert!(policy.spacing.before_method_declaration_parentheses);
        assert!(!policy.indentation.indent_switch_body);
        assert_eq!(policy.wrapping.array_initializer, Wrapping::WrapAlways);
    }

    #[test]
    fn test_indent_size_is_validated() {
        let config = FormatterConfiguration {
            indent_size: Some(0),
            ..Default::default()
        };
        let error = FormattingPolicy::from_config(&config).unwrap_err();
        assert!(error.to_string().contains("indentSize"));
    }

    #[test]
    fn test_disabled_formatter_uses_defaults() {
        let config = SharpoutConfig {
            formatter: Some(FormatterConfiguration {
                enabled: Some(false),
                preset: Some(Preset::Kr),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(config.policy().unwrap(), FormattingPolicy::default());
    }
}
