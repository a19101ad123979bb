//! Configuration merging logic
//!
//! Combines a configuration with the parents it `extends`. The current
//! (child) value always wins; a parent only fills options the child left
//! unset.

use super::sharpout_config::*;

fn fill<T>(target: &mut Option<T>, source: Option<T>) {
    if target.is_none() {
        *target = source;
    }
}

fn merge_section<T>(target: &mut Option<T>, source: Option<T>, merge: impl FnOnce(&mut T, T)) {
    if let Some(source) = source {
        match target {
            Some(existing) => merge(existing, source),
            None => *target = Some(source),
        }
    }
}

impl SharpoutConfig {
    /// Merge a parent config into this one (current takes precedence)
    ///
    /// `$schema`, `root` and `extends` are file-specific and never merged.
    pub fn merge_with(&mut self, other: SharpoutConfig) {
        merge_section(
            &mut self.formatter,
            other.formatter,
            FormatterConfiguration::merge_with,
        );
    }
}

impl FormatterConfiguration {
    pub fn merge_with(&mut self, other: FormatterConfiguration) {
        fill(&mut self.enabled, other.enabled);
        fill(&mut self.preset, other.preset);
        fill(&mut self.indent_style, other.indent_style);
        fill(&mut self.indent_size, other.indent_size);
        fill(&mut self.new_line, other.new_line);
        fill(&mut self.indent_switch_body, other.indent_switch_body);
        fill(&mut self.indent_case_body, other.indent_case_body);
        merge_section(&mut self.braces, other.braces, BracesConfiguration::merge_with);
        merge_section(&mut self.spacing, other.spacing, SpacingConfiguration::merge_with);
        merge_section(
            &mut self.blank_lines,
            other.blank_lines,
            BlankLinesConfiguration::merge_with,
        );
        merge_section(
            &mut self.wrapping,
            other.wrapping,
            WrappingConfiguration::merge_with,
        );
    }
}

impl BracesConfiguration {
    pub fn merge_with(&mut self, other: BracesConfiguration) {
        fill(&mut self.namespace, other.namespace);
        fill(&mut self.class, other.class);
        fill(&mut self.interface, other.interface);
        fill(&mut self.r#struct, other.r#struct);
        fill(&mut self.r#enum, other.r#enum);
        fill(&mut self.method, other.method);
        fill(&mut self.anonymous_method, other.anonymous_method);
        fill(&mut self.constructor, other.constructor);
        fill(&mut self.destructor, other.destructor);
        fill(&mut self.property, other.property);
        fill(&mut self.property_get, other.property_get);
        fill(&mut self.property_set, other.property_set);
        fill(&mut self.event, other.event);
        fill(&mut self.event_add, other.event_add);
        fill(&mut self.event_remove, other.event_remove);
        fill(&mut self.statement, other.statement);
    }
}

impl SpacingConfiguration {
    pub fn merge_with(&mut self, other: SpacingConfiguration) {
        fill(&mut self.before_comma, other.before_comma);
        fill(&mut self.after_comma, other.after_comma);
        fill(&mut self.within_brackets, other.within_brackets);
        fill(
            &mut self.before_method_call_parentheses,
            other.before_method_call_parentheses,
        );
        fill(
            &mut self.within_method_call_parentheses,
            other.within_method_call_parentheses,
        );
        fill(
            &mut self.before_method_declaration_parentheses,
            other.before_method_declaration_parentheses,
        );
        fill(
            &mut self.within_method_declaration_parentheses,
            other.within_method_declaration_parentheses,
        );
        fill(
            &mut self.before_constructor_declaration_parentheses,
            other.before_constructor_declaration_parentheses,
        );
        fill(
            &mut self.before_delegate_declaration_parentheses,
            other.before_delegate_declaration_parentheses,
        );
        fill(&mut self.around_assignment, other.around_assignment);
        fill(&mut self.around_bitwise_operator, other.around_bitwise_operator);
        fill(&mut self.around_logical_operator, other.around_logical_operator);
        fill(
            &mut self.around_relational_operator,
            other.around_relational_operator,
        );
        fill(&mut self.around_equality_operator, other.around_equality_operator);
        fill(&mut self.around_additive_operator, other.around_additive_operator);
        fill(
            &mut self.around_multiplicative_operator,
            other.around_multiplicative_operator,
        );
        fill(&mut self.around_shift_operator, other.around_shift_operator);
        fill(&mut self.within_cast_parentheses, other.within_cast_parentheses);
        fill(&mut self.after_typecast, other.after_typecast);
        fill(
            &mut self.within_checked_parentheses,
            other.within_checked_parentheses,
        );
        fill(
            &mut self.before_conditional_operator_condition,
            other.before_conditional_operator_condition,
        );
        fill(
            &mut self.after_conditional_operator_condition,
            other.after_conditional_operator_condition,
        );
        fill(
            &mut self.before_conditional_operator_separator,
            other.before_conditional_operator_separator,
        );
        fill(
            &mut self.after_conditional_operator_separator,
            other.after_conditional_operator_separator,
        );
        fill(
            &mut self.within_typeof_parentheses,
            other.within_typeof_parentheses,
        );
        fill(
            &mut self.within_sizeof_parentheses,
            other.within_sizeof_parentheses,
        );
        fill(&mut self.within_parentheses, other.within_parentheses);
        fill(&mut self.before_if_parentheses, other.before_if_parentheses);
        fill(&mut self.within_if_parentheses, other.within_if_parentheses);
        fill(&mut self.before_while_parentheses, other.before_while_parentheses);
        fill(&mut self.within_while_parentheses, other.within_while_parentheses);
        fill(&mut self.before_for_parentheses, other.before_for_parentheses);
        fill(&mut self.within_for_parentheses, other.within_for_parentheses);
        fill(
            &mut self.before_foreach_parentheses,
            other.before_foreach_parentheses,
        );
        fill(
            &mut self.within_foreach_parentheses,
            other.within_foreach_parentheses,
        );
        fill(&mut self.before_catch_parentheses, other.before_catch_parentheses);
        fill(&mut self.within_catch_parentheses, other.within_catch_parentheses);
        fill(
            &mut self.before_switch_parentheses,
            other.before_switch_parentheses,
        );
        fill(
            &mut self.within_switch_parentheses,
            other.within_switch_parentheses,
        );
        fill(&mut self.before_lock_parentheses, other.before_lock_parentheses);
        fill(&mut self.within_lock_parentheses, other.within_lock_parentheses);
        fill(&mut self.before_using_parentheses, other.before_using_parentheses);
        fill(&mut self.within_using_parentheses, other.within_using_parentheses);
        fill(&mut self.before_for_semicolon, other.before_for_semicolon);
        fill(&mut self.after_for_semicolon, other.after_for_semicolon);
    }
}

impl BlankLinesConfiguration {
    pub fn merge_with(&mut self, other: BlankLinesConfiguration) {
        fill(&mut self.between_members, other.between_members);
        fill(&mut self.after_usings, other.after_usings);
    }
}

impl WrappingConfiguration {
    pub fn merge_with(&mut self, other: WrappingConfiguration) {
        fill(&mut self.array_initializer, other.array_initializer);
    }
}
