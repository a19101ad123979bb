use super::Printer;
use crate::ast::{
    AccessorKind, BlockStatement, CaseLabel, CatchClause, Comment, Expression, NodeRef,
    PreprocessorDirective, Statement, SwitchSection, UsingResource, VariableDeclarationStatement,
};
use crate::policy::BraceStyle;
use crate::sink::{TokenClass, TokenRole, TokenWriter};
use crate::Result;

impl<'a, W: TokenWriter> Printer<'a, W> {
    pub(super) fn visit_statement(&mut self, stmt: &'a Statement) -> Result<()> {
        let spacing = self.spacing();
        match stmt {
            Statement::Block(block) => self.visit_block(block)?,
            Statement::Break => {
                self.keyword("break");
                self.semicolon();
            }
            Statement::Continue => {
                self.keyword("continue");
                self.semicolon();
            }
            Statement::Checked(checked) => {
                self.keyword("checked");
                self.visit_child(&checked.body)?;
            }
            Statement::Unchecked(unchecked) => {
                self.keyword("unchecked");
                self.visit_child(&unchecked.body)?;
            }
            Statement::Unsafe(unsafe_stmt) => {
                self.keyword("unsafe");
                self.visit_child(&unsafe_stmt.body)?;
            }
            Statement::DoWhile(do_while) => {
                self.keyword("do");
                self.embedded_statement(&do_while.embedded_statement)?;
                self.keyword("while");
                self.space_if(spacing.before_while_parentheses);
                self.parenthesized(&do_while.condition, spacing.within_while_parentheses)?;
                self.semicolon();
            }
            Statement::Empty => self.semicolon(),
            Statement::Expression(expr) => {
                self.visit_child(&expr.expression)?;
                self.semicolon();
            }
            Statement::Fixed(fixed) => {
                let within = spacing.within_using_parentheses;
                if fixed.variables.is_empty() {
                    return Err(self.malformed("fixed statement declares no variables"));
                }
                self.keyword("fixed");
                self.space_if(spacing.before_using_parentheses);
                self.token(TokenRole::OpenParen, "(");
                self.space_if(within);
                self.visit_child(&fixed.variable_type)?;
                self.space();
                self.comma_separated(&fixed.variables)?;
                self.space_if(within);
                self.token(TokenRole::CloseParen, ")");
                self.embedded_statement(&fixed.embedded_statement)?;
            }
            Statement::Foreach(foreach) => {
                let within = spacing.within_foreach_parentheses;
                self.keyword("foreach");
                self.space_if(spacing.before_foreach_parentheses);
                self.token(TokenRole::OpenParen, "(");
                self.space_if(within);
                self.visit_child(&foreach.variable_type)?;
                self.space();
                self.identifier(&foreach.variable_name, TokenClass::Local)?;
                self.space();
                self.keyword("in");
                self.space();
                self.visit_child(&foreach.in_expression)?;
                self.space_if(within);
                self.token(TokenRole::CloseParen, ")");
                self.embedded_statement(&foreach.embedded_statement)?;
            }
            Statement::For(for_stmt) => {
                let within = spacing.within_for_parentheses;
                let header_statement = |s: &Statement| {
                    matches!(s, Statement::Expression(_) | Statement::VariableDeclaration(_))
                };
                if !for_stmt.initializers.iter().all(header_statement)
                    || !for_stmt.iterators.iter().all(header_statement)
                {
                    return Err(self.malformed(
                        "for initializers and iterators must be expression or declaration statements",
                    ));
                }
                self.keyword("for");
                self.space_if(spacing.before_for_parentheses);
                self.token(TokenRole::OpenParen, "(");
                self.space_if(within);
                self.comma_separated(&for_stmt.initializers)?;
                self.space_if(spacing.before_for_semicolon);
                self.token(TokenRole::Semicolon, ";");
                if let Some(condition) = &for_stmt.condition {
                    self.space_if(spacing.after_for_semicolon);
                    self.visit_child(condition)?;
                }
                self.space_if(spacing.before_for_semicolon);
                self.token(TokenRole::Semicolon, ";");
                if !for_stmt.iterators.is_empty() {
                    self.space_if(spacing.after_for_semicolon);
                    self.comma_separated(&for_stmt.iterators)?;
                }
                self.space_if(within);
                self.token(TokenRole::CloseParen, ")");
                self.embedded_statement(&for_stmt.embedded_statement)?;
            }
            Statement::Goto(goto) => {
                self.keyword("goto");
                self.identifier(&goto.label, TokenClass::Label)?;
                self.semicolon();
            }
            Statement::GotoCase(goto) => {
                self.keyword("goto");
                self.keyword("case");
                self.space();
                self.visit_child(&goto.label_expression)?;
                self.semicolon();
            }
            Statement::GotoDefault => {
                self.keyword("goto");
                self.keyword("default");
                self.semicolon();
            }
            Statement::IfElse(if_else) => {
                self.keyword("if");
                self.space_if(spacing.before_if_parentheses);
                self.parenthesized(&if_else.condition, spacing.within_if_parentheses)?;
                self.embedded_statement(&if_else.true_statement)?;
                if let Some(false_statement) = &if_else.false_statement {
                    self.keyword("else");
                    if matches!(**false_statement, Statement::IfElse(_)) {
                        self.visit_child(&**false_statement)?;
                    } else {
                        self.embedded_statement(false_statement)?;
                    }
                }
            }
            Statement::Label(label) => {
                self.identifier(&label.label, TokenClass::Label)?;
                self.token(TokenRole::Colon, ":");
                // a label must label something
                if !self.followed_by_statement(stmt) {
                    self.token(TokenRole::Semicolon, ";");
                }
                self.new_line();
            }
            Statement::Lock(lock) => {
                self.keyword("lock");
                self.space_if(spacing.before_lock_parentheses);
                self.parenthesized(&lock.expression, spacing.within_lock_parentheses)?;
                self.embedded_statement(&lock.embedded_statement)?;
            }
            Statement::Return(ret) => {
                self.keyword("return");
                if let Some(expression) = &ret.expression {
                    self.space();
                    self.visit_child(expression)?;
                }
                self.semicolon();
            }
            Statement::Throw(throw) => {
                self.keyword("throw");
                if let Some(expression) = &throw.expression {
                    self.space();
                    self.visit_child(expression)?;
                }
                self.semicolon();
            }
            Statement::Switch(switch) => {
                let style = self.policy.braces.statement;
                let indent_body = self.policy.indentation.indent_switch_body;
                self.keyword("switch");
                self.space_if(spacing.before_switch_parentheses);
                self.parenthesized(&switch.expression, spacing.within_switch_parentheses)?;
                self.open_brace(style);
                if !indent_body {
                    self.unindent();
                }
                self.all(&switch.sections)?;
                if !indent_body {
                    self.indent();
                }
                self.close_brace(style);
                self.new_line();
            }
            Statement::TryCatch(try_catch) => {
                self.keyword("try");
                self.visit_child(&try_catch.try_block)?;
                self.all(&try_catch.catch_clauses)?;
                if let Some(finally_block) = &try_catch.finally_block {
                    self.keyword("finally");
                    self.visit_child(finally_block)?;
                }
            }
            Statement::Using(using) => {
                let within = spacing.within_using_parentheses;
                self.keyword("using");
                self.space_if(spacing.before_using_parentheses);
                self.token(TokenRole::OpenParen, "(");
                self.space_if(within);
                self.visit_child(&using.resource)?;
                self.space_if(within);
                self.token(TokenRole::CloseParen, ")");
                self.embedded_statement(&using.embedded_statement)?;
            }
            Statement::VariableDeclaration(decl) => self.visit_variable_declaration(decl)?,
            Statement::While(while_stmt) => {
                self.keyword("while");
                self.space_if(spacing.before_while_parentheses);
                self.parenthesized(&while_stmt.condition, spacing.within_while_parentheses)?;
                self.embedded_statement(&while_stmt.embedded_statement)?;
            }
            Statement::YieldBreak => {
                self.keyword("yield");
                self.keyword("break");
                self.semicolon();
            }
            Statement::YieldReturn(yield_return) => {
                self.keyword("yield");
                self.keyword("return");
                self.space();
                self.visit_child(&yield_return.expression)?;
                self.semicolon();
            }
            Statement::Comment(comment) => self.visit_comment(comment),
            Statement::Directive(directive) => self.visit_directive(directive),
            Statement::Pattern(pattern) => self.visit_pattern(pattern)?,
        }
        Ok(())
    }

    /// Blocks print directly after their header, anything else goes on an
    /// indented line of its own
    fn embedded_statement(&mut self, stmt: &'a Statement) -> Result<()> {
        if matches!(stmt, Statement::Block(_)) {
            return self.visit_child(stmt);
        }
        self.new_line();
        self.indent();
        self.visit_child(stmt)?;
        self.unindent();
        Ok(())
    }

    /// Whether a non-trivia statement comes after `stmt` in its parent
    fn followed_by_statement(&self, stmt: &'a Statement) -> bool {
        let Some(statements) = self.parent().and_then(|parent| parent.statements()) else {
            return false;
        };
        let this = NodeRef::from(stmt);
        statements
            .iter()
            .skip_while(|sibling| !NodeRef::from(*sibling).ptr_eq(&this))
            .skip(1)
            .any(|sibling| !matches!(sibling, Statement::Comment(_) | Statement::Directive(_)))
    }

    /// Statements in a `for` header and the declaration of a `using`
    /// resource are not terminated
    pub(super) fn semicolon_suppressed(&self) -> bool {
        let (Some(current), Some(parent)) = (self.current(), self.parent()) else {
            return false;
        };
        match parent {
            NodeRef::Statement(Statement::For(for_stmt)) => for_stmt
                .initializers
                .iter()
                .chain(&for_stmt.iterators)
                .any(|stmt| NodeRef::from(stmt).ptr_eq(&current)),
            NodeRef::Statement(Statement::Using(using)) => match &using.resource {
                UsingResource::Declaration(decl) => NodeRef::from(decl).ptr_eq(&current),
                UsingResource::Expression(_) => false,
            },
            _ => false,
        }
    }

    fn block_brace_style(&self) -> BraceStyle {
        let braces = &self.policy.braces;
        match self.parent() {
            Some(NodeRef::Expression(
                Expression::Lambda(_) | Expression::AnonymousMethod(_),
            )) => braces.anonymous_method,
            Some(NodeRef::Constructor(_)) => braces.constructor,
            Some(NodeRef::Destructor(_)) => braces.destructor,
            Some(NodeRef::Method(_) | NodeRef::Operator(_)) => braces.method,
            Some(NodeRef::Accessor(accessor)) => match accessor.kind {
                AccessorKind::Get => braces.property_get,
                AccessorKind::Set => braces.property_set,
                AccessorKind::Add => braces.event_add,
                AccessorKind::Remove => braces.event_remove,
            },
            _ => braces.statement,
        }
    }

    pub(super) fn visit_block(&mut self, block: &'a BlockStatement) -> Result<()> {
        let style = self.block_brace_style();
        self.open_brace(style);
        self.all(&block.statements)?;
        self.close_brace(style);
        if !self.parent().is_some_and(|parent| parent.is_expression()) {
            self.new_line();
        }
        Ok(())
    }

    pub(super) fn visit_variable_declaration(
        &mut self,
        decl: &'a VariableDeclarationStatement,
    ) -> Result<()> {
        if decl.variables.is_empty() {
            return Err(self.malformed("variable declaration declares no variables"));
        }
        self.modifiers(&decl.modifiers);
        self.visit_child(&decl.variable_type)?;
        self.space();
        self.comma_separated(&decl.variables)?;
        self.semicolon();
        Ok(())
    }

    pub(super) fn visit_switch_section(&mut self, section: &'a SwitchSection) -> Result<()> {
        if section.case_labels.is_empty() {
            return Err(self.malformed("switch section has no case labels"));
        }
        for (i, label) in section.case_labels.iter().enumerate() {
            if i > 0 {
                self.new_line();
            }
            self.visit_child(label)?;
        }
        let is_block = matches!(section.statements.as_slice(), [Statement::Block(_)]);
        let indented = self.policy.indentation.indent_case_body && !is_block;
        if indented {
            self.indent();
        }
        if !is_block {
            self.new_line();
        }
        self.all(&section.statements)?;
        if indented {
            self.unindent();
        }
        Ok(())
    }

    pub(super) fn visit_case_label(&mut self, label: &'a CaseLabel) -> Result<()> {
        match &label.expression {
            Some(expression) => {
                self.keyword("case");
                self.space();
                self.visit_child(expression)?;
            }
            None => self.keyword("default"),
        }
        self.token(TokenRole::Colon, ":");
        Ok(())
    }

    pub(super) fn visit_catch_clause(&mut self, clause: &'a CatchClause) -> Result<()> {
        let spacing = self.spacing();
        self.keyword("catch");
        if let Some(catch_type) = &clause.catch_type {
            let within = spacing.within_catch_parentheses;
            self.space_if(spacing.before_catch_parentheses);
            self.token(TokenRole::OpenParen, "(");
            self.space_if(within);
            self.visit_child(catch_type)?;
            if let Some(name) = &clause.variable_name {
                self.space();
                self.identifier(name, TokenClass::Local)?;
            }
            self.space_if(within);
            self.token(TokenRole::CloseParen, ")");
        }
        if let Some(condition) = &clause.condition {
            self.space();
            self.keyword("when");
            self.space_if(spacing.before_if_parentheses);
            self.parenthesized(condition, spacing.within_if_parentheses)?;
        }
        self.visit_child(&clause.body)
    }

    pub(super) fn visit_comment(&mut self, comment: &'a Comment) {
        self.writer
            .write_comment(comment.comment_type, &comment.content);
        let ends_line = comment.comment_type.ends_line();
        self.at_line_start = ends_line;
        if !ends_line {
            self.new_line();
        }
    }

    pub(super) fn visit_directive(&mut self, directive: &'a PreprocessorDirective) {
        self.writer
            .write_preprocessor_directive(directive.directive_type, directive.argument.as_deref());
        self.at_line_start = true;
    }
}
