use super::Printer;
use crate::ast::{
    ArrayInitializerExpression, AssignmentOperator, BinaryOperator, Expression, FieldDirection,
    LambdaBody, LambdaExpression, Literal, NodeRef, ParameterModifier, QueryClause,
    QueryExpression, QueryOrdering, QueryOrderingDirection, UnaryOperator,
};
use crate::policy::{BraceStyle, Wrapping};
use crate::sink::{TokenClass, TokenRole, TokenWriter};
use crate::Result;

impl<'a, W: TokenWriter> Printer<'a, W> {
    pub(super) fn visit_expression(&mut self, expr: &'a Expression) -> Result<()> {
        let spacing = self.spacing();
        match expr {
            Expression::AnonymousMethod(method) => {
                if method.is_async {
                    self.keyword("async");
                    self.space();
                }
                self.keyword("delegate");
                if method.has_parameter_list {
                    self.space_if(spacing.before_method_declaration_parentheses);
                    self.parenthesized_list(
                        &method.parameters,
                        spacing.within_method_declaration_parentheses,
                    )?;
                }
                self.visit_child(&method.body)?;
            }
            Expression::Undocumented(undocumented) => {
                self.keyword(undocumented.operation.keyword());
                if !undocumented.arguments.is_empty() {
                    self.space_if(spacing.before_method_call_parentheses);
                    self.parenthesized_list(
                        &undocumented.arguments,
                        spacing.within_method_call_parentheses,
                    )?;
                }
            }
            Expression::ArrayCreate(create) => {
                self.keyword("new");
                self.visit_child(&create.element_type)?;
                if !create.arguments.is_empty() {
                    self.bracketed_list(&create.arguments, spacing.within_brackets)?;
                }
                self.all(&create.additional_specifiers)?;
                if let Some(initializer) = &create.initializer {
                    self.visit_child(initializer)?;
                }
            }
            Expression::ArrayInitializer(init) => self.visit_array_initializer(init)?,
            Expression::As(as_expr) => {
                self.visit_child(&*as_expr.expression)?;
                self.space();
                self.keyword("as");
                self.space();
                self.visit_child(&as_expr.target_type)?;
            }
            Expression::Assignment(assign) => {
                let around = spacing.around_assignment;
                self.visit_child(&*assign.left)?;
                self.space_if(around);
                self.token(TokenRole::Operator, assign.operator.token());
                self.space_if(around);
                self.visit_child(&*assign.right)?;
            }
            Expression::BaseReference => self.keyword("base"),
            Expression::Binary(binary) => {
                let around = self.around_binary_operator(binary.operator);
                self.visit_child(&*binary.left)?;
                self.space_if(around);
                self.token(TokenRole::Operator, binary.operator.token());
                self.space_if(around);
                self.visit_child(&*binary.right)?;
            }
            Expression::Cast(cast) => {
                let within = spacing.within_cast_parentheses;
                let after = spacing.after_typecast;
                self.token(TokenRole::OpenParen, "(");
                self.space_if(within);
                self.visit_child(&cast.target_type)?;
                self.space_if(within);
                self.token(TokenRole::CloseParen, ")");
                self.space_if(after);
                self.visit_child(&*cast.expression)?;
            }
            Expression::Checked(checked) => {
                self.keyword("checked");
                self.parenthesized(&*checked.expression, spacing.within_checked_parentheses)?;
            }
            Expression::Unchecked(unchecked) => {
                self.keyword("unchecked");
                self.parenthesized(&*unchecked.expression, spacing.within_checked_parentheses)?;
            }
            Expression::Conditional(cond) => {
                let before_condition = spacing.before_conditional_operator_condition;
                let after_condition = spacing.after_conditional_operator_condition;
                let before_separator = spacing.before_conditional_operator_separator;
                let after_separator = spacing.after_conditional_operator_separator;
                self.visit_child(&*cond.condition)?;
                self.space_if(before_condition);
                self.token(TokenRole::Operator, "?");
                self.space_if(after_condition);
                self.visit_child(&*cond.true_expression)?;
                self.space_if(before_separator);
                self.token(TokenRole::Colon, ":");
                self.space_if(after_separator);
                self.visit_child(&*cond.false_expression)?;
            }
            Expression::DefaultValue(default) => {
                let within = spacing.within_typeof_parentheses;
                self.keyword("default");
                self.parenthesized(&default.target_type, within)?;
            }
            Expression::Direction(direction) => {
                self.keyword(match direction.direction {
                    FieldDirection::Out => "out",
                    FieldDirection::Ref => "ref",
                });
                self.space();
                self.visit_child(&*direction.expression)?;
            }
            Expression::Identifier(ident) => {
                self.identifier(&ident.identifier, TokenClass::Text)?;
                self.chevron_list(&ident.type_arguments)?;
            }
            Expression::Indexer(indexer) => {
                let before = spacing.before_method_call_parentheses;
                let within = spacing.within_brackets;
                self.visit_child(&*indexer.target)?;
                self.space_if(before);
                self.bracketed_list(&indexer.arguments, within)?;
            }
            Expression::Invocation(invocation) => {
                let before = spacing.before_method_call_parentheses;
                let within = spacing.within_method_call_parentheses;
                self.visit_child(&*invocation.target)?;
                self.space_if(before);
                self.parenthesized_list(&invocation.arguments, within)?;
            }
            Expression::Is(is_expr) => {
                self.visit_child(&*is_expr.expression)?;
                self.space();
                self.keyword("is");
                self.visit_child(&is_expr.target_type)?;
            }
            Expression::Lambda(lambda) => self.visit_lambda(lambda)?,
            Expression::MemberReference(member) => {
                self.visit_child(&*member.target)?;
                self.token(TokenRole::Dot, ".");
                self.identifier(&member.member_name, TokenClass::Text)?;
                self.chevron_list(&member.type_arguments)?;
            }
            Expression::NamedArgument(named) => {
                self.identifier(&named.name, TokenClass::Parameter)?;
                self.token(TokenRole::Colon, ":");
                self.space();
                self.visit_child(&*named.expression)?;
            }
            Expression::Named(named) => {
                self.identifier(&named.name, TokenClass::Property)?;
                self.space();
                self.token(TokenRole::Operator, "=");
                self.space();
                self.visit_child(&*named.expression)?;
            }
            Expression::NullReference => {
                self.writer.write_primitive_value(&Literal::Null, None);
                self.at_line_start = false;
            }
            Expression::ObjectCreate(create) => {
                self.keyword("new");
                self.visit_child(&create.created_type)?;
                let use_parentheses = !create.arguments.is_empty()
                    || create.initializer.is_none()
                    || create.explicit_parentheses;
                if use_parentheses {
                    let before = spacing.before_method_call_parentheses;
                    let within = spacing.within_method_call_parentheses;
                    self.space_if(before);
                    self.parenthesized_list(&create.arguments, within)?;
                }
                if let Some(initializer) = &create.initializer {
                    self.visit_child(initializer)?;
                }
            }
            Expression::AnonymousTypeCreate(create) => {
                self.keyword("new");
                self.initializer_elements(&create.initializers, false)?;
            }
            Expression::Parenthesized(paren) => {
                self.parenthesized(&*paren.expression, spacing.within_parentheses)?;
            }
            Expression::PointerReference(pointer) => {
                self.visit_child(&*pointer.target)?;
                self.token(TokenRole::Arrow, "->");
                self.identifier(&pointer.member_name, TokenClass::Text)?;
                self.chevron_list(&pointer.type_arguments)?;
            }
            Expression::Primitive(primitive) => {
                self.writer
                    .write_primitive_value(&primitive.value, primitive.raw.as_deref());
                self.at_line_start = false;
            }
            Expression::SizeOf(size_of) => {
                let within = spacing.within_sizeof_parentheses;
                self.keyword("sizeof");
                self.parenthesized(&size_of.target_type, within)?;
            }
            Expression::StackAlloc(alloc) => {
                let within = spacing.within_brackets;
                self.keyword("stackalloc");
                self.visit_child(&alloc.element_type)?;
                self.token(TokenRole::OpenBracket, "[");
                self.space_if(within);
                self.visit_child(&*alloc.count_expression)?;
                self.space_if(within);
                self.token(TokenRole::CloseBracket, "]");
            }
            Expression::ThisReference => self.keyword("this"),
            Expression::TypeOf(type_of) => {
                let within = spacing.within_typeof_parentheses;
                self.keyword("typeof");
                self.parenthesized(&type_of.target_type, within)?;
            }
            Expression::TypeReference(reference) => {
                self.visit_child(&reference.target_type)?;
            }
            Expression::Unary(unary) => match unary.operator {
                UnaryOperator::Await => {
                    self.keyword("await");
                    self.visit_child(&*unary.expression)?;
                }
                op if op.is_postfix() => {
                    self.visit_child(&*unary.expression)?;
                    self.token(TokenRole::Operator, op.token());
                }
                op => {
                    self.token(TokenRole::Operator, op.token());
                    self.visit_child(&*unary.expression)?;
                }
            },
            Expression::Query(query) => self.visit_query(query)?,
            Expression::Pattern(pattern) => self.visit_pattern(pattern)?,
        }
        Ok(())
    }

    fn around_binary_operator(&self, operator: BinaryOperator) -> bool {
        let spacing = self.spacing();
        match operator {
            BinaryOperator::BitwiseAnd | BinaryOperator::BitwiseOr | BinaryOperator::ExclusiveOr => {
                spacing.around_bitwise_operator
            }
            BinaryOperator::ConditionalAnd | BinaryOperator::ConditionalOr => {
                spacing.around_logical_operator
            }
            BinaryOperator::GreaterThan
            | BinaryOperator::GreaterThanOrEqual
            | BinaryOperator::LessThan
            | BinaryOperator::LessThanOrEqual => spacing.around_relational_operator,
            BinaryOperator::Equality | BinaryOperator::InEquality => {
                spacing.around_equality_operator
            }
            BinaryOperator::Add | BinaryOperator::Subtract => spacing.around_additive_operator,
            BinaryOperator::Multiply | BinaryOperator::Divide | BinaryOperator::Modulus => {
                spacing.around_multiplicative_operator
            }
            BinaryOperator::ShiftLeft | BinaryOperator::ShiftRight => {
                spacing.around_shift_operator
            }
            BinaryOperator::NullCoalescing => true,
        }
    }

    fn visit_lambda(&mut self, lambda: &'a LambdaExpression) -> Result<()> {
        if lambda.is_async {
            self.keyword("async");
            self.space();
        }
        let bare_parameter = match lambda.parameters.as_slice() {
            [only] => only.parameter_type.is_none() && only.modifier == ParameterModifier::None,
            _ => false,
        };
        if bare_parameter {
            self.comma_separated(&lambda.parameters)?;
        } else {
            self.parenthesized_list(
                &lambda.parameters,
                self.spacing().within_method_declaration_parentheses,
            )?;
        }
        self.space();
        self.token(TokenRole::Operator, "=>");
        match &lambda.body {
            LambdaBody::Expression(body) => {
                self.space();
                self.visit_child(&**body)?;
            }
            // the opening brace brings its own space
            LambdaBody::Block(block) => self.visit_child(block)?,
        }
        Ok(())
    }

    pub(super) fn visit_array_initializer(
        &mut self,
        init: &'a ArrayInitializerExpression,
    ) -> Result<()> {
        if self.can_omit_initializer_braces(init) {
            return self.visit_child(&init.elements[0]);
        }
        self.initializer_elements(&init.elements, init.trailing_comma)
    }

    /// `new List<int[]> { { 1 } }` may print its single inner element bare
    /// unless the source spelled the braces or the element is an assignment
    fn can_omit_initializer_braces(&self, init: &ArrayInitializerExpression) -> bool {
        if init.explicit_braces || init.elements.len() != 1 {
            return false;
        }
        if let Expression::Assignment(assign) = &init.elements[0] {
            if matches!(assign.operator, AssignmentOperator::Assign) {
                return false;
            }
        }
        matches!(self.parent(), Some(NodeRef::ArrayInitializer(_)))
            && matches!(
                self.ancestor(2),
                Some(NodeRef::Expression(
                    Expression::ObjectCreate(_) | Expression::Named(_)
                ))
            )
    }

    fn initializer_elements(
        &mut self,
        elements: &'a [Expression],
        trailing_comma: bool,
    ) -> Result<()> {
        let style = if self.policy.wrapping.array_initializer == Wrapping::WrapAlways {
            BraceStyle::NextLine
        } else {
            BraceStyle::SameLine
        };
        self.open_brace(style);
        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                self.comma(true);
                self.new_line();
            }
            self.visit_child(element)?;
        }
        if !elements.is_empty() {
            if trailing_comma {
                self.comma(true);
            }
            self.new_line();
        }
        self.close_brace(style);
        Ok(())
    }

    pub(super) fn visit_query(&mut self, query: &'a QueryExpression) -> Result<()> {
        if query.clauses.is_empty() {
            return Err(self.malformed("query expression has no clauses"));
        }
        let nested = matches!(
            self.parent(),
            Some(NodeRef::QueryClause(clause)) if !matches!(clause, QueryClause::Continuation(_))
        );
        if nested {
            self.indent();
            self.new_line();
        }
        for (i, clause) in query.clauses.iter().enumerate() {
            if i > 0 && !matches!(clause, QueryClause::Continuation(_)) {
                self.new_line();
            }
            self.visit_child(clause)?;
        }
        if nested {
            self.unindent();
        }
        Ok(())
    }

    pub(super) fn visit_query_clause(&mut self, clause: &'a QueryClause) -> Result<()> {
        let spacing = self.spacing();
        match clause {
            QueryClause::Continuation(cont) => {
                self.visit_child(&cont.preceding_query)?;
                self.space();
                self.keyword("into");
                self.space();
                self.identifier(&cont.identifier, TokenClass::Local)?;
            }
            QueryClause::From(from) => {
                self.keyword("from");
                if let Some(variable_type) = &from.variable_type {
                    self.visit_child(variable_type)?;
                }
                self.space();
                self.identifier(&from.identifier, TokenClass::Local)?;
                self.space();
                self.keyword("in");
                self.space();
                self.visit_child(&from.expression)?;
            }
            QueryClause::Let(let_clause) => {
                let around = spacing.around_assignment;
                self.keyword("let");
                self.space();
                self.identifier(&let_clause.identifier, TokenClass::Local)?;
                self.space_if(around);
                self.token(TokenRole::Operator, "=");
                self.space_if(around);
                self.visit_child(&let_clause.expression)?;
            }
            QueryClause::Where(where_clause) => {
                self.keyword("where");
                self.space();
                self.visit_child(&where_clause.condition)?;
            }
            QueryClause::Join(join) => {
                self.keyword("join");
                if let Some(variable_type) = &join.variable_type {
                    self.visit_child(variable_type)?;
                }
                self.space();
                self.identifier(&join.join_identifier, TokenClass::Local)?;
                self.space();
                self.keyword("in");
                self.space();
                self.visit_child(&join.in_expression)?;
                self.space();
                self.keyword("on");
                self.space();
                self.visit_child(&join.on_expression)?;
                self.space();
                self.keyword("equals");
                self.space();
                self.visit_child(&join.equals_expression)?;
                if let Some(into) = &join.into_identifier {
                    self.space();
                    self.keyword("into");
                    self.space();
                    self.identifier(into, TokenClass::Local)?;
                }
            }
            QueryClause::OrderBy(order) => {
                self.keyword("orderby");
                self.space();
                self.comma_separated(&order.orderings)?;
            }
            QueryClause::Select(select) => {
                self.keyword("select");
                self.space();
                self.visit_child(&select.expression)?;
            }
            QueryClause::Group(group) => {
                self.keyword("group");
                self.space();
                self.visit_child(&group.projection)?;
                self.space();
                self.keyword("by");
                self.space();
                self.visit_child(&group.key)?;
            }
        }
        Ok(())
    }

    pub(super) fn visit_query_ordering(&mut self, ordering: &'a QueryOrdering) -> Result<()> {
        self.visit_child(&ordering.expression)?;
        match ordering.direction {
            QueryOrderingDirection::None => {}
            QueryOrderingDirection::Ascending => {
                self.space();
                self.keyword("ascending");
            }
            QueryOrderingDirection::Descending => {
                self.space();
                self.keyword("descending");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::policy::{FormattingPolicy, Wrapping};
    use crate::printer::print_node;

    fn render_with(expr: &Expression, policy: &FormattingPolicy) -> String {
        print_node(NodeRef::from(expr), policy).unwrap()
    }

    fn render(expr: &Expression) -> String {
        render_with(expr, &FormattingPolicy::default())
    }

    fn id(name: &str) -> Expression {
        Expression::identifier(name)
    }

    #[test]
    fn test_binary_expression_default_spacing() {
        let expr = Expression::binary(id("a"), BinaryOperator::Add, id("b"));
        assert_eq!(render(&expr), "a + b");
    }

    #[test]
    fn test_binary_spacing_follows_operator_family() {
        let mut policy = FormattingPolicy::default();
        policy.spacing.around_multiplicative_operator = false;
        policy.spacing.around_additive_operator = false;

        let product = Expression::binary(id("a"), BinaryOperator::Multiply, id("b"));
        assert_eq!(render_with(&product, &policy), "a*b");

        let shift = Expression::binary(id("a"), BinaryOperator::ShiftLeft, id("b"));
        assert_eq!(render_with(&shift, &policy), "a << b");

        policy.spacing.around_logical_operator = false;
        policy.spacing.around_bitwise_operator = false;
        let coalesce = Expression::binary(id("a"), BinaryOperator::NullCoalescing, id("b"));
        assert_eq!(render_with(&coalesce, &policy), "a ?? b");
    }

    #[test]
    fn test_adjacent_unary_operators_stay_apart() {
        let expr = Expression::binary(
            id("a"),
            BinaryOperator::Add,
            Expression::unary(UnaryOperator::Plus, id("b")),
        );
        let mut policy = FormattingPolicy::default();
        policy.spacing.around_additive_operator = false;
        assert_eq!(render_with(&expr, &policy), "a+ +b");

        let negated = Expression::unary(UnaryOperator::Minus, Expression::int(-1));
        assert_eq!(render(&negated), "- -1");
    }

    #[test]
    fn test_invocation_list_spacing() {
        let mut policy = FormattingPolicy::default();
        policy.spacing.within_method_call_parentheses = true;

        let empty = Expression::invoke(id("Run"), vec![]);
        assert_eq!(render_with(&empty, &policy), "Run()");

        let two = Expression::invoke(id("Run"), vec![id("a"), Expression::int(2)]);
        assert_eq!(render_with(&two, &policy), "Run( a, 2 )");

        policy.spacing.before_method_call_parentheses = true;
        policy.spacing.before_comma = true;
        policy.spacing.after_comma = false;
        assert_eq!(render_with(&two, &policy), "Run ( a ,2 )");
    }

    #[test]
    fn test_cast_conditional_and_member_access() {
        let cast = Expression::Cast(CastExpression {
            target_type: AstType::primitive("int"),
            expression: Box::new(Expression::member(id("x"), "Length")),
        });
        assert_eq!(render(&cast), "(int)x.Length");

        let cond = Expression::Conditional(ConditionalExpression {
            condition: Box::new(id("ok")),
            true_expression: Box::new(Expression::int(1)),
            false_expression: Box::new(Expression::NullReference),
        });
        assert_eq!(render(&cond), "ok ? 1 : null");
    }

    #[test]
    fn test_lambda_parameter_parentheses() {
        let single = Expression::Lambda(LambdaExpression {
            is_async: false,
            parameters: vec![ParameterDeclaration::untyped("x")],
            body: LambdaBody::Expression(Box::new(Expression::binary(
                id("x"),
                BinaryOperator::Multiply,
                Expression::int(2),
            ))),
        });
        assert_eq!(render(&single), "x => x * 2");

        let typed = Expression::Lambda(LambdaExpression {
            is_async: true,
            parameters: vec![ParameterDeclaration::new(AstType::primitive("int"), "x")],
            body: LambdaBody::Expression(Box::new(id("x"))),
        });
        assert_eq!(render(&typed), "async (int x) => x");
    }

    #[test]
    fn test_lambda_parameters_follow_declaration_spacing() {
        let mut policy = FormattingPolicy::default();
        policy.spacing.within_method_declaration_parentheses = true;

        let typed = Expression::Lambda(LambdaExpression {
            is_async: false,
            parameters: vec![ParameterDeclaration::new(AstType::primitive("int"), "x")],
            body: LambdaBody::Expression(Box::new(id("x"))),
        });
        assert_eq!(render_with(&typed, &policy), "( int x ) => x");

        let empty = Expression::Lambda(LambdaExpression {
            is_async: false,
            parameters: vec![],
            body: LambdaBody::Expression(Box::new(id("x"))),
        });
        assert_eq!(render_with(&empty, &policy), "() => x");
    }

    #[test]
    fn test_await_is_escaped_only_in_async_lambdas() {
        let lambda = |is_async| {
            Expression::Lambda(LambdaExpression {
                is_async,
                parameters: vec![],
                body: LambdaBody::Expression(Box::new(id("await"))),
            })
        };
        assert_eq!(render(&lambda(false)), "() => await");
        assert_eq!(render(&lambda(true)), "async () => @await");
    }

    #[test]
    fn test_object_initializer_layout() {
        let create = Expression::ObjectCreate(ObjectCreateExpression {
            created_type: AstType::simple("Point"),
            arguments: vec![],
            explicit_parentheses: false,
            initializer: Some(ArrayInitializerExpression {
                elements: vec![
                    Expression::Named(NamedExpression {
                        name: "X".into(),
                        expression: Box::new(Expression::int(1)),
                    }),
                    Expression::Named(NamedExpression {
                        name: "Y".into(),
                        expression: Box::new(Expression::int(2)),
                    }),
                ],
                explicit_braces: true,
                trailing_comma: true,
            }),
        });
        assert_eq!(render(&create), "new Point {\n\tX = 1,\n\tY = 2,\n}");
    }

    #[test]
    fn test_initializer_wrapping() {
        let create = Expression::ObjectCreate(ObjectCreateExpression {
            created_type: AstType::simple("List"),
            arguments: vec![],
            explicit_parentheses: false,
            initializer: Some(ArrayInitializerExpression::new(vec![
                Expression::int(1),
                Expression::int(2),
            ])),
        });
        let mut policy = FormattingPolicy::kr();

        policy.wrapping.array_initializer = Wrapping::WrapAlways;
        assert_eq!(render_with(&create, &policy), "new List\n{\n\t1,\n\t2\n}");

        for wrapping in [Wrapping::DoNotWrap, Wrapping::WrapIfTooLong] {
            policy.wrapping.array_initializer = wrapping;
            assert_eq!(render_with(&create, &policy), "new List {\n\t1,\n\t2\n}");
        }
    }

    #[test]
    fn test_single_element_nested_initializer_drops_braces() {
        let inner = |explicit_braces| {
            Expression::ArrayInitializer(ArrayInitializerExpression {
                elements: vec![Expression::int(1)],
                explicit_braces,
                trailing_comma: false,
            })
        };
        let create = |explicit_braces| {
            Expression::ObjectCreate(ObjectCreateExpression {
                created_type: AstType::simple("Bag"),
                arguments: vec![],
                explicit_parentheses: true,
                initializer: Some(ArrayInitializerExpression::new(vec![inner(explicit_braces)])),
            })
        };
        assert_eq!(render(&create(false)), "new Bag() {\n\t1\n}");
        assert_eq!(render(&create(true)), "new Bag() {\n\t{\n\t\t1\n\t}\n}");
    }

    #[test]
    fn test_query_clauses_one_per_line() {
        let query = Expression::Query(QueryExpression {
            clauses: vec![
                QueryClause::From(QueryFromClause {
                    variable_type: None,
                    identifier: "c".into(),
                    expression: id("customers"),
                }),
                QueryClause::Where(QueryWhereClause {
                    condition: Expression::member(id("c"), "Active"),
                }),
                QueryClause::OrderBy(QueryOrderClause {
                    orderings: vec![QueryOrdering {
                        expression: Expression::member(id("c"), "Name"),
                        direction: QueryOrderingDirection::Descending,
                    }],
                }),
                QueryClause::Select(QuerySelectClause {
                    expression: id("select"),
                }),
            ],
        });
        assert_eq!(
            render(&query),
            "from c in customers\nwhere c.Active\norderby c.Name descending\nselect @select"
        );
    }

    #[test]
    fn test_empty_query_is_malformed() {
        let query = Expression::Query(QueryExpression { clauses: vec![] });
        let err = print_node(NodeRef::from(&query), &FormattingPolicy::default()).unwrap_err();
        assert!(err.to_string().starts_with("Malformed Query at Query"));
    }
}
