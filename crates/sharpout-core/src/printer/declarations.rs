use super::Printer;
use crate::ast::{
    Accessor, AccessorKind, AstType, Attribute, AttributeSection, BlockStatement, ClassType,
    Constraint, ConstructorDeclaration, ConstructorInitializer, ConstructorInitializerType,
    CustomEventDeclaration, DelegateDeclaration, DestructorDeclaration, DocumentationReference,
    EnumMemberDeclaration, EventDeclaration, ExternAliasDeclaration, FieldDeclaration,
    FixedFieldDeclaration, FixedVariableInitializer, Identifier, IndexerDeclaration,
    MethodDeclaration, NamespaceDeclaration, NamespaceMember, NodeRef, OperatorDeclaration,
    OperatorKind, ParameterDeclaration, ParameterModifier, PropertyDeclaration, SymbolKind,
    SyntaxTree, TypeDeclaration, TypeMember, TypeParameterDeclaration, UsingAliasDeclaration,
    UsingDeclaration, VariableInitializer, Variance,
};
use crate::sink::{TokenClass, TokenRole, TokenWriter};
use crate::Result;

fn is_using(member: &NamespaceMember) -> bool {
    matches!(
        member,
        NamespaceMember::Using(_) | NamespaceMember::UsingAlias(_)
    )
}

fn is_trivia(member: &TypeMember) -> bool {
    matches!(member, TypeMember::Comment(_) | TypeMember::Directive(_))
}

impl<'a, W: TokenWriter> Printer<'a, W> {
    pub(super) fn visit_syntax_tree(&mut self, tree: &'a SyntaxTree) -> Result<()> {
        self.namespace_members(&tree.members)
    }

    pub(super) fn visit_namespace(&mut self, ns: &'a NamespaceDeclaration) -> Result<()> {
        let style = self.policy.braces.namespace;
        self.keyword("namespace");
        self.visit_child(&ns.name)?;
        self.open_brace(style);
        self.namespace_members(&ns.members)?;
        self.close_brace(style);
        if ns.trailing_semicolon {
            self.token(TokenRole::Semicolon, ";");
        }
        self.new_line();
        Ok(())
    }

    /// Members in order, with blank lines after a run of using directives
    fn namespace_members(&mut self, members: &'a [NamespaceMember]) -> Result<()> {
        for (i, member) in members.iter().enumerate() {
            self.visit_child(member)?;
            let ends_usings =
                is_using(member) && members.get(i + 1).is_some_and(|next| !is_using(next));
            if ends_usings {
                self.new_lines(self.policy.blank_lines.after_usings);
            }
        }
        Ok(())
    }

    pub(super) fn visit_using(&mut self, using: &'a UsingDeclaration) -> Result<()> {
        self.keyword("using");
        self.visit_child(&using.import)?;
        self.semicolon();
        Ok(())
    }

    pub(super) fn visit_using_alias(&mut self, alias: &'a UsingAliasDeclaration) -> Result<()> {
        let around = self.policy.spacing.around_equality_operator;
        self.keyword("using");
        self.identifier(&alias.alias, TokenClass::Text)?;
        self.space_if(around);
        self.token(TokenRole::Operator, "=");
        self.space_if(around);
        self.visit_child(&alias.import)?;
        self.semicolon();
        Ok(())
    }

    pub(super) fn visit_extern_alias(&mut self, alias: &'a ExternAliasDeclaration) -> Result<()> {
        self.keyword("extern");
        self.space();
        self.keyword("alias");
        self.space();
        self.identifier(&alias.name, TokenClass::Namespace)?;
        self.semicolon();
        Ok(())
    }

    pub(super) fn visit_type_declaration(&mut self, ty: &'a TypeDeclaration) -> Result<()> {
        let braces = &self.policy.braces;
        let (keyword, style) = match ty.class_type {
            ClassType::Class => ("class", braces.class),
            ClassType::Struct => ("struct", braces.r#struct),
            ClassType::Interface => ("interface", braces.interface),
            ClassType::Enum => ("enum", braces.r#enum),
        };
        self.all(&ty.attributes)?;
        self.modifiers(&ty.modifiers);
        self.keyword(keyword);
        self.identifier(&ty.name, TokenClass::Type)?;
        self.chevron_list(&ty.type_parameters)?;
        if !ty.base_types.is_empty() {
            self.space();
            self.token(TokenRole::Colon, ":");
            self.space();
            self.comma_separated(&ty.base_types)?;
        }
        self.all(&ty.constraints)?;
        self.open_brace(style);
        if ty.class_type == ClassType::Enum {
            self.enum_body(&ty.members, ty.trailing_comma)?;
        } else {
            self.type_body(&ty.members)?;
        }
        self.close_brace(style);
        if ty.trailing_semicolon {
            self.token(TokenRole::Semicolon, ";");
        }
        self.new_line();
        Ok(())
    }

    /// One member per line, commas only between members
    fn enum_body(&mut self, members: &'a [TypeMember], trailing_comma: bool) -> Result<()> {
        for (i, member) in members.iter().enumerate() {
            match member {
                TypeMember::EnumMember(_) => {
                    self.visit_child(member)?;
                    let more = members[i + 1..]
                        .iter()
                        .any(|next| matches!(next, TypeMember::EnumMember(_)));
                    if more || trailing_comma {
                        self.comma(true);
                    }
                    self.new_line();
                }
                TypeMember::Comment(_) | TypeMember::Directive(_) => self.visit_child(member)?,
                _ => return Err(self.malformed("enum bodies may only contain enum members")),
            }
        }
        Ok(())
    }

    fn type_body(&mut self, members: &'a [TypeMember]) -> Result<()> {
        let mut previous: Option<&TypeMember> = None;
        for member in members {
            if matches!(member, TypeMember::EnumMember(_)) {
                return Err(self.malformed("enum member outside of an enum"));
            }
            if previous.is_some_and(|previous| !is_trivia(previous)) {
                self.new_lines(self.policy.blank_lines.between_members);
            }
            self.visit_child(member)?;
            previous = Some(member);
        }
        Ok(())
    }

    pub(super) fn visit_delegate(&mut self, delegate: &'a DelegateDeclaration) -> Result<()> {
        let spacing = self.spacing();
        self.all(&delegate.attributes)?;
        self.modifiers(&delegate.modifiers);
        self.keyword("delegate");
        self.visit_child(&delegate.return_type)?;
        self.space();
        self.identifier(&delegate.name, TokenClass::Type)?;
        self.chevron_list(&delegate.type_parameters)?;
        self.space_if(spacing.before_delegate_declaration_parentheses);
        self.parenthesized_list(
            &delegate.parameters,
            spacing.within_method_declaration_parentheses,
        )?;
        self.all(&delegate.constraints)?;
        self.semicolon();
        Ok(())
    }

    pub(super) fn visit_attribute_section(&mut self, section: &'a AttributeSection) -> Result<()> {
        self.token(TokenRole::OpenBracket, "[");
        if let Some(target) = section.target.as_deref().filter(|t| !t.is_empty()) {
            self.keyword(target);
            self.token(TokenRole::Colon, ":");
            self.space();
        }
        self.comma_separated(&section.attributes)?;
        self.token(TokenRole::CloseBracket, "]");
        match self.parent() {
            Some(NodeRef::Parameter(_) | NodeRef::TypeParameter(_)) => self.space(),
            _ => self.new_line(),
        }
        Ok(())
    }

    pub(super) fn visit_attribute(&mut self, attribute: &'a Attribute) -> Result<()> {
        let spacing = self.spacing();
        self.visit_child(&attribute.attribute_type)?;
        if !attribute.arguments.is_empty() || attribute.explicit_parentheses {
            self.space_if(spacing.before_method_call_parentheses);
            self.parenthesized_list(
                &attribute.arguments,
                spacing.within_method_call_parentheses,
            )?;
        }
        Ok(())
    }

    pub(super) fn visit_field(&mut self, field: &'a FieldDeclaration) -> Result<()> {
        if field.variables.is_empty() {
            return Err(self.malformed("field declares no variables"));
        }
        self.all(&field.attributes)?;
        self.modifiers(&field.modifiers);
        self.visit_child(&field.return_type)?;
        self.space();
        self.comma_separated(&field.variables)?;
        self.semicolon();
        Ok(())
    }

    pub(super) fn visit_fixed_field(&mut self, field: &'a FixedFieldDeclaration) -> Result<()> {
        if field.variables.is_empty() {
            return Err(self.malformed("fixed field declares no variables"));
        }
        self.all(&field.attributes)?;
        self.modifiers(&field.modifiers);
        self.keyword("fixed");
        self.space();
        self.visit_child(&field.return_type)?;
        self.space();
        self.comma_separated(&field.variables)?;
        self.semicolon();
        Ok(())
    }

    pub(super) fn visit_fixed_variable(&mut self, var: &'a FixedVariableInitializer) -> Result<()> {
        let within = self.policy.spacing.within_brackets;
        self.identifier(&var.name, TokenClass::Field)?;
        if let Some(count) = &var.count_expression {
            self.token(TokenRole::OpenBracket, "[");
            self.space_if(within);
            self.visit_child(count)?;
            self.space_if(within);
            self.token(TokenRole::CloseBracket, "]");
        }
        Ok(())
    }

    /// `IFoo.` in explicit interface implementations
    fn private_implementation_type(&mut self, ty: &'a Option<AstType>) -> Result<()> {
        if let Some(ty) = ty {
            self.visit_child(ty)?;
            self.token(TokenRole::Dot, ".");
        }
        Ok(())
    }

    fn method_body(&mut self, body: &'a Option<BlockStatement>) -> Result<()> {
        match body {
            Some(body) => self.visit_child(body),
            None => {
                self.semicolon();
                Ok(())
            }
        }
    }

    pub(super) fn visit_method(&mut self, method: &'a MethodDeclaration) -> Result<()> {
        let spacing = self.spacing();
        self.all(&method.attributes)?;
        self.modifiers(&method.modifiers);
        self.visit_child(&method.return_type)?;
        self.space();
        self.private_implementation_type(&method.private_implementation_type)?;
        self.identifier(&method.name, TokenClass::Method)?;
        self.chevron_list(&method.type_parameters)?;
        self.space_if(spacing.before_method_declaration_parentheses);
        self.parenthesized_list(
            &method.parameters,
            spacing.within_method_declaration_parentheses,
        )?;
        self.all(&method.constraints)?;
        self.method_body(&method.body)
    }

    /// Constructors and destructors take the name of the type they sit in
    fn enclosing_type_name(&self, own: &'a Identifier) -> &'a Identifier {
        match self.parent() {
            Some(NodeRef::TypeDeclaration(ty)) => &ty.name,
            _ => own,
        }
    }

    pub(super) fn visit_constructor(&mut self, ctor: &'a ConstructorDeclaration) -> Result<()> {
        let spacing = self.spacing();
        self.all(&ctor.attributes)?;
        self.modifiers(&ctor.modifiers);
        let name = self.enclosing_type_name(&ctor.name);
        self.identifier(name, TokenClass::Type)?;
        self.space_if(spacing.before_constructor_declaration_parentheses);
        self.parenthesized_list(
            &ctor.parameters,
            spacing.within_method_declaration_parentheses,
        )?;
        if let Some(initializer) = &ctor.initializer {
            self.space();
            self.visit_child(initializer)?;
        }
        self.method_body(&ctor.body)
    }

    pub(super) fn visit_constructor_initializer(
        &mut self,
        init: &'a ConstructorInitializer,
    ) -> Result<()> {
        let spacing = self.spacing();
        self.token(TokenRole::Colon, ":");
        self.space();
        self.keyword(match init.initializer_type {
            ConstructorInitializerType::Base => "base",
            ConstructorInitializerType::This => "this",
        });
        self.space_if(spacing.before_method_call_parentheses);
        self.parenthesized_list(&init.arguments, spacing.within_method_call_parentheses)
    }

    pub(super) fn visit_destructor(&mut self, dtor: &'a DestructorDeclaration) -> Result<()> {
        self.all(&dtor.attributes)?;
        self.modifiers(&dtor.modifiers);
        if !dtor.modifiers.is_empty() {
            self.space();
        }
        self.token(TokenRole::Operator, "~");
        let name = self.enclosing_type_name(&dtor.name);
        self.identifier(name, TokenClass::Type)?;
        self.space_if(self.policy.spacing.before_constructor_declaration_parentheses);
        self.token(TokenRole::OpenParen, "(");
        self.token(TokenRole::CloseParen, ")");
        self.method_body(&dtor.body)
    }

    pub(super) fn visit_property(&mut self, property: &'a PropertyDeclaration) -> Result<()> {
        let style = self.policy.braces.property;
        self.all(&property.attributes)?;
        self.modifiers(&property.modifiers);
        self.visit_child(&property.return_type)?;
        self.space();
        self.private_implementation_type(&property.private_implementation_type)?;
        self.identifier(&property.name, TokenClass::Property)?;
        self.open_brace(style);
        self.all(&property.accessors)?;
        self.close_brace(style);
        self.new_line();
        Ok(())
    }

    pub(super) fn visit_indexer(&mut self, indexer: &'a IndexerDeclaration) -> Result<()> {
        let spacing = self.spacing();
        let style = self.policy.braces.property;
        self.all(&indexer.attributes)?;
        self.modifiers(&indexer.modifiers);
        self.visit_child(&indexer.return_type)?;
        self.space();
        self.private_implementation_type(&indexer.private_implementation_type)?;
        self.keyword("this");
        self.space_if(spacing.before_method_declaration_parentheses);
        self.bracketed_list(
            &indexer.parameters,
            spacing.within_method_declaration_parentheses,
        )?;
        self.open_brace(style);
        self.all(&indexer.accessors)?;
        self.close_brace(style);
        self.new_line();
        Ok(())
    }

    pub(super) fn visit_accessor(&mut self, accessor: &'a Accessor) -> Result<()> {
        let allowed = match self.parent() {
            Some(NodeRef::Property(_) | NodeRef::Indexer(_)) => {
                matches!(accessor.kind, AccessorKind::Get | AccessorKind::Set)
            }
            Some(NodeRef::CustomEvent(_)) => {
                matches!(accessor.kind, AccessorKind::Add | AccessorKind::Remove)
            }
            _ => true,
        };
        if !allowed {
            return Err(self.malformed(format!(
                "`{}` accessor does not belong here",
                accessor.kind.keyword()
            )));
        }
        self.all(&accessor.attributes)?;
        self.modifiers(&accessor.modifiers);
        self.raw_identifier(accessor.kind.keyword(), TokenClass::Keyword);
        self.method_body(&accessor.body)
    }

    pub(super) fn visit_event(&mut self, event: &'a EventDeclaration) -> Result<()> {
        if event.variables.is_empty() {
            return Err(self.malformed("event declares no variables"));
        }
        self.all(&event.attributes)?;
        self.modifiers(&event.modifiers);
        self.keyword("event");
        self.visit_child(&event.return_type)?;
        self.space();
        self.comma_separated(&event.variables)?;
        self.semicolon();
        Ok(())
    }

    pub(super) fn visit_custom_event(&mut self, event: &'a CustomEventDeclaration) -> Result<()> {
        let style = self.policy.braces.event;
        self.all(&event.attributes)?;
        self.modifiers(&event.modifiers);
        self.keyword("event");
        self.visit_child(&event.return_type)?;
        self.space();
        self.private_implementation_type(&event.private_implementation_type)?;
        self.identifier(&event.name, TokenClass::Event)?;
        self.open_brace(style);
        self.all(&event.accessors)?;
        self.close_brace(style);
        self.new_line();
        Ok(())
    }

    pub(super) fn visit_operator(&mut self, op: &'a OperatorDeclaration) -> Result<()> {
        let spacing = self.spacing();
        self.all(&op.attributes)?;
        self.modifiers(&op.modifiers);
        match op.operator.token() {
            Some(token) => {
                self.visit_child(&op.return_type)?;
                self.keyword("operator");
                self.space();
                self.token(TokenRole::Operator, token);
            }
            None => {
                self.keyword(conversion_keyword(op.operator));
                self.keyword("operator");
                self.space();
                self.visit_child(&op.return_type)?;
            }
        }
        self.space_if(spacing.before_method_declaration_parentheses);
        self.parenthesized_list(&op.parameters, spacing.within_method_declaration_parentheses)?;
        self.method_body(&op.body)
    }

    pub(super) fn visit_enum_member(&mut self, member: &'a EnumMemberDeclaration) -> Result<()> {
        let around = self.policy.spacing.around_assignment;
        self.all(&member.attributes)?;
        self.modifiers(&member.modifiers);
        self.identifier(&member.name, TokenClass::EnumMember)?;
        if let Some(initializer) = &member.initializer {
            self.space_if(around);
            self.token(TokenRole::Operator, "=");
            self.space_if(around);
            self.visit_child(initializer)?;
        }
        Ok(())
    }

    pub(super) fn visit_parameter(&mut self, param: &'a ParameterDeclaration) -> Result<()> {
        let around = self.policy.spacing.around_assignment;
        self.all(&param.attributes)?;
        match param.modifier {
            ParameterModifier::None => {}
            ParameterModifier::Ref => self.keyword("ref"),
            ParameterModifier::Out => self.keyword("out"),
            ParameterModifier::Params => self.keyword("params"),
            ParameterModifier::This => self.keyword("this"),
        }
        if let Some(parameter_type) = &param.parameter_type {
            self.visit_child(parameter_type)?;
        }
        if let Some(name) = &param.name {
            if param.parameter_type.is_some() {
                self.space();
            }
            self.identifier(name, TokenClass::Parameter)?;
        }
        if let Some(default) = &param.default_expression {
            self.space_if(around);
            self.token(TokenRole::Operator, "=");
            self.space_if(around);
            self.visit_child(default)?;
        }
        Ok(())
    }

    pub(super) fn visit_type_parameter(&mut self, param: &'a TypeParameterDeclaration) -> Result<()> {
        self.all(&param.attributes)?;
        match param.variance {
            Variance::Invariant => {}
            Variance::Covariant => self.keyword("out"),
            Variance::Contravariant => self.keyword("in"),
        }
        self.identifier(&param.name, TokenClass::TypeParameter)
    }

    pub(super) fn visit_constraint(&mut self, constraint: &'a Constraint) -> Result<()> {
        self.space();
        self.keyword("where");
        self.identifier(&constraint.type_parameter, TokenClass::TypeParameter)?;
        self.space();
        self.token(TokenRole::Colon, ":");
        self.space();
        self.comma_separated(&constraint.base_types)
    }

    pub(super) fn visit_variable_initializer(&mut self, var: &'a VariableInitializer) -> Result<()> {
        let around = self.policy.spacing.around_assignment;
        let class = match self.parent() {
            Some(NodeRef::Field(_) | NodeRef::FixedField(_)) => TokenClass::Field,
            Some(NodeRef::Event(_)) => TokenClass::Event,
            _ => TokenClass::Local,
        };
        self.identifier(&var.name, class)?;
        if let Some(initializer) = &var.initializer {
            self.space_if(around);
            self.token(TokenRole::Operator, "=");
            self.space_if(around);
            self.visit_child(initializer)?;
        }
        Ok(())
    }

    pub(super) fn visit_documentation_reference(
        &mut self,
        reference: &'a DocumentationReference,
    ) -> Result<()> {
        let spacing = self.spacing();
        let kind = reference.symbol_kind;
        if let Some(declaring_type) = &reference.declaring_type {
            self.visit_child(declaring_type)?;
            if kind != SymbolKind::TypeDefinition {
                self.token(TokenRole::Dot, ".");
            }
        }
        match kind {
            SymbolKind::TypeDefinition => {
                if reference.declaring_type.is_none() {
                    return Err(self.malformed("type reference names no type"));
                }
            }
            SymbolKind::Indexer => self.keyword("this"),
            SymbolKind::Operator => {
                let Some(operator) = reference.operator else {
                    return Err(self.malformed("operator reference names no operator"));
                };
                match operator.token() {
                    Some(token) => {
                        self.keyword("operator");
                        self.space();
                        self.token(TokenRole::Operator, token);
                    }
                    None => {
                        let Some(return_type) = &reference.conversion_return_type else {
                            return Err(
                                self.malformed("conversion operator reference has no return type")
                            );
                        };
                        self.keyword(conversion_keyword(operator));
                        self.keyword("operator");
                        self.space();
                        self.visit_child(return_type)?;
                    }
                }
            }
            SymbolKind::Field
            | SymbolKind::Property
            | SymbolKind::Event
            | SymbolKind::Method
            | SymbolKind::Constructor
            | SymbolKind::Destructor => {
                let Some(name) = &reference.member_name else {
                    return Err(self.malformed("member reference has no member name"));
                };
                let class = match kind {
                    SymbolKind::Field => TokenClass::Field,
                    SymbolKind::Property => TokenClass::Property,
                    SymbolKind::Event => TokenClass::Event,
                    _ => TokenClass::Method,
                };
                self.identifier(name, class)?;
            }
        }
        self.chevron_list(&reference.type_arguments)?;
        if reference.has_parameter_list {
            let within = spacing.within_method_declaration_parentheses;
            self.space_if(spacing.before_method_declaration_parentheses);
            if kind == SymbolKind::Indexer {
                self.bracketed_list(&reference.parameters, within)?;
            } else {
                self.parenthesized_list(&reference.parameters, within)?;
            }
        }
        Ok(())
    }
}

fn conversion_keyword(operator: OperatorKind) -> &'static str {
    if operator == OperatorKind::Explicit {
        "explicit"
    } else {
        "implicit"
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::error::SharpoutError;
    use crate::policy::FormattingPolicy;
    use crate::printer::{print, print_node};

    fn render<'a>(node: impl Into<NodeRef<'a>>, policy: &FormattingPolicy) -> String {
        print_node(node.into(), policy).unwrap()
    }

    fn class_with(members: Vec<TypeMember>) -> TypeDeclaration {
        let mut ty = TypeDeclaration::new(ClassType::Class, "Foo");
        ty.members = members;
        ty
    }

    #[test]
    fn test_class_members_separated_by_blank_line() {
        let mut ty = class_with(vec![
            TypeMember::Field(FieldDeclaration {
                attributes: vec![],
                modifiers: vec![Modifier::Private],
                return_type: AstType::primitive("int"),
                variables: vec![VariableInitializer::new("x", None)],
            }),
            TypeMember::Method({
                let mut method = MethodDeclaration::new(AstType::primitive("void"), "Run");
                method.modifiers = vec![Modifier::Public];
                method
            }),
        ]);
        ty.modifiers = vec![Modifier::Public];
        assert_eq!(
            render(&ty, &FormattingPolicy::allman()),
            "public class Foo\n{\n\tprivate int x;\n\n\tpublic void Run()\n\t{\n\t}\n}\n"
        );

        let mut policy = FormattingPolicy::kr();
        policy.blank_lines.between_members = 0;
        assert_eq!(
            render(&ty, &policy),
            "public class Foo {\n\tprivate int x;\n\tpublic void Run() {\n\t}\n}\n"
        );
    }

    #[test]
    fn test_enum_commas_between_members_only() {
        let member = |name: &str, value: Option<i32>| {
            TypeMember::EnumMember(EnumMemberDeclaration {
                attributes: vec![],
                modifiers: vec![],
                name: name.into(),
                initializer: value.map(Expression::int),
            })
        };
        let mut ty = TypeDeclaration::new(ClassType::Enum, "Color");
        ty.members = vec![member("Red", None), member("Green", Some(2))];
        assert_eq!(
            render(&ty, &FormattingPolicy::allman()),
            "enum Color\n{\n\tRed,\n\tGreen = 2\n}\n"
        );

        ty.members.insert(1, TypeMember::Comment(Comment::single_line(" warm")));
        ty.trailing_comma = true;
        assert_eq!(
            render(&ty, &FormattingPolicy::allman()),
            "enum Color\n{\n\tRed,\n\t// warm\n\tGreen = 2,\n}\n"
        );
    }

    #[test]
    fn test_enum_member_outside_enum_is_malformed() {
        let ty = class_with(vec![TypeMember::EnumMember(EnumMemberDeclaration {
            attributes: vec![],
            modifiers: vec![],
            name: "Red".into(),
            initializer: None,
        })]);
        let err = print_node(NodeRef::from(&ty), &FormattingPolicy::default()).unwrap_err();
        assert!(matches!(err, SharpoutError::MalformedTree { .. }));
    }

    #[test]
    fn test_auto_property() {
        let property = PropertyDeclaration {
            attributes: vec![],
            modifiers: vec![Modifier::Public],
            return_type: AstType::primitive("int"),
            private_implementation_type: None,
            name: "Count".into(),
            accessors: vec![
                Accessor::auto(AccessorKind::Get),
                Accessor {
                    modifiers: vec![Modifier::Private],
                    ..Accessor::auto(AccessorKind::Set)
                },
            ],
        };
        assert_eq!(
            render(&property, &FormattingPolicy::kr()),
            "public int Count {\n\tget;\n\tprivate set;\n}\n"
        );
    }

    #[test]
    fn test_property_rejects_event_accessor() {
        let property = PropertyDeclaration {
            attributes: vec![],
            modifiers: vec![],
            return_type: AstType::primitive("int"),
            private_implementation_type: None,
            name: "Count".into(),
            accessors: vec![Accessor::auto(AccessorKind::Add)],
        };
        let err = print_node(NodeRef::from(&property), &FormattingPolicy::default()).unwrap_err();
        assert!(err.to_string().contains("Property > Accessor"));
    }

    #[test]
    fn test_constructor_takes_enclosing_type_name() {
        let ty = class_with(vec![TypeMember::Constructor(ConstructorDeclaration {
            attributes: vec![],
            modifiers: vec![Modifier::Public],
            name: "Stale".into(),
            parameters: vec![ParameterDeclaration::new(AstType::primitive("int"), "x")],
            initializer: Some(ConstructorInitializer {
                initializer_type: ConstructorInitializerType::Base,
                arguments: vec![Expression::identifier("x")],
            }),
            body: Some(BlockStatement::default()),
        })]);
        assert_eq!(
            render(&ty, &FormattingPolicy::kr()),
            "class Foo {\n\tpublic Foo(int x) : base(x) {\n\t}\n}\n"
        );
    }

    #[test]
    fn test_operator_declarations() {
        let money = || AstType::simple("Money");
        let addition = OperatorDeclaration {
            attributes: vec![],
            modifiers: vec![Modifier::Public, Modifier::Static],
            operator: OperatorKind::Addition,
            return_type: money(),
            parameters: vec![
                ParameterDeclaration::new(money(), "a"),
                ParameterDeclaration::new(money(), "b"),
            ],
            body: None,
        };
        assert_eq!(
            render(&addition, &FormattingPolicy::default()),
            "public static Money operator +(Money a, Money b);\n"
        );

        let conversion = OperatorDeclaration {
            operator: OperatorKind::Implicit,
            return_type: AstType::primitive("decimal"),
            parameters: vec![ParameterDeclaration::new(money(), "m")],
            ..addition
        };
        assert_eq!(
            render(&conversion, &FormattingPolicy::default()),
            "public static implicit operator decimal(Money m);\n"
        );
    }

    #[test]
    fn test_generic_delegate() {
        let delegate = DelegateDeclaration {
            attributes: vec![],
            modifiers: vec![Modifier::Public],
            return_type: AstType::primitive("void"),
            name: "Handler".into(),
            type_parameters: vec![TypeParameterDeclaration {
                attributes: vec![],
                variance: Variance::Contravariant,
                name: "T".into(),
            }],
            parameters: vec![ParameterDeclaration::new(AstType::simple("T"), "item")],
            constraints: vec![],
        };
        assert_eq!(
            render(&delegate, &FormattingPolicy::default()),
            "public delegate void Handler<in T>(T item);\n"
        );
    }

    #[test]
    fn test_attribute_sections_on_methods_and_parameters() {
        let attribute = |name: &str| AttributeSection {
            target: None,
            attributes: vec![Attribute {
                attribute_type: AstType::simple(name),
                arguments: vec![],
                explicit_parentheses: false,
            }],
        };
        let mut param = ParameterDeclaration::new(AstType::primitive("int"), "a");
        param.attributes.push(attribute("In"));
        let mut method = MethodDeclaration::new(AstType::primitive("void"), "M");
        method.attributes.push(attribute("Obsolete"));
        method.parameters.push(param);
        assert_eq!(
            render(&method, &FormattingPolicy::allman()),
            "[Obsolete]\nvoid M([In] int a)\n{\n}\n"
        );
    }

    #[test]
    fn test_blank_line_after_usings() {
        let tree = SyntaxTree {
            members: vec![
                NamespaceMember::Using(UsingDeclaration {
                    import: AstType::simple("System"),
                }),
                NamespaceMember::Namespace(NamespaceDeclaration {
                    name: AstType::simple("Demo"),
                    members: vec![NamespaceMember::Type(TypeDeclaration::new(
                        ClassType::Class,
                        "C",
                    ))],
                    trailing_semicolon: false,
                }),
            ],
        };
        assert_eq!(
            print(&tree, &FormattingPolicy::kr()).unwrap(),
            "using System;\n\nnamespace Demo {\n\tclass C {\n\t}\n}\n"
        );
    }

    fn doc_reference(kind: SymbolKind) -> DocumentationReference {
        DocumentationReference {
            symbol_kind: kind,
            declaring_type: None,
            member_name: None,
            operator: None,
            conversion_return_type: None,
            type_arguments: vec![],
            has_parameter_list: false,
            parameters: vec![],
        }
    }

    fn unnamed(ty: AstType) -> ParameterDeclaration {
        ParameterDeclaration {
            name: None,
            ..ParameterDeclaration::new(ty, "unused")
        }
    }

    #[test]
    fn test_documentation_references() {
        let policy = FormattingPolicy::default();

        let method = DocumentationReference {
            declaring_type: Some(AstType::generic("List", vec![AstType::simple("T")])),
            member_name: Some("Add".into()),
            has_parameter_list: true,
            parameters: vec![unnamed(AstType::simple("T"))],
            ..doc_reference(SymbolKind::Method)
        };
        assert_eq!(render(&method, &policy), "List<T>.Add(T)");

        let indexer = DocumentationReference {
            declaring_type: Some(AstType::simple("Grid")),
            has_parameter_list: true,
            parameters: vec![
                unnamed(AstType::primitive("int")),
                unnamed(AstType::primitive("int")),
            ],
            ..doc_reference(SymbolKind::Indexer)
        };
        assert_eq!(render(&indexer, &policy), "Grid.this[int, int]");

        let conversion = DocumentationReference {
            declaring_type: Some(AstType::simple("Money")),
            operator: Some(OperatorKind::Implicit),
            conversion_return_type: Some(AstType::primitive("decimal")),
            has_parameter_list: true,
            parameters: vec![unnamed(AstType::simple("Money"))],
            ..doc_reference(SymbolKind::Operator)
        };
        assert_eq!(
            render(&conversion, &policy),
            "Money.implicit operator decimal(Money)"
        );
    }

    #[test]
    fn test_member_reference_without_name_is_malformed() {
        let reference = doc_reference(SymbolKind::Method);
        let err = print_node(NodeRef::from(&reference), &FormattingPolicy::default()).unwrap_err();
        assert!(matches!(err, SharpoutError::MalformedTree { .. }));
    }
}
