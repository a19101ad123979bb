//! Layout properties that hold for every policy: brace styles, list spacing,
//! comma propagation and switch indentation.

use sharpout_core::ast::*;
use sharpout_core::{BraceStyle, FormattingPolicy, print, print_node};

fn render<'a>(node: impl Into<NodeRef<'a>>, policy: &FormattingPolicy) -> String {
    print_node(node.into(), policy).unwrap()
}

fn with_class_braces(style: BraceStyle) -> FormattingPolicy {
    let mut policy = FormattingPolicy::default();
    policy.braces.class = style;
    policy
}

#[test]
fn test_class_brace_styles() {
    let class = TypeDeclaration::new(ClassType::Class, "C");
    let cases = [
        (BraceStyle::DoNotChange, "class C {\n}\n"),
        (BraceStyle::SameLine, "class C {\n}\n"),
        (BraceStyle::SameLineNoSpace, "class C{\n}\n"),
        (BraceStyle::NextLine, "class C\n{\n}\n"),
        (BraceStyle::NextLineIndented, "class C\n\t{\n\t}\n"),
        (BraceStyle::NextLineIndented2, "class C\n\t{\n\t}\n"),
        (BraceStyle::BannerStyle, "class C {\n\t}\n"),
    ];
    for (style, expected) in cases {
        assert_eq!(
            render(&class, &with_class_braces(style)),
            expected,
            "{:?}",
            style
        );
    }
}

#[test]
fn test_brace_styles_place_the_body() {
    let mut class = TypeDeclaration::new(ClassType::Class, "C");
    class.members = vec![TypeMember::Field(FieldDeclaration {
        attributes: vec![],
        modifiers: vec![],
        return_type: AstType::primitive("int"),
        variables: vec![VariableInitializer::new("x", None)],
    })];

    assert_eq!(
        render(&class, &with_class_braces(BraceStyle::NextLineIndented)),
        "class C\n\t{\n\tint x;\n\t}\n"
    );
    assert_eq!(
        render(&class, &with_class_braces(BraceStyle::NextLineIndented2)),
        "class C\n\t{\n\t\tint x;\n\t}\n"
    );
    assert_eq!(
        render(&class, &with_class_braces(BraceStyle::BannerStyle)),
        "class C {\n\tint x;\n\t}\n"
    );
}

#[test]
fn test_empty_method_body_on_next_line() {
    let method = MethodDeclaration::new(AstType::primitive("void"), "M");
    assert_eq!(
        render(&method, &FormattingPolicy::allman()),
        "void M()\n{\n}\n"
    );
}

#[test]
fn test_statement_braces_follow_their_own_setting() {
    let stmt = Statement::IfElse(IfElseStatement {
        condition: Expression::identifier("ready"),
        true_statement: Box::new(Statement::block(vec![Statement::returns(None)])),
        false_statement: None,
    });

    let mut policy = FormattingPolicy::allman();
    policy.braces.statement = BraceStyle::SameLine;
    assert_eq!(render(&stmt, &policy), "if (ready) {\n\treturn;\n}\n");

    policy.braces.statement = BraceStyle::NextLine;
    assert_eq!(render(&stmt, &policy), "if (ready)\n{\n\treturn;\n}\n");
}

#[test]
fn test_call_parentheses_spacing() {
    let mut policy = FormattingPolicy::default();
    policy.spacing.within_method_call_parentheses = true;

    let empty = Expression::invoke(Expression::identifier("Run"), vec![]);
    assert_eq!(render(&empty, &policy), "Run()");

    let one = Expression::invoke(Expression::identifier("Run"), vec![Expression::int(1)]);
    assert_eq!(render(&one, &policy), "Run( 1 )");

    let two = Expression::invoke(
        Expression::identifier("Run"),
        vec![Expression::identifier("a"), Expression::string("b")],
    );
    assert_eq!(render(&two, &policy), "Run( a, \"b\" )");
}

#[test]
fn test_declaration_parentheses_spacing() {
    let mut method = MethodDeclaration::new(AstType::primitive("void"), "M");
    method.body = None;
    method.parameters = vec![
        ParameterDeclaration::new(AstType::primitive("int"), "a"),
        ParameterDeclaration::new(AstType::primitive("string"), "b"),
    ];

    let mut policy = FormattingPolicy::default();
    policy.spacing.within_method_declaration_parentheses = true;
    assert_eq!(render(&method, &policy), "void M( int a, string b );\n");

    method.parameters.clear();
    assert_eq!(render(&method, &policy), "void M();\n");
}

fn color_enum(trailing_comma: bool) -> TypeDeclaration {
    let mut color = TypeDeclaration::new(ClassType::Enum, "Color");
    color.members = ["Red", "Green"]
        .into_iter()
        .map(|name| {
            TypeMember::EnumMember(EnumMemberDeclaration {
                attributes: vec![],
                modifiers: vec![],
                name: name.into(),
                initializer: None,
            })
        })
        .collect();
    color.trailing_comma = trailing_comma;
    color
}

#[test]
fn test_enum_trailing_comma_is_propagated() {
    let policy = FormattingPolicy::allman();
    assert_eq!(
        render(&color_enum(true), &policy),
        "enum Color\n{\n\tRed,\n\tGreen,\n}\n"
    );
    assert_eq!(
        render(&color_enum(false), &policy),
        "enum Color\n{\n\tRed,\n\tGreen\n}\n"
    );
}

#[test]
fn test_binary_expression_with_default_policy() {
    let sum = Expression::binary(
        Expression::identifier("a"),
        BinaryOperator::Add,
        Expression::identifier("b"),
    );
    assert_eq!(render(&sum, &FormattingPolicy::default()), "a + b");

    let mut tight = FormattingPolicy::default();
    tight.spacing.around_additive_operator = false;
    assert_eq!(render(&sum, &tight), "a+b");
}

#[test]
fn test_case_body_at_label_level() {
    let stmt = Statement::Switch(SwitchStatement {
        expression: Expression::identifier("x"),
        sections: vec![SwitchSection {
            case_labels: vec![CaseLabel {
                expression: Some(Expression::int(1)),
            }],
            statements: vec![Statement::Break],
        }],
    });

    let mut policy = FormattingPolicy::allman();
    policy.indentation.indent_case_body = false;
    assert_eq!(
        render(&stmt, &policy),
        "switch (x)\n{\n\tcase 1:\n\tbreak;\n}\n"
    );
}

#[test]
fn test_spaces_indentation_and_crlf() {
    let mut class = TypeDeclaration::new(ClassType::Class, "C");
    class.members = vec![TypeMember::Method(MethodDeclaration::new(
        AstType::primitive("void"),
        "M",
    ))];
    let tree = SyntaxTree {
        members: vec![NamespaceMember::Type(class)],
    };

    let mut policy = FormattingPolicy::kr();
    policy.indentation.style = sharpout_core::IndentStyle::Spaces;
    policy.indentation.size = 2;
    policy.new_line = sharpout_core::NewLine::CrLf;
    assert_eq!(
        print(&tree, &policy).unwrap(),
        "class C {\r\n  void M() {\r\n  }\r\n}\r\n"
    );
}

#[test]
fn test_errors_name_the_offending_node() {
    let mut class = TypeDeclaration::new(ClassType::Class, "C");
    class.members = vec![TypeMember::Field(FieldDeclaration {
        attributes: vec![],
        modifiers: vec![],
        return_type: AstType::primitive("int"),
        variables: vec![],
    })];
    let tree = SyntaxTree {
        members: vec![NamespaceMember::Type(class)],
    };

    let err = print(&tree, &FormattingPolicy::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Malformed Field at SyntaxTree > TypeDeclaration > Field: field declares no variables"
    );
    assert!(!err.is_recoverable());
}
