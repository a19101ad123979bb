//! Whole-declaration layouts under each preset

use sharpout_core::ast::*;
use sharpout_core::{FormattingPolicy, Preset, print};

fn greeter() -> SyntaxTree {
    let name = || Expression::identifier("name");

    let mut ctor = ConstructorDeclaration {
        attributes: vec![],
        modifiers: vec![Modifier::Public],
        name: "Greeter".into(),
        parameters: vec![ParameterDeclaration::new(AstType::primitive("string"), "name")],
        initializer: None,
        body: None,
    };
    ctor.body = Some(BlockStatement::new(vec![Statement::expression(
        Expression::assign(Expression::member(Expression::ThisReference, "name"), name()),
    )]));

    let count = PropertyDeclaration {
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

    let mut greet = MethodDeclaration::new(AstType::primitive("string"), "Greet");
    greet.modifiers = vec![Modifier::Public];
    greet.parameters = vec![ParameterDeclaration::new(AstType::primitive("bool"), "loud")];
    greet.body = Some(BlockStatement::new(vec![Statement::IfElse(IfElseStatement {
        condition: Expression::identifier("loud"),
        true_statement: Box::new(Statement::block(vec![Statement::returns(Some(
            Expression::invoke(Expression::member(name(), "ToUpper"), vec![]),
        ))])),
        false_statement: Some(Box::new(Statement::block(vec![Statement::returns(Some(
            name(),
        ))]))),
    })]));

    let mut class = TypeDeclaration::new(ClassType::Class, "Greeter");
    class.modifiers = vec![Modifier::Public];
    class.members = vec![
        TypeMember::Field(FieldDeclaration {
            attributes: vec![],
            modifiers: vec![Modifier::Private],
            return_type: AstType::primitive("string"),
            variables: vec![VariableInitializer::new("name", None)],
        }),
        TypeMember::Constructor(ctor),
        TypeMember::Property(count),
        TypeMember::Method(greet),
    ];

    SyntaxTree {
        members: vec![NamespaceMember::Type(class)],
    }
}

fn print_preset(preset: Preset) -> String {
    print(&greeter(), &FormattingPolicy::preset(preset)).unwrap()
}

#[test]
fn test_greeter_allman() {
    insta::assert_snapshot!("greeter_allman", print_preset(Preset::Allman));
}

#[test]
fn test_greeter_kr() {
    insta::assert_snapshot!("greeter_kr", print_preset(Preset::Kr));
}

#[test]
fn test_greeter_mono() {
    insta::assert_snapshot!("greeter_mono", print_preset(Preset::Mono));
}
