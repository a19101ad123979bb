//! Printing throughput on a synthetic tree

use criterion::{Criterion, criterion_group, criterion_main};
use sharpout_core::ast::*;
use sharpout_core::{FormattingPolicy, print, print_with_map};
use std::hint::black_box;

/// A namespace of `types` classes with `methods` small methods each
fn synthetic_tree(types: usize, methods: usize) -> SyntaxTree {
    let members = (0..types)
        .map(|t| {
            let mut class = TypeDeclaration::new(ClassType::Class, format!("Type{}", t).as_str());
            class.modifiers = vec![Modifier::Public];
            class.members = (0..methods)
                .map(|m| {
                    let mut method = MethodDeclaration::new(
                        AstType::primitive("int"),
                        format!("Method{}", m).as_str(),
                    );
                    method.parameters =
                        vec![ParameterDeclaration::new(AstType::primitive("int"), "x")];
                    method.body = Some(BlockStatement::new(vec![
                        Statement::declare(
                            AstType::simple("var"),
                            "y",
                            Some(Expression::binary(
                                Expression::identifier("x"),
                                BinaryOperator::Multiply,
                                Expression::int(m as i32),
                            )),
                        ),
                        Statement::returns(Some(Expression::invoke(
                            Expression::member(Expression::identifier("Math"), "Abs"),
                            vec![Expression::identifier("y")],
                        ))),
                    ]));
                    TypeMember::Method(method)
                })
                .collect();
            NamespaceMember::Type(class)
        })
        .collect();

    SyntaxTree {
        members: vec![NamespaceMember::Namespace(NamespaceDeclaration {
            name: AstType::qualified("Bench.Synthetic"),
            members,
            trailing_semicolon: false,
        })],
    }
}

fn bench_print(c: &mut Criterion) {
    let tree = synthetic_tree(20, 25);
    let policy = FormattingPolicy::allman();

    c.bench_function("print_allman", |b| {
        b.iter(|| print(black_box(&tree), black_box(&policy)))
    });
}

fn bench_print_with_map(c: &mut Criterion) {
    let tree = synthetic_tree(20, 25);
    let policy = FormattingPolicy::kr();

    c.bench_function("print_with_map_kr", |b| {
        b.iter(|| print_with_map(black_box(&tree), black_box(&policy)))
    });
}

criterion_group!(benches, bench_print, bench_print_with_map);
criterion_main!(benches);
