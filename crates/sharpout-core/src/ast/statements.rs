//! Statements

use super::{
    AstType, Comment, Expression, Identifier, Modifier, Pattern, PreprocessorDirective,
    VariableInitializer,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Statement {
    Block(BlockStatement),
    Break,
    Checked(CheckedStatement),
    Continue,
    DoWhile(DoWhileStatement),
    Empty,
    Expression(ExpressionStatement),
    Fixed(FixedStatement),
    Foreach(ForeachStatement),
    For(ForStatement),
    Goto(GotoStatement),
    GotoCase(GotoCaseStatement),
    GotoDefault,
    IfElse(IfElseStatement),
    Label(LabelStatement),
    Lock(LockStatement),
    Return(ReturnStatement),
    Switch(SwitchStatement),
    Throw(ThrowStatement),
    TryCatch(TryCatchStatement),
    Unchecked(UncheckedStatement),
    Unsafe(UnsafeStatement),
    Using(UsingStatement),
    VariableDeclaration(VariableDeclarationStatement),
    While(WhileStatement),
    YieldBreak,
    YieldReturn(YieldReturnStatement),
    Comment(Comment),
    Directive(PreprocessorDirective),
    Pattern(Box<Pattern>),
}

impl Statement {
    pub fn expression(expression: Expression) -> Self {
        Statement::Expression(ExpressionStatement { expression })
    }

    pub fn block(statements: Vec<Statement>) -> Self {
        Statement::Block(BlockStatement { statements })
    }

    pub fn returns(expression: Option<Expression>) -> Self {
        Statement::Return(ReturnStatement { expression })
    }

    /// `T a = init;`
    pub fn declare(
        variable_type: AstType,
        name: impl Into<Identifier>,
        initializer: Option<Expression>,
    ) -> Self {
        Statement::VariableDeclaration(VariableDeclarationStatement {
            modifiers: Vec::new(),
            variable_type,
            variables: vec![VariableInitializer {
                name: name.into(),
                initializer,
            }],
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockStatement {
    #[serde(default)]
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckedStatement {
    pub body: BlockStatement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UncheckedStatement {
    pub body: BlockStatement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnsafeStatement {
    pub body: BlockStatement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoWhileStatement {
    pub embedded_statement: Box<Statement>,
    pub condition: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionStatement {
    pub expression: Expression,
}

/// `fixed (T* p = &x, q = &y) ...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedStatement {
    pub variable_type: AstType,
    pub variables: Vec<VariableInitializer>,
    pub embedded_statement: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeachStatement {
    pub variable_type: AstType,
    pub variable_name: Identifier,
    pub in_expression: Expression,
    pub embedded_statement: Box<Statement>,
}

/// Initializers and iterators are expression or variable declaration
/// statements; they print without their terminating semicolon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForStatement {
    #[serde(default)]
    pub initializers: Vec<Statement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Expression>,
    #[serde(default)]
    pub iterators: Vec<Statement>,
    pub embedded_statement: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GotoStatement {
    pub label: Identifier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GotoCaseStatement {
    pub label_expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfElseStatement {
    pub condition: Expression,
    pub true_statement: Box<Statement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub false_statement: Option<Box<Statement>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelStatement {
    pub label: Identifier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LockStatement {
    pub expression: Expression,
    pub embedded_statement: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStatement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchStatement {
    pub expression: Expression,
    #[serde(default)]
    pub sections: Vec<SwitchSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchSection {
    pub case_labels: Vec<CaseLabel>,
    #[serde(default)]
    pub statements: Vec<Statement>,
}

/// `case expr:`, or `default:` when there is no expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseLabel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThrowStatement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TryCatchStatement {
    pub try_block: BlockStatement,
    #[serde(default)]
    pub catch_clauses: Vec<CatchClause>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finally_block: Option<BlockStatement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchClause {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catch_type: Option<AstType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<Identifier>,
    /// `when (...)` filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Expression>,
    pub body: BlockStatement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UsingResource {
    Declaration(VariableDeclarationStatement),
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsingStatement {
    pub resource: UsingResource,
    pub embedded_statement: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclarationStatement {
    /// Only `const` is meaningful for locals
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    pub variable_type: AstType,
    pub variables: Vec<VariableInitializer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileStatement {
    pub condition: Expression,
    pub embedded_statement: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldReturnStatement {
    pub expression: Expression,
}
