//! Expressions and query clauses

use super::{AstType, BlockStatement, Identifier, ParameterDeclaration, Pattern};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Expression {
    AnonymousMethod(AnonymousMethodExpression),
    Undocumented(UndocumentedExpression),
    ArrayCreate(ArrayCreateExpression),
    ArrayInitializer(ArrayInitializerExpression),
    As(AsExpression),
    Assignment(AssignmentExpression),
    BaseReference,
    Binary(BinaryOperatorExpression),
    Cast(CastExpression),
    Checked(CheckedExpression),
    Conditional(ConditionalExpression),
    DefaultValue(DefaultValueExpression),
    Direction(DirectionExpression),
    Identifier(IdentifierExpression),
    Indexer(IndexerExpression),
    Invocation(InvocationExpression),
    Is(IsExpression),
    Lambda(LambdaExpression),
    MemberReference(MemberReferenceExpression),
    NamedArgument(NamedArgumentExpression),
    Named(NamedExpression),
    NullReference,
    ObjectCreate(ObjectCreateExpression),
    AnonymousTypeCreate(AnonymousTypeCreateExpression),
    Parenthesized(ParenthesizedExpression),
    PointerReference(PointerReferenceExpression),
    Primitive(PrimitiveExpression),
    SizeOf(SizeOfExpression),
    StackAlloc(StackAllocExpression),
    ThisReference,
    TypeOf(TypeOfExpression),
    TypeReference(TypeReferenceExpression),
    Unary(UnaryOperatorExpression),
    Unchecked(UncheckedExpression),
    Query(QueryExpression),
    Pattern(Box<Pattern>),
}

impl Expression {
    pub fn identifier(name: impl Into<Identifier>) -> Self {
        Expression::Identifier(IdentifierExpression {
            identifier: name.into(),
            type_arguments: Vec::new(),
        })
    }

    pub fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Self {
        Expression::Binary(BinaryOperatorExpression {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    pub fn assign(left: Expression, right: Expression) -> Self {
        Expression::Assignment(AssignmentExpression {
            left: Box::new(left),
            operator: AssignmentOperator::Assign,
            right: Box::new(right),
        })
    }

    pub fn unary(operator: UnaryOperator, expression: Expression) -> Self {
        Expression::Unary(UnaryOperatorExpression {
            operator,
            expression: Box::new(expression),
        })
    }

    pub fn member(target: Expression, name: impl Into<Identifier>) -> Self {
        Expression::MemberReference(MemberReferenceExpression {
            target: Box::new(target),
            member_name: name.into(),
            type_arguments: Vec::new(),
        })
    }

    pub fn invoke(target: Expression, arguments: Vec<Expression>) -> Self {
        Expression::Invocation(InvocationExpression {
            target: Box::new(target),
            arguments,
        })
    }

    pub fn literal(value: Literal) -> Self {
        Expression::Primitive(PrimitiveExpression { value, raw: None })
    }

    pub fn int(value: i32) -> Self {
        Expression::literal(Literal::Int(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::literal(Literal::String(value.into()))
    }

    pub fn parenthesized(expression: Expression) -> Self {
        Expression::Parenthesized(ParenthesizedExpression {
            expression: Box::new(expression),
        })
    }
}

/// `delegate (int x) { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnonymousMethodExpression {
    #[serde(default)]
    pub is_async: bool,
    /// `delegate { }` has no parameter list at all, unlike `delegate () { }`
    #[serde(default)]
    pub has_parameter_list: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterDeclaration>,
    pub body: BlockStatement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UndocumentedKind {
    ArgList,
    ArgListAccess,
    MakeRef,
    RefType,
    RefValue,
}

impl UndocumentedKind {
    pub fn keyword(self) -> &'static str {
        match self {
            UndocumentedKind::ArgList | UndocumentedKind::ArgListAccess => "__arglist",
            UndocumentedKind::MakeRef => "__makeref",
            UndocumentedKind::RefType => "__reftype",
            UndocumentedKind::RefValue => "__refvalue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UndocumentedExpression {
    pub operation: UndocumentedKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<Expression>,
}

/// `new int[n] { ... }`, `new int[,] { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayCreateExpression {
    pub element_type: AstType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<Expression>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_specifiers: Vec<super::ArraySpecifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initializer: Option<ArrayInitializerExpression>,
}

/// `{ a, b, c }` in array, collection and object initializers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayInitializerExpression {
    #[serde(default)]
    pub elements: Vec<Expression>,
    /// The source spelled the braces out; a single-element nested
    /// collection initializer keeps them only in that case
    #[serde(default)]
    pub explicit_braces: bool,
    #[serde(default)]
    pub trailing_comma: bool,
}

impl ArrayInitializerExpression {
    pub fn new(elements: Vec<Expression>) -> Self {
        Self {
            elements,
            explicit_braces: true,
            trailing_comma: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsExpression {
    pub expression: Box<Expression>,
    pub target_type: AstType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentOperator {
    Assign,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
    ShiftLeft,
    ShiftRight,
    BitwiseAnd,
    BitwiseOr,
    ExclusiveOr,
}

impl AssignmentOperator {
    pub fn token(self) -> &'static str {
        match self {
            AssignmentOperator::Assign => "=",
            AssignmentOperator::Add => "+=",
            AssignmentOperator::Subtract => "-=",
            AssignmentOperator::Multiply => "*=",
            AssignmentOperator::Divide => "/=",
            AssignmentOperator::Modulus => "%=",
            AssignmentOperator::ShiftLeft => "<<=",
            AssignmentOperator::ShiftRight => ">>=",
            AssignmentOperator::BitwiseAnd => "&=",
            AssignmentOperator::BitwiseOr => "|=",
            AssignmentOperator::ExclusiveOr => "^=",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentExpression {
    pub left: Box<Expression>,
    pub operator: AssignmentOperator,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperator {
    BitwiseAnd,
    BitwiseOr,
    ConditionalAnd,
    ConditionalOr,
    ExclusiveOr,
    GreaterThan,
    GreaterThanOrEqual,
    Equality,
    InEquality,
    LessThan,
    LessThanOrEqual,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
    ShiftLeft,
    ShiftRight,
    NullCoalescing,
}

impl BinaryOperator {
    pub fn token(self) -> &'static str {
        match self {
            BinaryOperator::BitwiseAnd => "&",
            BinaryOperator::BitwiseOr => "|",
            BinaryOperator::ConditionalAnd => "&&",
            BinaryOperator::ConditionalOr => "||",
            BinaryOperator::ExclusiveOr => "^",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::GreaterThanOrEqual => ">=",
            BinaryOperator::Equality => "==",
            BinaryOperator::InEquality => "!=",
            BinaryOperator::LessThan => "<",
            BinaryOperator::LessThanOrEqual => "<=",
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulus => "%",
            BinaryOperator::ShiftLeft => "<<",
            BinaryOperator::ShiftRight => ">>",
            BinaryOperator::NullCoalescing => "??",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryOperatorExpression {
    pub left: Box<Expression>,
    pub operator: BinaryOperator,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastExpression {
    pub target_type: AstType,
    pub expression: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckedExpression {
    pub expression: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UncheckedExpression {
    pub expression: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalExpression {
    pub condition: Box<Expression>,
    pub true_expression: Box<Expression>,
    pub false_expression: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultValueExpression {
    pub target_type: AstType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldDirection {
    Out,
    Ref,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionExpression {
    pub direction: FieldDirection,
    pub expression: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentifierExpression {
    pub identifier: Identifier,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_arguments: Vec<AstType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexerExpression {
    pub target: Box<Expression>,
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationExpression {
    pub target: Box<Expression>,
    #[serde(default)]
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsExpression {
    pub expression: Box<Expression>,
    pub target_type: AstType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LambdaBody {
    Expression(Box<Expression>),
    Block(BlockStatement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LambdaExpression {
    #[serde(default)]
    pub is_async: bool,
    #[serde(default)]
    pub parameters: Vec<ParameterDeclaration>,
    pub body: LambdaBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberReferenceExpression {
    pub target: Box<Expression>,
    pub member_name: Identifier,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_arguments: Vec<AstType>,
}

/// `name: value` in an argument list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedArgumentExpression {
    pub name: Identifier,
    pub expression: Box<Expression>,
}

/// `Name = value` in object initializers, anonymous types and attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedExpression {
    pub name: Identifier,
    pub expression: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectCreateExpression {
    pub created_type: AstType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<Expression>,
    /// `new Foo() { ... }` as opposed to `new Foo { ... }`
    #[serde(default)]
    pub explicit_parentheses: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initializer: Option<ArrayInitializerExpression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnonymousTypeCreateExpression {
    pub initializers: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenthesizedExpression {
    pub expression: Box<Expression>,
}

/// `target->member`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerReferenceExpression {
    pub target: Box<Expression>,
    pub member_name: Identifier,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_arguments: Vec<AstType>,
}

/// A literal value. Integral kinds carry the C# type that selects the
/// suffix; `Decimal` keeps its digits as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Literal {
    Null,
    Bool(bool),
    Char(char),
    String(String),
    Int(i32),
    UInt(u32),
    Long(i64),
    ULong(u64),
    Float(f32),
    Double(f64),
    Decimal(String),
}

impl Literal {
    /// Numeric literal whose text starts with a minus sign
    pub fn is_negative_number(&self) -> bool {
        match self {
            Literal::Int(v) => *v < 0,
            Literal::Long(v) => *v < 0,
            Literal::Float(v) => v.is_sign_negative() && v.is_finite(),
            Literal::Double(v) => v.is_sign_negative() && v.is_finite(),
            Literal::Decimal(v) => v.starts_with('-'),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveExpression {
    pub value: Literal,
    /// Original source spelling, printed verbatim when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeOfExpression {
    pub target_type: AstType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackAllocExpression {
    pub element_type: AstType,
    pub count_expression: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeOfExpression {
    pub target_type: AstType,
}

/// A type used in expression position, e.g. `int` in `int.Parse(s)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeReferenceExpression {
    pub target_type: AstType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOperator {
    Not,
    BitNot,
    Minus,
    Plus,
    Increment,
    Decrement,
    PostIncrement,
    PostDecrement,
    Dereference,
    AddressOf,
    Await,
}

impl UnaryOperator {
    pub fn token(self) -> &'static str {
        match self {
            UnaryOperator::Not => "!",
            UnaryOperator::BitNot => "~",
            UnaryOperator::Minus => "-",
            UnaryOperator::Plus => "+",
            UnaryOperator::Increment | UnaryOperator::PostIncrement => "++",
            UnaryOperator::Decrement | UnaryOperator::PostDecrement => "--",
            UnaryOperator::Dereference => "*",
            UnaryOperator::AddressOf => "&",
            UnaryOperator::Await => "await",
        }
    }

    pub fn is_postfix(self) -> bool {
        matches!(
            self,
            UnaryOperator::PostIncrement | UnaryOperator::PostDecrement
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryOperatorExpression {
    pub operator: UnaryOperator,
    pub expression: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryExpression {
    pub clauses: Vec<QueryClause>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "clause")]
pub enum QueryClause {
    Continuation(QueryContinuationClause),
    From(QueryFromClause),
    Let(QueryLetClause),
    Where(QueryWhereClause),
    Join(QueryJoinClause),
    OrderBy(QueryOrderClause),
    Select(QuerySelectClause),
    Group(QueryGroupClause),
}

/// `<preceding query> into identifier`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryContinuationClause {
    pub preceding_query: QueryExpression,
    pub identifier: Identifier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryFromClause {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_type: Option<AstType>,
    pub identifier: Identifier,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryLetClause {
    pub identifier: Identifier,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryWhereClause {
    pub condition: Expression,
}

/// `join T x in e on a equals b [into g]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryJoinClause {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_type: Option<AstType>,
    pub join_identifier: Identifier,
    pub in_expression: Expression,
    pub on_expression: Expression,
    pub equals_expression: Expression,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub into_identifier: Option<Identifier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryOrderClause {
    pub orderings: Vec<QueryOrdering>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QueryOrderingDirection {
    #[default]
    None,
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryOrdering {
    pub expression: Expression,
    #[serde(default)]
    pub direction: QueryOrderingDirection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySelectClause {
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryGroupClause {
    pub projection: Expression,
    pub key: Expression,
}
