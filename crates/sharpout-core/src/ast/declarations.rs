//! Declarations: the tree root, namespaces, types and their members

use super::{AstType, BlockStatement, Comment, Expression, Identifier, Modifier, PreprocessorDirective};
use serde::{Deserialize, Serialize};

/// Root of a compilation unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyntaxTree {
    #[serde(default)]
    pub members: Vec<NamespaceMember>,
}

impl SyntaxTree {
    /// Read a tree serialized by an external parser
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Anything that may appear at file or namespace level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum NamespaceMember {
    Namespace(NamespaceDeclaration),
    Using(UsingDeclaration),
    UsingAlias(UsingAliasDeclaration),
    ExternAlias(ExternAliasDeclaration),
    Type(TypeDeclaration),
    Delegate(DelegateDeclaration),
    /// Assembly or module level attributes
    AttributeSection(AttributeSection),
    Comment(Comment),
    Directive(PreprocessorDirective),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamespaceDeclaration {
    pub name: AstType,
    #[serde(default)]
    pub members: Vec<NamespaceMember>,
    /// `namespace N { };`
    #[serde(default)]
    pub trailing_semicolon: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsingDeclaration {
    pub import: AstType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsingAliasDeclaration {
    pub alias: Identifier,
    pub import: AstType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternAliasDeclaration {
    pub name: Identifier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassType {
    Class,
    Struct,
    Interface,
    Enum,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeSection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    pub class_type: ClassType,
    pub name: Identifier,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<TypeParameterDeclaration>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub base_types: Vec<AstType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Constraint>,
    #[serde(default)]
    pub members: Vec<TypeMember>,
    /// Enum bodies only: a comma after the last member
    #[serde(default)]
    pub trailing_comma: bool,
    #[serde(default)]
    pub trailing_semicolon: bool,
}

impl TypeDeclaration {
    pub fn new(class_type: ClassType, name: impl Into<Identifier>) -> Self {
        Self {
            attributes: Vec::new(),
            modifiers: Vec::new(),
            class_type,
            name: name.into(),
            type_parameters: Vec::new(),
            base_types: Vec::new(),
            constraints: Vec::new(),
            members: Vec::new(),
            trailing_comma: false,
            trailing_semicolon: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TypeMember {
    Field(FieldDeclaration),
    FixedField(FixedFieldDeclaration),
    Method(MethodDeclaration),
    Constructor(ConstructorDeclaration),
    Destructor(DestructorDeclaration),
    Property(PropertyDeclaration),
    Indexer(IndexerDeclaration),
    Event(EventDeclaration),
    CustomEvent(CustomEventDeclaration),
    Operator(OperatorDeclaration),
    EnumMember(EnumMemberDeclaration),
    Type(TypeDeclaration),
    Delegate(DelegateDeclaration),
    Comment(Comment),
    Directive(PreprocessorDirective),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelegateDeclaration {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeSection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    pub return_type: AstType,
    pub name: Identifier,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<TypeParameterDeclaration>,
    #[serde(default)]
    pub parameters: Vec<ParameterDeclaration>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Constraint>,
}

/// `[target: A, B(1)]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub attribute_type: AstType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<Expression>,
    /// `[Serializable()]` as opposed to `[Serializable]`
    #[serde(default)]
    pub explicit_parentheses: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeSection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    pub return_type: AstType,
    pub variables: Vec<VariableInitializer>,
}

/// `fixed int buffer[16];`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedFieldDeclaration {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeSection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    pub return_type: AstType,
    pub variables: Vec<FixedVariableInitializer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedVariableInitializer {
    pub name: Identifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count_expression: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDeclaration {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeSection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    pub return_type: AstType,
    /// `IFoo` in `void IFoo.Bar()`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_implementation_type: Option<AstType>,
    pub name: Identifier,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<TypeParameterDeclaration>,
    #[serde(default)]
    pub parameters: Vec<ParameterDeclaration>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Constraint>,
    /// `None` for abstract, extern and interface methods
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<BlockStatement>,
}

impl MethodDeclaration {
    pub fn new(return_type: AstType, name: impl Into<Identifier>) -> Self {
        Self {
            attributes: Vec::new(),
            modifiers: Vec::new(),
            return_type,
            private_implementation_type: None,
            name: name.into(),
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            constraints: Vec::new(),
            body: Some(BlockStatement::default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorDeclaration {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeSection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    /// Replaced by the enclosing type's name when printed inside a type
    pub name: Identifier,
    #[serde(default)]
    pub parameters: Vec<ParameterDeclaration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initializer: Option<ConstructorInitializer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<BlockStatement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstructorInitializerType {
    Base,
    This,
}

/// `: base(...)` or `: this(...)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorInitializer {
    pub initializer_type: ConstructorInitializerType,
    #[serde(default)]
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestructorDeclaration {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeSection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    pub name: Identifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<BlockStatement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDeclaration {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeSection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    pub return_type: AstType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_implementation_type: Option<AstType>,
    pub name: Identifier,
    /// `get` and `set`, printed in source order
    pub accessors: Vec<Accessor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexerDeclaration {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeSection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    pub return_type: AstType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_implementation_type: Option<AstType>,
    pub parameters: Vec<ParameterDeclaration>,
    pub accessors: Vec<Accessor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessorKind {
    Get,
    Set,
    Add,
    Remove,
}

impl AccessorKind {
    pub fn keyword(self) -> &'static str {
        match self {
            AccessorKind::Get => "get",
            AccessorKind::Set => "set",
            AccessorKind::Add => "add",
            AccessorKind::Remove => "remove",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accessor {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeSection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    pub kind: AccessorKind,
    /// `None` prints the auto-accessor form `get;`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<BlockStatement>,
}

impl Accessor {
    pub fn auto(kind: AccessorKind) -> Self {
        Self {
            attributes: Vec::new(),
            modifiers: Vec::new(),
            kind,
            body: None,
        }
    }
}

/// Field-like event: `event EventHandler A, B;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDeclaration {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeSection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    pub return_type: AstType,
    pub variables: Vec<VariableInitializer>,
}

/// Event with explicit `add`/`remove` accessors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomEventDeclaration {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeSection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    pub return_type: AstType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_implementation_type: Option<AstType>,
    pub name: Identifier,
    pub accessors: Vec<Accessor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperatorKind {
    LogicalNot,
    OnesComplement,
    Increment,
    Decrement,
    True,
    False,
    UnaryPlus,
    UnaryNegation,
    Addition,
    Subtraction,
    Multiply,
    Division,
    Modulus,
    BitwiseAnd,
    BitwiseOr,
    ExclusiveOr,
    LeftShift,
    RightShift,
    Equality,
    Inequality,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
    Implicit,
    Explicit,
}

impl OperatorKind {
    /// Operator symbol, or `None` for conversion operators
    pub fn token(self) -> Option<&'static str> {
        let token = match self {
            OperatorKind::LogicalNot => "!",
            OperatorKind::OnesComplement => "~",
            OperatorKind::Increment => "++",
            OperatorKind::Decrement => "--",
            OperatorKind::True => "true",
            OperatorKind::False => "false",
            OperatorKind::UnaryPlus | OperatorKind::Addition => "+",
            OperatorKind::UnaryNegation | OperatorKind::Subtraction => "-",
            OperatorKind::Multiply => "*",
            OperatorKind::Division => "/",
            OperatorKind::Modulus => "%",
            OperatorKind::BitwiseAnd => "&",
            OperatorKind::BitwiseOr => "|",
            OperatorKind::ExclusiveOr => "^",
            OperatorKind::LeftShift => "<<",
            OperatorKind::RightShift => ">>",
            OperatorKind::Equality => "==",
            OperatorKind::Inequality => "!=",
            OperatorKind::GreaterThan => ">",
            OperatorKind::LessThan => "<",
            OperatorKind::GreaterThanOrEqual => ">=",
            OperatorKind::LessThanOrEqual => "<=",
            OperatorKind::Implicit | OperatorKind::Explicit => return None,
        };
        Some(token)
    }

    pub fn is_conversion(self) -> bool {
        matches!(self, OperatorKind::Implicit | OperatorKind::Explicit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorDeclaration {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeSection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    pub operator: OperatorKind,
    /// Printed after `operator` for conversions, before it otherwise
    pub return_type: AstType,
    pub parameters: Vec<ParameterDeclaration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<BlockStatement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumMemberDeclaration {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeSection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    pub name: Identifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initializer: Option<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterModifier {
    #[default]
    None,
    Ref,
    Out,
    Params,
    This,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDeclaration {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeSection>,
    #[serde(default)]
    pub modifier: ParameterModifier,
    /// Absent for implicitly typed lambda parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_type: Option<AstType>,
    /// Absent in documentation reference signatures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Identifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_expression: Option<Expression>,
}

impl ParameterDeclaration {
    pub fn new(parameter_type: AstType, name: impl Into<Identifier>) -> Self {
        Self {
            attributes: Vec::new(),
            modifier: ParameterModifier::None,
            parameter_type: Some(parameter_type),
            name: Some(name.into()),
            default_expression: None,
        }
    }

    /// Implicitly typed lambda parameter
    pub fn untyped(name: impl Into<Identifier>) -> Self {
        Self {
            attributes: Vec::new(),
            modifier: ParameterModifier::None,
            parameter_type: None,
            name: Some(name.into()),
            default_expression: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variance {
    #[default]
    Invariant,
    /// `out T`
    Covariant,
    /// `in T`
    Contravariant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeParameterDeclaration {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeSection>,
    #[serde(default)]
    pub variance: Variance,
    pub name: Identifier,
}

/// `where T : class, new()`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub type_parameter: Identifier,
    pub base_types: Vec<AstType>,
}

/// `name = initializer` in declarations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableInitializer {
    pub name: Identifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initializer: Option<Expression>,
}

impl VariableInitializer {
    pub fn new(name: impl Into<Identifier>, initializer: Option<Expression>) -> Self {
        Self {
            name: name.into(),
            initializer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolKind {
    TypeDefinition,
    Field,
    Property,
    Indexer,
    Event,
    Method,
    Constructor,
    Destructor,
    Operator,
}

/// Target of a `cref` attribute in documentation comments,
/// e.g. `List{T}.Add(T)` or `Money.op_Implicit`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentationReference {
    pub symbol_kind: SymbolKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaring_type: Option<AstType>,
    /// Required unless the reference is to a type, indexer or operator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_name: Option<Identifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<OperatorKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_return_type: Option<AstType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_arguments: Vec<AstType>,
    #[serde(default)]
    pub has_parameter_list: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterDeclaration>,
}
