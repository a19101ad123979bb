//! Uniform borrowed handle over every node of the tree
//!
//! Parent links are not stored in the tree; a walker keeps its own stack of
//! `NodeRef`s. References are normalized so that one node always maps to the
//! same variant: a block is always `Block`, never `Statement(Statement::Block)`,
//! and every placeholder is `Pattern` whichever family it stands in for.

use super::*;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    SyntaxTree(&'a SyntaxTree),
    Namespace(&'a NamespaceDeclaration),
    Using(&'a UsingDeclaration),
    UsingAlias(&'a UsingAliasDeclaration),
    ExternAlias(&'a ExternAliasDeclaration),
    TypeDeclaration(&'a TypeDeclaration),
    Delegate(&'a DelegateDeclaration),
    AttributeSection(&'a AttributeSection),
    Attribute(&'a Attribute),
    Field(&'a FieldDeclaration),
    FixedField(&'a FixedFieldDeclaration),
    FixedVariableInitializer(&'a FixedVariableInitializer),
    Method(&'a MethodDeclaration),
    Constructor(&'a ConstructorDeclaration),
    ConstructorInitializer(&'a ConstructorInitializer),
    Destructor(&'a DestructorDeclaration),
    Property(&'a PropertyDeclaration),
    Indexer(&'a IndexerDeclaration),
    Accessor(&'a Accessor),
    Event(&'a EventDeclaration),
    CustomEvent(&'a CustomEventDeclaration),
    Operator(&'a OperatorDeclaration),
    EnumMember(&'a EnumMemberDeclaration),
    Parameter(&'a ParameterDeclaration),
    TypeParameter(&'a TypeParameterDeclaration),
    Constraint(&'a Constraint),
    VariableInitializer(&'a VariableInitializer),
    DocumentationReference(&'a DocumentationReference),
    Type(&'a AstType),
    ArraySpecifier(&'a ArraySpecifier),
    Expression(&'a Expression),
    ArrayInitializer(&'a ArrayInitializerExpression),
    Query(&'a QueryExpression),
    QueryClause(&'a QueryClause),
    QueryOrdering(&'a QueryOrdering),
    Statement(&'a Statement),
    Block(&'a BlockStatement),
    VariableDeclaration(&'a VariableDeclarationStatement),
    SwitchSection(&'a SwitchSection),
    CaseLabel(&'a CaseLabel),
    CatchClause(&'a CatchClause),
    Comment(&'a Comment),
    Directive(&'a PreprocessorDirective),
    Pattern(&'a Pattern),
}

/// Closed set of node kinds, used in error paths and position maps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    SyntaxTree,
    Namespace,
    Using,
    UsingAlias,
    ExternAlias,
    TypeDeclaration,
    Delegate,
    AttributeSection,
    Attribute,
    Field,
    FixedField,
    FixedVariableInitializer,
    Method,
    Constructor,
    ConstructorInitializer,
    Destructor,
    Property,
    Indexer,
    Accessor,
    Event,
    CustomEvent,
    Operator,
    EnumMember,
    Parameter,
    TypeParameter,
    Constraint,
    VariableInitializer,
    DocumentationReference,
    PrimitiveType,
    SimpleType,
    MemberType,
    ComposedType,
    ArraySpecifier,
    AnonymousMethod,
    Undocumented,
    ArrayCreate,
    ArrayInitializer,
    As,
    Assignment,
    BaseReference,
    Binary,
    Cast,
    Checked,
    Conditional,
    DefaultValue,
    Direction,
    Identifier,
    IndexerExpression,
    Invocation,
    Is,
    Lambda,
    MemberReference,
    NamedArgument,
    Named,
    NullReference,
    ObjectCreate,
    AnonymousTypeCreate,
    Parenthesized,
    PointerReference,
    Primitive,
    SizeOf,
    StackAlloc,
    ThisReference,
    TypeOf,
    TypeReference,
    Unary,
    Unchecked,
    Query,
    QueryContinuation,
    QueryFrom,
    QueryLet,
    QueryWhere,
    QueryJoin,
    QueryOrder,
    QueryOrdering,
    QuerySelect,
    QueryGroup,
    Block,
    Break,
    CheckedStatement,
    Continue,
    DoWhile,
    Empty,
    ExpressionStatement,
    Fixed,
    Foreach,
    For,
    Goto,
    GotoCase,
    GotoDefault,
    IfElse,
    Label,
    Lock,
    Return,
    Switch,
    SwitchSection,
    CaseLabel,
    Throw,
    TryCatch,
    CatchClause,
    UncheckedStatement,
    Unsafe,
    UsingStatement,
    VariableDeclaration,
    While,
    YieldBreak,
    YieldReturn,
    Comment,
    PreprocessorDirective,
    Pattern,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

macro_rules! node_ref_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a $ty> for NodeRef<'a> {
                fn from(node: &'a $ty) -> Self {
                    NodeRef::$variant(node)
                }
            }
        )*
    };
}

node_ref_from! {
    SyntaxTree => SyntaxTree,
    NamespaceDeclaration => Namespace,
    UsingDeclaration => Using,
    UsingAliasDeclaration => UsingAlias,
    ExternAliasDeclaration => ExternAlias,
    TypeDeclaration => TypeDeclaration,
    DelegateDeclaration => Delegate,
    AttributeSection => AttributeSection,
    Attribute => Attribute,
    FieldDeclaration => Field,
    FixedFieldDeclaration => FixedField,
    FixedVariableInitializer => FixedVariableInitializer,
    MethodDeclaration => Method,
    ConstructorDeclaration => Constructor,
    ConstructorInitializer => ConstructorInitializer,
    DestructorDeclaration => Destructor,
    PropertyDeclaration => Property,
    IndexerDeclaration => Indexer,
    Accessor => Accessor,
    EventDeclaration => Event,
    CustomEventDeclaration => CustomEvent,
    OperatorDeclaration => Operator,
    EnumMemberDeclaration => EnumMember,
    ParameterDeclaration => Parameter,
    TypeParameterDeclaration => TypeParameter,
    Constraint => Constraint,
    VariableInitializer => VariableInitializer,
    DocumentationReference => DocumentationReference,
    ArraySpecifier => ArraySpecifier,
    ArrayInitializerExpression => ArrayInitializer,
    QueryExpression => Query,
    QueryClause => QueryClause,
    QueryOrdering => QueryOrdering,
    BlockStatement => Block,
    VariableDeclarationStatement => VariableDeclaration,
    SwitchSection => SwitchSection,
    CaseLabel => CaseLabel,
    CatchClause => CatchClause,
    Comment => Comment,
    PreprocessorDirective => Directive,
    Pattern => Pattern,
}

impl<'a> From<&'a AstType> for NodeRef<'a> {
    fn from(ty: &'a AstType) -> Self {
        match ty {
            AstType::Pattern(pattern) => NodeRef::Pattern(pattern),
            _ => NodeRef::Type(ty),
        }
    }
}

impl<'a> From<&'a Expression> for NodeRef<'a> {
    fn from(expr: &'a Expression) -> Self {
        match expr {
            Expression::ArrayInitializer(init) => NodeRef::ArrayInitializer(init),
            Expression::Query(query) => NodeRef::Query(query),
            Expression::Pattern(pattern) => NodeRef::Pattern(pattern),
            _ => NodeRef::Expression(expr),
        }
    }
}

impl<'a> From<&'a Statement> for NodeRef<'a> {
    fn from(stmt: &'a Statement) -> Self {
        match stmt {
            Statement::Block(block) => NodeRef::Block(block),
            Statement::VariableDeclaration(decl) => NodeRef::VariableDeclaration(decl),
            Statement::Comment(comment) => NodeRef::Comment(comment),
            Statement::Directive(directive) => NodeRef::Directive(directive),
            Statement::Pattern(pattern) => NodeRef::Pattern(pattern),
            _ => NodeRef::Statement(stmt),
        }
    }
}

impl<'a> From<&'a NamespaceMember> for NodeRef<'a> {
    fn from(member: &'a NamespaceMember) -> Self {
        match member {
            NamespaceMember::Namespace(ns) => NodeRef::Namespace(ns),
            NamespaceMember::Using(using) => NodeRef::Using(using),
            NamespaceMember::UsingAlias(alias) => NodeRef::UsingAlias(alias),
            NamespaceMember::ExternAlias(alias) => NodeRef::ExternAlias(alias),
            NamespaceMember::Type(ty) => NodeRef::TypeDeclaration(ty),
            NamespaceMember::Delegate(delegate) => NodeRef::Delegate(delegate),
            NamespaceMember::AttributeSection(section) => NodeRef::AttributeSection(section),
            NamespaceMember::Comment(comment) => NodeRef::Comment(comment),
            NamespaceMember::Directive(directive) => NodeRef::Directive(directive),
        }
    }
}

impl<'a> From<&'a TypeMember> for NodeRef<'a> {
    fn from(member: &'a TypeMember) -> Self {
        match member {
            TypeMember::Field(field) => NodeRef::Field(field),
            TypeMember::FixedField(field) => NodeRef::FixedField(field),
            TypeMember::Method(method) => NodeRef::Method(method),
            TypeMember::Constructor(ctor) => NodeRef::Constructor(ctor),
            TypeMember::Destructor(dtor) => NodeRef::Destructor(dtor),
            TypeMember::Property(property) => NodeRef::Property(property),
            TypeMember::Indexer(indexer) => NodeRef::Indexer(indexer),
            TypeMember::Event(event) => NodeRef::Event(event),
            TypeMember::CustomEvent(event) => NodeRef::CustomEvent(event),
            TypeMember::Operator(op) => NodeRef::Operator(op),
            TypeMember::EnumMember(member) => NodeRef::EnumMember(member),
            TypeMember::Type(ty) => NodeRef::TypeDeclaration(ty),
            TypeMember::Delegate(delegate) => NodeRef::Delegate(delegate),
            TypeMember::Comment(comment) => NodeRef::Comment(comment),
            TypeMember::Directive(directive) => NodeRef::Directive(directive),
        }
    }
}

impl<'a> From<&'a UsingResource> for NodeRef<'a> {
    fn from(resource: &'a UsingResource) -> Self {
        match resource {
            UsingResource::Declaration(decl) => NodeRef::VariableDeclaration(decl),
            UsingResource::Expression(expr) => NodeRef::from(expr),
        }
    }
}

impl<'a> From<&'a LambdaBody> for NodeRef<'a> {
    fn from(body: &'a LambdaBody) -> Self {
        match body {
            LambdaBody::Expression(expr) => NodeRef::from(&**expr),
            LambdaBody::Block(block) => NodeRef::Block(block),
        }
    }
}

/// Collects children in print order
struct Children<'a>(Vec<NodeRef<'a>>);

impl<'a> Children<'a> {
    fn one<T>(&mut self, node: &'a T) -> &mut Self
    where
        &'a T: Into<NodeRef<'a>>,
    {
        self.0.push(node.into());
        self
    }

    fn opt<T>(&mut self, node: &'a Option<T>) -> &mut Self
    where
        &'a T: Into<NodeRef<'a>>,
    {
        if let Some(node) = node {
            self.0.push(node.into());
        }
        self
    }

    fn all<T>(&mut self, nodes: &'a [T]) -> &mut Self
    where
        &'a T: Into<NodeRef<'a>>,
    {
        self.0.extend(nodes.iter().map(Into::into));
        self
    }

    fn boxed<T>(&mut self, node: &'a Box<T>) -> &mut Self
    where
        &'a T: Into<NodeRef<'a>>,
    {
        self.0.push((&**node).into());
        self
    }

    fn pattern(&mut self, node: &'a PatternNode) -> &mut Self {
        match node {
            PatternNode::Pattern(nested) => self.pattern_contents(nested),
            PatternNode::Type(ty) => self.one(ty),
            PatternNode::Expression(expr) => self.one(expr),
            PatternNode::Statement(stmt) => self.one(stmt),
            PatternNode::Value(_) => self,
        }
    }

    /// Nested placeholders are not nodes themselves; their embedded nodes
    /// belong to the outermost placeholder
    fn pattern_contents(&mut self, pattern: &'a Pattern) -> &mut Self {
        match pattern {
            Pattern::Any { .. }
            | Pattern::Backreference { .. }
            | Pattern::IdentifierBackreference { .. } => self,
            Pattern::Choice { alternatives } => {
                for alternative in alternatives {
                    self.pattern(alternative);
                }
                self
            }
            Pattern::Named { child, .. }
            | Pattern::Repeat { child, .. }
            | Pattern::Optional { child } => self.pattern(child),
        }
    }
}

impl<'a> NodeRef<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::SyntaxTree(_) => NodeKind::SyntaxTree,
            NodeRef::Namespace(_) => NodeKind::Namespace,
            NodeRef::Using(_) => NodeKind::Using,
            NodeRef::UsingAlias(_) => NodeKind::UsingAlias,
            NodeRef::ExternAlias(_) => NodeKind::ExternAlias,
            NodeRef::TypeDeclaration(_) => NodeKind::TypeDeclaration,
            NodeRef::Delegate(_) => NodeKind::Delegate,
            NodeRef::AttributeSection(_) => NodeKind::AttributeSection,
            NodeRef::Attribute(_) => NodeKind::Attribute,
            NodeRef::Field(_) => NodeKind::Field,
            NodeRef::FixedField(_) => NodeKind::FixedField,
            NodeRef::FixedVariableInitializer(_) => NodeKind::FixedVariableInitializer,
            NodeRef::Method(_) => NodeKind::Method,
            NodeRef::Constructor(_) => NodeKind::Constructor,
            NodeRef::ConstructorInitializer(_) => NodeKind::ConstructorInitializer,
            NodeRef::Destructor(_) => NodeKind::Destructor,
            NodeRef::Property(_) => NodeKind::Property,
            NodeRef::Indexer(_) => NodeKind::Indexer,
            NodeRef::Accessor(_) => NodeKind::Accessor,
            NodeRef::Event(_) => NodeKind::Event,
            NodeRef::CustomEvent(_) => NodeKind::CustomEvent,
            NodeRef::Operator(_) => NodeKind::Operator,
            NodeRef::EnumMember(_) => NodeKind::EnumMember,
            NodeRef::Parameter(_) => NodeKind::Parameter,
            NodeRef::TypeParameter(_) => NodeKind::TypeParameter,
            NodeRef::Constraint(_) => NodeKind::Constraint,
            NodeRef::VariableInitializer(_) => NodeKind::VariableInitializer,
            NodeRef::DocumentationReference(_) => NodeKind::DocumentationReference,
            NodeRef::Type(ty) => match ty {
                AstType::Primitive(_) => NodeKind::PrimitiveType,
                AstType::Simple(_) => NodeKind::SimpleType,
                AstType::Member(_) => NodeKind::MemberType,
                AstType::Composed(_) => NodeKind::ComposedType,
                AstType::Pattern(_) => NodeKind::Pattern,
            },
            NodeRef::ArraySpecifier(_) => NodeKind::ArraySpecifier,
            NodeRef::Expression(expr) => expression_kind(expr),
            NodeRef::ArrayInitializer(_) => NodeKind::ArrayInitializer,
            NodeRef::Query(_) => NodeKind::Query,
            NodeRef::QueryClause(clause) => match clause {
                QueryClause::Continuation(_) => NodeKind::QueryContinuation,
                QueryClause::From(_) => NodeKind::QueryFrom,
                QueryClause::Let(_) => NodeKind::QueryLet,
                QueryClause::Where(_) => NodeKind::QueryWhere,
                QueryClause::Join(_) => NodeKind::QueryJoin,
                QueryClause::OrderBy(_) => NodeKind::QueryOrder,
                QueryClause::Select(_) => NodeKind::QuerySelect,
                QueryClause::Group(_) => NodeKind::QueryGroup,
            },
            NodeRef::QueryOrdering(_) => NodeKind::QueryOrdering,
            NodeRef::Statement(stmt) => statement_kind(stmt),
            NodeRef::Block(_) => NodeKind::Block,
            NodeRef::VariableDeclaration(_) => NodeKind::VariableDeclaration,
            NodeRef::SwitchSection(_) => NodeKind::SwitchSection,
            NodeRef::CaseLabel(_) => NodeKind::CaseLabel,
            NodeRef::CatchClause(_) => NodeKind::CatchClause,
            NodeRef::Comment(_) => NodeKind::Comment,
            NodeRef::Directive(_) => NodeKind::PreprocessorDirective,
            NodeRef::Pattern(_) => NodeKind::Pattern,
        }
    }

    /// Identity comparison: both handles point at the same node
    pub fn ptr_eq(&self, other: &NodeRef<'_>) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
            && std::ptr::eq(self.address(), other.address())
    }

    fn address(&self) -> *const () {
        fn addr<T>(node: &T) -> *const () {
            node as *const T as *const ()
        }
        match self {
            NodeRef::SyntaxTree(n) => addr(*n),
            NodeRef::Namespace(n) => addr(*n),
            NodeRef::Using(n) => addr(*n),
            NodeRef::UsingAlias(n) => addr(*n),
            NodeRef::ExternAlias(n) => addr(*n),
            NodeRef::TypeDeclaration(n) => addr(*n),
            NodeRef::Delegate(n) => addr(*n),
            NodeRef::AttributeSection(n) => addr(*n),
            NodeRef::Attribute(n) => addr(*n),
            NodeRef::Field(n) => addr(*n),
            NodeRef::FixedField(n) => addr(*n),
            NodeRef::FixedVariableInitializer(n) => addr(*n),
            NodeRef::Method(n) => addr(*n),
            NodeRef::Constructor(n) => addr(*n),
            NodeRef::ConstructorInitializer(n) => addr(*n),
            NodeRef::Destructor(n) => addr(*n),
            NodeRef::Property(n) => addr(*n),
            NodeRef::Indexer(n) => addr(*n),
            NodeRef::Accessor(n) => addr(*n),
            NodeRef::Event(n) => addr(*n),
            NodeRef::CustomEvent(n) => addr(*n),
            NodeRef::Operator(n) => addr(*n),
            NodeRef::EnumMember(n) => addr(*n),
            NodeRef::Parameter(n) => addr(*n),
            NodeRef::TypeParameter(n) => addr(*n),
            NodeRef::Constraint(n) => addr(*n),
            NodeRef::VariableInitializer(n) => addr(*n),
            NodeRef::DocumentationReference(n) => addr(*n),
            NodeRef::Type(n) => addr(*n),
            NodeRef::ArraySpecifier(n) => addr(*n),
            NodeRef::Expression(n) => addr(*n),
            NodeRef::ArrayInitializer(n) => addr(*n),
            NodeRef::Query(n) => addr(*n),
            NodeRef::QueryClause(n) => addr(*n),
            NodeRef::QueryOrdering(n) => addr(*n),
            NodeRef::Statement(n) => addr(*n),
            NodeRef::Block(n) => addr(*n),
            NodeRef::VariableDeclaration(n) => addr(*n),
            NodeRef::SwitchSection(n) => addr(*n),
            NodeRef::CaseLabel(n) => addr(*n),
            NodeRef::CatchClause(n) => addr(*n),
            NodeRef::Comment(n) => addr(*n),
            NodeRef::Directive(n) => addr(*n),
            NodeRef::Pattern(n) => addr(*n),
        }
    }

    pub fn is_expression(&self) -> bool {
        matches!(
            self,
            NodeRef::Expression(_) | NodeRef::ArrayInitializer(_) | NodeRef::Query(_)
        )
    }

    /// Statement list this node owns, for sibling lookups
    pub fn statements(&self) -> Option<&'a [Statement]> {
        match self {
            NodeRef::Block(block) => Some(&block.statements),
            NodeRef::SwitchSection(section) => Some(&section.statements),
            _ => None,
        }
    }

    /// Child nodes in the order the printer visits them
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        let mut c = Children(Vec::new());
        match *self {
            NodeRef::SyntaxTree(tree) => {
                c.all(&tree.members);
            }
            NodeRef::Namespace(ns) => {
                c.one(&ns.name).all(&ns.members);
            }
            NodeRef::Using(using) => {
                c.one(&using.import);
            }
            NodeRef::UsingAlias(alias) => {
                c.one(&alias.import);
            }
            NodeRef::ExternAlias(_) => {}
            NodeRef::TypeDeclaration(ty) => {
                c.all(&ty.attributes)
                    .all(&ty.type_parameters)
                    .all(&ty.base_types)
                    .all(&ty.constraints)
                    .all(&ty.members);
            }
            NodeRef::Delegate(delegate) => {
                c.all(&delegate.attributes)
                    .one(&delegate.return_type)
                    .all(&delegate.type_parameters)
                    .all(&delegate.parameters)
                    .all(&delegate.constraints);
            }
            NodeRef::AttributeSection(section) => {
                c.all(&section.attributes);
            }
            NodeRef::Attribute(attribute) => {
                c.one(&attribute.attribute_type).all(&attribute.arguments);
            }
            NodeRef::Field(field) => {
                c.all(&field.attributes)
                    .one(&field.return_type)
                    .all(&field.variables);
            }
            NodeRef::FixedField(field) => {
                c.all(&field.attributes)
                    .one(&field.return_type)
                    .all(&field.variables);
            }
            NodeRef::FixedVariableInitializer(var) => {
                c.opt(&var.count_expression);
            }
            NodeRef::Method(method) => {
                c.all(&method.attributes)
                    .one(&method.return_type)
                    .opt(&method.private_implementation_type)
                    .all(&method.type_parameters)
                    .all(&method.parameters)
                    .all(&method.constraints)
                    .opt(&method.body);
            }
            NodeRef::Constructor(ctor) => {
                c.all(&ctor.attributes)
                    .all(&ctor.parameters)
                    .opt(&ctor.initializer)
                    .opt(&ctor.body);
            }
            NodeRef::ConstructorInitializer(init) => {
                c.all(&init.arguments);
            }
            NodeRef::Destructor(dtor) => {
                c.all(&dtor.attributes).opt(&dtor.body);
            }
            NodeRef::Property(property) => {
                c.all(&property.attributes)
                    .one(&property.return_type)
                    .opt(&property.private_implementation_type)
                    .all(&property.accessors);
            }
            NodeRef::Indexer(indexer) => {
                c.all(&indexer.attributes)
                    .one(&indexer.return_type)
                    .opt(&indexer.private_implementation_type)
                    .all(&indexer.parameters)
                    .all(&indexer.accessors);
            }
            NodeRef::Accessor(accessor) => {
                c.all(&accessor.attributes).opt(&accessor.body);
            }
            NodeRef::Event(event) => {
                c.all(&event.attributes)
                    .one(&event.return_type)
                    .all(&event.variables);
            }
            NodeRef::CustomEvent(event) => {
                c.all(&event.attributes)
                    .one(&event.return_type)
                    .opt(&event.private_implementation_type)
                    .all(&event.accessors);
            }
            NodeRef::Operator(op) => {
                c.all(&op.attributes)
                    .one(&op.return_type)
                    .all(&op.parameters)
                    .opt(&op.body);
            }
            NodeRef::EnumMember(member) => {
                c.all(&member.attributes).opt(&member.initializer);
            }
            NodeRef::Parameter(param) => {
                c.all(&param.attributes)
                    .opt(&param.parameter_type)
                    .opt(&param.default_expression);
            }
            NodeRef::TypeParameter(param) => {
                c.all(&param.attributes);
            }
            NodeRef::Constraint(constraint) => {
                c.all(&constraint.base_types);
            }
            NodeRef::VariableInitializer(var) => {
                c.opt(&var.initializer);
            }
            NodeRef::DocumentationReference(reference) => {
                c.opt(&reference.declaring_type);
                if reference.symbol_kind == SymbolKind::Operator {
                    c.opt(&reference.conversion_return_type);
                }
                c.all(&reference.type_arguments).all(&reference.parameters);
            }
            NodeRef::Type(ty) => match ty {
                AstType::Primitive(_) | AstType::Pattern(_) => {}
                AstType::Simple(simple) => {
                    c.all(&simple.type_arguments);
                }
                AstType::Member(member) => {
                    c.boxed(&member.target).all(&member.type_arguments);
                }
                AstType::Composed(composed) => {
                    c.boxed(&composed.base_type)
                        .all(&composed.array_specifiers);
                }
            },
            NodeRef::ArraySpecifier(_) => {}
            NodeRef::Expression(expr) => expression_children(&mut c, expr),
            NodeRef::ArrayInitializer(init) => {
                c.all(&init.elements);
            }
            NodeRef::Query(query) => {
                c.all(&query.clauses);
            }
            NodeRef::QueryClause(clause) => match clause {
                QueryClause::Continuation(cont) => {
                    c.one(&cont.preceding_query);
                }
                QueryClause::From(from) => {
                    c.opt(&from.variable_type).one(&from.expression);
                }
                QueryClause::Let(let_clause) => {
                    c.one(&let_clause.expression);
                }
                QueryClause::Where(where_clause) => {
                    c.one(&where_clause.condition);
                }
                QueryClause::Join(join) => {
                    c.opt(&join.variable_type)
                        .one(&join.in_expression)
                        .one(&join.on_expression)
                        .one(&join.equals_expression);
                }
                QueryClause::OrderBy(order) => {
                    c.all(&order.orderings);
                }
                QueryClause::Select(select) => {
                    c.one(&select.expression);
                }
                QueryClause::Group(group) => {
                    c.one(&group.projection).one(&group.key);
                }
            },
            NodeRef::QueryOrdering(ordering) => {
                c.one(&ordering.expression);
            }
            NodeRef::Statement(stmt) => statement_children(&mut c, stmt),
            NodeRef::Block(block) => {
                c.all(&block.statements);
            }
            NodeRef::VariableDeclaration(decl) => {
                c.one(&decl.variable_type).all(&decl.variables);
            }
            NodeRef::SwitchSection(section) => {
                c.all(&section.case_labels).all(&section.statements);
            }
            NodeRef::CaseLabel(label) => {
                c.opt(&label.expression);
            }
            NodeRef::CatchClause(clause) => {
                c.opt(&clause.catch_type)
                    .opt(&clause.condition)
                    .one(&clause.body);
            }
            NodeRef::Comment(_) | NodeRef::Directive(_) => {}
            NodeRef::Pattern(pattern) => {
                c.pattern_contents(pattern);
            }
        }
        c.0
    }

    /// This node and all its descendants, parents before children
    pub fn preorder(&self) -> Vec<NodeRef<'a>> {
        let mut out = Vec::new();
        let mut pending = vec![*self];
        while let Some(node) = pending.pop() {
            out.push(node);
            pending.extend(node.children().into_iter().rev());
        }
        out
    }
}

fn expression_kind(expr: &Expression) -> NodeKind {
    match expr {
        Expression::AnonymousMethod(_) => NodeKind::AnonymousMethod,
        Expression::Undocumented(_) => NodeKind::Undocumented,
        Expression::ArrayCreate(_) => NodeKind::ArrayCreate,
        Expression::ArrayInitializer(_) => NodeKind::ArrayInitializer,
        Expression::As(_) => NodeKind::As,
        Expression::Assignment(_) => NodeKind::Assignment,
        Expression::BaseReference => NodeKind::BaseReference,
        Expression::Binary(_) => NodeKind::Binary,
        Expression::Cast(_) => NodeKind::Cast,
        Expression::Checked(_) => NodeKind::Checked,
        Expression::Conditional(_) => NodeKind::Conditional,
        Expression::DefaultValue(_) => NodeKind::DefaultValue,
        Expression::Direction(_) => NodeKind::Direction,
        Expression::Identifier(_) => NodeKind::Identifier,
        Expression::Indexer(_) => NodeKind::IndexerExpression,
        Expression::Invocation(_) => NodeKind::Invocation,
        Expression::Is(_) => NodeKind::Is,
        Expression::Lambda(_) => NodeKind::Lambda,
        Expression::MemberReference(_) => NodeKind::MemberReference,
        Expression::NamedArgument(_) => NodeKind::NamedArgument,
        Expression::Named(_) => NodeKind::Named,
        Expression::NullReference => NodeKind::NullReference,
        Expression::ObjectCreate(_) => NodeKind::ObjectCreate,
        Expression::AnonymousTypeCreate(_) => NodeKind::AnonymousTypeCreate,
        Expression::Parenthesized(_) => NodeKind::Parenthesized,
        Expression::PointerReference(_) => NodeKind::PointerReference,
        Expression::Primitive(_) => NodeKind::Primitive,
        Expression::SizeOf(_) => NodeKind::SizeOf,
        Expression::StackAlloc(_) => NodeKind::StackAlloc,
        Expression::ThisReference => NodeKind::ThisReference,
        Expression::TypeOf(_) => NodeKind::TypeOf,
        Expression::TypeReference(_) => NodeKind::TypeReference,
        Expression::Unary(_) => NodeKind::Unary,
        Expression::Unchecked(_) => NodeKind::Unchecked,
        Expression::Query(_) => NodeKind::Query,
        Expression::Pattern(_) => NodeKind::Pattern,
    }
}

fn statement_kind(stmt: &Statement) -> NodeKind {
    match stmt {
        Statement::Block(_) => NodeKind::Block,
        Statement::Break => NodeKind::Break,
        Statement::Checked(_) => NodeKind::CheckedStatement,
        Statement::Continue => NodeKind::Continue,
        Statement::DoWhile(_) => NodeKind::DoWhile,
        Statement::Empty => NodeKind::Empty,
        Statement::Expression(_) => NodeKind::ExpressionStatement,
        Statement::Fixed(_) => NodeKind::Fixed,
        Statement::Foreach(_) => NodeKind::Foreach,
        Statement::For(_) => NodeKind::For,
        Statement::Goto(_) => NodeKind::Goto,
        Statement::GotoCase(_) => NodeKind::GotoCase,
        Statement::GotoDefault => NodeKind::GotoDefault,
        Statement::IfElse(_) => NodeKind::IfElse,
        Statement::Label(_) => NodeKind::Label,
        Statement::Lock(_) => NodeKind::Lock,
        Statement::Return(_) => NodeKind::Return,
        Statement::Switch(_) => NodeKind::Switch,
        Statement::Throw(_) => NodeKind::Throw,
        Statement::TryCatch(_) => NodeKind::TryCatch,
        Statement::Unchecked(_) => NodeKind::UncheckedStatement,
        Statement::Unsafe(_) => NodeKind::Unsafe,
        Statement::Using(_) => NodeKind::UsingStatement,
        Statement::VariableDeclaration(_) => NodeKind::VariableDeclaration,
        Statement::While(_) => NodeKind::While,
        Statement::YieldBreak => NodeKind::YieldBreak,
        Statement::YieldReturn(_) => NodeKind::YieldReturn,
        Statement::Comment(_) => NodeKind::Comment,
        Statement::Directive(_) => NodeKind::PreprocessorDirective,
        Statement::Pattern(_) => NodeKind::Pattern,
    }
}

fn expression_children<'a>(c: &mut Children<'a>, expr: &'a Expression) {
    match expr {
        Expression::AnonymousMethod(method) => {
            c.all(&method.parameters).one(&method.body);
        }
        Expression::Undocumented(undocumented) => {
            c.all(&undocumented.arguments);
        }
        Expression::ArrayCreate(create) => {
            c.one(&create.element_type)
                .all(&create.arguments)
                .all(&create.additional_specifiers)
                .opt(&create.initializer);
        }
        Expression::ArrayInitializer(init) => {
            c.all(&init.elements);
        }
        Expression::As(as_expr) => {
            c.boxed(&as_expr.expression).one(&as_expr.target_type);
        }
        Expression::Assignment(assign) => {
            c.boxed(&assign.left).boxed(&assign.right);
        }
        Expression::Binary(binary) => {
            c.boxed(&binary.left).boxed(&binary.right);
        }
        Expression::Cast(cast) => {
            c.one(&cast.target_type).boxed(&cast.expression);
        }
        Expression::Checked(checked) => {
            c.boxed(&checked.expression);
        }
        Expression::Unchecked(unchecked) => {
            c.boxed(&unchecked.expression);
        }
        Expression::Conditional(cond) => {
            c.boxed(&cond.condition)
                .boxed(&cond.true_expression)
                .boxed(&cond.false_expression);
        }
        Expression::DefaultValue(default) => {
            c.one(&default.target_type);
        }
        Expression::Direction(direction) => {
            c.boxed(&direction.expression);
        }
        Expression::Identifier(ident) => {
            c.all(&ident.type_arguments);
        }
        Expression::Indexer(indexer) => {
            c.boxed(&indexer.target).all(&indexer.arguments);
        }
        Expression::Invocation(invocation) => {
            c.boxed(&invocation.target).all(&invocation.arguments);
        }
        Expression::Is(is_expr) => {
            c.boxed(&is_expr.expression).one(&is_expr.target_type);
        }
        Expression::Lambda(lambda) => {
            c.all(&lambda.parameters).one(&lambda.body);
        }
        Expression::MemberReference(member) => {
            c.boxed(&member.target).all(&member.type_arguments);
        }
        Expression::NamedArgument(named) => {
            c.boxed(&named.expression);
        }
        Expression::Named(named) => {
            c.boxed(&named.expression);
        }
        Expression::ObjectCreate(create) => {
            c.one(&create.created_type)
                .all(&create.arguments)
                .opt(&create.initializer);
        }
        Expression::AnonymousTypeCreate(create) => {
            c.all(&create.initializers);
        }
        Expression::Parenthesized(paren) => {
            c.boxed(&paren.expression);
        }
        Expression::PointerReference(pointer) => {
            c.boxed(&pointer.target).all(&pointer.type_arguments);
        }
        Expression::SizeOf(size_of) => {
            c.one(&size_of.target_type);
        }
        Expression::StackAlloc(alloc) => {
            c.one(&alloc.element_type).boxed(&alloc.count_expression);
        }
        Expression::TypeOf(type_of) => {
            c.one(&type_of.target_type);
        }
        Expression::TypeReference(reference) => {
            c.one(&reference.target_type);
        }
        Expression::Unary(unary) => {
            c.boxed(&unary.expression);
        }
        Expression::Query(query) => {
            c.all(&query.clauses);
        }
        Expression::BaseReference
        | Expression::NullReference
        | Expression::ThisReference
        | Expression::Primitive(_)
        | Expression::Pattern(_) => {}
    }
}

fn statement_children<'a>(c: &mut Children<'a>, stmt: &'a Statement) {
    match stmt {
        Statement::Block(block) => {
            c.all(&block.statements);
        }
        Statement::Checked(checked) => {
            c.one(&checked.body);
        }
        Statement::Unchecked(unchecked) => {
            c.one(&unchecked.body);
        }
        Statement::Unsafe(unsafe_stmt) => {
            c.one(&unsafe_stmt.body);
        }
        Statement::DoWhile(do_while) => {
            c.boxed(&do_while.embedded_statement)
                .one(&do_while.condition);
        }
        Statement::Expression(expr) => {
            c.one(&expr.expression);
        }
        Statement::Fixed(fixed) => {
            c.one(&fixed.variable_type)
                .all(&fixed.variables)
                .boxed(&fixed.embedded_statement);
        }
        Statement::Foreach(foreach) => {
            c.one(&foreach.variable_type)
                .one(&foreach.in_expression)
                .boxed(&foreach.embedded_statement);
        }
        Statement::For(for_stmt) => {
            c.all(&for_stmt.initializers)
                .opt(&for_stmt.condition)
                .all(&for_stmt.iterators)
                .boxed(&for_stmt.embedded_statement);
        }
        Statement::GotoCase(goto) => {
            c.one(&goto.label_expression);
        }
        Statement::IfElse(if_else) => {
            c.one(&if_else.condition).boxed(&if_else.true_statement);
            if let Some(false_statement) = &if_else.false_statement {
                c.boxed(false_statement);
            }
        }
        Statement::Lock(lock) => {
            c.one(&lock.expression).boxed(&lock.embedded_statement);
        }
        Statement::Return(ret) => {
            c.opt(&ret.expression);
        }
        Statement::Switch(switch) => {
            c.one(&switch.expression).all(&switch.sections);
        }
        Statement::Throw(throw) => {
            c.opt(&throw.expression);
        }
        Statement::TryCatch(try_catch) => {
            c.one(&try_catch.try_block)
                .all(&try_catch.catch_clauses)
                .opt(&try_catch.finally_block);
        }
        Statement::Using(using) => {
            c.one(&using.resource).boxed(&using.embedded_statement);
        }
        Statement::VariableDeclaration(decl) => {
            c.one(&decl.variable_type).all(&decl.variables);
        }
        Statement::While(while_stmt) => {
            c.one(&while_stmt.condition)
                .boxed(&while_stmt.embedded_statement);
        }
        Statement::YieldReturn(yield_return) => {
            c.one(&yield_return.expression);
        }
        Statement::Break
        | Statement::Continue
        | Statement::Empty
        | Statement::Goto(_)
        | Statement::GotoDefault
        | Statement::YieldBreak
        | Statement::Label(_)
        | Statement::Comment(_)
        | Statement::Directive(_)
        | Statement::Pattern(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_method() -> MethodDeclaration {
        let mut method = MethodDeclaration::new(AstType::primitive("void"), "Run");
        method.parameters.push(ParameterDeclaration::new(
            AstType::primitive("int"),
            "count",
        ));
        method.body = Some(BlockStatement::new(vec![Statement::returns(None)]));
        method
    }

    #[test]
    fn test_block_statement_normalizes_to_block() {
        let stmt = Statement::block(vec![]);
        let node = NodeRef::from(&stmt);
        assert!(matches!(node, NodeRef::Block(_)));
        assert_eq!(node.kind(), NodeKind::Block);
    }

    #[test]
    fn test_children_follow_print_order() {
        let method = sample_method();
        let kinds: Vec<NodeKind> = NodeRef::Method(&method)
            .children()
            .iter()
            .map(NodeRef::kind)
            .collect();
        assert_eq!(
            kinds,
            vec![NodeKind::PrimitiveType, NodeKind::Parameter, NodeKind::Block]
        );
    }

    #[test]
    fn test_preorder_visits_parents_first() {
        let method = sample_method();
        let kinds: Vec<NodeKind> = NodeRef::Method(&method)
            .preorder()
            .iter()
            .map(NodeRef::kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Method,
                NodeKind::PrimitiveType,
                NodeKind::Parameter,
                NodeKind::PrimitiveType,
                NodeKind::Block,
                NodeKind::Return,
            ]
        );
    }

    #[test]
    fn test_ptr_eq_distinguishes_equal_values() {
        let a = Expression::identifier("x");
        let b = Expression::identifier("x");
        assert_eq!(a, b);
        assert!(NodeRef::from(&a).ptr_eq(&NodeRef::from(&a)));
        assert!(!NodeRef::from(&a).ptr_eq(&NodeRef::from(&b)));
    }

    #[test]
    fn test_nested_pattern_contents_flatten_into_placeholder() {
        let pattern = Pattern::Choice {
            alternatives: vec![
                PatternNode::Expression(Expression::identifier("a")),
                PatternNode::Pattern(Pattern::Optional {
                    child: Box::new(PatternNode::Expression(Expression::NullReference)),
                }),
                PatternNode::Value(Literal::Int(1)),
            ],
        };
        let kinds: Vec<NodeKind> = NodeRef::Pattern(&pattern)
            .children()
            .iter()
            .map(NodeRef::kind)
            .collect();
        assert_eq!(kinds, vec![NodeKind::Identifier, NodeKind::NullReference]);
    }
}
