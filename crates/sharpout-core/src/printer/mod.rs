//! Policy-driven pretty-printer
//!
//! Walks a syntax tree and emits write events into a [`TokenWriter`]. Every
//! layout decision that the grammar leaves open (brace placement, spaces,
//! blank lines) is taken from a [`FormattingPolicy`]; the token sequence
//! itself never depends on the policy.
//!
//! # Example
//!
//! ```rust,ignore
//! use sharpout_core::{print, FormattingPolicy};
//!
//! let tree: SyntaxTree = serde_json::from_str(&json)?;
//! let text = print(&tree, &FormattingPolicy::kr())?;
//! ```
//!
//! A print call owns its sink and container stack. The tree and the policy
//! are only borrowed, so independent calls may share both across threads.

mod declarations;
mod expressions;
mod keywords;
mod patterns;
mod statements;
mod types;

use crate::ast::{Identifier, Modifier, NodeRef, SyntaxTree};
use crate::error::SharpoutError;
use crate::policy::{BraceStyle, FormattingPolicy, SpacingSettings};
use crate::sink::{
    NodeSpan, PositionTracker, RequiredSpaces, TextSink, TokenClass, TokenRole, TokenWriter,
};
use crate::Result;

/// Print a whole syntax tree to text
pub fn print(tree: &SyntaxTree, policy: &FormattingPolicy) -> Result<String> {
    print_node(NodeRef::SyntaxTree(tree), policy)
}

/// Print a whole syntax tree and record the text span of every node
///
/// Spans are listed in pre-order, matching [`NodeRef::preorder`].
pub fn print_with_map(
    tree: &SyntaxTree,
    policy: &FormattingPolicy,
) -> Result<(String, Vec<NodeSpan>)> {
    let writer = RequiredSpaces::new(PositionTracker::new(text_sink(policy)));
    let writer = print_to(NodeRef::SyntaxTree(tree), policy, writer)?;
    let (sink, spans) = writer.into_inner().into_parts();
    Ok((sink.finish()?, spans))
}

/// Print any subtree to text
pub fn print_node(node: NodeRef<'_>, policy: &FormattingPolicy) -> Result<String> {
    let writer = RequiredSpaces::new(text_sink(policy));
    let writer = print_to(node, policy, writer)?;
    writer.into_inner().finish()
}

/// Drive an arbitrary writer pipeline and hand it back once the walk is done
pub fn print_to<'a, W: TokenWriter>(
    node: NodeRef<'a>,
    policy: &'a FormattingPolicy,
    writer: W,
) -> Result<W> {
    let mut printer = Printer::new(writer, policy);
    tracing::debug!(root = %node.kind(), "Printing syntax tree");
    printer.visit(node)?;
    if !printer.containers.is_empty() {
        return Err(SharpoutError::UnbalancedNodes {
            message: format!("{} node(s) left open", printer.containers.len()),
        });
    }
    tracing::debug!(
        nodes = printer.node_count,
        end = ?printer.writer.location(),
        "Finished printing"
    );
    Ok(printer.writer)
}

fn text_sink(policy: &FormattingPolicy) -> TextSink<String> {
    TextSink::new(String::new())
        .with_indent_unit(policy.indentation.unit())
        .with_line_ending(policy.new_line.as_str())
}

/// A node currently being printed, with its children resolved on demand
struct Container<'a> {
    node: NodeRef<'a>,
    children: Option<Vec<NodeRef<'a>>>,
}

/// State of one print session
pub struct Printer<'a, W: TokenWriter> {
    writer: W,
    policy: &'a FormattingPolicy,
    containers: Vec<Container<'a>>,
    at_line_start: bool,
    node_count: usize,
}

impl<'a, W: TokenWriter> Printer<'a, W> {
    pub fn new(writer: W, policy: &'a FormattingPolicy) -> Self {
        Self {
            writer,
            policy,
            containers: Vec::new(),
            at_line_start: true,
            node_count: 0,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Print one node and everything below it
    pub fn visit(&mut self, node: NodeRef<'a>) -> Result<()> {
        self.start_node(node)?;
        match node {
            NodeRef::SyntaxTree(tree) => self.visit_syntax_tree(tree)?,
            NodeRef::Namespace(ns) => self.visit_namespace(ns)?,
            NodeRef::Using(using) => self.visit_using(using)?,
            NodeRef::UsingAlias(alias) => self.visit_using_alias(alias)?,
            NodeRef::ExternAlias(alias) => self.visit_extern_alias(alias)?,
            NodeRef::TypeDeclaration(ty) => self.visit_type_declaration(ty)?,
            NodeRef::Delegate(delegate) => self.visit_delegate(delegate)?,
            NodeRef::AttributeSection(section) => self.visit_attribute_section(section)?,
            NodeRef::Attribute(attribute) => self.visit_attribute(attribute)?,
            NodeRef::Field(field) => self.visit_field(field)?,
            NodeRef::FixedField(field) => self.visit_fixed_field(field)?,
            NodeRef::FixedVariableInitializer(var) => self.visit_fixed_variable(var)?,
            NodeRef::Method(method) => self.visit_method(method)?,
            NodeRef::Constructor(ctor) => self.visit_constructor(ctor)?,
            NodeRef::ConstructorInitializer(init) => self.visit_constructor_initializer(init)?,
            NodeRef::Destructor(dtor) => self.visit_destructor(dtor)?,
            NodeRef::Property(property) => self.visit_property(property)?,
            NodeRef::Indexer(indexer) => self.visit_indexer(indexer)?,
            NodeRef::Accessor(accessor) => self.visit_accessor(accessor)?,
            NodeRef::Event(event) => self.visit_event(event)?,
            NodeRef::CustomEvent(event) => self.visit_custom_event(event)?,
            NodeRef::Operator(op) => self.visit_operator(op)?,
            NodeRef::EnumMember(member) => self.visit_enum_member(member)?,
            NodeRef::Parameter(param) => self.visit_parameter(param)?,
            NodeRef::TypeParameter(param) => self.visit_type_parameter(param)?,
            NodeRef::Constraint(constraint) => self.visit_constraint(constraint)?,
            NodeRef::VariableInitializer(var) => self.visit_variable_initializer(var)?,
            NodeRef::DocumentationReference(reference) => {
                self.visit_documentation_reference(reference)?
            }
            NodeRef::Type(ty) => self.visit_type(ty)?,
            NodeRef::ArraySpecifier(spec) => self.visit_array_specifier(spec)?,
            NodeRef::Expression(expr) => self.visit_expression(expr)?,
            NodeRef::ArrayInitializer(init) => self.visit_array_initializer(init)?,
            NodeRef::Query(query) => self.visit_query(query)?,
            NodeRef::QueryClause(clause) => self.visit_query_clause(clause)?,
            NodeRef::QueryOrdering(ordering) => self.visit_query_ordering(ordering)?,
            NodeRef::Statement(stmt) => self.visit_statement(stmt)?,
            NodeRef::Block(block) => self.visit_block(block)?,
            NodeRef::VariableDeclaration(decl) => self.visit_variable_declaration(decl)?,
            NodeRef::SwitchSection(section) => self.visit_switch_section(section)?,
            NodeRef::CaseLabel(label) => self.visit_case_label(label)?,
            NodeRef::CatchClause(clause) => self.visit_catch_clause(clause)?,
            NodeRef::Comment(comment) => self.visit_comment(comment),
            NodeRef::Directive(directive) => self.visit_directive(directive),
            NodeRef::Pattern(pattern) => self.visit_pattern(pattern)?,
        }
        self.end_node(node)
    }

    fn visit_child<T>(&mut self, node: &'a T) -> Result<()>
    where
        &'a T: Into<NodeRef<'a>>,
    {
        self.visit(node.into())
    }

    // ---- container stack ----

    fn start_node(&mut self, node: NodeRef<'a>) -> Result<()> {
        let stray_in = match self.containers.last_mut() {
            // placeholders may embed nodes from anywhere
            Some(parent) if !matches!(parent.node, NodeRef::Pattern(_)) => {
                let parent_node = parent.node;
                let children = parent
                    .children
                    .get_or_insert_with(|| parent_node.children());
                if children.iter().any(|child| child.ptr_eq(&node)) {
                    None
                } else {
                    Some(parent_node)
                }
            }
            _ => None,
        };
        if let Some(parent) = stray_in {
            return Err(SharpoutError::StructureViolation {
                expected_parent: parent.kind().to_string(),
                found: node.kind().to_string(),
                path: self.path(),
            });
        }
        self.containers.push(Container {
            node,
            children: None,
        });
        self.node_count += 1;
        self.writer.start_node(node);
        Ok(())
    }

    fn end_node(&mut self, node: NodeRef<'a>) -> Result<()> {
        match self.containers.pop() {
            Some(top) if top.node.ptr_eq(&node) => {
                self.writer.end_node(node);
                Ok(())
            }
            Some(top) => Err(SharpoutError::UnbalancedNodes {
                message: format!("closing {} while {} is open", node.kind(), top.node.kind()),
            }),
            None => Err(SharpoutError::UnbalancedNodes {
                message: format!("closing {} with no open node", node.kind()),
            }),
        }
    }

    /// Kinds from the root down to the current node, e.g. `SyntaxTree > Method > Block`
    fn path(&self) -> String {
        self.containers
            .iter()
            .map(|container| container.node.kind().to_string())
            .collect::<Vec<_>>()
            .join(" > ")
    }

    fn current(&self) -> Option<NodeRef<'a>> {
        self.containers.last().map(|container| container.node)
    }

    /// Parent of the node being printed
    fn parent(&self) -> Option<NodeRef<'a>> {
        self.ancestor(1)
    }

    /// `ancestor(0)` is the current node
    fn ancestor(&self, depth: usize) -> Option<NodeRef<'a>> {
        let len = self.containers.len();
        if depth < len {
            Some(self.containers[len - 1 - depth].node)
        } else {
            None
        }
    }

    /// Current node and its ancestors, nearest first
    fn ancestors(&self) -> impl Iterator<Item = NodeRef<'a>> + '_ {
        self.containers.iter().rev().map(|container| container.node)
    }

    fn spacing(&self) -> &'a SpacingSettings {
        &self.policy.spacing
    }

    fn malformed(&self, message: impl Into<String>) -> SharpoutError {
        let kind = self
            .current()
            .map(|node| node.kind().to_string())
            .unwrap_or_else(|| "node".to_string());
        SharpoutError::malformed(kind, self.path(), message)
    }

    // ---- tokens ----

    fn keyword(&mut self, keyword: &str) {
        self.writer.write_keyword(keyword);
        self.at_line_start = false;
    }

    fn token(&mut self, role: TokenRole, text: &str) {
        self.writer.write_token(role, text);
        self.at_line_start = false;
    }

    fn space(&mut self) {
        self.writer.space();
        self.at_line_start = false;
    }

    fn space_if(&mut self, add: bool) {
        if add {
            self.space();
        }
    }

    fn new_line(&mut self) {
        self.writer.new_line();
        self.at_line_start = true;
    }

    fn new_lines(&mut self, count: usize) {
        for _ in 0..count {
            self.new_line();
        }
    }

    fn indent(&mut self) {
        self.writer.indent();
    }

    fn unindent(&mut self) {
        self.writer.unindent();
    }

    /// Name token, escaped with `@` when it would read as a keyword here
    fn identifier(&mut self, identifier: &Identifier, class: TokenClass) -> Result<()> {
        if identifier.name.is_empty() {
            return Err(self.malformed("identifier has an empty name"));
        }
        let class = identifier.class.unwrap_or(class);
        if identifier.verbatim || self.is_keyword(&identifier.name) {
            self.writer
                .write_identifier(&format!("@{}", identifier.name), class);
        } else {
            self.writer.write_identifier(&identifier.name, class);
        }
        self.at_line_start = false;
        Ok(())
    }

    /// Identifier-shaped text that is never escaped
    fn raw_identifier(&mut self, text: &str, class: TokenClass) {
        self.writer.write_identifier(text, class);
        self.at_line_start = false;
    }

    fn comma(&mut self, no_space_after: bool) {
        self.space_if(self.policy.spacing.before_comma);
        self.token(TokenRole::Comma, ",");
        self.space_if(!no_space_after && self.policy.spacing.after_comma);
    }

    /// `;` and a line break, except where the statement is part of a `for`
    /// header or the resource of a `using` statement
    fn semicolon(&mut self) {
        if !self.semicolon_suppressed() {
            self.token(TokenRole::Semicolon, ";");
            self.new_line();
        }
    }

    fn modifiers(&mut self, modifiers: &[Modifier]) {
        for modifier in modifiers {
            self.keyword(modifier.keyword());
        }
    }

    // ---- lists ----

    fn comma_separated<T>(&mut self, items: &'a [T]) -> Result<()>
    where
        &'a T: Into<NodeRef<'a>>,
    {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.comma(false);
            }
            self.visit_child(item)?;
        }
        Ok(())
    }

    fn parenthesized_list<T>(&mut self, items: &'a [T], within: bool) -> Result<()>
    where
        &'a T: Into<NodeRef<'a>>,
    {
        self.token(TokenRole::OpenParen, "(");
        if !items.is_empty() {
            self.space_if(within);
            self.comma_separated(items)?;
            self.space_if(within);
        }
        self.token(TokenRole::CloseParen, ")");
        Ok(())
    }

    /// `(node)` with optional inner spaces
    fn parenthesized<T>(&mut self, node: &'a T, within: bool) -> Result<()>
    where
        &'a T: Into<NodeRef<'a>>,
    {
        self.token(TokenRole::OpenParen, "(");
        self.space_if(within);
        self.visit_child(node)?;
        self.space_if(within);
        self.token(TokenRole::CloseParen, ")");
        Ok(())
    }

    fn bracketed_list<T>(&mut self, items: &'a [T], within: bool) -> Result<()>
    where
        &'a T: Into<NodeRef<'a>>,
    {
        self.token(TokenRole::OpenBracket, "[");
        if !items.is_empty() {
            self.space_if(within);
            self.comma_separated(items)?;
            self.space_if(within);
        }
        self.token(TokenRole::CloseBracket, "]");
        Ok(())
    }

    /// `<...>`, omitted entirely for an empty list
    fn chevron_list<T>(&mut self, items: &'a [T]) -> Result<()>
    where
        &'a T: Into<NodeRef<'a>>,
    {
        if !items.is_empty() {
            self.token(TokenRole::OpenChevron, "<");
            self.comma_separated(items)?;
            self.token(TokenRole::CloseChevron, ">");
        }
        Ok(())
    }

    fn all<T>(&mut self, items: &'a [T]) -> Result<()>
    where
        &'a T: Into<NodeRef<'a>>,
    {
        for item in items {
            self.visit_child(item)?;
        }
        Ok(())
    }

    // ---- braces ----

    fn open_brace(&mut self, style: BraceStyle) {
        tracing::trace!(?style, "Opening brace");
        match style {
            BraceStyle::DoNotChange | BraceStyle::SameLine | BraceStyle::BannerStyle => {
                if !self.at_line_start {
                    self.space();
                }
                self.token(TokenRole::OpenBrace, "{");
                self.indent();
                self.new_line();
            }
            BraceStyle::SameLineNoSpace => {
                self.token(TokenRole::OpenBrace, "{");
                self.indent();
                self.new_line();
            }
            BraceStyle::NextLine => {
                if !self.at_line_start {
                    self.new_line();
                }
                self.token(TokenRole::OpenBrace, "{");
                self.indent();
                self.new_line();
            }
            BraceStyle::NextLineIndented => {
                // a header that already ended its line gets no blank line
                if !self.at_line_start {
                    self.new_line();
                }
                self.indent();
                self.token(TokenRole::OpenBrace, "{");
                self.new_line();
            }
            BraceStyle::NextLineIndented2 => {
                if !self.at_line_start {
                    self.new_line();
                }
                self.indent();
                self.token(TokenRole::OpenBrace, "{");
                self.indent();
                self.new_line();
            }
        }
    }

    fn close_brace(&mut self, style: BraceStyle) {
        match style {
            BraceStyle::DoNotChange
            | BraceStyle::SameLine
            | BraceStyle::SameLineNoSpace
            | BraceStyle::NextLine => {
                self.unindent();
                self.token(TokenRole::CloseBrace, "}");
            }
            BraceStyle::BannerStyle | BraceStyle::NextLineIndented => {
                self.token(TokenRole::CloseBrace, "}");
                self.unindent();
            }
            BraceStyle::NextLineIndented2 => {
                self.unindent();
                self.token(TokenRole::CloseBrace, "}");
                self.unindent();
            }
        }
    }
}
