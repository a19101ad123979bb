use super::Printer;
use crate::ast::{ArraySpecifier, AstType, NodeRef};
use crate::sink::{TokenClass, TokenRole, TokenWriter};
use crate::Result;

impl<'a, W: TokenWriter> Printer<'a, W> {
    pub(super) fn visit_type(&mut self, ty: &'a AstType) -> Result<()> {
        match ty {
            AstType::Primitive(primitive) => {
                self.writer.write_primitive_type(&primitive.keyword);
                self.at_line_start = false;
            }
            AstType::Simple(simple) => {
                let class = self.type_name_class();
                self.identifier(&simple.identifier, class)?;
                self.chevron_list(&simple.type_arguments)?;
            }
            AstType::Member(member) => {
                self.visit_child(&*member.target)?;
                if member.is_double_colon {
                    self.token(TokenRole::DoubleColon, "::");
                } else {
                    self.token(TokenRole::Dot, ".");
                }
                let class = self.type_name_class();
                self.identifier(&member.member_name, class)?;
                self.chevron_list(&member.type_arguments)?;
            }
            AstType::Composed(composed) => {
                self.visit_child(&*composed.base_type)?;
                if composed.has_nullable_specifier {
                    self.token(TokenRole::Nullable, "?");
                }
                for _ in 0..composed.pointer_rank {
                    self.token(TokenRole::Pointer, "*");
                }
                self.all(&composed.array_specifiers)?;
            }
            AstType::Pattern(pattern) => self.visit_pattern(pattern)?,
        }
        Ok(())
    }

    pub(super) fn visit_array_specifier(&mut self, spec: &'a ArraySpecifier) -> Result<()> {
        if spec.dimensions == 0 {
            return Err(self.malformed("array specifier needs at least one dimension"));
        }
        self.token(TokenRole::OpenBracket, "[");
        for _ in 1..spec.dimensions {
            self.token(TokenRole::Comma, ",");
        }
        self.token(TokenRole::CloseBracket, "]");
        Ok(())
    }

    /// Names under a namespace or using directive are namespaces
    fn type_name_class(&self) -> TokenClass {
        let owner = self
            .ancestors()
            .find(|node| !matches!(node, NodeRef::Type(_)));
        match owner {
            Some(NodeRef::Namespace(_) | NodeRef::Using(_) | NodeRef::UsingAlias(_)) => {
                TokenClass::Namespace
            }
            _ => TokenClass::Type,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{AstType, ComposedType, NodeRef};
    use crate::error::SharpoutError;
    use crate::policy::FormattingPolicy;
    use crate::printer::print_node;

    fn render(ty: &AstType) -> String {
        print_node(NodeRef::from(ty), &FormattingPolicy::default()).unwrap()
    }

    #[test]
    fn test_generic_and_qualified_types() {
        let ty = AstType::generic(
            "Dictionary",
            vec![AstType::primitive("string"), AstType::qualified("System.Uri")],
        );
        assert_eq!(render(&ty), "Dictionary<string, System.Uri>");
    }

    #[test]
    fn test_composed_type_specifiers() {
        assert_eq!(render(&AstType::array(AstType::primitive("int"), &[1, 2])), "int[][,]");
        assert_eq!(render(&AstType::nullable(AstType::primitive("int"))), "int?");

        let pointer = AstType::Composed(ComposedType {
            base_type: Box::new(AstType::primitive("byte")),
            has_nullable_specifier: false,
            pointer_rank: 2,
            array_specifiers: vec![],
        });
        assert_eq!(render(&pointer), "byte**");
    }

    #[test]
    fn test_zero_dimension_array_is_malformed() {
        let ty = AstType::array(AstType::primitive("int"), &[0]);
        let err = print_node(NodeRef::from(&ty), &FormattingPolicy::default()).unwrap_err();
        assert!(matches!(err, SharpoutError::MalformedTree { .. }));
        assert!(err.to_string().contains("ComposedType > ArraySpecifier"));
    }
}
