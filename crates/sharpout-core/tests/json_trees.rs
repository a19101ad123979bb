//! Trees handed over as JSON by an external parser

use sharpout_core::ast::SyntaxTree;
use sharpout_core::{ErrorKind, FormattingPolicy, print, print_with_map};

const DEMO: &str = r#"{
  "members": [
    {
      "kind": "Using",
      "import": { "kind": "Simple", "identifier": { "name": "System" } }
    },
    {
      "kind": "Namespace",
      "name": { "kind": "Simple", "identifier": { "name": "Demo" } },
      "members": [
        {
          "kind": "Type",
          "class_type": "class",
          "modifiers": ["public", "static"],
          "name": { "name": "Program" },
          "members": [
            {
              "kind": "Method",
              "modifiers": ["static"],
              "return_type": { "kind": "Primitive", "keyword": "void" },
              "name": { "name": "Main" },
              "body": {
                "statements": [
                  {
                    "kind": "Expression",
                    "expression": {
                      "kind": "Invocation",
                      "target": {
                        "kind": "MemberReference",
                        "target": { "kind": "Identifier", "identifier": { "name": "Console" } },
                        "member_name": { "name": "WriteLine" }
                      },
                      "arguments": [
                        { "kind": "Primitive", "value": { "type": "String", "value": "hi" } }
                      ]
                    }
                  },
                  { "kind": "Return" }
                ]
              }
            }
          ]
        }
      ]
    }
  ]
}"#;

#[test]
fn test_demo_tree_prints() {
    let tree = SyntaxTree::from_json(DEMO).unwrap();
    assert_eq!(
        print(&tree, &FormattingPolicy::kr()).unwrap(),
        "using System;\n\nnamespace Demo {\n\tpublic static class Program {\n\t\tstatic void Main() {\n\t\t\tConsole.WriteLine(\"hi\");\n\t\t\treturn;\n\t\t}\n\t}\n}\n"
    );
}

#[test]
fn test_serialized_tree_prints_identically() {
    let tree = SyntaxTree::from_json(DEMO).unwrap();
    let json = serde_json::to_string(&tree).unwrap();
    let reread = SyntaxTree::from_json(&json).unwrap();
    assert_eq!(reread, tree);

    let policy = FormattingPolicy::allman();
    assert_eq!(print(&reread, &policy).unwrap(), print(&tree, &policy).unwrap());
}

#[test]
fn test_map_serializes_to_json() {
    let tree = SyntaxTree::from_json(DEMO).unwrap();
    let (_, spans) = print_with_map(&tree, &FormattingPolicy::kr()).unwrap();
    let value = serde_json::to_value(&spans).unwrap();

    assert_eq!(value[0]["kind"], "SyntaxTree");
    assert_eq!(value[0]["start"]["line"], 1);
    assert_eq!(value[1]["kind"], "Using");
    assert_eq!(value[1]["end"]["column"], 14);
}

#[test]
fn test_unknown_node_kind_is_a_serialization_error() {
    let err = SyntaxTree::from_json(r#"{"members":[{"kind":"Module"}]}"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Serialization);
}
