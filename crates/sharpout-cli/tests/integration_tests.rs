//! Integration tests for the sharpout CLI
//!
//! These tests verify the CLI behavior end-to-end

use assert_cmd::Command;
use predicates::prelude::*;
use sharpout_core::ast::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const PROGRAM_ALLMAN: &str =
    "class Program\n{\n\tstatic void Main()\n\t{\n\t\tConsole.WriteLine(\"hi\");\n\t}\n}\n";
const PROGRAM_KR: &str =
    "class Program {\n\tstatic void Main() {\n\t\tConsole.WriteLine(\"hi\");\n\t}\n}\n";

/// Helper function to create a test CLI command
#[allow(deprecated)]
fn cli() -> Command {
    Command::cargo_bin("sharpout").unwrap()
}

fn program_tree() -> SyntaxTree {
    let mut main = MethodDeclaration::new(AstType::primitive("void"), "Main");
    main.modifiers = vec![Modifier::Static];
    main.body = Some(BlockStatement::new(vec![Statement::expression(
        Expression::invoke(
            Expression::member(Expression::identifier("Console"), "WriteLine"),
            vec![Expression::string("hi")],
        ),
    )]));

    let mut program = TypeDeclaration::new(ClassType::Class, "Program");
    program.members = vec![TypeMember::Method(main)];
    SyntaxTree {
        members: vec![NamespaceMember::Type(program)],
    }
}

fn malformed_tree() -> SyntaxTree {
    let mut broken = TypeDeclaration::new(ClassType::Class, "Broken");
    broken.members = vec![TypeMember::Field(FieldDeclaration {
        attributes: vec![],
        modifiers: vec![],
        return_type: AstType::primitive("int"),
        variables: vec![],
    })];
    SyntaxTree {
        members: vec![NamespaceMember::Type(broken)],
    }
}

fn write_tree(dir: &Path, name: &str, tree: &SyntaxTree) -> String {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(tree).unwrap()).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_help_command() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "sharpout renders C# syntax trees",
        ))
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_version_command() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(VERSION));
}

#[test]
fn test_version_detailed() {
    cli()
        .args(["version", "--detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("sharpout {VERSION}")))
        .stdout(predicate::str::contains("Build information:"))
        .stdout(predicate::str::contains("OS:"));
}

#[test]
fn test_print_requires_inputs() {
    cli().arg("print").assert().failure().code(2);
}

#[test]
fn test_print_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_tree(temp_dir.path(), "Program.ast.json", &program_tree());

    cli()
        .args(["print", &input])
        .assert()
        .success()
        .stdout(PROGRAM_ALLMAN);
}

#[test]
fn test_print_with_preset_flag() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_tree(temp_dir.path(), "Program.ast.json", &program_tree());

    cli()
        .args(["print", "--preset", "kr", &input])
        .assert()
        .success()
        .stdout(PROGRAM_KR);
}

#[test]
fn test_print_uses_discovered_config() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_tree(temp_dir.path(), "Program.ast.json", &program_tree());
    fs::write(
        temp_dir.path().join(".sharpoutrc.json"),
        r#"{ "formatter": { "preset": "kr", "indentStyle": "spaces", "indentSize": 2 } }"#,
    )
    .unwrap();

    cli()
        .args(["print", &input])
        .assert()
        .success()
        .stdout("class Program {\n  static void Main() {\n    Console.WriteLine(\"hi\");\n  }\n}\n");
}

#[test]
fn test_print_with_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_tree(temp_dir.path(), "Program.ast.json", &program_tree());
    let config = temp_dir.path().join("style.toml");
    fs::write(&config, "[formatter]\npreset = \"kr\"\n").unwrap();

    cli()
        .args(["print", "--config", config.to_str().unwrap(), &input])
        .assert()
        .success()
        .stdout(PROGRAM_KR);
}

#[test]
fn test_write_then_check() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_tree(temp_dir.path(), "Program.ast.json", &program_tree());
    let output = temp_dir.path().join("Program.cs");

    cli()
        .args(["--no-color", "print", "--write", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("Written: 1 file"));
    assert_eq!(fs::read_to_string(&output).unwrap(), PROGRAM_ALLMAN);

    cli()
        .args(["--no-color", "print", "--check", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("All files match"));

    cli()
        .args(["print", "--check", "--preset", "kr", &input])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Would reformat:"));
    assert_eq!(fs::read_to_string(&output).unwrap(), PROGRAM_ALLMAN);
}

#[test]
fn test_write_and_check_conflict() {
    cli()
        .args(["print", "--write", "--check", "tree.ast.json"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_directory_inputs_are_walked() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("nested");
    fs::create_dir(&nested).unwrap();
    write_tree(temp_dir.path(), "A.ast.json", &program_tree());
    write_tree(&nested, "B.ast.json", &program_tree());
    fs::write(temp_dir.path().join("notes.json"), "{}").unwrap();

    cli()
        .args(["-j", "2", "print", "--write", temp_dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Files checked: 2"));

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("A.cs")).unwrap(),
        PROGRAM_ALLMAN
    );
    assert_eq!(
        fs::read_to_string(nested.join("B.cs")).unwrap(),
        PROGRAM_ALLMAN
    );
    assert!(!temp_dir.path().join("notes.cs").exists());
}

#[test]
fn test_multiple_files_to_stdout_are_labelled() {
    let temp_dir = TempDir::new().unwrap();
    let first = write_tree(temp_dir.path(), "A.ast.json", &program_tree());
    let second = write_tree(temp_dir.path(), "B.ast.json", &program_tree());

    cli()
        .args(["print", &first, &second])
        .assert()
        .success()
        .stdout(format!("// {first}\n{PROGRAM_ALLMAN}// {second}\n{PROGRAM_ALLMAN}"));
}

#[test]
fn test_malformed_tree_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_tree(temp_dir.path(), "Broken.ast.json", &malformed_tree());

    cli()
        .args(["print", &input])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Malformed Field at SyntaxTree > TypeDeclaration > Field",
        ));
}

#[test]
fn test_invalid_json_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("bad.ast.json");
    fs::write(&input, "{ not json").unwrap();

    cli()
        .args(["print", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
}

#[test]
fn test_missing_input_fails() {
    cli()
        .args(["print", "does/not/exist.ast.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does/not/exist.ast.json"));
}

#[test]
fn test_map_outputs_spans() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_tree(temp_dir.path(), "Program.ast.json", &program_tree());

    let output = cli().args(["map", &input]).output().unwrap();
    assert!(output.status.success());

    let spans: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let spans = spans.as_array().unwrap();
    assert_eq!(spans[0]["kind"], "SyntaxTree");
    assert_eq!(spans[0]["depth"], 0);
    assert!(spans.iter().any(|span| span["kind"] == "Invocation"));
}

#[test]
fn test_map_with_text() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_tree(temp_dir.path(), "Program.ast.json", &program_tree());

    let output = cli()
        .args(["map", "--with-text", "--preset", "kr", &input])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["text"], PROGRAM_KR);
    assert_eq!(value["nodes"][1]["kind"], "TypeDeclaration");
}

#[test]
fn test_config_init_json() {
    let temp_dir = TempDir::new().unwrap();

    cli()
        .current_dir(temp_dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".sharpoutrc.json"));

    let content = fs::read_to_string(temp_dir.path().join(".sharpoutrc.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["formatter"]["preset"], "allman");
    assert_eq!(value["formatter"]["indentStyle"], "tabs");

    // A second init refuses to overwrite
    cli()
        .current_dir(temp_dir.path())
        .args(["config", "init"])
        .assert()
        .failure();

    cli()
        .current_dir(temp_dir.path())
        .args(["config", "init", "--force", "--preset", "mono"])
        .assert()
        .success();
    let content = fs::read_to_string(temp_dir.path().join(".sharpoutrc.json")).unwrap();
    assert!(content.contains("\"mono\""));
}

#[test]
fn test_config_init_toml_and_yaml() {
    let temp_dir = TempDir::new().unwrap();

    cli()
        .current_dir(temp_dir.path())
        .args(["config", "init", "--format", "toml"])
        .assert()
        .success();
    let toml_content = fs::read_to_string(temp_dir.path().join(".sharpoutrc.toml")).unwrap();
    assert!(toml_content.contains("[formatter]"));

    cli()
        .current_dir(temp_dir.path())
        .args(["config", "init", "--format", "yaml"])
        .assert()
        .success();
    let yaml_content = fs::read_to_string(temp_dir.path().join("sharpout.yaml")).unwrap();
    assert!(yaml_content.contains("preset: allman"));
}

#[test]
fn test_config_validate() {
    let temp_dir = TempDir::new().unwrap();
    let good = temp_dir.path().join("good.json");
    fs::write(&good, r#"{ "formatter": { "preset": "kr" } }"#).unwrap();

    cli()
        .args(["config", "validate", good.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("Preset: kr"));

    let bad = temp_dir.path().join("bad.json");
    fs::write(&bad, r#"{ "formatter": { "indentSize": 0 } }"#).unwrap();

    cli()
        .args(["config", "validate", bad.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("indentSize must be between 1 and 16"));

    let unknown = temp_dir.path().join("unknown.json");
    fs::write(&unknown, r#"{ "formatter": { "bracePlacement": "kr" } }"#).unwrap();

    cli()
        .args(["config", "validate", unknown.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bracePlacement"));
}

#[test]
fn test_config_show_resolved() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("sharpout.json");
    fs::write(&config, r#"{ "formatter": { "preset": "mono" } }"#).unwrap();

    cli()
        .args(["config", "show", "--resolved", "--config", config.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resolved Policy:"))
        .stdout(predicate::str::contains(
            "\"before_method_call_parentheses\": true",
        ));
}

#[test]
fn test_config_schema() {
    cli()
        .args(["config", "schema"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sharpout configuration"))
        .stdout(predicate::str::contains("indentSwitchBody"));
}

#[test]
fn test_generate_completion() {
    cli()
        .args(["--generate-completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sharpout"));
}
