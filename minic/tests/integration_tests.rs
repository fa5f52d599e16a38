use insta::assert_snapshot;
use minic::{compile_file, render_file, CompileError, Emit};
use std::fs;
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// A fresh scratch directory for tests that write files.
fn scratch_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("minic-{}-{}", std::process::id(), test));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn render(name: &str) -> String {
    render_file(&fixture(name), Emit::Ast).unwrap()
}

fn diagnostic(name: &str) -> String {
    match render_file(&fixture(name), Emit::Ast) {
        Err(err @ CompileError::Parse(_)) => err.to_string(),
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn smoke_main() {
    assert_snapshot!(render("main.c"), @r###"
    (Program
      (Function int main ([]) [(DeclarationStatement int a (Constant 2)), (ReturnStatement (Variable a))])
    )
    "###);
}

#[test]
fn branches() {
    assert_snapshot!(render("branches.c"), @r###"
    (Program
      (Function int sign ([(Argument int x)]) [(IfStatement (BinaryOp < (Variable x) (Constant 0)) [(ReturnStatement (UnaryOp - (Constant 1)))] [(IfStatement (BinaryOp == (Variable x) (Constant 0)) [(ReturnStatement (Constant 0))])]), (ReturnStatement (Constant 1))])
      (Function int main ([]) [(DeclarationStatement float scale (Constant 1.5)), (AssignmentStatement = total (BinaryOp * (BinaryOp + (Variable scale) (Constant 1)) (Variable scale))), (ReturnStatement (Variable total))])
    )
    "###);
}

#[test]
fn tokens() {
    let tokens = render_file(&fixture("main.c"), Emit::Tokens).unwrap();
    let lines: Vec<_> = tokens.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Keyword int",
            "Identifier main",
            "OpenParen (",
            "CloseParen )",
            "OpenBrace {",
            "Keyword int",
            "Identifier a",
            "AssignmentOperator =",
            "Integer 2",
            "Semicolon ;",
            "Keyword return",
            "Identifier a",
            "Semicolon ;",
            "CloseBrace }",
        ]
    );
}

#[test]
fn missing_semicolon() {
    let message = diagnostic("missing_semicolon.c");
    assert!(
        message.starts_with("error: expected Semicolon, found Keyword `return` at "),
        "{}",
        message
    );
    assert!(message.ends_with("missing_semicolon.c:3:5"), "{}", message);
}

#[test]
fn missing_brace() {
    let message = diagnostic("missing_brace.c");
    assert!(
        message.starts_with("error: expected CloseBrace, found end of input at "),
        "{}",
        message
    );
    assert!(message.ends_with("missing_brace.c:2:14"), "{}", message);
}

#[test]
fn missing_file() {
    let err = render_file(&fixture("does_not_exist.c"), Emit::Ast).unwrap_err();
    assert!(matches!(err, CompileError::Read { .. }));
}

#[test]
fn writes_assembly_file_next_to_input() {
    let dir = scratch_dir("default-output");
    let input = dir.join("main.c");
    fs::copy(fixture("main.c"), &input).unwrap();

    let output = compile_file(&input, None, Emit::Ast).unwrap();
    assert_eq!(output, dir.join("main.s"));
    assert_eq!(fs::read_to_string(&output).unwrap(), render("main.c"));
}

#[test]
fn writes_explicit_output() {
    let dir = scratch_dir("explicit-output");
    let output = dir.join("tokens.txt");

    let written = compile_file(&fixture("main.c"), Some(&output), Emit::Tokens).unwrap();
    assert_eq!(written, output);
    assert!(fs::read_to_string(&output)
        .unwrap()
        .starts_with("Keyword int\nIdentifier main\n"));
}

#[test]
fn parse_failure_writes_nothing() {
    let dir = scratch_dir("no-output");
    let input = dir.join("broken.c");
    fs::copy(fixture("missing_brace.c"), &input).unwrap();

    assert!(compile_file(&input, None, Emit::Ast).is_err());
    assert!(!dir.join("broken.s").exists());
}
