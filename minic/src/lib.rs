//! Drives the front end: read a file, lex, parse, and hand the tree to a [`CodeGenerator`].

pub mod codegen;

pub use codegen::{AstDump, CodeGenerator};

use minic_parser::ast::{Expr, Function, Stmt};
use minic_parser::lexer::lex;
use minic_parser::parser::parse;
use minic_parser::visitor::{walk_expr, walk_function, walk_stmt, Visitor};
use minic_source::{Diagnostic, Source};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::{fs, io};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("failed to read `{}`", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write `{}`", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Parse(#[from] Diagnostic),
}

/// What the output file contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Emit {
    /// One `Kind lexeme` line per token
    Tokens,
    /// The parsed tree as s-expressions
    Ast,
}

/// Lexes and parses `source`, then runs `generator` over the tree.
pub fn compile(
    source: &Source<'_>,
    generator: &mut impl CodeGenerator,
) -> Result<String, CompileError> {
    let tokens = lex(source.content);
    let program = parse(&tokens).map_err(|err| source.diagnostic(&err, err.span()))?;

    let mut counter = NodeCounter::default();
    counter.visit_program(&program);
    debug!(
        functions = counter.functions,
        statements = counter.statements,
        expressions = counter.expressions,
        "parsed {}",
        source.name
    );

    Ok(generator.generate(&program))
}

/// Renders the token sequence of `source`, one token per line.
pub fn tokens_listing(source: &Source<'_>) -> String {
    let mut out = String::new();
    for token in lex(source.content) {
        // writing into a `String` cannot fail
        let _ = writeln!(out, "{}", token);
    }
    out
}

/// The default output path: `input` with its extension replaced by `.s`.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension("s")
}

/// Reads `input` and renders it as requested by `emit`.
pub fn render_file(input: &Path, emit: Emit) -> Result<String, CompileError> {
    let content = fs::read_to_string(input).map_err(|source| CompileError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let source = Source::with_name(input.display(), &content);

    match emit {
        Emit::Tokens => Ok(tokens_listing(&source)),
        Emit::Ast => compile(&source, &mut AstDump),
    }
}

/// Compiles `input` and writes the result to `output` (or [`output_path`]).
/// Returns the path written to.
pub fn compile_file(
    input: &Path,
    output: Option<&Path>,
    emit: Emit,
) -> Result<PathBuf, CompileError> {
    let rendered = render_file(input, emit)?;
    let output = output.map_or_else(|| output_path(input), Path::to_path_buf);

    fs::write(&output, rendered).map_err(|source| CompileError::Write {
        path: output.clone(),
        source,
    })?;
    info!(input = %input.display(), output = %output.display(), "wrote output");
    Ok(output)
}

/// Counts nodes for the parse summary.
#[derive(Debug, Default)]
struct NodeCounter {
    functions: usize,
    statements: usize,
    expressions: usize,
}

impl<'ast> Visitor<'ast> for NodeCounter {
    fn visit_function(&mut self, function: &'ast Function) {
        self.functions += 1;
        walk_function(self, function);
    }

    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        self.statements += 1;
        walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &'ast Expr) {
        self.expressions += 1;
        walk_expr(self, expr);
    }
}
