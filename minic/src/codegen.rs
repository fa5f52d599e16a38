//! The boundary between the front end and code generation.

use minic_parser::ast::Program;

/// Consumes a parsed [`Program`] and produces the text written to the `.s` output file.
///
/// Implementations receive the tree by shared reference and must not rely on mutating it.
pub trait CodeGenerator {
    fn generate(&mut self, program: &Program) -> String;
}

/// Emits the tree itself as s-expressions, one function per line.
#[derive(Debug, Default)]
pub struct AstDump;

impl CodeGenerator for AstDump {
    fn generate(&mut self, program: &Program) -> String {
        let mut out = String::from("(Program\n");
        for function in &program.functions {
            out.push_str("  ");
            out.push_str(&function.to_string());
            out.push('\n');
        }
        out.push_str(")\n");
        out
    }
}
