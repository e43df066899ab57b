//! Stub declaration generator.
//!
//! Emits a declaration-only view of the edited public surface in the stub
//! DSL: a package header, classes with their constructor parameter lists
//! and attribute declarations, and function signatures. Every parameter
//! is typed as the untyped/nullable placeholder; default literals are
//! canonicalized. Constant and attribute-bound parameters are no longer
//! part of the public surface and are omitted.

use std::fmt::Write;

use crate::model::{Class, Function, FunctionResult, Module, Parameter};

use super::{GenerationError, canonical_default, partition_parameters};

/// Placeholder type of every stub parameter and attribute.
const UNTYPED: &str = "Any?";

/// Generate the stub text for one module.
pub fn generate_stub_module(module: &Module) -> Result<String, GenerationError> {
    let mut ctx = StubContext::new();
    ctx.emit_module(module)?;
    Ok(ctx.output)
}

struct StubContext {
    output: String,
    indent_level: usize,
}

impl StubContext {
    fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
        }
    }

    fn write_line(&mut self, text: &str) {
        let _ = writeln!(self.output, "{}{}", "    ".repeat(self.indent_level), text);
    }

    fn write_blank_line(&mut self) {
        let _ = writeln!(self.output);
    }

    fn emit_module(&mut self, module: &Module) -> Result<(), GenerationError> {
        self.write_line(&format!("package {}", module.name));

        for class in module.classes.iter().filter(|c| c.is_public) {
            self.write_blank_line();
            self.emit_class(class)?;
        }
        for function in module.functions.iter().filter(|f| f.is_public) {
            self.write_blank_line();
            self.emit_function(function)?;
        }

        Ok(())
    }

    fn emit_class(&mut self, class: &Class) -> Result<(), GenerationError> {
        let constructor_parameters = match class.constructor() {
            Some(constructor) => {
                let partition = partition_parameters(constructor)?;
                partition.visible().cloned().collect()
            }
            None => Vec::new(),
        };

        let header = format!("class {}({})", class.name, render_parameters(&constructor_parameters));

        let methods: Vec<&Function> = class
            .methods
            .iter()
            .filter(|m| m.is_public && !m.is_constructor())
            .collect();

        if constructor_parameters.is_empty() && class.attributes.is_empty() && methods.is_empty() {
            self.write_line(&header);
            return Ok(());
        }

        self.write_line(&format!("{header} {{"));
        self.indent_level += 1;

        for parameter in &constructor_parameters {
            self.write_line(&format!("attr {}: {UNTYPED}", parameter.name));
        }
        for attribute in &class.attributes {
            self.write_line(&format!("attr {}: {UNTYPED}", attribute.name));
        }
        for method in methods {
            self.emit_function(method)?;
        }

        self.indent_level -= 1;
        self.write_line("}");
        Ok(())
    }

    fn emit_function(&mut self, function: &Function) -> Result<(), GenerationError> {
        let partition = partition_parameters(function)?;
        let parameters: Vec<Parameter> = partition.visible().cloned().collect();

        let mut line = format!("fun {}({})", function.name, render_parameters(&parameters));
        if let Some(results) = render_results(&function.results) {
            line.push_str(&results);
        }
        self.write_line(&line);
        Ok(())
    }
}

fn render_parameters(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .map(|parameter| match &parameter.default_value {
            Some(default) => format!(
                "{}: {UNTYPED} or {}",
                parameter.name,
                canonical_default(default)
            ),
            None => format!("{}: {UNTYPED}", parameter.name),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// `-> name: type` for a single result, `-> [a: A, b: B]` for several.
fn render_results(results: &[FunctionResult]) -> Option<String> {
    let rendered: Vec<String> = results.iter().map(render_result).collect();
    match rendered.len() {
        0 => None,
        1 => Some(format!(" -> {}", rendered[0])),
        _ => Some(format!(" -> [{}]", rendered.join(", "))),
    }
}

fn render_result(result: &FunctionResult) -> String {
    let type_hint = if result.type_hint.is_empty() {
        UNTYPED
    } else {
        &result.type_hint
    };
    format!("{}: {}", result.name, type_hint)
}
