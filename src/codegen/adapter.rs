//! Adapter source generator.
//!
//! Emits, per module, a thin Python layer that exposes the edited API
//! shape and forwards every public function and method to its original
//! declaration. Constant and attribute-bound parameters disappear from
//! the public signature and are supplied at the forwarding call site by
//! their original names; bounded parameters are guarded before the call.

use std::fmt::Write;

use indexmap::IndexSet;

use crate::model::{Boundary, Class, Comparison, Function, Module, Parameter};

use super::{GenerationError, ParameterPartition, partition_parameters};

/// Generate the adapter source text for one module.
pub fn generate_adapter_module(module: &Module) -> Result<String, GenerationError> {
    let mut ctx = AdapterContext::new();
    ctx.emit_module(module)?;
    Ok(ctx.output)
}

struct AdapterContext {
    output: String,
    indent_level: usize,
}

impl AdapterContext {
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
        let imports = original_imports(module);
        let classes: Vec<&Class> = module.classes.iter().filter(|c| c.is_public).collect();
        let functions: Vec<&Function> =
            module.functions.iter().filter(|f| f.is_public).collect();

        let mut wrote_section = false;

        if !imports.is_empty() {
            for import in &imports {
                self.write_line(&format!("import {import}"));
            }
            wrote_section = true;
        }

        for class in classes {
            if wrote_section {
                self.write_blank_line();
            }
            self.emit_class(class)?;
            wrote_section = true;
        }

        for function in functions {
            if wrote_section {
                self.write_blank_line();
            }
            self.emit_function(function)?;
            wrote_section = true;
        }

        Ok(())
    }

    fn emit_class(&mut self, class: &Class) -> Result<(), GenerationError> {
        self.write_line(&format!("class {}:", class.name));
        self.indent_level += 1;

        let mut wrote_member = false;

        // Synthesized attributes back the `self.<name>` references in
        // forwarding calls, so the class declares them up front.
        for attribute in &class.attributes {
            let value = attribute.default_value.as_deref().unwrap_or("None");
            self.write_line(&format!("{} = {}", attribute.name, value));
            wrote_member = true;
        }

        for method in class.methods.iter().filter(|m| m.is_public) {
            if wrote_member {
                self.write_blank_line();
            }
            self.emit_function(method)?;
            wrote_member = true;
        }

        if !wrote_member {
            self.write_line("pass");
        }

        self.indent_level -= 1;
        Ok(())
    }

    fn emit_function(&mut self, function: &Function) -> Result<(), GenerationError> {
        let partition = partition_parameters(function)?;

        self.write_line(&format!(
            "def {}({}):",
            function.name,
            render_signature(&partition)
        ));
        self.indent_level += 1;

        for parameter in partition.visible() {
            if let Some(boundary) = &parameter.boundary {
                self.emit_boundary_guard(&parameter.name, &parameter.name, boundary);
            }
        }
        // Attribute-bound parameters forward `self.<name>`, which is
        // user-mutable, so their bounds are checked on the attribute value.
        for parameter in &partition.attribute_bound {
            if let Some(boundary) = &parameter.boundary {
                let value = format!("self.{}", parameter.name);
                self.emit_boundary_guard(&parameter.name, &value, boundary);
            }
        }

        let callee = function
            .original
            .as_ref()
            .map(|o| o.qualified_name.clone())
            .unwrap_or_else(|| function.qualified_name.clone());
        self.write_line(&format!(
            "return {}({})",
            callee,
            render_arguments(&partition)
        ));

        self.indent_level -= 1;
        Ok(())
    }

    /// One guard per bounded parameter, before the forwarding call.
    /// Discrete bounds assert integer input; unrestricted ends are
    /// omitted from the range check. `value` is the checked expression
    /// (the bare name, or `self.<name>` for attribute-bound parameters);
    /// `name` is what the error message calls it.
    fn emit_boundary_guard(&mut self, name: &str, value: &str, boundary: &Boundary) {
        if boundary.is_discrete {
            self.write_line(&format!("if not isinstance({value}, int):"));
            self.indent_level += 1;
            self.write_line(&format!(
                "raise ValueError(\"{name} needs to be an integer, but {{}} was assigned.\".format({value}))"
            ));
            self.indent_level -= 1;
        }

        if let Some(check) = range_check(value, boundary) {
            self.write_line(&format!("if not {check}:"));
            self.indent_level += 1;
            self.write_line(&format!(
                "raise ValueError(\"Valid values of {name} must be in {}, but {{}} was assigned.\".format({value}))",
                boundary.interval()
            ));
            self.indent_level -= 1;
        }
    }
}

/// The chained comparison for a boundary, e.g. `2 < x <= 10`, or `None`
/// when both ends are unrestricted.
fn range_check(name: &str, boundary: &Boundary) -> Option<String> {
    let lower = comparison_op(boundary.lower.comparison)
        .map(|op| format!("{} {op} ", limit_text(boundary.lower.value)));
    let upper = comparison_op(boundary.upper.comparison)
        .map(|op| format!(" {op} {}", limit_text(boundary.upper.value)));
    if lower.is_none() && upper.is_none() {
        return None;
    }
    Some(format!(
        "{}{}{}",
        lower.unwrap_or_default(),
        name,
        upper.unwrap_or_default()
    ))
}

fn comparison_op(comparison: Comparison) -> Option<&'static str> {
    match comparison {
        Comparison::LessThan => Some("<"),
        Comparison::LessThanOrEqual => Some("<="),
        Comparison::Unrestricted => None,
    }
}

fn limit_text(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Signature with positional-or-keyword parameters first and a `*`
/// separator ahead of the keyword-only group. Default literals stay raw
/// Python source.
fn render_signature(partition: &ParameterPartition<'_>) -> String {
    let mut parts: Vec<String> = Vec::new();

    for parameter in &partition.implicit_self {
        parts.push(parameter.name.to_string());
    }
    for parameter in &partition.position_or_name {
        parts.push(match &parameter.default_value {
            Some(default) => format!("{}={}", parameter.name, default),
            None => parameter.name.to_string(),
        });
    }
    if !partition.name_only.is_empty() {
        parts.push("*".to_string());
        for parameter in &partition.name_only {
            parts.push(match &parameter.default_value {
                Some(default) => format!("{}={}", parameter.name, default),
                None => parameter.name.to_string(),
            });
        }
    }

    parts.join(", ")
}

/// Forwarding-call arguments: implicit self and positional parameters by
/// current name, keyword-only as `name=name`, constants and attributes by
/// their original names.
fn render_arguments(partition: &ParameterPartition<'_>) -> String {
    let mut parts: Vec<String> = Vec::new();

    for parameter in &partition.implicit_self {
        parts.push(parameter.name.to_string());
    }
    for parameter in &partition.position_or_name {
        parts.push(parameter.name.to_string());
    }
    for parameter in &partition.name_only {
        parts.push(format!("{}={}", parameter.name, parameter.name));
    }
    for parameter in &partition.constant {
        let value = parameter.default_value.as_deref().unwrap_or("None");
        parts.push(format!("{}={}", original_name(parameter), value));
    }
    for parameter in &partition.attribute_bound {
        parts.push(format!(
            "{}=self.{}",
            original_name(parameter),
            parameter.name
        ));
    }

    parts.join(", ")
}

fn original_name(parameter: &Parameter) -> &str {
    parameter
        .original
        .as_ref()
        .map(|o| o.name.as_str())
        .unwrap_or(&parameter.name)
}

/// Distinct enclosing modules of the original declarations, in first-seen
/// order.
fn original_imports(module: &Module) -> IndexSet<String> {
    let mut imports = IndexSet::new();
    for class in module.classes.iter().filter(|c| c.is_public) {
        if let Some(original) = &class.original {
            imports.insert(original.module.clone());
        }
        for method in class.methods.iter().filter(|m| m.is_public) {
            if let Some(original) = &method.original {
                imports.insert(original.module.clone());
            }
        }
    }
    for function in module.functions.iter().filter(|f| f.is_public) {
        if let Some(original) = &function.original {
            imports.insert(original.module.clone());
        }
    }
    imports
}
