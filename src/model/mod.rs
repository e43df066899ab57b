//! Standalone model of a third-party library's public API.
//!
//! The tree arrives fully populated from an external extraction step
//! (typically as JSON) and is threaded through the rewrite pipeline as
//! successive immutable snapshots. No node is mutated in place across a
//! pass boundary; every change is a copy-with-replacement.
//!
//! ```text
//! Package
//! ├── modules: Vec<Module>
//! │   ├── classes: Vec<Class>     (attributes, methods)
//! │   └── functions: Vec<Function> (parameters, results)
//! └── annotations: Vec<Annotation>
//! ```

mod annotations;
mod nodes;

pub use annotations::{Annotation, AnnotationKind, EnumPair};
pub use nodes::{
    Attribute, Boundary, Class, Comparison, FromImport, Function, FunctionResult, Import, Limit,
    Module, OriginalDecl, OriginalParameter, Package, Parameter, ParameterBinding,
    CONSTRUCTOR_NAME,
};

impl Package {
    /// Deserialize a package tree from the extraction boundary's JSON form.
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    /// Serialize the package tree to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
