//! Prelude module for convenient imports.
//!
//! ```
//! use pojogen::prelude::*;
//! ```

// Target representation
pub use pojogen_core::{
    AnnotationSpec, ClassName, CodeArg, CodeBlock, FieldSpec, MethodSpec, Modifiers,
    ParameterSpec, PrimitiveType, TypeName, TypeSpec, TypeSpecBuilder, TypeVariableName,
};

// Model types
pub use pojogen_model::{
    AnnotationModel, MemberValue, MethodModel, ObjectModel, Property, TemplateArg,
};

// Compiler
pub use pojogen_codegen::{
    CodegenError, CompilerOptions, PackageResolver, PojoCompiler, TypeRegistry, TypeResolver,
};
