//! Object model validation utilities.
//!
//! This module checks that a model is well formed before it is compiled:
//! names are identifiers, nothing is declared twice and every property
//! picks exactly one of a type or an inline object.

use crate::error::{ModelError, Result};
use crate::model::{MethodModel, ObjectModel, PropertyType};
use crate::naming::is_identifier;
use std::collections::HashSet;

/// Validates an object model and everything nested in it.
///
/// # Arguments
/// * `owner` - Name used for the model in error messages
/// * `model` - The model to validate
///
/// # Errors
/// Returns the first `ModelError` found, walking the tree depth first.
pub fn validate_object(owner: &str, model: &ObjectModel) -> Result<()> {
    validate_nested(owner, model)?;
    validate_properties(owner, model)?;
    validate_methods(model)?;
    Ok(())
}

/// Validates nested object names and recurses into them.
fn validate_nested(owner: &str, model: &ObjectModel) -> Result<()> {
    let mut seen = HashSet::new();

    for (index, nested) in model.nested.iter().enumerate() {
        let name = nested.name.as_deref().ok_or_else(|| ModelError::MissingName {
            owner: owner.to_string(),
            index,
        })?;

        if !is_identifier(name) {
            return Err(ModelError::invalid_identifier("object", name));
        }
        if !seen.insert(name) {
            return Err(ModelError::duplicate("nested object", name, owner));
        }

        validate_object(name, nested)?;
    }

    Ok(())
}

/// Validates property names and their one-of type choice.
fn validate_properties(owner: &str, model: &ObjectModel) -> Result<()> {
    let mut seen = HashSet::new();

    for property in &model.properties {
        if !is_identifier(&property.name) {
            return Err(ModelError::invalid_identifier("property", &property.name));
        }
        if !seen.insert(property.name.as_str()) {
            return Err(ModelError::duplicate("property", &property.name, owner));
        }

        for annotation in &property.annotations {
            if annotation.type_name.trim().is_empty() {
                return Err(ModelError::invalid_identifier("annotation", &annotation.type_name));
            }
        }

        if let PropertyType::Object(object) = property.property_type()? {
            let inline_owner = format!("{}.{}", owner, property.name);
            validate_object(&inline_owner, object)?;
        }
    }

    Ok(())
}

/// Validates method names and parameter lists.
fn validate_methods(model: &ObjectModel) -> Result<()> {
    for method in &model.methods {
        validate_method(method)?;
    }
    Ok(())
}

/// Validates a single method definition.
fn validate_method(method: &MethodModel) -> Result<()> {
    if !is_identifier(&method.name) {
        return Err(ModelError::invalid_identifier("method", &method.name));
    }

    let mut seen_types = HashSet::new();
    for type_parameter in &method.type_parameters {
        if !is_identifier(type_parameter) {
            return Err(ModelError::invalid_identifier("type parameter", type_parameter));
        }
        if !seen_types.insert(type_parameter.as_str()) {
            return Err(ModelError::duplicate(
                "type parameter",
                type_parameter,
                &method.name,
            ));
        }
    }

    let mut seen_params = HashSet::new();
    for parameter in &method.parameters {
        if !is_identifier(&parameter.name) {
            return Err(ModelError::invalid_identifier("parameter", &parameter.name));
        }
        if !seen_params.insert(parameter.name.as_str()) {
            return Err(ModelError::duplicate("parameter", &parameter.name, &method.name));
        }
    }

    Ok(())
}
