//! Two-pass schema validation producing typed requests.

use super::{rules, schema::FieldSchema};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Result of validating a raw payload against a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome<T> {
    /// The payload satisfied the schema and was converted to `T`.
    Valid(T),
    /// The payload was rejected with ordered violation messages.
    Invalid(Vec<String>),
}

impl<T> ValidationOutcome<T> {
    /// Returns the violation messages for a rejected payload.
    #[must_use]
    pub fn violations(&self) -> Option<&[String]> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(violations) => Some(violations),
        }
    }

    /// Maps the typed request of an accepted payload.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ValidationOutcome<U> {
        match self {
            Self::Valid(value) => ValidationOutcome::Valid(f(value)),
            Self::Invalid(violations) => ValidationOutcome::Invalid(violations),
        }
    }

    /// Converts the outcome into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the violation list for a rejected payload.
    pub fn into_result(self) -> Result<T, Vec<String>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(violations) => Err(violations),
        }
    }
}

/// Validates `payload` against `schema` and builds the typed request.
///
/// The structural pass runs first and reports every missing required field
/// (in schema order) followed by every undeclared field (in payload order).
/// Only a structurally clean payload reaches the constraint pass, which
/// stops after the first field group that reports a violation. Within a
/// field, constraints stop at the first failure.
#[must_use]
pub fn validate<T>(schema: &FieldSchema, payload: &Value) -> ValidationOutcome<T>
where
    T: DeserializeOwned,
{
    let Some(object) = payload.as_object() else {
        return ValidationOutcome::Invalid(vec!["Payload must be a JSON object".to_owned()]);
    };

    let structural = structural_violations(schema, object);
    if !structural.is_empty() {
        return ValidationOutcome::Invalid(structural);
    }

    let constraint = constraint_violations(schema, object);
    if !constraint.is_empty() {
        return ValidationOutcome::Invalid(constraint);
    }

    match serde_json::from_value(Value::Object(normalise(schema, object))) {
        Ok(typed) => ValidationOutcome::Valid(typed),
        Err(err) => ValidationOutcome::Invalid(vec![format!("Malformed payload: {err}")]),
    }
}

/// Reports missing required fields followed by undeclared fields.
#[must_use]
pub fn structural_violations(schema: &FieldSchema, object: &Map<String, Value>) -> Vec<String> {
    let missing = schema
        .fields()
        .filter(|field| field.is_required() && present(object, field.name()).is_none())
        .map(|field| format!("Missing required field: {}", field.name()));

    let unexpected = object
        .keys()
        .filter(|key| !schema.declares(key))
        .map(|key| format!("Unexpected field: {key}"));

    missing.chain(unexpected).collect()
}

/// Runs constraint checks group by group, stopping at the first failing
/// group.
#[must_use]
pub fn constraint_violations(schema: &FieldSchema, object: &Map<String, Value>) -> Vec<String> {
    for group in schema.groups() {
        let violations: Vec<String> = group
            .iter()
            .filter_map(|field| {
                let value = present(object, field.name())?;
                field
                    .constraints()
                    .iter()
                    .find_map(|constraint| rules::check(constraint, field.name(), value).err())
            })
            .collect();

        if !violations.is_empty() {
            return violations;
        }
    }
    Vec::new()
}

/// Treats explicit JSON `null` the same as an absent key.
fn present<'a>(object: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    object.get(name).filter(|value| !value.is_null())
}

fn normalise(schema: &FieldSchema, object: &Map<String, Value>) -> Map<String, Value> {
    object
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| {
            let numeric = schema.field(key).is_some_and(|field| field.is_numeric());
            let normalised = match rules::integer_value(value) {
                Some(number) if numeric && value.is_string() => Value::from(number),
                _ => value.clone(),
            };
            (key.clone(), normalised)
        })
        .collect()
}
