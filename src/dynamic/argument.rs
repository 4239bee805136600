//! Arguments accepted by the dynamic operations.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::DynamicError;
use crate::object::Object;

type CallbackFunction = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A host function passed to a dynamic operation.
///
/// Callbacks receive their arguments as a slice:
///
/// - `map`, `filter`, `some`, `every`, `mapToArray`: `[value, key]`
/// - `reduce`: `[accumulator, value, key]`
/// - `fromArray` extractors: `[element]`
///
/// Keys are passed as [`Value::String`].
#[derive(Clone)]
pub struct Callback(Arc<CallbackFunction>);

impl Callback {
    /// Wraps `function` as a callback.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(function))
    }

    /// Calls the callback.
    #[inline]
    pub fn call(&self, arguments: &[Value]) -> Value {
        (self.0)(arguments)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Callback")
    }
}

/// One argument to a dynamic operation: either data or a callback.
///
/// # Examples
///
/// ```rust
/// use keyed::dynamic::Argument;
/// use serde_json::{Value, json};
///
/// let data = Argument::from(json!({ "a": 1 }));
/// let callback = Argument::callback(|arguments: &[Value]| arguments[0].clone());
/// assert!(matches!(data, Argument::Data(_)));
/// assert!(matches!(callback, Argument::Callback(_)));
/// ```
#[derive(Debug, Clone)]
pub enum Argument {
    /// A JSON value.
    Data(Value),
    /// A host function.
    Callback(Callback),
}

impl Argument {
    /// Wraps `function` as a callback argument.
    pub fn callback<F>(function: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self::Callback(Callback::new(function))
    }

    pub(crate) fn into_callback(
        self,
        operation: &'static str,
        position: usize,
    ) -> Result<Callback, DynamicError> {
        match self {
            Self::Callback(callback) => Ok(callback),
            Self::Data(_) => Err(DynamicError::ExpectedCallback {
                operation,
                position,
            }),
        }
    }

    pub(crate) fn into_data(
        self,
        operation: &'static str,
        position: usize,
    ) -> Result<Value, DynamicError> {
        match self {
            Self::Data(value) => Ok(value),
            Self::Callback(_) => Err(DynamicError::ExpectedData {
                operation,
                position,
            }),
        }
    }

    pub(crate) fn into_object(
        self,
        operation: &'static str,
        position: usize,
    ) -> Result<Object<String, Value>, DynamicError> {
        match self.into_data(operation, position)? {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(DynamicError::ExpectedObject {
                operation,
                found: kind(&other),
            }),
        }
    }

    pub(crate) fn into_array(
        self,
        operation: &'static str,
        position: usize,
    ) -> Result<Vec<Value>, DynamicError> {
        match self.into_data(operation, position)? {
            Value::Array(elements) => Ok(elements),
            other => Err(DynamicError::ExpectedArray {
                operation,
                found: kind(&other),
            }),
        }
    }
}

impl From<Value> for Argument {
    fn from(value: Value) -> Self {
        Self::Data(value)
    }
}

impl From<Callback> for Argument {
    fn from(callback: Callback) -> Self {
        Self::Callback(callback)
    }
}

/// Returns the JSON kind of `value`, as used in error messages.
pub(crate) const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Returns whether `value` counts as true when a callback's result is used
/// as a condition.
///
/// `false`, `null`, zero, `NaN` and the empty string are false. Everything
/// else, including empty arrays and objects, is true.
///
/// # Examples
///
/// ```rust
/// use keyed::dynamic::truthy;
/// use serde_json::json;
///
/// assert!(truthy(&json!(1)));
/// assert!(truthy(&json!([])));
/// assert!(!truthy(&json!(0)));
/// assert!(!truthy(&json!("")));
/// assert!(!truthy(&json!(null)));
/// ```
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|float| float != 0.0 && !float.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Converts a key extractor's result into a property name.
///
/// Integral floats drop their fractional part, so `1.0` names the same
/// property as `1`.
pub(crate) fn property_key(operation: &'static str, value: Value) -> Result<String, DynamicError> {
    match value {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(match number.as_f64() {
            Some(float) if number.is_f64() && float == 0.0 => "0".to_string(),
            Some(float) if number.is_f64() => float.to_string(),
            _ => number.to_string(),
        }),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null => Ok("null".to_string()),
        other => Err(DynamicError::InvalidKey {
            operation,
            found: kind(&other),
        }),
    }
}
