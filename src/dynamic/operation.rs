//! The dynamic operations and their registry.

use serde_json::{Map, Value};
use tracing::trace;

use super::argument::{Argument, property_key, truthy};
use super::DynamicError;
use crate::curry::{Application, Curried};
use crate::iterate;
use crate::object::Object;

type Body = fn(Vec<Argument>) -> Result<Value, DynamicError>;

/// A named object operation with run-time argument checking.
///
/// An operation accepts either its full argument list or everything but the
/// data, in which case it returns a deferred operation awaiting exactly the
/// data. Any other count is [`DynamicError::InvalidArity`].
///
/// # Examples
///
/// ```rust
/// use keyed::dynamic::{self, Argument};
/// use serde_json::{Value, json};
///
/// let double = Argument::callback(|arguments: &[Value]| {
///     json!(arguments[0].as_i64().unwrap_or(0) * 2)
/// });
///
/// let outcome = dynamic::map().invoke(vec![double, json!({ "a": 1, "b": 2 }).into()]).unwrap();
/// assert_eq!(outcome.into_value(), Some(json!({ "a": 2, "b": 4 })));
/// ```
#[derive(Debug, Clone)]
pub struct Operation {
    curried: Curried<Argument, Result<Value, DynamicError>>,
}

/// The result of invoking an [`Operation`].
#[derive(Debug)]
pub enum Outcome {
    /// The operation ran.
    Value(Value),
    /// The data is still missing.
    Deferred(Operation),
}

impl Outcome {
    /// Returns the value if the operation ran.
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Deferred(_) => None,
        }
    }

    /// Returns the deferred operation if the data is still missing.
    #[must_use]
    pub fn into_deferred(self) -> Option<Operation> {
        match self {
            Self::Value(_) => None,
            Self::Deferred(operation) => Some(operation),
        }
    }
}

impl Operation {
    fn binary(name: &'static str, body: Body) -> Self {
        Self {
            curried: Curried::binary(name, move |first, second| body(vec![first, second])),
        }
    }

    fn ternary(name: &'static str, body: Body) -> Self {
        Self {
            curried: Curried::ternary(name, move |first, second, third| {
                body(vec![first, second, third])
            }),
        }
    }

    /// Returns the operation's name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.curried.name()
    }

    /// Returns the number of arguments still missing.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.curried.remaining()
    }

    /// Invokes the operation.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicError::InvalidArity`] for an unsupported argument
    /// count, or a type error if an argument has the wrong kind.
    pub fn invoke(&self, arguments: Vec<Argument>) -> Result<Outcome, DynamicError> {
        match self.curried.invoke(arguments)? {
            Application::Complete(result) => result.map(Outcome::Value),
            Application::Deferred(curried) => Ok(Outcome::Deferred(Self { curried })),
        }
    }
}

/// Returns the operation registered under `name`.
///
/// Both the camel-case names (`mapToArray`, `fromArray`) and the snake-case
/// names (`map_to_array`, `from_array`) are recognised.
///
/// # Examples
///
/// ```rust
/// use keyed::dynamic::operation;
///
/// assert_eq!(operation("mapToArray").map(|found| found.name()), Some("mapToArray"));
/// assert!(operation("flatMap").is_none());
/// ```
#[must_use]
pub fn operation(name: &str) -> Option<Operation> {
    match name {
        "map" => Some(map()),
        "filter" => Some(filter()),
        "reduce" => Some(reduce()),
        "some" => Some(some()),
        "every" => Some(every()),
        "mapToArray" | "map_to_array" => Some(map_to_array()),
        "fromArray" | "from_array" => Some(from_array()),
        _ => None,
    }
}

/// `map(transform, object)`: replaces each value with `transform(value, key)`.
#[must_use]
pub fn map() -> Operation {
    Operation::binary("map", |arguments| {
        let [transform, data] = unpack(arguments);
        let transform = transform.into_callback("map", 1)?;
        let object = data.into_object("map", 2)?;
        trace!(operation = "map", entries = object.len(), "running dynamic operation");
        let mapped = iterate::map(|value, key| transform.call(&entry(value, key)), &object);
        Ok(to_value(mapped))
    })
}

/// `filter(predicate, object)`: keeps the entries whose predicate result is truthy.
#[must_use]
pub fn filter() -> Operation {
    Operation::binary("filter", |arguments| {
        let [predicate, data] = unpack(arguments);
        let predicate = predicate.into_callback("filter", 1)?;
        let object = data.into_object("filter", 2)?;
        trace!(operation = "filter", entries = object.len(), "running dynamic operation");
        let filtered = iterate::filter(
            |value, key| truthy(&predicate.call(&entry(value, key))),
            &object,
        );
        Ok(to_value(filtered))
    })
}

/// `reduce(reducer, initial, object)`: folds the entries from `initial`.
#[must_use]
pub fn reduce() -> Operation {
    Operation::ternary("reduce", |arguments| {
        let [reducer, initial, data] = unpack(arguments);
        let reducer = reducer.into_callback("reduce", 1)?;
        let initial = initial.into_data("reduce", 2)?;
        let object = data.into_object("reduce", 3)?;
        trace!(operation = "reduce", entries = object.len(), "running dynamic operation");
        Ok(iterate::reduce(
            |accumulator, value, key| {
                reducer.call(&[accumulator, value.clone(), Value::String(key.clone())])
            },
            initial,
            &object,
        ))
    })
}

/// `some(predicate, object)`: whether any predicate result is truthy.
#[must_use]
pub fn some() -> Operation {
    Operation::binary("some", |arguments| {
        let [predicate, data] = unpack(arguments);
        let predicate = predicate.into_callback("some", 1)?;
        let object = data.into_object("some", 2)?;
        trace!(operation = "some", entries = object.len(), "running dynamic operation");
        let found = iterate::some(
            |value, key| truthy(&predicate.call(&entry(value, key))),
            &object,
        );
        Ok(Value::Bool(found))
    })
}

/// `every(predicate, object)`: whether every predicate result is truthy.
#[must_use]
pub fn every() -> Operation {
    Operation::binary("every", |arguments| {
        let [predicate, data] = unpack(arguments);
        let predicate = predicate.into_callback("every", 1)?;
        let object = data.into_object("every", 2)?;
        trace!(operation = "every", entries = object.len(), "running dynamic operation");
        let all = iterate::every(
            |value, key| truthy(&predicate.call(&entry(value, key))),
            &object,
        );
        Ok(Value::Bool(all))
    })
}

/// `mapToArray(transform, object)`: an array of `transform(value, key)` results.
#[must_use]
pub fn map_to_array() -> Operation {
    Operation::binary("mapToArray", |arguments| {
        let [transform, data] = unpack(arguments);
        let transform = transform.into_callback("mapToArray", 1)?;
        let object = data.into_object("mapToArray", 2)?;
        trace!(operation = "mapToArray", entries = object.len(), "running dynamic operation");
        let elements = iterate::map_to_array(|value, key| transform.call(&entry(value, key)), &object);
        Ok(Value::Array(elements))
    })
}

/// `fromArray(keyOf, valueOf, array)`: an object built from the array's elements.
///
/// Later elements overwrite earlier ones with the same key.
#[must_use]
pub fn from_array() -> Operation {
    Operation::ternary("fromArray", |arguments| {
        let [key_of, value_of, data] = unpack(arguments);
        let key_of = key_of.into_callback("fromArray", 1)?;
        let value_of = value_of.into_callback("fromArray", 2)?;
        let elements = data.into_array("fromArray", 3)?;
        trace!(operation = "fromArray", elements = elements.len(), "running dynamic operation");
        let pairs = elements
            .into_iter()
            .map(|element| {
                let key = property_key("fromArray", key_of.call(std::slice::from_ref(&element)))?;
                let value = value_of.call(std::slice::from_ref(&element));
                Ok((key, value))
            })
            .collect::<Result<Vec<(String, Value)>, DynamicError>>()?;
        let object = iterate::from_array(|(key, _)| key.clone(), |(_, value)| value.clone(), &pairs);
        Ok(to_value(object))
    })
}

/// Returns the keys of a JSON object as an array of strings.
///
/// # Errors
///
/// Returns [`DynamicError::ExpectedObject`] if `value` is not an object.
///
/// # Examples
///
/// ```rust
/// use keyed::dynamic::keys;
/// use serde_json::json;
///
/// assert_eq!(keys(&json!({ "a": 1, "b": 2 })).unwrap(), json!(["a", "b"]));
/// ```
pub fn keys(value: &Value) -> Result<Value, DynamicError> {
    let object = Argument::Data(value.clone()).into_object("keys", 1)?;
    Ok(Value::Array(
        iterate::keys(&object)
            .into_iter()
            .cloned()
            .map(Value::String)
            .collect(),
    ))
}

/// Returns the values of a JSON object as an array.
///
/// # Errors
///
/// Returns [`DynamicError::ExpectedObject`] if `value` is not an object.
pub fn values(value: &Value) -> Result<Value, DynamicError> {
    let object = Argument::Data(value.clone()).into_object("values", 1)?;
    Ok(Value::Array(
        iterate::values(&object).into_iter().cloned().collect(),
    ))
}

/// Splits the saturated argument list handed over by [`Curried`].
fn unpack<const N: usize>(arguments: Vec<Argument>) -> [Argument; N] {
    let mut arguments = arguments.into_iter();
    std::array::from_fn(|_| {
        arguments
            .next()
            .unwrap_or(Argument::Data(Value::Null))
    })
}

fn entry(value: &Value, key: &str) -> [Value; 2] {
    [value.clone(), Value::String(key.to_owned())]
}

fn to_value(object: Object<String, Value>) -> Value {
    Value::Object(object.into_iter().collect::<Map<String, Value>>())
}
