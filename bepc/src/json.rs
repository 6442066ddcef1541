//! JSON bridge for typed values
//!
//! Converts between plain JSON literals (`-1`, `[true, false]`,
//! `[1, null]`) and [`Value`]s of a known [`TypeTag`].
//!
//! JSON has no literal for non-finite numbers, so NaN and the infinities are
//! written as the strings `"NaN"`, `"Infinity"` and `"-Infinity"` and read
//! back from the same strings.

use bepc_core::{with_scalar_type, ScalarKind, TypeTag, Value};
use serde::de::Error as _;
use serde_json::Value as Json;

use crate::error::Result;

const NAN: &str = "NaN";
const INFINITY: &str = "Infinity";
const NEG_INFINITY: &str = "-Infinity";

/// Interpret a JSON literal as a value of `tag`
///
/// `null` elements are accepted only for boxed arrays. UTF-16 code units
/// are given as integers.
pub fn value_from_json(tag: TypeTag, json: Json) -> Result<Value> {
    match tag.kind() {
        ScalarKind::Float32 | ScalarKind::Float64 => floats_from_json(tag, json),
        kind => {
            let value = with_scalar_type!(kind, T => match tag {
                TypeTag::Scalar(_) => Value::from(serde_json::from_value::<T>(json)?),
                TypeTag::Array(_) => Value::from(serde_json::from_value::<Vec<T>>(json)?),
                TypeTag::BoxedArray(_) => {
                    Value::from(serde_json::from_value::<Vec<Option<T>>>(json)?)
                }
            });
            Ok(value)
        }
    }
}

/// Parse JSON text as a value of `tag`
pub fn value_from_json_str(tag: TypeTag, text: &str) -> Result<Value> {
    value_from_json(tag, serde_json::from_str(text)?)
}

/// Render a value as a plain JSON literal, dropping the variant name
pub fn value_to_json(value: &Value) -> Result<Json> {
    let plain = match value {
        Value::F32(v) => float_to_json(*v)?,
        Value::F64(v) => float_to_json(*v)?,
        Value::F32Array(v) => floats_to_json(v.iter().copied().map(Some))?,
        Value::F64Array(v) => floats_to_json(v.iter().copied().map(Some))?,
        Value::BoxedF32Array(v) => floats_to_json(v.iter().copied())?,
        Value::BoxedF64Array(v) => floats_to_json(v.iter().copied())?,
        other => match serde_json::to_value(other)? {
            Json::Object(map) => map
                .into_iter()
                .next()
                .map(|(_, inner)| inner)
                .unwrap_or(Json::Null),
            plain => plain,
        },
    };
    Ok(plain)
}

fn float_to_json<F>(value: F) -> Result<Json>
where
    F: Into<f64> + serde::Serialize + Copy,
{
    let wide: f64 = value.into();
    let json = if wide.is_nan() {
        Json::from(NAN)
    } else if wide == f64::INFINITY {
        Json::from(INFINITY)
    } else if wide == f64::NEG_INFINITY {
        Json::from(NEG_INFINITY)
    } else {
        serde_json::to_value(value)?
    };
    Ok(json)
}

fn floats_to_json<F, I>(values: I) -> Result<Json>
where
    F: Into<f64> + serde::Serialize + Copy,
    I: Iterator<Item = Option<F>>,
{
    values
        .map(|value| value.map_or(Ok(Json::Null), float_to_json))
        .collect::<Result<Vec<_>>>()
        .map(Json::Array)
}

fn float_from_json(json: Json) -> Result<f64> {
    match json {
        Json::String(text) => match text.as_str() {
            NAN => Ok(f64::NAN),
            INFINITY => Ok(f64::INFINITY),
            NEG_INFINITY => Ok(f64::NEG_INFINITY),
            _ => Err(serde_json::Error::custom(format!(
                "invalid float `{text}`, expected a number, \"{NAN}\", \"{INFINITY}\" or \"{NEG_INFINITY}\""
            ))
            .into()),
        },
        other => Ok(serde_json::from_value(other)?),
    }
}

/// Narrow to `f32`, giving NaN the canonical quiet bit pattern
fn narrow(value: f64) -> f32 {
    if value.is_nan() {
        f32::NAN
    } else {
        value as f32
    }
}

fn float_items(json: Json) -> Result<Vec<Json>> {
    match json {
        Json::Array(items) => Ok(items),
        other => Err(serde_json::Error::custom(format!(
            "invalid type: {other}, expected a sequence"
        ))
        .into()),
    }
}

fn floats_from_json(tag: TypeTag, json: Json) -> Result<Value> {
    let wide = tag.kind() == ScalarKind::Float64;

    let value = match tag {
        TypeTag::Scalar(_) => {
            let v = float_from_json(json)?;
            if wide {
                Value::F64(v)
            } else {
                Value::F32(narrow(v))
            }
        }
        TypeTag::Array(_) => {
            let values = float_items(json)?
                .into_iter()
                .map(float_from_json)
                .collect::<Result<Vec<f64>>>()?;
            if wide {
                Value::F64Array(values)
            } else {
                Value::F32Array(values.into_iter().map(narrow).collect())
            }
        }
        TypeTag::BoxedArray(_) => {
            let values = float_items(json)?
                .into_iter()
                .map(|item| match item {
                    Json::Null => Ok(None),
                    other => float_from_json(other).map(Some),
                })
                .collect::<Result<Vec<Option<f64>>>>()?;
            if wide {
                Value::BoxedF64Array(values)
            } else {
                Value::BoxedF32Array(values.into_iter().map(|v| v.map(narrow)).collect())
            }
        }
    };
    Ok(value)
}
