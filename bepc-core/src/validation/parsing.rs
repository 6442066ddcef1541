//! Parsing utilities for BEPC type names
//!
//! This module provides pure parsing functions for the textual form of a
//! [`TypeTag`] with no I/O dependencies.

use crate::error::{CodecError, Result};
use crate::format::{ScalarKind, TypeTag};

/// Suffix marking an array target
const ARRAY_SUFFIX: &str = "[]";

/// Suffix marking a boxed (nullable) array target
const BOXED_ARRAY_SUFFIX: &str = "?[]";

/// Parse a type name such as `i32`, `bool[]` or `f64?[]`
///
/// Kind names are the canonical short names (`i8` .. `char16`) or the
/// long aliases `byte`, `short`, `int`, `long`, `float`, `double`,
/// `boolean` and `char`. Surrounding whitespace is ignored.
pub fn parse_type_tag(name: &str) -> Result<TypeTag> {
    let name = name.trim();

    if let Some(kind) = name.strip_suffix(BOXED_ARRAY_SUFFIX) {
        return parse_kind(kind).map(TypeTag::BoxedArray);
    }

    if let Some(kind) = name.strip_suffix(ARRAY_SUFFIX) {
        return parse_kind(kind).map(TypeTag::Array);
    }

    parse_kind(name).map(TypeTag::Scalar)
}

/// Parse a bare scalar kind name
fn parse_kind(name: &str) -> Result<ScalarKind> {
    let kind = match name {
        "i8" | "byte" => ScalarKind::Int8,
        "i16" | "short" => ScalarKind::Int16,
        "i32" | "int" => ScalarKind::Int32,
        "i64" | "long" => ScalarKind::Int64,
        "f32" | "float" => ScalarKind::Float32,
        "f64" | "double" => ScalarKind::Float64,
        "bool" | "boolean" => ScalarKind::Bool,
        "char16" | "char" => ScalarKind::Char16,
        _ => return Err(CodecError::UnknownTypeName),
    };
    Ok(kind)
}
