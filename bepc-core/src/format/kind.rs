//! Scalar kinds and conversion targets
//!
//! A [`ScalarKind`] fixes the width of a single value on the wire. A
//! [`TypeTag`] names something a buffer can be read as: one scalar, an
//! array of scalars, or an array of nullable scalars.

use super::constants::{shape, KIND_MASK};
use crate::error::{CodecError, Result};

/// Primitive kinds supported by the BEPC format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ScalarKind {
    /// 8-bit signed integer
    Int8 = 0,
    /// 16-bit signed integer
    Int16 = 1,
    /// 32-bit signed integer
    Int32 = 2,
    /// 64-bit signed integer
    Int64 = 3,
    /// 32-bit IEEE-754 float
    Float32 = 4,
    /// 64-bit IEEE-754 float
    Float64 = 5,
    /// Boolean
    Bool = 6,
    /// UTF-16 code unit
    Char16 = 7,
}

impl ScalarKind {
    /// Every kind, in code order
    pub const ALL: [ScalarKind; 8] = [
        ScalarKind::Int8,
        ScalarKind::Int16,
        ScalarKind::Int32,
        ScalarKind::Int64,
        ScalarKind::Float32,
        ScalarKind::Float64,
        ScalarKind::Bool,
        ScalarKind::Char16,
    ];

    /// Convert from u8 representation
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(ScalarKind::Int8),
            1 => Some(ScalarKind::Int16),
            2 => Some(ScalarKind::Int32),
            3 => Some(ScalarKind::Int64),
            4 => Some(ScalarKind::Float32),
            5 => Some(ScalarKind::Float64),
            6 => Some(ScalarKind::Bool),
            7 => Some(ScalarKind::Char16),
            _ => None,
        }
    }

    /// Convert to u8 representation
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Size in bytes of one encoded scalar of this kind
    pub const fn width(self) -> usize {
        match self {
            ScalarKind::Int8 | ScalarKind::Bool => 1,
            ScalarKind::Int16 | ScalarKind::Char16 => 2,
            ScalarKind::Int32 | ScalarKind::Float32 => 4,
            ScalarKind::Int64 | ScalarKind::Float64 => 8,
        }
    }

    /// Canonical short name
    pub const fn name(self) -> &'static str {
        match self {
            ScalarKind::Int8 => "i8",
            ScalarKind::Int16 => "i16",
            ScalarKind::Int32 => "i32",
            ScalarKind::Int64 => "i64",
            ScalarKind::Float32 => "f32",
            ScalarKind::Float64 => "f64",
            ScalarKind::Bool => "bool",
            ScalarKind::Char16 => "char16",
        }
    }
}

impl core::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A conversion target for a byte buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeTag {
    /// A single value of the kind
    Scalar(ScalarKind),
    /// An array of the kind
    Array(ScalarKind),
    /// An array of nullable values of the kind
    BoxedArray(ScalarKind),
}

impl TypeTag {
    /// Scalar kind underlying this target
    pub const fn kind(self) -> ScalarKind {
        match self {
            TypeTag::Scalar(kind) | TypeTag::Array(kind) | TypeTag::BoxedArray(kind) => kind,
        }
    }

    /// Whether this target is a single scalar
    pub const fn is_scalar(self) -> bool {
        matches!(self, TypeTag::Scalar(_))
    }

    /// One-byte code: shape in the high nibble, kind in the low nibble
    pub const fn to_code(self) -> u8 {
        let shape = match self {
            TypeTag::Scalar(_) => shape::SCALAR,
            TypeTag::Array(_) => shape::ARRAY,
            TypeTag::BoxedArray(_) => shape::BOXED_ARRAY,
        };
        shape | self.kind().to_u8()
    }

    /// Parse a one-byte code produced by [`TypeTag::to_code`]
    pub const fn from_code(code: u8) -> Result<Self> {
        let kind = match ScalarKind::from_u8(code & KIND_MASK) {
            Some(kind) => kind,
            None => return Err(CodecError::UnknownTypeCode(code)),
        };

        match code & shape::MASK {
            shape::SCALAR => Ok(TypeTag::Scalar(kind)),
            shape::ARRAY => Ok(TypeTag::Array(kind)),
            shape::BOXED_ARRAY => Ok(TypeTag::BoxedArray(kind)),
            _ => Err(CodecError::UnknownTypeCode(code)),
        }
    }
}

impl core::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TypeTag::Scalar(kind) => write!(f, "{kind}"),
            TypeTag::Array(kind) => write!(f, "{kind}[]"),
            TypeTag::BoxedArray(kind) => write!(f, "{kind}?[]"),
        }
    }
}

impl core::str::FromStr for TypeTag {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        crate::validation::parse_type_tag(s)
    }
}
