//! Typed values and the conversions between them and encoded buffers
//!
//! [`Value`] is the closed sum of everything a buffer can be read as: a
//! scalar, an array, or a boxed array of each [`ScalarKind`]. Every
//! operation on it is a single `match` over that sum.
//!
//! [`Encode`] and [`Decode`] give the same conversions for statically known
//! Rust types, so containers can be generic over the value they hold.

use alloc::vec::Vec;

use crate::codec::{
    decode_array, decode_boxed_array, decode_scalar, encode_array, encode_boxed_array,
    encode_scalar,
};
use crate::error::Result;
use crate::format::{ScalarKind, TypeTag};

/// Types that can be encoded into a BEPC buffer
pub trait Encode {
    /// Target this value encodes as
    fn type_tag(&self) -> TypeTag;

    /// Encode into a freshly allocated buffer of exactly the needed length
    fn encode(&self) -> Result<Vec<u8>>;
}

/// Types that can be decoded from a BEPC buffer
pub trait Decode: Sized {
    /// Target this type decodes from
    const TYPE_TAG: TypeTag;

    /// Decode from the start of `bytes`
    fn decode(bytes: &[u8]) -> Result<Self>;
}

/// Run `$body` with `$T` bound to the Rust type of a [`ScalarKind`]
///
/// ```
/// use bepc_core::{with_scalar_type, Primitive, ScalarKind};
///
/// let width = with_scalar_type!(ScalarKind::Float64, T => <T as Primitive>::WIDTH);
/// assert_eq!(width, 8);
/// ```
#[macro_export]
macro_rules! with_scalar_type {
    ($kind:expr, $T:ident => $body:expr) => {
        match $kind {
            $crate::ScalarKind::Int8 => {
                type $T = i8;
                $body
            }
            $crate::ScalarKind::Int16 => {
                type $T = i16;
                $body
            }
            $crate::ScalarKind::Int32 => {
                type $T = i32;
                $body
            }
            $crate::ScalarKind::Int64 => {
                type $T = i64;
                $body
            }
            $crate::ScalarKind::Float32 => {
                type $T = f32;
                $body
            }
            $crate::ScalarKind::Float64 => {
                type $T = f64;
                $body
            }
            $crate::ScalarKind::Bool => {
                type $T = bool;
                $body
            }
            $crate::ScalarKind::Char16 => {
                type $T = u16;
                $body
            }
        }
    };
}

/// Macro to define Value and the static Encode/Decode impls per kind
macro_rules! define_values {
    ($($kind:ident: $type:ty => $scalar:ident, $array:ident, $boxed:ident;)*) => {
        /// A decoded scalar, array or boxed array
        #[derive(Debug, Clone, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum Value {
            $($scalar($type),)*
            $($array(Vec<$type>),)*
            $($boxed(Vec<Option<$type>>),)*
        }

        impl Value {
            /// Target this value encodes as
            pub fn type_tag(&self) -> TypeTag {
                match self {
                    $(Value::$scalar(_) => TypeTag::Scalar(ScalarKind::$kind),)*
                    $(Value::$array(_) => TypeTag::Array(ScalarKind::$kind),)*
                    $(Value::$boxed(_) => TypeTag::BoxedArray(ScalarKind::$kind),)*
                }
            }

            /// Encode into a freshly allocated buffer
            pub fn encode(&self) -> Result<Vec<u8>> {
                match self {
                    $(Value::$scalar(v) => Ok(encode_scalar(*v)),)*
                    $(Value::$array(v) => encode_array(v),)*
                    $(Value::$boxed(v) => encode_boxed_array(v),)*
                }
            }

            /// Decode `bytes` as `tag`
            ///
            /// Scalars are read from offset 0 and may leave trailing bytes
            /// unread; arrays consume the whole buffer.
            pub fn decode(bytes: &[u8], tag: TypeTag) -> Result<Self> {
                match tag {
                    $(TypeTag::Scalar(ScalarKind::$kind) => {
                        decode_scalar::<$type>(bytes, 0).map(Value::$scalar)
                    })*
                    $(TypeTag::Array(ScalarKind::$kind) => {
                        decode_array::<$type>(bytes).map(Value::$array)
                    })*
                    $(TypeTag::BoxedArray(ScalarKind::$kind) => {
                        decode_boxed_array::<$type>(bytes).map(Value::$boxed)
                    })*
                }
            }

            /// Number of elements; 1 for scalars
            pub fn len(&self) -> usize {
                match self {
                    $(Value::$scalar(_) => 1,)*
                    $(Value::$array(v) => v.len(),)*
                    $(Value::$boxed(v) => v.len(),)*
                }
            }

            /// Whether this is an empty array
            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }
        }

        $(
            impl From<$type> for Value {
                fn from(value: $type) -> Self {
                    Value::$scalar(value)
                }
            }

            impl From<Vec<$type>> for Value {
                fn from(value: Vec<$type>) -> Self {
                    Value::$array(value)
                }
            }

            impl From<Vec<Option<$type>>> for Value {
                fn from(value: Vec<Option<$type>>) -> Self {
                    Value::$boxed(value)
                }
            }

            impl Encode for $type {
                fn type_tag(&self) -> TypeTag {
                    TypeTag::Scalar(ScalarKind::$kind)
                }

                fn encode(&self) -> Result<Vec<u8>> {
                    Ok(encode_scalar(*self))
                }
            }

            impl Encode for [$type] {
                fn type_tag(&self) -> TypeTag {
                    TypeTag::Array(ScalarKind::$kind)
                }

                fn encode(&self) -> Result<Vec<u8>> {
                    encode_array(self)
                }
            }

            impl<const N: usize> Encode for [$type; N] {
                fn type_tag(&self) -> TypeTag {
                    TypeTag::Array(ScalarKind::$kind)
                }

                fn encode(&self) -> Result<Vec<u8>> {
                    encode_array(self.as_slice())
                }
            }

            impl Encode for Vec<$type> {
                fn type_tag(&self) -> TypeTag {
                    TypeTag::Array(ScalarKind::$kind)
                }

                fn encode(&self) -> Result<Vec<u8>> {
                    encode_array(self)
                }
            }

            impl Encode for [Option<$type>] {
                fn type_tag(&self) -> TypeTag {
                    TypeTag::BoxedArray(ScalarKind::$kind)
                }

                fn encode(&self) -> Result<Vec<u8>> {
                    encode_boxed_array(self)
                }
            }

            impl Encode for Vec<Option<$type>> {
                fn type_tag(&self) -> TypeTag {
                    TypeTag::BoxedArray(ScalarKind::$kind)
                }

                fn encode(&self) -> Result<Vec<u8>> {
                    encode_boxed_array(self)
                }
            }

            impl Decode for $type {
                const TYPE_TAG: TypeTag = TypeTag::Scalar(ScalarKind::$kind);

                fn decode(bytes: &[u8]) -> Result<Self> {
                    decode_scalar(bytes, 0)
                }
            }

            impl Decode for Vec<$type> {
                const TYPE_TAG: TypeTag = TypeTag::Array(ScalarKind::$kind);

                fn decode(bytes: &[u8]) -> Result<Self> {
                    decode_array(bytes)
                }
            }

            impl Decode for Vec<Option<$type>> {
                const TYPE_TAG: TypeTag = TypeTag::BoxedArray(ScalarKind::$kind);

                fn decode(bytes: &[u8]) -> Result<Self> {
                    decode_boxed_array(bytes)
                }
            }
        )*
    };
}

define_values! {
    Int8: i8 => I8, I8Array, BoxedI8Array;
    Int16: i16 => I16, I16Array, BoxedI16Array;
    Int32: i32 => I32, I32Array, BoxedI32Array;
    Int64: i64 => I64, I64Array, BoxedI64Array;
    Float32: f32 => F32, F32Array, BoxedF32Array;
    Float64: f64 => F64, F64Array, BoxedF64Array;
    Bool: bool => Bool, BoolArray, BoxedBoolArray;
    Char16: u16 => Char16, Char16Array, BoxedChar16Array;
}

impl Encode for Value {
    fn type_tag(&self) -> TypeTag {
        Value::type_tag(self)
    }

    fn encode(&self) -> Result<Vec<u8>> {
        Value::encode(self)
    }
}
