//! Abstract interfaces for BEPC values and storage
//!
//! This module defines the trait abstractions shared by the codec and the
//! containers built on top of it.

pub mod primitive;
pub mod storage;

pub use primitive::Primitive;
pub use storage::ByteSource;
