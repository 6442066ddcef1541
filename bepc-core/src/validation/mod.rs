//! Input validation for BEPC conversions
//!
//! This module contains pure validation functions with no I/O dependencies.
//! Every codec entry point checks its input here before touching a byte.

pub mod bounds;
pub mod parsing;

pub use bounds::{validate_array_bounds, validate_bool_array_len, validate_scalar_bounds};
pub use parsing::parse_type_tag;
