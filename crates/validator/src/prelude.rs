//! Prelude module for convenient imports.
//!
//! Provides a single `use sift_validator::prelude::*;` import that brings
//! in the core traits, the run adapters, every built-in validator and
//! combinator, and the value types they operate on.
//!
//! # Examples
//!
//! ```rust
//! use sift_validator::prelude::*;
//!
//! let id = or((string(), number()));
//! let ids = array_of(id);
//! assert!(is(&Value::array([Value::from("a"), Value::from(1)]), &ids));
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, adapters
// ============================================================================

pub use crate::foundation::{
    BoxedValidator, FnValidator, Validate, ValidateExt, ValidationError, ValidationResult,
    ValidatorFor, assert_is, is, is_fn, validate, validate_fn, validator, validator_for,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

pub use crate::validators::{
    Equal, InstanceOf, IsArray, IsBigInt, IsBoolean, IsFunction, IsNull, IsNullish, IsNumber,
    IsObject, IsPropertyKey, IsString, IsSymbol, IsUndefined, KeyOfOptions, OneOf, StrictKeyOf,
    ToObject, Unknown, array, bigint, boolean, equal, function, instance_of, key_of,
    loose_one_of, null, nullish, number, object, one_of, property_key, strict_key_of, string,
    symbol, to_object, undefined, unknown,
};

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    And, Lazy, Not, Nullable, Optional, Or, Pipe, PropOptions, Props, PropsOptions,
    StrictArrayOf, StrictDict, StrictProp, StrictProps, StrictTuple, WrapError, and, array_of,
    dict, lazy, loose_dict, loose_prop, loose_props, not, nullable, optional, or, pipe, prop,
    props, strict_array_of, strict_dict, strict_prop, strict_props, strict_tuple, tuple,
    wrap_error,
};

// ============================================================================
// VALUES: The dynamic value model
// ============================================================================

pub use sift_value::{Array, Class, Function, Object, ObjectBuilder, PropertyKey, Symbol, Value};

pub use crate::{all_of, any_of};
