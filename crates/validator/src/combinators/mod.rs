//! Validator combinators
//!
//! Combinators build new validators out of existing ones.
//!
//! # Categories
//!
//! - **Logic**: [`or()`], [`and()`], [`not()`]
//! - **Sequencing**: [`pipe()`], [`wrap_error`], [`optional()`], [`nullable`], [`lazy()`]
//! - **Objects**: [`prop()`], [`props()`], [`dict()`] and their `strict_` / `loose_` variants
//! - **Arrays**: [`array_of`], [`tuple()`]
//!
//! Object and array combinators come in a strict form that takes the
//! already-narrowed [`Object`](sift_value::Object) or
//! [`Array`](sift_value::Array), and a form over any [`Value`](sift_value::Value)
//! that is a [`Pipe`] from a kind check (or object conversion) into the
//! strict form.
//!
//! # Examples
//!
//! ```rust
//! use sift_validator::prelude::*;
//!
//! let entry = tuple((string(), or((number(), null()))));
//! let entries = array_of(entry);
//!
//! let value = Value::array([
//!     Value::array([Value::from("a"), Value::from(1)]),
//!     Value::array([Value::from("b"), Value::Null]),
//! ]);
//! assert!(entries.validate(&value).is_ok());
//! ```

/// Invokes `$m!(len; Name index, ..)` for every tuple arity from 1 to 8.
macro_rules! for_each_tuple {
    ($m:ident) => {
        $m!(1; A 0);
        $m!(2; A 0, B 1);
        $m!(3; A 0, B 1, C 2);
        $m!(4; A 0, B 1, C 2, D 3);
        $m!(5; A 0, B 1, C 2, D 3, E 4);
        $m!(6; A 0, B 1, C 2, D 3, E 4, F 5);
        $m!(7; A 0, B 1, C 2, D 3, E 4, F 5, G 6);
        $m!(8; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
    };
}

pub mod and;
pub mod array;
pub mod dict;
pub mod lazy;
pub mod message;
pub mod not;
pub mod optional;
pub mod or;
pub mod pipe;
pub mod prop;
pub mod props;
pub mod tuple;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use and::{And, and};
pub use array::{StrictArrayOf, array_of, strict_array_of};
pub use dict::{StrictDict, dict, loose_dict, strict_dict};
pub use lazy::{Lazy, lazy};
pub use message::{WrapError, wrap_error};
pub use not::{Not, not};
pub use optional::{Nullable, Optional, nullable, optional};
pub use or::{Or, or};
pub use pipe::{Pipe, pipe};
pub use prop::{PropOptions, StrictProp, loose_prop, prop, strict_prop};
pub use props::{Props, PropsOptions, StrictProps, loose_props, props, strict_props};
pub use tuple::{StrictTuple, strict_tuple, tuple};
