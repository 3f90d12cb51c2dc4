//! Macros for creating validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`]: Create a complete validator (struct + Validate impl + factory fn)
//! - [`any_of!`]: `or` over a list of validators
//! - [`all_of!`]: `and` over a list of validators
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use sift_validator::validator;
//! use sift_validator::prelude::*;
//!
//! // Unit validator (no fields)
//! validator! {
//!     pub NonEmptyString for Value => Arc<str>;
//!     narrow(input) { input.as_string().filter(|s| !s.is_empty()).cloned() }
//!     error(input) { "The value is not a non-empty string." }
//!     fn non_empty_string();
//! }
//!
//! // Struct with fields
//! validator! {
//!     pub AtLeast { min: f64 } for Value => f64;
//!     narrow(self, input) { input.as_number().filter(|n| *n >= self.min) }
//!     error(self, input) { format!("The value is not a number of at least {}.", self.min) }
//!     fn at_least(min: f64);
//! }
//!
//! assert!(non_empty_string().validate(&Value::from("a")).is_ok());
//! assert!(at_least(3.0).validate(&Value::from(2)).is_err());
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete validator: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// The `narrow` block evaluates to `Option<Output>`: `Some` narrows, `None`
/// rejects. The `error` block runs only on rejection and evaluates to anything
/// convertible into a [`ValidationError`](crate::foundation::ValidationError):
/// a `&'static str`, a `String`, or a reason built by hand.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit validator** (zero-sized, no fields):
/// ```rust
/// # use sift_validator::{validator, prelude::*};
/// validator! {
///     pub IsTrue for Value => bool;
///     narrow(input) { (input.as_bool() == Some(true)).then_some(true) }
///     error(input) { "The value is not true." }
///     fn is_true();
/// }
/// # assert!(is_true().validate(&Value::from(true)).is_ok());
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust
/// # use sift_validator::{validator, prelude::*};
/// validator! {
///     #[derive(Copy, PartialEq)]
///     pub Below { max: f64 } for Value => f64;
///     narrow(self, input) { input.as_number().filter(|n| *n < self.max) }
///     error(self, input) { format!("The value is not below {}.", self.max) }
///     fn below(max: f64);
/// }
/// # assert!(below(1.0).validate(&Value::from(0)).is_ok());
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust
/// # use sift_validator::{validator, prelude::*};
/// validator! {
///     pub Between { lo: f64, hi: f64 } for Value => f64;
///     narrow(self, input) { input.as_number().filter(|n| (self.lo..=self.hi).contains(n)) }
///     error(self, input) { format!("The value is not between {} and {}.", self.lo, self.hi) }
///     new(lo: f64, hi: f64) { Self { lo: lo.min(hi), hi: lo.max(hi) } }
///     fn between(lo: f64, hi: f64);
/// }
/// # assert!(between(5.0, 1.0).validate(&Value::from(3)).is_ok());
/// ```
#[macro_export]
macro_rules! validator {
    // ── Variant 1a: Unit validator (no fields) + factory fn ──────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty => $output:ty;
        narrow($inp:ident) $narrow:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input => $output;
            narrow($inp) $narrow
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit validator (no fields), no factory ───────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty => $output:ty;
        narrow($inp:ident) $narrow:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;
            type Output = $output;

            #[allow(unused_variables)]
            fn validate(
                &self,
                $inp: &Self::Input,
            ) -> ::std::result::Result<Self::Output, $crate::foundation::ValidationError> {
                match $narrow {
                    ::std::option::Option::Some(output) => ::std::result::Result::Ok(output),
                    ::std::option::Option::None => {
                        let $einp = $inp;
                        ::std::result::Result::Err($crate::foundation::ValidationError::from($err))
                    }
                }
            }
        }
    };

    // ── Variant 2a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty => $output:ty;
        narrow($self_:ident, $inp:ident) $narrow:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input => $output;
            narrow($self_, $inp) $narrow
            error($self2, $einp) $err
            new($($field: $fty),+) { Self { $($field),+ } }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3a: Struct with fields + custom new + factory fn ─────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty => $output:ty;
        narrow($self_:ident, $inp:ident) $narrow:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input => $output;
            narrow($self_, $inp) $narrow
            error($self2, $einp) $err
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3b: Struct with fields + custom new, no factory ──────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty => $output:ty;
        narrow($self_:ident, $inp:ident) $narrow:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;
            type Output = $output;

            #[allow(unused_variables)]
            fn validate(
                &$self_,
                $inp: &Self::Input,
            ) -> ::std::result::Result<Self::Output, $crate::foundation::ValidationError> {
                match $narrow {
                    ::std::option::Option::Some(output) => ::std::result::Result::Ok(output),
                    ::std::option::Option::None => {
                        let $einp = $inp;
                        ::std::result::Result::Err($crate::foundation::ValidationError::from($err))
                    }
                }
            }
        }
    };
}

// ============================================================================
// ANY_OF / ALL_OF MACROS
// ============================================================================

/// Succeeds with the first validator that accepts the input.
///
/// Expands to [`or`](crate::combinators::or()) over a tuple, so up to eight
/// validators are supported.
///
/// ```rust
/// use sift_validator::{any_of, prelude::*};
///
/// let scalar = any_of![string(), number(), boolean()];
/// assert!(scalar.validate(&Value::from(false)).is_ok());
/// assert!(scalar.validate(&Value::Null).is_err());
/// ```
#[macro_export]
macro_rules! any_of {
    ($($validator:expr),+ $(,)?) => {
        $crate::combinators::or(($($validator,)+))
    };
}

/// Succeeds when every validator accepts the input.
///
/// Expands to [`and`](crate::combinators::and()) over a tuple, so up to eight
/// validators are supported.
///
/// ```rust
/// use sift_validator::{all_of, prelude::*};
///
/// let named = all_of![object(), prop("name", string())];
/// let value = Value::from(Object::builder().property("name", "x").build());
/// assert!(named.validate(&value).is_ok());
/// ```
#[macro_export]
macro_rules! all_of {
    ($($validator:expr),+ $(,)?) => {
        $crate::combinators::and(($($validator,)+))
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{Validate, ValidationError};
    use sift_value::Value;

    // Test 1: Unit validator (no fields)
    validator! {
        /// A test unit validator.
        TestNonEmpty for str => String;
        narrow(input) { (!input.is_empty()).then(|| input.to_owned()) }
        error(input) { "The string is empty." }
        fn test_non_empty();
    }

    #[test]
    fn test_unit_validator() {
        let v = TestNonEmpty;
        assert_eq!(v.validate("hello"), Ok("hello".to_owned()));
        assert_eq!(
            v.validate(""),
            Err(ValidationError::new("The string is empty."))
        );
    }

    #[test]
    fn test_unit_factory() {
        assert!(test_non_empty().validate("x").is_ok());
    }

    // Test 2: Struct with fields + auto new
    validator! {
        #[derive(Copy, PartialEq)]
        TestMinLen { min: usize } for str => usize;
        narrow(self, input) { (input.len() >= self.min).then_some(input.len()) }
        error(self, input) { format!("need {} chars, got {}", self.min, input.len()) }
        fn test_min_len(min: usize);
    }

    #[test]
    fn test_struct_validator() {
        let v = TestMinLen { min: 3 };
        assert_eq!(v.validate("abcd"), Ok(4));
        assert_eq!(
            v.validate("ab"),
            Err(ValidationError::new("need 3 chars, got 2"))
        );
    }

    #[test]
    fn test_struct_new_and_factory() {
        assert_eq!(TestMinLen::new(5), test_min_len(5));
        assert!(test_min_len(5).validate("hi").is_err());
    }

    // Test 3: Custom constructor and a prebuilt reason
    validator! {
        TestTagged { tag: String } for Value => Value;
        narrow(self, input) { (input.as_str() == Some(self.tag.as_str())).then(|| input.clone()) }
        error(self, input) {
            ValidationError::wrapped(format!("expected {:?}", self.tag), format!("got {input}"))
        }
        new(tag: &str) { Self { tag: tag.to_owned() } }
        fn test_tagged(tag: &str);
    }

    #[test]
    fn test_custom_new() {
        let v = test_tagged("a");
        assert!(v.validate(&Value::from("a")).is_ok());
        assert_eq!(
            v.validate(&Value::from(1)),
            Err(ValidationError::wrapped("expected \"a\"", "got 1"))
        );
    }

    // Test 4: Unit validator without factory fn
    validator! {
        TestAnything for Value => ();
        narrow(input) { Some(()) }
        error(input) { "unreachable" }
    }

    #[test]
    fn test_no_factory() {
        assert_eq!(TestAnything.validate(&Value::Undefined), Ok(()));
    }

    #[test]
    fn test_any_of_and_all_of() {
        use crate::validators::{null, number, string, undefined};

        let loose = any_of![string(), number()];
        assert_eq!(loose.validate(&Value::from(1)), Ok(Value::from(1)));

        let single = any_of![null()];
        assert!(single.validate(&Value::Undefined).is_err());

        let both = all_of![undefined(), undefined()];
        assert_eq!(both.validate(&Value::Undefined), Ok(Value::Undefined));
    }
}
