//! Typed predicates of one and two arguments.
//!
//! [`Predicate1`] and [`Predicate2`] specialise the [`functional`] function traits to a `bool`
//! result and name their evaluation `test`. Any closure of the right shape is a predicate, and the
//! modules here provide constants, combinators, a conversion back into plain closures, tracing
//! wrappers and predicates loaded from configuration.
//!
//! The two arities are independent leaves. Both traits name their evaluation `test`, so code that
//! needs both in one scope calls them as `Predicate1::test(&p, a)` and `Predicate2::test(&p, a, b)`.

pub mod config;
pub mod errors;
pub mod laws;
pub mod predicate1;
pub mod predicate2;
pub mod trace;

pub use config::{BoxedPredicate1, PredicateConfig};
pub use errors::ConfigError;
pub use predicate1::Predicate1;
pub use predicate2::Predicate2;
