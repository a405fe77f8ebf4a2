//! Function abstractions of one and two arguments.
//!
//! [`Function1`] and [`Function2`] describe anything that can be called with borrowed arguments and
//! produces a value. Every closure of the matching shape implements them, so APIs can accept
//! `impl Function1<A, B>` and callers can keep passing plain closures.

pub mod function1;
pub mod function2;

pub use function1::Function1;
pub use function2::Function2;
