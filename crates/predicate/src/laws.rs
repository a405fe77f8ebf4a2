//! Law checkers for predicate implementations.
//!
//! These are meant to be driven from `proptest!` blocks, both here and in downstream crates that
//! write their own [`Predicate1`] or [`Predicate2`] types. Each checker returns a
//! [`TestCaseError`] describing the offending input, so it can be used with `?` inside a property.
use std::fmt::Debug;

use functional::{Function1, Function2};
use proptest::prelude::TestCaseError;

use crate::{predicate1::Predicate1, predicate2::Predicate2};

/// Checks that [`Function1::apply`] returns exactly what [`Predicate1::test`] returns.
pub fn apply_agrees_with_test1<T1: Debug + ?Sized, P: Predicate1<T1>>(
    p: &P,
    t1: &T1,
) -> Result<(), TestCaseError> {
    let tested = Predicate1::test(p, t1);
    let applied: bool = Function1::apply(p, t1);
    if tested != applied {
        return Err(TestCaseError::fail(format!(
            "{}::apply disagrees with test on {t1:?}: test = {tested}, apply = {applied}",
            std::any::type_name::<P>()
        )));
    }
    Ok(())
}

/// Checks that the native closure obtained from [`crate::predicate1::to_fn`] returns exactly what
/// [`Predicate1::test`] returns.
pub fn native_agrees_with_test1<T1: Debug + ?Sized, P: Predicate1<T1> + Clone>(
    p: P,
    t1: &T1,
) -> Result<(), TestCaseError> {
    let tested = Predicate1::test(&p, t1);
    let native = crate::predicate1::to_fn(p)(t1);
    if tested != native {
        return Err(TestCaseError::fail(format!(
            "{}: native predicate disagrees with test on {t1:?}: test = {tested}, native = {native}",
            std::any::type_name::<P>()
        )));
    }
    Ok(())
}

/// Checks that [`Function2::apply`] returns exactly what [`Predicate2::test`] returns.
pub fn apply_agrees_with_test2<T1: Debug + ?Sized, T2: Debug + ?Sized, P: Predicate2<T1, T2>>(
    p: P,
    t1: &T1,
    t2: &T2,
) -> Result<(), TestCaseError> {
    let tested = Predicate2::test(&p, t1, t2);
    let applied: bool = Function2::apply(&p, t1, t2);
    if tested != applied {
        return Err(TestCaseError::fail(format!(
            "{}::apply disagrees with test on ({t1:?}, {t2:?}): test = {tested}, apply = {applied}",
            std::any::type_name::<P>()
        )));
    }
    Ok(())
}

/// Checks that `p` returns `expected` for the given input, as a constant predicate must.
pub fn constant_on1<T1: Debug + ?Sized>(
    p: impl Predicate1<T1>,
    expected: bool,
    t1: &T1,
) -> Result<(), TestCaseError> {
    let actual = Predicate1::test(&p, t1);
    if actual != expected {
        return Err(TestCaseError::fail(format!(
            "constant predicate returned {actual} instead of {expected} on {t1:?}"
        )));
    }
    Ok(())
}
