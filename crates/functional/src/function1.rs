//! This module provides the one-argument function abstraction and the composition helpers you'd
//! expect to come with it.

/// A function of one argument.
///
/// The argument is borrowed so that the same function value can be applied any number of times
/// without giving up ownership of its inputs, and so that unsized inputs such as [`str`] work.
pub trait Function1<T1: ?Sized, R> {
    /// Applies this function to the given argument.
    fn apply(&self, t1: &T1) -> R;
}

impl<T1: ?Sized, R, F> Function1<T1, R> for F
where
    F: Fn(&T1) -> R,
{
    fn apply(&self, t1: &T1) -> R {
        self(t1)
    }
}

/// The identity morphism over borrowed values.
pub fn identity<A: Clone>() -> impl for<'a> Fn(&'a A) -> A {
    |a| a.clone()
}

/// Gets a function that ignores its argument and always returns a clone of `value`.
pub fn constantly<T1: ?Sized, R: Clone>(value: R) -> impl for<'a> Fn(&'a T1) -> R {
    move |_| value.clone()
}

/// Performs left-to-right composition: the result applies `f` and feeds its output to `g`.
pub fn and_then<T1: ?Sized, B, C>(
    f: impl Fn(&T1) -> B,
    g: impl Fn(B) -> C,
) -> impl for<'a> Fn(&'a T1) -> C {
    move |a| g(f(a))
}

/// Performs right-to-left composition: the result applies `g` and feeds its output to `f`.
pub fn compose<T1: ?Sized, B, C>(
    f: impl Fn(B) -> C,
    g: impl Fn(&T1) -> B,
) -> impl for<'a> Fn(&'a T1) -> C {
    and_then(g, f)
}
