//! This module provides the two-argument function abstraction along with argument manipulation
//! helpers.

/// A function of two arguments.
pub trait Function2<T1: ?Sized, T2: ?Sized, R> {
    /// Applies this function to the given arguments.
    fn apply(&self, t1: &T1, t2: &T2) -> R;
}

impl<T1: ?Sized, T2: ?Sized, R, F> Function2<T1, T2, R> for F
where
    F: Fn(&T1, &T2) -> R,
{
    fn apply(&self, t1: &T1, t2: &T2) -> R {
        self(t1, t2)
    }
}

/// Gets a function that ignores both arguments and always returns a clone of `value`.
pub fn constantly<T1: ?Sized, T2: ?Sized, R: Clone>(
    value: R,
) -> impl for<'a, 'b> Fn(&'a T1, &'b T2) -> R {
    move |_, _| value.clone()
}

/// Performs left-to-right composition: the result applies `f` and feeds its output to `g`.
pub fn and_then<T1: ?Sized, T2: ?Sized, B, C>(
    f: impl Fn(&T1, &T2) -> B,
    g: impl Fn(B) -> C,
) -> impl for<'a, 'b> Fn(&'a T1, &'b T2) -> C {
    move |a, b| g(f(a, b))
}

/// Swaps the order of the arguments of `f`.
pub fn flip<T1: ?Sized, T2: ?Sized, R>(
    f: impl Fn(&T1, &T2) -> R,
) -> impl for<'a, 'b> Fn(&'a T2, &'b T1) -> R {
    move |b, a| f(a, b)
}

/// Fixes the first argument of `f`, producing a function of the second argument only.
///
/// `t1` may be owned or borrowed; anything that [`Borrow`](std::borrow::Borrow)s as `T1` works.
pub fn partial<T1: ?Sized, T2: ?Sized, R>(
    f: impl Fn(&T1, &T2) -> R,
    t1: impl std::borrow::Borrow<T1>,
) -> impl for<'b> Fn(&'b T2) -> R {
    move |b| f(t1.borrow(), b)
}

#[cfg(test)]
mod tests {
    use proptest::{prelude::any, prop_assert_eq, proptest};

    use super::*;

    #[test]
    fn test_closure_is_function2() {
        let concat = |a: &str, b: &str| format!("{a}{b}");

        assert_eq!(Function2::apply(&concat, "cof", "fee"), "coffee");
    }

    #[test]
    fn test_constantly_ignores_arguments() {
        let seven = constantly::<str, [u8], _>(7);

        assert_eq!(seven("anything", &[1, 2, 3]), 7);
        assert_eq!(seven("", &[]), 7);
    }

    #[test]
    fn test_partial_fixes_first_argument() {
        let starts_with = |prefix: &str, s: &str| s.starts_with(prefix);
        let starts_with_co = partial(starts_with, String::from("co"));

        assert!(starts_with_co("coffee"));
        assert!(!starts_with_co("tea"));
    }

    proptest! {
        #[test]
        fn flip_swaps_arguments(a in any::<i32>(), b in any::<i32>()) {
            let sub = |x: &i32, y: &i32| x.wrapping_sub(*y);

            prop_assert_eq!(flip(sub)(&a, &b), sub(&b, &a));
        }

        #[test]
        fn and_then_post_processes(a in any::<u16>(), b in any::<u16>()) {
            let add = |x: &u16, y: &u16| u32::from(*x) + u32::from(*y);
            let composed = and_then(add, |sum: u32| sum * 2);

            prop_assert_eq!(composed.apply(&a, &b), add(&a, &b) * 2);
        }
    }
}
