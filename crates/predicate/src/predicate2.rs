//! Predicates of two arguments.
use std::borrow::Borrow;

use functional::Function2;

/// A predicate (`bool`-valued function) of two arguments.
///
/// Every closure `Fn(&T1, &T2) -> bool` is a [`Predicate2`]. [`Function2::apply`] is satisfied by
/// delegating to [`Predicate2::test`].
pub trait Predicate2<T1: ?Sized, T2: ?Sized>: Function2<T1, T2, bool> {
    /// Evaluates this predicate on the given arguments.
    ///
    /// Returns `true` if the input arguments match the predicate, otherwise `false`.
    fn test(&self, t1: &T1, t2: &T2) -> bool;
}

impl<T1: ?Sized, T2: ?Sized, F> Predicate2<T1, T2> for F
where
    F: Fn(&T1, &T2) -> bool,
{
    fn test(&self, t1: &T1, t2: &T2) -> bool {
        self(t1, t2)
    }
}

/// A predicate of two arguments whose result never depends on either argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constant2 {
    result: bool,
}

static ALWAYS_TRUE: Constant2 = Constant2 { result: true };
static ALWAYS_FALSE: Constant2 = Constant2 { result: false };

impl Constant2 {
    /// The value this predicate returns for every pair of inputs.
    pub const fn result(&self) -> bool {
        self.result
    }
}

impl<T1: ?Sized, T2: ?Sized> Predicate2<T1, T2> for Constant2 {
    fn test(&self, _t1: &T1, _t2: &T2) -> bool {
        self.result
    }
}

impl<T1: ?Sized, T2: ?Sized> Function2<T1, T2, bool> for Constant2 {
    fn apply(&self, t1: &T1, t2: &T2) -> bool {
        Predicate2::test(self, t1, t2)
    }
}

impl<T1: ?Sized, T2: ?Sized> Predicate2<T1, T2> for &Constant2 {
    fn test(&self, t1: &T1, t2: &T2) -> bool {
        Predicate2::test(*self, t1, t2)
    }
}

impl<T1: ?Sized, T2: ?Sized> Function2<T1, T2, bool> for &Constant2 {
    fn apply(&self, t1: &T1, t2: &T2) -> bool {
        Predicate2::test(*self, t1, t2)
    }
}

/// Gets a predicate that always returns `result`, whatever the argument types.
pub fn constantly(result: bool) -> &'static Constant2 {
    if result {
        &ALWAYS_TRUE
    } else {
        &ALWAYS_FALSE
    }
}

/// Predicate combinator for the ! operation.
pub fn not<A: ?Sized, B: ?Sized>(
    p: impl Predicate2<A, B>,
) -> impl for<'a, 'b> Fn(&'a A, &'b B) -> bool {
    move |a, b| !p.test(a, b)
}

/// Predicate combinator for the && operation.
pub fn and<A: ?Sized, B: ?Sized>(
    p: impl Predicate2<A, B>,
    q: impl Predicate2<A, B>,
) -> impl for<'a, 'b> Fn(&'a A, &'b B) -> bool {
    move |a, b| p.test(a, b) && q.test(a, b)
}

/// Predicate combinator for the || operation.
pub fn or<A: ?Sized, B: ?Sized>(
    p: impl Predicate2<A, B>,
    q: impl Predicate2<A, B>,
) -> impl for<'a, 'b> Fn(&'a A, &'b B) -> bool {
    move |a, b| p.test(a, b) || q.test(a, b)
}

/// Predicate combinator for the xor operation.
pub fn xor<A: ?Sized, B: ?Sized>(
    p: impl Predicate2<A, B>,
    q: impl Predicate2<A, B>,
) -> impl for<'a, 'b> Fn(&'a A, &'b B) -> bool {
    move |a, b| p.test(a, b) ^ q.test(a, b)
}

/// Swaps the argument order of `p`.
pub fn flip<A: ?Sized, B: ?Sized>(
    p: impl Predicate2<A, B>,
) -> impl for<'a, 'b> Fn(&'a B, &'b A) -> bool {
    move |b, a| p.test(a, b)
}

/// Fixes the first argument of `p`, leaving a predicate of the second argument.
pub fn partial<A: ?Sized, B: ?Sized>(
    p: impl Predicate2<A, B>,
    a: impl Borrow<A>,
) -> impl for<'b> Fn(&'b B) -> bool {
    move |b| p.test(a.borrow(), b)
}

/// The [`PartialEq::eq`] function as a two-argument predicate.
pub fn equal<A: PartialEq + ?Sized>() -> impl for<'a, 'b> Fn(&'a A, &'b A) -> bool {
    |a, b| a == b
}

/// The [`PartialEq::ne`] function as a two-argument predicate.
pub fn not_equal<A: PartialEq + ?Sized>() -> impl for<'a, 'b> Fn(&'a A, &'b A) -> bool {
    |a, b| a != b
}

#[cfg(test)]
mod tests {
    use proptest::{prelude::any, prop_assert_eq, proptest};

    use super::*;

    #[test]
    fn test_constantly() {
        assert!(constantly(true).test("x", &42));
        assert!(!constantly(false).test(&None::<i32>, &None::<String>));
        assert!(std::ptr::eq(constantly(true), constantly(true)));
    }

    #[test]
    fn test_partial() {
        let contains = |haystack: &str, needle: &str| haystack.contains(needle);
        let in_menu = partial(contains, "espresso, latte, flat white");

        assert!(in_menu("latte"));
        assert!(!in_menu("matcha"));
    }

    #[test]
    fn test_flip_order() {
        let longer_than = |s: &str, n: &usize| s.len() > *n;

        assert!(flip(longer_than)(&3, "coffee"));
        assert!(!flip(longer_than)(&6, "coffee"));
    }

    #[test]
    fn test_equal_on_unsized() {
        assert!(equal::<str>()("brew", "brew"));
        assert!(not_equal::<[u8]>()(&[1, 2][..], &[2, 1][..]));
    }

    proptest! {
        #[test]
        fn constantly_ignores_inputs(r in any::<bool>(), a in any::<Option<u32>>(), b in any::<String>()) {
            prop_assert_eq!(constantly(r).test(&a, &b), r);
            crate::laws::apply_agrees_with_test2(constantly(r), &a, &b)?;
        }

        #[test]
        fn combinators_match_boolean_operators(a in any::<i16>(), b in any::<i16>()) {
            let lt = |x: &i16, y: &i16| x < y;
            let same_parity = |x: &i16, y: &i16| (x ^ y) & 1 == 0;
            let (p, q) = (lt(&a, &b), same_parity(&a, &b));

            prop_assert_eq!(not(lt)(&a, &b), !p);
            prop_assert_eq!(and(lt, same_parity)(&a, &b), p && q);
            prop_assert_eq!(or(lt, same_parity)(&a, &b), p || q);
            prop_assert_eq!(xor(lt, same_parity)(&a, &b), p ^ q);
            prop_assert_eq!(flip(lt)(&b, &a), p);
            crate::laws::apply_agrees_with_test2(same_parity, &a, &b)?;
        }
    }
}
