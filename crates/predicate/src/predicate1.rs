//! Predicates of one argument and the canonical combinators over them.
use std::borrow::Borrow;

use functional::Function1;

/// A predicate (`bool`-valued function) of one argument.
///
/// Every closure `Fn(&T1) -> bool` is a [`Predicate1`]. Named predicate types implement
/// [`Predicate1::test`] and satisfy [`Function1::apply`] by delegating to it, so `apply` and `test`
/// always agree.
pub trait Predicate1<T1: ?Sized>: Function1<T1, bool> {
    /// Evaluates this predicate on the given argument.
    ///
    /// Returns `true` if the input argument matches the predicate, otherwise `false`.
    fn test(&self, t1: &T1) -> bool;
}

impl<T1: ?Sized, F> Predicate1<T1> for F
where
    F: Fn(&T1) -> bool,
{
    fn test(&self, t1: &T1) -> bool {
        self(t1)
    }
}

/// A predicate of one argument whose result never depends on that argument.
///
/// Obtain one through [`constantly`]; the two possible values are shared statics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constant1 {
    result: bool,
}

static ALWAYS_TRUE: Constant1 = Constant1 { result: true };
static ALWAYS_FALSE: Constant1 = Constant1 { result: false };

impl Constant1 {
    /// The value this predicate returns for every input.
    pub const fn result(&self) -> bool {
        self.result
    }
}

impl<T1: ?Sized> Predicate1<T1> for Constant1 {
    fn test(&self, _t1: &T1) -> bool {
        self.result
    }
}

impl<T1: ?Sized> Function1<T1, bool> for Constant1 {
    fn apply(&self, t1: &T1) -> bool {
        Predicate1::test(self, t1)
    }
}

impl<T1: ?Sized> Predicate1<T1> for &Constant1 {
    fn test(&self, t1: &T1) -> bool {
        Predicate1::test(*self, t1)
    }
}

impl<T1: ?Sized> Function1<T1, bool> for &Constant1 {
    fn apply(&self, t1: &T1) -> bool {
        Predicate1::test(*self, t1)
    }
}

/// Gets a predicate that always returns `result`.
///
/// Repeated calls with the same `result` hand out the same instance.
pub fn constantly(result: bool) -> &'static Constant1 {
    if result {
        &ALWAYS_TRUE
    } else {
        &ALWAYS_FALSE
    }
}

/// Converts a [`Predicate1`] into a plain Rust predicate closure.
///
/// The closure forwards to [`Predicate1::test`], which makes any predicate usable with
/// `Iterator::filter`, `Vec::retain` and friends.
pub fn to_fn<T1: ?Sized>(p: impl Predicate1<T1>) -> impl for<'a> Fn(&'a T1) -> bool {
    move |t1| p.test(t1)
}

/// Predicate combinator for the ! operation.
pub fn not<A: ?Sized>(p: impl Predicate1<A>) -> impl for<'a> Fn(&'a A) -> bool {
    move |a| !p.test(a)
}

/// Predicate combinator for the && operation.
pub fn and<A: ?Sized>(
    p: impl Predicate1<A>,
    q: impl Predicate1<A>,
) -> impl for<'a> Fn(&'a A) -> bool {
    move |a| p.test(a) && q.test(a)
}

/// Predicate combinator for the || operation.
pub fn or<A: ?Sized>(
    p: impl Predicate1<A>,
    q: impl Predicate1<A>,
) -> impl for<'a> Fn(&'a A) -> bool {
    move |a| p.test(a) || q.test(a)
}

/// Predicate combinator for the xor operation.
pub fn xor<A: ?Sized>(
    p: impl Predicate1<A>,
    q: impl Predicate1<A>,
) -> impl for<'a> Fn(&'a A) -> bool {
    move |a| p.test(a) ^ q.test(a)
}

/// Predicate combinator for the nand operation.
pub fn nand<A: ?Sized>(
    p: impl Predicate1<A>,
    q: impl Predicate1<A>,
) -> impl for<'a> Fn(&'a A) -> bool {
    move |a| !(p.test(a) & q.test(a))
}

/// Predicate combinator for the nor operation.
pub fn nor<A: ?Sized>(
    p: impl Predicate1<A>,
    q: impl Predicate1<A>,
) -> impl for<'a> Fn(&'a A) -> bool {
    move |a| !(p.test(a) | q.test(a))
}

/// Contravariant functor map over predicates: tests `p` against `f(a)`.
pub fn contramap<A: ?Sized, B>(
    f: impl Fn(&A) -> B,
    p: impl Predicate1<B>,
) -> impl for<'a> Fn(&'a A) -> bool {
    move |a| p.test(&f(a))
}

/// Conjunction over any number of predicates. An empty collection matches everything.
pub fn all<A: ?Sized, P: Predicate1<A>>(
    ps: impl IntoIterator<Item = P>,
) -> impl for<'a> Fn(&'a A) -> bool {
    let ps = ps.into_iter().collect::<Vec<_>>();
    move |a| ps.iter().all(|p| p.test(a))
}

/// Disjunction over any number of predicates. An empty collection matches nothing.
pub fn any<A: ?Sized, P: Predicate1<A>>(
    ps: impl IntoIterator<Item = P>,
) -> impl for<'a> Fn(&'a A) -> bool {
    let ps = ps.into_iter().collect::<Vec<_>>();
    move |a| ps.iter().any(|p| p.test(a))
}

/// Matches inputs equal to `expected`, which may be owned or borrowed.
pub fn eq<A: Eq + ?Sized, R: Borrow<A>>(expected: R) -> impl for<'a> Fn(&'a A) -> bool {
    move |input| input == expected.borrow()
}

/// Matches inputs different from `expected`.
pub fn ne<A: Eq + ?Sized, R: Borrow<A>>(expected: R) -> impl for<'a> Fn(&'a A) -> bool {
    move |input| input != expected.borrow()
}

/// Matches inputs ordered strictly after `bound`.
pub fn gt<A: Ord + ?Sized, R: Borrow<A>>(bound: R) -> impl for<'a> Fn(&'a A) -> bool {
    move |input| input.cmp(bound.borrow()).is_gt()
}

/// Matches inputs equal to or ordered after `bound`.
pub fn ge<A: Ord + ?Sized, R: Borrow<A>>(bound: R) -> impl for<'a> Fn(&'a A) -> bool {
    move |input| input.cmp(bound.borrow()).is_ge()
}

/// Matches inputs ordered strictly before `bound`.
pub fn lt<A: Ord + ?Sized, R: Borrow<A>>(bound: R) -> impl for<'a> Fn(&'a A) -> bool {
    move |input| input.cmp(bound.borrow()).is_lt()
}

/// Matches inputs equal to or ordered before `bound`.
pub fn le<A: Ord + ?Sized, R: Borrow<A>>(bound: R) -> impl for<'a> Fn(&'a A) -> bool {
    move |input| input.cmp(bound.borrow()).is_le()
}

/// Matches values in the inclusive range `low..=high`.
pub fn between<A: Ord + ?Sized, R: Borrow<A>>(
    low: R,
    high: R,
) -> impl for<'a> Fn(&'a A) -> bool {
    and(ge::<A, R>(low), le::<A, R>(high))
}
