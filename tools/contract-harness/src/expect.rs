//! Composable expectations over response values.
//!
//! A [`Matcher`] describes what it expects and, on mismatch, what it saw.
//! [`assert_that`] turns a mismatch into [`ContractError::AssertionFailure`]
//! carrying both sides, so a failed scenario can be diagnosed from the report
//! alone.
//!
//! ```
//! use contract_harness::expect::{assert_that, at, eq, every, field, len_at_least};
//! use petstore_domain::{Pet, Status};
//!
//! let pets = vec![Pet::new("Puff").with_status(Status::Sold)];
//! assert_that("at least one pet", pets.as_slice(), len_at_least(1)).unwrap();
//! assert_that(
//!     "all sold",
//!     pets.as_slice(),
//!     every(field("status", |p: &Pet| &p.status, eq(Some(Status::Sold)))),
//! )
//! .unwrap();
//! let first_is_puff = at(0, field("name", |p: &Pet| &p.name, eq("Puff")));
//! assert_that("first is Puff", pets.as_slice(), first_is_puff).unwrap();
//! ```

use std::fmt::Debug;
use std::marker::PhantomData;

use petstore_core::ContractError;

/// A predicate over `T` that can explain itself.
pub trait Matcher<T: ?Sized> {
    /// Phrase for the expected value, e.g. `equal to "Puff"`.
    fn describe(&self) -> String;

    /// `Err` carries a phrase for the actual value.
    fn check(&self, actual: &T) -> Result<(), String>;
}

/// Check `actual` against `matcher`, naming the failed `expectation`.
pub fn assert_that<T, M>(expectation: &str, actual: &T, matcher: M) -> Result<(), ContractError>
where
    T: ?Sized,
    M: Matcher<T>,
{
    matcher
        .check(actual)
        .map_err(|actual| ContractError::AssertionFailure {
            expectation: expectation.to_owned(),
            expected: matcher.describe(),
            actual,
        })
}

// ── equality and ordering ────────────────────────────────────────────────────

pub struct EqualTo<V>(V);

/// Exact equality.
pub fn eq<V>(expected: V) -> EqualTo<V> {
    EqualTo(expected)
}

impl<T, V> Matcher<T> for EqualTo<V>
where
    T: PartialEq<V> + Debug + ?Sized,
    V: Debug,
{
    fn describe(&self) -> String {
        format!("equal to {:?}", self.0)
    }

    fn check(&self, actual: &T) -> Result<(), String> {
        if actual == &self.0 {
            Ok(())
        } else {
            Err(format!("{actual:?}"))
        }
    }
}

pub struct AtLeast<V>(V);

pub fn ge<V>(bound: V) -> AtLeast<V> {
    AtLeast(bound)
}

impl<T, V> Matcher<T> for AtLeast<V>
where
    T: PartialOrd<V> + Debug + ?Sized,
    V: Debug,
{
    fn describe(&self) -> String {
        format!("greater than or equal to {:?}", self.0)
    }

    fn check(&self, actual: &T) -> Result<(), String> {
        if actual >= &self.0 {
            Ok(())
        } else {
            Err(format!("{actual:?}"))
        }
    }
}

pub struct AtMost<V>(V);

pub fn le<V>(bound: V) -> AtMost<V> {
    AtMost(bound)
}

impl<T, V> Matcher<T> for AtMost<V>
where
    T: PartialOrd<V> + Debug + ?Sized,
    V: Debug,
{
    fn describe(&self) -> String {
        format!("less than or equal to {:?}", self.0)
    }

    fn check(&self, actual: &T) -> Result<(), String> {
        if actual <= &self.0 {
            Ok(())
        } else {
            Err(format!("{actual:?}"))
        }
    }
}

// ── options ──────────────────────────────────────────────────────────────────

pub struct Present;

/// The value is `Some`.
pub fn present() -> Present {
    Present
}

impl<T> Matcher<Option<T>> for Present {
    fn describe(&self) -> String {
        "a present value".to_owned()
    }

    fn check(&self, actual: &Option<T>) -> Result<(), String> {
        match actual {
            Some(_) => Ok(()),
            None => Err("None".to_owned()),
        }
    }
}

// ── collections ──────────────────────────────────────────────────────────────

pub struct NotEmpty;

pub fn not_empty() -> NotEmpty {
    NotEmpty
}

impl<T> Matcher<[T]> for NotEmpty {
    fn describe(&self) -> String {
        "a non-empty collection".to_owned()
    }

    fn check(&self, actual: &[T]) -> Result<(), String> {
        if actual.is_empty() {
            Err("an empty collection".to_owned())
        } else {
            Ok(())
        }
    }
}

pub struct LenAtLeast(usize);

/// Collection-size threshold.
pub fn len_at_least(min: usize) -> LenAtLeast {
    LenAtLeast(min)
}

impl<T> Matcher<[T]> for LenAtLeast {
    fn describe(&self) -> String {
        format!("a collection of at least {} items", self.0)
    }

    fn check(&self, actual: &[T]) -> Result<(), String> {
        if actual.len() >= self.0 {
            Ok(())
        } else {
            Err(format!("{} items", actual.len()))
        }
    }
}

pub struct Contains<V>(V);

/// Membership: some item equals `item`.
pub fn contains<V>(item: V) -> Contains<V> {
    Contains(item)
}

impl<T, V> Matcher<[T]> for Contains<V>
where
    T: PartialEq<V> + Debug,
    V: Debug,
{
    fn describe(&self) -> String {
        format!("a collection containing {:?}", self.0)
    }

    fn check(&self, actual: &[T]) -> Result<(), String> {
        if actual.iter().any(|item| item == &self.0) {
            Ok(())
        } else {
            Err(format!("{actual:?}"))
        }
    }
}

pub struct At<M> {
    index: usize,
    inner: M,
}

/// The item at `index` exists and satisfies `inner`.
pub fn at<M>(index: usize, inner: M) -> At<M> {
    At { index, inner }
}

impl<T, M> Matcher<[T]> for At<M>
where
    M: Matcher<T>,
{
    fn describe(&self) -> String {
        format!("item [{}] {}", self.index, self.inner.describe())
    }

    fn check(&self, actual: &[T]) -> Result<(), String> {
        match actual.get(self.index) {
            Some(item) => self
                .inner
                .check(item)
                .map_err(|a| format!("item [{}] was {a}", self.index)),
            None => Err(format!("only {} items", actual.len())),
        }
    }
}

pub struct Every<M>(M);

/// Every item satisfies `inner`. Holds trivially for an empty collection.
pub fn every<M>(inner: M) -> Every<M> {
    Every(inner)
}

impl<T, M> Matcher<[T]> for Every<M>
where
    M: Matcher<T>,
{
    fn describe(&self) -> String {
        format!("every item {}", self.0.describe())
    }

    fn check(&self, actual: &[T]) -> Result<(), String> {
        actual
            .iter()
            .enumerate()
            .try_for_each(|(i, item)| {
                self.0
                    .check(item)
                    .map_err(|a| format!("item [{i}] was {a}"))
            })
    }
}

// ── projection and combinators ───────────────────────────────────────────────

pub struct Field<F, M, U: ?Sized> {
    name: &'static str,
    project: F,
    inner: M,
    _field: PhantomData<fn(&U)>,
}

/// Match `inner` against one field of the value, named `name` in diagnostics.
pub fn field<T, U, F, M>(name: &'static str, project: F, inner: M) -> Field<F, M, U>
where
    T: ?Sized,
    U: ?Sized,
    F: Fn(&T) -> &U,
    M: Matcher<U>,
{
    Field {
        name,
        project,
        inner,
        _field: PhantomData,
    }
}

impl<T, U, F, M> Matcher<T> for Field<F, M, U>
where
    T: ?Sized,
    U: ?Sized,
    F: Fn(&T) -> &U,
    M: Matcher<U>,
{
    fn describe(&self) -> String {
        format!("with `{}` {}", self.name, self.inner.describe())
    }

    fn check(&self, actual: &T) -> Result<(), String> {
        self.inner
            .check((self.project)(actual))
            .map_err(|a| format!("`{}` {a}", self.name))
    }
}

pub struct Not<M>(M);

pub fn not<M>(inner: M) -> Not<M> {
    Not(inner)
}

impl<T, M> Matcher<T> for Not<M>
where
    T: Debug + ?Sized,
    M: Matcher<T>,
{
    fn describe(&self) -> String {
        format!("not {}", self.0.describe())
    }

    fn check(&self, actual: &T) -> Result<(), String> {
        match self.0.check(actual) {
            Ok(()) => Err(format!("{actual:?}")),
            Err(_) => Ok(()),
        }
    }
}

pub struct Both<A, B>(A, B);

/// Chaining combinators available on every [`Matcher`].
pub trait MatcherExt<T: ?Sized>: Matcher<T> + Sized {
    /// Both matchers hold; the first failure is reported.
    fn and<B: Matcher<T>>(self, other: B) -> Both<Self, B> {
        Both(self, other)
    }
}

impl<T: ?Sized, M: Matcher<T>> MatcherExt<T> for M {}

impl<T, A, B> Matcher<T> for Both<A, B>
where
    T: ?Sized,
    A: Matcher<T>,
    B: Matcher<T>,
{
    fn describe(&self) -> String {
        format!("{} and {}", self.0.describe(), self.1.describe())
    }

    fn check(&self, actual: &T) -> Result<(), String> {
        self.0.check(actual)?;
        self.1.check(actual)
    }
}
