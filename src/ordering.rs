//! Comparators that are allowed to fail.
//!
//! A `PriorityQueue` never compares its elements directly. Instead it asks a
//! `TryCompare` implementation, which may refuse to order two elements
//! (for example because they are incomparable). Any such refusal surfaces as
//! `Error::OrderingFailed` and leaves the queue untouched.

use std::cmp::Ordering;
use std::convert::Infallible;

use compare::Compare;

/// A total order over `T` whose comparisons may fail.
///
/// Implementations must be consistent: comparing the same two elements twice
/// yields the same outcome, and comparing never mutates the elements.
///
/// This is implemented for every closure of the shape
/// `Fn(&T, &T) -> Result<Ordering, E>` and, through `Total`, for every
/// infallible `compare::Compare<T>`.
pub trait TryCompare<T: ?Sized> {
	/// The failure reported by this comparator.
	type Error;

	/// Compares `lhs` with `rhs`.
	///
	/// `Ordering::Less` means that `lhs` has a lower priority than `rhs`, so
	/// `rhs` would be popped first.
	fn try_compare(&self, lhs: &T, rhs: &T) -> Result<Ordering, Self::Error>;
}

impl<T: ?Sized, E, F> TryCompare<T> for F
	where F: Fn(&T, &T) -> Result<Ordering, E>
{
	type Error = E;

	#[inline]
	fn try_compare(&self, lhs: &T, rhs: &T) -> Result<Ordering, E> {
		self(lhs, rhs)
	}
}

/// Adapts an infallible comparator from the `compare` crate.
///
/// `Total(compare::natural())` is the default order of a `PriorityQueue` and
/// makes it a max-queue; `Total(compare::natural().rev())` makes it a
/// min-queue.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Total<C>(pub C);

impl<T: ?Sized, C> TryCompare<T> for Total<C>
	where C: Compare<T>
{
	type Error = Infallible;

	#[inline]
	fn try_compare(&self, lhs: &T, rhs: &T) -> Result<Ordering, Infallible> {
		Ok(self.0.compare(lhs, rhs))
	}
}
