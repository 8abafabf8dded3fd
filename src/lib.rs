#![deny(unused_imports)]
#![deny(missing_docs)]
#![cfg_attr(all(feature = "bench", test), feature(test))]

//! A priority queue backed by a pairing heap whose comparator may fail.
//!
//! `PriorityQueue` behaves like a max-heap by default: `top` yields the
//! greatest element under the configured order. Instead of requiring `Ord`,
//! the queue asks a `TryCompare` implementation for the order of two
//! elements, and that comparator is allowed to refuse.
//!
//! Every operation gives the strong guarantee: it either completes or, when
//! the comparator fails, returns `Error::OrderingFailed` and leaves the queue
//! exactly as it was before the call. `push` and `merge` compare before any
//! link is written and `pop` runs all of its comparisons in a dry run before
//! restructuring the heap.
//!
//! Pushing and merging are `O(1)`, popping is `O(log n)` amortized.

extern crate itertools;
extern crate compare;
#[macro_use]
extern crate log;
#[cfg(test)]
extern crate env_logger;
#[cfg(all(feature = "bench", test))]
extern crate rand;
#[cfg(all(feature = "bench", test))]
extern crate test;

mod node;
mod pairing;
pub mod ordering;

use std::error;
use std::fmt;

use compare::{natural, Natural};

use node::{Link, Node};
pub use ordering::{Total, TryCompare};

/// Errors that can be caused while using `PriorityQueue`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
	/// Caused when accessing or removing the top element of an empty queue.
	EmptyContainer,
	/// Caused when the comparator failed to order two elements.
	///
	/// The queue is left exactly as it was before the failing call.
	OrderingFailed
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			Error::EmptyContainer => write!(f, "priority queue is empty"),
			Error::OrderingFailed => write!(f, "comparator failed to order two elements")
		}
	}
}

impl error::Error for Error {}

/// Error returned by a failed `PriorityQueue::push`.
///
/// Holds on to the element that could not be pushed so that the caller keeps
/// ownership of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushError<T> {
	elem : T,
	error: Error
}

impl<T> PushError<T> {
	/// Returns the reason why the push failed.
	#[inline]
	pub fn error(&self) -> Error {
		self.error
	}

	/// Returns a reference to the rejected element.
	#[inline]
	pub fn elem(&self) -> &T {
		&self.elem
	}

	/// Gives the rejected element back to the caller.
	#[inline]
	pub fn into_inner(self) -> T {
		self.elem
	}
}

impl<T> From<PushError<T>> for Error {
	fn from(err: PushError<T>) -> Error {
		err.error
	}
}

impl<T> fmt::Display for PushError<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "failed to push element: {}", self.error)
	}
}

impl<T: fmt::Debug> error::Error for PushError<T> {}

/// Generic `Result` type for `PriorityQueue` methods.
pub type Result<T> = ::std::result::Result<T, Error>;

/// Type alias for the comparator of a `PriorityQueue` ordered by `Ord`.
pub type NaturalOrder<T> = Total<Natural<T>>;

/// A priority queue implemented as a pairing heap.
///
/// Elements are kept in a forest of heap ordered trees. The element that the
/// comparator orders last is always at the root and is returned by `top`.
///
/// It is a logic error for an element to be modified in such a way that its
/// ordering relative to any other element changes while it is in the queue,
/// and for the comparator to answer the same question differently over time.
pub struct PriorityQueue<T, C = NaturalOrder<T>>
	where C: TryCompare<T>
{
	/// Root of the forest, `None` if and only if the queue is empty.
	root: Link<T>,
	/// Number of elements reachable from `root`.
	len : usize,
	cmp : C
}

impl<T: Ord> PriorityQueue<T> {
	/// Creates an empty `PriorityQueue` ordered by `Ord` that pops the
	/// greatest element first.
	pub fn new() -> Self {
		PriorityQueue::with_comparator(Total(natural()))
	}
}

impl<T: Ord> Default for PriorityQueue<T> {
	fn default() -> Self {
		PriorityQueue::new()
	}
}

impl<T, C> PriorityQueue<T, C>
	where C: TryCompare<T>
{
	/// Creates an empty `PriorityQueue` ordered by the given comparator.
	pub fn with_comparator(cmp: C) -> Self {
		PriorityQueue{
			root: None,
			len : 0,
			cmp : cmp
		}
	}

	/// Returns the comparator of this `PriorityQueue`.
	#[inline]
	pub fn comparator(&self) -> &C {
		&self.cmp
	}

	/// Returns the number of elements stored in this `PriorityQueue`.
	#[inline]
	pub fn len(&self) -> usize {
		self.len
	}

	/// Returns true if this `PriorityQueue` is empty.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.root.is_none()
	}

	/// Returns a reference to the top element.
	///
	/// Fails with `Error::EmptyContainer` if the queue is empty.
	#[inline]
	pub fn top(&self) -> Result<&T> {
		self.peek().ok_or(Error::EmptyContainer)
	}

	/// Returns a reference to the top element if not empty.
	#[inline]
	pub fn peek(&self) -> Option<&T> {
		self.root.as_ref().map(|root| &root.elem)
	}

	/// Pushes `elem` onto the queue.
	///
	/// If the comparator fails, the queue is left unchanged and `elem` is
	/// handed back inside a `PushError` carrying `Error::OrderingFailed`.
	pub fn push(&mut self, elem: T) -> ::std::result::Result<(), PushError<T>> {
		let node = Node::singleton(elem);
		match node::meld(&mut self.root, node, &self.cmp) {
			Ok(()) => {
				self.len += 1;
				trace!("PriorityQueue::push: len = {}", self.len);
				Ok(())
			}
			Err((rejected, _)) => {
				debug!("PriorityQueue::push: comparator failed, element handed back");
				Err(PushError{
					elem : (*rejected).into_elem(),
					error: Error::OrderingFailed
				})
			}
		}
	}

	/// Removes the top element from the queue and returns it.
	///
	/// Fails with `Error::EmptyContainer` if the queue is empty. If the
	/// comparator fails while the remaining elements are being reordered,
	/// nothing is removed and `Error::OrderingFailed` is returned.
	pub fn pop(&mut self) -> Result<T> {
		let mut root = match self.root.take() {
			Some(root) => root,
			None => return Err(Error::EmptyContainer)
		};
		let children = root.child.as_ref().map(|child| &**child);
		let plan = match pairing::compare_siblings(children, &self.cmp) {
			Ok(plan) => plan,
			Err(_) => {
				self.root = Some(root);
				debug!("PriorityQueue::pop: comparator failed, queue left untouched");
				return Err(Error::OrderingFailed)
			}
		};
		// From here on nothing can fail.
		trace!("PriorityQueue::pop: pairing with {} recorded comparisons", plan.len());
		self.root = pairing::merge_pairs(root.child.take(), plan);
		self.len -= 1;
		Ok((*root).into_elem())
	}

	/// Moves all elements of `other` into this queue, leaving `other` empty.
	///
	/// This melds the two roots and thus costs a single comparison. If that
	/// comparison fails, both queues keep their exact contents and
	/// `Error::OrderingFailed` is returned.
	pub fn merge(&mut self, other: &mut Self) -> Result<()> {
		let donor = match other.root.take() {
			Some(donor) => donor,
			None => return Ok(())
		};
		match node::meld(&mut self.root, donor, &self.cmp) {
			Ok(()) => {
				self.len += other.len;
				other.len = 0;
				trace!("PriorityQueue::merge: len = {}", self.len);
				Ok(())
			}
			Err((donor, _)) => {
				other.root = Some(donor);
				debug!("PriorityQueue::merge: comparator failed, both queues left untouched");
				Err(Error::OrderingFailed)
			}
		}
	}

	/// Removes all elements from the queue.
	pub fn clear(&mut self) {
		if let Some(mut root) = self.root.take() {
			root.destroy_below();
		}
		self.len = 0;
	}

	/// Iterate over the values in this `PriorityQueue` by reference in unspecified order.
	pub fn values<'a>(&'a self) -> Values<'a, T> {
		Values{pending: self.root.as_ref().map(|root| &**root).into_iter().collect()}
	}
}

impl<T, C> Drop for PriorityQueue<T, C>
	where C: TryCompare<T>
{
	fn drop(&mut self) {
		self.clear()
	}
}

impl<T, C> Clone for PriorityQueue<T, C>
	where T: Clone,
	      C: TryCompare<T> + Clone
{
	fn clone(&self) -> Self {
		trace!("PriorityQueue::clone: len = {}", self.len);
		PriorityQueue{
			root: self.root.as_ref().map(|root| root.duplicate()),
			len : self.len,
			cmp : self.cmp.clone()
		}
	}

	fn clone_from(&mut self, source: &Self) {
		self.clear();
		self.root = source.root.as_ref().map(|root| root.duplicate());
		self.len  = source.len;
		self.cmp  = source.cmp.clone();
	}
}

impl<T, C> fmt::Debug for PriorityQueue<T, C>
	where T: fmt::Debug,
	      C: TryCompare<T>
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("PriorityQueue")
			.field("len", &self.len)
			.field("top", &self.peek())
			.finish()
	}
}

/// Iterator over references to values stored within a `PriorityQueue`.
pub struct Values<'a, T: 'a> {
	pending: Vec<&'a Node<T>>
}

impl<'a, T> Iterator for Values<'a, T> {
	type Item = &'a T;

	fn next(&mut self) -> Option<Self::Item> {
		let node = self.pending.pop()?;
		self.pending.extend(node.sibling.as_ref().map(|sibling| &**sibling));
		self.pending.extend(node.child.as_ref().map(|child| &**child));
		Some(&node.elem)
	}
}


#[cfg(all(feature = "bench", test))]
mod bench {
	use super::*;
	use test::{Bencher, black_box};
	use std::collections::BinaryHeap;

	fn setup_sample() -> Vec<i64> {
		use rand::seq::SliceRandom;
		let mut sample: Vec<i64> = (1..100_000).collect();
		sample.shuffle(&mut ::rand::thread_rng());
		sample
	}

	#[bench]
	fn priority_queue_push(bencher: &mut Bencher) {
		let sample = setup_sample();
		bencher.iter(|| {
			let mut pq = PriorityQueue::new();
			for &elem in sample.iter() {
				black_box(pq.push(elem)).unwrap();
			}
		});
	}

	#[bench]
	fn binary_heap_push(bencher: &mut Bencher) {
		let sample = setup_sample();
		bencher.iter(|| {
			let mut bh = BinaryHeap::new();
			for &elem in sample.iter() {
				black_box(bh.push(elem));
			}
		});
	}

	#[bench]
	fn priority_queue_pop(bencher: &mut Bencher) {
		let sample = setup_sample();
		let mut pq = PriorityQueue::new();
		for &elem in sample.iter() {
			pq.push(elem).unwrap();
		}
		bencher.iter(|| {
			let mut pq = pq.clone();
			while let Ok(elem) = pq.pop() {
				black_box(elem);
			}
		});
	}

	#[bench]
	fn binary_heap_pop(bencher: &mut Bencher) {
		let sample = setup_sample();
		let bh: BinaryHeap<i64> = sample.iter().cloned().collect();
		bencher.iter(|| {
			let mut bh = bh.clone();
			while let Some(elem) = bh.pop() {
				black_box(elem);
			}
		});
	}

	#[bench]
	fn priority_queue_clone(bencher: &mut Bencher) {
		let sample = setup_sample();
		let mut pq = PriorityQueue::new();
		for &elem in sample.iter() {
			pq.push(elem).unwrap();
		}
		bencher.iter(|| black_box(pq.clone()));
	}
}
