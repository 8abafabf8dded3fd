//! The two-pass pairing that consolidates a sibling chain into one heap.
//!
//! Consolidation is split into a fallible dry run, `compare_siblings`, and an
//! infallible rebuild, `merge_pairs`. The dry run walks the chain on shared
//! references, asks the comparator every question the rebuild is going to
//! need and records the answers in a `Pairing` plan. The rebuild then only
//! relinks nodes according to that plan, so once the dry run has succeeded
//! nothing can abort a `pop` half way through.

use itertools::Itertools;

use node::{self, Link, Node, Winner};
use ordering::TryCompare;

/// Recorded outcomes of the comparisons of one two-pass pairing.
///
/// `first` holds one outcome per adjacent pair (left to right), `second` one
/// outcome per meld of the right to left accumulation pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Pairing {
	first : Vec<Winner>,
	second: Vec<Winner>
}

impl Pairing {
	/// Number of comparisons this plan answers.
	#[inline]
	pub fn len(&self) -> usize {
		self.first.len() + self.second.len()
	}

	/// Returns true if this plan answers exactly the comparisons of pairing a
	/// chain of `len` nodes.
	pub fn fits(&self, len: usize) -> bool {
		match len {
			0 | 1 => self.len() == 0,
			_ => self.first.len() == len / 2 && self.second.len() == (len + 1) / 2 - 1
		}
	}
}

/// Performs every comparison that pairing the chain starting at `begin` will
/// need, without touching a single link.
///
/// Absent chains and chains of length one need no comparisons at all.
pub fn compare_siblings<T, C>(begin: Option<&Node<T>>, cmp: &C) -> Result<Pairing, C::Error>
	where C: TryCompare<T>
{
	let mut plan = Pairing::default();
	let head = match begin {
		Some(head) if head.sibling.is_some() => head,
		_ => return Ok(plan)
	};

	let mut tops: Vec<&T> = Vec::new();
	let mut pairs = head.siblings().tuples::<(_, _)>();
	for (lhs, rhs) in pairs.by_ref() {
		let side = node::winner(&lhs.elem, &rhs.elem, cmp)?;
		plan.first.push(side);
		tops.push(match side {
			Winner::Left  => &lhs.elem,
			Winner::Right => &rhs.elem
		});
	}
	tops.extend(pairs.into_buffer().map(|lone| &lone.elem));

	let mut tops = tops.into_iter().rev();
	if let Some(mut acc) = tops.next() {
		for top in tops {
			let side = node::winner(top, acc, cmp)?;
			plan.second.push(side);
			if side == Winner::Left {
				acc = top;
			}
		}
	}
	Ok(plan)
}

/// Rebuilds a single heap from the chain starting at `begin`.
///
/// The chain is detached into a buffer first, adjacent pairs are linked left
/// to right and the results are then linked right to left.
///
/// `plan` must come from `compare_siblings` over the very same, unmodified
/// chain. Passing any other plan is a contract violation: it is caught by a
/// debug assertion, and release builds still keep every node but may break
/// heap order.
pub fn merge_pairs<T>(begin: Link<T>, plan: Pairing) -> Link<T> {
	let mut nodes = Vec::new();
	let mut next = begin;
	while let Some(mut node) = next {
		next = node.sibling.take();
		nodes.push(node);
	}
	if nodes.len() < 2 {
		return nodes.pop()
	}
	debug_assert!(plan.fits(nodes.len()), "pairing plan does not match the chain");

	let mut first = plan.first.into_iter();
	let mut second = plan.second.into_iter();

	let mut trees = Vec::with_capacity(nodes.len() / 2 + 1);
	let mut pairs = nodes.into_iter().tuples::<(_, _)>();
	for (lhs, rhs) in pairs.by_ref() {
		trees.push(node::link(lhs, rhs, first.next().unwrap_or(Winner::Left)));
	}
	trees.extend(pairs.into_buffer());

	let mut trees = trees.into_iter().rev();
	let last = trees.next()?;
	Some(trees.fold(last, |acc, top| {
		node::link(top, acc, second.next().unwrap_or(Winner::Left))
	}))
}
