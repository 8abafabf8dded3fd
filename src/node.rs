//! Nodes of the pairing heap forest and the `meld` primitive.
//!
//! The forest uses the left-child, right-sibling encoding: every node owns its
//! first child and its next sibling. A node's child chain is a list of heap
//! ordered trees whose roots are all dominated by the node itself, while the
//! trees of one sibling chain are not ordered relative to each other.

use std::fmt;

use ordering::TryCompare;

/// An owned, possibly absent, link to a node.
pub type Link<T> = Option<Box<Node<T>>>;

/// A single node of the forest.
///
/// Nodes deliberately have no `Drop` implementation: the owning queue tears
/// the forest down iteratively through `destroy_below`, which keeps deep or
/// long chains from exhausting the call stack.
pub struct Node<T> {
	pub elem   : T,
	pub child  : Link<T>,
	pub sibling: Link<T>
}

impl<T> Node<T> {
	/// Creates a new boxed node without child and sibling.
	#[inline]
	pub fn singleton(elem: T) -> Box<Self> {
		Box::new(Node{
			elem   : elem,
			child  : None,
			sibling: None
		})
	}

	/// Unwraps the element of a node that has been cut out of the forest.
	#[inline]
	pub fn into_elem(self) -> T {
		debug_assert!(self.child.is_none() && self.sibling.is_none(), "node must be detached");
		self.elem
	}

	/// Iterates over the sibling chain starting at `self`, inclusively.
	#[inline]
	pub fn siblings<'a>(&'a self) -> Siblings<'a, T> {
		Siblings{next: Some(self)}
	}

	/// Releases every node reachable from `self` through child and sibling
	/// links. `self` itself stays alive and ends up detached.
	pub fn destroy_below(&mut self) {
		let mut pending: Vec<Box<Node<T>>> = Vec::new();
		pending.extend(self.child.take());
		pending.extend(self.sibling.take());
		while let Some(mut node) = pending.pop() {
			pending.extend(node.child.take());
			pending.extend(node.sibling.take());
		}
	}
}

impl<T: Clone> Node<T> {
	/// Deep copies `self`, its child subtree and its sibling subtree.
	///
	/// The forest is a binary tree when child and sibling links are viewed as
	/// left and right edges. It is flattened in pre-order and then rebuilt
	/// back to front, so the copy never recurses.
	pub fn duplicate(&self) -> Box<Node<T>> {
		let mut preorder: Vec<&Node<T>> = Vec::new();
		let mut stack = vec![self];
		while let Some(node) = stack.pop() {
			preorder.push(node);
			if let Some(ref sibling) = node.sibling {
				stack.push(sibling);
			}
			if let Some(ref child) = node.child {
				stack.push(child);
			}
		}

		// In reverse pre-order a node's sibling copy is finished first and its
		// child copy right after, so the child copy is on top of `built`.
		let mut built: Vec<Box<Node<T>>> = Vec::with_capacity(preorder.len());
		for node in preorder.into_iter().rev() {
			let mut copy = Node::singleton(node.elem.clone());
			if node.child.is_some() {
				copy.child = built.pop();
			}
			if node.sibling.is_some() {
				copy.sibling = built.pop();
			}
			built.push(copy);
		}
		debug_assert_eq!(built.len(), 1);
		match built.pop() {
			Some(copy) => copy,
			None => Node::singleton(self.elem.clone())
		}
	}
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("Node")
			.field("elem", &self.elem)
			.field("has_child", &self.child.is_some())
			.field("has_sibling", &self.sibling.is_some())
			.finish()
	}
}

/// Iterator over a sibling chain.
pub struct Siblings<'a, T: 'a> {
	next: Option<&'a Node<T>>
}

impl<'a, T> Iterator for Siblings<'a, T> {
	type Item = &'a Node<T>;

	fn next(&mut self) -> Option<Self::Item> {
		let cur = self.next?;
		self.next = cur.sibling.as_ref().map(|sibling| &**sibling);
		Some(cur)
	}
}

/// Which of two melded roots stays on top.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Winner {
	Left,
	Right
}

/// Decides the winner of melding `lhs` with `rhs`.
///
/// `rhs` wins only if `lhs` is ordered strictly before it, so ties keep the
/// left root on top. This is the only place where the comparator is called.
#[inline]
pub fn winner<T, C>(lhs: &T, rhs: &T, cmp: &C) -> Result<Winner, C::Error>
	where C: TryCompare<T>
{
	use std::cmp::Ordering;
	match cmp.try_compare(lhs, rhs)? {
		Ordering::Less => Ok(Winner::Right),
		Ordering::Equal | Ordering::Greater => Ok(Winner::Left)
	}
}

/// Links two detached roots according to an already decided `winner`.
///
/// The loser becomes the head of the winner's child chain. Never fails.
#[inline]
pub fn link<T>(lhs: Box<Node<T>>, rhs: Box<Node<T>>, winner: Winner) -> Box<Node<T>> {
	let (mut upper, mut lower) = match winner {
		Winner::Left  => (lhs, rhs),
		Winner::Right => (rhs, lhs)
	};
	debug_assert!(lower.sibling.is_none(), "only detached roots can be linked");
	lower.sibling = upper.child.take();
	upper.child = Some(lower);
	upper
}

/// Melds the heap rooted at `other` into the heap rooted at `root`.
///
/// The comparison is made before any link is written. If it fails, `root` is
/// left exactly as it was and `other` is handed back untouched together with
/// the comparator's error.
pub fn meld<T, C>(root: &mut Link<T>, other: Box<Node<T>>, cmp: &C)
	-> Result<(), (Box<Node<T>>, C::Error)>
	where C: TryCompare<T>
{
	let top = match root.take() {
		Some(top) => top,
		None => {
			*root = Some(other);
			return Ok(())
		}
	};
	match winner(&top.elem, &other.elem, cmp) {
		Ok(side) => {
			*root = Some(link(top, other, side));
			Ok(())
		}
		Err(err) => {
			*root = Some(top);
			Err((other, err))
		}
	}
}
