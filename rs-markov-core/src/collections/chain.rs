use std::fmt;

use crate::error::{GenError, Result};

/// A single link of a `Chain`.
///
/// `next` is an index into the owning chain's node storage.
#[derive(Clone, Debug)]
struct Node<T> {
	item: T,
	next: Option<usize>,
}

/// Singly linked sequence of items, used as the collision bucket of `Table`.
///
/// Nodes live in a dense `Vec` and link to each other by index, so the chain
/// owns all of its items without shared pointers. Link order, not storage
/// order, is the observable order of the chain.
///
/// ## Invariants
/// - `head` and `tail` are both `None` or both `Some`
/// - following `next` from `head` reaches `tail` after `length() - 1` hops
/// - every stored node is reachable from `head`
#[derive(Clone, Debug)]
pub struct Chain<T> {
	nodes: Vec<Node<T>>,
	head: Option<usize>,
	tail: Option<usize>,
}

impl<T> Default for Chain<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Chain<T> {
	/// Creates an empty chain.
	pub fn new() -> Self {
		Self { nodes: Vec::new(), head: None, tail: None }
	}

	/// Returns `true` if the chain holds no items.
	pub fn is_empty(&self) -> bool {
		self.head.is_none()
	}

	/// Returns the first item, if any.
	pub fn head(&self) -> Option<&T> {
		self.head.map(|index| &self.nodes[index].item)
	}

	/// Returns the last item, if any.
	pub fn tail(&self) -> Option<&T> {
		self.tail.map(|index| &self.nodes[index].item)
	}

	/// Counts the items by walking the links.
	///
	/// No counter is cached, this is O(n).
	pub fn length(&self) -> usize {
		self.iter().count()
	}

	/// Attaches `item` after the current tail in O(1).
	pub fn append(&mut self, item: T) {
		let index = self.nodes.len();
		self.nodes.push(Node { item, next: None });
		match self.tail {
			Some(tail) => self.nodes[tail].next = Some(index),
			None => self.head = Some(index),
		}
		self.tail = Some(index);
	}

	/// Attaches `item` before the current head in O(1).
	pub fn prepend(&mut self, item: T) {
		let index = self.nodes.len();
		self.nodes.push(Node { item, next: self.head });
		if self.tail.is_none() {
			self.tail = Some(index);
		}
		self.head = Some(index);
	}

	/// Iterates over the items from head to tail.
	pub fn iter(&self) -> Iter<'_, T> {
		Iter { nodes: &self.nodes, current: self.head }
	}

	/// Returns `true` if any item satisfies `predicate`.
	///
	/// Stops at the first match: O(1) when the head matches, O(n) otherwise.
	pub fn find<P>(&self, predicate: P) -> bool
	where
		P: FnMut(&T) -> bool,
	{
		self.find_item(predicate).is_some()
	}

	/// Returns the first item satisfying `predicate`.
	pub fn find_item<P>(&self, mut predicate: P) -> Option<&T>
	where
		P: FnMut(&T) -> bool,
	{
		self.iter().find(|item| predicate(*item))
	}

	/// Returns a mutable reference to the first item satisfying `predicate`.
	pub fn find_mut<P>(&mut self, predicate: P) -> Option<&mut T>
	where
		P: FnMut(&T) -> bool,
	{
		let (_, index) = self.position(predicate)?;
		Some(&mut self.nodes[index].item)
	}

	/// Removes and returns the first item satisfying `predicate`.
	///
	/// Head and tail are fixed up when an endpoint is removed.
	///
	/// # Errors
	/// Returns `GenError::ItemNotFound` if no item matches.
	pub fn delete_where<P>(&mut self, predicate: P) -> Result<T>
	where
		P: FnMut(&T) -> bool,
	{
		let (previous, index) = self.position(predicate).ok_or(GenError::ItemNotFound)?;

		let next = self.nodes[index].next;
		match previous {
			Some(previous) => self.nodes[previous].next = next,
			None => self.head = next,
		}
		if self.tail == Some(index) {
			self.tail = previous;
		}

		// Storage stays dense: the last node moves into the freed slot
		let last = self.nodes.len() - 1;
		if index != last {
			self.relink(last, index);
		}
		Ok(self.nodes.swap_remove(index).item)
	}

	/// Finds the first matching node, returning `(previous, index)`.
	fn position<P>(&self, mut predicate: P) -> Option<(Option<usize>, usize)>
	where
		P: FnMut(&T) -> bool,
	{
		let mut previous = None;
		let mut current = self.head;
		while let Some(index) = current {
			if predicate(&self.nodes[index].item) {
				return Some((previous, index));
			}
			previous = current;
			current = self.nodes[index].next;
		}
		None
	}

	/// Rewrites every link to `from` so it points at `to`.
	fn relink(&mut self, from: usize, to: usize) {
		for node in &mut self.nodes {
			if node.next == Some(from) {
				node.next = Some(to);
			}
		}
		if self.head == Some(from) {
			self.head = Some(to);
		}
		if self.tail == Some(from) {
			self.tail = Some(to);
		}
	}
}

impl<T: PartialEq> Chain<T> {
	/// Removes the first item equal to `item`.
	///
	/// # Errors
	/// Returns `GenError::ItemNotFound` if no item is equal.
	pub fn delete(&mut self, item: &T) -> Result<T> {
		self.delete_where(|candidate| candidate == item)
	}
}

impl<T: Clone> Chain<T> {
	/// Returns all items in link order.
	pub fn items(&self) -> Vec<T> {
		self.iter().cloned().collect()
	}
}

impl<T> FromIterator<T> for Chain<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut chain = Self::new();
		for item in iter {
			chain.append(item);
		}
		chain
	}
}

impl<'a, T> IntoIterator for &'a Chain<T> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<T: fmt::Display> fmt::Display for Chain<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for item in self {
			write!(f, "({item}) -> ")?;
		}
		Ok(())
	}
}

/// Head-to-tail iterator over a `Chain`.
pub struct Iter<'a, T> {
	nodes: &'a [Node<T>],
	current: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
	type Item = &'a T;

	fn next(&mut self) -> Option<Self::Item> {
		let node = &self.nodes[self.current?];
		self.current = node.next;
		Some(&node.item)
	}
}
