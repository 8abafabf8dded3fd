//! Seeded randomized stress tests against `std::collections::BinaryHeap`.

extern crate pairing_priority_queue;
extern crate compare;
extern crate rand;

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use compare::{natural, Compare};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use pairing_priority_queue::{PriorityQueue, Total};

#[test]
fn interleaved_operations() {
	let mut rng = StdRng::seed_from_u64(0x5eed);
	let mut pq = PriorityQueue::new();
	let mut bh = BinaryHeap::new();

	for round in 0..20_000 {
		match rng.gen_range(0..10) {
			0..=5 => {
				let elem: i64 = rng.gen_range(-1_000..1_000);
				pq.push(elem).unwrap();
				bh.push(elem);
			}
			6..=8 => {
				assert_eq!(bh.pop(), pq.pop().ok(), "round {}", round);
			}
			_ => {
				let mut other = PriorityQueue::new();
				for _ in 0..rng.gen_range(0..50) {
					let elem = rng.gen_range(-1_000..1_000);
					other.push(elem).unwrap();
					bh.push(elem);
				}
				pq.merge(&mut other).unwrap();
				assert!(other.is_empty());
			}
		}
		assert_eq!(bh.len(), pq.len());
		assert_eq!(bh.peek(), pq.peek());
	}
	assert_eq!(bh.into_sorted_vec().into_iter().rev().collect::<Vec<_>>(), {
		let mut out = Vec::new();
		while let Ok(elem) = pq.pop() {
			out.push(elem);
		}
		out
	});
}

#[test]
fn min_queue_matches_reversed_heap() {
	let mut rng = StdRng::seed_from_u64(42);
	let mut pq = PriorityQueue::with_comparator(Total(natural().rev()));
	let mut bh = BinaryHeap::new();
	for _ in 0..50_000 {
		let elem: u32 = rng.gen();
		pq.push(elem).unwrap();
		bh.push(Reverse(elem));
	}
	while let Some(Reverse(expected)) = bh.pop() {
		assert_eq!(Ok(expected), pq.pop());
	}
	assert!(pq.is_empty());
}

#[test]
fn many_merges_of_small_queues() {
	let mut rng = StdRng::seed_from_u64(99);
	let mut queues: Vec<PriorityQueue<u16>> = (0..512)
		.map(|_| {
			let mut pq = PriorityQueue::new();
			for _ in 0..rng.gen_range(0..8) {
				pq.push(rng.gen()).unwrap();
			}
			pq
		})
		.collect();
	let total: usize = queues.iter().map(|pq| pq.len()).sum();

	// pairwise merging, like a tournament
	while queues.len() > 1 {
		let mut next = Vec::with_capacity(queues.len() / 2 + 1);
		while let Some(mut a) = queues.pop() {
			if let Some(mut b) = queues.pop() {
				a.merge(&mut b).unwrap();
			}
			next.push(a);
		}
		queues = next;
	}
	let mut pq = queues.pop().unwrap();
	assert_eq!(total, pq.len());
	let mut last = None;
	while let Ok(elem) = pq.pop() {
		if let Some(last) = last {
			assert!(natural().compares_le(&elem, &last));
		}
		last = Some(elem);
	}
}

#[test]
fn drop_large_queues() {
	let mut rng = StdRng::seed_from_u64(1);
	for _ in 0..4 {
		let mut pq = PriorityQueue::new();
		for _ in 0..200_000 {
			pq.push(rng.gen::<u64>()).unwrap();
		}
		let copy = pq.clone();
		for _ in 0..1_000 {
			pq.pop().unwrap();
		}
		drop(copy);
	}
}
