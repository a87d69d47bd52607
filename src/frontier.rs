//! Bookkeeping for a single best-first search: a binary heap frontier with insertion-order
//! tie-breaking and an indexed search tree of best known predecessors.
use fxhash::{FxBuildHasher, FxHashSet};
use grid_util::point::Point;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent index recorded for the root of the search tree.
pub(crate) const NO_PARENT: usize = usize::MAX;

#[derive(Clone, Copy, Debug)]
pub(crate) struct FrontierEntry {
    pub key: u32,
    pub cost: u32,
    pub counter: u64,
    pub index: usize,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.counter == other.counter
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap yields the smallest key first, and the earliest inserted
        // entry among equal keys.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.counter.cmp(&self.counter))
    }
}

/// Min-priority frontier. `queued` mirrors which tree indices currently have a live entry in
/// the heap, which the heap itself cannot answer.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    queued: FxHashSet<usize>,
    counter: u64,
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier::default()
    }
    /// Pushes an entry and returns true if the index was not already queued. Pushing a queued
    /// index again leaves the older entry in the heap; it is recognised as stale on pop.
    pub fn push(&mut self, index: usize, key: u32, cost: u32) -> bool {
        self.heap.push(FrontierEntry {
            key,
            cost,
            counter: self.counter,
            index,
        });
        self.counter += 1;
        self.queued.insert(index)
    }
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }
    pub fn remove(&mut self, index: usize) {
        self.queued.remove(&index);
    }
}

/// Best known predecessor and accumulated cost per discovered cell. Cells missing from the tree
/// have infinite cost.
#[derive(Debug, Default)]
pub(crate) struct SearchTree {
    parents: FxIndexMap<Point, (usize, u32)>,
}

impl SearchTree {
    pub fn with_root(root: Point) -> SearchTree {
        let mut parents = FxIndexMap::default();
        parents.insert(root, (NO_PARENT, 0));
        SearchTree { parents }
    }
    pub fn get(&self, index: usize) -> Option<(Point, usize, u32)> {
        self.parents
            .get_index(index)
            .map(|(&point, &(parent, cost))| (point, parent, cost))
    }
    /// Records `parent` as predecessor of `point` if `cost` beats the best known cost.
    /// Returns the tree index of `point` on improvement.
    pub fn relax(&mut self, point: Point, parent: usize, cost: u32) -> Option<usize> {
        match self.parents.entry(point) {
            Vacant(e) => {
                let n = e.index();
                e.insert((parent, cost));
                Some(n)
            }
            Occupied(mut e) => {
                if e.get().1 > cost {
                    e.insert((parent, cost));
                    Some(e.index())
                } else {
                    None
                }
            }
        }
    }
    /// Follows parent links from `index` back to the root, yielding the tree indices on the way.
    pub fn ancestry(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let mut next = Some(index);
        std::iter::from_fn(move || {
            let current = next?;
            let (_, parent, _) = self.get(current)?;
            next = (parent != NO_PARENT).then_some(parent);
            Some(current)
        })
    }
}
