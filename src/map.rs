// Copyright 2026 Llrbmap Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Ordered map over a left-leaning red-black tree
//!
//! Mutating calls run a recursive descent that rebuilds the path back to
//! the root, repairing the left-leaning invariants bottom-up with rotations
//! and color flips. Erasure is logical: [`LlrbMap::erase`] flips the node's
//! liveness bit and leaves the structure untouched, which keeps removal at
//! O(log n) without the complexity of red-black deletion. Tombstones
//! accumulate until [`LlrbMap::rehash`] rebuilds a compact tree from the
//! live entries.
//!
//! Lookups distinguish the two populations: [`LlrbMap::len`] counts live
//! entries while [`LlrbMap::num_nodes`] counts every allocated node.

use std::fmt;
use std::mem;

use crate::cmp::{Comparator, NaturalOrder};
use crate::iter::{Iter, IterRev, LevelOrder, Structural};
use crate::node::{Link, Node, NodeRef};

/// An ordered map keyed by a strict-less comparator.
///
/// The comparator is part of the map's type, the same way a hasher is part
/// of a `HashMap`'s type; two maps are only comparable when their
/// comparator types agree.
#[derive(Clone)]
pub struct LlrbMap<K, V, C = NaturalOrder> {
    root: Link<K, V>,
    cmp: C,
}

impl<K, V> LlrbMap<K, V> {
    /// Create an empty map ordered by `Ord`.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K, V, C> LlrbMap<K, V, C> {
    /// Create an empty map ordered by `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        LlrbMap { root: None, cmp }
    }

    /// The comparator this map orders by.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// True when the map holds no nodes at all, live or dead. O(1).
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of live entries. Walks the tree: O(n).
    pub fn len(&self) -> usize {
        Self::alive_count(self.root.as_deref())
    }

    /// Number of allocated nodes, tombstones included. O(n).
    pub fn num_nodes(&self) -> usize {
        Self::node_count(self.root.as_deref())
    }

    /// Longest root-to-leaf path in edges; -1 for an empty tree. O(n).
    pub fn height(&self) -> i32 {
        Self::edge_height(self.root.as_deref())
    }

    /// Drop every node, live or dead.
    pub fn clear(&mut self) {
        // Drop recursion depth is bounded by the balance invariant.
        self.root = None;
    }

    /// In-order iterator over live entries.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.as_deref())
    }

    /// Reverse in-order iterator over live entries.
    pub fn iter_rev(&self) -> IterRev<'_, K, V> {
        IterRev::new(self.root.as_deref())
    }

    /// Breadth-first iterator over every node, tombstones included.
    ///
    /// Exposes tree structure rather than map content; used by the
    /// [`render`](crate::render) printers.
    pub fn iter_level_order(&self) -> LevelOrder<'_, K, V> {
        LevelOrder::new(self.root.as_deref())
    }

    /// In-order iterator over every node, tombstones included.
    ///
    /// Visits exactly [`num_nodes`](Self::num_nodes) nodes; used by the
    /// [`verify`](crate::verify) checker.
    pub fn iter_structural(&self) -> Structural<'_, K, V> {
        Structural::new(self.root.as_deref())
    }

    /// Read-only view of the root node, if any.
    pub fn root(&self) -> Option<NodeRef<'_, K, V>> {
        self.root.as_deref().map(NodeRef::new)
    }

    fn alive_count(link: Option<&Node<K, V>>) -> usize {
        match link {
            None => 0,
            Some(n) => {
                n.is_alive() as usize
                    + Self::alive_count(n.left.as_deref())
                    + Self::alive_count(n.right.as_deref())
            }
        }
    }

    fn node_count(link: Option<&Node<K, V>>) -> usize {
        match link {
            None => 0,
            Some(n) => {
                1 + Self::node_count(n.left.as_deref()) + Self::node_count(n.right.as_deref())
            }
        }
    }

    fn edge_height(link: Option<&Node<K, V>>) -> i32 {
        match link {
            None => -1,
            Some(n) => {
                1 + Self::edge_height(n.left.as_deref()).max(Self::edge_height(n.right.as_deref()))
            }
        }
    }
}

impl<K, V, C: Comparator<K>> LlrbMap<K, V, C> {
    /// Reference to the value at `key`, if a live entry exists.
    ///
    /// Tombstoned keys report `None`.
    pub fn get(&self, key: &K) -> Option<&V> {
        match self.locate(key) {
            Some(node) if node.is_alive() => Some(&node.value),
            _ => None,
        }
    }

    /// Mutable reference to the value at `key`, if a live entry exists.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut cur = self.root.as_deref_mut();
        while let Some(node) = cur {
            if self.cmp.less(key, &node.key) {
                cur = node.left.as_deref_mut();
            } else if self.cmp.less(&node.key, key) {
                cur = node.right.as_deref_mut();
            } else {
                if node.is_alive() {
                    return Some(&mut node.value);
                }
                return None;
            }
        }
        None
    }

    /// True iff a live entry exists at `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// In-order iterator positioned at the live entry for `key`.
    ///
    /// Yields that entry and then its in-order successors. If `key` is
    /// absent or tombstoned, the returned iterator is already exhausted.
    pub fn find(&self, key: &K) -> Iter<'_, K, V> {
        Iter::positioned(self.root.as_deref(), key, &self.cmp)
    }

    /// Set the value at `key`, creating or resurrecting the entry as
    /// needed. Returns the previous value if the key was live.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (mut node, previous) = Self::put_rec(self.root.take(), key, value, &self.cmp);
        node.set_black();
        self.root = Some(node);
        previous
    }

    /// Mutable reference to the value slot at `key`, inserting a
    /// default-constructed value if the key is absent.
    ///
    /// A tombstoned entry is resurrected with its previously stored value
    /// intact; only a genuinely new entry gets `V::default()`.
    pub fn get_or_default(&mut self, key: &K) -> &mut V
    where
        K: Clone,
        V: Default,
    {
        let mut node = Self::reserve_rec(self.root.take(), key, &self.cmp);
        node.set_black();
        self.root = Some(node);

        // The entry is guaranteed live now; descend again for the slot.
        let mut cur = self.root.as_deref_mut();
        while let Some(node) = cur {
            if self.cmp.less(key, &node.key) {
                cur = node.left.as_deref_mut();
            } else if self.cmp.less(&node.key, key) {
                cur = node.right.as_deref_mut();
            } else {
                return &mut node.value;
            }
        }
        unreachable!("entry created by reserve_rec")
    }

    /// Tombstone the entry at `key`. Plain BST descent, no rebalancing.
    ///
    /// Returns true iff a live entry was tombstoned; erasing an absent or
    /// already-dead key is a no-op.
    pub fn erase(&mut self, key: &K) -> bool {
        let mut cur = self.root.as_deref_mut();
        while let Some(node) = cur {
            if self.cmp.less(key, &node.key) {
                cur = node.left.as_deref_mut();
            } else if self.cmp.less(&node.key, key) {
                cur = node.right.as_deref_mut();
            } else {
                let was_alive = node.is_alive();
                node.set_dead();
                return was_alive;
            }
        }
        false
    }

    /// Rebuild the tree from its live entries, discarding tombstones.
    ///
    /// Post-condition: `len() == num_nodes()` and the balance invariants
    /// hold. O(n log n).
    pub fn rehash(&mut self)
    where
        K: Clone,
        V: Clone,
    {
        let mut fresh: Link<K, V> = None;
        for (key, value) in self.iter() {
            let (mut node, _) = Self::put_rec(fresh.take(), key.clone(), value.clone(), &self.cmp);
            node.set_black();
            fresh = Some(node);
        }
        self.root = fresh;
    }

    fn locate(&self, key: &K) -> Option<&Node<K, V>> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            if self.cmp.less(key, &node.key) {
                cur = node.left.as_deref();
            } else if self.cmp.less(&node.key, key) {
                cur = node.right.as_deref();
            } else {
                return Some(node);
            }
        }
        None
    }

    /// Recursive insert-or-overwrite. Returns the rewritten subtree root
    /// and the previous value if the key was live.
    fn put_rec(link: Link<K, V>, key: K, value: V, cmp: &C) -> (Box<Node<K, V>>, Option<V>) {
        let Some(mut node) = link else {
            return (Box::new(Node::new(key, value)), None);
        };
        let previous;
        if cmp.less(&key, &node.key) {
            let (child, prev) = Self::put_rec(node.left.take(), key, value, cmp);
            node.left = Some(child);
            previous = prev;
        } else if cmp.less(&node.key, &key) {
            let (child, prev) = Self::put_rec(node.right.take(), key, value, cmp);
            node.right = Some(child);
            previous = prev;
        } else {
            let old = mem::replace(&mut node.value, value);
            previous = node.is_alive().then_some(old);
            node.set_alive();
        }
        (Self::repair(node), previous)
    }

    /// Recursive get-or-create. On a match the stored value is kept as-is
    /// and the node is marked alive; a missing key gets a default value.
    fn reserve_rec(link: Link<K, V>, key: &K, cmp: &C) -> Box<Node<K, V>>
    where
        K: Clone,
        V: Default,
    {
        let Some(mut node) = link else {
            return Box::new(Node::new(key.clone(), V::default()));
        };
        if cmp.less(key, &node.key) {
            node.left = Some(Self::reserve_rec(node.left.take(), key, cmp));
        } else if cmp.less(&node.key, key) {
            node.right = Some(Self::reserve_rec(node.right.take(), key, cmp));
        } else {
            node.set_alive();
        }
        Self::repair(node)
    }

    /// Bottom-up repair of the left-leaning invariants. Order matters:
    /// lean a red right child left, unstack two left reds, then split a
    /// node with two red children.
    fn repair(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        if node.has_red_right() && !node.has_red_left() {
            node = Self::rotate_left(node);
        }
        if node.has_red_left() && node.left.as_ref().is_some_and(|l| l.has_red_left()) {
            node = Self::rotate_right(node);
        }
        if node.has_red_left() && node.has_red_right() {
            if let Some(left) = node.left.as_mut() {
                left.set_black();
            }
            if let Some(right) = node.right.as_mut() {
                right.set_black();
            }
            node.set_red();
        }
        node
    }

    /// Left rotation around `node`; requires a red right child. The pivot
    /// inherits `node`'s color and `node` turns red, leaving liveness bits
    /// alone.
    fn rotate_left(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        let mut pivot = match node.right.take() {
            Some(p) if p.is_red() => p,
            other => {
                node.right = other;
                eprintln!(" ** RotateLeft called with black right child");
                return node;
            }
        };
        node.right = pivot.left.take();
        if node.is_red() {
            pivot.set_red();
        } else {
            pivot.set_black();
        }
        node.set_red();
        pivot.left = Some(node);
        pivot
    }

    /// Mirror of [`Self::rotate_left`]; requires a red left child.
    fn rotate_right(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        let mut pivot = match node.left.take() {
            Some(p) if p.is_red() => p,
            other => {
                node.left = other;
                eprintln!(" ** RotateRight called with black left child");
                return node;
            }
        };
        node.left = pivot.right.take();
        if node.is_red() {
            pivot.set_red();
        } else {
            pivot.set_black();
        }
        node.set_red();
        pivot.right = Some(node);
        pivot
    }
}

impl<K, V, C: Default> Default for LlrbMap<K, V, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for LlrbMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Two maps are equal when their live in-order sequences are identical and
/// exhaust together. Comparator agreement is enforced by the shared `C`.
impl<K: PartialEq, V: PartialEq, C> PartialEq for LlrbMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        let mut lhs = self.iter();
        let mut rhs = other.iter();
        loop {
            match (lhs.next(), rhs.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if a == b => {}
                _ => return false,
            }
        }
    }
}

impl<K: Eq, V: Eq, C> Eq for LlrbMap<K, V, C> {}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for LlrbMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, C: Comparator<K> + Default> FromIterator<(K, V)> for LlrbMap<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::with_comparator(C::default());
        map.extend(iter);
        map
    }
}

impl<'a, K, V, C> IntoIterator for &'a LlrbMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}
