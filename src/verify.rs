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

//! Structural validation
//!
//! After-the-fact checker for the tree invariants the engine is supposed
//! to maintain:
//!
//! 1. strict BST order over every node, tombstones included;
//! 2. red links lean left (no red right child beside a non-red left);
//! 3. no two consecutive red links on a left spine;
//! 4. every root-to-leaf path crosses the same number of black links;
//! 5. the root is black.
//!
//! Liveness bits are deliberately ignored everywhere except the order
//! walk's coverage: tombstones are structure like any other node.
//!
//! Like the [`render`](crate::render) printers, this module is a
//! collaborator over the public read-only surface, not part of the core.

use crate::cmp::Comparator;
use crate::error::{Error, Result};
use crate::map::LlrbMap;
use crate::node::NodeRef;

/// Verify every structural invariant of `map`, returning the first
/// violation found. An empty map is trivially valid.
pub fn check<K, V, C: Comparator<K>>(map: &LlrbMap<K, V, C>) -> Result<()> {
    let mut prev: Option<&K> = None;
    for node in map.iter_structural() {
        if let Some(prev) = prev {
            if !map.comparator().less(prev, node.key()) {
                return Err(Error::OrderViolation);
            }
        }
        prev = Some(node.key());
    }

    let Some(root) = map.root() else {
        return Ok(());
    };
    if root.is_red() {
        return Err(Error::RedRoot);
    }
    black_height(root)?;
    Ok(())
}

/// Black link count from `node` down to its leaves, verifying the
/// red-link placement rules on the way.
fn black_height<K, V>(node: NodeRef<'_, K, V>) -> Result<usize> {
    if let Some(right) = node.right() {
        if right.is_red() && !node.left().is_some_and(|l| l.is_red()) {
            return Err(Error::RightLeaningRed);
        }
    }
    if node.is_red() {
        if let Some(left) = node.left() {
            if left.is_red() {
                return Err(Error::DoubleRedLeft);
            }
        }
    }

    let left = match node.left() {
        Some(child) => black_height(child)? + child.is_black() as usize,
        None => 0,
    };
    let right = match node.right() {
        Some(child) => black_height(child)? + child.is_black() as usize,
        None => 0,
    };
    if left != right {
        return Err(Error::BlackHeightMismatch { left, right });
    }
    Ok(left)
}
