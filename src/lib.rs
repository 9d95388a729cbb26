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

//! # llrbmap - Ordered map with tombstone deletion
//!
//! An ordered associative container backed by a left-leaning red-black
//! tree. Erasure is logical: removed entries stay in the tree as
//! tombstones, which keeps deletion at O(log n) with none of the
//! complexity of red-black delete; a deferred [`LlrbMap::rehash`] rebuilds
//! a compact tree from the live entries when the dead weight matters.
//!
//! ## Key Features
//!
//! - **O(log n) operations** - lookup, insert, and erase stay logarithmic
//!   under the red-black balance bound (height at most 2·log2(n + 1))
//! - **Tombstone erasure** - removal flips a liveness bit; a later insert
//!   of the same key resurrects the node in place
//! - **Deferred compaction** - [`LlrbMap::rehash`] rebuilds the tree from
//!   the live in-order sequence in O(n log n)
//! - **Pluggable ordering** - keys are ordered by a [`Comparator`] type
//!   parameter, defaulting to `Ord` via [`NaturalOrder`]
//! - **Four traversals** - forward and reverse in-order over live entries,
//!   plus level-order and structural in-order over the physical tree
//! - **Debug collaborators** - [`render`] tree printers and the [`verify`]
//!   invariant checker, built entirely on the public read-only surface
//!
//! ## Quick Start
//!
//! ```rust
//! use llrbmap::LlrbMap;
//!
//! let mut map: LlrbMap<i32, String> = LlrbMap::new();
//! map.insert(5, "five".to_string());
//! map.insert(3, "three".to_string());
//!
//! assert_eq!(map.get(&5), Some(&"five".to_string()));
//!
//! map.erase(&5);
//! assert_eq!(map.get(&5), None); // logically gone
//! assert_eq!(map.num_nodes(), 2); // physically still there
//!
//! map.rehash(); // compact away the tombstone
//! assert_eq!(map.num_nodes(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`cmp`] - the [`Comparator`] trait and [`NaturalOrder`] default
//! - [`iter`] - the four iterator flavors
//! - [`render`] - level-order debug printers (glyphs and ANSI color)
//! - [`verify`] - after-the-fact structural invariant checker

pub mod cmp;
pub mod error;
pub mod iter;
pub mod map;
pub mod node;
pub mod render;
pub mod verify;

// Re-export the map and its companion types for convenience
pub use cmp::{Comparator, NaturalOrder};
pub use error::{Error, Result};
pub use iter::{Iter, IterRev, LevelOrder, Structural};
pub use map::LlrbMap;
pub use node::NodeRef;
