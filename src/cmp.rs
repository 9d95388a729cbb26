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

//! Key ordering for [`LlrbMap`](crate::LlrbMap)
//!
//! The map is parameterized over a strict-less comparator the same way
//! `HashMap` is parameterized over a `BuildHasher`. Most users keep the
//! [`NaturalOrder`] default and never touch this module; supplying a custom
//! comparator changes the key order of a single map instance without
//! requiring a newtype around the key.

/// Strict-less comparison used to order keys.
///
/// Implementations must be a strict weak ordering: `less(a, a)` is false,
/// and `less(a, b) && less(b, c)` implies `less(a, c)`. Two keys are equal
/// exactly when `!less(a, b) && !less(b, a)`. Comparators must be pure; the
/// map calls them freely during descent and repair.
pub trait Comparator<K> {
    /// Returns true iff `a` orders strictly before `b`.
    fn less(&self, a: &K, b: &K) -> bool;
}

/// The default comparator: `Ord`'s ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord> Comparator<K> for NaturalOrder {
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        a < b
    }
}

impl<K, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_order() {
        let cmp = NaturalOrder;
        assert!(cmp.less(&1, &2));
        assert!(!cmp.less(&2, &1));
        assert!(!cmp.less(&2, &2));
    }

    #[test]
    fn test_closure_comparator() {
        let desc = |a: &i32, b: &i32| b < a;
        assert!(desc.less(&9, &3));
        assert!(!desc.less(&3, &9));
        assert!(!desc.less(&3, &3));
    }
}
