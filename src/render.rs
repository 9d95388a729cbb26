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

//! Level-order tree printers
//!
//! Debug renderings of a map's physical tree, one output row per tree
//! level. These functions are collaborators, not part of the map core:
//! they consume only the public read-only surface ([`LlrbMap::root`] and
//! [`NodeRef`]).
//!
//! [`write_glyphs`] and [`write_markers`] draw the complete binary tree,
//! filling absent positions with `-` so column position encodes tree
//! position. [`write_keys`] prints only the nodes present, which is
//! denser but loses alignment.
//!
//! Terminal styling maps the four flag states to four ANSI styles; dead
//! nodes render in reverse video so tombstones stand out.

use std::fmt::Display;
use std::io::Write;

use crate::error::Result;
use crate::map::LlrbMap;
use crate::node::NodeRef;

const BOLD_BLUE: &str = "\x1b[1;34m";
const BOLD_BLUE_REVERSED: &str = "\x1b[1;7;34m";
const BOLD_RED: &str = "\x1b[1;31m";
const BOLD_RED_REVERSED: &str = "\x1b[1;7;31m";
const RESET: &str = "\x1b[0m";

fn style<K, V>(node: NodeRef<'_, K, V>) -> &'static str {
    match (node.is_red(), node.is_dead()) {
        (false, false) => BOLD_BLUE,
        (false, true) => BOLD_BLUE_REVERSED,
        (true, false) => BOLD_RED,
        (true, true) => BOLD_RED_REVERSED,
    }
}

/// Complete-binary-tree layers of the map, `None` where a position is
/// absent. Stops before the first layer with no real node.
fn layers<K, V, C>(map: &LlrbMap<K, V, C>) -> Vec<Vec<Option<NodeRef<'_, K, V>>>> {
    let mut rows = Vec::new();
    let Some(root) = map.root() else {
        return rows;
    };
    let mut row = vec![Some(root)];
    while row.iter().any(Option::is_some) {
        let mut next = Vec::with_capacity(row.len() * 2);
        for slot in &row {
            match slot {
                Some(node) => {
                    next.push(node.left());
                    next.push(node.right());
                }
                None => {
                    next.push(None);
                    next.push(None);
                }
            }
        }
        rows.push(row);
        row = next;
    }
    rows
}

/// Write the tree as rows of flag glyphs, one character per position:
/// `B`/`b`/`R`/`r` per [`NodeRef::glyph`], `-` for an absent position.
pub fn write_glyphs<K, V, C, W: Write>(map: &LlrbMap<K, V, C>, out: &mut W) -> Result<()> {
    for row in layers(map) {
        write!(out, " ")?;
        for slot in row {
            match slot {
                Some(node) => write!(out, "{}", node.glyph())?,
                None => write!(out, "-")?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write the tree as rows of ANSI-styled `*` markers, `-` for an absent
/// position. The color variant of [`write_glyphs`].
pub fn write_markers<K, V, C, W: Write>(map: &LlrbMap<K, V, C>, out: &mut W) -> Result<()> {
    for row in layers(map) {
        write!(out, " ")?;
        for slot in row {
            match slot {
                Some(node) => write!(out, "{}*{}", style(node), RESET)?,
                None => write!(out, "-")?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write the tree as rows of ANSI-styled keys, right-aligned to `width`.
/// Only present nodes are written, so rows are compact but unaligned.
pub fn write_keys<K: Display, V, C, W: Write>(
    map: &LlrbMap<K, V, C>,
    out: &mut W,
    width: usize,
) -> Result<()> {
    let Some(root) = map.root() else {
        return Ok(());
    };
    let mut level = vec![root];
    while !level.is_empty() {
        if width == 1 {
            write!(out, " ")?;
        }
        let mut next = Vec::new();
        for node in &level {
            if width > 1 {
                write!(out, " ")?;
            }
            write!(
                out,
                "{}{:>width$}{}",
                style(*node),
                node.key(),
                RESET,
                width = width
            )?;
            if let Some(left) = node.left() {
                next.push(left);
            }
            if let Some(right) = node.right() {
                next.push(right);
            }
        }
        writeln!(out)?;
        level = next;
    }
    Ok(())
}
