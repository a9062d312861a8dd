//! Runtime lookup tables for script profiles
//!
//! Built once from configuration; lookups never allocate.

use std::collections::HashMap;

use super::config::{CharRange, CharSet};
use crate::classifier::CharClass;

/// Sorted, merged set of inclusive codepoint ranges
#[derive(Debug, Clone, Default)]
pub struct RangeSet {
    ranges: Vec<(u32, u32)>,
}

impl RangeSet {
    /// Build from configured characters and ranges
    pub fn from_char_set(set: &CharSet) -> Self {
        let singles = set.chars.iter().map(|&c| CharRange { from: c, to: c });
        Self::from_ranges(singles.chain(set.ranges.iter().copied()))
    }

    /// Build from an iterator of ranges, merging overlaps
    pub fn from_ranges(ranges: impl IntoIterator<Item = CharRange>) -> Self {
        let mut raw: Vec<(u32, u32)> = ranges
            .into_iter()
            .map(|r| (r.from as u32, r.to as u32))
            .collect();
        raw.sort_unstable();

        let mut merged: Vec<(u32, u32)> = Vec::with_capacity(raw.len());
        for (lo, hi) in raw {
            match merged.last_mut() {
                Some(last) if lo <= last.1.saturating_add(1) => last.1 = last.1.max(hi),
                _ => merged.push((lo, hi)),
            }
        }

        Self { ranges: merged }
    }

    /// Check membership - binary search over merged ranges
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        let cp = ch as u32;
        self.ranges
            .binary_search_by(|&(lo, hi)| {
                if hi < cp {
                    std::cmp::Ordering::Less
                } else if lo > cp {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    /// Iterate every member codepoint
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.ranges
            .iter()
            .flat_map(|&(lo, hi)| (lo..=hi).filter_map(char::from_u32))
    }

    /// Number of merged ranges
    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }
}

/// O(1) character class lookup
#[derive(Debug, Clone)]
pub struct ClassTable {
    /// ASCII lookup table for chars 0-127
    ascii: [CharClass; 128],
    /// Dense table over the target block
    block_start: u32,
    block: Vec<CharClass>,
    /// Configured characters outside ASCII and the block (rare)
    other: HashMap<char, CharClass>,
}

impl ClassTable {
    /// Create an empty table covering the given block
    pub fn new(block_start: char, block_end: char) -> Self {
        let start = block_start as u32;
        let len = (block_end as u32).saturating_sub(start) as usize + 1;
        Self {
            ascii: [CharClass::Other; 128],
            block_start: start,
            block: vec![CharClass::Other; len],
            other: HashMap::new(),
        }
    }

    /// Assign a class; later assignments win
    pub fn insert(&mut self, ch: char, class: CharClass) {
        if ch.is_ascii() {
            self.ascii[ch as usize] = class;
        } else if let Some(slot) = self.block_slot(ch) {
            self.block[slot] = class;
        } else {
            self.other.insert(ch, class);
        }
    }

    /// Classify a character - hot path
    #[inline]
    pub fn get(&self, ch: char) -> CharClass {
        let class = if ch.is_ascii() {
            self.ascii[ch as usize]
        } else if let Some(slot) = self.block_slot(ch) {
            self.block[slot]
        } else {
            self.other.get(&ch).copied().unwrap_or(CharClass::Other)
        };

        if class == CharClass::Other && ch.is_whitespace() {
            CharClass::Space
        } else {
            class
        }
    }

    #[inline]
    fn block_slot(&self, ch: char) -> Option<usize> {
        let offset = (ch as u32).checked_sub(self.block_start)? as usize;
        (offset < self.block.len()).then_some(offset)
    }
}
