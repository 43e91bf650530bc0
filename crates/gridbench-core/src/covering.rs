//! Cell coverings.

use std::collections::hash_set;
use std::collections::{BTreeMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::DiscretizeError;

/// An opaque cell identifier of one tessellation scheme.
///
/// Identifiers encode a level and a hierarchical position. The textual
/// token round-trips through [`CellId::from_token`] within the same scheme.
pub trait CellId: Copy + Eq + Hash + Debug {
    /// Returns the resolution or level the cell belongs to.
    fn level(&self) -> u8;

    /// Returns the stable textual token for this cell.
    fn to_token(&self) -> String;

    /// Parses a token produced by [`CellId::to_token`].
    fn from_token(token: &str) -> Result<Self, DiscretizeError>;
}

/// An unordered set of cells covering one polygon at one resolution.
///
/// Equality is set equality. Iteration order is unspecified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellCovering<C: CellId> {
    cells: HashSet<C>,
}

impl<C: CellId> CellCovering<C> {
    /// Creates an empty covering.
    pub fn new() -> Self {
        Self {
            cells: HashSet::new(),
        }
    }

    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the covering has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns true if the cell is part of the covering.
    pub fn contains(&self, cell: &C) -> bool {
        self.cells.contains(cell)
    }

    /// Adds a cell, returning false if it was already present.
    pub fn insert(&mut self, cell: C) -> bool {
        self.cells.insert(cell)
    }

    /// Iterates over the cells in unspecified order.
    pub fn iter(&self) -> hash_set::Iter<'_, C> {
        self.cells.iter()
    }

    /// Returns the number of cells at each level.
    pub fn level_counts(&self) -> BTreeMap<u8, usize> {
        let mut counts = BTreeMap::new();
        for cell in &self.cells {
            *counts.entry(cell.level()).or_insert(0) += 1;
        }
        counts
    }

    /// Returns up to `n` tokens, sorted so progress output is reproducible.
    pub fn sample_tokens(&self, n: usize) -> Vec<String> {
        let mut tokens: Vec<String> = self.cells.iter().map(CellId::to_token).collect();
        tokens.sort_unstable();
        tokens.truncate(n);
        tokens
    }
}

impl<C: CellId> Default for CellCovering<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CellId> FromIterator<C> for CellCovering<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<'a, C: CellId> IntoIterator for &'a CellCovering<C> {
    type Item = &'a C;
    type IntoIter = hash_set::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
