//! Owned record tree for one document.
//!
//! # Responsibility
//! - Own the level-0 records and hand out borrowed views over them.
//!
//! # Invariants
//! - Records keep document order.
//! - The tree is never mutated through model wrappers.

use super::index::RecordIndex;
use super::node::{Element, ElementKind};
use crate::model::family::Family;
use crate::model::individual::Individual;
use serde::{Deserialize, Serialize};

/// Level-0 records of a parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordTree {
    records: Vec<Element>,
}

impl RecordTree {
    pub fn new(records: impl IntoIterator<Item = Element>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }

    pub fn records(&self) -> &[Element] {
        &self.records
    }

    /// Person records in document order.
    pub fn individuals(&self) -> impl Iterator<Item = Individual<'_>> + '_ {
        self.records
            .iter()
            .filter(|record| Individual::is_individual(record))
            .map(Individual::new)
    }

    /// Family records in document order. Each call builds fresh wrappers with
    /// empty resolution caches.
    pub fn families(&self) -> impl Iterator<Item = Family<'_>> + '_ {
        self.records
            .iter()
            .filter(|record| record.kind() == ElementKind::Family)
            .map(Family::new)
    }

    /// Builds a pointer index over the records.
    pub fn index(&self) -> RecordIndex<'_> {
        RecordIndex::build(&self.records)
    }
}
