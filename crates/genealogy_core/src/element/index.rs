//! Pointer index contract and hash-map implementation.
//!
//! # Responsibility
//! - Resolve a cross-reference string to the record that defines it.
//!
//! # Invariants
//! - Returned elements borrow the tree (`'t`), not the index, so callers may
//!   cache them beyond the index lifetime.
//! - Duplicate definitions resolve to the last record in document order.

use super::node::Element;
use log::{debug, warn};
use std::collections::HashMap;

/// Lookup from pointer (`@I1@`) to its defining element.
pub trait PointerIndex<'t> {
    /// Returns the element defining `pointer`, if any.
    fn element_by_pointer(&self, pointer: &str) -> Option<&'t Element>;
}

impl<'t, T: PointerIndex<'t> + ?Sized> PointerIndex<'t> for &T {
    fn element_by_pointer(&self, pointer: &str) -> Option<&'t Element> {
        (**self).element_by_pointer(pointer)
    }
}

/// Index over the level-0 records of one document.
#[derive(Debug, Clone, Default)]
pub struct RecordIndex<'t> {
    by_pointer: HashMap<&'t str, &'t Element>,
}

impl<'t> RecordIndex<'t> {
    /// Indexes every record that defines a pointer.
    pub fn build(records: &'t [Element]) -> Self {
        let mut by_pointer = HashMap::with_capacity(records.len());
        for record in records {
            let Some(pointer) = record.pointer() else {
                continue;
            };
            if let Some(previous) = by_pointer.insert(pointer, record) {
                warn!(
                    "event=index_build module=element status=duplicate pointer={} previous_tag={} tag={}",
                    pointer,
                    previous.tag(),
                    record.tag()
                );
            }
        }
        debug!(
            "event=index_build module=element status=ok records={} pointers={}",
            records.len(),
            by_pointer.len()
        );
        Self { by_pointer }
    }

    pub fn len(&self) -> usize {
        self.by_pointer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_pointer.is_empty()
    }

    pub fn contains(&self, pointer: &str) -> bool {
        self.by_pointer.contains_key(pointer)
    }
}

impl<'t> PointerIndex<'t> for RecordIndex<'t> {
    fn element_by_pointer(&self, pointer: &str) -> Option<&'t Element> {
        self.by_pointer.get(pointer).copied()
    }
}
