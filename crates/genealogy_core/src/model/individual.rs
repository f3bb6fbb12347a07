//! Individual domain wrapper.
//!
//! # Responsibility
//! - Give person records an identity and resolve person pointers.
//!
//! # Invariants
//! - An `Individual` always wraps an `INDI` record when built through
//!   `from_pointer`.
//! - Equality is element identity, not structural equality.

use super::event::Event;
use crate::element::index::PointerIndex;
use crate::element::node::{Element, ElementKind};
use crate::tags;
use log::debug;

/// Borrowed handle over one `INDI` record.
#[derive(Debug, Clone, Copy)]
pub struct Individual<'t> {
    element: &'t Element,
}

impl<'t> Individual<'t> {
    pub fn new(element: &'t Element) -> Self {
        Self { element }
    }

    pub fn get_raw_element(&self) -> &'t Element {
        self.element
    }

    /// The record's own cross-reference, e.g. `@I1@`.
    pub fn pointer(&self) -> Option<&'t str> {
        self.element.pointer()
    }

    /// Event lines directly under the record, in source order.
    pub fn events(&self) -> Vec<Event<'t>> {
        self.element
            .children()
            .iter()
            .filter(|child| child.is_event())
            .map(Event::new)
            .collect()
    }

    /// Resolves a person pointer through `index`.
    ///
    /// Returns `None` without consulting the index when `pointer` lacks the
    /// person marker, and `None` when the pointer is unknown or names a
    /// non-person record. Dangling references are normal in real data.
    pub fn from_pointer<I>(index: &I, pointer: &str) -> Option<Self>
    where
        I: PointerIndex<'t> + ?Sized,
    {
        if !pointer.contains(tags::INDIVIDUAL_POINTER_MARKER) {
            debug!(
                "event=resolve_individual module=model status=skipped reason=not_person_pointer pointer={}",
                pointer
            );
            return None;
        }

        let Some(element) = index.element_by_pointer(pointer) else {
            debug!(
                "event=resolve_individual module=model status=missing pointer={}",
                pointer
            );
            return None;
        };
        if !Self::is_individual(element) {
            debug!(
                "event=resolve_individual module=model status=wrong_kind pointer={} tag={}",
                pointer,
                element.tag()
            );
            return None;
        }

        Some(Self::new(element))
    }

    /// Structural type test for person records.
    pub fn is_individual(element: &Element) -> bool {
        element.kind() == ElementKind::Individual
    }
}

impl PartialEq for Individual<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.element, other.element)
    }
}

impl Eq for Individual<'_> {}
