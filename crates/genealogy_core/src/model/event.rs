//! Event domain wrapper.
//!
//! # Responsibility
//! - Answer "is there a date, and which line is it" for one event line.
//!
//! # Invariants
//! - `has_date()` and `get_date()` inspect the same depth (immediate
//!   children), so `has_date() == get_date().is_some()` always holds.
//! - The wrapped element is borrowed, never mutated.

use crate::element::node::{Element, ElementKind, EventKind};

/// Birth, marriage, death or any other event-bearing line.
#[derive(Debug, Clone, Copy)]
pub struct Event<'t> {
    event: &'t Element,
}

impl<'t> Event<'t> {
    /// Wraps an event-bearing element.
    pub fn new(event: &'t Element) -> Self {
        debug_assert!(event.is_event(), "`{}` is not event-bearing", event.tag());
        Self { event }
    }

    pub fn get_raw_event(&self) -> &'t Element {
        self.event
    }

    /// `None` only when the element was wrapped despite not being an event.
    pub fn kind(&self) -> Option<EventKind> {
        match self.event.kind() {
            ElementKind::Event(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn has_date(&self) -> bool {
        self.event.children().iter().any(Element::is_date)
    }

    /// First immediate `DATE` child.
    pub fn get_date(&self) -> Option<&'t Element> {
        if !self.has_date() {
            return None;
        }
        self.event.first_child_of_kind(ElementKind::Date)
    }

    /// First immediate `PLAC` child.
    pub fn get_place(&self) -> Option<&'t Element> {
        self.event.first_child_of_kind(ElementKind::Place)
    }
}

impl PartialEq for Event<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.event, other.event)
    }
}

impl Eq for Event<'_> {}
