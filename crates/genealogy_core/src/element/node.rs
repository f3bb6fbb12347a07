//! Tagged element node and its structural kind.
//!
//! # Responsibility
//! - Hold one parsed GEDCOM line with its nested sub-lines.
//! - Classify the node once, when it is built, into a closed `ElementKind`.
//!
//! # Invariants
//! - `kind` is derived from `tag` and never changes afterwards.
//! - Empty `value`/`pointer` input is normalized to `None`.
//! - Children keep source order.

use crate::tags;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static POINTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@[^@\s]+@$").expect("valid pointer regex"));

/// Returns whether `value` is a well-formed cross-reference such as `@I1@`.
pub fn is_pointer(value: &str) -> bool {
    POINTER_RE.is_match(value)
}

/// Occurrence kinds recognized as event-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Birth,
    Christening,
    Death,
    Burial,
    Cremation,
    Adoption,
    Baptism,
    BarMitzvah,
    BasMitzvah,
    Blessing,
    AdultChristening,
    Confirmation,
    FirstCommunion,
    Ordination,
    Naturalization,
    Emigration,
    Immigration,
    Census,
    Probate,
    Will,
    Graduation,
    Retirement,
    Residence,
    /// Generic `EVEN` record, typed by its `TYPE` sub-line.
    Generic,
    Annulment,
    Divorce,
    DivorceFiled,
    Engagement,
    MarriageBann,
    MarriageContract,
    Marriage,
    MarriageLicense,
    MarriageSettlement,
}

impl EventKind {
    pub const ALL: [EventKind; 33] = [
        Self::Birth,
        Self::Christening,
        Self::Death,
        Self::Burial,
        Self::Cremation,
        Self::Adoption,
        Self::Baptism,
        Self::BarMitzvah,
        Self::BasMitzvah,
        Self::Blessing,
        Self::AdultChristening,
        Self::Confirmation,
        Self::FirstCommunion,
        Self::Ordination,
        Self::Naturalization,
        Self::Emigration,
        Self::Immigration,
        Self::Census,
        Self::Probate,
        Self::Will,
        Self::Graduation,
        Self::Retirement,
        Self::Residence,
        Self::Generic,
        Self::Annulment,
        Self::Divorce,
        Self::DivorceFiled,
        Self::Engagement,
        Self::MarriageBann,
        Self::MarriageContract,
        Self::Marriage,
        Self::MarriageLicense,
        Self::MarriageSettlement,
    ];

    /// Looks up the event kind for a GEDCOM tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.tag() == tag)
    }

    /// GEDCOM tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Birth => tags::BIRTH,
            Self::Christening => tags::CHRISTENING,
            Self::Death => tags::DEATH,
            Self::Burial => tags::BURIAL,
            Self::Cremation => tags::CREMATION,
            Self::Adoption => tags::ADOPTION,
            Self::Baptism => tags::BAPTISM,
            Self::BarMitzvah => tags::BAR_MITZVAH,
            Self::BasMitzvah => tags::BAS_MITZVAH,
            Self::Blessing => tags::BLESSING,
            Self::AdultChristening => tags::ADULT_CHRISTENING,
            Self::Confirmation => tags::CONFIRMATION,
            Self::FirstCommunion => tags::FIRST_COMMUNION,
            Self::Ordination => tags::ORDINATION,
            Self::Naturalization => tags::NATURALIZATION,
            Self::Emigration => tags::EMIGRATION,
            Self::Immigration => tags::IMMIGRATION,
            Self::Census => tags::CENSUS,
            Self::Probate => tags::PROBATE,
            Self::Will => tags::WILL,
            Self::Graduation => tags::GRADUATION,
            Self::Retirement => tags::RETIREMENT,
            Self::Residence => tags::RESIDENCE,
            Self::Generic => tags::GENERIC_EVENT,
            Self::Annulment => tags::ANNULMENT,
            Self::Divorce => tags::DIVORCE,
            Self::DivorceFiled => tags::DIVORCE_FILED,
            Self::Engagement => tags::ENGAGEMENT,
            Self::MarriageBann => tags::MARRIAGE_BANN,
            Self::MarriageContract => tags::MARRIAGE_CONTRACT,
            Self::Marriage => tags::MARRIAGE,
            Self::MarriageLicense => tags::MARRIAGE_LICENSE,
            Self::MarriageSettlement => tags::MARRIAGE_SETTLEMENT,
        }
    }

    /// Whether this event normally belongs to a `FAM` record.
    pub fn is_family_event(self) -> bool {
        matches!(
            self,
            Self::Annulment
                | Self::Divorce
                | Self::DivorceFiled
                | Self::Engagement
                | Self::MarriageBann
                | Self::MarriageContract
                | Self::Marriage
                | Self::MarriageLicense
                | Self::MarriageSettlement
        )
    }
}

/// Role of a family link line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkRole {
    Husband,
    Wife,
    Child,
}

/// Structural kind of an element, decided from its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// `INDI` record.
    Individual,
    /// `FAM` record.
    Family,
    /// Event-bearing line.
    Event(EventKind),
    /// `DATE` line.
    Date,
    /// `PLAC` line.
    Place,
    /// `HUSB`/`WIFE`/`CHIL` link inside a family.
    Link(LinkRole),
    /// Anything the model layer does not interpret.
    Other,
}

impl ElementKind {
    /// Classifies a tag.
    pub fn classify(tag: &str) -> Self {
        match tag {
            tags::INDIVIDUAL => Self::Individual,
            tags::FAMILY => Self::Family,
            tags::DATE => Self::Date,
            tags::PLACE => Self::Place,
            tags::HUSBAND => Self::Link(LinkRole::Husband),
            tags::WIFE => Self::Link(LinkRole::Wife),
            tags::CHILD => Self::Link(LinkRole::Child),
            other => EventKind::from_tag(other).map_or(Self::Other, Self::Event),
        }
    }
}

/// One node of the parsed record tree.
///
/// Deserializes from `{tag, value?, pointer?, children?}`; `kind` is
/// recomputed from `tag` and never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ElementRecord")]
pub struct Element {
    tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pointer: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Element>,
    #[serde(skip_serializing)]
    kind: ElementKind,
}

#[derive(Deserialize)]
struct ElementRecord {
    tag: String,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    pointer: Option<String>,
    #[serde(default)]
    children: Vec<Element>,
}

impl From<ElementRecord> for Element {
    fn from(record: ElementRecord) -> Self {
        let mut element = Element::new(record.tag).with_children(record.children);
        element.value = non_empty(record.value);
        element.pointer = non_empty(record.pointer);
        element
    }
}

impl Element {
    /// Creates a childless element and classifies it.
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        let kind = ElementKind::classify(&tag);
        Self {
            tag,
            value: None,
            pointer: None,
            children: Vec::new(),
            kind,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = non_empty(Some(value.into()));
        self
    }

    /// Sets the cross-reference this element defines (`0 @I1@ INDI`).
    pub fn with_pointer(mut self, pointer: impl Into<String>) -> Self {
        self.pointer = non_empty(Some(pointer.into()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn pointer(&self) -> Option<&str> {
        self.pointer.as_deref()
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Immediate children in source order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn is_event(&self) -> bool {
        matches!(self.kind, ElementKind::Event(_))
    }

    pub fn is_date(&self) -> bool {
        self.kind == ElementKind::Date
    }

    /// Whether this line's value points at another record.
    pub fn is_pointer_reference(&self) -> bool {
        self.value().is_some_and(is_pointer)
    }

    /// First immediate child of the given kind.
    pub fn first_child_of_kind(&self, kind: ElementKind) -> Option<&Element> {
        self.children.iter().find(|child| child.kind == kind)
    }

    /// Presence test for `tag` anywhere below this element.
    pub fn has_descendant_tag(&self, tag: &str) -> bool {
        self.children
            .iter()
            .any(|child| child.tag == tag || child.has_descendant_tag(tag))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}
