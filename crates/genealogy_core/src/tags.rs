//! GEDCOM tag discriminators.
//!
//! # Responsibility
//! - Name every tag the model layer recognizes, exactly as GEDCOM 5.5.1
//!   spells it.
//!
//! # Invariants
//! - Tags are compared case-sensitively; upstream parsers emit them
//!   upper-case.
//! - Kind classification happens once, in `element::node`. Other modules
//!   match on `ElementKind` instead of comparing these strings.

pub const INDIVIDUAL: &str = "INDI";
pub const FAMILY: &str = "FAM";
pub const HUSBAND: &str = "HUSB";
pub const WIFE: &str = "WIFE";
pub const CHILD: &str = "CHIL";
pub const DATE: &str = "DATE";
pub const PLACE: &str = "PLAC";

// Individual events.
pub const BIRTH: &str = "BIRT";
pub const CHRISTENING: &str = "CHR";
pub const DEATH: &str = "DEAT";
pub const BURIAL: &str = "BURI";
pub const CREMATION: &str = "CREM";
pub const ADOPTION: &str = "ADOP";
pub const BAPTISM: &str = "BAPM";
pub const BAR_MITZVAH: &str = "BARM";
pub const BAS_MITZVAH: &str = "BASM";
pub const BLESSING: &str = "BLES";
pub const ADULT_CHRISTENING: &str = "CHRA";
pub const CONFIRMATION: &str = "CONF";
pub const FIRST_COMMUNION: &str = "FCOM";
pub const ORDINATION: &str = "ORDN";
pub const NATURALIZATION: &str = "NATU";
pub const EMIGRATION: &str = "EMIG";
pub const IMMIGRATION: &str = "IMMI";
pub const CENSUS: &str = "CENS";
pub const PROBATE: &str = "PROB";
pub const WILL: &str = "WILL";
pub const GRADUATION: &str = "GRAD";
pub const RETIREMENT: &str = "RETI";
pub const RESIDENCE: &str = "RESI";
pub const GENERIC_EVENT: &str = "EVEN";

// Family events.
pub const ANNULMENT: &str = "ANUL";
pub const DIVORCE: &str = "DIV";
pub const DIVORCE_FILED: &str = "DIVF";
pub const ENGAGEMENT: &str = "ENGA";
pub const MARRIAGE_BANN: &str = "MARB";
pub const MARRIAGE_CONTRACT: &str = "MARC";
pub const MARRIAGE: &str = "MARR";
pub const MARRIAGE_LICENSE: &str = "MARL";
pub const MARRIAGE_SETTLEMENT: &str = "MARS";

/// Substring every person pointer carries (`@I12@`).
///
/// A cheap structural guard only; the index still decides the record type.
pub const INDIVIDUAL_POINTER_MARKER: &str = "I";
