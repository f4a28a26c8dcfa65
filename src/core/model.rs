// BayLog - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants::{BAY_COUNT, DATE_FORMAT, FIRST_BAY, LAST_BAY, OTHER};
use crate::util::error::StoreError;
use chrono::NaiveDate;
use serde::Serialize;

// =============================================================================
// Bay
// =============================================================================

/// One of the nine physical wash stations.
///
/// The inner number is always within `FIRST_BAY..=LAST_BAY`; the only way to
/// build a `Bay` from an arbitrary integer is [`Bay::new`], which validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Bay(u8);

impl Bay {
    /// Validate a bay number.
    pub fn new(number: i64) -> Result<Self, StoreError> {
        if (i64::from(FIRST_BAY)..=i64::from(LAST_BAY)).contains(&number) {
            Ok(Self(number as u8))
        } else {
            Err(StoreError::InvalidBay { value: number })
        }
    }

    /// The first bay (bay 1).
    pub const fn first() -> Self {
        Self(FIRST_BAY)
    }

    /// All bays in ascending order.
    pub fn all() -> impl Iterator<Item = Bay> {
        (FIRST_BAY..=LAST_BAY).map(Bay)
    }

    /// Bay number as displayed (1-based).
    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-based slot index for per-bay arrays.
    pub fn index(self) -> usize {
        usize::from(self.0 - FIRST_BAY)
    }

    /// Two-digit badge, e.g. "03".
    pub fn badge(self) -> String {
        format!("{:02}", self.0)
    }
}

impl Default for Bay {
    fn default() -> Self {
        Self::first()
    }
}

impl std::fmt::Display for Bay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bay {}", self.0)
    }
}

// =============================================================================
// Wash record
// =============================================================================

/// One logged vehicle service event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WashRecord {
    /// Unique across the whole store. Assigned at creation, never changes.
    pub id: u64,

    /// Bay the record belongs to. Edits never move a record between bays.
    pub bay: Bay,

    /// Trimmed, uppercased, never empty.
    pub plate: String,

    /// Effective brand value.
    pub brand: String,

    /// Effective colour value.
    pub color: String,

    /// Effective wash type value.
    #[serde(rename = "type")]
    pub wash_type: String,

    /// Service date (serialised as `YYYY-MM-DD`).
    pub date: NaiveDate,

    /// Free-text operator names, e.g. "John,Doe". Not parsed.
    pub operators: String,
}

impl WashRecord {
    /// ISO `YYYY-MM-DD` rendering of the service date.
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

// =============================================================================
// Category choice ("Other" override)
// =============================================================================

/// A value picked from a catalogue, plus the free text typed when the pick
/// is the `"Other"` sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryChoice {
    /// The selected catalogue entry.
    pub value: String,

    /// Override text; only consulted when `value == "Other"`.
    pub other: String,
}

impl CategoryChoice {
    /// A plain catalogue pick with no override.
    pub fn pick(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            other: String::new(),
        }
    }

    /// The `"Other"` sentinel with the given override text.
    pub fn other(text: impl Into<String>) -> Self {
        Self {
            value: OTHER.to_string(),
            other: text.into(),
        }
    }

    /// True when the free-text override is in play.
    pub fn is_other(&self) -> bool {
        self.value == OTHER
    }

    /// The value actually stored on the record.
    ///
    /// For `"Other"` this is the trimmed override, or the literal `"Other"`
    /// when the override is blank. Any other pick is returned unchanged.
    pub fn effective(&self) -> String {
        if self.is_other() {
            let trimmed = self.other.trim();
            if trimmed.is_empty() {
                OTHER.to_string()
            } else {
                trimmed.to_string()
            }
        } else {
            self.value.clone()
        }
    }
}

// =============================================================================
// Store payloads
// =============================================================================

/// Intake payload for a new wash record.
#[derive(Debug, Clone, Default)]
pub struct NewWash {
    pub bay: Bay,
    pub plate: String,
    pub brand: CategoryChoice,
    pub color: CategoryChoice,
    pub wash_type: CategoryChoice,
    /// `None` = the current local date.
    pub date: Option<NaiveDate>,
    pub operators: String,
}

/// Partial edit of an existing record. `None` fields are left untouched.
///
/// Bay and date are deliberately absent: edits never reassign them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WashUpdate {
    pub plate: Option<String>,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub wash_type: Option<String>,
    pub operators: Option<String>,
}

impl WashUpdate {
    /// Returns true if the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.plate.is_none()
            && self.brand.is_none()
            && self.color.is_none()
            && self.wash_type.is_none()
            && self.operators.is_none()
    }
}

// =============================================================================
// Bay defaults
// =============================================================================

/// Default operator string per bay, used to pre-fill intake.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BayDefaults {
    operators: [String; BAY_COUNT],
}

impl BayDefaults {
    /// Default operators for `bay` ("" when unset).
    pub fn get(&self, bay: Bay) -> &str {
        &self.operators[bay.index()]
    }

    /// Replace the default operators for `bay`.
    pub fn set(&mut self, bay: Bay, operators: impl Into<String>) {
        self.operators[bay.index()] = operators.into();
    }
}
