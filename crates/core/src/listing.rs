//! Listing schema for the provider directory.
//!
//! A listing is immutable after creation and is only ever read by the query
//! operations. Creation, update, and deletion of listings belong to the
//! persistence layer, which hands the core a complete in-memory collection.
//!
//! Deserialized data is held to a weaker standard than constructed data:
//! every optional field defaults, and a listing missing `specialties` or a
//! region contributes no filter options and never matches a filter on that
//! facet. Absence means "doesn't match", never an error.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DirectoryError, DirectoryResult};

/// Where a provider practises.
///
/// Only `state` participates in filtering (exact match). The free-text
/// address fields are carried for display and are never searched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// State or province, matched exactly by the state filter.
    pub state: String,
    /// Optional city name, display only.
    #[serde(default)]
    pub city: Option<String>,
    /// Optional street address, display only.
    #[serde(default)]
    pub address: Option<String>,
}

impl Region {
    /// Creates a region with a validated, non-empty state.
    pub fn new(state: impl AsRef<str>) -> DirectoryResult<Self> {
        let state = meddir_types::NonEmptyText::new(state)
            .map_err(|_| DirectoryError::EmptyState)?;
        Ok(Self {
            state: state.into_string(),
            city: None,
            address: None,
        })
    }
}

/// A single provider entry in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Opaque unique identifier, assigned at creation and never reused.
    pub id: String,
    /// Display name, searchable.
    pub name: String,
    /// The headline specialty, searchable and shown in listings.
    #[serde(default)]
    pub primary_specialty: String,
    /// All practised specialties, searchable and the source of the
    /// specialty filter options. Should contain `primary_specialty` by
    /// policy; the core does not enforce this.
    #[serde(default)]
    pub specialties: Vec<String>,
    /// Practice location. A listing without a region never matches the
    /// state filter and contributes no state option.
    #[serde(default)]
    pub region: Option<Region>,
    /// Conditions treated, free-form. Searchable but deliberately not
    /// exposed as filter options: the values are too numerous and
    /// free-form to suit checkbox selection.
    #[serde(default)]
    pub conditions: Vec<String>,
    /// Long-form biography. Neither searched nor filtered.
    #[serde(default)]
    pub biography: Option<String>,
}

impl Listing {
    /// Creates a listing with validated required fields and a fresh id.
    ///
    /// The id is a v4 UUID in 32-hex simple form, matching the identifiers
    /// used elsewhere in the system.
    ///
    /// # Errors
    ///
    /// Returns a `DirectoryError` if `name` or `primary_specialty` is empty
    /// or whitespace-only.
    pub fn new(
        name: impl AsRef<str>,
        primary_specialty: impl AsRef<str>,
        specialties: Vec<String>,
        region: Region,
    ) -> DirectoryResult<Self> {
        let name =
            meddir_types::NonEmptyText::new(name).map_err(|_| DirectoryError::EmptyName)?;
        let primary_specialty = meddir_types::NonEmptyText::new(primary_specialty)
            .map_err(|_| DirectoryError::EmptyPrimarySpecialty)?;

        Ok(Self {
            id: Uuid::new_v4().simple().to_string(),
            name: name.into_string(),
            primary_specialty: primary_specialty.into_string(),
            specialties,
            region: Some(region),
            conditions: Vec::new(),
            biography: None,
        })
    }

    /// Sets the conditions treated.
    pub fn with_conditions(mut self, conditions: Vec<String>) -> Self {
        self.conditions = conditions;
        self
    }

    /// Sets the biography text.
    pub fn with_biography(mut self, biography: impl Into<String>) -> Self {
        self.biography = Some(biography.into());
        self
    }
}
