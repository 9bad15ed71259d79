//! Faceted filtering over the listing collection.
//!
//! Two facets are supported: specialty (drawn from every entry of each
//! listing's `specialties` list) and state (drawn from `region.state`).
//! Selections compose as OR within a facet and AND across facets. An empty
//! selection list means "no constraint from this facet", not "match
//! nothing".
//!
//! Filter options must always be derived from the full, unfiltered
//! collection so that selecting a filter never removes other options from
//! the choice list. `DirectoryService` enforces this structurally; callers
//! invoking `filter_options` directly carry the same obligation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::listing::Listing;

/// The universe of selectable filter values, derived from a collection.
///
/// Both lists are deduplicated and alphabetically sorted, so the output is
/// deterministic for a given collection regardless of its order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Unique specialty values across all listings, sorted.
    pub specialties: Vec<String>,
    /// Unique state values across all listings, sorted.
    pub states: Vec<String>,
}

/// Caller-owned filter selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilters {
    /// Selected specialties; a listing passes when any of its specialties
    /// is selected.
    #[serde(default)]
    pub specialties: Vec<String>,
    /// Selected states; a listing passes when its region state is selected.
    #[serde(default)]
    pub states: Vec<String>,
}

impl ActiveFilters {
    /// The canonical reset value with no selections.
    pub fn none() -> Self {
        Self::default()
    }

    /// True when at least one selection is active in either facet.
    pub fn is_active(&self) -> bool {
        !self.specialties.is_empty() || !self.states.is_empty()
    }
}

/// Derives the selectable filter values from `listings`.
///
/// Scans every listing, collecting unique values from all `specialties`
/// entries and all `region.state` values. Listings without specialties or
/// without a region simply contribute nothing.
pub fn filter_options(listings: &[Listing]) -> FilterOptions {
    let mut specialties = BTreeSet::new();
    let mut states = BTreeSet::new();

    for listing in listings {
        for specialty in &listing.specialties {
            specialties.insert(specialty.clone());
        }
        if let Some(region) = &listing.region {
            states.insert(region.state.clone());
        }
    }

    FilterOptions {
        specialties: specialties.into_iter().collect(),
        states: states.into_iter().collect(),
    }
}

/// Filters `listings` by the active selections.
///
/// With both selection lists empty this is the identity transform. Pure
/// and order-preserving, like `search`.
pub fn apply_filters(listings: &[Listing], active: &ActiveFilters) -> Vec<Listing> {
    if !active.is_active() {
        return listings.to_vec();
    }

    listings
        .iter()
        .filter(|listing| {
            passes_specialties(listing, &active.specialties)
                && passes_states(listing, &active.states)
        })
        .cloned()
        .collect()
}

fn passes_specialties(listing: &Listing, selected: &[String]) -> bool {
    selected.is_empty()
        || listing
            .specialties
            .iter()
            .any(|specialty| selected.contains(specialty))
}

fn passes_states(listing: &Listing, selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    // A listing without a region never matches an active state filter.
    listing
        .region
        .as_ref()
        .is_some_and(|region| selected.contains(&region.state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::Region;

    fn sample_listings() -> Vec<Listing> {
        vec![
            Listing::new(
                "Dr. A",
                "Cardiology",
                vec!["Cardiology".into()],
                Region::new("NY").unwrap(),
            )
            .unwrap(),
            Listing::new(
                "Dr. B",
                "Orthopedics",
                vec!["Orthopedics".into(), "Sports Medicine".into()],
                Region::new("CA").unwrap(),
            )
            .unwrap(),
        ]
    }

    fn names(results: &[Listing]) -> Vec<&str> {
        results.iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn empty_filters_are_identity() {
        let listings = sample_listings();
        let results = apply_filters(&listings, &ActiveFilters::none());
        assert_eq!(results, listings);
    }

    #[test]
    fn none_has_no_active_selections() {
        assert!(!ActiveFilters::none().is_active());
    }

    #[test]
    fn any_selection_is_active() {
        let by_specialty = ActiveFilters {
            specialties: vec!["Cardiology".into()],
            states: vec![],
        };
        assert!(by_specialty.is_active());

        let by_state = ActiveFilters {
            specialties: vec![],
            states: vec!["NY".into()],
        };
        assert!(by_state.is_active());
    }

    #[test]
    fn specialty_selection_matches_any_entry() {
        let listings = sample_listings();
        // "Sports Medicine" is Dr. B's second specialty.
        let active = ActiveFilters {
            specialties: vec!["Sports Medicine".into()],
            states: vec![],
        };
        assert_eq!(names(&apply_filters(&listings, &active)), vec!["Dr. B"]);
    }

    #[test]
    fn state_selection_matches_region_state() {
        let listings = sample_listings();
        let active = ActiveFilters {
            specialties: vec![],
            states: vec!["NY".into()],
        };
        assert_eq!(names(&apply_filters(&listings, &active)), vec!["Dr. A"]);
    }

    #[test]
    fn facets_compose_with_and() {
        let listings = sample_listings();
        // No listing is both a cardiologist and in CA.
        let active = ActiveFilters {
            specialties: vec!["Cardiology".into()],
            states: vec!["CA".into()],
        };
        assert!(apply_filters(&listings, &active).is_empty());
    }

    #[test]
    fn selections_within_a_facet_compose_with_or() {
        let listings = sample_listings();
        let active = ActiveFilters {
            specialties: vec!["Cardiology".into(), "Orthopedics".into()],
            states: vec![],
        };
        assert_eq!(
            names(&apply_filters(&listings, &active)),
            vec!["Dr. A", "Dr. B"]
        );
    }

    #[test]
    fn duplicate_selections_do_not_duplicate_results() {
        let listings = sample_listings();
        let active = ActiveFilters {
            specialties: vec!["Cardiology".into(), "Cardiology".into()],
            states: vec![],
        };
        assert_eq!(names(&apply_filters(&listings, &active)), vec!["Dr. A"]);
    }

    #[test]
    fn listing_without_region_never_matches_state_filter() {
        let listings: Vec<Listing> =
            vec![serde_json::from_str(r#"{"id": "x1", "name": "Dr. Nowhere"}"#).unwrap()];
        let active = ActiveFilters {
            specialties: vec![],
            states: vec!["NY".into()],
        };
        assert!(apply_filters(&listings, &active).is_empty());
    }

    #[test]
    fn options_are_sorted_and_deduplicated() {
        let listings = sample_listings();
        let options = filter_options(&listings);
        assert_eq!(
            options.specialties,
            vec!["Cardiology", "Orthopedics", "Sports Medicine"]
        );
        assert_eq!(options.states, vec!["CA", "NY"]);
    }

    #[test]
    fn options_are_deterministic_under_reordering() {
        let listings = sample_listings();
        let mut reversed = listings.clone();
        reversed.reverse();
        assert_eq!(filter_options(&listings), filter_options(&reversed));
    }

    #[test]
    fn repeated_specialty_values_appear_once() {
        let listings = vec![
            Listing::new(
                "Dr. A",
                "Cardiology",
                vec!["Cardiology".into(), "Cardiology".into()],
                Region::new("NY").unwrap(),
            )
            .unwrap(),
            Listing::new(
                "Dr. C",
                "Cardiology",
                vec!["Cardiology".into()],
                Region::new("NY").unwrap(),
            )
            .unwrap(),
        ];
        let options = filter_options(&listings);
        assert_eq!(options.specialties, vec!["Cardiology"]);
        assert_eq!(options.states, vec!["NY"]);
    }

    #[test]
    fn deserializes_partial_filter_spec() {
        // A facet omitted from the JSON spec means "no constraint", the
        // same as an empty selection list.
        let active: ActiveFilters = serde_json::from_str(r#"{"states": ["NY"]}"#).unwrap();
        assert!(active.specialties.is_empty());
        assert_eq!(active.states, vec!["NY"]);
        assert!(active.is_active());
    }

    #[test]
    fn listing_without_region_contributes_no_state_option() {
        let listings: Vec<Listing> = vec![
            serde_json::from_str(r#"{"id": "x1", "name": "Dr. Nowhere"}"#).unwrap(),
            sample_listings().remove(0),
        ];
        let options = filter_options(&listings);
        assert_eq!(options.states, vec!["NY"]);
    }
}
