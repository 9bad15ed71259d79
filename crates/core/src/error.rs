//! Error types for directory core operations.
//!
//! The query operations themselves (`search`, `apply_filters`,
//! `filter_options`) are total and never fail; fallibility is confined to
//! validated construction of listings and regions.

/// Errors that can occur when constructing directory data.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("listing name cannot be empty")]
    EmptyName,
    #[error("primary specialty cannot be empty")]
    EmptyPrimarySpecialty,
    #[error("region state cannot be empty")]
    EmptyState,
}

pub type DirectoryResult<T> = std::result::Result<T, DirectoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_names_the_offending_field() {
        assert_eq!(
            DirectoryError::EmptyName.to_string(),
            "listing name cannot be empty"
        );
        assert_eq!(
            DirectoryError::EmptyPrimarySpecialty.to_string(),
            "primary specialty cannot be empty"
        );
        assert_eq!(
            DirectoryError::EmptyState.to_string(),
            "region state cannot be empty"
        );
    }
}
