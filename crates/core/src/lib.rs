//! # meddir Core
//!
//! Query engine for the provider directory: free-text search and faceted
//! filtering over a small, fully-materialized listing collection.
//!
//! Every operation here is a pure, synchronous function over in-memory
//! data: the core holds no state of its own, performs no I/O, and never
//! mutates its input. Callers own the search text and filter selections,
//! hand the core the complete collection, and render what comes back.
//!
//! **No API concerns**: HTTP servers, authentication, and persistence of
//! listings belong to the surrounding application, not this crate.

pub mod debounce;
pub mod directory;
pub mod error;
pub mod filters;
pub mod listing;
pub mod search;

pub use debounce::Debouncer;
pub use directory::DirectoryService;
pub use error::{DirectoryError, DirectoryResult};
pub use filters::{apply_filters, filter_options, ActiveFilters, FilterOptions};
pub use listing::{Listing, Region};
pub use meddir_types::{NonEmptyText, TextError};
pub use search::search;
