//! Application layer with client-side services built on the domain.

/// Input suggestion and file display services.
pub mod services;

pub use services::{FileMetaView, Selection, SuggestionService, SuggestionState, Target};
