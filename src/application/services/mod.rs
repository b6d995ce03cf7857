pub mod file_meta_service;
pub mod suggestion_service;

pub use file_meta_service::{FileMetaView, file_meta_view};
pub use suggestion_service::{Selection, SuggestionService, SuggestionState, Target};
