//! Storage and embedding abstraction trait definition

mod page_loader;
mod preference_store;

pub use page_loader::PageLoader;
pub use preference_store::{InMemoryPreferenceStore, PreferenceStore};
