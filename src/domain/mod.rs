//! Domain layer - Entry format and matching rules

pub mod entry;
pub mod front_matter;
pub mod matcher;
pub mod selection;
pub mod slug;
pub mod template;

pub use entry::Entry;
pub use front_matter::{FrontMatter, FrontMatterError};
pub use selection::{Answer, SelectionState};
pub use template::load_template;
