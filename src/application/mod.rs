//! Application layer - Use cases and orchestration

pub mod edit_entry;
pub mod find_entries;
pub mod list_entries;
pub mod manage_config;
pub mod new_entry;
pub mod operator;
pub mod search;
pub mod touch_entry;

pub use edit_entry::{EditEntryService, EditOutcome, SafeEditSession};
pub use find_entries::{find_by_content, find_by_name, resolve_one};
pub use list_entries::{list_entries, EntrySummary};
pub use manage_config::ConfigService;
pub use new_entry::NewEntryService;
pub use operator::Operator;
pub use search::{SearchOutcome, SearchService};
pub use touch_entry::{fix_entry, update_time, TouchService};
