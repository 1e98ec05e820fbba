//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod editor;
pub mod lock;
pub mod process;
pub mod repository;
pub mod slugger;
pub mod templater;

pub use config::Config;
pub use editor::EditorSession;
pub use lock::EntryLock;
pub use repository::{EntryStore, FileSystemEntryStore};
pub use slugger::{slugger_for, Slugger};
pub use templater::{templater_for, NewEntry, Templater};
