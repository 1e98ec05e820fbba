//! jctl - Personal journal manager
//!
//! Keeps a directory of dated markdown entries with a small `key: value`
//! front-matter block, finds entries by name or text, edits them through a
//! scratch copy, and keeps file names in step with each entry's title and date.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::JctlError;
