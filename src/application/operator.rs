//! The person at the keyboard, as seen by the use cases

use crate::domain::{Answer, SelectionState};
use crate::error::Result;

pub trait Operator {
    /// Pick one of `names`. Never prompts for fewer than two.
    fn choose(&mut self, names: &[String]) -> Result<SelectionState>;

    /// Ask a yes/no question
    fn confirm(&mut self, question: &str) -> Result<Answer>;

    /// Print an informational line
    fn say(&mut self, message: &str) -> Result<()>;
}
