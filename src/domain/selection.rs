//! Selection state machine for choosing one entry out of several
//!
//! The terminal loop lives in `cli::prompt`; this module only decides what
//! a line of operator input means.

/// Where the selection currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Prompting,
    /// Zero-based index into the listed matches
    Resolved(usize),
    Cancelled,
}

/// Why a line of input was rejected; the prompt is shown again
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    NotANumber(String),
    OutOfRange { value: i64, count: usize },
}

impl Rejection {
    pub fn message(&self) -> String {
        match self {
            Rejection::NotANumber(input) => {
                format!("ERROR: '{}' is not a number. Please try again.", input)
            }
            Rejection::OutOfRange { value, count } => format!(
                "ERROR: {} is out of range (1-{}). Please try again.",
                value, count
            ),
        }
    }
}

/// State reached before any input is read
pub fn initial_state(count: usize) -> SelectionState {
    match count {
        1 => SelectionState::Resolved(0),
        _ => SelectionState::Prompting,
    }
}

/// Interpret one line of input. `None` means end of input or interrupt.
pub fn interpret(input: Option<&str>, count: usize) -> Result<SelectionState, Rejection> {
    let Some(line) = input else {
        return Ok(SelectionState::Cancelled);
    };

    let answer = line.trim();
    if matches!(answer, "" | "q" | "quit") {
        return Ok(SelectionState::Cancelled);
    }

    let value: i64 = answer
        .parse()
        .map_err(|_| Rejection::NotANumber(answer.to_string()))?;

    if value >= 1 && (value as u64) <= count as u64 {
        Ok(SelectionState::Resolved(value as usize - 1))
    } else {
        Err(Rejection::OutOfRange { value, count })
    }
}

/// Answer to a yes/no question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    /// Anything else, including end of input; callers do nothing
    Indeterminate,
}

impl Answer {
    pub fn from_input(input: Option<&str>) -> Self {
        match input.map(|line| line.trim().to_lowercase()).as_deref() {
            Some("y") | Some("yes") => Answer::Yes,
            Some("n") | Some("no") => Answer::No,
            _ => Answer::Indeterminate,
        }
    }
}
