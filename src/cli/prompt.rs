//! Interactive prompts on a terminal or any reader/writer pair

use crate::application::Operator;
use crate::domain::selection::{initial_state, interpret, Answer, SelectionState};
use crate::error::{JctlError, Result};
use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

/// One answer typed at a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text(String),
    /// End of input
    End,
    /// Ctrl-C while the prompt was waiting
    Interrupted,
}

/// Where prompt answers come from
pub trait LineInput {
    /// Called before the prompt text is flushed
    fn arm(&mut self) {}

    fn next_line(&mut self) -> io::Result<Line>;
}

impl<R: BufRead> LineInput for R {
    fn next_line(&mut self) -> io::Result<Line> {
        let mut line = String::new();
        match self.read_line(&mut line)? {
            0 => Ok(Line::End),
            _ => Ok(Line::Text(line)),
        }
    }
}

/// Standard input that a Ctrl-C can interrupt.
///
/// Lines are read on a helper thread, one per request, so nothing is read
/// from the terminal while an editor owns it. SIGINT only ends a prompt
/// that is waiting; at any other time it is left to the child process.
pub struct InterruptibleStdin {
    requests: Sender<()>,
    events: Receiver<io::Result<Line>>,
    waiting: Arc<AtomicBool>,
    outstanding: bool,
}

impl InterruptibleStdin {
    /// Install the SIGINT handler and start the reader thread. Call once.
    pub fn install() -> Result<Self> {
        let (event_tx, events) = mpsc::channel();
        let (requests, request_rx) = mpsc::channel::<()>();
        let waiting = Arc::new(AtomicBool::new(false));

        let interrupt_tx = event_tx.clone();
        let interrupt_flag = Arc::clone(&waiting);
        ctrlc::set_handler(move || {
            if interrupt_flag.swap(false, Ordering::SeqCst) {
                let _ = interrupt_tx.send(Ok(Line::Interrupted));
            }
        })
        .map_err(|e| JctlError::Io(io::Error::other(e.to_string())))?;

        thread::spawn(move || {
            let stdin = io::stdin();
            for () in request_rx {
                let event = stdin.lock().next_line();
                if event_tx.send(event).is_err() {
                    break;
                }
            }
        });

        Ok(InterruptibleStdin {
            requests,
            events,
            waiting,
            outstanding: false,
        })
    }
}

impl LineInput for InterruptibleStdin {
    fn arm(&mut self) {
        // After an interrupt the reader is still blocked on the old request
        if !self.outstanding && self.requests.send(()).is_ok() {
            self.outstanding = true;
        }
        self.waiting.store(true, Ordering::SeqCst);
    }

    fn next_line(&mut self) -> io::Result<Line> {
        if !self.outstanding {
            return Ok(Line::End);
        }

        let event = self.events.recv();
        self.waiting.store(false, Ordering::SeqCst);

        match event {
            Ok(Ok(Line::Interrupted)) => Ok(Line::Interrupted),
            Ok(other) => {
                self.outstanding = false;
                other
            }
            Err(_) => Ok(Line::End),
        }
    }
}

/// Operator reading lines from `input` and writing prompts to `output`
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<InterruptibleStdin, io::Stdout> {
    pub fn stdio() -> Result<Self> {
        Ok(Console::new(InterruptibleStdin::install()?, io::stdout()))
    }
}

impl<R: LineInput, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<Line> {
        self.input.arm();
        self.output.flush()?;

        let line = self.input.next_line()?;
        if !matches!(line, Line::Text(_)) {
            writeln!(self.output)?;
        }
        Ok(line)
    }
}

impl<R: LineInput, W: Write> Operator for Console<R, W> {
    fn choose(&mut self, names: &[String]) -> Result<SelectionState> {
        let mut state = initial_state(names.len());
        if names.is_empty() {
            return Ok(SelectionState::Cancelled);
        }

        if state == SelectionState::Prompting {
            writeln!(
                self.output,
                "Please enter the number corresponding to the entry you want to choose:"
            )?;
            writeln!(self.output)?;
            for (i, name) in names.iter().enumerate() {
                writeln!(self.output, "{:>4}) {}", i + 1, name)?;
            }
            writeln!(self.output)?;
        }

        while state == SelectionState::Prompting {
            write!(self.output, " > ")?;

            state = match self.read_line()? {
                Line::End | Line::Interrupted => SelectionState::Cancelled,
                Line::Text(line) => match interpret(Some(&line), names.len()) {
                    Ok(next) => next,
                    Err(rejection) => {
                        writeln!(self.output, "{}", rejection.message())?;
                        SelectionState::Prompting
                    }
                },
            };
        }

        if state == SelectionState::Cancelled {
            writeln!(self.output, "Exiting selection...")?;
        }
        Ok(state)
    }

    fn confirm(&mut self, question: &str) -> Result<Answer> {
        write!(self.output, "{} (y/n) ", question)?;
        match self.read_line()? {
            Line::Text(line) => Ok(Answer::from_input(Some(&line))),
            Line::End | Line::Interrupted => Ok(Answer::Indeterminate),
        }
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}
