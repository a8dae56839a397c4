//! Yes/no confirmation for destructive operations

use std::io::{self, BufRead, Write};

/// Ask the user a yes/no question; `true` means go ahead
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Always confirms (`--yes`)
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Prompts on stderr and reads the answer from stdin
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        let mut stderr = io::stderr();
        // A prompt that can't be shown or answered counts as cancel
        if write!(stderr, "{} [y/N] ", prompt).and_then(|_| stderr.flush()).is_err() {
            return false;
        }

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(_) => is_yes(&line),
            Err(_) => false,
        }
    }
}

/// Parse a typed answer; anything but y/yes cancels
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
