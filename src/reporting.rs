//! Types for standardized reports to the user about conversion operations.
//!
//! The goal of this is to report information about potentially fragile
//! operations, e.g. how many malformed lines a conversion skipped.

/// The [`CommandOutput<U>`] type output is generic over some data output
/// from a command, and a [`Report`] that reports information to the user.
pub struct CommandOutput<U> {
    pub value: U,
    pub report: Report,
}

impl<U> CommandOutput<U> {
    pub fn new(value: U, report: Report) -> Self {
        Self { value, report }
    }
}

/// A type to (semi) standardize reporting to the user.
#[derive(Default)]
pub struct Report {
    entries: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_issue(&mut self, message: String) {
        self.entries.push(message)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Print all entries to standard error.
    pub fn print(&self) {
        for entry in &self.entries {
            eprintln!("{}", entry);
        }
    }
}
