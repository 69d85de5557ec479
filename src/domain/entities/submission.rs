//! Form submission entity.

/// Column headers written to row 1 of the responses tab.
pub const SHEET_HEADER: [&str; 5] = ["Timestamp", "Name", "Email", "Phone", "Message"];

/// Submitted form fields, before a timestamp is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// One stored submission, mapped onto columns A–E of the tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub timestamp: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl Submission {
    pub fn new(submission: NewSubmission, timestamp: String) -> Self {
        Self {
            timestamp,
            name: submission.name,
            email: submission.email,
            phone: submission.phone,
            message: submission.message,
        }
    }

    /// Cell values in column order.
    pub fn into_row(self) -> Vec<String> {
        vec![
            self.timestamp,
            self.name,
            self.email,
            self.phone,
            self.message,
        ]
    }
}

/// The header as a row of owned cells.
pub fn header_row() -> Vec<String> {
    SHEET_HEADER.iter().map(|h| h.to_string()).collect()
}
