use std::fmt;

use crate::global_constants;

/// The value an extraction call hands back to its caller. A service run
/// that finds no text is a distinguished success, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    Text(String),
    NoTextFound,
}

impl ExtractionOutcome {
    #[allow(dead_code)]
    pub fn has_text(&self) -> bool {
        matches!(self, ExtractionOutcome::Text(_))
    }
}

impl fmt::Display for ExtractionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionOutcome::Text(text) => write!(f, "{}", text),
            ExtractionOutcome::NoTextFound => {
                write!(f, "{}", global_constants::NO_TEXT_FOUND_MESSAGE)
            }
        }
    }
}
