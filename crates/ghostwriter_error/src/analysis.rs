//! Analysis error types.

/// Analysis error conditions.
///
/// Parse-class kinds (`ExtractJson`, `ParseJson`, `NotAnObject`) mean the
/// model replied but the reply did not conform; they are kept separate from
/// generation failures so callers can tell a misbehaving model from a dead
/// connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnalysisErrorKind {
    /// No JSON payload could be located in the model response
    ExtractJson(String),
    /// The extracted payload was not valid JSON
    ParseJson(String),
    /// The payload parsed but was not a JSON object
    NotAnObject(String),
    /// The submitted input failed validation before any model call
    InvalidInput(String),
}

impl std::fmt::Display for AnalysisErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisErrorKind::ExtractJson(msg) => {
                write!(f, "No JSON found in model response: {}", msg)
            }
            AnalysisErrorKind::ParseJson(msg) => write!(f, "JSON parse error: {}", msg),
            AnalysisErrorKind::NotAnObject(found) => {
                write!(f, "Expected a JSON object, found {}", found)
            }
            AnalysisErrorKind::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

/// Analysis error with source location tracking.
#[derive(Debug, Clone)]
pub struct AnalysisError {
    /// The kind of error that occurred
    pub kind: AnalysisErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl AnalysisError {
    /// Create a new AnalysisError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AnalysisErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// True when the error reflects a non-conforming model reply rather
    /// than rejected input.
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self.kind,
            AnalysisErrorKind::ExtractJson(_)
                | AnalysisErrorKind::ParseJson(_)
                | AnalysisErrorKind::NotAnObject(_)
        )
    }
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Analysis Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for AnalysisError {}
