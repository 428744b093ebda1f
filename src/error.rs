/// Error types for the Gorgus translator
///
/// Translation itself never fails on a word-by-word basis: unknown words are
/// passed through. The variants here cover setup problems (bad lexicon or
/// settings files) and the single request-level failure, an unsupported
/// conversion direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GorgusError {
    /// The requested conversion direction is not supported
    UnsupportedDirection(String),
    /// The lexicon source is malformed
    LexiconFormat(String),
    /// Reading or writing a file failed
    Io(String),
    /// Settings could not be serialized or deserialized
    Settings(String),
    /// A phrase could not be compiled into a matcher
    Pattern(String),
}

impl std::fmt::Display for GorgusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GorgusError::UnsupportedDirection(direction) => write!(
                f,
                "Unsupported conversion direction '{}': only \"gorgus\" (to_conlang) or \"english\" (to_natural) are valid",
                direction
            ),
            GorgusError::LexiconFormat(msg) => write!(f, "Lexicon format error: {}", msg),
            GorgusError::Io(msg) => write!(f, "I/O error: {}", msg),
            GorgusError::Settings(msg) => write!(f, "Settings error: {}", msg),
            GorgusError::Pattern(msg) => write!(f, "Pattern error: {}", msg),
        }
    }
}

impl std::error::Error for GorgusError {}

/// Result type for Gorgus operations
pub type GorgusResult<T> = Result<T, GorgusError>;
