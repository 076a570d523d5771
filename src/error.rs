use thiserror::Error;

/// Errors produced by the CDL pipeline.
///
/// Every failure from preprocessing through geometry construction is one
/// of these kinds; non-fatal conditions (unknown point group, unknown
/// twin law) are carried as warnings on the parse result instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CdlError {
    /// Input blank before or after preprocessing.
    #[error("empty CDL input")]
    EmptyInput,

    /// Input exceeds the pre-preprocess character cap.
    #[error("CDL input too long: {got} characters (limit {limit})")]
    InputTooLong { got: usize, limit: usize },

    /// `$name` with no matching `@name = ...` definition.
    #[error("unresolved reference ${name}")]
    UnresolvedReference { name: String },

    /// `[` feature block without a matching `]`.
    #[error("unterminated feature block")]
    UnterminatedFeatures,

    /// Unexpected character during tokenization.
    #[error("unexpected character '{ch}' at position {position}")]
    Lex { position: usize, ch: char },

    /// Structural mismatch during parsing.
    #[error("expected {expected}, got {got} at position {position}")]
    Parse {
        expected: String,
        got: String,
        position: usize,
    },

    /// Miller index with a component count other than 3 or 4.
    #[error("miller index must have 3 or 4 components, got {got}")]
    MillerArity { got: usize },

    /// Crystal system keyword not recognized.
    #[error("unknown crystal system '{0}'")]
    UnknownSystem(String),
}

impl CdlError {
    /// Shorthand for a structural parse error.
    pub fn parse(expected: impl Into<String>, got: impl Into<String>, position: usize) -> Self {
        CdlError::Parse {
            expected: expected.into(),
            got: got.into(),
            position,
        }
    }
}

/// Common result type used throughout the library.
pub type Result<T> = std::result::Result<T, CdlError>;
