/// Errors raised while wiring a sheet to its host.
///
/// Numeric configuration is never an error; out-of-range values are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetError {
    /// `attach` was called before any content view was supplied.
    MissingContent,
    /// `attach` was called on a sheet that is already attached.
    AlreadyAttached,
}

impl std::fmt::Display for SheetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetError::MissingContent => {
                write!(f, "Sheet has no collapsed content view to attach")
            }
            SheetError::AlreadyAttached => write!(f, "Sheet is already attached to a container"),
        }
    }
}

impl std::error::Error for SheetError {}

/// Result type for sheet operations.
pub type SheetResult<T> = Result<T, SheetError>;
