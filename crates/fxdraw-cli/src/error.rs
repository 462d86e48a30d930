use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("could not read ticket file {path}: {reason}")]
    TicketFile { path: String, reason: String },

    #[error(transparent)]
    Validation(#[from] fxdraw_core::ValidationError),

    #[error(transparent)]
    Rates(#[from] fxdraw_core::RateError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<fxdraw_core::DrawError> for CliError {
    fn from(error: fxdraw_core::DrawError) -> Self {
        match error {
            fxdraw_core::DrawError::Validation(inner) => Self::Validation(inner),
            fxdraw_core::DrawError::Rates(inner) => Self::Rates(inner),
        }
    }
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::TicketFile { .. } => 1,
            Self::Validation(_) => 2,
            Self::Rates(_) => 3,
            Self::Io(_) => 10,
        }
    }
}
