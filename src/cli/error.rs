//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Io { .. } => crate::exitcode::IOERR,
            CliError::Application(e) => match e {
                ApplicationError::Io { .. } => crate::exitcode::IOERR,
                ApplicationError::Domain(_) => crate::exitcode::SOFTWARE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use generational_arena::Index;
    use std::io;

    #[test]
    fn given_io_failures_when_mapping_exit_code_then_ioerr() {
        let broken = || io::Error::new(io::ErrorKind::BrokenPipe, "closed");

        assert_eq!(CliError::io("write map", broken()).exit_code(), crate::exitcode::IOERR);
        let app = ApplicationError::io("read choice", broken());
        assert_eq!(CliError::from(app).exit_code(), crate::exitcode::IOERR);
    }

    #[test]
    fn given_domain_failure_when_mapping_exit_code_then_software() {
        let err = CliError::from(ApplicationError::from(DomainError::UnknownRoom(
            Index::from_raw_parts(7, 0),
        )));
        assert_eq!(err.exit_code(), crate::exitcode::SOFTWARE);
        assert!(err.to_string().starts_with("room not found"));
    }
}
