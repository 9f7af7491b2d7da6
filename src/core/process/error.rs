use thiserror::Error;

/// An external tool did not complete successfully.
#[derive(Debug, Error)]
pub enum StepError {
    #[error("{label} exited with status {code}")]
    Exited { label: String, code: i32 },

    #[error("{label} was terminated by signal {signal}")]
    Signaled { label: String, signal: i32 },

    #[error("{program} not found; is it installed and on PATH?")]
    NotFound { program: String },
}

impl StepError {
    /// Exit status the dispatcher terminates with, mirroring shell conventions.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Exited { code, .. } => *code,
            Self::Signaled { signal, .. } => 128 + *signal,
            Self::NotFound { .. } => 127,
        }
    }
}
