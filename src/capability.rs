//! Probing for the external trash utility.

use crate::security::TRASH_PROGRAM;

/// Answers "is a trash mechanism available on this host".
pub trait TrashProbe: Send + Sync {
    fn is_available(&self) -> bool;
}

/// Looks the trash program up on `PATH`.
#[derive(Debug, Clone)]
pub struct PathProbe {
    program: String,
}

impl PathProbe {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for PathProbe {
    fn default() -> Self {
        Self::new(TRASH_PROGRAM)
    }
}

impl TrashProbe for PathProbe {
    fn is_available(&self) -> bool {
        match which::which(&self.program) {
            Ok(path) => {
                tracing::debug!("Found {} at {}", self.program, path.display());
                true
            }
            Err(e) => {
                tracing::debug!("{} not found on PATH: {}", self.program, e);
                false
            }
        }
    }
}

/// Fixed answer, for tests and for hosts that already know.
#[derive(Debug, Clone, Copy)]
pub struct StaticProbe(pub bool);

impl TrashProbe for StaticProbe {
    fn is_available(&self) -> bool {
        self.0
    }
}
