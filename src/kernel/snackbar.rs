use std::time::{Duration, Instant};

pub const SNACKBAR_TTL: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnackbarKind {
    Info,
    Success,
    Error,
}

/// One-line transient message shown in the status row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snackbar {
    pub message: String,
    pub kind: SnackbarKind,
    pub expires_at: Instant,
}

impl Snackbar {
    pub fn new(message: impl Into<String>, kind: SnackbarKind, now: Instant) -> Self {
        Self {
            message: message.into(),
            kind,
            expires_at: now + SNACKBAR_TTL,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
