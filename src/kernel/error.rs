use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// The store loop that owns the modal registry is gone.
    #[error("modal registry is no longer running")]
    RegistryClosed,
}
