use thiserror::Error;

/// The ways a [`Container`](crate::Container) operation can fail.
/// Both are caller errors; the container is never modified when one is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    #[error("element not found in container")]
    NotFound,

    #[error("index {index} out of range for container of length {len}")]
    OutOfRange { index: usize, len: usize },
}
