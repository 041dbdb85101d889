use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A working or output buffer could not be reserved.
    #[error("failed to allocate codec buffer")]
    AllocationFailure,

    /// Byte outside the alphabet; `index` is the offset in the untrimmed input.
    #[error("invalid base58 character {character:#04x} at position {index}")]
    InvalidCharacter { character: u8, index: usize },
}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Error::AllocationFailure
    }
}
