/// All errors produced by arcmask.
///
/// The matching engine itself is a total boolean predicate and never fails;
/// errors only arise on the fallible periphery (decoding raw mode bits,
/// reading mask-list files).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid match mode: {0:#x}")]
    InvalidMode(u32),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

impl Error {
    pub fn invalid_mode(bits: u32) -> Self {
        Self::InvalidMode(bits)
    }
}
