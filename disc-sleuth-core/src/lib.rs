//! Shared vocabulary for the disc-sleuth workspace.
//!
//! Defines the platform enum, the reader trait alias used across crate
//! boundaries, the serial-extractor capability implemented by each platform
//! crate, and the workspace-wide error type.

use std::io::{Read, Seek};

pub mod error;
pub mod platform;
pub mod util;

pub use error::IdentError;
pub use platform::Platform;

/// A reader that implements both Read and Seek.
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

/// A heuristic that tries to pull a normalized serial number out of a disc
/// image stream.
///
/// Each platform crate provides one implementation. Extractors are
/// stateless: nothing survives a single `try_extract` call, so a shared
/// `&'static dyn SerialExtractor` is safe across threads as long as the
/// per-call stream is not shared.
pub trait SerialExtractor: Send + Sync {
    /// The platform this heuristic targets.
    fn platform(&self) -> Platform;

    /// Attempt to extract a serial from the stream.
    ///
    /// # Returns
    /// * `Ok(Some(serial))` - a normalized serial (e.g., "SLUS-01234")
    /// * `Ok(None)` - the stream does not look like this platform; the
    ///   caller is expected to try the next heuristic
    /// * `Err(IdentError)` - an I/O failure not explained by the image
    ///   simply being too small or the wrong format
    fn try_extract(&self, reader: &mut dyn ReadSeek) -> Result<Option<String>, IdentError>;
}
