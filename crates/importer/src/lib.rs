pub mod canonical;
pub mod error;
pub mod sources;
pub mod traits;

pub use error::{ImporterError, Result};
pub use traits::SnapshotSource;

pub use sources::file::FileSource;
pub use sources::legacy::{LegacyClient, LegacySource};
