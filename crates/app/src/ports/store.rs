use std::path::PathBuf;

use thiserror::Error;

use gridfit_domain::overrides::{OverrideMap, PersistedSizing};

#[derive(Debug, Clone, Error)]
pub enum SizingStoreError {
    #[error("sizing file version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },
    #[error("read error: {0}")]
    Read(String),
    #[error("write error: {0}")]
    Write(String),
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error("io error: {0}")]
    Io(String),
}

/// Durable home for the committed override set.
///
/// The engine treats this as fire-and-forget on save; a failing store never
/// poisons layout state. Loading happens once per mount.
pub trait SizingStore: Send + Sync {
    /// Returns whatever sizing blob is on disk, in either persisted shape,
    /// or `None` when the user never resized anything.
    fn load(&self) -> Result<Option<PersistedSizing>, SizingStoreError>;

    /// Replaces the stored blob with the given override set.
    fn save(&self, overrides: &OverrideMap) -> Result<(), SizingStoreError>;

    fn storage_path(&self) -> PathBuf;
}
