use super::Directory;

/// Data-access boundary: hands out an already-materialized snapshot of the portal data.
pub trait DirectoryStore: Send + Sync {
    fn snapshot(&self) -> Result<Directory, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("directory store unavailable: {0}")]
    Unavailable(String),
}
