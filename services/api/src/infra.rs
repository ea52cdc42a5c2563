use brokerage::directory::{Directory, DirectoryStore, StoreError};
use brokerage::error::AppError;
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, RwLock};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Holds the directory loaded at startup; every request works on a cloned snapshot.
#[derive(Default, Clone)]
pub(crate) struct InMemoryDirectoryStore {
    directory: Arc<RwLock<Directory>>,
}

impl InMemoryDirectoryStore {
    pub(crate) fn new(directory: Directory) -> Self {
        Self {
            directory: Arc::new(RwLock::new(directory)),
        }
    }
}

impl DirectoryStore for InMemoryDirectoryStore {
    fn snapshot(&self) -> Result<Directory, StoreError> {
        let guard = self
            .directory
            .read()
            .map_err(|_| StoreError::Unavailable("directory lock poisoned".to_string()))?;
        Ok(guard.clone())
    }
}

/// Loads portal exports from `data_dir`, or only the built-in pages when none is configured.
pub(crate) fn load_directory(data_dir: Option<&Path>) -> Result<Directory, AppError> {
    match data_dir {
        Some(dir) => Ok(Directory::load_dir(dir)?),
        None => Ok(Directory::with_portal_pages()),
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
