use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::pages::portal_pages;
use super::Directory;

pub const TEAM_MEMBERS_FILE: &str = "team_members.csv";
pub const CONTACTS_FILE: &str = "contacts.csv";
pub const DEALS_FILE: &str = "deals.csv";
pub const TEMPLATES_FILE: &str = "templates.csv";
pub const TRANSACTIONS_FILE: &str = "transactions.csv";

#[derive(Debug, thiserror::Error)]
pub enum DirectoryImportError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid CSV data in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Parses one portal export. Headers are snake_case field names; cells are trimmed.
pub fn records_from_reader<T, R>(reader: R) -> Result<Vec<T>, csv::Error>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let records = csv_reader.deserialize::<T>().collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

impl Directory {
    /// Loads every known export under `dir` plus the portal page catalogue.
    ///
    /// Missing files produce empty collections.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self, DirectoryImportError> {
        let dir = dir.as_ref();
        let directory = Directory {
            team_members: load_file(&dir.join(TEAM_MEMBERS_FILE))?,
            contacts: load_file(&dir.join(CONTACTS_FILE))?,
            deals: load_file(&dir.join(DEALS_FILE))?,
            templates: load_file(&dir.join(TEMPLATES_FILE))?,
            transactions: load_file(&dir.join(TRANSACTIONS_FILE))?,
            pages: portal_pages(),
        };

        info!(
            dir = %dir.display(),
            team_members = directory.team_members.len(),
            contacts = directory.contacts.len(),
            deals = directory.deals.len(),
            templates = directory.templates.len(),
            transactions = directory.transactions.len(),
            "directory loaded"
        );
        Ok(directory)
    }
}

fn load_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DirectoryImportError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "export not present, using empty collection");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(DirectoryImportError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    records_from_reader(file).map_err(|source| DirectoryImportError::Csv {
        path: path.to_path_buf(),
        source,
    })
}
