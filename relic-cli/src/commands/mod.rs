pub mod add;
pub mod commit;
pub mod init;
pub mod log;
pub mod status;

use anyhow::Result;
use colored::Colorize;
use relic_core::{Error, Repository};
use std::path::PathBuf;

pub fn repo_root() -> PathBuf {
    std::env::current_dir().unwrap()
}

/// Opens the repository at the current directory, printing the usual hint
/// and returning `None` when no repository exists.
pub fn open_repo() -> Result<Option<Repository>> {
    match Repository::open(repo_root()) {
        Ok(repo) => Ok(Some(repo)),
        Err(Error::NotInitialized) => {
            println!("{}", "Not a relic repository".red());
            println!("Run {} first", "relic init".cyan());
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
