use anyhow::Result;
use colored::Colorize;
use relic_core::{Error, Repository};

pub fn run() -> Result<()> {
    match Repository::init(super::repo_root()) {
        Ok(_) => {
            println!("{}", "Initialized empty relic repository".green());
        }
        Err(Error::AlreadyInitialized) => {
            println!("{}", "Repository already initialized".yellow());
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
