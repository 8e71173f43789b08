use anyhow::Result;
use colored::Colorize;
use relic_core::Error;

pub fn run(message: &str) -> Result<()> {
    let Some(repo) = super::open_repo()? else {
        return Ok(());
    };

    match repo.commit(message) {
        Ok(id) => {
            println!("[{}] {}", id.short().yellow(), message);
        }
        Err(Error::NothingToCommit) => {
            println!("{}", "Nothing to commit".yellow());
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
