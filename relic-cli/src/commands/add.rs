use anyhow::Result;
use colored::Colorize;
use relic_core::Error;

pub fn run(file: &str) -> Result<()> {
    let Some(repo) = super::open_repo()? else {
        return Ok(());
    };

    match repo.stage(file) {
        Ok(true) => {
            println!("Added {} to staging area", format!("'{}'", file).green());
        }
        Ok(false) => {
            println!("{} is already staged", format!("'{}'", file).yellow());
        }
        Err(Error::FileNotFound(_)) => {
            println!("{}", format!("File '{}' does not exist", file).red());
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
