use anyhow::Result;
use colored::Colorize;

pub fn run() -> Result<()> {
    let Some(repo) = super::open_repo()? else {
        return Ok(());
    };

    let staged = repo.staged()?;

    println!("{}", "Staged files:".bold());
    for file in &staged {
        println!("  {}", file.green());
    }
    if staged.is_empty() {
        println!("  {}", "(none)".dimmed());
    }

    Ok(())
}
