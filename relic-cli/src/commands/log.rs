use anyhow::Result;
use colored::Colorize;

pub fn run() -> Result<()> {
    let Some(repo) = super::open_repo()? else {
        return Ok(());
    };

    let mut any = false;
    for entry in repo.history()? {
        let (id, commit) = entry?;
        any = true;

        println!("{} {}", "commit".yellow().bold(), id.to_string().yellow());
        println!(
            "{}: {}",
            "Date".bold(),
            commit.timestamp.format("%Y-%m-%d %H:%M:%S")
        );
        println!();
        println!("    {}", commit.message);
        println!();
    }

    if !any {
        println!("{}", "No commits yet".yellow());
    }

    Ok(())
}
