use crate::commands::open_builder;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::io::{self, BufRead, Write};

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Ask on stdin; anything but `y`/`yes` declines.
fn confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => is_yes(&answer),
        Err(_) => false,
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

pub fn clear(args: ClearArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut builder = open_builder(&config, cwd)?;

    let count = builder.len();
    let cleared = builder.clear_all(|| {
        args.yes || confirm("Clear all sections and settings? This cannot be undone.")
    })?;

    if cleared {
        println!("{} Cleared {} sections", "✓".green(), count);
    } else {
        println!("Nothing was cleared");
    }
    Ok(())
}
