use crate::commands::open_builder;
use crate::config::Config;
use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Turn preview mode on or off
    pub mode: Switch,
}

fn flag(on: bool) -> colored::ColoredString {
    if on {
        "on".green()
    } else {
        "off".dimmed()
    }
}

pub fn status(cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let builder = open_builder(&config, cwd)?;
    let ui = builder.ui();

    println!("{}", config.site_name.bright_blue().bold());
    println!("  Sections:       {}", builder.len());
    println!("  Preview mode:   {}", flag(ui.preview_mode));
    println!("  Sidebar open:   {}", flag(ui.sidebar_open));
    println!("  Sidebar pinned: {}", flag(ui.sidebar_pinned));
    match &ui.editing {
        Some(section) => println!("  Editing:        {}", section.id.bright_white()),
        None => println!("  Editing:        {}", "nothing".dimmed()),
    }
    println!("  Store:          {}", builder.store().root().display());
    Ok(())
}

pub fn preview(args: PreviewArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut builder = open_builder(&config, cwd)?;

    let on = args.mode == Switch::On;
    builder.set_preview_mode(on)?;
    println!("{} Preview mode {}", "✓".green(), flag(on));
    Ok(())
}
