use crate::commands::open_builder;
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde_json::Value;
use sitebuilder_render::{render_document, render_page, RenderOptions};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Render this exported document instead of the stored page
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file (prints to stdout when absent)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Emit the sections only, without the surrounding document
    #[arg(long)]
    pub fragment: bool,

    /// Disable pretty printing
    #[arg(long)]
    pub compact: bool,
}

pub fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let options = RenderOptions {
        pretty: !args.compact,
        full_document: !args.fragment,
        title: config.site_name.clone(),
        ..RenderOptions::default()
    };

    let html = match &args.input {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Cannot read {}", path.display()))?;
            let document: Value = serde_json::from_str(&text)
                .with_context(|| format!("Invalid JSON in {}", path.display()))?;
            render_document(&document, &options)?
        }
        None => {
            let builder = open_builder(&config, cwd)?;
            render_page(&builder.ordered(), &options)
        }
    };

    match args.out {
        Some(path) => {
            fs::write(&path, html).with_context(|| format!("Cannot write {}", path.display()))?;
            eprintln!("{} Rendered → {}", "✓".green(), path.display());
        }
        None => print!("{}", html),
    }
    Ok(())
}
