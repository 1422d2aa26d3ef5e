use crate::commands::open_builder;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sitebuilder_model::{catalog, template, SectionType};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Section type (header, hero, features, about, contact, footer)
    pub section_type: SectionType,
}

#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Section to move
    pub source_id: String,

    /// Section whose position it takes
    pub target_id: String,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Section to remove
    pub id: String,
}

pub fn templates(_cwd: &str) -> Result<()> {
    println!("{}", "Available sections".bright_blue().bold());
    for entry in catalog() {
        println!(
            "  {:<10} {:<18} {} {}",
            entry.section_type.as_str().bright_white(),
            entry.title,
            entry.description.dimmed(),
            format!("[{}]", entry.icon).dimmed()
        );
    }
    Ok(())
}

pub fn add(args: AddArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut builder = open_builder(&config, cwd)?;

    let section = builder.add_section(args.section_type)?;
    println!(
        "{} Added {} section {}",
        "✓".green(),
        section.section_type,
        section.id.bright_white()
    );
    Ok(())
}

pub fn list(cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let builder = open_builder(&config, cwd)?;

    if builder.is_empty() {
        println!("{}", "No sections yet. Add one with `sitebuilder add <type>`.".yellow());
        return Ok(());
    }

    for section in builder.ordered() {
        let fallback = template(section.section_type).title;
        println!(
            "  {:>3}  {:<9} {}  {}",
            section.order,
            section.section_type.as_str(),
            section.id.bright_white(),
            section.resolve("title", fallback).dimmed()
        );
    }
    Ok(())
}

pub fn move_section(args: MoveArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut builder = open_builder(&config, cwd)?;

    if builder.reorder(&args.source_id, &args.target_id)? {
        println!(
            "{} Moved {} to the position of {}",
            "✓".green(),
            args.source_id.bright_white(),
            args.target_id.bright_white()
        );
    } else {
        println!("{} Nothing to move", "⚠️".yellow());
    }
    Ok(())
}

pub fn remove(args: RemoveArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut builder = open_builder(&config, cwd)?;

    if builder.remove(&args.id)? {
        println!("{} Removed {}", "✓".green(), args.id.bright_white());
    } else {
        println!("{} No section with id {}", "⚠️".yellow(), args.id);
    }
    Ok(())
}
