use crate::commands::open_builder;
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output file (overrides config)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Exported website document (defaults to the configured export file)
    pub file: Option<PathBuf>,
}

pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let builder = open_builder(&config, cwd)?;
    let json = builder.export_json()?;

    if args.stdout {
        println!("{}", json);
        return Ok(());
    }

    let path = args.out.unwrap_or_else(|| config.get_export_path(cwd));
    fs::write(&path, json).with_context(|| format!("Cannot write {}", path.display()))?;
    println!(
        "{} Exported {} sections → {}",
        "✓".green(),
        builder.len(),
        path.display()
    );
    Ok(())
}

pub fn import(args: ImportArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut builder = open_builder(&config, cwd)?;

    let path = args.file.unwrap_or_else(|| config.get_export_path(cwd));
    let text = fs::read_to_string(&path).with_context(|| format!("Cannot read {}", path.display()))?;

    let count = builder.import_json(&text)?;
    println!("{} Imported {} sections from {}", "✓".green(), count, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitebuilder_model::SectionType;

    #[test]
    fn test_export_then_import_elsewhere() {
        let source = tempfile::tempdir().unwrap();
        let source_cwd = source.path().display().to_string();
        let config = Config::load(&source_cwd).unwrap();
        {
            let mut builder = open_builder(&config, &source_cwd).unwrap();
            builder.add_section(SectionType::Header).unwrap();
            builder.add_section(SectionType::Hero).unwrap();
        }

        export(ExportArgs { out: None, stdout: false }, &source_cwd).unwrap();
        let exported = source.path().join("website-config.json");
        assert!(exported.exists());

        let target = tempfile::tempdir().unwrap();
        let target_cwd = target.path().display().to_string();
        import(ImportArgs { file: Some(exported) }, &target_cwd).unwrap();

        let original = open_builder(&config, &source_cwd).unwrap();
        let copied = open_builder(&config, &target_cwd).unwrap();
        assert_eq!(original.sections(), copied.sections());
    }

    #[test]
    fn test_bad_import_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        let file = dir.path().join("broken.json");
        fs::write(&file, "{ nope").unwrap();

        assert!(import(ImportArgs { file: Some(file) }, &cwd).is_err());
    }
}
