use crate::commands::open_builder;
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde_json::Value;
use sitebuilder_editor::ContentEdit;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Section to edit
    pub id: String,

    /// Set a content field: key=value (value parsed as JSON, else taken as a string)
    #[arg(long = "set", value_parser = parse_assignment)]
    pub set: Vec<(String, Value)>,

    /// JSON file with a list of content edits
    #[arg(long)]
    pub edits: Option<PathBuf>,
}

fn parse_assignment(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;
    if key.is_empty() {
        return Err(format!("missing key in '{}'", raw));
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

pub fn edit(args: EditArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut builder = open_builder(&config, cwd)?;

    let mut edits: Vec<ContentEdit> = args
        .set
        .into_iter()
        .map(|(key, value)| ContentEdit::SetField { key, value })
        .collect();

    if let Some(path) = &args.edits {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Cannot read edits file {}", path.display()))?;
        let from_file: Vec<ContentEdit> = serde_json::from_str(&text)
            .with_context(|| format!("Invalid edits file {}", path.display()))?;
        edits.extend(from_file);
    }

    let mut editor = builder.begin_edit(&args.id)?;
    for edit in edits {
        if let Err(err) = editor.apply(edit) {
            editor.cancel();
            builder.cancel_edit()?;
            return Err(err.into());
        }
    }

    if editor.is_dirty() {
        builder.commit_edit(editor.save())?;
        println!("{} Saved {}", "✓".green(), args.id.bright_white());
    } else {
        editor.cancel();
        builder.cancel_edit()?;
        println!("{} No changes", "⚠️".yellow());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sitebuilder_model::{SectionContent, SectionType};

    #[test]
    fn test_parse_assignment() {
        assert_eq!(parse_assignment("ctaText=Go now").unwrap(), ("ctaText".to_string(), json!("Go now")));
        assert_eq!(parse_assignment("overlayOpacity=75").unwrap(), ("overlayOpacity".to_string(), json!(75)));
        assert_eq!(parse_assignment("ctaLink=").unwrap(), ("ctaLink".to_string(), json!("")));
        assert!(parse_assignment("novalue").is_err());
        assert!(parse_assignment("=x").is_err());
    }

    #[test]
    fn test_edit_with_file() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        let config = Config::load(&cwd).unwrap();

        let id = {
            let mut builder = open_builder(&config, &cwd).unwrap();
            builder.add_section(SectionType::Features).unwrap().id.clone()
        };

        let edits_path = dir.path().join("edits.json");
        fs::write(
            &edits_path,
            json!([{ "op": "removeItem", "list": "features", "index": 0 }]).to_string(),
        )
        .unwrap();

        edit(
            EditArgs {
                id: id.clone(),
                set: vec![("title".to_string(), json!("Why us"))],
                edits: Some(edits_path),
            },
            &cwd,
        )
        .unwrap();

        let builder = open_builder(&config, &cwd).unwrap();
        let section = builder.get(&id).unwrap();
        assert_eq!(section.resolve("title", ""), "Why us");
        let SectionContent::Features(features) = &section.content else {
            panic!("expected features content");
        };
        assert_eq!(features.features.len(), 2);
        assert!(builder.ui().editing.is_none());
    }

    #[test]
    fn test_rejected_edit_keeps_section() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        let config = Config::load(&cwd).unwrap();

        let (id, before) = {
            let mut builder = open_builder(&config, &cwd).unwrap();
            let section = builder.add_section(SectionType::Hero).unwrap().clone();
            (section.id.clone(), section)
        };

        let result = edit(
            EditArgs {
                id: id.clone(),
                set: vec![("overlayOpacity".to_string(), json!("lots"))],
                edits: None,
            },
            &cwd,
        );
        assert!(result.is_err());

        let builder = open_builder(&config, &cwd).unwrap();
        assert_eq!(builder.get(&id).unwrap(), &before);
        assert!(builder.ui().editing.is_none());
    }
}
