//! # Site Builder Render
//!
//! Turns sections into static HTML. Typed sections render through
//! [`render_section`] / [`render_page`]. Raw JSON (an imported document
//! that may hold types this build does not know) goes through
//! [`render_value`] / [`render_document`], which show a visible
//! placeholder instead of failing.

mod context;
mod sections;


use context::{Attrs, Context};
use serde_json::Value;
use sitebuilder_model::{Section, DEFAULT_SITE_NAME};
use std::borrow::Cow;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Not a website document: {0}")]
    NotADocument(String),
}

/// Options for HTML output
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Wrap the sections in `<!DOCTYPE html>` … `</html>`
    pub full_document: bool,
    /// Page `<title>`
    pub title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            full_document: true,
            title: DEFAULT_SITE_NAME.to_string(),
        }
    }
}

/// A section to render, or the type name of one that could not be read.
enum Block<'a> {
    Known(Cow<'a, Section>),
    Unknown(String),
}

impl Block<'static> {
    fn from_value(value: &Value) -> Self {
        match serde_json::from_value::<Section>(value.clone()) {
            Ok(section) => Block::Known(Cow::Owned(section)),
            Err(err) => {
                let section_type = value.get("type").and_then(Value::as_str).unwrap_or("unknown");
                debug!(section_type, error = %err, "Rendering placeholder for unreadable section");
                Block::Unknown(section_type.to_string())
            }
        }
    }
}

fn write_block(ctx: &mut Context, block: &Block) {
    match block {
        Block::Known(section) => sections::write_section(ctx, section),
        Block::Unknown(section_type) => sections::write_placeholder(ctx, section_type),
    }
}

fn write_page<'a>(ctx: &mut Context, blocks: impl IntoIterator<Item = Block<'a>>) {
    let full = ctx.options().full_document;

    if full {
        let title = ctx.options().title.clone();
        ctx.add_line("<!DOCTYPE html>");
        ctx.open("html", Attrs::new().set("lang", "en"));
        ctx.open("head", Attrs::new());
        ctx.void("meta", Attrs::new().set("charset", "UTF-8"));
        ctx.void(
            "meta",
            Attrs::new()
                .set("name", "viewport")
                .set("content", "width=device-width, initial-scale=1.0"),
        );
        ctx.text("title", Attrs::new(), &title);
        ctx.close("head");
        ctx.open("body", Attrs::new());
    }

    for block in blocks {
        write_block(ctx, &block);
    }

    if full {
        ctx.close("body");
        ctx.close("html");
    }
}

/// Render one section.
pub fn render_section(section: &Section, options: &RenderOptions) -> String {
    let mut ctx = Context::new(options);
    sections::write_section(&mut ctx, section);
    ctx.into_output()
}

/// Render sections in the order given (callers pass display order).
pub fn render_page(sections: &[&Section], options: &RenderOptions) -> String {
    let mut ctx = Context::new(options);
    write_page(
        &mut ctx,
        sections.iter().map(|section| Block::Known(Cow::Borrowed(*section))),
    );
    ctx.into_output()
}

/// Render one raw section value. Unknown types and malformed content
/// give the placeholder block.
pub fn render_value(value: &Value, options: &RenderOptions) -> String {
    let mut ctx = Context::new(options);
    write_block(&mut ctx, &Block::from_value(value));
    ctx.into_output()
}

/// Render a raw exported document, sections sorted by `order`.
pub fn render_document(document: &Value, options: &RenderOptions) -> Result<String, RenderError> {
    let sections = document
        .get("sections")
        .and_then(Value::as_array)
        .ok_or_else(|| RenderError::NotADocument("missing 'sections' array".to_string()))?;

    let mut sorted: Vec<&Value> = sections.iter().collect();
    sorted.sort_by_key(|s| s.get("order").and_then(Value::as_u64).unwrap_or(u64::MAX));

    let mut options = options.clone();
    if let Some(name) = document.get("name").and_then(Value::as_str) {
        options.title = name.to_string();
    }

    let mut ctx = Context::new(&options);
    write_page(&mut ctx, sorted.into_iter().map(Block::from_value));
    Ok(ctx.into_output())
}
