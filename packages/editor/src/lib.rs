//! # Site Builder Editor
//!
//! Editing engine for single-page sites.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: sections, catalog, website document  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Builder lifecycle + mutations       │
//! │  - Add / reorder / edit / remove sections   │
//! │  - Draft content editing (ContentEditor)    │
//! │  - Import / export website documents        │
//! │  - Write-through persistence (StateStore)   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ render: sections → HTML                     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The collection is the source of truth**: rendered pages and exports are derived
//! 2. **Display order is `order`**: never the storage position
//! 3. **Drafts are isolated**: nothing reaches the page until an edit is saved
//! 4. **Storage is best effort on read**: unreadable keys fall back to defaults
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sitebuilder_editor::{Builder, BuilderOptions, DirectoryStore, ListPath};
//! use sitebuilder_model::SectionType;
//!
//! let store = DirectoryStore::open(".sitebuilder")?;
//! let mut builder = Builder::load(store, BuilderOptions::default());
//!
//! let id = builder.add_section(SectionType::Features)?.id.clone();
//!
//! let mut editor = builder.begin_edit(&id)?;
//! editor.set_field("title", &"Why choose us")?;
//! editor.remove_item(&ListPath::field("features"), 0)?;
//! builder.commit_edit(editor.save())?;
//!
//! let json = builder.export_json()?;
//! ```

mod builder;
mod content_editor;
mod errors;
mod mutations;
mod store;

pub use builder::{Builder, BuilderOptions, UiState};
pub use content_editor::{ContentEdit, ContentEditor, ListPath};
pub use errors::{BuilderError, BuilderResult, EditorError, ImportError, StoreError};
pub use mutations::Mutation;
pub use store::{read_json, DirectoryStore, MemoryStore, StateStore, StorageKey, SCHEMA_VERSION};
