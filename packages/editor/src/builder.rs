//! # Builder state controller
//!
//! Owns the ordered section collection for one editing session and the
//! handful of UI flags that survive a reload. Every change is written
//! through to the [`StateStore`] as a whole value.
//!
//! ## Lifecycle
//!
//! ```text
//! load(store) → add / reorder / edit / remove / import … → clear_all
//!      ↑                         │
//!      └──── stored keys ◀── save after each change
//! ```
//!
//! ## Ordering
//!
//! `order` is the display position. Add, reorder and remove bring the
//! collection into display order and renumber it `0..N-1`. Import is a
//! wholesale replace and keeps the imported `order` values as they are.

use crate::store::{read_json, StateStore, StorageKey, SCHEMA_VERSION};
use crate::{BuilderError, BuilderResult, ContentEditor, ImportError, StoreError};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use sitebuilder_model::{
    sort_by_order, template, ModelError, Section, SectionIdGenerator, SectionType, WebsiteConfig, WireSection,
    DEFAULT_SITE_NAME,
};
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

/// Session settings supplied by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct BuilderOptions {
    /// `name` written into exported documents
    pub site_name: String,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_string(),
        }
    }
}

/// UI mode flags mirrored into storage.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub sidebar_pinned: bool,
    pub sidebar_open: bool,
    pub preview_mode: bool,
    /// Section open in the editor, if any
    pub editing: Option<Section>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_pinned: true,
            sidebar_open: false,
            preview_mode: false,
            editing: None,
        }
    }
}

/// Read the `sections` of an exported document; other top-level keys
/// are ignored. Each section is checked on its own so the error names it.
fn parse_import(text: &str) -> Result<Vec<Section>, ImportError> {
    let document: Value = serde_json::from_str(text)?;
    let entries = document
        .get("sections")
        .and_then(Value::as_array)
        .ok_or(ImportError::MissingSections)?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            for field in ["id", "type", "order"] {
                if entry.get(field).map_or(true, Value::is_null) {
                    return Err(ImportError::MissingField { index, field });
                }
            }

            let wire: WireSection = serde_json::from_value(entry.clone()).map_err(|err| {
                ImportError::InvalidSection {
                    index,
                    source: ModelError::from(err),
                }
            })?;
            Section::try_from(wire).map_err(|err| match err {
                ModelError::UnknownSectionType(section_type) => ImportError::UnknownType { index, section_type },
                source => ImportError::InvalidSection { index, source },
            })
        })
        .collect()
}

#[derive(Serialize)]
struct StoredSections<'a>(&'a [Section]);

pub struct Builder<S: StateStore> {
    sections: Vec<Section>,
    ui: UiState,
    store: S,
    ids: SectionIdGenerator,
    options: BuilderOptions,
}

impl<S: StateStore> Builder<S> {
    /// Start a session from whatever the store holds. Unreadable keys fall
    /// back to their defaults.
    #[instrument(skip_all)]
    pub fn load(store: S, options: BuilderOptions) -> Self {
        if let Some(version) = read_json::<_, u32>(&store, StorageKey::SchemaVersion) {
            if version > SCHEMA_VERSION {
                warn!(stored = version, current = SCHEMA_VERSION, "Stored state is from a newer version");
            }
        }

        let defaults = UiState::default();
        let sections: Vec<Section> = read_json(&store, StorageKey::Sections).unwrap_or_default();
        let ui = UiState {
            sidebar_pinned: read_json(&store, StorageKey::SidebarPinned).unwrap_or(defaults.sidebar_pinned),
            sidebar_open: read_json(&store, StorageKey::SidebarOpen).unwrap_or(defaults.sidebar_open),
            preview_mode: read_json(&store, StorageKey::PreviewMode).unwrap_or(defaults.preview_mode),
            editing: read_json(&store, StorageKey::EditingSection),
        };

        info!(sections = sections.len(), editing = ui.editing.is_some(), "Loaded builder state");

        Self {
            sections,
            ui,
            store,
            ids: SectionIdGenerator::new(),
            options,
        }
    }

    /// Fresh session over an empty store.
    pub fn new(store: S) -> Self {
        Self::load(store, BuilderOptions::default())
    }

    pub fn with_id_generator(mut self, ids: SectionIdGenerator) -> Self {
        self.ids = ids;
        self
    }

    /// Sections in storage order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Sections in display order (ascending `order`, stable).
    pub fn ordered(&self) -> Vec<&Section> {
        let mut ordered: Vec<&Section> = self.sections.iter().collect();
        ordered.sort_by_key(|s| s.order);
        ordered
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn options(&self) -> &BuilderOptions {
        &self.options
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // ----- Section collection -----

    /// Create a section from the catalog and append it.
    pub fn add_section(&mut self, section_type: SectionType) -> BuilderResult<&Section> {
        let id = self.fresh_id(section_type);
        let section = template(section_type).instantiate(id, 0);
        self.add(section)
    }

    /// Append a section at the end; its `order` becomes the current length.
    pub fn add(&mut self, mut section: Section) -> BuilderResult<&Section> {
        self.normalize();
        section.order = self.sections.len() as u32;
        debug!(id = %section.id, section_type = %section.section_type, order = section.order, "Adding section");
        self.sections.push(section);
        self.save_sections()?;

        if !self.ui.sidebar_pinned && self.ui.sidebar_open {
            self.ui.sidebar_open = false;
            self.save_flag(StorageKey::SidebarOpen, false)?;
        }

        let last = self.sections.len() - 1;
        Ok(&self.sections[last])
    }

    /// Move `source_id` to the position of `target_id`. No-op when the
    /// ids are equal or either is missing.
    pub fn reorder(&mut self, source_id: &str, target_id: &str) -> BuilderResult<bool> {
        if source_id == target_id {
            return Ok(false);
        }

        self.normalize();
        let from = self.sections.iter().position(|s| s.id == source_id);
        let to = self.sections.iter().position(|s| s.id == target_id);
        let (Some(from), Some(to)) = (from, to) else {
            return Ok(false);
        };

        let moved = self.sections.remove(from);
        self.sections.insert(to, moved);
        self.renumber();

        debug!(source = source_id, target = target_id, from, to, "Reordered sections");
        self.save_sections()?;
        Ok(true)
    }

    /// Replace the section with the same id. Position is kept: the stored
    /// `order` wins over whatever the update carries. The type cannot
    /// change. An editor open on that section is closed.
    pub fn update(&mut self, mut section: Section) -> BuilderResult<()> {
        let slot = self
            .sections
            .iter_mut()
            .find(|s| s.id == section.id)
            .ok_or_else(|| BuilderError::SectionNotFound(section.id.clone()))?;

        if slot.section_type != section.section_type {
            return Err(BuilderError::TypeChange {
                id: section.id,
                stored: slot.section_type,
                given: section.section_type,
            });
        }

        section.order = slot.order;
        let id = section.id.clone();
        *slot = section;
        self.save_sections()?;

        if self.ui.editing.as_ref().is_some_and(|s| s.id == id) {
            self.ui.editing = None;
            self.save_editing()?;
        }
        Ok(())
    }

    /// Remove a section and close the gap. No-op when the id is absent.
    pub fn remove(&mut self, id: &str) -> BuilderResult<bool> {
        let Some(index) = self.sections.iter().position(|s| s.id == id) else {
            return Ok(false);
        };

        self.sections.remove(index);
        self.normalize();
        debug!(id, remaining = self.sections.len(), "Removed section");
        self.save_sections()?;

        if self.ui.editing.as_ref().is_some_and(|s| s.id == id) {
            self.ui.editing = None;
            self.save_editing()?;
        }
        Ok(true)
    }

    // ----- Import / export -----

    /// Snapshot the page as a document, sections sorted by `order`.
    pub fn export(&self) -> WebsiteConfig {
        WebsiteConfig::snapshot(self.options.site_name.clone(), self.sections.clone(), Utc::now())
    }

    /// Pretty-printed export document.
    #[instrument(skip(self), fields(sections = self.sections.len()))]
    pub fn export_json(&self) -> BuilderResult<String> {
        let json = self.export().to_json_pretty().map_err(StoreError::from)?;
        info!(bytes = json.len(), "Exported website config");
        Ok(json)
    }

    /// Replace the whole collection with the sections of an exported
    /// document. Orders are taken as-is. On error nothing changes.
    #[instrument(skip(self, text), fields(bytes = text.len()))]
    pub fn import_json(&mut self, text: &str) -> BuilderResult<usize> {
        let sections = parse_import(text).inspect_err(|err| warn!(error = %err, "Rejected import"))?;

        let mut seen = HashSet::new();
        if let Some(dup) = sections.iter().find(|s| !seen.insert(s.id.as_str())) {
            warn!(id = %dup.id, "Rejected import with duplicate section id");
            return Err(ImportError::DuplicateId(dup.id.clone()).into());
        }

        let count = sections.len();
        self.sections = sections;
        self.save_sections()?;

        info!(sections = count, "Imported website config");
        Ok(count)
    }

    // ----- Editing -----

    /// Open a section in the content editor and remember it as the
    /// current editing target.
    pub fn begin_edit(&mut self, id: &str) -> BuilderResult<ContentEditor> {
        let section = self
            .get(id)
            .cloned()
            .ok_or_else(|| BuilderError::SectionNotFound(id.to_string()))?;

        let editor = ContentEditor::open(&section);
        self.ui.editing = Some(section);
        self.save_editing()?;
        Ok(editor)
    }

    /// The section currently open for editing, as a fresh editor.
    pub fn resume_edit(&self) -> Option<ContentEditor> {
        self.ui.editing.as_ref().map(ContentEditor::open)
    }

    /// Store the content of the saved section and close the editor.
    /// Only the section being edited is accepted, and only its `content`
    /// is taken; the stored id, type, order and top-level fields stay.
    pub fn commit_edit(&mut self, section: Section) -> BuilderResult<()> {
        let editing = match &self.ui.editing {
            Some(target) => target.id.clone(),
            None => return Err(BuilderError::NoEditInProgress),
        };
        if section.id != editing {
            return Err(BuilderError::NotEditing {
                editing,
                given: section.id,
            });
        }

        let mut stored = self
            .get(&editing)
            .cloned()
            .ok_or_else(|| BuilderError::SectionNotFound(editing.clone()))?;
        if stored.section_type != section.section_type {
            return Err(BuilderError::TypeChange {
                id: editing,
                stored: stored.section_type,
                given: section.section_type,
            });
        }

        stored.content = section.content;
        self.update(stored)?;
        if self.ui.editing.take().is_some() {
            self.save_editing()?;
        }
        Ok(())
    }

    /// Close the editor without storing anything.
    pub fn cancel_edit(&mut self) -> BuilderResult<()> {
        if self.ui.editing.take().is_some() {
            self.save_editing()?;
        }
        Ok(())
    }

    // ----- UI flags -----

    pub fn set_preview_mode(&mut self, on: bool) -> BuilderResult<()> {
        self.ui.preview_mode = on;
        self.save_flag(StorageKey::PreviewMode, on)
    }

    pub fn toggle_preview_mode(&mut self) -> BuilderResult<bool> {
        let on = !self.ui.preview_mode;
        self.set_preview_mode(on)?;
        Ok(on)
    }

    pub fn set_sidebar_open(&mut self, open: bool) -> BuilderResult<()> {
        self.ui.sidebar_open = open;
        self.save_flag(StorageKey::SidebarOpen, open)
    }

    pub fn set_sidebar_pinned(&mut self, pinned: bool) -> BuilderResult<()> {
        self.ui.sidebar_pinned = pinned;
        self.save_flag(StorageKey::SidebarPinned, pinned)
    }

    // ----- Reset -----

    /// Drop every section and flag and erase all stored keys, but only if
    /// `confirm` agrees. Returns whether the reset happened.
    pub fn clear_all<F>(&mut self, confirm: F) -> BuilderResult<bool>
    where
        F: FnOnce() -> bool,
    {
        if !confirm() {
            debug!("Clear all declined");
            return Ok(false);
        }

        self.sections.clear();
        self.ui = UiState::default();
        for key in StorageKey::ALL {
            self.store.remove(key)?;
        }

        info!("Cleared all builder state");
        Ok(true)
    }

    // ----- Internals -----

    fn fresh_id(&mut self, section_type: SectionType) -> String {
        loop {
            let id = self.ids.new_id(section_type.as_str());
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Display order with contiguous `order` values.
    fn normalize(&mut self) {
        sort_by_order(&mut self.sections);
        self.renumber();
    }

    fn renumber(&mut self) {
        for (index, section) in self.sections.iter_mut().enumerate() {
            section.order = index as u32;
        }
    }

    fn save_sections(&mut self) -> BuilderResult<()> {
        let json = serde_json::to_string(&StoredSections(&self.sections)).map_err(StoreError::from)?;
        self.store.write(StorageKey::Sections, &json)?;
        self.store
            .write(StorageKey::SchemaVersion, &SCHEMA_VERSION.to_string())?;
        Ok(())
    }

    fn save_editing(&mut self) -> BuilderResult<()> {
        match &self.ui.editing {
            Some(section) => {
                let json = serde_json::to_string(section).map_err(StoreError::from)?;
                self.store.write(StorageKey::EditingSection, &json)?;
            }
            None => self.store.remove(StorageKey::EditingSection)?,
        }
        Ok(())
    }

    fn save_flag(&mut self, key: StorageKey, value: bool) -> BuilderResult<()> {
        self.store.write(key, if value { "true" } else { "false" })?;
        Ok(())
    }
}
