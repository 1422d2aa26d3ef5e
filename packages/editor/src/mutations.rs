//! # Builder mutations
//!
//! Serializable page-level operations, so hosts (the browser bindings, the
//! CLI, a script) can drive a [`Builder`] with plain JSON.
//!
//! ```json
//! { "kind": "moveSection", "sourceId": "footer-x-3", "targetId": "header-x-1" }
//! ```
//!
//! ## Semantics
//!
//! - `moveSection` / `removeSection` on an unknown id change nothing
//! - `updateSection` / `editSection` on an unknown id fail
//! - `editSection` applies its content edits in order; the first rejected
//!   edit aborts the whole mutation and nothing is stored
//! - `clearAll` resets only with `"confirmed": true`; hosts ask the user
//!   first and pass the answer along

use crate::builder::Builder;
use crate::content_editor::{ContentEdit, ContentEditor};
use crate::store::StateStore;
use crate::{BuilderError, BuilderResult};
use serde::{Deserialize, Serialize};
use sitebuilder_model::{Section, SectionType};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Mutation {
    /// Append a new section from the catalog
    AddSection { section_type: SectionType },

    /// Move a section to the position of another
    MoveSection { source_id: String, target_id: String },

    /// Replace a section wholesale (position is kept)
    UpdateSection { section: Section },

    /// Apply content edits to one section
    EditSection {
        section_id: String,
        edits: Vec<ContentEdit>,
    },

    RemoveSection { section_id: String },

    /// Reset everything; ignored unless the user confirmed
    ClearAll {
        #[serde(default)]
        confirmed: bool,
    },
}

impl Mutation {
    /// Reject mutations that name a section the builder does not have,
    /// where that is an error rather than a no-op.
    pub fn validate<S: StateStore>(&self, builder: &Builder<S>) -> BuilderResult<()> {
        match self {
            Mutation::UpdateSection { section } => require(builder, &section.id),
            Mutation::EditSection { section_id, .. } => require(builder, section_id),
            _ => Ok(()),
        }
    }
}

fn require<S: StateStore>(builder: &Builder<S>, id: &str) -> BuilderResult<()> {
    match builder.get(id) {
        Some(_) => Ok(()),
        None => Err(BuilderError::SectionNotFound(id.to_string())),
    }
}

impl<S: StateStore> Builder<S> {
    /// Apply one mutation. Returns whether the collection changed.
    pub fn apply(&mut self, mutation: Mutation) -> BuilderResult<bool> {
        mutation.validate(self)?;

        match mutation {
            Mutation::AddSection { section_type } => {
                self.add_section(section_type)?;
                Ok(true)
            }
            Mutation::MoveSection { source_id, target_id } => self.reorder(&source_id, &target_id),
            Mutation::UpdateSection { section } => {
                self.update(section)?;
                Ok(true)
            }
            Mutation::EditSection { section_id, edits } => self.apply_edits(&section_id, edits),
            Mutation::RemoveSection { section_id } => self.remove(&section_id),
            Mutation::ClearAll { confirmed } => self.clear_all(|| confirmed),
        }
    }

    fn apply_edits(&mut self, section_id: &str, edits: Vec<ContentEdit>) -> BuilderResult<bool> {
        let section = self
            .get(section_id)
            .ok_or_else(|| BuilderError::SectionNotFound(section_id.to_string()))?;

        let mut editor = ContentEditor::open(section);
        for edit in edits {
            editor.apply(edit)?;
        }

        if !editor.is_dirty() {
            return Ok(false);
        }
        self.update(editor.save())?;
        Ok(true)
    }
}
