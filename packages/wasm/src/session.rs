//! String-in / string-out facade over [`Builder`].
//!
//! Everything the JS class needs, minus the `JsValue` plumbing, so it can
//! be exercised natively against a [`MemoryStore`](sitebuilder_editor::MemoryStore).

use serde::Serialize;
use sitebuilder_editor::{
    Builder, BuilderError, BuilderOptions, ContentEdit, ContentEditor, EditorError, Mutation,
    StateStore,
};
use sitebuilder_model::{catalog, LibraryIcon, ModelError, Section, SectionType};
use sitebuilder_render::{render_page, RenderOptions};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Builder(#[from] BuilderError),

    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TemplateEntry {
    #[serde(rename = "type")]
    section_type: SectionType,
    title: &'static str,
    description: &'static str,
    icon: LibraryIcon,
    /// What `addSection` would create
    default_section: Section,
}

/// Catalog entries with a sample section each.
pub fn catalog_json() -> ApiResult<String> {
    let entries: Vec<TemplateEntry> = catalog()
        .iter()
        .map(|t| TemplateEntry {
            section_type: t.section_type,
            title: t.title,
            description: t.description,
            icon: t.icon,
            default_section: t.instantiate(format!("{}-template", t.section_type), 0),
        })
        .collect();
    Ok(serde_json::to_string(&entries)?)
}

/// Apply one content edit (or a list of them) to a section and return
/// the saved section.
pub fn apply_content_edit(section_json: &str, edit_json: &str) -> ApiResult<String> {
    let section: Section = serde_json::from_str(section_json)?;
    let value: serde_json::Value = serde_json::from_str(edit_json)?;
    let edits: Vec<ContentEdit> = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        vec![serde_json::from_value(value)?]
    };

    let mut editor = ContentEditor::open(&section);
    for edit in edits {
        editor.apply(edit)?;
    }
    Ok(serde_json::to_string(&editor.save())?)
}

pub struct Session<S: StateStore> {
    builder: Builder<S>,
}

impl<S: StateStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self {
            builder: Builder::load(store, BuilderOptions::default()),
        }
    }

    pub fn builder(&self) -> &Builder<S> {
        &self.builder
    }

    pub fn builder_mut(&mut self) -> &mut Builder<S> {
        &mut self.builder
    }

    /// Sections in display order.
    pub fn sections_json(&self) -> ApiResult<String> {
        Ok(serde_json::to_string(&self.builder.ordered())?)
    }

    pub fn add_section(&mut self, section_type: &str) -> ApiResult<String> {
        let section_type: SectionType = section_type.parse()?;
        let section = self.builder.add_section(section_type)?;
        Ok(serde_json::to_string(section)?)
    }

    pub fn update_section(&mut self, section_json: &str) -> ApiResult<()> {
        let section: Section = serde_json::from_str(section_json)?;
        self.builder.update(section)?;
        Ok(())
    }

    pub fn apply_mutation(&mut self, mutation_json: &str) -> ApiResult<bool> {
        let mutation: Mutation = serde_json::from_str(mutation_json)?;
        Ok(self.builder.apply(mutation)?)
    }

    /// Open the editor on a section; returns the draft to show.
    pub fn begin_edit(&mut self, id: &str) -> ApiResult<String> {
        let editor = self.builder.begin_edit(id)?;
        Ok(serde_json::to_string(editor.section())?)
    }

    pub fn commit_edit(&mut self, section_json: &str) -> ApiResult<()> {
        let section: Section = serde_json::from_str(section_json)?;
        self.builder.commit_edit(section)?;
        Ok(())
    }

    pub fn editing_json(&self) -> ApiResult<Option<String>> {
        match &self.builder.ui().editing {
            Some(section) => Ok(Some(serde_json::to_string(section)?)),
            None => Ok(None),
        }
    }

    pub fn render_html(&self, full_document: bool) -> String {
        let options = RenderOptions {
            full_document,
            title: self.builder.options().site_name.clone(),
            ..RenderOptions::default()
        };
        render_page(&self.builder.ordered(), &options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use sitebuilder_editor::MemoryStore;

    fn session() -> Session<MemoryStore> {
        Session::new(MemoryStore::new())
    }

    #[test]
    fn test_catalog_json() {
        let entries: Vec<Value> = serde_json::from_str(&catalog_json().unwrap()).unwrap();
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0]["type"], json!("header"));
        assert_eq!(entries[5]["defaultSection"]["type"], json!("footer"));
    }

    #[test]
    fn test_add_and_list() {
        let mut s = session();
        let hero: Value = serde_json::from_str(&s.add_section("hero").unwrap()).unwrap();
        s.add_section("footer").unwrap();

        let sections: Vec<Value> = serde_json::from_str(&s.sections_json().unwrap()).unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0]["id"], hero["id"]);
        assert_eq!(sections[1]["order"], json!(1));

        assert!(matches!(s.add_section("pricing"), Err(ApiError::Model(_))));
    }

    #[test]
    fn test_apply_mutation_json() {
        let mut s = session();
        s.add_section("header").unwrap();
        let changed = s
            .apply_mutation(r#"{ "kind": "addSection", "sectionType": "contact" }"#)
            .unwrap();
        assert!(changed);
        assert_eq!(s.builder().len(), 2);

        assert!(matches!(s.apply_mutation("{}"), Err(ApiError::Json(_))));
    }

    #[test]
    fn test_edit_round_trip() {
        let mut s = session();
        let hero: Value = serde_json::from_str(&s.add_section("hero").unwrap()).unwrap();
        let id = hero["id"].as_str().unwrap().to_string();

        let draft = s.begin_edit(&id).unwrap();
        assert!(s.editing_json().unwrap().is_some());

        let saved = apply_content_edit(
            &draft,
            &json!({ "op": "setField", "key": "ctaText", "value": "Sign up" }).to_string(),
        )
        .unwrap();
        s.commit_edit(&saved).unwrap();

        assert!(s.editing_json().unwrap().is_none());
        assert_eq!(s.builder().get(&id).unwrap().resolve("ctaText", ""), "Sign up");
        assert!(s.render_html(false).contains("Sign up"));
    }

    #[test]
    fn test_section_type_is_fixed() {
        let mut s = session();
        let hero: Value = serde_json::from_str(&s.add_section("hero").unwrap()).unwrap();
        let id = hero["id"].as_str().unwrap().to_string();

        let footer = json!({ "id": id, "type": "footer", "order": 0 }).to_string();
        assert!(matches!(
            s.update_section(&footer),
            Err(ApiError::Builder(BuilderError::TypeChange { .. }))
        ));

        s.begin_edit(&id).unwrap();
        assert!(matches!(
            s.commit_edit(&footer),
            Err(ApiError::Builder(BuilderError::TypeChange { .. }))
        ));
        assert_eq!(s.builder().get(&id).unwrap().section_type, SectionType::Hero);
    }

    #[test]
    fn test_commit_edit_ignores_top_level_fields() {
        let mut s = session();
        let hero: Value = serde_json::from_str(&s.add_section("hero").unwrap()).unwrap();
        let id = hero["id"].as_str().unwrap().to_string();

        let mut draft: Value = serde_json::from_str(&s.begin_edit(&id).unwrap()).unwrap();
        draft["title"] = json!("Hijacked");
        draft["content"]["ctaText"] = json!("Join");
        s.commit_edit(&draft.to_string()).unwrap();

        let stored = s.builder().get(&id).unwrap();
        assert_eq!(stored.title, hero["title"].as_str().unwrap());
        assert_eq!(stored.resolve("ctaText", ""), "Join");
    }

    #[test]
    fn test_apply_content_edit_list() {
        let section = serde_json::to_string(
            &sitebuilder_model::template(SectionType::Header).instantiate("h", 0),
        )
        .unwrap();
        let edits = json!([
            { "op": "addItem", "list": "menuItems", "item": { "text": "Blog", "url": "#blog" } },
            { "op": "removeItem", "list": "menuItems", "index": 0 }
        ])
        .to_string();

        let saved: Value = serde_json::from_str(&apply_content_edit(&section, &edits).unwrap()).unwrap();
        let items = saved["content"]["menuItems"].as_array().unwrap();
        assert_eq!(items.last().unwrap()["text"], json!("Blog"));

        let bad = json!({ "op": "setField", "key": "menuItems", "value": 3 }).to_string();
        assert!(matches!(apply_content_edit(&section, &bad), Err(ApiError::Editor(_))));
    }
}
