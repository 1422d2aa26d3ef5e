//! # Section content editor
//!
//! Holds a draft copy of one section while the user edits it. Nothing
//! reaches the builder until [`ContentEditor::save`], which hands back
//! exactly one updated section; [`ContentEditor::cancel`] discards the
//! draft.
//!
//! ## Edit semantics
//!
//! - `SetField`: shallow, key-by-key replace inside `content`
//!   (`null` clears the key)
//! - `AddItem`: append to a list
//! - `UpdateItem`: whole-item replace at an index
//! - `RemoveItem`: remove at an index, later items shift down
//!
//! Every edit runs on a copy of the content map and is re-checked
//! against the section type's content record before it replaces the
//! draft. An edit that leaves the record as it was reports no change.
//! An index outside `[0, len)` is a no-op. A list path must name a list
//! the content already has.
//!
//! Only `content` is editable. The id, type, order and top-level fields
//! pass through untouched.

use crate::EditorError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sitebuilder_model::{Section, SectionContent};
use std::fmt;
use std::str::FromStr;

/// Names a list inside a content record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ListPath {
    /// Top-level list, e.g. `menuItems`.
    Field(String),
    /// List inside one item of a top-level list, e.g. `sections[1].values`.
    Nested {
        field: String,
        index: usize,
        inner: String,
    },
}

impl ListPath {
    pub fn field(name: impl Into<String>) -> Self {
        ListPath::Field(name.into())
    }

    pub fn nested(field: impl Into<String>, index: usize, inner: impl Into<String>) -> Self {
        ListPath::Nested {
            field: field.into(),
            index,
            inner: inner.into(),
        }
    }
}

impl fmt::Display for ListPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListPath::Field(name) => f.write_str(name),
            ListPath::Nested { field, index, inner } => write!(f, "{}[{}].{}", field, index, inner),
        }
    }
}

fn is_key(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl FromStr for ListPath {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EditorError::InvalidListPath(s.to_string());

        let Some((head, inner)) = s.split_once("].") else {
            return if is_key(s) {
                Ok(ListPath::Field(s.to_string()))
            } else {
                Err(invalid())
            };
        };

        let (field, index) = head.split_once('[').ok_or_else(invalid)?;
        let index = index.parse::<usize>().map_err(|_| invalid())?;

        if is_key(field) && is_key(inner) {
            Ok(ListPath::nested(field, index, inner))
        } else {
            Err(invalid())
        }
    }
}

impl TryFrom<String> for ListPath {
    type Error = EditorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ListPath> for String {
    fn from(path: ListPath) -> Self {
        path.to_string()
    }
}

/// One user edit to a section's content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum ContentEdit {
    /// Replace (or clear, with `null`) one content key
    SetField { key: String, value: Value },

    /// Append an item to a list
    AddItem { list: ListPath, item: Value },

    /// Replace the item at `index`
    UpdateItem {
        list: ListPath,
        index: usize,
        item: Value,
    },

    /// Remove the item at `index`
    RemoveItem { list: ListPath, index: usize },
}

/// Draft editing state for one section.
#[derive(Debug, Clone)]
pub struct ContentEditor {
    original: Section,
    draft: Section,
}

impl ContentEditor {
    /// Start editing a copy of `section`.
    pub fn open(section: &Section) -> Self {
        Self {
            original: section.clone(),
            draft: section.clone(),
        }
    }

    /// The draft as it stands.
    pub fn section(&self) -> &Section {
        &self.draft
    }

    pub fn content(&self) -> &SectionContent {
        &self.draft.content
    }

    /// Whether the draft differs from the section that was opened.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }

    /// Apply an edit. Returns whether the draft changed.
    pub fn apply(&mut self, edit: ContentEdit) -> Result<bool, EditorError> {
        match edit {
            ContentEdit::SetField { key, value } => self.edit_map(|map| {
                if value.is_null() {
                    Ok(map.remove(&key).is_some())
                } else {
                    Ok(map.insert(key, value.clone()).as_ref() != Some(&value))
                }
            }),

            ContentEdit::AddItem { list, item } => self.edit_map(|map| match list_mut(map, &list)? {
                Some(items) => {
                    items.push(item);
                    Ok(true)
                }
                None => Ok(false),
            }),

            ContentEdit::UpdateItem { list, index, item } => self.edit_map(|map| {
                match list_mut(map, &list)?.and_then(|items| items.get_mut(index)) {
                    Some(slot) => {
                        *slot = item;
                        Ok(true)
                    }
                    None => Ok(false),
                }
            }),

            ContentEdit::RemoveItem { list, index } => self.edit_map(|map| match list_mut(map, &list)? {
                Some(items) if index < items.len() => {
                    items.remove(index);
                    Ok(true)
                }
                _ => Ok(false),
            }),
        }
    }

    pub fn set_field<T: Serialize>(&mut self, key: &str, value: &T) -> Result<bool, EditorError> {
        self.apply(ContentEdit::SetField {
            key: key.to_string(),
            value: serde_json::to_value(value)?,
        })
    }

    pub fn add_item<T: Serialize>(&mut self, list: &ListPath, item: &T) -> Result<bool, EditorError> {
        self.apply(ContentEdit::AddItem {
            list: list.clone(),
            item: serde_json::to_value(item)?,
        })
    }

    pub fn update_item<T: Serialize>(&mut self, list: &ListPath, index: usize, item: &T) -> Result<bool, EditorError> {
        self.apply(ContentEdit::UpdateItem {
            list: list.clone(),
            index,
            item: serde_json::to_value(item)?,
        })
    }

    pub fn remove_item(&mut self, list: &ListPath, index: usize) -> Result<bool, EditorError> {
        self.apply(ContentEdit::RemoveItem {
            list: list.clone(),
            index,
        })
    }

    /// Finish editing and hand back the updated section.
    pub fn save(self) -> Section {
        self.draft
    }

    /// Discard the draft.
    pub fn cancel(self) {}

    /// Run `f` on a copy of the content map; keep the result only if it
    /// still reads as this section type's content and differs from the
    /// draft.
    fn edit_map<F>(&mut self, f: F) -> Result<bool, EditorError>
    where
        F: FnOnce(&mut Map<String, Value>) -> Result<bool, EditorError>,
    {
        let mut map = self.draft.content.to_map()?;
        if !f(&mut map)? {
            return Ok(false);
        }

        let content = SectionContent::from_map(self.draft.section_type, map)?;
        if content == self.draft.content {
            return Ok(false);
        }
        self.draft.content = content;
        Ok(true)
    }
}

/// Resolve a list path to the array it names. `Ok(None)` when the path
/// goes through an item index that no longer exists. Typed records always
/// write their lists out, so a missing key means the record has no such
/// list.
fn list_mut<'a>(map: &'a mut Map<String, Value>, path: &ListPath) -> Result<Option<&'a mut Vec<Value>>, EditorError> {
    match path {
        ListPath::Field(name) => map
            .get_mut(name)
            .and_then(Value::as_array_mut)
            .map(Some)
            .ok_or_else(|| EditorError::NotAList(name.clone())),

        ListPath::Nested { field, index, inner } => {
            let Some(outer) = map.get_mut(field) else {
                return Ok(None);
            };
            let outer = outer
                .as_array_mut()
                .ok_or_else(|| EditorError::NotAList(field.clone()))?;
            let Some(item) = outer.get_mut(*index) else {
                return Ok(None);
            };
            let object = item.as_object_mut().ok_or_else(|| EditorError::NotAnObject {
                field: field.clone(),
                index: *index,
            })?;
            object
                .get_mut(inner)
                .and_then(Value::as_array_mut)
                .map(Some)
                .ok_or_else(|| EditorError::NotAList(path.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sitebuilder_model::*;

    fn section(section_type: SectionType) -> Section {
        template(section_type).instantiate(format!("{}-1", section_type), 0)
    }

    fn features(editor: &ContentEditor) -> Vec<Feature> {
        match editor.content() {
            SectionContent::Features(c) => c.features.clone(),
            other => panic!("expected features content, got {:?}", other),
        }
    }

    #[test]
    fn test_list_path_parse_and_print() {
        assert_eq!("menuItems".parse::<ListPath>().unwrap(), ListPath::field("menuItems"));
        assert_eq!(
            "sections[2].socialLinks".parse::<ListPath>().unwrap(),
            ListPath::nested("sections", 2, "socialLinks")
        );
        assert_eq!(ListPath::nested("sections", 1, "values").to_string(), "sections[1].values");

        for bad in ["", "a b", "sections[x].values", "sections[1].", "[1].values"] {
            assert!(bad.parse::<ListPath>().is_err(), "{:?} should not parse", bad);
        }
    }

    #[test]
    fn test_append_feature_goes_last() {
        let original = section(SectionType::Features);
        let mut editor = ContentEditor::open(&original);
        let before = features(&editor).len();

        let changed = editor
            .add_item(
                &ListPath::field("features"),
                &json!({ "title": "X", "description": "Y", "icon": "Zap" }),
            )
            .unwrap();
        assert!(changed);

        let saved = editor.save();
        let SectionContent::Features(content) = &saved.content else {
            panic!("expected features content");
        };
        assert_eq!(content.features.len(), before + 1);
        assert_eq!(
            content.features.last(),
            Some(&Feature::new("X", "Y", FeatureIcon::Zap))
        );

        // the section that was opened is untouched
        let SectionContent::Features(orig) = &original.content else {
            panic!("expected features content");
        };
        assert_eq!(orig.features.len(), before);
    }

    #[test]
    fn test_update_and_remove_by_index() {
        let mut editor = ContentEditor::open(&section(SectionType::Features));
        let list = ListPath::field("features");

        let replacement = Feature::new("Fast", "Very", FeatureIcon::Shield);
        assert!(editor.update_item(&list, 0, &replacement).unwrap());
        assert_eq!(features(&editor)[0], replacement);

        assert!(editor.remove_item(&list, 0).unwrap());
        assert_eq!(features(&editor)[0].title, "Feature 2");
    }

    #[test]
    fn test_out_of_range_index_is_noop() {
        let mut editor = ContentEditor::open(&section(SectionType::Features));
        let list = ListPath::field("features");

        assert!(!editor.remove_item(&list, 99).unwrap());
        assert!(!editor.update_item(&list, 3, &json!({ "title": "x" })).unwrap());
        assert!(!editor.is_dirty());
    }

    #[test]
    fn test_invalid_item_leaves_draft_unchanged() {
        let mut editor = ContentEditor::open(&section(SectionType::Features));

        let result = editor.add_item(&ListPath::field("features"), &json!({ "title": "x", "icon": "Rocket" }));
        assert!(matches!(result, Err(EditorError::Rejected(_))));
        assert_eq!(features(&editor).len(), 3);
        assert!(!editor.is_dirty());
    }

    #[test]
    fn test_set_field_is_shallow_merge() {
        let mut editor = ContentEditor::open(&section(SectionType::Hero));

        assert!(editor.set_field("ctaText", &"Buy now").unwrap());
        assert!(editor.set_field("overlayOpacity", &75).unwrap());
        // same value again is not a change
        assert!(!editor.set_field("ctaText", &"Buy now").unwrap());

        let SectionContent::Hero(hero) = editor.content() else {
            panic!("expected hero content");
        };
        assert_eq!(hero.cta_text.as_deref(), Some("Buy now"));
        assert_eq!(hero.overlay_opacity, Some(75));
        assert_eq!(hero.cta_link.as_deref(), Some("#"));

        assert!(editor
            .apply(ContentEdit::SetField { key: "ctaLink".into(), value: Value::Null })
            .unwrap());
        assert_eq!(editor.section().resolve_opt("ctaLink"), None);
    }

    #[test]
    fn test_set_field_rejects_wrong_type() {
        let mut editor = ContentEditor::open(&section(SectionType::Hero));
        let result = editor.set_field("overlayOpacity", &"lots");
        assert!(result.is_err());
        assert!(!editor.is_dirty());
    }

    #[test]
    fn test_nested_about_values() {
        let mut editor = ContentEditor::open(&section(SectionType::About));
        let values = ListPath::nested("sections", 1, "values");

        assert!(editor.add_item(&values, &"Integrity").unwrap());
        assert!(editor.remove_item(&values, 0).unwrap());

        let SectionContent::About(about) = editor.content() else {
            panic!("expected about content");
        };
        match &about.sections[1] {
            AboutBlock::Values { values, .. } => {
                assert_eq!(values, &vec!["Quality", "Customer Focus", "Integrity"]);
            }
            other => panic!("expected values block, got {:?}", other),
        }

        // a stale outer index is a no-op
        assert!(!editor.add_item(&ListPath::nested("sections", 9, "values"), &"x").unwrap());
    }

    #[test]
    fn test_about_blocks_add_and_remove() {
        let mut editor = ContentEditor::open(&section(SectionType::About));
        let blocks = ListPath::field("sections");

        let block = AboutBlock::Mission {
            title: "Vision".into(),
            description: "Ahead".into(),
            icon: AboutIcon::Lightbulb,
            description_color: None,
            colors: BlockColors::default(),
            extra: Extra::new(),
        };
        assert!(editor.add_item(&blocks, &block).unwrap());
        assert!(editor.remove_item(&blocks, 0).unwrap());

        let SectionContent::About(about) = editor.content() else {
            panic!("expected about content");
        };
        assert_eq!(about.sections.len(), 2);
        assert_eq!(about.sections[1].title(), "Vision");
    }

    #[test]
    fn test_footer_social_platform_change() {
        let mut editor = ContentEditor::open(&section(SectionType::Footer));
        let links = ListPath::nested("sections", 3, "socialLinks");

        let mut link = SocialLink::for_platform(SocialPlatform::Twitter);
        link.set_platform(SocialPlatform::YouTube);
        assert!(editor.update_item(&links, 0, &link).unwrap());

        let SectionContent::Footer(footer) = editor.content() else {
            panic!("expected footer content");
        };
        let FooterBlock::Social { social_links, .. } = &footer.sections[3] else {
            panic!("expected social block");
        };
        assert_eq!(social_links[0].platform, SocialPlatform::YouTube);
        assert_eq!(social_links[0].icon, SocialIcon::Youtube);
    }

    #[test]
    fn test_not_a_list() {
        let mut editor = ContentEditor::open(&section(SectionType::Header));
        let result = editor.add_item(&ListPath::field("logo"), &json!("x"));
        assert!(matches!(result, Err(EditorError::NotAList(f)) if f == "logo"));
    }

    #[test]
    fn test_list_missing_from_block_is_rejected() {
        let mut editor = ContentEditor::open(&section(SectionType::About));

        // block 0 is a mission block, which has no values list
        let result = editor.add_item(&ListPath::nested("sections", 0, "values"), &"X");
        assert!(matches!(result, Err(EditorError::NotAList(p)) if p == "sections[0].values"));
        assert!(!editor.is_dirty());

        let result = editor.add_item(&ListPath::field("gallery"), &json!({ "src": "a.png" }));
        assert!(matches!(result, Err(EditorError::NotAList(f)) if f == "gallery"));
    }

    #[test]
    fn test_unchanged_record_reports_no_change() {
        let mut editor = ContentEditor::open(&section(SectionType::Features));
        let first = features(&editor)[0].clone();

        assert!(!editor.update_item(&ListPath::field("features"), 0, &first).unwrap());
        assert!(!editor.set_field("features", &features(&editor)).unwrap());
        assert!(!editor.is_dirty());
    }

    #[test]
    fn test_core_fields_untouched() {
        let original = section(SectionType::Contact);
        let mut editor = ContentEditor::open(&original);
        editor.set_field("title", &"New title").unwrap();
        let saved = editor.save();

        assert_eq!(saved.id, original.id);
        assert_eq!(saved.order, original.order);
        assert_eq!(saved.title, original.title);
        assert_eq!(saved.resolve("title", ""), "New title");
    }

    #[test]
    fn test_edit_serialization() {
        let edit = ContentEdit::RemoveItem {
            list: ListPath::nested("sections", 1, "values"),
            index: 2,
        };
        let json = serde_json::to_value(&edit).unwrap();
        assert_eq!(json, json!({ "op": "removeItem", "list": "sections[1].values", "index": 2 }));

        let back: ContentEdit = serde_json::from_value(json).unwrap();
        assert_eq!(back, edit);
    }
}
