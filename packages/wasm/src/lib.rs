mod session;
mod storage;

pub use session::{apply_content_edit, catalog_json, ApiError, ApiResult, Session};
pub use storage::{JsStorage, LocalStorageStore};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Page builder bound to a Web Storage object.
#[wasm_bindgen]
pub struct WebsiteBuilder {
    session: Session<LocalStorageStore>,
}

#[wasm_bindgen]
impl WebsiteBuilder {
    /// Load state from `storage` (usually `window.localStorage`).
    #[wasm_bindgen(constructor)]
    pub fn new(storage: JsStorage) -> WebsiteBuilder {
        WebsiteBuilder {
            session: Session::new(LocalStorageStore::new(storage)),
        }
    }

    /// Sections in display order, as JSON
    pub fn sections(&self) -> Result<String, JsValue> {
        self.session.sections_json().map_err(to_js)
    }

    pub fn catalog(&self) -> Result<String, JsValue> {
        catalog_json().map_err(to_js)
    }

    /// Add a section from the catalog; returns it as JSON
    #[wasm_bindgen(js_name = addSection)]
    pub fn add_section(&mut self, section_type: &str) -> Result<String, JsValue> {
        self.session.add_section(section_type).map_err(to_js)
    }

    pub fn reorder(&mut self, source_id: &str, target_id: &str) -> Result<bool, JsValue> {
        self.session
            .builder_mut()
            .reorder(source_id, target_id)
            .map_err(to_js)
    }

    #[wasm_bindgen(js_name = updateSection)]
    pub fn update_section(&mut self, section_json: &str) -> Result<(), JsValue> {
        self.session.update_section(section_json).map_err(to_js)
    }

    #[wasm_bindgen(js_name = removeSection)]
    pub fn remove_section(&mut self, id: &str) -> Result<bool, JsValue> {
        self.session.builder_mut().remove(id).map_err(to_js)
    }

    #[wasm_bindgen(js_name = exportJson)]
    pub fn export_json(&self) -> Result<String, JsValue> {
        self.session.builder().export_json().map_err(to_js)
    }

    /// Replace the page with an exported document; returns the section count
    #[wasm_bindgen(js_name = importJson)]
    pub fn import_json(&mut self, text: &str) -> Result<usize, JsValue> {
        self.session.builder_mut().import_json(text).map_err(to_js)
    }

    /// Reset everything. The host asks the user and passes the answer.
    #[wasm_bindgen(js_name = clearAll)]
    pub fn clear_all(&mut self, confirmed: bool) -> Result<bool, JsValue> {
        self.session
            .builder_mut()
            .clear_all(|| confirmed)
            .map_err(to_js)
    }

    #[wasm_bindgen(js_name = applyMutation)]
    pub fn apply_mutation(&mut self, mutation_json: &str) -> Result<bool, JsValue> {
        self.session.apply_mutation(mutation_json).map_err(to_js)
    }

    #[wasm_bindgen(js_name = renderHtml)]
    pub fn render_html(&self, full_document: bool) -> String {
        self.session.render_html(full_document)
    }

    // ----- Editing -----

    #[wasm_bindgen(js_name = beginEdit)]
    pub fn begin_edit(&mut self, id: &str) -> Result<String, JsValue> {
        self.session.begin_edit(id).map_err(to_js)
    }

    #[wasm_bindgen(js_name = commitEdit)]
    pub fn commit_edit(&mut self, section_json: &str) -> Result<(), JsValue> {
        self.session.commit_edit(section_json).map_err(to_js)
    }

    #[wasm_bindgen(js_name = cancelEdit)]
    pub fn cancel_edit(&mut self) -> Result<(), JsValue> {
        self.session.builder_mut().cancel_edit().map_err(to_js)
    }

    /// Section being edited, as JSON
    #[wasm_bindgen(js_name = editingSection)]
    pub fn editing_section(&self) -> Result<Option<String>, JsValue> {
        self.session.editing_json().map_err(to_js)
    }

    // ----- UI flags -----

    #[wasm_bindgen(getter, js_name = previewMode)]
    pub fn preview_mode(&self) -> bool {
        self.session.builder().ui().preview_mode
    }

    #[wasm_bindgen(js_name = setPreviewMode)]
    pub fn set_preview_mode(&mut self, on: bool) -> Result<(), JsValue> {
        self.session.builder_mut().set_preview_mode(on).map_err(to_js)
    }

    #[wasm_bindgen(js_name = togglePreviewMode)]
    pub fn toggle_preview_mode(&mut self) -> Result<bool, JsValue> {
        self.session.builder_mut().toggle_preview_mode().map_err(to_js)
    }

    #[wasm_bindgen(getter, js_name = sidebarOpen)]
    pub fn sidebar_open(&self) -> bool {
        self.session.builder().ui().sidebar_open
    }

    #[wasm_bindgen(js_name = setSidebarOpen)]
    pub fn set_sidebar_open(&mut self, open: bool) -> Result<(), JsValue> {
        self.session.builder_mut().set_sidebar_open(open).map_err(to_js)
    }

    #[wasm_bindgen(getter, js_name = sidebarPinned)]
    pub fn sidebar_pinned(&self) -> bool {
        self.session.builder().ui().sidebar_pinned
    }

    #[wasm_bindgen(js_name = setSidebarPinned)]
    pub fn set_sidebar_pinned(&mut self, pinned: bool) -> Result<(), JsValue> {
        self.session.builder_mut().set_sidebar_pinned(pinned).map_err(to_js)
    }
}

/// Apply a content edit (or list of edits) to a section outside any
/// builder; returns the saved section as JSON.
#[wasm_bindgen(js_name = applyContentEdit)]
pub fn apply_content_edit_js(section_json: &str, edit_json: &str) -> Result<String, JsValue> {
    apply_content_edit(section_json, edit_json).map_err(to_js)
}

/// Section templates as JSON
#[wasm_bindgen(js_name = sectionCatalog)]
pub fn section_catalog_js() -> Result<String, JsValue> {
    catalog_json().map_err(to_js)
}
