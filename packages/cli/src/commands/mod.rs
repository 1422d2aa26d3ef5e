pub mod clear;
pub mod edit;
pub mod init;
pub mod render;
pub mod sections;
pub mod status;
pub mod transfer;

pub use clear::{clear, ClearArgs};
pub use edit::{edit, EditArgs};
pub use init::{init, InitArgs};
pub use render::{render, RenderArgs};
pub use sections::{add, list, move_section, remove, templates, AddArgs, MoveArgs, RemoveArgs};
pub use status::{preview, status, PreviewArgs};
pub use transfer::{export, import, ExportArgs, ImportArgs};

use crate::config::Config;
use anyhow::Result;
use sitebuilder_editor::{Builder, BuilderOptions, DirectoryStore};

/// Open the builder over the configured store directory.
pub(crate) fn open_builder(config: &Config, cwd: &str) -> Result<Builder<DirectoryStore>> {
    let store = DirectoryStore::open(config.get_store_dir(cwd))?;
    let options = BuilderOptions {
        site_name: config.site_name.clone(),
    };
    Ok(Builder::load(store, options))
}
