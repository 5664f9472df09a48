mod food;
mod init;
mod recipe;

pub use food::handle_food;
pub use init::handle_init;
pub use recipe::handle_recipe;

use crate::config::LarderConfig;
use crate::storage::{FileBlobStore, InventoryStore, RecipeStore};
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: LarderConfig,
    pub root: PathBuf,
    pub foods: InventoryStore<FileBlobStore>,
    pub recipes: RecipeStore<FileBlobStore>,
}

impl CommandContext {
    pub fn new(config: LarderConfig, root: PathBuf) -> Self {
        let data_path = config.data_path(&root);
        let foods = InventoryStore::open(
            FileBlobStore::new(data_path.clone()),
            config.larder.foods_key.clone(),
        );
        let recipes = RecipeStore::open(
            FileBlobStore::new(data_path),
            config.larder.recipes_key.clone(),
        );
        Self {
            config,
            root,
            foods,
            recipes,
        }
    }
}
