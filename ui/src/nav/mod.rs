//! Multi-level header menu.

mod header_menu;
mod menu_item;
pub mod model;
pub mod sections;

pub use header_menu::HeaderMenu;
pub use menu_item::{MenuItem, MenuSectionView};
pub use model::{NavContext, NavLinks};
