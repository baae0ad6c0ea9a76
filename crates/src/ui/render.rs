// Render module split into focused submodules: status box, tree/popup content, modeline.

pub mod decorate;
pub mod full;
pub mod list;
pub mod modeline;
pub mod status;
pub mod styles;
pub mod util;

pub use decorate::{decorate_label, plain_label};
pub use full::render_full;
pub use list::{render_list_content, render_main_content};
pub use modeline::{render_modeline, render_modeline_padded};
pub use status::render_status_block;
