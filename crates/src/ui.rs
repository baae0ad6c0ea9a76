// UI module root: interactive preview of an accelerated tree, split into focused submodules under `ui/`

pub mod model;
pub mod render;
pub mod run;
pub mod update;

pub use model::{initial_model, Action, Line, Model, Segment};
pub use render::{
    render_full, render_main_content, render_modeline, render_modeline_padded, render_status_block,
};
pub use run::run;
pub use update::handle_update;

// Messages used by the update logic
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    WindowSize { width: usize, height: usize },
    Rune(char),
    KeyTab,
    KeyEsc,
    KeyUp,
    KeyDown,
    ToggleMode,
}
