use serde::{Deserialize, Serialize};

pub const DEFAULT_WEIGHT: i32 = 50;
pub const FIRST_CHARACTER_EXTRA_WEIGHT: i32 = 50;
pub const WORD_BEGINNING_EXTRA_WEIGHT: i32 = 50;
pub const POSITIONAL_SPAN: i32 = 50;
pub const WANTED_ACCEL_EXTRA_WEIGHT: i32 = 150;
pub const STANDARD_ACCEL: i32 = 300;
pub const ACTION_ELEMENT_WEIGHT: i32 = 50;
pub const GROUP_BOX_WEIGHT: i32 = -2000;
pub const CHECKABLE_GROUP_BOX_WEIGHT: i32 = 20;
pub const MENU_TITLE_WEIGHT: i32 = 250;
pub const DIALOG_BUTTON_EXTRA_WEIGHT: i32 = 300;
pub const MENU_ENTRY_WEIGHT: i32 = 50;
pub const MENU_ENTRY_WITH_SHORTCUT_WEIGHT: i32 = 0;

/// Tunable weighting table used when building labels and grouping them.
///
/// Only the relative magnitudes matter: they decide who wins a tie between
/// two labels competing for the same character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub default_weight: i32,
    pub first_character: i32,
    pub word_beginning: i32,
    /// Positions below this get a `span - pos` bonus.
    pub positional_span: i32,
    pub wanted_accel: i32,
    pub standard_accel: i32,
    pub action_element: i32,
    pub group_box: i32,
    pub checkable_group_box: i32,
    pub menu_title: i32,
    pub dialog_button: i32,
    pub menu_entry: i32,
    pub menu_entry_with_shortcut: i32,
}

impl Default for Weights {
    fn default() -> Self {
        Weights {
            default_weight: DEFAULT_WEIGHT,
            first_character: FIRST_CHARACTER_EXTRA_WEIGHT,
            word_beginning: WORD_BEGINNING_EXTRA_WEIGHT,
            positional_span: POSITIONAL_SPAN,
            wanted_accel: WANTED_ACCEL_EXTRA_WEIGHT,
            standard_accel: STANDARD_ACCEL,
            action_element: ACTION_ELEMENT_WEIGHT,
            group_box: GROUP_BOX_WEIGHT,
            checkable_group_box: CHECKABLE_GROUP_BOX_WEIGHT,
            menu_title: MENU_TITLE_WEIGHT,
            dialog_button: DIALOG_BUTTON_EXTRA_WEIGHT,
            menu_entry: MENU_ENTRY_WEIGHT,
            menu_entry_with_shortcut: MENU_ENTRY_WITH_SHORTCUT_WEIGHT,
        }
    }
}

/// Per-document settings. Every field is optional in JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Render old and new accelerator positions side by side.
    pub programmers_mode: bool,
    /// Element ids that are never turned into labels, subtrees included.
    pub ignore: Vec<String>,
    pub weights: Weights,
}
