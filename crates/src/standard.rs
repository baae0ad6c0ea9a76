use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Oracle answering whether a label is a well-known action name.
///
/// Labels are passed tab-truncated, with their `&` marker still in place
/// (`"&Save"`, `"Save &As..."`).
pub trait StandardNames: Send + Sync {
    fn is_standard(&self, text: &str) -> bool;
}

impl<F> StandardNames for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_standard(&self, text: &str) -> bool {
        self(text)
    }
}

/// Never grants the standard-name bonus.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStandardNames;

impl StandardNames for NoStandardNames {
    fn is_standard(&self, _text: &str) -> bool {
        false
    }
}

static STANDARD_LABELS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // menus
        "&File",
        "&Edit",
        "&View",
        "&Go",
        "&Bookmarks",
        "&Tools",
        "&Settings",
        "&Window",
        "&Help",
        // file
        "&New",
        "&Open...",
        "Open &Recent",
        "&Save",
        "Save &As...",
        "Re&vert",
        "&Close",
        "&Print...",
        "Print Previe&w",
        "&Mail...",
        "&Quit",
        // edit
        "&Undo",
        "Re&do",
        "Cu&t",
        "&Copy",
        "&Paste",
        "Select &All",
        "Dese&lect",
        "&Find...",
        "Find &Next",
        "Find Pre&vious",
        "&Replace...",
        // view
        "&Actual Size",
        "&Fit to Page",
        "Zoom &In",
        "Zoom &Out",
        "&Zoom...",
        "&Redisplay",
        // go
        "&Up",
        "&Back",
        "&Forward",
        "&Home",
        "&Previous Page",
        "&Next Page",
        "&Go to...",
        "&First Page",
        "&Last Page",
        // settings / help
        "&Preferences...",
        "Configure S&hortcuts...",
        "Configure Tool&bars...",
        "Configure &Notifications...",
        "&Handbook",
        "What's &This?",
        "&Report Bug...",
        "&About",
        // dialog buttons
        "&OK",
        "&Cancel",
        "&Yes",
        "&No",
        "&Apply",
        "&Reset",
        "&Defaults",
        "&Discard",
        "&Delete",
        "&Clear",
        "&Continue",
        "&Overwrite",
    ]
    .into_iter()
    .collect()
});

/// The built-in table of standard action labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardActionTable;

impl StandardNames for StandardActionTable {
    fn is_standard(&self, text: &str) -> bool {
        STANDARD_LABELS.contains(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_marked_labels_only() {
        let t = StandardActionTable;
        assert!(t.is_standard("&Save"));
        assert!(t.is_standard("&File"));
        assert!(!t.is_standard("Save"));
        assert!(!t.is_standard("Sa&ve"));
    }

    #[test]
    fn closures_are_oracles() {
        let fake = |s: &str| s == "&Frobnicate";
        assert!(fake.is_standard("&Frobnicate"));
        assert!(!NoStandardNames.is_standard("&Save"));
    }
}
