//! Bottom line of the preview: rendering mode, where the user is, what the
//! keys do from here and which page is shown.

use crate::ui::model::{Model, DEFAULT_WIDTH};
use crate::ui::render::styles::{
    STYLE_MODELINE, STYLE_MODELINE_KEY, STYLE_MODELINE_MODE, STYLE_MODELINE_TEXT,
};
use crate::ui::render::util::cut_to_width;

const SCOPE_SEP: &str = " › ";
const HINT_GAP: &str = "  ";

fn hints(m: &Model, pages: usize) -> Vec<(&'static str, &'static str)> {
    let esc = if m.popups.is_empty() { "quit" } else { "back" };
    let mut out = vec![("esc", esc)];
    if m.first_tabs().is_some() {
        out.push(("tab", "next tab"));
    }
    let other = if m.session.programmers_mode() {
        "normal"
    } else {
        "raw markers"
    };
    out.push(("^P", other));
    if pages > 1 {
        out.push(("↑/↓", "page"));
    }
    out
}

fn fit(text: &str, room: usize) -> String {
    if room == 0 {
        return String::new();
    }
    cut_to_width(text, room + 1).unwrap_or_else(|| text.to_string())
}

/// Modeline content at most `inner_max` columns wide. Hints are dropped from
/// the right first, then the scope is cut; indicator and page always stay.
pub fn render_modeline(m: &Model, inner_max: usize) -> String {
    let total = m.lines().len();
    let pages = if m.per_page == 0 {
        1
    } else {
        total.div_ceil(m.per_page).max(1)
    };
    let indicator = if m.session.programmers_mode() { 'P' } else { 'A' };
    let page = if pages > 1 {
        format!("{}/{}", m.page + 1, pages)
    } else {
        String::new()
    };

    // " X " block on the left, the page on the far right
    let fixed = 3 + page.chars().count();
    let scope = fit(&m.scope().join(SCOPE_SEP), inner_max.saturating_sub(fixed));
    let mut used = fixed + scope.chars().count();

    let text = &*STYLE_MODELINE_TEXT;
    let mut shown = String::new();
    for (key, desc) in hints(m, pages) {
        let w = HINT_GAP.len() + key.chars().count() + 1 + desc.chars().count();
        if used + w > inner_max {
            break;
        }
        used += w;
        shown.push_str(&text.render(HINT_GAP));
        shown.push_str(&STYLE_MODELINE_KEY.render(key));
        shown.push_str(&text.render(&format!(" {desc}")));
    }
    let filler = " ".repeat(inner_max.saturating_sub(used));

    format!(
        "{}{}{}{}{}",
        STYLE_MODELINE_MODE.render(&format!(" {indicator} ")),
        text.render(&scope),
        shown,
        text.render(&filler),
        text.render(&page)
    )
}

pub fn render_modeline_padded(m: &Model) -> String {
    let width = if m.screen_width > 0 {
        m.screen_width
    } else {
        DEFAULT_WIDTH
    };
    let line = render_modeline(m, width.saturating_sub(3));
    STYLE_MODELINE
        .clone()
        .width(i32::try_from(width).unwrap_or(i32::MAX))
        .render(&line)
}

#[cfg(test)]
mod tests {
    use crate::ui::model::{initial_model, sample_doc, Model};
    use crate::ui::Msg;
    use regex::Regex;

    fn strip_ansi(s: &str) -> String {
        let re = Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").unwrap();
        re.replace_all(s, "").to_string()
    }

    fn sized(width: usize, height: usize) -> Model {
        let mut m = initial_model(sample_doc());
        m.update(Msg::WindowSize { width, height });
        m
    }

    fn modeline(m: &Model) -> String {
        strip_ansi(&crate::ui::render_modeline_padded(m))
    }

    #[test]
    fn wide_screen_shows_every_hint() {
        let m = sized(80, 24);
        let line = modeline(&m);
        assert_eq!(line.chars().count(), 80);
        assert!(line.trim_start().starts_with("A Settings"), "`{line}`");
        assert!(line.contains("esc quit"));
        assert!(line.contains("tab next tab"));
        assert!(line.contains("^P raw markers"));
        // one page only
        assert!(!line.contains("↑/↓"));
    }

    #[test]
    fn indicator_and_hint_follow_the_mode() {
        let mut m = sized(80, 24);
        m.update(Msg::ToggleMode);
        let line = modeline(&m);
        assert!(line.trim_start().starts_with('P'));
        assert!(line.contains("^P normal"));
    }

    #[test]
    fn scope_shows_the_open_popup_chain() {
        let mut m = sized(80, 24);
        m.update(Msg::Rune('f'));
        m.update(Msg::Rune('e'));
        let line = modeline(&m);
        assert!(line.contains("Settings › file › export"), "`{line}`");
        assert!(line.contains("esc back"));
    }

    #[test]
    fn narrow_screen_keeps_page_and_drops_hints() {
        let m = sized(30, 6);
        assert_eq!(m.per_page, 2);
        let line = modeline(&m);
        assert_eq!(line.chars().count(), 30);
        assert!(line.contains("esc quit"));
        assert!(!line.contains("next tab"));
        assert!(line.trim_end().ends_with("1/3"), "`{line}`");
    }

    #[test]
    fn scope_is_cut_before_the_page_goes() {
        let mut m = sized(16, 6);
        m.update(Msg::Rune('f'));
        let line = modeline(&m);
        assert_eq!(line.chars().count(), 16);
        assert!(line.contains('…'), "`{line}`");
        assert!(line.trim_end().ends_with("/2"), "`{line}`");
    }
}
