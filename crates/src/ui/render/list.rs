use crate::ui::model::{Line, Model, Segment, DEFAULT_WIDTH};
use crate::ui::render::decorate::{decorate_label, plain_label};
use crate::ui::render::styles::{STYLE_CURRENT, STYLE_DESC, STYLE_LABEL};
use crate::ui::render::util::{cut_to_width, normalize_and_pad};

const SEGMENT_SEP: &str = "  ";

fn segment_plain(seg: &Segment, programmers_mode: bool) -> String {
    let text = if seg.decorated {
        plain_label(&seg.text, programmers_mode)
    } else {
        seg.text.clone()
    };
    if seg.current {
        format!("[{text}]")
    } else {
        text
    }
}

fn segment_styled(seg: &Segment, programmers_mode: bool) -> String {
    if !seg.decorated {
        return STYLE_DESC.render(&seg.text);
    }
    let label = decorate_label(&seg.text, programmers_mode);
    if seg.current {
        format!(
            "{}{}{}",
            STYLE_CURRENT.render("["),
            label,
            STYLE_CURRENT.render("]")
        )
    } else {
        label
    }
}

fn line_plain(line: &Line, programmers_mode: bool) -> String {
    let body: Vec<String> = line
        .segments
        .iter()
        .map(|s| segment_plain(s, programmers_mode))
        .collect();
    format!("{}{}", "  ".repeat(line.depth), body.join(SEGMENT_SEP))
}

// Render a single line. Lines wider than the screen are shown plain and cut.
fn render_line(line: &Line, width: usize, programmers_mode: bool) -> String {
    if let Some(cut) = cut_to_width(&line_plain(line, programmers_mode), width) {
        return STYLE_LABEL.render(&cut);
    }
    let body: Vec<String> = line
        .segments
        .iter()
        .map(|s| segment_styled(s, programmers_mode))
        .collect();
    format!(
        "{}{}",
        "  ".repeat(line.depth),
        body.join(STYLE_LABEL.render(SEGMENT_SEP).as_str())
    )
}

/// Every line of the current scope; paging is left to the viewport.
pub fn render_list_content(m: &Model) -> String {
    let width = if m.screen_width > 0 {
        m.screen_width
    } else {
        DEFAULT_WIDTH
    };
    let pm = m.session.programmers_mode();
    let mut b = String::new();
    for line in m.lines() {
        b.push_str(&render_line(&line, width, pm));
        b.push('\n');
    }
    b
}

pub fn render_main_content(m: &Model) -> String {
    let width = if m.screen_width > 0 {
        m.screen_width
    } else {
        DEFAULT_WIDTH
    };
    let per = if m.per_page == 0 {
        m.vp.height
    } else {
        m.per_page
    };
    normalize_and_pad(m.vp.visible_lines(), width, per)
}
