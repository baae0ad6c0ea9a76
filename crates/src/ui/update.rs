use crate::ui::model::Model;
use bubbletea_widgets::Viewport;

pub fn handle_update(m: &mut Model, msg: crate::ui::Msg) {
    match msg {
        crate::ui::Msg::WindowSize { width, height } => handle_window_size(m, width, height),
        crate::ui::Msg::Rune(r) => handle_rune(m, r),
        crate::ui::Msg::KeyTab => handle_key_tab(m),
        crate::ui::Msg::KeyEsc => handle_key_esc(m),
        crate::ui::Msg::KeyDown => handle_key_down(m),
        crate::ui::Msg::KeyUp => handle_key_up(m),
        crate::ui::Msg::ToggleMode => handle_toggle_mode(m),
    }
    m.sync_viewport();
}

fn total_pages(m: &Model) -> usize {
    let lines = m.lines().len();
    if m.per_page == 0 || lines == 0 {
        1
    } else {
        lines.div_ceil(m.per_page)
    }
}

fn handle_window_size(m: &mut Model, width: usize, height: usize) {
    m.screen_width = width;
    m.per_page = height.saturating_sub(crate::ui::model::RESERVED_LINES);
    m.vp = Viewport::new(m.screen_width, m.per_page);
    if m.page >= total_pages(m) {
        m.page = 0;
    }
}

fn handle_rune(m: &mut Model, r: char) {
    if !r.is_alphanumeric() {
        return;
    }
    m.activate(r);
}

fn handle_key_tab(m: &mut Model) {
    match m.first_tabs() {
        Some((owner, active, count)) => {
            let next = (active + 1) % count;
            m.switch_tab(&owner, next);
        }
        None => m.status = "no tab widget".to_string(),
    }
}

fn handle_key_esc(m: &mut Model) {
    if m.close_menu() {
        m.status = match m.popups.last() {
            Some(id) => format!("back to {id}"),
            None => "menu closed".to_string(),
        };
    }
}

fn handle_key_down(m: &mut Model) {
    if m.page + 1 < total_pages(m) {
        m.page += 1;
    }
}

fn handle_key_up(m: &mut Model) {
    m.page = m.page.saturating_sub(1);
}

fn handle_toggle_mode(m: &mut Model) {
    m.toggle_programmers_mode();
}
