use crate::ui::model::{Model, DEFAULT_WIDTH, STATUS_BLOCK_LINES};
use crate::ui::render::styles::{STYLE_STATUS, STYLE_STATUS_BOX};

pub fn render_status_block(m: &Model) -> Vec<String> {
    let box_width = if m.screen_width >= 2 {
        m.screen_width - 2
    } else {
        DEFAULT_WIDTH
    };
    // horizontal padding takes two columns
    let room = box_width.saturating_sub(2);
    let status_line: String = format!("> {}", m.status).chars().take(room).collect();
    let w_i32: i32 = box_width.try_into().unwrap_or(i32::MAX);
    let inner = STYLE_STATUS.render(&status_line);
    let status_block = STYLE_STATUS_BOX.clone().width(w_i32).render(&inner);
    let mut out: Vec<String> = status_block.lines().map(|s| s.to_string()).collect();
    // Ensure the status block occupies exactly STATUS_BLOCK_LINES lines by truncating or padding with empty lines.
    out.truncate(STATUS_BLOCK_LINES);
    while out.len() < STATUS_BLOCK_LINES {
        out.push(String::new());
    }
    out
}
