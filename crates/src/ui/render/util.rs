use lipgloss::Style;

/// Pads (or truncates) to exactly `per` lines, each rendered `total_width` wide.
pub fn normalize_and_pad(lines: Vec<String>, total_width: usize, per: usize) -> String {
    let line_style = Style::new().width(total_width as i32);
    let mut normalized: Vec<String> = lines.into_iter().map(|l| line_style.render(&l)).collect();
    normalized.resize_with(per, || line_style.render(""));
    normalized.join("\n")
}

/// Cuts plain text so it stays strictly narrower than `width`, marking the cut.
pub fn cut_to_width(plain: &str, width: usize) -> Option<String> {
    if plain.chars().count() < width {
        return None;
    }
    let mut cut: String = plain.chars().take(width.saturating_sub(2)).collect();
    cut.push('…');
    Some(cut)
}
