use crate::label::{LabeledString, NEW_ACCEL_MARKER};
use crate::ui::render::styles::{STYLE_ACE, STYLE_DESC};

// Visible characters of a written-back label, the accelerator flagged, plus the hint.
fn label_parts(raw: &str, programmers_mode: bool) -> (Vec<(char, bool)>, String) {
    if programmers_mode {
        // markers stay visible; the character after the new-marker is the key
        let (body, hint) = match raw.find('\t') {
            Some(p) => (&raw[..p], &raw[p + 1..]),
            None => (raw, ""),
        };
        let key_at = body
            .find(NEW_ACCEL_MARKER)
            .map(|p| p + NEW_ACCEL_MARKER.len());
        let chars = body.char_indices().map(|(i, c)| (c, Some(i) == key_at)).collect();
        return (chars, hint.to_string());
    }
    let label = LabeledString::new(raw, None);
    let chars = label
        .display_text()
        .chars()
        .enumerate()
        .map(|(i, c)| (c, Some(i) == label.assigned()))
        .collect();
    (chars, label.hint().trim_start_matches('\t').to_string())
}

/// Label as shown on screen, accelerator highlighted.
pub fn decorate_label(raw: &str, programmers_mode: bool) -> String {
    let (chars, hint) = label_parts(raw, programmers_mode);
    let mut out = String::with_capacity(raw.len());
    for (ch, key) in chars {
        if key {
            out.push_str(&STYLE_ACE.render(&ch.to_string()));
        } else {
            out.push(ch);
        }
    }
    if !hint.is_empty() {
        out.push_str(&STYLE_DESC.render(&format!("  {hint}")));
    }
    out
}

/// Same text as [`decorate_label`] without styling, for width accounting.
pub fn plain_label(raw: &str, programmers_mode: bool) -> String {
    let (chars, hint) = label_parts(raw, programmers_mode);
    let mut out: String = chars.into_iter().map(|(c, _)| c).collect();
    if !hint.is_empty() {
        out.push_str("  ");
        out.push_str(&hint);
    }
    out
}
