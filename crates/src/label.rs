//! The weighted-candidate model of a single label.
//!
//! A [`LabeledString`] splits authored text into the visible label, an optional
//! tab-separated shortcut hint, the accelerator the author asked for (`&` marker)
//! and the accelerator currently assigned. Every visible position carries a
//! desirability score computed once at construction.

use crate::acekey::{fold, UsedSet};
use crate::config::Weights;
use crate::standard::{StandardActionTable, StandardNames};

/// Programmer's-mode marker for an overridden authored accelerator.
/// Parsing turns it back into a plain `&`.
pub const OLD_ACCEL_MARKER: &str = "(&&)";
/// Programmer's-mode marker for a newly assigned accelerator.
/// Parsing removes it entirely.
pub const NEW_ACCEL_MARKER: &str = "(!)&";

#[derive(Debug, Clone, Default)]
pub struct LabeledString {
    original: String,
    text: Vec<char>,
    hint: String,
    requested: Option<usize>,
    assigned: Option<usize>,
    weights: Vec<i32>,
}

impl LabeledString {
    /// Build a label with the default weighting table and the built-in
    /// standard-name table. `None` selects the default initial weight.
    pub fn new(text: &str, initial_weight: Option<i32>) -> Self {
        Self::build(text, initial_weight, &Weights::default(), &StandardActionTable)
    }

    pub fn build(
        text: &str,
        initial_weight: Option<i32>,
        weights: &Weights,
        names: &dyn StandardNames,
    ) -> Self {
        let original = text
            .replacen(OLD_ACCEL_MARKER, "&", 1)
            .replacen(NEW_ACCEL_MARKER, "", 1);

        let (body, hint) = match original.find('\t') {
            Some(p) => (&original[..p], original[p..].to_string()),
            None => (original.as_str(), String::new()),
        };
        let (chars, requested) = strip_accelerator(body);
        let standard = requested.is_some() && names.is_standard(body);
        let initial = initial_weight.unwrap_or(weights.default_weight);
        let weight_table = calculate_weights(&chars, requested, initial, weights, standard);

        LabeledString {
            original,
            text: chars,
            hint,
            requested,
            assigned: requested,
            weights: weight_table,
        }
    }

    /// Visible label: markers resolved, hint dropped.
    pub fn display_text(&self) -> String {
        self.text.iter().collect()
    }

    /// Authored text after marker-token handling, hint included.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The tab-introduced shortcut hint, tab included, or `""`.
    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn requested(&self) -> Option<usize> {
        self.requested
    }

    pub fn assigned(&self) -> Option<usize> {
        self.assigned
    }

    /// Out-of-range positions clear the assignment.
    pub fn set_assigned(&mut self, pos: Option<usize>) {
        self.assigned = pos.filter(|&p| p < self.text.len());
    }

    pub fn weight(&self, pos: usize) -> Option<i32> {
        self.weights.get(pos).copied()
    }

    pub fn weights(&self) -> &[i32] {
        &self.weights
    }

    /// Highest-weighted position whose character is not in `used`.
    /// Returns `(0, None)` when nothing positive is left.
    pub fn max_weight(&self, used: &UsedSet) -> (i32, Option<usize>) {
        let mut max = 0;
        let mut index = None;
        for (pos, &c) in self.text.iter().enumerate() {
            if c == '\0' || used.contains(c) {
                continue;
            }
            if self.weights[pos] > max {
                max = self.weights[pos];
                index = Some(pos);
            }
        }
        (max, index)
    }

    /// Lower-cased character at the assigned position.
    pub fn accelerator(&self) -> Option<char> {
        self.assigned
            .and_then(|p| self.text.get(p))
            .map(|&c| fold(c))
    }

    /// Text to write back onto the element.
    ///
    /// Returns the authored text untouched when the assignment equals the
    /// request. Otherwise the label is re-rendered with a single `&` before the
    /// assigned character, or, in programmer's mode, with [`NEW_ACCEL_MARKER`]
    /// at the new position and [`OLD_ACCEL_MARKER`] at the authored one.
    pub fn accelerated(&self, programmers_mode: bool) -> String {
        if self.assigned == self.requested {
            return self.original.clone();
        }
        let mut out = String::with_capacity(self.original.len() + 2 * NEW_ACCEL_MARKER.len());
        for (pos, &c) in self.text.iter().enumerate() {
            if Some(pos) == self.assigned {
                out.push_str(if programmers_mode { NEW_ACCEL_MARKER } else { "&" });
            } else if programmers_mode && Some(pos) == self.requested {
                out.push_str(OLD_ACCEL_MARKER);
            }
            if c == '&' {
                out.push_str("&&");
            } else {
                out.push(c);
            }
        }
        out.push_str(&self.hint);
        out
    }

    pub fn dump(&self) -> String {
        let marks: Vec<String> = self
            .text
            .iter()
            .zip(self.weights.iter())
            .map(|(c, w)| format!("{c}:{w}"))
            .collect();
        format!(
            "'{}' requested={:?} assigned={:?} [{}]",
            self.display_text(),
            self.requested,
            self.assigned,
            marks.join(" ")
        )
    }
}

impl PartialEq for LabeledString {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
            && self.assigned == other.assigned
            && self.requested == other.requested
    }
}

impl Eq for LabeledString {}

// `&&` is a literal ampersand; the first `&` before a printable character is the
// marker. Lone `&` at the end or before a control character stays literal.
fn strip_accelerator(body: &str) -> (Vec<char>, Option<usize>) {
    let mut out = Vec::with_capacity(body.len());
    let mut requested = None;
    let mut chars = body.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '&' {
            out.push(ch);
            continue;
        }
        match chars.peek() {
            Some('&') => {
                out.push('&');
                chars.next();
            }
            Some(&next) if requested.is_none() && !next.is_control() => {
                requested = Some(out.len());
            }
            _ => out.push('&'),
        }
    }
    (out, requested)
}

fn calculate_weights(
    text: &[char],
    wanted: Option<usize>,
    initial: i32,
    w: &Weights,
    standard: bool,
) -> Vec<i32> {
    let mut start_of_word = true;
    text.iter()
        .enumerate()
        .map(|(pos, &c)| {
            // weights come from user settings, so every sum saturates
            let mut weight = initial.saturating_add(1);
            if pos == 0 {
                weight = weight.saturating_add(w.first_character);
            }
            if start_of_word {
                weight = weight.saturating_add(w.word_beginning);
                start_of_word = false;
            }
            let p = i32::try_from(pos).unwrap_or(i32::MAX);
            if p < w.positional_span {
                weight = weight.saturating_add(w.positional_span - p);
            }
            if Some(pos) == wanted {
                weight = weight.saturating_add(w.wanted_accel);
                if standard {
                    weight = weight.saturating_add(w.standard_accel);
                }
            }
            if !c.is_alphanumeric() {
                weight = 0;
                start_of_word = true;
            }
            weight
        })
        .collect()
}
