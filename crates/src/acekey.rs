use crate::label::LabeledString;
use std::collections::BTreeSet;
use std::fmt;

/// Returns true for characters that can carry an accelerator (letters and digits).
#[inline]
pub fn is_accel_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// Case-folds an accelerator character. Multi-char lower forms keep their first char.
#[inline]
pub fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Accelerator characters already claimed by this group or enclosing ones.
/// Membership is case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedSet {
    chars: BTreeSet<char>,
}

impl UsedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, c: char) -> bool {
        self.chars.insert(fold(c))
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&fold(c))
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl FromIterator<char> for UsedSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = UsedSet::new();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl fmt::Display for UsedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.chars.iter().collect();
        write!(f, "{s}")
    }
}

/// Assign at most one accelerator per label so that no two labels of `group`
/// share one and none reuses a character of `used`.
///
/// Greedy: each round the highest remaining bid across the group wins; ties go
/// to the earlier label. Winners are added to `used`. Runs at most
/// `group.len()` rounds and returns how many labels got an accelerator.
pub fn find_accelerators(group: &mut [LabeledString], used: &mut UsedSet) -> usize {
    for label in group.iter_mut() {
        label.set_assigned(None);
    }

    let mut resolved = vec![false; group.len()];
    let mut taken = 0usize;
    for _ in 0..group.len() {
        let mut best: Option<(i32, usize, usize)> = None;
        for (i, label) in group.iter().enumerate() {
            if resolved[i] {
                continue;
            }
            if let (score, Some(pos)) = label.max_weight(used) {
                if best.map_or(true, |(max, _, _)| score > max) {
                    best = Some((score, i, pos));
                }
            }
        }

        // nothing positive left anywhere
        let Some((score, index, pos)) = best else {
            break;
        };

        let winner = &mut group[index];
        winner.set_assigned(Some(pos));
        if let Some(c) = winner.accelerator() {
            used.insert(c);
            log::debug!(
                "accelerator '{c}' -> '{}' (score {score})",
                winner.display_text()
            );
        }
        resolved[index] = true;
        taken += 1;
    }
    taken
}
