//! Avatar content and color derived from a student's name.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

/// Background colors cycled through by name.
const PALETTE: [&str; 6] = ["#f56a00", "#7265e6", "#ffbf00", "#00a2ae", "#87d068", "#1677ff"];

/// Shown when the name is blank.
pub const FALLBACK_COLOR: &str = "#bfbfbf";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AvatarContent {
    /// Generic user glyph for blank names.
    Icon,
    Initials(String),
}

/// One letter for a single-word name, first and last initials otherwise.
pub fn avatar_content(name: &str) -> AvatarContent {
    let mut words = name.split_whitespace();
    let Some(first) = words.next() else {
        return AvatarContent::Icon;
    };
    let mut initials = String::new();
    push_initial(&mut initials, first);
    if let Some(last) = words.last() {
        push_initial(&mut initials, last);
    }
    AvatarContent::Initials(initials)
}

fn push_initial(out: &mut String, word: &str) {
    if let Some(c) = word.chars().next() {
        out.extend(c.to_uppercase());
    }
}

/// Stable palette color for a name; the same name always gets the same color.
pub fn avatar_color(name: &str) -> &'static str {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return FALLBACK_COLOR;
    }
    let hash = trimmed
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)));
    PALETTE[hash as usize % PALETTE.len()]
}
