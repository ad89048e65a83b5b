//! Character-based padding and truncation for fixed-width text output.

/// Describes how text should sit inside a fixed-width field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Center,
}

/// Pads `text` to `width` characters using `fill`.
///
/// Text that is already `width` characters or longer is returned unchanged.
/// When centering leaves an odd amount of padding, the extra fill character
/// goes on the right.
pub fn pad(text: &str, width: usize, alignment: Alignment, fill: char) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let margin = width - len;
    let (left, right) = match alignment {
        Alignment::Left => (0, margin),
        Alignment::Right => (margin, 0),
        Alignment::Center => (margin / 2, margin - margin / 2),
    };
    let mut out = String::with_capacity(text.len() + margin * fill.len_utf8());
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(text);
    out.extend(std::iter::repeat(fill).take(right));
    out
}

/// Cuts `text` down to at most `width` characters.
pub fn truncate(text: &str, width: usize) -> &str {
    match text.char_indices().nth(width) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
