// Labels are cut here before styling; lipgloss wraps instead of cutting
// and never adds a tail.

pub const ELLIPSIS: &str = "…";

/// Cuts `text` to `width` chars, replacing the overflow with `tail`.
pub fn truncate_with_tail(text: &str, width: usize, tail: &str) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let tail_len = tail.chars().count();
    if width <= tail_len {
        return tail.chars().take(width).collect();
    }
    let mut out: String = text.chars().take(width - tail_len).collect();
    out.push_str(tail);
    out
}

/// One display line: newlines folded, then cut to `width` with an ellipsis.
pub fn single_line(text: &str, width: usize) -> String {
    let flat = text.lines().collect::<Vec<_>>().join(" ");
    truncate_with_tail(&flat, width, ELLIPSIS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_with_tail() {
        assert_eq!(truncate_with_tail("abcdef", 4, "…"), "abc…");
        assert_eq!(truncate_with_tail("abc", 4, "…"), "abc");
        assert_eq!(truncate_with_tail("abcdef", 1, "…"), "…");
        assert_eq!(truncate_with_tail("abcdef", 0, "…"), "");
    }

    #[test]
    fn single_line_folds_newlines_before_cutting() {
        assert_eq!(single_line("first\nsecond", 20), "first second");
        assert_eq!(single_line("first\nsecond", 8), "first s…");
    }
}
