/// Prefix git puts on lines added by a diff hunk, followed by a space so that
/// the `+++ b/<file>` header never qualifies.
const ADDED_LINE_PREFIX: &str = "+ ";

/// Splits command output into trimmed, non-blank lines in their original order.
pub fn trimmed_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Keeps only the added lines of a unified diff, joined with `\n`.
pub fn added_lines(diff_text: &str) -> String {
    diff_text
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| line.starts_with(ADDED_LINE_PREFIX))
        .collect::<Vec<_>>()
        .join("\n")
}
