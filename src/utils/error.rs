/// Flattens a provider error into one bounded line for logs and reports.
///
/// Drops echoed response bodies (`text: ...`) and backtraces, collapses whitespace
/// and truncates on a char boundary.
pub fn compact_error_message(message: &str, max_len: usize) -> String {
    let head = message
        .split_once("Stack backtrace:")
        .map_or(message, |(prefix, _)| prefix);
    let (head, elided_body) = match head.split_once(" text: ") {
        Some((prefix, _)) => (prefix, true),
        None => (head, false),
    };

    let mut compact = head.split_whitespace().collect::<Vec<_>>().join(" ");
    if elided_body {
        compact.push_str(" text=<omitted>");
    }
    if compact.len() <= max_len {
        return compact;
    }

    let mut cut = max_len;
    while !compact.is_char_boundary(cut) {
        cut -= 1;
    }
    compact.truncate(cut);
    compact.push_str("...(truncated)");
    compact
}
