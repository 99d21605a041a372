/// Cleans raw decoded text while keeping its line structure.
///
/// - `\r\n` and lone `\r` become `\n`
/// - tabs, no-break spaces and other horizontal whitespace become a single space
/// - each line is trimmed; blank lines are kept as empty lines
pub fn normalize_text(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");

    unified
        .split('\n')
        .map(collapse_spaces)
        .collect::<Vec<_>>()
        .join("\n")
}

fn collapse_spaces(line: &str) -> String {
    line.split(|c: char| c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Non-blank lines of already-normalized text.
pub fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty())
}
