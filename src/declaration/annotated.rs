//! Extracting section names and timestamps from a pasted tracklist
//!
//! Video descriptions usually list tracks one per line, in one of a handful
//! of shapes. Each strategy pairs a name pattern with a time pattern and must
//! match every line for its result to count.

use regex::Regex;

/// (name pattern, time pattern), tried in order
const STRATEGIES: &[(&str, &str)] = &[
    // 1. Title (3:45)
    (r"^\d+.\s([^\(]+)\s\(\d+:\d+\)", r"\((\d+:\d+)\)"),
    // 1. Title 3:45
    (r"^\d+.\s([^\(]+)\s\d+:\d+", r"(\d+:\d+)"),
    // 3:45 - Title  /  1:02:03 Artist - Title
    (r"^\d+(?::\d+)+.+-\s+(.*)$", r"(\d+(:\d+)+)"),
];

/// Every strategy's extraction that fits `expected` lines, in strategy order
///
/// Returns nothing when the line count is not `expected`.
pub fn annotated_candidates(
    lines: &[String],
    expected: usize,
) -> impl Iterator<Item = (Vec<String>, Vec<String>)> + '_ {
    let usable = lines.len() == expected;
    if !usable {
        log::debug!(
            "Expecting {} songs, but found {} lines",
            expected,
            lines.len()
        );
    }

    STRATEGIES
        .iter()
        .filter(move |_| usable)
        .filter_map(move |(name, time)| try_strategy(name, time, lines))
}

/// First strategy that extracts a name and a time from every line
pub fn parse_annotated_lines(
    lines: &[String],
    expected: usize,
) -> Option<(Vec<String>, Vec<String>)> {
    annotated_candidates(lines, expected).next()
}

fn try_strategy(
    name_pattern: &str,
    time_pattern: &str,
    lines: &[String],
) -> Option<(Vec<String>, Vec<String>)> {
    let name_re = Regex::new(name_pattern).ok()?;
    let time_re = Regex::new(time_pattern).ok()?;

    let mut names = Vec::with_capacity(lines.len());
    let mut times = Vec::with_capacity(lines.len());

    for line in lines {
        let line = trim_non_graphic(line);
        names.push(first_group(&name_re, line)?);
        times.push(first_group(&time_re, line)?);
    }

    Some((names, times))
}

fn first_group(re: &Regex, line: &str) -> Option<String> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Strip control and formatting characters (stray `\r`, BOMs, zero-width
/// marks) from both ends
fn trim_non_graphic(line: &str) -> &str {
    line.trim_matches(|c: char| {
        c.is_control() || matches!(c, '\u{feff}' | '\u{200b}'..='\u{200f}' | '\u{2060}')
    })
}
