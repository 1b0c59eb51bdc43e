/// Line marking the start of the annotation block at the top of a page.
pub const HEADER_START_MARKER: &str = "****** ANNEN";

/// Line closing the annotation block.
pub const HEADER_END_MARKER: &str = "********************";

const DASH_SEPARATOR: &str = "--------------------------------";
const UNDERSCORE_SEPARATOR: &str = "________________________________";

/// Remove the header block and separator lines from one page of text.
///
/// The block spans from the last line containing [`HEADER_START_MARKER`]
/// through the line after the last line containing [`HEADER_END_MARKER`].
/// Without a start marker the block starts at the first line. Without an end
/// marker, or when the start marker comes after the end marker, nothing is
/// removed as header.
pub fn strip_boilerplate(page_text: &str) -> Vec<&str> {
    let lines: Vec<&str> = page_text.split('\n').collect();

    let mut header_start = None;
    let mut header_end = None;
    for (i, line) in lines.iter().enumerate() {
        if line.contains(HEADER_START_MARKER) {
            header_start = Some(i);
        }
        if line.contains(HEADER_END_MARKER) {
            header_end = Some(i);
        }
    }

    let body: Vec<&str> = match header_end {
        Some(end) if header_start.unwrap_or(0) <= end => {
            let start = header_start.unwrap_or(0);
            // One padding line after the end marker goes too.
            let resume = (end + 2).min(lines.len());
            lines[..start]
                .iter()
                .chain(&lines[resume..])
                .copied()
                .collect()
        }
        _ => lines,
    };

    strip_separators(&body)
}

/// Drop decorative dash and underscore rules.
pub fn strip_separators<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    lines
        .iter()
        .copied()
        .filter(|line| !is_separator(line))
        .collect()
}

pub fn is_separator(line: &str) -> bool {
    line.contains(DASH_SEPARATOR) || line.contains(UNDERSCORE_SEPARATOR)
}
