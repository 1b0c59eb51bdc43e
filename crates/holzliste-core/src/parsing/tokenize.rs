/// Split a cleaned line into fields.
///
/// Whitespace runs collapse to one space and a space before `+` is dropped,
/// so quantity notations like `2 +1` stay one field (`2+1`).
pub fn tokenize(line: &str) -> Vec<String> {
    normalize_line(line)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn normalize_line(line: &str) -> String {
    line.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace(" +", "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(
            tokenize("  Fichte   Regal\t 4  2   800 300 19  "),
            vec!["Fichte", "Regal", "4", "2", "800", "300", "19"]
        );
    }

    #[test]
    fn test_joins_plus_notation() {
        assert_eq!(
            tokenize("Buche Tuer 7 2 +1 2000 600 40"),
            vec!["Buche", "Tuer", "7", "2+1", "2000", "600", "40"]
        );
    }

    #[test]
    fn test_plus_after_several_spaces() {
        assert_eq!(tokenize("2    + 1"), vec!["2+", "1"]);
    }

    #[test]
    fn test_blank_line_yields_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t \r").is_empty());
    }

    #[test]
    fn test_carriage_return_is_whitespace() {
        assert_eq!(tokenize("A Desc 1\r"), vec!["A", "Desc", "1"]);
    }
}
