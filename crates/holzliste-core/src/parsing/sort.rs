use crate::model::SortKey;
use std::num::ParseIntError;

const LENGTH: usize = 4;
const WIDTH: usize = 5;
const THICKNESS: usize = 6;

/// Derive the ordering key of a row from its length, width and thickness
/// fields. Rows where any of them is missing or not an integer get
/// [`SortKey::Maximal`].
pub fn sort_key(tokens: &[String]) -> SortKey {
    match (
        parse_field(tokens, THICKNESS),
        parse_field(tokens, WIDTH),
        parse_field(tokens, LENGTH),
    ) {
        (Some(Ok(thickness)), Some(Ok(width)), Some(Ok(length))) => SortKey::Dimensions {
            thickness,
            width,
            length,
        },
        _ => SortKey::Maximal,
    }
}

fn parse_field(tokens: &[String], index: usize) -> Option<Result<i64, ParseIntError>> {
    tokens.get(index).map(|t| t.parse::<i64>())
}

/// Sort rows by thickness, then width, then length. Equal keys keep their
/// input order.
pub fn sort_rows(mut rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    rows.sort_by_cached_key(|row| sort_key(row));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_key_reads_thickness_width_length() {
        assert_eq!(
            sort_key(&row("A Desc 1 2 300 150 18 extra")),
            SortKey::Dimensions {
                thickness: 18,
                width: 150,
                length: 300
            }
        );
    }

    #[test]
    fn test_key_accepts_signs() {
        assert_eq!(
            sort_key(&row("A D 1 1 +300 -5 18")),
            SortKey::Dimensions {
                thickness: 18,
                width: -5,
                length: 300
            }
        );
    }

    #[test]
    fn test_short_rows_are_maximal() {
        for n in 0..7 {
            let tokens: Vec<String> = (0..n).map(|i| i.to_string()).collect();
            assert_eq!(sort_key(&tokens), SortKey::Maximal, "len {n}");
        }
    }

    #[test]
    fn test_non_integer_is_maximal() {
        assert_eq!(sort_key(&row("A D 1 2 300 150 18,5")), SortKey::Maximal);
        assert_eq!(sort_key(&row("A D 1 2 300mm 150 18")), SortKey::Maximal);
        assert_eq!(sort_key(&row("A D 1 2 300 1.5 18")), SortKey::Maximal);
    }

    #[test]
    fn test_sort_orders_by_composite_key() {
        let sorted = sort_rows(vec![
            row("A Desc 1 2 300 150 18 extra"),
            row("B Desc2 3 1 100 50 18"),
            row("C Desc3 4 1 100 50 10"),
            row("D Desc4 5 1 90 50 18"),
        ]);
        let first: Vec<&str> = sorted.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(first, vec!["C", "D", "B", "A"]);
    }

    #[test]
    fn test_malformed_rows_sort_last() {
        let sorted = sort_rows(vec![
            row("A Desc 1"),
            row("B D 1 1 9999 9999 9999"),
            row("C D 1 1 x 2 3"),
            row("D D 1 1 1 2 3"),
        ]);
        let first: Vec<&str> = sorted.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(first, vec!["D", "B", "A", "C"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let sorted = sort_rows(vec![
            row("first D 1 1 100 50 18"),
            row("other D 1 1 100 40 18"),
            row("second D 2 1 100 50 18"),
            row("third D 3 1 100 50 18"),
        ]);
        let first: Vec<&str> = sorted.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(first, vec!["other", "first", "second", "third"]);
    }

    #[test]
    fn test_sort_empty() {
        assert!(sort_rows(Vec::new()).is_empty());
    }
}
