pub mod boilerplate;
pub mod sort;
pub mod tokenize;

pub use boilerplate::{is_separator, strip_boilerplate, strip_separators};
pub use sort::{sort_key, sort_rows};
pub use tokenize::tokenize;

use crate::extraction::PageContent;

/// Clean and tokenize one page. Blank lines are dropped.
pub fn page_rows(page: &PageContent) -> Vec<Vec<String>> {
    strip_boilerplate(&page.text)
        .into_iter()
        .map(tokenize)
        .filter(|tokens| !tokens.is_empty())
        .collect()
}
