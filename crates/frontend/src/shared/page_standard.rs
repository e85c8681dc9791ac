//! Page category constants.
//!
//! Every screen declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"a004_sales_record--list"`) and `data-page-category` with one of
//! the constants below.

/// List of records: table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids() {
        assert!(is_valid_page_id("a004_sales_record--list"));
        assert!(!is_valid_page_id("a004_sales_record"));
        assert!(!is_valid_page_id("--list"));
    }
}
