/// Known symbols offered as typeahead suggestions, in display priority order.
pub const SYMBOL_CATALOG: &[&str] = &[
    "RELIANCE",
    "TCS",
    "HDFCBANK",
    "INFY",
    "SBIN",
    "ZOMATO",
    "TATAMOTORS",
];

/// Hard cap on how many suggestions are shown under the search box.
pub const MAX_SUGGESTIONS: usize = 5;

/// Prefix-filter the catalog. `query` is already normalized to uppercase;
/// catalog order is preserved and never re-sorted.
pub fn suggest(query: &str, catalog: &[&str]) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }
    catalog
        .iter()
        .filter(|entry| entry.to_ascii_uppercase().starts_with(query))
        .take(MAX_SUGGESTIONS)
        .map(|entry| (*entry).to_string())
        .collect()
}
