//! Catalog Display Helpers

/// Formats an amount the way prices are shown in the store.
///
/// Example output: `"$299.99"`.
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}
