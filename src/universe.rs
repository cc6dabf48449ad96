// Static symbol universe and display names.

/// Symbols available for tracking, US large caps plus two NSE listings.
pub const SYMBOLS: [&str; 8] = [
    "AAPL",
    "TSLA",
    "MSFT",
    "GOOGL",
    "AMZN",
    "RELIANCE.NS",
    "TCS.NS",
    "NVDA",
];

/// Display name for a known symbol. Callers fall back to the raw
/// symbol when there is no entry.
pub fn company_name(symbol: &str) -> Option<&'static str> {
    match symbol {
        "AAPL" => Some("Apple Inc."),
        "TSLA" => Some("Tesla, Inc."),
        "MSFT" => Some("Microsoft Corporation"),
        "GOOGL" => Some("Alphabet Inc."),
        "AMZN" => Some("Amazon.com, Inc."),
        "RELIANCE.NS" => Some("Reliance Industries Ltd."),
        "TCS.NS" => Some("Tata Consultancy Services"),
        "NVDA" => Some("NVIDIA Corporation"),
        _ => None,
    }
}

/// Case-insensitive substring filter over the symbol list.
pub fn find(query: &str) -> Vec<&'static str> {
    let needle = query.to_lowercase();
    SYMBOLS
        .iter()
        .copied()
        .filter(|symbol| symbol.to_lowercase().contains(&needle))
        .collect()
}
