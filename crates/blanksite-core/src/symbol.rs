//! Turning free-form application names into identifiers

/// Identifier used when a name contains nothing identifier-legal
pub const FALLBACK_IDENTIFIER: &str = "BlankSite";

/// Letters of any script, ASCII decimal digits and underscore.
///
/// Other numeric characters (superscripts, fractions, circled numbers) are
/// not legal in C# identifiers and get dropped.
fn is_identifier_char(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit() || c == '_'
}

/// Convert a human-readable name into a namespace / package identifier.
///
/// Whitespace, punctuation and symbols are dropped, so `"My Cool App!"`
/// becomes `"MyCoolApp"`. A leading digit gets an `_` prefix, and a name
/// with no usable characters yields [`FALLBACK_IDENTIFIER`].
///
/// Already-legal identifiers come back unchanged, which also makes the
/// function idempotent.
pub fn symbolize(raw: &str) -> String {
    let mut symbol: String = raw.chars().filter(|c| is_identifier_char(*c)).collect();

    if symbol.is_empty() {
        return FALLBACK_IDENTIFIER.to_string();
    }

    if symbol.starts_with(|c: char| c.is_ascii_digit()) {
        symbol.insert(0, '_');
    }

    symbol
}
