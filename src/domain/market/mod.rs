//! Market domain: instrument search, quotes, exchanges, watchlists.
//!
//! Instrument search is case-insensitive: the symbol is uppercased on the
//! client before it is sent. Quote lookups send the symbols exactly as given.

#[cfg(feature = "http")]
pub mod client;

use crate::error::SdkError;
use crate::shared::Symbol;

/// URL for an instrument search: `<instruments>?query=<SYMBOL>`.
pub fn instruments_url(instruments_endpoint: &str, symbol: &Symbol) -> Result<String, SdkError> {
    if symbol.is_blank() {
        return Err(SdkError::Validation(
            "instrument search needs a symbol".to_string(),
        ));
    }
    Ok(format!(
        "{}?query={}",
        instruments_endpoint,
        urlencoding::encode(symbol.to_uppercase().as_str())
    ))
}

/// URL for a quote lookup: `<quotes>?symbols=<symbols>`.
///
/// `symbols` may be a single ticker or a comma-separated list.
pub fn quotes_url(quotes_endpoint: &str, symbols: &str) -> Result<String, SdkError> {
    if symbols.trim().is_empty() {
        return Err(SdkError::Validation(
            "quote lookup needs at least one symbol".to_string(),
        ));
    }
    Ok(format!(
        "{}?symbols={}",
        quotes_endpoint,
        urlencoding::encode(symbols)
    ))
}
