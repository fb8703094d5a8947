//! Market sub-client: instruments, quotes, markets, watchlists.

use crate::client::RobinhoodClient;
use crate::domain::market::{instruments_url, quotes_url};
use crate::endpoints::Endpoint;
use crate::error::SdkError;
use crate::shared::Symbol;

/// Sub-client for market data.
pub struct Market<'a> {
    pub(crate) client: &'a RobinhoodClient,
}

impl<'a> Market<'a> {
    /// Search instruments by ticker. The symbol is uppercased before sending.
    pub async fn instruments(&self, symbol: impl Into<Symbol>) -> Result<serde_json::Value, SdkError> {
        let endpoint = self.client.endpoints.resolve(Endpoint::Instruments);
        let url = instruments_url(&endpoint, &symbol.into())?;
        self.client.get_authorized(&url).await
    }

    /// Quote data for one symbol or a comma-separated list.
    pub async fn quote_data(&self, symbols: &str) -> Result<serde_json::Value, SdkError> {
        let endpoint = self.client.endpoints.resolve(Endpoint::Quotes);
        let url = quotes_url(&endpoint, symbols)?;
        self.client.get_authorized(&url).await
    }

    /// `GET /markets/`: exchanges and their trading hours.
    pub async fn markets(&self) -> Result<serde_json::Value, SdkError> {
        self.client.fetch(Endpoint::Markets).await
    }

    pub async fn watchlists(&self) -> Result<serde_json::Value, SdkError> {
        self.client.fetch(Endpoint::Watchlists).await
    }
}
