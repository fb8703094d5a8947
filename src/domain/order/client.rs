//! Orders sub-client: order listing and placement.

use crate::client::RobinhoodClient;
use crate::domain::order::{build_order, OrderOptions};
use crate::endpoints::Endpoint;
use crate::error::SdkError;
use crate::shared::Side;

pub struct Orders<'a> {
    pub(crate) client: &'a RobinhoodClient,
}

impl<'a> Orders<'a> {
    /// `GET /orders/`: order history.
    pub async fn list(&self) -> Result<serde_json::Value, SdkError> {
        self.client.fetch(Endpoint::Orders).await
    }

    pub async fn place_buy_order(
        &self,
        options: &OrderOptions,
    ) -> Result<serde_json::Value, SdkError> {
        self.place(options, Side::Buy).await
    }

    pub async fn place_sell_order(
        &self,
        options: &OrderOptions,
    ) -> Result<serde_json::Value, SdkError> {
        self.place(options, Side::Sell).await
    }

    /// Build the form for `side`, stamp the session's account on it and POST it
    /// with the token issued alongside that account.
    async fn place(&self, options: &OrderOptions, side: Side) -> Result<serde_json::Value, SdkError> {
        let form = build_order(options, side)?;

        let (headers, account) = self.client.authorized_context().await?;
        let form = match account {
            Some(account) => form.with_account(account),
            None => {
                return Err(SdkError::Validation(
                    "session has no account identifier to place orders against".to_string(),
                ));
            }
        };

        tracing::debug!(
            %side,
            symbol = %form.symbol,
            quantity = %form.quantity,
            order_type = %form.order_type,
            "Placing order"
        );

        let url = self.client.endpoints.resolve(Endpoint::Orders);
        Ok(self.client.http.post_form(&url, &form, &headers).await?)
    }
}
