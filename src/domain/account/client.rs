//! Accounts sub-client: account listing, dividends, ACH, documents.

use crate::client::RobinhoodClient;
use crate::endpoints::Endpoint;
use crate::error::SdkError;

pub struct Accounts<'a> {
    pub(crate) client: &'a RobinhoodClient,
}

impl<'a> Accounts<'a> {
    /// `GET /accounts/`: every brokerage account of the logged-in user.
    pub async fn list(&self) -> Result<serde_json::Value, SdkError> {
        self.client.fetch(Endpoint::Accounts).await
    }

    /// `GET /dividends/`
    pub async fn dividends(&self) -> Result<serde_json::Value, SdkError> {
        self.client.fetch(Endpoint::Dividends).await
    }

    /// `GET /ach/relationships/`: linked bank accounts.
    pub async fn ach_relationships(&self) -> Result<serde_json::Value, SdkError> {
        self.client.fetch(Endpoint::AchRelationships).await
    }

    /// `GET /ach/transfers/`
    pub async fn ach_transfers(&self) -> Result<serde_json::Value, SdkError> {
        self.client.fetch(Endpoint::AchTransfers).await
    }

    /// `GET /documents/`: statements, confirms and tax documents.
    pub async fn documents(&self) -> Result<serde_json::Value, SdkError> {
        self.client.fetch(Endpoint::Edocuments).await
    }
}
