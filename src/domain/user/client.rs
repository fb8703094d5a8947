//! User sub-client.

use crate::client::RobinhoodClient;
use crate::endpoints::Endpoint;
use crate::error::SdkError;

pub struct User<'a> {
    pub(crate) client: &'a RobinhoodClient,
}

impl<'a> User<'a> {
    /// `GET /user/`: the basic user profile.
    pub async fn profile(&self) -> Result<serde_json::Value, SdkError> {
        self.client.fetch(Endpoint::User).await
    }

    /// `GET /user/investment_profile/`
    pub async fn investment_profile(&self) -> Result<serde_json::Value, SdkError> {
        self.client.fetch(Endpoint::InvestmentProfile).await
    }

    pub async fn notifications(&self) -> Result<serde_json::Value, SdkError> {
        self.client.fetch(Endpoint::Notifications).await
    }

    pub async fn applications(&self) -> Result<serde_json::Value, SdkError> {
        self.client.fetch(Endpoint::Applications).await
    }
}
