//! Log in with credentials from the environment (or a `.env` file), then print
//! the account list, a quote and the recent order history.
//!
//! ```bash
//! ROBINHOOD_USERNAME=... ROBINHOOD_PASSWORD=... cargo run --example account_summary -- AAPL
//! ```

use robinhood_sdk::prelude::*;

#[tokio::main]
async fn main() -> Result<(), SdkError> {
    dotenvy::dotenv().ok();

    let symbol = std::env::args().nth(1).unwrap_or_else(|| "AAPL".to_string());

    let client = RobinhoodClient::builder()
        .credentials(Credentials::from_env()?)
        .connect()
        .await?;

    println!("Logged in, account: {:?}", client.account().await);

    let accounts = client.accounts().list().await?;
    println!("Accounts:\n{}", serde_json::to_string_pretty(&accounts)?);

    let quote = client.market().quote_data(&symbol).await?;
    println!("Quote for {}:\n{}", symbol, serde_json::to_string_pretty(&quote)?);

    let orders = client.orders().list().await?;
    println!("Orders:\n{}", serde_json::to_string_pretty(&orders)?);

    Ok(())
}
