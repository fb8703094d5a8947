//! Wire type for the order placement form.

use super::{OrderType, TimeInForce, Trigger};
use crate::shared::{Side, Symbol};
use rust_decimal::Decimal;
use serde::Serialize;

/// Form body of `POST /orders/`. Field order matches the encoded body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    pub instrument: String,
    pub price: Decimal,
    pub quantity: Decimal,
    pub side: Side,
    pub symbol: Symbol,
    pub time_in_force: TimeInForce,
    pub trigger: Trigger,
    #[serde(rename = "type")]
    pub order_type: OrderType,
}

impl OrderForm {
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }
}
