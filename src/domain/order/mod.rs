//! Order domain: order options, defaults, and the order builder.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::error::SdkError;
use crate::shared::{Side, Symbol};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use wire::OrderForm;

// ─── TimeInForce ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeInForce {
    /// Good for day.
    #[default]
    Gfd,
    /// Good till cancelled.
    Gtc,
    /// Immediate or cancel.
    Ioc,
    /// Fill or kill.
    Fok,
    /// Market on open.
    Opg,
}

impl TimeInForce {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gfd => "gfd",
            Self::Gtc => "gtc",
            Self::Ioc => "ioc",
            Self::Fok => "fok",
            Self::Opg => "opg",
        }
    }
}

// ─── Trigger ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    #[default]
    Immediate,
    Stop,
}

impl Trigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::Stop => "stop",
        }
    }
}

// ─── OrderType ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    #[default]
    Market,
    Limit,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OrderType::Market => write!(f, "market"),
            OrderType::Limit => write!(f, "limit"),
        }
    }
}

// ─── InstrumentRef ───────────────────────────────────────────────────────────

/// The instrument an order trades: its API URL and ticker symbol.
///
/// Deserializes straight from an entry of the instruments search `results`
/// array; other fields of that entry are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentRef {
    pub url: String,
    pub symbol: Symbol,
}

impl InstrumentRef {
    pub fn new(url: impl Into<String>, symbol: impl Into<Symbol>) -> Self {
        Self {
            url: url.into(),
            symbol: symbol.into(),
        }
    }
}

// ─── OrderOptions ────────────────────────────────────────────────────────────

/// Caller-supplied order parameters. Unset overrides fall back to
/// `gfd` / `immediate` / `market`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderOptions {
    pub instrument: InstrumentRef,
    pub bid_price: Decimal,
    pub quantity: Decimal,
    pub time: Option<TimeInForce>,
    pub trigger: Option<Trigger>,
    pub order_type: Option<OrderType>,
}

impl OrderOptions {
    pub fn new(instrument: InstrumentRef, bid_price: Decimal, quantity: Decimal) -> Self {
        Self {
            instrument,
            bid_price,
            quantity,
            time: None,
            trigger: None,
            order_type: None,
        }
    }

    pub fn with_time_in_force(mut self, time: TimeInForce) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = Some(trigger);
        self
    }

    pub fn with_order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = Some(order_type);
        self
    }

    fn validate(&self) -> Result<(), SdkError> {
        if self.instrument.url.trim().is_empty() {
            return Err(SdkError::Validation("instrument url is required".to_string()));
        }
        if self.instrument.symbol.is_blank() {
            return Err(SdkError::Validation(
                "instrument symbol is required".to_string(),
            ));
        }
        if self.quantity <= Decimal::ZERO {
            return Err(SdkError::Validation(format!(
                "quantity must be positive, got {}",
                self.quantity
            )));
        }
        if self.bid_price.is_sign_negative() && !self.bid_price.is_zero() {
            return Err(SdkError::Validation(format!(
                "bid price must not be negative, got {}",
                self.bid_price
            )));
        }
        Ok(())
    }
}

/// Compose the order body for `side`, filling defaults for unset overrides.
///
/// The account is attached separately (see [`OrderForm::with_account`]) when
/// the order is sent.
pub fn build_order(options: &OrderOptions, side: Side) -> Result<OrderForm, SdkError> {
    options.validate()?;

    Ok(OrderForm {
        account: None,
        instrument: options.instrument.url.clone(),
        price: options.bid_price,
        quantity: options.quantity,
        side,
        symbol: options.instrument.symbol.clone(),
        time_in_force: options.time.unwrap_or_default(),
        trigger: options.trigger.unwrap_or_default(),
        order_type: options.order_type.unwrap_or_default(),
    })
}
