//! Status and method enums with integer wire codes.
//!
//! The backend encodes these enums as small integers, so serde goes
//! through `u8` rather than strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when an integer code does not map to a known variant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind} code: {code}")]
pub struct UnknownCode {
    /// Human-readable name of the enum.
    pub kind: &'static str,
    /// The unmapped integer code.
    pub code: u8,
}

/// Order fulfillment status, assigned server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(into = "u8", try_from = "u8")]
pub enum OrderStatus {
    #[default]
    Pending,
    Accepted,
    OnTheWay,
    Closed,
}

impl OrderStatus {
    /// Display text matching the backend's status labels.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::OnTheWay => "On the way",
            Self::Closed => "Closed",
        }
    }
}

impl From<OrderStatus> for u8 {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => 0,
            OrderStatus::Accepted => 1,
            OrderStatus::OnTheWay => 2,
            OrderStatus::Closed => 3,
        }
    }
}

impl TryFrom<u8> for OrderStatus {
    type Error = UnknownCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Pending),
            1 => Ok(Self::Accepted),
            2 => Ok(Self::OnTheWay),
            3 => Ok(Self::Closed),
            _ => Err(UnknownCode {
                kind: "order status",
                code,
            }),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum PaymentMethod {
    /// Cash on delivery (wire code 0).
    Cash,
    /// Card payment (wire code 1).
    Card,
}

impl From<PaymentMethod> for u8 {
    fn from(method: PaymentMethod) -> Self {
        match method {
            PaymentMethod::Cash => 0,
            PaymentMethod::Card => 1,
        }
    }
}

impl TryFrom<u8> for PaymentMethod {
    type Error = UnknownCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Cash),
            1 => Ok(Self::Card),
            _ => Err(UnknownCode {
                kind: "payment method",
                code,
            }),
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cash => write!(f, "cash"),
            Self::Card => write!(f, "card"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(Self::Cash),
            "card" => Ok(Self::Card),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_wire_codes() {
        let json = serde_json::to_string(&OrderStatus::OnTheWay).unwrap();
        assert_eq!(json, "2");
        let back: OrderStatus = serde_json::from_str("3").unwrap();
        assert_eq!(back, OrderStatus::Closed);
    }

    #[test]
    fn test_order_status_unknown_code() {
        let result: Result<OrderStatus, _> = serde_json::from_str("9");
        assert!(result.is_err());
    }

    #[test]
    fn test_order_status_labels() {
        assert_eq!(OrderStatus::OnTheWay.to_string(), "On the way");
        assert_eq!(OrderStatus::Pending.to_string(), "Pending");
    }

    #[test]
    fn test_payment_method_wire_codes() {
        assert_eq!(serde_json::to_string(&PaymentMethod::Cash).unwrap(), "0");
        assert_eq!(serde_json::to_string(&PaymentMethod::Card).unwrap(), "1");
    }

    #[test]
    fn test_payment_method_from_str() {
        assert_eq!("card".parse::<PaymentMethod>().unwrap(), PaymentMethod::Card);
        assert!("check".parse::<PaymentMethod>().is_err());
    }
}
