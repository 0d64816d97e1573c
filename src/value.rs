//! Typed entity values.
//!
//! Every extracted span is normalized into a [`Value`]. Spans that cannot be
//! interpreted (an impossible date, an unknown status word) keep their raw text
//! as [`Value::Text`] instead of failing.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Currency inferred from a money span's unit or symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Try,
    Eur,
    Usd,
    Gbp,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Try => "TRY",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Money {
    pub amount: f64,
    pub currency: Currency,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    pub first_name: String,
    /// Every token after the first, joined by single spaces.
    pub last_name: String,
    pub full_name: String,
}

/// Canonical record status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Inactive,
    Pending,
    Completed,
    Cancelled,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
            Status::Pending => "pending",
            Status::Completed => "completed",
            Status::Cancelled => "cancelled",
        }
    }

    /// Map a Turkish or English status word (any case) to its canonical form.
    pub fn from_word(word: &str) -> Option<Status> {
        match word.to_lowercase().as_str() {
            "aktif" | "active" => Some(Status::Active),
            "pasif" | "inactive" => Some(Status::Inactive),
            "beklemede" | "pending" => Some(Status::Pending),
            "tamamlandı" | "completed" => Some(Status::Completed),
            "iptal" | "cancelled" => Some(Status::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized value of an [`Entity`](crate::Entity).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// A single calendar day ("bugün", "15.03.2024").
    Date(NaiveDate),
    /// An inclusive day range ("son 7 gün", "geçen ay").
    DateRange { start: NaiveDate, end: NaiveDate },
    Money(Money),
    /// Phone number in `+90XXXXXXXXXX` form when the digits allow it.
    Phone(String),
    Person(PersonName),
    Number(i64),
    Status(Status),
    /// Raw text passed through unchanged.
    Text(String),
}

impl Value {
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_money(&self) -> Option<Money> {
        match self {
            Value::Money(m) => Some(*m),
            _ => None,
        }
    }

    pub fn as_person(&self) -> Option<&PersonName> {
        match self {
            Value::Person(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Phone(s) | Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::DateRange { start, end } => write!(f, "{}..{}", start.format("%Y-%m-%d"), end.format("%Y-%m-%d")),
            Value::Money(m) => {
                if m.amount.fract() == 0.0 {
                    write!(f, "{} {}", m.amount as i64, m.currency)
                } else {
                    write!(f, "{} {}", m.amount, m.currency)
                }
            }
            Value::Phone(s) | Value::Text(s) => f.write_str(s),
            Value::Person(p) => write!(f, "{} / {}", p.first_name, p.last_name),
            Value::Number(n) => write!(f, "{n}"),
            Value::Status(s) => write!(f, "{s}"),
        }
    }
}
