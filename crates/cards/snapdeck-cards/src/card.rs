//! Card record as served by the `/cards` endpoint.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CardsError;
use crate::format::{format_amount, mask_card_number};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CurrencyType {
    Gbp,
    Usd,
    Inr,
    Eur,
}

impl CurrencyType {
    pub fn code(self) -> &'static str {
        match self {
            CurrencyType::Gbp => "gbp",
            CurrencyType::Usd => "usd",
            CurrencyType::Inr => "inr",
            CurrencyType::Eur => "eur",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            CurrencyType::Gbp => "£",
            CurrencyType::Usd => "$",
            CurrencyType::Inr => "₹",
            CurrencyType::Eur => "€",
        }
    }
}

impl FromStr for CurrencyType {
    type Err = CardsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gbp" => Ok(CurrencyType::Gbp),
            "usd" => Ok(CurrencyType::Usd),
            "inr" => Ok(CurrencyType::Inr),
            "eur" => Ok(CurrencyType::Eur),
            other => Err(CardsError::UnknownCurrency(other.to_string())),
        }
    }
}

impl fmt::Display for CurrencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for CurrencyType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for CurrencyType {
    fn deserialize<D>(deserializer: D) -> Result<CurrencyType, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Card number digits. The endpoint sends either a string or a bare number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CardNumber(String);

impl CardNumber {
    pub fn new(digits: impl Into<String>) -> Self {
        Self(digits.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything but the last four characters hidden behind `#`.
    pub fn masked(&self) -> String {
        mask_card_number(&self.0)
    }
}

impl<'de> Deserialize<'de> for CardNumber {
    fn deserialize<D>(deserializer: D) -> Result<CardNumber, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => CardNumber(s),
            Raw::Number(n) => CardNumber(n.to_string()),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub id: String,
    pub name: String,
    /// Gradient of the card face.
    pub colors: Vec<String>,
    /// Payment network (`visa`, `master`, ...).
    pub card_type: String,
    pub currency_type: CurrencyType,
    pub total_balance: f64,
    pub card_number: CardNumber,
    #[serde(default)]
    pub weekly_spending: f64,
    #[serde(default)]
    pub total_income: f64,
    #[serde(default)]
    pub friends: Vec<String>,
    /// Gradient of the detail sheet.
    #[serde(default)]
    pub accent_colors: Vec<String>,
}

impl CardRecord {
    /// Balance line of the card face, e.g. `£ 12,850`.
    pub fn balance_label(&self) -> String {
        format!(
            "{} {}",
            self.currency_type.symbol(),
            format_amount(self.total_balance)
        )
    }

    pub fn weekly_spending_label(&self) -> String {
        format!(
            "{} {}",
            self.currency_type.symbol(),
            format_amount(self.weekly_spending)
        )
    }
}
