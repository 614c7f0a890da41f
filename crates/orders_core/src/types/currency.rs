//! Currency types for the generation universe.
//!
//! This module provides the fixed set of ISO 4217 currency codes the
//! generator draws from, with parsing and serialisation support.
//!
//! # Examples
//!
//! ```
//! use orders_core::types::currency::Currency;
//!
//! let eur = Currency::EUR;
//! assert_eq!(eur.code(), "EUR");
//!
//! let parsed: Currency = "sek".parse().unwrap();
//! assert_eq!(parsed, Currency::SEK);
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::CurrencyError;

/// ISO 4217 currency codes for the reference dataset universe.
///
/// The variants cover the eight currencies the reference dataset trades in.
/// The enum is deliberately closed: every lookup against the exchange-rate
/// table is total over this set, so record generation cannot fail on an
/// unknown currency.
///
/// # Examples
///
/// ```
/// use orders_core::types::currency::Currency;
///
/// // Get currency code
/// assert_eq!(Currency::USD.code(), "USD");
///
/// // Parse from string (case-insensitive)
/// let nok: Currency = "nok".parse().unwrap();
/// assert_eq!(nok, Currency::NOK);
///
/// // Iterate the whole universe
/// assert_eq!(Currency::ALL.len(), 8);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Currency {
    /// Euro
    EUR,

    /// United States Dollar
    USD,

    /// Swiss Franc
    CHF,

    /// British Pound Sterling
    GBP,

    /// Danish Krone
    DKK,

    /// Swedish Krona
    SEK,

    /// Norwegian Krone
    NOK,

    /// Japanese Yen
    JPY,
}

impl Currency {
    /// The complete currency universe, in reference-dataset order.
    pub const ALL: [Currency; 8] = [
        Currency::EUR,
        Currency::USD,
        Currency::CHF,
        Currency::GBP,
        Currency::DKK,
        Currency::SEK,
        Currency::NOK,
        Currency::JPY,
    ];

    /// Returns the ISO 4217 three-letter currency code.
    ///
    /// # Examples
    ///
    /// ```
    /// use orders_core::types::currency::Currency;
    ///
    /// assert_eq!(Currency::EUR.code(), "EUR");
    /// assert_eq!(Currency::JPY.code(), "JPY");
    /// ```
    pub fn code(&self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
            Currency::USD => "USD",
            Currency::CHF => "CHF",
            Currency::GBP => "GBP",
            Currency::DKK => "DKK",
            Currency::SEK => "SEK",
            Currency::NOK => "NOK",
            Currency::JPY => "JPY",
        }
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    /// Parses an ISO 4217 currency code (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use orders_core::types::currency::Currency;
    ///
    /// let usd: Currency = "USD".parse().unwrap();
    /// assert_eq!(usd, Currency::USD);
    ///
    /// // Unknown currency returns error
    /// let result: Result<Currency, _> = "XYZ".parse();
    /// assert!(result.is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        match s.to_uppercase().as_str() {
            "EUR" => Ok(Currency::EUR),
            "USD" => Ok(Currency::USD),
            "CHF" => Ok(Currency::CHF),
            "GBP" => Ok(Currency::GBP),
            "DKK" => Ok(Currency::DKK),
            "SEK" => Ok(Currency::SEK),
            "NOK" => Ok(Currency::NOK),
            "JPY" => Ok(Currency::JPY),
            _ => Err(CurrencyError::UnknownCurrency(s.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    /// Formats as ISO 4217 code.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code() {
        assert_eq!(Currency::EUR.code(), "EUR");
        assert_eq!(Currency::USD.code(), "USD");
        assert_eq!(Currency::CHF.code(), "CHF");
        assert_eq!(Currency::GBP.code(), "GBP");
        assert_eq!(Currency::DKK.code(), "DKK");
        assert_eq!(Currency::SEK.code(), "SEK");
        assert_eq!(Currency::NOK.code(), "NOK");
        assert_eq!(Currency::JPY.code(), "JPY");
    }

    #[test]
    fn test_currency_from_str_case_insensitive() {
        assert_eq!("eur".parse::<Currency>().unwrap(), Currency::EUR);
        assert_eq!("Usd".parse::<Currency>().unwrap(), Currency::USD);
        assert_eq!("dkK".parse::<Currency>().unwrap(), Currency::DKK);
    }

    #[test]
    fn test_currency_from_str_unknown() {
        let result = "XYZ".parse::<Currency>();
        match result {
            Err(CurrencyError::UnknownCurrency(code)) => assert_eq!(code, "XYZ"),
            other => panic!("Expected UnknownCurrency, got {:?}", other),
        }
    }

    #[test]
    fn test_currency_roundtrip() {
        for currency in Currency::ALL {
            let parsed: Currency = currency.code().parse().unwrap();
            assert_eq!(currency, parsed);
        }
    }

    #[test]
    fn test_currency_all_distinct() {
        use std::collections::HashSet;
        let set: HashSet<Currency> = Currency::ALL.into_iter().collect();
        assert_eq!(set.len(), Currency::ALL.len());
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(format!("{}", Currency::SEK), "SEK");
        assert_eq!(format!("{}", Currency::JPY), "JPY");
    }

    #[test]
    fn test_currency_serde_roundtrip() {
        for currency in Currency::ALL {
            let json = serde_json::to_string(&currency).unwrap();
            assert_eq!(json, format!("\"{}\"", currency.code()));
            let parsed: Currency = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, currency);
        }
    }
}
