//! The currency module holds the `Currency` identifier, used to tag monetary
//! values with their unit so mismatched units can never be combined silently.

use std::fmt;

/// An opaque, comparable currency identifier (generally an ISO 4217 code).
///
/// Two currencies are equal iff their codes are equal. The code is never
/// validated against a registry and never mutated after construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "with_serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Currency(String);

impl Currency {
    pub fn new<T: Into<String>>(code: T) -> Self {
        Self(code.into())
    }

    /// Return a string ref for this currency's code.
    pub fn code(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        let Currency(code) = currency;
        code
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_code() {
        assert_eq!(Currency::new("NPR"), Currency::from("NPR"));
        assert_eq!(Currency::from("USD".to_string()), Currency::new("USD"));
        assert_ne!(Currency::new("NPR"), Currency::new("USD"));
    }

    #[test]
    fn code_round_trips() {
        let currency = Currency::new("EUR");
        assert_eq!(currency.code(), "EUR");
        assert_eq!(format!("{}", currency), "EUR");
        let back: String = currency.into();
        assert_eq!(back, "EUR");
    }
}
