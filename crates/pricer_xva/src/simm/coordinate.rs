//! Product classes, risk classes and sensitivity coordinates.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Unknown product or risk class name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassificationError {
    /// Unknown product class name.
    #[error("Unknown product class: {0}")]
    UnknownProductClass(String),

    /// Unknown risk class name.
    #[error("Unknown risk class: {0}")]
    UnknownRiskClass(String),
}

/// SIMM product class.
///
/// # Examples
///
/// ```
/// use pricer_xva::simm::ProductClass;
///
/// let class: ProductClass = "RatesFX".parse().unwrap();
/// assert_eq!(class, ProductClass::RatesFx);
/// assert_eq!(class.name(), "RatesFX");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProductClass {
    /// Interest rate and FX products.
    RatesFx,
    /// Credit products.
    Credit,
    /// Equity products.
    Equity,
    /// Commodity products.
    Commodity,
}

impl ProductClass {
    /// Returns the standard name for this product class.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            ProductClass::RatesFx => "RatesFX",
            ProductClass::Credit => "Credit",
            ProductClass::Equity => "Equity",
            ProductClass::Commodity => "Commodity",
        }
    }
}

impl fmt::Display for ProductClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ProductClass {
    type Err = ClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "RATESFX" | "RATES_FX" => Ok(ProductClass::RatesFx),
            "CREDIT" => Ok(ProductClass::Credit),
            "EQUITY" => Ok(ProductClass::Equity),
            "COMMODITY" => Ok(ProductClass::Commodity),
            _ => Err(ClassificationError::UnknownProductClass(s.to_string())),
        }
    }
}

/// SIMM risk class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiskClass {
    /// Interest rate risk.
    InterestRate,
    /// Credit risk, qualifying issuers.
    CreditQualifying,
    /// Credit risk, non-qualifying issuers.
    CreditNonQualifying,
    /// Equity risk.
    Equity,
    /// Commodity risk.
    Commodity,
    /// FX risk.
    Fx,
}

impl RiskClass {
    /// Returns the standard name for this risk class.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            RiskClass::InterestRate => "InterestRate",
            RiskClass::CreditQualifying => "CreditQ",
            RiskClass::CreditNonQualifying => "CreditNonQ",
            RiskClass::Equity => "Equity",
            RiskClass::Commodity => "Commodity",
            RiskClass::Fx => "FX",
        }
    }
}

impl fmt::Display for RiskClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for RiskClass {
    type Err = ClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INTERESTRATE" | "IR" => Ok(RiskClass::InterestRate),
            "CREDITQ" | "CREDITQUALIFYING" => Ok(RiskClass::CreditQualifying),
            "CREDITNONQ" | "CREDITNONQUALIFYING" => Ok(RiskClass::CreditNonQualifying),
            "EQUITY" => Ok(RiskClass::Equity),
            "COMMODITY" => Ok(RiskClass::Commodity),
            "FX" => Ok(RiskClass::Fx),
            _ => Err(ClassificationError::UnknownRiskClass(s.to_string())),
        }
    }
}

/// Risk factor qualifier (currency, issuer, index name, ...).
///
/// # Examples
///
/// ```
/// use pricer_xva::simm::Qualifier;
///
/// let qualifier = Qualifier::new("EUR");
/// assert_eq!(qualifier.as_str(), "EUR");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Qualifier(String);

impl Qualifier {
    /// Creates a new qualifier.
    #[inline]
    pub fn new(qualifier: impl Into<String>) -> Self {
        Self(qualifier.into())
    }

    /// Returns the qualifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Qualifier {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A single sensitivity coordinate.
///
/// # Examples
///
/// ```
/// use pricer_xva::simm::{ProductClass, RiskClass, SimmCoordinate};
///
/// let key = SimmCoordinate::new(ProductClass::RatesFx, RiskClass::InterestRate, "EUR")
///     .with_bucket("1")
///     .with_labels("5y", "Libor6m");
///
/// assert_eq!(key.qualifier().as_str(), "EUR");
/// assert_eq!(key.label1(), Some("5y"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimmCoordinate {
    product_class: ProductClass,
    risk_class: RiskClass,
    qualifier: Qualifier,
    bucket: Option<String>,
    label1: Option<String>,
    label2: Option<String>,
}

impl SimmCoordinate {
    /// Creates a coordinate without bucket or labels.
    pub fn new(
        product_class: ProductClass,
        risk_class: RiskClass,
        qualifier: impl Into<Qualifier>,
    ) -> Self {
        Self {
            product_class,
            risk_class,
            qualifier: qualifier.into(),
            bucket: None,
            label1: None,
            label2: None,
        }
    }

    /// Sets the bucket.
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Sets the two labels (typically tenor and sub-curve).
    pub fn with_labels(mut self, label1: impl Into<String>, label2: impl Into<String>) -> Self {
        self.label1 = Some(label1.into());
        self.label2 = Some(label2.into());
        self
    }

    /// Product class.
    #[inline]
    pub fn product_class(&self) -> ProductClass {
        self.product_class
    }

    /// Risk class.
    #[inline]
    pub fn risk_class(&self) -> RiskClass {
        self.risk_class
    }

    /// Risk factor qualifier.
    #[inline]
    pub fn qualifier(&self) -> &Qualifier {
        &self.qualifier
    }

    /// Bucket, if assigned.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// First label, if assigned.
    pub fn label1(&self) -> Option<&str> {
        self.label1.as_deref()
    }

    /// Second label, if assigned.
    pub fn label2(&self) -> Option<&str> {
        self.label2.as_deref()
    }
}
