//! Product catalogue entity and its validated value types.
//!
//! A [`ProductDraft`] is the caller-supplied part of a product. Constructing
//! one validates the name and price, so anything holding a draft may hand it
//! to storage without re-checking.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Maximum number of characters in a product name.
pub const PRODUCT_NAME_MAX: usize = 100;

/// Number of fractional digits kept for prices.
pub const PRICE_SCALE: u32 = 2;

/// Largest price representable by a `NUMERIC(18,2)` column.
pub const PRICE_MAX: Decimal =
    Decimal::from_parts(0xA763_FFFF, 0x0DE0_B6B3, 0, false, PRICE_SCALE);

/// Validation errors raised while building a [`ProductDraft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductValidationError {
    /// The name is empty once trimmed.
    EmptyName,
    /// The name exceeds [`PRODUCT_NAME_MAX`] characters.
    NameTooLong {
        /// Maximum permitted length in characters.
        max: usize,
    },
    /// The name contains a NUL character, which PostgreSQL text rejects.
    NameContainsNul,
    /// The price is below zero.
    NegativePrice,
    /// The price does not fit the storage precision.
    PriceTooLarge {
        /// Largest accepted price.
        max: Decimal,
    },
}

impl fmt::Display for ProductValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::NameTooLong { max } => write!(f, "name must be at most {max} characters"),
            Self::NameContainsNul => write!(f, "name must not contain NUL characters"),
            Self::NegativePrice => write!(f, "price must not be negative"),
            Self::PriceTooLarge { max } => write!(f, "price must be at most {max}"),
        }
    }
}

impl std::error::Error for ProductValidationError {}

/// Storage-assigned product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i32);

impl ProductId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for ProductId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product name: non-blank, at most [`PRODUCT_NAME_MAX`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductName(String);

impl ProductName {
    /// Validate and construct a name.
    ///
    /// # Examples
    /// ```
    /// use product_api::domain::{ProductName, ProductValidationError};
    ///
    /// assert!(ProductName::new("Widget").is_ok());
    /// assert_eq!(ProductName::new("  "), Err(ProductValidationError::EmptyName));
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, ProductValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProductValidationError::EmptyName);
        }
        if name.chars().count() > PRODUCT_NAME_MAX {
            return Err(ProductValidationError::NameTooLong {
                max: PRODUCT_NAME_MAX,
            });
        }
        if name.contains('\0') {
            return Err(ProductValidationError::NameContainsNul);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<ProductName> for String {
    fn from(value: ProductName) -> Self {
        value.0
    }
}

impl TryFrom<String> for ProductName {
    type Error = ProductValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Non-negative price held at two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductPrice(Decimal);

impl ProductPrice {
    /// Validate a price and round it to [`PRICE_SCALE`] places, midpoint away
    /// from zero.
    ///
    /// # Examples
    /// ```
    /// use std::str::FromStr;
    ///
    /// use product_api::domain::ProductPrice;
    /// use rust_decimal::Decimal;
    ///
    /// let price = ProductPrice::new(Decimal::from_str("9.995").unwrap()).unwrap();
    /// assert_eq!(price.amount(), Decimal::from_str("10.00").unwrap());
    /// ```
    pub fn new(amount: Decimal) -> Result<Self, ProductValidationError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(ProductValidationError::NegativePrice);
        }
        let rounded =
            amount.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
        if rounded > PRICE_MAX {
            return Err(ProductValidationError::PriceTooLarge { max: PRICE_MAX });
        }
        Ok(Self(rounded.abs()))
    }

    /// Decimal amount.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for ProductPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caller-supplied, validated product fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    /// Display name.
    pub name: ProductName,
    /// Free-form description.
    pub description: Option<String>,
    /// Unit price.
    pub price: ProductPrice,
}

impl ProductDraft {
    /// Validate raw fields into a draft.
    ///
    /// The name is checked before the price, so a request with both fields
    /// invalid reports the name.
    ///
    /// # Examples
    /// ```
    /// use product_api::domain::{ProductDraft, ProductValidationError};
    /// use rust_decimal::Decimal;
    ///
    /// let draft = ProductDraft::new("Widget", None, Decimal::new(999, 2)).unwrap();
    /// assert_eq!(draft.name.as_ref(), "Widget");
    ///
    /// let err = ProductDraft::new("Widget", None, Decimal::new(-1, 0)).unwrap_err();
    /// assert_eq!(err, ProductValidationError::NegativePrice);
    /// ```
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        price: Decimal,
    ) -> Result<Self, ProductValidationError> {
        Ok(Self {
            name: ProductName::new(name)?,
            description,
            price: ProductPrice::new(price)?,
        })
    }
}

/// Persisted product.
///
/// ## Invariants
/// - `id` and `created_at` never change after creation.
/// - `name` and `price` always satisfy [`ProductDraft`] validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: ProductName,
    description: Option<String>,
    price: ProductPrice,
    created_at: DateTime<Utc>,
    is_active: bool,
}

impl Product {
    /// Assemble a product from its stored parts.
    #[must_use]
    pub fn new(
        id: ProductId,
        draft: ProductDraft,
        created_at: DateTime<Utc>,
        is_active: bool,
    ) -> Self {
        let ProductDraft {
            name,
            description,
            price,
        } = draft;
        Self {
            id,
            name,
            description,
            price,
            created_at,
            is_active,
        }
    }

    /// Storage-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Unit price.
    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price.amount()
    }

    /// Creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether the product is marked active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Replace the mutable fields, keeping identity and creation time.
    #[must_use]
    pub fn with_draft(self, draft: ProductDraft) -> Self {
        Self::new(self.id, draft, self.created_at, self.is_active)
    }
}
