//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs carry these wrappers instead of raw primitives so that
//! identifiers, text values and numeric constraints are enforced at the
//! boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use validator::ValidateUrl;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TypeConstraintError {
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// A slug contained characters outside `[a-z0-9-]`.
    #[error("{0} must contain only lowercase letters, digits and hyphens")]
    InvalidSlug(&'static str),
    /// URL validation failed.
    #[error("{0} must be a valid URL")]
    InvalidUrl(&'static str),
    /// A numeric value required to be positive was zero/negative or invalid.
    #[error("{0} must be greater than zero")]
    NonPositiveNumber(&'static str),
    /// A numeric value required to be non-negative was negative.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// Rating must be in the inclusive range [0.0, 5.0].
    #[error("rating must be between 0.0 and 5.0")]
    InvalidRating,
    /// Discount percentage must be at most 100.
    #[error("discount must be between 0 and 100 percent")]
    InvalidDiscount,
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

macro_rules! string_newtype_common {
    ($name:ident) => {
        impl $name {
            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

/// Macro to generate newtypes for trimmed, non-empty strings.
macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }
        }

        string_newtype_common!($name);
    };
}

/// Macro to generate newtypes for URL-safe slugs.
macro_rules! slug_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed slug made of lowercase letters, digits and hyphens.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = trim_and_require_non_empty(value, $field)?;
                if trimmed
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
                {
                    Ok(Self(trimmed))
                } else {
                    Err(TypeConstraintError::InvalidSlug($field))
                }
            }
        }

        string_newtype_common!($name);
    };
}

/// Macro to generate newtypes for validated URL strings.
macro_rules! url_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed URL and validates its format.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = trim_and_require_non_empty(value, $field)?;
                if !trimmed.as_str().validate_url() {
                    return Err(TypeConstraintError::InvalidUrl($field));
                }
                Ok(Self(trimmed))
            }
        }

        string_newtype_common!($name);
    };
}

/// Macro to generate newtypes for strictly positive `f64` values.
macro_rules! positive_f64_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
        #[serde(transparent)]
        pub struct $name(f64);

        impl $name {
            /// Constructs a strictly positive, finite numeric value.
            pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
                if value.is_finite() && value > 0.0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveNumber($field))
                }
            }

            /// Returns the raw `f64` value.
            pub const fn get(self) -> f64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<f64> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: f64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for f64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<f64> for $name {
            fn eq(&self, other: &f64) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for f64 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

/// Macro to generate newtypes for non-negative `i32` values.
macro_rules! non_negative_i32_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Constructs a value that must be zero or greater.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value >= 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NegativeNumber($field))
                }
            }

            /// Returns the raw `i32` value.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for i32 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

non_empty_string_newtype!(
    ProductId,
    "Unique product identifier as used in seed data and URLs.",
    "product id"
);
non_empty_string_newtype!(
    CategoryId,
    "Unique category identifier.",
    "category id"
);
non_empty_string_newtype!(
    ProductName,
    "Product display name enforcing non-empty values.",
    "product name"
);
non_empty_string_newtype!(
    CategoryName,
    "Category label enforcing non-empty values.",
    "category name"
);
non_empty_string_newtype!(
    ProductDescription,
    "Product long description enforcing non-empty values.",
    "description"
);
non_empty_string_newtype!(
    TagName,
    "Free-text product tag enforcing non-empty values.",
    "tag"
);

slug_newtype!(
    ProductSlug,
    "URL-safe product slug, unique within the catalog.",
    "product slug"
);
slug_newtype!(
    CategorySlug,
    "URL-safe category slug, unique within the catalog.",
    "category slug"
);

url_string_newtype!(ImageUrl, "Product image URL.", "image url");

positive_f64_newtype!(
    ProductPrice,
    "Strictly positive price value in standard currency units.",
    "price"
);

non_negative_i32_newtype!(
    ReviewCount,
    "Number of reviews submitted for a product.",
    "review count"
);
non_negative_i32_newtype!(
    StockQuantity,
    "Units of a product currently held in stock.",
    "stock quantity"
);

/// Average review rating in the inclusive range [0.0, 5.0].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct Rating(f32);

impl Rating {
    /// Constructs a validated rating.
    pub fn new(value: f32) -> Result<Self, TypeConstraintError> {
        if value.is_finite() && (0.0..=5.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidRating)
        }
    }

    /// Returns the raw `f32` value.
    pub const fn get(self) -> f32 {
        self.0
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f32> for Rating {
    type Error = TypeConstraintError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for f32 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

impl PartialEq<f32> for Rating {
    fn eq(&self, other: &f32) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Rating> for f32 {
    fn eq(&self, other: &Rating) -> bool {
        *self == other.0
    }
}

/// Whole-number discount percentage in the inclusive range [0, 100].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct DiscountPercent(u8);

impl DiscountPercent {
    /// Constructs a validated discount percentage.
    pub fn new(value: u8) -> Result<Self, TypeConstraintError> {
        if value <= 100 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidDiscount)
        }
    }

    /// Returns the raw percentage.
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Display for DiscountPercent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for DiscountPercent {
    type Error = TypeConstraintError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DiscountPercent> for u8 {
    fn from(value: DiscountPercent) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_non_empty_strings() {
        let value = ProductName::new("  Roasted Makhana  ").unwrap();
        assert_eq!(value.as_str(), "Roasted Makhana");
    }

    #[test]
    fn rejects_empty_ids() {
        let err = ProductId::new("   ").unwrap_err();
        assert_eq!(err, TypeConstraintError::EmptyString("product id"));
    }

    #[test]
    fn validates_slugs() {
        assert!(ProductSlug::new("peri-peri-makhana-100g").is_ok());
        let err = ProductSlug::new("Peri Peri").unwrap_err();
        assert_eq!(err, TypeConstraintError::InvalidSlug("product slug"));
    }

    #[test]
    fn validates_urls() {
        assert!(ImageUrl::new("https://cdn.namamy.com/p/peri-peri-1.jpg").is_ok());
        let err = ImageUrl::new("not-a-url").unwrap_err();
        assert_eq!(err, TypeConstraintError::InvalidUrl("image url"));
    }

    #[test]
    fn price_rejects_zero_and_negative() {
        assert_eq!(
            ProductPrice::new(0.0).unwrap_err(),
            TypeConstraintError::NonPositiveNumber("price")
        );
        assert_eq!(
            ProductPrice::new(-1.0).unwrap_err(),
            TypeConstraintError::NonPositiveNumber("price")
        );
        assert_eq!(ProductPrice::new(249.0).unwrap().get(), 249.0);
    }

    #[test]
    fn rating_is_bounded() {
        assert!(Rating::new(0.0).is_ok());
        assert!(Rating::new(5.0).is_ok());
        assert_eq!(Rating::new(5.1).unwrap_err(), TypeConstraintError::InvalidRating);
        assert_eq!(Rating::new(-0.1).unwrap_err(), TypeConstraintError::InvalidRating);
    }

    #[test]
    fn discount_is_bounded() {
        assert!(DiscountPercent::new(100).is_ok());
        assert_eq!(
            DiscountPercent::new(101).unwrap_err(),
            TypeConstraintError::InvalidDiscount
        );
    }

    #[test]
    fn stock_quantity_rejects_negative_values() {
        assert_eq!(
            StockQuantity::new(-1).unwrap_err(),
            TypeConstraintError::NegativeNumber("stock quantity")
        );
    }
}
