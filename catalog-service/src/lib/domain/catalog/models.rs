use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::errors::CatalogNameError;

/// Unique display name of a product or distributor.
///
/// Surrounding whitespace is trimmed; the result must be 1 to 128 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogName(String);

impl CatalogName {
    const MAX_LENGTH: usize = 128;

    pub fn new(name: String) -> Result<Self, CatalogNameError> {
        let trimmed = name.trim();
        let length = trimmed.chars().count();

        if length == 0 {
            Err(CatalogNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(CatalogNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CatalogName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub name: CatalogName,
    /// Price in minor currency units
    pub price: i64,
    pub quantity: i32,
    pub created_on: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distributor {
    pub id: i64,
    pub name: CatalogName,
    pub address: String,
    pub phone: String,
    pub created_on: DateTime<Utc>,
}

/// Command to add a product, with validated fields
#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    pub name: CatalogName,
    pub price: i64,
    pub quantity: i32,
}

impl CreateProductCommand {
    /// # Errors
    /// * `InvalidName` - Name is empty or too long
    /// * `NegativeValue` - Price or quantity is below zero
    pub fn new(name: String, price: i64, quantity: i32) -> Result<Self, CatalogError> {
        let name = CatalogName::new(name)?;

        if price < 0 {
            return Err(CatalogError::NegativeValue {
                field: "price",
                value: price,
            });
        }
        if quantity < 0 {
            return Err(CatalogError::NegativeValue {
                field: "quantity",
                value: i64::from(quantity),
            });
        }

        Ok(Self {
            name,
            price,
            quantity,
        })
    }
}

/// Command to add a distributor, with validated fields
#[derive(Debug, Clone)]
pub struct CreateDistributorCommand {
    pub name: CatalogName,
    pub address: String,
    pub phone: String,
}

impl CreateDistributorCommand {
    const MAX_ADDRESS_LENGTH: usize = 255;
    const MAX_PHONE_LENGTH: usize = 32;

    /// # Errors
    /// * `InvalidName` - Name is empty or too long
    /// * `FieldTooLong` - Address over 255 or phone over 32 characters
    pub fn new(name: String, address: String, phone: String) -> Result<Self, CatalogError> {
        Ok(Self {
            name: CatalogName::new(name)?,
            address: bounded("address", &address, Self::MAX_ADDRESS_LENGTH)?,
            phone: bounded("phone", &phone, Self::MAX_PHONE_LENGTH)?,
        })
    }
}

fn bounded(field: &'static str, value: &str, max: usize) -> Result<String, CatalogError> {
    let trimmed = value.trim();
    let actual = trimmed.chars().count();

    if actual > max {
        return Err(CatalogError::FieldTooLong { field, max, actual });
    }

    Ok(trimmed.to_string())
}
