//! Item — a named, priced record with a garment-style size.
//!
//! Items are only ever built from validated payload contracts:
//! [`NewItem`] for creation (every field required) and [`ItemChanges`] for
//! partial updates (every field optional, but checked when present).

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::{ShelfError, ValidationError};
use crate::id::ItemId;

/// Size scale of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    S,
    M,
    L,
}

impl Size {
    /// Every accepted size, smallest first.
    pub const ALL: [Size; 3] = [Size::S, Size::M, Size::L];

    /// The wire representation (`"s"`, `"m"` or `"l"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::S => "s",
            Self::M => "m",
            Self::L => "l",
        }
    }
}

/// Returned when a string is not one of the accepted sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSize;

impl FromStr for Size {
    type Err = UnknownSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or(UnknownSize)
    }
}

/// A persisted record in the collection.
///
/// `price` keeps the number exactly as the client sent it, so `10` is stored
/// and echoed as `10`, not `10.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: Number,
    pub size: Size,
}

impl Item {
    /// Build a new item with a freshly generated id.
    #[must_use]
    pub fn create(new: NewItem) -> Self {
        Self {
            id: ItemId::generate(),
            name: new.name,
            price: new.price,
            size: new.size,
        }
    }

    /// Overwrite the fields present in `changes`, keeping the others.
    pub fn apply(&mut self, changes: ItemChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(size) = changes.size {
            self.size = size;
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), ShelfError> {
        if self.name.is_empty() {
            return Err(ValidationError::InvalidName.into());
        }
        Ok(())
    }
}

/// Creation contract: every field is required.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub price: Number,
    pub size: Size,
}

impl TryFrom<Option<&Value>> for NewItem {
    type Error = ValidationError;

    /// Validate a raw JSON payload; `None` stands for an empty body.
    fn try_from(payload: Option<&Value>) -> Result<Self, Self::Error> {
        let fields = as_object(payload)?;

        let name = fields
            .get("name")
            .and_then(non_empty_string)
            .ok_or(ValidationError::NameRequired)?;
        let price = fields
            .get("price")
            .and_then(number)
            .ok_or(ValidationError::PriceRequired)?;
        let size = fields
            .get("size")
            .and_then(parse_size)
            .ok_or(ValidationError::SizeRequired)?;

        Ok(Self { name, price, size })
    }
}

/// Update contract: absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub price: Option<Number>,
    pub size: Option<Size>,
}

impl TryFrom<Option<&Value>> for ItemChanges {
    type Error = ValidationError;

    /// Validate a raw JSON payload; `None` stands for an empty body.
    fn try_from(payload: Option<&Value>) -> Result<Self, Self::Error> {
        let fields = as_object(payload)?;

        let name = fields
            .get("name")
            .map(|value| non_empty_string(value).ok_or(ValidationError::InvalidName))
            .transpose()?;
        let price = fields
            .get("price")
            .map(|value| number(value).ok_or(ValidationError::InvalidPrice))
            .transpose()?;
        let size = fields
            .get("size")
            .map(|value| parse_size(value).ok_or(ValidationError::InvalidSize))
            .transpose()?;

        Ok(Self { name, price, size })
    }
}

fn as_object(payload: Option<&Value>) -> Result<&Map<String, Value>, ValidationError> {
    payload
        .and_then(Value::as_object)
        .ok_or(ValidationError::NotAnObject)
}

fn non_empty_string(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

fn number(value: &Value) -> Option<Number> {
    value.as_number().cloned()
}

fn parse_size(value: &Value) -> Option<Size> {
    value.as_str().and_then(|s| s.parse().ok())
}
