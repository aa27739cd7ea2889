//! Products Data

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::DeserializeOwned};
use serde_json::Value;

use crate::domain::products::records::ProductUuid;

/// A payload field as submitted by a client.
///
/// Unlike `Option<T>`, this keeps "sent, but with the wrong JSON type" apart from
/// "not sent", so validation can report the two differently.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    /// Not sent, or sent as `null`.
    Absent,
    /// Sent with the expected type.
    Present(T),
    /// Sent with some other JSON type.
    Mistyped,
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Present(value)
    }
}

impl<'de, T> Deserialize<'de> for Field<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        if value.is_null() {
            return Ok(Self::Absent);
        }

        Ok(serde_json::from_value(value).map_or(Self::Mistyped, Self::Present))
    }
}

/// Writes the value when present and `null` otherwise.
impl<T> Serialize for Field<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent | Self::Mistyped => serializer.serialize_none(),
        }
    }
}

/// Candidate product payload for create and update.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: Field<String>,
    pub description: Field<String>,
    pub price: Field<f64>,
    pub category: Field<String>,
    pub in_stock: Field<bool>,
}

/// A payload that has passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: Option<bool>,
}

impl ProductDraft {
    /// Turn the draft into an insert, defaulting `in_stock` to `true`.
    #[must_use]
    pub fn into_new_product(self, uuid: ProductUuid) -> NewProduct {
        NewProduct {
            uuid,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            in_stock: self.in_stock.unwrap_or(true),
        }
    }
}

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

/// Product Update Data
///
/// `in_stock` of `None` keeps the stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: Option<bool>,
}

impl From<ProductDraft> for ProductUpdate {
    fn from(draft: ProductDraft) -> Self {
        Self {
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            in_stock: draft.in_stock,
        }
    }
}
