// storefront/src/models/ids.rs

//! Identifier types shared by the catalog, cart and order models.
//!
//! Clients send product ids both as JSON numbers and as numeric strings, and
//! path segments always arrive as text. Everything is normalized to
//! [`ProductId`] at the boundary so lookups never compare mismatched forms.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(u32);

impl ProductId {
  pub const fn new(raw: u32) -> Self {
    Self(raw)
  }

  pub const fn get(self) -> u32 {
    self.0
  }
}

impl From<u32> for ProductId {
  fn from(raw: u32) -> Self {
    Self(raw)
  }
}

impl fmt::Display for ProductId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid product id '{0}'")]
pub struct ParseProductIdError(pub String);

impl FromStr for ProductId {
  type Err = ParseProductIdError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.trim()
      .parse::<u32>()
      .map(ProductId)
      .map_err(|_| ParseProductIdError(s.to_string()))
  }
}

impl Serialize for ProductId {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u32(self.0)
  }
}

struct ProductIdVisitor;

impl<'de> Visitor<'de> for ProductIdVisitor {
  type Value = ProductId;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("a non-negative integer product id or a string containing one")
  }

  fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
    u32::try_from(v)
      .map(ProductId)
      .map_err(|_| E::custom(format!("product id {} is out of range", v)))
  }

  fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
    u32::try_from(v)
      .map(ProductId)
      .map_err(|_| E::custom(format!("product id {} is out of range", v)))
  }

  fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
    if v.fract() == 0.0 && v >= 0.0 && v <= f64::from(u32::MAX) {
      Ok(ProductId(v as u32))
    } else {
      Err(E::custom(format!("product id {} is not a whole number", v)))
    }
  }

  fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
    v.parse::<ProductId>().map_err(E::custom)
  }
}

impl<'de> Deserialize<'de> for ProductId {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_any(ProductIdVisitor)
  }
}

/// Accepts a user id given either as a string or as a JSON number, keeping
/// carts and orders keyed by one textual form.
pub fn deserialize_optional_user_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum RawUserId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
  }

  Ok(Option::<RawUserId>::deserialize(deserializer)?.map(|raw| match raw {
    RawUserId::Text(s) => s,
    RawUserId::Unsigned(n) => n.to_string(),
    RawUserId::Signed(n) => n.to_string(),
  }))
}
