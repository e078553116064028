//! Domain data structures for suppliers and the schools they publish menus for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Built-in menu suppliers supported by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suppliers {
    /// Skolmaten, the Swedish school lunch menu service.
    Skolmaten,
}

impl Suppliers {
    /// Human-friendly supplier name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Suppliers::Skolmaten => "Skolmaten",
        }
    }

    /// Metadata record for the supplier.
    #[must_use]
    pub fn meta(self) -> SupplierMeta {
        SupplierMeta {
            id: self.into(),
            name: self.display_name().to_owned(),
        }
    }
}

impl fmt::Display for Suppliers {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slug = match self {
            Suppliers::Skolmaten => "skolmaten",
        };
        write!(formatter, "{slug}")
    }
}

/// Error returned when a slug names no built-in supplier.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown supplier: {0}")]
pub struct UnknownSupplier(pub String);

impl FromStr for Suppliers {
    type Err = UnknownSupplier;

    fn from_str(slug: &str) -> Result<Self, Self::Err> {
        match slug {
            "skolmaten" => Ok(Suppliers::Skolmaten),
            other => Err(UnknownSupplier(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
/// Identifier for a supplier known to meny.
pub struct SupplierId(pub String);

impl From<Suppliers> for SupplierId {
    fn from(supplier: Suppliers) -> Self {
        SupplierId(supplier.to_string())
    }
}

impl fmt::Display for SupplierId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Metadata describing a supplier and its human-friendly name.
pub struct SupplierMeta {
    /// Unique identifier.
    pub id: SupplierId,
    /// Display name.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Stable identifier of a school within its supplier.
pub struct SchoolId(pub String);

impl fmt::Display for SchoolId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A school whose menu a supplier publishes.
pub struct School {
    /// Identifier used by the supplier when querying menus.
    pub id: SchoolId,
    /// Display name as published by the supplier.
    pub title: String,
}

impl School {
    /// Build a school from any id and title.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: SchoolId(id.into()),
            title: title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supplier_slug_round_trips() {
        let slug = Suppliers::Skolmaten.to_string();
        assert_eq!(slug, "skolmaten");
        assert_eq!(slug.parse::<Suppliers>(), Ok(Suppliers::Skolmaten));
        assert_eq!(
            "skolmat".parse::<Suppliers>(),
            Err(UnknownSupplier("skolmat".to_owned()))
        );
    }

    #[test]
    fn supplier_meta_uses_slug_and_display_name() {
        let meta = Suppliers::Skolmaten.meta();
        assert_eq!(meta.id, SupplierId("skolmaten".to_owned()));
        assert_eq!(meta.name, "Skolmaten");
    }

    #[test]
    fn school_serializes_id_as_bare_string() {
        let school = School::new("85957002", "P A Fogelström");
        let json = serde_json::to_string(&school).expect("school serializes");
        assert_eq!(json, r#"{"id":"85957002","title":"P A Fogelström"}"#);
    }
}
