//! Product/promotion category.

use serde::{Deserialize, Serialize};

/// Catalog category a promotion applies to.
///
/// Products are scoped to a category, and a promotion targets products of
/// exactly one category. Serialized with the storage format's lowercase
/// Spanish names (`"alimento"`, `"juguetes"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Pet food.
    Alimento,
    /// Toys.
    Juguetes,
    /// Grooming and care.
    Cuidado,
    /// Accessories.
    Accesorios,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 4] = [Self::Alimento, Self::Juguetes, Self::Cuidado, Self::Accesorios];

    /// Human-readable label for list pages and the wizard.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Alimento => "Alimento",
            Self::Juguetes => "Juguetes",
            Self::Cuidado => "Cuidado",
            Self::Accesorios => "Accesorios",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alimento => write!(f, "alimento"),
            Self::Juguetes => write!(f, "juguetes"),
            Self::Cuidado => write!(f, "cuidado"),
            Self::Accesorios => write!(f, "accesorios"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alimento" => Ok(Self::Alimento),
            "juguetes" => Ok(Self::Juguetes),
            "cuidado" => Ok(Self::Cuidado),
            "accesorios" => Ok(Self::Accesorios),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}
