use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier of a listing within the working set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub String);

impl ListingId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ListingId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Market category of a listing, doubling as the top-level route context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum RouteCategory {
    Sale,
    Rent,
    OffPlan,
    UkInvestment,
}

impl RouteCategory {
    pub const fn ordered() -> [Self; 4] {
        [Self::Sale, Self::Rent, Self::OffPlan, Self::UkInvestment]
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::Rent => "rent",
            Self::OffPlan => "off-plan",
            Self::UkInvestment => "uk-investment",
        }
    }

    pub const fn page_title(self) -> &'static str {
        match self {
            Self::Sale => "Properties for Sale",
            Self::Rent => "Properties for Rent",
            Self::OffPlan => "Off-Plan Projects",
            Self::UkInvestment => "UK Investment Opportunities",
        }
    }

    pub const fn page_description(self) -> &'static str {
        match self {
            Self::Sale => "Discover our exclusive portfolio of luxury homes and villas.",
            Self::Rent => "Find your perfect rental home in prime locations.",
            Self::OffPlan => "Invest in the future with premium off-plan developments.",
            Self::UkInvestment => "High-yield property investment opportunities in the UK.",
        }
    }

    pub const fn badge(self) -> &'static str {
        match self {
            Self::Sale => "FOR SALE",
            Self::Rent => "FOR RENT",
            Self::OffPlan => "OFF-PLAN",
            Self::UkInvestment => "UK INVESTMENT",
        }
    }
}

impl TryFrom<String> for RouteCategory {
    type Error = UnknownCategory;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for RouteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown listing category '{}' (expected sale, rent, off-plan or uk-investment)",
            self.0
        )
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for RouteCategory {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sale" | "buy" => Ok(Self::Sale),
            "rent" => Ok(Self::Rent),
            "off-plan" | "off_plan" | "offplan" => Ok(Self::OffPlan),
            "uk-investment" | "uk_investment" => Ok(Self::UkInvestment),
            _ => Err(UnknownCategory(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Aed,
    Gbp,
}

impl Currency {
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Aed => "AED",
            Self::Gbp => "£",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A single real-estate record. Read-only to the discovery core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub category: RouteCategory,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub location: String,
    pub price: u64,
    #[serde(default)]
    pub currency: Currency,
    pub beds: u32,
    pub baths: u32,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub property_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_distress: bool,
    #[serde(default)]
    pub original_price: Option<u64>,
    #[serde(default)]
    pub rental_freq: Option<String>,
}

impl Listing {
    /// Both coordinates, or `None` when the listing cannot be placed on the map.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        }
    }

    pub fn is_in_uk_market(&self, marker: &str) -> bool {
        self.location.contains(marker)
    }
}
