use super::CatalogError;
use crate::discovery::domain::{Currency, Listing, ListingId, RouteCategory};
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_listings<R: Read>(reader: R) -> Result<Vec<Listing>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut listings = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        let row: ListingRow = record.deserialize(Some(&headers))?;
        listings.push(row.into_listing(line)?);
    }

    Ok(listings)
}

#[derive(Debug, Deserialize)]
struct ListingRow {
    id: String,
    #[serde(rename = "type")]
    category: String,
    title: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    description: Option<String>,
    location: String,
    price: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    currency: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    beds: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    baths: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    lat: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    lng: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    property_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    status: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    is_featured: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    is_distress: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    original_price: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    rental_freq: Option<String>,
}

impl ListingRow {
    fn into_listing(self, line: u64) -> Result<Listing, CatalogError> {
        let invalid = |reason: String| CatalogError::InvalidRow { line, reason };

        if self.id.is_empty() {
            return Err(invalid("listing id is empty".to_string()));
        }

        let category = self
            .category
            .parse::<RouteCategory>()
            .map_err(|err| invalid(err.to_string()))?;
        let price = parse_amount(&self.price)
            .ok_or_else(|| invalid(format!("price '{}' is not a number", self.price)))?;
        let currency = match self.currency.as_deref() {
            None => Currency::default(),
            Some(value) if value.eq_ignore_ascii_case("aed") => Currency::Aed,
            Some(value) if value.eq_ignore_ascii_case("gbp") => Currency::Gbp,
            Some(other) => return Err(invalid(format!("unsupported currency '{other}'"))),
        };

        Ok(Listing {
            id: ListingId(self.id),
            category,
            title: self.title,
            description: self.description.unwrap_or_default(),
            location: self.location,
            price,
            currency,
            beds: parse_count(self.beds.as_deref()),
            baths: parse_count(self.baths.as_deref()),
            lat: self.lat.as_deref().and_then(parse_coordinate),
            lng: self.lng.as_deref().and_then(parse_coordinate),
            property_type: self.property_type.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            is_featured: parse_flag(self.is_featured.as_deref()),
            is_distress: parse_flag(self.is_distress.as_deref()),
            original_price: self.original_price.as_deref().and_then(parse_amount),
            rental_freq: self.rental_freq,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_amount(value: &str) -> Option<u64> {
    let cleaned: String = value.chars().filter(|c| *c != ',').collect();
    cleaned.trim().parse::<u64>().ok()
}

fn parse_count(value: Option<&str>) -> u32 {
    value
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .unwrap_or(0)
}

fn parse_coordinate(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|coordinate| coordinate.is_finite())
}

fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|raw| raw.trim().to_ascii_lowercase()).as_deref(),
        Some("true" | "yes" | "1")
    )
}
