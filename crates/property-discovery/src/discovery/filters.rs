use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Bedroom constraint chosen in the filter bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum BedroomFilter {
    #[default]
    Any,
    Exactly(u32),
    FiveOrMore,
}

impl BedroomFilter {
    /// Normalizes a raw token. Anything unrecognized means no constraint.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "any" => Self::Any,
            "5+" | "5-or-more" => Self::FiveOrMore,
            other => other.parse::<u32>().map(Self::Exactly).unwrap_or(Self::Any),
        }
    }
}

/// Property-type token matched against listing titles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum CategoryTag {
    #[default]
    Any,
    Token(String),
}

impl CategoryTag {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("any") {
            Self::Any
        } else {
            Self::Token(trimmed.to_string())
        }
    }
}

/// Active filter values for one browsing session. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub bedrooms: BedroomFilter,
    pub category: CategoryTag,
    /// Supplied by navigation rather than the filter bar.
    pub search_term: Option<String>,
}

impl FilterState {
    /// Merges the fields present in `patch`; absent fields keep their value.
    pub fn merge(&mut self, patch: FilterPatch) {
        if let Some(raw) = patch.min_price {
            self.min_price = parse_price_bound(&raw);
        }
        if let Some(raw) = patch.max_price {
            self.max_price = parse_price_bound(&raw);
        }
        if let Some(raw) = patch.beds {
            self.bedrooms = BedroomFilter::parse(&raw);
        }
        if let Some(raw) = patch.category {
            self.category = CategoryTag::parse(&raw);
        }
    }

    /// Resets the filter-bar fields. The search term belongs to the route context.
    pub fn clear(&mut self) {
        let search_term = self.search_term.take();
        *self = Self {
            search_term,
            ..Self::default()
        };
    }

    pub fn set_search_term(&mut self, term: Option<String>) {
        self.search_term = term
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
    }

    pub fn has_field_filters(&self) -> bool {
        self.min_price.is_some()
            || self.max_price.is_some()
            || self.bedrooms != BedroomFilter::Any
            || self.category != CategoryTag::Any
    }

    pub fn is_active(&self) -> bool {
        self.has_field_filters() || self.search_term.is_some()
    }
}

/// Partial update coming from the filter bar, carried as the raw widget values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPatch {
    #[serde(default, deserialize_with = "widget_value")]
    pub min_price: Option<String>,
    #[serde(default, deserialize_with = "widget_value")]
    pub max_price: Option<String>,
    #[serde(default, deserialize_with = "widget_value")]
    pub beds: Option<String>,
    #[serde(default, deserialize_with = "widget_value")]
    pub category: Option<String>,
}

impl FilterPatch {
    pub fn min_price(value: u64) -> Self {
        Self {
            min_price: Some(value.to_string()),
            ..Self::default()
        }
    }

    pub fn max_price(value: u64) -> Self {
        Self {
            max_price: Some(value.to_string()),
            ..Self::default()
        }
    }

    pub fn beds(token: &str) -> Self {
        Self {
            beds: Some(token.to_string()),
            ..Self::default()
        }
    }

    pub fn category(token: &str) -> Self {
        Self {
            category: Some(token.to_string()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_price.is_none()
            && self.max_price.is_none()
            && self.beds.is_none()
            && self.category.is_none()
    }
}

/// Accepts strings and numbers as written. Any other present value clears the
/// field; `null` leaves it untouched.
fn widget_value<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(raw)) => Some(raw),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(_) => Some(String::new()),
    })
}

fn parse_price_bound(raw: &str) -> Option<u64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '_'))
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<u64>().ok().or_else(|| {
        cleaned
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value >= 0.0)
            .map(|value| value.floor() as u64)
    })
}
