use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::room::Amenity;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
    #[serde(rename = "rating-desc")]
    RatingDesc,
}

impl SortKey {
    pub fn parse(value: &str) -> Option<SortKey> {
        match value {
            "price-asc" => Some(SortKey::PriceAsc),
            "price-desc" => Some(SortKey::PriceDesc),
            "rating-desc" => Some(SortKey::RatingDesc),
            _ => None,
        }
    }
}

/// Filter state rebuilt from the listing page's query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    pub location: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: Option<u32>,
    pub amenities: BTreeSet<Amenity>,
    pub sort: Option<SortKey>,
}

impl SearchCriteria {
    /// Parses a raw query string. Repeated `amenities` keys accumulate;
    /// blank or malformed values are treated as absent.
    pub fn from_query(query: &str) -> Self {
        let mut criteria = SearchCriteria::default();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "location" => criteria.location = Some(value.to_string()),
                "minPrice" => criteria.min_price = value.parse().ok(),
                "maxPrice" => criteria.max_price = value.parse().ok(),
                "checkIn" => criteria.check_in = parse_date(value),
                "checkOut" => criteria.check_out = parse_date(value),
                "guests" => criteria.guests = value.parse().ok(),
                "amenities" => {
                    if let Ok(amenity) = value.parse::<Amenity>() {
                        criteria.amenities.insert(amenity);
                    }
                }
                "sort" => criteria.sort = SortKey::parse(value),
                _ => {}
            }
        }

        criteria
    }

    /// Query pairs forwarded to the room catalog's search endpoint.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(location) = &self.location {
            pairs.push(("location", location.clone()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("minPrice", min.to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push(("maxPrice", max.to_string()));
        }
        for amenity in &self.amenities {
            pairs.push(("amenities", amenity.as_str().to_string()));
        }
        pairs
    }
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}
