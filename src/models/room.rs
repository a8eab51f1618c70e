use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Room features from the catalog's fixed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Amenity {
    Wifi,
    Breakfast,
    Tv,
    Bathtub,
    Parking,
    Gym,
    Aircon,
    Minibar,
    Safe,
    Balcony,
}

impl Amenity {
    pub const ALL: [Amenity; 10] = [
        Amenity::Wifi,
        Amenity::Breakfast,
        Amenity::Tv,
        Amenity::Bathtub,
        Amenity::Parking,
        Amenity::Gym,
        Amenity::Aircon,
        Amenity::Minibar,
        Amenity::Safe,
        Amenity::Balcony,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Amenity::Wifi => "wifi",
            Amenity::Breakfast => "breakfast",
            Amenity::Tv => "tv",
            Amenity::Bathtub => "bathtub",
            Amenity::Parking => "parking",
            Amenity::Gym => "gym",
            Amenity::Aircon => "aircon",
            Amenity::Minibar => "minibar",
            Amenity::Safe => "safe",
            Amenity::Balcony => "balcony",
        }
    }

    /// Label shown next to the amenity icon.
    pub fn label(&self) -> &'static str {
        match self {
            Amenity::Wifi => "Wi-Fi",
            Amenity::Breakfast => "Bữa sáng",
            Amenity::Tv => "TV",
            Amenity::Bathtub => "Bồn tắm",
            Amenity::Parking => "Bãi đỗ xe",
            Amenity::Gym => "Phòng tập gym",
            Amenity::Aircon => "Điều hòa",
            Amenity::Minibar => "Minibar",
            Amenity::Safe => "Két an toàn",
            Amenity::Balcony => "Ban công",
        }
    }
}

impl fmt::Display for Amenity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Amenity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amenity::ALL
            .iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("Unknown amenity: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: u64,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    /// Nightly rate in đồng.
    pub price: i64,
    // The search endpoint sends a single `image`, the detail endpoint `images`.
    #[serde(default, alias = "image", deserialize_with = "one_or_many")]
    pub images: Vec<String>,
    pub rating: f32,
    #[serde(default, deserialize_with = "known_amenities")]
    pub amenities: Vec<Amenity>,
    pub location: String,
    #[serde(default = "default_max_guests")]
    pub max_guests: u32,
    #[serde(default)]
    pub bed_type: String,
    #[serde(default)]
    pub room_size: String,
}

fn default_max_guests() -> u32 {
    2
}

impl Room {
    pub fn has_amenity(&self, amenity: Amenity) -> bool {
        self.amenities.contains(&amenity)
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

// Tags outside the vocabulary are dropped rather than failing the whole room.
fn known_amenities<'de, D>(deserializer: D) -> Result<Vec<Amenity>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let tags: Vec<String> = Vec::deserialize(deserializer)?;
    Ok(tags
        .iter()
        .filter_map(|tag| match tag.parse::<Amenity>() {
            Ok(amenity) => Some(amenity),
            Err(_) => {
                log::warn!("Skipping unknown amenity {:?}", tag);
                None
            }
        })
        .collect())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(image) => vec![image],
        OneOrMany::Many(images) => images,
    })
}

/// Compact card used by the listing and checkout screens.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummary {
    pub id: u64,
    pub name: String,
    pub price: i64,
    pub image: Option<String>,
    pub location: String,
    pub max_guests: u32,
}

impl From<&Room> for RoomSummary {
    fn from(room: &Room) -> Self {
        RoomSummary {
            id: room.id,
            name: room.name.clone(),
            price: room.price,
            image: room.cover_image().map(str::to_string),
            location: room.location.clone(),
            max_guests: room.max_guests,
        }
    }
}
