pub mod bookings;
pub mod payment;
pub mod review;
pub mod room;
pub mod search;
pub mod user;

use serde::{Deserialize, Deserializer};

// Upstream services disagree on whether ids are numbers or strings.
pub(crate) fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Number(u64),
        Text(String),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Number(n) => n.to_string(),
        Id::Text(s) => s,
    })
}
