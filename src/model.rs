use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

// Listing endpoints differ in which aggregate columns they include.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Movie {
    #[serde(rename = "movieId")]
    pub id: u64,
    pub title: String,
    #[serde(default, deserialize_with = "genre_list")]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub avg_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub rating_count: Option<u64>,
    /// Only present on similar-movie results, as a percentage.
    #[serde(default, deserialize_with = "lenient")]
    pub total_similarity: Option<f64>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Tag {
    #[serde(default)]
    pub tag: String,
    #[serde(default, deserialize_with = "lenient")]
    pub relevance: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GenreField {
    List(Vec<String>),
    Joined(String),
}

// The catalog stores genres as `Action|Comedy`.
fn genre_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let genres = match Option::<GenreField>::deserialize(deserializer)? {
        Some(GenreField::List(list)) => list,
        Some(GenreField::Joined(joined)) => joined.split('|').map(str::to_owned).collect(),
        None => Vec::new(),
    };
    Ok(genres
        .into_iter()
        .map(|g| g.trim().to_owned())
        .filter(|g| !g.is_empty())
        .collect())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Text(String),
    Other(IgnoredAny),
}

// Aggregates computed by MySQL come back as decimals, which the API
// serializes as strings.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
{
    Ok(match Option::<Lenient<T>>::deserialize(deserializer)? {
        Some(Lenient::Value(value)) => Some(value),
        Some(Lenient::Text(text)) => text.trim().parse().ok(),
        Some(Lenient::Other(_)) | None => None,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StarRating(u8);

impl StarRating {
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(StarRating(value))
    }

    pub fn parse(raw: &str) -> Self {
        raw.trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::new)
            .unwrap_or_default()
    }

    pub fn value(self) -> u8 {
        self.0
    }
}
