//! Scryfall card descriptor and visual-treatment classification

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// The subset of a Scryfall card object needed for price matching.
///
/// Deserializes straight from API responses and bulk data, and also from
/// the cache file, where older entries store lists as comma-joined strings
/// and flags as `"true"`/`"false"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDescriptor {
    /// Scryfall card id
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    /// Cardmarket product ID for price matching
    #[serde(default, deserialize_with = "lenient_id")]
    pub cardmarket_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub collector_number: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub set: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub set_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub frame_effects: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub promo_types: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub border_color: String,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub full_art: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub textless: bool,
    #[serde(default, deserialize_with = "lenient_list")]
    pub finishes: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub lang: String,
}

/// Frame/border treatment of a printing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualType {
    #[default]
    Normal,
    Showcase,
    ExtendedArt,
    Borderless,
    Retro,
    Etched,
}

impl VisualType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisualType::Normal => "normal",
            VisualType::Showcase => "showcase",
            VisualType::ExtendedArt => "extended-art",
            VisualType::Borderless => "borderless",
            VisualType::Retro => "retro",
            VisualType::Etched => "etched",
        }
    }
}

impl fmt::Display for VisualType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CardDescriptor {
    fn has_marker(&self, marker: &str) -> bool {
        self.frame_effects.iter().any(|m| m == marker)
            || self.promo_types.iter().any(|m| m == marker)
    }

    /// Classify the printing. The first matching rule wins:
    /// textless, showcase, extended art, borderless, retro frame, etched.
    /// Other promo types carry no treatment.
    pub fn visual_type(&self) -> VisualType {
        if self.textless {
            VisualType::Normal
        } else if self.has_marker("showcase") {
            VisualType::Showcase
        } else if self.has_marker("extendedart") {
            VisualType::ExtendedArt
        } else if self.has_marker("borderless") || self.border_color == "borderless" || self.full_art
        {
            VisualType::Borderless
        } else if self.frame_effects.iter().any(|m| m == "retro") {
            VisualType::Retro
        } else if self.finishes.iter().any(|f| f == "etched") {
            VisualType::Etched
        } else {
            VisualType::Normal
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = lenient_string(deserializer)?;
    let id = id.trim();
    Ok((!id.is_empty()).then(|| id.to_string()))
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        Some(Value::String(joined)) => joined
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    })
}

#[cfg(test)]
#[path = "descriptor_tests.rs"]
mod tests;
