//! Mapping from free-text condition descriptions to display categories.
//!
//! The provider sends human-readable descriptions ("light rain", "broken
//! clouds"). Classification is first-match-wins over an ordered list of
//! substring checks, so "light rain showers" lands on the first rule that
//! matches it. Anything unrecognised (including an empty string) falls
//! through to [`Category::Default`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Clear,
    PartlyCloudy,
    MostlyCloudy,
    Rain,
    Snow,
    Hazy,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Sunny,
    PartlySunny,
    PartlyCloudy,
    Rain,
    Snow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Background {
    LightSkyBlue,
    LightGray,
    DarkGray,
    White,
}

impl Category {
    /// Classify a condition description. Matching is case-insensitive and
    /// order matters: earlier rules win.
    pub fn from_condition(condition: &str) -> Self {
        let cond = condition.to_lowercase();

        if cond.contains("clear") {
            Category::Clear
        } else if cond.contains("few clouds") || cond.contains("partly sunny") {
            Category::PartlyCloudy
        } else if cond.contains("scattered clouds")
            || cond.contains("broken clouds")
            || cond.contains("overcast clouds")
        {
            Category::MostlyCloudy
        } else if cond.contains("rain")
            || cond.contains("drizzle")
            || cond.contains("shower")
            || cond.contains("thunderstorm")
        {
            Category::Rain
        } else if cond.contains("snow") {
            Category::Snow
        } else if cond.contains("mist") || cond.contains("fog") || cond.contains("haze") {
            Category::Hazy
        } else {
            Category::Default
        }
    }

    /// Icon table. Hazy and Default share this icon with MostlyCloudy, but
    /// the two tables are intentionally distinct: do not merge them with
    /// [`Category::background`], which treats Hazy and Default differently.
    pub fn icon(&self) -> Icon {
        match self {
            Category::Clear => Icon::Sunny,
            Category::PartlyCloudy => Icon::PartlySunny,
            Category::MostlyCloudy => Icon::PartlyCloudy,
            Category::Rain => Icon::Rain,
            Category::Snow => Icon::Snow,
            Category::Hazy => Icon::PartlyCloudy,
            Category::Default => Icon::PartlyCloudy,
        }
    }

    /// Background color table. Hazy maps to LightGray here while Default
    /// maps to White, even though both share an icon above.
    pub fn background(&self) -> Background {
        match self {
            Category::Clear => Background::LightSkyBlue,
            Category::PartlyCloudy => Background::LightSkyBlue,
            Category::MostlyCloudy => Background::LightGray,
            Category::Rain => Background::DarkGray,
            Category::Snow => Background::White,
            Category::Hazy => Background::LightGray,
            Category::Default => Background::White,
        }
    }
}

impl Icon {
    /// Terminal glyph standing in for the original icon images.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Sunny => "☀",
            Icon::PartlySunny => "🌤",
            Icon::PartlyCloudy => "⛅",
            Icon::Rain => "🌧",
            Icon::Snow => "❄",
        }
    }
}

impl Background {
    pub fn name(&self) -> &'static str {
        match self {
            Background::LightSkyBlue => "light sky blue",
            Background::LightGray => "light gray",
            Background::DarkGray => "dark gray",
            Background::White => "white",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thunderstorm_is_rain_in_both_tables() {
        let cat = Category::from_condition("thunderstorm with light drizzle");
        assert_eq!(cat, Category::Rain);
        assert_eq!(cat.icon(), Icon::Rain);
        assert_eq!(cat.background(), Background::DarkGray);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            Category::from_condition("light rain showers"),
            Category::from_condition("SHOWER"),
        );
    }

    #[test]
    fn first_match_wins() {
        // "clear" outranks "rain" in rule order.
        assert_eq!(Category::from_condition("clear after rain"), Category::Clear);
    }

    #[test]
    fn cloud_variants_map_to_mostly_cloudy() {
        for cond in ["scattered clouds", "broken clouds", "overcast clouds"] {
            assert_eq!(Category::from_condition(cond), Category::MostlyCloudy, "{cond}");
        }
    }

    #[test]
    fn empty_and_unknown_fall_through_to_default() {
        assert_eq!(Category::from_condition(""), Category::Default);
        assert_eq!(Category::from_condition("sandstorm"), Category::Default);
    }

    #[test]
    fn hazy_and_default_share_icon_but_not_background() {
        assert_eq!(Category::Hazy.icon(), Category::Default.icon());
        assert_ne!(Category::Hazy.background(), Category::Default.background());
        assert_eq!(Category::Hazy.background(), Background::LightGray);
        assert_eq!(Category::Default.background(), Background::White);
    }

    #[test]
    fn clear_is_sunny_on_blue() {
        let cat = Category::from_condition("clear sky");
        assert_eq!(cat.icon(), Icon::Sunny);
        assert_eq!(cat.background(), Background::LightSkyBlue);
    }
}
