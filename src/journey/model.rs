use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::i18n::Locale;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayActivity {
    /// A free-form label such as "Late Afternoon".
    pub time_of_day: String,
    pub activity: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyDay {
    /// ISO `YYYY-MM-DD` date.
    pub date: String,
    pub title: String,
    pub description: String,
    pub activities: Vec<DayActivity>,
}

/// The guest's own placement in the Tzolkin, as written up for them.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestNawal {
    pub display_name: String,
    pub tone_name: String,
    pub tone_description: String,
    pub day_sign_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    pub poetic_title: String,
    pub body_text: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayThread {
    pub display_name: String,
    pub english_name: String,
    pub summary: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyIntegration {
    pub title: String,
    pub body_text: String,
    pub day_threads: Vec<DayThread>,
    pub closing_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoPosition {
    Left,
    Right,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("logo position must be `left` or `right`, found `{0}`")]
pub struct InvalidLogoPosition(String);

impl FromStr for LogoPosition {
    type Err = InvalidLogoPosition;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        match source.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(LogoPosition::Left),
            "right" => Ok(LogoPosition::Right),
            _ => Err(InvalidLogoPosition(source.to_string())),
        }
    }
}

impl fmt::Display for LogoPosition {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogoPosition::Left => formatter.write_str("left"),
            LogoPosition::Right => formatter.write_str("right"),
        }
    }
}

/// A nearby place or activity worth the guest's time.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_position: Option<LogoPosition>,
}

/// Everything in a journey that is written in a particular language.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub welcome_message: Option<String>,
    pub nawal: GuestNawal,
    pub days: Vec<JourneyDay>,
    pub integration: JourneyIntegration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<Recommendation>>,
}

/// A guest's full itinerary. The English content is always present; the Spanish
/// content is either complete or missing altogether.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestJourney {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
    pub location_name: String,
    pub location_subtitle: String,
    /// ISO `YYYY-MM-DD` date.
    pub check_in: String,
    /// ISO `YYYY-MM-DD` date.
    pub check_out: String,
    #[serde(flatten)]
    pub content: JourneyContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub es: Option<JourneyContent>,
}

impl GuestJourney {
    /// The registry key for this journey, e.g. `2026-02-10-to-2026-02-12`.
    pub fn slug(&self) -> String {
        slug(&self.check_in, &self.check_out)
    }

    /// Content in the requested locale, falling back to English when there is no translation.
    pub fn content(&self, locale: Locale) -> &JourneyContent {
        match (locale, &self.es) {
            (Locale::Es, Some(es)) => es,
            _ => &self.content,
        }
    }
}

pub(crate) fn slug(check_in: &str, check_out: &str) -> String {
    format!("{check_in}-to-{check_out}")
}

#[cfg(test)]
mod test {
    use super::*;

    fn journey() -> GuestJourney {
        GuestJourney {
            check_in: String::from("2026-03-01"),
            check_out: String::from("2026-03-04"),
            content: JourneyContent {
                welcome_message: Some(String::from("Welcome")),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn slug_joins_stay_dates() {
        assert_eq!("2026-03-01-to-2026-03-04", journey().slug());
    }

    #[test]
    fn content_falls_back_to_english() {
        let mut journey = journey();

        assert_eq!(
            Some("Welcome"),
            journey.content(Locale::Es).welcome_message.as_deref()
        );

        journey.es = Some(JourneyContent {
            welcome_message: Some(String::from("Bienvenida")),
            ..Default::default()
        });

        assert_eq!(
            Some("Bienvenida"),
            journey.content(Locale::Es).welcome_message.as_deref()
        );
        assert_eq!(
            Some("Welcome"),
            journey.content(Locale::En).welcome_message.as_deref()
        );
    }

    #[test]
    fn serializes_in_camel_case_with_flattened_content() {
        let value = serde_json::to_value(journey()).expect("journey should serialize");

        assert_eq!("2026-03-01", value["checkIn"]);
        assert_eq!("Welcome", value["welcomeMessage"]);
        assert!(value.get("es").is_none());
        assert!(value.get("content").is_none());
    }

    #[test]
    fn parses_logo_positions() {
        assert_eq!(Ok(LogoPosition::Left), "left".parse());
        assert_eq!(Ok(LogoPosition::Right), " Right ".parse());
        assert!("center".parse::<LogoPosition>().is_err());
    }
}
