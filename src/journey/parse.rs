use anyhow::Context;
use once_cell::sync::Lazy;
use regex::Regex;
use std::{collections::HashMap, fs, path::Path};
use thiserror::Error;
use tracing::warn;

use super::model::{
    DayActivity, DayThread, GuestJourney, GuestNawal, JourneyContent, JourneyDay,
    JourneyIntegration, LogoPosition, Recommendation,
};
use crate::{
    cmark::{Outline, Section, SectionLevel},
    error::Result,
    i18n::{self, Locale},
};

const FRONTMATTER_MARKER: &str = "---";
const SPANISH_MARKER: &str = "(es)";

/// `- **Label**: value`
static LABELED_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^- \*\*(.+?)\*\*:\s*(.+)$").expect("labeled line pattern is a valid regex")
});

/// `- **6 Kawoq** (The Storm): summary`
static THREAD_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^- \*\*(.+?)\*\*\s*\((.+?)\):\s*(.+)$")
        .expect("thread line pattern is a valid regex")
});

static DAY_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Day (\d+)").expect("day heading pattern is a valid regex"));

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("date pattern is a valid regex"));

/// Reasons a guest document cannot be used at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("document does not start with a `---` frontmatter block")]
    MissingFrontmatter,
    #[error("frontmatter block is never closed by a `---` line")]
    UnclosedFrontmatter,
}

/// The `key: value` block at the head of a guest document.
#[derive(Debug, Default)]
struct Frontmatter {
    fields: HashMap<String, String>,
}

impl Frontmatter {
    fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    fn field(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }

    fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }
}

/// Reads and parses a single guest document from disk.
pub fn parse_guest_file(path: impl AsRef<Path>) -> Result<GuestJourney> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read guest file: {}", path.display()))?;

    parse_guest(&source).with_context(|| format!("Failed to parse guest file: {}", path.display()))
}

/// Parses a guest document. Only a missing or unterminated frontmatter block is an
/// error; absent sections come back empty.
pub fn parse_guest(source: &str) -> Result<GuestJourney> {
    let source = source
        .trim_start_matches('\u{feff}')
        .replace("\r\n", "\n");
    let (frontmatter, body, body_line) = split_frontmatter(&source)?;
    let document = GuestDocument {
        frontmatter,
        outline: Outline::parse(body),
        body_line,
    };

    Ok(document.into_journey())
}

/// Splits off the frontmatter, returning it with the body and the line the body starts on.
fn split_frontmatter(source: &str) -> Result<(Frontmatter, &str, usize), ParseError> {
    let mut lines = source.split_inclusive('\n');

    let mut offset = match lines.next() {
        Some(first) if first.trim_end() == FRONTMATTER_MARKER => first.len(),
        _ => return Err(ParseError::MissingFrontmatter),
    };
    let mut fields = HashMap::new();

    for (index, line) in lines.enumerate() {
        offset += line.len();

        if line.trim_end() == FRONTMATTER_MARKER {
            let body = &source[offset..];
            return Ok((Frontmatter { fields }, body, index + 3));
        }

        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim();

            if !key.is_empty() {
                fields.insert(key.to_string(), value.trim().to_string());
            }
        }
    }

    Err(ParseError::UnclosedFrontmatter)
}

struct GuestDocument<'a> {
    frontmatter: Frontmatter,
    outline: Outline<'a>,
    body_line: usize,
}

impl<'a> GuestDocument<'a> {
    fn into_journey(self) -> GuestJourney {
        let check_in = self.frontmatter.field("checkin");
        let birthday = self.frontmatter.non_empty("birthday");

        let welcome = |title: &str| self.section(title).map(|section| parse_welcome(section.content()));

        let mut nawal = self
            .section("Your Nawal")
            .map(|section| parse_nawal(section.content()))
            .unwrap_or_default();
        nawal.birthday = birthday.map(str::to_string);

        let nawal_es = self.section("Your Nawal (es)").map(|section| GuestNawal {
            birthday: birthday.map(spanish_birthday),
            ..parse_nawal(section.content())
        });

        let mut days = Vec::new();
        let mut days_es = Vec::new();

        for section in self.day_sections() {
            let date = ISO_DATE
                .find(section.title)
                .map_or(check_in.as_str(), |date| date.as_str());
            let (day, day_es) = parse_day(section, date);

            days.push(day);
            days_es.extend(day_es);
        }

        let (integration, integration_es) = self
            .section("Integration")
            .map(parse_integration)
            .unwrap_or_default();

        let recommendations = |title: &str| {
            self.section(title)
                .map(|section| self.parse_recommendations(section))
        };

        let es = match (nawal_es, days_es.is_empty(), integration_es) {
            (Some(nawal), false, Some(integration)) => Some(JourneyContent {
                welcome_message: welcome("Welcome (es)"),
                nawal,
                days: days_es,
                integration,
                recommendations: recommendations("Recommendations (es)"),
            }),
            _ => None,
        };

        GuestJourney {
            guest_name: self.frontmatter.non_empty("guest").map(str::to_string),
            location_name: self.frontmatter.field("location"),
            location_subtitle: self.frontmatter.field("subtitle"),
            check_out: self.frontmatter.field("checkout"),
            content: JourneyContent {
                welcome_message: welcome("Welcome"),
                nawal,
                days,
                integration,
                recommendations: recommendations("Recommendations"),
            },
            es,
            check_in,
        }
    }

    /// A top level section, treating one with no text the same as a missing one.
    fn section(&self, title: &str) -> Option<&Section<'a>> {
        self.outline
            .section(title)
            .filter(|section| !section.content().trim().is_empty())
    }

    /// `Day N ...` sections ordered by day number.
    fn day_sections(&self) -> Vec<&Section<'a>> {
        let mut days: Vec<(u64, &str)> = self
            .outline
            .top_level()
            .filter_map(|section| {
                let number = DAY_HEADING.captures(section.title)?[1]
                    .parse()
                    .unwrap_or(u64::MAX);

                Some((number, section.title))
            })
            .collect();

        days.sort_unstable();
        days.dedup();

        days.into_iter()
            .filter_map(|(_, title)| self.outline.section(title))
            .collect()
    }

    fn parse_recommendations(&self, section: &Section<'a>) -> Vec<Recommendation> {
        subsections(section)
            .map(|place| self.parse_recommendation(place))
            .collect()
    }

    fn parse_recommendation(&self, place: &Section<'a>) -> Recommendation {
        let mut recommendation = Recommendation {
            name: place.title.to_string(),
            ..Default::default()
        };
        let mut description = Vec::new();

        for line in place.content().lines() {
            if let Some((label, value)) = labeled(line) {
                match label {
                    "URL" => {
                        recommendation.url.get_or_insert_with(|| value.to_string());
                        continue;
                    }
                    "Logo" => {
                        recommendation.logo.get_or_insert_with(|| value.to_string());
                        continue;
                    }
                    "Logo Position" => {
                        if recommendation.logo_position.is_none() {
                            recommendation.logo_position = match value.parse::<LogoPosition>() {
                                Ok(position) => Some(position),
                                Err(err) => {
                                    warn!(
                                        recommendation = place.title,
                                        line = self.body_line + place.line - 1,
                                        "{err}"
                                    );
                                    None
                                }
                            };
                        }
                        continue;
                    }
                    _ => (),
                }
            }

            if ["- **URL**", "- **Logo**", "- **Logo Position**"]
                .iter()
                .any(|prefix| line.starts_with(prefix))
            {
                continue;
            }

            let line = line.trim();
            if !line.is_empty() {
                description.push(line);
            }
        }

        recommendation.description = description.join(" ");
        recommendation
    }
}

fn is_spanish(title: &str) -> bool {
    title.trim_end().ends_with(SPANISH_MARKER)
}

fn strip_spanish(title: &str) -> &str {
    title
        .trim_end()
        .strip_suffix(SPANISH_MARKER)
        .map_or(title, str::trim_end)
}

/// The `##` sections directly beneath a top level section.
fn subsections<'s, 'a>(section: &'s Section<'a>) -> impl Iterator<Item = &'s Section<'a>> {
    section
        .sections
        .iter()
        .filter(|child| child.level == SectionLevel::H2)
}

/// The English subsection and, when there is one, its Spanish twin.
fn locale_pair<'s, 'a>(
    section: &'s Section<'a>,
    is_twin: impl Fn(&Section<'a>) -> bool,
) -> (Option<&'s Section<'a>>, Option<&'s Section<'a>>) {
    let english = subsections(section).find(|child| !is_spanish(child.title));
    let spanish = subsections(section).find(|child| is_twin(child));

    (english, spanish)
}

fn labeled(line: &str) -> Option<(&str, &str)> {
    let captures = LABELED_LINE.captures(line.trim_end())?;
    let label = captures.get(1)?.as_str();
    let value = captures.get(2)?.as_str().trim();

    Some((label, value))
}

fn labeled_field(text: &str, field: &str) -> String {
    text.lines()
        .filter_map(labeled)
        .find(|(label, _)| *label == field)
        .map(|(_, value)| value.to_string())
        .unwrap_or_default()
}

/// Joins the trimmed, non-empty lines of `text` with single spaces.
fn join_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn spanish_birthday(birthday: &str) -> String {
    match i18n::parse_loose_date(birthday) {
        Some(date) => i18n::format_date_long(date, Locale::Es),
        None => {
            warn!(birthday, "birthday is not a recognizable date, keeping it as written");
            birthday.to_string()
        }
    }
}

fn parse_welcome(text: &str) -> String {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n").trim().to_string());
                current.clear();
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        paragraphs.push(current.join("\n").trim().to_string());
    }

    paragraphs.join("\n\n")
}

fn parse_nawal(text: &str) -> GuestNawal {
    GuestNawal {
        display_name: labeled_field(text, "Display"),
        tone_name: labeled_field(text, "Tone"),
        tone_description: labeled_field(text, "Tone meaning"),
        day_sign_description: labeled_field(text, "Day sign"),
        birthday: None,
        poetic_title: labeled_field(text, "Poetic title"),
        body_text: labeled_field(text, "Body"),
    }
}

fn parse_day(section: &Section<'_>, date: &str) -> (JourneyDay, Option<JourneyDay>) {
    let (english, spanish) = locale_pair(section, |child| {
        is_spanish(child.title) && !child.title.starts_with("Activities")
    });

    let day = english.map_or_else(
        || JourneyDay {
            date: date.to_string(),
            ..Default::default()
        },
        |english| day_from_subsection(english, date),
    );

    (day, spanish.map(|spanish| day_from_subsection(spanish, date)))
}

fn day_from_subsection(subsection: &Section<'_>, date: &str) -> JourneyDay {
    let activities = subsection
        .sections
        .iter()
        .find(|child| strip_spanish(child.title) == "Activities");

    let description = match activities {
        Some(activities) => subsection.content_before(activities),
        None => subsection.content(),
    };

    JourneyDay {
        date: date.to_string(),
        title: strip_spanish(subsection.title).to_string(),
        description: description.trim().to_string(),
        activities: activities
            .map(|activities| parse_activities(activities.content()))
            .unwrap_or_default(),
    }
}

fn parse_activities(text: &str) -> Vec<DayActivity> {
    text.lines()
        .filter_map(labeled)
        .map(|(time_of_day, activity)| DayActivity {
            time_of_day: time_of_day.to_string(),
            activity: activity.to_string(),
        })
        .collect()
}

fn parse_integration(section: &Section<'_>) -> (JourneyIntegration, Option<JourneyIntegration>) {
    let (english, spanish) = locale_pair(section, |child| is_spanish(child.title));

    (
        english.map(integration_from).unwrap_or_default(),
        spanish.map(integration_from),
    )
}

fn integration_from(subsection: &Section<'_>) -> JourneyIntegration {
    let closing = subsection
        .sections
        .iter()
        .find(|child| child.title.starts_with("Closing"));

    let main = match closing {
        Some(closing) => subsection.content_before(closing),
        None => subsection.content(),
    };

    let mut body = Vec::new();
    let mut day_threads = Vec::new();

    for line in main.lines() {
        if line.starts_with("- **") {
            day_threads.push(parse_thread(line.trim_end()));
        } else if day_threads.is_empty() && !line.trim().is_empty() {
            body.push(line.trim());
        }
    }

    JourneyIntegration {
        title: strip_spanish(subsection.title).to_string(),
        body_text: body.join(" "),
        day_threads,
        closing_text: closing
            .map(|closing| join_lines(subsection.content_after(closing)))
            .unwrap_or_default(),
    }
}

fn parse_thread(line: &str) -> DayThread {
    match THREAD_LINE.captures(line) {
        Some(captures) => DayThread {
            display_name: captures[1].to_string(),
            english_name: captures[2].to_string(),
            summary: captures[3].to_string(),
        },
        None => DayThread {
            summary: line.to_string(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const FRONTMATTER: &str = "---
guest: Galii
birthday: August 20, 1994
checkin: 2026-02-10
checkout: 2026-02-12
location: Templia Art
subtitle: Aldea Zama
---
";

    fn document(body: &str) -> String {
        format!("{FRONTMATTER}{body}")
    }

    fn parse(body: &str) -> GuestJourney {
        parse_guest(&document(body)).expect("document should parse")
    }

    #[test]
    fn reads_frontmatter_into_the_journey() {
        let journey = parse("");

        assert_eq!(Some("Galii"), journey.guest_name.as_deref());
        assert_eq!("Templia Art", journey.location_name);
        assert_eq!("Aldea Zama", journey.location_subtitle);
        assert_eq!("2026-02-10", journey.check_in);
        assert_eq!("2026-02-12", journey.check_out);
        assert_eq!("2026-02-10-to-2026-02-12", journey.slug());
        assert_eq!(Some("August 20, 1994"), journey.content.nawal.birthday.as_deref());
    }

    #[test]
    fn splits_frontmatter_on_the_first_colon() {
        let (frontmatter, body, line) =
            split_frontmatter("---\nsubtitle: Tulum: Aldea Zama\nnot a field\n---\n# Welcome\n")
                .expect("frontmatter should split");

        assert_eq!(Some("Tulum: Aldea Zama"), frontmatter.get("subtitle"));
        assert_eq!(None, frontmatter.get("not a field"));
        assert_eq!("# Welcome\n", body);
        assert_eq!(5, line);
    }

    #[test]
    fn fails_without_frontmatter() {
        let err = parse_guest("# Welcome\nHello").expect_err("should fail");

        assert_eq!(
            Some(&ParseError::MissingFrontmatter),
            err.downcast_ref::<ParseError>()
        );
    }

    #[test]
    fn fails_with_unclosed_frontmatter() {
        let err = parse_guest("---\nguest: Galii\n# Welcome\n").expect_err("should fail");

        assert_eq!(
            Some(&ParseError::UnclosedFrontmatter),
            err.downcast_ref::<ParseError>()
        );
    }

    #[test]
    fn accepts_windows_line_endings() {
        let source = document("# Welcome\nHello there.\n").replace('\n', "\r\n");
        let journey = parse_guest(&source).expect("document should parse");

        assert_eq!("2026-02-12", journey.check_out);
        assert_eq!(Some("Hello there."), journey.content.welcome_message.as_deref());
    }

    #[test]
    fn normalizes_welcome_paragraphs() {
        let journey = parse(
            "# Welcome

  You have arrived.
It is not a coincidence.



What follows is a guide.   

# Welcome (es)
Has llegado.
",
        );

        assert_eq!(
            Some("You have arrived.\nIt is not a coincidence.\n\nWhat follows is a guide."),
            journey.content.welcome_message.as_deref()
        );
    }

    #[test]
    fn missing_optional_sections_degrade_to_empty_values() {
        let journey = parse("# Your Nawal\n- **Display**: 1 Iq' · Wind\n");

        assert_eq!(None, journey.content.welcome_message);
        assert_eq!(None, journey.content.recommendations);
        assert!(journey.content.days.is_empty());
        assert_eq!(JourneyIntegration::default(), journey.content.integration);
        assert_eq!(None, journey.es);
    }

    #[test]
    fn reads_labeled_nawal_fields() {
        let journey = parse(
            "# Your Nawal
- **Display**: 1 Iq' · Wind
- **Tone**: Tone 1 (Jun) · The Breath of Life
- **Tone meaning**: Unity
- **Day sign**: Iq' is the Wind
- **Poetic title**: The Breath That Guides You
- **Body**: Your nawal carries the energy of pure origin.
",
        );
        let nawal = journey.content.nawal;

        assert_eq!("1 Iq' · Wind", nawal.display_name);
        assert_eq!("Tone 1 (Jun) · The Breath of Life", nawal.tone_name);
        assert_eq!("Unity", nawal.tone_description);
        assert_eq!("Iq' is the Wind", nawal.day_sign_description);
        assert_eq!("The Breath That Guides You", nawal.poetic_title);
        assert_eq!("Your nawal carries the energy of pure origin.", nawal.body_text);
    }

    #[test]
    fn orders_days_by_number() {
        let journey = parse(
            "# Day 10 — 2026-02-19
## Tenth
# Day 2 — 2026-02-11
## Second
# Day 1 — 2026-02-10
## First
",
        );
        let titles: Vec<_> = journey
            .content
            .days
            .iter()
            .map(|day| day.title.as_str())
            .collect();

        assert_eq!(vec!["First", "Second", "Tenth"], titles);
        assert_eq!("2026-02-19", journey.content.days[2].date);
    }

    #[test]
    fn day_without_a_date_falls_back_to_checkin() {
        let journey = parse("# Day 1: Arrival\n## Arrival\nWelcome.\n");

        assert_eq!("2026-02-10", journey.content.days[0].date);
        assert_eq!("Welcome.", journey.content.days[0].description);
    }

    #[test]
    fn splits_day_description_from_activities() {
        let journey = parse(
            "# Day 1 — 2026-02-10
## Arrival & Purification
Kawoq channels the Divine Feminine.

The number 6 brings flow.
### Activities
- **Late Afternoon**: Arrive at Templia.
- **Evening**: Dinner in Aldea Zama.
Not an activity.
- **Night**: Steam shower ritual.

## Llegada y Purificación (es)
Kawoq canaliza el Femenino Divino.
### Activities (es)
- **Tarde**: Llega a Templia.
",
        );
        let day = &journey.content.days[0];

        assert_eq!("Arrival & Purification", day.title);
        assert_eq!(
            "Kawoq channels the Divine Feminine.\n\nThe number 6 brings flow.",
            day.description
        );
        assert_eq!(
            vec![
                ("Late Afternoon", "Arrive at Templia."),
                ("Evening", "Dinner in Aldea Zama."),
                ("Night", "Steam shower ritual."),
            ],
            day.activities
                .iter()
                .map(|activity| (activity.time_of_day.as_str(), activity.activity.as_str()))
                .collect::<Vec<_>>()
        );

        // Only the English content is kept when the other Spanish sections are missing.
        assert_eq!(None, journey.es);
    }

    #[test]
    fn parses_integration_threads_and_closing() {
        let journey = parse(
            "# Integration
## The Thread of Wind
How the energies wove
through your journey
- **6 Kawoq** (The Storm): Cleansed and prepared you.
- **7 Ajpu** (The Sun): Illuminated the core of your journey.
- **8 Imox**: missing its English name
### Closing
Through it all, your nawal
was the invisible thread.
",
        );
        let integration = journey.content.integration;

        assert_eq!("The Thread of Wind", integration.title);
        assert_eq!("How the energies wove through your journey", integration.body_text);
        assert_eq!(3, integration.day_threads.len());
        assert_eq!(
            DayThread {
                display_name: String::from("6 Kawoq"),
                english_name: String::from("The Storm"),
                summary: String::from("Cleansed and prepared you."),
            },
            integration.day_threads[0]
        );
        assert_eq!(
            DayThread {
                summary: String::from("- **8 Imox**: missing its English name"),
                ..Default::default()
            },
            integration.day_threads[2]
        );
        assert_eq!(
            "Through it all, your nawal was the invisible thread.",
            integration.closing_text
        );
    }

    #[test]
    fn closing_runs_to_the_end_of_the_integration() {
        let journey = parse(
            "# Integration
## The Thread of Wind
Body.
### Closing
The wind carried you.
### A Final Word
Come back soon.
",
        );

        assert_eq!(
            "The wind carried you. ### A Final Word Come back soon.",
            journey.content.integration.closing_text
        );
    }

    #[test]
    fn underlined_text_does_not_split_a_day() {
        let journey = parse(
            "# Day 1 — 2026-02-10
## Arrival
Settle in and breathe.
---
### Activities
- **Evening**: Dinner.
",
        );
        let day = &journey.content.days[0];

        assert_eq!("Arrival", day.title);
        assert_eq!("Settle in and breathe.\n---", day.description);
        assert_eq!(1, day.activities.len());
        assert_eq!("Dinner.", day.activities[0].activity);
    }

    #[test]
    fn parses_recommendations() {
        let journey = parse(
            "# Recommendations
## Parque del Jaguar
- **URL**: https://parquedeljaguar.example
- **Logo**: jaguar.png
- **Logo Position**: right
A national park protecting the
jungle around the ruins.

## Museo Regional
- **Logo Position**: center
The regional museum of the east coast.
",
        );
        let recommendations = journey
            .content
            .recommendations
            .expect("recommendations should be present");

        assert_eq!(2, recommendations.len());
        assert_eq!(
            Recommendation {
                name: String::from("Parque del Jaguar"),
                description: String::from(
                    "A national park protecting the jungle around the ruins."
                ),
                url: Some(String::from("https://parquedeljaguar.example")),
                logo: Some(String::from("jaguar.png")),
                logo_position: Some(LogoPosition::Right),
            },
            recommendations[0]
        );
        assert_eq!(None, recommendations[1].logo_position);
        assert_eq!(
            "The regional museum of the east coast.",
            recommendations[1].description
        );
    }

    const BILINGUAL: &str = "# Your Nawal
- **Display**: 1 Iq' · Wind

# Your Nawal (es)
- **Display**: 1 Iq' · Viento

# Day 1 — 2026-02-10
## Arrival
Storm.
## Llegada (es)
Tormenta.

# Integration
## The Thread of Wind
Body.
## El Hilo del Viento (es)
Cuerpo.

# Recommendations (es)
## Museo
Un museo.
";

    #[test]
    fn attaches_complete_spanish_content() {
        let journey = parse(BILINGUAL);
        let es = journey.es.as_ref().expect("spanish content should be present");

        assert_eq!(1, journey.content.days.len());
        assert_eq!(1, es.days.len());
        assert_eq!("Llegada", es.days[0].title);
        assert_eq!("2026-02-10", es.days[0].date);
        assert_eq!("1 Iq' · Viento", es.nawal.display_name);
        assert_eq!(Some("20 de agosto de 1994"), es.nawal.birthday.as_deref());
        assert_eq!("El Hilo del Viento", es.integration.title);
        assert_eq!("Cuerpo.", es.integration.body_text);
        assert_eq!(None, es.welcome_message);
        assert_eq!(None, journey.content.recommendations);
        assert_eq!(1, es.recommendations.as_ref().map_or(0, Vec::len));
    }

    #[test]
    fn drops_spanish_content_when_any_part_is_missing() {
        let without_integration = BILINGUAL.replace("## El Hilo del Viento (es)", "## Other");
        let without_nawal = BILINGUAL.replace("# Your Nawal (es)", "# Tu Nawal");
        let without_days = BILINGUAL.replace("## Llegada (es)", "### Llegada");

        for body in [without_integration, without_nawal, without_days] {
            assert_eq!(None, parse(&body).es);
        }
    }

    #[test]
    fn keeps_unreadable_birthdays_as_written() {
        let source = document(BILINGUAL).replace("August 20, 1994", "the summer solstice");
        let journey = parse_guest(&source).expect("document should parse");
        let es = journey.es.expect("spanish content should be present");

        assert_eq!(Some("the summer solstice"), es.nawal.birthday.as_deref());
    }

    #[test]
    fn missing_guest_name_is_absent() {
        let source = document("").replace("guest: Galii", "guest:");
        let journey = parse_guest(&source).expect("document should parse");

        assert_eq!(None, journey.guest_name);
    }
}
