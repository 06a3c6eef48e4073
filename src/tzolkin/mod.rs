//! The Tzolkin, the 260 day sacred calendar of the Maya.
//!
//! Thirteen tones and twenty day signs advance together, one step per day. Because
//! 13 and 20 are coprime, every pairing of tone and day sign occurs exactly once in
//! each 260 day cycle. Positions are calibrated against a single known day,
//! 2026-02-10, which is 6 Kawoq.

mod signs;
mod tones;

pub use signs::DAY_SIGNS;
pub use tones::TONES;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};
use serde::Serialize;
use std::fmt::{self, Display};

/// Number of days before every (tone, day sign) pairing repeats.
pub const CYCLE_LENGTH: i64 = 260;

/// Root of the glyph assets served alongside the pages.
const GLYPH_ROOT: &str = "/glyphs";

/// 2026-02-10, as days since the start of the common era.
const REFERENCE_DAY: i32 = 739_657;
/// Zero based tone index of the reference day (tone 6, Waq).
const REFERENCE_TONE_INDEX: i64 = 5;
/// Zero based day sign index of the reference day (sign 19, Kawoq).
const REFERENCE_DAY_SIGN_INDEX: i64 = 18;

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tone {
    /// Position in the cycle, 1 through 13.
    pub number: u8,
    pub name: &'static str,
    pub meaning: &'static str,
    pub description: &'static str,
}

impl Tone {
    /// Looks up a tone by its 1-based position.
    pub fn by_number(number: u8) -> Option<&'static Tone> {
        TONES.get(usize::from(number).checked_sub(1)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Element {
    Water,
    Air,
    Earth,
    Fire,
}

impl Display for Element {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Element::Water => "Water",
            Element::Air => "Air",
            Element::Earth => "Earth",
            Element::Fire => "Fire",
        };

        formatter.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    East,
    North,
    West,
    South,
}

impl Display for Direction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::East => "East",
            Direction::North => "North",
            Direction::West => "West",
            Direction::South => "South",
        };

        formatter.write_str(name)
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySign {
    /// Position in the cycle, 1 through 20.
    pub number: u8,
    /// Canonical K'iche' name.
    pub name: &'static str,
    pub english_name: &'static str,
    /// Emoji stand-in for when the SVG glyph is unavailable.
    pub glyph: &'static str,
    /// File name of the SVG glyph, relative to the glyph root.
    pub svg_file: &'static str,
    pub themes: &'static [&'static str],
    pub element: Element,
    pub direction: Direction,
    pub description: &'static str,
}

impl DaySign {
    /// Looks up a day sign by its 1-based position.
    pub fn by_number(number: u8) -> Option<&'static DaySign> {
        DAY_SIGNS.get(usize::from(number).checked_sub(1)?)
    }

    /// Case-insensitive exact match against the canonical names.
    pub fn by_name(name: &str) -> Option<&'static DaySign> {
        let name = name.to_lowercase();

        DAY_SIGNS
            .iter()
            .find(|sign| sign.name.to_lowercase() == name)
    }

    /// Path of the sign's glyph asset.
    pub fn glyph_path(&self) -> String {
        format!("{GLYPH_ROOT}/{}", self.svg_file)
    }
}

/// A day's position in the Tzolkin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TzolkinDate {
    pub tone: &'static Tone,
    pub day_sign: &'static DaySign,
    /// e.g. "6 Kawoq"
    pub display_name: String,
}

impl TzolkinDate {
    fn new(tone: &'static Tone, day_sign: &'static DaySign) -> Self {
        Self {
            display_name: format!("{} {}", tone.number, day_sign.name),
            tone,
            day_sign,
        }
    }

    /// 1-based position within the 260 day cycle, where 1 Imox is 1 and 13 Ajpu is 260.
    pub fn kin(&self) -> u16 {
        let tone = u16::from(self.tone.number) - 1;
        let sign = u16::from(self.day_sign.number) - 1;

        // 40 is 1 mod 13 and 0 mod 20; 221 is 0 mod 13 and 1 mod 20.
        (tone * 40 + sign * 221) % 260 + 1
    }
}

impl Display for TzolkinDate {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.display_name)
    }
}

/// Maps a calendar day onto the Tzolkin. Total over every representable date.
pub fn tzolkin_date(date: NaiveDate) -> TzolkinDate {
    let diff = i64::from(date.num_days_from_ce()) - i64::from(REFERENCE_DAY);

    let tone_index = (REFERENCE_TONE_INDEX + diff).rem_euclid(TONES.len() as i64);
    let day_sign_index = (REFERENCE_DAY_SIGN_INDEX + diff).rem_euclid(DAY_SIGNS.len() as i64);

    TzolkinDate::new(
        &TONES[tone_index as usize],
        &DAY_SIGNS[day_sign_index as usize],
    )
}

/// Maps the calendar day of `moment`, in its own time zone, onto the Tzolkin.
pub fn tzolkin_date_at<Tz: TimeZone>(moment: &DateTime<Tz>) -> TzolkinDate {
    tzolkin_date(moment.date_naive())
}

#[cfg(test)]
mod test {
    use chrono::{Duration, FixedOffset};
    use std::collections::HashSet;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn anchor() -> NaiveDate {
        date(2026, 2, 10)
    }

    #[test]
    fn reference_day_matches_the_anchor_date() {
        assert_eq!(REFERENCE_DAY, anchor().num_days_from_ce());
    }

    #[test]
    fn anchor_is_six_kawoq() {
        let tzolkin = tzolkin_date(anchor());

        assert_eq!(6, tzolkin.tone.number);
        assert_eq!("Waq", tzolkin.tone.name);
        assert_eq!(19, tzolkin.day_sign.number);
        assert_eq!("Kawoq", tzolkin.day_sign.name);
        assert_eq!("6 Kawoq", tzolkin.display_name);
        assert_eq!("6 Kawoq", tzolkin.to_string());
    }

    #[test]
    fn day_before_anchor_is_five_tijax() {
        let tzolkin = tzolkin_date(anchor() - Duration::days(1));

        assert_eq!(5, tzolkin.tone.number);
        assert_eq!(18, tzolkin.day_sign.number);
        assert_eq!("Tijax", tzolkin.day_sign.name);
    }

    #[test]
    fn days_after_anchor_wrap_the_day_signs() {
        assert_eq!("7 Ajpu", tzolkin_date(date(2026, 2, 11)).display_name);
        assert_eq!("8 Imox", tzolkin_date(date(2026, 2, 12)).display_name);
    }

    #[test]
    fn repeats_every_cycle() {
        for offset in (-2_000..2_000).step_by(37) {
            let day = anchor() + Duration::days(offset);

            assert_eq!(
                tzolkin_date(day),
                tzolkin_date(day + Duration::days(CYCLE_LENGTH))
            );
        }
    }

    #[test]
    fn every_pairing_occurs_once_per_cycle() {
        for start in [date(1492, 10, 12), anchor() - Duration::days(131), anchor()] {
            let pairs: HashSet<_> = (0..CYCLE_LENGTH)
                .map(|offset| {
                    let tzolkin = tzolkin_date(start + Duration::days(offset));
                    (tzolkin.tone.number, tzolkin.day_sign.number)
                })
                .collect();

            assert_eq!(260, pairs.len());
        }
    }

    #[test]
    fn advances_one_step_per_day_with_wraparound() {
        let mut previous = tzolkin_date(anchor() - Duration::days(400));

        for offset in -399..400 {
            let current = tzolkin_date(anchor() + Duration::days(offset));

            assert_eq!(previous.tone.number % 13 + 1, current.tone.number);
            assert_eq!(previous.day_sign.number % 20 + 1, current.day_sign.number);

            previous = current;
        }
    }

    #[test]
    fn handles_extreme_dates() {
        let earliest = tzolkin_date(NaiveDate::MIN);
        let latest = tzolkin_date(NaiveDate::MAX);

        assert!((1..=13).contains(&earliest.tone.number));
        assert!((1..=20).contains(&latest.day_sign.number));
    }

    #[test]
    fn uses_the_calendar_day_of_the_moment() {
        let offset = FixedOffset::west_opt(5 * 3600).expect("valid offset");
        let late_evening = offset
            .with_ymd_and_hms(2026, 2, 10, 23, 30, 0)
            .single()
            .expect("unambiguous time");

        assert_eq!("6 Kawoq", tzolkin_date_at(&late_evening).display_name);
    }

    #[test]
    fn kin_numbers_the_cycle() {
        assert_eq!(1, tzolkin_date(anchor() - Duration::days(18)).kin());
        assert_eq!(19, tzolkin_date(anchor()).kin());

        let mut kin = tzolkin_date(anchor() - Duration::days(18)).kin();
        for offset in -17..242 {
            let next = tzolkin_date(anchor() + Duration::days(offset)).kin();
            assert_eq!(kin % 260 + 1, next);
            kin = next;
        }
        assert_eq!(260, kin);
    }

    #[test]
    fn finds_day_signs_by_name_ignoring_case() {
        assert_eq!(Some(19), DaySign::by_name("kawoq").map(|sign| sign.number));
        assert_eq!(Some(2), DaySign::by_name("IQ'").map(|sign| sign.number));
        assert_eq!(None, DaySign::by_name("Kawak"));
        assert_eq!(None, DaySign::by_name("Kaw"));
    }

    #[test]
    fn finds_by_number() {
        assert_eq!(Some("Oxlajuj"), Tone::by_number(13).map(|tone| tone.name));
        assert_eq!(None, Tone::by_number(0));
        assert_eq!(None, Tone::by_number(14));
        assert_eq!(Some("Ajpu"), DaySign::by_number(20).map(|sign| sign.name));
        assert_eq!(None, DaySign::by_number(21));
    }

    #[test]
    fn tables_are_in_cycle_order() {
        for (index, tone) in TONES.iter().enumerate() {
            assert_eq!(index + 1, usize::from(tone.number));
        }

        for (index, sign) in DAY_SIGNS.iter().enumerate() {
            assert_eq!(index + 1, usize::from(sign.number));
        }
    }

    #[test]
    fn day_sign_descriptions_are_verbatim() {
        assert_eq!(
            "Kan is the feathered serpent, Kukulkan — raw life force energy rising through the body. It governs vitality, sensuality, and the power of transformation.",
            DAY_SIGNS[4].description
        );
        assert!(DAY_SIGNS[0]
            .description
            .starts_with("Imox is the first day sign — the cosmic womb"));
        assert!(DAY_SIGNS[3]
            .description
            .contains("all that we gather — blessings, memories, and lessons"));
        assert!(DAY_SIGNS[5]
            .description
            .starts_with("Kame is the sacred transformer — not an ending"));
    }

    #[test]
    fn glyph_path_is_rooted_in_the_glyph_directory() {
        let sign = DaySign::by_name("Tz'ikin").expect("sign exists");

        assert_eq!("/glyphs/tzikin.svg", sign.glyph_path());
    }
}
