//! Locale-aware formatting for journey pages.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported locale `{0}`, expected `en` or `es`")]
pub struct UnknownLocale(String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        match source.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            _ => Err(UnknownLocale(source.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => formatter.write_str("en"),
            Locale::Es => formatter.write_str("es"),
        }
    }
}

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

const MONTHS_SHORT_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

fn month_es(date: NaiveDate) -> &'static str {
    MONTHS_ES[date.month0() as usize]
}

fn weekday_es(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

fn month_short(date: NaiveDate, locale: Locale) -> String {
    match locale {
        Locale::En => date.format("%b").to_string(),
        Locale::Es => MONTHS_SHORT_ES[date.month0() as usize].to_string(),
    }
}

/// "August 20, 1994" or "20 de agosto de 1994".
pub fn format_date_long(date: NaiveDate, locale: Locale) -> String {
    match locale {
        Locale::En => date.format("%B %-d, %Y").to_string(),
        Locale::Es => format!("{} de {} de {}", date.day(), month_es(date), date.year()),
    }
}

/// "Tuesday, February 10, 2026" or "martes, 10 de febrero de 2026".
pub fn format_date_full(date: NaiveDate, locale: Locale) -> String {
    match locale {
        Locale::En => date.format("%A, %B %-d, %Y").to_string(),
        Locale::Es => format!(
            "{}, {}",
            weekday_es(date.weekday()),
            format_date_long(date, locale)
        ),
    }
}

/// "2 nights · Feb 10 – 12", naming the second month only when the stay crosses into it.
pub fn format_stay_range(checkin: NaiveDate, checkout: NaiveDate, locale: Locale) -> String {
    let nights = (checkout - checkin).num_days();
    let label = match locale {
        Locale::En => "nights",
        Locale::Es => "noches",
    };
    let month_in = month_short(checkin, locale);

    if checkin.month() == checkout.month() {
        format!(
            "{nights} {label} · {month_in} {} – {}",
            checkin.day(),
            checkout.day()
        )
    } else {
        format!(
            "{nights} {label} · {month_in} {} – {} {}",
            checkin.day(),
            month_short(checkout, locale),
            checkout.day()
        )
    }
}

/// Reads the loosely formatted dates guests write, such as "August 20, 1994".
pub fn parse_loose_date(text: &str) -> Option<NaiveDate> {
    const FORMATS: [&str; 5] = ["%Y-%m-%d", "%B %d, %Y", "%B %d %Y", "%d %B %Y", "%d %B, %Y"];

    let text = text.trim();

    FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

/// The day sign's English gloss, in Spanish with its article.
pub fn day_sign_gloss(english_name: &str, locale: Locale) -> &str {
    if locale == Locale::En {
        return english_name;
    }

    match english_name {
        "Crocodile" => "El Cocodrilo",
        "Wind" => "El Viento",
        "Night" => "La Noche",
        "Net" => "La Red",
        "Serpent" => "La Serpiente",
        "Death" => "La Muerte",
        "Deer" => "El Venado",
        "Seed" => "La Semilla",
        "Offering" => "La Ofrenda",
        "Dog" => "El Perro",
        "Monkey" => "El Mono",
        "Road" => "El Camino",
        "Reed" => "La Caña",
        "Jaguar" => "El Jaguar",
        "Eagle" => "El Águila",
        "Owl" => "El Búho",
        "Earthquake" => "El Terremoto",
        "Obsidian" => "La Obsidiana",
        "Storm" => "La Tormenta",
        "Sun" => "El Sol",
        other => other,
    }
}

/// A day sign theme in the requested locale. Unknown themes pass through untouched.
pub fn theme_gloss(theme: &str, locale: Locale) -> &str {
    if locale == Locale::En {
        return theme;
    }

    match theme {
        "Primordial Waters" => "Aguas Primordiales",
        "Intuition" => "Intuición",
        "New Beginnings" => "Nuevos Comienzos",
        "Breath of Life" => "Soplo de Vida",
        "Communication" => "Comunicación",
        "Spirit" => "Espíritu",
        "Dawn" => "Amanecer",
        "Darkness" => "Oscuridad",
        "Renewal" => "Renovación",
        "Abundance" => "Abundancia",
        "Gathering" => "Recolección",
        "Entanglement" => "Enredo",
        "Life Force" => "Fuerza Vital",
        "Kundalini" => "Kundalini",
        "Transformation" => "Transformación",
        "Ancestors" => "Ancestros",
        "Rebirth" => "Renacimiento",
        "Harmony" => "Armonía",
        "Four Pillars" => "Cuatro Pilares",
        "Nature" => "Naturaleza",
        "Fertility" => "Fertilidad",
        "Creation" => "Creación",
        "Ripening" => "Maduración",
        "Gratitude" => "Gratitud",
        "Payment" => "Ofrenda",
        "Sacred Fire" => "Fuego Sagrado",
        "Loyalty" => "Lealtad",
        "Justice" => "Justicia",
        "Authority" => "Autoridad",
        "Weaving" => "Tejido",
        "Art" => "Arte",
        "Time" => "Tiempo",
        "Destiny" => "Destino",
        "Path" => "Sendero",
        "Travel" => "Viaje",
        "Home" => "Hogar",
        "Backbone" => "Columna",
        "Earth Force" => "Fuerza Terrestre",
        "Feminine Power" => "Poder Femenino",
        "Mystery" => "Misterio",
        "Vision" => "Visión",
        "Freedom" => "Libertad",
        "Prosperity" => "Prosperidad",
        "Forgiveness" => "Perdón",
        "Wisdom" => "Sabiduría",
        "Knowledge" => "Conocimiento",
        "Mind" => "Mente",
        "Movement" => "Movimiento",
        "Healing" => "Sanación",
        "Cutting Away" => "Cortar lo Innecesario",
        "Truth" => "Verdad",
        "Purification" => "Purificación",
        "Community" => "Comunidad",
        "Divine Feminine" => "Femenino Divino",
        "Illumination" => "Iluminación",
        "Heroism" => "Heroísmo",
        "Divine Wholeness" => "Plenitud Divina",
        other => other,
    }
}
