use anyhow::{anyhow, bail, Context};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use tzolkin_journey::{
    config::{Config, CONFIG_FILE},
    error::Result,
    i18n::{self, Locale},
    journey::{defaults, load_all_guests, JourneyRegistry},
    tzolkin::{tzolkin_date, tzolkin_date_at, TzolkinDate},
};

#[derive(Parser)]
#[command(name = "tzolkin-journey", version, about = "Tzolkin dates and guest journeys")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Configuration file. Defaults to `journey.toml` in the current directory, if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Guest document directory, overriding the configuration.
    #[arg(long, global = true)]
    guests: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the Tzolkin date for a day, today by default.
    Date {
        /// Day to convert, as YYYY-MM-DD.
        date: Option<NaiveDate>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the nawal, the Tzolkin day sign of a birth date.
    Nawal {
        /// Birth date, e.g. "August 20, 1994" or 1994-08-20.
        #[arg(required = true, num_args = 1..)]
        birthday: Vec<String>,

        #[arg(long, default_value_t = Locale::En)]
        lang: Locale,
    },

    /// List the slugs of every known journey.
    List,

    /// Print a journey as JSON.
    Show {
        slug: String,

        #[arg(long, default_value_t = Locale::En)]
        lang: Locale,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Date { date, json } => {
            let tzolkin = match date {
                Some(date) => tzolkin_date(date),
                None => tzolkin_date_at(&Local::now()),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&tzolkin)?);
            } else {
                print_date(&tzolkin, Locale::En);
            }
        }
        Command::Nawal { birthday, lang } => {
            let text = birthday.join(" ");
            let Some(date) = i18n::parse_loose_date(&text) else {
                bail!("`{text}` is not a recognizable date");
            };
            let nawal = tzolkin_date(date);

            println!("{}", i18n::format_date_long(date, lang));
            print_date(&nawal, lang);
            println!("{}: {}", label("Element", lang), nawal.day_sign.element);
            println!("{}: {}", label("Direction", lang), nawal.day_sign.direction);
            println!(
                "{}: {}",
                label("Themes", lang),
                nawal
                    .day_sign
                    .themes
                    .iter()
                    .map(|theme| i18n::theme_gloss(theme, lang))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        Command::List => {
            for slug in registry(cli.config, cli.guests)?.journey_slugs() {
                println!("{slug}");
            }
        }
        Command::Show { slug, lang } => {
            let registry = registry(cli.config, cli.guests)?;
            let journey = registry
                .journey_by_slug(&slug)
                .ok_or_else(|| anyhow!("journey not found: {slug}"))?;

            let json = match lang {
                Locale::En => serde_json::to_string_pretty(journey)?,
                Locale::Es => serde_json::to_string_pretty(journey.content(lang))?,
            };
            println!("{json}");
        }
    }

    Ok(())
}

fn print_date(date: &TzolkinDate, locale: Locale) {
    println!(
        "{} · {}",
        date.display_name,
        i18n::day_sign_gloss(date.day_sign.english_name, locale)
    );
    println!(
        "{} {} ({}): {}",
        label("Tone", locale),
        date.tone.number,
        date.tone.name,
        date.tone.meaning
    );
    println!("{}: {}", label("Glyph", locale), date.day_sign.glyph_path());
}

fn label(english: &'static str, locale: Locale) -> &'static str {
    match (locale, english) {
        (Locale::Es, "Tone") => "Tono",
        (Locale::Es, "Glyph") => "Glifo",
        (Locale::Es, "Element") => "Elemento",
        (Locale::Es, "Direction") => "Dirección",
        (Locale::Es, "Themes") => "Temas",
        _ => english,
    }
}

/// Builds the registry from the configuration file and guest directory the user chose.
fn registry(config: Option<PathBuf>, guests: Option<PathBuf>) -> Result<JourneyRegistry> {
    let (config, root) = match config {
        Some(path) => (Config::load(&path)?, config_root(&path)),
        None if Path::new(CONFIG_FILE).is_file() => (
            Config::load(CONFIG_FILE).context("Failed to load journey.toml")?,
            PathBuf::from("."),
        ),
        None => (Config::default(), PathBuf::from(".")),
    };

    Ok(match guests {
        Some(guests) => JourneyRegistry::new(defaults::hardcoded(), load_all_guests(guests)),
        None => JourneyRegistry::load(&config, root),
    })
}

fn config_root(path: &Path) -> PathBuf {
    path.parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}
