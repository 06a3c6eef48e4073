use std::{collections::HashMap, path::Path};
use tracing::debug;

use super::{defaults, load::load_all_guests, model::GuestJourney};
use crate::config::Config;

/// Journeys keyed by slug, kept in the order their slugs were first seen.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct JourneyRegistry {
    journeys: Vec<(String, GuestJourney)>,
    index: HashMap<String, usize>,
}

impl JourneyRegistry {
    /// Merges `parsed` over `defaults`. A parsed journey replaces a default with the same
    /// slug without moving it.
    pub fn new(defaults: JourneyRegistry, parsed: JourneyRegistry) -> JourneyRegistry {
        let mut registry = defaults;
        registry.extend(parsed);
        registry
    }

    /// The built-in journeys overlaid with every guest document in the configured directory.
    pub fn load(config: &Config, root: impl AsRef<Path>) -> JourneyRegistry {
        let parsed = load_all_guests(config.guests_dir(root));
        let registry = JourneyRegistry::new(defaults::hardcoded(), parsed);

        debug!(journeys = registry.len(), "journey registry ready");
        registry
    }

    /// Adds a journey under its slug, returning the journey it replaced.
    pub fn insert(&mut self, journey: GuestJourney) -> Option<GuestJourney> {
        let slug = journey.slug();

        match self.index.get(&slug) {
            Some(&position) => Some(std::mem::replace(&mut self.journeys[position].1, journey)),
            None => {
                self.index.insert(slug.clone(), self.journeys.len());
                self.journeys.push((slug, journey));
                None
            }
        }
    }

    pub fn journey_by_slug(&self, slug: &str) -> Option<&GuestJourney> {
        self.index
            .get(slug)
            .map(|&position| &self.journeys[position].1)
    }

    pub fn journey_slugs(&self) -> impl Iterator<Item = &str> + '_ {
        self.journeys.iter().map(|(slug, _)| slug.as_str())
    }

    pub fn len(&self) -> usize {
        self.journeys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.journeys.is_empty()
    }
}

impl Extend<GuestJourney> for JourneyRegistry {
    fn extend<T: IntoIterator<Item = GuestJourney>>(&mut self, iter: T) {
        for journey in iter {
            self.insert(journey);
        }
    }
}

impl FromIterator<GuestJourney> for JourneyRegistry {
    fn from_iter<T: IntoIterator<Item = GuestJourney>>(iter: T) -> Self {
        let mut registry = JourneyRegistry::default();
        registry.extend(iter);
        registry
    }
}

impl IntoIterator for JourneyRegistry {
    type Item = GuestJourney;
    type IntoIter = std::iter::Map<
        std::vec::IntoIter<(String, GuestJourney)>,
        fn((String, GuestJourney)) -> GuestJourney,
    >;

    fn into_iter(self) -> Self::IntoIter {
        fn journey((_, journey): (String, GuestJourney)) -> GuestJourney {
            journey
        }

        self.journeys.into_iter().map(journey as fn(_) -> _)
    }
}
