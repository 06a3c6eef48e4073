use super::Tone;

const fn tone(
    number: u8,
    name: &'static str,
    meaning: &'static str,
    description: &'static str,
) -> Tone {
    Tone {
        number,
        name,
        meaning,
        description,
    }
}

/// The thirteen tones, in cycle order.
pub static TONES: [Tone; 13] = [
    tone(1, "Jun", "Unity", "The beginning, the point of origin. Pure potential, undivided wholeness."),
    tone(2, "Ka'", "Duality", "The creative tension of opposites. Polarity, balance, and the dance of complementary forces."),
    tone(3, "Ox", "Action", "The catalyst of movement. Rhythm, communication, and the spark that sets things in motion."),
    tone(4, "Kaj", "Stability", "The four pillars, the four directions. Structure, form, and the foundation upon which all is built."),
    tone(5, "Jo'", "Empowerment", "The center point. Taking command, empowerment, and the peak of the first wave."),
    tone(6, "Waq", "Flow", "Organic flow and dynamic equilibrium. Stability in motion, the rhythm of give and receive."),
    tone(7, "Wuq", "Mystical Center", "The mystic column, the center of the Tzolkin. Reflection, purpose, and the portal between worlds."),
    tone(8, "Wajxaq", "Harmony", "Harmony, abundance, and integration. The number of justice, balance achieved through wholeness."),
    tone(9, "B'elej", "Patience", "The completion of cycles, perseverance. Greater patience brings greater realization."),
    tone(10, "Lajuj", "Manifestation", "Manifestation in the material world. Challenge met, intention made real."),
    tone(11, "Jun Lajuj", "Resolution", "Dissolution and resolution. Simplification, letting go of what is not essential."),
    tone(12, "Ka' Lajuj", "Understanding", "Complex understanding, shared knowledge. Community wisdom and collective purpose."),
    tone(13, "Oxlajuj", "Transcendence", "The highest tone. Cosmic completion, ascension, and the doorway to the next cycle."),
];
