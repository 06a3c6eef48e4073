use super::{DaySign, Direction, Element};

/// The twenty day signs, in cycle order.
pub static DAY_SIGNS: [DaySign; 20] = [
    DaySign {
        number: 1,
        name: "Imox",
        english_name: "Crocodile",
        glyph: "🐊",
        svg_file: "imox.svg",
        themes: &["Primordial Waters", "Intuition", "New Beginnings"],
        element: Element::Water,
        direction: Direction::East,
        description: "Imox is the first day sign — the cosmic womb, the primordial waters from which all creation emerges. It governs intuition, the dream world, and the unconscious mind.",
    },
    DaySign {
        number: 2,
        name: "Iq'",
        english_name: "Wind",
        glyph: "🌬️",
        svg_file: "iq.svg",
        themes: &["Breath of Life", "Communication", "Spirit"],
        element: Element::Air,
        direction: Direction::North,
        description: "Iq' is the breath of life, the invisible force that moves through all things. It governs communication, inspiration, and the connection between the physical and spiritual worlds.",
    },
    DaySign {
        number: 3,
        name: "Aq'ab'al",
        english_name: "Night",
        glyph: "🌑",
        svg_file: "aqabal.svg",
        themes: &["Dawn", "Darkness", "Renewal"],
        element: Element::Earth,
        direction: Direction::West,
        description: "Aq'ab'al is the threshold between darkness and light, the moment before dawn. It governs renewal, inner reflection, and the courage to face the unknown.",
    },
    DaySign {
        number: 4,
        name: "K'at",
        english_name: "Net",
        glyph: "🕸️",
        svg_file: "kat.svg",
        themes: &["Abundance", "Gathering", "Entanglement"],
        element: Element::Fire,
        direction: Direction::South,
        description: "K'at is the sacred net that holds together all that we gather — blessings, memories, and lessons. It governs abundance but also warns of entanglement.",
    },
    DaySign {
        number: 5,
        name: "Kan",
        english_name: "Serpent",
        glyph: "🐍",
        svg_file: "kan.svg",
        themes: &["Life Force", "Kundalini", "Transformation"],
        element: Element::Water,
        direction: Direction::East,
        description: "Kan is the feathered serpent, Kukulkan — raw life force energy rising through the body. It governs vitality, sensuality, and the power of transformation.",
    },
    DaySign {
        number: 6,
        name: "Kame",
        english_name: "Death",
        glyph: "💀",
        svg_file: "kame.svg",
        themes: &["Transformation", "Ancestors", "Rebirth"],
        element: Element::Air,
        direction: Direction::North,
        description: "Kame is the sacred transformer — not an ending but a passage. It governs ancestral connection, the wisdom of letting go, and the rebirth that follows release.",
    },
    DaySign {
        number: 7,
        name: "Kej",
        english_name: "Deer",
        glyph: "🦌",
        svg_file: "kej.svg",
        themes: &["Harmony", "Four Pillars", "Nature"],
        element: Element::Earth,
        direction: Direction::West,
        description: "Kej is the deer, guardian of the four pillars that hold up the sky. It governs harmony with nature, leadership through grace, and the strength of gentleness.",
    },
    DaySign {
        number: 8,
        name: "Q'anil",
        english_name: "Seed",
        glyph: "🌱",
        svg_file: "qanil.svg",
        themes: &["Fertility", "Creation", "Ripening"],
        element: Element::Fire,
        direction: Direction::South,
        description: "Q'anil is the seed of life, the promise of harvest. It governs fertility, new projects, and the patient trust that what is planted will bloom.",
    },
    DaySign {
        number: 9,
        name: "Toj",
        english_name: "Offering",
        glyph: "🔥",
        svg_file: "toj.svg",
        themes: &["Gratitude", "Payment", "Sacred Fire"],
        element: Element::Water,
        direction: Direction::East,
        description: "Toj is the sacred offering, the fire ceremony. It governs gratitude, reciprocity with the cosmos, and the understanding that giving is the path to receiving.",
    },
    DaySign {
        number: 10,
        name: "Tz'i'",
        english_name: "Dog",
        glyph: "🐕",
        svg_file: "tzi.svg",
        themes: &["Loyalty", "Justice", "Authority"],
        element: Element::Air,
        direction: Direction::North,
        description: "Tz'i' is the faithful companion, guardian of justice and truth. It governs loyalty, the law of cause and effect, and the authority that comes from integrity.",
    },
    DaySign {
        number: 11,
        name: "B'atz'",
        english_name: "Monkey",
        glyph: "🐒",
        svg_file: "batz.svg",
        themes: &["Weaving", "Art", "Time"],
        element: Element::Earth,
        direction: Direction::West,
        description: "B'atz' is the cosmic weaver, the thread of time itself. It governs creativity, artistic expression, and the understanding that all of life is a tapestry being woven.",
    },
    DaySign {
        number: 12,
        name: "E",
        english_name: "Road",
        glyph: "🛤️",
        svg_file: "e.svg",
        themes: &["Destiny", "Path", "Travel"],
        element: Element::Fire,
        direction: Direction::South,
        description: "E is the sacred road, the path of destiny. It governs journeys both physical and spiritual, the courage to walk your path, and the guidance found along the way.",
    },
    DaySign {
        number: 13,
        name: "Aj",
        english_name: "Reed",
        glyph: "🎋",
        svg_file: "aj.svg",
        themes: &["Home", "Authority", "Backbone"],
        element: Element::Water,
        direction: Direction::East,
        description: "Aj is the reed, the backbone of the home and community. It governs domestic harmony, structural strength, and the authority that comes from standing tall.",
    },
    DaySign {
        number: 14,
        name: "Ix",
        english_name: "Jaguar",
        glyph: "🐆",
        svg_file: "ix.svg",
        themes: &["Earth Force", "Feminine Power", "Mystery"],
        element: Element::Air,
        direction: Direction::North,
        description: "Ix is the jaguar, the feminine power of the Earth. It governs the mysteries of nature, shamanic vision, and the deep intuitive wisdom of the wild.",
    },
    DaySign {
        number: 15,
        name: "Tz'ikin",
        english_name: "Eagle",
        glyph: "🦅",
        svg_file: "tzikin.svg",
        themes: &["Vision", "Freedom", "Prosperity"],
        element: Element::Earth,
        direction: Direction::West,
        description: "Tz'ikin is the eagle, the intermediary between heaven and earth. It governs expansive vision, spiritual freedom, and the abundance that comes from seeing the whole picture.",
    },
    DaySign {
        number: 16,
        name: "Ajmaq",
        english_name: "Owl",
        glyph: "🦉",
        svg_file: "ajmaq.svg",
        themes: &["Forgiveness", "Wisdom", "Ancestors"],
        element: Element::Fire,
        direction: Direction::South,
        description: "Ajmaq is the owl, keeper of ancestral wisdom. It governs forgiveness, the courage to face our shadow, and the deep wisdom that emerges from honest self-reflection.",
    },
    DaySign {
        number: 17,
        name: "No'j",
        english_name: "Earthquake",
        glyph: "🧠",
        svg_file: "noj.svg",
        themes: &["Knowledge", "Mind", "Movement"],
        element: Element::Water,
        direction: Direction::East,
        description: "No'j is the earthquake, the movement of thought. It governs the mind, knowledge, intellectual pursuit, and the understanding that true wisdom shakes the foundations.",
    },
    DaySign {
        number: 18,
        name: "Tijax",
        english_name: "Obsidian",
        glyph: "🗡️",
        svg_file: "tijax.svg",
        themes: &["Healing", "Cutting Away", "Truth"],
        element: Element::Air,
        direction: Direction::North,
        description: "Tijax is the obsidian blade, the healer's knife. It governs the power to cut away what no longer serves, truth that heals, and the precision of sacred medicine.",
    },
    DaySign {
        number: 19,
        name: "Kawoq",
        english_name: "Storm",
        glyph: "⛈️",
        svg_file: "kawoq.svg",
        themes: &["Purification", "Community", "Divine Feminine"],
        element: Element::Earth,
        direction: Direction::West,
        description: "Kawoq is the storm that purifies, the voice of the Divine Feminine. It governs community, fertility of the land, and the cleansing power that prepares new ground.",
    },
    DaySign {
        number: 20,
        name: "Ajpu",
        english_name: "Sun",
        glyph: "☀️",
        svg_file: "ajpu.svg",
        themes: &["Illumination", "Heroism", "Divine Wholeness"],
        element: Element::Fire,
        direction: Direction::South,
        description: "Ajpu is the Sun, the Lord of Light, the final day sign of the Tzolkin. It governs illumination, the hero's journey, and the divine wholeness that lives within each of us.",
    },
];
