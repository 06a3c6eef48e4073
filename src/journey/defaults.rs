//! Journeys that ship with the crate. A guest document with the same slug replaces them.

use super::{
    model::{
        DayActivity, DayThread, GuestJourney, GuestNawal, JourneyContent, JourneyDay,
        JourneyIntegration,
    },
    registry::JourneyRegistry,
};

pub fn hardcoded() -> JourneyRegistry {
    [galii()].into_iter().collect()
}

fn day(date: &str, title: &str, description: &str, activities: &[(&str, &str)]) -> JourneyDay {
    JourneyDay {
        date: date.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        activities: activities
            .iter()
            .map(|(time_of_day, activity)| DayActivity {
                time_of_day: time_of_day.to_string(),
                activity: activity.to_string(),
            })
            .collect(),
    }
}

fn thread(display_name: &str, english_name: &str, summary: &str) -> DayThread {
    DayThread {
        display_name: display_name.to_string(),
        english_name: english_name.to_string(),
        summary: summary.to_string(),
    }
}

fn galii() -> GuestJourney {
    GuestJourney {
        guest_name: Some(String::from("Galii")),
        location_name: String::from("Templia Art"),
        location_subtitle: String::from("Aldea Zama"),
        check_in: String::from("2026-02-10"),
        check_out: String::from("2026-02-12"),
        content: galii_en(),
        es: Some(galii_es()),
    }
}

fn galii_en() -> JourneyContent {
    JourneyContent {
        welcome_message: Some(String::from(
            "You have arrived at Templia at a meaningful moment in your journey, Galii. It is not a coincidence. The Maya understood that every day carries its own living energy — and the days of your stay were chosen long before you were.\n\n\
             What follows is a guide to the energies present during your time at Templia — a map of the influences, symbols, and intentions that accompany you while you are in the land of the Maya.",
        )),
        nawal: GuestNawal {
            display_name: String::from("1 Iq' · Wind"),
            tone_name: String::from("Tone 1 (Jun) · The Breath of Life"),
            tone_description: String::from(
                "Unity — the beginning, the point of origin. Pure potential, undivided wholeness.",
            ),
            day_sign_description: String::from(
                "Iq' is the Wind — the invisible breath that moves through all things, the communication between worlds, the spirit made audible in rustling leaves and sudden gusts.",
            ),
            birthday: Some(String::from("August 20, 1994")),
            poetic_title: String::from("The Breath That Guides You"),
            body_text: String::from(
                "Your nawal, 1 Iq', carries the energy of pure origin meeting the breath of life. Wind is the messenger — it carries prayers upward, scatters seeds across the earth, and whispers truths that the rational mind cannot hear. Throughout your journey at Templia, notice the wind. When it touches your skin, pause. It is speaking to you.",
            ),
        },
        days: vec![
            day(
                "2026-02-10",
                "Arrival & Purification",
                "Kawoq channels the Divine Feminine — the storm that washes clean, the rain that nourishes new growth. The number 6 (Waq) brings stability and flow, a gentle equilibrium between releasing what you carried and opening to what awaits.",
                &[
                    ("Late Afternoon", "Arrive at Templia. Walk the jungle garden barefoot, letting the earth receive the weight of your travel. Sit by the Mayan firepit and listen to the sounds of the jungle settling into evening."),
                    ("Evening", "Dinner in Aldea Zama — Mamazul Mezcalería for ceremonial mezcal and contemporary Mexican cuisine, ARCA for wood-fired dishes and natural wine, or Safari Comedor Zama for jungle-set dining."),
                    ("Night", "Steam shower ritual at Templia. Let the water carry away anything you no longer need. Before sleep, set a single intention for your stay. Keep a dream journal by your bed — tomorrow's sign will listen."),
                ],
            ),
            day(
                "2026-02-11",
                "Illumination & Heroism",
                "Ajpu is the final day sign of the Tzolkin — the Lord, the Sun, the Hero who has walked through all twenty faces of creation and emerged whole. The number 7 (Wuq) is the mystical center, the column of light at the heart of the sacred calendar. This is the core of your journey.",
                &[
                    ("Sunrise", "Rise before dawn. Stand facing east and take seven deep breaths — one for each level of the heavens. Nourish yourself with a slow, intentional breakfast."),
                    ("Morning", "Tulum Ruins — El Castillo at dawn. This clifftop temple was called Zama, meaning \"dawn.\" Walk slowly among the structures, honoring the ancestors who built a solar temple where the first light touches the continent."),
                    ("Midday", "Sacred cenote swim — Gran Cenote or Cenote Calavera. Descend into the earth's memory. The Maya believed cenotes were portals to Xibalba, the underworld where the Hero Twins proved their light could survive the darkness."),
                    ("Afternoon", "Cacao ceremony or Temazcal sweat lodge. Let the heart-opening medicine of ceremonial cacao guide your afternoon, or enter the womb of the Temazcal to be reborn through fire, stone, and prayer."),
                    ("Evening", "Light the Mayan firepit at Templia. Reflect by the flames on what the day illuminated. Cook an intentional meal — simple, nourishing, prepared with presence."),
                ],
            ),
            day(
                "2026-02-12",
                "Primordial Waters & Departure",
                "Imox is the first day sign — the cosmic womb, the primordial waters from which all creation emerges. On your final morning, you return to the beginning. The number 8 (Wajxaq) brings harmony and abundance — a sense that everything received is enough, and more than enough.",
                &[
                    ("Early Morning", "Write down your dreams immediately upon waking. Imox is the day sign most deeply connected to the dream world — whatever visited you in the night carries a message."),
                    ("Water Ritual", "Step into Templia's pool, or simply hold water in both hands. Thank the land, the cenotes, and the sea for holding space for your transformation. Let the water receive one final offering of gratitude."),
                    ("Departure", "Light breakfast, pack with intention. Before you leave, stand once more in Templia's double-height living space. Look up at where the jungle canopy meets the architecture. Carry this threshold with you."),
                ],
            ),
        ],
        integration: JourneyIntegration {
            title: String::from("The Thread of Wind"),
            body_text: String::from("How the energies wove through your journey"),
            day_threads: vec![
                thread("6 Kawoq", "The Storm", "Cleansed and prepared you, washing away what you carried from home. The Divine Feminine held space for your arrival."),
                thread("7 Ajpu", "The Sun", "Illuminated the core of your journey — sacred sites, waters, fire — and asked you to meet your own light at the mystical center."),
                thread("8 Imox", "The Crocodile", "Gathered everything into the primordial waters of intuition, sending you forward with deeper trust in what you cannot see."),
            ],
            closing_text: String::from(
                "Through it all, your nawal 1 Iq' (Wind) was the invisible thread — the breath connecting each moment, the unseen force that makes the jungle sway. You arrived on Storm, were illuminated by Sun, and departed through the Primordial Waters. The Wind carried you through every passage.",
            ),
        },
        recommendations: None,
    }
}

fn galii_es() -> JourneyContent {
    JourneyContent {
        welcome_message: Some(String::from(
            "Has llegado a Templia en un momento significativo de tu camino, Galii. No es una coincidencia. Los mayas entendían que cada día lleva su propia energía viva — y los días de tu estadía fueron elegidos mucho antes que tú.\n\n\
             Lo que sigue es una guía de las energías presentes durante tu tiempo en Templia — un mapa de las influencias, símbolos e intenciones que te acompañan mientras estás en la tierra de los mayas.",
        )),
        nawal: GuestNawal {
            display_name: String::from("1 Iq' · Viento"),
            tone_name: String::from("Tono 1 (Jun) · El Soplo de Vida"),
            tone_description: String::from(
                "Unidad — el comienzo, el punto de origen. Potencial puro, totalidad indivisa.",
            ),
            day_sign_description: String::from(
                "Iq' es el Viento — el soplo invisible que se mueve a través de todas las cosas, la comunicación entre mundos, el espíritu hecho audible en el susurro de las hojas y las ráfagas repentinas.",
            ),
            birthday: Some(String::from("20 de agosto de 1994")),
            poetic_title: String::from("El Aliento Que Te Guía"),
            body_text: String::from(
                "Tu nawal, 1 Iq', lleva la energía del origen puro encontrándose con el soplo de vida. El Viento es el mensajero — lleva las plegarias hacia lo alto, esparce semillas por la tierra y susurra verdades que la mente racional no puede escuchar. A lo largo de tu viaje en Templia, observa el viento. Cuando toque tu piel, haz una pausa. Te está hablando.",
            ),
        },
        days: vec![
            day(
                "2026-02-10",
                "Llegada y Purificación",
                "Kawoq canaliza el Femenino Divino — la tormenta que limpia, la lluvia que nutre nuevos brotes. El número 6 (Waq) trae estabilidad y flujo, un equilibrio suave entre soltar lo que cargabas y abrirte a lo que te espera.",
                &[
                    ("Tarde", "Llega a Templia. Camina descalzo por el jardín de la selva, dejando que la tierra reciba el peso de tu viaje. Siéntate junto al fogón maya y escucha los sonidos de la selva al caer la noche."),
                    ("Noche", "Cena en Aldea Zama — Mamazul Mezcalería para mezcal ceremonial y cocina mexicana contemporánea, ARCA para platillos al fuego de leña y vino natural, o Safari Comedor Zama para cenar entre la selva."),
                    ("Antes de Dormir", "Ritual de vapor en la regadera de Templia. Deja que el agua se lleve todo lo que ya no necesitas. Antes de dormir, establece una sola intención para tu estadía. Mantén un diario de sueños junto a tu cama — el signo de mañana escuchará."),
                ],
            ),
            day(
                "2026-02-11",
                "Iluminación y Heroísmo",
                "Ajpu es el último signo del Tzolkin — el Señor, el Sol, el Héroe que ha recorrido las veinte caras de la creación y ha emergido completo. El número 7 (Wuq) es el centro místico, la columna de luz en el corazón del calendario sagrado. Este es el núcleo de tu viaje.",
                &[
                    ("Amanecer", "Levántate antes del alba. De pie mirando al este, toma siete respiraciones profundas — una por cada nivel de los cielos. Nutre tu cuerpo con un desayuno lento e intencional."),
                    ("Mañana", "Ruinas de Tulum — El Castillo al amanecer. Este templo sobre el acantilado fue llamado Zama, que significa «amanecer». Camina lentamente entre las estructuras, honrando a los ancestros que construyeron un templo solar donde la primera luz toca el continente."),
                    ("Mediodía", "Nado sagrado en cenote — Gran Cenote o Cenote Calavera. Desciende a la memoria de la tierra. Los mayas creían que los cenotes eran portales a Xibalbá, el inframundo donde los Héroes Gemelos demostraron que su luz podía sobrevivir la oscuridad."),
                    ("Tarde", "Ceremonia de cacao o Temazcal. Deja que la medicina del cacao ceremonial, que abre el corazón, guíe tu tarde, o entra al vientre del Temazcal para renacer a través del fuego, la piedra y la oración."),
                    ("Noche", "Enciende el fogón maya en Templia. Reflexiona junto a las llamas sobre lo que el día iluminó. Prepara una comida intencional — simple, nutritiva, preparada con presencia."),
                ],
            ),
            day(
                "2026-02-12",
                "Aguas Primordiales y Partida",
                "Imox es el primer signo — el vientre cósmico, las aguas primordiales de las que toda creación emerge. En tu última mañana, regresas al principio. El número 8 (Wajxaq) trae armonía y abundancia — la sensación de que todo lo recibido es suficiente, y más que suficiente.",
                &[
                    ("Temprano", "Escribe tus sueños inmediatamente al despertar. Imox es el signo más profundamente conectado con el mundo onírico — lo que te visitó en la noche lleva un mensaje."),
                    ("Ritual de Agua", "Entra a la piscina de Templia, o simplemente sostén agua en ambas manos. Agradece a la tierra, a los cenotes y al mar por sostener el espacio para tu transformación. Deja que el agua reciba una última ofrenda de gratitud."),
                    ("Partida", "Desayuno ligero, empaca con intención. Antes de irte, párate una vez más en el espacio de doble altura de Templia. Mira hacia donde la selva se encuentra con la arquitectura. Llévate este umbral contigo."),
                ],
            ),
        ],
        integration: JourneyIntegration {
            title: String::from("El Hilo del Viento"),
            body_text: String::from("Cómo las energías se tejieron a lo largo de tu viaje"),
            day_threads: vec![
                thread("6 Kawoq", "La Tormenta", "Te limpió y preparó, lavando lo que traías de casa. El Femenino Divino sostuvo el espacio para tu llegada."),
                thread("7 Ajpu", "El Sol", "Iluminó el corazón de tu viaje — sitios sagrados, aguas, fuego — y te pidió encontrarte con tu propia luz en el centro místico."),
                thread("8 Imox", "El Cocodrilo", "Reunió todo en las aguas primordiales de la intuición, enviándote hacia adelante con una confianza más profunda en lo que no puedes ver."),
            ],
            closing_text: String::from(
                "A lo largo de todo, tu nawal 1 Iq' (Viento) fue el hilo invisible — el aliento conectando cada momento, la fuerza invisible que hace mecer la selva. Llegaste con la Tormenta, fuiste iluminado por el Sol, y partiste a través de las Aguas Primordiales. El Viento te llevó por cada pasaje.",
            ),
        },
        recommendations: None,
    }
}
