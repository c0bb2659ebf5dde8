//! Templated narrative text composed from the derived numbers and sign.
//! Every lookup has an explicit default, so nothing here can fail.

use crate::core::zodiac::{Element, ZodiacSign};

fn year_theme(personal_year: u32) -> &'static str {
    match personal_year {
        1 => "a year of new beginnings, fresh energy, and decisive action",
        2 => "a year of patience, cooperation, and relationship building",
        3 => "a year of creativity, self-expression, and social visibility",
        4 => "a year of hard work, systems, and laying reliable foundations",
        5 => "a year of change, travel, and surprising opportunities",
        6 => "a year of family focus, responsibility, and healing",
        7 => "a year of learning, reflection, and inner growth",
        8 => "a year of ambition, career momentum, and financial discipline",
        9 => "a year of completion, release, and compassionate service",
        _ => "a meaningful, balanced cycle",
    }
}

fn element_flavor(element: Element) -> &'static str {
    match element {
        Element::Fire => "Lean into bold moves and leadership.",
        Element::Earth => "Stay steady; practical steps will compound.",
        Element::Air => "Network widely and communicate your ideas.",
        Element::Water => "Trust intuition and protect your emotional bandwidth.",
    }
}

pub fn future_prediction(personal_year: u32, sign: ZodiacSign) -> String {
    let core = year_theme(personal_year);
    let flavor = element_flavor(sign.element());
    format!("Expect {core}. {flavor} Focus on one clear priority each quarter to harness this cycle.")
}

fn element_colors(element: Element) -> &'static str {
    match element {
        Element::Fire => "red/orange",
        Element::Earth => "green/brown",
        Element::Air => "sky blue/white",
        Element::Water => "sea blue/silver",
    }
}

fn life_path_tip(life_path: u32) -> &'static str {
    match life_path {
        1 => "start at dawn and set a single bold intention",
        2 => "practice breathwork to balance emotions",
        3 => "write three affirmations out loud",
        4 => "organize your space for 15 minutes",
        5 => "take a brisk walk and welcome change",
        6 => "call a loved one and offer support",
        7 => "meditate in silence for seven minutes",
        8 => "review finances and set weekly targets",
        9 => "donate or help someone without recognition",
        // Master numbers land here on purpose.
        _ => "take one small mindful action",
    }
}

fn weekday_flow(weekday: &str) -> &'static str {
    match weekday {
        "Monday" => "nurture and reset",
        "Tuesday" => "act courageously",
        "Wednesday" => "learn and connect",
        "Thursday" => "plan growth moves",
        "Friday" => "heal relationships",
        "Saturday" => "tidy and structure",
        "Sunday" => "reflect and recharge",
        _ => "stay balanced",
    }
}

pub fn remedies(sign: ZodiacSign, life_path: u32, weekday: &str) -> String {
    let colors = element_colors(sign.element());
    let flow = weekday_flow(weekday);
    let tip = life_path_tip(life_path);
    format!(
        "Wear or visualize {colors} for alignment. Today, {flow}; \
         to harmonize your path {tip}. A short gratitude note before sleep will amplify results."
    )
}

fn relationship_tone(sign: ZodiacSign) -> &'static str {
    match sign {
        ZodiacSign::Aries => "dynamic partnership that thrives on shared adventures",
        ZodiacSign::Taurus => "steady, affectionate bond built on reliability",
        ZodiacSign::Gemini => "playful, chatty connection that needs variety",
        ZodiacSign::Cancer => "deeply caring home life with strong emotional roots",
        ZodiacSign::Leo => "warm, generous romance that loves celebration",
        ZodiacSign::Virgo => "thoughtful, service-oriented teamwork with routines",
        ZodiacSign::Libra => "harmonious, elegant union centered on fairness",
        ZodiacSign::Scorpio => "intense, loyal commitment with private depth",
        ZodiacSign::Sagittarius => "expansive, freedom-loving bond with exploration",
        ZodiacSign::Capricorn => "devoted, long-term alliance with shared goals",
        ZodiacSign::Aquarius => "open-minded, future-focused partnership",
        ZodiacSign::Pisces => "gentle, empathetic union with spiritual connection",
    }
}

fn destiny_hint(destiny: u32) -> &'static str {
    match destiny {
        1 => "Lead with appreciation, not competition.",
        2 => "Make space for feelings and gentle check-ins.",
        3 => "Keep dates creative and conversations flowing.",
        4 => "Schedule quality time; reliability builds romance.",
        5 => "Travel together or try new hobbies to bond.",
        6 => "Prioritize home rituals and mutual care.",
        7 => "Share inner worlds and protect quiet time.",
        8 => "Set shared ambitions and celebrate progress.",
        9 => "Practice forgiveness and acts of service.",
        11 => "Honor intuition; listen between the lines.",
        22 => "Build something lasting together: a home or a mission.",
        33 => "Lead with compassion; avoid self-sacrifice.",
        _ => "Communicate openly and keep promises.",
    }
}

pub fn marriage_life_outlook(sign: ZodiacSign, destiny: u32) -> String {
    let tone = relationship_tone(sign);
    let hint = destiny_hint(destiny);
    format!("Marriage outlook: {tone}. {hint}")
}
