use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl ZodiacSign {
    pub fn element(&self) -> Element {
        match self {
            ZodiacSign::Aries | ZodiacSign::Leo | ZodiacSign::Sagittarius => Element::Fire,
            ZodiacSign::Taurus | ZodiacSign::Virgo | ZodiacSign::Capricorn => Element::Earth,
            ZodiacSign::Gemini | ZodiacSign::Libra | ZodiacSign::Aquarius => Element::Air,
            ZodiacSign::Cancer | ZodiacSign::Scorpio | ZodiacSign::Pisces => Element::Water,
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign_str = match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        };
        write!(f, "{}", sign_str)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let element_str = match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        };
        write!(f, "{}", element_str)
    }
}

/// ((start month, start day), (end month, end day), sign). The ranges cover
/// the whole year; Capricorn spans the December/January boundary and also
/// serves as the fallback arm.
const SIGN_RANGES: [((u32, u32), (u32, u32), ZodiacSign); 12] = [
    ((1, 20), (2, 18), ZodiacSign::Aquarius),
    ((2, 19), (3, 20), ZodiacSign::Pisces),
    ((3, 21), (4, 19), ZodiacSign::Aries),
    ((4, 20), (5, 20), ZodiacSign::Taurus),
    ((5, 21), (6, 20), ZodiacSign::Gemini),
    ((6, 21), (7, 22), ZodiacSign::Cancer),
    ((7, 23), (8, 22), ZodiacSign::Leo),
    ((8, 23), (9, 22), ZodiacSign::Virgo),
    ((9, 23), (10, 22), ZodiacSign::Libra),
    ((10, 23), (11, 21), ZodiacSign::Scorpio),
    ((11, 22), (12, 21), ZodiacSign::Sagittarius),
    ((12, 22), (1, 19), ZodiacSign::Capricorn),
];

pub fn resolve(day: u32, month: u32) -> ZodiacSign {
    for ((start_month, start_day), (end_month, end_day), sign) in SIGN_RANGES {
        if (month == start_month && day >= start_day) || (month == end_month && day <= end_day) {
            return sign;
        }
    }
    ZodiacSign::Capricorn
}
