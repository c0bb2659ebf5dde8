use crate::core::{date, narrative, numerology, zodiac};
use crate::domain::model::{LookupTables, Profile};
use crate::utils::error::Result;
use chrono::{Datelike, NaiveDate};

/// Build the full profile from a name and a loosely formatted birth date.
/// Pure: the only failure mode is an unparseable date, and `today` is
/// passed in so results are reproducible.
pub fn build_profile(
    name: &str,
    dob: &str,
    tables: &LookupTables,
    today: NaiveDate,
) -> Result<Profile> {
    let birth_date = date::parse(dob)?;

    let sign = zodiac::resolve(birth_date.day(), birth_date.month());
    let weekday = birth_date.format("%A").to_string();

    // Life path works off the normalized date so every accepted input
    // encoding of the same date yields the same number.
    let normalized = birth_date.format("%Y-%m-%d").to_string();
    let life_path = numerology::life_path(&normalized);
    let destiny = numerology::destiny_number(name);
    let personal_year = numerology::personal_year(birth_date, today);
    let lucky_number = numerology::lucky_number(life_path, destiny, &weekday);

    let sign_name = sign.to_string();
    let traits = tables
        .zodiac_traits
        .get(&sign_name)
        .cloned()
        .unwrap_or_default();
    let life_path_desc = tables
        .numerology
        .get(&life_path.to_string())
        .cloned()
        .unwrap_or_default();
    let destiny_desc = tables
        .numerology
        .get(&destiny.to_string())
        .cloned()
        .unwrap_or_default();

    Ok(Profile {
        name: name.to_string(),
        dob: dob.to_string(),
        age: age_in_years(birth_date, today),
        weekday: weekday.clone(),
        zodiac: sign_name,
        life_path,
        life_path_desc,
        destiny,
        destiny_desc,
        traits,
        lucky_number,
        personal_year,
        future_prediction: narrative::future_prediction(personal_year, sign),
        remedies: narrative::remedies(sign, life_path, &weekday),
        marriage_life: narrative::marriage_life_outlook(sign, destiny),
    })
}

/// Whole years between the birth date and `today`, one less before the
/// birthday has come around.
fn age_in_years(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}
