use chrono::{Datelike, NaiveDate};

/// Master numbers are never reduced further.
const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce to a single digit, halting early at 11, 22 or 33.
pub fn reduce_master(mut n: u32) -> u32 {
    while n > 9 && !MASTER_NUMBERS.contains(&n) {
        n = digit_sum(n);
    }
    n
}

/// Reduce to a single digit 1-9 with no master-number halt. Personal year
/// cycles use this variant; life path, destiny and lucky number do not.
pub fn reduce_single(mut n: u32) -> u32 {
    while n > 9 {
        n = digit_sum(n);
    }
    n
}

/// Sum of all numeric characters in the normalized (YYYY-MM-DD) date
/// string, reduced with master numbers preserved.
pub fn life_path(date_digits: &str) -> u32 {
    let total = date_digits.chars().filter_map(|c| c.to_digit(10)).sum();
    reduce_master(total)
}

/// Pythagorean letter values: a,j,s=1 b,k,t=2 c,l,u=3 d,m,v=4 e,n,w=5
/// f,o,x=6 g,p,y=7 h,q,z=8 i,r=9. Anything else contributes 0.
fn letter_value(c: char) -> u32 {
    match c.to_ascii_lowercase() {
        'a' | 'j' | 's' => 1,
        'b' | 'k' | 't' => 2,
        'c' | 'l' | 'u' => 3,
        'd' | 'm' | 'v' => 4,
        'e' | 'n' | 'w' => 5,
        'f' | 'o' | 'x' => 6,
        'g' | 'p' | 'y' => 7,
        'h' | 'q' | 'z' => 8,
        'i' | 'r' => 9,
        _ => 0,
    }
}

pub fn destiny_number(name: &str) -> u32 {
    let total = name.chars().map(letter_value).sum();
    reduce_master(total)
}

/// Numerology personal year: digits of MMDD plus the current calendar
/// year, fully reduced to 1-9.
pub fn personal_year(date: NaiveDate, today: NaiveDate) -> u32 {
    let digits = format!("{:02}{:02}{}", date.month(), date.day(), today.year());
    let total = digits.chars().filter_map(|c| c.to_digit(10)).sum();
    reduce_single(total)
}

pub fn weekday_value(weekday: &str) -> u32 {
    match weekday {
        "Monday" => 2,
        "Tuesday" => 9,
        "Wednesday" => 5,
        "Thursday" => 3,
        "Friday" => 6,
        "Saturday" => 8,
        "Sunday" => 1,
        _ => 7,
    }
}

pub fn lucky_number(life_path: u32, destiny: u32, weekday: &str) -> u32 {
    reduce_master(life_path + destiny + weekday_value(weekday))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduction_is_idempotent_on_reduced_values() {
        for n in (1..=9).chain([11, 22, 33]) {
            assert_eq!(reduce_master(n), n);
        }
        for n in 1..=9 {
            assert_eq!(reduce_single(n), n);
        }
    }

    #[test]
    fn master_numbers_halt_reduction() {
        assert_eq!(reduce_master(11), 11);
        assert_eq!(reduce_master(22), 22);
        assert_eq!(reduce_master(33), 33);
        // 29 -> 11 stays put; 38 -> 11 as well.
        assert_eq!(reduce_master(29), 11);
        assert_eq!(reduce_master(38), 11);
    }

    #[test]
    fn single_digit_reduction_passes_master_numbers() {
        assert_eq!(reduce_single(11), 2);
        assert_eq!(reduce_single(22), 4);
        assert_eq!(reduce_single(33), 6);
    }

    #[test]
    fn life_path_sums_date_digits() {
        // 1+9+9+0+0+5+1+5 = 30 -> 3
        assert_eq!(life_path("1990-05-15"), 3);
    }

    #[test]
    fn destiny_preserves_master_numbers() {
        // a=1, n=5, n=5 -> 11, kept as a master number
        assert_eq!(destiny_number("Ann"), 11);
    }

    #[test]
    fn destiny_is_case_insensitive() {
        assert_eq!(destiny_number("Ann"), destiny_number("ann"));
        assert_eq!(destiny_number("Ann"), destiny_number("ANN"));
    }

    #[test]
    fn destiny_ignores_non_alphabetic_characters() {
        assert_eq!(destiny_number("Ann"), destiny_number("A-n n!3"));
        assert_eq!(destiny_number(""), 0);
    }

    #[test]
    fn personal_year_reduces_fully() {
        let dob = NaiveDate::from_ymd_opt(1990, 5, 15).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        // 0+5+1+5 + 2+0+2+6 = 21 -> 3
        assert_eq!(personal_year(dob, today), 3);

        // 0+2+2+9 + 2+0+2+5 = 22, a master number elsewhere, reduced here: 4
        let dob = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(personal_year(dob, today), 4);
    }

    #[test]
    fn lucky_number_adds_weekday_value() {
        // 3 + 11 + Tuesday(9) = 23 -> 5
        assert_eq!(lucky_number(3, 11, "Tuesday"), 5);
        // Unknown weekday defaults to 7: 3 + 11 + 7 = 21 -> 3
        assert_eq!(lucky_number(3, 11, "Someday"), 3);
    }
}
