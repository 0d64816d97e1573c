//! Normalizers: raw matched text to typed values.
//!
//! Relative dates resolve against the reference time of the run. Weeks run
//! Monday to Sunday; months are calendar months. A date shape that names an
//! impossible day (`31.02.2024`) is returned as text.

use crate::value::{Currency, Money, PersonName, Status, Value};
use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime};

pub(crate) fn normalize_date(body: &str, reference: NaiveDateTime) -> Value {
    let lower = body.to_lowercase();
    let today = reference.date();
    let text = || Value::Text(body.to_string());

    if lower.contains("bugün") || lower.contains("today") {
        return Value::Date(today);
    }
    if lower.contains("dün") || lower.contains("yesterday") {
        return today.checked_sub_days(Days::new(1)).map_or_else(text, Value::Date);
    }
    if lower.contains("yarın") || lower.contains("tomorrow") {
        return today.checked_add_days(Days::new(1)).map_or_else(text, Value::Date);
    }

    if let Some(caps) = regex!(r"son\s+(\d+)\s+(gün|hafta|ay)").captures(&lower) {
        let Ok(n) = caps[1].parse::<u32>() else {
            return text();
        };
        let start = match &caps[2] {
            "gün" => today.checked_sub_days(Days::new(u64::from(n))),
            "hafta" => today.checked_sub_days(Days::new(u64::from(n) * 7)),
            _ => today.checked_sub_months(Months::new(n)),
        };
        return start.map_or_else(text, |start| Value::DateRange { start, end: today });
    }

    if let Some(offset) = relative_offset(&lower, "hafta", "week") {
        return week_range(today, offset).map_or_else(text, |(start, end)| Value::DateRange { start, end });
    }
    if let Some(offset) = relative_offset(&lower, "ay", "month") {
        return month_range(today, offset).map_or_else(text, |(start, end)| Value::DateRange { start, end });
    }

    absolute_date(body).map_or_else(text, Value::Date)
}

/// `-1`, `0` or `1` for "geçen/bu/gelecek <tr>" and "last/this/next <en>".
fn relative_offset(lower: &str, tr: &str, en: &str) -> Option<i32> {
    let words: Vec<&str> = lower.split_whitespace().collect();
    match words.as_slice() {
        [modifier, unit] if *unit == tr || *unit == en => match *modifier {
            "geçen" | "last" => Some(-1),
            "bu" | "this" => Some(0),
            "gelecek" | "next" => Some(1),
            _ => None,
        },
        _ => None,
    }
}

fn week_range(today: NaiveDate, offset: i32) -> Option<(NaiveDate, NaiveDate)> {
    let monday = today.checked_sub_days(Days::new(u64::from(today.weekday().num_days_from_monday())))?;
    let start = match offset {
        o if o < 0 => monday.checked_sub_days(Days::new(7 * u64::from(o.unsigned_abs())))?,
        o => monday.checked_add_days(Days::new(7 * u64::from(o.unsigned_abs())))?,
    };
    Some((start, start.checked_add_days(Days::new(6))?))
}

fn month_range(today: NaiveDate, offset: i32) -> Option<(NaiveDate, NaiveDate)> {
    let first = today.with_day(1)?;
    let start = match offset {
        o if o < 0 => first.checked_sub_months(Months::new(o.unsigned_abs()))?,
        o => first.checked_add_months(Months::new(o.unsigned_abs()))?,
    };
    let end = start.checked_add_months(Months::new(1))?.pred_opt()?;
    Some((start, end))
}

fn absolute_date(body: &str) -> Option<NaiveDate> {
    let (year, month, day) = if let Some(caps) = regex!(r"(\d{1,2})[./](\d{1,2})[./](\d{4})").captures(body) {
        (caps[3].parse().ok()?, caps[2].parse().ok()?, caps[1].parse().ok()?)
    } else {
        let caps = regex!(r"(\d{4})-(\d{1,2})-(\d{1,2})").captures(body)?;
        (caps[1].parse().ok()?, caps[2].parse().ok()?, caps[3].parse().ok()?)
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Amount from the leading number (first `,` read as the decimal point) and
/// currency from the unit, TRY when none of the others is named.
pub(crate) fn normalize_money(body: &str) -> Money {
    let cleaned: String = body.chars().filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',').collect();
    let cleaned = cleaned.replacen(',', ".", 1);
    let amount = regex!(r"\d+(?:\.\d+)?").find(&cleaned).and_then(|m| m.as_str().parse::<f64>().ok()).unwrap_or(0.0);

    let lower = body.to_lowercase();
    let names = |units: &[&str]| units.iter().any(|u| lower.contains(*u));
    let currency = if names(&["euro", "eur", "€"]) {
        Currency::Eur
    } else if names(&["dolar", "dollar", "usd", "$"]) {
        Currency::Usd
    } else if names(&["pound", "gbp", "£"]) {
        Currency::Gbp
    } else {
        Currency::Try
    };

    Money { amount, currency }
}

/// `+90XXXXXXXXXX` for national (leading 0), bare ten-digit and
/// country-coded forms; anything else is returned unchanged.
pub(crate) fn normalize_phone(body: &str) -> String {
    let digits: String = body.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        11 if digits.starts_with('0') => format!("+90{}", &digits[1..]),
        10 => format!("+90{digits}"),
        12 if digits.starts_with("90") => format!("+{digits}"),
        _ => body.to_string(),
    }
}

pub(crate) fn normalize_person(body: &str) -> PersonName {
    let mut parts = body.split_whitespace();
    let first_name = parts.next().unwrap_or_default().to_string();
    let last_name = parts.collect::<Vec<_>>().join(" ");
    PersonName { first_name, last_name, full_name: body.trim().to_string() }
}

/// Integer value of the digits in `body`; no digits reads as zero. Digit runs
/// too long for `i64` (account numbers, IBANs) are kept as text.
pub(crate) fn normalize_number(body: &str) -> Value {
    let digits: String = body.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Value::Number(0);
    }
    digits.parse().map_or_else(|_| Value::Text(body.to_string()), Value::Number)
}

pub(crate) fn normalize_status(body: &str) -> Value {
    Status::from_word(body).map_or_else(|| Value::Text(body.to_string()), Value::Status)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> NaiveDateTime {
        // Friday
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range(start: NaiveDate, end: NaiveDate) -> Value {
        Value::DateRange { start, end }
    }

    #[test]
    fn relative_days() {
        assert_eq!(normalize_date("Bugün", reference()), Value::Date(date(2024, 3, 15)));
        assert_eq!(normalize_date("yesterday", reference()), Value::Date(date(2024, 3, 14)));
        assert_eq!(normalize_date("yarın", reference()), Value::Date(date(2024, 3, 16)));
    }

    #[test]
    fn last_n_units_end_at_reference() {
        assert_eq!(normalize_date("son 7 gün", reference()), range(date(2024, 3, 8), date(2024, 3, 15)));
        assert_eq!(normalize_date("son 2 hafta", reference()), range(date(2024, 3, 1), date(2024, 3, 15)));
        assert_eq!(normalize_date("Son 1 ay", reference()), range(date(2024, 2, 15), date(2024, 3, 15)));
    }

    #[test]
    fn weeks_run_monday_to_sunday() {
        assert_eq!(normalize_date("bu hafta", reference()), range(date(2024, 3, 11), date(2024, 3, 17)));
        assert_eq!(normalize_date("geçen hafta", reference()), range(date(2024, 3, 4), date(2024, 3, 10)));
        assert_eq!(normalize_date("next week", reference()), range(date(2024, 3, 18), date(2024, 3, 24)));
    }

    #[test]
    fn months_are_calendar_months() {
        assert_eq!(normalize_date("bu ay", reference()), range(date(2024, 3, 1), date(2024, 3, 31)));
        assert_eq!(normalize_date("geçen ay", reference()), range(date(2024, 2, 1), date(2024, 2, 29)));
        assert_eq!(normalize_date("gelecek ay", reference()), range(date(2024, 4, 1), date(2024, 4, 30)));
    }

    #[test]
    fn absolute_dates_and_impossible_days() {
        assert_eq!(normalize_date("15.03.2024", reference()), Value::Date(date(2024, 3, 15)));
        assert_eq!(normalize_date("1/12/2023", reference()), Value::Date(date(2023, 12, 1)));
        assert_eq!(normalize_date("2024-3-5", reference()), Value::Date(date(2024, 3, 5)));
        assert_eq!(normalize_date("31.02.2024", reference()), Value::Text("31.02.2024".to_string()));
    }

    #[test]
    fn money_amount_and_currency() {
        assert_eq!(normalize_money("500 TL"), Money { amount: 500.0, currency: Currency::Try });
        assert_eq!(normalize_money("12,75 €"), Money { amount: 12.75, currency: Currency::Eur });
        assert_eq!(normalize_money("40 dolar"), Money { amount: 40.0, currency: Currency::Usd });
        assert_eq!(normalize_money("3.5GBP"), Money { amount: 3.5, currency: Currency::Gbp });
        assert_eq!(normalize_money("10 lira"), Money { amount: 10.0, currency: Currency::Try });
    }

    #[test]
    fn phone_forms() {
        assert_eq!(normalize_phone("05321234567"), "+905321234567");
        assert_eq!(normalize_phone("532 123 45 67"), "+905321234567");
        assert_eq!(normalize_phone("+90 532 123 45 67"), "+905321234567");
        assert_eq!(normalize_phone("12345"), "12345");
    }

    #[test]
    fn person_number_status() {
        let person = normalize_person("Mehmet Ali Kaya");
        assert_eq!(person.first_name, "Mehmet");
        assert_eq!(person.last_name, "Ali Kaya");
        assert_eq!(person.full_name, "Mehmet Ali Kaya");

        assert_eq!(normalize_number("0042"), Value::Number(42));
        assert_eq!(normalize_number("x"), Value::Number(0));
        assert_eq!(normalize_number("9223372036854775807"), Value::Number(i64::MAX));
        assert_eq!(
            normalize_number("123456789012345678901234"),
            Value::Text("123456789012345678901234".to_string())
        );

        assert_eq!(normalize_status("Aktif"), Value::Status(Status::Active));
        assert_eq!(normalize_status("PENDING"), Value::Status(Status::Pending));
        assert_eq!(normalize_status("arşiv"), Value::Text("arşiv".to_string()));
        assert_eq!(normalize_status("iptal"), Value::Status(Status::Cancelled));
    }
}
