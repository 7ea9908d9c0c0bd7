//! Implementation of the Brazilian national public holiday calendar with
//! fixed-date and Easter-derived movable holidays.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::env;

use crate::easter::{easter_sunday, InvalidEasterDate};

/// A single national holiday. Day and month are kept as zero-padded
/// two-digit strings: the sort in [`BrazilHolidayCalendar::holidays_for_year`]
/// and the match in [`BrazilHolidayCalendar::is_holiday`] both compare these
/// fields textually, which is equivalent to numeric ordering only because
/// both fields are fixed-width.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    pub name: String,
    pub day: String,
    pub month: String,
}

impl Holiday {
    pub fn new(name: &str, day: &str, month: &str) -> Holiday {
        Holiday {
            name: name.to_string(),
            day: day.to_string(),
            month: month.to_string(),
        }
    }

    /// Build a holiday from a calendar date, discarding the year.
    pub fn from_date(name: &str, date: NaiveDate) -> Holiday {
        Holiday {
            name: name.to_string(),
            day: format!("{:02}", date.day()),
            month: format!("{:02}", date.month()),
        }
    }

    /// The "DD/MM" rendering used by the membership query.
    pub fn date_key(&self) -> String {
        format!("{}/{}", self.day, self.month)
    }
}

/// Derive the movable holidays for a given year as day offsets from Easter
/// Sunday: Paixão de Cristo (Good Friday) at -2, the Carnival Monday and
/// Tuesday at -48 and -47, and Corpus Christi at +60.
pub fn movable_holidays(year: i32) -> Result<Vec<Holiday>, InvalidEasterDate> {
    let easter = easter_sunday(year)?;

    Ok(vec![
        Holiday::from_date("Paixão de Cristo", easter - Duration::days(2)),
        Holiday::from_date("Carnaval", easter - Duration::days(48)),
        Holiday::from_date("Carnaval", easter - Duration::days(47)),
        Holiday::from_date("Corpus Christi", easter + Duration::days(60)),
    ])
}

/// Calendar of Brazilian national holidays
#[derive(Debug, Clone)]
pub struct BrazilHolidayCalendar {
    fixed_holidays: Vec<Holiday>,
}

impl BrazilHolidayCalendar {
    /// Create a calendar holding the 8 national fixed-date holidays.
    /// Extra fixed holidays may be appended through the `EXTRA_HOLIDAYS`
    /// environment variable, a JSON array of `{name, day, month}` objects.
    pub fn with_default_holidays() -> BrazilHolidayCalendar {
        let mut fixed_holidays = vec![
            Holiday::new("Confraternização Universal", "01", "01"),
            Holiday::new("Tiradentes", "21", "04"),
            Holiday::new("Dia do Trabalho", "01", "05"),
            Holiday::new("Independência do Brasil", "07", "09"),
            Holiday::new("Nossa Sr.a Aparecida - Padroeira do Brasil", "12", "10"),
            Holiday::new("Finados", "02", "11"),
            Holiday::new("Proclamação da República", "15", "11"),
            Holiday::new("Natal", "25", "12"),
        ];
        let extra_holidays = env::var("EXTRA_HOLIDAYS");
        if extra_holidays.is_ok() {
            let mut extra_holidays: Vec<Holiday> =
                serde_json::from_str(&extra_holidays.unwrap()).unwrap();
            fixed_holidays.append(&mut extra_holidays);
        }
        BrazilHolidayCalendar { fixed_holidays }
    }

    /// add an ad-hoc fixed holiday to the table
    pub fn add_fixed_holiday(&mut self, holiday: Holiday) -> &mut Self {
        self.fixed_holidays.push(holiday);
        self
    }

    /// All national holidays for the given year, fixed and movable, sorted
    /// by (month, day). The list is recomputed on every call; nothing is
    /// cached between years. A movable holiday landing on the same date as
    /// a fixed one is kept as a duplicate entry rather than merged.
    pub fn holidays_for_year(&self, year: i32) -> Result<Vec<Holiday>, InvalidEasterDate> {
        let mut holidays = self.fixed_holidays.clone();
        holidays.extend(movable_holidays(year)?);
        holidays.sort_by(|a, b| a.month.cmp(&b.month).then(a.day.cmp(&b.day)));
        Ok(holidays)
    }

    /// Returns true if `date` names a holiday of the given year. The match
    /// is purely textual against each entry's "DD/MM" rendering, so `date`
    /// must come zero-padded to two digits per field ("05/01", not "5/1");
    /// anything else simply never matches.
    pub fn is_holiday(&self, date: &str, year: i32) -> Result<bool, InvalidEasterDate> {
        let holidays = self.holidays_for_year(year)?;

        for holiday in &holidays {
            if holiday.date_key() == date {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_cal() -> BrazilHolidayCalendar {
        BrazilHolidayCalendar::with_default_holidays()
    }

    #[test]
    fn movable_holidays_2024() {
        let movable = movable_holidays(2024).unwrap();
        assert_eq!(movable.len(), 4);
        // Easter 2024 is 31/03
        assert_eq!(movable[0], Holiday::new("Paixão de Cristo", "29", "03"));
        assert_eq!(movable[1], Holiday::new("Carnaval", "12", "02"));
        assert_eq!(movable[2], Holiday::new("Carnaval", "13", "02"));
        assert_eq!(movable[3], Holiday::new("Corpus Christi", "30", "05"));
    }

    #[test]
    fn movable_holidays_cross_month_boundaries() {
        // Easter 2025 is 20/04, so Carnival falls back into early March
        let movable = movable_holidays(2025).unwrap();
        assert_eq!(movable[1], Holiday::new("Carnaval", "03", "03"));
        assert_eq!(movable[2], Holiday::new("Carnaval", "04", "03"));
        assert_eq!(movable[3], Holiday::new("Corpus Christi", "19", "06"));
    }

    #[test]
    fn year_calendar_has_twelve_sorted_entries() {
        let cal = make_cal();
        for year in [1900, 1999, 2024, 2025, 2100, 2299] {
            let holidays = cal.holidays_for_year(year).unwrap();
            assert_eq!(holidays.len(), 12, "year {}", year);
            for pair in holidays.windows(2) {
                let key_a = (&pair[0].month, &pair[0].day);
                let key_b = (&pair[1].month, &pair[1].day);
                assert!(key_a <= key_b, "unsorted pair in year {}", year);
            }
        }
    }

    #[test]
    fn year_calendar_is_deterministic() {
        let cal = make_cal();
        assert_eq!(
            cal.holidays_for_year(2024).unwrap(),
            cal.holidays_for_year(2024).unwrap()
        );
    }

    #[test]
    fn test_is_holiday() {
        let cal = make_cal();
        // Natal, fixed
        assert_eq!(true, cal.is_holiday("25/12", 2024).unwrap());
        assert_eq!(false, cal.is_holiday("26/12", 2024).unwrap());
        // Paixão de Cristo, movable
        assert_eq!(true, cal.is_holiday("29/03", 2024).unwrap());
        assert_eq!(false, cal.is_holiday("29/03", 2025).unwrap());
    }

    #[test]
    fn test_is_holiday_requires_zero_padding() {
        // the match is textual, "5/1" never equals "05/01"
        let cal = make_cal();
        assert_eq!(false, cal.is_holiday("5/1", 2024).unwrap());
        assert_eq!(true, cal.is_holiday("01/01", 2024).unwrap());
    }

    #[test]
    fn test_calendar_with_new_holiday() {
        // imaginary holiday, let's call it São Ferris Day
        let mut cal = make_cal();
        cal.add_fixed_holiday(Holiday::new("Dia de São Ferris", "14", "03"));
        assert_eq!(true, cal.is_holiday("14/03", 2024).unwrap());
        assert_eq!(13, cal.holidays_for_year(2024).unwrap().len());
    }

    #[test]
    /// Testing serialization and deserialization of holiday definitions
    fn serialize_holiday_definition() {
        let holidays = vec![
            Holiday::new("Tiradentes", "21", "04"),
            Holiday::new("Natal", "25", "12"),
        ];
        let json = serde_json::to_string_pretty(&holidays).unwrap();
        assert_eq!(
            json,
            r#"[
  {
    "name": "Tiradentes",
    "day": "21",
    "month": "04"
  },
  {
    "name": "Natal",
    "day": "25",
    "month": "12"
  }
]"#
        );
        let holidays2: Vec<Holiday> = serde_json::from_str(&json).unwrap();
        assert_eq!(holidays, holidays2);
    }
}
