use chrono::{Datelike, Local};
use feriados::calendar::BrazilHolidayCalendar;

fn main() {
    let today = Local::now().date_naive();
    let year = today.year();
    let cal = BrazilHolidayCalendar::with_default_holidays();

    let holidays = match cal.holidays_for_year(year) {
        Ok(holidays) => holidays,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };
    for holiday in &holidays {
        println!("{} {}/{}", holiday.name, holiday.day, holiday.month);
    }
    println!("=========================");

    let date = today.format("%d/%m").to_string();
    match cal.is_holiday(&date, year) {
        Ok(true) => println!("{} is a national holiday", date),
        Ok(false) => println!("{} is not a national holiday", date),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
