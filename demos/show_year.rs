use feriados::calendar::BrazilHolidayCalendar;
/// example to show the national holidays of one or more years
use std::env::args;

fn main() {
    let args: Vec<String> = args().collect();
    let len = args.len();
    if len < 2 {
        panic!("Usage: {} first [last]", args[0]);
    }
    let first: i32 = (&args[1]).parse().unwrap();
    let last: i32 = if len > 2 {
        (&args[2]).parse().unwrap()
    } else {
        first
    };
    let cal = BrazilHolidayCalendar::with_default_holidays();
    for year in first..last + 1 {
        println!("{}:", year);
        let holidays = cal.holidays_for_year(year).unwrap();
        for holiday in &holidays {
            println!("  {}/{} {}", holiday.day, holiday.month, holiday.name);
        }
    }
}
