pub mod calendar;
pub mod easter;
