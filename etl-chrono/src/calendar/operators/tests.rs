use crate::calendar::{
  Day, Last, Month, MonthDay, MonthDayLast, MonthWeekday, MonthWeekdayLast, Weekday,
  WeekdayIndexed, WeekdayLast, Year, YearMonth, YearMonthDay, YearMonthDayLast, YearMonthWeekday,
  YearMonthWeekdayLast,
};

const TUESDAY_2: WeekdayIndexed = WeekdayIndexed::new(Weekday::TUESDAY, 2);
const TUESDAY_LAST: WeekdayLast = WeekdayLast::new(Weekday::TUESDAY);

#[test]
fn month_day() {
  let expected = MonthDay::new(Month::FEBRUARY, Day::new(10));
  assert_eq!(Month::FEBRUARY / Day::new(10), expected);
  assert_eq!(Month::FEBRUARY / 10, expected);
  assert_eq!(2 / Day::new(10), expected);
  assert_eq!(Day::new(10) / Month::FEBRUARY, expected);
  assert_eq!(Day::new(10) / 2, expected);
}

#[test]
fn month_day_last() {
  let expected = MonthDayLast::new(Month::FEBRUARY);
  assert_eq!(Month::FEBRUARY / Last, expected);
  assert_eq!(2 / Last, expected);
  assert_eq!(Last / Month::FEBRUARY, expected);
  assert_eq!(Last / 2, expected);
}

#[test]
fn month_weekday() {
  let expected = MonthWeekday::new(Month::MARCH, TUESDAY_2);
  assert_eq!(Month::MARCH / TUESDAY_2, expected);
  assert_eq!(3 / TUESDAY_2, expected);
  assert_eq!(TUESDAY_2 / Month::MARCH, expected);
  assert_eq!(TUESDAY_2 / 3, expected);
}

#[test]
fn month_weekday_last() {
  let expected = MonthWeekdayLast::new(Month::MARCH, TUESDAY_LAST);
  assert_eq!(Month::MARCH / TUESDAY_LAST, expected);
  assert_eq!(3 / TUESDAY_LAST, expected);
  assert_eq!(TUESDAY_LAST / Month::MARCH, expected);
  assert_eq!(TUESDAY_LAST / 3, expected);
}

#[test]
fn year_month() {
  let expected = YearMonth::new(Year::new(2000), Month::FEBRUARY);
  assert_eq!(Year::new(2000) / Month::FEBRUARY, expected);
  assert_eq!(Year::new(2000) / 2, expected);
}

#[test]
fn year_month_day() {
  let expected = YearMonthDay::new(Year::new(2000), Month::FEBRUARY, Day::new(10));
  let md = Month::FEBRUARY / Day::new(10);
  assert_eq!(Year::new(2000) / Month::FEBRUARY / Day::new(10), expected);
  assert_eq!(Year::new(2000) / Month::FEBRUARY / 10, expected);
  assert_eq!(Year::new(2000) / md, expected);
  assert_eq!(2000 / md, expected);
  assert_eq!(md / Year::new(2000), expected);
  assert_eq!(md / 2000, expected);
  assert_eq!(Day::new(10) / Month::FEBRUARY / Year::new(2000), expected);
  assert_eq!(expected.to_sys_days().time_since_epoch().count(), 10_997);
}

#[test]
fn year_month_day_last() {
  let expected = YearMonthDayLast::new(Year::new(2000), MonthDayLast::new(Month::FEBRUARY));
  let mdl = Month::FEBRUARY / Last;
  assert_eq!(Year::new(2000) / Month::FEBRUARY / Last, expected);
  assert_eq!(Year::new(2000) / mdl, expected);
  assert_eq!(2000 / mdl, expected);
  assert_eq!(mdl / Year::new(2000), expected);
  assert_eq!(mdl / 2000, expected);
  assert_eq!(expected.day().num(), 29);
}

#[test]
fn year_month_weekday() {
  let expected = YearMonthWeekday::new(Year::new(2024), Month::MARCH, TUESDAY_2);
  let mw = Month::MARCH / TUESDAY_2;
  assert_eq!(Year::new(2024) / Month::MARCH / TUESDAY_2, expected);
  assert_eq!(Year::new(2024) / mw, expected);
  assert_eq!(2024 / mw, expected);
  assert_eq!(mw / Year::new(2024), expected);
  assert_eq!(mw / 2024, expected);
}

#[test]
fn year_month_weekday_last() {
  let expected = YearMonthWeekdayLast::new(Year::new(2024), Month::MARCH, TUESDAY_LAST);
  let mwl = Month::MARCH / TUESDAY_LAST;
  assert_eq!(Year::new(2024) / Month::MARCH / TUESDAY_LAST, expected);
  assert_eq!(Year::new(2024) / mwl, expected);
  assert_eq!(2024 / mwl, expected);
  assert_eq!(mwl / Year::new(2024), expected);
  assert_eq!(mwl / 2024, expected);
}
