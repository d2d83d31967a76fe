use crate::{
  calendar::{
    Days, Month, Months, SysDays, Weekday, WeekdayIndexed, WeekdayLast, Year, YearMonthDay,
    YearMonthWeekday, YearMonthWeekdayLast, Years,
  },
  hash::ByteHash,
};

fn sys_days(count: i32) -> SysDays {
  SysDays::new(Days::new(count))
}

fn ymwdl(year: i32, month: Month, weekday: Weekday) -> YearMonthWeekdayLast {
  YearMonthWeekdayLast::new(Year::new(year), month, WeekdayLast::new(weekday))
}

#[test]
fn arithmetic() {
  let ymwd = YearMonthWeekday::new(
    Year::new(2000),
    Month::FEBRUARY,
    WeekdayIndexed::new(Weekday::THURSDAY, 2),
  );
  let next = ymwd + Months::new(1) + Years::new(1);
  assert_eq!(next.year(), Year::new(2001));
  assert_eq!(next.month(), Month::MARCH);
  assert_eq!(next.weekday_indexed(), ymwd.weekday_indexed());
  let last = ymwdl(2000, Month::FEBRUARY, Weekday::FRIDAY) - Years::new(1);
  assert_eq!(last.year(), Year::new(1999));
}

#[test]
fn from_sys_days() {
  let ymwd = YearMonthWeekday::from_sys_days(sys_days(10_997));
  assert_eq!(ymwd.year(), Year::new(2000));
  assert_eq!(ymwd.month(), Month::FEBRUARY);
  assert_eq!(ymwd.weekday(), Weekday::THURSDAY);
  assert_eq!(ymwd.index(), 2);
  assert!(ymwd.ok());
  let first = YearMonthWeekday::from(sys_days(0));
  assert_eq!(first.weekday_indexed(), WeekdayIndexed::new(Weekday::THURSDAY, 1));
}

#[test]
fn hash() {
  let a = ymwdl(2000, Month::FEBRUARY, Weekday::FRIDAY);
  let b = ymwdl(2000, Month::FEBRUARY, Weekday::SATURDAY);
  assert_eq!(a.byte_hash(), a.byte_hash());
  assert_ne!(a.byte_hash(), b.byte_hash());
}

#[test]
fn last_weekday_to_sys_days() {
  assert_eq!(ymwdl(2000, Month::FEBRUARY, Weekday::FRIDAY).to_sys_days(), sys_days(11_012));
  assert_eq!(ymwdl(2000, Month::FEBRUARY, Weekday::TUESDAY).to_sys_days(), sys_days(11_016));
  assert_eq!(ymwdl(2024, Month::FEBRUARY, Weekday::THURSDAY).to_sys_days(), sys_days(19_782));
  let memorial_day = ymwdl(2024, Month::MAY, Weekday::MONDAY).to_sys_days();
  assert_eq!(memorial_day, sys_days(19_870));
  assert_eq!(YearMonthDay::from_sys_days(memorial_day).day().num(), 27);
  for (month_num, weekday_num) in (1..=12).zip((0..7).cycle()) {
    let last = ymwdl(2023, Month::new(month_num), Weekday::new(weekday_num));
    let date = YearMonthDay::from_sys_days(last.to_sys_days());
    assert_eq!(Weekday::from_sys_days(last.to_sys_days()), last.weekday());
    assert!(date.day().num() + 7 > date.max_day_for_month().num());
  }
}

#[test]
fn last_weekday_with_invalid_fields() {
  let invalid = ymwdl(2000, Month::FEBRUARY, Weekday::new(9));
  assert!(!invalid.ok());
  assert_eq!(SysDays::from(invalid), SysDays::default());
}

#[test]
fn ok() {
  let valid = WeekdayIndexed::new(Weekday::MONDAY, 5);
  assert!(YearMonthWeekday::new(Year::new(2000), Month::JANUARY, valid).ok());
  let invalid = WeekdayIndexed::new(Weekday::MONDAY, 6);
  assert!(!YearMonthWeekday::new(Year::new(2000), Month::JANUARY, invalid).ok());
  assert!(!ymwdl(2000, Month::new(0), Weekday::MONDAY).ok());
}

#[cfg(feature = "_tracing-tree")]
#[test]
fn logged_conversions_of_invalid_fields() {
  use crate::{
    calendar::{CalendarError, Day, Duration},
    ratio::{Milli, Unit},
  };
  let _rslt = crate::misc::tracing_tree_init(None);
  let leap_day = YearMonthDay::new(Year::new(2023), Month::FEBRUARY, Day::new(29));
  assert!(!leap_day.ok());
  assert_eq!(leap_day.to_sys_days(), sys_days(19_417));
  let invalid = ymwdl(2024, Month::MAY, Weekday::new(9));
  assert_eq!(invalid.to_sys_days(), SysDays::default());
  assert_eq!(
    Duration::<u64, Unit>::max().checked_cast::<Duration<u64, Milli>>(),
    Err(CalendarError::ArithmeticOverflow)
  );
}
