use crate::{
  calendar::{CalendarError, Month, Months, Year, YearMonth, Years},
  hash::ByteHash,
};

fn ym(year: i32, month: u32) -> YearMonth {
  YearMonth::new(Year::new(year), Month::new(month))
}

#[test]
fn arithmetic() {
  assert_eq!(ym(2000, 2) + Years::new(3), ym(2003, 2));
  assert_eq!(ym(2000, 2) - Years::new(3), ym(1997, 2));
  assert_eq!(ym(2000, 2) + Months::new(3), ym(2000, 5));
  assert_eq!(ym(2000, 12) + Months::new(1), ym(2000, 1));
  assert_eq!(ym(2001, 3) - ym(2000, 1), Months::new(14));
  assert_eq!(ym(2000, 1) - ym(2001, 3), Months::new(-14));
}

#[test]
fn from_parts() {
  assert_eq!(YearMonth::from_parts(Year::new(2000), Month::JUNE), Ok(ym(2000, 6)));
  assert_eq!(
    YearMonth::from_parts(Year::new(2000), Month::new(13)),
    Err(CalendarError::InvalidMonth { received: 13 })
  );
  assert_eq!(
    YearMonth::from_parts(Year::new(i32::from(i16::MIN)), Month::JUNE),
    Err(CalendarError::InvalidYear { received: i16::MIN })
  );
}

#[test]
fn hash() {
  assert_ne!(ym(2000, 1).byte_hash(), ym(2000, 2).byte_hash());
  assert_ne!(ym(2000, 1).byte_hash(), ym(2001, 1).byte_hash());
}

#[test]
fn ok() {
  assert!(ym(2000, 12).ok());
  assert!(!ym(2000, 0).ok());
  assert!(ym(2000, 1) < ym(2000, 2));
  assert!(ym(1999, 12) < ym(2000, 1));
}
