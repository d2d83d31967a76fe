use crate::{
  calendar::{CalendarError, Days, SysDays, Weekday, WeekdayIndexed, WeekdayLast},
  hash::ByteHash,
};

#[test]
fn arithmetic() {
  for num in 0..7 {
    let weekday = Weekday::new(num);
    for delta in -15..15 {
      assert_eq!((weekday + Days::new(delta)) - Days::new(delta), weekday);
    }
    for delta in [i32::MIN, i32::MIN + 1, i32::MAX - 1, i32::MAX] {
      assert_eq!((weekday + Days::new(delta)) - Days::new(delta), weekday);
      assert_eq!((weekday - Days::new(delta)) + Days::new(delta), weekday);
    }
  }
  assert_eq!(Weekday::SUNDAY - Days::new(i32::MIN), Weekday::TUESDAY);
  assert_eq!(Weekday::SATURDAY + Days::new(1), Weekday::SUNDAY);
  assert_eq!(Weekday::SUNDAY - Days::new(1), Weekday::SATURDAY);
  assert_eq!(Weekday::MONDAY - Weekday::SATURDAY, Days::new(2));
  assert_eq!(Weekday::SATURDAY - Weekday::MONDAY, Days::new(5));
  assert_eq!(Weekday::default() - Weekday::MONDAY, Days::new(0));
  assert_eq!(Weekday::SATURDAY.succ(), Weekday::SUNDAY);
  assert_eq!(Weekday::SUNDAY.pred(), Weekday::SATURDAY);
}

#[test]
fn encodings() {
  assert_eq!(Weekday::new(7), Weekday::new(0));
  assert_eq!(Weekday::SUNDAY.c_encoding(), 0);
  assert_eq!(Weekday::SUNDAY.iso_encoding(), 7);
  assert_eq!(Weekday::MONDAY.iso_encoding(), 1);
  assert_eq!(Weekday::from_num(7), Ok(Weekday::SUNDAY));
  assert_eq!(Weekday::from_num(8), Err(CalendarError::InvalidWeekday { received: 8 }));
  assert!(Weekday::try_from(3u8).is_ok());
}

#[test]
fn from_sys_days() {
  let sys_days = |count| SysDays::new(Days::new(count));
  assert_eq!(Weekday::from_sys_days(sys_days(0)), Weekday::THURSDAY);
  assert_eq!(Weekday::from_sys_days(sys_days(-1)), Weekday::WEDNESDAY);
  assert_eq!(Weekday::from_sys_days(sys_days(-7)), Weekday::THURSDAY);
  assert_eq!(Weekday::from(sys_days(10_997)), Weekday::THURSDAY);
  assert_eq!(Weekday::from(sys_days(19_870)), Weekday::MONDAY);
}

#[test]
fn hash() {
  assert_ne!(Weekday::MONDAY.byte_hash(), Weekday::TUESDAY.byte_hash());
  let first = WeekdayIndexed::new(Weekday::MONDAY, 1);
  let second = WeekdayIndexed::new(Weekday::MONDAY, 2);
  assert_ne!(first.byte_hash(), second.byte_hash());
  assert_eq!(WeekdayLast::new(Weekday::MONDAY).byte_hash(), Weekday::MONDAY.byte_hash());
}

#[test]
fn indexed_and_last() {
  let indexed = Weekday::FRIDAY.index(3);
  assert_eq!(indexed.weekday(), Weekday::FRIDAY);
  assert_eq!(indexed.index(), 3);
  assert!(indexed.ok());
  assert!(!Weekday::FRIDAY.index(0).ok());
  assert!(!Weekday::FRIDAY.index(6).ok());
  assert!(!Weekday::new(8).index(1).ok());
  assert_eq!(
    WeekdayIndexed::from_parts(Weekday::FRIDAY, 6),
    Err(CalendarError::InvalidWeekdayIndex { received: 6 })
  );
  assert_eq!(Weekday::FRIDAY.last().weekday(), Weekday::FRIDAY);
  assert!(!Weekday::default().last().ok());
}

#[test]
fn names() {
  assert_eq!(Weekday::WEDNESDAY.name(), "Wednesday");
  assert_eq!(Weekday::WEDNESDAY.short_name(), "Wed");
  assert_eq!(Weekday::default().name(), "");
  assert!(Weekday::SATURDAY.is_weekend());
  assert!(Weekday::SUNDAY.is_weekend());
  assert!(!Weekday::FRIDAY.is_weekend());
}

#[test]
fn ok() {
  for num in 0..=255u32 {
    assert_eq!(Weekday::new(num).ok(), num <= 7);
  }
  assert!(!Weekday::default().ok());
}
