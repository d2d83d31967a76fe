use crate::{
  calendar::{CalendarError, Month, Months},
  hash::ByteHash,
};

#[test]
fn arithmetic() {
  assert_eq!(Month::DECEMBER + Months::new(1), Month::JANUARY);
  assert_eq!(Month::JANUARY - Months::new(1), Month::DECEMBER);
  assert_eq!(Months::new(14) + Month::NOVEMBER, Month::JANUARY);
  assert_eq!(Month::MARCH - Months::new(27), Month::DECEMBER);
  assert_eq!(Month::JANUARY - Month::DECEMBER, Months::new(1));
  assert_eq!(Month::DECEMBER - Month::JANUARY, Months::new(11));
  assert_eq!(Month::new(13) - Month::JANUARY, Months::new(0));
  for num in 1..=12 {
    let month = Month::new(num);
    for delta in [i32::MIN, i32::MIN + 1, -1, 0, 1, i32::MAX - 1, i32::MAX] {
      assert_eq!((month + Months::new(delta)) - Months::new(delta), month);
      assert_eq!((month - Months::new(delta)) + Months::new(delta), month);
    }
  }
  assert_eq!(Month::JANUARY - Months::new(i32::MIN), Month::SEPTEMBER);
  let mut month = Month::JUNE;
  month += Months::new(6);
  assert_eq!(month, Month::DECEMBER);
  month -= Months::new(12);
  assert_eq!(month, Month::DECEMBER);
}

#[test]
fn cyclic_succ_pred() {
  let mut month = Month::JANUARY;
  for num in 1..=12u8 {
    assert_eq!(month.num(), num);
    month = month.succ();
  }
  assert_eq!(month, Month::JANUARY);
  assert_eq!(Month::JANUARY.pred(), Month::DECEMBER);
}

#[test]
fn distinct_hashes() {
  assert_ne!(Month::JANUARY.byte_hash(), Month::FEBRUARY.byte_hash());
  assert_eq!(Month::JANUARY.byte_hash(), Month::new(1).byte_hash());
}

#[test]
fn from_num() {
  assert_eq!(Month::from_num(12), Ok(Month::DECEMBER));
  assert_eq!(Month::from_num(13), Err(CalendarError::InvalidMonth { received: 13 }));
  assert!(Month::try_from(0u8).is_err());
  assert!(Month::try_from(5u32).is_ok());
}

#[test]
fn names() {
  assert_eq!(Month::JANUARY.name(), "January");
  assert_eq!(Month::SEPTEMBER.short_name(), "Sep");
  assert_eq!(Month::new(0).name(), "");
}

#[test]
fn ok() {
  for num in 0..=255u32 {
    assert_eq!(Month::new(num).ok(), (1..=12).contains(&num));
  }
  assert!(!Month::default().ok());
}
