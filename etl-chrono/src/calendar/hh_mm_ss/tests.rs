use crate::{
  calendar::{
    Duration, HhMmSs, Hours, Microseconds, Milliseconds, Minutes, Nanoseconds, Seconds, is_am,
    is_pm, make12, make24,
  },
  ratio::{Ratio, Unit},
};

#[test]
fn am_pm() {
  assert!(is_am(Hours::new(0)));
  assert!(is_am(Hours::new(11)));
  assert!(!is_am(Hours::new(12)));
  assert!(is_pm(Hours::new(12)));
  assert!(is_pm(Hours::new(23)));
  assert!(!is_pm(Hours::new(24)));
  assert!(!is_am(Hours::new(-1)));
}

#[test]
fn display() {
  let hms = HhMmSs::new(Milliseconds::new(3_723_456));
  assert_eq!(std::format!("{hms}"), "01:02:03.456");
  assert_eq!(std::format!("{}", HhMmSs::new(-Seconds::new(59))), "-00:00:59");
  assert_eq!(std::format!("{}", HhMmSs::new(Microseconds::new(1))), "00:00:00.000001");
}

#[test]
fn float_seconds() {
  let hms = HhMmSs::new(Duration::<f64, Unit>::new(3_723.456));
  assert_eq!(HhMmSs::<f64, Unit>::FRACTIONAL_WIDTH, 0);
  assert_eq!(hms.hours(), Hours::new(1));
  assert_eq!(hms.minutes(), Minutes::new(2));
  assert_eq!(hms.seconds(), Seconds::new(3));
  assert!((hms.subseconds().count() - 0.456).abs() < 1e-9);
  assert!((hms.to_duration().count() - 3_723.456).abs() < 1e-9);
}

#[test]
fn fractional_width() {
  assert_eq!(HhMmSs::<i64, Unit>::FRACTIONAL_WIDTH, 0);
  assert_eq!(HhMmSs::<i64, crate::ratio::Milli>::FRACTIONAL_WIDTH, 3);
  assert_eq!(HhMmSs::<i64, crate::ratio::Nano>::FRACTIONAL_WIDTH, 9);
  assert_eq!(HhMmSs::<i64, Ratio<1, 4>>::FRACTIONAL_WIDTH, 2);
  assert_eq!(HhMmSs::<i64, Ratio<1, 3>>::FRACTIONAL_WIDTH, 6);
  assert_eq!(HhMmSs::<i32, crate::ratio::Minute>::FRACTIONAL_WIDTH, 0);
}

#[test]
fn negative() {
  let hms = HhMmSs::new(Milliseconds::new(-3_723_456));
  assert!(hms.is_negative());
  assert_eq!(hms.hours(), Hours::new(1));
  assert_eq!(hms.subseconds(), Milliseconds::new(456));
  assert_eq!(hms.to_duration(), Milliseconds::new(-3_723_456));
}

#[test]
fn negative_seconds() {
  let hms = HhMmSs::new(-Seconds::new(3_723));
  assert!(hms.is_negative());
  assert_eq!(hms.hours(), Hours::new(1));
  assert_eq!(hms.minutes(), Minutes::new(2));
  assert_eq!(hms.seconds(), Seconds::new(3));
  assert_eq!(hms.to_duration(), Seconds::new(-3_723));
}

#[test]
fn split() {
  let hms = HhMmSs::new(Nanoseconds::new(86_399_999_999_999));
  assert!(!hms.is_negative());
  assert_eq!(hms.hours(), Hours::new(23));
  assert_eq!(hms.minutes(), Minutes::new(59));
  assert_eq!(hms.seconds(), Seconds::new(59));
  assert_eq!(hms.subseconds(), Nanoseconds::new(999_999_999));
  assert_eq!(hms.to_duration(), Nanoseconds::new(86_399_999_999_999));
  let coarse = HhMmSs::new(Minutes::new(135));
  assert_eq!(coarse.hours(), Hours::new(2));
  assert_eq!(coarse.minutes(), Minutes::new(15));
  assert_eq!(coarse.subseconds(), Minutes::zero());
}

#[test]
fn twelve_hour_clock() {
  assert_eq!(make12(Hours::new(0)), Hours::new(12));
  assert_eq!(make12(Hours::new(1)), Hours::new(1));
  assert_eq!(make12(Hours::new(12)), Hours::new(12));
  assert_eq!(make12(Hours::new(23)), Hours::new(11));
  assert_eq!(make24(Hours::new(12), false), Hours::new(0));
  assert_eq!(make24(Hours::new(12), true), Hours::new(12));
  assert_eq!(make24(Hours::new(11), true), Hours::new(23));
  assert_eq!(make24(Hours::new(7), false), Hours::new(7));
}
