use crate::{
  calendar::{
    CalendarError, Days, Duration, Hours, Microseconds, Milliseconds, Minutes, Nanoseconds,
    Seconds, Weeks, duration_cast,
  },
  hash::ByteHash,
  ratio::{Centi, Kilo, Micro, Milli, Nano, Ratio, Unit},
};

#[test]
fn arithmetic_with_common_period() {
  let sum = Duration::<i64, Milli>::new(1) + Duration::<i64, Micro>::new(1);
  assert_eq!(sum.count(), 1_001);
  assert_eq!(sum, Microseconds::new(1_001));
  let diff = Seconds::new(1) - Milliseconds::new(1);
  assert_eq!(diff.count(), 999);
  let rem = Seconds::new(2) % Milliseconds::new(300);
  assert_eq!(rem.count(), 200);
  assert_eq!(Seconds::new(3) / Milliseconds::new(500), 6);
}

#[test]
fn arithmetic_with_common_representation() {
  let sum: Seconds = Seconds::new(1) + Minutes::new(1);
  assert_eq!(sum, Seconds::new(61));
  let diff: Duration<i64, Unit> = Minutes::new(1) - Seconds::new(90);
  assert_eq!(diff.count(), -30);
  assert_eq!(Hours::new(2) / Seconds::new(3_600), 2i64);
  assert_eq!((Minutes::new(2) % Seconds::new(50)).count(), 20i64);
  let float: Duration<f64, Unit> = Duration::<f32, Unit>::new(0.5) + Seconds::new(1);
  assert_eq!(float.count(), 1.5);
  let narrow: Duration<i64, Unit> =
    Duration::<u8, Unit>::new(200) + Duration::<u16, Unit>::new(100);
  assert_eq!(narrow.count(), 300);
  let unsigned: Duration<u64, Milli> =
    Duration::<u64, Unit>::new(u64::MAX / 1_000) + Duration::<u32, Milli>::new(1);
  assert_eq!(unsigned.count(), u64::MAX / 1_000 * 1_000 + 1);
  assert_eq!((Duration::<u8, Unit>::new(200) + Duration::<u8, Unit>::new(100)).count(), 44);
}

#[test]
fn assignment_operators() {
  let mut duration = Milliseconds::new(10);
  duration += Milliseconds::new(5);
  assert_eq!(duration.count(), 15);
  duration -= Milliseconds::new(3);
  assert_eq!(duration.count(), 12);
  duration *= 3;
  assert_eq!(duration.count(), 36);
  duration /= 4;
  assert_eq!(duration.count(), 9);
  duration %= 5;
  assert_eq!(duration.count(), 4);
  duration %= Milliseconds::new(3);
  assert_eq!(duration.count(), 1);
}

#[test]
fn cast() {
  let src = Duration::<i32, Milli>::new(1001);
  assert_eq!(duration_cast::<Duration<i32, Micro>>(src).count(), 1_001_000);
  assert_eq!(duration_cast::<Duration<i32, Centi>>(src).count(), 100);
  assert_eq!(duration_cast::<Duration<i16, Centi>>(src).count(), 100);
  assert_eq!(duration_cast::<Duration<i32, Milli>>(src).count(), 1001);
  let other = Duration::<i32, Ratio<3, 10>>::new(4);
  assert_eq!(duration_cast::<Duration<i32, Ratio<2, 15>>>(other).count(), 9);
  assert_eq!(duration_cast::<Seconds>(Milliseconds::new(-1500)).count(), -1);
  assert_eq!(duration_cast::<Duration<f64, Unit>>(Milliseconds::new(1500)).count(), 1.5);
  assert_eq!(duration_cast::<Milliseconds>(Duration::<f32, Unit>::new(1.25)).count(), 1250);
  let large = Duration::<u64, Unit>::new(u64::MAX / 1_000);
  assert_eq!(duration_cast::<Duration<u64, Milli>>(large).count(), u64::MAX / 1_000 * 1_000);
  let max = Duration::<u64, Unit>::max();
  assert_eq!(duration_cast::<Duration<u64, Kilo>>(max).count(), u64::MAX / 1_000);
}

#[test]
fn checked_cast() {
  assert_eq!(Seconds::new(2).checked_cast::<Milliseconds>(), Ok(Milliseconds::new(2000)));
  assert_eq!(
    Seconds::new(i64::MAX).checked_cast::<Nanoseconds>(),
    Err(CalendarError::ArithmeticOverflow)
  );
  assert_eq!(
    Seconds::new(100_000).checked_cast::<Duration<i16, Unit>>(),
    Err(CalendarError::ArithmeticOverflow)
  );
  assert_eq!(
    Duration::<u64, Unit>::max().checked_cast::<Duration<u64, Kilo>>(),
    Ok(Duration::<u64, Kilo>::new(u64::MAX / 1_000))
  );
  assert_eq!(
    Duration::<u64, Unit>::max().checked_cast::<Duration<u64, Milli>>(),
    Err(CalendarError::ArithmeticOverflow)
  );
}

#[test]
fn comparison_across_periods() {
  assert_eq!(Seconds::new(1), Milliseconds::new(1_000));
  assert!(Seconds::new(1) < Milliseconds::new(1_001));
  assert!(Hours::new(1) > Minutes::new(59));
  assert_eq!(Weeks::new(1), Days::new(7));
  assert!(Duration::<f64, Unit>::new(0.5) < Milliseconds::new(501));
  assert_ne!(Duration::<f64, Unit>::new(f64::NAN), Seconds::new(0));
}

#[test]
fn comparison_of_unsigned_extremes() {
  let max = Duration::<u64, Unit>::max();
  let zero = Duration::<u64, Unit>::zero();
  assert_eq!(max.cmp(&zero), core::cmp::Ordering::Greater);
  assert_eq!(max.partial_cmp(&zero), Some(core::cmp::Ordering::Greater));
  assert!(max > zero);
  assert!(zero < max);
  assert!(max > Duration::<i64, Milli>::new(i64::MAX));
  assert!(Duration::<i8, Unit>::new(-1) < zero);
  assert_eq!(
    Duration::<u64, Milli>::new(u64::MAX / 1_000 * 1_000),
    Duration::<u64, Unit>::new(u64::MAX / 1_000)
  );
}

#[test]
fn constructors() {
  assert_eq!(Duration::<i16, Milli>::default().count(), 0);
  assert_eq!(Duration::<i32, Nano>::new(1000).count(), 1000);
  assert_eq!(Duration::<i64, Nano>::from_duration(Microseconds::new(1000)).count(), 1_000_000);
  assert_eq!(Duration::<f64, Unit>::from_duration(Milliseconds::new(250)).count(), 0.25);
  assert_eq!(Milliseconds::zero().count(), 0);
  assert_eq!(Hours::max().count(), i32::MAX);
  assert_eq!(Hours::min().count(), i32::MIN);
  assert_eq!(Duration::<f32, Unit>::min().count(), f32::MIN);
}

#[test]
fn floor_ceil_round() {
  assert_eq!(Milliseconds::new(1500).floor::<Seconds>().count(), 1);
  assert_eq!(Milliseconds::new(-1500).floor::<Seconds>().count(), -2);
  assert_eq!(Milliseconds::new(1500).ceil::<Seconds>().count(), 2);
  assert_eq!(Milliseconds::new(-1500).ceil::<Seconds>().count(), -1);
  assert_eq!(Milliseconds::new(1500).round::<Seconds>().count(), 2);
  assert_eq!(Milliseconds::new(2500).round::<Seconds>().count(), 2);
  assert_eq!(Milliseconds::new(2501).round::<Seconds>().count(), 3);
  assert_eq!(Milliseconds::new(-1400).round::<Seconds>().count(), -1);
  assert_eq!(Milliseconds::new(-42).abs().count(), 42);
}

#[test]
fn hash_of_equal_values() {
  assert_eq!(Milliseconds::new(5).byte_hash(), Milliseconds::new(5).byte_hash());
  assert_ne!(Milliseconds::new(5).byte_hash(), Milliseconds::new(6).byte_hash());
}

#[test]
fn scalar_operations() {
  assert_eq!((Seconds::new(3) * 2).count(), 6);
  assert_eq!((2 * Seconds::new(3)).count(), 6);
  assert_eq!((Seconds::new(7) / 2).count(), 3);
  assert_eq!((Seconds::new(7) % 4).count(), 3);
  assert_eq!((-Seconds::new(7)).count(), -7);
}

#[test]
fn succ_and_pred() {
  assert_eq!(Days::new(5).succ().count(), 6);
  assert_eq!(Days::new(5).pred().count(), 4);
  assert_eq!(Days::new(i32::MAX).succ().count(), i32::MIN);
}
