//! Conversions between dates and day counts

#![no_main]

use etl_chrono::calendar::{Days, SysDays, Weekday, YearMonthDay, YearMonthWeekday};

libfuzzer_sys::fuzz_target!(|data: (YearMonthDay, i32)| {
  let (ymd, count) = data;
  let sys_days = ymd.to_sys_days();
  if ymd.ok() {
    assert_eq!(YearMonthDay::from_sys_days(sys_days), ymd);
  }
  let bounded = SysDays::new(Days::new(count % 10_000_000));
  let from_count = YearMonthDay::from_sys_days(bounded);
  assert_eq!(from_count.to_sys_days(), bounded);
  let _weekday = Weekday::from_sys_days(bounded);
  let _ymwd = YearMonthWeekday::from_sys_days(bounded);
});
