//! Duration cast

#![no_main]

use etl_chrono::calendar::{
  Days, Duration, Hours, Microseconds, Milliseconds, Nanoseconds, Seconds, duration_cast,
};
use etl_chrono::ratio::Ratio;

libfuzzer_sys::fuzz_target!(|data: (i64, i32, f64)| {
  let (a, b, c) = data;
  let millis = Milliseconds::new(a);
  let _nanos = duration_cast::<Nanoseconds>(millis);
  let _hours = duration_cast::<Hours>(millis);
  let _odd = duration_cast::<Duration<i32, Ratio<2, 15>>>(millis);
  let _rslt = millis.checked_cast::<Microseconds>();
  let _ceil = millis.ceil::<Seconds>();
  let _floor = millis.floor::<Seconds>();
  let days = Days::new(b);
  let _seconds = duration_cast::<Seconds>(days);
  let _float = duration_cast::<Milliseconds>(Duration::<f64, Ratio<1, 1>>::new(c));
  if let Ok(back) = duration_cast::<Seconds>(days).checked_cast::<Days>() {
    assert_eq!(back, days);
  }
});
