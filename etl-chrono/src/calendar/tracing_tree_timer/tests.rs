use crate::calendar::TracingTreeTimer;
use core::time::Duration;
use std::string::String;
use tracing_tree::time::FormatTime;

#[test]
fn format_time() {
  let mut buffer = String::new();
  TracingTreeTimer.format_time(&mut buffer).unwrap();
  assert_eq!(buffer, "2023-11-14T22:13:20.000Z");
}

#[test]
fn style_timestamp() {
  let style = |elapsed: Duration| {
    let mut buffer = String::new();
    TracingTreeTimer.style_timestamp(false, elapsed, &mut buffer).unwrap();
    buffer
  };
  assert_eq!(style(Duration::from_millis(250)), "250ms");
  assert_eq!(style(Duration::from_secs(5)), "  5s ");
  assert_eq!(style(Duration::from_secs(150)), "  2m ");
  assert_eq!(style(Duration::from_secs(7_200)), "  2h ");
}
