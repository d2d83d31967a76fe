//! Composition of calendar types through `/`, mirroring the usual `year / month / day` notation.
//!
//! Bare `i32` operands take the role of the missing field: a month next to a day, a day next to
//! a month, a year next to any month composite and a month next to a weekday.

#[cfg(test)]
mod tests;

use crate::calendar::{
  Day, Last, Month, MonthDay, MonthDayLast, MonthWeekday, MonthWeekdayLast, WeekdayIndexed,
  WeekdayLast, Year, YearMonth, YearMonthDay, YearMonthDayLast, YearMonthWeekday,
  YearMonthWeekdayLast, misc::i32u32,
};
use core::ops::Div;

macro_rules! _impl_div {
  ($lhs:ty, $rhs:ty => $output:ty, |$l:ident, $r:ident| $body:expr) => {
    impl Div<$rhs> for $lhs {
      type Output = $output;

      #[inline]
      fn div(self, rhs: $rhs) -> Self::Output {
        let ($l, $r) = (self, rhs);
        $body
      }
    }
  };
}

const fn day(num: i32) -> Day {
  Day::new(i32u32(num))
}

const fn month(num: i32) -> Month {
  Month::new(i32u32(num))
}

// MonthDay

_impl_div!(Month, Day => MonthDay, |m, d| MonthDay::new(m, d));
_impl_div!(Month, i32 => MonthDay, |m, d| MonthDay::new(m, day(d)));
_impl_div!(i32, Day => MonthDay, |m, d| MonthDay::new(month(m), d));
_impl_div!(Day, Month => MonthDay, |d, m| MonthDay::new(m, d));
_impl_div!(Day, i32 => MonthDay, |d, m| MonthDay::new(month(m), d));

// MonthDayLast

_impl_div!(Month, Last => MonthDayLast, |m, _l| MonthDayLast::new(m));
_impl_div!(i32, Last => MonthDayLast, |m, _l| MonthDayLast::new(month(m)));
_impl_div!(Last, Month => MonthDayLast, |_l, m| MonthDayLast::new(m));
_impl_div!(Last, i32 => MonthDayLast, |_l, m| MonthDayLast::new(month(m)));

// MonthWeekday

_impl_div!(Month, WeekdayIndexed => MonthWeekday, |m, wdi| MonthWeekday::new(m, wdi));
_impl_div!(i32, WeekdayIndexed => MonthWeekday, |m, wdi| MonthWeekday::new(month(m), wdi));
_impl_div!(WeekdayIndexed, Month => MonthWeekday, |wdi, m| MonthWeekday::new(m, wdi));
_impl_div!(WeekdayIndexed, i32 => MonthWeekday, |wdi, m| MonthWeekday::new(month(m), wdi));

// MonthWeekdayLast

_impl_div!(Month, WeekdayLast => MonthWeekdayLast, |m, wdl| MonthWeekdayLast::new(m, wdl));
_impl_div!(i32, WeekdayLast => MonthWeekdayLast, |m, wdl| {
  MonthWeekdayLast::new(month(m), wdl)
});
_impl_div!(WeekdayLast, Month => MonthWeekdayLast, |wdl, m| MonthWeekdayLast::new(m, wdl));
_impl_div!(WeekdayLast, i32 => MonthWeekdayLast, |wdl, m| {
  MonthWeekdayLast::new(month(m), wdl)
});

// YearMonth

_impl_div!(Year, Month => YearMonth, |y, m| YearMonth::new(y, m));
_impl_div!(Year, i32 => YearMonth, |y, m| YearMonth::new(y, month(m)));

// YearMonthDay

_impl_div!(YearMonth, Day => YearMonthDay, |ym, d| YearMonthDay::new(ym.year(), ym.month(), d));
_impl_div!(YearMonth, i32 => YearMonthDay, |ym, d| {
  YearMonthDay::new(ym.year(), ym.month(), day(d))
});
_impl_div!(Year, MonthDay => YearMonthDay, |y, md| YearMonthDay::new(y, md.month(), md.day()));
_impl_div!(i32, MonthDay => YearMonthDay, |y, md| {
  YearMonthDay::new(Year::new(y), md.month(), md.day())
});
_impl_div!(MonthDay, Year => YearMonthDay, |md, y| YearMonthDay::new(y, md.month(), md.day()));
_impl_div!(MonthDay, i32 => YearMonthDay, |md, y| {
  YearMonthDay::new(Year::new(y), md.month(), md.day())
});

// YearMonthDayLast

_impl_div!(YearMonth, Last => YearMonthDayLast, |ym, _l| {
  YearMonthDayLast::new(ym.year(), MonthDayLast::new(ym.month()))
});
_impl_div!(Year, MonthDayLast => YearMonthDayLast, |y, mdl| YearMonthDayLast::new(y, mdl));
_impl_div!(i32, MonthDayLast => YearMonthDayLast, |y, mdl| {
  YearMonthDayLast::new(Year::new(y), mdl)
});
_impl_div!(MonthDayLast, Year => YearMonthDayLast, |mdl, y| YearMonthDayLast::new(y, mdl));
_impl_div!(MonthDayLast, i32 => YearMonthDayLast, |mdl, y| {
  YearMonthDayLast::new(Year::new(y), mdl)
});

// YearMonthWeekday

_impl_div!(YearMonth, WeekdayIndexed => YearMonthWeekday, |ym, wdi| {
  YearMonthWeekday::new(ym.year(), ym.month(), wdi)
});
_impl_div!(Year, MonthWeekday => YearMonthWeekday, |y, mw| {
  YearMonthWeekday::new(y, mw.month(), mw.weekday_indexed())
});
_impl_div!(i32, MonthWeekday => YearMonthWeekday, |y, mw| {
  YearMonthWeekday::new(Year::new(y), mw.month(), mw.weekday_indexed())
});
_impl_div!(MonthWeekday, Year => YearMonthWeekday, |mw, y| {
  YearMonthWeekday::new(y, mw.month(), mw.weekday_indexed())
});
_impl_div!(MonthWeekday, i32 => YearMonthWeekday, |mw, y| {
  YearMonthWeekday::new(Year::new(y), mw.month(), mw.weekday_indexed())
});

// YearMonthWeekdayLast

_impl_div!(YearMonth, WeekdayLast => YearMonthWeekdayLast, |ym, wdl| {
  YearMonthWeekdayLast::new(ym.year(), ym.month(), wdl)
});
_impl_div!(Year, MonthWeekdayLast => YearMonthWeekdayLast, |y, mwl| {
  YearMonthWeekdayLast::new(y, mwl.month(), mwl.weekday_last())
});
_impl_div!(i32, MonthWeekdayLast => YearMonthWeekdayLast, |y, mwl| {
  YearMonthWeekdayLast::new(Year::new(y), mwl.month(), mwl.weekday_last())
});
_impl_div!(MonthWeekdayLast, Year => YearMonthWeekdayLast, |mwl, y| {
  YearMonthWeekdayLast::new(y, mwl.month(), mwl.weekday_last())
});
_impl_div!(MonthWeekdayLast, i32 => YearMonthWeekdayLast, |mwl, y| {
  YearMonthWeekdayLast::new(Year::new(y), mwl.month(), mwl.weekday_last())
});
