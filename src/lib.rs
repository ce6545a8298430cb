/*!
Timelib provides two small value types for working with wall clock times and
the periods between them.

* [`Time`] is a time of day in the range `00:00:00` through `24:00:00`. It
prints as `HH:MM:SS`.
* [`TimePeriod`] is a non-negative length of time in hours, minutes and
seconds. Its hours component is not limited to a single day. It prints as
`H:MM:SS`.

Both types are `Copy`, totally ordered, and can be parsed from and printed to
strings. Neither has any notion of dates, time zones or fractional seconds.

# Example

```
use timelib::{time, Time, TimePeriod};

// Build a time from components, or parse it.
let start: Time = "13:10:05".parse()?;
assert_eq!(start, time(13, 10, 5));

// Subtracting a period gives an earlier time.
let period: TimePeriod = "10:15:10".parse()?;
assert_eq!((start - period).to_string(), "02:54:55");

// Adding never rolls over into the next day. It saturates instead.
assert_eq!(start + TimePeriod::new(100, 0, 0)?, Time::MAX);

// Time periods aren't limited to 24 hours.
let long = TimePeriod::new(25, 12, 2)? - TimePeriod::new(1, 15, 10)?;
assert_eq!(long.to_string(), "23:56:52");

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Arithmetic

Addition and subtraction are defined for these combinations:

| Left          | Right         | Result        | Overflow     | Underflow |
| ------------- | ------------- | ------------- | ------------ | --------- |
| `Time`        | `Time`        | `Time`        | saturates    | error     |
| `Time`        | `TimePeriod`  | `Time`        | saturates    | error     |
| `TimePeriod`  | `TimePeriod`  | `TimePeriod`  | error        | error     |

"Overflow" for a `Time` means going past `24:00:00`. For a `TimePeriod`, it
means going past [`TimePeriod::MAX`], which is the longest period whose total
number of seconds fits into an `i64`.

The `Add` and `Sub` operator implementations panic where the table says
"error". Use the `checked_` methods to get a [`Error`] instead.

# Errors

Every fallible operation returns the same [`Error`] type. It can be queried
with [`Error::is_range`], [`Error::is_invalid_format`] and
[`Error::is_underflow`].

# Crate features

* **std** (enabled by default) -
  When enabled, [`Error`] implements `std::error::Error`. Without it, this
  crate only depends on `core` and `alloc`.
* **logging** -
  When enabled, the `log` crate is used to emit messages where it may be
  useful for debugging, for example when an addition saturates.
* **serde** -
  Enables `Serialize` and `Deserialize` implementations for [`Time`] and
  [`TimePeriod`]. Both use the same string formats as `Display` and
  `FromStr`.
* **perf-inline** (enabled by default) -
  Adds `#[inline(always)]` to some internal routines. Disabling it may
  reduce code size at the cost of some performance.
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

// Errors carry a heap allocated chain of causes.
extern crate alloc;

pub use crate::{
    error::Error,
    period::TimePeriod,
    time::{time, Time, TimeArithmetic},
};

#[macro_use]
mod logging;

mod error;
mod fmt;
mod period;
mod time;
mod util;
