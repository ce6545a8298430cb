// Only a couple of levels are used today, and none of them are used when the
// `logging` feature is disabled.
#![allow(unused_macros)]

/// Expands its body only when the `logging` feature is enabled.
///
/// When disabled, log statements (and their arguments) vanish entirely. So
/// it's fine to log from hot arithmetic paths.
macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

macro_rules! debug {
    ($($tt:tt)*) => { log!(log::debug!(target: "timelib", $($tt)*)) }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(log::trace!(target: "timelib", $($tt)*)) }
}
