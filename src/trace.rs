//! Structured events, compiled in only with the `tracing` feature.

/// Forwards to the `tracing` macro of the given level when the feature is on.
///
/// `trace_event!(debug, node = 3, "added node")`
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::$level!($($arg)+);
        }
    };
}

pub(crate) use trace_event;
