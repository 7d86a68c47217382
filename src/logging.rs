/// Conditional logging module for development builds
///
/// The `debug_log!` macro provides informational logging that is compiled out
/// in production (release) builds by default. Warnings and errors should keep
/// using `log::warn!` and `log::error!` directly.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `debug_logging` feature is explicitly enabled
///
/// # Examples
///
/// ```rust
/// use scenery_graph::debug_log;
///
/// let count = 12;
/// debug_log!("Bound {} track items", count);
/// ```
/// Conditionally log through the `log` facade in development builds
///
/// This macro expands to `log::debug!()` in debug builds or when the
/// `debug_logging` feature is enabled. In production release builds,
/// it compiles to nothing (zero overhead).
#[macro_export]
macro_rules! debug_log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(any(debug_assertions, feature = "debug_logging"))]
        {
            $crate::__log::debug!($($arg),+);
        }
    };
}

pub use crate::debug_log;
