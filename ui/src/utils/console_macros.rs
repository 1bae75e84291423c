//! Browser console logging for components.
//!
//! Each macro formats its arguments like `format!` and prefixes the line
//! with the local ISO time. Only call these from code that runs in the
//! browser; services log through `tracing`.

#[doc(hidden)]
pub fn stamped(message: &str) -> String {
    let now = js_sys::Date::new_0();
    format!("[{}] {}", String::from(now.to_iso_string()), message)
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => {
        gloo_console::info!($crate::utils::console_macros::stamped(&format!($($arg)*)))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        gloo_console::warn!($crate::utils::console_macros::stamped(&format!($($arg)*)))
    };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        gloo_console::error!($crate::utils::console_macros::stamped(&format!($($arg)*)))
    };
}
