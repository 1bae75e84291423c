//! Browser helpers: the operator's local date and the phone dialer.

use time::{Date, Duration, OffsetDateTime};
use web_sys::window;

use super::formatting::tel_href;
use crate::console_warn;

/// Today's date in the browser's time zone
pub fn local_today() -> Date {
    // getTimezoneOffset is UTC minus local, in minutes
    let offset_minutes = js_sys::Date::new_0().get_timezone_offset();
    let local = OffsetDateTime::now_utc() - Duration::minutes(offset_minutes as i64);
    local.date()
}

/// Hands the number to the device's dialer via a `tel:` link
pub fn open_dialer(phone_number: &str) {
    let href = tel_href(phone_number);
    let Some(window) = window() else {
        console_warn!("No window available to dial {}", href);
        return;
    };
    if let Err(e) = window.location().set_href(&href) {
        console_warn!("Failed to open dialer for {}: {:?}", href, e);
    }
}
