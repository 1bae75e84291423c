use time::macros::format_description;

use crate::services::client::Timestamp;

/// `Mar 5, 2026`
pub fn format_date(timestamp: Timestamp) -> String {
    timestamp
        .to_datetime()
        .format(format_description!(
            "[month repr:short] [day padding:none], [year]"
        ))
        .unwrap_or_default()
}

pub fn format_optional_date(timestamp: Option<Timestamp>, missing: &str) -> String {
    timestamp
        .map(format_date)
        .unwrap_or_else(|| missing.to_string())
}

/// `tel:` link for the native dialer; spaces and dashes are dropped
pub fn tel_href(phone_number: &str) -> String {
    let digits: String = phone_number
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", digits)
}

pub fn donor_count_label(count: usize) -> String {
    if count == 1 {
        "1 donor found".to_string()
    } else {
        format!("{} donors found", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Timestamp::from_date(date!(2026 - 03 - 05)).unwrap()), "Mar 5, 2026");
        assert_eq!(format_optional_date(None, "Never"), "Never");
    }

    #[test]
    fn test_tel_href() {
        assert_eq!(tel_href("+94 77-123 4567"), "tel:+94771234567");
    }

    #[test]
    fn test_donor_count_label() {
        assert_eq!(donor_count_label(0), "0 donors found");
        assert_eq!(donor_count_label(1), "1 donor found");
        assert_eq!(donor_count_label(12), "12 donors found");
    }
}
