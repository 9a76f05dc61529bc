//! Duration utilities: parsing "H:M[:S]" strings into decimal hours and
//! formatting decimal hours for display.

/// Parse a spreadsheet duration cell ("1:30", "01:30:00") into decimal hours.
///
/// The branch tabs are hand-filled, so anything unparsable is coerced to
/// 0.0 instead of surfacing a row-level error. "00:00:00" and the empty
/// string are the usual placeholders for "no overtime".
pub fn parse_duration(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() || s == "00:00:00" {
        return 0.0;
    }

    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return 0.0;
    }

    let hours: i64 = match parts[0].trim().parse() {
        Ok(h) => h,
        Err(_) => return 0.0,
    };
    let minutes: i64 = match parts[1].trim().parse() {
        Ok(m) => m,
        Err(_) => return 0.0,
    };
    let seconds: i64 = if parts.len() == 3 {
        match parts[2].trim().parse() {
            Ok(s) => s,
            Err(_) => return 0.0,
        }
    } else {
        0
    };

    hours as f64 + (minutes as f64 / 60.0) + (seconds as f64 / 3600.0)
}

/// Format decimal hours as "H:MMh" (es: 2.5 → "2:30h").
/// Display-only: not required to round-trip with [`parse_duration`].
pub fn format_hours(hours: f64) -> String {
    let total_minutes = (hours.abs() * 60.0).round() as i64;
    let sign = if hours < 0.0 { "-" } else { "" };
    format!("{}{}:{:02}h", sign, total_minutes / 60, total_minutes % 60)
}
