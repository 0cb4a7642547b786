/// Accent color for an automation status. Total and case-insensitive:
/// anything outside the known set falls back to neutral gray.
pub fn status_color(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "acting" => "#30d158",
        "suspended" => "#ff9f0a",
        "idle" => "#64d2ff",
        "learning" => "#bf5af2",
        "error" => "#ff453a",
        _ => "#8e8e93",
    }
}

/// Icon glyph for an HVAC mode, generic placeholder for anything unmapped.
pub fn mode_icon(mode: &str) -> &'static str {
    match mode {
        "heat" => "🔥",
        "cool" => "❄️",
        "off" => "⏸️",
        "auto" => "🔄",
        _ => "•",
    }
}
