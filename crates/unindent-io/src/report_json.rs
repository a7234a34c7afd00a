use unindent_core::report::UnindentReport;

/// Serialize as minified JSON (no whitespace).
pub fn to_minified_json(report: &UnindentReport) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize as pretty JSON (for humans).
pub fn to_pretty_json(report: &UnindentReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
