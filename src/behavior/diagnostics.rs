/// Duration of the load event from navigation timing, in milliseconds.
///
/// `None` while the load event has not finished (end still zero) or when the
/// entry is inconsistent.
pub fn load_event_duration(load_event_start: f64, load_event_end: f64) -> Option<f64> {
    if load_event_end <= 0.0 || load_event_end < load_event_start {
        return None;
    }
    Some(load_event_end - load_event_start)
}

pub fn load_report(duration_ms: f64) -> String {
    format!("Page loaded in {}ms", duration_ms)
}

/// One-line description of an uncaught error for the console.
pub fn describe_error(message: &str, filename: &str, line: u32, column: u32) -> String {
    if filename.is_empty() {
        format!("An error occurred: {}", message)
    } else {
        format!("An error occurred: {} ({}:{}:{})", message, filename, line, column)
    }
}
