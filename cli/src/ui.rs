use colored::Colorize;
use serde_json::Value;

/// Title of the blocking tip shown for sentinel failures
const ALERT_TITLE: &str = "Failed to fetch data";

pub fn success_message(message: &str) {
    println!("{} {}", "✅".green(), message.green());
}

pub fn warning_message(message: &str) {
    println!("{} {}", "⚠️ ".yellow(), message.yellow());
}

pub fn error_message(message: &str) {
    eprintln!("{} {}", "❌".red(), message.red().bold());
}

pub fn section_header(title: &str) {
    println!("\n{}", format!("==== {} ====", title).cyan().bold());
}

pub fn info_message(message: &str) {
    println!("{} {}", "ℹ️ ".blue(), message.blue());
}

/// Brief failure note, e.g. "quota exceeded # 4003"
pub fn notice_line(message: &str, code: i64) -> String {
    format!("{message} # {code}")
}

/// Print a business or protocol failure as a one-line notice
pub fn outcome_notice(message: &str, code: i64) {
    warning_message(&notice_line(message, code));
}

/// Print a transport or decode failure as a titled alert on stderr
pub fn outcome_alert(message: &str) {
    eprintln!("\n{}", format!("==== {ALERT_TITLE} ====").red().bold());
    error_message(message);
}

/// Pretty JSON for a success payload, `None` when the payload is null
pub fn render_payload(payload: &Value) -> Option<String> {
    if payload.is_null() {
        return None;
    }
    Some(serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string()))
}

/// Print a success payload below a success line
pub fn outcome_payload(payload: &Value) {
    success_message("Request succeeded");
    if let Some(rendered) = render_payload(payload) {
        println!("{rendered}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_notice_line() {
        assert_eq!(notice_line("quota exceeded", 4003), "quota exceeded # 4003");
        assert_eq!(notice_line("", 9), " # 9");
        assert_eq!(notice_line("Service Unavailable", 503), "Service Unavailable # 503");
    }

    #[test]
    fn test_render_payload() {
        assert_eq!(render_payload(&Value::Null), None);
        assert_eq!(render_payload(&json!(5)).as_deref(), Some("5"));

        let rendered = render_payload(&json!({"id": 7})).unwrap();
        assert_eq!(rendered, "{\n  \"id\": 7\n}");
    }
}
