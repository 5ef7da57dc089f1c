use crate::services::logging::Logger;

/// Blocking alert. Failures of user-initiated mutations are surfaced
/// here; read failures only reach the console.
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            let _ = window.alert_with_message(message);
        }
        None => Logger::error("dialog", message),
    }
}

/// Blocking confirmation prompt. Answers `false` when no window is
/// available.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
