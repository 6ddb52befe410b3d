//! User Notices
//!
//! Blocking confirmation and success/error notices.

/// Interactive prompts shown to the user
pub trait Notifier {
    /// Ask for confirmation; false when declined or unavailable
    fn confirm(&self, message: &str) -> bool;
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// `window.confirm` / `window.alert`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNotifier;

impl BrowserNotifier {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("alert failed: {:?}", e);
            }
        }
    }
}

impl Notifier for BrowserNotifier {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn success(&self, message: &str) {
        self.alert(&format!("✅ {}", message));
    }

    fn error(&self, message: &str) {
        self.alert(&format!("❌ {}", message));
    }
}
