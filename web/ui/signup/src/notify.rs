/// Blocking user notification used to report the submit outcome.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// `window.alert()`, which blocks until the user dismisses it.
pub struct WindowAlert;

impl Notifier for WindowAlert {
    fn notify(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("No window to alert: {}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::error!("Alert failed: {:?}", e);
        }
    }
}
