//! Share button: copies the profile URL and briefly confirms.

use super::host::Host;
use super::timer::{Clock, DelayedTask};
use std::time::Duration;

pub const SHARE_LABEL: &str = "Udostępnij";
pub const COPIED_LABEL: &str = "Skopiowano!";

/// Profile URL for `id`, absolute when the host knows its origin.
#[must_use]
pub fn share_url(host: &dyn Host, id: &str) -> String {
    match host.origin() {
        Some(origin) => format!("{}/firma/{id}", origin.trim_end_matches('/')),
        None => format!("/firma/{id}"),
    }
}

#[derive(Debug)]
pub struct ShareButton<C: Clock> {
    clock: C,
    url: String,
    confirm_for: Duration,
    copied: bool,
    revert: DelayedTask,
}

impl<C: Clock> ShareButton<C> {
    pub fn new(clock: C, url: impl Into<String>, confirm_for: Duration) -> Self {
        Self {
            clock,
            url: url.into(),
            confirm_for,
            copied: false,
            revert: DelayedTask::new(),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Copy the URL. Returns whether the clipboard accepted it.
    ///
    /// A failed copy is logged and leaves the label untouched.
    pub fn click(&mut self, host: &mut dyn Host) -> bool {
        match host.write_clipboard(&self.url) {
            Ok(()) => {
                self.copied = true;
                self.revert.schedule(self.clock.now(), self.confirm_for);
                tracing::debug!("Copied {} to clipboard", self.url);
                true
            }
            Err(e) => {
                tracing::error!("Failed to copy URL: {}", e);
                false
            }
        }
    }

    /// Advance timers. Returns `true` when the label changed.
    pub fn tick(&mut self) -> bool {
        if self.revert.fire_if_due(self.clock.now()) {
            self.copied = false;
            return true;
        }
        false
    }

    /// Drop pending timers and show the idle label again.
    pub fn unmount(&mut self) {
        self.revert.cancel();
        self.copied = false;
    }

    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        self.copied
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        if self.copied { COPIED_LABEL } else { SHARE_LABEL }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::host::{ClipboardError, HeadlessHost, RecordingHost};
    use crate::interaction::timer::ManualClock;

    #[test]
    fn test_share_url_with_and_without_origin() {
        let host = RecordingHost::new(Some("https://czypolskafirma.pl/"));
        assert_eq!(share_url(&host, "murator"), "https://czypolskafirma.pl/firma/murator");
        assert_eq!(share_url(&HeadlessHost::default(), "murator"), "/firma/murator");
    }

    #[test]
    fn test_failure_keeps_label() {
        let clock = ManualClock::new();
        let mut host = RecordingHost::new(None).failing(ClipboardError::Denied("nope".into()));
        let mut button = ShareButton::new(&clock, "/firma/x", Duration::from_millis(2000));

        assert!(!button.click(&mut host));
        assert_eq!(button.label(), SHARE_LABEL);
        assert!(host.copied.is_empty());
    }

    #[test]
    fn test_unmount_cancels_revert() {
        let clock = ManualClock::new();
        let mut host = RecordingHost::new(None);
        let mut button = ShareButton::new(&clock, "/firma/x", Duration::from_millis(2000));

        button.click(&mut host);
        button.unmount();
        clock.advance(Duration::from_secs(10));
        assert!(!button.tick());
    }
}
