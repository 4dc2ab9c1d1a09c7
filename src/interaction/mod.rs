//! Interactive components modelled as explicit state machines.
//!
//! Components own their transient state and read time from an injected
//! [`Clock`]; timed resets go through [`DelayedTask`] so they can be
//! cancelled and driven deterministically in tests. Browser capabilities
//! are reached through the [`Host`] trait.

mod host;
mod report_form;
mod share;
mod timer;

pub use host::{ClipboardError, HeadlessHost, Host, RecordingHost, SystemHost};
pub use report_form::{
    ACCEPTED_EXTENSIONS, Attachment, DEFAULT_CONFIRMATION, DEFAULT_MAX_ATTACHMENT_MB, FormError,
    FormMode, FormPhase, FormTexts, ReportDraft, ReportForm, accept_attribute,
};
pub use share::{COPIED_LABEL, SHARE_LABEL, ShareButton, share_url};
pub use timer::{Clock, DelayedTask, ManualClock, SystemClock};
