//! Report dialog state machine.
//!
//! The dialog moves `Closed -> Editing -> Submitted -> Closed`. Submission
//! never leaves the process: it shows a thank-you message and schedules a
//! reset, after which the draft is cleared and the dialog closes.

use super::timer::{Clock, DelayedTask};
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;
use thiserror::Error;

/// Default time the thank-you message stays visible.
pub const DEFAULT_CONFIRMATION: Duration = Duration::from_millis(2000);

/// Default attachment limit in megabytes.
pub const DEFAULT_MAX_ATTACHMENT_MB: u64 = 10;

/// File extensions offered by the attachment picker.
pub const ACCEPTED_EXTENSIONS: &[&str] = &[
    "pdf", "doc", "docx", "jpg", "jpeg", "png", "gif", "txt", "csv", "xlsx", "xls",
];

static URL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("static regex"));
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex"));

/// `accept` attribute value for the attachment input.
#[must_use]
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Which subject the dialog reports on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// New brand or correction, name typed by the user
    Brand,
    /// Index information for a known company; name is fixed
    Company { name: String },
}

impl FormMode {
    #[must_use]
    pub fn prefill(&self) -> &str {
        match self {
            Self::Brand => "",
            Self::Company { name } => name,
        }
    }

    #[must_use]
    pub const fn is_company(&self) -> bool {
        matches!(self, Self::Company { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Closed,
    Editing,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub size_bytes: u64,
}

impl Attachment {
    /// Size in megabytes with two decimals, as shown after picking a file.
    #[must_use]
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size_bytes as f64 / 1024.0 / 1024.0)
    }
}

/// Field values typed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportDraft {
    pub brand_name: String,
    pub source_url: String,
    pub comment: String,
    pub email: String,
    pub attachment: Option<Attachment>,
}

impl ReportDraft {
    fn prefilled(mode: &FormMode) -> Self {
        Self {
            brand_name: mode.prefill().to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Plik jest za duży. Maksymalny rozmiar to {limit_mb}MB.")]
    AttachmentTooLarge { size_bytes: u64, limit_mb: u64 },
    #[error("Nieobsługiwany format pliku: {0}")]
    UnsupportedFileType(String),
    #[error("Pole \"{0}\" jest wymagane.")]
    MissingField(&'static str),
    #[error("Podaj poprawny adres URL (http:// lub https://).")]
    InvalidUrl,
    #[error("Podaj poprawny adres e-mail.")]
    InvalidEmail,
    #[error("Formularz nie jest otwarty.")]
    NotEditing,
}

/// Texts that differ between the two modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormTexts {
    pub title: String,
    pub name_label: &'static str,
    pub name_placeholder: String,
    pub source_label: &'static str,
    pub source_placeholder: &'static str,
    pub comment_label: &'static str,
    pub comment_placeholder: &'static str,
    pub email_hint: &'static str,
    pub submit: &'static str,
    pub thanks_heading: &'static str,
    pub thanks_body: &'static str,
}

impl FormTexts {
    #[must_use]
    pub fn for_mode(mode: &FormMode) -> Self {
        match mode {
            FormMode::Brand => Self {
                title: "Zgłoś markę lub poprawkę".to_string(),
                name_label: "Nazwa marki *",
                name_placeholder: "np. Przykładowa Marka".to_string(),
                source_label: "Link do źródła *",
                source_placeholder: "https://...",
                comment_label: "Komentarz",
                comment_placeholder: "Dodatkowe informacje...",
                email_hint: "Podaj email, aby otrzymać powiadomienie gdy firma zostanie dodana lub zaktualizowana.",
                submit: "Wyślij zgłoszenie",
                thanks_heading: "Dziękujemy za zgłoszenie!",
                thanks_body: "Sprawdzimy podane informacje i dodamy je do bazy.",
            },
            FormMode::Company { name } => Self {
                title: format!("Zgłoś indeks polskości dla {name}"),
                name_label: "Nazwa firmy *",
                name_placeholder: name.clone(),
                source_label: "Link do źródła informacji o firmie *",
                source_placeholder: "https://... (KRS, strona firmy, raport roczny)",
                comment_label: "Informacje o firmie",
                comment_placeholder: "Opisz strukturę właścicielską, siedzibę, podatki, produkcję, zatrudnienie...",
                email_hint: "Podaj email, aby otrzymać powiadomienie gdy indeks zostanie zaktualizowany.",
                submit: "Wyślij informacje o firmie",
                thanks_heading: "Dziękujemy za zgłoszenie indeksu!",
                thanks_body: "Sprawdzimy podane informacje i zaktualizujemy indeks polskości.",
            },
        }
    }
}

/// The report dialog.
#[derive(Debug)]
pub struct ReportForm<C: Clock> {
    clock: C,
    mode: FormMode,
    phase: FormPhase,
    draft: ReportDraft,
    reset: DelayedTask,
    confirm_for: Duration,
    max_attachment_mb: u64,
}

impl<C: Clock> ReportForm<C> {
    pub fn new(clock: C, mode: FormMode) -> Self {
        let draft = ReportDraft::prefilled(&mode);
        Self {
            clock,
            mode,
            phase: FormPhase::Closed,
            draft,
            reset: DelayedTask::new(),
            confirm_for: DEFAULT_CONFIRMATION,
            max_attachment_mb: DEFAULT_MAX_ATTACHMENT_MB,
        }
    }

    #[must_use]
    pub const fn with_confirmation(mut self, confirm_for: Duration) -> Self {
        self.confirm_for = confirm_for;
        self
    }

    #[must_use]
    pub const fn with_max_attachment_mb(mut self, limit_mb: u64) -> Self {
        self.max_attachment_mb = limit_mb;
        self
    }

    pub fn open(&mut self) {
        if self.phase == FormPhase::Closed {
            self.phase = FormPhase::Editing;
        }
    }

    /// Close the dialog, discarding the draft and any pending reset.
    pub fn close(&mut self) {
        self.reset.cancel();
        self.draft = ReportDraft::prefilled(&self.mode);
        self.phase = FormPhase::Closed;
    }

    /// Ignored in company mode, where the name is fixed.
    pub fn set_brand_name(&mut self, value: impl Into<String>) {
        if self.phase == FormPhase::Editing && !self.mode.is_company() {
            self.draft.brand_name = value.into();
        }
    }

    pub fn set_source_url(&mut self, value: impl Into<String>) {
        if self.phase == FormPhase::Editing {
            self.draft.source_url = value.into();
        }
    }

    pub fn set_comment(&mut self, value: impl Into<String>) {
        if self.phase == FormPhase::Editing {
            self.draft.comment = value.into();
        }
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        if self.phase == FormPhase::Editing {
            self.draft.email = value.into();
        }
    }

    /// Attach a file. Rejected files leave the draft unchanged.
    pub fn attach(&mut self, name: impl Into<String>, size_bytes: u64) -> Result<(), FormError> {
        if self.phase != FormPhase::Editing {
            return Err(FormError::NotEditing);
        }
        let name = name.into();
        if size_bytes > self.max_attachment_bytes() {
            tracing::warn!("Rejected attachment {} ({} bytes)", name, size_bytes);
            return Err(FormError::AttachmentTooLarge {
                size_bytes,
                limit_mb: self.max_attachment_mb,
            });
        }
        let accepted = name
            .rsplit_once('.')
            .is_some_and(|(_, ext)| ACCEPTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()));
        if !accepted {
            return Err(FormError::UnsupportedFileType(name));
        }
        self.draft.attachment = Some(Attachment { name, size_bytes });
        Ok(())
    }

    pub fn remove_attachment(&mut self) {
        if self.phase == FormPhase::Editing {
            self.draft.attachment = None;
        }
    }

    /// Accept the draft and schedule the reset.
    pub fn submit(&mut self) -> Result<(), FormError> {
        if self.phase != FormPhase::Editing {
            return Err(FormError::NotEditing);
        }
        self.check_draft()?;

        tracing::info!(
            "Report for '{}' accepted locally (source: {})",
            self.draft.brand_name,
            self.draft.source_url
        );
        self.phase = FormPhase::Submitted;
        self.reset.schedule(self.clock.now(), self.confirm_for);
        Ok(())
    }

    /// Advance timers. Returns `true` when the dialog was reset.
    pub fn tick(&mut self) -> bool {
        if self.reset.fire_if_due(self.clock.now()) {
            self.draft = ReportDraft::prefilled(&self.mode);
            self.phase = FormPhase::Closed;
            return true;
        }
        false
    }

    /// Drop pending timers and leave the form closed with a fresh draft.
    pub fn unmount(&mut self) {
        self.close();
    }

    #[must_use]
    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    #[must_use]
    pub const fn draft(&self) -> &ReportDraft {
        &self.draft
    }

    #[must_use]
    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    #[must_use]
    pub const fn reset_pending(&self) -> bool {
        self.reset.is_pending()
    }

    #[must_use]
    pub fn texts(&self) -> FormTexts {
        FormTexts::for_mode(&self.mode)
    }

    const fn max_attachment_bytes(&self) -> u64 {
        self.max_attachment_mb * 1024 * 1024
    }

    fn check_draft(&self) -> Result<(), FormError> {
        let texts = self.texts();
        if self.draft.brand_name.trim().is_empty() {
            return Err(FormError::MissingField(texts.name_label.trim_end_matches(" *")));
        }
        let url = self.draft.source_url.trim();
        if url.is_empty() {
            return Err(FormError::MissingField(texts.source_label.trim_end_matches(" *")));
        }
        if !URL_SHAPE.is_match(url) {
            return Err(FormError::InvalidUrl);
        }
        let email = self.draft.email.trim();
        if !email.is_empty() && !EMAIL_SHAPE.is_match(email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}
