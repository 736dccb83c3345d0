//! Contact form draft and the simulated submission.
//!
//! Nothing leaves the process: "submitting" is a fixed delay followed by the
//! success state.

use crate::lang::Lang;
use std::fmt;
use std::future::Future;
use std::time::Duration;

pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub preferred_language: Lang,
    pub needs: String,
}

/// Required form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Email,
    Needs,
}

impl DraftField {
    pub fn label_key(self) -> &'static str {
        match self {
            DraftField::Name => "contact.form.name",
            DraftField::Email => "contact.form.email",
            DraftField::Needs => "contact.form.needs",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DraftField::Name => "name",
            DraftField::Email => "email",
            DraftField::Needs => "needs",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("required field is empty: {0}")]
    Missing(DraftField),
    #[error("form is not idle (currently {0:?})")]
    NotIdle(SubmissionStatus),
}

impl ContactDraft {
    /// First required field left blank, in form order.
    pub fn missing_field(&self) -> Option<DraftField> {
        [
            (DraftField::Name, &self.name),
            (DraftField::Email, &self.email),
            (DraftField::Needs, &self.needs),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        match self.missing_field() {
            Some(field) => Err(DraftError::Missing(field)),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl SubmissionStatus {
    pub fn is_submitting(self) -> bool {
        self == SubmissionStatus::Submitting
    }

    /// `Idle -> Submitting`, only for a complete draft.
    pub fn begin(self, draft: &ContactDraft) -> Result<Self, DraftError> {
        if self != SubmissionStatus::Idle {
            return Err(DraftError::NotIdle(self));
        }
        draft.validate()?;
        Ok(SubmissionStatus::Submitting)
    }

    /// `Submitting -> Submitted`; other states are left alone.
    pub fn finish(self) -> Self {
        match self {
            SubmissionStatus::Submitting => SubmissionStatus::Submitted,
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionSimulator {
    delay: Duration,
}

impl Default for SubmissionSimulator {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

impl SubmissionSimulator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Drive `current -> Submitting -> Submitted`, reporting each state to
    /// `on_status`. The caller supplies the timer so the same code runs on
    /// the browser's event loop and on tokio.
    pub async fn submit<S, F>(
        &self,
        current: SubmissionStatus,
        draft: &ContactDraft,
        sleep: S,
        mut on_status: impl FnMut(SubmissionStatus),
    ) -> Result<SubmissionStatus, DraftError>
    where
        S: FnOnce(Duration) -> F,
        F: Future<Output = ()>,
    {
        let submitting = current.begin(draft)?;
        on_status(submitting);

        sleep(self.delay).await;

        let done = submitting.finish();
        tracing::info!(
            preferred_language = %draft.preferred_language,
            delay_ms = self.delay.as_millis() as u64,
            "contact request accepted (simulated)"
        );
        on_status(done);
        Ok(done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> ContactDraft {
        ContactDraft {
            name: "Jeanne Tremblay".into(),
            email: "jeanne@example.com".into(),
            phone: String::new(),
            preferred_language: Lang::Fr,
            needs: "Configurer ma tablette".into(),
        }
    }

    #[test]
    fn phone_is_optional() {
        assert_eq!(complete_draft().validate(), Ok(()));
    }

    #[test]
    fn reports_first_missing_field_in_form_order() {
        let draft = ContactDraft {
            email: "   ".into(),
            needs: String::new(),
            ..complete_draft()
        };
        assert_eq!(draft.missing_field(), Some(DraftField::Email));
        assert_eq!(
            ContactDraft::default().validate(),
            Err(DraftError::Missing(DraftField::Name))
        );
    }

    #[test]
    fn begin_requires_idle_and_complete_draft() {
        let draft = complete_draft();
        assert_eq!(
            SubmissionStatus::Idle.begin(&draft),
            Ok(SubmissionStatus::Submitting)
        );
        assert_eq!(
            SubmissionStatus::Submitting.begin(&draft),
            Err(DraftError::NotIdle(SubmissionStatus::Submitting))
        );
        assert_eq!(
            SubmissionStatus::Idle.begin(&ContactDraft::default()),
            Err(DraftError::Missing(DraftField::Name))
        );
    }

    #[test]
    fn finish_only_moves_from_submitting() {
        assert_eq!(SubmissionStatus::Submitting.finish(), SubmissionStatus::Submitted);
        assert_eq!(SubmissionStatus::Idle.finish(), SubmissionStatus::Idle);
        assert_eq!(SubmissionStatus::Submitted.finish(), SubmissionStatus::Submitted);
    }

    #[test]
    fn labels_point_at_catalog_keys() {
        assert_eq!(DraftField::Needs.label_key(), "contact.form.needs");
        assert_eq!(DraftField::Email.to_string(), "email");
    }

    #[tokio::test(start_paused = true)]
    async fn incomplete_draft_never_reports_a_status() {
        let mut seen = Vec::new();
        let res = SubmissionSimulator::default()
            .submit(
                SubmissionStatus::Idle,
                &ContactDraft::default(),
                tokio::time::sleep,
                |s| seen.push(s),
            )
            .await;
        assert!(res.is_err());
        assert!(seen.is_empty());
    }
}
