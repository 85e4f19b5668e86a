use slotdesk_core::{AppointmentForm, AppointmentFormConfig, FormId};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A form being edited. `form_id` is `None` while creating a new form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDraft {
    pub form_id: Option<FormId>,
    pub title: String,
    pub config: AppointmentFormConfig,
}

impl FormDraft {
    pub fn blank() -> Self {
        Self {
            form_id: None,
            title: String::new(),
            config: AppointmentFormConfig::default(),
        }
    }

    pub fn from_form(form: &AppointmentForm) -> Self {
        Self {
            form_id: Some(form.id),
            title: form.title.as_str().to_string(),
            config: form.config.clone(),
        }
    }
}

/// Drafts held between the edit view and its submission, one per session.
#[derive(Debug, Default)]
pub struct PendingEdits {
    drafts: HashMap<SessionId, FormDraft>,
}

impl PendingEdits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, session: &SessionId) -> Option<&FormDraft> {
        self.drafts.get(session)
    }

    pub fn get_or_insert_with<F>(&mut self, session: &SessionId, create: F) -> &FormDraft
    where
        F: FnOnce() -> FormDraft,
    {
        self.drafts.entry(session.clone()).or_insert_with(create)
    }

    pub fn replace(&mut self, session: &SessionId, draft: FormDraft) -> Option<FormDraft> {
        self.drafts.insert(session.clone(), draft)
    }

    pub fn take(&mut self, session: &SessionId) -> Option<FormDraft> {
        self.drafts.remove(session)
    }

    pub fn discard(&mut self, session: &SessionId) -> bool {
        self.drafts.remove(session).is_some()
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}
