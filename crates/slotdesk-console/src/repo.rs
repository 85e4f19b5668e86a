use slotdesk_core::{AppointmentForm, AppointmentFormConfig, FormId, FormTitle};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("form not found: {0}")]
    NotFound(FormId),
    #[error("storage backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone)]
pub struct FormNew {
    pub title: FormTitle,
    pub config: AppointmentFormConfig,
    pub active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct FormUpdate {
    pub title: Option<FormTitle>,
    pub config: Option<AppointmentFormConfig>,
    pub active: Option<bool>,
}

/// Persistence for appointment forms, supplied by the host application.
pub trait FormRepository {
    fn get(&self, id: FormId) -> Result<Option<AppointmentForm>, RepoError>;
    /// Forms ordered by title.
    fn list(&self) -> Result<Vec<AppointmentForm>, RepoError>;
    fn insert(&mut self, now_utc: i64, form: FormNew) -> Result<AppointmentForm, RepoError>;
    fn update(
        &mut self,
        now_utc: i64,
        id: FormId,
        update: FormUpdate,
    ) -> Result<AppointmentForm, RepoError>;
    fn delete(&mut self, id: FormId) -> Result<(), RepoError>;
}

#[derive(Debug, Default)]
pub struct InMemoryFormRepository {
    forms: BTreeMap<FormId, AppointmentForm>,
}

impl InMemoryFormRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormRepository for InMemoryFormRepository {
    fn get(&self, id: FormId) -> Result<Option<AppointmentForm>, RepoError> {
        Ok(self.forms.get(&id).cloned())
    }

    fn list(&self) -> Result<Vec<AppointmentForm>, RepoError> {
        let mut forms: Vec<AppointmentForm> = self.forms.values().cloned().collect();
        forms.sort_by(|a, b| {
            a.title
                .as_str()
                .to_lowercase()
                .cmp(&b.title.as_str().to_lowercase())
                .then(a.id.cmp(&b.id))
        });
        Ok(forms)
    }

    fn insert(&mut self, now_utc: i64, form: FormNew) -> Result<AppointmentForm, RepoError> {
        let created = AppointmentForm {
            id: FormId::new(),
            title: form.title,
            config: form.config,
            active: form.active,
            created_at: now_utc,
            updated_at: now_utc,
        };
        self.forms.insert(created.id, created.clone());
        Ok(created)
    }

    fn update(
        &mut self,
        now_utc: i64,
        id: FormId,
        update: FormUpdate,
    ) -> Result<AppointmentForm, RepoError> {
        let form = self.forms.get_mut(&id).ok_or(RepoError::NotFound(id))?;
        if let Some(title) = update.title {
            form.title = title;
        }
        if let Some(config) = update.config {
            form.config = config;
        }
        if let Some(active) = update.active {
            form.active = active;
        }
        form.updated_at = now_utc;
        Ok(form.clone())
    }

    fn delete(&mut self, id: FormId) -> Result<(), RepoError> {
        match self.forms.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound(id)),
        }
    }
}
