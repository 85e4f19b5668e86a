//! Controller layer for the form administration screens.
//!
//! Each operation checks the caller's permission first, then works against
//! the session's pending edit and the form repository.

use crate::error::{ConsoleError, Result};
use crate::params::parse_form_params;
use crate::repo::{FormNew, FormRepository, FormUpdate, RepoError};
use crate::session::{FormDraft, PendingEdits, SessionId};
use slotdesk_core::{
    is_allowed, permission_matrix, AppointmentForm, FormAction, FormConstraintValidator, FormId,
    FormListItemDto, FormResource, MessageCatalog, RenderedViolation, Subject,
};
use std::collections::HashMap;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The configuration broke one or more constraints; show the form again.
    Redisplay {
        draft: FormDraft,
        messages: Vec<RenderedViolation>,
    },
    /// A parameter could not be read.
    Rejected {
        draft: FormDraft,
        field: &'static str,
        message: String,
    },
    Saved {
        form_id: FormId,
    },
}

pub struct FormConsole<'a, R: FormRepository> {
    repo: &'a mut R,
    edits: &'a mut PendingEdits,
    catalog: &'a MessageCatalog,
    validator: FormConstraintValidator,
}

impl<'a, R: FormRepository> FormConsole<'a, R> {
    pub fn new(repo: &'a mut R, edits: &'a mut PendingEdits, catalog: &'a MessageCatalog) -> Self {
        Self {
            repo,
            edits,
            catalog,
            validator: FormConstraintValidator,
        }
    }

    pub fn view_create(&mut self, subject: &Subject, session: &SessionId) -> Result<FormDraft> {
        ensure_allowed(subject, FormResource::AnyForm, FormAction::Create)?;

        // A pending modify draft belongs to another form.
        if matches!(self.edits.get(session), Some(draft) if draft.form_id.is_some()) {
            self.edits.discard(session);
        }
        debug!(session = %session, "create view");
        Ok(self.edits.get_or_insert_with(session, FormDraft::blank).clone())
    }

    pub fn view_modify(
        &mut self,
        subject: &Subject,
        session: &SessionId,
        form_id: FormId,
    ) -> Result<FormDraft> {
        ensure_allowed(subject, FormResource::Form(form_id), FormAction::Modify)?;

        if let Some(draft) = self.edits.get(session) {
            if draft.form_id == Some(form_id) {
                debug!(session = %session, form = %form_id, "modify view reuses pending edit");
                return Ok(draft.clone());
            }
        }

        let form = self.load(form_id)?;
        let draft = FormDraft::from_form(&form);
        self.edits.replace(session, draft.clone());
        debug!(session = %session, form = %form_id, "modify view");
        Ok(draft)
    }

    pub fn submit(
        &mut self,
        subject: &Subject,
        session: &SessionId,
        params: &HashMap<String, String>,
        now_utc: i64,
    ) -> Result<SubmitOutcome> {
        let pending = self
            .edits
            .get(session)
            .cloned()
            .ok_or(ConsoleError::NoPendingEdit)?;
        match pending.form_id {
            Some(id) => ensure_allowed(subject, FormResource::Form(id), FormAction::Modify)?,
            None => ensure_allowed(subject, FormResource::AnyForm, FormAction::Create)?,
        }

        let submission = match parse_form_params(params) {
            Ok(submission) => submission,
            Err(err) => {
                debug!(session = %session, field = err.field(), "form parameter rejected");
                return Ok(SubmitOutcome::Rejected {
                    draft: pending,
                    field: err.field(),
                    message: err.to_string(),
                });
            }
        };

        let draft = FormDraft {
            form_id: pending.form_id,
            title: submission.title.as_str().to_string(),
            config: submission.config.clone(),
        };

        let result = self.validator.validate(&submission.config);
        if !result.is_valid() {
            debug!(
                session = %session,
                violations = result.violations().len(),
                "form configuration rejected"
            );
            self.edits.replace(session, draft.clone());
            return Ok(SubmitOutcome::Redisplay {
                draft,
                messages: self.catalog.render_all(result.violations()),
            });
        }

        let saved = match pending.form_id {
            Some(id) => self
                .repo
                .update(
                    now_utc,
                    id,
                    FormUpdate {
                        title: Some(submission.title),
                        config: Some(submission.config),
                        active: None,
                    },
                )
                .map_err(|err| not_found_or(err, id))?,
            None => self.repo.insert(
                now_utc,
                FormNew {
                    title: submission.title,
                    config: submission.config,
                    active: false,
                },
            )?,
        };

        self.edits.take(session);
        info!(form = %saved.id, subject = %subject.id, "form saved");
        Ok(SubmitOutcome::Saved { form_id: saved.id })
    }

    pub fn cancel(&mut self, session: &SessionId) -> bool {
        self.edits.discard(session)
    }

    pub fn delete(&mut self, subject: &Subject, form_id: FormId) -> Result<()> {
        ensure_allowed(subject, FormResource::Form(form_id), FormAction::Delete)?;
        self.repo
            .delete(form_id)
            .map_err(|err| not_found_or(err, form_id))?;
        info!(form = %form_id, subject = %subject.id, "form deleted");
        Ok(())
    }

    /// Duplicates a stored form as a new inactive form.
    pub fn copy(
        &mut self,
        subject: &Subject,
        form_id: FormId,
        now_utc: i64,
    ) -> Result<AppointmentForm> {
        ensure_allowed(subject, FormResource::Form(form_id), FormAction::Copy)?;
        let source = self.load(form_id)?;
        let copied = self.repo.insert(
            now_utc,
            FormNew {
                title: source.title.copy_title(),
                config: source.config,
                active: false,
            },
        )?;
        info!(form = %copied.id, source = %form_id, subject = %subject.id, "form copied");
        Ok(copied)
    }

    pub fn set_active(
        &mut self,
        subject: &Subject,
        form_id: FormId,
        active: bool,
        now_utc: i64,
    ) -> Result<AppointmentForm> {
        ensure_allowed(subject, FormResource::Form(form_id), FormAction::ChangeState)?;
        let form = self.load(form_id)?;
        if active {
            // Only a form that passes validation can take bookings.
            let result = self.validator.validate(&form.config);
            if !result.is_valid() {
                return Err(ConsoleError::InvalidForm {
                    form_id,
                    violations: result.violations().to_vec(),
                });
            }
        }
        let updated = self
            .repo
            .update(
                now_utc,
                form_id,
                FormUpdate {
                    active: Some(active),
                    ..Default::default()
                },
            )
            .map_err(|err| not_found_or(err, form_id))?;
        info!(form = %form_id, active, "form state changed");
        Ok(updated)
    }

    /// Forms the subject may view, with the actions allowed on each.
    pub fn dashboard(&self, subject: &Subject) -> Result<Vec<FormListItemDto>> {
        let forms = self.repo.list()?;
        let rows = permission_matrix(subject, forms.iter().map(|form| form.id));
        Ok(forms
            .iter()
            .zip(rows)
            .filter(|(_, row)| row.allows(FormAction::View))
            .map(|(form, row)| FormListItemDto::new(form, row.allowed))
            .collect())
    }

    fn load(&self, form_id: FormId) -> Result<AppointmentForm> {
        self.repo
            .get(form_id)?
            .ok_or(ConsoleError::NotFound(form_id))
    }
}

fn ensure_allowed(subject: &Subject, resource: FormResource, action: FormAction) -> Result<()> {
    if is_allowed(subject, resource, action) {
        return Ok(());
    }
    debug!(subject = %subject.id, ?action, "permission denied");
    Err(ConsoleError::Forbidden {
        subject: subject.id.clone(),
        action,
    })
}

fn not_found_or(err: RepoError, form_id: FormId) -> ConsoleError {
    match err {
        RepoError::NotFound(_) => ConsoleError::NotFound(form_id),
        other => ConsoleError::Repo(other),
    }
}
