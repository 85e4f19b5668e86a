//! Capability checks for form administration.
//!
//! `is_allowed` is a pure function of its inputs. Dashboards call it once per
//! listed form and action through `permission_matrix`.

use crate::domain::FormId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormAction {
    View,
    Create,
    Modify,
    Delete,
    ChangeState,
    Copy,
}

impl FormAction {
    pub const ALL: [FormAction; 6] = [
        FormAction::View,
        FormAction::Create,
        FormAction::Modify,
        FormAction::Delete,
        FormAction::ChangeState,
        FormAction::Copy,
    ];

    /// Actions that apply to an existing form, as shown on a dashboard row.
    pub const PER_FORM: [FormAction; 5] = [
        FormAction::View,
        FormAction::Modify,
        FormAction::Delete,
        FormAction::ChangeState,
        FormAction::Copy,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormResource {
    AnyForm,
    Form(FormId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantScope {
    AllForms,
    Form(FormId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grant {
    pub scope: GrantScope,
    pub actions: BTreeSet<FormAction>,
}

impl Grant {
    pub fn new<I>(scope: GrantScope, actions: I) -> Self
    where
        I: IntoIterator<Item = FormAction>,
    {
        Self {
            scope,
            actions: actions.into_iter().collect(),
        }
    }

    fn covers(&self, resource: FormResource) -> bool {
        match (self.scope, resource) {
            (GrantScope::AllForms, _) => true,
            (GrantScope::Form(granted), FormResource::Form(id)) => granted == id,
            (GrantScope::Form(_), FormResource::AnyForm) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub grants: Vec<Grant>,
}

impl Subject {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            grants: Vec::new(),
        }
    }

    pub fn with_grant(mut self, grant: Grant) -> Self {
        self.grants.push(grant);
        self
    }

    pub fn administrator(id: impl Into<String>) -> Self {
        Self::new(id).with_grant(Grant::new(GrantScope::AllForms, FormAction::ALL))
    }
}

pub fn is_allowed(subject: &Subject, resource: FormResource, action: FormAction) -> bool {
    // Creating is never tied to an existing form.
    if action == FormAction::Create && resource != FormResource::AnyForm {
        return false;
    }
    subject
        .grants
        .iter()
        .any(|grant| grant.covers(resource) && grant.actions.contains(&action))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormPermissionRow {
    pub form_id: FormId,
    pub allowed: BTreeSet<FormAction>,
}

impl FormPermissionRow {
    pub fn allows(&self, action: FormAction) -> bool {
        self.allowed.contains(&action)
    }
}

pub fn permission_matrix<I>(subject: &Subject, forms: I) -> Vec<FormPermissionRow>
where
    I: IntoIterator<Item = FormId>,
{
    forms
        .into_iter()
        .map(|form_id| FormPermissionRow {
            form_id,
            allowed: FormAction::PER_FORM
                .into_iter()
                .filter(|action| is_allowed(subject, FormResource::Form(form_id), *action))
                .collect(),
        })
        .collect()
}
