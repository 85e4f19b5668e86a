use crate::domain::{AppointmentForm, FormId};
use crate::messages::{MessageCatalog, RenderedViolation};
use crate::permissions::FormAction;
use crate::rules::{Slot, ValidationResult};
use crate::time::{format_date, format_time_of_day};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReportDto {
    pub valid: bool,
    pub violations: Vec<RenderedViolation>,
}

impl ValidationReportDto {
    pub fn new(result: &ValidationResult, catalog: &MessageCatalog) -> Self {
        Self {
            valid: result.is_valid(),
            violations: catalog.render_all(result.violations()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDto {
    pub date: String,
    pub start: String,
    pub end: String,
    pub capacity: u32,
}

impl From<&Slot> for SlotDto {
    fn from(slot: &Slot) -> Self {
        Self {
            date: format_date(slot.starts_at.date()),
            start: format_time_of_day(slot.starts_at.time()),
            end: format_time_of_day(slot.ends_at.time()),
            capacity: slot.capacity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormListItemDto {
    pub id: FormId,
    pub title: String,
    pub active: bool,
    pub actions: BTreeSet<FormAction>,
}

impl FormListItemDto {
    pub fn new(form: &AppointmentForm, actions: BTreeSet<FormAction>) -> Self {
        Self {
            id: form.id,
            title: form.title.as_str().to_string(),
            active: form.active,
            actions,
        }
    }
}
