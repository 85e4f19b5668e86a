use crate::error::CoreError;
use crate::rules::validation::ViolationCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            _ => Err(CoreError::UnsupportedLocale(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedViolation {
    pub code: ViolationCode,
    pub message: String,
}

/// One message per violation code, built-in per locale, optionally overridden.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageCatalog {
    locale: Locale,
    overrides: BTreeMap<ViolationCode, String>,
}

impl MessageCatalog {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            overrides: BTreeMap::new(),
        }
    }

    pub fn with_override(mut self, code: ViolationCode, text: &str) -> Result<Self, CoreError> {
        self.set_override(code, text)?;
        Ok(self)
    }

    pub fn set_override(&mut self, code: ViolationCode, text: &str) -> Result<(), CoreError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyMessageTemplate(code));
        }
        self.overrides.insert(code, trimmed.to_string());
        Ok(())
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn render(&self, code: ViolationCode) -> &str {
        match self.overrides.get(&code) {
            Some(text) => text.as_str(),
            None => builtin(self.locale, code),
        }
    }

    pub fn render_all(&self, codes: &[ViolationCode]) -> Vec<RenderedViolation> {
        codes
            .iter()
            .map(|code| RenderedViolation {
                code: *code,
                message: self.render(*code).to_string(),
            })
            .collect()
    }

    pub fn entries(&self) -> Vec<RenderedViolation> {
        self.render_all(&ViolationCode::ALL)
    }
}

fn builtin(locale: Locale, code: ViolationCode) -> &'static str {
    match locale {
        Locale::En => match code {
            ViolationCode::TimeStartAfterTimeEnd => {
                "The opening time must not be later than the closing time."
            }
            ViolationCode::DurationExceedsWindow => {
                "The appointment duration must fit within the daily opening hours."
            }
            ViolationCode::DurationNotMultipleOfWindow => {
                "The daily opening hours must divide evenly into appointments of the chosen duration."
            }
            ViolationCode::ValidityStartAfterValidityEnd => {
                "The validity start date must not be later than the validity end date."
            }
            ViolationCode::PeopleExceedCapacity => {
                "The number of people per appointment cannot exceed the capacity of a slot."
            }
            ViolationCode::NoWorkingDayOpen => "At least one working day must be open.",
        },
        Locale::Fr => match code {
            ViolationCode::TimeStartAfterTimeEnd => {
                "L'heure d'ouverture ne peut pas être postérieure à l'heure de fermeture."
            }
            ViolationCode::DurationExceedsWindow => {
                "La durée d'un rendez-vous doit tenir dans la plage horaire d'ouverture."
            }
            ViolationCode::DurationNotMultipleOfWindow => {
                "La plage horaire d'ouverture doit être un multiple de la durée d'un rendez-vous."
            }
            ViolationCode::ValidityStartAfterValidityEnd => {
                "La date de début de validité ne peut pas être postérieure à la date de fin."
            }
            ViolationCode::PeopleExceedCapacity => {
                "Le nombre de personnes par rendez-vous ne peut pas dépasser la capacité d'un créneau."
            }
            ViolationCode::NoWorkingDayOpen => "Au moins un jour de la semaine doit être ouvert.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{Locale, MessageCatalog};
    use crate::rules::validation::ViolationCode;
    use std::collections::HashSet;
    use std::str::FromStr;

    #[test]
    fn every_locale_has_a_distinct_message_per_code() {
        for locale in [Locale::En, Locale::Fr] {
            let catalog = MessageCatalog::new(locale);
            let messages: HashSet<&str> = ViolationCode::ALL
                .iter()
                .map(|code| catalog.render(*code))
                .collect();
            assert_eq!(messages.len(), ViolationCode::ALL.len());
            assert!(messages.iter().all(|message| !message.is_empty()));
        }
    }

    #[test]
    fn override_replaces_only_its_code() {
        let catalog = MessageCatalog::new(Locale::En)
            .with_override(ViolationCode::PeopleExceedCapacity, " Too many people ")
            .unwrap();
        assert_eq!(
            catalog.render(ViolationCode::PeopleExceedCapacity),
            "Too many people"
        );
        assert_eq!(
            catalog.render(ViolationCode::NoWorkingDayOpen),
            MessageCatalog::new(Locale::En).render(ViolationCode::NoWorkingDayOpen)
        );
    }

    #[test]
    fn blank_override_is_rejected() {
        let result =
            MessageCatalog::new(Locale::Fr).with_override(ViolationCode::NoWorkingDayOpen, "  ");
        assert!(result.is_err());
    }

    #[test]
    fn render_all_keeps_order() {
        let catalog = MessageCatalog::new(Locale::En);
        let rendered = catalog.render_all(&[
            ViolationCode::NoWorkingDayOpen,
            ViolationCode::TimeStartAfterTimeEnd,
        ]);
        assert_eq!(rendered[0].code, ViolationCode::NoWorkingDayOpen);
        assert_eq!(rendered[1].code, ViolationCode::TimeStartAfterTimeEnd);
    }

    #[test]
    fn locale_parses_case_insensitively() {
        assert_eq!(Locale::from_str("FR").unwrap(), Locale::Fr);
        assert!(Locale::from_str("de").is_err());
    }
}
