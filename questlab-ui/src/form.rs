//! An input form with per-field validation rules.
//!
//! Submitting checks every field and either returns the values or a single
//! error [`Dialog`] listing every problem, one per line.

use crate::{Dialog, UiError, UiResult, View};
use std::collections::BTreeMap;
use tracing::debug;

/// A validation rule for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Required,
    MaxLength(usize),
    /// A whole number within `min..=max`.
    Integer { min: i64, max: i64 },
    /// One of a fixed set of choices, compared case-insensitively.
    OneOf(Vec<String>),
}

impl Rule {
    pub fn one_of<S: Into<String>>(choices: impl IntoIterator<Item = S>) -> Self {
        Self::OneOf(choices.into_iter().map(Into::into).collect())
    }

    /// The problem with `value`, phrased to follow the field label.
    fn check(&self, value: &str) -> Option<String> {
        let value = value.trim();
        match self {
            Self::Required if value.is_empty() => Some("is required".to_string()),
            Self::MaxLength(max) if value.chars().count() > *max => {
                Some(format!("must be at most {max} characters"))
            }
            Self::Integer { min, max } if !value.is_empty() => match value.parse::<i64>() {
                Err(_) => Some(format!("{value:?} is not a whole number")),
                Ok(n) if n < *min || n > *max => {
                    Some(format!("must be between {min} and {max}, got {n}"))
                }
                Ok(_) => None,
            },
            Self::OneOf(choices)
                if !value.is_empty() && !choices.iter().any(|c| c.eq_ignore_ascii_case(value)) =>
            {
                Some(format!("{value:?} is not one of {}", choices.join(", ")))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Field {
    name: String,
    label: String,
    value: String,
    rules: Vec<Rule>,
}

/// Submitted values by field name, trimmed.
pub type FormValues = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormModel {
    title: String,
    fields: Vec<Field>,
}

impl FormModel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    /// The character creation form used by the demos.
    #[must_use]
    pub fn new_character() -> Self {
        Self::new("New Character")
            .field("name", "Name", vec![Rule::Required, Rule::MaxLength(20)])
            .field(
                "class",
                "Class",
                vec![Rule::Required, Rule::one_of(["warrior", "mage", "archer"])],
            )
            .field(
                "health",
                "Starting health",
                vec![Rule::Required, Rule::Integer { min: 1, max: 200 }],
            )
    }

    /// Adds a field. Fields render and validate in the order added.
    #[must_use]
    pub fn field(mut self, name: &str, label: &str, rules: Vec<Rule>) -> Self {
        self.fields.push(Field {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            rules,
        });
        self
    }

    fn find_mut(&mut self, name: &str) -> UiResult<&mut Field> {
        self.fields
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| UiError::UnknownField(name.to_string()))
    }

    /// Types into a field.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> UiResult<()> {
        self.find_mut(name)?.value = value.into();
        Ok(())
    }

    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Every problem, `"Label problem"`, in field order.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.fields
            .iter()
            .flat_map(|f| {
                f.rules
                    .iter()
                    .filter_map(|rule| rule.check(&f.value))
                    .take(1)
                    .map(move |problem| format!("{} {problem}", f.label))
            })
            .collect()
    }

    pub fn submit(&self) -> Result<FormValues, Dialog> {
        let errors = self.errors();
        if !errors.is_empty() {
            debug!(form = %self.title, problems = errors.len(), "Form rejected");
            return Err(Dialog::error(
                format!("{}: invalid input", self.title),
                errors.join("\n"),
            ));
        }
        Ok(self
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.value.trim().to_string()))
            .collect())
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }
}

impl View for FormModel {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&self) -> String {
        self.fields
            .iter()
            .map(|f| format!("{}: [{}]", f.label, f.value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
