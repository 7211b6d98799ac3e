use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};

/// A bookable session offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionType {
    pub id: String,
    pub name: String,
    pub duration_minutes: u32,
    /// Price in cents.
    pub price: u32,
    pub description: String,
}

impl SessionType {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        duration_minutes: u32,
        price: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            duration_minutes,
            price,
            description: description.into(),
        }
    }

    /// Whole-dollar price with the cents only when non-zero, e.g. `$17` or
    /// `$17.50`.
    pub fn price_display(&self) -> String {
        let dollars = self.price / 100;
        match self.price % 100 {
            0 => format!("${dollars}"),
            cents => format!("${dollars}.{cents:02}"),
        }
    }

    /// Option text used in the booking form's session select.
    pub fn choice_label(&self) -> String {
        format!(
            "{} - {} ({} minutes)",
            self.name,
            self.price_display(),
            self.duration_minutes
        )
    }

    /// Confirmation shown when a session card is picked, e.g.
    /// `Selected: Deep Dive Session - $97`.
    pub fn selection_message(&self) -> String {
        format!(
            "Selected: {} Session - {}",
            title_case(&self.id.replacen('_', " ", 1)),
            self.price_display()
        )
    }
}

/// Uppercases the first letter of every word.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start && c.is_alphanumeric() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }
    out
}

/// Ordered set of session types offered on the booking page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCatalog {
    sessions: Vec<SessionType>,
}

impl Default for SessionCatalog {
    fn default() -> Self {
        Self::new(vec![
            SessionType::new(
                "quick_guidance",
                "Quick Guidance",
                10,
                1700,
                "Brief spiritual insights for immediate clarity and daily guidance",
            ),
            SessionType::new(
                "deep_dive",
                "Deep Dive Session",
                30,
                9700,
                "Comprehensive spiritual exploration with ancestral wisdom and transformation guidance",
            ),
            SessionType::new(
                "intensive_healing",
                "Intensive Healing",
                60,
                29700,
                "Complete spiritual realignment including soul work, trauma clearing, and deep healing",
            ),
        ])
    }
}

impl SessionCatalog {
    pub fn new(sessions: Vec<SessionType>) -> Self {
        Self { sessions }
    }

    pub fn all(&self) -> &[SessionType] {
        &self.sessions
    }

    pub fn find(&self, id: &str) -> Option<&SessionType> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn get(&self, id: &str) -> BookingResult<&SessionType> {
        self.find(id)
            .ok_or_else(|| BookingError::NotFound(format!("Session type {id:?} not found")))
    }
}
