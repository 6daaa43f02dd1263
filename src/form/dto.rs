use serde::{Deserialize, Serialize};

use super::model::NameForm;

#[derive(Debug, Serialize)]
pub struct FormView {
    pub text: String,
    pub label: String,
}

impl From<&NameForm> for FormView {
    fn from(f: &NameForm) -> Self {
        Self {
            text: f.text().to_string(),
            label: f.label().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EditRequest {
    pub text: String,
}
