pub const DEFAULT_TEXT: &str = "Default Text";

/// Meal name entry: a text field and a label that mirrors it once
/// editing ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameForm {
    text: String,
    label: String,
}

impl NameForm {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn edit(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_default(&mut self) {
        self.text = DEFAULT_TEXT.to_string();
    }

    pub fn end_editing(&mut self) {
        self.label.clone_from(&self.text);
    }

    /// Return key: dismisses the keyboard, which ends editing.
    pub fn should_return(&mut self) -> bool {
        self.end_editing();
        true
    }
}
