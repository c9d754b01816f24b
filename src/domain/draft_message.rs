use super::field_input_state::FieldInputState;

/// One of the three text fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Message => "Your Message",
        }
    }

    pub fn as_label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// The in-progress, unsent form values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftMessage {
    name: FieldInputState,
    email: FieldInputState,
    message: FieldInputState,
}

impl Default for DraftMessage {
    fn default() -> Self {
        Self {
            name: FieldInputState::single_line(),
            email: FieldInputState::single_line(),
            message: FieldInputState::multi_line(),
        }
    }
}

impl DraftMessage {
    pub fn field(&self, field: FormField) -> &FieldInputState {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut FieldInputState {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        self.field(field).text()
    }

    /// Replaces exactly one field, leaving the other two untouched.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn set_field(&mut self, field: FormField, value: &str) {
        self.field_mut(field).set_text(value);
    }

    pub fn clear(&mut self) {
        for field in FormField::ALL {
            self.field_mut(field).clear();
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        FormField::ALL
            .iter()
            .all(|field| self.field(*field).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> DraftMessage {
        let mut draft = DraftMessage::default();
        draft.set_field(FormField::Name, "Ada");
        draft.set_field(FormField::Email, "ada@example.com");
        draft.set_field(FormField::Message, "Hello there");
        draft
    }

    #[test]
    fn defaults_to_empty_fields() {
        let draft = DraftMessage::default();

        assert!(draft.is_empty());
        for field in FormField::ALL {
            assert_eq!(draft.value(field), "");
        }
    }

    #[test]
    fn set_field_leaves_other_fields_unchanged() {
        for target in FormField::ALL {
            let mut draft = filled();
            let before = draft.clone();

            draft.set_field(target, "changed");

            assert_eq!(draft.value(target), "changed");
            for other in FormField::ALL.into_iter().filter(|f| *f != target) {
                assert_eq!(draft.value(other), before.value(other));
            }
        }
    }

    #[test]
    fn clear_empties_every_field() {
        let mut draft = filled();
        draft.clear();

        assert!(draft.is_empty());
        assert_eq!(draft.field(FormField::Message).cursor_position(), 0);
    }

    #[test]
    fn only_message_is_multiline() {
        let draft = DraftMessage::default();

        assert!(!draft.field(FormField::Name).is_multiline());
        assert!(!draft.field(FormField::Email).is_multiline());
        assert!(draft.field(FormField::Message).is_multiline());
    }
}
