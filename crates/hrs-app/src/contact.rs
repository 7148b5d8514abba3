// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    ProjectType,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Phone, Self::ProjectType];

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::ProjectType => "Project Type (Kitchen, Bath, etc.)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
}

impl ContactFormInput {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::ProjectType => &self.project_type,
        }
    }

    fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::ProjectType => &mut self.project_type,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("name is required -- enter your name and retry");
        }
        if self.email.trim().is_empty() && self.phone.trim().is_empty() {
            bail!("email or phone is required -- enter a way to reach you");
        }
        Ok(())
    }
}

/// What happened when the form was "sent". The form has no backend, so a
/// valid form is only acknowledged, never transmitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    NotSent { reason: &'static str },
}

pub const NOT_CONNECTED: &str = "contact form is a placeholder; nothing was sent";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    input: ContactFormInput,
    field_index: usize,
}

impl ContactForm {
    pub fn input(&self) -> &ContactFormInput {
        &self.input
    }

    pub fn active_field(&self) -> ContactField {
        ContactField::ALL[self.field_index % ContactField::ALL.len()]
    }

    pub fn move_field(&mut self, delta: isize) -> ContactField {
        let len = ContactField::ALL.len() as isize;
        self.field_index = (self.field_index as isize + delta).rem_euclid(len) as usize;
        self.active_field()
    }

    pub fn push_char(&mut self, ch: char) {
        let field = self.active_field();
        self.input.value_mut(field).push(ch);
    }

    pub fn pop_char(&mut self) {
        let field = self.active_field();
        self.input.value_mut(field).pop();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn send(&self) -> Result<ContactOutcome> {
        self.input.validate()?;
        Ok(ContactOutcome::NotSent {
            reason: NOT_CONNECTED,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactField, ContactForm, ContactOutcome, NOT_CONNECTED};

    fn type_text(form: &mut ContactForm, text: &str) {
        for ch in text.chars() {
            form.push_char(ch);
        }
    }

    #[test]
    fn field_cursor_wraps_both_ways() {
        let mut form = ContactForm::default();
        assert_eq!(form.active_field(), ContactField::Name);
        assert_eq!(form.move_field(-1), ContactField::ProjectType);
        assert_eq!(form.move_field(1), ContactField::Name);
        assert_eq!(form.move_field(2), ContactField::Phone);
    }

    #[test]
    fn typing_edits_active_field() {
        let mut form = ContactForm::default();
        type_text(&mut form, "Avery");
        form.move_field(1);
        type_text(&mut form, "avery@example.comx");
        form.pop_char();

        assert_eq!(form.input().value(ContactField::Name), "Avery");
        assert_eq!(form.input().email, "avery@example.com");
    }

    #[test]
    fn send_requires_name_and_a_contact_method() {
        let mut form = ContactForm::default();
        let error = form.send().expect_err("empty form should fail");
        assert!(error.to_string().contains("name is required"));

        type_text(&mut form, "Avery");
        let error = form.send().expect_err("missing email and phone should fail");
        assert!(error.to_string().contains("email or phone"));
    }

    #[test]
    fn valid_form_is_never_transmitted() {
        let mut form = ContactForm::default();
        type_text(&mut form, "Avery");
        form.move_field(2);
        type_text(&mut form, "555-0100");

        let outcome = form.send().expect("valid form");
        assert_eq!(
            outcome,
            ContactOutcome::NotSent {
                reason: NOT_CONNECTED,
            }
        );
    }

    #[test]
    fn clear_resets_input_and_cursor() {
        let mut form = ContactForm::default();
        type_text(&mut form, "Avery");
        form.move_field(3);
        form.clear();
        assert_eq!(form, ContactForm::default());
    }
}
