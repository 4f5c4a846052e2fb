//! Form validation
//!
//! Required-field, email and phone checks over a form's input set. Invalid
//! fields are marked individually (the local-storage storefront highlighted
//! their borders); `validate` returns the overall result.

/// What kind of value a field holds, driving its pattern check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, only subject to the required check.
    Text,
    /// Must look like an email address when non-empty.
    Email,
    /// Must look like a phone number when non-empty.
    Phone,
}

/// A single named form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    kind: FieldKind,
    required: bool,
    value: String,
    invalid: bool,
}

impl Field {
    /// Creates an optional field.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Field {
            name: name.into(),
            kind,
            required: false,
            value: String::new(),
            invalid: false,
        }
    }

    /// Creates a required field.
    pub fn required(name: impl Into<String>, kind: FieldKind) -> Self {
        Field {
            required: true,
            ..Field::new(name, kind)
        }
    }

    /// The field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Sets the value. Any previous invalid mark stands until the next
    /// `validate`.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Whether the last validation marked this field invalid.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    fn check(&mut self) -> bool {
        let value = self.value.trim();

        let ok = if value.is_empty() {
            !self.required
        } else {
            match self.kind {
                FieldKind::Text => true,
                FieldKind::Email => is_valid_email(value),
                FieldKind::Phone => is_valid_phone(value),
            }
        };

        self.invalid = !ok;
        ok
    }
}

/// A set of named fields validated as a unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    fields: Vec<Field>,
}

impl Form {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form from the given fields.
    pub fn with_fields(fields: impl Into<Vec<Field>>) -> Self {
        Form {
            fields: fields.into(),
        }
    }

    /// Appends a field.
    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Sets the value of the named field. Returns `false` when no field by
    /// that name exists.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        if let Some(field) = self.fields.iter_mut().find(|field| field.name == name) {
            field.set_value(value);
            true
        } else {
            false
        }
    }

    /// The value of the named field.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(Field::value)
    }

    /// Checks every field, marking the invalid ones, and returns whether
    /// the whole form passed. All fields are always checked; a failure
    /// early in the form does not skip the marks on later fields.
    pub fn validate(&mut self) -> bool {
        let mut valid = true;

        for field in &mut self.fields {
            if !field.check() {
                valid = false;
            }
        }

        valid
    }

    /// The fields marked invalid by the last validation.
    pub fn invalid_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| field.invalid)
    }

    /// Clears every value and invalid mark.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.invalid = false;
        }
    }

    /// All fields, in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

/// Whether a string looks like an email address: a non-empty local part and
/// a dotted domain, no whitespace, exactly one `@`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .split_once('.')
        .is_some_and(|(head, tail)| !head.is_empty() && !tail.is_empty())
}

/// Whether a string looks like a phone number: only digits, spaces and
/// `+ - ( )` allowed, with at least 10 digits once everything else is
/// stripped.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    let allowed = phone
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, ' ' | '-' | '+' | '(' | ')'));

    allowed && phone.chars().filter(char::is_ascii_digit).count() >= 10
}
