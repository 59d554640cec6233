//! Static field schemas declared per endpoint.

/// A single value constraint attached to a field descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// The value must be a positive whole number, given either as a JSON
    /// integer or as a string of ASCII digits.
    PositiveInteger,
    /// The value must be a whole number within the inclusive range.
    IntegerRange {
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },
    /// The value must be a string of at most this many codepoints.
    MaxLength(usize),
    /// The value must be a string containing at least one non-whitespace
    /// character.
    NotBlank,
    /// The value must be a single `local@domain` token.
    Email,
    /// The value must be an optional leading `+` followed by 10 to 15
    /// digits.
    Phone,
    /// The value must be one of the enumerated strings.
    OneOf(Vec<String>),
}

impl Constraint {
    /// Returns `true` for constraints whose accepted values are integers.
    ///
    /// Integer-valued fields supplied as digit strings are normalised to JSON
    /// numbers before the typed request is built.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::PositiveInteger | Self::IntegerRange { .. })
    }
}

/// Declares one field of an endpoint payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    required: bool,
    constraints: Vec<Constraint>,
}

impl FieldDescriptor {
    /// Declares a field that must be present in every payload.
    #[must_use]
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
            constraints: Vec::new(),
        }
    }

    /// Declares a field that may be omitted.
    #[must_use]
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            constraints: Vec::new(),
        }
    }

    /// Appends a constraint. Constraints are evaluated in insertion order.
    #[must_use]
    pub fn with(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Requires a positive whole number.
    #[must_use]
    pub fn positive_integer(self) -> Self {
        self.with(Constraint::PositiveInteger)
    }

    /// Requires a whole number within `min..=max`.
    #[must_use]
    pub fn integer_range(self, min: i64, max: i64) -> Self {
        self.with(Constraint::IntegerRange { min, max })
    }

    /// Requires a string of at most `max` codepoints.
    #[must_use]
    pub fn max_length(self, max: usize) -> Self {
        self.with(Constraint::MaxLength(max))
    }

    /// Requires a non-blank string.
    #[must_use]
    pub fn not_blank(self) -> Self {
        self.with(Constraint::NotBlank)
    }

    /// Requires an email-shaped string.
    #[must_use]
    pub fn email(self) -> Self {
        self.with(Constraint::Email)
    }

    /// Requires a phone-number-shaped string.
    #[must_use]
    pub fn phone(self) -> Self {
        self.with(Constraint::Phone)
    }

    /// Requires one of the enumerated strings.
    #[must_use]
    pub fn one_of<I, S>(self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(Constraint::OneOf(values.into_iter().map(Into::into).collect()))
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` when the field must be present.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the constraints in evaluation order.
    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Returns `true` when any constraint expects an integer value.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.constraints.iter().any(Constraint::is_numeric)
    }
}

/// Ordered field groups making up an endpoint schema.
///
/// Groups define the constraint-pass check order: the first group that
/// reports a violation ends the pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSchema {
    groups: Vec<Vec<FieldDescriptor>>,
}

impl FieldSchema {
    /// Creates an empty schema.
    #[must_use]
    pub const fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Appends a field group.
    #[must_use]
    pub fn group(mut self, fields: impl IntoIterator<Item = FieldDescriptor>) -> Self {
        self.groups.push(fields.into_iter().collect());
        self
    }

    /// Returns the field groups in check order.
    #[must_use]
    pub fn groups(&self) -> &[Vec<FieldDescriptor>] {
        &self.groups
    }

    /// Iterates over every declared field in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.groups.iter().flatten()
    }

    /// Looks up a declared field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields().find(|field| field.name() == name)
    }

    /// Returns `true` when the schema declares the named field.
    #[must_use]
    pub fn declares(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}
