//! Form field declarations

use chrono::Datelike;
use procurex_core::FieldKind;

/// Month names offered by month selects
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// ============================================================================
// Select Options
// ============================================================================

/// Where a select field gets its choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectOptions {
    #[default]
    None,
    /// A fixed list
    Fixed(&'static [&'static str]),
    /// The current year and the given number of years before it
    RecentYears(u16),
}

impl SelectOptions {
    /// Resolve the choices
    pub fn values(&self) -> Vec<String> {
        match self {
            SelectOptions::None => Vec::new(),
            SelectOptions::Fixed(values) => values.iter().map(|v| v.to_string()).collect(),
            SelectOptions::RecentYears(back) => {
                let current = chrono::Local::now().year();
                (0..=i32::from(*back))
                    .map(|offset| (current - offset).to_string())
                    .collect()
            }
        }
    }
}

// ============================================================================
// FieldSpec
// ============================================================================

/// One input of an entity form
///
/// Schemas are declared as statics, so the builders are `const fn`:
///
/// ```rust,ignore
/// const NAME: FieldSpec = FieldSpec::text("name", "Name").required();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// JSON key
    pub name: &'static str,
    /// Label shown next to the input and in table headers
    pub label: &'static str,
    pub kind: FieldKind,
    /// Must be non-empty on submit (checkboxes are always satisfied)
    pub required: bool,
    pub placeholder: Option<&'static str>,
    pub options: SelectOptions,
}

impl FieldSpec {
    /// Create a field of any kind
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            placeholder: None,
            options: SelectOptions::None,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub const fn email(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    pub const fn tel(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Tel)
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    pub const fn textarea(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::TextArea)
    }

    pub const fn checkbox(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Checkbox)
    }

    /// Create a select field
    pub const fn select(name: &'static str, label: &'static str, options: SelectOptions) -> Self {
        let mut field = Self::new(name, label, FieldKind::Select);
        field.options = options;
        field
    }

    /// Mark the field as required
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the placeholder text
    pub const fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Placeholder, falling back to the label
    pub fn placeholder_text(&self) -> &'static str {
        self.placeholder.unwrap_or(self.label)
    }

    /// Whether an empty value blocks submission
    pub fn blocks_when_blank(&self) -> bool {
        self.required && !self.kind.is_boolean()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        const FIELD: FieldSpec = FieldSpec::email("contact_email", "Contact Email")
            .required()
            .with_placeholder("name@company.com");

        assert_eq!(FIELD.kind, FieldKind::Email);
        assert!(FIELD.required);
        assert!(FIELD.blocks_when_blank());
        assert_eq!(FIELD.placeholder_text(), "name@company.com");
        assert_eq!(FieldSpec::text("name", "Name").placeholder_text(), "Name");
    }

    #[test]
    fn test_required_checkbox_never_blocks() {
        let field = FieldSpec::checkbox("finalized", "Finalized").required();
        assert!(!field.blocks_when_blank());
    }

    #[test]
    fn test_month_options() {
        let field = FieldSpec::select("month", "Month", SelectOptions::Fixed(&MONTHS));
        let values = field.options.values();
        assert_eq!(values.len(), 12);
        assert_eq!(values[0], "January");
        assert_eq!(values[11], "December");
    }

    #[test]
    fn test_recent_years_descend_from_current() {
        let values = SelectOptions::RecentYears(9).values();
        let current = chrono::Local::now().year();
        assert_eq!(values.len(), 10);
        assert_eq!(values[0], current.to_string());
        assert_eq!(values[9], (current - 9).to_string());
    }
}
