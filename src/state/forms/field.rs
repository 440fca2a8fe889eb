//! Form field value objects

/// Represents a single text field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            label,
            placeholder,
            value: String::new(),
            is_multiline: false,
        }
    }

    /// Create a new empty multi-line text field
    pub fn multiline(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            is_multiline: true,
            ..Self::text(name, label, placeholder)
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Replace the whole value
    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// True when the value has no visible characters
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_starts_empty() {
        let field = FormField::text("name", "Your Name", "Enter your name");
        assert_eq!(field.as_text(), "");
        assert!(!field.is_multiline);
        assert!(field.is_blank());
    }

    #[test]
    fn test_multiline_keeps_labels() {
        let field = FormField::multiline("message", "Your Idea or Message", "Describe...");
        assert!(field.is_multiline);
        assert_eq!(field.name, "message");
        assert_eq!(field.label, "Your Idea or Message");
    }

    #[test]
    fn test_whitespace_is_blank() {
        let mut field = FormField::text("name", "Your Name", "");
        field.set_text("  \n\t".to_string());
        assert!(field.is_blank());
        field.set_text(" a ".to_string());
        assert!(!field.is_blank());
    }

    #[test]
    fn test_clear() {
        let mut field = FormField::text("name", "Your Name", "");
        field.set_text("Terry".to_string());
        field.clear();
        assert_eq!(field.as_text(), "");
    }
}
