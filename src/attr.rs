//! Attribute system for element nodes
//!
//! Attributes are an ordered `Vec<(String, String)>`: rendering follows
//! insertion order, and an empty list renders the same as no attributes.

/// Element attributes as ordered key-value pairs
pub type Attrs = Vec<(String, String)>;

/// Extension trait for attribute operations on Attrs
pub trait AttrsExt {
    /// Get an attribute value by name
    fn get_attr(&self, name: &str) -> Option<&str>;

    /// Check if an attribute exists
    fn has_attr(&self, name: &str) -> bool;

    /// Set an attribute value (update in place, or append)
    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>);
}

impl AttrsExt for Attrs {
    fn get_attr(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn has_attr(&self, name: &str) -> bool {
        self.iter().any(|(k, _)| k == name)
    }

    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(attr) = self.iter_mut().find(|(k, _)| k == &name) {
            attr.1 = value;
        } else {
            self.push((name, value));
        }
    }
}

/// Render attributes as ` key="value"` pairs.
///
/// Values are interpolated verbatim, without escaping. An empty list
/// renders as the empty string.
pub fn render_attrs(attrs: &Attrs) -> String {
    let mut output = String::new();
    push_attrs(attrs, &mut output);
    output
}

pub(crate) fn push_attrs(attrs: &Attrs, output: &mut String) {
    for (name, value) in attrs.iter() {
        output.push(' ');
        output.push_str(name);
        output.push_str("=\"");
        output.push_str(value);
        output.push('"');
    }
}

// =============================================================================
// Tests
// =============================================================================
