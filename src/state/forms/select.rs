//! Dropdown input model

/// A dropdown whose stored value is the first character of the chosen label
#[derive(Debug, Clone, Copy)]
pub struct SelectInput {
    pub name: &'static str,
    pub options: &'static [&'static str],
}

impl SelectInput {
    pub const fn new(name: &'static str, options: &'static [&'static str]) -> Self {
        Self { name, options }
    }

    /// Text shown while nothing is selected
    pub fn placeholder(&self) -> String {
        format!("Select {}", self.name)
    }

    /// Stored value for an option label
    pub fn value_for(label: &str) -> String {
        label.chars().next().map(String::from).unwrap_or_default()
    }

    /// Index of the option whose value matches, if any
    pub fn selected_index(&self, value: &str) -> Option<usize> {
        if value.is_empty() {
            return None;
        }
        self.options
            .iter()
            .position(|label| Self::value_for(label) == value)
    }

    /// Label for a stored value, falling back to the placeholder
    pub fn display(&self, value: &str) -> String {
        match self.selected_index(value) {
            Some(i) => self.options[i].to_string(),
            None if value.is_empty() => self.placeholder(),
            None => value.to_string(),
        }
    }

    /// Value after moving one option forward (wraps around).
    /// From an empty or unknown value this selects the first option.
    pub fn next_value(&self, value: &str) -> String {
        if self.options.is_empty() {
            return String::new();
        }
        let next = match self.selected_index(value) {
            Some(i) => (i + 1) % self.options.len(),
            None => 0,
        };
        Self::value_for(self.options[next])
    }

    /// Value after moving one option back (wraps around).
    /// From an empty or unknown value this selects the last option.
    pub fn prev_value(&self, value: &str) -> String {
        if self.options.is_empty() {
            return String::new();
        }
        let prev = match self.selected_index(value) {
            Some(0) | None => self.options.len() - 1,
            Some(i) => i - 1,
        };
        Self::value_for(self.options[prev])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::values::GENDER_SELECT;

    const GENDER: SelectInput = GENDER_SELECT;

    #[test]
    fn test_placeholder_names_the_field() {
        assert_eq!(GENDER.placeholder(), "Select gender");
    }

    #[test]
    fn test_value_is_first_character() {
        assert_eq!(SelectInput::value_for("Female"), "F");
        assert_eq!(SelectInput::value_for(""), "");
    }

    #[test]
    fn test_selected_index() {
        assert_eq!(GENDER.selected_index("O"), Some(2));
        assert_eq!(GENDER.selected_index(""), None);
        assert_eq!(GENDER.selected_index("X"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(GENDER.display("U"), "Unknown");
        assert_eq!(GENDER.display(""), "Select gender");
        assert_eq!(GENDER.display("X"), "X");
    }

    #[test]
    fn test_next_value_cycles() {
        assert_eq!(GENDER.next_value(""), "M");
        assert_eq!(GENDER.next_value("M"), "F");
        assert_eq!(GENDER.next_value("U"), "M");
    }

    #[test]
    fn test_prev_value_cycles() {
        assert_eq!(GENDER.prev_value(""), "U");
        assert_eq!(GENDER.prev_value("M"), "U");
        assert_eq!(GENDER.prev_value("F"), "M");
    }

    #[test]
    fn test_empty_options() {
        let empty = SelectInput::new("nothing", &[]);
        assert_eq!(empty.next_value(""), "");
        assert_eq!(empty.prev_value(""), "");
    }
}
