//! Field controllers: one per declared field, each owning a single input
//!
//! Controllers hold the value the user sees and report a change to the
//! [`FieldSink`] only when the value is well formed for the field's kind.

use super::field::{FieldDeclaration, FieldKind, FieldValue};
use super::record::FieldSink;

/// Checkbox input. Every toggle is reported.
#[derive(Debug, Clone)]
pub struct BooleanField {
    name: String,
    checked: bool,
}

impl BooleanField {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            checked: false,
        }
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn toggle(&mut self, sink: &mut dyn FieldSink) {
        self.checked = !self.checked;
        sink.on_field_change(&self.name, FieldValue::Bool(self.checked));
    }
}

/// Integer input bounded below by `min` and optionally above by `max`.
///
/// The raw text is kept as typed. Only text that parses and lies within the
/// bounds is reported; otherwise the last valid value stays in the record.
#[derive(Debug, Clone)]
pub struct NumericField {
    name: String,
    min: i64,
    max: Option<i64>,
    input: String,
    value: i64,
}

impl NumericField {
    pub fn new(name: &str, min: i64, max: Option<i64>) -> Self {
        Self {
            name: name.to_string(),
            min,
            max,
            input: min.to_string(),
            value: min,
        }
    }

    /// Text as typed by the user
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Last value that passed validation
    pub fn value(&self) -> i64 {
        self.value
    }

    fn accepts(&self, value: i64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }

    fn parsed(&self) -> Option<i64> {
        self.input
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|v| self.accepts(*v))
    }

    pub fn is_valid(&self) -> bool {
        self.parsed().is_some()
    }

    /// Inline message shown while the typed text is invalid
    pub fn error_message(&self) -> Option<String> {
        if self.is_valid() {
            return None;
        }
        Some(match self.max {
            Some(max) => format!("Please enter value between {}-{}", self.min, max),
            None => format!("Please enter value greater than {}", self.min),
        })
    }

    pub fn set_input(&mut self, input: String, sink: &mut dyn FieldSink) {
        self.input = input;
        match self.parsed() {
            Some(value) => {
                self.value = value;
                sink.on_field_change(&self.name, FieldValue::Number(value));
            }
            None => tracing::debug!(field = %self.name, input = %self.input, "rejected numeric input"),
        }
    }

    pub fn push_char(&mut self, c: char, sink: &mut dyn FieldSink) {
        let mut input = self.input.clone();
        input.push(c);
        self.set_input(input, sink);
    }

    pub fn pop_char(&mut self, sink: &mut dyn FieldSink) {
        let mut input = self.input.clone();
        input.pop();
        self.set_input(input, sink);
    }

    /// Move the value by `delta`, starting from the typed value when valid
    pub fn step(&mut self, delta: i64, sink: &mut dyn FieldSink) {
        let base = self.parsed().unwrap_or(self.value);
        self.set_input(base.saturating_add(delta).to_string(), sink);
    }
}

/// Free-text input with a suggestion list. Every change is reported,
/// including a change back to the empty string.
#[derive(Debug, Clone)]
pub struct CategoricalField {
    name: String,
    options: Vec<String>,
    text: String,
}

impl CategoricalField {
    pub fn new(name: &str, options: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            options,
            text: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: String, sink: &mut dyn FieldSink) {
        self.text = text;
        sink.on_field_change(&self.name, FieldValue::Text(self.text.clone()));
    }

    pub fn push_char(&mut self, c: char, sink: &mut dyn FieldSink) {
        let mut text = self.text.clone();
        text.push(c);
        self.set_text(text, sink);
    }

    pub fn pop_char(&mut self, sink: &mut dyn FieldSink) {
        let mut text = self.text.clone();
        text.pop();
        self.set_text(text, sink);
    }

    /// Select the option after the current one (wraps around)
    pub fn next_option(&mut self, sink: &mut dyn FieldSink) {
        if self.options.is_empty() {
            return;
        }
        let next = match self.current_option() {
            Some(i) => (i + 1) % self.options.len(),
            None => 0,
        };
        self.set_text(self.options[next].clone(), sink);
    }

    /// Select the option before the current one (wraps around)
    pub fn prev_option(&mut self, sink: &mut dyn FieldSink) {
        if self.options.is_empty() {
            return;
        }
        let len = self.options.len();
        let prev = match self.current_option() {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        };
        self.set_text(self.options[prev].clone(), sink);
    }

    fn current_option(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.text)
    }

    /// Options containing the typed text, ignoring case
    pub fn suggestions(&self) -> Vec<&str> {
        let needle = self.text.to_lowercase();
        self.options
            .iter()
            .filter(|o| o.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }
}

/// A field controller of any kind
#[derive(Debug, Clone)]
pub enum FieldController {
    Boolean(BooleanField),
    Numeric(NumericField),
    Categorical(CategoricalField),
}

impl FieldController {
    pub fn from_declaration(declaration: &FieldDeclaration) -> Self {
        let name = declaration.name.as_str();
        match &declaration.kind {
            FieldKind::Boolean => FieldController::Boolean(BooleanField::new(name)),
            FieldKind::Numeric { min, max } => {
                FieldController::Numeric(NumericField::new(name, *min, *max))
            }
            FieldKind::Categorical { options } => {
                FieldController::Categorical(CategoricalField::new(name, options.clone()))
            }
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FieldController::Boolean(f) => &f.name,
            FieldController::Numeric(f) => &f.name,
            FieldController::Categorical(f) => &f.name,
        }
    }

    /// Space/Enter on a checkbox
    pub fn activate(&mut self, sink: &mut dyn FieldSink) {
        if let FieldController::Boolean(f) = self {
            f.toggle(sink);
        }
    }

    pub fn push_char(&mut self, c: char, sink: &mut dyn FieldSink) {
        match self {
            FieldController::Boolean(_) => {}
            FieldController::Numeric(f) => f.push_char(c, sink),
            FieldController::Categorical(f) => f.push_char(c, sink),
        }
    }

    pub fn pop_char(&mut self, sink: &mut dyn FieldSink) {
        match self {
            FieldController::Boolean(_) => {}
            FieldController::Numeric(f) => f.pop_char(sink),
            FieldController::Categorical(f) => f.pop_char(sink),
        }
    }

    /// Right arrow: increment a number or select the next option
    pub fn step_forward(&mut self, sink: &mut dyn FieldSink) {
        match self {
            FieldController::Boolean(_) => {}
            FieldController::Numeric(f) => f.step(1, sink),
            FieldController::Categorical(f) => f.next_option(sink),
        }
    }

    /// Left arrow: decrement a number or select the previous option
    pub fn step_back(&mut self, sink: &mut dyn FieldSink) {
        match self {
            FieldController::Boolean(_) => {}
            FieldController::Numeric(f) => f.step(-1, sink),
            FieldController::Categorical(f) => f.prev_option(sink),
        }
    }

    pub fn error_message(&self) -> Option<String> {
        match self {
            FieldController::Numeric(f) => f.error_message(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sink that records every reported change in order
    #[derive(Default)]
    struct Reports(Vec<(String, FieldValue)>);

    impl FieldSink for Reports {
        fn on_field_change(&mut self, name: &str, value: FieldValue) {
            self.0.push((name.to_string(), value));
        }
    }

    mod boolean_field {
        use super::*;

        #[test]
        fn test_every_toggle_is_reported() {
            let mut field = BooleanField::new("Pool");
            let mut sink = Reports::default();

            field.toggle(&mut sink);
            field.toggle(&mut sink);
            field.toggle(&mut sink);

            assert!(field.checked());
            assert_eq!(
                sink.0,
                vec![
                    ("Pool".to_string(), FieldValue::Bool(true)),
                    ("Pool".to_string(), FieldValue::Bool(false)),
                    ("Pool".to_string(), FieldValue::Bool(true)),
                ]
            );
        }
    }

    mod numeric_field {
        use super::*;

        fn set(field: &mut NumericField, text: &str) -> Reports {
            let mut sink = Reports::default();
            field.set_input(text.to_string(), &mut sink);
            sink
        }

        #[test]
        fn test_starts_at_min() {
            let field = NumericField::new("Year Built", 1850, Some(2022));
            assert_eq!(field.input(), "1850");
            assert_eq!(field.value(), 1850);
            assert!(field.error_message().is_none());
        }

        #[test]
        fn test_boundaries_with_both_bounds() {
            let mut field = NumericField::new("Rooms", 0, Some(100));

            assert!(set(&mut field, "-1").0.is_empty());
            assert!(!field.is_valid());

            assert_eq!(
                set(&mut field, "0").0,
                vec![("Rooms".to_string(), FieldValue::Number(0))]
            );
            assert_eq!(
                set(&mut field, "100").0,
                vec![("Rooms".to_string(), FieldValue::Number(100))]
            );

            assert!(set(&mut field, "101").0.is_empty());
            assert!(!field.is_valid());
        }

        #[test]
        fn test_invalid_value_keeps_last_valid() {
            let mut field = NumericField::new("Rooms", 0, Some(100));
            set(&mut field, "6");
            set(&mut field, "600");

            assert_eq!(field.input(), "600");
            assert_eq!(field.value(), 6);
            assert_eq!(
                field.error_message().as_deref(),
                Some("Please enter value between 0-100")
            );
        }

        #[test]
        fn test_min_only_message() {
            let mut field = NumericField::new("Total Assessed Value", 0, None);
            set(&mut field, "-5");
            assert_eq!(
                field.error_message().as_deref(),
                Some("Please enter value greater than 0")
            );

            assert_eq!(
                set(&mut field, "987654321").0,
                vec![(
                    "Total Assessed Value".to_string(),
                    FieldValue::Number(987654321)
                )]
            );
            assert!(field.error_message().is_none());
        }

        #[test]
        fn test_malformed_input_is_treated_as_out_of_range() {
            let mut field = NumericField::new("Rooms", 0, Some(100));
            assert!(set(&mut field, "abc").0.is_empty());
            assert!(set(&mut field, "").0.is_empty());
            assert!(set(&mut field, "4.5").0.is_empty());
            assert_eq!(
                field.error_message().as_deref(),
                Some("Please enter value between 0-100")
            );
            assert_eq!(field.value(), 0);
        }

        #[test]
        fn test_typing_digit_by_digit() {
            let mut field = NumericField::new("Year Built", 1850, Some(2022));
            let mut sink = Reports::default();

            // Clear the pre-filled minimum first
            for _ in 0..4 {
                field.pop_char(&mut sink);
            }
            for c in "1962".chars() {
                field.push_char(c, &mut sink);
            }

            assert_eq!(field.value(), 1962);
            // Only the final, in-range text is reported
            assert_eq!(
                sink.0,
                vec![("Year Built".to_string(), FieldValue::Number(1962))]
            );
        }

        #[test]
        fn test_step_from_last_valid_value() {
            let mut field = NumericField::new("Rooms", 0, Some(100));
            let mut sink = Reports::default();

            field.step(1, &mut sink);
            field.step(1, &mut sink);
            assert_eq!(field.value(), 2);

            field.set_input("oops".to_string(), &mut sink);
            field.step(-1, &mut sink);
            assert_eq!(field.input(), "1");
            assert_eq!(field.value(), 1);

            field.step(-1, &mut sink);
            field.step(-1, &mut sink);
            assert_eq!(field.input(), "-1");
            assert_eq!(field.value(), 0);
            assert!(!field.is_valid());
        }
    }

    mod categorical_field {
        use super::*;

        fn months() -> CategoricalField {
            CategoricalField::new(
                "Sale Month",
                vec!["January".into(), "February".into(), "March".into()],
            )
        }

        #[test]
        fn test_free_text_is_accepted_and_reported() {
            let mut field = months();
            let mut sink = Reports::default();
            for c in "Smarch".chars() {
                field.push_char(c, &mut sink);
            }
            assert_eq!(field.text(), "Smarch");
            assert_eq!(sink.0.len(), 6);
            assert_eq!(
                sink.0.last(),
                Some(&("Sale Month".to_string(), FieldValue::Text("Smarch".into())))
            );
        }

        #[test]
        fn test_change_to_empty_is_reported() {
            let mut field = months();
            let mut sink = Reports::default();
            field.push_char('J', &mut sink);
            field.pop_char(&mut sink);
            assert_eq!(
                sink.0.last(),
                Some(&("Sale Month".to_string(), FieldValue::Text(String::new())))
            );
        }

        #[test]
        fn test_option_cycling_wraps() {
            let mut field = months();
            let mut sink = Reports::default();

            field.next_option(&mut sink);
            assert_eq!(field.text(), "January");
            field.prev_option(&mut sink);
            assert_eq!(field.text(), "March");
            field.next_option(&mut sink);
            assert_eq!(field.text(), "January");

            field.set_text("Smarch".into(), &mut sink);
            field.prev_option(&mut sink);
            assert_eq!(field.text(), "March");
        }

        #[test]
        fn test_option_cycling_without_options_is_noop() {
            let mut field = CategoricalField::new("Zoning", vec![]);
            let mut sink = Reports::default();
            field.next_option(&mut sink);
            field.prev_option(&mut sink);
            assert!(sink.0.is_empty());
        }

        #[test]
        fn test_suggestions_match_case_insensitively() {
            let mut field = months();
            let mut sink = Reports::default();
            assert_eq!(field.suggestions().len(), 3);

            field.set_text("AR".into(), &mut sink);
            assert_eq!(field.suggestions(), vec!["January", "February", "March"]);

            field.set_text("mar".into(), &mut sink);
            assert_eq!(field.suggestions(), vec!["March"]);
        }
    }

    mod field_controller_enum {
        use super::*;

        #[test]
        fn test_from_declaration() {
            let checkbox = FieldController::from_declaration(&FieldDeclaration::boolean("Pool"));
            assert!(matches!(checkbox, FieldController::Boolean(_)));
            assert_eq!(checkbox.name(), "Pool");

            let rooms =
                FieldController::from_declaration(&FieldDeclaration::numeric("Rooms", 0, Some(9)));
            assert!(matches!(rooms, FieldController::Numeric(ref f) if f.value() == 0));

            let zoning =
                FieldController::from_declaration(&FieldDeclaration::categorical("Zoning", &["R2"]));
            assert!(matches!(zoning, FieldController::Categorical(ref f) if f.text().is_empty()));
        }

        #[test]
        fn test_text_input_is_ignored_by_checkbox() {
            let mut checkbox = FieldController::from_declaration(&FieldDeclaration::boolean("Pool"));
            let mut sink = Reports::default();
            checkbox.push_char('x', &mut sink);
            checkbox.pop_char(&mut sink);
            checkbox.step_forward(&mut sink);
            assert!(sink.0.is_empty());

            checkbox.activate(&mut sink);
            assert_eq!(sink.0, vec![("Pool".to_string(), FieldValue::Bool(true))]);
        }

        #[test]
        fn test_activate_is_noop_for_inputs() {
            let mut rooms =
                FieldController::from_declaration(&FieldDeclaration::numeric("Rooms", 0, Some(9)));
            let mut sink = Reports::default();
            rooms.activate(&mut sink);
            assert!(sink.0.is_empty());
        }

        #[test]
        fn test_error_message_only_for_invalid_numeric() {
            let mut rooms =
                FieldController::from_declaration(&FieldDeclaration::numeric("Rooms", 0, Some(9)));
            let mut sink = Reports::default();
            assert!(rooms.error_message().is_none());
            rooms.push_char('1', &mut sink);
            assert!(rooms.error_message().is_none());
            rooms.push_char('0', &mut sink);
            assert_eq!(
                rooms.error_message().as_deref(),
                Some("Please enter value between 0-9")
            );

            let zoning =
                FieldController::from_declaration(&FieldDeclaration::categorical("Zoning", &[]));
            assert!(zoning.error_message().is_none());
        }
    }
}
