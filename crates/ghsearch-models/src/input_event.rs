/// Raw input-change event coming from the search field.
///
/// Carries the whole field value at the time of the event, untrimmed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputEvent {
    value: String,
}

impl InputEvent {
    /// Build an event from the current field value.
    pub fn new<T: Into<String>>(value: T) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Current field value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl From<&str> for InputEvent {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for InputEvent {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
