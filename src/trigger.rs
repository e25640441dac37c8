use venue_core::{Element, ID_ATTRIBUTE};

/// The command line as triggering element: its only datum is the venue id
/// passed as an argument.
pub struct ArgTrigger {
    venue_id: String,
}

impl ArgTrigger {
    pub fn new(venue_id: impl Into<String>) -> Self {
        ArgTrigger {
            venue_id: venue_id.into(),
        }
    }
}

impl Element for ArgTrigger {
    fn data(&self, key: &str) -> Option<String> {
        (key == ID_ATTRIBUTE).then(|| self.venue_id.clone())
    }
}
