use tagscan_api::{Tag, Tagged};

/// Presence filter over a tag set. Without a required tag it matches
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    required: Option<Tag>,
}

impl TagFilter {
    pub fn new(required: Option<Tag>) -> Self {
        Self { required }
    }

    pub fn any() -> Self {
        Self::default()
    }

    pub fn requiring(tag: Tag) -> Self {
        Self {
            required: Some(tag),
        }
    }

    pub fn required(&self) -> Option<&Tag> {
        self.required.as_ref()
    }

    pub fn matches<T: Tagged + ?Sized>(&self, item: &T) -> bool {
        match &self.required {
            None => true,
            Some(tag) => item.has_tag(tag),
        }
    }
}
