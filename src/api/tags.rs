//! Tag Set shared by every descriptor.
//!
//! Labels are unique and ordered. Adding a label that is already present moves
//! it to the end; removing a label drops every occurrence.

use crate::api::view::Taggable;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Tags(Vec<String>);

impl Tags {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a set by adding each label in order.
    ///
    /// Duplicates collapse onto their last occurrence, matching what repeated
    /// [`Tags::set_tag`] calls would produce.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tags = Self::new();
        for label in labels {
            tags.set_tag(label);
        }
        tags
    }

    /// Add a label, removing any earlier occurrence first.
    pub fn set_tag(&mut self, label: impl Into<String>) {
        let label = label.into();
        self.0.retain(|existing| *existing != label);
        self.0.push(label);
    }

    /// Remove every occurrence of a label.
    pub fn unset_tag(&mut self, label: &str) {
        self.0.retain(|existing| existing != label);
    }

    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&String) -> bool,
    {
        self.0.retain(f);
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Taggable for Tags {
    fn tag(&self, label: &str) -> bool {
        self.0.iter().any(|existing| existing == label)
    }

    fn tags(&self) -> Vec<String> {
        self.0.clone()
    }
}

impl<S: Into<String>> FromIterator<S> for Tags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_labels(iter)
    }
}
