use std::collections::BTreeSet;

use serde::Serialize;

use super::Category;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    name: String,
    description: Option<String>,
    tags: BTreeSet<String>,
    station: Option<String>,
}

impl MenuItem {
    /// Returns `None` when `name` is blank.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return None;
        }
        Some(Self {
            name,
            description: None,
            tags: BTreeSet::new(),
            station: None,
        })
    }

    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description.filter(|d| !d.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags
            .extend(tags.into_iter().filter(|tag| !tag.trim().is_empty()));
        self
    }

    #[must_use]
    pub fn with_station(mut self, station: Option<String>) -> Self {
        self.station = station.filter(|s| !s.trim().is_empty());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub const fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn station(&self) -> Option<&str> {
        self.station.as_deref()
    }

    pub fn category(&self) -> Category {
        Category::of(&self.name, self.station())
    }
}
