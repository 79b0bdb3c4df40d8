//! Project cards and the filter index over them.
//!
//! Cards are read once from their markup attributes into typed records. A
//! card is visible when both predicates hold: its tags contain the active
//! category (or the category is `all`), and the search query is a substring
//! of its title, description or tags. Every input change rescans the whole
//! list; the card count is in the dozens.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use serde::{Deserialize, Serialize};

/// Filter token that matches every card.
pub const ALL_CATEGORY: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    #[error("project card is missing required attribute `{0}`")]
    MissingAttribute(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    /// Distinct tags in markup order.
    pub tags: Vec<String>,
    pub visit_url: Option<String>,
}

impl ProjectCard {
    /// Build a card from `data-title`, `data-desc`, `data-tags` and `data-url`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::MissingAttribute`] when the title or description
    /// is absent or blank.
    pub fn from_attributes(
        title: Option<String>,
        description: Option<String>,
        tags: Option<String>,
        visit_url: Option<String>,
    ) -> Result<Self, CardError> {
        let title = required(title, "data-title")?;
        let description = required(description, "data-desc")?;

        let mut unique = Vec::new();
        for tag in tags.as_deref().unwrap_or_default().split_whitespace() {
            if !unique.iter().any(|t: &String| t == tag) {
                unique.push(tag.to_owned());
            }
        }

        let visit_url = visit_url
            .map(|url| url.trim().to_owned())
            .filter(|url| !url.is_empty());

        Ok(Self { title, description, tags: unique, visit_url })
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn matches_category(&self, category: &Category) -> bool {
        match category {
            Category::All => true,
            Category::Tag(tag) => self.has_tag(tag),
        }
    }

    /// `query` must already be normalized (trimmed, lowercase).
    fn matches_normalized_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(query)
            || self.description.to_lowercase().contains(query)
            || self.tags.join(" ").to_lowercase().contains(query)
    }

    pub fn matches_query(&self, query: &str) -> bool {
        self.matches_normalized_query(&normalize_query(query))
    }
}

fn required(value: Option<String>, attribute: &'static str) -> Result<String, CardError> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or(CardError::MissingAttribute(attribute))
}

fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    All,
    Tag(String),
}

impl Category {
    /// Parse a `data-filter` token. Blank and `all` both mean every card.
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        if token.is_empty() || token == ALL_CATEGORY {
            Self::All
        } else {
            Self::Tag(token.to_owned())
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: Category,
    query: String,
}

impl FilterState {
    pub fn new(category: Category, query: &str) -> Self {
        Self { category, query: normalize_query(query) }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, raw: &str) {
        self.query = normalize_query(raw);
    }

    pub fn matches(&self, card: &ProjectCard) -> bool {
        card.matches_category(&self.category) && card.matches_normalized_query(&self.query)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ProjectFilterIndex {
    cards: Vec<ProjectCard>,
}

impl ProjectFilterIndex {
    pub fn new(cards: Vec<ProjectCard>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[ProjectCard] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&ProjectCard> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Visibility of every card, in card order.
    pub fn visibility(&self, filter: &FilterState) -> Vec<bool> {
        self.cards.iter().map(|card| filter.matches(card)).collect()
    }
}
