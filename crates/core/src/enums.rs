//! Domain enumerations and their wire-string codecs.
//!
//! Each enumeration maps bidirectionally to the token the API expects:
//! `as_str` produces the canonical form, `FromStr` matches
//! case-insensitively and reports the full list of valid options on
//! failure. Sort order additionally ignores internal hyphens, so
//! `published-at` and `publishedAt` decode to the same value.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Topic category understood by the headlines and sources endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    Business,
    Entertainment,
    #[default]
    General,
    Health,
    Science,
    Sports,
    Technology,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Business,
        Category::Entertainment,
        Category::General,
        Category::Health,
        Category::Science,
        Category::Sports,
        Category::Technology,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::General => "general",
            Category::Health => "health",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.to_ascii_lowercase();
        Category::ALL
            .iter()
            .find(|c| c.as_str() == needle)
            .copied()
            .ok_or_else(|| {
                Error::Validation(format!(
                    "invalid category '{s}': valid values are {}",
                    join_tokens(&Category::ALL)
                ))
            })
    }
}

/// Article field the everything endpoint can restrict a search to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchIn {
    Title,
    Description,
    Content,
}

impl SearchIn {
    pub const ALL: [SearchIn; 3] = [SearchIn::Title, SearchIn::Description, SearchIn::Content];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchIn::Title => "title",
            SearchIn::Description => "description",
            SearchIn::Content => "content",
        }
    }
}

impl fmt::Display for SearchIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchIn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.to_ascii_lowercase();
        SearchIn::ALL
            .iter()
            .find(|f| f.as_str() == needle)
            .copied()
            .ok_or_else(|| {
                Error::Validation(format!(
                    "invalid search field '{s}': valid values are {}",
                    join_tokens(&SearchIn::ALL)
                ))
            })
    }
}

/// Result ordering for the everything endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    Relevancy,
    Popularity,
    #[default]
    PublishedAt,
}

impl SortBy {
    pub const ALL: [SortBy; 3] = [SortBy::Relevancy, SortBy::Popularity, SortBy::PublishedAt];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Relevancy => "relevancy",
            SortBy::Popularity => "popularity",
            SortBy::PublishedAt => "publishedAt",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = Error;

    // Hyphens are insignificant here: "published-at" == "publishedAt".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.replace('-', "").to_ascii_lowercase();
        SortBy::ALL
            .iter()
            .find(|o| o.as_str().to_ascii_lowercase() == needle)
            .copied()
            .ok_or_else(|| {
                Error::Validation(format!(
                    "invalid sort order '{s}': valid values are {}",
                    join_tokens(&SortBy::ALL)
                ))
            })
    }
}

fn join_tokens<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
