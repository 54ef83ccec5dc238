/// Keyword-based URL categorization for Tab Categorizer
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four fixed display buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Social Media")]
    SocialMedia,
    Work,
    News,
    Others,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::SocialMedia,
        Category::Work,
        Category::News,
        Category::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SocialMedia => "Social Media",
            Category::Work => "Work",
            Category::News => "News",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword reported when nothing in the table matches
pub const FALLBACK_KEYWORD: &str = "General";

/// Keywords per category. Declaration order is the match order.
pub const CATEGORY_TABLE: &[(Category, &[&str])] = &[
    (
        Category::SocialMedia,
        &["facebook", "twitter", "instagram", "linkedin"],
    ),
    (Category::Work, &["github", "slack", "notion", "jira"]),
    (Category::News, &["bbc", "cnn", "nytimes", "theguardian"]),
];

/// Result of classifying a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category: Category,
    pub keyword: &'static str,
}

/// Classify a URL by the first keyword it contains
///
/// Algorithm:
/// 1. Walk `CATEGORY_TABLE` in declaration order
/// 2. Within a category, walk its keywords in declaration order
/// 3. Return the first (category, keyword) whose keyword is a substring of `url`
/// 4. Otherwise return Others / General
///
/// Matching is case-sensitive and the input is not validated as a URL.
///
/// Examples:
/// - https://facebook.com/x → Social Media / facebook
/// - https://github.com/twitter → Social Media / twitter
/// - https://example.org → Others / General
pub fn classify(url: &str) -> Classification {
    CATEGORY_TABLE
        .iter()
        .find_map(|(category, keywords)| {
            keywords
                .iter()
                .find(|keyword| url.contains(*keyword))
                .map(|keyword| Classification {
                    category: *category,
                    keyword: *keyword,
                })
        })
        .unwrap_or(Classification {
            category: Category::Others,
            keyword: FALLBACK_KEYWORD,
        })
}
