//! The closed set of literary categories a book can be assigned to.

use crate::error::GenreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Literary category.
///
/// Declaration order is significant: it is the tie-break order used when two
/// categories score the same, so `Fiction` comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Fiction,
    Mystery,
    Romance,
    #[serde(rename = "Science Fiction")]
    ScienceFiction,
    Fantasy,
    Thriller,
    Horror,
    #[serde(rename = "Historical Fiction")]
    HistoricalFiction,
    Biography,
    History,
    #[serde(rename = "Self-Help")]
    SelfHelp,
    Psychology,
    Business,
    Technology,
    Science,
    Philosophy,
    Religion,
    Health,
    Cooking,
    Travel,
    Poetry,
    Drama,
    Children,
    #[serde(rename = "Young Adult")]
    YoungAdult,
    Art,
    Music,
    Sports,
    Politics,
    Education,
    Comics,
    #[serde(rename = "True Crime")]
    TrueCrime,
}

impl Category {
    pub const COUNT: usize = 31;

    /// Every category, in declaration order.
    pub const ALL: [Category; Self::COUNT] = [
        Category::Fiction,
        Category::Mystery,
        Category::Romance,
        Category::ScienceFiction,
        Category::Fantasy,
        Category::Thriller,
        Category::Horror,
        Category::HistoricalFiction,
        Category::Biography,
        Category::History,
        Category::SelfHelp,
        Category::Psychology,
        Category::Business,
        Category::Technology,
        Category::Science,
        Category::Philosophy,
        Category::Religion,
        Category::Health,
        Category::Cooking,
        Category::Travel,
        Category::Poetry,
        Category::Drama,
        Category::Children,
        Category::YoungAdult,
        Category::Art,
        Category::Music,
        Category::Sports,
        Category::Politics,
        Category::Education,
        Category::Comics,
        Category::TrueCrime,
    ];

    /// Display label, e.g. `"Self-Help"`.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Fiction => "Fiction",
            Category::Mystery => "Mystery",
            Category::Romance => "Romance",
            Category::ScienceFiction => "Science Fiction",
            Category::Fantasy => "Fantasy",
            Category::Thriller => "Thriller",
            Category::Horror => "Horror",
            Category::HistoricalFiction => "Historical Fiction",
            Category::Biography => "Biography",
            Category::History => "History",
            Category::SelfHelp => "Self-Help",
            Category::Psychology => "Psychology",
            Category::Business => "Business",
            Category::Technology => "Technology",
            Category::Science => "Science",
            Category::Philosophy => "Philosophy",
            Category::Religion => "Religion",
            Category::Health => "Health",
            Category::Cooking => "Cooking",
            Category::Travel => "Travel",
            Category::Poetry => "Poetry",
            Category::Drama => "Drama",
            Category::Children => "Children",
            Category::YoungAdult => "Young Adult",
            Category::Art => "Art",
            Category::Music => "Music",
            Category::Sports => "Sports",
            Category::Politics => "Politics",
            Category::Education => "Education",
            Category::Comics => "Comics",
            Category::TrueCrime => "True Crime",
        }
    }

    /// Lowercased display label, used for name-match bonuses.
    pub fn lowercase_name(&self) -> String {
        self.name().to_lowercase()
    }

    /// Position in [`Category::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = GenreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase().replace('_', " ");
        if let Some(c) = Category::ALL.iter().find(|c| c.lowercase_name() == label) {
            return Ok(*c);
        }
        let alias = match label.as_str() {
            "sci-fi" | "scifi" | "sf" | "science-fiction" => Category::ScienceFiction,
            "self help" | "selfhelp" | "self-improvement" => Category::SelfHelp,
            "historical" | "historical-fiction" => Category::HistoricalFiction,
            "ya" | "young-adult" => Category::YoungAdult,
            "true-crime" => Category::TrueCrime,
            "tech" | "programming" | "computers" => Category::Technology,
            "cookbook" | "cookbooks" | "food" => Category::Cooking,
            "memoir" | "autobiography" => Category::Biography,
            "kids" | "childrens" | "children's" => Category::Children,
            "graphic novel" | "graphic novels" | "manga" => Category::Comics,
            "finance" | "economics" => Category::Business,
            "spirituality" => Category::Religion,
            "crime" | "detective" => Category::Mystery,
            "suspense" => Category::Thriller,
            "sport" => Category::Sports,
            _ => {
                return Err(GenreError::UnknownCategory { label: s.to_string() });
            }
        };
        Ok(alias)
    }
}
