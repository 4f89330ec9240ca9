//! Related-category suggestions.

use genre_core::{Category, GenreError, Result};

use Category::*;

/// Static adjacency: category -> related categories, most related first.
pub static RECOMMENDATION_TABLE: &[(Category, &[Category])] = &[
    (Fiction, &[Mystery, Romance, HistoricalFiction, Fantasy, ScienceFiction, Thriller, Drama, Poetry]),
    (Mystery, &[Thriller, TrueCrime, Fiction, Horror, HistoricalFiction]),
    (Romance, &[Fiction, YoungAdult, HistoricalFiction, Drama, Poetry]),
    (ScienceFiction, &[Fantasy, Science, Technology, Thriller, Fiction, Comics]),
    (Fantasy, &[ScienceFiction, YoungAdult, Fiction, Horror, Comics, Children]),
    (Thriller, &[Mystery, Horror, TrueCrime, Fiction, Politics]),
    (Horror, &[Thriller, Fantasy, Mystery, Fiction, Comics]),
    (HistoricalFiction, &[History, Fiction, Romance, Biography, Mystery]),
    (Biography, &[History, Politics, Music, Sports, Art, Business]),
    (History, &[Biography, Politics, HistoricalFiction, Religion, Philosophy, Travel]),
    (SelfHelp, &[Psychology, Business, Health, Philosophy, Religion, Education]),
    (Psychology, &[SelfHelp, Philosophy, Science, Health, Education, TrueCrime]),
    (Business, &[SelfHelp, Technology, Psychology, Biography, Politics, Education]),
    (Technology, &[Science, Business, Education, ScienceFiction]),
    (Science, &[Technology, Health, Philosophy, History, Education, ScienceFiction]),
    (Philosophy, &[Religion, Psychology, History, Politics, SelfHelp, Science, Poetry]),
    (Religion, &[Philosophy, History, SelfHelp, Poetry, Biography]),
    (Health, &[Cooking, Sports, Psychology, SelfHelp, Science]),
    (Cooking, &[Health, Travel, Art, Children]),
    (Travel, &[History, Cooking, Biography, Art, Sports]),
    (Poetry, &[Drama, Fiction, Art, Music, Religion, Philosophy]),
    (Drama, &[Poetry, Fiction, Music, Art, Biography]),
    (Children, &[YoungAdult, Fantasy, Comics, Education, Poetry]),
    (YoungAdult, &[Fantasy, Romance, ScienceFiction, Children, Mystery, Comics]),
    (Art, &[Music, Drama, Poetry, History, Comics, Travel]),
    (Music, &[Art, Biography, Poetry, Drama, History]),
    (Sports, &[Health, Biography, Business, SelfHelp]),
    (Politics, &[History, Philosophy, Biography, Business, TrueCrime]),
    (Education, &[Psychology, Science, Children, SelfHelp, Technology]),
    (Comics, &[Fantasy, ScienceFiction, YoungAdult, Art, Children, Horror]),
    (TrueCrime, &[Mystery, Thriller, Biography, Psychology, History, Politics]),
];

/// Curated categories shown first in onboarding.
pub static POPULAR_CATEGORIES: &[Category] = &[
    Fiction,
    Mystery,
    Romance,
    ScienceFiction,
    Fantasy,
    Biography,
    History,
    SelfHelp,
    Psychology,
    Business,
    Technology,
    Cooking,
];

/// Read-only category adjacency.
#[derive(Debug, Clone)]
pub struct RecommendationGraph {
    adjacency: Vec<&'static [Category]>,
    limit: usize,
}

impl RecommendationGraph {
    pub fn build(limit: usize) -> Result<Self> {
        Self::from_table(RECOMMENDATION_TABLE, limit)
    }

    /// Every category needs exactly one entry, and no list may name its own
    /// category or repeat a neighbour.
    pub fn from_table(table: &[(Category, &'static [Category])], limit: usize) -> Result<Self> {
        let mut adjacency: Vec<Option<&'static [Category]>> = vec![None; Category::COUNT];
        for (category, related) in table {
            if related.contains(category) {
                return Err(GenreError::InvalidTaxonomy(format!("{category} recommends itself")));
            }
            if related.iter().enumerate().any(|(i, c)| related[..i].contains(c)) {
                return Err(GenreError::InvalidTaxonomy(format!("{category} lists a neighbour twice")));
            }
            let slot = &mut adjacency[category.index()];
            if slot.is_some() {
                return Err(GenreError::InvalidTaxonomy(format!(
                    "duplicate recommendation entry for {category}"
                )));
            }
            *slot = Some(related);
        }
        let adjacency = adjacency
            .into_iter()
            .zip(Category::ALL)
            .map(|(slot, category)| {
                slot.ok_or_else(|| {
                    GenreError::InvalidTaxonomy(format!("missing recommendation entry for {category}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { adjacency, limit })
    }

    pub fn related(&self, category: Category) -> &[Category] {
        self.adjacency[category.index()]
    }

    /// Union of the neighbours of `selected`, in order, without duplicates
    /// or already-selected categories, truncated to the limit.
    pub fn recommendations_for(&self, selected: &[Category]) -> Vec<Category> {
        let mut out: Vec<Category> = Vec::with_capacity(self.limit);
        for category in selected {
            for related in self.related(*category) {
                if out.len() == self.limit {
                    return out;
                }
                if !selected.contains(related) && !out.contains(related) {
                    out.push(*related);
                }
            }
        }
        out
    }
}
