//! Phrase-presence cascade consulted when the scorer is unsure.
//!
//! Rule order is load-bearing: several triggers overlap (business phrasing
//! can also satisfy the philosophy rule), and the first rule that matches
//! wins. Reordering changes outcomes.

use crate::matching::{assemble, contains_whole_word, matched_phrases};
use genre_core::config::FallbackConfig;
use genre_core::Category;

/// One fallback rule record.
#[derive(Debug, Clone, Copy)]
pub struct FallbackRule {
    pub name: &'static str,
    pub category: Category,
    /// Every group needs at least one phrase present.
    pub require: &'static [&'static [&'static str]],
    /// Any of these present disables the rule.
    pub exclude: &'static [&'static str],
}

impl FallbackRule {
    /// Number of distinct required phrases present, or `None` if the rule
    /// does not match.
    pub fn evaluate(&self, text: &str) -> Option<usize> {
        if self.exclude.iter().any(|p| contains_whole_word(text, p)) {
            return None;
        }
        let mut matched = 0;
        for group in self.require {
            let hits = matched_phrases(text, group).len();
            if hits == 0 {
                return None;
            }
            matched += hits;
        }
        Some(matched)
    }
}

const BUSINESS_EXCLUDE: &[&str] = &["programming", "coding", "software", "code", "developer", "developers", "novel", "novels"];

pub static FALLBACK_RULES: &[FallbackRule] = &[
    FallbackRule {
        name: "database_interview",
        category: Category::Technology,
        require: &[&["database", "databases", "sql", "data modeling"], &["interview", "interviews", "queries", "design", "administration"]],
        exclude: &[],
    },
    FallbackRule {
        name: "programming",
        category: Category::Technology,
        require: &[&["programming", "coding", "software development", "source code", "developer", "javascript", "python", "algorithms", "computer science"]],
        exclude: &[],
    },
    FallbackRule {
        name: "human_nature",
        category: Category::Psychology,
        require: &[&["laws of human nature", "human nature", "psychology of", "psychological", "cognitive bias", "how the mind works", "behavioral economics", "the brain"]],
        exclude: &["novel", "novels", "thriller"],
    },
    FallbackRule {
        name: "guide",
        category: Category::SelfHelp,
        require: &[&["guide to", "how to", "step by step", "tips for", "handbook for", "ways to", "secrets of", "habits"]],
        exclude: &["programming", "coding", "software", "code", "developer", "developers", "recipe", "recipes", "cookbook", "cook", "cooking", "bake", "baking", "travel guide", "novel", "novels"],
    },
    FallbackRule {
        name: "cookbook",
        category: Category::Cooking,
        require: &[&["cookbook", "recipe", "recipes", "cooking", "baking", "bake", "cook", "kitchen", "meals"]],
        exclude: &[],
    },
    FallbackRule {
        name: "philosophy",
        category: Category::Philosophy,
        require: &[&["meaning of life", "philosophy", "stoic", "stoicism", "ethics", "wisdom", "art of living", "existential"]],
        exclude: &[],
    },
    FallbackRule {
        name: "business",
        category: Category::Business,
        require: &[&["business", "entrepreneur", "startup", "marketing", "leadership", "investing", "money", "wealth", "finance", "management"]],
        exclude: BUSINESS_EXCLUDE,
    },
    FallbackRule {
        name: "science",
        category: Category::Science,
        require: &[&["science of", "physics", "chemistry", "biology", "universe", "evolution", "quantum", "astronomy"]],
        exclude: &["science fiction", "sci-fi"],
    },
    FallbackRule {
        name: "history",
        category: Category::History,
        require: &[&["history of", "ancient", "civilization", "world war", "empire", "revolution"]],
        exclude: &["a novel", "novel"],
    },
    FallbackRule {
        name: "biography",
        category: Category::Biography,
        require: &[&["memoir", "biography", "autobiography", "life of", "my life", "life story"]],
        exclude: &[],
    },
    FallbackRule {
        name: "health",
        category: Category::Health,
        require: &[&["health", "diet", "fitness", "nutrition", "weight loss", "exercise", "wellness"]],
        exclude: &[],
    },
    FallbackRule {
        name: "religion",
        category: Category::Religion,
        require: &[&["god", "bible", "faith", "prayer", "spiritual", "church", "christian", "theology"]],
        exclude: &[],
    },
    FallbackRule {
        name: "travel",
        category: Category::Travel,
        require: &[&["travel guide", "travels", "travel", "traveling", "backpacking", "road trip", "around the world"]],
        exclude: &["time travel"],
    },
    FallbackRule {
        name: "true_crime",
        category: Category::TrueCrime,
        require: &[&["true crime", "serial killer", "true story of"]],
        exclude: &[],
    },
    FallbackRule {
        name: "mystery",
        category: Category::Mystery,
        require: &[&["murder", "detective", "mystery", "whodunit", "sleuth"]],
        exclude: &[],
    },
    FallbackRule {
        name: "thriller",
        category: Category::Thriller,
        require: &[&["thriller", "spy", "conspiracy", "assassin", "espionage"]],
        exclude: &[],
    },
    FallbackRule {
        name: "horror",
        category: Category::Horror,
        require: &[&["horror", "haunted", "ghost", "vampire", "zombie"]],
        exclude: &[],
    },
    FallbackRule {
        name: "romance",
        category: Category::Romance,
        require: &[&["romance", "love story", "falling in love", "romantic"]],
        exclude: &[],
    },
    FallbackRule {
        name: "science_fiction",
        category: Category::ScienceFiction,
        require: &[&["science fiction", "sci-fi", "spaceship", "galaxy", "alien", "dystopian", "time travel"]],
        exclude: &[],
    },
    FallbackRule {
        name: "fantasy",
        category: Category::Fantasy,
        require: &[&["fantasy", "dragon", "wizard", "magic", "sorcerer", "elves"]],
        exclude: &[],
    },
    FallbackRule {
        name: "poetry",
        category: Category::Poetry,
        require: &[&["poems", "poetry", "poet", "verses", "sonnets"]],
        exclude: &[],
    },
    FallbackRule {
        name: "children",
        category: Category::Children,
        require: &[&["children's book", "picture book", "bedtime story", "for kids"]],
        exclude: &[],
    },
    FallbackRule {
        name: "young_adult",
        category: Category::YoungAdult,
        require: &[&["young adult", "teen", "teenage", "high school"]],
        exclude: &[],
    },
    FallbackRule {
        name: "art",
        category: Category::Art,
        require: &[&["painting", "drawing", "artist", "sculpture", "photography"]],
        exclude: &[],
    },
    FallbackRule {
        name: "music",
        category: Category::Music,
        require: &[&["music", "musician", "songs", "album", "guitar"]],
        exclude: &[],
    },
    FallbackRule {
        name: "sports",
        category: Category::Sports,
        require: &[&["football", "basketball", "baseball", "soccer", "athlete", "olympics"]],
        exclude: &[],
    },
    FallbackRule {
        name: "politics",
        category: Category::Politics,
        require: &[&["politics", "political", "democracy", "government", "election"]],
        exclude: &[],
    },
    FallbackRule {
        name: "comics",
        category: Category::Comics,
        require: &[&["graphic novel", "comic book", "manga", "superhero"]],
        exclude: &[],
    },
    FallbackRule {
        name: "drama",
        category: Category::Drama,
        require: &[&["playwright", "screenplay", "a play in", "theatre", "tragedy"]],
        exclude: &[],
    },
    FallbackRule {
        name: "education",
        category: Category::Education,
        require: &[&["teaching", "classroom", "curriculum", "students", "education"]],
        exclude: &[],
    },
];

/// A fallback decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackMatch {
    pub rule: &'static str,
    pub category: Category,
    pub confidence: f64,
}

pub struct PatternFallback<'a> {
    rules: &'a [FallbackRule],
    config: &'a FallbackConfig,
}

impl<'a> PatternFallback<'a> {
    pub fn new(rules: &'a [FallbackRule], config: &'a FallbackConfig) -> Self {
        Self { rules, config }
    }

    /// First matching rule, with its confidence.
    pub fn fallback(&self, title: &str, description: &str) -> Option<FallbackMatch> {
        let text = assemble(title, description);
        let title_lc = title.to_lowercase();
        self.rules.iter().find_map(|rule| {
            let matched = rule.evaluate(&text)?;
            let confidence = self.confidence(rule.category, matched, &title_lc);
            tracing::debug!(rule = rule.name, category = %rule.category, confidence, "fallback rule matched");
            Some(FallbackMatch { rule: rule.name, category: rule.category, confidence })
        })
    }

    fn confidence(&self, category: Category, matched: usize, title_lc: &str) -> f64 {
        let c = self.config;
        let extra = matched.saturating_sub(1) as f64;
        let mut confidence = c.base_confidence + (extra * c.per_phrase_bonus).min(c.max_phrase_bonus);
        if title_lc.contains(&category.lowercase_name()) {
            confidence += c.title_name_bonus;
        }
        confidence.clamp(c.base_confidence, c.max_confidence)
    }
}
