//! Keyword taxonomy: weighted phrase sets and title indicators per category.

use genre_core::{Category, GenreError, Result};

/// Static keyword table entry for one category.
#[derive(Debug, Clone, Copy)]
pub struct KeywordSpec {
    pub category: Category,
    pub primary: &'static [&'static str],
    pub secondary: &'static [&'static str],
    pub negative: &'static [&'static str],
}

/// Phrases that, when present in a title, strongly suggest a category.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorSpec {
    pub category: Category,
    pub phrases: &'static [&'static str],
}

pub static KEYWORD_TABLE: &[KeywordSpec] = &[
    KeywordSpec {
        category: Category::Fiction,
        primary: &["novel", "fiction", "story", "stories", "characters", "protagonist", "narrative", "tale", "literary fiction", "storytelling"],
        secondary: &["family saga", "coming of age", "short stories", "heroine", "hero", "chapter", "secrets"],
        negative: &["guide", "textbook", "handbook", "how to", "recipes", "manual"],
    },
    KeywordSpec {
        category: Category::Mystery,
        primary: &["mystery", "detective", "murder", "whodunit", "investigation", "sleuth", "clue", "clues", "suspect", "crime"],
        secondary: &["police", "inspector", "case", "disappearance", "body", "killer", "secret"],
        negative: &["recipe", "programming", "self-help"],
    },
    KeywordSpec {
        category: Category::Romance,
        primary: &["romance", "love story", "romantic", "lovers", "passion", "heartbreak", "falling in love", "soulmate", "wedding", "courtship"],
        secondary: &["love", "heart", "kiss", "relationship", "billionaire", "duke"],
        negative: &["murder", "war", "programming", "business"],
    },
    KeywordSpec {
        category: Category::ScienceFiction,
        primary: &["science fiction", "sci-fi", "spaceship", "starship", "alien", "aliens", "galaxy", "dystopian", "time travel", "robot", "robots", "interstellar", "cyberpunk"],
        secondary: &["future", "planet", "space", "colony", "android", "artificial intelligence", "virtual reality"],
        negative: &["recipe", "biography", "history of"],
    },
    KeywordSpec {
        category: Category::Fantasy,
        primary: &["fantasy", "magic", "wizard", "dragon", "dragons", "sorcerer", "elves", "kingdom", "quest", "enchanted", "witch", "sword and sorcery"],
        secondary: &["prophecy", "realm", "spell", "throne", "curse", "mythical", "legend"],
        negative: &["programming", "business", "recipe", "biography"],
    },
    KeywordSpec {
        category: Category::Thriller,
        primary: &["thriller", "suspense", "conspiracy", "espionage", "spy", "assassin", "hostage", "on the run", "race against time", "terrorist"],
        secondary: &["danger", "chase", "betrayal", "agent", "cia", "deadly", "psychological thriller"],
        negative: &["recipe", "cookbook", "self-help"],
    },
    KeywordSpec {
        category: Category::Horror,
        primary: &["horror", "haunted", "ghost", "ghosts", "demon", "vampire", "zombie", "zombies", "nightmare", "terror", "supernatural", "possessed"],
        secondary: &["dark", "blood", "fear", "creepy", "monster", "evil", "cursed"],
        negative: &["recipe", "business", "guide"],
    },
    KeywordSpec {
        category: Category::HistoricalFiction,
        primary: &["historical fiction", "historical novel", "world war ii", "civil war", "victorian", "medieval", "tudor", "regency era", "set in"],
        secondary: &["century", "1800s", "war", "era", "ancient", "wartime", "empire"],
        negative: &["textbook", "programming", "recipe"],
    },
    KeywordSpec {
        category: Category::Biography,
        primary: &["biography", "memoir", "autobiography", "life story", "life of", "biographical", "memoirs", "his life", "her life"],
        secondary: &["childhood", "career", "legacy", "born", "personal account"],
        negative: &["novel", "fiction", "recipe"],
    },
    KeywordSpec {
        category: Category::History,
        primary: &["history", "historical", "historian", "civilization", "empire", "ancient", "revolution", "dynasty", "archaeology", "war"],
        secondary: &["century", "battle", "colonial", "medieval", "era", "events"],
        negative: &["novel", "fiction", "fantasy", "recipe"],
    },
    KeywordSpec {
        category: Category::SelfHelp,
        primary: &["self-help", "self help", "personal development", "self-improvement", "habits", "motivation", "productivity", "success", "confidence", "mindset", "happiness", "goals", "life lessons"],
        secondary: &["guide", "tips", "improve", "transform", "practical", "change your life", "achieve", "discipline", "steps"],
        negative: &["novel", "fiction", "murder", "programming"],
    },
    KeywordSpec {
        category: Category::Psychology,
        primary: &["psychology", "psychological", "cognitive", "behavior", "behaviour", "mental health", "human nature", "brain", "mind", "emotions", "personality", "therapy", "neuroscience"],
        secondary: &["thinking", "bias", "decision", "emotional", "perception", "subconscious", "memory"],
        negative: &["novel", "recipe", "programming"],
    },
    KeywordSpec {
        category: Category::Business,
        primary: &["business", "entrepreneur", "entrepreneurship", "startup", "marketing", "management", "leadership", "investing", "finance", "wealth", "money", "economics", "strategy", "millionaire"],
        secondary: &["company", "profit", "sales", "market", "customers", "career", "negotiation", "financial freedom", "income"],
        negative: &["novel", "fiction", "recipe", "magic"],
    },
    KeywordSpec {
        category: Category::Technology,
        primary: &["programming", "software", "computer", "coding", "code", "algorithm", "algorithms", "database", "databases", "sql", "python", "javascript", "data science", "machine learning", "artificial intelligence", "web development", "developer", "technology"],
        secondary: &["data", "queries", "query", "joins", "indexes", "api", "cloud", "network", "systems", "digital", "internet", "engineering", "interview"],
        negative: &["novel", "fantasy", "recipe", "romance"],
    },
    KeywordSpec {
        category: Category::Science,
        primary: &["science", "scientific", "physics", "chemistry", "biology", "evolution", "universe", "quantum", "astronomy", "genetics", "experiment", "scientist"],
        secondary: &["theory", "research", "nature", "discovery", "cosmos", "energy", "particles", "species"],
        negative: &["science fiction", "sci-fi", "novel", "fantasy"],
    },
    KeywordSpec {
        category: Category::Philosophy,
        primary: &["philosophy", "philosophical", "ethics", "existential", "stoicism", "stoic", "metaphysics", "meaning of life", "philosopher", "morality", "wisdom", "virtue"],
        secondary: &["truth", "existence", "reason", "consciousness", "meditations", "socrates", "plato", "nietzsche"],
        negative: &["recipe", "programming", "thriller"],
    },
    KeywordSpec {
        category: Category::Religion,
        primary: &["religion", "religious", "god", "faith", "spiritual", "spirituality", "bible", "christian", "church", "prayer", "buddhism", "islam", "theology", "scripture"],
        secondary: &["soul", "divine", "worship", "holy", "sacred", "gospel", "meditation"],
        negative: &["novel", "programming", "business"],
    },
    KeywordSpec {
        category: Category::Health,
        primary: &["health", "fitness", "nutrition", "diet", "exercise", "wellness", "weight loss", "healthy", "medical", "disease", "healing", "workout"],
        secondary: &["body", "sleep", "doctor", "symptoms", "immune", "yoga", "longevity"],
        negative: &["novel", "murder", "programming"],
    },
    KeywordSpec {
        category: Category::Cooking,
        primary: &["cookbook", "recipe", "recipes", "cooking", "cook", "baking", "bake", "kitchen", "chef", "cuisine", "food", "meals", "dishes"],
        secondary: &["ingredients", "pasta", "risotto", "dinner", "flavors", "vegetarian", "dessert", "bread", "italian", "french", "delicious"],
        negative: &["murder", "programming", "novel", "war"],
    },
    KeywordSpec {
        category: Category::Travel,
        primary: &["travel", "travels", "traveling", "travelling", "journey", "adventure", "destination", "destinations", "guidebook", "explore", "exploring", "backpacking", "road trip", "abroad"],
        secondary: &["country", "countries", "culture", "city", "cities", "trip", "world", "places", "tourist", "itinerary"],
        negative: &["time travel", "programming", "novel", "mindset", "inner journey"],
    },
    KeywordSpec {
        category: Category::Poetry,
        primary: &["poetry", "poems", "poem", "poet", "verse", "verses", "sonnet", "sonnets", "haiku", "collection of poems", "rhyme", "lyrical"],
        secondary: &["stanza", "ode", "love poems", "words", "beauty"],
        negative: &["programming", "recipe", "business", "novel"],
    },
    KeywordSpec {
        category: Category::Drama,
        primary: &["drama", "playwright", "theatre", "theater", "tragedy", "screenplay", "stage play", "shakespeare", "plays"],
        secondary: &["stage", "acts", "actors", "performance", "dialogue", "monologue", "scene"],
        negative: &["programming", "recipe", "sports"],
    },
    KeywordSpec {
        category: Category::Children,
        primary: &["children", "children's", "kids", "picture book", "bedtime", "toddler", "young readers", "nursery", "fairy tale", "preschool"],
        secondary: &["animals", "friends", "fun", "colorful", "puppy", "bunny", "rhymes"],
        negative: &["adult", "murder", "explicit", "programming"],
    },
    KeywordSpec {
        category: Category::YoungAdult,
        primary: &["young adult", "ya", "teen", "teenage", "teenager", "teens", "high school", "coming-of-age", "first love", "boarding school"],
        secondary: &["school", "friendship", "sixteen", "seventeen", "prom", "identity", "dystopian"],
        negative: &["programming", "recipe", "business"],
    },
    KeywordSpec {
        category: Category::Art,
        primary: &["art", "artist", "artists", "painting", "paintings", "drawing", "sculpture", "photography", "illustration", "gallery", "museum", "art history"],
        secondary: &["creative", "color", "visual", "canvas", "masterpiece", "aesthetic", "sketch", "design"],
        negative: &["programming", "recipe", "the art of"],
    },
    KeywordSpec {
        category: Category::Music,
        primary: &["music", "musician", "musicians", "song", "songs", "album", "band", "rock and roll", "jazz", "guitar", "piano", "composer", "symphony", "hip hop"],
        secondary: &["concert", "tour", "rhythm", "melody", "lyrics", "singer", "orchestra", "recording"],
        negative: &["programming", "recipe"],
    },
    KeywordSpec {
        category: Category::Sports,
        primary: &["sports", "sport", "football", "basketball", "baseball", "soccer", "athlete", "athletes", "olympics", "tennis", "golf", "coach", "championship", "boxing"],
        secondary: &["team", "game", "season", "training", "victory", "league", "player", "players"],
        negative: &["video game", "programming", "recipe"],
    },
    KeywordSpec {
        category: Category::Politics,
        primary: &["politics", "political", "government", "democracy", "election", "elections", "policy", "president", "congress", "parliament", "geopolitics", "ideology"],
        secondary: &["power", "nation", "rights", "state", "public", "law", "citizens", "campaign"],
        negative: &["novel", "recipe", "fantasy"],
    },
    KeywordSpec {
        category: Category::Education,
        primary: &["education", "teaching", "teacher", "teachers", "learning", "students", "classroom", "curriculum", "textbook", "study guide", "pedagogy"],
        secondary: &["lesson", "lessons", "exam", "course", "skills", "academic", "university", "school"],
        negative: &["machine learning", "deep learning", "novel"],
    },
    KeywordSpec {
        category: Category::Comics,
        primary: &["comics", "comic", "comic book", "graphic novel", "manga", "superhero", "superheroes", "webcomic", "anime"],
        secondary: &["marvel", "panels", "villain", "issue", "volume"],
        negative: &["recipe", "programming"],
    },
    KeywordSpec {
        category: Category::TrueCrime,
        primary: &["true crime", "true story", "serial killer", "real-life", "murder case", "trial", "forensic", "convicted", "unsolved"],
        secondary: &["crime", "police", "victims", "detectives", "evidence", "court", "prison", "fbi"],
        negative: &["novel", "fiction", "fantasy"],
    },
];

pub static STRONG_INDICATORS: &[IndicatorSpec] = &[
    IndicatorSpec { category: Category::Fiction, phrases: &["a novel", "novel", "stories"] },
    IndicatorSpec { category: Category::Mystery, phrases: &["murder", "mystery", "detective", "case of"] },
    IndicatorSpec { category: Category::Romance, phrases: &["love", "romance", "bride", "kiss"] },
    IndicatorSpec { category: Category::ScienceFiction, phrases: &["galaxy", "star", "robot", "mars", "alien"] },
    IndicatorSpec { category: Category::Fantasy, phrases: &["dragon", "throne", "magic", "wizard", "sword"] },
    IndicatorSpec { category: Category::Thriller, phrases: &["thriller", "conspiracy", "spy", "agent"] },
    IndicatorSpec { category: Category::Horror, phrases: &["haunting", "haunted", "ghost", "dead"] },
    IndicatorSpec { category: Category::HistoricalFiction, phrases: &["historical novel", "a novel of"] },
    IndicatorSpec { category: Category::Biography, phrases: &["memoir", "biography", "life of", "autobiography"] },
    IndicatorSpec { category: Category::History, phrases: &["history", "history of", "empire", "revolution"] },
    IndicatorSpec { category: Category::SelfHelp, phrases: &["habits", "secrets of", "power of", "self-help"] },
    IndicatorSpec { category: Category::Psychology, phrases: &["psychology", "mind", "thinking", "human nature", "brain"] },
    IndicatorSpec { category: Category::Business, phrases: &["business", "money", "millionaire", "rich", "startup", "leadership", "invest"] },
    IndicatorSpec { category: Category::Technology, phrases: &["programming", "code", "software", "sql", "python", "data", "algorithms", "database"] },
    IndicatorSpec { category: Category::Science, phrases: &["physics", "universe", "science", "evolution", "cosmos"] },
    IndicatorSpec { category: Category::Philosophy, phrases: &["philosophy", "meditations", "ethics", "stoic"] },
    IndicatorSpec { category: Category::Religion, phrases: &["god", "bible", "faith", "prayer"] },
    IndicatorSpec { category: Category::Health, phrases: &["diet", "health", "fitness", "healing"] },
    IndicatorSpec { category: Category::Cooking, phrases: &["cook", "cookbook", "recipes", "kitchen", "baking", "food"] },
    IndicatorSpec { category: Category::Travel, phrases: &["travels", "travel", "road trip", "around the world"] },
    IndicatorSpec { category: Category::Poetry, phrases: &["poems", "poetry", "verses", "sonnets"] },
    IndicatorSpec { category: Category::Drama, phrases: &["a play", "tragedy", "plays"] },
    IndicatorSpec { category: Category::Children, phrases: &["little", "bedtime", "kids", "abc"] },
    IndicatorSpec { category: Category::YoungAdult, phrases: &["academy", "high school", "teen"] },
    IndicatorSpec { category: Category::Art, phrases: &["painting", "artist", "sketch", "drawing"] },
    IndicatorSpec { category: Category::Music, phrases: &["music", "songs", "guitar", "piano", "band"] },
    IndicatorSpec { category: Category::Sports, phrases: &["football", "basketball", "championship", "season"] },
    IndicatorSpec { category: Category::Politics, phrases: &["politics", "democracy", "nation", "president"] },
    IndicatorSpec { category: Category::Education, phrases: &["teaching", "education", "learning", "study guide"] },
    IndicatorSpec { category: Category::Comics, phrases: &["vol", "volume", "comic", "manga"] },
    IndicatorSpec { category: Category::TrueCrime, phrases: &["true story", "killer", "murders", "in cold blood"] },
];

/// Validated keyword phrases for one category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordSet {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    pub negative: Vec<String>,
}

/// Per-category data the scorer needs, indexed by [`Category::index`].
#[derive(Debug, Clone)]
pub struct CategoryEntry {
    pub category: Category,
    pub keywords: KeywordSet,
    pub indicators: Vec<String>,
    /// Lowercased display label.
    pub name: String,
    /// Words of the display label.
    pub name_words: Vec<String>,
}

/// The validated taxonomy, built once and shared read-only.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    entries: Vec<CategoryEntry>,
}

fn validate_phrases(category: Category, set: &str, phrases: &[&str]) -> Result<Vec<String>> {
    phrases
        .iter()
        .map(|p| {
            if p.is_empty() || p.trim() != *p {
                Err(GenreError::InvalidTaxonomy(format!(
                    "{category} {set} phrase {p:?} is empty or untrimmed"
                )))
            } else {
                Ok(p.to_lowercase())
            }
        })
        .collect()
}

impl Taxonomy {
    /// Build from the compiled-in tables.
    pub fn build() -> Result<Self> {
        Self::from_tables(KEYWORD_TABLE, STRONG_INDICATORS)
    }

    /// Build and validate from arbitrary tables. Every category must have
    /// exactly one keyword entry; indicator entries are optional but unique.
    pub fn from_tables(keywords: &[KeywordSpec], indicators: &[IndicatorSpec]) -> Result<Self> {
        let mut slots: Vec<Option<CategoryEntry>> = vec![None; Category::COUNT];

        for spec in keywords {
            let slot = &mut slots[spec.category.index()];
            if slot.is_some() {
                return Err(GenreError::InvalidTaxonomy(format!(
                    "duplicate keyword entry for {}",
                    spec.category
                )));
            }
            let name = spec.category.lowercase_name();
            let name_words = name
                .split(|c: char| !c.is_alphanumeric())
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect();
            *slot = Some(CategoryEntry {
                category: spec.category,
                keywords: KeywordSet {
                    primary: validate_phrases(spec.category, "primary", spec.primary)?,
                    secondary: validate_phrases(spec.category, "secondary", spec.secondary)?,
                    negative: validate_phrases(spec.category, "negative", spec.negative)?,
                },
                indicators: Vec::new(),
                name,
                name_words,
            });
        }

        let mut seen_indicators = [false; Category::COUNT];
        for spec in indicators {
            let idx = spec.category.index();
            if seen_indicators[idx] {
                return Err(GenreError::InvalidTaxonomy(format!(
                    "duplicate indicator entry for {}",
                    spec.category
                )));
            }
            seen_indicators[idx] = true;
            let phrases = validate_phrases(spec.category, "indicator", spec.phrases)?;
            if let Some(entry) = slots[idx].as_mut() {
                entry.indicators = phrases;
            }
        }

        let entries = slots
            .into_iter()
            .zip(Category::ALL)
            .map(|(slot, category)| {
                slot.ok_or_else(|| {
                    GenreError::InvalidTaxonomy(format!("missing keyword entry for {category}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    pub fn entry(&self, category: Category) -> &CategoryEntry {
        &self.entries[category.index()]
    }

    pub fn keywords(&self, category: Category) -> &KeywordSet {
        &self.entry(category).keywords
    }

    pub fn entries(&self) -> impl Iterator<Item = &CategoryEntry> {
        self.entries.iter()
    }

    /// Total number of phrases across all sets.
    pub fn phrase_count(&self) -> usize {
        self.entries
            .iter()
            .map(|e| {
                e.keywords.primary.len()
                    + e.keywords.secondary.len()
                    + e.keywords.negative.len()
                    + e.indicators.len()
            })
            .sum()
    }
}
