//! Whole-text vocabularies shared by the override rules and the
//! cross-category adjustment flags.
//!
//! The `STRONG_*` sets trigger overrides; the broader `*_FLAG` sets only
//! nudge scores after the keyword pass. Generic words ("wealth", "habits",
//! "psychological") live only in the flag sets.

use genre_core::{GenreError, Result};
use regex::Regex;

pub const STRONG_TECHNOLOGY: &str = r"\b(sql|nosql|mysql|postgresql|postgres|sqlite|mongodb|databases?|programming|programmers?|software engineering|javascript|typescript|kubernetes|devops|data structures|algorithms|machine learning|deep learning|coding interviews?|system design|computer science|web development)\b";

pub const STRONG_BUSINESS: &str = r"\b(millionaires?|billionaires?|financial freedom|fastlane|passive income|entrepreneurs?|entrepreneurship|startups?|rich dad|net worth|stock market|index funds|venture capital)\b";

pub const STRONG_MINDSET: &str = r"\b(mindset|self-improvement|self improvement|personal growth|personal development|human nature|emotional intelligence|cognitive bias(es)?|mental models|behavioral science)\b";

/// Hard-science-of-mind terms: these tip a mindset text toward Psychology.
pub const MIND_SCIENCE: &str = r"\b(psychology|psychological|cognitive|neuroscience|behavioral|behavioural|human nature|brain|experiments?|research)\b";

pub const TECHNOLOGY_FLAG: &str = r"\b(software|computers?|coding|code|developers?|api|cloud computing|digital|internet|cybersecurity|python|java|rust|data science|artificial intelligence|sql|databases?|programming|algorithms?)\b";

pub const BUSINESS_FLAG: &str = r"\b(business|marketing|money|finance|financial|management|sales|investing|investment|wealth|entrepreneurs?|startups?|economics|profit)\b";

pub const MINDSET_FLAG: &str = r"\b(mindset|mind|thinking|emotions?|behaviou?r|success|motivation|happiness|habits|psychology|psychological|self-improvement|personal growth)\b";

/// Narrative-fiction markers. Their presence blocks the business and
/// mindset overrides and their score adjustments.
pub const FICTION_MARKERS: &str = r"\b(novels?|novella|thriller|suspense|murder|detective|killer|whodunit)\b";

/// Guide-style phrasing that earns Self-Help a boost when the mindset flag is set.
pub const GUIDE_STYLE: &str = r"\b(guide|how to|step[- ]by[- ]step|practical|tips|handbook|workbook)\b";

pub(crate) fn compile(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(&format!("(?i){pattern}")).map_err(|e| GenreError::InvalidPattern {
        rule: name.to_string(),
        message: e.to_string(),
    })
}

/// Compiled vocabularies.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub strong_technology: Regex,
    pub strong_business: Regex,
    pub strong_mindset: Regex,
    pub mind_science: Regex,
    pub technology_flag: Regex,
    pub business_flag: Regex,
    pub mindset_flag: Regex,
    pub guide_style: Regex,
    pub fiction_markers: Regex,
}

impl Vocabulary {
    pub fn build() -> Result<Self> {
        Ok(Self {
            strong_technology: compile("strong_technology", STRONG_TECHNOLOGY)?,
            strong_business: compile("strong_business", STRONG_BUSINESS)?,
            strong_mindset: compile("strong_mindset", STRONG_MINDSET)?,
            mind_science: compile("mind_science", MIND_SCIENCE)?,
            technology_flag: compile("technology_flag", TECHNOLOGY_FLAG)?,
            business_flag: compile("business_flag", BUSINESS_FLAG)?,
            mindset_flag: compile("mindset_flag", MINDSET_FLAG)?,
            guide_style: compile("guide_style", GUIDE_STYLE)?,
            fiction_markers: compile("fiction_markers", FICTION_MARKERS)?,
        })
    }
}
