use crate::error::{GenreError, Result};
use serde::{Deserialize, Serialize};

/// Every numeric tunable of the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub weights: KeywordWeights,
    pub adjustments: AdjustmentConfig,
    pub calibration: CalibrationConfig,
    pub fallback: FallbackConfig,
    pub overrides: OverrideConfig,
    /// Maximum number of characters of extracted document text considered.
    pub document_excerpt_chars: usize,
    pub max_recommendations: usize,
}

/// Per-occurrence keyword weights and name bonuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordWeights {
    pub primary: f64,
    pub secondary: f64,
    pub negative: f64,
    pub name_in_title: f64,
    pub name_in_description: f64,
    pub name_word: f64,
    /// Name words must be longer than this to earn `name_word`.
    pub name_word_min_len: usize,
    pub strong_indicator_in_title: f64,
}

/// Cross-category corrections applied after the keyword pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustmentConfig {
    pub technology_boost: f64,
    pub technology_travel_penalty: f64,
    pub business_boost: f64,
    pub business_technology_penalty: f64,
    pub psychology_boost: f64,
    pub psychology_self_help_boost: f64,
    pub psychology_travel_penalty: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationConfig {
    pub score_divisor: f64,
    pub base_cap: f64,
    pub min_confidence: f64,
    pub max_confidence: f64,
    /// Top-minus-second gap above this earns `wide_gap_bonus`.
    pub wide_gap: f64,
    pub wide_gap_bonus: f64,
    pub medium_gap: f64,
    pub medium_gap_bonus: f64,
    /// Gap below this costs `narrow_gap_penalty`.
    pub narrow_gap: f64,
    pub narrow_gap_penalty: f64,
    /// Checked in order; the first tier whose `above` the top score exceeds applies.
    pub magnitude_tiers: Vec<MagnitudeTier>,
    /// Second-place score above `top * near_tie_ratio` is penalized.
    pub near_tie_ratio: f64,
    pub near_tie_penalty: f64,
}

/// Bonus for an absolutely high top score, capped at `cap`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MagnitudeTier {
    pub above: f64,
    pub bonus: f64,
    pub cap: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// Calibrated confidence below this triggers the pattern fallback.
    pub threshold: f64,
    pub base_confidence: f64,
    pub per_phrase_bonus: f64,
    pub max_phrase_bonus: f64,
    pub title_name_bonus: f64,
    pub max_confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverrideConfig {
    /// Distinct trigger phrases the business and mindset rules need before
    /// they fire. Technology fires on a single hit.
    pub business_min_hits: usize,
    pub mindset_min_hits: usize,
    pub technology_confidence: f64,
    pub technology_score: f64,
    pub business_confidence: f64,
    pub business_score: f64,
    pub mindset_confidence: f64,
    pub mindset_score: f64,
}

impl Default for KeywordWeights {
    fn default() -> Self {
        Self {
            primary: 15.0,
            secondary: 8.0,
            negative: 10.0,
            name_in_title: 50.0,
            name_in_description: 25.0,
            name_word: 5.0,
            name_word_min_len: 4,
            strong_indicator_in_title: 30.0,
        }
    }
}

impl Default for AdjustmentConfig {
    fn default() -> Self {
        Self {
            technology_boost: 60.0,
            technology_travel_penalty: 80.0,
            business_boost: 60.0,
            business_technology_penalty: 20.0,
            psychology_boost: 55.0,
            psychology_self_help_boost: 25.0,
            psychology_travel_penalty: 70.0,
        }
    }
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            score_divisor: 200.0,
            base_cap: 0.8,
            min_confidence: 0.1,
            max_confidence: 0.98,
            wide_gap: 40.0,
            wide_gap_bonus: 0.25,
            medium_gap: 20.0,
            medium_gap_bonus: 0.15,
            narrow_gap: 10.0,
            narrow_gap_penalty: 0.2,
            magnitude_tiers: vec![
                MagnitudeTier { above: 120.0, bonus: 0.15, cap: 0.98 },
                MagnitudeTier { above: 80.0, bonus: 0.10, cap: 0.95 },
                MagnitudeTier { above: 50.0, bonus: 0.05, cap: 0.90 },
            ],
            near_tie_ratio: 0.6,
            near_tie_penalty: 0.15,
        }
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            base_confidence: 0.7,
            per_phrase_bonus: 0.1,
            max_phrase_bonus: 0.2,
            title_name_bonus: 0.15,
            max_confidence: 0.98,
        }
    }
}

impl Default for OverrideConfig {
    fn default() -> Self {
        Self {
            business_min_hits: 2,
            mindset_min_hits: 2,
            technology_confidence: 0.9,
            technology_score: 180.0,
            business_confidence: 0.88,
            business_score: 170.0,
            mindset_confidence: 0.88,
            mindset_score: 160.0,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            weights: KeywordWeights::default(),
            adjustments: AdjustmentConfig::default(),
            calibration: CalibrationConfig::default(),
            fallback: FallbackConfig::default(),
            overrides: OverrideConfig::default(),
            document_excerpt_chars: 4000,
            max_recommendations: 8,
        }
    }
}

fn check_unit(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GenreError::InvalidConfig(format!("{name} must be within [0, 1], got {value}")))
    }
}

fn check_non_negative(name: &str, value: f64) -> Result<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(GenreError::InvalidConfig(format!("{name} must not be negative, got {value}")))
    }
}

impl ClassifierConfig {
    /// Parse a (possibly partial) JSON config on top of the defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            tracing::warn!(error = %e, "rejected classifier config");
            return Err(e);
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let w = &self.weights;
        for (name, value) in [
            ("weights.primary", w.primary),
            ("weights.secondary", w.secondary),
            ("weights.negative", w.negative),
            ("weights.name_in_title", w.name_in_title),
            ("weights.name_in_description", w.name_in_description),
            ("weights.name_word", w.name_word),
            ("weights.strong_indicator_in_title", w.strong_indicator_in_title),
        ] {
            check_non_negative(name, value)?;
        }

        let c = &self.calibration;
        check_unit("calibration.min_confidence", c.min_confidence)?;
        check_unit("calibration.max_confidence", c.max_confidence)?;
        check_unit("calibration.base_cap", c.base_cap)?;
        check_unit("calibration.near_tie_ratio", c.near_tie_ratio)?;
        if c.min_confidence > c.max_confidence {
            return Err(GenreError::InvalidConfig(
                "calibration.min_confidence exceeds calibration.max_confidence".into(),
            ));
        }
        if c.score_divisor <= 0.0 {
            return Err(GenreError::InvalidConfig("calibration.score_divisor must be positive".into()));
        }
        for (name, value) in [
            ("calibration.wide_gap_bonus", c.wide_gap_bonus),
            ("calibration.medium_gap_bonus", c.medium_gap_bonus),
            ("calibration.narrow_gap_penalty", c.narrow_gap_penalty),
        ] {
            check_unit(name, value)?;
        }
        if !(c.narrow_gap <= c.medium_gap && c.medium_gap <= c.wide_gap) {
            return Err(GenreError::InvalidConfig(
                "calibration gaps must satisfy narrow_gap <= medium_gap <= wide_gap".into(),
            ));
        }
        for (i, tier) in c.magnitude_tiers.iter().enumerate() {
            check_unit("calibration.magnitude_tiers.bonus", tier.bonus)?;
            check_unit("calibration.magnitude_tiers.cap", tier.cap)?;
            if i > 0 && tier.above >= c.magnitude_tiers[i - 1].above {
                return Err(GenreError::InvalidConfig(
                    "calibration.magnitude_tiers must be ordered by descending `above`".into(),
                ));
            }
        }

        let f = &self.fallback;
        check_unit("fallback.threshold", f.threshold)?;
        check_unit("fallback.base_confidence", f.base_confidence)?;
        check_unit("fallback.max_confidence", f.max_confidence)?;
        if f.base_confidence > f.max_confidence {
            return Err(GenreError::InvalidConfig(
                "fallback.base_confidence exceeds fallback.max_confidence".into(),
            ));
        }

        let o = &self.overrides;
        check_unit("overrides.technology_confidence", o.technology_confidence)?;
        check_unit("overrides.business_confidence", o.business_confidence)?;
        check_unit("overrides.mindset_confidence", o.mindset_confidence)?;
        if o.business_min_hits == 0 || o.mindset_min_hits == 0 {
            return Err(GenreError::InvalidConfig("override min_hits must be at least 1".into()));
        }

        if self.max_recommendations == 0 {
            return Err(GenreError::InvalidConfig("max_recommendations must be at least 1".into()));
        }
        Ok(())
    }
}
