//! Score distribution -> bounded confidence.

use genre_core::config::CalibrationConfig;
use genre_core::{Category, ScoreBoard};

/// Pick the top category and derive a confidence in
/// `[min_confidence, max_confidence]` from the top three scores.
pub fn calibrate(board: &ScoreBoard, config: &CalibrationConfig) -> (Category, f64) {
    let ranked = board.ranked();
    let (category, top) = ranked[0];
    if top <= 0.0 {
        return (Category::Fiction, config.min_confidence);
    }
    let second = ranked.get(1).map_or(0.0, |r| r.1);
    let third = ranked.get(2).map_or(0.0, |r| r.1);

    let mut confidence = (top / config.score_divisor).min(config.base_cap);

    let gap = top - second;
    if gap > config.wide_gap {
        confidence = (confidence + config.wide_gap_bonus).min(config.max_confidence);
    } else if gap > config.medium_gap {
        confidence = (confidence + config.medium_gap_bonus).min(config.max_confidence);
    } else if gap < config.narrow_gap {
        confidence = (confidence - config.narrow_gap_penalty).max(config.min_confidence);
    }

    if let Some(tier) = config.magnitude_tiers.iter().find(|t| top > t.above) {
        confidence = (confidence + tier.bonus).min(tier.cap);
    }

    if second > top * config.near_tie_ratio {
        confidence = (confidence - config.near_tie_penalty).max(config.min_confidence);
    }

    let confidence = confidence.clamp(config.min_confidence, config.max_confidence);
    tracing::debug!(%category, top, second, third, confidence, "calibrated");
    (category, confidence)
}
