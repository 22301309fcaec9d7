//! Weighted complexity scoring.

use crate::domain::models::ComplexityFactors;

/// Score returned when no complexity dimensions are present.
pub const NEUTRAL_COMPLEXITY: f64 = 5.0;

/// Service for collapsing a qualitative complexity profile into one number.
///
/// Score formula: weighted average of the present dimensions, with each
/// level encoded as low=2 / medium=5 / high=8. Absent dimensions drop out
/// of both numerator and denominator, so the weights renormalize over
/// whatever is present.
#[derive(Debug, Clone)]
pub struct ComplexityScorer {
    technical_weight: f64,
    business_weight: f64,
    integration_weight: f64,
    uncertainty_weight: f64,
}

impl Default for ComplexityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplexityScorer {
    /// Create a scorer with the standard dimension weights.
    pub fn new() -> Self {
        Self {
            technical_weight: 0.30,
            business_weight: 0.25,
            integration_weight: 0.25,
            uncertainty_weight: 0.20,
        }
    }

    /// Calculate the complexity score for a profile.
    ///
    /// Returns a value in roughly [2, 8]. An empty profile scores the
    /// neutral 5.
    pub fn score(&self, factors: &ComplexityFactors) -> f64 {
        let dimensions = [
            (factors.technical, self.technical_weight),
            (factors.business, self.business_weight),
            (factors.integration, self.integration_weight),
            (factors.uncertainty, self.uncertainty_weight),
        ];

        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;
        for (level, weight) in dimensions {
            if let Some(level) = level {
                weighted_sum += level.score_value() * weight;
                weight_total += weight;
            }
        }

        if weight_total == 0.0 {
            return NEUTRAL_COMPLEXITY;
        }
        weighted_sum / weight_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Level;

    #[test]
    fn test_uniform_profiles_score_their_level_value() {
        let scorer = ComplexityScorer::new();
        assert_eq!(scorer.score(&ComplexityFactors::uniform(Level::Low)), 2.0);
        assert_eq!(scorer.score(&ComplexityFactors::uniform(Level::Medium)), 5.0);
        assert_eq!(scorer.score(&ComplexityFactors::uniform(Level::High)), 8.0);
    }

    #[test]
    fn test_empty_profile_scores_neutral() {
        let scorer = ComplexityScorer::new();
        assert_eq!(scorer.score(&ComplexityFactors::default()), NEUTRAL_COMPLEXITY);
    }

    #[test]
    fn test_weights_renormalize_over_present_dimensions() {
        let scorer = ComplexityScorer::new();
        // Only technical (weight 0.30) and uncertainty (weight 0.20) present:
        // (8 * 0.30 + 2 * 0.20) / 0.50 = 5.6
        let factors = ComplexityFactors {
            technical: Some(Level::High),
            business: None,
            integration: None,
            uncertainty: Some(Level::Low),
        };
        let score = scorer.score(&factors);
        assert!((score - 5.6).abs() < 1e-9);
    }

    #[test]
    fn test_single_dimension_scores_its_level() {
        let scorer = ComplexityScorer::new();
        let factors = ComplexityFactors {
            business: Some(Level::High),
            ..ComplexityFactors::default()
        };
        assert_eq!(scorer.score(&factors), 8.0);
    }

    #[test]
    fn test_mixed_profile_weighted_average() {
        let scorer = ComplexityScorer::new();
        // 8*0.30 + 5*0.25 + 2*0.25 + 5*0.20 = 2.4 + 1.25 + 0.5 + 1.0 = 5.15
        let factors = ComplexityFactors {
            technical: Some(Level::High),
            business: Some(Level::Medium),
            integration: Some(Level::Low),
            uncertainty: Some(Level::Medium),
        };
        assert!((scorer.score(&factors) - 5.15).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_level_scores_as_medium() {
        let scorer = ComplexityScorer::new();
        let factors = ComplexityFactors {
            technical: Some(Level::Unknown),
            ..ComplexityFactors::default()
        };
        assert_eq!(scorer.score(&factors), 5.0);
    }
}
