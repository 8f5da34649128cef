//! Risk gauge - band classification of the predicted percentage

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    /// `<= 30` Low, `<= 60` Moderate, else High
    pub fn classify(percent: f64) -> Self {
        if percent <= 30.0 {
            RiskBand::Low
        } else if percent <= 60.0 {
            RiskBand::Moderate
        } else {
            RiskBand::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBand::Low => "low",
            RiskBand::Moderate => "moderate",
            RiskBand::High => "high",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            RiskBand::Low => "Low risk: Maintain a healthy lifestyle to keep your risk low.",
            RiskBand::Moderate => "Moderate risk: Consider lifestyle changes and regular check-ups.",
            RiskBand::High => "High risk: Consult with a healthcare professional for personalized advice.",
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Gauge model for one prediction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskGauge {
    pub percent: f64,
    /// Slider position, 0-100
    pub position: f64,
    pub band: RiskBand,
    /// Drawn in the warning color above 50%
    pub is_elevated: bool,
    pub headline: String,
}

impl RiskGauge {
    pub fn new(percent: f64) -> Self {
        Self {
            percent,
            position: percent.clamp(0.0, 100.0),
            band: RiskBand::classify(percent),
            is_elevated: percent > 50.0,
            headline: format!("Predicted Risk: {:.2}%", percent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(RiskBand::classify(0.0), RiskBand::Low);
        assert_eq!(RiskBand::classify(30.0), RiskBand::Low);
        assert_eq!(RiskBand::classify(30.01), RiskBand::Moderate);
        assert_eq!(RiskBand::classify(60.0), RiskBand::Moderate);
        assert_eq!(RiskBand::classify(60.5), RiskBand::High);
    }

    #[test]
    fn test_gauge() {
        let gauge = RiskGauge::new(55.126);
        assert_eq!(gauge.headline, "Predicted Risk: 55.13%");
        assert!(gauge.is_elevated);
        assert_eq!(gauge.band, RiskBand::Moderate);

        let low = RiskGauge::new(-2.0);
        assert_eq!(low.position, 0.0);
        assert!(!low.is_elevated);
    }
}
