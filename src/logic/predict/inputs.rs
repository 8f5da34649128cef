//! Researcher inputs sent to the prediction backend

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Five model inputs, serialized with the backend's camelCase keys.
///
/// Kept as strings while being edited; `validate` checks them before a
/// request is sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearcherInputs {
    #[serde(default, deserialize_with = "lenient_string")]
    pub snp_risk_allele: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub p_value: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub or_beta: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub risk_allele_frequency: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub p_value_mlog: String,
}

/// Field keys in form order
pub const FIELD_KEYS: [&str; 5] = ["snpRiskAllele", "pValue", "orBeta", "riskAlleleFrequency", "pValueMlog"];

impl ResearcherInputs {
    /// `(key, value)` pairs in form order
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("snpRiskAllele", &self.snp_risk_allele),
            ("pValue", &self.p_value),
            ("orBeta", &self.or_beta),
            ("riskAlleleFrequency", &self.risk_allele_frequency),
            ("pValueMlog", &self.p_value_mlog),
        ]
    }

    /// Update one field by key. Returns false for unknown keys.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        let slot = match key {
            "snpRiskAllele" => &mut self.snp_risk_allele,
            "pValue" => &mut self.p_value,
            "orBeta" => &mut self.or_beta,
            "riskAlleleFrequency" => &mut self.risk_allele_frequency,
            "pValueMlog" => &mut self.p_value_mlog,
            _ => return false,
        };
        *slot = value.into();
        true
    }

    /// All fields present, numeric fields finite.
    pub fn validate(&self) -> Result<(), InputError> {
        for (key, value) in self.fields() {
            if value.trim().is_empty() {
                return Err(InputError::MissingField(key));
            }
        }

        for (key, value) in self.fields().into_iter().skip(1) {
            let parsed = value.trim().parse::<f64>().ok().filter(|v| v.is_finite());
            if parsed.is_none() {
                return Err(InputError::InvalidNumber {
                    field: key,
                    value: value.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Accept strings or numbers for sample data returned by the backend.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(match raw {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Upper-cased form label, e.g. `pValueMlog` -> `PVALUEMLOG`.
pub fn field_label(key: &str) -> String {
    key.to_uppercase().replacen('_', " ", 1)
}

/// Help text shown next to each input.
pub fn field_help(key: &str) -> &'static str {
    match key {
        "snpRiskAllele" => "The strongest Single Nucleotide Polymorphism (SNP) associated with Alzheimer's risk. It represents the genetic variant most strongly linked to the disease.",
        "pValue" => "The statistical significance of the genetic association. Lower p-values indicate stronger evidence against the null hypothesis of no association.",
        "orBeta" => "Odds Ratio (OR) or Beta coefficient, indicating the effect size of the genetic variant. An OR > 1 suggests increased risk, while OR < 1 suggests decreased risk.",
        "riskAlleleFrequency" => "The frequency of the risk-associated allele in the population. Higher frequencies may indicate a more common genetic risk factor.",
        "pValueMlog" => "The negative log (base 10) of the p-value. This transformation enhances the scale for very small p-values, making them easier to compare and visualize.",
        _ => "No description available",
    }
}
