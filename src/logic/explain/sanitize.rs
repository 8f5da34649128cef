//! Numeric Sanitizer
//!
//! Turns raw backend JSON into a `ContributionSet`. Values that do not
//! parse to a finite number are dropped, never defaulted to zero.
//! Structural problems (wrong shape, length mismatch, nameless entries)
//! fail the whole payload.

use serde_json::{Map, Value};

use super::types::{BreakdownFactor, Contribution, ContributionSet};
use crate::error::{ViewError, ViewResult};

/// Parse a JSON number or decimal string to a finite `f64`.
pub fn parse_number(raw: &Value) -> Option<f64> {
    let parsed = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

fn as_sequence<'a>(raw: &'a Value, what: &str) -> ViewResult<&'a Vec<Value>> {
    raw.as_array()
        .ok_or_else(|| ViewError::invalid(format!("{} is not a sequence", what)))
}

fn name_of(raw: &Value) -> ViewResult<String> {
    match raw {
        Value::String(s) => Ok(s.clone()),
        other => Err(ViewError::invalid(format!("feature name {} is not a string", other))),
    }
}

/// Zip parallel `names` / `values` sequences (SHAP payload).
pub fn sanitize_parallel(names: &Value, values: &Value) -> ViewResult<ContributionSet> {
    let names = as_sequence(names, "feature_names")?;
    let values = as_sequence(values, "shap_values")?;

    if names.len() != values.len() {
        log::warn!(
            "Rejecting SHAP payload: {} names vs {} values",
            names.len(),
            values.len()
        );
        return Err(ViewError::invalid(format!(
            "{} feature names for {} values",
            names.len(),
            values.len()
        )));
    }

    let mut items = Vec::with_capacity(values.len());
    for (name, value) in names.iter().zip(values) {
        let name = name_of(name)?;
        match parse_number(value) {
            Some(v) => items.push(Contribution { name, value: v }),
            None => log::debug!("Dropping non-numeric value {} for '{}'", value, name),
        }
    }

    log_dropped("SHAP", values.len(), items.len());
    ContributionSet::new(items)
}

/// Global importances: either `[{feature, importance}, ...]` or `{name: value}`.
pub fn sanitize_importance(raw: &Value) -> ViewResult<ContributionSet> {
    let (seen, items) = match raw {
        Value::Array(entries) => (entries.len(), importance_from_entries(entries)?),
        Value::Object(map) => (map.len(), importance_from_map(map)),
        other => {
            log::warn!("Rejecting importance payload of unexpected shape");
            return Err(ViewError::invalid(format!(
                "feature importance payload is neither a list nor a mapping: {}",
                other
            )));
        }
    };

    log_dropped("importance", seen, items.len());
    ContributionSet::new(items)
}

fn importance_from_entries(entries: &[Value]) -> ViewResult<Vec<Contribution>> {
    let mut items = Vec::with_capacity(entries.len());
    for entry in entries {
        let obj = entry
            .as_object()
            .ok_or_else(|| ViewError::invalid("importance entry is not an object"))?;
        let name = name_of(obj.get("feature").unwrap_or(&Value::Null))?;
        if let Some(v) = obj.get("importance").and_then(parse_number) {
            items.push(Contribution { name, value: v });
        }
    }
    Ok(items)
}

fn importance_from_map(map: &Map<String, Value>) -> Vec<Contribution> {
    map.iter()
        .filter_map(|(name, value)| {
            parse_number(value).map(|v| Contribution { name: name.clone(), value: v })
        })
        .collect()
}

/// Risk breakdown factors: `[{name, contribution, relativeImportance}, ...]`.
///
/// An entry is dropped when either number fails to parse.
pub fn sanitize_breakdown(raw: &Value) -> ViewResult<ContributionSet<BreakdownFactor>> {
    let entries = as_sequence(raw, "riskBreakdown.features")?;

    let mut items = Vec::with_capacity(entries.len());
    for entry in entries {
        let obj = entry
            .as_object()
            .ok_or_else(|| ViewError::invalid("risk factor is not an object"))?;
        let name = name_of(obj.get("name").unwrap_or(&Value::Null))?;

        let relative = obj.get("relativeImportance").and_then(parse_number);
        let contribution = obj.get("contribution").and_then(parse_number);
        match (relative, contribution) {
            (Some(relative_importance), Some(contribution)) => items.push(BreakdownFactor {
                name,
                contribution,
                relative_importance,
            }),
            _ => log::debug!("Dropping risk factor '{}' with non-numeric fields", name),
        }
    }

    log_dropped("breakdown", entries.len(), items.len());
    ContributionSet::new(items)
}

fn log_dropped(what: &str, seen: usize, kept: usize) {
    if kept < seen {
        log::debug!("Sanitizer dropped {} of {} {} values", seen - kept, seen, what);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_drops_nan_string() {
        let set = sanitize_parallel(&json!(["a", "b", "c"]), &json!(["0.5", "NaN", "1.2"])).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice()[0], Contribution::new("a", 0.5));
        assert_eq!(set.as_slice()[1], Contribution::new("c", 1.2));
    }

    #[test]
    fn test_mixed_numbers_and_strings() {
        let set = sanitize_parallel(
            &json!(["a", "b", "c", "d"]),
            &json!([0.25, " -3 ", null, "inf"]),
        )
        .unwrap();
        let values: Vec<f64> = set.iter().map(|c| c.value).collect();
        assert_eq!(values, vec![0.25, -3.0]);
    }

    #[test]
    fn test_length_mismatch_is_invalid() {
        let err = sanitize_parallel(&json!(["a", "b"]), &json!([1.0])).unwrap_err();
        assert!(matches!(err, ViewError::InvalidPayload(_)));
    }

    #[test]
    fn test_non_sequence_is_invalid() {
        assert!(sanitize_parallel(&json!("a,b"), &json!([1.0, 2.0])).is_err());
        assert!(sanitize_parallel(&json!(["a"]), &Value::Null).is_err());
    }

    #[test]
    fn test_non_string_name_is_invalid() {
        assert!(sanitize_parallel(&json!([1, "b"]), &json!([1.0, 2.0])).is_err());
    }

    #[test]
    fn test_importance_list_and_map() {
        let list = sanitize_importance(&json!([
            {"feature": "P-VALUE", "importance": 0.3},
            {"feature": "OR or BETA", "importance": "0.5"},
            {"feature": "PVALUE_MLOG", "importance": "n/a"}
        ]))
        .unwrap();
        assert_eq!(list.len(), 2);

        let map = sanitize_importance(&json!({"P-VALUE": 0.3, "OR or BETA": 0.5})).unwrap();
        assert_eq!(map.len(), 2);

        assert!(sanitize_importance(&json!("Feature importance route is a placeholder.")).is_err());
    }

    #[test]
    fn test_importance_map_keeps_backend_order() {
        let raw: Value = serde_json::from_str(r#"{"zeta": 0.5, "alpha": 0.5, "mid": 0.9}"#).unwrap();
        let set = sanitize_importance(&raw).unwrap();
        let names: Vec<&str> = set.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);

        let ranked = crate::logic::explain::rank(&set, crate::logic::explain::RankKey::Magnitude);
        let names: Vec<&str> = ranked.items().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["mid", "zeta", "alpha"]);
    }

    #[test]
    fn test_breakdown_entries() {
        let set = sanitize_breakdown(&json!([
            {"name": "APOE", "contribution": 0.12, "relativeImportance": 0.4},
            {"name": "CLU", "contribution": "bad", "relativeImportance": 0.2},
            {"name": "CR1", "contribution": 0.01, "relativeImportance": "0.05"}
        ]))
        .unwrap();
        let names: Vec<_> = set.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["APOE", "CR1"]);

        assert!(sanitize_breakdown(&json!([42])).is_err());
    }
}
