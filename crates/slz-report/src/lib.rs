//! Output rendering.
//!
//! A run produces exactly one of two JSON shapes on the output parameter: the
//! feature array, or a one-element array wrapping an error message. Never
//! both, never a mix.

use serde::{Deserialize, Serialize};

use slz_model::{ExtractError, FeatureRecord, Result};

/// The single element of an error payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Serialize the feature array.
pub fn render_features(features: &[FeatureRecord]) -> Result<String> {
    Ok(serde_json::to_string(features)?)
}

/// Serialize the error payload for a failed run.
///
/// Infallible by construction: the envelope contains nothing but a string.
pub fn render_error(error: &ExtractError) -> String {
    let payload = vec![ErrorEnvelope {
        error: ErrorBody {
            message: error.to_string(),
        },
    }];
    serde_json::to_string(&payload).unwrap_or_else(|_| {
        // A string-only payload cannot fail to serialize; keep the contract
        // shape even if it somehow does.
        "[{\"error\":{\"message\":\"No output is generated\"}}]".to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::{render_error, render_features};
    use slz_model::{ExtractError, FeatureRecord};

    #[test]
    fn error_payload_matches_contract_shape() {
        let rendered = render_error(&ExtractError::InputRequired);
        assert_eq!(
            rendered,
            r#"[{"error":{"message":"The input zip file is required"}}]"#
        );
    }

    #[test]
    fn feature_payload_is_a_json_array() {
        let rendered = render_features(&[FeatureRecord::default()]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        let features = parsed.as_array().unwrap();
        assert_eq!(features.len(), 1);
        assert!(features[0].get("error").is_none());
        assert!(features[0].get("speedCategoryName").is_some());
    }

    #[test]
    fn empty_feature_list_serializes_but_is_not_emitted_upstream() {
        // The orchestrator routes an empty join to the NoOutput error path;
        // this keeps the serializer itself total.
        assert_eq!(render_features(&[]).unwrap(), "[]");
    }
}
