use serde::{Deserialize, Serialize};

use crate::options::AnalyzeOptions;
use crate::statistics::Statistics;
use crate::table::Dataset;

/// Analysis request as received from the boundary: raw delimited text plus
/// the stage switches, flattened to match the wire body shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub data: String,
    #[serde(flatten)]
    pub options: AnalyzeOptions,
}

impl AnalyzeRequest {
    pub fn new(data: impl Into<String>, options: AnalyzeOptions) -> Self {
        Self {
            data: data.into(),
            options,
        }
    }
}

/// Analysis result handed back to the boundary.
///
/// On success `processed_data` carries the final dataset and `statistics`
/// the summary over its valid values (omitted when none exist). On failure
/// only `success` and `message` are populated.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_data: Option<Dataset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Statistics>,
    pub message: String,
}

impl AnalyzeResponse {
    pub fn completed(
        dataset: Dataset,
        statistics: Option<Statistics>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            success: true,
            processed_data: Some(dataset),
            statistics,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            processed_data: None,
            statistics: None,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_flags_default_to_false() {
        let request: AnalyzeRequest =
            serde_json::from_str(r#"{"data":"Sales\n1\n"}"#).expect("deserialize request");
        assert_eq!(request.data, "Sales\n1\n");
        assert!(!request.options.clean_missing);
        assert!(!request.options.normalize_data);
        assert!(!request.options.sort_sales);
    }

    #[test]
    fn request_flags_round_trip() {
        let original = AnalyzeRequest::new(
            "Sales\n1\n",
            AnalyzeOptions {
                clean_missing: true,
                normalize_data: false,
                sort_sales: true,
            },
        );
        let json = serde_json::to_string(&original).expect("serialize request");
        let round: AnalyzeRequest = serde_json::from_str(&json).expect("deserialize request");
        assert_eq!(round.options, original.options);
    }

    #[test]
    fn failure_response_omits_data_fields() {
        let response = AnalyzeResponse::failed("no input data supplied");
        let json = serde_json::to_value(&response).expect("serialize response");
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "no input data supplied");
        assert!(json.get("processed_data").is_none());
        assert!(json.get("statistics").is_none());
    }
}
