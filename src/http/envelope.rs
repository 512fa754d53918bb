//! Shared response contract for the spot REST API.
//!
//! Every spot endpoint returns the same top-level status block alongside an
//! endpoint-specific `result` payload. The transport decodes the whole
//! envelope in one pass; callers inspect `common.ret_code` when they care
//! about the API-level status.

use serde::{Deserialize, Serialize};

/// Status and metadata block common to every spot REST response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CommonResponse {
    pub ret_code: i64,
    pub ret_msg: String,
    #[serde(default)]
    pub ext_code: String,
    /// Free-form on the wire: null, a string, or an object.
    #[serde(default)]
    pub ext_info: serde_json::Value,
    pub time_now: String,
}

/// Envelope wrapping the common status block and an endpoint's payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    #[serde(flatten)]
    pub common: CommonResponse,
    pub result: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_flatten_decode() {
        // ext_code/ext_info omitted entirely — defaults apply.
        let json = r#"{
            "ret_code": 0,
            "ret_msg": "",
            "time_now": "1620000000.123456",
            "result": [1, 2, 3]
        }"#;
        let resp: ApiResponse<Vec<i64>> = serde_json::from_str(json).unwrap();
        assert_eq!(resp.common.ret_code, 0);
        assert_eq!(resp.common.time_now, "1620000000.123456");
        assert!(resp.common.ext_info.is_null());
        assert_eq!(resp.result, vec![1, 2, 3]);
    }

    #[test]
    fn test_envelope_round_trip() {
        let resp = ApiResponse {
            common: CommonResponse {
                ret_code: 0,
                ret_msg: "OK".to_string(),
                ext_code: String::new(),
                ext_info: serde_json::Value::Null,
                time_now: "1620000000.123456".to_string(),
            },
            result: vec!["a".to_string()],
        };
        let json = serde_json::to_string(&resp).unwrap();
        let back: ApiResponse<Vec<String>> = serde_json::from_str(&json).unwrap();
        assert_eq!(resp, back);
    }

    #[test]
    fn test_envelope_missing_result_is_error() {
        let json = r#"{"ret_code":0,"ret_msg":"","time_now":"1"}"#;
        assert!(serde_json::from_str::<ApiResponse<Vec<i64>>>(json).is_err());
    }
}
