//! Verify build/parse against JSON test vectors stored in `test-vectors/`.
//!
//! Each case describes an input password, the expected request, a simulated
//! response, and either the expected decoded result or the expected error
//! kind. Results are compared as decoded values, not raw strings, so field
//! ordering in the vectors does not matter.

use zxcvbn_remote::{HttpMethod, HttpResponse, StrengthResult, ZxcvbnClient, ZxcvbnError};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> ZxcvbnClient {
    ZxcvbnClient::new(BASE_URL).unwrap()
}

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "POST" => HttpMethod::Post,
        other => panic!("unknown method: {other}"),
    }
}

#[test]
fn estimate_test_vectors() {
    let raw = include_str!("../../test-vectors/estimate.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let password = case["input_password"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_estimate_strength(password).unwrap();
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.url, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: url");

        let expected_headers: Vec<(String, String)> = expected_req["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");
        assert_eq!(req.body.as_deref(), expected_req["body"].as_str(), "{name}: body");

        // Verify parse
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: sim["body"].as_str().unwrap().to_string(),
        };
        let result = c.parse_estimate_strength(response);

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "http" => assert!(
                    matches!(err, ZxcvbnError::Http { status, .. } if status == sim["status"].as_u64().unwrap() as u16),
                    "{name}: expected Http, got {err:?}"
                ),
                "deserialization" => assert!(
                    matches!(err, ZxcvbnError::Deserialization(_)),
                    "{name}: expected Deserialization, got {err:?}"
                ),
                other => panic!("{name}: unknown expected_error {other}"),
            }
        } else {
            let parsed = result.unwrap();
            let expected: StrengthResult = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(parsed, expected, "{name}: parsed result");
        }
    }
}

#[test]
fn empty_password_is_rejected_before_building() {
    let err = client().build_estimate_strength("").unwrap_err();
    assert!(matches!(err, ZxcvbnError::InvalidPassword));
}
