//! Payload fixtures shared by the integration tests

use serde_json::{json, Value};

/// RAML gateway validation envelope
#[allow(dead_code)]
pub fn raml_payload() -> Value {
    json!({
        "errorMessage": {
            "error": {
                "errorDescription": "Invalid customer ID",
                "errorType": "VALIDATION_ERROR",
                "message": "Customer 12345 does not exist"
            }
        }
    })
}

/// SAP OData error nested in the gateway envelope
#[allow(dead_code)]
pub fn sap_payload() -> Value {
    sap_payload_with("Material not found in SAP")
}

#[allow(dead_code)]
pub fn sap_payload_with(value: &str) -> Value {
    json!({
        "errorMessage": {
            "error": {
                "message": {
                    "error": {
                        "code": "M3/305",
                        "message": {"lang": "en", "value": value},
                        "innererror": {
                            "errordetails": [
                                {"code": "M3/305", "message": "Material 4711 unknown", "severity": "error"}
                            ]
                        }
                    }
                }
            }
        }
    })
}

/// Salesforce REST error list
#[allow(dead_code)]
pub fn salesforce_payload() -> Value {
    json!({
        "errorMessage": {
            "payload": [
                {
                    "message": "Required fields are missing: [LastName]",
                    "errorCode": "REQUIRED_FIELD_MISSING",
                    "fields": ["LastName"]
                }
            ]
        }
    })
}

/// Loose gateway envelope
#[allow(dead_code)]
pub fn gateway_payload() -> Value {
    json!({
        "errorMessage": {
            "error": {
                "message": "Upstream request timed out",
                "code": "HTTP:TIMEOUT",
                "details": "POST /orders after 30000ms"
            }
        }
    })
}

/// Generic runtime wrapper
#[allow(dead_code)]
pub fn generic_payload() -> Value {
    json!({"message": "Null pointer in flow", "code": "RUNTIME_FAILURE"})
}

/// One conforming payload per registered shape id
#[allow(dead_code)]
pub fn all_shapes() -> Vec<(&'static str, Value)> {
    vec![
        ("sap", sap_payload()),
        ("salesforce", salesforce_payload()),
        ("raml", raml_payload()),
        ("gateway", gateway_payload()),
        ("generic", generic_payload()),
    ]
}
