use strata_core::errors::*;

#[test]
fn registry_already_exists_carries_name() {
    let err = RegistryError::AlreadyExists {
        name: "world wars".into(),
    };
    assert!(
        err.to_string().contains("world wars"),
        "error should contain the topic name"
    );
}

#[test]
fn registry_capacity_exceeded_carries_limit() {
    let err = RegistryError::CapacityExceeded { capacity: 5 };
    assert!(err.to_string().contains('5'));
}

#[test]
fn registry_no_data_found_carries_topic() {
    let err = RegistryError::NoDataFound {
        topic: "xyzzyplex history".into(),
    };
    assert!(err.to_string().contains("xyzzyplex history"));
}

#[test]
fn provider_unavailable_carries_provider_and_reason() {
    let err = ProviderError::Unavailable {
        provider: "knowledge-graph".into(),
        reason: "connection refused".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("knowledge-graph"));
    assert!(msg.contains("connection refused"));
}

#[test]
fn provider_timeout_carries_seconds() {
    let err = ProviderError::Timeout {
        provider: "encyclopedia".into(),
        secs: 8,
    };
    assert!(err.to_string().contains('8'));
}

// --- From impls ---

#[test]
fn provider_error_converts_to_strata_error() {
    let err = ProviderError::MalformedResponse {
        provider: "generative".into(),
        reason: "not a JSON array".into(),
    };
    let top: StrataError = err.into();
    assert!(matches!(top, StrataError::Provider(_)));
}

#[test]
fn registry_error_converts_to_strata_error() {
    let err = RegistryError::CapacityExceeded { capacity: 5 };
    let top: StrataError = err.into();
    assert!(matches!(top, StrataError::Registry(_)));
}
