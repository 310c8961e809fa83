//! Profile files and recordings on disk.

use std::io::Write;

use qsketch_hal::{
    Counts, Executor, ExecutorConfig, ExecutorProfiles, ExecutorRegistry, HalError, Recording,
    Statevector,
};
use qsketch_ir::Circuit;
use tempfile::NamedTempFile;

#[test]
fn test_load_profiles_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "profiles:\n  sim:\n    backend: local_qasm_simulator\n  qx:\n    url: https://qx.example/api\n    token: abc\n"
    )
    .unwrap();

    let profiles = ExecutorProfiles::load(file.path()).unwrap();
    assert_eq!(profiles.len(), 2);
    assert_eq!(
        profiles.get("sim").unwrap().backend.as_deref(),
        Some("local_qasm_simulator")
    );
    assert_eq!(profiles.get("qx").unwrap().resolve_token().unwrap(), "abc");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ExecutorProfiles::load(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, HalError::Io(_)));
}

#[test]
fn test_malformed_yaml() {
    let err = ExecutorProfiles::from_yaml_str("profiles: [not, a, map]").unwrap_err();
    assert!(matches!(err, HalError::Yaml(_)));
}

#[test]
fn test_replay_from_recording_file() {
    let recording = Recording {
        counts: [("ghz".to_string(), Counts::from_pairs([("000", 3), ("111", 5)]))]
            .into_iter()
            .collect(),
        statevectors: [("plus".to_string(), Statevector::from_real([0.6, 0.8]))]
            .into_iter()
            .collect(),
    };
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&recording).unwrap().as_bytes())
        .unwrap();

    let config = ExecutorConfig::new("offline")
        .with_backend("replay")
        .with_endpoint(file.path().to_string_lossy());
    let mut profiles = ExecutorProfiles::default();
    profiles.insert(config);

    let executor = ExecutorRegistry::with_defaults()
        .create_from_profile(&profiles, "offline")
        .unwrap();

    let counts = executor.submit(&Circuit::with_size("ghz", 3), 8).unwrap();
    assert_eq!(counts.get("111"), 5);
    let sv = executor
        .submit_statevector(&Circuit::with_size("plus", 1))
        .unwrap();
    assert_eq!(sv, Statevector::from_real([0.6, 0.8]));
}
