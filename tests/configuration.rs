use std::io::Write;
use std::sync::Arc;
use std::thread;

use quakeshapes::configuration::Configuration;
use quakeshapes::configurationerror::ConfigurationError;
use quakeshapes::geo::site::Site;

const CONFIG: &str = r#"{
    "vulnerability_model": [
        {
            "name": "PK",
            "function": {
                "0.0269": [0.6, 10.0],
                "0.005": [0.1, 0.3],
                "0.0192": [1.0, 0.3],
                "0.007": [0.3, 0.1],
                "0.0137": [0.5, 0.0],
                "0.0098": [0.0, 0.3]
            }
        },
        {
            "name": "IR",
            "function": {"0.1": [0.0, 0.0], "0.5": [1.0, 0.0]}
        }
    ]
}"#;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_configuration_from_file() {
    let file = write_config(CONFIG);
    let config = Configuration::from_reader(file.path()).unwrap();
    let model = config.vulnerability_model();

    assert_eq!(vec!["IR", "PK"], model.names());

    let pk = model.get("PK").unwrap();
    assert_eq!(&[0.005, 0.007, 0.0098, 0.0137, 0.0192, 0.0269], pk.imls());
    assert_eq!(&[0.1, 0.3, 0.0, 0.5, 1.0, 0.6], pk.loss_ratios());
    assert_eq!(0.2, pk.loss_ratio_for(0.006));
    assert_eq!(10.0, pk.cov_for(1.0));
}

#[test]
fn test_loaded_function_round_trips() {
    let config = Configuration::from_json_str(CONFIG).unwrap();
    let pk = config.vulnerability_model().get("PK").unwrap();

    let json = pk.to_json().unwrap();
    let reloaded = quakeshapes::risk::vulnerabilityfunction::VulnerabilityFunction::from_json(&json).unwrap();
    assert_eq!(*pk, reloaded);
}

#[test]
fn test_malformed_file() {
    let file = write_config("{\"vulnerability_model\": [");
    assert!(matches!(
        Configuration::from_reader(file.path()),
        Err(ConfigurationError::JsonParse(_))
    ));
}

#[test]
fn test_invalid_function_in_file() {
    let file = write_config(
        r#"{"vulnerability_model": [{"name": "X", "function": {"0.1": [0.1, 0.1], "-0.2": [0.1, 0.1]}}]}"#,
    );
    let err = Configuration::from_reader(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("vulnerability function 'X' is invalid"));
}

#[test]
fn test_repeated_iml_key_in_file() {
    let file = write_config(
        r#"{"vulnerability_model": [{"name": "Y", "function": {"0.1": [0.1, 0.1], "0.1": [0.2, 0.1]}}]}"#,
    );
    assert!(matches!(
        Configuration::from_reader(file.path()),
        Err(ConfigurationError::InvalidFunction { ref name, .. }) if name == "Y"
    ));
}

#[test]
fn test_concurrent_readers() {
    let config = Arc::new(Configuration::from_json_str(CONFIG).unwrap());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let config = Arc::clone(&config);
            thread::spawn(move || {
                let ir = config.vulnerability_model().get("IR").unwrap();
                let site = Site::new(-121.00000004 + i as f64, 29.00000006);
                (ir.loss_ratio_for(0.5), site.latitude())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!((1.0, 29.0000001), handle.join().unwrap());
    }
}
