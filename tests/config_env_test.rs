//! Environment overrides for ClientConfig.

use std::path::PathBuf;

use cerina::startup::config::{
    DEFAULT_API_URL, DEFAULT_MAILBOX_URL, ENV_API_URL, ENV_HOME, ENV_MAILBOX_URL,
};
use cerina::startup::ClientConfig;
use serial_test::serial;

fn clear_env() {
    for key in [ENV_API_URL, ENV_MAILBOX_URL, ENV_HOME] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_env() {
    clear_env();
    let config = ClientConfig::from_env();
    assert_eq!(config.api_base_url, DEFAULT_API_URL);
    assert_eq!(config.mailbox_url, DEFAULT_MAILBOX_URL);
    assert!(config.data_dir.ends_with(".cerina"));
}

#[test]
#[serial]
fn test_env_overrides() {
    clear_env();
    std::env::set_var(ENV_API_URL, "https://api.example.com/v1/");
    std::env::set_var(ENV_MAILBOX_URL, "https://mail.example.com");
    std::env::set_var(ENV_HOME, "/tmp/cerina-test-home");

    let config = ClientConfig::from_env();
    clear_env();

    assert_eq!(config.api_base_url, "https://api.example.com/v1");
    assert_eq!(config.mailbox_url, "https://mail.example.com");
    assert_eq!(config.data_dir, PathBuf::from("/tmp/cerina-test-home"));
    assert_eq!(
        config.log_path(),
        PathBuf::from("/tmp/cerina-test-home/cerina.log")
    );
}

#[test]
#[serial]
fn test_blank_values_are_ignored() {
    clear_env();
    std::env::set_var(ENV_API_URL, "");
    std::env::set_var(ENV_HOME, "   ");

    let config = ClientConfig::from_env();
    clear_env();

    assert_eq!(config.api_base_url, DEFAULT_API_URL);
    assert!(config.data_dir.ends_with(".cerina"));
}
