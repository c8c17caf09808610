// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates environment variable parsing, defaults, and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::fs;

use food_analysis_server::analysis::FoodAnalyzer;
use food_analysis_server::config::{load_dotenv_from, ServerConfig};
use food_analysis_server::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

const MANAGED_VARS: [&str; 8] = [
    "HTTP_HOST",
    "HTTP_PORT",
    "OPENAI_API_KEY",
    "OPENAI_BASE_URL",
    "OPENAI_MODEL",
    "OPENAI_MAX_TOKENS",
    "OPENAI_TEMPERATURE",
    "CORS_ALLOWED_ORIGINS",
];

fn clear_env() {
    for var in MANAGED_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_host, "0.0.0.0");
    assert_eq!(config.http_port, 8000);
    assert_eq!(config.bind_address(), "0.0.0.0:8000");
    assert_eq!(config.openai.model, "gpt-4o");
    assert_eq!(config.openai.max_tokens, 500);
    assert!(config.openai.api_key.is_none());
    assert_eq!(config.cors.allowed_origins, "*");
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var("HTTP_PORT", "9100");
    env::set_var("OPENAI_API_KEY", "sk-from-env");
    env::set_var("OPENAI_MODEL", "gpt-4o-mini");
    env::set_var("OPENAI_MAX_TOKENS", "800");
    env::set_var("OPENAI_TEMPERATURE", "0.3");
    env::set_var("CORS_ALLOWED_ORIGINS", "https://app.example.com");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.http_port, 9100);
    assert_eq!(config.openai.api_key.as_deref(), Some("sk-from-env"));
    assert_eq!(config.openai.model, "gpt-4o-mini");
    assert_eq!(config.openai.max_tokens, 800);
    assert!((config.openai.temperature - 0.3).abs() < f32::EPSILON);
    assert_eq!(config.cors.allowed_origins, "https://app.example.com");
    assert!(!config.summary().contains("sk-from-env"));
}

#[test]
#[serial]
fn test_blank_api_key_counts_as_missing() {
    clear_env();
    env::set_var("OPENAI_API_KEY", "   ");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert!(!config.openai.has_credential());
    assert!(!FoodAnalyzer::from_config(&config).unwrap().is_configured());
}

#[test]
#[serial]
fn test_invalid_port_is_rejected() {
    clear_env();
    env::set_var("HTTP_PORT", "not-a-port");

    let error = ServerConfig::from_env().unwrap_err();
    clear_env();

    assert!(error.to_string().contains("HTTP_PORT"));
}

#[test]
#[serial]
fn test_configured_key_builds_provider() {
    clear_env();
    env::set_var("OPENAI_API_KEY", "sk-from-env");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    let analyzer = FoodAnalyzer::from_config(&config).unwrap();
    assert!(analyzer.is_configured());
    assert_eq!(analyzer.model(), "gpt-4o");
}

#[test]
#[serial]
fn test_env_file_feeds_logging_and_config() {
    clear_env();
    env::remove_var("LOG_FORMAT");
    env::set_var("OPENAI_MODEL", "gpt-4o");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, "LOG_FORMAT=json\nHTTP_PORT=9300\nOPENAI_MODEL=gpt-4o-mini\n").unwrap();

    load_dotenv_from(&path).unwrap();

    assert_eq!(LoggingConfig::from_env().format, LogFormat::Json);
    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 9300);
    // Variables already set are not overridden by the file
    assert_eq!(config.openai.model, "gpt-4o");

    env::remove_var("LOG_FORMAT");
    clear_env();
}

#[test]
fn test_missing_env_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_dotenv_from(&dir.path().join(".env")).is_err());
}
