// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_numeric_range() {
    assert_eq!(LogLevel::from_u8(0), Some(LogLevel::Silent));
    assert_eq!(LogLevel::from_u8(3), Some(LogLevel::Info));
    assert_eq!(LogLevel::from_u8(5), Some(LogLevel::Trace));
    assert_eq!(LogLevel::from_u8(6), None);

    assert!(LogLevel::try_from(4).is_ok());
    assert!(LogLevel::try_from(9).is_err());
}

#[test]
fn test_log_level_roundtrips_through_u8() {
    for raw in 0..=5u8 {
        assert_eq!(LogLevel::from_u8(raw).unwrap().as_u8(), raw);
    }
}

#[test]
fn test_log_level_filter_directives() {
    assert_eq!(LogLevel::Silent.directive(), "off");
    assert_eq!(LogLevel::Errors.directive(), "error");
    assert_eq!(LogLevel::Warnings.directive(), "warn");
    assert_eq!(LogLevel::Info.directive(), "info");
    assert_eq!(LogLevel::Debug.directive(), "debug");
    assert_eq!(LogLevel::Trace.directive(), "trace");
}

#[test]
fn test_log_level_ordering() {
    assert!(LogLevel::Silent < LogLevel::Errors);
    assert!(LogLevel::Info < LogLevel::Trace);
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::Info);
    assert_eq!(config.file_level(), LogLevel::Trace);
    assert!(config.log_path().is_none());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .console(LogLevel::Debug)
        .file(LogLevel::Trace)
        .path(PathBuf::from("sbcbuild.log"))
        .build();

    assert_eq!(config.console_level(), LogLevel::Debug);
    assert_eq!(config.log_path(), Some(std::path::Path::new("sbcbuild.log")));
}
