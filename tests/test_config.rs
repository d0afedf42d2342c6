use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use wirehttp::cli::Args;
use wirehttp::config::{Config, DEFAULT_LISTEN_ADDR};

fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn test_config_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.server.listen_addr, DEFAULT_LISTEN_ADDR);
    assert_eq!(cfg.server.max_connections, 0);
    assert_eq!(cfg.files.directory, PathBuf::from("/"));
}

#[test]
fn test_config_env_overrides() {
    let mut cfg = Config::default();
    cfg.apply_env(env(&[("LISTEN", "0.0.0.0:3000"), ("FILES_DIRECTORY", "/srv/files")]));

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.files.directory, PathBuf::from("/srv/files"));
}

#[test]
fn test_config_env_absent_keeps_defaults() {
    let mut cfg = Config::default();
    cfg.apply_env(env(&[]));

    assert_eq!(cfg.server.listen_addr, DEFAULT_LISTEN_ADDR);
}

#[test]
fn test_config_from_yaml() {
    let cfg = Config::from_yaml_str(
        "server:\n  listen_addr: \"0.0.0.0:8000\"\n  max_connections: 16\nfiles:\n  directory: /tmp/data\n",
    )
    .unwrap();

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:8000");
    assert_eq!(cfg.server.max_connections, 16);
    assert_eq!(cfg.files.directory, PathBuf::from("/tmp/data"));
}

#[test]
fn test_config_partial_yaml_uses_defaults() {
    let cfg = Config::from_yaml_str("files:\n  directory: /var/www\n").unwrap();

    assert_eq!(cfg.server.listen_addr, DEFAULT_LISTEN_ADDR);
    assert_eq!(cfg.files.directory, PathBuf::from("/var/www"));
}

#[test]
fn test_config_invalid_yaml() {
    assert!(Config::from_yaml_str("server: 42").is_err());
}

#[test]
fn test_config_missing_file() {
    let err = Config::from_file(&PathBuf::from("/definitely/not/here.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_args_directory_flag() {
    let args = Args::try_parse_from(["wirehttp", "--directory", "/tmp/files"]).unwrap();
    assert_eq!(args.directory, Some(PathBuf::from("/tmp/files")));
    assert_eq!(args.listen, None);
}

#[test]
fn test_args_override_env_and_file() {
    let mut cfg = Config::from_yaml_str("server:\n  listen_addr: \"127.0.0.1:1\"\n").unwrap();
    cfg.apply_env(env(&[("LISTEN", "127.0.0.1:2"), ("FILES_DIRECTORY", "/env")]));

    let args = Args::try_parse_from([
        "wirehttp",
        "--listen",
        "127.0.0.1:3",
        "--directory",
        "/cli",
        "--max-connections",
        "8",
    ])
    .unwrap();
    cfg.apply_args(&args);

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:3");
    assert_eq!(cfg.files.directory, PathBuf::from("/cli"));
    assert_eq!(cfg.server.max_connections, 8);
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.server.listen_addr, cfg2.server.listen_addr);
}
