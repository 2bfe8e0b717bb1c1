use clap::Parser;
use lanternd::config::{Cli, Config, DEFAULT_PORT};
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.server.port, DEFAULT_PORT);
    assert_eq!(cfg.listen_addr(), "127.0.0.1:8080");
    assert_eq!(cfg.site.root, PathBuf::from("."));
}

#[test]
fn test_cli_no_arguments_uses_default_port() {
    let cli = Cli::try_parse_from(["lanternd"]).unwrap();
    assert_eq!(cli.port, None);
}

#[test]
fn test_cli_single_port_argument() {
    let cli = Cli::try_parse_from(["lanternd", "9090"]).unwrap();
    assert_eq!(cli.port, Some(9090));
}

#[test]
fn test_cli_rejects_non_integer_port() {
    assert!(Cli::try_parse_from(["lanternd", "eighty"]).is_err());
}

#[test]
fn test_cli_rejects_extra_arguments() {
    assert!(Cli::try_parse_from(["lanternd", "8080", "9090"]).is_err());
}

#[test]
fn test_config_from_yaml_partial() {
    let cfg = Config::from_yaml("server:\n  port: 3000\nsite:\n  root: /srv/www\n").unwrap();
    assert_eq!(cfg.server.port, 3000);
    assert_eq!(cfg.server.host, "127.0.0.1");
    assert_eq!(cfg.site.root, PathBuf::from("/srv/www"));
    assert_eq!(cfg.site.server_header, Config::default().site.server_header);
}

#[test]
fn test_config_from_yaml_rejects_bad_port() {
    assert!(Config::from_yaml("server:\n  port: not-a-port\n").is_err());
}

// The only test touching the environment, so it cannot race the others.
#[test]
fn test_config_load_layers_env_file_and_cli() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "server:\n  port: 4000\nsite:\n  server_header: custom").unwrap();

    unsafe {
        std::env::set_var("SERVER_CONFIG", file.path());
        std::env::set_var("LISTEN_HOST", "0.0.0.0");
    }

    let cfg = Config::load(&Cli { port: None }).unwrap();
    assert_eq!(cfg.listen_addr(), "0.0.0.0:4000");
    assert_eq!(cfg.site.server_header, "custom");

    let cfg = Config::load(&Cli { port: Some(5000) }).unwrap();
    assert_eq!(cfg.listen_addr(), "0.0.0.0:5000");

    unsafe {
        std::env::remove_var("SERVER_CONFIG");
        std::env::remove_var("LISTEN_HOST");
    }
}
