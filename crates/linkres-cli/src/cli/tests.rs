//! CLI parse and dispatch tests.

use super::commands::{manifest_location, run_list, run_resolve};
use super::{Cli, CliCommand};
use clap::Parser;
use linkres_core::config::LinkresConfig;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_resolve() {
    match parse(&["linkres", "resolve"]) {
        CliCommand::Resolve { manifest } => assert!(manifest.is_none()),
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_manifest_override() {
    match parse(&["linkres", "resolve", "--manifest", "/srv/links.json"]) {
        CliCommand::Resolve { manifest } => {
            assert_eq!(manifest.as_deref(), Some(Path::new("/srv/links.json")));
        }
        _ => panic!("expected Resolve with --manifest"),
    }
}

#[test]
fn cli_parse_list() {
    match parse(&["linkres", "list", "--manifest", "links.json"]) {
        CliCommand::List { manifest } => {
            assert_eq!(manifest.as_deref(), Some(Path::new("links.json")));
        }
        _ => panic!("expected List"),
    }
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["linkres", "fetch"]).is_err());
}

#[test]
fn manifest_location_prefers_cli_override() {
    let cfg = LinkresConfig {
        manifest_path: Some(PathBuf::from("/etc/linkres/links.json")),
    };
    let loc = manifest_location(Some(Path::new("/tmp/override.json")), &cfg);
    assert_eq!(loc, PathBuf::from("/tmp/override.json"));
}

#[test]
fn manifest_location_falls_back_to_config_then_default() {
    let cfg = LinkresConfig {
        manifest_path: Some(PathBuf::from("/etc/linkres/links.json")),
    };
    assert_eq!(
        manifest_location(None, &cfg),
        PathBuf::from("/etc/linkres/links.json")
    );
    assert_eq!(
        manifest_location(None, &LinkresConfig::default()),
        PathBuf::from("links.json")
    );
}

#[test]
fn run_resolve_match_and_no_match_both_succeed() {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(
        br#"{"files":[{"name":"libfoo","version":"1.2","arch":"x64","downloadLink":"http://x/a"}]}"#,
    )
    .unwrap();
    f.flush().unwrap();
    let cfg = LinkresConfig::default();

    // Only this test touches the lookup env vars within this binary.
    std::env::set_var(linkres_core::resolver::ENV_NAME, "libfoo");
    std::env::set_var(linkres_core::resolver::ENV_VERSION, "1.2");
    std::env::set_var(linkres_core::resolver::ENV_ARCH, "x64");
    run_resolve(Some(f.path()), &cfg).unwrap();

    // No-match completes successfully too.
    std::env::set_var(linkres_core::resolver::ENV_VERSION, "1.3");
    run_resolve(Some(f.path()), &cfg).unwrap();

    std::env::remove_var(linkres_core::resolver::ENV_NAME);
    std::env::remove_var(linkres_core::resolver::ENV_VERSION);
    std::env::remove_var(linkres_core::resolver::ENV_ARCH);
}

#[test]
fn run_resolve_missing_manifest_errs() {
    let cfg = LinkresConfig::default();
    let err = run_resolve(Some(Path::new("/nonexistent/links.json")), &cfg).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/links.json"));
}

#[test]
fn run_list_reads_manifest() {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(
        br#"{"files":[{"name":"libfoo","version":"1.2","arch":"x64","downloadLink":"http://x/a"}]}"#,
    )
    .unwrap();
    f.flush().unwrap();
    let cfg = LinkresConfig::default();
    run_list(Some(f.path()), &cfg).unwrap();
}
