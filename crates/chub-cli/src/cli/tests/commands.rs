//! Tests for search, tags, download and browse subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use chub_core::catalog::SortKey;
use clap::Parser;

#[test]
fn cli_parse_search_defaults() {
    match parse(&["chub", "search"]) {
        CliCommand::Search {
            term,
            tags,
            exclude_tags,
            sort,
            page,
            page_size,
            nsfw,
        } => {
            assert!(term.is_none());
            assert!(tags.is_none());
            assert!(exclude_tags.is_none());
            assert!(sort.is_none());
            assert_eq!(page, 1);
            assert!(page_size.is_none());
            assert!(nsfw.is_none());
        }
        _ => panic!("expected Search"),
    }
}

#[test]
fn cli_parse_search_all_flags() {
    match parse(&[
        "chub",
        "search",
        "elf",
        "--tags",
        "fantasy,female",
        "--exclude-tags",
        "nsfl",
        "--sort",
        "rating",
        "--page",
        "3",
        "--page-size",
        "20",
        "--nsfw",
        "false",
    ]) {
        CliCommand::Search {
            term,
            tags,
            exclude_tags,
            sort,
            page,
            page_size,
            nsfw,
        } => {
            assert_eq!(term.as_deref(), Some("elf"));
            assert_eq!(tags.as_deref(), Some("fantasy,female"));
            assert_eq!(exclude_tags.as_deref(), Some("nsfl"));
            assert_eq!(sort, Some(SortKey::Rating));
            assert_eq!(page, 3);
            assert_eq!(page_size, Some(20));
            assert_eq!(nsfw, Some(false));
        }
        _ => panic!("expected Search"),
    }
}

#[test]
fn cli_parse_search_rejects_unknown_sort() {
    assert!(Cli::try_parse_from(["chub", "search", "--sort", "hot"]).is_err());
}

#[test]
fn cli_parse_tags() {
    match parse(&["chub", "tags", "foo, ba"]) {
        CliCommand::Tags { prefix } => assert_eq!(prefix.as_deref(), Some("foo, ba")),
        _ => panic!("expected Tags"),
    }
}

#[test]
fn cli_parse_download() {
    match parse(&[
        "chub",
        "download",
        "acme/wizard",
        "https://cdn.example/wizard.png",
        "--dir",
        "/tmp/cards",
    ]) {
        CliCommand::Download {
            full_path,
            asset_url,
            dir,
        } => {
            assert_eq!(full_path, "acme/wizard");
            assert_eq!(asset_url, "https://cdn.example/wizard.png");
            assert_eq!(dir.as_deref(), Some(std::path::Path::new("/tmp/cards")));
        }
        _ => panic!("expected Download"),
    }
}

#[test]
fn cli_parse_download_requires_url() {
    assert!(Cli::try_parse_from(["chub", "download", "acme/wizard"]).is_err());
}

#[test]
fn cli_parse_browse() {
    match parse(&["chub", "browse"]) {
        CliCommand::Browse { dir } => assert!(dir.is_none()),
        _ => panic!("expected Browse"),
    }
}
