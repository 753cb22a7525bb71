//! Unit tests for mapping/args.rs

use cagecleaner::algorithm::mapping::MapArgs;
use clap::{Args, Command, FromArgMatches};
use std::path::PathBuf;

fn parse_args(args: &[&str]) -> MapArgs {
    let mut all_args = vec!["cagecleaner".to_string(), "map".to_string()];
    all_args.extend(args.iter().map(|s| s.to_string()));

    let cmd = Command::new("cagecleaner").subcommand(MapArgs::augment_args(Command::new("map")));
    let matches = cmd.get_matches_from(all_args);
    let sub_matches = matches.subcommand_matches("map").unwrap();
    MapArgs::from_arg_matches(sub_matches).unwrap()
}

#[test]
fn test_default_values() {
    let args = parse_args(&["-b", "binary.txt", "-g", "genomes", "-o", "map.tsv"]);
    assert_eq!(args.binary, PathBuf::from("binary.txt"));
    assert_eq!(args.genomes, PathBuf::from("genomes"));
    assert_eq!(args.out, PathBuf::from("map.tsv"));
    assert_eq!(args.num_threads, 0);
}

#[test]
fn test_custom_num_threads() {
    let args = parse_args(&["-b", "binary.txt", "-g", "genomes", "-o", "map.tsv", "-n", "8"]);
    assert_eq!(args.num_threads, 8);
}

#[test]
fn test_every_flag_has_help() {
    let cmd = MapArgs::augment_args(Command::new("map"));
    for arg in cmd.get_arguments() {
        assert!(arg.get_help().is_some(), "--{} has no help text", arg.get_id());
    }
}
