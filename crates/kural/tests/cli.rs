//! CLI integration tests for kural commands.
//!
//! These tests focus on exit codes and basic behavioral verification,
//! not specific output formatting which may change.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;

/// Fragment covering the first chapter of the book of Virtue.
const FRAGMENT_A: &str = r#"{
    "paals": [{
        "name": {"ta": "அறத்துப்பால்", "en": "Virtue", "hi": "धर्म"},
        "iyals": [{
            "name": {"ta": "பாயிரவியல்", "en": "Prologue", "hi": "प्रस्तावना"},
            "adhigarams": [{
                "name": {"ta": "கடவுள் வாழ்த்து", "en": "Praise of God", "hi": "ईश्वर स्तुति"},
                "kurals": [{
                    "number": 1,
                    "tamil": "அகர முதல எழுத்தெல்லாம் ஆதி\nபகவன் முதற்றே உலகு",
                    "translations": {
                        "ta": "எழுத்துக்கள் எல்லாம் அகரத்தில் தொடங்குகின்றன",
                        "en": "A, as its first of letters, every speech maintains",
                        "hi": "अक्षरों में प्रथम अकार है"
                    },
                    "commentaries": {
                        "ta": [],
                        "en": [{"author": "G.U. Pope", "text": "As all letters have the letter A for their first..."}]
                    }
                }]
            }]
        }]
    }]
}"#;

/// Fragment contributing a second chapter to the same book and section.
const FRAGMENT_B: &str = r#"{
    "paals": [{
        "name": {"ta": "அறத்துப்பால்", "en": "Virtue", "hi": "धर्म"},
        "iyals": [{
            "name": {"ta": "பாயிரவியல்", "en": "Prologue", "hi": "प्रस्तावना"},
            "adhigarams": [{
                "name": {"ta": "வான்சிறப்பு", "en": "The Blessing of Rain", "hi": "वर्षा की महिमा"},
                "kurals": [{
                    "number": 11,
                    "tamil": "வான்நின்று உலகம் வழங்கி வருதலால்\nதான்அமிழ்தம் என்றுணரற் பாற்று",
                    "translations": {
                        "ta": "மழை பெய்ய உலகம் வாழ்கிறது",
                        "en": "The world its course maintains through rain unfailing",
                        "hi": "वर्षा से ही संसार चलता है"
                    }
                }]
            }]
        }]
    }]
}"#;

/// Creates a temp data directory holding both corpus fragments.
fn data_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("aram.json"), FRAGMENT_A).unwrap();
    fs::write(dir.path().join("aram2.json"), FRAGMENT_B).unwrap();
    dir
}

/// Helper to get a kural command pointed at a data directory.
fn kural(data: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("kural").unwrap();
    cmd.args(["--data", data.to_str().unwrap()]);
    cmd
}

mod search {
    use super::*;

    #[test]
    fn finds_text_match() {
        let dir = data_dir();
        kural(dir.path())
            .args(["search", "rain", "unfailing"])
            .assert()
            .success()
            .stdout(predicate::str::contains("#11"));
    }

    #[test]
    fn tolerates_one_typo() {
        let dir = data_dir();
        kural(dir.path())
            .args(["search", "unfeiling"])
            .assert()
            .success()
            .stdout(predicate::str::contains("#11"));
    }

    #[test]
    fn numeric_query_is_exact_lookup() {
        let dir = data_dir();
        kural(dir.path())
            .args(["search", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("#1").and(predicate::str::contains("#11").not()));
    }

    #[test]
    fn numeric_miss_prints_no_results() {
        let dir = data_dir();
        kural(dir.path())
            .args(["search", "9999"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No results found."));
    }

    #[test]
    fn tamil_query_matches_couplet() {
        let dir = data_dir();
        kural(dir.path())
            .args(["search", "அமிழ்தம்"])
            .assert()
            .success()
            .stdout(predicate::str::contains("#11"));
    }

    #[test]
    fn json_output_parses() {
        let dir = data_dir();
        let output = kural(dir.path())
            .args(["search", "rain", "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed["query"], "rain");
        assert_eq!(parsed["results"][0]["number"], 11);
    }

    #[test]
    fn respects_limit() {
        let dir = data_dir();
        let output = kural(dir.path())
            .args(["search", "the", "-n", "1", "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert!(parsed["results"].as_array().unwrap().len() <= 1);
    }
}

mod show {
    use super::*;

    #[test]
    fn prints_record_with_commentary() {
        let dir = data_dir();
        kural(dir.path())
            .args(["show", "1"])
            .assert()
            .success()
            .stdout(
                predicate::str::contains("Kural 1")
                    .and(predicate::str::contains("அகர முதல"))
                    .and(predicate::str::contains("G.U. Pope")),
            );
    }

    #[test]
    fn unknown_number_fails() {
        let dir = data_dir();
        kural(dir.path())
            .args(["show", "1330"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no kural numbered 1330"));
    }

    #[test]
    fn json_output_parses() {
        let dir = data_dir();
        let output = kural(dir.path())
            .args(["show", "11", "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed["number"], 11);
        assert_eq!(parsed["adhigaramName"]["en"], "The Blessing of Rain");
    }
}

mod daily {
    use super::*;

    #[test]
    fn picks_a_record() {
        let dir = data_dir();
        kural(dir.path())
            .args(["daily"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Kural "));
    }

    #[test]
    fn empty_corpus_fails() {
        let dir = tempfile::tempdir().unwrap();
        kural(dir.path())
            .args(["daily"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("corpus is empty"));
    }
}

mod ls {
    use super::*;

    #[test]
    fn merged_chapters_appear_under_one_section() {
        let dir = data_dir();
        kural(dir.path())
            .args(["ls", "chapters"])
            .assert()
            .success()
            .stdout(
                predicate::str::contains("Praise of God")
                    .and(predicate::str::contains("The Blessing of Rain")),
            );
    }

    #[test]
    fn books_listing_counts_merged_tree() {
        let dir = data_dir();
        kural(dir.path())
            .args(["ls", "books"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Virtue"));
    }
}

mod stats {
    use super::*;

    #[test]
    fn counts_merged_corpus() {
        let dir = data_dir();
        kural(dir.path())
            .args(["stats"])
            .assert()
            .success()
            .stdout(
                predicate::str::contains("Fragments loaded: 2")
                    .and(predicate::str::contains("Books: 1"))
                    .and(predicate::str::contains("Chapters: 2"))
                    .and(predicate::str::contains("Kurals: 2")),
            );
    }

    #[test]
    fn broken_fragment_is_skipped_with_warning() {
        let dir = data_dir();
        fs::write(dir.path().join("broken.json"), "{ nope").unwrap();

        kural(dir.path())
            .args(["stats"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Fragments skipped: 1"))
            .stderr(predicate::str::contains("broken.json"));
    }
}

#[test]
fn missing_data_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    kural(&dir.path().join("absent"))
        .args(["stats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
