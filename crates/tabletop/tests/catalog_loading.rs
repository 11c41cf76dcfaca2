//! Integration tests for loading a catalog from its JSONL data files.

use serde_json::{Value, json};
use tabletop::catalog::CatalogStore;
use tabletop::catalog::in_memory::{load_catalog, DataFile, LoadWarning};
use tabletop::commands::init::DataPaths;
use tabletop::domain::{FamilyId, GameId};
use tabletop::error::Error;
use tempfile::TempDir;

mod common;
use common::write_jsonl;

struct Fixture {
    _dir: TempDir,
    paths: DataPaths,
}

fn catalog_files(families: &[Value], games: &[Value], relations: &[Value]) -> Fixture {
    let dir = TempDir::new().unwrap();
    let paths = DataPaths {
        games: dir.path().join("games.jsonl"),
        families: dir.path().join("families.jsonl"),
        relations: dir.path().join("relations.jsonl"),
    };
    write_jsonl(&paths.families, families);
    write_jsonl(&paths.games, games);
    write_jsonl(&paths.relations, relations);
    Fixture { _dir: dir, paths }
}

#[tokio::test]
async fn test_clean_catalog_has_no_warnings() {
    let fixture = catalog_files(
        &[json!({"id": "azul", "name": "Azul", "base_game_id": "azul-base"})],
        &[
            json!({"id": "azul-base", "name": "Azul", "year_published": 2017, "family_id": "azul"}),
            json!({"id": "sintra", "name": "Azul: Sintra", "year_published": 2018, "family_id": "azul"}),
        ],
        &[json!({"source_game_id": "sintra", "target_game_id": "azul-base", "relation_type": "standalone_expansion_of"})],
    );

    let (catalog, warnings) = load_catalog(&fixture.paths).await.unwrap();
    assert!(warnings.is_empty(), "unexpected warnings: {:?}", warnings);

    let counts = catalog.counts().await.unwrap();
    assert_eq!(counts.families, 1);
    assert_eq!(counts.games, 2);
    assert_eq!(counts.relations, 1);
    assert_eq!(counts.unassigned_games, 0);
}

#[tokio::test]
async fn test_malformed_lines_are_skipped_with_line_numbers() {
    let fixture = catalog_files(&[], &[], &[]);
    std::fs::write(
        &fixture.paths.games,
        "{\"id\": \"a\", \"name\": \"A\"}\n{broken\n\n{\"id\": \"b\", \"name\": \"B\"}\n",
    )
    .unwrap();

    let (catalog, warnings) = load_catalog(&fixture.paths).await.unwrap();

    assert_eq!(warnings.len(), 1);
    assert!(matches!(
        warnings[0],
        LoadWarning::MalformedJson {
            file: DataFile::Games,
            line_number: 2,
            ..
        }
    ));
    assert_eq!(catalog.counts().await.unwrap().games, 2);
}

#[tokio::test]
async fn test_invalid_records_are_skipped() {
    let fixture = catalog_files(
        &[json!({"id": "  ", "name": "Blank"})],
        &[
            json!({"id": "ok", "name": "Fine"}),
            json!({"id": "nameless", "name": ""}),
        ],
        &[json!({"source_game_id": "ok", "target_game_id": "", "relation_type": "sequel_to"})],
    );

    let (catalog, warnings) = load_catalog(&fixture.paths).await.unwrap();

    let invalid: Vec<(DataFile, usize)> = warnings
        .iter()
        .filter_map(|w| match w {
            LoadWarning::InvalidRecord {
                file,
                record_number,
                ..
            } => Some((*file, *record_number)),
            _ => None,
        })
        .collect();
    assert_eq!(
        invalid,
        vec![
            (DataFile::Families, 1),
            (DataFile::Games, 2),
            (DataFile::Relations, 1)
        ]
    );

    let counts = catalog.counts().await.unwrap();
    assert_eq!(counts.families, 0);
    assert_eq!(counts.games, 1);
    assert_eq!(counts.relations, 0);
}

#[tokio::test]
async fn test_duplicate_games_keep_all_records_and_last_wins() {
    let fixture = catalog_files(
        &[],
        &[
            json!({"id": "dup", "name": "First", "year_published": 2000}),
            json!({"id": "dup", "name": "Second", "year_published": 2001}),
        ],
        &[],
    );

    let (catalog, warnings) = load_catalog(&fixture.paths).await.unwrap();

    assert_eq!(
        warnings,
        vec![LoadWarning::DuplicateGame {
            game_id: GameId::new("dup")
        }]
    );
    assert_eq!(catalog.counts().await.unwrap().games, 2);
    let game = catalog.game(&GameId::new("dup")).await.unwrap().unwrap();
    assert_eq!(game.name, "Second");
}

#[tokio::test]
async fn test_duplicate_families_last_wins() {
    let fixture = catalog_files(
        &[
            json!({"id": "fam", "name": "Old Name"}),
            json!({"id": "other", "name": "Other"}),
            json!({"id": "fam", "name": "New Name"}),
        ],
        &[],
        &[],
    );

    let (catalog, warnings) = load_catalog(&fixture.paths).await.unwrap();

    assert_eq!(
        warnings,
        vec![LoadWarning::DuplicateFamily {
            family_id: FamilyId::new("fam")
        }]
    );
    let families = catalog.families().await.unwrap();
    let names: Vec<&str> = families.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["New Name", "Other"]);
}

#[tokio::test]
async fn test_unknown_family_leaves_game_unassigned() {
    let fixture = catalog_files(
        &[],
        &[json!({"id": "stray", "name": "Stray", "family_id": "ghost"})],
        &[],
    );

    let (catalog, warnings) = load_catalog(&fixture.paths).await.unwrap();

    assert_eq!(
        warnings,
        vec![LoadWarning::UnknownFamily {
            game_id: GameId::new("stray"),
            family_id: FamilyId::new("ghost"),
        }]
    );
    let unassigned = catalog.unassigned_games().await.unwrap();
    assert_eq!(unassigned.len(), 1);
    assert_eq!(unassigned[0].id.as_str(), "stray");
}

#[tokio::test]
async fn test_dangling_relations_are_dropped() {
    let fixture = catalog_files(
        &[],
        &[json!({"id": "a", "name": "A"})],
        &[
            json!({"source_game_id": "a", "target_game_id": "missing", "relation_type": "expansion_of"}),
            json!({"source_game_id": "a", "target_game_id": "a", "relation_type": "expansion_of"}),
        ],
    );

    let (catalog, warnings) = load_catalog(&fixture.paths).await.unwrap();

    assert_eq!(
        warnings,
        vec![LoadWarning::DanglingRelation {
            source: GameId::new("a"),
            target: GameId::new("missing"),
            missing: GameId::new("missing"),
        }]
    );
    assert_eq!(catalog.relations().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_base_game_outside_family_is_reported() {
    let fixture = catalog_files(
        &[
            json!({"id": "one", "name": "One", "base_game_id": "elsewhere"}),
            json!({"id": "two", "name": "Two"}),
        ],
        &[
            json!({"id": "first", "name": "First", "year_published": 1999, "family_id": "one"}),
            json!({"id": "elsewhere", "name": "Elsewhere", "family_id": "two"}),
        ],
        &[],
    );

    let (catalog, warnings) = load_catalog(&fixture.paths).await.unwrap();

    assert_eq!(
        warnings,
        vec![LoadWarning::UnknownBaseGame {
            family_id: FamilyId::new("one"),
            base_game_id: GameId::new("elsewhere"),
        }]
    );

    let snapshot = catalog.snapshot(&FamilyId::new("one")).await.unwrap();
    assert_eq!(snapshot.games.len(), 1);
}

#[tokio::test]
async fn test_unknown_family_lookup_fails() {
    let fixture = catalog_files(&[], &[], &[]);
    let (catalog, _) = load_catalog(&fixture.paths).await.unwrap();

    let err = catalog.snapshot(&FamilyId::new("nope")).await.unwrap_err();
    assert!(matches!(err, Error::FamilyNotFound(id) if id.as_str() == "nope"));
}

#[tokio::test]
async fn test_missing_data_file_is_an_error() {
    let fixture = catalog_files(&[], &[], &[]);
    std::fs::remove_file(&fixture.paths.relations).unwrap();

    assert!(load_catalog(&fixture.paths).await.is_err());
}

#[tokio::test]
async fn test_warnings_render_file_and_position() {
    let warning = LoadWarning::MalformedJson {
        file: DataFile::Relations,
        line_number: 7,
        error: "expected value".to_string(),
    };
    let text = warning.to_string();
    assert!(text.contains("relations"));
    assert!(text.contains("line 7"));
}
