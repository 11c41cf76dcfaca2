//! End-to-end tests for the tabletop binary.

use rstest::{fixture, rstest};
use serde_json::{Value, json};
use tempfile::TempDir;

mod common;
use common::{run_tabletop_in_dir, run_tabletop_with_env, stderr, stdout, write_catalog};

// ============================================================================
// Fixtures
// ============================================================================

#[fixture]
fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

#[fixture]
fn initialized_dir(temp_dir: TempDir) -> TempDir {
    let output = run_tabletop_in_dir(temp_dir.path(), &["init", "--name", "test", "--quiet"]);
    assert!(output.status.success(), "init failed: {}", stderr(&output));
    temp_dir
}

/// Catan with one expansion hanging off an orphaned scenario pack, plus a
/// family with no orphans and an empty family.
#[fixture]
fn populated_dir(initialized_dir: TempDir) -> TempDir {
    write_catalog(
        initialized_dir.path(),
        &[
            json!({"id": "catan", "name": "Catan", "base_game_id": "catan-base"}),
            json!({"id": "azul", "name": "Azul"}),
            json!({"id": "empty", "name": "Nothing Yet"}),
        ],
        &[
            json!({"id": "catan-base", "name": "Catan", "year_published": 1995, "family_id": "catan"}),
            json!({"id": "seafarers", "name": "Catan: Seafarers", "year_published": 1997, "family_id": "catan"}),
            json!({"id": "cities", "name": "Catan: Cities & Knights", "year_published": 1998, "family_id": "catan"}),
            json!({"id": "explorers", "name": "Catan: Explorers & Pirates", "year_published": 2013, "family_id": "catan"}),
            json!({"id": "scenarios", "name": "Catan Scenarios: Oil Springs", "year_published": 2011, "family_id": "catan"}),
            json!({"id": "oil-2", "name": "Oil Springs Reprint", "year_published": null, "family_id": "catan"}),
            json!({"id": "azul-base", "name": "Azul", "year_published": 2017, "family_id": "azul"}),
            json!({"id": "azul-sintra", "name": "Azul: Stained Glass of Sintra", "year_published": 2018, "family_id": "azul"}),
            json!({"id": "loner", "name": "Loner", "year_published": 2001}),
        ],
        &[
            json!({"source_game_id": "seafarers", "target_game_id": "catan-base", "relation_type": "expansion_of"}),
            json!({"source_game_id": "cities", "target_game_id": "catan-base", "relation_type": "expansion_of"}),
            json!({"source_game_id": "explorers", "target_game_id": "seafarers", "relation_type": "expansion_of"}),
            json!({"source_game_id": "oil-2", "target_game_id": "scenarios", "relation_type": "reimplementation_of"}),
            json!({"source_game_id": "azul-sintra", "target_game_id": "azul-base", "relation_type": "standalone_expansion_of"}),
        ],
    );
    initialized_dir
}

fn json_stdout(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[rstest]
fn test_help(temp_dir: TempDir) {
    let output = run_tabletop_in_dir(temp_dir.path(), &["--help"]);
    assert!(output.status.success());

    let out = stdout(&output);
    for command in ["init", "info", "families", "orphans", "tree"] {
        assert!(out.contains(command), "help should list '{}'", command);
    }
}

#[rstest]
fn test_version(temp_dir: TempDir) {
    let output = run_tabletop_in_dir(temp_dir.path(), &["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("tabletop"));
}

#[rstest]
fn test_no_command_prints_hint(temp_dir: TempDir) {
    let output = run_tabletop_in_dir(temp_dir.path(), &[]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("--help"));
}

// ============================================================================
// Init Command Tests
// ============================================================================

#[rstest]
fn test_init_creates_catalog_files(temp_dir: TempDir) {
    let output = run_tabletop_in_dir(temp_dir.path(), &["init", "--name", "shelf", "--quiet"]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty(), "--quiet should print nothing");

    let dir = temp_dir.path().join(".tabletop");
    for file in [
        "config.yaml",
        "games.jsonl",
        "families.jsonl",
        "relations.jsonl",
        ".gitignore",
    ] {
        assert!(dir.join(file).is_file(), "{} should exist", file);
    }

    let config = std::fs::read_to_string(dir.join("config.yaml")).unwrap();
    assert!(config.contains("catalog-name: shelf"));
}

#[rstest]
fn test_init_reports_paths(temp_dir: TempDir) {
    let output = run_tabletop_in_dir(temp_dir.path(), &["init"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Initialized tabletop"));
    assert!(out.contains("games.jsonl"));
    assert!(out.contains("Catalog name: catalog"));
}

#[rstest]
fn test_init_twice_fails(initialized_dir: TempDir) {
    let output = run_tabletop_in_dir(initialized_dir.path(), &["init", "--quiet"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("already initialized"));
}

#[rstest]
#[case::too_short("x")]
#[case::bad_chars("my shelf")]
fn test_init_rejects_invalid_name(temp_dir: TempDir, #[case] name: &str) {
    let output = run_tabletop_in_dir(temp_dir.path(), &["init", "--name", name]);
    assert!(!output.status.success());
    assert!(!temp_dir.path().join(".tabletop").exists());
}

// ============================================================================
// Info Command Tests
// ============================================================================

#[rstest]
fn test_commands_require_catalog(temp_dir: TempDir) {
    let output = run_tabletop_in_dir(temp_dir.path(), &["families"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("tabletop init"));
}

#[rstest]
fn test_info_on_empty_catalog(initialized_dir: TempDir) {
    let output = run_tabletop_in_dir(initialized_dir.path(), &["info"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Catalog name: test"));
    assert!(out.contains("0 families, 0 games (0 unassigned), 0 relations"));
}

#[rstest]
fn test_info_json_counts(populated_dir: TempDir) {
    let output = run_tabletop_in_dir(populated_dir.path(), &["info", "--json"]);
    assert!(output.status.success());

    let info = json_stdout(&output);
    assert_eq!(info["catalog_name"], "test");
    assert_eq!(info["counts"]["families"], 3);
    assert_eq!(info["counts"]["games"], 9);
    assert_eq!(info["counts"]["unassigned_games"], 1);
    assert_eq!(info["counts"]["relations"], 5);
    assert_eq!(info["load_warnings"], 0);
}

#[rstest]
fn test_info_from_subdirectory(populated_dir: TempDir) {
    let nested = populated_dir.path().join("a/b");
    std::fs::create_dir_all(&nested).unwrap();

    let output = run_tabletop_in_dir(&nested, &["--json", "info"]);
    assert!(output.status.success());
    assert_eq!(json_stdout(&output)["counts"]["families"], 3);
}

#[rstest]
fn test_load_warnings_go_to_stderr(initialized_dir: TempDir) {
    let data_dir = initialized_dir.path().join(".tabletop");
    std::fs::write(
        data_dir.join("games.jsonl"),
        "{\"id\": \"a\", \"name\": \"A\"}\nnot json\n",
    )
    .unwrap();

    let output = run_tabletop_in_dir(initialized_dir.path(), &["--json", "info"]);
    assert!(output.status.success());

    let info = json_stdout(&output);
    assert_eq!(info["counts"]["games"], 1);
    assert_eq!(info["load_warnings"], 1);
    assert!(stderr(&output).contains("line 2"));
}

// ============================================================================
// Families Command Tests
// ============================================================================

#[rstest]
fn test_families_text(populated_dir: TempDir) {
    let output = run_tabletop_in_dir(populated_dir.path(), &["families"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Families (3)"));
    assert!(out.contains("catan Catan"));
    assert!(out.contains("root: catan-base (designated base game)"));
    assert!(out.contains("root: azul-base (oldest published)"));
    assert!(out.contains("root: none"));
}

#[rstest]
fn test_families_json(populated_dir: TempDir) {
    let output = run_tabletop_in_dir(populated_dir.path(), &["families", "--json"]);
    assert!(output.status.success());

    let families = json_stdout(&output);
    let families = families.as_array().unwrap();
    assert_eq!(families.len(), 3);

    assert_eq!(families[0]["id"], "catan");
    assert_eq!(families[0]["games"], 6);
    assert_eq!(families[0]["reachable"], 4);
    assert_eq!(families[0]["orphans"], 2);
    assert_eq!(families[0]["root_reason"], "explicit");

    assert_eq!(families[1]["id"], "azul");
    assert_eq!(families[1]["orphans"], 0);
    assert_eq!(families[1]["root_reason"], "oldest_published");

    assert_eq!(families[2]["id"], "empty");
    assert_eq!(families[2]["games"], 0);
    assert!(families[2]["root"].is_null());
}

#[rstest]
fn test_families_with_orphans_filter(populated_dir: TempDir) {
    let output = run_tabletop_in_dir(populated_dir.path(), &["--json", "families", "--with-orphans"]);
    assert!(output.status.success());

    let families = json_stdout(&output);
    let ids: Vec<&str> = families
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["catan"]);
}

#[rstest]
#[case::name("name", vec!["azul", "catan", "empty"])]
#[case::orphans("orphans", vec!["catan", "azul", "empty"])]
fn test_families_sort(populated_dir: TempDir, #[case] sort: &str, #[case] expected: Vec<&str>) {
    let output = run_tabletop_in_dir(populated_dir.path(), &["--json", "families", "--sort", sort]);
    assert!(output.status.success());

    let families = json_stdout(&output);
    let ids: Vec<&str> = families
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, expected);
}

#[rstest]
fn test_families_empty_catalog(initialized_dir: TempDir) {
    let output = run_tabletop_in_dir(initialized_dir.path(), &["families"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No families found."));
}

// ============================================================================
// Orphans Command Tests
// ============================================================================

#[rstest]
fn test_orphans_text(populated_dir: TempDir) {
    let output = run_tabletop_in_dir(populated_dir.path(), &["orphans", "catan"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Root:   catan-base Catan [1995] (designated base game)"));
    assert!(out.contains("Reachable: 4 of 6 games"));
    assert!(out.contains("Orphans (2):"));
    assert!(out.contains("scenarios Catan Scenarios: Oil Springs [2011]"));
    assert!(out.contains("oil-2 Oil Springs Reprint [????]"));

    let scenarios = out.find("scenarios Catan").unwrap();
    let reprint = out.find("oil-2").unwrap();
    assert!(scenarios < reprint, "orphans keep catalog order");
}

#[rstest]
fn test_orphans_json(populated_dir: TempDir) {
    let output = run_tabletop_in_dir(populated_dir.path(), &["orphans", "catan", "--json"]);
    assert!(output.status.success());

    let report = json_stdout(&output);
    assert_eq!(report["family"]["id"], "catan");
    assert_eq!(report["root"]["id"], "catan-base");
    assert_eq!(report["games"], 6);
    assert_eq!(report["reachable"], 4);

    let orphans: Vec<&str> = report["orphans"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["id"].as_str().unwrap())
        .collect();
    assert_eq!(orphans, vec!["scenarios", "oil-2"]);
}

#[rstest]
fn test_orphans_none(populated_dir: TempDir) {
    let output = run_tabletop_in_dir(populated_dir.path(), &["orphans", "azul"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No orphans found."));
}

#[rstest]
fn test_orphans_empty_family(populated_dir: TempDir) {
    let output = run_tabletop_in_dir(populated_dir.path(), &["orphans", "empty"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Family has no games."));
}

#[rstest]
#[case::orphans("orphans")]
#[case::tree("tree")]
fn test_unknown_family_fails(populated_dir: TempDir, #[case] command: &str) {
    let output = run_tabletop_in_dir(populated_dir.path(), &[command, "nope"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("nope"));
}

// ============================================================================
// Tree Command Tests
// ============================================================================

#[rstest]
fn test_tree_text(populated_dir: TempDir) {
    let output = run_tabletop_in_dir(populated_dir.path(), &["tree", "catan"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("◆ catan-base Catan [1995]"));
    assert!(out.contains("├── seafarers Catan: Seafarers [1997] (expansion_of)"));
    assert!(out.contains("│   └── explorers Catan: Explorers & Pirates [2013] (expansion_of)"));
    assert!(out.contains("└── cities Catan: Cities & Knights [1998] (expansion_of)"));
    assert!(out.contains("Not reachable from root (2):"));
}

#[rstest]
fn test_tree_ascii(populated_dir: TempDir) {
    let output = run_tabletop_with_env(
        populated_dir.path(),
        &["tree", "catan"],
        &[("TABLETOP_ASCII", "1")],
    );
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("* catan-base Catan [1995]"));
    assert!(out.contains("|-- seafarers"));
    assert!(out.contains("|   `-- explorers"));
    assert!(out.contains("`-- cities"));
    assert!(!out.contains('◆'));
}

#[rstest]
fn test_tree_depth_limit(populated_dir: TempDir) {
    let output = run_tabletop_in_dir(populated_dir.path(), &["tree", "catan", "--depth", "1"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("seafarers"));
    assert!(!out.contains("explorers"));
    assert!(out.contains("(1 more games below the depth limit)"));
}

#[rstest]
fn test_tree_json(populated_dir: TempDir) {
    let output = run_tabletop_in_dir(populated_dir.path(), &["--json", "tree", "catan"]);
    assert!(output.status.success());

    let view = json_stdout(&output);
    assert_eq!(view["family"], "catan");
    assert_eq!(view["root_reason"], "explicit");
    assert_eq!(view["tree"]["truncated"], 0);

    // Nodes are listed in visit order and linked by index.
    let nodes = view["tree"]["nodes"].as_array().unwrap();
    let ids: Vec<&str> = nodes.iter().map(|n| n["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["catan-base", "seafarers", "cities", "explorers"]);
    assert_eq!(nodes[0]["children"], json!([1, 2]));
    assert!(nodes[0].get("parent").is_none());
    assert_eq!(nodes[1]["relation"], "expansion_of");
    assert_eq!(nodes[1]["children"], json!([3]));
    assert_eq!(nodes[3]["parent"], 1);
    assert_eq!(nodes[3]["depth"], 2);
    assert_eq!(view["orphans"].as_array().unwrap().len(), 2);
}

#[rstest]
fn test_tree_json_long_chain(initialized_dir: TempDir) {
    let n = 10_000;
    let games: Vec<Value> = (0..n)
        .map(|i| json!({"id": format!("g{}", i), "name": format!("Part {}", i), "year_published": 2000, "family_id": "saga"}))
        .collect();
    let relations: Vec<Value> = (1..n)
        .map(|i| json!({"source_game_id": format!("g{}", i), "target_game_id": format!("g{}", i - 1), "relation_type": "sequel_to"}))
        .collect();
    write_catalog(
        initialized_dir.path(),
        &[json!({"id": "saga", "name": "Saga", "base_game_id": "g0"})],
        &games,
        &relations,
    );

    let output = run_tabletop_in_dir(initialized_dir.path(), &["--json", "tree", "saga"]);
    assert!(output.status.success(), "tree failed: {}", stderr(&output));

    let view = json_stdout(&output);
    let nodes = view["tree"]["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), n);
    assert_eq!(nodes[n - 1]["depth"], n - 1);
    assert!(view["orphans"].as_array().unwrap().is_empty());
}

#[rstest]
fn test_tree_empty_family(populated_dir: TempDir) {
    let output = run_tabletop_in_dir(populated_dir.path(), &["tree", "empty"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Family empty has no games."));
}
