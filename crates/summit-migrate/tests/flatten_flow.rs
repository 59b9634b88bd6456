//! End-to-end flatten runs over temporary site trees

use pretty_assertions::assert_eq;
use summit_content::Edition;
use summit_migrate::{flatten, MigrateConfig, SummitUpdate};
use summit_test_utils::{person_record, summit_document, ContentTree, PEOPLE, SUMMITS};

fn config(tree: &ContentTree) -> MigrateConfig {
    MigrateConfig::rooted(tree.root())
}

#[test]
fn flatten_full_run() {
    let tree = ContentTree::new();
    let valencia = person_record("Ada V", "2023 Valencia", "Host", 20);
    let lisbon = person_record("Ada L", "2025 Lisbon", "Chair", 10);
    tree.edition_person("2023-valencia", "ada", &valencia);
    tree.edition_person("2025-lisbon", "ada", &lisbon);
    tree.edition_person("2025-lisbon", "shoichi", "name: Shoichi\nedition: 2025 Lisbon\n");
    tree.edition_person("drafts", "zed", "name: Zed\nrole: Someone\n");
    tree.summit(Edition::Lisbon2025, &summit_document(Edition::Lisbon2025, &["ada", "shoichi"]));
    let untouched = summit_document(Edition::Germany2027, &["bo"]);
    tree.summit(Edition::Germany2027, &untouched);

    let report = flatten::run(&config(&tree)).unwrap();

    // Lisbon wins even though Valencia is scanned first.
    assert_eq!(
        tree.read(format!("{PEOPLE}/ada.yaml")),
        "name: Ada L\naffiliation: Institute of Virology\nbio: Works on RNA polymerases.\n"
    );
    assert_eq!(tree.read(format!("{PEOPLE}/shoichi.yaml")), "name: Shoichi\n");
    assert_eq!(tree.read(format!("{PEOPLE}/zed.yaml")), "name: Zed\n");

    assert_eq!(
        tree.read(format!("{SUMMITS}/rdrp-summit-2025.mdoc")),
        "\
---
title: RdRP Summit 2025
organizers:
  - person: ada
  role: Chair
  weight: 10
  - person: shoichi
  role: Organizer
  weight: 50
---
Welcome.
"
    );
    assert_eq!(tree.read(format!("{SUMMITS}/rdrp-summit-2027.mdoc")), untouched);

    assert!(!tree.exists(format!("{PEOPLE}/2023-valencia")));
    assert!(!tree.exists(format!("{PEOPLE}/2025-lisbon")));
    assert!(tree.exists(format!("{PEOPLE}/drafts/zed.yaml")));

    assert_eq!(report.records_scanned, 4);
    assert_eq!(report.unrecognized_editions, 1);
    assert_eq!(report.records_written.len(), 3);
    assert_eq!(report.directories_removed.len(), 2);
    assert_eq!(
        report.summits_updated,
        vec![SummitUpdate {
            summit_id: "rdrp-summit-2025".into(),
            references_rewritten: 2,
            organizers_injected: 2,
            fields_dropped: 0,
        }]
    );
    assert_eq!(report.summits_missing, vec!["rdrp-summit-2023".to_string()]);
    assert!(report.summits_unchanged.is_empty());
}

#[test]
fn summit_without_qualified_references_is_left_alone() {
    let tree = ContentTree::new();
    tree.edition_person("2023-valencia", "ada", &person_record("Ada", "2023", "Host", 1));
    let flat = "---\norganizers:\n  - person: ada\n    role: Host\n---\n";
    tree.summit(Edition::Valencia2023, flat);

    let report = flatten::run(&config(&tree)).unwrap();

    assert_eq!(tree.read(format!("{SUMMITS}/rdrp-summit-2023.mdoc")), flat);
    assert_eq!(report.summits_unchanged, vec!["rdrp-summit-2023".to_string()]);
    assert!(report.summits_updated.is_empty());
}

#[test]
fn existing_entry_fields_are_replaced() {
    let tree = ContentTree::new();
    tree.edition_person("2025-lisbon", "ada", "name: Ada\nrole: Chair\nroleWeight: 5\n");
    tree.summit(
        Edition::Lisbon2025,
        "organizers:\n  - person: 2025-lisbon/ada\n    role: Speaker\n    weight: 99\n    section: Core\n",
    );

    let report = flatten::run(&config(&tree)).unwrap();

    assert_eq!(
        tree.read(format!("{SUMMITS}/rdrp-summit-2025.mdoc")),
        "organizers:\n  - person: ada\n  role: Chair\n  weight: 5\n    section: Core\n"
    );
    assert_eq!(report.summits_updated[0].fields_dropped, 2);
}

#[test]
fn custom_layout_from_config() {
    let tree = ContentTree::new();
    tree.write("content/people/2025-lisbon/ada.yaml", "name: Ada\nisFeatured: true\n");
    let config = config(&tree)
        .with_people_dir("content/people")
        .with_summits_dir("content/summits");

    let report = flatten::run(&config).unwrap();

    assert_eq!(tree.read("content/people/ada.yaml"), "name: Ada\n");
    assert_eq!(report.summits_missing, vec!["rdrp-summit-2025".to_string()]);
}

#[test]
fn empty_tree_is_a_noop() {
    let tree = ContentTree::new();
    let report = flatten::run(&config(&tree)).unwrap();
    assert_eq!(report.records_scanned, 0);
    assert!(report.records_written.is_empty());
    assert!(report.summits_updated.is_empty());
}
