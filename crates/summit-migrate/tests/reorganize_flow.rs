//! End-to-end reorganize runs, including a flatten → reorganize round trip

use pretty_assertions::assert_eq;
use summit_content::Edition;
use summit_migrate::reorganize::ClassSource;
use summit_migrate::{flatten, reorganize, ArchiveOutcome, MigrateConfig, ReorganizeOptions};
use summit_test_utils::{person_record, ContentTree, LEGACY_POSTS, PEOPLE, POSTS};

fn config(tree: &ContentTree) -> MigrateConfig {
    MigrateConfig::rooted(tree.root())
}

#[test]
fn reorganize_full_run() {
    let tree = ContentTree::new();
    tree.flat_person(
        "shoichi-2025-lisbon",
        "name: Shoichi\nedition: \"2025 Lisbon\"\nentryId: abc123\nrole: Chair\n",
    );
    tree.flat_person("talk-2023-valencia", "name: Talk\n");
    tree.flat_person("mystery", "name: Mystery\nedition: someday\n");
    tree.post("hello.mdoc", "---\ntitle: Hello\n---\n");
    tree.post("2024/cover.png", "png");

    let report = reorganize::run(&config(&tree), ReorganizeOptions::new()).unwrap();

    assert_eq!(
        tree.read(format!("{PEOPLE}/2025-lisbon/shoichi.yaml")),
        "name: Shoichi\nedition: 2025-lisbon\nrole: Chair\n"
    );
    assert_eq!(
        tree.read(format!("{PEOPLE}/2023-valencia/talk.yaml")),
        "name: Talk\n"
    );
    assert!(!tree.exists(format!("{PEOPLE}/shoichi-2025-lisbon.yaml")));
    assert!(!tree.exists(format!("{PEOPLE}/talk-2023-valencia.yaml")));
    assert_eq!(
        tree.read(format!("{PEOPLE}/mystery.yaml")),
        "name: Mystery\nedition: someday\n"
    );

    assert!(!tree.exists(POSTS));
    assert_eq!(tree.list(LEGACY_POSTS), vec!["2024", "hello.mdoc"]);
    assert_eq!(tree.read(format!("{LEGACY_POSTS}/2024/cover.png")), "png");

    assert_eq!(report.records_scanned, 3);
    assert_eq!(report.records_moved.len(), 2);
    assert_eq!(report.records_skipped, vec![tree.path(format!("{PEOPLE}/mystery.yaml"))]);
    assert_eq!(
        report.posts,
        Some(ArchiveOutcome::Moved {
            archive: tree.path(LEGACY_POSTS),
            entries: 2,
        })
    );
}

#[test]
fn skip_posts_leaves_posts_in_place() {
    let tree = ContentTree::new();
    tree.post("hello.mdoc", "hi");

    let options = ReorganizeOptions::new().with_archive_posts(false);
    let report = reorganize::run(&config(&tree), options).unwrap();

    assert_eq!(tree.read(format!("{POSTS}/hello.mdoc")), "hi");
    assert!(!tree.exists(LEGACY_POSTS));
    assert_eq!(report.posts, None);
}

#[test]
fn missing_posts_directory_is_reported() {
    let tree = ContentTree::new();
    let report = reorganize::run(&config(&tree), ReorganizeOptions::new()).unwrap();
    assert_eq!(report.posts, Some(ArchiveOutcome::NothingToMove));
    assert_eq!(report.records_scanned, 0);
}

#[test]
fn edition_subdirectories_are_not_rescanned() {
    let tree = ContentTree::new();
    tree.edition_person("2025-lisbon", "ada", "name: Ada\nedition: 2025-lisbon\n");

    let report = reorganize::run(&config(&tree), ReorganizeOptions::new()).unwrap();

    assert_eq!(report.records_scanned, 0);
    assert!(tree.exists(format!("{PEOPLE}/2025-lisbon/ada.yaml")));
}

#[test]
fn flatten_then_reorganize_loses_edition_fields() {
    let tree = ContentTree::new();
    tree.edition_person("2025-lisbon", "ada", &person_record("Ada", "2025 Lisbon", "Chair", 10));
    let config = config(&tree);

    flatten::run(&config).unwrap();
    let flat = tree.read(format!("{PEOPLE}/ada.yaml"));
    assert!(!flat.contains("edition:"));
    assert!(!flat.contains("role:"));

    let options = ReorganizeOptions::new().with_archive_posts(false);
    let report = reorganize::run(&config, options).unwrap();

    // Nothing left to classify by: the record stays flat and nothing comes back.
    assert_eq!(report.records_moved.len(), 0);
    assert_eq!(report.records_skipped.len(), 1);
    assert!(!tree.exists(format!("{PEOPLE}/2025-lisbon")));
    let after = tree.read(format!("{PEOPLE}/ada.yaml"));
    assert_eq!(after, flat);
    for field in ["role:", "roleWeight:", "isFeatured:", "edition:", "githubId:"] {
        assert!(!after.contains(field), "{field} came back");
    }
}

#[test]
fn flatten_then_reorganize_relocates_without_edition_fields() {
    let tree = ContentTree::new();
    tree.edition_person(
        "2025-lisbon",
        "ada-2025-lisbon",
        &person_record("Ada", "2025 Lisbon", "Chair", 10),
    );
    let config = config(&tree);

    flatten::run(&config).unwrap();
    assert!(tree.exists(format!("{PEOPLE}/ada-2025-lisbon.yaml")));

    let options = ReorganizeOptions::new().with_archive_posts(false);
    let report = reorganize::run(&config, options).unwrap();

    assert_eq!(report.records_moved.len(), 1);
    assert_eq!(report.records_moved[0].edition, Edition::Lisbon2025);
    assert_eq!(report.records_moved[0].source, ClassSource::Filename);
    assert!(!tree.exists(format!("{PEOPLE}/ada-2025-lisbon.yaml")));

    let relocated = tree.read(format!("{PEOPLE}/2025-lisbon/ada.yaml"));
    assert_eq!(
        relocated,
        "name: Ada\naffiliation: Institute of Virology\nbio: Works on RNA polymerases.\n"
    );
    for field in ["role:", "roleWeight:", "isFeatured:", "githubId:"] {
        assert!(!relocated.contains(field), "{field} came back");
    }
}
