//! Add/remove cycles: each mutation rewrites the whole file.

mod common;

use std::fs;

use hostfile::entry::Entry;
use hostfile::store::Hostfile;

#[test]
fn add_appends_exactly_one_entry() {
    let (_dir, path) = common::temp_hosts("127.0.0.1 localhost\n127.0.0.2 localhost2\n");
    let hostfile = Hostfile::open(path).unwrap();

    hostfile.add(Entry::new("5.5.5.5", "x")).unwrap();

    let entries = hostfile.list().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries.last(), Some(&Entry::new("5.5.5.5", "x")));
}

#[test]
fn add_permits_duplicate_pairs() {
    let (_dir, path) = common::temp_hosts("5.5.5.5 x\n");
    let hostfile = Hostfile::open(path).unwrap();

    hostfile.add(Entry::new("5.5.5.5", "x")).unwrap();

    let entries = hostfile.list().unwrap();
    assert_eq!(entries, vec![Entry::new("5.5.5.5", "x"), Entry::new("5.5.5.5", "x")]);
}

#[test]
fn remove_matches_both_fields() {
    let (_dir, path) = common::temp_hosts("127.0.0.1 localhost\n127.0.0.2 localhost2\n");
    let hostfile = Hostfile::open(path).unwrap();

    let removed = hostfile.remove("127.0.0.1", "localhost").unwrap();

    assert_eq!(removed, 1);
    assert_eq!(
        hostfile.list().unwrap(),
        vec![Entry::new("127.0.0.2", "localhost2")]
    );
}

#[test]
fn remove_leaves_entries_sharing_one_field() {
    // Same hostname, different address: only the full match goes.
    let (_dir, path) = common::temp_hosts("1.1.1.1 web\n2.2.2.2 web\n");
    let hostfile = Hostfile::open(path).unwrap();

    let removed = hostfile.remove("1.1.1.1", "web").unwrap();

    assert_eq!(removed, 1);
    assert_eq!(hostfile.list().unwrap(), vec![Entry::new("2.2.2.2", "web")]);
}

#[test]
fn remove_by_absent_address_is_a_noop_returning_zero() {
    let (_dir, path) = common::temp_hosts("127.0.0.1 localhost\n");
    let hostfile = Hostfile::open(path).unwrap();
    let before = hostfile.list().unwrap();

    let removed = hostfile.remove_by_address("203.0.113.9").unwrap();

    assert_eq!(removed, 0);
    assert_eq!(hostfile.list().unwrap(), before);
}

#[test]
fn remove_by_hostname_removes_all_matches_case_insensitively() {
    let (_dir, path) = common::temp_hosts("1.1.1.1 Dev\n2.2.2.2 dev\n3.3.3.3 prod\n");
    let hostfile = Hostfile::open(path).unwrap();

    let removed = hostfile.remove_by_hostname("DEV").unwrap();

    assert_eq!(removed, 2);
    assert_eq!(hostfile.list().unwrap(), vec![Entry::new("3.3.3.3", "prod")]);
}

#[test]
fn mutation_rewrites_file_and_discards_original_comments() {
    let (_dir, path) = common::temp_hosts("# hand-written note\n1.1.1.1 a # inline note\n");
    let hostfile = Hostfile::open(&path).unwrap();

    hostfile.add(Entry::new("2.2.2.2", "b")).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(!raw.contains("hand-written note"));
    assert!(raw.starts_with('#'), "rewritten file keeps a header comment");
    assert_eq!(
        hostfile.list().unwrap(),
        vec![Entry::new("1.1.1.1", "a"), Entry::new("2.2.2.2", "b")]
    );
}
