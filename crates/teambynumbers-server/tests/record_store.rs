//! Record store and team directory against real files.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::BTreeSet;
use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use teambynumbers_core::{PersonRecord, StatRecord, TbnError, ValidationError};
use teambynumbers_server::store::{RecordStore, TeamDirectory};

fn ops_entry(date: &str) -> StatRecord {
    StatRecord {
        version: 0,
        date: date.into(),
        team: "ops".into(),
        member_count: 5,
        cycle_time: 3,
        lead_time: 7,
        bugs_reported: 2,
        bugs_squashed: 4,
        deploy_count: 1,
        value_score: 8.5,
        report_url: "http://x".into(),
    }
}

#[test]
fn append_scenario_writes_fixed_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reports.csv");
    let store = RecordStore::open(&path, true).unwrap();

    let stored = store.append(ops_entry("2024/03/11")).unwrap();
    assert_eq!(stored.quality_score(), 0.5);
    assert_eq!(store.len(), 1);

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.trim_end().ends_with(",ops,5,3,7,2,4,1,8.50,http://x"));
    assert_eq!(content, "0,2024/03/11,ops,5,3,7,2,4,1,8.50,http://x\n");
}

#[test]
fn reopen_returns_equal_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reports.csv");
    let entry = StatRecord {
        version: 3,
        value_score: -1.25,
        bugs_squashed: 0,
        ..ops_entry("2024/03/11")
    };

    RecordStore::open(&path, true).unwrap().append(entry.clone()).unwrap();

    let reopened = RecordStore::open(&path, false).unwrap();
    assert_eq!(reopened.all().as_slice(), &[entry.clone()]);
    assert_eq!(reopened.all()[0].quality_score(), -2.0);
}

#[test]
fn huge_value_score_is_stored_finite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reports.csv");
    let store = RecordStore::open(&path, true).unwrap();

    let stored = store
        .append(StatRecord {
            value_score: 1e307,
            ..ops_entry("2024/03/11")
        })
        .unwrap();
    assert_eq!(stored.value_score, 1e307);
    assert!(stored.validate().is_ok());

    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("inf"));

    let reopened = RecordStore::open(&path, false).unwrap();
    assert_eq!(reopened.all().as_slice(), &[stored]);
}

#[test]
fn invalid_append_leaves_file_alone() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reports.csv");
    let store = RecordStore::open(&path, true).unwrap();

    let err = store
        .append(StatRecord {
            team: String::new(),
            member_count: 0,
            ..ops_entry("2024/03/11")
        })
        .unwrap_err();
    assert!(matches!(err, TbnError::Validation(ValidationError::TeamEmpty)));

    let err = store
        .append(StatRecord {
            team: "abcdefghijk".into(),
            ..ops_entry("2024/03/11")
        })
        .unwrap_err();
    assert!(matches!(err, TbnError::Validation(ValidationError::TeamTooLong)));

    assert!(store.is_empty());
    assert!(!path.exists());
}

#[test]
fn failed_write_keeps_memory_unchanged() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    let store = RecordStore::open(blocker.join("reports.csv"), true).unwrap();
    // A regular file where the parent directory should be.
    fs::write(&blocker, b"").unwrap();

    let err = store.append(ops_entry("2024/03/11")).unwrap_err();
    assert!(matches!(err, TbnError::Io(_)));
    assert_eq!(err.client_code().as_str(), "STORAGE");
    assert!(store.is_empty());
}

#[test]
fn load_skips_wrong_field_count() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reports.csv");
    fs::write(
        &path,
        "a,b,c,d,e\n0,2024/03/11,ops,5,3,7,2,4,1,8.50,http://x\n",
    )
    .unwrap();

    let store = RecordStore::open(&path, false).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.all()[0].team, "ops");
}

#[test]
fn load_orders_newest_first_and_append_keeps_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reports.csv");
    fs::write(
        &path,
        "0,2024/01/08,old,1,1,1,0,0,0,0.00,\n\
         0,2024/03/04,new,1,1,1,0,0,0,0.00,\n\
         0,2024/02/05,mid,1,1,1,0,0,0,0.00,\n",
    )
    .unwrap();

    let store = RecordStore::open(&path, false).unwrap();
    let teams: Vec<_> = store.all().iter().map(|r| r.team.clone()).collect();
    assert_eq!(teams, ["new", "mid", "old"]);

    store
        .append(StatRecord {
            team: "feb".into(),
            ..ops_entry("2024/02/05")
        })
        .unwrap();
    let teams: Vec<_> = store.all().iter().map(|r| r.team.clone()).collect();
    assert_eq!(teams, ["new", "feb", "mid", "old"]);

    // The file follows the in-memory order.
    let on_disk: Vec<_> = fs::read_to_string(&path)
        .unwrap()
        .lines()
        .map(|l| l.split(',').nth(2).unwrap().to_string())
        .collect();
    assert_eq!(on_disk, ["new", "feb", "mid", "old"]);
}

#[test]
fn missing_file_without_create_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = RecordStore::open(dir.path().join("none.csv"), false).err().unwrap();
    assert!(matches!(err, TbnError::Io(_)));
}

#[test]
fn concurrent_appends_all_land() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reports.csv");
    let store = Arc::new(RecordStore::open(&path, true).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                store
                    .append(StatRecord {
                        team: format!("t{i}"),
                        ..ops_entry("2024/03/11")
                    })
                    .unwrap();
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(store.len(), 8);
    assert_eq!(RecordStore::open(&path, false).unwrap().len(), 8);
}

#[test]
fn directory_teams_are_distinct() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("teams.csv");
    let directory = TeamDirectory::open(&path, true).unwrap();
    for (name, team) in [("alice", "A"), ("bob", "B"), ("carol", "A")] {
        directory
            .add(PersonRecord {
                version: 0,
                name: name.into(),
                team: team.into(),
            })
            .unwrap();
    }

    let teams = directory.teams();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams, BTreeSet::from(["A".to_string(), "B".to_string()]));
    assert!(directory.has_team("A"));
    assert!(!directory.has_team("C"));

    let reopened = TeamDirectory::open(&path, false).unwrap();
    assert_eq!(reopened.people().len(), 3);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "0,alice,A\n0,bob,B\n0,carol,A\n"
    );
}

#[test]
fn ensure_team_writes_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("teams.csv");
    let directory = TeamDirectory::open(&path, true).unwrap();

    assert!(directory.ensure_team("ops").unwrap());
    assert!(!directory.ensure_team("ops").unwrap());
    assert_eq!(directory.people().as_slice(), &[PersonRecord::team_only("ops")]);
    assert_eq!(fs::read_to_string(&path).unwrap(), "0,,ops\n");
}

#[test]
fn directory_rejects_separator_in_name() {
    let dir = TempDir::new().unwrap();
    let directory = TeamDirectory::open(dir.path().join("teams.csv"), true).unwrap();
    let err = directory
        .add(PersonRecord {
            version: 0,
            name: "doe, jane".into(),
            team: "ops".into(),
        })
        .unwrap_err();
    assert!(matches!(err, TbnError::Validation(ValidationError::FieldSeparator)));
    assert!(directory.teams().is_empty());
}

#[test]
fn stores_report_their_backing_paths() {
    let dir = TempDir::new().unwrap();
    let reports = dir.path().join("reports.csv");
    let teams = dir.path().join("teams.csv");
    assert_eq!(RecordStore::open(&reports, true).unwrap().path(), reports);
    assert_eq!(TeamDirectory::open(&teams, true).unwrap().path(), teams);
}
