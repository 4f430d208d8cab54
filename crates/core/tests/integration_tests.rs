//! Integration tests for gssh-core
//!
//! These tests verify that the core functionality works together correctly
//! by running the listing → filter → persistence pipeline end-to-end with
//! the same JSON shapes gcloud produces.

use gssh_core::{
    filter::Filter,
    instance::{parse_instances, Instance},
    state::{read_previous, write_previous},
};
use std::ffi::OsStr;
use tempfile::TempDir;

/// A listing the way gcloud emits it: unsorted, zones as resource URLs,
/// plenty of fields we don't care about.
const LISTING: &str = r#"[
    {
        "id": "3404567890123456789",
        "name": "web-2",
        "zone": "https://www.googleapis.com/compute/v1/projects/acme/zones/us-east1-b",
        "machineType": "https://www.googleapis.com/compute/v1/projects/acme/zones/us-east1-b/machineTypes/e2-medium",
        "status": "RUNNING",
        "networkInterfaces": [{"networkIP": "10.0.0.3"}]
    },
    {
        "id": "3404567890123456788",
        "name": "db-1",
        "zone": "https://www.googleapis.com/compute/v1/projects/acme/zones/us-central1-a",
        "status": "RUNNING"
    },
    {
        "id": "3404567890123456787",
        "name": "web-1",
        "zone": "https://www.googleapis.com/compute/v1/projects/acme/zones/us-east1-b",
        "status": "TERMINATED"
    }
]"#;

fn names(instances: &[Instance]) -> Vec<&str> {
    instances.iter().map(|i| i.name.as_str()).collect()
}

/// Prefix-filtering a freshly parsed listing yields the ordered candidates.
#[test]
fn test_listing_to_candidates_workflow() {
    let instances = parse_instances(LISTING).unwrap();
    assert_eq!(names(&instances), vec!["db-1", "web-1", "web-2"]);

    let filter = Filter::new(None, Some("web"), false).unwrap();
    let candidates = filter.apply(instances).unwrap();

    assert_eq!(names(&candidates), vec!["web-1", "web-2"]);
    assert_eq!(candidates[0].short_zone(), "us-east1-b");
}

/// A filter equal to one instance's full name selects it alone and resolves
/// the short zone used for the handoff.
#[test]
fn test_exact_filter_resolves_single_candidate() {
    let instances = parse_instances(LISTING).unwrap();

    let filter = Filter::new(None, Some("web-1"), false).unwrap();
    let candidates = filter.apply(instances).unwrap();

    assert_eq!(names(&candidates), vec!["web-1"]);
    assert_eq!(candidates[0].short_zone(), "us-east1-b");
}

/// With no filter the whole sorted listing survives.
#[test]
fn test_unfiltered_listing_survives_sorted() {
    let instances = parse_instances(LISTING).unwrap();

    let filter = Filter::new(None, None, false).unwrap();
    let candidates = filter.apply(instances).unwrap();

    assert_eq!(names(&candidates), vec!["db-1", "web-1", "web-2"]);
}

/// The handoff command carries the zone flag, the target and the remote
/// command in the shape gcloud expects.
#[test]
fn test_selected_candidate_to_ssh_command() {
    let instances = parse_instances(LISTING).unwrap();

    let filter = Filter::new(None, Some("web-1"), false).unwrap();
    let candidates = filter.apply(instances).unwrap();
    let selected = &candidates[0];

    let target = format!("alice@{}", selected.name);
    let remote = vec!["uptime".to_string()];
    let command = gssh_core::gcloud::ssh_command(&target, selected.short_zone(), &remote);

    assert_eq!(command.get_program(), "gcloud");
    let args: Vec<&OsStr> = command.get_args().collect();
    assert_eq!(
        args,
        vec![
            "compute",
            "ssh",
            "alice@web-1",
            "--zone=us-east1-b",
            "--command=uptime"
        ]
    );
}

/// Writing a selection and reading it back in a fresh run yields the same
/// instance, including the full zone path.
#[test]
fn test_selection_memory_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".gssh").join("previous.json");
    let path = path.to_str().unwrap();

    let instances = parse_instances(LISTING).unwrap();
    let chosen = instances[1].clone();

    write_previous(path, &chosen).unwrap();
    let remembered = read_previous(path).unwrap();

    assert_eq!(remembered, Some(chosen));
}

/// A remembered instance is a complete candidate on its own: its name and
/// zone survive the trip through disk untouched.
#[test]
fn test_previous_only_candidate() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("previous.json");
    let path = path.to_str().unwrap();

    let chosen = Instance {
        name: "web-2".to_string(),
        zone: "https://www.googleapis.com/compute/v1/projects/acme/zones/us-east1-b".to_string(),
    };

    write_previous(path, &chosen).unwrap();

    let candidate = read_previous(path).unwrap().unwrap();
    assert_eq!(candidate.name, "web-2");
    assert_eq!(candidate.short_zone(), "us-east1-b");
}

/// Absence of the state file reads as "nothing recorded", not an error.
#[test]
fn test_missing_state_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("previous.json");

    let remembered = read_previous(path.to_str().unwrap()).unwrap();
    assert!(remembered.is_none());
}

/// The state file a run writes matches the documented on-disk layout.
#[test]
fn test_state_file_layout() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("previous.json");
    let path = path.to_str().unwrap();

    let chosen = Instance {
        name: "db-1".to_string(),
        zone: "zones/us-central1-a".to_string(),
    };
    write_previous(path, &chosen).unwrap();

    let raw = std::fs::read_to_string(path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["previous"]["Name"], "db-1");
    assert_eq!(value["previous"]["Zone"], "zones/us-central1-a");
}
