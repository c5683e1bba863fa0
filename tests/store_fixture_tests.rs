use std::io::Write;
use std::sync::Arc;
use std::thread;

use mockbase_core::config::StoreConfig;
use mockbase_core::error::ErrorKind;
use mockbase_core::record::Record;
use mockbase_core::value::Value;
use mockbase_query::Client;
use mockbase_store::{FixtureSet, ManualClock, TableStore};

const FIXTURES: &str = r#"
campaign_templates:
  - id: tpl_1
    name: Boas-vindas
    message_template: "Olá {{name}}, bem-vindo!"
    is_default: true
    usage_count: 12
  - id: tpl_2
    name: Promoção de Fim de Semana
    is_default: false
    usage_count: 3
events:
  - { id: ev_1, name: Concerto, start_date: "2025-12-10" }
profiles:
  - { id: user_1, hotel_id: hotel_1, role: admin }
data_imports: []
"#;

fn fixture_file(contents: &str, suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write fixtures");
    file
}

#[test]
fn client_from_config_loads_yaml_fixtures() {
    let file = fixture_file(FIXTURES, ".yaml");
    let cfg = StoreConfig {
        fixtures: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let client = Client::from_config(&cfg).expect("client");

    assert_eq!(
        client.store().table_names(),
        vec!["campaign_templates", "data_imports", "events", "profiles"]
    );
    assert!(client.store().contains_table("data_imports"));
    assert_eq!(client.store().len("data_imports"), 0);

    let env = client
        .from("campaign_templates")
        .unwrap()
        .eq("is_default", true)
        .single()
        .resolve();
    assert_eq!(
        env.as_one().and_then(|r| r.get("usage_count")),
        Some(&Value::I64(12))
    );

    let user = client.auth().get_user();
    assert_eq!(user.user().and_then(Record::id), Some(&Value::from("user_1")));
}

#[test]
fn client_from_config_reports_bad_fixtures() {
    let file = fixture_file(r#"{"events":[{"name":"no id"}]}"#, ".json");
    let cfg = StoreConfig {
        fixtures: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let err = Client::from_config(&cfg).err().expect("should fail");
    assert_eq!(err.kind(), ErrorKind::Fixture);
}

#[test]
fn client_from_config_uses_auth_table() {
    let file = fixture_file(FIXTURES, ".yml");
    let cfg = StoreConfig {
        fixtures: Some(file.path().to_path_buf()),
        auth_table: "events".into(),
        ..Default::default()
    };
    let client = Client::from_config(&cfg).expect("client");
    let user = client.auth().get_user();
    assert_eq!(user.user().and_then(Record::id), Some(&Value::from("ev_1")));
}

#[test]
fn fixture_set_round_trips_through_json() {
    let set = FixtureSet::parse_yaml(FIXTURES).expect("yaml");
    let json = serde_json::to_string(&set).expect("serialize");
    assert_eq!(FixtureSet::parse_json(&json).expect("json"), set);
}

#[test]
fn concurrent_inserts_are_all_kept() {
    let store = TableStore::new();
    let client = Client::new(store.clone()).with_clock(Arc::new(ManualClock::new(0)));

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let client = client.clone();
            thread::spawn(move || {
                for n in 0..50 {
                    let id = format!("w{worker}_{n}");
                    client
                        .from("data_imports")
                        .unwrap()
                        .insert(Record::new().with("id", id).with("worker", worker as i64));
                }
            })
        })
        .collect();
    for h in handles {
        h.join().expect("worker panicked");
    }

    assert_eq!(store.len("data_imports"), 400);
    let per_worker = client
        .from("data_imports")
        .unwrap()
        .eq("worker", 3)
        .resolve();
    assert_eq!(per_worker.records().len(), 50);

    // each worker's own inserts keep their relative order
    let ids: Vec<String> = per_worker
        .records()
        .iter()
        .filter_map(|r| r.id().map(ToString::to_string))
        .collect();
    let expected: Vec<String> = (0..50).map(|n| format!("w3_{n}")).collect();
    assert_eq!(ids, expected);
}
