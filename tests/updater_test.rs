use std::time::Duration;

use httpmock::prelude::*;
use jlg_code::{
    AddressResolver, HttpDataSource, InMemoryStore, MunicipalityImporter, MunicipalityUpdater,
};
use tempfile::TempDir;

const INDEX_JSON: &str = r#"[
    {"type": "prefecture", "code": "130001", "pref_code": "13", "pref_name": "東京都"},
    {"type": "ward", "code": "131041", "pref_code": "13",
     "ward_name": "新宿区", "ward_kana": "しんじゅくく"},
    {"type": "city", "code": "242012", "pref_code": "24",
     "city_name": "四日市市", "city_kana": "よっかいちし"},
    {"type": "ward", "code": "011029", "pref_code": "01",
     "ward_name": "東区", "ward_kana": "ひがしく"}
]"#;

#[tokio::test]
async fn test_update_writes_sorted_katakana_csv() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/index.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(INDEX_JSON);
    });

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("data").join("municipalities.csv");

    let source = HttpDataSource::new(&server.url("/index.json"), Duration::from_secs(5)).unwrap();
    let count = MunicipalityUpdater::update(&source, &output).await.unwrap();

    mock.assert();
    assert_eq!(count, 3);

    let content = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "code,prefecture_code,name,name_kana");
    // Sorted by code, kana already converted to katakana.
    assert_eq!(lines[1], "011029,01,東区,ヒガシク");
    assert_eq!(lines[2], "131041,13,新宿区,シンジュクク");
    assert_eq!(lines[3], "242012,24,四日市市,ヨッカイチシ");
}

#[tokio::test]
async fn test_updated_csv_feeds_the_resolver() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/index.json");
        then.status(200).body(INDEX_JSON);
    });

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("municipalities.csv");

    let source = HttpDataSource::new(&server.url("/index.json"), Duration::from_secs(5)).unwrap();
    MunicipalityUpdater::update(&source, &output).await.unwrap();

    let mut store = InMemoryStore::new();
    let summary = MunicipalityImporter::import(&mut store, &output, true).unwrap();
    assert_eq!(summary.imported, 3);
    assert_eq!(summary.skipped, 0);

    let resolver = AddressResolver::new(store);
    assert_eq!(
        resolver
            .resolve_code("東京都新宿区西新宿2-8-1")
            .unwrap()
            .map(|c| c.to_string()),
        Some("131041".to_string())
    );
    assert_eq!(
        resolver
            .resolve_code("北海道札幌市東区北8条東")
            .unwrap()
            .map(|c| c.to_string()),
        Some("011029".to_string())
    );
}

#[tokio::test]
async fn test_update_fails_on_http_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/index.json");
        then.status(500);
    });

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("municipalities.csv");

    let source = HttpDataSource::new(&server.url("/index.json"), Duration::from_secs(5)).unwrap();
    let result = MunicipalityUpdater::update(&source, &output).await;

    assert!(result.is_err());
    assert!(!output.exists());
}

#[tokio::test]
async fn test_update_fails_on_malformed_json() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/index.json");
        then.status(200).body("not json at all");
    });

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("municipalities.csv");

    let source = HttpDataSource::new(&server.url("/index.json"), Duration::from_secs(5)).unwrap();
    assert!(MunicipalityUpdater::update(&source, &output).await.is_err());
}
