use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::{anyhow, Result};
use filecache::{is_directory, is_file, CachedFile, FileReader, FileWriter, Json};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tempfile::TempDir;

#[tokio::test]
async fn write_plain_text() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("hello.txt");

    let actual = FileWriter::new().write(&path, "Hello World").await;

    assert!(actual.is_ok());
    assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), "Hello World");
}

#[tokio::test]
async fn write_object_as_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("object.json");
    let data = BTreeMap::from([("a".to_string(), 1)]);

    FileWriter::new()
        .write_with(&path, &data, &Json::default())
        .await
        .unwrap();

    let content = tokio::fs::read_to_string(&path).await.unwrap();
    let actual: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(actual, json!({"a": 1}));
}

#[tokio::test]
async fn read_nonexistent_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("file-does-not-exist");
    let file: CachedFile<Value> = CachedFile::json();

    let actual = file.read(&path).await;

    assert!(actual.is_err());
    assert!(!file.has(&path));
}

#[tokio::test]
async fn cached_entry_expires_in_real_time() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("expiring.json");
    let file: CachedFile<Value> = CachedFile::json().max_cache_age(1);
    let data = json!({"items": [1, 2, 3], "name": "test"});

    file.write(&path, data.clone()).await.unwrap();
    assert!(file.has(&path));

    // whole-second timestamps: 2.1s guarantees an age of at least 2
    tokio::time::sleep(Duration::from_millis(2100)).await;
    assert!(!file.has(&path));

    assert_eq!(file.read(&path).await.unwrap(), data);
    assert!(file.has(&path));
}

#[tokio::test]
async fn read_with_failing_parser() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.txt");
    tokio::fs::write(&path, "content").await.unwrap();

    let failing = |_: String| -> Result<String> { Err(anyhow!("bad content")) };
    let actual = FileReader::new().read_with(&path, &failing).await;

    let error = actual.unwrap_err();
    assert_eq!(error.root_cause().to_string(), "bad content");
}

#[tokio::test]
async fn text_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("a").join("b").join("round.txt");
    let content = "line one\nline two\n\u{1F980}";

    FileWriter::new().write(&path, content).await.unwrap();
    let actual = FileReader::new().read(&path).await.unwrap();

    assert_eq!(actual, content);
    assert!(is_file(&path).await);
    assert!(is_directory(temp_dir.path().join("a")).await);
    assert!(!is_file(temp_dir.path().join("a")).await);
}
