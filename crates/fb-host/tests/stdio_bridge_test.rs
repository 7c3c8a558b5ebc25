//! # Stdio Bridge Integration Tests / Stdio 桥接集成测试
//!
//! Drive a fully wired bridge through the JSON-lines adapters:
//! 通过 JSON-lines 适配器驱动完整装配的 bridge：
//!
//! 1. Config file on disk feeds `wire` / 磁盘上的配置文件驱动 `wire`
//! 2. Seeded records reach stdout in key order / 种子记录按键顺序输出
//! 3. Start requests on stdin come back as new items / stdin 的请求以新条目返回

use std::fs;
use std::time::Duration;

use fb_core::{AppConfig, ItemKey, RawItem};
use fb_host::adapters::{pump_inbound_lines, pump_outbound_lines};
use fb_host::bootstrap::{load_config, wire, Wired};
use fb_host::PortMessage;
use serde_json::json;
use tempfile::TempDir;
use tokio::io::{AsyncBufReadExt, BufReader, DuplexStream, Lines};

fn record(value: serde_json::Value) -> RawItem {
    value.as_object().cloned().unwrap()
}

async fn next_message(lines: &mut Lines<BufReader<DuplexStream>>) -> PortMessage {
    let line = tokio::time::timeout(Duration::from_secs(1), lines.next_line())
        .await
        .expect("timed out waiting for ui output")
        .unwrap()
        .expect("ui output closed");
    serde_json::from_str(&line).unwrap()
}

#[tokio::test]
async fn test_seeded_items_then_created_item_reach_stdout() {
    let seed = vec![
        (ItemKey::parse("A").unwrap(), record(json!({"name": "x"}))),
        (ItemKey::parse("B").unwrap(), record(json!({"name": "w", "id": "stale"}))),
    ];
    let Wired {
        bridge,
        ports,
        start_requests,
        ui_messages,
        ..
    } = wire(&AppConfig::with_defaults(), seed).unwrap();
    let _running = bridge.start().await.unwrap();

    let (stdout_write, stdout_read) = tokio::io::duplex(4096);
    tokio::spawn(pump_outbound_lines(stdout_write, ports.clone(), ui_messages));
    let mut lines = BufReader::new(stdout_read).lines();

    let first = next_message(&mut lines).await;
    assert_eq!(first.port, "itemStarted");
    assert_eq!(first.payload, json!({"name": "x", "id": "A"}));
    let second = next_message(&mut lines).await;
    assert_eq!(second.payload, json!({"name": "w", "id": "B"}));

    let input = concat!(r#"{"port":"startItem","payload":{"name":"y"}}"#, "\n");
    let inbound_port = ports.inbound.clone();
    tokio::task::spawn_blocking(move || {
        pump_inbound_lines(input.as_bytes(), &inbound_port, start_requests)
    })
    .await
    .unwrap()
    .unwrap();

    let created = next_message(&mut lines).await;
    assert_eq!(created.port, "itemStarted");
    assert_eq!(created.payload["name"], "y");
    assert_eq!(created.payload["id"].as_str().unwrap().len(), 20);
}

#[tokio::test]
async fn test_config_file_drives_port_names_and_changes() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("feedbridge.toml");
    fs::write(
        &config_path,
        r#"
        [bridge]
        forward_changes = true

        [ports]
        outbound = "rowAdded"
        updated = "rowChanged"
        "#,
    )
    .unwrap();
    let config = load_config(config_path).unwrap();

    let Wired {
        bridge,
        feed,
        ports,
        ui_messages,
        ..
    } = wire(&config, Vec::new()).unwrap();
    assert_eq!(ports.inbound, "startItem");
    let _running = bridge.start().await.unwrap();

    let (stdout_write, stdout_read) = tokio::io::duplex(4096);
    tokio::spawn(pump_outbound_lines(stdout_write, ports, ui_messages));
    let mut lines = BufReader::new(stdout_read).lines();

    let key = ItemKey::parse("A").unwrap();
    feed.set(key.clone(), record(json!({"status": "waiting"})))
        .unwrap();
    feed.set(key, record(json!({"status": "running"}))).unwrap();

    let added = next_message(&mut lines).await;
    assert_eq!(added.port, "rowAdded");
    assert_eq!(added.payload, json!({"status": "waiting", "id": "A"}));
    let changed = next_message(&mut lines).await;
    assert_eq!(changed.port, "rowChanged");
    assert_eq!(changed.payload, json!({"status": "running", "id": "A"}));
}

#[tokio::test]
async fn test_rejected_create_sends_nothing() {
    let config = AppConfig {
        reject_creates: true,
        ..AppConfig::with_defaults()
    };
    let Wired {
        bridge,
        ports,
        start_requests,
        ui_messages,
        ..
    } = wire(&config, Vec::new()).unwrap();
    let _running = bridge.start().await.unwrap();

    let (stdout_write, stdout_read) = tokio::io::duplex(4096);
    tokio::spawn(pump_outbound_lines(stdout_write, ports.clone(), ui_messages));
    let mut lines = BufReader::new(stdout_read).lines();

    let input = concat!(r#"{"port":"startItem","payload":{"name":"y"}}"#, "\n");
    let inbound_port = ports.inbound.clone();
    tokio::task::spawn_blocking(move || {
        pump_inbound_lines(input.as_bytes(), &inbound_port, start_requests)
    })
    .await
    .unwrap()
    .unwrap();

    let nothing = tokio::time::timeout(Duration::from_millis(100), lines.next_line()).await;
    assert!(nothing.is_err());
}

#[tokio::test]
async fn test_shutdown_closes_outbound_stream() {
    let Wired {
        bridge,
        feed,
        ports,
        ui_messages,
        ..
    } = wire(&AppConfig::with_defaults(), Vec::new()).unwrap();
    let running = bridge.start().await.unwrap();
    assert_eq!(feed.listener_count(), 1);

    let (stdout_write, _stdout_read) = tokio::io::duplex(4096);
    let writer = tokio::spawn(pump_outbound_lines(stdout_write, ports, ui_messages));

    running.shutdown().await;
    drop(bridge);

    assert_eq!(feed.listener_count(), 0);
    tokio::time::timeout(Duration::from_secs(1), writer)
        .await
        .expect("outbound pump did not stop")
        .unwrap()
        .unwrap();
}
