use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "emma-sim-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn run_emma_sim(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_emma_sim"))
        .args(args)
        .output()
        .expect("run emma_sim")
}

#[test]
fn gen_cap_run_delivers_full_payload_to_every_receiver() {
    let dir = unique_temp_dir("full-run");
    let cap = dir.join("alert.xml");
    let report = dir.join("report.json");

    let output = run_emma_sim(&[
        "--gen-cap",
        "--cap-file",
        cap.to_str().unwrap(),
        "--receivers",
        "3",
        "--chunk-bytes",
        "100",
        "--report-json",
        report.to_str().unwrap(),
    ]);
    assert!(
        output.status.success(),
        "emma_sim failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let payload_bytes = fs::metadata(&cap).expect("cap file written").len();
    assert!(payload_bytes > 0);
    let chunk_count = payload_bytes.div_ceil(100);

    let raw = fs::read_to_string(&report).expect("read report.json");
    let v: Value = serde_json::from_str(&raw).expect("parse report.json");

    assert_eq!(v["payload_bytes"].as_u64(), Some(payload_bytes));
    assert_eq!(v["chunk_count"].as_u64(), Some(chunk_count));
    assert_eq!(v["chunks_sent"].as_u64(), Some(chunk_count));

    let receivers = v["receivers"].as_array().expect("receivers array");
    assert_eq!(receivers.len(), 3);
    for r in receivers {
        assert_eq!(r["received"].as_u64(), Some(chunk_count));
        assert_eq!(r["complete"].as_bool(), Some(true));
    }

    let events = v["events"].as_array().expect("events array");
    assert_eq!(events.len() as u64, chunk_count * 3);
    // 首个接收事件在 start_delay（默认 1000ms）
    assert_eq!(events[0]["t_ns"].as_u64(), Some(1_000_000_000));
    assert_eq!(events[0]["t_secs"].as_f64(), Some(1.0));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_cap_file_exits_nonzero_without_transmitting() {
    let dir = unique_temp_dir("missing-cap");
    let cap = dir.join("no-such-alert.xml");

    let output = run_emma_sim(&["--cap-file", cap.to_str().unwrap()]);
    assert!(
        !output.status.success(),
        "expected failure for missing cap file"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("no-such-alert.xml"),
        "stderr should name the missing file: {stderr}"
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn stop_at_start_delay_truncates_every_receiver_to_one_chunk() {
    let dir = unique_temp_dir("truncated");
    let cap = dir.join("alert.xml");
    let report = dir.join("report.json");

    let output = run_emma_sim(&[
        "--gen-cap",
        "--cap-file",
        cap.to_str().unwrap(),
        "--receivers",
        "2",
        "--chunk-bytes",
        "64",
        "--stop-ms",
        "1000",
        "--report-json",
        report.to_str().unwrap(),
    ]);
    assert!(
        output.status.success(),
        "emma_sim failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let raw = fs::read_to_string(&report).expect("read report.json");
    let v: Value = serde_json::from_str(&raw).expect("parse report.json");

    let stop_ns = v["stop_ns"].as_u64().expect("stop_ns");
    assert_eq!(stop_ns, 1_000_000_000);
    assert!(v["chunk_count"].as_u64().expect("chunk_count") > 1);
    assert_eq!(v["chunks_sent"].as_u64(), Some(1));

    for r in v["receivers"].as_array().expect("receivers array") {
        assert_eq!(r["received"].as_u64(), Some(1));
        assert_eq!(r["complete"].as_bool(), Some(false));
    }
    for ev in v["events"].as_array().expect("events array") {
        assert!(ev["t_ns"].as_u64().expect("t_ns") <= stop_ns);
    }

    let _ = fs::remove_dir_all(&dir);
}
