#![cfg(feature = "cli")]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::process::Command;
use std::thread;
use std::time::Duration;

/// Accept one connection, read `probe_len` bytes, answer with `reply`.
fn fake_server(probe_len: usize, reply: Vec<u8>) -> (u16, thread::JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("listener should bind");
    let port = listener.local_addr().expect("listener has address").port();
    let handle = thread::spawn(move || {
        let (mut conn, _) = listener.accept().expect("server should accept");
        let mut probe = vec![0u8; probe_len];
        conn.read_exact(&mut probe).expect("probe should arrive");
        conn.write_all(&reply).expect("reply should be written");
        probe
    });
    (port, handle)
}

fn utf16_reply(text: &str) -> Vec<u8> {
    let mut reply = vec![0xFF];
    reply.extend_from_slice(&(text.encode_utf16().count() as u16).to_be_bytes());
    reply.extend(text.encode_utf16().flat_map(|c| c.to_be_bytes()));
    reply
}

fn unused_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("listener should bind");
    listener.local_addr().expect("listener has address").port()
}

#[test]
fn ping_1_4_server_outputs_json_status() {
    let (port, server) = fake_server(
        2,
        utf16_reply("\u{A7}1\u{0}47\u{0}1.4.2\u{0}A Minecraft Server\u{0}3\u{0}20"),
    );

    let output = Command::new(env!("CARGO_BIN_EXE_legacyping"))
        .args(["--log-level", "error", "--format", "json", "ping"])
        .arg(format!("127.0.0.1:{port}"))
        .args(["2", "2"])
        .output()
        .expect("ping should run");

    assert_eq!(server.join().expect("server thread"), vec![0xFE, 0x01]);
    assert!(output.status.success());
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("ping should emit json");
    assert_eq!(payload["online"], true);
    assert_eq!(payload["protocol"], "legacy-1.4-1.5");
    assert_eq!(payload["status"]["version"], "1.4.2");
    assert_eq!(payload["status"]["motd"], "A Minecraft Server");
    assert_eq!(payload["status"]["num_players"], 3);
    assert_eq!(payload["status"]["max_players"], 20);
}

#[test]
fn ping_beta_server_pretty_line() {
    let (port, server) = fake_server(1, utf16_reply("MOTD\u{A7}5\u{A7}20"));

    let output = Command::new(env!("CARGO_BIN_EXE_legacyping"))
        .args(["--format", "pretty", "ping", "127.0.0.1"])
        .arg(port.to_string())
        .output()
        .expect("ping should run");

    assert_eq!(server.join().expect("server thread"), vec![0xFE]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), format!("127.0.0.1:{port} (MOTD): OK"));
}

#[test]
fn ping_1_6_sends_ping_host_marker() {
    let (port, server) = fake_server(
        27,
        utf16_reply("\u{A7}1\u{0}74\u{0}1.6.4\u{0}hi\u{0}0\u{0}10"),
    );

    let output = Command::new(env!("CARGO_BIN_EXE_legacyping"))
        .args(["--format", "pretty", "ping", "127.0.0.1", "--protocol", "1.6"])
        .args(["--port", &port.to_string()])
        .output()
        .expect("ping should run");

    let probe = server.join().expect("server thread");
    assert_eq!(&probe[..5], &[0xFE, 0x01, 0xFA, 0x00, 0x0B]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), format!("127.0.0.1:{port} ([1.6.4], hi): OK"));
}

#[test]
fn garbage_reply_returns_60_and_na() {
    let (port, server) = fake_server(1, b"SSH-2.0-OpenSSH_9.6\r\n".to_vec());

    let output = Command::new(env!("CARGO_BIN_EXE_legacyping"))
        .args(["--format", "pretty", "ping"])
        .arg(format!("127.0.0.1:{port}"))
        .output()
        .expect("ping should run");

    server.join().expect("server thread");
    assert_eq!(output.status.code(), Some(60));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), format!("127.0.0.1:{port}: N/A"));
}

#[test]
fn refused_connection_returns_1() {
    let port = unused_port();

    let output = Command::new(env!("CARGO_BIN_EXE_legacyping"))
        .args(["--format", "json", "ping"])
        .arg(format!("127.0.0.1:{port}"))
        .output()
        .expect("ping should run");

    assert_eq!(output.status.code(), Some(1));
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("ping should emit json");
    assert_eq!(payload["online"], false);
    assert_eq!(payload["reachable"], false);
}

#[test]
fn silent_server_times_out_with_124() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("listener should bind");
    let port = listener.local_addr().expect("listener has address").port();
    let server = thread::spawn(move || {
        let (conn, _) = listener.accept().expect("server should accept");
        thread::sleep(Duration::from_millis(800));
        drop(conn);
    });

    let output = Command::new(env!("CARGO_BIN_EXE_legacyping"))
        .args(["--format", "pretty", "ping"])
        .arg(format!("127.0.0.1:{port}"))
        .args(["--timeout", "200ms"])
        .output()
        .expect("ping should run");

    server.join().expect("server thread");
    assert_eq!(output.status.code(), Some(124));
}

#[test]
fn invalid_protocol_returns_64() {
    let output = Command::new(env!("CARGO_BIN_EXE_legacyping"))
        .args(["ping", "localhost", "25565", "1.7", "9"])
        .output()
        .expect("ping should run");

    assert_eq!(output.status.code(), Some(64));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid protocol variant"));
}

#[test]
fn debug_logs_stay_on_stderr() {
    let (port, server) = fake_server(1, utf16_reply("MOTD\u{A7}5\u{A7}20"));

    let output = Command::new(env!("CARGO_BIN_EXE_legacyping"))
        .env("LEGACYPING_LOG_LEVEL", "debug")
        .env("LEGACYPING_LOG_FORMAT", "json")
        .env_remove("LEGACYPING_LOG")
        .args(["--format", "json", "ping", "127.0.0.1"])
        .arg(port.to_string())
        .output()
        .expect("ping should run");

    server.join().expect("server thread");
    assert!(output.status.success());

    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout holds only the result");
    assert_eq!(payload["status"]["motd"], "MOTD");

    let stderr = String::from_utf8_lossy(&output.stderr);
    let messages: Vec<String> = stderr
        .lines()
        .map(|line| {
            let event: serde_json::Value =
                serde_json::from_str(line).expect("stderr lines are json");
            event["fields"]["message"].as_str().unwrap_or_default().to_string()
        })
        .collect();
    assert!(messages.iter().any(|m| m == "received reply"), "{stderr}");
}

#[test]
fn default_level_keeps_stderr_quiet_on_success() {
    let (port, server) = fake_server(1, utf16_reply("MOTD\u{A7}5\u{A7}20"));

    let output = Command::new(env!("CARGO_BIN_EXE_legacyping"))
        .env_remove("LEGACYPING_LOG_LEVEL")
        .env_remove("LEGACYPING_LOG")
        .args(["--format", "pretty", "ping", "127.0.0.1"])
        .arg(port.to_string())
        .output()
        .expect("ping should run");

    server.join().expect("server thread");
    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn sub_nanosecond_timeout_returns_64() {
    let output = Command::new(env!("CARGO_BIN_EXE_legacyping"))
        .args(["--format", "pretty", "ping", "127.0.0.1", "25565", "1e-12"])
        .output()
        .expect("ping should run");

    assert_eq!(output.status.code(), Some(64));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("timeout"), "{stderr}");
}

#[test]
fn version_reports_crate_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_legacyping"))
        .arg("version")
        .output()
        .expect("version should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
