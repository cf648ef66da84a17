// SPDX-License-Identifier: 0BSD
// spritzcrypt

use regex::Regex;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::LazyLock;

static HASH_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^-:\s([0-9a-zA-Z+/=]+)$").unwrap());

fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_spritzcrypt"))
}

fn run_with_stdin(args: &[&str], input: &[u8]) -> std::process::Output {
    let mut child = Command::new(binary_path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn spritzcrypt");
    child.stdin.take().unwrap().write_all(input).unwrap();
    child.wait_with_output().expect("failed to wait on spritzcrypt")
}

#[test]
fn hash_of_stdin_prints_a_base64_digest_line() {
    let output = run_with_stdin(&["hash"], b"abc");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(HASH_LINE.is_match(&stdout), "unexpected output: {stdout:?}");
}

#[test]
fn hash_hex_flag_produces_a_64_character_lowercase_hex_digest_for_default_size() {
    let output = run_with_stdin(&["hash", "-h"], b"abc");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let digest = stdout.trim().split_once(": ").map(|(_, d)| d).unwrap_or_default();
    assert_eq!(digest.len(), 64);
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn hash_is_deterministic_for_the_same_input() {
    let first = run_with_stdin(&["hash", "-h"], b"determinism matters");
    let second = run_with_stdin(&["hash", "-h"], b"determinism matters");
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn crypt_round_trip_via_stdin_stdout_recovers_the_plaintext() {
    let plaintext = b"a secret message for the integration test\n";

    let encrypted = run_with_stdin(&["crypt", "-p", "hunter2"], plaintext);
    assert!(encrypted.status.success(), "encrypt failed: {:?}", String::from_utf8_lossy(&encrypted.stderr));

    let decrypted = run_with_stdin(&["crypt", "-d", "-p", "hunter2"], &encrypted.stdout);
    assert!(decrypted.status.success(), "decrypt failed: {:?}", String::from_utf8_lossy(&decrypted.stderr));
    assert_eq!(decrypted.stdout, plaintext);
}

#[test]
fn crypt_decrypt_with_the_wrong_password_fails() {
    let plaintext = b"another secret";
    let encrypted = run_with_stdin(&["crypt", "-p", "correct"], plaintext);
    assert!(encrypted.status.success());

    let decrypted = run_with_stdin(&["crypt", "-d", "-p", "incorrect"], &encrypted.stdout);
    assert!(!decrypted.status.success());
}

#[test]
fn crypt_check_accepts_the_correct_password_without_printing_plaintext() {
    let encrypted = run_with_stdin(&["crypt", "-p", "hunter2"], b"payload");
    assert!(encrypted.status.success());

    let checked = run_with_stdin(&["crypt", "-n", "-p", "hunter2"], &encrypted.stdout);
    assert!(checked.status.success());
    assert!(!String::from_utf8_lossy(&checked.stdout).contains("payload"));
}

#[test]
fn rekey_on_a_real_file_allows_the_new_password_and_rejects_the_old_one() {
    let dir = std::env::temp_dir().join(format!("spritzcrypt-cli-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("rekey-target.spritz");

    let encrypted = run_with_stdin(&["crypt", "-p", "old-password"], b"rekey me");
    assert!(encrypted.status.success());
    std::fs::write(&path, &encrypted.stdout).unwrap();

    let rekeyed = Command::new(binary_path())
        .args(["rekey", "-o", "old-password", "-n", "new-password"])
        .arg(&path)
        .output()
        .expect("failed to run rekey");
    assert!(rekeyed.status.success(), "rekey failed: {:?}", String::from_utf8_lossy(&rekeyed.stderr));

    let ciphertext = std::fs::read(&path).unwrap();
    let decrypted_new = run_with_stdin(&["crypt", "-d", "-p", "new-password"], &ciphertext);
    assert!(decrypted_new.status.success());
    assert_eq!(decrypted_new.stdout, b"rekey me");

    let decrypted_old = run_with_stdin(&["crypt", "-d", "-p", "old-password"], &ciphertext);
    assert!(!decrypted_old.status.success());

    std::fs::remove_dir_all(&dir).ok();
}
