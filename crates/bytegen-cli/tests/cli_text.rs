use std::process::{Command, Output};

fn bytegen() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bytegen"));
    // Keep the caller's environment from leaking into the settings layers.
    for (k, _) in std::env::vars() {
        if k.starts_with("BYTEGEN_") {
            cmd.env_remove(k);
        }
    }
    cmd
}

fn run_ok(cmd: &mut Command) -> Output {
    let out = cmd.output().expect("spawn bytegen");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

#[test]
fn text_default_raw_bytes_are_bolded_header() {
    let out = run_ok(bytegen().args(["text", "--text", "Title: hello world", "--raw"]));
    let want = "\u{2705}\u{3010} \u{1D413}\u{1D422}\u{1D42D}\u{1D425}\u{1D41E}\u{3011}: hello world";
    assert_eq!(out.stdout, want.as_bytes());
    assert_eq!(out.stdout.len(), 43);

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("35f7ef62e59d0b1c0b231a369340c64e08fedd874f681753759f421d1c24cf2f"),
        "{stderr}"
    );
    assert!(stderr.contains("bytes        = 43"), "{stderr}");
}

#[test]
fn text_reads_stdin_when_no_text_flag() {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = bytegen()
        .args(["text", "--no-bold", "--raw"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn bytegen");
    child
        .stdin
        .take()
        .unwrap()
        .write_all("\u{201C}hi\u{201D}\u{200B}".as_bytes())
        .unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    assert_eq!(out.stdout, b"\"hi\"");
    assert!(String::from_utf8_lossy(&out.stderr).contains("zw_removed   = 1"));
}

#[test]
fn out_file_holds_exact_excel_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.txt");

    run_ok(bytegen().args([
        "text",
        "--text",
        "a\nb",
        "--no-bold",
        "--excel",
        "--out",
        path.to_str().unwrap(),
    ]));

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes, b"\xEF\xBB\xBFa\r\nb");
}

#[test]
fn unknown_encoding_fails() {
    let out = bytegen()
        .args(["text", "--text", "x", "--encoding", "klingon-8"])
        .output()
        .expect("spawn bytegen");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("configuration error"));
}

#[test]
fn unrepresentable_char_fails_with_encoding_error() {
    let out = bytegen()
        .args(["text", "--text", "caf\u{E9}", "--no-bold", "--encoding", "ascii"])
        .output()
        .expect("spawn bytegen");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("encoding error"));
}

#[test]
fn env_layer_selects_preset_and_flags_win_over_it() {
    let out = run_ok(
        bytegen()
            .env("BYTEGEN_PRESET_MODE", "json")
            .args(["text", "--text", "a\"b", "--no-bold", "--raw"]),
    );
    assert_eq!(out.stdout, b"\"a\\\"b\"");

    let out = run_ok(
        bytegen()
            .env("BYTEGEN_PRESET_MODE", "json")
            .args(["text", "--text", "a\"b", "--no-bold", "--raw", "--mode", "plain"]),
    );
    assert_eq!(out.stdout, b"a\"b");
}

#[test]
fn settings_file_layer_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bytegen.toml");
    std::fs::write(
        &path,
        "preset_mode = \"html\"\napply_header_bold = false\nhtml_linebreaks = true\n",
    )
    .unwrap();

    let out = run_ok(bytegen().args([
        "text",
        "--config",
        path.to_str().unwrap(),
        "--text",
        "<b>\nx",
        "--raw",
    ]));
    assert_eq!(out.stdout, b"&lt;b&gt;<br>\nx");
}

#[test]
fn preview_is_truncated_but_bytes_are_not() {
    let long = "y".repeat(1500);
    let out = run_ok(bytegen().args(["text", "--text", &long, "--no-bold"]));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.trim_end().ends_with("...[truncated]"));
    assert!(String::from_utf8_lossy(&out.stderr).contains("bytes        = 1500"));
}
