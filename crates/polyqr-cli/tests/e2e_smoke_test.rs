use polyqr_cli::{Args, run};

fn args_for(message: &str) -> Args {
    Args {
        size: "1mm".to_string(),
        style: String::new(),
        message: message.to_string(),
        full_size: false,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_messages() {
    // A slice of the message corpus: empty input, numeric mode,
    // alphanumeric mode, byte mode, URLs, and multi-byte UTF-8.
    let messages = [
        "",
        "A",
        "0",
        "1234567890",
        "HELLO WORLD",
        "THE QUICK BROWN FOX 0123456789 $%*+-./:",
        "!@#$%^&*()_+[]{}|;':,./<>?`~",
        "https://example.org",
        "WIFI:T:WPA;S:MySSID;P:S3cr3t!;H:false;;",
        "{\"name\":\"Alice\",\"age\":30,\"active\":true}",
        "line1\nline2\nline3",
        "こんにちは世界",
        "Привет, мир",
        "€ £ ¥ ₹ ₩ ₿",
    ];

    let mut failed_messages = Vec::new();

    for msg in messages {
        match run(&args_for(msg)) {
            Ok(tikz) => {
                if !tikz.starts_with("\\begin{tikzpicture}")
                    || !tikz.ends_with("\\end{tikzpicture}%")
                {
                    failed_messages.push((msg, "malformed TikZ output".to_string()));
                }
            }
            Err(e) => failed_messages.push((msg, e.to_string())),
        }
    }

    if !failed_messages.is_empty() {
        eprintln!("\nValid messages that failed:");
        for (msg, err) in &failed_messages {
            eprintln!("  - {msg:?}: {err}");
        }
        panic!(
            "{} valid message(s) failed unexpectedly",
            failed_messages.len()
        );
    }
}

#[test]
fn e2e_smoke_test_oversized_message_fails() {
    // Beyond the byte capacity of the largest QR version.
    let message = "A".repeat(8000);
    assert!(
        run(&args_for(&message)).is_err(),
        "Oversized message should fail to encode"
    );
}

#[test]
fn e2e_smoke_test_full_size_flag() {
    let mut args = args_for("HELLO WORLD");
    args.size = "40mm".to_string();
    args.full_size = true;

    let tikz = run(&args).expect("Failed to render");
    assert!(
        tikz.contains("x={(40mm)/"),
        "full-size mode should divide the length by the module count: {tikz}"
    );
}

#[test]
fn e2e_smoke_test_style_passthrough() {
    let mut args = args_for("HELLO WORLD");
    args.style = "rounded corners=0.25mm".to_string();

    let tikz = run(&args).expect("Failed to render");
    assert!(tikz.contains("even odd rule, rounded corners=0.25mm}"));
}

#[test]
fn e2e_smoke_test_missing_config_fails() {
    let mut args = args_for("HELLO WORLD");
    args.config = Some("does/not/exist.toml".to_string());

    assert!(
        run(&args).is_err(),
        "Explicit but missing config file should fail"
    );
}
