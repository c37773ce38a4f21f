//! Integration tests for extracting key paths from one document

#[cfg(test)]
mod single_document_tests {
    use std::io::Write;
    use std::process::{Command, Stdio};
    use tempfile::NamedTempFile;

    fn run_keyscan(input: Option<&str>, args: &[&str]) -> (String, String, bool) {
        let mut child = Command::new(env!("CARGO_BIN_EXE_keyscan"))
            .args(args)
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to start keyscan");

        // Send input to stdin
        if let Some(mut stdin) = child.stdin.take() {
            if let Some(input) = input {
                stdin.write_all(input.as_bytes()).unwrap();
            }
        }

        let output = child.wait_with_output().expect("Failed to wait for keyscan");
        (
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
            output.status.success(),
        )
    }

    #[test]
    fn test_inline_json_argument() {
        let (stdout, stderr, ok) = run_keyscan(None, &[r#"{"b": {"c": 1}, "a": [1, 2]}"#]);
        assert!(ok, "stderr: {}", stderr);
        assert_eq!(stdout, "a\nb\nb.c\n");
    }

    #[test]
    fn test_stdin_document_with_prefix() {
        let input = r#"[{"id": 1, "tags": [{"k": "v"}]}]"#;
        let (stdout, stderr, ok) = run_keyscan(Some(input), &["--stdin", "--prefix", "rows"]);
        assert!(ok, "stderr: {}", stderr);
        assert_eq!(stdout, "rows[]\nrows[].id\nrows[].tags\nrows[].tags[]\nrows[].tags[].k\n");
    }

    #[test]
    fn test_file_argument_json_output() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "{{\"order\": {{\"lines\": []}}}}").unwrap();

        let (stdout, stderr, ok) =
            run_keyscan(None, &[tmp.path().to_str().unwrap(), "--format", "json"]);
        assert!(ok, "stderr: {}", stderr);
        let paths: Vec<String> = serde_json::from_str(&stdout).unwrap();
        assert_eq!(paths, vec!["order", "order.lines"]);
    }

    #[test]
    fn test_scalar_document_prints_nothing() {
        let (stdout, _stderr, ok) = run_keyscan(Some("\"just a string\""), &["--stdin"]);
        assert!(ok);
        assert!(stdout.is_empty());
    }

    #[test]
    fn test_invalid_json_fails() {
        let (stdout, stderr, ok) = run_keyscan(Some("{\"a\": }"), &["--stdin"]);
        assert!(!ok);
        assert!(stdout.is_empty());
        assert!(stderr.contains("JSON parse error at line 1"), "{}", stderr);

        // offending line echoed with a caret under the bad token
        let mut lines = stderr.lines().skip_while(|l| *l != "{\"a\": }");
        assert_eq!(lines.next(), Some("{\"a\": }"), "{}", stderr);
        let caret = lines.next().unwrap_or_default();
        assert!(caret.len() > 1 && caret.trim_start() == "^", "{}", stderr);
    }

    #[test]
    fn test_missing_file_fails() {
        let (_stdout, stderr, ok) = run_keyscan(None, &["/no/such/sample.json"]);
        assert!(!ok);
        assert!(stderr.contains("/no/such/sample.json"), "{}", stderr);
    }
}
