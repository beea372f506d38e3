use assert_cmd::cargo::CommandCargoExt;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

struct Fixture {
    project: TempDir,
    scratch: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Fixture {
            project: TempDir::new().unwrap(),
            scratch: TempDir::new().unwrap(),
        }
    }

    fn add_language(&self, code: &str, content: &str) -> PathBuf {
        let dir = self
            .project
            .path()
            .join("Resources")
            .join(format!("{}.lproj", code));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("Localizable.strings");
        fs::write(&path, content).unwrap();
        path
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::cargo_bin("lprojkit")
            .unwrap()
            .arg("--project-dir")
            .arg(self.project.path())
            .arg("--scratch-dir")
            .arg(self.scratch.path())
            .args(args)
            .output()
            .unwrap()
    }
}

fn stdout_json(output: &Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("invalid JSON ({e}): {stdout}"))
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_get_defaults_to_base_language() {
    let fixture = Fixture::new();
    fixture.add_language("Base", "\"Greeting\" = \"Hello\";\n");
    fixture.add_language("es", "\"Greeting\" = \"Hola\";\n");

    let output = fixture.run(&["--get", "Greeting"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let records = stdout_json(&output);
    assert_eq!(
        records,
        serde_json::json!([{"key": "Greeting", "text": "Hello", "language": "Base"}])
    );
}

#[test]
fn test_get_multiple_languages_with_absent_key() {
    let fixture = Fixture::new();
    fixture.add_language("Base", "\"Greeting\" = \"Hello\";\n");
    fixture.add_language("de", "");
    fixture.add_language("es", "\"Greeting\" = \"Hola\";\n");

    let output = fixture.run(&["--get", "Greeting", "--languages", "es,de"]);
    assert!(output.status.success());

    let records = stdout_json(&output);
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["language"], "de");
    assert_eq!(records[0]["text"], Value::Null);
    assert_eq!(records[1]["language"], "es");
    assert_eq!(records[1]["text"], "Hola");
}

#[test]
fn test_diff_keys_reports_missing_base_keys() {
    let fixture = Fixture::new();
    fixture.add_language("Base", "\"A\" = \"a\";\n\"B\" = \"b\";\n\"C\" = \"c\";\n");
    fixture.add_language("es", "\"A\" = \"una\";\n");

    let output = fixture.run(&["--diff-keys"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert_eq!(
        stdout_json(&output),
        serde_json::json!([
            {"key": "B", "text": "b", "language": "es"},
            {"key": "C", "text": "c", "language": "es"}
        ])
    );
}

#[test]
fn test_set_inserts_into_every_language() {
    let fixture = Fixture::new();
    let base = fixture.add_language("Base", "\"a\" = \"A\";\n\"e\" = \"E\";\n");
    let es = fixture.add_language("es", "");

    let output = fixture.run(&["--set", "c=Hello"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert_eq!(read(&base), "\"a\" = \"A\";\n\"c\" = \"Hello\";\n\"e\" = \"E\";\n");
    assert_eq!(read(&es), "\"c\" = \"Hello\";\n");

    let outcomes = stdout_json(&output);
    let outcomes = outcomes.as_array().unwrap();
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|o| o["status"] == "committed"));
}

#[test]
fn test_set_replaces_existing_key() {
    let fixture = Fixture::new();
    let base = fixture.add_language(
        "Base",
        "/* Greetings */\n\"Greeting\" = \"Hi\";\n\"Other\" = \"x\";\n",
    );

    let output = fixture.run(&["--set", "Greeting=Hello"]);
    assert!(output.status.success());
    assert_eq!(
        read(&base),
        "/* Greetings */\n\"Greeting\" = \"Hello\";\n\"Other\" = \"x\";\n"
    );
}

#[cfg(unix)]
#[test]
fn test_set_with_translate_command() {
    let fixture = Fixture::new();
    let base = fixture.add_language("Base", "");
    let de = fixture.add_language("de", "");

    // Appends the target language to the text read from stdin.
    let script = fixture.scratch.path().join("fake-translate.sh");
    fs::write(&script, "#!/bin/sh\nprintf '%s-%s' \"$(cat)\" \"$1\"\n").unwrap();

    let command = format!("sh {}", script.display());
    let output = fixture.run(&["--set", "Greeting=Hello", "--translate-cmd", &command]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert_eq!(read(&base), "\"Greeting\" = \"Hello\";\n");
    assert_eq!(read(&de), "\"Greeting\" = \"Hello-de\";\n");
}

#[cfg(unix)]
#[test]
fn test_set_reports_failed_language_and_continues() {
    let fixture = Fixture::new();
    let base = fixture.add_language("Base", "");
    let de = fixture.add_language("de", "");
    let es = fixture.add_language("es", "");

    let script = fixture.scratch.path().join("flaky-translate.sh");
    fs::write(
        &script,
        "#!/bin/sh\nif [ \"$1\" = de ]; then echo 'backend down' >&2; exit 1; fi\nprintf '%s!' \"$(cat)\"\n",
    )
    .unwrap();

    let command = format!("sh {}", script.display());
    let output = fixture.run(&["--set", "Greeting=Hello", "--translate-cmd", &command]);
    assert!(!output.status.success());

    let outcomes = stdout_json(&output);
    let statuses: Vec<_> = outcomes
        .as_array()
        .unwrap()
        .iter()
        .map(|o| (o["language"].as_str().unwrap(), o["status"].as_str().unwrap()))
        .collect();
    assert_eq!(
        statuses,
        vec![("Base", "committed"), ("de", "failed"), ("es", "committed")]
    );

    assert_eq!(read(&base), "\"Greeting\" = \"Hello\";\n");
    assert_eq!(read(&de), "");
    assert_eq!(read(&es), "\"Greeting\" = \"Hello!\";\n");
}

#[test]
fn test_set_without_equals_prints_usage() {
    let fixture = Fixture::new();
    fixture.add_language("Base", "");

    let output = fixture.run(&["--set", "Greeting"]);
    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Key/value pair must be in the form key=value"));
    assert!(stdout.contains("Usage"));
}

#[test]
fn test_no_operation_prints_usage() {
    let fixture = Fixture::new();
    fixture.add_language("Base", "");

    let output = fixture.run(&[]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
}

#[test]
fn test_several_operations_print_usage() {
    let fixture = Fixture::new();
    fixture.add_language("Base", "\"k\" = \"v\";\n");

    let output = fixture.run(&["--get", "k", "--diff-keys"]);
    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Only one of --get, --set and --diff-keys"));
    assert!(stdout.contains("Usage"));
}

#[test]
fn test_invalid_project_logs_without_output() {
    let fixture = Fixture::new();
    fs::create_dir_all(fixture.project.path().join("Resources/en.lproj")).unwrap();

    let output = fixture.run(&["--get", "Greeting"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("is an invalid Xcode project directory")
    );
}

#[test]
fn test_config_file_sets_base_language_and_placement() {
    let fixture = Fixture::new();
    let en = fixture.add_language("en", "\"apple\" = \"1\";\n\"avocado\" = \"2\";\n\"banana\" = \"3\";\n");
    fixture.add_language("fr", "\"apple\" = \"pomme\";\n");
    fs::write(
        fixture.project.path().join(".lprojkit.toml"),
        "base_language = \"en\"\nplacement = \"full-key\"\n",
    )
    .unwrap();

    let diff = fixture.run(&["--diff-keys"]);
    assert!(
        diff.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&diff.stderr)
    );
    let missing: Vec<String> = stdout_json(&diff)
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["key"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(missing, vec!["avocado", "banana"]);

    let set = fixture.run(&["--set", "azure=4"]);
    assert!(set.status.success());
    assert_eq!(
        read(&en),
        "\"apple\" = \"1\";\n\"avocado\" = \"2\";\n\"azure\" = \"4\";\n\"banana\" = \"3\";\n"
    );
}

#[test]
fn test_help_lists_operations() {
    let output = Command::cargo_bin("lprojkit")
        .unwrap()
        .arg("--help")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--get"));
    assert!(stdout.contains("--set"));
    assert!(stdout.contains("--diff-keys"));
}
