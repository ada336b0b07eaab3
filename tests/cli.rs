use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

const SCENARIO_A_IN: &str = "find_package(Jsoncpp REQUIRED)\ntarget_link_libraries(x Jsoncpp_lib)\ninclude_directories(${JSONCPP_INCLUDE_DIRS})";
const SCENARIO_A_OUT: &str = "find_package(jsoncpp REQUIRED)\ntarget_link_libraries(x jsoncpp_lib)\ninclude_directories(${jsoncpp_INCLUDE_DIRS})";

/// Run the binary against `root`, gating the patch to the given OS name
fn run_patch(root: &Path, required_os: &str) -> Output {
    let config = root.join("patch.toml");
    fs::write(&config, format!("required_os = \"{}\"\n", required_os)).unwrap();

    Command::new(env!("CARGO_BIN_EXE_drogon-patch"))
        .arg("--root")
        .arg(root)
        .arg("--config")
        .arg(&config)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn vendor_dir(root: &Path) -> std::path::PathBuf {
    root.join("source").join("MaterialXView").join("drogon")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_missing_vendor_dir_exits_successfully() {
    let dir = tempdir().unwrap();

    let output = run_patch(dir.path(), std::env::consts::OS);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Drogon directory not found:"));
    assert!(stderr(&output).is_empty());
    assert!(!vendor_dir(dir.path()).exists());
}

#[test]
fn test_other_platform_skips() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(vendor_dir(dir.path())).unwrap();
    let target = vendor_dir(dir.path()).join("CMakeLists.txt");
    fs::write(&target, SCENARIO_A_IN).unwrap();

    let output = run_patch(dir.path(), "not-this-os");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).trim(), "Not running on Windows. Skipping patch.");
    assert_eq!(fs::read_to_string(&target).unwrap(), SCENARIO_A_IN);
}

#[test]
fn test_patch_reports_success_on_stdout() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(vendor_dir(dir.path())).unwrap();
    let target = vendor_dir(dir.path()).join("CMakeLists.txt");
    fs::write(&target, SCENARIO_A_IN).unwrap();

    let output = run_patch(dir.path(), std::env::consts::OS);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Patched "));
    assert!(out.contains("Patch applied successfully."));
    assert_eq!(fs::read_to_string(&target).unwrap(), SCENARIO_A_OUT);
}

#[test]
fn test_unreadable_target_exits_with_failure() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(vendor_dir(dir.path())).unwrap();
    let target = vendor_dir(dir.path()).join("CMakeLists.txt");
    fs::write(&target, [0x4au8, 0xff, 0xfe]).unwrap();

    let output = run_patch(dir.path(), std::env::consts::OS);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Error reading"));
    assert!(err.contains("Failed to apply patch."));
    assert!(!stdout(&output).contains("Patch applied successfully."));
    assert_eq!(fs::read(&target).unwrap(), vec![0x4a, 0xff, 0xfe]);
}

#[test]
fn test_invalid_config_exits_with_failure() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("broken.toml");
    fs::write(&config, "required_os = [").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_drogon-patch"))
        .arg("--root")
        .arg(dir.path())
        .arg("--config")
        .arg(&config)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to load patch configuration"));
    assert!(stdout(&output).is_empty());
}
