//! Executable location tests.

use std::fs;
use std::path::{Path, PathBuf};

use golangconfig::host::{MockApplicationSettings, MockShellEnvironment, MockView};
use golangconfig::locate::executable_path;
use golangconfig::settings::{SettingResolver, SettingSource};
use serde_json::json;
use tempfile::TempDir;

/// Create an executable file named after the tool (plus the OS suffix) in
/// `dir`, creating the directory first.
fn make_executable(dir: &Path, tool: &str) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(format!("{}{}", tool, std::env::consts::EXE_SUFFIX));
    fs::write(&path, "").unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }
    path
}

fn join_path(dirs: &[PathBuf]) -> String {
    std::env::join_paths(dirs)
        .unwrap()
        .into_string()
        .unwrap()
}

#[test]
fn finds_tool_on_baseline_path() {
    let temp = TempDir::new().unwrap();
    let bin = temp.path().join("bin");
    let usr_bin = temp.path().join("usr/bin");
    let expected = make_executable(&bin, "go");
    fs::create_dir_all(&usr_bin).unwrap();

    let shell = MockShellEnvironment::new("/bin/bash")
        .set("PATH", join_path(&[bin, usr_bin]));
    let application = MockApplicationSettings::empty();
    let resolver = SettingResolver::new(&shell, &application);

    let located = executable_path(&resolver, "go", None, None).unwrap();
    assert_eq!(located.path, expected);
    assert_eq!(located.source, SettingSource::ShellEnv("/bin/bash".into()));
}

#[test]
fn searches_directories_in_order() {
    let temp = TempDir::new().unwrap();
    let bin = temp.path().join("bin");
    let usr_bin = temp.path().join("usr/bin");
    fs::create_dir_all(&bin).unwrap();
    let expected = make_executable(&usr_bin, "go");

    let shell = MockShellEnvironment::new("/bin/bash")
        .set("PATH", join_path(&[bin, usr_bin]));
    let application = MockApplicationSettings::empty();
    let resolver = SettingResolver::new(&shell, &application);

    let located = executable_path(&resolver, "go", None, None).unwrap();
    assert_eq!(located.path, expected);
}

#[test]
fn first_matching_directory_wins() {
    let temp = TempDir::new().unwrap();
    let bin = temp.path().join("bin");
    let usr_bin = temp.path().join("usr/bin");
    let expected = make_executable(&bin, "go");
    make_executable(&usr_bin, "go");

    let shell = MockShellEnvironment::new("/bin/bash")
        .set("PATH", join_path(&[bin, usr_bin]));
    let application = MockApplicationSettings::empty();
    let resolver = SettingResolver::new(&shell, &application);

    let located = executable_path(&resolver, "go", None, None).unwrap();
    assert_eq!(located.path, expected);
}

#[cfg(unix)]
#[test]
fn view_path_override_wins_and_non_executables_are_skipped() {
    let temp = TempDir::new().unwrap();
    let bin = temp.path().join("bin");
    let usr_bin = temp.path().join("usr/bin");
    let usr_local_bin = temp.path().join("usr/local/bin");
    fs::create_dir_all(&bin).unwrap();
    // Regular file without the execute bit; must not be accepted.
    fs::create_dir_all(&usr_bin).unwrap();
    fs::write(usr_bin.join("go"), "").unwrap();
    let expected = make_executable(&usr_local_bin, "go");

    let shell = MockShellEnvironment::new("/bin/bash")
        .set("PATH", bin.to_str().unwrap());
    let application = MockApplicationSettings::empty();
    let view = MockView::new(json!({
        "PATH": join_path(&[usr_bin, usr_local_bin]),
    }));
    let resolver = SettingResolver::new(&shell, &application);

    let located = executable_path(&resolver, "go", Some(&view), None).unwrap();
    assert_eq!(located.path, expected);
    assert_eq!(located.source.to_string(), "project file");
}

#[test]
fn absence_is_a_normal_outcome() {
    let temp = TempDir::new().unwrap();
    let bin = temp.path().join("bin");
    fs::create_dir_all(&bin).unwrap();

    let shell = MockShellEnvironment::new("/bin/bash")
        .set("PATH", bin.to_str().unwrap());
    let application = MockApplicationSettings::empty();
    let resolver = SettingResolver::new(&shell, &application);

    assert!(executable_path(&resolver, "go", None, None).is_none());
}

#[test]
fn non_string_path_override_falls_back_to_baseline() {
    let temp = TempDir::new().unwrap();
    let bin = temp.path().join("bin");
    let expected = make_executable(&bin, "go");

    let shell = MockShellEnvironment::new("/bin/bash")
        .set("PATH", bin.to_str().unwrap());
    let application = MockApplicationSettings::empty();
    let view = MockView::new(json!({"PATH": 1}));
    let resolver = SettingResolver::new(&shell, &application);

    let located = executable_path(&resolver, "go", Some(&view), None).unwrap();
    assert_eq!(located.path, expected);
    assert_eq!(located.source, SettingSource::ShellEnv("/bin/bash".into()));
}

#[cfg(unix)]
#[test]
fn directory_named_after_tool_is_not_a_match() {
    let temp = TempDir::new().unwrap();
    let bin = temp.path().join("bin");
    fs::create_dir_all(bin.join("go")).unwrap();

    let shell = MockShellEnvironment::new("/bin/bash")
        .set("PATH", bin.to_str().unwrap());
    let application = MockApplicationSettings::empty();
    let resolver = SettingResolver::new(&shell, &application);

    assert!(executable_path(&resolver, "go", None, None).is_none());
}
