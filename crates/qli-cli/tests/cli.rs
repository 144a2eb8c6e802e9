//! End-to-end tests for the `qli` binary.

mod common;

use common::{INDEX, INDEX_PATH, qli, run, stderr};

#[test]
fn test_help_lists_arches() {
    let output = qli().arg("--help").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("win64_msvc2017_64"));
    assert!(stdout.contains("--outputdir"));
}

#[test]
fn test_wrong_argument_count() {
    let output = qli().args(["5.12.6", "linux"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let output = qli()
        .args(["5.12.6", "linux", "desktop", "gcc_64", "extra"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_missing_arch() {
    let out = tempfile::tempdir().unwrap();
    let output = qli()
        .args(["5.12.6", "windows", "desktop"])
        .arg("--outputdir")
        .arg(out.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Please supply a target architecture."));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
    assert!(!out.path().join("Qt5.12.6").exists());
}

#[test]
fn test_invalid_version() {
    let output = qli().args(["5.12", "linux", "desktop"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid version: '5.12'! Please use the form '5.X.Y'."));
}

#[test]
fn test_index_not_found() {
    let mut server = mockito::Server::new();
    let _index = server.mock("GET", INDEX_PATH).with_status(404).create();

    let out = tempfile::tempdir().unwrap();
    let output = run(&server.url(), out.path(), &["6.0.0", "linux", "desktop"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("404"));
    assert!(!out.path().join("Qt6.0.0").exists());
}

#[test]
fn test_no_matching_package() {
    let mut server = mockito::Server::new();
    let _index = server
        .mock("GET", INDEX_PATH)
        .with_body("<Updates><PackageUpdate><Name>qt.qt5.600.other</Name></PackageUpdate></Updates>")
        .create();

    let out = tempfile::tempdir().unwrap();
    let output = run(&server.url(), out.path(), &["6.0.0", "linux", "desktop"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("qt.qt5.600.gcc_64"));
    assert!(!out.path().join("Qt6.0.0").exists());
}

#[test]
fn test_dry_run_touches_nothing() {
    let mut server = mockito::Server::new();
    let _index = server.mock("GET", INDEX_PATH).with_body(INDEX).create();
    let archives = server
        .mock("GET", mockito::Matcher::Regex(r"\.7z$".to_string()))
        .expect(0)
        .create();

    let out = tempfile::tempdir().unwrap();
    let output = run(
        &server.url(),
        out.path(),
        &["6.0.0", "linux", "desktop", "--dry-run"],
    );

    assert_eq!(output.status.code(), Some(0));
    assert!(!out.path().join("Qt6.0.0").exists());
    archives.assert();
}

#[cfg(unix)]
mod install {
    use super::common::{INDEX, INDEX_PATH, fake_7z, run, stderr};

    /// Fake extractor that lays out an arch tree and records each archive.
    const EXTRACT: &str =
        "mkdir -p 6.0.0/gcc_64/lib\nbasename \"$4\" >> 6.0.0/gcc_64/lib/archives.txt";

    fn server_with_archives() -> (mockito::ServerGuard, Vec<mockito::Mock>) {
        let mut server = mockito::Server::new();
        let mocks = vec![
            server.mock("GET", INDEX_PATH).with_body(INDEX).create(),
            server
                .mock("GET", mockito::Matcher::Regex(r"\.7z$".to_string()))
                .with_body("payload")
                .create(),
        ];
        (server, mocks)
    }

    #[test]
    fn test_install_writes_qt_conf() {
        let (server, _mocks) = server_with_archives();
        let tools = tempfile::tempdir().unwrap();
        let program = fake_7z(tools.path(), EXTRACT);

        let out = tempfile::tempdir().unwrap();
        let output = run(
            &server.url(),
            out.path(),
            &["6.0.0", "linux", "desktop", "--sevenzip", program.to_str().unwrap()],
        );
        assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

        let install_dir = out.path().join("Qt6.0.0");
        assert_eq!(
            std::fs::read_to_string(install_dir.join("6.0.0/gcc_64/bin/qt.conf")).unwrap(),
            "[Paths]\nPrefix=..\n"
        );
        assert_eq!(
            std::fs::read_to_string(install_dir.join("6.0.0/gcc_64/lib/archives.txt")).unwrap(),
            "qtbase-Linux-x64.7z\nqtsvg-Linux-x64.7z\n"
        );

        // Downloads and the staging directory are gone.
        let entries: Vec<_> = std::fs::read_dir(&install_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["6.0.0"]);
    }

    #[test]
    fn test_install_replaces_file_at_install_path() {
        let (server, _mocks) = server_with_archives();
        let tools = tempfile::tempdir().unwrap();
        let program = fake_7z(tools.path(), EXTRACT);

        let out = tempfile::tempdir().unwrap();
        std::fs::write(out.path().join("Qt6.0.0"), "in the way").unwrap();

        let output = run(
            &server.url(),
            out.path(),
            &["6.0.0", "linux", "desktop", "--sevenzip", program.to_str().unwrap()],
        );
        assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
        assert!(out.path().join("Qt6.0.0/6.0.0/gcc_64/bin/qt.conf").is_file());
    }

    #[test]
    fn test_archive_filter() {
        let (server, _mocks) = server_with_archives();
        let tools = tempfile::tempdir().unwrap();
        let program = fake_7z(tools.path(), EXTRACT);

        let out = tempfile::tempdir().unwrap();
        let output = run(
            &server.url(),
            out.path(),
            &[
                "6.0.0",
                "linux",
                "desktop",
                "--sevenzip",
                program.to_str().unwrap(),
                "--archives",
                "qtsvg",
            ],
        );
        assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
        assert_eq!(
            std::fs::read_to_string(out.path().join("Qt6.0.0/6.0.0/gcc_64/lib/archives.txt"))
                .unwrap(),
            "qtsvg-Linux-x64.7z\n"
        );
    }

    #[test]
    fn test_failing_extractor_stops_the_run() {
        let (server, _mocks) = server_with_archives();
        let tools = tempfile::tempdir().unwrap();
        let program = fake_7z(tools.path(), "echo 'Unsupported archive' >&2\nexit 2");

        let out = tempfile::tempdir().unwrap();
        let output = run(
            &server.url(),
            out.path(),
            &["6.0.0", "linux", "desktop", "--sevenzip", program.to_str().unwrap()],
        );

        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).contains("Unsupported archive"));
        assert!(!out.path().join("Qt6.0.0/6.0.0/gcc_64/bin/qt.conf").exists());
    }

    #[test]
    fn test_missing_extractor() {
        let (server, _mocks) = server_with_archives();
        let out = tempfile::tempdir().unwrap();
        let output = run(
            &server.url(),
            out.path(),
            &["6.0.0", "linux", "desktop", "--sevenzip", "/nonexistent/7z"],
        );

        assert_eq!(output.status.code(), Some(1));
        let stderr = stderr(&output);
        assert!(stderr.contains("Suggested follow-up:"));
        assert!(stderr.contains("--sevenzip"));
    }
}
