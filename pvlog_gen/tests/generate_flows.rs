//! # Generator end-to-end tests
//!
//! Drives the built `pvlog_gen` binary against TOML build descriptions
//! in a temporary directory and checks the generated artifacts: the
//! `<ioc_name>.blacklist` file, the materialized access policy and the
//! `st.cmd.pvlog` startup fragment.

use std::fs;
use std::path::Path;
use std::process::Command;

// ─── Helpers ────────────────────────────────────────────────────────

fn pvlog_gen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pvlog_gen"))
}

fn write_description(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("pvlog.toml");
    fs::write(&path, body).unwrap();
    path
}

fn file_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

// ─── Generation flows ───────────────────────────────────────────────

#[test]
fn generates_all_artifacts_from_description() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("iocBoot");
    let description = format!(
        r#"ioc_name = "TS-XX-IOC-99"
blacklist = ["FOO"]

[output]
dir = "{}"

[[record]]
name = "TS-XX-IOC-99:TEST"
rtype = "ao"

[[record]]
name = "TS-XX-IOC-99:TEST2"
rtype = "ao"
blacklist = true
"#,
        out_dir.display()
    );
    let config = write_description(dir.path(), &description);

    let status = pvlog_gen().arg("--config").arg(&config).status().unwrap();
    assert!(status.success());

    // Blacklist: header, then the marked record, then the explicit
    // entry, in declaration order.
    let blacklist = out_dir.join("TS-XX-IOC-99.blacklist");
    assert_eq!(
        file_lines(&blacklist),
        [
            " Automatically generated, do not edit",
            "TS-XX-IOC-99:TEST2",
            "FOO",
        ]
    );

    // Bundled access policy materialized into the output directory.
    let access = out_dir.join("access.acf");
    assert!(fs::read_to_string(&access).unwrap().contains("TRAPWRITE"));

    // Startup fragment references both generated files.
    let st_cmd = fs::read_to_string(out_dir.join("st.cmd.pvlog")).unwrap();
    assert_eq!(
        st_cmd,
        format!(
            "asSetFilename \"{}\"\nload_logging_blacklist \"{}\"\n",
            access.display(),
            blacklist.display()
        )
    );
}

#[test]
fn out_dir_flag_overrides_description() {
    let dir = tempfile::tempdir().unwrap();
    let override_dir = dir.path().join("elsewhere");
    let description = r#"ioc_name = "TS-XX-IOC-99"

[output]
dir = "/nonexistent/ignored"
"#;
    let config = write_description(dir.path(), description);

    let status = pvlog_gen()
        .arg("--config")
        .arg(&config)
        .arg("--out-dir")
        .arg(&override_dir)
        .status()
        .unwrap();
    assert!(status.success());

    assert!(override_dir.join("TS-XX-IOC-99.blacklist").exists());
    assert!(override_dir.join("access.acf").exists());
    assert!(override_dir.join("st.cmd.pvlog").exists());
}

#[test]
fn explicit_access_file_is_referenced_not_materialized() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("iocBoot");
    let description = format!(
        r#"ioc_name = "TS-XX-IOC-99"
access_file = "/site/security/ioc.acf"

[output]
dir = "{}"
"#,
        out_dir.display()
    );
    let config = write_description(dir.path(), &description);

    let status = pvlog_gen().arg("--config").arg(&config).status().unwrap();
    assert!(status.success());

    assert!(!out_dir.join("access.acf").exists());
    let st_cmd = fs::read_to_string(out_dir.join("st.cmd.pvlog")).unwrap();
    assert!(st_cmd.contains("asSetFilename \"/site/security/ioc.acf\""));
}

// ─── Failure paths ──────────────────────────────────────────────────

#[test]
fn missing_description_exits_nonzero() {
    let status = pvlog_gen()
        .arg("--config")
        .arg("/nonexistent/pvlog.toml")
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(1));
}

#[test]
fn invalid_blacklist_name_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("iocBoot");
    let description = format!(
        r#"ioc_name = "TS-XX-IOC-99"
blacklist = ["BAD NAME"]

[output]
dir = "{}"
"#,
        out_dir.display()
    );
    let config = write_description(dir.path(), &description);

    let status = pvlog_gen().arg("--config").arg(&config).status().unwrap();
    assert_eq!(status.code(), Some(1));
}
