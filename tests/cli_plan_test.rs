//! inspect / plan integration tests against the bundled fixture export

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

const SITE: &str = "tests/fixtures/site.wxr.xml";

fn wxr_import() -> Command {
    let mut cmd = Command::cargo_bin("wxr-import").unwrap();
    cmd.env_remove("WXR_IMPORT_CONFIG")
        .env_remove("WXR_IMPORT_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn plan_json(args: &[&str]) -> serde_json::Value {
    let output = wxr_import()
        .args(["plan", SITE])
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

fn group_kinds(plan: &serde_json::Value) -> Vec<String> {
    plan["groups"]
        .as_array()
        .unwrap()
        .iter()
        .map(|group| group["kind"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_inspect_table_shows_counts() {
    wxr_import()
        .args(["inspect", SITE])
        .assert()
        .success()
        .stdout(predicate::str::contains("Menu items"))
        .stdout(predicate::str::contains("Attachments"));
}

#[test]
fn test_inspect_json_is_the_bundle() {
    let output = wxr_import()
        .args(["inspect", SITE, "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let bundle: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(bundle["posts"].as_array().unwrap().len(), 2);
    assert_eq!(bundle["menus"][0]["name"], "Primary");
}

#[test]
fn test_plan_groups_in_execution_order() {
    let plan = plan_json(&[]);

    assert_eq!(
        group_kinds(&plan),
        vec!["tags", "categories", "posts", "pages", "authors", "menu-items", "menus"]
    );
    assert_eq!(
        plan["groups"][0]["requests"][0]["resource"],
        "/apis/content.halo.run/v1alpha1/tags"
    );
}

#[test]
fn test_plan_only_selects_kinds() {
    let plan = plan_json(&["--only", "menus", "--only", "tags"]);

    assert_eq!(group_kinds(&plan), vec!["tags", "menu-items", "menus"]);
}

#[test]
fn test_plan_config_remaps_menu_targets() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "include = [\"menus\"]\n\n[remap.pages]\n\"7\" = \"about\"").unwrap();

    let plan = plan_json(&["--config", config.path().to_str().unwrap()]);

    let item = &plan["groups"][0]["requests"][0]["payload"];
    assert_eq!(item["metadata"]["name"], "30");
    assert_eq!(item["spec"]["targetRef"]["kind"], "SinglePage");
    assert_eq!(item["spec"]["targetRef"]["name"], "about");
}

#[test]
fn test_plan_table_summary() {
    wxr_import()
        .args(["plan", SITE, "--format", "table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("request(s) in 7 group(s)"));
}

#[test]
fn test_missing_file_is_io001() {
    wxr_import()
        .args(["plan", "does-not-exist.xml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error[IO001]"));
}

#[test]
fn test_malformed_document_is_xml001() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "<rss><channel><item></channel></rss>").unwrap();

    wxr_import()
        .args(["inspect", file.path().to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error[XML001]"));
}

#[test]
fn test_invalid_config_is_cfg001() {
    let mut config = NamedTempFile::new().unwrap();
    write!(config, "include = [\"comments\"]").unwrap();

    wxr_import()
        .args(["plan", SITE, "--config", config.path().to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error[CFG001]"));
}
