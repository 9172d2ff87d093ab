use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;

#[path = "support.rs"]
mod support;

#[test]
fn generate_poms_requires_version_and_target() {
    let root = support::temp_root("cli-usage");
    let output = cargo_bin_cmd!("generate_poms")
        .current_dir(&root)
        .arg("2.17")
        .output()
        .expect("failed to run command");

    assert_eq!(output.status.code(), Some(1));
    assert!(!String::from_utf8_lossy(&output.stderr).is_empty());

    let _ = fs::remove_dir_all(root);
}

#[cfg(unix)]
#[test]
fn generate_poms_writes_into_current_directory() {
    let root = support::temp_root("cli-generate");
    fs::write(root.join("WORKSPACE"), support::WORKSPACE).expect("write workspace");
    let bazel = support::fake_bazel(&root);

    let output = cargo_bin_cmd!("generate_poms")
        .current_dir(&root)
        .env_remove("POMGEN_WORKSPACE")
        .env_remove("POMGEN_OUTPUT_DIR")
        .arg("--bazel")
        .arg(&bazel)
        .arg("2.17")
        .arg("//java/dagger:core")
        .output()
        .expect("failed to run command");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let pom = fs::read_to_string(root.join("dagger.pom.xml")).expect("pom written");
    assert!(pom.contains("<groupId>com.google.guava</groupId>"));
    assert!(pom.contains("<groupId>javax.inject</groupId>"));

    let _ = fs::remove_dir_all(root);
}

#[cfg(unix)]
#[test]
fn generate_poms_fails_on_unknown_target() {
    let root = support::temp_root("cli-unknown");
    fs::write(root.join("WORKSPACE"), support::WORKSPACE).expect("write workspace");
    let bazel = support::fake_bazel(&root);

    let output = cargo_bin_cmd!("generate_poms")
        .current_dir(&root)
        .env("POMGEN_BAZEL", &bazel)
        .arg("2.17")
        .arg("//not:published")
        .output()
        .expect("failed to run command");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("//not:published"));

    let _ = fs::remove_dir_all(root);
}

#[cfg(unix)]
#[test]
fn generate_poms_honors_path_flags() {
    let root = support::temp_root("cli-flags");
    let conf = root.join("conf");
    let out = root.join("out");
    let cwd = root.join("cwd");
    for dir in [&conf, &out, &cwd] {
        fs::create_dir_all(dir).expect("create dir");
    }
    fs::write(conf.join("WORKSPACE.bazel"), support::WORKSPACE).expect("write workspace");
    fs::write(
        conf.join("metadata.json"),
        r#"{
            "//java/dagger:core": {
                "name": "Dagger Core",
                "artifact": "dagger-core-custom"
            }
        }"#,
    )
    .expect("write metadata");
    let bazel = support::fake_bazel(&root);

    let output = cargo_bin_cmd!("generate_poms")
        .current_dir(&cwd)
        .env_remove("POMGEN_WORKSPACE")
        .env_remove("POMGEN_OUTPUT_DIR")
        .arg("--workspace")
        .arg(conf.join("WORKSPACE.bazel"))
        .arg("--metadata")
        .arg(conf.join("metadata.json"))
        .arg("--output-dir")
        .arg(&out)
        .arg("--bazel")
        .arg(&bazel)
        .arg("2.17")
        .arg("//java/dagger:core")
        .output()
        .expect("failed to run command");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let pom = fs::read_to_string(out.join("dagger-core-custom.pom.xml")).expect("pom written");
    assert!(pom.contains("<artifactId>dagger-core-custom</artifactId>"));
    assert!(pom.contains("<name>Dagger Core</name>"));
    assert!(pom.contains("<groupId>com.google.guava</groupId>"));
    assert_eq!(fs::read_dir(&cwd).expect("read cwd").count(), 0);

    let _ = fs::remove_dir_all(root);
}

#[cfg(unix)]
#[test]
fn output_dir_flag_beats_environment() {
    let root = support::temp_root("cli-precedence");
    let from_env = root.join("from-env");
    let from_flag = root.join("from-flag");
    fs::create_dir_all(&from_env).expect("create env dir");
    fs::create_dir_all(&from_flag).expect("create flag dir");
    fs::write(root.join("WORKSPACE"), support::WORKSPACE).expect("write workspace");
    let bazel = support::fake_bazel(&root);

    let output = cargo_bin_cmd!("generate_poms")
        .current_dir(&root)
        .env_remove("POMGEN_WORKSPACE")
        .env("POMGEN_BAZEL", &bazel)
        .env("POMGEN_OUTPUT_DIR", &from_env)
        .arg("--output-dir")
        .arg(&from_flag)
        .arg("2.17")
        .arg("//java/dagger:core")
        .output()
        .expect("failed to run command");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(from_flag.join("dagger.pom.xml").exists());
    assert!(!from_env.join("dagger.pom.xml").exists());

    let _ = fs::remove_dir_all(root);
}

#[cfg(unix)]
#[test]
fn output_dir_comes_from_environment_without_flag() {
    let root = support::temp_root("cli-env-output");
    let from_env = root.join("from-env");
    fs::create_dir_all(&from_env).expect("create env dir");
    fs::write(root.join("WORKSPACE"), support::WORKSPACE).expect("write workspace");
    let bazel = support::fake_bazel(&root);

    cargo_bin_cmd!("generate_poms")
        .current_dir(&root)
        .env_remove("POMGEN_WORKSPACE")
        .env("POMGEN_BAZEL", &bazel)
        .env("POMGEN_OUTPUT_DIR", &from_env)
        .arg("2.17")
        .arg("//java/dagger:core")
        .assert()
        .success();

    assert!(from_env.join("dagger.pom.xml").exists());
    assert!(!root.join("dagger.pom.xml").exists());

    let _ = fs::remove_dir_all(root);
}

#[test]
fn check_sha1_reports_offenders() {
    let root = support::temp_root("cli-sha1");
    let workspace = root.join("WORKSPACE");
    fs::write(
        &workspace,
        "maven_jar(name = \"pinned\", artifact = \"a:b:1\", sha1 = \"x\")\n\
         maven_jar(name = \"loose\", artifact = \"a:c:1\")\n",
    )
    .expect("write workspace");

    let output = cargo_bin_cmd!("check_sha1")
        .env("NO_COLOR", "1")
        .arg("--workspace")
        .arg(&workspace)
        .output()
        .expect("failed to run command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("loose"));
    assert!(!stderr.contains("  pinned"));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn check_sha1_passes_on_pinned_workspace() {
    let root = support::temp_root("cli-sha1-ok");
    let workspace = root.join("WORKSPACE");
    fs::write(&workspace, support::WORKSPACE).expect("write workspace");

    cargo_bin_cmd!("check_sha1")
        .arg("--workspace")
        .arg(&workspace)
        .assert()
        .success();

    let _ = fs::remove_dir_all(root);
}

#[test]
fn read_pom_prints_field() {
    let root = support::temp_root("cli-read-pom");
    let pom = root.join("pom.xml");
    fs::write(
        &pom,
        "<project><artifactId>dagger</artifactId><version>2.17</version></project>",
    )
    .expect("write pom");

    let output = cargo_bin_cmd!("read_pom")
        .arg(&pom)
        .arg("version")
        .output()
        .expect("failed to run command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "2.17");

    let _ = fs::remove_dir_all(root);
}
