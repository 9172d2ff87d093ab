#![allow(dead_code)]

use std::{fs, path::PathBuf};

use uuid::Uuid;

/// Creates a fresh, empty directory under the system temp dir.
pub fn temp_root(tag: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("pomgen-{tag}-{}", Uuid::new_v4()));
    fs::create_dir_all(&root).expect("create temp root");
    root
}

/// Workspace used across the integration tests.
pub const WORKSPACE: &str = r#"
workspace(name = "dagger")

maven_jar(
    name = "com_google_guava_guava",
    artifact = "com.google.guava:guava:25.0-jre",
    sha1 = "7319c34fa5866a85b6bad445adad69d402323129",
)

maven_jar(
    name = "javax_inject_javax_inject",
    artifact = "javax.inject:javax.inject:1",
    sha1 = "6975da39a7040257bd51d21a231b76c915872d38",
)
"#;

/// Writes an executable shell script that answers `bazel query` for a
/// `//java/dagger:core` target depending on guava (through an aggregate) and
/// javax.inject.
#[cfg(unix)]
pub fn fake_bazel(dir: &std::path::Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = r#"#!/bin/sh
[ "$1" = "query" ] || exit 2
case "$2" in
  *"labels(exports, //third_party:guava)"*)
    echo "@com_google_guava_guava//jar:jar"
    ;;
  *"labels(deps, //java/dagger:core)"*)
    echo "//third_party:guava"
    echo "@javax_inject_javax_inject//jar"
    ;;
  *"labels(deps, //broken:target)"*)
    echo "oops" >&2
    exit 7
    ;;
esac
exit 0
"#;
    let path = dir.join("fake-bazel.sh");
    fs::write(&path, script).expect("write fake bazel");
    let mut perms = fs::metadata(&path).expect("stat fake bazel").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("chmod fake bazel");
    path
}
