#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Default name of the build-configuration file.
pub const WORKSPACE_FILE: &str = "WORKSPACE";

/// Rule that declares a third-party jar in the build-configuration file.
pub const MAVEN_JAR_RULE: &str = "maven_jar";

/// Maven group the project publishes under. Sorted first in dependency lists.
pub const PROJECT_GROUP: &str = "com.google.dagger";

/// Label prefix of internal targets that only re-export third-party jars.
pub const AGGREGATION_PREFIX: &str = "//third_party";

/// Tag marking a dependency as needed at compile time only.
pub const COMPILE_ONLY_TAG: &str = "maven:compile_only";

/// The JDK target every Java rule depends on implicitly.
pub const JDK_LABEL: &str = "@local_jdk//:jdk";

/// Build tool binary looked up on `PATH` when none is configured.
pub const BAZEL_BINARY: &str = "bazel";

/// Placeholder substituted with the release version in manual dependencies.
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Labels under the Android SDK repository, e.g.
/// `@androidsdk//com.android.support:support-annotations-25.0.0`.
/// * group 1: maven group
/// * group 2: artifact id
/// * group 3: version
pub const SDK_LABEL_PATTERN: &str = r"^@androidsdk//([\w.]+):([\w.-]+?)-(\d[\w.-]*)$";

/// Tree-sitter query that returns every call whose callee is a bare
/// identifier.
/// * `rule`: the callee identifier
/// * `args`: the argument list
pub const RULE_CALL_QUERY: &str = include_str!("queries/rule_call.scm");

