use pomgen::{ReleaseError, checksum::check_sha1, workspace::Workspace};

#[path = "support.rs"]
mod support;

#[test]
fn passes_when_every_declaration_has_sha1() {
    let workspace = Workspace::parse(support::WORKSPACE).expect("workspace should parse");
    check_sha1(&workspace).expect("all declarations pin a sha1");
}

#[test]
fn passes_on_a_workspace_without_jars() {
    let workspace = Workspace::parse("workspace(name = \"empty\")\n").expect("parse");
    check_sha1(&workspace).expect("nothing to check");
}

#[test]
fn names_exactly_the_declarations_missing_sha1() {
    let source = r#"
maven_jar(name = "first", artifact = "g:first:1")
maven_jar(name = "pinned", artifact = "g:pinned:1", sha1 = "abc")
maven_jar(name = "second", artifact = "g:second:1")
"#;
    let workspace = Workspace::parse(source).expect("workspace should parse");

    assert_eq!(
        workspace.missing_checksums().expect("scan"),
        vec!["first".to_string(), "second".to_string()]
    );

    let err = check_sha1(&workspace).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ReleaseError>(),
        Some(&ReleaseError::MissingChecksums(vec!["first".into(), "second".into()]))
    );
    assert_eq!(err.to_string(), "Missing sha1 for: first, second");
}
