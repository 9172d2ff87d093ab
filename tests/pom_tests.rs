use pomgen::{
    ReleaseError,
    coordinate::{Coordinate, sort_coordinates},
    metadata::ArtifactMetadata,
    pom::{dependency_block, generate_pom, pom_file_name},
};

fn metadata(name: &str, artifact: &str) -> ArtifactMetadata {
    ArtifactMetadata::builder().name(name).artifact(artifact).build()
}

#[test]
fn coordinates_need_three_to_five_fields() {
    let three: Coordinate = "g:a:1".parse().expect("3 fields");
    assert_eq!(three, Coordinate::new("g", "a", "1"));

    let five: Coordinate = "g:a:1:jar:sources".parse().expect("5 fields");
    assert_eq!(five.packaging.as_deref(), Some("jar"));
    assert_eq!(five.classifier.as_deref(), Some("sources"));
    assert_eq!(five.to_string(), "g:a:1:jar:sources");

    for bad in ["g:a", "g:a:1:jar:sources:extra", "g::1", ""] {
        assert_eq!(
            bad.parse::<Coordinate>(),
            Err(ReleaseError::InvalidCoordinate(bad.to_string())),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn project_group_sorts_first() {
    let sorted = sort_coordinates(
        [
            "javax.inject:javax.inject:1",
            "com.google.dagger:dagger-spi:2.0",
            "com.google.guava:guava:25.0",
            "com.google.dagger:dagger:2.0",
            "com.google.guava:guava:25.0",
        ],
        "com.google.dagger",
    );

    assert_eq!(
        sorted,
        vec![
            "com.google.dagger:dagger-spi:2.0",
            "com.google.dagger:dagger:2.0",
            "com.google.guava:guava:25.0",
            "javax.inject:javax.inject:1",
        ]
    );
}

#[test]
fn three_field_block_has_no_type_or_classifier() {
    let block = dependency_block(&"g:a:1".parse().expect("coordinate"));
    assert!(block.contains("<groupId>g</groupId>"));
    assert!(block.contains("<artifactId>a</artifactId>"));
    assert!(block.contains("<version>1</version>"));
    assert!(!block.contains("<type>"));
    assert!(!block.contains("<classifier>"));
}

#[test]
fn five_field_block_has_type_and_classifier() {
    let block = dependency_block(&"g:a:1:jar:sources".parse().expect("coordinate"));
    assert!(block.contains("<type>jar</type>"));
    assert!(block.contains("<classifier>sources</classifier>"));
}

#[test]
fn four_field_block_has_type_only() {
    let block = dependency_block(&"g:a:1:aar".parse().expect("coordinate"));
    assert!(block.contains("<type>aar</type>"));
    assert!(!block.contains("<classifier>"));
}

#[test]
fn single_dependency_pom() {
    let target: Coordinate = "com.google.dagger:x:1.0".parse().expect("coordinate");
    let pom = generate_pom(
        &target,
        &metadata("X", "x"),
        vec!["com.google.dagger:dagger:1.0".to_string()],
        "1.0",
    )
    .expect("render");

    assert_eq!(pom.matches("<dependency>").count(), 1);
    assert!(pom.contains(
        "    <dependency>\n      <groupId>com.google.dagger</groupId>\n      \
         <artifactId>dagger</artifactId>\n      <version>1.0</version>\n    </dependency>"
    ));
    assert!(pom.contains("  <artifactId>x</artifactId>\n"));
    assert!(pom.contains("  <version>1.0</version>\n"));
    assert!(pom.contains("<name>X</name>"));
    assert!(pom.contains("<packaging>jar</packaging>"));
    assert!(pom.contains("<modelVersion>4.0.0</modelVersion>"));
    assert!(pom.contains("<artifactId>oss-parent</artifactId>"));
}

#[test]
fn manual_dependencies_are_merged_with_version() {
    let target: Coordinate = "com.google.dagger:dagger-gwt:2.5".parse().expect("coordinate");
    let meta = ArtifactMetadata::builder()
        .name("Dagger GWT")
        .artifact("dagger-gwt")
        .manual_dependencies(vec!["com.google.dagger:dagger:{version}:jar:sources".into()])
        .build();

    let pom = generate_pom(
        &target,
        &meta,
        vec!["javax.inject:javax.inject:1".to_string()],
        "2.5",
    )
    .expect("render");

    assert_eq!(pom.matches("<dependency>").count(), 2);
    assert!(pom.contains("<classifier>sources</classifier>"));
    assert!(!pom.contains("{version}"));

    let dagger = pom.find("<artifactId>dagger</artifactId>").expect("dagger dep");
    let inject = pom.find("<artifactId>javax.inject</artifactId>").expect("inject dep");
    assert!(dagger < inject, "project group sorts first");
}

#[test]
fn values_are_xml_escaped() {
    let target: Coordinate = "com.google.dagger:x:1.0".parse().expect("coordinate");
    let pom = generate_pom(&target, &metadata("X & Y", "x"), Vec::new(), "1.0").expect("render");
    assert!(pom.contains("<name>X &amp; Y</name>"));
    assert_eq!(pom.matches("<dependency>").count(), 0);
}

#[test]
fn invalid_dependency_fails_rendering() {
    let target: Coordinate = "com.google.dagger:x:1.0".parse().expect("coordinate");
    let err = generate_pom(&target, &metadata("X", "x"), vec!["bad".to_string()], "1.0")
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<ReleaseError>(),
        Some(&ReleaseError::InvalidCoordinate("bad".into()))
    );
}

#[test]
fn file_name_follows_artifact() {
    assert_eq!(pom_file_name(&metadata("X", "x")), "x.pom.xml");
}
