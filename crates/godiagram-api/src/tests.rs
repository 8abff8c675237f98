//! Tests for the semantic model, loader defaults and utilities

use crate::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

struct ListingLoader;

impl PackageLoader for ListingLoader {
    fn name(&self) -> &str {
        "listing"
    }

    fn load_directory(&self, dir: &Path) -> LoadResult<Vec<SemanticPackage>> {
        let name = dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("root")
            .to_string();
        Ok(vec![SemanticPackage::new(name, dir.display().to_string())])
    }

    fn metrics(&self) -> LoadMetrics {
        LoadMetrics::default()
    }

    fn reset_metrics(&mut self) {}
}

fn make_tree() -> tempfile::TempDir {
    let temp = tempfile::TempDir::new().unwrap();
    for dir in [
        "app",
        "app/store",
        "app/.git",
        "app/vendor/dep",
        "app/testdata",
        "app/_scratch",
        "app/internal/cache",
    ] {
        fs::create_dir_all(temp.path().join(dir)).unwrap();
    }
    fs::write(temp.path().join("app/main.go"), "package main\n").unwrap();
    temp
}

fn relative(root: &Path, dirs: &[PathBuf]) -> Vec<String> {
    dirs.iter()
        .map(|d| {
            d.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn test_package_builder() {
    let pkg = SemanticPackage::new("store", "example.com/app/store")
        .with_import(Import::new("io", "io"))
        .with_object(TypeObject::alias("ID", GoType::basic("string")))
        .with_method(
            MethodDecl::new("Cache", "Reset", Signature::default()).with_pointer_receiver(),
        );

    assert_eq!(pkg.imports.len(), 1);
    assert!(pkg.objects[0].alias);
    assert!(pkg.methods[0].pointer_receiver);
    assert_eq!(
        pkg.package_ref(),
        PackageRef::new("store", "example.com/app/store")
    );
}

#[test]
fn test_go_type_shapes() {
    assert!(GoType::Struct { fields: vec![] }.is_struct());
    assert!(GoType::Interface {
        methods: vec![],
        embeddeds: vec![]
    }
    .is_interface());
    assert!(!GoType::slice(GoType::basic("int")).is_struct());
}

#[test]
fn test_json_document() {
    let source = r#"[
        {
            "name": "shop",
            "path": "example.com/shop",
            "imports": [{"path": "example.com/shop/item", "name": "item"}],
            "objects": [
                {
                    "name": "Cart",
                    "underlying": {
                        "kind": "struct",
                        "fields": [
                            {"name": "items", "ty": {"kind": "slice", "elem": {"kind": "named", "name": "Item", "package": {"name": "item", "path": "example.com/shop/item"}}}},
                            {"name": "Writer", "ty": {"kind": "named", "name": "Writer", "package": {"name": "io", "path": "io"}}, "embedded": true}
                        ]
                    }
                },
                {"name": "Total", "alias": true, "underlying": {"kind": "basic", "name": "int"}}
            ],
            "methods": [
                {
                    "receiver": "Cart",
                    "pointer_receiver": true,
                    "name": "Add",
                    "signature": {"params": [{"name": "i", "ty": {"kind": "named", "name": "Item", "package": {"name": "item", "path": "example.com/shop/item"}}}]}
                }
            ]
        }
    ]"#;

    let packages = json::from_str(source).unwrap();
    assert_eq!(packages.len(), 1);

    let shop = &packages[0];
    assert_eq!(shop.objects.len(), 2);
    match &shop.objects[0].underlying {
        GoType::Struct { fields } => {
            assert_eq!(fields.len(), 2);
            assert!(!fields[0].embedded);
            assert!(fields[1].embedded);
        }
        other => panic!("expected struct, got {other:?}"),
    }
    assert!(shop.objects[1].alias);
    assert!(shop.methods[0].signature.results.is_empty());
}

#[test]
fn test_json_rejects_unknown_kind() {
    let err = json::from_str(r#"[{"name": "a", "path": "a", "objects": [{"name": "X", "underlying": {"kind": "union"}}]}]"#)
        .unwrap_err();
    assert!(matches!(err, LoadError::Json(_, _)));
}

#[test]
fn test_json_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("model.json");
    let packages = vec![SemanticPackage::new("a", "example.com/a")];
    fs::write(&path, json::to_string_pretty(&packages).unwrap()).unwrap();

    assert_eq!(json::from_path(&path).unwrap(), packages);
    assert!(matches!(
        json::from_path(&temp.path().join("missing.json")),
        Err(LoadError::IoError(_, _))
    ));
}

#[test]
fn test_load_options_builder() {
    let options = LoadOptions::new(["a", "b"])
        .recursive(true)
        .with_ignored(["a/skip"]);

    assert_eq!(options.directories.len(), 2);
    assert!(options.recursive);
    assert!(options.is_ignored(Path::new("a/skip")));
    assert!(!options.is_ignored(Path::new("a")));
}

#[test]
fn test_discover_non_recursive() {
    let temp = make_tree();
    let root = temp.path().join("app");
    let options = LoadOptions::new([root.clone()]);

    let dirs = ListingLoader.discover_directories(&options).unwrap();
    assert_eq!(dirs, vec![root]);
}

#[test]
fn test_discover_recursive_skips_hidden_and_vendor() {
    let temp = make_tree();
    let options = LoadOptions::new([temp.path().join("app")]).recursive(true);

    let dirs = ListingLoader.discover_directories(&options).unwrap();
    assert_eq!(
        relative(temp.path(), &dirs),
        vec!["app", "app/internal", "app/internal/cache", "app/store"]
    );
}

#[test]
fn test_discover_recursive_ignores_subtree() {
    let temp = make_tree();
    let options = LoadOptions::new([temp.path().join("app")])
        .recursive(true)
        .with_ignored([temp.path().join("app/internal")]);

    let dirs = ListingLoader.discover_directories(&options).unwrap();
    assert_eq!(relative(temp.path(), &dirs), vec!["app", "app/store"]);
}

#[test]
fn test_discover_missing_directory() {
    let temp = make_tree();
    let options = LoadOptions::new([temp.path().join("nope")]);

    let err = ListingLoader.discover_directories(&options).unwrap_err();
    assert!(matches!(err, LoadError::DirectoryNotFound(_)));
}

#[test]
fn test_default_load_visits_every_directory() {
    let temp = make_tree();
    let options = LoadOptions::new([temp.path().join("app")]).recursive(true);

    let packages = ListingLoader.load(&options).unwrap();
    let names: Vec<_> = packages.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["app", "internal", "cache", "store"]);
}

#[test]
fn test_metrics_merge() {
    let mut metrics = LoadMetrics {
        files_attempted: 4,
        files_succeeded: 3,
        files_failed: 1,
        total_parse_time: Duration::from_millis(30),
        ..Default::default()
    };
    let other = LoadMetrics {
        files_attempted: 1,
        files_succeeded: 1,
        packages_loaded: 2,
        ..Default::default()
    };

    metrics.merge(&other);

    assert_eq!(metrics.files_attempted, 5);
    assert_eq!(metrics.packages_loaded, 2);
    assert!((metrics.success_rate() - 0.8).abs() < f64::EPSILON);
    assert_eq!(metrics.avg_parse_time(), Duration::from_millis(7) + Duration::from_micros(500));
}

#[test]
fn test_metrics_empty() {
    let metrics = LoadMetrics::default();
    assert_eq!(metrics.success_rate(), 0.0);
    assert_eq!(metrics.avg_parse_time(), Duration::ZERO);
}

#[test]
fn test_error_messages() {
    let err = LoadError::SyntaxError(PathBuf::from("a.go"), 3, 7, "unexpected }".to_string());
    assert_eq!(err.to_string(), "Syntax error in a.go:3:7: unexpected }");

    let err = LoadError::MixedPackages(PathBuf::from("pkg"), "a".to_string(), "b".to_string());
    assert_eq!(err.to_string(), "Found packages a and b in pkg");
}
