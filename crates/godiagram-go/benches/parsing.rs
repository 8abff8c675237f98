// Go loader performance benchmarks
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use godiagram_api::{LoadOptions, PackageLoader};
use godiagram_go::{GoLoader, GoLoaderConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn source(package: &str, index: usize) -> String {
    format!(
        r#"
package {package}

import (
    "io"
    "sync"
)

type Store{index} struct {{
    io.Writer
    mu      sync.Mutex
    entries map[string][]byte
    Next    *Store{index}
}}

type Reader{index} interface {{
    Get(key string) ([]byte, error)
}}

func (s *Store{index}) Get(key string) ([]byte, error) {{
    s.mu.Lock()
    defer s.mu.Unlock()
    return s.entries[key], nil
}}

func (s *Store{index}) Put(key string, value []byte) {{
    s.entries[key] = value
}}
"#
    )
}

/// `packages` directories of `files` files each under a single module
fn generate(root: &Path, packages: usize, files: usize) {
    fs::write(root.join("go.mod"), "module example.com/bench\n").unwrap();
    for p in 0..packages {
        let dir = root.join(format!("pkg{p}"));
        fs::create_dir_all(&dir).unwrap();
        for f in 0..files {
            fs::write(dir.join(format!("file{f}.go")), source(&format!("pkg{p}"), f)).unwrap();
        }
    }
}

fn bench_load_directory(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_directory");

    for files in [1, 10, 50].iter() {
        let dir = TempDir::new().unwrap();
        generate(dir.path(), 1, *files);
        let package = dir.path().join("pkg0");

        for parallel in [false, true] {
            let loader = GoLoader::with_config(GoLoaderConfig {
                parallel,
                ..GoLoaderConfig::default()
            });
            let name = if parallel { "parallel" } else { "sequential" };
            group.bench_with_input(BenchmarkId::new(name, files), files, |b, _| {
                b.iter(|| loader.load_directory(black_box(&package)).unwrap());
            });
        }
    }

    group.finish();
}

fn bench_load_module(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    generate(dir.path(), 20, 5);
    let loader = GoLoader::new();
    let options = LoadOptions::new([dir.path()]).recursive(true);

    c.bench_function("load_module_20_packages", |b| {
        b.iter(|| loader.load(black_box(&options)).unwrap());
    });
}

criterion_group!(benches, bench_load_directory, bench_load_module);
criterion_main!(benches);
