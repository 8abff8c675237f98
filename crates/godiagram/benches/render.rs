use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use godiagram::{classify, ClassDiagram, Relations, RenderingOptions};
use godiagram_api::{
    GoType, InterfaceMethod, MethodDecl, PackageRef, Param, SemanticPackage, Signature,
    StructField, TypeObject,
};

fn method_signature(i: usize) -> Signature {
    Signature::new(
        vec![Param::new("n", GoType::basic("int"))],
        vec![Param::unnamed(GoType::basic(if i % 2 == 0 { "string" } else { "error" }))],
    )
}

/// `packages` packages, each with `types` structs and `types / 2` interfaces
fn generate(packages: usize, types: usize) -> Vec<SemanticPackage> {
    (0..packages)
        .map(|p| {
            let path = format!("example.com/gen/pkg{p}");
            let next = PackageRef::new(
                format!("pkg{}", (p + 1) % packages),
                format!("example.com/gen/pkg{}", (p + 1) % packages),
            );
            let mut pkg = SemanticPackage::new(format!("pkg{p}"), path);

            for t in 0..types {
                let fields = vec![
                    StructField::new("ID", GoType::basic("int")),
                    StructField::new(
                        "peer",
                        GoType::pointer(GoType::named(format!("Type{}", (t + 1) % types), next.clone())),
                    ),
                    StructField::new("tags", GoType::map(GoType::basic("string"), GoType::basic("bool"))),
                ];
                pkg = pkg
                    .with_object(TypeObject::defined(format!("Type{t}"), GoType::Struct { fields }))
                    .with_method(MethodDecl::new(format!("Type{t}"), format!("M{}", t % 4), method_signature(t)))
                    .with_method(MethodDecl::new(format!("Type{t}"), format!("M{}", (t + 1) % 4), method_signature(t + 1)));
            }
            for i in 0..types / 2 {
                pkg = pkg.with_object(TypeObject::defined(
                    format!("Iface{i}"),
                    GoType::Interface {
                        methods: vec![InterfaceMethod::new(format!("M{}", i % 4), method_signature(i))],
                        embeddeds: vec![],
                    },
                ));
            }
            pkg
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for size in [10, 50, 200].iter() {
        let relations = Relations::from_packages(&generate(*size / 10 + 1, *size));
        group.bench_with_input(BenchmarkId::new("implements", size), size, |b, _| {
            b.iter(|| black_box(classify(&relations)));
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for size in [10, 50, 200].iter() {
        let diagram = ClassDiagram::from_packages(&generate(*size / 10 + 1, *size), RenderingOptions::default());
        group.bench_with_input(BenchmarkId::new("class_diagram", size), size, |b, _| {
            b.iter(|| black_box(diagram.render()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_render);
criterion_main!(benches);
