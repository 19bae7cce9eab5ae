use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use flatclass::artifact::ProgramArtifact;
use flatclass::ast::{ClassDeclaration, CompilationUnit};
use flatclass::lowering::{LoweringOptions, lower};

/// `depth` chained classes, each adding one field, one override and one new
/// virtual method.
fn chain(depth: usize) -> CompilationUnit {
    let mut unit = CompilationUnit::new("bench");
    for level in 0..depth {
        let name = format!("C{level}");
        let mut class = ClassDeclaration::new(&name)
            .field(&["protected"], "int", &format!("f{level}"))
            .method(&["public"], Some("int"), "area", &[])
            .method(&["public"], None, &format!("step{level}"), &[("int", "n")]);
        if level > 0 {
            class = class.extends(&format!("C{}", level - 1));
        }
        unit = unit.with_class(class);
    }
    unit
}

/// One root with `width` direct subclasses, declared before their parent.
fn fan(width: usize) -> CompilationUnit {
    let mut unit = CompilationUnit::new("bench");
    for index in 0..width {
        unit = unit.with_class(
            ClassDeclaration::new(&format!("Leaf{index}"))
                .extends("Base")
                .method(&["public"], Some("String"), "toString", &[]),
        );
    }
    unit.with_class(
        ClassDeclaration::new("Base")
            .field(&["public"], "double", "weight")
            .method(&["public"], Some("String"), "describe", &[]),
    )
}

fn bench_lowering(c: &mut Criterion) {
    let options = LoweringOptions::default();
    let mut group = c.benchmark_group("lower");
    for depth in [8usize, 64, 256] {
        let unit = chain(depth);
        group.bench_with_input(BenchmarkId::new("chain", depth), &unit, |b, unit| {
            b.iter(|| black_box(lower(black_box(unit), &options).expect("chain lowers")));
        });
    }
    let unit = fan(512);
    group.bench_function("fan_512", |b| {
        b.iter(|| black_box(lower(black_box(&unit), &options).expect("fan lowers")));
    });
    group.finish();

    let program = lower(&chain(64), &options).expect("chain lowers");
    c.bench_function("artifact_json_chain_64", |b| {
        b.iter(|| {
            let json = ProgramArtifact::new(black_box(&program))
                .to_pretty_json()
                .expect("artifact serializes");
            black_box(json);
        })
    });
}

criterion_group!(lowering, bench_lowering);
criterion_main!(lowering);
