//! Schema parsing and code generation benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use xsdgen_bench::synthetic_schema;
use xsdgen_codegen::{Generator, GeneratorConfig};
use xsdgen_core::Language;
use xsdgen_schema::{TypeResolver, parse_schema};

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_schema");

    for types in [10, 100] {
        let xsd = synthetic_schema(types);
        group.throughput(Throughput::Bytes(xsd.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(types), &xsd, |b, xsd| {
            b.iter(|| parse_schema(black_box(xsd)))
        });
    }

    group.finish();
}

fn benchmark_generate(c: &mut Criterion) {
    let tree = parse_schema(&synthetic_schema(100)).expect("synthetic schema parses");
    let generator =
        Generator::new(&tree, GeneratorConfig::default()).expect("non-strict generator");

    let mut group = c.benchmark_group("generate");
    group.throughput(Throughput::Elements(tree.len() as u64));
    for language in Language::ALL {
        group.bench_function(language.name(), |b| {
            b.iter(|| generator.generate(black_box(language)))
        });
    }
    group.finish();
}

fn benchmark_resolve(c: &mut Criterion) {
    let tree = parse_schema(&synthetic_schema(100)).expect("synthetic schema parses");
    let resolver = TypeResolver::new(&tree);

    c.bench_function("resolve_builtin", |b| {
        b.iter(|| resolver.field_type(black_box("xs:decimal"), Language::Java))
    });

    c.bench_function("resolve_declared", |b| {
        b.iter(|| resolver.field_type(black_box("tns:Code99"), Language::Go))
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_generate,
    benchmark_resolve
);
criterion_main!(benches);
