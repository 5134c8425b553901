use criterion::{black_box, criterion_group, criterion_main, Criterion};

use amd_resolve::config::{AmdConfig, PackageConfig, ShimConfig};
use amd_resolve::{Bootstrap, ModuleResolver};

fn config() -> AmdConfig {
    let mut config = AmdConfig::default()
        .with_base_url("static/scripts")
        .with_shim(ShimConfig::exporting("angular", "angular"))
        .with_plugin("cs", "coffee");
    for i in 0..200 {
        config = config
            .with_path(&format!("lib{i}"), &format!("../bower_components/lib{i}/lib{i}"))
            .with_package(PackageConfig::new(
                &format!("pkg{i}"),
                &format!("../bower_components/pkg{i}"),
                "index",
            ));
    }
    config.with_package(PackageConfig::new("cs", "../bower_components/require-cs", "cs"))
}

fn bench(c: &mut Criterion) {
    let config = config();
    let resolver = ModuleResolver::try_new(&config).unwrap();

    c.bench_function("resolve_alias", |b| b.iter(|| resolver.resolve(black_box("lib150"))));
    c.bench_function("resolve_package_subpath", |b| {
        b.iter(|| resolver.resolve(black_box("pkg150/views/home")))
    });
    c.bench_function("resolve_base_url", |b| {
        b.iter(|| resolver.resolve(black_box("controllers/home")))
    });
    c.bench_function("plan_plugin_entry", |b| {
        b.iter(|| Bootstrap::new(&resolver).plan(black_box("cs!main")))
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
