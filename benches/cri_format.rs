use criterion::{criterion_group, criterion_main, Criterion};
use seqfmt::{format_seq, ContainerFormatter, FormatOptions, Native, SeqExt};
use seqfmt::sink::Sink;
use std::io;

fn criterion_benchmark(c: &mut Criterion) {
    let data: Vec<u64> = (0..1_000).collect();
    {
        let mut formatter = ContainerFormatter::new(Sink::owned(io::sink()));
        c.bench_function("cri_format_print_1k", |b| {
            b.iter(|| formatter.print(&data).map(|_| ()));
        });
    }
    {
        let mut formatter = ContainerFormatter::default()
            .with_sink(Sink::owned(io::sink()))
            .with_renderer(|value: &u64| format!("<{value}>"));
        c.bench_function("cri_format_print_rendered_1k", |b| {
            b.iter(|| formatter.print(&data).map(|_| ()));
        });
    }
    {
        let options = FormatOptions::new("\n", "[", "]");
        c.bench_function("cri_format_string_1k", |b| {
            b.iter(|| format_seq(&data, &Native, &options));
        });
    }
    {
        c.bench_function("cri_format_display_1k", |b| {
            b.iter(|| data.iter().display_seq().to_string());
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
