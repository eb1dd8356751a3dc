// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_folio::domain::ui::LayoutClass;
use iced_folio::ui::motion::{Animator, MotionScope};
use iced_folio::ui::sections::catalog::Catalog;
use iced_folio::ui::sections::{all_presenters, RenderContext, SectionRender};
use iced_folio::ui::theming::ThemeMode;
use std::hint::black_box;
use std::path::Path;
use std::time::{Duration, Instant};

fn render_all(catalog: &Catalog, layout: LayoutClass) -> Vec<SectionRender> {
    all_presenters()
        .iter()
        .map(|presenter| {
            presenter.render(&RenderContext {
                theme: ThemeMode::Light,
                layout,
                revealed: true,
                content: catalog,
                assets: Path::new("assets/public"),
                seed: 42,
            })
        })
        .collect()
}

fn section_render_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("section_render");
    let (catalog, _) = Catalog::embedded();

    group.bench_function("wide", |b| {
        b.iter(|| black_box(render_all(&catalog, LayoutClass::WIDE)));
    });
    group.bench_function("compact", |b| {
        b.iter(|| black_box(render_all(&catalog, LayoutClass::COMPACT)));
    });

    group.finish();
}

fn animator_sampling_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("animator");
    let (catalog, _) = Catalog::embedded();
    let renders = render_all(&catalog, LayoutClass::WIDE);
    let start = Instant::now();

    let mut animator = Animator::new();
    for (presenter, render) in all_presenters().iter().zip(&renders) {
        animator.sync(
            MotionScope::Section(presenter.id()),
            &render.motions,
            true,
            start,
        );
    }
    let keys: Vec<_> = renders
        .iter()
        .flat_map(|render| render.motions.iter().map(|motion| motion.key()))
        .collect();

    group.bench_function("sample_every_key", |b| {
        let now = start + Duration::from_millis(1_750);
        b.iter(|| {
            for key in &keys {
                black_box(animator.sample_or_rest(*key, now));
            }
        });
    });

    group.bench_function("advance_frame", |b| {
        let mut frame = animator.clone();
        let mut now = start;
        b.iter(|| {
            now += Duration::from_millis(16);
            frame.advance(black_box(now));
        });
    });

    group.finish();
}

criterion_group!(benches, section_render_benchmark, animator_sampling_benchmark);
criterion_main!(benches);
