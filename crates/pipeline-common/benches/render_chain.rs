use std::hint::black_box;

use bytes::Bytes;
use criterion::{Criterion, criterion_group, criterion_main};
use media_types::Metadata;
use pipeline_common::{
    Render, RenderPlugin, Renderer, RendererSink, StrategyRenderer, SubtitlePlugin,
    WatermarkPlugin, compose,
};

fn render_chain_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("RenderChain");
    let payload = Bytes::from(vec![0u8; 2048]);

    group.bench_function("bare_renderer", |b| {
        let mut renderer = StrategyRenderer::software();
        renderer.start().unwrap();
        let plugins: Vec<Box<dyn RenderPlugin>> = Vec::new();
        let mut chain = compose(Box::new(RendererSink::new(&mut renderer)), &plugins);
        b.iter(|| {
            let mut metadata = Metadata::new();
            chain.render(black_box(&payload), &mut metadata).unwrap();
        })
    });

    group.bench_function("watermark_subtitle", |b| {
        let mut renderer = StrategyRenderer::software();
        renderer.start().unwrap();
        let plugins: Vec<Box<dyn RenderPlugin>> = vec![
            Box::new(WatermarkPlugin::new("bench")),
            Box::new(SubtitlePlugin::new(["one", "two"]).unwrap()),
        ];
        let mut chain = compose(Box::new(RendererSink::new(&mut renderer)), &plugins);
        b.iter(|| {
            let mut metadata = Metadata::new();
            chain.render(black_box(&payload), &mut metadata).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, render_chain_benchmark);
criterion_main!(benches);
