//! Edge dispatch micro-benchmarks
//!
//! Measures the cost of parsing raw style values and applying them to bound
//! nodes, against both the recording handle and a real `taffy` tree.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use quire::layout::{RecordingHandle, SharedHandle, TaffyEngine, apply_box_styles, set_margin};
use quire::style::Style;
use quire::{LayoutConfig, Node, NodeKind, StyleValue};
use std::hint::black_box;
use std::rc::Rc;

fn bench_parse_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_style_value");
    for raw in ["50", "50%", "auto", "12.5mm"] {
        group.bench_with_input(BenchmarkId::from_parameter(raw), raw, |b, raw| {
            b.iter(|| black_box(raw.parse::<StyleValue>()))
        });
    }
    group.finish();
}

fn bench_all_edges(c: &mut Criterion) {
    let handle: SharedHandle = Rc::new(RecordingHandle::new());
    let recorded = Node::new(NodeKind::View).with_engine(handle);

    let engine = TaffyEngine::new(LayoutConfig::default());
    let mut bound = Node::new(NodeKind::View);
    engine.bind(&mut bound).expect("bind benchmark node");

    let mut group = c.benchmark_group("set_margin_all_edges");
    for (name, node) in [("recording", &recorded), ("taffy", &bound)] {
        group.bench_with_input(BenchmarkId::from_parameter(name), node, |b, node| {
            let setter = set_margin(StyleValue::Percent(10.0));
            b.iter(|| black_box(setter.apply(node).is_ok()))
        });
    }
    group.finish();
}

fn bench_style_pass(c: &mut Criterion) {
    let style = Style::from_json(r#"{ "margin": "4 8", "paddingTop": "5%", "left": 2 }"#)
        .expect("parse benchmark style");
    let children = (0..100)
        .map(|_| Node::new(NodeKind::View).with_style(style.clone()))
        .collect();
    let mut root = Node::new(NodeKind::Page).with_children(children);
    let engine = TaffyEngine::new(LayoutConfig::default());
    engine.bind(&mut root).expect("bind benchmark tree");

    c.bench_function("apply_box_styles_100_children", |b| {
        b.iter(|| black_box(apply_box_styles(&root).is_ok()))
    });
}

criterion_group!(benches, bench_parse_values, bench_all_edges, bench_style_pass);
criterion_main!(benches);
