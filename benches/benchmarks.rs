//! Performance benchmarks for canopy

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use canopy::test_utils::TestSite;
use canopy::{HtmlRenderer, OutputConfig, TreeWalker, WalkerConfig};

/// Build a site with `dirs` top-level directories of `files_per_dir` files
/// each, plus one level of nesting inside every directory.
fn build_site(dirs: usize, files_per_dir: usize) -> TestSite {
    let site = TestSite::new();
    for d in 0..dirs {
        for f in 0..files_per_dir {
            site.add_file(&format!("dir{:02}/file{:02}.md", d, f), "# content");
            site.add_file(&format!("dir{:02}/nested/file{:02}.png", d, f), "png");
        }
    }
    site
}

fn bench_walk(c: &mut Criterion) {
    let site = build_site(20, 10);
    let walker = TreeWalker::new(WalkerConfig::default());

    c.bench_function("walk_400_files", |b| {
        b.iter(|| black_box(walker.walk(site.path(), "")));
    });
}

fn bench_render(c: &mut Criterion) {
    let site = build_site(20, 10);
    let walker = TreeWalker::new(WalkerConfig::default());
    let tree = walker.walk(site.path(), "");
    let renderer = HtmlRenderer::new(OutputConfig::default());

    c.bench_function("render_400_files", |b| {
        b.iter(|| {
            let markup = renderer.render_tree(black_box(&tree));
            black_box(renderer.render_page(&markup))
        });
    });
}

fn bench_walk_and_render(c: &mut Criterion) {
    let site = build_site(10, 10);
    let walker = TreeWalker::new(WalkerConfig::default());
    let renderer = HtmlRenderer::new(OutputConfig::default());

    c.bench_function("walk_and_render_200_files", |b| {
        b.iter(|| {
            let tree = walker.walk(site.path(), "");
            let markup = renderer.render_tree(&tree);
            black_box(renderer.render_page(&markup))
        });
    });
}

criterion_group!(benches, bench_walk, bench_render, bench_walk_and_render);
criterion_main!(benches);
