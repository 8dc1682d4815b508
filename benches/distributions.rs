use criterion::{criterion_group, criterion_main, Criterion};
use hepdist::special::{erf, erfinv};
use hepdist::{ContinuousDistribution, CrystalBall, DoubleCrystalBall};

// ---------------------------------------------------------------------------
// Helpers: evaluation grids spanning both tails and the core
// ---------------------------------------------------------------------------

fn x_grid() -> Vec<f64> {
    (0..256).map(|i| -12.0 + 16.0 * i as f64 / 255.0).collect()
}

fn p_grid() -> Vec<f64> {
    (1..256).map(|i| i as f64 / 256.0).collect()
}

fn crystal_ball() -> CrystalBall<f64> {
    CrystalBall::new(0.0, 1.0, 1.2, 2.5).unwrap()
}

fn double_crystal_ball() -> DoubleCrystalBall<f64> {
    DoubleCrystalBall::new(0.0, 1.0, 1.5, 2.0, 2.0, 3.0).unwrap()
}

// ---------------------------------------------------------------------------
// Special functions
// ---------------------------------------------------------------------------

fn special_fns(c: &mut Criterion) {
    let mut g = c.benchmark_group("special");
    let xs = x_grid();
    let ps: Vec<f64> = p_grid().iter().map(|p| 2.0 * p - 1.0).collect();

    g.bench_function("erf", |b| {
        b.iter(|| {
            xs.iter()
                .map(|&x| erf(std::hint::black_box(x)))
                .sum::<f64>()
        })
    });

    g.bench_function("erfinv", |b| {
        b.iter(|| {
            ps.iter()
                .map(|&y| erfinv(std::hint::black_box(y)))
                .sum::<f64>()
        })
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

fn construct(c: &mut Criterion) {
    let mut g = c.benchmark_group("construct");

    g.bench_function("crystal_ball", |b| {
        b.iter(|| CrystalBall::new(0.0, 1.0, std::hint::black_box(1.2), 2.5))
    });

    g.bench_function("double_crystal_ball", |b| {
        b.iter(|| DoubleCrystalBall::new(0.0, 1.0, std::hint::black_box(1.5), 2.0, 2.0, 3.0))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

fn pdf(c: &mut Criterion) {
    let mut g = c.benchmark_group("pdf_256");
    let xs = x_grid();
    let cb = crystal_ball();
    let dcb = double_crystal_ball();

    g.bench_function("crystal_ball", |b| {
        b.iter(|| xs.iter().map(|&x| cb.pdf(std::hint::black_box(x))).sum::<f64>())
    });

    g.bench_function("double_crystal_ball", |b| {
        b.iter(|| xs.iter().map(|&x| dcb.pdf(std::hint::black_box(x))).sum::<f64>())
    });

    g.finish();
}

fn cdf(c: &mut Criterion) {
    let mut g = c.benchmark_group("cdf_256");
    let xs = x_grid();
    let cb = crystal_ball();
    let dcb = double_crystal_ball();

    g.bench_function("crystal_ball", |b| {
        b.iter(|| xs.iter().map(|&x| cb.cdf(std::hint::black_box(x))).sum::<f64>())
    });

    g.bench_function("double_crystal_ball", |b| {
        b.iter(|| xs.iter().map(|&x| dcb.cdf(std::hint::black_box(x))).sum::<f64>())
    });

    g.finish();
}

fn quantile(c: &mut Criterion) {
    let mut g = c.benchmark_group("quantile_255");
    let ps = p_grid();
    let cb = crystal_ball();
    let dcb = double_crystal_ball();

    g.bench_function("crystal_ball", |b| {
        b.iter(|| {
            ps.iter()
                .map(|&p| cb.quantile(std::hint::black_box(p)).unwrap())
                .sum::<f64>()
        })
    });

    g.bench_function("double_crystal_ball", |b| {
        b.iter(|| {
            ps.iter()
                .map(|&p| dcb.quantile(std::hint::black_box(p)).unwrap())
                .sum::<f64>()
        })
    });

    g.finish();
}

criterion_group!(benches, special_fns, construct, pdf, cdf, quantile);
criterion_main!(benches);
