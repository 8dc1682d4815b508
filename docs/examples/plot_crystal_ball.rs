// Crystal Ball line shapes around a unit Gaussian.
// Prints JSON with 400 evaluation points and the pdf/cdf of each shape:
//   {"x":[...], "gauss":[...], "cb_pdf":[...], "cb_cdf":[...],
//    "dcb_pdf":[...], "dcb_cdf":[...]}
// Pipe into any plotting tool; the tails are easiest to compare on a log axis.

use hepdist::{ContinuousDistribution, CrystalBall, DoubleCrystalBall};

fn fmt_arr(v: &[f64]) -> String {
    let inner: Vec<String> = v.iter().map(|x| format!("{x:.6e}")).collect();
    format!("[{}]", inner.join(","))
}

fn main() {
    let cb = CrystalBall::new(0.0_f64, 1.0, 1.0, 3.0).unwrap();
    let dcb = DoubleCrystalBall::new(0.0_f64, 1.0, 1.5, 2.0, 2.0, 3.0).unwrap();
    let gauss_norm = 1.0 / (2.0 * std::f64::consts::PI).sqrt();

    const N: usize = 400;
    let (lo, hi) = (-10.0, 10.0);
    let mut x_vals = vec![0.0_f64; N];
    let mut gauss = vec![0.0_f64; N];
    let mut cb_pdf = vec![0.0_f64; N];
    let mut cb_cdf = vec![0.0_f64; N];
    let mut dcb_pdf = vec![0.0_f64; N];
    let mut dcb_cdf = vec![0.0_f64; N];

    for i in 0..N {
        let x = lo + (hi - lo) * i as f64 / (N - 1) as f64;
        x_vals[i] = x;
        gauss[i] = gauss_norm * (-0.5 * x * x).exp();
        cb_pdf[i] = cb.pdf(x);
        cb_cdf[i] = cb.cdf(x);
        dcb_pdf[i] = dcb.pdf(x);
        dcb_cdf[i] = dcb.cdf(x);
    }

    println!(
        "{{\"x\":{},\"gauss\":{},\"cb_pdf\":{},\"cb_cdf\":{},\"dcb_pdf\":{},\"dcb_cdf\":{}}}",
        fmt_arr(&x_vals),
        fmt_arr(&gauss),
        fmt_arr(&cb_pdf),
        fmt_arr(&cb_cdf),
        fmt_arr(&dcb_pdf),
        fmt_arr(&dcb_cdf)
    );
}
