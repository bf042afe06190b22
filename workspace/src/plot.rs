//! Terminal line charts for comparing sampled densities.

use ndarray as nd;
use textplots::{ Chart, Plot, Shape };

const WIDTH: u32 = 160;
const HEIGHT: u32 = 60;

/// A single labeled curve.
pub struct Series<'a> {
    pub label: String,
    pub x: nd::ArrayView1<'a, f64>,
    pub y: nd::ArrayView1<'a, f64>,
}

// textplots works in f32; anything that doesn't survive the conversion is
// dropped
fn points(series: &Series) -> Vec<(f32, f32)> {
    series.x.iter().zip(series.y.iter())
        .map(|(xk, yk)| (*xk as f32, *yk as f32))
        .filter(|(xk, yk)| xk.is_finite() && yk.is_finite())
        .collect()
}

fn x_range(curves: &[Vec<(f32, f32)>]) -> Option<(f32, f32)> {
    let (lo, hi)
        = curves.iter().flatten()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), (xk, _)| {
            (lo.min(*xk), hi.max(*xk))
        });
    (lo < hi).then_some((lo, hi))
}

/// Draw all `series` overlaid on a single chart, followed by axis labels and a
/// legend.
pub fn line_chart(title: &str, xlabel: &str, ylabel: &str, series: &[Series]) {
    let curves: Vec<Vec<(f32, f32)>> = series.iter().map(points).collect();
    println!("{}", title);
    let Some((xmin, xmax)) = x_range(&curves) else {
        eprintln!(
            "plot::line_chart: WARNING: no finite data to plot for '{}'",
            title,
        );
        return;
    };
    let shapes: Vec<Shape> = curves.iter().map(|c| Shape::Lines(c)).collect();
    let mut chart = Chart::new(WIDTH, HEIGHT, xmin, xmax);
    let chart
        = shapes.iter()
        .fold(&mut chart, |chart, shape| chart.lineplot(shape));
    chart.display();
    println!("x: {}    y: {}", xlabel, ylabel);
    for (k, s) in series.iter().enumerate() {
        println!("  curve {}: {}", k + 1, s.label);
    }
    println!();
}
