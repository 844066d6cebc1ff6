//! This module is responsible for generating visualizations from
//! assessment results.

use anyhow::Result;
use biocalc_schemas::result::LifecycleResult;
use plotters::prelude::*;
use std::path::Path;

/// Generates a bar chart of the per-phase emission intensities and saves
/// it as a PNG. Sequestering phases (negative land-use change) are drawn
/// below the axis.
pub fn plot_phase_emissions(path: &Path, title: &str, result: &LifecycleResult) -> Result<()> {
    let path_str = path.to_string_lossy().into_owned();
    let root = BitMapBackend::new(&path_str, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let phases = result.phases();
    let max_value = phases
        .iter()
        .map(|(_, v)| *v)
        .fold(0.0f64, f64::max)
        .max(1e-9);
    let min_value = phases.iter().map(|(_, v)| *v).fold(0.0f64, f64::min);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Emissions by Phase - {title}"),
            ("sans-serif", 40).into_font(),
        )
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(0usize..phases.len(), min_value * 1.1..max_value * 1.1)?;

    chart
        .configure_mesh()
        .x_desc("Phase")
        .y_desc("kg CO2eq/MJ")
        .x_labels(phases.len())
        .x_label_formatter(&|idx| {
            phases
                .get(*idx)
                .map(|(label, _)| label.to_string())
                .unwrap_or_default()
        })
        .draw()?;

    let colors = [BLUE, GREEN, MAGENTA, RED, CYAN, BLACK];
    chart.draw_series(phases.iter().enumerate().map(|(i, (_, value))| {
        let color = colors[i % colors.len()];
        Rectangle::new([(i, 0.0), (i + 1, *value)], color.filled())
    }))?;

    root.present()?;
    Ok(())
}
