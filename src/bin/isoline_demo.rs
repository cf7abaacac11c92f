use isoline2d::config::{self, DemoConfig, FieldSpec};
use isoline2d::{CartesianGrid, ExtractionReport, FieldFn, IsolineExtractor};
use nalgebra::Point2;
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "isoline_demo".to_string());
    let config_path = args
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| format!("Usage: {program} <config.json>"))?;
    let config = config::load_config(&config_path)?;

    let grid: CartesianGrid = config.grid.into();
    let report = extract(&config, &grid).map_err(|e| format!("Extraction failed: {e}"))?;

    print_text_summary(&report);

    if let Some(path) = &config.output.json_out {
        config::write_json_file(path, &report)?;
        println!("\nJSON report written to {}", path.display());
    }
    Ok(())
}

fn extract(
    config: &DemoConfig,
    grid: &CartesianGrid,
) -> Result<ExtractionReport, isoline2d::IsolineError> {
    let extractor = IsolineExtractor::new(config.params.clone());
    let field = FieldFn(|p: &Point2<f64>, spec: &FieldSpec| spec.value_at(p));

    #[cfg(feature = "parallel")]
    if config.output.parallel {
        return extractor.extract_par_with_diagnostics(grid, &field, &config.field, config.iso);
    }
    #[cfg(not(feature = "parallel"))]
    if config.output.parallel {
        eprintln!("Built without the `parallel` feature; running sequentially");
    }

    extractor.extract_with_diagnostics(grid, &field, &config.field, config.iso)
}

fn print_text_summary(report: &ExtractionReport) {
    let trace = &report.trace;
    let g = &trace.sampling.grid;
    println!("Isoline summary");
    println!("  iso: {}", trace.sampling.iso);
    println!(
        "  grid: {}x{} x0={:.4} dx={:.4} y0={:.4} dy={:.4}",
        g.nx, g.ny, g.x0, g.dx, g.y0, g.dy
    );
    println!("  vertices: {}", report.isoline.vertices.len());
    println!("  edges: {}", report.isoline.edges.len());
    println!(
        "  crossings: {} (x={} y={})",
        trace.crossings.total(),
        trace.crossings.x_sweep,
        trace.crossings.y_sweep
    );
    println!(
        "  bisection: eps={:e} max_iter={} mean_iters={:.2} exhausted={}",
        trace.refine.options.eps,
        trace.refine.options.max_iter,
        trace.refine.mean_iterations(),
        trace.refine.exhausted
    );
    println!(
        "  segments: strategy={:?} threshold={:.6}",
        trace.segments.strategy, trace.segments.threshold
    );

    let timing = &trace.timings;
    let stages = timing
        .stages
        .iter()
        .map(|s| format!("{}={:.3}", s.label, s.elapsed_ms))
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "\nTimings (ms): {stages} total={:.3} parallel={}",
        timing.total_ms, trace.parallel
    );
}
