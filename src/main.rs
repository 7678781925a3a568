mod cli;
mod compute;
mod config;
mod error;
mod merge;
mod pipeline;
mod report;
mod table;
mod types;
mod ui;
mod validate;

use types::AggregateResult;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    // Resolve the immutable run description
    let run = match config::build_run_config(&args) {
        Ok(r) => r,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    // Ingest both tables
    let irradiance = match table::load_table(&args.irradiance) {
        Ok(t) => t,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(2);
        }
    };
    let generation = match table::load_table(&args.generation) {
        Ok(t) => t,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(2);
        }
    };

    // Validate, merge, compute
    let (records, aggregate) = match pipeline::reconcile(&irradiance, &generation, &run.panel) {
        Ok(result) => result,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(2);
        }
    };

    // Project the result into the rendering model once; every renderer
    // draws from the same report.
    let report =
        report::build_report(&records, &aggregate, &run.panel, &run.metadata, run.options.clone());

    if !run.quiet {
        print!("{}", report::render_text(&report));
    }

    if let Err(e) = report::write_text_report(&report, &run.text_path) {
        ui::print_error(&format!("Failed to write text report: {}", e));
        std::process::exit(1);
    }
    ui::status(&format!("text report saved to {}", run.text_path.display()));

    if let Some(ref path) = run.pdf_path {
        match report::write_pdf_report(&report, path) {
            Ok(_) => ui::status(&format!("PDF report saved to {}", path.display())),
            Err(e) => eprintln!("Warning: Failed to save PDF report: {}", e),
        }
    }

    if let Some(ref path) = run.json_path {
        match report::export_json_report(&records, &aggregate, &run.panel, &run.metadata, path) {
            Ok(_) => ui::status(&format!("JSON report saved to {}", path.display())),
            Err(e) => eprintln!("Warning: Failed to save JSON report: {}", e),
        }
    }

    if let Some(ref path) = run.chart_path {
        match report::write_chart(&records, path) {
            Ok(_) => ui::status(&format!("chart saved to {}", path.display())),
            Err(e) => eprintln!("Warning: Failed to save chart: {}", e),
        }
    }

    print_summary(&aggregate, records.len());
}

/// Print the closing summary block
fn print_summary(aggregate: &AggregateResult, period_count: usize) {
    println!("\n=== Summary ===");
    println!("Periods:            {}", period_count);
    println!("Total Expected:     {:.2} kWh", aggregate.total_expected);
    println!("Total Actual:       {:.2} kWh", aggregate.total_actual);
    println!("Overall Efficiency: {:.2}%", aggregate.overall_efficiency_percent);
}
