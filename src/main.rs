use clap::Parser;
use rayon::prelude::*;
use sr_processor::{
    args::Args,
    chart_file::{rate_chart_file, ChartReport, RateOptions},
    utils::progress_utils::progress_bar
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    dotenv::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(std::io::stderr)
        .init();

    let options = RateOptions {
        od_override: args.od,
        clock_rate: args.clock_rate,
        breakdown: args.breakdown
    };

    info!("Rating {} chart(s)", args.charts.len());
    let bar = progress_bar(args.charts.len() as u64, "Rating charts".to_string());

    // par_iter keeps the input order in the collected results
    let results: Vec<_> = args
        .charts
        .par_iter()
        .map(|path| {
            let result = rate_chart_file(path, &options);
            if let Some(bar) = &bar {
                bar.inc(1);
            }
            (path, result)
        })
        .collect();

    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    let mut reports: Vec<ChartReport> = Vec::with_capacity(results.len());
    let mut failures = 0;
    for (path, result) in results {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                error!("{}: {}", path.display(), e);
                failures += 1;
            }
        }
    }

    if args.json {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize ratings: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        for report in &reports {
            println!("{}", report.to_line());
        }
    }

    if failures > 0 {
        error!("{} of {} chart(s) could not be rated", failures, args.charts.len());
        std::process::exit(1);
    }
}
