use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Clone)]
#[command(
    display_name = "SR Processor",
    long_about = "Computes keymode star ratings for charts stored as JSON note lists"
)]
pub struct Args {
    /// Chart files to rate. Each file holds `key_count`, `overall_difficulty`
    /// and a `notes` array of `{ column, head_time_ms, tail_time_ms }` objects.
    #[arg(required = true, help = "Chart files to rate")]
    pub charts: Vec<PathBuf>,

    /// Replaces the overall difficulty stored in every chart
    #[arg(long, help = "Overall difficulty override")]
    pub od: Option<f64>,

    /// Playback speed, 1.5 for double time and 0.75 for half time
    #[arg(short, long, env = "SR_CLOCK_RATE", default_value_t = 1.0, help = "Playback speed multiplier")]
    pub clock_rate: f64,

    /// Prints a JSON array instead of one line per chart
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub json: bool,

    /// Adds the peak and mean of every difficulty bar to the output
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub breakdown: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["sr-processor", "a.json"]).unwrap();

        assert_eq!(args.charts.len(), 1);
        assert_eq!(args.od, None);
        assert!(!args.json);
        assert!(!args.breakdown);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "sr-processor",
            "a.json",
            "b.json",
            "--od",
            "9",
            "--clock-rate",
            "1.5",
            "--json",
            "-b"
        ])
        .unwrap();

        assert_eq!(args.charts.len(), 2);
        assert_eq!(args.od, Some(9.0));
        assert_eq!(args.clock_rate, 1.5);
        assert!(args.json);
        assert!(args.breakdown);
    }

    #[test]
    fn test_requires_chart() {
        assert!(Args::try_parse_from(["sr-processor"]).is_err());
    }
}
