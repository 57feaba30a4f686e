mod commands;
mod ops;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.run()
}

/// `RUST_LOG` wins; otherwise `-v` raises the default `warn` level.
fn init_tracing(verbose: u8) {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| verbosity_filter(verbose).to_string());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn verbosity_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "warn,loom=debug,loomgen_codegen_csharp=debug,loomgen_html=debug",
        _ => "debug,loomgen_codegen_csharp=trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_filter_targets_binary() {
        let target = module_path!().split("::").next().unwrap();
        let directive = format!("{}=debug", target);

        assert_eq!(verbosity_filter(0), "warn");
        assert!(verbosity_filter(1).split(',').any(|d| d == directive));
        assert!(EnvFilter::try_new(verbosity_filter(1)).is_ok());
        assert!(EnvFilter::try_new(verbosity_filter(2)).is_ok());
    }
}
