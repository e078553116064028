use clap::{Parser, Subcommand, ValueEnum};
use meny_core::model::Suppliers;
use meny_provider_skolmaten::{SkolmatenConfig, transport::DEFAULT_BASE_URL};

#[derive(Parser, Debug)]
#[command(
    name = "meny",
    version,
    about = "Crawl school catalogs from menu suppliers",
    long_about = "meny walks a supplier's province, district and station listings and prints \
                  every school it publishes a menu for."
)]
pub(crate) struct Cli {
    /// Base URL of the Skolmaten API.
    #[arg(long, global = true, env = "MENY_SKOLMATEN_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds.
    #[arg(long, global = true, env = "MENY_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// List the registered suppliers.
    Suppliers,

    /// Crawl and print every school of a supplier.
    Schools {
        /// Supplier id, as printed by `meny suppliers`.
        #[arg(long, default_value = "skolmaten")]
        supplier: Suppliers,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    /// One `id<TAB>title` line per school.
    Text,
    /// A JSON array of `{id, title}` objects.
    Json,
}

impl Cli {
    pub(crate) fn skolmaten_config(&self) -> SkolmatenConfig {
        SkolmatenConfig::default()
            .with_base_url(self.base_url.as_str())
            .with_timeout_secs(self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn schools_defaults_to_skolmaten_text() {
        let cli = Cli::try_parse_from(["meny", "schools"]).expect("arguments parse");
        let Commands::Schools { supplier, format } = cli.command else {
            unreachable!("parsed the schools subcommand");
        };
        assert_eq!(supplier, Suppliers::Skolmaten);
        assert_eq!(format, Format::Text);
    }

    #[test]
    fn unknown_supplier_is_rejected_at_parse_time() {
        let result = Cli::try_parse_from(["meny", "schools", "--supplier", "sodexo"]);
        let err = result.expect_err("unknown supplier slug must not parse");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(
            err.to_string().contains("unknown supplier: sodexo"),
            "error names the slug: {err}"
        );
    }

    #[test]
    fn global_options_feed_config() {
        let cli = Cli::try_parse_from([
            "meny",
            "schools",
            "--format",
            "json",
            "--base-url",
            "http://localhost:9000",
            "--timeout",
            "5",
        ])
        .expect("arguments parse");

        let config = cli.skolmaten_config();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout_secs, 5);
    }
}
