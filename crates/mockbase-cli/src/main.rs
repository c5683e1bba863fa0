//! mockbase CLI: load a fixture file and run queries against it.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use mockbase_core::config::StoreConfig;
use mockbase_core::value::Value;
use mockbase_query::{Client, OrderOptions, ResultEnvelope};
use mockbase_store::FixtureSet;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mockbase")]
#[command(about = "In-memory mock database: fluent queries over fixture tables", long_about = None)]
struct Cli {
    /// Fixture file (JSON or YAML) to seed the store with (overrides MOCKBASE_FIXTURES)
    #[arg(long, global = true)]
    fixtures: Option<PathBuf>,

    /// Log filter directive, e.g. "debug" (overrides MOCKBASE_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List tables with their row counts
    Tables,

    /// Resolve a query and print the result envelope
    Query {
        /// Table to query
        #[arg(short, long)]
        table: String,

        /// Column list (recorded only; full records are returned)
        #[arg(long)]
        select: Option<String>,

        /// Equality filter as FIELD=VALUE
        #[arg(long, value_parser = parse_eq)]
        eq: Option<(String, Value)>,

        /// Ordering column (recorded only; stored order is kept)
        #[arg(long)]
        order: Option<String>,

        /// Descending order flag for --order
        #[arg(long, requires = "order")]
        desc: bool,

        /// Return the first match (or null) instead of a list
        #[arg(long)]
        single: bool,
    },

    /// Insert a JSON payload into a table and print the result envelope
    Insert {
        /// Target table
        #[arg(short, long)]
        table: String,

        /// JSON object to insert
        #[arg(short, long)]
        payload: String,
    },

    /// Print the user the auth stand-in would report as signed in
    Whoami,

    /// Validate a fixture file and summarize its tables
    Validate {
        /// Fixture file to check
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let mut config = StoreConfig::from_env();
    let explicit_level = cli.log_level.is_some();
    apply_overrides(&mut config, cli.fixtures.clone(), cli.log_level.clone());
    init_logging(&config.log_filter, explicit_level);

    if let Err(e) = run(cli.command, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `--log-level` wins over `RUST_LOG`, which wins over the configured filter.
fn init_logging(configured: &str, explicit: bool) {
    let filter = if explicit {
        EnvFilter::new(configured)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn apply_overrides(cfg: &mut StoreConfig, fixtures: Option<PathBuf>, log_level: Option<String>) {
    if let Some(path) = fixtures {
        cfg.fixtures = Some(path);
    }
    if let Some(level) = log_level {
        cfg.log_filter = level;
    }
}

fn run(command: Commands, config: &StoreConfig) -> Result<(), Box<dyn std::error::Error>> {
    if let Commands::Validate { path } = &command {
        return validate_fixtures(path);
    }

    let client = Client::from_config(config)?;
    debug!(tables = client.store().table_names().len(), "store ready");

    match command {
        Commands::Tables => {
            for name in client.store().table_names() {
                println!("{}\t{}", name, client.store().len(&name));
            }
        }
        Commands::Query {
            table,
            select,
            eq,
            order,
            desc,
            single,
        } => {
            let mut query = client.from(&table)?;
            if let Some(columns) = select {
                query = query.select(columns);
            }
            if let Some((field, value)) = eq {
                query = query.eq(field, value);
            }
            if let Some(column) = order {
                query = query.order(column, OrderOptions { ascending: !desc });
            }
            if single {
                query = query.single();
            }
            print_envelope(&query.resolve())?;
        }
        Commands::Insert { table, payload } => {
            let payload: serde_json::Value = serde_json::from_str(&payload)?;
            print_envelope(&client.from(&table)?.insert(payload))?;
        }
        Commands::Whoami => {
            println!("{}", serde_json::to_string_pretty(&client.auth().get_user())?);
        }
        Commands::Validate { .. } => {}
    }

    Ok(())
}

fn validate_fixtures(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let set = FixtureSet::load(path)?;
    println!("✓ Fixtures are valid: {}", path.display());
    for name in set.table_names() {
        let rows = set.table(name).map_or(0, <[_]>::len);
        println!("  {}: {} rows", name, rows);
    }
    Ok(())
}

fn print_envelope(env: &ResultEnvelope) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(&env.to_json())?);
    Ok(())
}

/// `FIELD=VALUE`, where VALUE is read as a JSON literal when it parses as
/// one (`true`, `12`, `null`, `"quoted"`) and as plain text otherwise.
fn parse_eq(s: &str) -> Result<(String, Value), String> {
    let (field, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", s))?;
    if field.is_empty() {
        return Err("filter field must not be empty".into());
    }
    let value = serde_json::from_str::<serde_json::Value>(raw)
        .map(Value::from)
        .unwrap_or_else(|_| Value::from(raw));
    Ok((field.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_eq_reads_literals() {
        assert_eq!(parse_eq("active=true").unwrap(), ("active".into(), Value::Bool(true)));
        assert_eq!(parse_eq("score=92").unwrap(), ("score".into(), Value::I64(92)));
        assert_eq!(parse_eq("owner=null").unwrap(), ("owner".into(), Value::Null));
    }

    #[test]
    fn parse_eq_falls_back_to_text() {
        assert_eq!(
            parse_eq("name=Hotel Central").unwrap(),
            ("name".into(), Value::from("Hotel Central"))
        );
        assert_eq!(parse_eq("note=a=b").unwrap(), ("note".into(), Value::from("a=b")));
        assert_eq!(parse_eq("id=").unwrap(), ("id".into(), Value::from("")));
    }

    #[test]
    fn parse_eq_rejects_malformed() {
        assert!(parse_eq("no-separator").is_err());
        assert!(parse_eq("=value").is_err());
    }

    #[test]
    fn cli_overrides_take_priority() {
        let mut config = StoreConfig {
            fixtures: Some("/env/fixtures.json".into()),
            ..Default::default()
        };
        apply_overrides(&mut config, Some("/cli/fixtures.yaml".into()), Some("debug".into()));
        assert_eq!(config.fixtures, Some(PathBuf::from("/cli/fixtures.yaml")));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn absent_overrides_keep_config() {
        let mut config = StoreConfig::default();
        apply_overrides(&mut config, None, None);
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
