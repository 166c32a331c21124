use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::{prelude::*, reload, EnvFilter, Registry};
use webview_core::{catalog::CatalogChain, config};
use webview_oauth::build_redirect_page;
use webview_popups::{convert_key, properties, resolve_text_bundle, trim_input, TextBundle};

#[derive(Parser)]
#[command(
    name = "webview-strings",
    version,
    about = "Localized strings for the browser popups and the OAuth redirect page"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the translation key for a gecko key.
    Key {
        /// Gecko key, e.g. someFieldName.
        identifier: String,
        /// Translation namespace (default: from config).
        #[arg(short, long)]
        prefix: Option<String>,
    },
    /// Resolve a gecko key, with optional arguments, to localized text.
    Resolve {
        /// Translation namespace (default: from config).
        #[arg(short, long)]
        prefix: Option<String>,
        /// Text bundle as JSON: "key" or ["key", arg1, arg2, ...].
        #[arg(long, conflicts_with = "identifier")]
        json: Option<String>,
        /// Gecko key.
        #[arg(required_unless_present = "json")]
        identifier: Option<String>,
        /// Values for %1, %2, ...
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Trim text, marking the cut with a localized ellipsis.
    Trim {
        #[arg(allow_hyphen_values = true)]
        text: String,
        /// Maximum length in characters (default: from config).
        #[arg(short, long)]
        max_length: Option<usize>,
    },
    /// Write the OAuth redirect response to stdout.
    RedirectPage,
    /// Generate translation sources from a gecko property file.
    Generate {
        /// Property file to read.
        file: PathBuf,
        /// Prefix to use in translation keys (default: from config).
        #[arg(short, long)]
        prefix: Option<String>,
        /// Permalink to the property file in version control.
        #[arg(long, default_value = "unknown source")]
        url: String,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Cpp)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// lupdate stub source.
    Cpp,
    /// Flat TOML catalog.
    Toml,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logging = Logging::init();
    let cfg = config::load(&cli.config)?;
    logging.apply_config(&cfg)?;
    debug!("using config {}", cli.config);

    match cli.command {
        Commands::Key { identifier, prefix } => {
            let prefix = prefix.unwrap_or(cfg.popups.prefix);
            println!("{}", convert_key(&identifier, &prefix));
        }
        Commands::Resolve {
            prefix,
            json,
            identifier,
            args,
        } => {
            let bundle = build_bundle(json, identifier, args)?;
            let catalog = load_catalog(&cfg)?;
            let prefix = prefix.unwrap_or(cfg.popups.prefix);
            println!("{}", resolve_text_bundle(&catalog, bundle, &prefix));
        }
        Commands::Trim { text, max_length } => {
            let catalog = load_catalog(&cfg)?;
            let max_length = max_length.unwrap_or(cfg.popups.max_length);
            println!("{}", trim_input(&catalog, &text, max_length));
        }
        Commands::RedirectPage => {
            let catalog = load_catalog(&cfg)?;
            let page = build_redirect_page(&catalog);
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(page.as_bytes())?;
            stdout.flush()?;
        }
        Commands::Generate {
            file,
            prefix,
            url,
            format,
        } => {
            let prefix = prefix.unwrap_or(cfg.popups.prefix);
            let translations = properties::read_properties(&file, &url)?;
            let output = match format {
                OutputFormat::Cpp => properties::render_cpp(&translations, &prefix),
                OutputFormat::Toml => properties::render_catalog(&translations, &prefix)?,
            };
            print!("{output}");
        }
    }

    Ok(())
}

/// Log filter that starts at `RUST_LOG` (or `info`) and picks up the
/// configured level once the config is loaded.
struct Logging {
    handle: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

impl Logging {
    fn init() -> Self {
        let env_filter = EnvFilter::try_from_default_env();
        let from_env = env_filter.is_ok();
        let (filter, handle) =
            reload::Layer::new(env_filter.unwrap_or_else(|_| EnvFilter::new("info")));
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
        Self { handle, from_env }
    }

    /// Switch to the configured level unless `RUST_LOG` was set.
    fn apply_config(&self, cfg: &config::Config) -> anyhow::Result<()> {
        if !self.from_env {
            self.handle.reload(EnvFilter::try_new(&cfg.log.level)?)?;
        }
        Ok(())
    }
}

/// Build the text bundle from either `--json` or the positional arguments.
fn build_bundle(
    json: Option<String>,
    identifier: Option<String>,
    args: Vec<String>,
) -> anyhow::Result<TextBundle> {
    if let Some(json) = json {
        return Ok(serde_json::from_str(&json)?);
    }
    let Some(identifier) = identifier else {
        anyhow::bail!("no gecko key provided. Usage: webview-strings resolve <KEY> [ARGS...]");
    };
    if args.is_empty() {
        Ok(TextBundle::key(identifier))
    } else {
        Ok(TextBundle::with_args(identifier, args))
    }
}

/// Load the configured catalog layers.
fn load_catalog(cfg: &config::Config) -> anyhow::Result<CatalogChain> {
    let catalog = cfg.catalog.build()?;
    if catalog.is_empty() {
        debug!("no catalogs configured, every key falls back");
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_resolve_with_args() {
        let cli = Cli::try_parse_from(["webview-strings", "resolve", "greetingKey", "Alice"]).unwrap();
        match cli.command {
            Commands::Resolve {
                identifier, args, ..
            } => {
                assert_eq!(identifier.as_deref(), Some("greetingKey"));
                assert_eq!(args, ["Alice"]);
            }
            _ => panic!("expected resolve"),
        }
        assert_eq!(cli.config, "config.toml");
    }

    #[test]
    fn test_cli_resolve_requires_key_or_json() {
        assert!(Cli::try_parse_from(["webview-strings", "resolve"]).is_err());
        assert!(Cli::try_parse_from(["webview-strings", "resolve", "--json", "\"k\""]).is_ok());
    }

    #[test]
    fn test_cli_generate_format() {
        let cli = Cli::try_parse_from([
            "webview-strings",
            "generate",
            "popups.properties",
            "--format",
            "toml",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate { format, url, .. } => {
                assert_eq!(format, OutputFormat::Toml);
                assert_eq!(url, "unknown source");
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_cli_accepts_hyphen_values() {
        let cli = Cli::try_parse_from(["webview-strings", "resolve", "k", "-5", "--x"]).unwrap();
        match cli.command {
            Commands::Resolve { args, .. } => assert_eq!(args, ["-5", "--x"]),
            _ => panic!("expected resolve"),
        }

        let cli = Cli::try_parse_from(["webview-strings", "trim", "-42 degrees"]).unwrap();
        match cli.command {
            Commands::Trim { text, .. } => assert_eq!(text, "-42 degrees"),
            _ => panic!("expected trim"),
        }
    }

    #[test]
    fn test_config_level_applies_unless_env_set() {
        let (filter, handle) = reload::Layer::new(EnvFilter::new("info"));
        let _subscriber = tracing_subscriber::registry().with(filter);
        let level = |handle: &reload::Handle<EnvFilter, Registry>| {
            handle.with_current(|f| f.to_string()).unwrap()
        };

        let mut cfg = config::Config::default();
        cfg.log.level = "debug".to_string();
        Logging {
            handle: handle.clone(),
            from_env: false,
        }
        .apply_config(&cfg)
        .unwrap();
        assert_eq!(level(&handle), "debug");

        cfg.log.level = "warn".to_string();
        Logging {
            handle: handle.clone(),
            from_env: true,
        }
        .apply_config(&cfg)
        .unwrap();
        assert_eq!(level(&handle), "debug");
    }

    #[test]
    fn test_build_bundle_variants() {
        assert_eq!(
            build_bundle(None, Some("k".into()), vec![]).unwrap(),
            TextBundle::key("k")
        );
        assert_eq!(
            build_bundle(None, Some("k".into()), vec!["a".into()]).unwrap(),
            TextBundle::with_args("k", ["a"])
        );
        assert_eq!(
            build_bundle(Some(r#"["k", 1]"#.into()), None, vec![]).unwrap(),
            TextBundle::with_args("k", ["1"])
        );
        assert!(build_bundle(Some("[]".into()), None, vec![]).is_err());
        assert!(build_bundle(None, None, vec![]).is_err());
    }
}
