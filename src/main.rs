use anyhow::Result;
use clap::{ArgGroup, CommandFactory, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use jsanalyze::config::{self, ConfigStore, Setting};
use jsanalyze::driver::{self, InputMode, Pipeline};
use jsanalyze::error::ConfigError;
use jsanalyze::llm::{BackendOptions, Template, ollama::DEFAULT_OLLAMA_URL};
use jsanalyze::output::{Reporter, TerminalReporter};
use jsanalyze::source::HttpFetcher;

#[derive(Parser, Debug)]
#[command(name = "js-analyze", version)]
#[command(about = "Ask an LLM for a bug bounty style analysis of JavaScript files")]
#[command(group(ArgGroup::new("action").args(["set_model", "set_key", "url", "file", "list"])))]
struct Args {
    /// Set the default local model once (uses the Ollama backend)
    #[arg(long, value_name = "NAME")]
    set_model: Option<String>,

    /// Set the hosted API key once (uses the Gemini backend)
    #[arg(long, value_name = "KEY")]
    set_key: Option<String>,

    /// Fetch and analyze one remote script
    #[arg(short, long)]
    url: Option<String>,

    /// Analyze one local script
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// File of newline-delimited URLs to analyze one by one
    #[arg(short = 'o', long)]
    list: Option<PathBuf>,

    /// Report layout to request (defaults per backend)
    #[arg(short, long, value_enum)]
    template: Option<Template>,

    /// Base URL of the local Ollama server
    #[arg(long, env = "OLLAMA_HOST", default_value = DEFAULT_OLLAMA_URL)]
    ollama_url: String,

    /// Directory holding config.json
    #[arg(long, env = "JS_ANALYZE_CONFIG_DIR", value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Print the analysis as-is instead of rendering markdown
    #[arg(long)]
    plain: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn setting(&self) -> Option<Setting> {
        self.set_model
            .clone()
            .map(Setting::Model)
            .or_else(|| self.set_key.clone().map(Setting::ApiKey))
    }

    fn input_mode(&self) -> Option<InputMode> {
        if let Some(ref url) = self.url {
            Some(InputMode::Url(url.clone()))
        } else if let Some(ref file) = self.file {
            Some(InputMode::File(file.clone()))
        } else {
            self.list.clone().map(InputMode::List)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "jsanalyze=debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut reporter = TerminalReporter::new(args.plain);

    match run(&args, &mut reporter, config::default_root).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<ConfigError>() {
                Some(ConfigError::Missing { .. }) => {
                    reporter.warn(
                        "Model not configured. Run:\n\
                         js-analyze --set-model llama3\n\
                         or, for the hosted API:\n\
                         js-analyze --set-key <API_KEY>",
                    );
                }
                _ => reporter.warn(&format!("{:#}", e)),
            }
            ExitCode::FAILURE
        }
    }
}

/// `default_root` is only consulted once a command actually needs the store.
async fn run(
    args: &Args,
    reporter: &mut dyn Reporter,
    default_root: fn() -> Result<PathBuf, ConfigError>,
) -> Result<()> {
    let open_store = || -> Result<ConfigStore> {
        let root = match args.config_dir {
            Some(ref dir) => dir.clone(),
            None => default_root()?,
        };
        Ok(ConfigStore::new(root))
    };

    if let Some(setting) = args.setting() {
        return driver::save_setting(&open_store()?, &setting, reporter);
    }

    let Some(mode) = args.input_mode() else {
        Args::command().print_help()?;
        return Ok(());
    };

    let store = open_store()?;
    let options = BackendOptions {
        ollama_url: args.ollama_url.clone(),
    };
    let backend = driver::connect(&store, &options)?;

    let pipeline = Pipeline::new(HttpFetcher::new()?, backend, args.template);
    pipeline.run(&mode, reporter).await?;

    Ok(())
}
