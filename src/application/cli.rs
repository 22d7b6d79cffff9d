#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io;
use std::io::BufRead;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::GenerationParameters;
use crate::domain::models::Scenario;
use crate::domain::models::SessionState;
use crate::domain::services::Comparator;
use crate::domain::services::RequestAssembler;
use crate::domain::services::RequestSession;
use crate::domain::services::Scenarios;
use crate::infrastructure::api::ChatClient;
use crate::infrastructure::api::ConfigCredentialStore;
use crate::infrastructure::api::CredentialStore;
use crate::infrastructure::api::CredentialStoreBox;
use crate::infrastructure::api::FileCredentialStore;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .arg_required_else_help(true)
        .subcommand(Command::new("create").about("Creates a default config file."))
        .subcommand(Command::new("default").about("Prints the default config file to stdout."));
}

fn subcommand_key() -> Command {
    return Command::new("key")
        .about("Stores the API credential used as the bearer token on every request.")
        .arg(
            Arg::new("token")
                .help("The credential. Read from stdin when omitted.")
                .action(ArgAction::Set),
        );
}

fn subcommand_list() -> Command {
    return Command::new("list").about("Lists all guided steps.");
}

fn arg_input() -> Arg {
    return Arg::new("input")
        .short('i')
        .long("input")
        .help("The user message appended after the step's context.")
        .action(ArgAction::Set)
        .required(true);
}

fn subcommand_preview() -> Command {
    return Command::new("preview")
        .about("Prints the request a step would send, without sending it.")
        .arg(
            Arg::new("step")
                .help("The step number, see `list`.")
                .value_parser(value_parser!(usize))
                .required(true),
        )
        .arg(arg_input());
}

fn subcommand_run() -> Command {
    return Command::new("run")
        .about("Sends a step's context plus your message and prints the raw response.")
        .arg(
            Arg::new("step")
                .help("The step number, see `list`.")
                .value_parser(value_parser!(usize))
                .required(true),
        )
        .arg(arg_input())
        .arg(
            Arg::new("temperature")
                .long("temperature")
                .help("Sampling temperature between 0.0 and 2.0. Only honored by steps that expose generation parameters.")
                .value_parser(value_parser!(f64))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("max-tokens")
                .long("max-tokens")
                .help("Maximum response length between 1 and 2000 tokens. Only honored by steps that expose generation parameters.")
                .value_parser(value_parser!(u32))
                .action(ArgAction::Set),
        );
}

fn subcommand_compare() -> Command {
    return Command::new("compare")
        .about("Sends the same message through two different steps' contexts concurrently.")
        .arg(
            Arg::new("step-a")
                .help("The first step number.")
                .value_parser(value_parser!(usize))
                .required(true),
        )
        .arg(
            Arg::new("step-b")
                .help("The second step number.")
                .value_parser(value_parser!(usize))
                .required(true),
        )
        .arg(arg_input());
}

pub fn build() -> Command {
    return Command::new("contextlab")
        .about("Demonstrates, step by step, how conversational context shapes the output of a chat completion model.")
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_compare())
        .subcommand(subcommand_key())
        .subcommand(subcommand_list())
        .subcommand(subcommand_preview())
        .subcommand(subcommand_run())
        .arg(
            Arg::new("config-file")
                .short('c')
                .long("config-file")
                .env("CONTEXTLAB_CONFIG_FILE")
                .help(format!(
                    "Path to the config file. [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                ))
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .env("CONTEXTLAB_API_URL")
                .help("Base URL of the chat completion service. [default: https://api.openai.com]")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("api-token")
                .long("api-token")
                .env("CONTEXTLAB_API_TOKEN")
                .help("The API token used as the bearer credential.")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .env("CONTEXTLAB_MODEL")
                .help("Model used by steps that do not pin their own. [default: gpt-4o]")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("request-timeout")
                .long("request-timeout")
                .env("CONTEXTLAB_REQUEST_TIMEOUT")
                .help("Request timeout in milliseconds. [default: 30000]")
                .global(true)
                .action(ArgAction::Set),
        );
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if !config_file_path.parent().unwrap().exists() {
        fs::create_dir_all(config_file_path.parent().unwrap()).await?;
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    let config_path_display = config_file_path.as_os_str().to_str().unwrap();
    println!("Created default config file at {config_path_display}");
    return Ok(());
}

fn scenario(step: usize) -> Result<&'static Scenario> {
    if let Some(scenario) = Scenarios::get(step) {
        return Ok(scenario);
    }

    bail!(format!(
        "Step {step} doesn't exist. Run `contextlab list` to see all steps."
    ));
}

fn resolve_credentials() -> Result<CredentialStoreBox> {
    let config_store = ConfigCredentialStore::default();
    if !config_store.get().is_empty() {
        return Ok(Box::new(config_store));
    }

    let file_store = FileCredentialStore::default();
    if file_store.get().is_empty() {
        bail!("No API credential found. Run `contextlab key` first, or pass --api-token.");
    }

    return Ok(Box::new(file_store));
}

fn params_from_matches(
    scenario: &Scenario,
    matches: &ArgMatches,
) -> Result<Option<GenerationParameters>> {
    let temperature = matches.get_one::<f64>("temperature");
    let max_tokens = matches.get_one::<u32>("max-tokens");

    if temperature.is_none() && max_tokens.is_none() {
        return Ok(None);
    }

    if !scenario.params_enabled {
        bail!(format!(
            "Step {} doesn't expose generation parameters.",
            scenario.order_index
        ));
    }

    let (Some(temperature), Some(max_tokens)) = (temperature, max_tokens) else {
        bail!("--temperature and --max-tokens must be provided together.");
    };

    return Ok(Some(GenerationParameters::new(*temperature, *max_tokens)?));
}

fn session_for(scenario: &Scenario, params: Option<GenerationParameters>) -> Result<RequestSession> {
    let model = scenario
        .model
        .map(|model| return model.to_string())
        .unwrap_or_else(|| return Config::get(ConfigKey::Model));

    return Ok(RequestSession::new(
        ChatClient::default(),
        resolve_credentials()?,
        scenario.context.clone(),
        &model,
        params,
    ));
}

fn print_step(scenario: &Scenario) {
    println!(
        "{} {}",
        Paint::blue(format!("Étape {}:", scenario.order_index)).bold(),
        Paint::new(scenario.title).bold()
    );
    println!("  {}", scenario.description);
    println!("  Contexte: {} message(s)", scenario.context.len());
    if let Some(model) = scenario.model {
        println!("  Modèle: {model}");
    }
    if scenario.params_enabled {
        println!("  Paramètres de génération: réglables");
    }
    if let Some(suggested) = scenario.suggested_input {
        println!("  Exemple: {suggested}");
    }
}

fn print_outcome(label: &str, state: &SessionState) -> Result<()> {
    match state {
        SessionState::Succeeded(body) => {
            println!("{}", Paint::green(label).bold());
            println!("{}", serde_json::to_string_pretty(body)?);
        }
        SessionState::Failed(message) => {
            println!("{}", Paint::red(label).bold());
            println!("{message}");
        }
        _ => {
            println!("{}", Paint::yellow(label).bold());
            println!("(no outcome)");
        }
    }

    return Ok(());
}

fn store_key(matches: &ArgMatches) -> Result<()> {
    let token = match matches.get_one::<String>("token") {
        Some(token) => token.to_string(),
        None => {
            println!("Paste your API key:");
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line.trim().to_string()
        }
    };

    if token.is_empty() {
        bail!("The credential cannot be empty.");
    }

    FileCredentialStore::default().set(&token);
    println!("Credential stored.");
    return Ok(());
}

async fn run_step(matches: &ArgMatches) -> Result<()> {
    let step = *matches.get_one::<usize>("step").unwrap();
    let input = matches.get_one::<String>("input").unwrap();

    let scenario = scenario(step)?;
    let params = params_from_matches(scenario, matches)?;
    let session = session_for(scenario, params)?;

    println!("{}", Paint::blue("Requête:").bold());
    println!("{}", serde_json::to_string_pretty(&session.preview(input))?);

    session.start(input).await?;
    print_outcome("Résultat:", &session.state())?;

    if let Some(commentary) = scenario.commentary {
        println!("\n{}", Paint::new(commentary).italic());
    }

    return Ok(());
}

async fn compare_steps(matches: &ArgMatches) -> Result<()> {
    let step_a = *matches.get_one::<usize>("step-a").unwrap();
    let step_b = *matches.get_one::<usize>("step-b").unwrap();
    let input = matches.get_one::<String>("input").unwrap();

    let scenario_a = scenario(step_a)?;
    let scenario_b = scenario(step_b)?;

    let comparator = Comparator::new(
        session_for(scenario_a, None)?,
        session_for(scenario_b, None)?,
    );
    comparator.compare(input).await?;

    let (left, right) = comparator.outcomes();
    print_outcome(&format!("Étape {step_a}:"), &left)?;
    println!();
    print_outcome(&format!("Étape {step_b}:"), &right)?;

    return Ok(());
}

pub async fn parse() -> Result<()> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("completions", subcommand_matches)) => {
            if let Some(completions) = subcommand_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcommand_matches)) => match subcommand_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
            }
            _ => {}
        },
        Some(("key", subcommand_matches)) => {
            store_key(subcommand_matches)?;
        }
        Some(("list", _)) => {
            for scenario in Scenarios::all() {
                print_step(scenario);
                println!();
            }
        }
        Some(("preview", subcommand_matches)) => {
            Config::load(vec![&matches, subcommand_matches]).await?;
            let step = *subcommand_matches.get_one::<usize>("step").unwrap();
            let input = subcommand_matches.get_one::<String>("input").unwrap();

            let scenario = scenario(step)?;
            let model = scenario
                .model
                .map(|model| return model.to_string())
                .unwrap_or_else(|| return Config::get(ConfigKey::Model));
            let payload = RequestAssembler::assemble(&scenario.context, input, &model, None);
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        Some(("run", subcommand_matches)) => {
            Config::load(vec![&matches, subcommand_matches]).await?;
            run_step(subcommand_matches).await?;
        }
        Some(("compare", subcommand_matches)) => {
            Config::load(vec![&matches, subcommand_matches]).await?;
            compare_steps(subcommand_matches).await?;
        }
        _ => {}
    }

    return Ok(());
}
