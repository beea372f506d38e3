use std::path::PathBuf;
use std::process::exit;

use clap::{ArgGroup, CommandFactory, Parser};
use lprojkit::{Placement, Project};
use lprojkit_cli::{
    config::{self, Overrides},
    diff::run_diff_keys_command,
    edit::{run_set_command, translator_from_command},
    logging,
    validation::{KEY_VALUE_HINT, parse_key_value, validate_project_dir},
    view::run_get_command,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("operation").args(["get", "set", "diff_keys"]).multiple(true)))]
struct Args {
    /// The key to fetch from the language projects.
    #[arg(short, long, value_name = "KEY")]
    get: Option<String>,

    /// Comma separated languages to fetch with --get. Defaults to Base.
    #[arg(short, long, value_delimiter = ',', default_value = "Base")]
    languages: Vec<String>,

    /// Set a key in every language project, translating the value per language.
    #[arg(short, long, value_name = "KEY=VALUE")]
    set: Option<String>,

    /// Identify all keys of the base language missing from the other languages.
    #[arg(long)]
    diff_keys: bool,

    /// The Xcode project directory. Defaults to the current directory.
    #[arg(short = 'd', long, default_value = ".")]
    project_dir: PathBuf,

    /// Directory for staging files before they are copied over the originals.
    #[arg(long)]
    scratch_dir: Option<PathBuf>,

    /// Language code of the reference language.
    #[arg(long)]
    base_language: Option<String>,

    /// Where new keys are inserted: first-char or full-key.
    #[arg(long)]
    placement: Option<Placement>,

    /// Configuration file. Defaults to <project-dir>/.lprojkit.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// External translator, invoked as `<command> <language>` with the text on stdin.
    #[arg(long, value_name = "COMMAND")]
    translate_cmd: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// The one thing a run does.
enum Operation {
    Get(String),
    Set { key: String, value: String },
    DiffKeys,
}

fn print_usage_and_quit() -> ! {
    println!("{}", Args::command().render_usage());
    exit(2);
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let requested = [args.get.is_some(), args.set.is_some(), args.diff_keys];
    if requested.iter().filter(|&&given| given).count() > 1 {
        println!("Only one of --get, --set and --diff-keys can be given");
        print_usage_and_quit();
    }

    let operation = if let Some(key) = args.get.clone() {
        Operation::Get(key)
    } else if let Some(pair) = &args.set {
        match parse_key_value(pair) {
            Ok((key, value)) => Operation::Set { key, value },
            Err(_) => {
                println!("{}", KEY_VALUE_HINT);
                print_usage_and_quit();
            }
        }
    } else if args.diff_keys {
        Operation::DiffKeys
    } else {
        print_usage_and_quit();
    };

    if let Err(e) = validate_project_dir(&args.project_dir) {
        tracing::error!("{}", e);
        exit(1);
    }

    let file_config = match config::load(args.config.as_deref(), &args.project_dir) {
        Ok(file_config) => file_config,
        Err(e) => {
            tracing::error!("{}", e);
            exit(1);
        }
    };
    let options = config::resolve_options(
        file_config,
        Overrides {
            scratch_dir: args.scratch_dir.clone(),
            base_language: args.base_language.clone(),
            placement: args.placement,
        },
    );

    let project = match Project::discover(&args.project_dir, options) {
        Ok(project) => project,
        Err(e) => {
            tracing::error!("{}", e);
            exit(1);
        }
    };

    let result = match operation {
        Operation::Get(key) => run_get_command(&project, &key, &args.languages).map(|out| (out, true)),
        Operation::DiffKeys => run_diff_keys_command(&project).map(|out| (out, true)),
        Operation::Set { key, value } => translator_from_command(args.translate_cmd.as_deref())
            .and_then(|translator| run_set_command(&project, &key, &value, translator.as_ref()))
            .map(|report| {
                let ok = report.all_committed();
                (report.rendered, ok)
            }),
    };

    match result {
        Ok((output, ok)) => {
            println!("{}", output);
            if !ok {
                exit(1);
            }
        }
        Err(e) => {
            tracing::error!("{}", e);
            exit(1);
        }
    }
}
