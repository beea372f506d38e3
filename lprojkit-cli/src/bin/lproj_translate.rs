use std::io::Read;
use std::process::exit;

use clap::{CommandFactory, Parser};
use lprojkit_cli::{
    CommandSource, OutputFormat, edit::translator_from_command, logging,
    translate::translate_all,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Translate key/text pairs into one or more languages", long_about = None)]
struct Args {
    /// An identifier for the word to be translated.
    #[arg(short, long)]
    key: Option<String>,

    /// The text to be translated.
    #[arg(short, long)]
    text: Option<String>,

    /// Comma separated language codes to translate to.
    #[arg(long, value_delimiter = ',')]
    dest_lang: Vec<String>,

    /// Language of the source text. Translators always receive English, so
    /// this is accepted for compatibility and only `en` is honoured.
    #[arg(long, default_value = "en")]
    src_lang: String,

    /// Format of the stdin records and of the output: JSON or YAML.
    #[arg(short, long, default_value = "JSON")]
    format: String,

    /// External translator, invoked as `<command> <language>` with the text on stdin.
    #[arg(long, value_name = "COMMAND")]
    translate_cmd: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn quit_with_usage(message: &str) -> ! {
    println!("{}", message);
    println!("{}", Args::command().render_usage());
    exit(2);
}

/// Maps the single-dash two-letter flags of older invocations to their long form.
fn normalize_flag(arg: String) -> String {
    match arg.as_str() {
        "-dl" => "--dest-lang".to_string(),
        "-sl" => "--src-lang".to_string(),
        _ => arg,
    }
}

fn main() {
    let args = Args::parse_from(std::env::args().map(normalize_flag));
    logging::init(args.verbose);

    if args.src_lang != "en" {
        tracing::warn!(
            "Source language {} is not supported, texts are treated as English",
            args.src_lang
        );
    }

    let format: OutputFormat = match args.format.parse() {
        Ok(format) => format,
        Err(e) => quit_with_usage(&e),
    };

    let source = match CommandSource::from_args(args.key, args.text, args.dest_lang) {
        Some(source) => source,
        None => {
            let mut input = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut input) {
                tracing::error!("Failed to read stdin: {}", e);
                exit(1);
            }
            CommandSource::from_stdin(input, format)
        }
    };

    let commands = match source.into_commands() {
        Ok(commands) => commands,
        Err(e) => quit_with_usage(&e),
    };
    tracing::debug!("{} translation request(s)", commands.len());

    let translator = match translator_from_command(args.translate_cmd.as_deref()) {
        Ok(translator) => translator,
        Err(e) => quit_with_usage(&e),
    };

    let rendered = translate_all(&commands, translator.as_ref()).and_then(|out| format.render(&out));
    match rendered {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("{}", e);
            exit(1);
        }
    }
}
