//! Signwave CLI binary.

use std::io::Write;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use signwave::clip::DirectoryClipStore;
use signwave::error::Result;
use signwave::lexicon::Lexicon;
use signwave::pipeline::TranslationPipeline;
use signwave::synset::SynsetDictionary;

#[derive(Parser)]
#[command(
    name = "signwave",
    version,
    about = "Translate a sentence into sign-language animation tokens"
)]
struct SignwaveArgs {
    /// Sentence to translate
    #[arg(required = true)]
    sentence: Vec<String>,

    /// Directory holding pre-rendered clip files (<word>.mp4)
    #[arg(long, value_name = "DIR")]
    clips: PathBuf,

    /// Custom synonym lexicon (JSON object, word -> synonym)
    #[arg(long, value_name = "FILE")]
    lexicon: Option<PathBuf>,

    /// Synset dictionary (JSON array of synonym groups)
    #[arg(long, value_name = "FILE")]
    synsets: Option<PathBuf>,

    /// Emit the translation as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(args: &SignwaveArgs) -> Result<()> {
    let lexicon = Arc::new(match &args.lexicon {
        Some(path) => Lexicon::load(path),
        None => Lexicon::new(),
    });
    let synsets = Arc::new(match &args.synsets {
        Some(path) => SynsetDictionary::load(path)?,
        None => SynsetDictionary::new(),
    });
    let clips = Arc::new(DirectoryClipStore::new(args.clips.clone()));

    let pipeline = TranslationPipeline::new(lexicon, synsets, clips)?;
    let translation = pipeline.translate(&args.sentence.join(" "))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&translation)?);
    } else {
        println!("text: {}", translation.text);
        println!("tense: {}", translation.tense);
        let tokens: Vec<String> = translation.tokens.iter().map(|t| t.to_string()).collect();
        println!("tokens: {}", tokens.join(" "));
        for (word, synonym) in &translation.synonyms {
            println!("synonym: {word} -> {synonym}");
        }
    }
    Ok(())
}

fn main() {
    let args = SignwaveArgs::parse();

    let log_level = match args.verbose {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(&args) {
        log::error!("{e}");
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
}
