use std::{
    fs::{self, File},
    io::{self, BufRead},
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};

use mbtext::{
    guess_unicode_punctuation_preserving_markup, parse_copyright_notice,
    punctuation_rules_for_language, RuleTable,
};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// File to process line by line. Reads from stdin if unset
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replace ASCII punctuation with Unicode punctuation
    Punctuation {
        /// Language code or name, for example fr, deu or Japanese
        #[arg(short, long)]
        locale: Option<String>,

        /// Leave wiki links, URLs and bold/italic markup untouched
        #[arg(short, long, conflicts_with = "rules")]
        markup: bool,

        /// Extra rules merged into punctuation rules (ron or json)
        #[arg(short, long)]
        rules: Option<PathBuf>,
    },

    /// Print copyright items found in each line as JSON array
    Copyright,

    /// Apply rule table (ron or json)
    Transform {
        #[arg(short, long)]
        rules: PathBuf,
    },
}

fn read_rules(path: &Path) -> Result<RuleTable, String> {
    let content =
        fs::read_to_string(path).map_err(|err| format!("reading rules file: {err}"))?;

    if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&content).map_err(|err| format!("parsing rules: {err}"))
    } else {
        ron::from_str(&content).map_err(|err| format!("parsing rules: {err}"))
    }
}

fn for_each_line(
    file: Option<PathBuf>,
    mut f: impl FnMut(&str) -> Result<String, String>,
) -> Result<(), String> {
    let lines: Box<dyn Iterator<Item = io::Result<String>>> = if let Some(filename) = file {
        let file = File::open(filename).map_err(|err| format!("reading input file: {err}"))?;
        Box::new(io::BufReader::new(file).lines())
    } else {
        Box::new(io::stdin().lines())
    };

    for line in lines {
        println!(
            "{}",
            f(&line.map_err(|err| format!("reading line: {err}"))?)?
        );
    }

    Ok(())
}

fn main() -> Result<(), String> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Command::Punctuation {
            locale,
            markup: true,
            ..
        } => for_each_line(args.file, |line| {
            Ok(guess_unicode_punctuation_preserving_markup(
                line,
                locale.as_deref(),
            ))
        }),
        Command::Punctuation { locale, rules, .. } => {
            let mut table = punctuation_rules_for_language(locale.as_deref());
            if let Some(path) = rules {
                table = table.extend(read_rules(&path)?);
            }

            for_each_line(args.file, |line| Ok(table.apply(line).into_owned()))
        }
        Command::Copyright => for_each_line(args.file, |line| {
            serde_json::to_string(&parse_copyright_notice(line))
                .map_err(|err| format!("serializing copyright items: {err}"))
        }),
        Command::Transform { rules } => {
            let table = read_rules(&rules)?;

            for_each_line(args.file, |line| Ok(table.apply(line).into_owned()))
        }
    }
}
