use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use codeveil_core::Language;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "codeveil")]
#[command(about = "Codeveil - share code samples without leaking internal naming")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Anonymize a fragment from a file or stdin
    Run {
        input: Option<PathBuf>,

        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value = "auto")]
        language: LanguageArg,

        #[arg(long)]
        save_mapping: Option<PathBuf>,

        #[arg(short, long)]
        verbose: bool,
    },

    /// Report which language a fragment reads as
    Detect { input: Option<PathBuf> },

    /// Translate synthetic names in a text back to the originals
    Restore {
        #[arg(short, long)]
        mapping: PathBuf,

        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LanguageArg {
    Auto,
    Python,
    Php,
    Javascript,
    Sql,
}

impl LanguageArg {
    fn resolve(self) -> Option<Language> {
        match self {
            LanguageArg::Auto => None,
            LanguageArg::Python => Some(Language::Python),
            LanguageArg::Php => Some(Language::Php),
            LanguageArg::Javascript => Some(Language::JavaScript),
            LanguageArg::Sql => Some(Language::Sql),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            input,
            output,
            language,
            save_mapping,
            verbose,
        } => cmd_run(input, output, language, save_mapping, verbose),
        Commands::Detect { input } => cmd_detect(input),
        Commands::Restore {
            mapping,
            input,
            output,
        } => cmd_restore(mapping, input, output),
    }
}

fn cmd_run(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    language: LanguageArg,
    save_mapping: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    use codeveil_core::MappingFile;
    use codeveil_rewrite::Anonymizer;
    use colored::*;
    use std::fs;
    use std::time::Instant;

    if verbose {
        println!("{}", " Codeveil".bright_blue().bold());
        println!("{}", "=".repeat(50).bright_blue());
        if let Some(ref path) = input {
            println!(" Input: {}", path.display());
        } else {
            println!(" Input: <stdin>");
        }
        if let Some(ref out) = output {
            println!(" Output: {}", out.display());
        }
        println!();
    }

    let start = Instant::now();
    let code = read_input(input.as_deref())?;

    let mut anonymizer = Anonymizer::new();
    let result = anonymizer.process(&code, language.resolve());

    if let Some(mapping_path) = save_mapping {
        let mapping = MappingFile::from_registry(anonymizer.registry(), result.language);
        mapping.save_to_file(&mapping_path)?;
        if verbose {
            println!(" Mapping saved to: {}", mapping_path.display());
        }
    }

    if let Some(output_path) = output {
        fs::write(&output_path, &result.code)?;
        if verbose {
            let elapsed = start.elapsed();
            println!(
                "\n {} Anonymization complete",
                "SUCCESS:".bright_green().bold()
            );
            println!("   Language: {}", result.language);
            println!("   Renamed: {} name(s)", result.mapping.len());
            println!("   Time: {:.3}s", elapsed.as_secs_f64());
            println!("   Output: {}", output_path.display());
        }
    } else {
        println!("{}", result.code);
    }

    Ok(())
}

fn cmd_detect(input: Option<PathBuf>) -> Result<()> {
    let code = read_input(input.as_deref())?;
    println!("{}", Language::detect(&code));
    Ok(())
}

fn cmd_restore(mapping: PathBuf, input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    use codeveil_core::{MappingFile, Restorer};
    use colored::*;
    use std::fs;

    let mapping = MappingFile::load_from_file(&mapping)?;
    let restorer = Restorer::from_mapping(&mapping);

    let text = read_input(input.as_deref())?;
    let restored = restorer.restore(&text);

    if let Some(output_path) = output {
        fs::write(&output_path, &restored)?;
        println!(
            " {} Restored text saved to: {}",
            "SUCCESS:".bright_green().bold(),
            output_path.display()
        );
    } else {
        println!("{}", restored);
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        Ok(std::fs::read_to_string(path)?)
    } else {
        use std::io::Read;
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}
