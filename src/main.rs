use audio_shelf::config::{self, ConfigError, PageConfig};
use audio_shelf::mime::MimeRegistry;
use audio_shelf::pipeline::{self, RunOptions, SourceError};
use audio_shelf::{logging, markdown, output};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "audio-shelf")]
#[command(version)]
#[command(about = "Generate a static HTML page for folders of audio files")]
#[command(long_about = "\
Generate a static HTML page for folders of audio files

Each folder becomes a collapsible section with an inline player per file.
Links are relative to the output file, so keep the folders where they are.

  audio-shelf ./podcasts ./music -o public/index.html -t \"My Audio Library\"

  audio-shelf --section \"Podcasts=./audio/podcasts\" \\
              --section \"Music=./audio/music\" -o docs/index.html

  audio-shelf ./podcasts ./music --sample 10 --seed 42

Optional per-section transcripts are read from a TSV file inside each folder
(default transcripts.tsv), one 'relative/path.mp3<TAB>text' per line.

Run 'audio-shelf --gen-config' to print a documented config file.")]
struct Cli {
    /// Directories to scan; each becomes a section titled by its name
    paths: Vec<PathBuf>,

    /// Output HTML file
    #[arg(short, long, default_value = "index.html")]
    output: PathBuf,

    /// Page title [default: Audio Library]
    #[arg(short, long)]
    title: Option<String>,

    /// Define a section as "Title=PATH" (repeatable, overrides PATHS)
    #[arg(long = "section", value_name = "TITLE=PATH")]
    sections: Vec<String>,

    /// Follow symlinked directories while walking
    #[arg(long)]
    follow_symlinks: bool,

    /// Create an empty .nojekyll file next to the output (GitHub Pages)
    #[arg(long)]
    no_jekyll: bool,

    /// Randomly show at most N files per section
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    sample: Option<u64>,

    /// Seed for deterministic sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Grid columns, 1-12 [default: 2]
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=12))]
    columns: Option<u8>,

    /// Transcript TSV name inside each section directory ("" disables) [default: transcripts.tsv]
    #[arg(long, value_name = "NAME")]
    tsv_file: Option<String>,

    /// Markdown file rendered as an introduction at the top of the page
    #[arg(long, value_name = "FILE")]
    intro_md: Option<PathBuf>,

    /// Opening one section closes the others (default)
    #[arg(long, overrides_with = "no_accordion")]
    accordion: bool,

    /// Let any number of sections be open at once
    #[arg(long, overrides_with = "accordion")]
    no_accordion: bool,

    /// Start with all sections collapsed
    #[arg(long)]
    start_collapsed: bool,

    /// Max characters shown for file names, 0-200 (0 = no cut) [default: 60]
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(0..=200))]
    name_max_chars: Option<u16>,

    /// TOML file with page options; flags override it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print a stock config file with all options documented
    #[arg(long)]
    gen_config: bool,
}

impl Cli {
    /// Stock defaults, then the `--config` file, then explicit flags.
    fn page_config(&self) -> Result<PageConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => config::load_config(path)?,
            None => PageConfig::default(),
        };
        self.apply_to(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Layer explicit flags over the loaded config.
    fn apply_to(&self, config: &mut PageConfig) {
        if let Some(title) = &self.title {
            config.title = title.clone();
        }
        if let Some(columns) = self.columns {
            config.columns = columns;
        }
        if let Some(n) = self.name_max_chars {
            config.name_max_chars = usize::from(n);
        }
        if let Some(tsv) = &self.tsv_file {
            config.tsv_file = tsv.clone();
        }
        if let Some(n) = self.sample {
            config.sample = Some(usize::try_from(n).unwrap_or(usize::MAX));
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.accordion {
            config.accordion = true;
        }
        if self.no_accordion {
            config.accordion = false;
        }
        config.follow_symlinks |= self.follow_symlinks;
        config.no_jekyll |= self.no_jekyll;
        config.start_collapsed |= self.start_collapsed;
    }
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    if cli.gen_config {
        print!("{}", config::stock_config_toml());
        return ExitCode::SUCCESS;
    }

    let page_config = match cli.page_config() {
        Ok(config) => config,
        Err(err) => Cli::command().error(ErrorKind::ValueValidation, err).exit(),
    };

    let sources = match pipeline::resolve_sources(&cli.sections, &cli.paths) {
        Ok(sources) => sources,
        Err(err) => usage_error(err),
    };

    let options = RunOptions {
        sources,
        output: cli.output.clone(),
        config: page_config,
        intro_md: cli.intro_md.clone(),
    };

    let mime = MimeRegistry::audio();
    let backend = markdown::available_backend();
    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();

    match pipeline::run(&options, &mime, backend.as_deref(), &generated_at) {
        Ok(report) => {
            output::print_summary(&report, &options.config);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Report a bad-input error the way clap reports its own, then exit.
fn usage_error(err: SourceError) -> ! {
    let kind = match err {
        SourceError::InvalidSpec(_) => ErrorKind::InvalidValue,
        SourceError::NotADirectory(_) => ErrorKind::ValueValidation,
        SourceError::NoInputs => ErrorKind::MissingRequiredArgument,
    };
    Cli::command().error(kind, err).exit()
}
