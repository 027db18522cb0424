use std::env;
use std::error::Error;
use std::io;
use std::io::BufRead;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use seqfmt::config::read_options;
use seqfmt::options::{parse_params, split_pair};
use seqfmt::{ContainerFormatter, FormatOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Render {
    /// elements as given
    Plain,
    /// elements in double quotes
    Quoted,
    /// elements in Rust debug form, escaping control characters
    Debug,
    /// elements in upper case
    Upper,
}

impl Render {
    fn apply(self, element: &str) -> String {
        match self {
            Render::Plain => element.to_string(),
            Render::Quoted => format!("\"{element}\""),
            Render::Debug => format!("{element:?}"),
            Render::Upper => element.to_uppercase(),
        }
    }
}

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// elements to print; read one per line from stdin if none are given
    elements: Vec<String>,

    /// JSON file to source the formatting options from
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// separator between elements
    #[clap(short = 's', long)]
    separator: Option<String>,

    /// printed before the first element
    #[clap(short = 'b', long)]
    begin: Option<String>,

    /// printed after the last element
    #[clap(short = 'e', long)]
    end: Option<String>,

    /// parameter override of the form key=value; unknown keys are ignored
    #[clap(short = 'p', long = "param")]
    params: Vec<String>,

    /// how each element is rendered
    #[clap(short = 'r', long, value_enum, default_value_t = Render::Plain)]
    render: Render,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        for param in &self.params {
            split_pair(param).ok_or(anyhow!("parameter {param:?} is not of the form key=value"))?;
        }
        Ok(())
    }

    /// Layers the options: defaults, then the config file, then -p overrides, then the
    /// dedicated flags.
    fn options(&self) -> anyhow::Result<FormatOptions> {
        let mut options = match &self.config {
            None => FormatOptions::default(),
            Some(path) => read_options(path)?,
        };
        let params = parse_params(self.params.iter().filter_map(|param| split_pair(param)));
        options = options.overlay(&params);
        if let Some(separator) = &self.separator {
            options = options.with_separator(unescape(separator));
        }
        if let Some(begin) = &self.begin {
            options = options.with_begin(unescape(begin));
        }
        if let Some(end) = &self.end {
            options = options.with_end(unescape(end));
        }
        Ok(options)
    }
}

/// Expands `\n` and `\t`, which are awkward to pass through a shell.
fn unescape(arg: &str) -> String {
    arg.replace("\\n", "\n").replace("\\t", "\t")
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let options = args.options()?;
    debug!("options: {options:?}");

    let elements = if args.elements.is_empty() {
        io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?
    } else {
        args.elements.clone()
    };

    let render = args.render;
    let mut formatter = ContainerFormatter::default()
        .with_options(options)
        .with_renderer(move |element: &String| render.apply(element));
    writeln!(formatter.print(&elements)?)?;
    Ok(())
}
