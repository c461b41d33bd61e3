use clap::Parser;
use css2html_lib::{compile, Config, WriteTarget};
use std::fs;
use std::path::PathBuf;
use std::process;

const CSS2HTML_INTRO: &str = r#"
    css2html - turn stylesheet rules into HTML markup
"#;

#[derive(Parser)]
#[command(name = "css2html")]
#[command(about = "Generate HTML from the selectors and custom properties of a CSS file")]
struct Args {
    /// CSS file to compile.
    input: PathBuf,

    /// HTML file to write the result into. Created when missing.
    #[arg(short, long, value_name = "PATH")]
    write_in: Option<PathBuf>,

    /// Insert after the first occurrence of this text in the target file.
    #[arg(short, long, requires = "write_in")]
    after: Option<String>,

    /// Insert before the last occurrence of this text in the target file.
    #[arg(short, long, requires = "write_in")]
    before: Option<String>,

    /// Skip the HTML formatting pass.
    #[arg(long)]
    no_format: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // parse the args given in terminal
    let args: Args = Args::parse();

    let css = match fs::read_to_string(&args.input) {
        Ok(css) => css,
        Err(e) => {
            eprintln!("Error reading CSS file {}: {}", args.input.display(), e);
            process::exit(1);
        }
    };

    let mut config = Config::new(css).format(!args.no_format);
    if let Some(path) = args.write_in {
        let mut target = WriteTarget::new(path);
        target.after = args.after;
        target.before = args.before;
        config = config.write_in(target);
    }

    match compile(&config) {
        Ok(Some(html)) => match &config.write {
            Some(target) => {
                eprintln!("{}", CSS2HTML_INTRO);
                eprintln!("Successfully wrote {}.", target.path.display());
            }
            None => print!("{}", html),
        },
        Ok(None) => log::warn!("{} produced no elements", args.input.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
