//! CLI entry point for canopy

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use canopy::{
    HtmlRenderer, IgnoreSet, Layout, LinkMode, OutputConfig, TreeWalker, WalkerConfig, print_json,
};
use clap::{Parser, ValueEnum};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

/// Page layout variant
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum LayoutArg {
    /// Banner with a menu toggle and a slide-in navigation panel
    #[default]
    Sidebar,
    /// Always-visible navigation panel beside the viewer
    Split,
    /// Plain list without an embedded viewer
    Flat,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Sidebar => Layout::Sidebar,
            LayoutArg::Split => Layout::Split,
            LayoutArg::Flat => Layout::Flat,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(about = "Render a directory tree as a browsable static HTML page")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output file; relative paths are joined to the scanned directory
    #[arg(short = 'o', long = "output", default_value = "index.html")]
    output: PathBuf,

    /// Page layout
    #[arg(long = "layout", value_name = "LAYOUT", default_value = "sidebar")]
    layout: LayoutArg,

    /// Build absolute link targets by prefixing this base address
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,

    /// Page title shown in the document title and banner
    #[arg(long = "title", default_value = "Directory Structure")]
    title: String,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Drop the built-in ignore list (.git, node_modules, ...)
    #[arg(long = "no-default-ignores")]
    no_default_ignores: bool,

    /// Print the walked tree as JSON instead of writing HTML
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    let output = if args.output.is_absolute() {
        args.output.clone()
    } else {
        root.join(&args.output)
    };

    let mut ignore = if args.no_default_ignores {
        IgnoreSet::empty()
    } else {
        IgnoreSet::with_defaults()
    };
    // Never index the generated page itself on a re-run.
    if let Some(name) = output.file_name() {
        ignore.insert(&name.to_string_lossy());
    }

    let walker = TreeWalker::new(WalkerConfig {
        ignore,
        ignore_patterns: args.ignore.clone(),
    });
    let tree = walker.walk(&root, "");

    if args.json {
        if let Err(e) = print_json(&tree) {
            eprintln!("canopy: error writing output: {}", e);
            process::exit(1);
        }
        return;
    }

    let renderer = HtmlRenderer::new(OutputConfig {
        layout: args.layout.into(),
        link_mode: match args.base_url {
            Some(base) => LinkMode::AbsoluteBase(base),
            None => LinkMode::Relative,
        },
        title: args.title.clone(),
        ..Default::default()
    });

    let markup = renderer.render_tree(&tree);
    let page = renderer.render_page(&markup);

    if let Err(e) = std::fs::write(&output, &page) {
        eprintln!("canopy: error writing {}: {}", output.display(), e);
        process::exit(1);
    }

    let (dir_count, file_count) = tree.counts();
    if let Err(e) = print_summary(
        dir_count,
        file_count,
        &output,
        should_use_color(args.color),
    ) {
        eprintln!("canopy: error writing output: {}", e);
        process::exit(1);
    }
}

/// Print the trailing `N directories, M files -> OUTPUT` summary line.
fn print_summary(dirs: usize, files: usize, output: &Path, use_color: bool) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write!(stdout, "{} directories, {} files -> ", dirs, files)?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(stdout, "{}", output.display())?;
    stdout.reset()?;
    writeln!(stdout)?;
    Ok(())
}
