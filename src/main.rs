mod cli;
mod clock;
mod config;
mod display;
mod error;
mod models;
mod relocate;
mod renderer;

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Overrides, TimeStyle};

#[derive(Parser)]
#[command(name = "newpost", version)]
#[command(about = "Scaffold a dated blog post and move it into _posts", long_about = None)]
struct Cli {
    /// Post title, e.g. "this is post title"
    title: String,

    /// Directory the post is moved into
    #[arg(long, value_name = "DIR")]
    posts_dir: Option<PathBuf>,

    /// Front-matter layout
    #[arg(long)]
    layout: Option<String>,

    /// Front-matter categories
    #[arg(long, value_name = "LIST")]
    categories: Option<String>,

    /// UTC offset written after the time, e.g. +0800
    #[arg(long, value_name = "OFFSET", allow_hyphen_values = true)]
    utc_offset: Option<String>,

    /// Time format in the date field
    #[arg(long, value_enum, value_name = "STYLE")]
    time_style: Option<TimeStyle>,

    /// Print the post instead of writing it
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let overrides = Overrides {
        posts_dir: cli.posts_dir,
        layout: cli.layout,
        categories: cli.categories,
        utc_offset: cli.utc_offset,
        time_style: cli.time_style,
    };

    if let Err(e) = cli::new::run(cli.title, overrides, cli.dry_run) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
