mod error;
mod post;
mod render;

use clap::{Parser, Subcommand};
use pagebar_core::{DEFAULT_PAGE_SIZE, PagedView, compute_window};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pagebar-cli")]
#[command(about = "Render paged list views and their page-number bars")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one page of a record file
    Show {
        /// JSON file containing an array of posts
        file: PathBuf,
        /// Page to display (1-indexed)
        #[arg(short, long, default_value = "1")]
        page: usize,
        /// Items per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },
    /// Print the page window around a page, without any data
    Window {
        /// Current page (1-indexed)
        page: usize,
        /// Total number of pages
        total: usize,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Show {
            file,
            page,
            page_size,
        } => {
            let mut view = PagedView::new(page_size);
            // A bad or missing file is logged and shown as an empty list.
            view.load(post::load_posts(&file));
            view.go_to(page);

            let state = view.snapshot();
            for post in state.visible_items {
                println!("{} : {}", post.id, post.title);
            }
            println!();
            println!("{}", render::page_bar(&state));
            println!("Page {} of {}", state.current_page, state.total_pages);
        }
        Commands::Window { page, total } => {
            let window = compute_window(page, total);
            println!("leading:  {:?}", window.leading);
            println!("trailing: {:?}", window.trailing);
        }
    }
}
