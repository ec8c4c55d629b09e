use clap::{Parser, Subcommand};
use log::debug;
use tokio::io::{AsyncBufReadExt, BufReader};

use recipe_dashboard::render::{render_dashboard, render_route, render_sidebar};
use recipe_dashboard::{DashboardError, DashboardSession, Route, Sidebar};

#[derive(Parser)]
#[command(name = "recipe-dashboard")]
#[command(about = "Search, filter and favorite recipes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch once and print the dashboard
    Search {
        /// Search text (the configured fallback term when omitted)
        #[arg(default_value = "")]
        query: String,
        /// Only show recipes tagged with this cuisine
        #[arg(long)]
        cuisine: Option<String>,
        /// Mark a recipe id as favorite (repeatable)
        #[arg(long = "favorite")]
        favorites: Vec<u64>,
        /// Show favorites instead of the search results
        #[arg(long)]
        favorites_only: bool,
    },
    /// Show the page for a route: / or /recipe/716429
    Show { path: String },
    /// Read commands from stdin
    Interactive,
}

const HELP: &str = "\
search <text>     change the search text
cuisine [name]    filter by cuisine, no name clears
fav <id>          toggle a favorite
favorites         toggle favorites-only view
open <path>       open / or /recipe/<id>
sidebar           collapse or expand the sidebar
help              this text
quit              exit";

#[tokio::main]
async fn main() -> Result<(), DashboardError> {
    env_logger::init();

    let cli = Cli::parse();
    let mut session = DashboardSession::builder().build()?;

    match cli.command {
        Commands::Search {
            query,
            cuisine,
            favorites,
            favorites_only,
        } => {
            if !session.set_search_text(query) {
                session.start();
            }
            session.settle().await;

            session.set_cuisine_filter(cuisine);
            for id in session.toggle_favorites(favorites) {
                eprintln!("Recipe {} is not in the results, not marked as favorite", id);
            }
            if favorites_only {
                session.toggle_show_favorites();
            }
            print!("{}", render_dashboard(&session.view()));
        }
        Commands::Show { path } => {
            let route: Route = path.parse()?;
            if route == Route::Dashboard {
                session.start();
            }
            print!("{}", render_route(&mut session, &route).await?);
        }
        Commands::Interactive => interactive(session).await?,
    }

    Ok(())
}

async fn interactive(mut session: DashboardSession) -> Result<(), DashboardError> {
    let mut sidebar = Sidebar::new(session.favorites_count());
    session.start();
    session.settle().await;
    print!("{}\n{}", render_sidebar(&sidebar), render_dashboard(&session.view()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, arg) = line.split_once(' ').unwrap_or((line, ""));
        let arg = arg.trim();
        debug!("Command '{}' with '{}'", command, arg);

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                println!("{}", HELP);
                continue;
            }
            "search" => {
                session.set_search_text(arg);
                session.settle().await;
            }
            "cuisine" => session.set_cuisine_filter(Some(arg)),
            "favorites" => {
                session.toggle_show_favorites();
            }
            "sidebar" => {
                sidebar.toggle_collapsed();
            }
            "fav" => match arg.parse() {
                Ok(id) => {
                    if let Err(e) = session.toggle_favorite(id) {
                        println!("{}", e);
                    }
                }
                Err(_) => println!("Not a recipe id: {}", arg),
            },
            "open" => {
                match arg.parse::<Route>() {
                    Ok(route) => match render_route(&mut session, &route).await {
                        Ok(page) => print!("{}", page),
                        Err(e) => println!("{}", e),
                    },
                    Err(e) => println!("{}", e),
                }
                continue;
            }
            other => {
                println!("Unknown command '{}', try 'help'", other);
                continue;
            }
        }

        print!("{}\n{}", render_sidebar(&sidebar), render_dashboard(&session.view()));
    }

    Ok(())
}
