use std::io::Write;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use sagasu::modules::catalog::application::SharedSink;
use sagasu::modules::catalog::domain::GENRE_CATALOG;
use sagasu::modules::catalog::view::{DetailView, DismissTrigger, TerminalView};
use sagasu::modules::catalog::{Category, GenreFilter, JikanClient, Season, ViewController};
use sagasu::modules::preferences::{PreferenceStore, Theme};
use sagasu::shared::utils::init_logger;

fn theme_icon(theme: Theme) -> &'static str {
    if theme.is_dark() {
        "🌙"
    } else {
        "☀️"
    }
}

fn print_help() {
    println!("commands:");
    println!("  search <text>     free-text search");
    println!("  top | airing      category tabs");
    println!("  season [<name>]   season tab, or set the season picker");
    println!("  year <year>       set the year picker");
    println!("  genre [<name>]    genre tab, or set the genre picker");
    println!("  next | prev       pagination");
    println!("  open <n>          open the detail view for card n");
    println!("  close             close the detail view");
    println!("  genres            list genre picker options");
    println!("  theme             toggle dark mode");
    println!("  help | quit");
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logger();

    let store = PreferenceStore::open_default()?;
    let mut theme = store.load_theme();

    let provider = Arc::new(JikanClient::new()?);
    let sink: SharedSink = Arc::new(Mutex::new(TerminalView::new()));
    let controller = ViewController::new(provider, Arc::clone(&sink));
    let mut detail = DetailView::new();

    println!("sagasu anime search ({} {})", theme_icon(theme), theme);
    print_help();

    controller.select_tab(Category::Top).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "search" => {
                if controller.submit_search(rest).await.is_none() {
                    println!("nothing to search for");
                }
            }
            "top" => {
                controller.select_tab(Category::Top).await;
            }
            "airing" => {
                controller.select_tab(Category::Airing).await;
            }
            "season" if rest.is_empty() => {
                controller.select_tab(Category::Season).await;
            }
            "season" => match Season::parse(rest) {
                Some(season) => {
                    controller.set_season(season).await;
                }
                None => println!("unknown season: {} (winter/spring/summer/fall)", rest),
            },
            "year" => match rest.parse::<i32>() {
                Ok(year) => {
                    controller.set_year(year).await;
                }
                Err(_) => println!("not a year: {}", rest),
            },
            "genre" if rest.is_empty() => {
                controller.select_tab(Category::Genre).await;
            }
            "genre" => match GenreFilter::by_name(rest) {
                Some(genre) => {
                    controller.set_genre(genre).await;
                }
                None => println!("unknown genre: {} (see `genres`)", rest),
            },
            "next" => {
                if controller.next_page().await.is_none() {
                    println!("no next page");
                }
            }
            "prev" => {
                if controller.previous_page().await.is_none() {
                    println!("no previous page");
                }
            }
            "open" => match rest.parse::<usize>() {
                Ok(number) if number >= 1 => match controller.select_result(number - 1) {
                    Some(item) => {
                        let mut sink = sink.lock().unwrap();
                        detail.open(&item, &mut *sink);
                    }
                    None => println!("no card {}", number),
                },
                _ => println!("usage: open <n>"),
            },
            "close" => {
                detail.dismiss(DismissTrigger::CloseControl);
                let mut sink = sink.lock().unwrap();
                detail.finish_close(&mut *sink);
            }
            "genres" => {
                for (_, name) in GENRE_CATALOG {
                    println!("  {}", name);
                }
            }
            "theme" => {
                theme = theme.toggled();
                store.save_theme(theme)?;
                println!("{} {} mode", theme_icon(theme), theme);
            }
            "help" => print_help(),
            "quit" | "exit" => break,
            _ => println!("unknown command: {} (try `help`)", command),
        }
    }

    Ok(())
}
