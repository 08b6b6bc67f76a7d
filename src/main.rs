use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::{debug, info};

use recipe_browser::render::{render, EMPTY_SELECTION_NOTICE};
use recipe_browser::{
    BrowserConfig, BrowserError, BrowserState, Category, Direction, Event, OutputFormat,
    RecipeTable, Selection,
};

/// Browse recipes by cuisine, course and diet
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the recipe CSV file (overrides the configured dataset)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Output format of recipe cards: text, html or json
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the distinct values of the category columns
    Categories {
        /// cuisine, course or diet; all three when omitted
        category: Option<Category>,
    },
    /// Show a random matching recipe, or the one next to --name
    Show {
        #[command(flatten)]
        filters: Filters,
        /// Recipe to start from
        #[arg(long)]
        name: Option<String>,
        #[arg(long, requires = "name", conflicts_with = "next")]
        previous: bool,
        #[arg(long, requires = "name")]
        next: bool,
    },
    /// Interactive browsing on stdin
    Browse {
        #[command(flatten)]
        filters: Filters,
    },
}

/// Category filters; an omitted filter selects every value
#[derive(Args, Debug, Default)]
struct Filters {
    #[arg(long = "cuisine", value_name = "CUISINE")]
    cuisines: Vec<String>,
    #[arg(long = "course", value_name = "COURSE")]
    courses: Vec<String>,
    #[arg(long = "diet", value_name = "DIET")]
    diets: Vec<String>,
}

impl Filters {
    fn selection(&self, table: &RecipeTable) -> Selection {
        let mut selection = Selection::all(table);
        for (category, values) in [
            (Category::Cuisine, &self.cuisines),
            (Category::Course, &self.courses),
            (Category::Diet, &self.diets),
        ] {
            if !values.is_empty() {
                selection.set(category, values.iter().cloned());
            }
        }
        selection
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = BrowserConfig::load().map_err(BrowserError::from)?;
    let dataset = cli.data.unwrap_or_else(|| PathBuf::from(&config.dataset));
    let format = cli.format.unwrap_or(config.format);

    let table = RecipeTable::from_path(&dataset)?;
    info!("Loaded {} recipes from {}", table.len(), dataset.display());

    match cli.command {
        Command::Categories { category } => {
            let categories = category.map_or(Category::ALL.to_vec(), |c| vec![c]);
            for category in categories {
                println!("{}:", category);
                for value in table.categories(category) {
                    println!("  {}", value);
                }
            }
        }
        Command::Show {
            filters,
            name,
            previous,
            next,
        } => {
            let selection = filters.selection(&table);
            let mut rng = rand::rng();
            let state = match name {
                Some(name) => BrowserState {
                    selection,
                    current: Some(name),
                },
                None => BrowserState::default().on_filters_changed(&table, selection, &mut rng),
            };
            let state = match (previous, next) {
                (true, _) => state.handle(&table, Event::Previous, &mut rng),
                (_, true) => state.handle(&table, Event::Next, &mut rng),
                _ => Ok(state),
            };
            match state {
                Ok(state) => print_card(&state, &table, format)?,
                Err(err) => report(err)?,
            }
        }
        Command::Browse { filters } => {
            browse(&table, filters.selection(&table), format)?;
        }
    }

    Ok(())
}

/// Print a non-fatal error as a notice; fatal errors are propagated
fn report(err: BrowserError) -> Result<(), BrowserError> {
    match err {
        BrowserError::EmptySelection => {
            println!("{}", EMPTY_SELECTION_NOTICE);
            Ok(())
        }
        err if !err.is_fatal() => {
            println!("{}", err);
            Ok(())
        }
        err => Err(err),
    }
}

fn print_card(
    state: &BrowserState,
    table: &RecipeTable,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match state.current_recipe(table) {
        Ok(recipe) => println!("{}", render(recipe, format)?),
        Err(err) => report(err)?,
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum BrowseCommand {
    Navigate(Direction),
    Random,
    /// Replace one category's values; `None` selects them all
    Filter(Category, Option<Vec<String>>),
    Quit,
}

fn parse_browse_command(line: &str) -> Result<BrowseCommand, String> {
    let line = line.trim();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    match word {
        "n" | "next" => Ok(BrowseCommand::Navigate(Direction::Next)),
        "p" | "prev" | "previous" => Ok(BrowseCommand::Navigate(Direction::Previous)),
        "r" | "random" => Ok(BrowseCommand::Random),
        "q" | "quit" => Ok(BrowseCommand::Quit),
        _ => {
            let category = word
                .parse::<Category>()
                .map_err(|_| format!("Unknown command '{}'", word))?;
            let rest = rest.trim();
            let values = if rest == "*" {
                None
            } else {
                Some(
                    rest.split(',')
                        .map(str::trim)
                        .filter(|v| !v.is_empty())
                        .map(str::to_string)
                        .collect(),
                )
            };
            Ok(BrowseCommand::Filter(category, values))
        }
    }
}

fn browse(
    table: &RecipeTable,
    selection: Selection,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::rng();
    let mut state = BrowserState::default().on_filters_changed(table, selection, &mut rng);
    print_card(&state, table, format)?;

    let stdin = io::stdin();
    loop {
        print_prompt(&state, table)?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let event = match parse_browse_command(&line) {
            Ok(BrowseCommand::Quit) => break,
            Ok(BrowseCommand::Navigate(Direction::Next)) => Event::Next,
            Ok(BrowseCommand::Navigate(Direction::Previous)) => Event::Previous,
            Ok(BrowseCommand::Random) => Event::FiltersChanged(state.selection.clone()),
            Ok(BrowseCommand::Filter(category, values)) => {
                let mut selection = state.selection.clone();
                match values {
                    Some(values) => selection.set(category, values),
                    None => selection.set(category, table.categories(category)),
                }
                Event::FiltersChanged(selection)
            }
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };
        debug!("Handling {:?}", event);

        match state.handle(table, event, &mut rng) {
            Ok(next) => {
                state = next;
                print_card(&state, table, format)?;
            }
            Err(err) => report(err)?,
        }
    }
    Ok(())
}

fn print_prompt(state: &BrowserState, table: &RecipeTable) -> io::Result<()> {
    let button = |direction: Direction, label: &str| {
        if state.can_navigate(table, direction) {
            format!("[{}]", label)
        } else {
            format!("({} disabled)", label)
        }
    };
    print!(
        "{} {} [r]andom [cuisine|course|diet <a,b|*>] [q]uit > ",
        button(Direction::Previous, "p"),
        button(Direction::Next, "n")
    );
    io::stdout().flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation_commands() {
        assert_eq!(
            parse_browse_command("n\n"),
            Ok(BrowseCommand::Navigate(Direction::Next))
        );
        assert_eq!(
            parse_browse_command("prev"),
            Ok(BrowseCommand::Navigate(Direction::Previous))
        );
        assert_eq!(parse_browse_command(" q "), Ok(BrowseCommand::Quit));
    }

    #[test]
    fn test_parse_filter_command() {
        assert_eq!(
            parse_browse_command("cuisine South Indian, Kerala"),
            Ok(BrowseCommand::Filter(
                Category::Cuisine,
                Some(vec!["South Indian".to_string(), "Kerala".to_string()])
            ))
        );
        assert_eq!(
            parse_browse_command("Diet *"),
            Ok(BrowseCommand::Filter(Category::Diet, None))
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(parse_browse_command("dance").is_err());
    }

    #[test]
    fn test_omitted_filters_select_everything() {
        let table = RecipeTable::new(vec![recipe_browser::Recipe {
            name: "Dal".to_string(),
            cuisine: "North Indian".to_string(),
            course: "Main Course".to_string(),
            diet: "Vegetarian".to_string(),
            ..Default::default()
        }]);
        let filters = Filters {
            diets: vec!["Vegan".to_string()],
            ..Default::default()
        };

        let selection = filters.selection(&table);
        assert!(selection.cuisines.contains("North Indian"));
        assert!(selection.apply(&table).is_empty());
    }
}
