use chrono::Utc;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracker_core::*;

#[derive(Parser)]
#[command(name = "daytrack")]
#[command(about = "Daily calorie, step, and hydration tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Read goals from this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print reports as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scripted day of meals, steps, and water (default)
    Simulate,

    /// Track a day interactively, one command per line on stdin
    Session,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracker_core::logging::init_with_level(tracker_core::logging::level_for_verbosity(
        cli.verbose,
    ));

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    tracing::debug!("Using goals {:?}", config.goals);

    let mut tracker = DailyTracker::new(config.goals.clone());

    match cli.command {
        Some(Commands::Session) => cmd_session(&mut tracker, cli.json),
        Some(Commands::Simulate) | None => cmd_simulate(&mut tracker, cli.json),
    }
}

fn cmd_simulate(tracker: &mut DailyTracker, json: bool) -> Result<()> {
    println!("--- Starting Mobile Health Tracker Simulation ---");

    println!("\n--- Morning Activity ---");
    print_outcome(tracker.log_meal("Breakfast (Oatmeal & Fruit)", 350));
    print_outcome(tracker.log_steps(2500));
    print_report(tracker, json)?;

    println!("\n(Simulating 1 hour passing...)");
    print_alarm(tracker, 1);

    println!("\n--- Mid-Morning Intake ---");
    print_outcome(tracker.log_water(0.5));
    print_report(tracker, json)?;

    println!("\n(Simulating 3 hours passing...)");
    print_alarm(tracker, 3);

    println!("\n--- Afternoon Activity ---");
    print_outcome(tracker.log_meal("Lunch (Sandwich)", 600));
    print_outcome(tracker.log_steps(3000));
    print_outcome(tracker.log_water(0.25));
    print_report(tracker, json)?;

    println!("\n(Simulating 3 hours passing again...)");
    print_alarm(tracker, 3);

    println!("\n--- End of Day Final Push ---");
    print_outcome(tracker.log_meal("Dinner & Dessert", 1200));
    print_outcome(tracker.log_steps(4500));
    print_outcome(tracker.log_water(1.75));
    print_report(tracker, json)?;

    println!("\n--- Simulation Complete ---");
    Ok(())
}

fn cmd_session(tracker: &mut DailyTracker, json: bool) -> Result<()> {
    let interactive = io::stdin().is_terminal();
    if interactive {
        println!("Tracking {}. Type 'help' for commands.", tracker.day());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            print!("> ");
            io::stdout().flush()?;
        }

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match command {
            Command::Meal {
                calories,
                description,
            } => print_outcome(tracker.log_meal(&description, calories)),
            Command::Steps(steps) => print_outcome(tracker.log_steps(steps)),
            Command::Water(liters) => print_outcome(tracker.log_water(liters)),
            Command::Alarm(hours) => {
                let hours = hours.unwrap_or_else(|| tracker.hours_since_last_drink(Utc::now()));
                print_alarm(tracker, hours);
            }
            Command::Report => print_report(tracker, json)?,
            Command::Meals => {
                if tracker.meal_log().is_empty() {
                    println!("No meals logged.");
                }
                for (i, meal) in tracker.meal_log().iter().enumerate() {
                    println!("{}. {}", i + 1, meal);
                }
            }
            Command::Help => println!("{}", tracker_core::command::HELP),
            Command::Quit => break,
        }
    }

    Ok(())
}

fn print_outcome(outcome: std::result::Result<LogReceipt, ValidationError>) {
    match outcome {
        Ok(receipt) => println!("{}", receipt),
        Err(e) => eprintln!("{}", e),
    }
}

fn print_alarm(tracker: &DailyTracker, hours: u64) {
    match tracker.raise_hydration_alarm(hours) {
        Some(alarm) => println!("\n{}\n", alarm),
        None => println!("No hydration alarm ({} hours since last drink).", hours),
    }
}

fn print_report(tracker: &DailyTracker, json: bool) -> Result<()> {
    let report = tracker.generate_report();
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("\n{}", report);
    }
    Ok(())
}
