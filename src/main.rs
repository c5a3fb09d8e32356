use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use modevaert_planner::display::{print_meetings, print_schedule, print_summary};
use modevaert_planner::documents::load_documents;
use modevaert_planner::export::write_schedule;
use modevaert_planner::{load_roster, plan_hosts, web, PlannerError, RosterOptions};

/// Plans meeting hosts from a member roster and meeting programmes
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read roster + programmes, print the schedule and write it to a file
    Plan(PlanArgs),
    /// Serve the planner over HTTP
    Web(WebArgs),
}

#[derive(Args, Debug)]
struct PlanArgs {
    /// Roster file (.xlsx, .xls, .ods or .csv)
    #[arg(short, long)]
    roster: PathBuf,

    /// Meeting programme (.pdf or .txt); repeat for several
    #[arg(short, long = "program", required = true, num_args = 1..)]
    programs: Vec<PathBuf>,

    /// Output file; .xlsx or .csv
    #[arg(short, long, default_value = "modevart_tidsplan.xlsx")]
    output: PathBuf,

    /// Zero-based roster column holding the names
    #[arg(long, default_value_t = 0)]
    roster_column: usize,

    /// Header rows to skip before the first name
    #[arg(long, default_value_t = 2)]
    roster_skip: usize,

    /// Also list every registered meeting and its busy members
    #[arg(long)]
    show_meetings: bool,
}

#[derive(Args, Debug)]
struct WebArgs {
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    port: u16,
}

fn run_plan(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let options = RosterOptions {
        column: args.roster_column,
        skip_rows: args.roster_skip,
    };
    let members = load_roster(&args.roster, &options)?;

    println!("Medlemsfil: {}", args.roster.display());
    println!("Mødeprogrammer: {} fil(er)", args.programs.len());
    for (i, program) in args.programs.iter().enumerate() {
        println!("  {}. {}", i + 1, program.display());
    }

    let documents = load_documents(&args.programs)?;
    let plan = match plan_hosts(&members, &documents) {
        Ok(plan) => plan,
        Err(e @ PlannerError::NoMeetingsFound { .. }) => {
            eprintln!("Ingen møder fundet i programmerne. Kontroller venligst filerne og prøv igen.");
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };
    println!("\n{} møde(r) registreret og behandlet", plan.meetings.len());

    if args.show_meetings {
        print_meetings(&plan);
    }
    print_schedule(&plan.schedule);
    print_summary(&plan.summary);

    write_schedule(&args.output, &plan.schedule)?;
    println!("\nTidsplan gemt i {}", args.output.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Plan(args) => run_plan(args),
        Commands::Web(args) => {
            info!("Starting web server on port {}", args.port);
            println!("Access the site at http://localhost:{}", args.port);
            web::start_server(args.port).await?;
            Ok(())
        }
    }
}
