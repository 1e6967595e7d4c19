use clap::{Args, Parser, Subcommand};

use admission_portal::error::AppError;

use crate::demo::{run_demo, run_faq_ask, run_waiver_calc, AskArgs, DemoArgs, WaiverCalcArgs};
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "Admission Portal",
    about = "Run the admission portal service and its waiver/FAQ tools from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate waiver eligibility for a single student record
    Waiver {
        #[command(subcommand)]
        command: WaiverCommand,
    },
    /// Query the FAQ matcher from the command line
    Faq {
        #[command(subcommand)]
        command: FaqCommand,
    },
    /// Run a demo covering waiver evaluation and the assistant
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum WaiverCommand {
    /// Calculate every waiver a student qualifies for
    Calc(WaiverCalcArgs),
}

#[derive(Subcommand, Debug)]
enum FaqCommand {
    /// Ask one question against the FAQ sheet
    Ask(AskArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Waiver {
            command: WaiverCommand::Calc(args),
        } => run_waiver_calc(args),
        Command::Faq {
            command: FaqCommand::Ask(args),
        } => run_faq_ask(args),
        Command::Demo(args) => run_demo(args),
    }
}
