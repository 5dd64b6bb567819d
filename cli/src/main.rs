//! gsadmin: command-line console for the waste-report administration backend.

mod commands;
mod output;
mod settings;

use clap::{Parser, Subcommand};
use gsadmin_client::{AdminClient, ReportQuery, SessionStore};
use gsadmin_types::{ReportId, ReportStatus, StaffId, SupervisorDraft, WorkerDraft};
use gsadmin_utils::LogFormat;
use gsadmin_verification::InFlightRegistry;
use std::path::PathBuf;
use std::process::ExitCode;

use commands::{auth, insights, reports, staff, Ctx};
use output::Output;
use settings::Overrides;

#[derive(Parser)]
#[command(name = "gsadmin", version, about = "Waste-report administration console")]
struct Cli {
    /// Print one JSON envelope on stdout instead of human-readable text.
    #[arg(long, global = true, env = "GSADMIN_JSON")]
    json: bool,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, global = true, env = "GSADMIN_CONFIG")]
    config: Option<PathBuf>,

    /// Backend base URL, e.g. "https://gs-admin.example.org".
    #[arg(long, global = true, env = "GSADMIN_API_BASE")]
    api_base: Option<String>,

    /// Where the signed-in session is stored.
    #[arg(long, global = true, env = "GSADMIN_SESSION_FILE")]
    session_file: Option<PathBuf>,

    /// Request timeout in seconds.
    #[arg(long, global = true, env = "GSADMIN_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, global = true, env = "GSADMIN_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, global = true, env = "GSADMIN_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Rows per page for client-side listings.
    #[arg(long, global = true, env = "GSADMIN_PAGE_SIZE")]
    page_size: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign in as an administrator.
    Login {
        #[arg(long, env = "GSADMIN_EMAIL")]
        email: String,
        /// Read from stdin when omitted.
        #[arg(long, env = "GSADMIN_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Sign out and remove the stored session.
    Logout,
    /// Show the signed-in administrator.
    Whoami,
    /// Headline numbers, status counts and activity charts.
    Dashboard,
    /// Citizen reports and resolution review.
    Reports {
        #[command(subcommand)]
        action: ReportsAction,
    },
    /// Supervisor accounts.
    Supervisors {
        #[command(subcommand)]
        action: SupervisorsAction,
    },
    /// Field workers.
    Workers {
        #[command(subcommand)]
        action: WorkersAction,
    },
    /// Registered citizens.
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },
    /// Distribution, performance, attendance and trend charts.
    Analytics,
}

#[derive(Subcommand)]
enum ReportsAction {
    /// List reports, filtered server-side.
    List {
        #[arg(long)]
        status: Option<ReportStatus>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Defaults to the configured page size.
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one report.
    Show { id: ReportId },
    /// Report counts per status.
    Counts,
    /// Verify a resolved report's proof location without changing it.
    Review { id: ReportId },
    /// Permanently resolve a report whose proof is within the threshold.
    Approve { id: ReportId },
    /// Reject a resolution whose proof is beyond the threshold.
    Reject {
        id: ReportId,
        #[arg(long)]
        reason: String,
    },
}

#[derive(Subcommand)]
enum SupervisorsAction {
    /// List supervisors with a summary.
    List,
    /// Create a supervisor account.
    Create {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "GSADMIN_SUPERVISOR_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Delete a supervisor account.
    Delete { id: StaffId },
    /// Per-supervisor performance breakdown.
    Performance { id: StaffId },
    /// Assign reports to a supervisor.
    Assign {
        supervisor: StaffId,
        #[arg(required = true, num_args = 1..)]
        reports: Vec<ReportId>,
        #[arg(long, default_value = "")]
        message: String,
    },
}

#[derive(Subcommand)]
enum WorkersAction {
    /// List workers, filtered by name, phone, area or supervisor.
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Create a worker.
    Create {
        #[command(flatten)]
        fields: WorkerFields,
    },
    /// Replace a worker's details.
    Update {
        id: StaffId,
        #[command(flatten)]
        fields: WorkerFields,
    },
    /// Delete a worker.
    Delete { id: StaffId },
    /// Attendance records, optionally between two ISO dates.
    Attendance {
        id: StaffId,
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
    },
}

#[derive(clap::Args)]
struct WorkerFields {
    #[arg(long)]
    name: String,
    #[arg(long)]
    phone: String,
    #[arg(long)]
    area: String,
    #[arg(long)]
    supervisor: Option<StaffId>,
}

impl From<WorkerFields> for WorkerDraft {
    fn from(f: WorkerFields) -> Self {
        WorkerDraft {
            name: f.name.trim().to_string(),
            phone: f.phone.trim().to_string(),
            area: f.area.trim().to_string(),
            supervisor_id: f.supervisor,
        }
    }
}

#[derive(Subcommand)]
enum UsersAction {
    /// List users, filtered by username.
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let out = Output::new(cli.json);
    match run(cli, out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            out.error(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, out: Output) -> anyhow::Result<()> {
    let config = settings::resolve(
        cli.config.as_deref(),
        Overrides {
            api_base: cli.api_base,
            session_file: cli.session_file,
            timeout_secs: cli.timeout_secs,
            log_level: cli.log_level,
            log_format: cli.log_format,
            page_size: cli.page_size,
        },
    )?;
    gsadmin_utils::init_logging(settings::log_format(&config)?, &config.log_level);
    tracing::debug!(api_base = %config.api_base, "configuration resolved");

    let store = SessionStore::new(&config.session_file);
    let session = store.load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable session; sign in again");
        None
    });
    let client = AdminClient::new(&config)?.with_session(session);
    let mut ctx = Ctx {
        config,
        client,
        store,
        registry: InFlightRegistry::new(),
        out,
    };

    match cli.command {
        Command::Login { email, password } => auth::login(&mut ctx, &email, password).await,
        Command::Logout => auth::logout(&mut ctx).await,
        Command::Whoami => auth::whoami(&ctx),
        Command::Dashboard => insights::dashboard(&ctx).await,
        Command::Analytics => insights::analytics(&ctx).await,
        Command::Reports { action } => match action {
            ReportsAction::List {
                status,
                page,
                limit,
                search,
            } => {
                let query = ReportQuery {
                    status,
                    page,
                    limit: limit.unwrap_or(ctx.config.page_size),
                    search,
                };
                reports::list(&ctx, query).await
            }
            ReportsAction::Show { id } => reports::show(&ctx, &id).await,
            ReportsAction::Counts => reports::counts(&ctx).await,
            ReportsAction::Review { id } => reports::review(&ctx, &id).await,
            ReportsAction::Approve { id } => reports::approve(&ctx, &id).await,
            ReportsAction::Reject { id, reason } => reports::reject(&ctx, &id, &reason).await,
        },
        Command::Supervisors { action } => match action {
            SupervisorsAction::List => staff::list_supervisors(&ctx).await,
            SupervisorsAction::Create {
                username,
                email,
                password,
            } => {
                let draft = SupervisorDraft {
                    username: username.trim().to_string(),
                    email: email.trim().to_string(),
                    password,
                };
                staff::create_supervisor(&ctx, draft).await
            }
            SupervisorsAction::Delete { id } => staff::delete_supervisor(&ctx, &id).await,
            SupervisorsAction::Performance { id } => {
                staff::supervisor_performance(&ctx, &id).await
            }
            SupervisorsAction::Assign {
                supervisor,
                reports,
                message,
            } => staff::assign(&ctx, &supervisor, &reports, &message).await,
        },
        Command::Workers { action } => match action {
            WorkersAction::List { search, page } => staff::list_workers(&ctx, &search, page).await,
            WorkersAction::Create { fields } => staff::create_worker(&ctx, fields.into()).await,
            WorkersAction::Update { id, fields } => {
                staff::update_worker(&ctx, &id, fields.into()).await
            }
            WorkersAction::Delete { id } => staff::delete_worker(&ctx, &id).await,
            WorkersAction::Attendance { id, from, to } => {
                staff::attendance(&ctx, &id, from.as_deref(), to.as_deref()).await
            }
        },
        Command::Users { action } => match action {
            UsersAction::List { search, page } => staff::list_users(&ctx, &search, page).await,
        },
    }
}
