use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use upstair_api::SearchClient;
use upstair_core::models::FilterCriteria;
use upstair_core::notifications::deadline_alerts;
use upstair_core::profile::{Enrollment, Profile, ProfileUpdate};
use upstair_core::{filter, Catalog, Config, RemoteSource};

#[derive(Parser)]
#[command(name = "upstair")]
#[command(version, about = "Terminal client for the SearCh scholarship service", long_about = None)]
struct Cli {
    /// Override the configured backend URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Check credentials against the service
    Login {
        email: String,
        password: String,
    },
    /// List scholarships with client-derived recruitment status
    List {
        /// Title substring to search for
        #[arg(long)]
        search: Option<String>,
        /// Your GPA; filters locally together with --grade and --status
        #[arg(long, requires = "grade", requires = "status")]
        gpa: Option<f64>,
        /// Your academic year (1-4)
        #[arg(long, requires = "gpa")]
        grade: Option<u8>,
        /// Your enrollment status (재학/휴학)
        #[arg(long, requires = "gpa")]
        status: Option<String>,
    },
    /// Ask the server for its own filtered listing
    Filter {
        /// Your GPA
        #[arg(long)]
        gpa: f64,
        /// Your academic year (1-4)
        #[arg(long)]
        grade: u8,
        /// Your enrollment status (재학/휴학)
        #[arg(long)]
        status: String,
    },
    /// Deadline alerts derived from the current listing
    Notifications,
    /// Show or update a user profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
}

#[derive(clap::Subcommand)]
enum ProfileCommands {
    /// Fetch a profile by email
    Show { email: String },
    /// Update GPA, grade and enrollment status
    Update {
        email: String,
        #[arg(long)]
        gpa: f64,
        #[arg(long)]
        grade: u8,
        #[arg(long)]
        status: Enrollment,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging - helps when the backend goes sideways
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "upstair=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config::load().context("failed to load configuration")?;
    let base_url = cli.base_url.unwrap_or_else(|| config.api.base_url.clone());
    let client = SearchClient::with_timeout(
        base_url,
        std::time::Duration::from_secs(config.api.timeout_secs),
    );

    match cli.command {
        Commands::Login { email, password } => {
            let login = client.login(&email, &password).await?;
            let name = login.name.as_deref().unwrap_or("알 수 없음");
            println!("환영합니다, {}", name);
        }
        Commands::List {
            search,
            gpa,
            grade,
            status,
        } => {
            let catalog = Catalog::new(Box::new(RemoteSource::new(client)));
            let mut records = catalog.load().await?;

            if let Some(query) = search {
                records = filter::search_by_title(&records, &query);
            }

            if let (Some(gpa), Some(grade), Some(status)) = (gpa, grade, status) {
                records = filter::apply(&records, &FilterCriteria::new(gpa, grade, status));
            }

            let today = chrono::Local::now().date_naive();
            for record in &records {
                println!(
                    "[{}] {}  (마감일: {})",
                    record.status_on(today).label(),
                    record.title,
                    record.deadline_label
                );
                if !record.link.is_empty() {
                    println!("    {}", record.link);
                }
            }
            println!("{} scholarships", records.len());
        }
        Commands::Filter { gpa, grade, status } => {
            let catalog = Catalog::new(Box::new(RemoteSource::new(client)));
            let records = catalog
                .load_filtered(FilterCriteria::new(gpa, grade, status))
                .await?;

            for record in &records {
                if record.link.is_empty() {
                    println!("{}", record.title);
                } else {
                    println!("{}  {}", record.title, record.link);
                }
            }
            println!("{} scholarships (server-classified)", records.len());
        }
        Commands::Notifications => {
            let catalog = Catalog::new(Box::new(RemoteSource::new(client)));
            let records = catalog.load().await?;

            let today = chrono::Local::now().date_naive();
            let alerts = deadline_alerts(&records, today, config.notifications.window_days);

            for alert in &alerts {
                match alert.days_left {
                    0 => println!("{} - closes today!", alert.title),
                    1 => println!("{} - closes tomorrow ({})", alert.title, alert.deadline),
                    n => println!("{} - {} days left ({})", alert.title, n, alert.deadline),
                }
            }
            println!("{} unread alerts", alerts.len());
        }
        Commands::Profile { command } => match command {
            ProfileCommands::Show { email } => {
                let response = client.get_user(&email).await?;
                let profile = Profile::from_response(response);

                println!("email:      {}", profile.email);
                println!("nickname:   {}", profile.nickname);
                match profile.gpa {
                    Some(gpa) => println!("gpa:        {}", gpa),
                    None => println!("gpa:        -"),
                }
                match profile.grade {
                    Some(grade) => println!("grade:      {}학년", grade),
                    None => println!("grade:      -"),
                }
                match profile.enrollment {
                    Some(enrollment) => println!("enrollment: {}", enrollment),
                    None => println!("enrollment: -"),
                }
            }
            ProfileCommands::Update {
                email,
                gpa,
                grade,
                status,
            } => {
                let update = ProfileUpdate {
                    gpa,
                    grade,
                    enrollment: status,
                };
                let request = update.into_request(&email)?;

                let result = client.update_user(&request).await?;
                if result.success {
                    println!("{}", result.message.as_deref().unwrap_or("User updated"));
                } else {
                    anyhow::bail!("update rejected: {:?}", result.message);
                }
            }
        },
    }

    Ok(())
}
