mod store;

use std::path::PathBuf;

use authflow::{
    ApiError, AuthForm, Endpoints, FormMode, GateDecision, HttpAuthApi, RegistrationForm, StorageError, TokenStore,
    check_gate,
};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use store::FileTokenStore;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Form(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api error: {0}")]
    Api(#[from] ApiError),
    #[error("token file: {0}")]
    Storage(#[from] StorageError),
    #[error("health check failed with HTTP {0}")]
    Unhealthy(u16),
}

#[derive(Parser, Debug)]
#[command(name = "snet", about = "snetwork auth client")]
struct Cli {
    #[arg(long, env = "SNET_API_BASE", default_value = authflow::api::DEFAULT_API_BASE)]
    api_base: String,

    #[arg(long, env = "SNET_TOKEN_FILE", default_value = ".snet_token")]
    token_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the auth API answers.
    Ping,
    /// Log in and store the session token.
    Login {
        email: String,
        #[arg(long, env = "SNET_PASSWORD")]
        password: String,
    },
    /// Create an account.
    Register(RegisterArgs),
    /// End the server session.
    Logout {
        /// Also delete the local token file.
        #[arg(long, default_value_t = false)]
        forget: bool,
    },
    /// Report whether a session token is stored.
    Status,
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    username: String,
    #[arg(long)]
    email: String,
    #[arg(long, env = "SNET_PASSWORD")]
    password: String,
    #[arg(long, default_value = "")]
    age: String,
    #[arg(long, default_value = "")]
    first_name: String,
    #[arg(long, default_value = "")]
    last_name: String,
    #[arg(long, default_value = "")]
    gender: String,
    #[arg(long, default_value = "", help = "YYYY-MM-DD")]
    date_of_birth: String,
    #[arg(long, default_value = "")]
    avatar: String,
    #[arg(long, default_value = "")]
    bio: String,
    #[arg(long, default_value = "")]
    phone_number: String,
    #[arg(long, default_value = "")]
    address: String,
    #[arg(long, default_value_t = false)]
    private: bool,
}

impl From<RegisterArgs> for RegistrationForm {
    fn from(args: RegisterArgs) -> Self {
        Self {
            username: args.username,
            age: args.age,
            email: args.email,
            password: args.password,
            first_name: args.first_name,
            last_name: args.last_name,
            gender: args.gender,
            date_of_birth: args.date_of_birth,
            avatar: args.avatar,
            bio: args.bio,
            phone_number: args.phone_number,
            address: args.address,
            is_private: args.private,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api = HttpAuthApi::new(Endpoints::new(cli.api_base));
    let store = FileTokenStore::new(cli.token_file);

    match cli.command {
        Command::Ping => run_ping(&api).await,
        Command::Login { email, password } => run_login(&api, &store, email, password).await,
        Command::Register(args) => run_register(&api, args.into()).await,
        Command::Logout { forget } => run_logout(&api, &store, forget).await,
        Command::Status => {
            run_status(&store);
            Ok(())
        }
    }
}

async fn run_ping(api: &HttpAuthApi) -> Result<(), CliError> {
    let url = format!("{}/healthz", api.endpoints().base());
    let status = reqwest::get(url).await?.status();
    if !status.is_success() {
        return Err(CliError::Unhealthy(status.as_u16()));
    }
    println!("ok");
    Ok(())
}

async fn run_login(api: &HttpAuthApi, store: &FileTokenStore, email: String, password: String) -> Result<(), CliError> {
    let mut form = AuthForm { email, password, ..AuthForm::default() };
    let Some(nav) = form.submit_login(api, store).await else {
        return Err(CliError::Form(form.error));
    };
    println!("{}", form.success);
    println!("token saved to {}; next: {}", store.path().display(), nav.to);
    Ok(())
}

async fn run_register(api: &HttpAuthApi, registration: RegistrationForm) -> Result<(), CliError> {
    let mut form = AuthForm { mode: FormMode::Register, registration, ..AuthForm::default() };
    let Some(nav) = form.submit_register(api).await else {
        return Err(CliError::Form(form.error));
    };
    println!("{}", form.success);
    println!("next: {}", nav.to);
    Ok(())
}

async fn run_logout(api: &HttpAuthApi, store: &FileTokenStore, forget: bool) -> Result<(), CliError> {
    let nav = authflow::logout(api).await?;
    if forget {
        store.remove()?;
    }
    println!("logged out; next: {}", nav.to);
    Ok(())
}

fn run_status(store: &FileTokenStore) {
    match check_gate(store) {
        GateDecision::Render => println!("session token present ({})", store.path().display()),
        GateDecision::Redirect(to) => println!("no session token; next: {to}"),
    }
}
