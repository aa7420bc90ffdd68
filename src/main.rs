use actix_web::{App, HttpServer, middleware::Logger, web};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use authmaster::{
  adapters::http::{configure_account_routes, configure_auth_routes, configure_root_routes},
  application::{
    account::GetCurrentAccountUseCase,
    auth::{LoginUseCase, RegisterUseCase},
    root::GetApiIdentityUseCase,
  },
  domain::auth::{
    ports::{PasswordHasher, TokenIssuer, UserRepository},
    services::{AccountService, AuthService},
  },
  infrastructure::{
    clock::SystemClock,
    config::Config,
    persistence::postgres::PostgresUserRepository,
    security::{Argon2PasswordHasher, JwtTokenService},
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "authmaster=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting authmaster application");

  // Load configuration
  let config = Config::load().expect("Failed to load configuration");
  tracing::info!("Configuration loaded successfully");

  // Set up database connection pool with timeout
  tracing::info!("Connecting to database: {}", config.database.url);

  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.database.max_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .connect(&config.database.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      config.database.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database connection timed out after {} seconds",
        config.database.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to database: {}", e);
    match e {
      sqlx::Error::Io(_) => std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        format!(
          "Could not connect to database. Is PostgreSQL running at {}?",
          config.database.url
        ),
      ),
      _ => std::io::Error::other(format!("Database error: {}", e)),
    }
  })?;

  tracing::info!("Database connection pool created");

  // Run database migrations
  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .expect("Failed to run database migrations");
  tracing::info!("Database migrations completed");

  // Initialize infrastructure collaborators
  let users: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(db_pool));
  let password_hasher: Arc<dyn PasswordHasher> =
    Arc::new(Argon2PasswordHasher::new().expect("Failed to create password hasher"));
  let tokens: Arc<dyn TokenIssuer> = Arc::new(JwtTokenService::new(
    &config.auth.jwt_secret,
    Duration::from_secs(config.auth.access_token_ttl_seconds),
    Duration::from_secs(config.auth.refresh_token_ttl_seconds),
    Arc::new(SystemClock::new()),
  ));

  // Initialize domain services with the collaborators they need
  let auth_service = Arc::new(AuthService::new(
    users.clone(),
    password_hasher.clone(),
    tokens.clone(),
  ));
  let account_service = Arc::new(AccountService::new(users.clone(), password_hasher));

  // Initialize use cases
  let register_use_case = Arc::new(RegisterUseCase::new(account_service.clone()));
  let login_use_case = Arc::new(LoginUseCase::new(auth_service));
  let get_account_use_case = Arc::new(GetCurrentAccountUseCase::new(account_service));
  let identity_use_case = Arc::new(GetApiIdentityUseCase::new());

  let bind_address = (config.server.host.clone(), config.server.port);
  tracing::info!(
    "Starting HTTP server on {}:{}",
    config.server.host,
    config.server.port
  );

  HttpServer::new(move || {
    App::new()
      .wrap(Logger::default())
      .service(web::scope("/api/auth").configure(|cfg| {
        configure_auth_routes(cfg, register_use_case.clone(), login_use_case.clone());
      }))
      .service(web::scope("/api/account").configure(|cfg| {
        configure_account_routes(
          cfg,
          get_account_use_case.clone(),
          tokens.clone(),
          users.clone(),
        );
      }))
      .configure(|cfg| {
        configure_root_routes(cfg, identity_use_case.clone());
      })
  })
  .bind(bind_address)?
  .run()
  .await
}
