use std::time::Duration;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fittrack::config::Config;
use fittrack::handlers::{auth, dashboard, leaderboard, progress, reminders, workouts};
use fittrack::repositories::{
    ReminderRepository, SessionRepository, UserRepository, WorkoutRepository,
};
use fittrack::version::GIT_VERSION;
use fittrack::{db, migrations, routes};

const SESSION_CLEANUP_INTERVAL: Duration = Duration::from_secs(60 * 60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fittrack=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    tracing::info!(version = GIT_VERSION, "Starting fittrack");
    tracing::info!("Connecting to database: {}", config.database_url);

    let pool = db::create_pool(&config.database_url)?;
    migrations::run_migrations(&pool)?;

    // Create repositories
    let user_repo = UserRepository::new(pool.clone());
    let workout_repo = WorkoutRepository::new(pool.clone());
    let reminder_repo = ReminderRepository::new(pool.clone());
    let session_repo = SessionRepository::new(pool.clone()).with_ttl_days(config.session_ttl_days);

    spawn_session_cleanup(session_repo.clone());

    // Create handler states
    let auth_state = auth::AuthState {
        user_repo,
        session_repo,
    };
    let dashboard_state = dashboard::DashboardState {
        workout_repo: workout_repo.clone(),
    };
    let workouts_state = workouts::WorkoutsState {
        workout_repo: workout_repo.clone(),
    };
    let progress_state = progress::ProgressState {
        workout_repo: workout_repo.clone(),
    };
    let leaderboard_state = leaderboard::LeaderboardState { workout_repo };
    let reminders_state = reminders::RemindersState { reminder_repo };

    let app = routes::create_router(
        auth_state,
        dashboard_state,
        workouts_state,
        progress_state,
        leaderboard_state,
        reminders_state,
    );

    let addr = config.server_addr();
    tracing::info!("Starting server at http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn spawn_session_cleanup(session_repo: SessionRepository) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            match session_repo.cleanup_expired().await {
                Ok(0) => {}
                Ok(removed) => tracing::debug!("Removed {} expired sessions", removed),
                Err(e) => tracing::warn!("Session cleanup failed: {}", e),
            }
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
