//! meetwhenah Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Update;
use tracing::{error, info, warn};

use meetwhenah::{
    config::Settings,
    database::{connection, DatabaseService},
    handlers::{self, Command},
    services::{ServiceFactory, Services},
    utils::logging,
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    logging::init_logging(&settings.logging)?;

    info!("Starting {}...", meetwhenah::info());

    // Initialize database connection
    info!("Connecting to database...");
    let db_config = connection::DatabaseConfig {
        url: settings.database.url.clone(),
        max_connections: settings.database.max_connections,
        min_connections: settings.database.min_connections,
        ..connection::DatabaseConfig::default()
    };
    let db_pool = connection::create_pool(&db_config).await?;

    // Run database migrations
    connection::run_migrations(&db_pool).await?;

    // Initialize the store and services
    let database_service = DatabaseService::new(db_pool);
    let services = ServiceFactory::new(database_service, settings.clone());

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);

    info!("Setting up bot handlers...");
    let services_arc = Arc::new(services);
    let settings_arc = Arc::new(settings.clone());

    let handler = create_handler();

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![services_arc, settings_arc])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    if let Some(webhook_url) = &settings.bot.webhook_url {
        info!("Webhook URL configured: {}", webhook_url);
        info!("Note: Webhook setup not implemented in this version, falling back to polling");
    }

    info!("meetwhenah bot is ready, starting polling...");
    dispatcher.dispatch().await;

    info!("meetwhenah bot has been shut down.");
    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .branch(
                    dptree::entry()
                        .filter_command::<Command>()
                        .endpoint(handle_commands),
                )
                .branch(
                    dptree::filter(|msg: Message| msg.web_app_data().is_some())
                        .endpoint(handle_web_app),
                ),
        )
        .branch(Update::filter_callback_query().endpoint(handle_callbacks))
        .branch(Update::filter_inline_query().endpoint(handle_inline))
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: Arc<Services>,
    settings: Arc<Settings>,
) -> HandlerResult {
    let services = (*services).clone();
    let settings = (*settings).clone();

    if let Err(e) = handlers::handle_command(bot, msg, cmd, services, settings).await {
        error!(error = %e, kind = %e.kind(), "Error handling command");
        return Err(e.into());
    }

    Ok(())
}

/// Handle web-app-data messages
async fn handle_web_app(
    bot: Bot,
    msg: Message,
    services: Arc<Services>,
) -> HandlerResult {
    let services = (*services).clone();

    if let Err(e) = handlers::handle_web_app_data(bot, msg, services).await {
        error!(error = %e, kind = %e.kind(), "Error handling web app data");
        return Err(e.into());
    }

    Ok(())
}

/// Handle callback queries
async fn handle_callbacks(
    bot: Bot,
    query: teloxide::types::CallbackQuery,
    services: Arc<Services>,
    settings: Arc<Settings>,
) -> HandlerResult {
    let services = (*services).clone();
    let settings = (*settings).clone();

    if let Err(e) = handlers::handle_callback_query(bot, query, services, settings).await {
        error!(error = %e, kind = %e.kind(), "Error handling callback query");
        return Err(e.into());
    }

    Ok(())
}

/// Handle inline queries
async fn handle_inline(
    bot: Bot,
    query: teloxide::types::InlineQuery,
    services: Arc<Services>,
) -> HandlerResult {
    let services = (*services).clone();

    if let Err(e) = handlers::handle_inline_query(bot, query, services).await {
        error!(error = %e, kind = %e.kind(), "Error handling inline query");
        return Err(e.into());
    }

    Ok(())
}
