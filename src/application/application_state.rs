use super::{ApplicationEnv, DEFAULT_DB_NAME};
use crate::{
    repository::TicketsRepositoryImpl,
    service::tickets_service::{TicketsService, TicketsServiceImpl},
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub tickets_service: Arc<dyn TicketsService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_name = database_name(env, &db_client_options);
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&db_name);
    tracing::info!(%db_name, "connected to database");

    tracing::info!("creating repositories");
    let tickets_repository = TicketsRepositoryImpl::new(db).await?;
    let tickets_repository = Arc::new(tickets_repository);

    tracing::info!("creating services");
    let tickets_service = TicketsServiceImpl::new(tickets_repository);
    let tickets_service = Arc::new(tickets_service);

    Ok((
        ApplicationState { tickets_service },
        ApplicationStateToClose { db_client },
    ))
}

///
/// Explicitly configured name wins over the one from the connection string
///
fn database_name(env: &ApplicationEnv, db_client_options: &ClientOptions) -> String {
    env.db_name
        .clone()
        .or_else(|| db_client_options.default_database.clone())
        .unwrap_or_else(|| DEFAULT_DB_NAME.to_string())
}
