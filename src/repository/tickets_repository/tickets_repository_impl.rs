use super::{
    entity::{TicketFindEntity, TicketInsertEntity},
    Ticket, TicketsRepository,
};
use crate::{
    dto::input::TicketStatus,
    repository::{self, Error},
};
use axum::async_trait;
use bson::{doc, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::{
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use uuid::Uuid;

const TICKETS: &str = "tickets";
const INDEX_NAME_UNIQUE_ID: &str = "unique_id";
const INDEX_NAME_STATUS: &str = "index_status";
const INDEX_NAME_CREATED_AT: &str = "index_created_at";

pub struct TicketsRepositoryImpl {
    database: Database,
}

impl TicketsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        tracing::debug!("fetching collection names");
        let collection_names = database.list_collection_names().await?;

        if !collection_names.contains(&TICKETS.to_string()) {
            tracing::debug!(collection = TICKETS, "creating collection");
            database.create_collection(TICKETS).await?;
        }

        let collection = database.collection::<Document>(TICKETS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        let indexes = [
            (INDEX_NAME_UNIQUE_ID, doc! { "id": 1 }, true),
            (INDEX_NAME_STATUS, doc! { "status": 1 }, false),
            (INDEX_NAME_CREATED_AT, doc! { "created_at": -1 }, false),
        ];
        for (name, keys, unique) in indexes {
            if index_names.iter().any(|index_name| index_name == name) {
                continue;
            }

            Self::create_index(&collection, name, keys, unique).await?;
            tracing::debug!(collection = TICKETS, index = name, "created index");
        }

        Ok(Self { database })
    }

    async fn create_index(
        collection: &Collection<Document>,
        name: &str,
        keys: Document,
        unique: bool,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(keys)
            .options(
                IndexOptions::builder()
                    .name(name.to_string())
                    .unique(unique)
                    .build(),
            )
            .build();

        collection.create_index(index).await?;

        Ok(())
    }

    fn status_filter(status: Option<TicketStatus>) -> Document {
        let mut filter = doc! {};
        if let Some(status) = status {
            filter.insert("status", status.as_ref());
        }

        filter
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn insert(&self, ticket: &Ticket) -> Result<(), repository::Error> {
        let insert_entity = TicketInsertEntity {
            id: ticket.id.into(),
            status: ticket.status,
            created_at: ticket.created_at.into(),
            deactivated_at: ticket.deactivated_at.map(DateTime::from),
        };

        self.database
            .collection::<TicketInsertEntity>(TICKETS)
            .insert_one(insert_entity)
            .await
            .map_err(|err| {
                let ErrorKind::Write(ref write_failure) = *err.kind else {
                    return Error::Mongo(err);
                };

                let WriteFailure::WriteError(write_error) = write_failure else {
                    return Error::Mongo(err);
                };

                const DUPLICATE_KEY_CODE: i32 = 11000;
                match write_error.code == DUPLICATE_KEY_CODE {
                    true => Error::InsertUniqueViolation,
                    false => Error::Mongo(err),
                }
            })?;

        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Ticket>, repository::Error> {
        let ticket = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find_one(doc! {
                "id": bson::Uuid::from(id),
            })
            .await?
            .map(Ticket::from);

        Ok(ticket)
    }

    async fn find_many(
        &self,
        status: Option<TicketStatus>,
    ) -> Result<Vec<Ticket>, repository::Error> {
        let cursor = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find(Self::status_filter(status))
            .sort(doc! {
                "created_at": -1,
                "_id": -1,
            })
            .await?;

        let tickets = cursor.map_ok(Ticket::from).try_collect().await?;

        Ok(tickets)
    }

    async fn update(
        &self,
        ticket: &Ticket,
        expected_status: TicketStatus,
    ) -> Result<(), repository::Error> {
        let update_result = self
            .database
            .collection::<Document>(TICKETS)
            .update_one(
                doc! {
                    "id": bson::Uuid::from(ticket.id),
                    "status": expected_status.as_ref(),
                },
                doc! {
                    "$set": {
                        "status": ticket.status.as_ref(),
                        "deactivated_at": ticket.deactivated_at.map(DateTime::from),
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn count(&self, status: Option<TicketStatus>) -> Result<u64, repository::Error> {
        let count = self
            .database
            .collection::<Document>(TICKETS)
            .count_documents(Self::status_filter(status))
            .await?;

        Ok(count)
    }
}
