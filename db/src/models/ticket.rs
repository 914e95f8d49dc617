use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub title: String,
    pub description: String,

    pub status: TicketStatus,
    pub priority: TicketPriority,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Ticket lifecycle state. Stored and serialized as its integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum TicketStatus {
    Open = 1,
    InProgress = 2,
    Resolved = 3,
    Closed = 4,
}

/// Ticket urgency. Stored and serialized as its integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum TicketPriority {
    Low = 1,
    Medium = 2,
    High = 3,
    Critical = 4,
}

impl TicketStatus {
    pub fn from_wire(value: i32) -> Option<Self> {
        match value {
            1 => Some(Self::Open),
            2 => Some(Self::InProgress),
            3 => Some(Self::Resolved),
            4 => Some(Self::Closed),
            _ => None,
        }
    }
}

impl TicketPriority {
    pub fn from_wire(value: i32) -> Option<Self> {
        match value {
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            4 => Some(Self::Critical),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Field-wise changes for a partial ticket update. `None` leaves the
/// corresponding column untouched.
#[derive(Debug, Default)]
pub struct UpdateTicket {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
}

impl Model {
    pub async fn create(
        db: &DbConn,
        title: &str,
        description: &str,
        priority: TicketPriority,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();

        let active_model = ActiveModel {
            title: Set(title.to_owned()),
            description: Set(description.to_owned()),
            status: Set(TicketStatus::Open),
            priority: Set(priority),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        active_model.insert(db).await
    }

    pub async fn find_by_id(db: &DbConn, ticket_id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(ticket_id).one(db).await
    }

    pub async fn exists(db: &DbConn, ticket_id: i64) -> Result<bool, DbErr> {
        Ok(Entity::find_by_id(ticket_id).one(db).await?.is_some())
    }

    /// Returns one page of tickets ordered newest-first, plus the total count
    /// across all pages. `page` is 1-based; a page past the end yields an
    /// empty slice rather than an error.
    pub async fn list_paginated(
        db: &DbConn,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<Model>, u64), DbErr> {
        let paginator = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .paginate(db, page_size);

        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(page - 1).await?;

        Ok((items, total))
    }

    /// Applies only the fields present in `changes` and refreshes
    /// `updated_at`. Returns `Ok(None)` when the ticket does not exist.
    pub async fn update(
        db: &DbConn,
        ticket_id: i64,
        changes: UpdateTicket,
    ) -> Result<Option<Model>, DbErr> {
        let model = match Entity::find_by_id(ticket_id).one(db).await? {
            Some(m) => m,
            None => return Ok(None),
        };

        let mut active_model: ActiveModel = model.into();

        if let Some(title) = changes.title {
            active_model.title = Set(title);
        }
        if let Some(description) = changes.description {
            active_model.description = Set(description);
        }
        if let Some(status) = changes.status {
            active_model.status = Set(status);
        }
        if let Some(priority) = changes.priority {
            active_model.priority = Set(priority);
        }
        active_model.updated_at = Set(Utc::now());

        active_model.update(db).await.map(Some)
    }

    /// Deletes the ticket and its comments in a single transaction.
    /// Returns `Ok(false)` when the ticket does not exist.
    pub async fn delete(db: &DbConn, ticket_id: i64) -> Result<bool, DbErr> {
        let txn = db.begin().await?;

        let model = match Entity::find_by_id(ticket_id).one(&txn).await? {
            Some(m) => m,
            None => {
                txn.rollback().await?;
                return Ok(false);
            }
        };

        super::comment::Entity::delete_many()
            .filter(super::comment::Column::TicketId.eq(ticket_id))
            .exec(&txn)
            .await?;
        model.delete(&txn).await?;

        txn.commit().await?;
        Ok(true)
    }
}
