//! News command and query handlers.
//!
//! Each handler holds exactly the service it needs and maps its
//! request's fields onto one service call, nothing more.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::mediator::{mismatched_request, CommandHandler, QueryHandler};
use crate::application::requests::{Command, CommandOutcome, Query, QueryOutcome};
use crate::domain::foundation::DomainError;
use crate::domain::news::NewsService;

pub struct CreateNewsHandler {
    service: Arc<NewsService>,
}

impl CreateNewsHandler {
    pub fn new(service: Arc<NewsService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CommandHandler for CreateNewsHandler {
    async fn handle(&self, command: &Command) -> Result<CommandOutcome, DomainError> {
        match command {
            Command::CreateNews(cmd) => {
                let created = self.service.create(cmd.news.clone()).await?;
                Ok(CommandOutcome::News(created))
            }
            _ => Err(mismatched_request("CreateNewsHandler")),
        }
    }
}

pub struct UpdateNewsHandler {
    service: Arc<NewsService>,
}

impl UpdateNewsHandler {
    pub fn new(service: Arc<NewsService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CommandHandler for UpdateNewsHandler {
    async fn handle(&self, command: &Command) -> Result<CommandOutcome, DomainError> {
        match command {
            Command::UpdateNews(cmd) => {
                let updated = self.service.update(cmd.news.clone()).await?;
                Ok(CommandOutcome::News(updated))
            }
            _ => Err(mismatched_request("UpdateNewsHandler")),
        }
    }
}

pub struct DeleteNewsHandler {
    service: Arc<NewsService>,
}

impl DeleteNewsHandler {
    pub fn new(service: Arc<NewsService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CommandHandler for DeleteNewsHandler {
    async fn handle(&self, command: &Command) -> Result<CommandOutcome, DomainError> {
        match command {
            Command::DeleteNews(cmd) => {
                self.service.delete(&cmd.id).await?;
                Ok(CommandOutcome::Done)
            }
            _ => Err(mismatched_request("DeleteNewsHandler")),
        }
    }
}

pub struct GetNewsByIdHandler {
    service: Arc<NewsService>,
}

impl GetNewsByIdHandler {
    pub fn new(service: Arc<NewsService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl QueryHandler for GetNewsByIdHandler {
    async fn handle(&self, query: &Query) -> Result<QueryOutcome, DomainError> {
        match query {
            Query::GetNewsById(qry) => {
                let news = self.service.get_by_id(&qry.id).await?;
                Ok(QueryOutcome::News(news))
            }
            _ => Err(mismatched_request("GetNewsByIdHandler")),
        }
    }
}

pub struct ListNewsHandler {
    service: Arc<NewsService>,
}

impl ListNewsHandler {
    pub fn new(service: Arc<NewsService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl QueryHandler for ListNewsHandler {
    async fn handle(&self, query: &Query) -> Result<QueryOutcome, DomainError> {
        match query {
            Query::ListNews(qry) => {
                let page = self.service.find_many(&qry.query, &qry.filter).await?;
                Ok(QueryOutcome::NewsPage(page))
            }
            _ => Err(mismatched_request("ListNewsHandler")),
        }
    }
}

pub struct CountNewsHandler {
    service: Arc<NewsService>,
}

impl CountNewsHandler {
    pub fn new(service: Arc<NewsService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl QueryHandler for CountNewsHandler {
    async fn handle(&self, query: &Query) -> Result<QueryOutcome, DomainError> {
        match query {
            Query::CountNews(qry) => {
                let count = self.service.count_many(&qry.filter).await?;
                Ok(QueryOutcome::Count(count))
            }
            _ => Err(mismatched_request("CountNewsHandler")),
        }
    }
}
