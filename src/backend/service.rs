//! Backend service layer
//!
//! Bundles one repository per table over a shared client.

use crate::models::{Client, Course, Lecture, NewsletterSubscriber, Publication, Registration};
use super::client::BackendClient;
use super::repository::TableRepository;

#[derive(Debug, Clone)]
pub struct BackendService {
    pub client: BackendClient,
    pub courses: TableRepository<Course>,
    pub lectures: TableRepository<Lecture>,
    pub publications: TableRepository<Publication>,
    pub clients: TableRepository<Client>,
    pub registrations: TableRepository<Registration>,
    pub subscribers: TableRepository<NewsletterSubscriber>,
}

impl BackendService {
    pub fn new(client: BackendClient) -> Self {
        Self {
            courses: TableRepository::new(client.clone()),
            lectures: TableRepository::new(client.clone()),
            publications: TableRepository::new(client.clone()),
            clients: TableRepository::new(client.clone()),
            registrations: TableRepository::new(client.clone()),
            subscribers: TableRepository::new(client.clone()),
            client,
        }
    }

    /// Repository for any record type
    pub fn repository<R: crate::models::Record>(&self) -> TableRepository<R> {
        TableRepository::new(self.client.clone())
    }
}
