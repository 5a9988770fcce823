//! Storage service layer
//!
//! Bundles one shared repository per record type

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::database::{MemoryRepository, Repository, SharedRepository};
use crate::models::{Activity, Booking, Comment, User, Venue};

#[derive(Clone)]
pub struct DatabaseService {
    pub users: SharedRepository<User>,
    pub activities: SharedRepository<Activity>,
    pub venues: SharedRepository<Venue>,
    pub bookings: SharedRepository<Booking>,
    pub comments: SharedRepository<Comment>,
}

fn shared<T: crate::database::Entity>(repo: impl Repository<T> + 'static) -> SharedRepository<T> {
    Arc::new(RwLock::new(Box::new(repo)))
}

impl DatabaseService {
    /// Process-lifetime store; everything is lost on restart
    pub fn in_memory() -> Self {
        Self {
            users: shared(MemoryRepository::<User>::new()),
            activities: shared(MemoryRepository::<Activity>::new()),
            venues: shared(MemoryRepository::<Venue>::new()),
            bookings: shared(MemoryRepository::<Booking>::new()),
            comments: shared(MemoryRepository::<Comment>::new()),
        }
    }

    /// Record counts per collection, for the status endpoint
    pub async fn stats(&self) -> serde_json::Value {
        serde_json::json!({
            "users": self.users.read().await.len(),
            "activities": self.activities.read().await.len(),
            "venues": self.venues.read().await.len(),
            "bookings": self.bookings.read().await.len(),
            "comments": self.comments.read().await.len(),
        })
    }
}
