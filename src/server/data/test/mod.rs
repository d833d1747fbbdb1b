use crate::server::{
    data::{store::Store, Repository},
    error::persistence::PersistenceError,
};
use test_utils::{builder::TestBuilder, factory};

mod blood_type;

/// Builds a relational store backed by a fresh in-memory SQLite schema.
async fn relational_store() -> Store {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    Store::Relational(test.db.unwrap())
}

/// Both backends, so repository contracts can be checked against each.
async fn stores() -> Vec<Store> {
    vec![relational_store().await, Store::in_memory()]
}
