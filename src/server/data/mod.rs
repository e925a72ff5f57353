//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries per table. They are generic over [`sea_orm::ConnectionTrait`]
//! so the same repository runs against the connection pool or inside a transaction.

/// Application rows
pub mod application;
/// Family member rows of an application
pub mod family_member;
/// Monthly application number counters
pub mod sequence;
/// User rows
pub mod user;
