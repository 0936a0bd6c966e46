//! # waymark-core
//!
//! Repository and gateway contracts, authorization rules, and the
//! use cases of the Waymark content platform. Everything in this crate
//! is agnostic of the backing store; mutations are meant to be executed
//! against a transaction-scoped view of the repositories.

pub mod authorization;
pub mod db;
pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use waymark_entities::{
        checkin::*, email::*, geo::*, id::*, permission::*, photo::*, place::*, region::*,
        time::*, url::Url, user::*,
    };
}
