//! # waymark-application
//!
//! Transactional application flows: each flow composes use cases
//! inside a single Unit-of-Work and runs best-effort side effects
//! (notifications, advisory lookups, visit counters) outside of it.

#[macro_use]
extern crate log;

mod change_user_role;
mod config;
mod create_checkin;
mod create_place;
mod create_region;
mod delete_checkin;
mod delete_place;
mod delete_region;
mod edit_permissions;
mod invite_editor;
mod moderate_checkin;
mod update_checkin;
mod update_place;
mod update_region;
mod visit_place;

pub mod prelude {
    pub use super::{
        change_user_role::*, config::*, create_checkin::*, create_place::*, create_region::*,
        delete_checkin::*,
        delete_place::*, delete_region::*, edit_permissions::*, invite_editor::*,
        moderate_checkin::*, update_checkin::*, update_place::*, update_region::*, visit_place::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use waymark_core::{entities::*, repositories::*, usecases};

pub(crate) mod mem {
    pub use waymark_db_mem::Connections;
}
