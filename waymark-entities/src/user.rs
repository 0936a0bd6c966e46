use num_derive::{FromPrimitive, ToPrimitive};

use crate::{email::EmailAddress, id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id         : Id,
    pub email      : EmailAddress,
    pub role       : Role,
    pub status     : UserStatus,
    pub created_at : Timestamp,
}

/// Ordered capability levels.
///
/// Content creation (regions, places) requires at least `Editor`.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive)]
pub enum Role {
    Visitor = 0,
    Editor  = 1,
    Admin   = 2,
}

impl Default for Role {
    fn default() -> Role {
        Role::Visitor
    }
}

/// Account status gating all mutation access.
///
/// Accounts are never hard-deleted; `Deleted` is a terminal status.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum UserStatus {
    Active    = 0,
    Suspended = 1,
    Deleted   = 2,
}

impl Default for UserStatus {
    fn default() -> UserStatus {
        UserStatus::Active
    }
}
