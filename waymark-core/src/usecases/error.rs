use crate::{authorization, repositories};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The user does not exist")]
    UserNotFound,
    #[error("The user account is not active")]
    UserInactive,
    #[error("This is not allowed")]
    InsufficientPermissions,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("The region does not exist")]
    RegionNotFound,
    #[error("The place does not exist")]
    PlaceNotFound,
    #[error("The place is not published")]
    PlaceNotPublished,
    #[error("The check-in does not exist")]
    CheckinNotFound,
    #[error("The check-in has been deleted")]
    CheckinDeleted,
    #[error("The check-in has already been deleted")]
    CheckinAlreadyDeleted,
    #[error("Too far away from the place")]
    CheckinTooFar,
    #[error("The location could not be validated")]
    LocationValidationFailed,
    #[error("The photo does not exist")]
    PhotoNotFound,
    #[error("Too many photos for a single check-in")]
    PhotoLimitExceeded,
    #[error("The permission does not exist")]
    PermissionNotFound,
    #[error("There are still dependent contents")]
    ContentHasDependencies,
    #[error("The object already exists")]
    AlreadyExists,
    #[error("Nothing to update")]
    EmptyUpdate,
    #[error("The comment is too long")]
    CommentLength,
    #[error("The caption is too long")]
    CaptionLength,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("The name must not be empty")]
    EmptyName,
    #[error("The transaction could not be completed")]
    TransactionFailed,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<authorization::user::Error> for Error {
    fn from(err: authorization::user::Error) -> Self {
        use authorization::user::Error::*;
        match err {
            UnauthorizedRole => Self::InsufficientPermissions,
            InactiveUser => Self::UserInactive,
        }
    }
}

impl From<authorization::place::Error> for Error {
    fn from(_: authorization::place::Error) -> Self {
        Self::InsufficientPermissions
    }
}
