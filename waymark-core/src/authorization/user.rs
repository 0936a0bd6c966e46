use waymark_entities::user::{Role, User, UserStatus};

use std::result::Result as StdResult;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unauthorized role")]
    UnauthorizedRole,
    #[error("inactive user")]
    InactiveUser,
}

pub type Result<T> = StdResult<T, Error>;

pub fn authorize_role(user: &User, min_required_role: Role) -> Result<()> {
    if user.role < min_required_role {
        return Err(Error::UnauthorizedRole);
    }
    Ok(())
}

pub fn authorize_active(user: &User) -> Result<()> {
    if user.status != UserStatus::Active {
        return Err(Error::InactiveUser);
    }
    Ok(())
}
