use super::prelude::*;
use crate::{usecases::authorize_user_by_id, util::validate};

/// Partial update of a region's descriptive fields, with the same
/// clearing semantics as the place update.
#[derive(Debug, Default, Clone)]
pub struct RegionUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub fn update_region<D: Db>(
    db: &D,
    actor_id: &Id,
    region_id: &Id,
    update: RegionUpdate,
) -> Result<Region> {
    let actor = authorize_user_by_id(db, actor_id)?;
    let mut region = db
        .get_region(region_id)
        .map_err(|err| super::map_not_found(err, Error::RegionNotFound))?;
    if region.created_by != actor.id && actor.role != Role::Admin {
        return Err(Error::InsufficientPermissions);
    }

    let RegionUpdate { name, description } = update;
    if let Some(name) = name {
        if !validate::is_valid_name(&name) {
            return Err(Error::EmptyName);
        }
        region.name = name;
    }
    if let Some(description) = description {
        region.description = if description.is_empty() {
            None
        } else {
            Some(description)
        };
    }
    db.update_region(&region)?;
    Ok(region)
}

#[cfg(test)]
mod tests {
    use super::super::tests::*;
    use super::*;

    fn fixture() -> (MockDb, User) {
        let db = MockDb::default();
        let owner = User::build().role(Role::Editor).finish();
        db.users.borrow_mut().push(owner.clone());
        db.regions.borrow_mut().push(
            Region::build()
                .id("r")
                .name("Old")
                .created_by(owner.id.as_str())
                .finish(),
        );
        (db, owner)
    }

    #[test]
    fn owner_updates_fields() {
        let (db, owner) = fixture();
        let updated = update_region(
            &db,
            &owner.id,
            &"r".into(),
            RegionUpdate {
                name: Some("New".into()),
                description: Some("desc".into()),
            },
        )
        .unwrap();
        assert_eq!("New", updated.name);
        assert_eq!(Some("desc"), updated.description.as_deref());
    }

    #[test]
    fn place_count_survives_updates() {
        let (db, owner) = fixture();
        db.regions.borrow_mut()[0].place_count = 3;
        let updated = update_region(
            &db,
            &owner.id,
            &"r".into(),
            RegionUpdate {
                name: Some("New".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(3, updated.place_count);
    }

    #[test]
    fn non_owner_is_denied() {
        let (db, _) = fixture();
        let other = User::build().role(Role::Editor).finish();
        db.users.borrow_mut().push(other.clone());
        assert!(matches!(
            update_region(
                &db,
                &other.id,
                &"r".into(),
                RegionUpdate {
                    name: Some("New".into()),
                    ..Default::default()
                },
            ),
            Err(Error::InsufficientPermissions)
        ));
    }
}
