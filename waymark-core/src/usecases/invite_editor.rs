use super::prelude::*;
use crate::usecases::{authorize_place_edit, authorize_user_by_id};

#[derive(Debug, Clone)]
pub struct NewEditorInvite {
    pub place_id: Id,
    pub invitee_email: EmailAddress,
    pub can_edit: bool,
    pub can_delete: bool,
}

/// Invite another user as editor of a place. The invitee must be an
/// existing user; one permission row per (user, place) pair. The
/// invitation e-mail is not sent here — notifying is a best-effort
/// concern of the calling flow.
pub fn invite_editor<D: Db>(db: &D, actor_id: &Id, invite: NewEditorInvite) -> Result<PlacePermission> {
    let actor = authorize_user_by_id(db, actor_id)?;
    let place = db
        .get_place(&invite.place_id)
        .map_err(|err| super::map_not_found(err, Error::PlaceNotFound))?;
    authorize_place_edit(db, &actor, &place)?;
    let invitee = db
        .try_get_user_by_email(&invite.invitee_email)?
        .ok_or(Error::UserNotFound)?;
    if db
        .permission_of_user_and_place(&invitee.id, &place.id)?
        .is_some()
    {
        return Err(Error::AlreadyExists);
    }
    let permission = PlacePermission {
        id: Id::new(),
        place_id: place.id,
        user_id: invitee.id,
        can_edit: invite.can_edit,
        can_delete: invite.can_delete,
        invited_by: actor.id,
        invited_at: Timestamp::now(),
        accepted_at: None,
    };
    db.create_permission(permission.clone())?;
    Ok(permission)
}

#[cfg(test)]
mod tests {
    use super::super::tests::*;
    use super::*;

    fn fixture() -> (MockDb, User, User) {
        let db = MockDb::default();
        let owner = User::build().role(Role::Editor).finish();
        let invitee = User::build().email("invitee@example.org").finish();
        db.users.borrow_mut().push(owner.clone());
        db.users.borrow_mut().push(invitee.clone());
        db.places.borrow_mut().push(
            Place::build()
                .id("p")
                .created_by(owner.id.as_str())
                .finish(),
        );
        (db, owner, invitee)
    }

    fn invite(can_edit: bool, can_delete: bool) -> NewEditorInvite {
        NewEditorInvite {
            place_id: "p".into(),
            invitee_email: EmailAddress::new_unchecked("invitee@example.org".into()),
            can_edit,
            can_delete,
        }
    }

    #[test]
    fn owner_invites_an_existing_user() {
        let (db, owner, invitee) = fixture();
        let permission = invite_editor(&db, &owner.id, invite(true, false)).unwrap();
        assert_eq!(invitee.id, permission.user_id);
        assert_eq!(owner.id, permission.invited_by);
        assert!(permission.can_edit);
        assert!(!permission.can_delete);
        assert!(!permission.is_accepted());
    }

    #[test]
    fn duplicate_invite_is_rejected() {
        let (db, owner, _) = fixture();
        invite_editor(&db, &owner.id, invite(true, false)).unwrap();
        assert!(matches!(
            invite_editor(&db, &owner.id, invite(true, true)),
            Err(Error::AlreadyExists)
        ));
        assert_eq!(1, db.permissions.borrow().len());
    }

    #[test]
    fn unknown_invitee_email() {
        let (db, owner, _) = fixture();
        let mut i = invite(true, false);
        i.invitee_email = EmailAddress::new_unchecked("nobody@example.org".into());
        assert!(matches!(
            invite_editor(&db, &owner.id, i),
            Err(Error::UserNotFound)
        ));
    }

    #[test]
    fn inviter_needs_edit_authorization() {
        let (db, _, _) = fixture();
        let stranger = User::build().finish();
        db.users.borrow_mut().push(stranger.clone());
        assert!(matches!(
            invite_editor(&db, &stranger.id, invite(true, false)),
            Err(Error::InsufficientPermissions)
        ));
    }

    #[test]
    fn an_invited_editor_may_invite_further_editors() {
        let (db, owner, invitee) = fixture();
        invite_editor(&db, &owner.id, invite(true, false)).unwrap();
        let third = User::build().email("third@example.org").finish();
        db.users.borrow_mut().push(third.clone());
        let i = NewEditorInvite {
            place_id: "p".into(),
            invitee_email: EmailAddress::new_unchecked("third@example.org".into()),
            can_edit: true,
            can_delete: false,
        };
        // The pending invitation already carries the edit capability.
        let permission = invite_editor(&db, &invitee.id, i).unwrap();
        assert_eq!(third.id, permission.user_id);
        assert_eq!(invitee.id, permission.invited_by);
    }
}
