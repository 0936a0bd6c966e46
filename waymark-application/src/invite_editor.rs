use super::*;

use waymark_core::gateways::notify::NotificationGateway;

/// Invite a user as editor of a place. The permission row is committed
/// first; the invitation e-mail is attempted afterwards and its failure
/// never rolls the invitation back.
pub fn invite_editor(
    connections: &mem::Connections,
    notify: &dyn NotificationGateway,
    actor_id: &Id,
    invite: usecases::NewEditorInvite,
) -> Result<PlacePermission> {
    let invitee_email = invite.invitee_email.clone();
    let permission = connections
        .exclusive()
        .transaction(|conn| usecases::invite_editor(conn, actor_id, invite))?;

    if let Err(err) = notify_editor_invited(connections, notify, &invitee_email, &permission) {
        error!(
            "Failed to notify invited editor {} for place {}: {}",
            invitee_email, permission.place_id, err
        );
    }

    Ok(permission)
}

fn notify_editor_invited(
    connections: &mem::Connections,
    notify: &dyn NotificationGateway,
    invitee_email: &EmailAddress,
    permission: &PlacePermission,
) -> Result<()> {
    let (place, inviter) = {
        let connection = connections.shared();
        let place = usecases::get_place(&*connection, &permission.place_id)?;
        let inviter = connection.get_user(&permission.invited_by)?;
        (place, inviter)
    };
    notify.editor_invited(invitee_email, &place, &inviter, permission);
    Ok(())
}
