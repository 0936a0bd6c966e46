use waymark_entities::{
    email::{EmailAddress, EmailContent},
    permission::PlacePermission,
    place::Place,
    user::User,
};

use crate::gateways::email::EmailGateway;

/// Fire-and-forget notifications. Implementations must not fail the
/// calling operation; delivery problems are their own concern.
pub trait NotificationGateway {
    fn editor_invited(
        &self,
        invitee: &EmailAddress,
        place: &Place,
        invited_by: &User,
        permission: &PlacePermission,
    );
}

/// Notification gateway that renders plain-text e-mails and hands
/// them to an [`EmailGateway`] for delivery.
#[derive(Debug)]
pub struct EmailNotifications<G> {
    email_gateway: G,
}

impl<G> EmailNotifications<G> {
    pub fn new(email_gateway: G) -> Self {
        Self { email_gateway }
    }
}

impl<G: EmailGateway> NotificationGateway for EmailNotifications<G> {
    fn editor_invited(
        &self,
        invitee: &EmailAddress,
        place: &Place,
        invited_by: &User,
        permission: &PlacePermission,
    ) {
        let mut rights = vec![];
        if permission.can_edit {
            rights.push("edit");
        }
        if permission.can_delete {
            rights.push("delete");
        }
        let email = EmailContent {
            subject: format!("You have been invited to edit \"{}\"", place.name),
            body: format!(
                "{inviter} invited you to help maintain \"{place}\" ({rights}).\n\n\
                 Accept the invitation in your profile to start contributing.\n",
                inviter = invited_by.email,
                place = place.name,
                rights = rights.join(", "),
            ),
        };
        self.email_gateway
            .compose_and_send(&[invitee.clone()], &email);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use waymark_entities::{builders::*, id::Id, time::Timestamp};

    #[derive(Default)]
    struct MailboxGW {
        sent: RefCell<Vec<(Vec<EmailAddress>, String)>>,
    }

    impl EmailGateway for MailboxGW {
        fn compose_and_send(&self, recipients: &[EmailAddress], email: &EmailContent) {
            self.sent
                .borrow_mut()
                .push((recipients.to_vec(), email.subject.clone()));
        }
    }

    #[test]
    fn invitation_email_goes_to_the_invitee() {
        let inviter = User::build().email("owner@example.org").finish();
        let place = Place::build().name("Shinjuku Gyoen").finish();
        let permission = PlacePermission {
            id: Id::new(),
            place_id: place.id.clone(),
            user_id: Id::new(),
            can_edit: true,
            can_delete: false,
            invited_by: inviter.id.clone(),
            invited_at: Timestamp::now(),
            accepted_at: None,
        };
        let invitee = EmailAddress::new_unchecked("invitee@example.org".into());

        let notify = EmailNotifications::new(MailboxGW::default());
        notify.editor_invited(&invitee, &place, &inviter, &permission);

        let sent = notify.email_gateway.sent.borrow();
        assert_eq!(1, sent.len());
        assert_eq!(vec![invitee], sent[0].0);
        assert!(sent[0].1.contains("Shinjuku Gyoen"));
    }
}
