pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{checkin_builder::*, place_builder::*, region_builder::*, user_builder::*};

pub mod user_builder {

    use super::*;
    use crate::{email::*, id::*, time::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = EmailAddress::new_unchecked(email.into());
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn status(mut self, status: UserStatus) -> Self {
            self.user.status = status;
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> Self::Build {
            UserBuild {
                user: User {
                    id: Id::new(),
                    email: EmailAddress::new_unchecked("user@example.org".into()),
                    role: Role::default(),
                    status: UserStatus::default(),
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod region_builder {

    use super::*;
    use crate::{id::*, region::*, time::*};

    #[derive(Debug)]
    pub struct RegionBuild {
        region: Region,
    }

    impl RegionBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.region.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.region.name = name.into();
            self
        }
        pub fn created_by(mut self, user_id: &str) -> Self {
            self.region.created_by = user_id.into();
            self
        }
        pub fn status(mut self, status: RegionStatus) -> Self {
            self.region.status = status;
            self
        }
        pub fn finish(self) -> Region {
            self.region
        }
    }

    impl Builder for Region {
        type Build = RegionBuild;
        fn build() -> Self::Build {
            RegionBuild {
                region: Region {
                    id: Id::new(),
                    name: "".into(),
                    description: None,
                    created_by: Id::default(),
                    status: RegionStatus::default(),
                    place_count: 0,
                    favorite_count: 0,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod place_builder {

    use super::*;
    use crate::{geo::*, id::*, place::*, time::*};

    #[derive(Debug)]
    pub struct PlaceBuild {
        place: Place,
    }

    impl PlaceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.place.id = id.into();
            self
        }
        pub fn region(mut self, region_id: &str) -> Self {
            self.place.region_id = region_id.into();
            self
        }
        pub fn created_by(mut self, user_id: &str) -> Self {
            self.place.created_by = user_id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.place.name = name.into();
            self
        }
        pub fn category(mut self, category: PlaceCategory) -> Self {
            self.place.category = category;
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.place.pos = pos;
            self
        }
        pub fn status(mut self, status: PlaceStatus) -> Self {
            self.place.status = status;
            self
        }
        pub fn finish(self) -> Place {
            self.place
        }
    }

    impl Builder for Place {
        type Build = PlaceBuild;
        fn build() -> Self::Build {
            PlaceBuild {
                place: Place {
                    id: Id::new(),
                    region_id: Id::default(),
                    created_by: Id::default(),
                    name: "".into(),
                    description: None,
                    category: PlaceCategory::Other,
                    pos: MapPoint::default(),
                    status: PlaceStatus::default(),
                    checkin_count: 0,
                    favorite_count: 0,
                    visit_count: 0,
                    avg_rating: None,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod checkin_builder {

    use super::*;
    use crate::{checkin::*, geo::*, id::*, time::*};

    #[derive(Debug)]
    pub struct CheckinBuild {
        checkin: Checkin,
    }

    impl CheckinBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.checkin.id = id.into();
            self
        }
        pub fn user(mut self, user_id: &str) -> Self {
            self.checkin.user_id = user_id.into();
            self
        }
        pub fn place(mut self, place_id: &str) -> Self {
            self.checkin.place_id = place_id.into();
            self
        }
        pub fn rating(mut self, rating: Option<RatingValue>) -> Self {
            self.checkin.rating = rating;
            self
        }
        pub fn comment(mut self, comment: Option<&str>) -> Self {
            self.checkin.comment = comment.map(Into::into);
            self
        }
        pub fn location(mut self, pos: MapPoint) -> Self {
            self.checkin.user_location = pos;
            self
        }
        pub fn status(mut self, status: CheckinStatus) -> Self {
            self.checkin.status = status;
            self
        }
        pub fn finish(self) -> Checkin {
            self.checkin
        }
    }

    impl Builder for Checkin {
        type Build = CheckinBuild;
        fn build() -> Self::Build {
            let now = Timestamp::now();
            CheckinBuild {
                checkin: Checkin {
                    id: Id::new(),
                    user_id: Id::default(),
                    place_id: Id::default(),
                    comment: None,
                    rating: None,
                    user_location: MapPoint::default(),
                    is_private: false,
                    status: CheckinStatus::default(),
                    created_at: now,
                    updated_at: now,
                },
            }
        }
    }
}
