use super::prelude::*;

/// Recompute and persist the derived check-in figures of a place.
///
/// Derived aggregates are always recomputed from the source of truth
/// instead of incrementing stored counters; concurrent writers then
/// converge on the same persisted values under the isolation guarantees
/// of the backing store. Must run inside the same transaction as the
/// mutation that triggered it.
pub fn refresh_place_stats<D>(db: &D, place_id: &Id) -> Result<PlaceCheckinStats>
where
    D: PlaceRepo + CheckinRepo,
{
    let stats = db.place_checkin_stats(place_id)?;
    db.update_place_checkin_stats(place_id, &stats)
        .map_err(|err| super::map_not_found(err, Error::PlaceNotFound))?;
    Ok(stats)
}

/// Recompute and persist the place count of a region. Same discipline
/// as [`refresh_place_stats`].
pub fn refresh_region_place_count<D>(db: &D, region_id: &Id) -> Result<u64>
where
    D: PlaceRepo + RegionRepo,
{
    let place_count = db.count_places_of_region(region_id)?;
    db.update_region_place_count(region_id, place_count)
        .map_err(|err| super::map_not_found(err, Error::RegionNotFound))?;
    Ok(place_count)
}

#[cfg(test)]
mod tests {
    use super::super::tests::*;
    use super::*;

    #[test]
    fn stats_over_mixed_statuses() {
        let db = MockDb::default();
        let place = Place::build().id("p").finish();
        db.places.borrow_mut().push(place);
        for (id, status, rating) in [
            ("a", CheckinStatus::Active, Some(RatingValue::from(4))),
            ("b", CheckinStatus::Active, Some(RatingValue::from(2))),
            ("c", CheckinStatus::Active, None),
            ("d", CheckinStatus::Hidden, Some(RatingValue::from(1))),
            ("e", CheckinStatus::Reported, None),
            ("f", CheckinStatus::Deleted, Some(RatingValue::from(5))),
        ] {
            db.checkins.borrow_mut().push(
                Checkin::build()
                    .id(id)
                    .place("p")
                    .status(status)
                    .rating(rating)
                    .finish(),
            );
        }

        let stats = refresh_place_stats(&db, &"p".into()).unwrap();
        // Deleted rows do not count; hidden/reported still do.
        assert_eq!(5, stats.checkin_count);
        // Only active rated rows contribute to the average.
        assert_eq!(Some(AvgRating::from(3.0)), stats.avg_rating);

        let place = db.places.borrow()[0].clone();
        assert_eq!(5, place.checkin_count);
        assert_eq!(Some(AvgRating::from(3.0)), place.avg_rating);
    }

    #[test]
    fn stats_without_rated_active_checkins() {
        let db = MockDb::default();
        db.places.borrow_mut().push(Place::build().id("p").finish());
        db.checkins.borrow_mut().push(
            Checkin::build()
                .id("a")
                .place("p")
                .status(CheckinStatus::Hidden)
                .rating(Some(RatingValue::from(5)))
                .finish(),
        );

        let stats = refresh_place_stats(&db, &"p".into()).unwrap();
        assert_eq!(1, stats.checkin_count);
        assert_eq!(None, stats.avg_rating);
    }

    #[test]
    fn region_place_count_recomputed() {
        let db = MockDb::default();
        db.regions
            .borrow_mut()
            .push(Region::build().id("r").finish());
        for id in ["p1", "p2"] {
            db.places
                .borrow_mut()
                .push(Place::build().id(id).region("r").finish());
        }
        assert_eq!(2, refresh_region_place_count(&db, &"r".into()).unwrap());
        assert_eq!(2, db.regions.borrow()[0].place_count);
    }

    #[test]
    fn refreshing_stats_of_missing_place_fails() {
        let db = MockDb::default();
        assert!(matches!(
            refresh_place_stats(&db, &"nope".into()),
            Err(Error::PlaceNotFound)
        ));
    }
}
