//! Blood donation factory for creating test donation entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct BloodDonationFactory<'a> {
    db: &'a DatabaseConnection,
    donor_id: i32,
    personnel_id: i32,
    donated_at: DateTime<Utc>,
    volume_ml: i32,
}

impl<'a> BloodDonationFactory<'a> {
    /// Creates a new BloodDonationFactory with default values.
    ///
    /// Defaults:
    /// - donated_at: current time
    /// - volume_ml: 450
    pub fn new(db: &'a DatabaseConnection, donor_id: i32, personnel_id: i32) -> Self {
        Self {
            db,
            donor_id,
            personnel_id,
            donated_at: Utc::now(),
            volume_ml: 450,
        }
    }

    pub fn donated_at(mut self, donated_at: DateTime<Utc>) -> Self {
        self.donated_at = donated_at;
        self
    }

    pub fn volume_ml(mut self, volume_ml: i32) -> Self {
        self.volume_ml = volume_ml;
        self
    }

    pub async fn build(self) -> Result<entity::blood_donation::Model, DbErr> {
        entity::blood_donation::ActiveModel {
            id: ActiveValue::NotSet,
            donor_id: ActiveValue::Set(self.donor_id),
            personnel_id: ActiveValue::Set(self.personnel_id),
            donated_at: ActiveValue::Set(self.donated_at),
            volume_ml: ActiveValue::Set(self.volume_ml),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a donation with default values for the given donor and personnel.
pub async fn create_blood_donation(
    db: &DatabaseConnection,
    donor_id: i32,
    personnel_id: i32,
) -> Result<entity::blood_donation::Model, DbErr> {
    BloodDonationFactory::new(db, donor_id, personnel_id)
        .build()
        .await
}
