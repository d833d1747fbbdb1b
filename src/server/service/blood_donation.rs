use crate::server::{
    data::store::Store,
    error::AppError,
    model::blood_donation::{BloodDonation, CreateBloodDonationParam, UpdateBloodDonationParam},
};

/// Records blood donations taken from donors by personnel.
pub struct BloodDonationService<'a> {
    store: &'a Store,
}

impl<'a> BloodDonationService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Records a donation
    ///
    /// # Returns
    /// - `Ok(BloodDonation)` - The recorded donation
    /// - `Err(AppError::BadRequest)` - Non-positive volume, or unknown donor or personnel
    pub async fn create(&self, param: CreateBloodDonationParam) -> Result<BloodDonation, AppError> {
        validate_volume(param.volume_ml)?;

        if self.store.donors().get_by_id(param.donor_id).await?.is_none() {
            return Err(AppError::BadRequest(format!(
                "Donor {} does not exist",
                param.donor_id
            )));
        }
        if self
            .store
            .personnel()
            .get_by_id(param.personnel_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Personnel {} does not exist",
                param.personnel_id
            )));
        }

        Ok(self.store.blood_donations().create(param).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<BloodDonation, AppError> {
        self.store
            .blood_donations()
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn list(&self) -> Result<Vec<BloodDonation>, AppError> {
        Ok(self.store.blood_donations().list().await?)
    }

    pub async fn update(
        &self,
        id: i32,
        param: UpdateBloodDonationParam,
    ) -> Result<BloodDonation, AppError> {
        validate_volume(param.volume_ml)?;

        self.store
            .blood_donations()
            .update(id, param)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !self.store.blood_donations().delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }
}

fn validate_volume(volume_ml: i32) -> Result<(), AppError> {
    if volume_ml <= 0 {
        return Err(AppError::BadRequest(
            "Donation volume must be positive".to_string(),
        ));
    }

    Ok(())
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Blood donation {} not found", id))
}
