use crate::server::{
    data::store::Store,
    error::{persistence::PersistenceError, AppError},
    model::blood_type::{BloodType, CreateBloodTypeParam, UpdateBloodTypeParam},
};

pub struct BloodTypeService<'a> {
    store: &'a Store,
}

impl<'a> BloodTypeService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Creates a blood type, rejecting empty or already used names
    pub async fn create(&self, param: CreateBloodTypeParam) -> Result<BloodType, AppError> {
        let name = validate_name(&param.name)?;
        let repo = self.store.blood_types();

        if repo.find_by_key(&name).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Blood type '{}' already exists",
                name
            )));
        }

        Ok(repo.create(CreateBloodTypeParam { name }).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<BloodType, AppError> {
        self.store
            .blood_types()
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn list(&self) -> Result<Vec<BloodType>, AppError> {
        Ok(self.store.blood_types().list().await?)
    }

    /// Renames a blood type
    pub async fn update(&self, id: i32, param: UpdateBloodTypeParam) -> Result<BloodType, AppError> {
        let name = validate_name(&param.name)?;
        let repo = self.store.blood_types();

        if let Some(existing) = repo.find_by_key(&name).await? {
            if existing.id != id {
                return Err(AppError::BadRequest(format!(
                    "Blood type '{}' already exists",
                    name
                )));
            }
        }

        repo.update(id, UpdateBloodTypeParam { name })
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a blood type no donor is assigned to
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let donors = self.store.donors().list().await?;
        if donors.iter().any(|d| d.blood_type_id == id) {
            return Err(PersistenceError::Conflict(format!(
                "blood type {} is assigned to donors",
                id
            ))
            .into());
        }

        if !self.store.blood_types().delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }
}

fn validate_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest(
            "Blood type name must not be empty".to_string(),
        ));
    }

    Ok(name.to_string())
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Blood type {} not found", id))
}
