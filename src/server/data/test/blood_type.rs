use super::*;
use crate::server::{
    data::blood_type::BloodTypeRepository,
    model::blood_type::{CreateBloodTypeParam, UpdateBloodTypeParam},
};

fn create(name: &str) -> CreateBloodTypeParam {
    CreateBloodTypeParam {
        name: name.to_string(),
    }
}

/// Tests creating a blood type through the relational repository.
///
/// Expected: Ok with an assigned ID and the row retrievable by name
#[tokio::test]
async fn creates_blood_type() -> Result<(), PersistenceError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BloodTypeRepository::new(db);
    let created = repo.create(create("AB Rh-")).await?;

    assert!(created.id > 0);
    assert_eq!(created.name, "AB Rh-");
    assert_eq!(repo.find_by_key("AB Rh-").await?, Some(created));

    Ok(())
}

/// Tests that the unique name index surfaces as a conflict.
///
/// Expected: Err(Conflict) on both backends
#[tokio::test]
async fn duplicate_name_conflicts() -> Result<(), PersistenceError> {
    for store in stores().await {
        let repo = store.blood_types();
        repo.create(create("0 Rh+")).await?;

        let result = repo.create(create("0 Rh+")).await;

        assert!(matches!(result, Err(PersistenceError::Conflict(_))));
        assert_eq!(repo.list().await?.len(), 1);
    }

    Ok(())
}

/// Tests listing rows written by the factory.
///
/// Expected: rows ordered by ID
#[tokio::test]
async fn lists_in_id_order() -> Result<(), PersistenceError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::blood_type::BloodTypeFactory::new(db)
        .name("B Rh-")
        .build()
        .await?;
    let second = factory::blood_type::BloodTypeFactory::new(db)
        .name("A Rh-")
        .build()
        .await?;

    let listed = BloodTypeRepository::new(db).list().await?;

    assert_eq!(
        listed.iter().map(|b| b.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    Ok(())
}

/// Tests update and delete on missing rows.
///
/// Expected: None from update, false from delete, on both backends
#[tokio::test]
async fn missing_rows_are_reported() -> Result<(), PersistenceError> {
    for store in stores().await {
        let repo = store.blood_types();

        let updated = repo
            .update(
                404,
                UpdateBloodTypeParam {
                    name: "A Rh+".to_string(),
                },
            )
            .await?;

        assert!(updated.is_none());
        assert!(!repo.delete(404).await?);
        assert!(repo.get_by_id(404).await?.is_none());
    }

    Ok(())
}
