use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "personnel")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub pesel: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub salt: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::blood_donation::Entity")]
    BloodDonation,
}

impl Related<super::blood_donation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BloodDonation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
