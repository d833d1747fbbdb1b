use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "donor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub pesel: String,
    pub first_name: String,
    pub last_name: String,
    pub blood_type_id: i32,
    pub phone_number: String,
    pub email: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::blood_type::Entity",
        from = "Column::BloodTypeId",
        to = "super::blood_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    BloodType,
    #[sea_orm(has_many = "super::blood_donation::Entity")]
    BloodDonation,
}

impl Related<super::blood_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BloodType.def()
    }
}

impl Related<super::blood_donation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BloodDonation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
