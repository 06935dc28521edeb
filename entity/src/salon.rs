use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "salons")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub address: String,
    pub city: String,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub booking_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub cover_image_url: Option<String>,
    pub logo_url: Option<String>,
    pub rating: f64,
    pub review_count: f64,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::stylist::Entity")]
    Stylist,
}

impl Related<super::stylist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stylist.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
