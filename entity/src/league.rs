use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Console platform the franchise runs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum Platform {
    #[sea_orm(string_value = "xbsx")]
    #[serde(rename = "xbsx")]
    Xbox,
    #[sea_orm(string_value = "ps5")]
    #[serde(rename = "ps5")]
    Playstation,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "league")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Subject identifier from the external identity provider.
    pub user_id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub platform: Platform,
    /// Madden league identifier as reported by the companion app.
    pub external_league_id: Option<String>,
    pub last_import_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::team::Entity")]
    Team,
    #[sea_orm(has_many = "super::player::Entity")]
    Player,
    #[sea_orm(has_many = "super::standing::Entity")]
    Standing,
    #[sea_orm(has_many = "super::schedule::Entity")]
    Schedule,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl Related<super::standing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Standing.def()
    }
}

impl Related<super::schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schedule.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
