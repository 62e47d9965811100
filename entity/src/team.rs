use sea_orm::entity::prelude::*;
use serde::Serialize;

/// One Madden team per league, keyed by (league_id, external_team_id).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "team")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub league_id: i32,
    /// Small integer team id from the game, stored as a string.
    pub external_team_id: String,
    pub city_name: Option<String>,
    pub display_name: Option<String>,
    pub nick_name: Option<String>,
    pub abbr_name: Option<String>,
    pub div_name: Option<String>,
    pub conference_name: Option<String>,
    pub ovr_rating: Option<i32>,
    pub off_scheme: Option<i32>,
    pub def_scheme: Option<i32>,
    pub primary_color: Option<i32>,
    pub secondary_color: Option<i32>,
    pub user_name: Option<String>,
    pub injury_count: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::league::Entity",
        from = "Column::LeagueId",
        to = "super::league::Column::Id"
    )]
    League,
    #[sea_orm(has_many = "super::player::Entity")]
    Player,
}

impl Related<super::league::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::League.def()
    }
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
