use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Superstar/X-Factor ability slots, zero or more per player.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "player_ability")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub player_id: Uuid,
    pub league_id: i32,
    pub slot_index: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub logo_id: Option<i32>,
    pub is_unlocked: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id"
    )]
    Player,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
