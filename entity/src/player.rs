use sea_orm::entity::prelude::*;
use serde::Serialize;

/// One roster entry per league, keyed by (league_id, external_roster_id).
///
/// `team_id` is the internal team UUID resolved at import time; a player
/// whose external team id has no matching team row (free agent, or team
/// import has not run) keeps `None` here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub league_id: i32,
    pub team_id: Option<Uuid>,
    pub external_roster_id: String,
    pub external_team_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub jersey_num: Option<i32>,
    pub age: Option<i32>,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub birth_day: Option<i32>,
    pub birth_month: Option<i32>,
    pub birth_year: Option<i32>,
    pub years_pro: Option<i32>,
    pub rookie_year: Option<i32>,
    pub college: Option<String>,
    pub home_town: Option<String>,
    pub home_state: Option<i32>,
    pub dev_trait: Option<i32>,
    pub player_best_ovr: Option<i32>,
    pub player_scheme_ovr: Option<i32>,
    pub team_scheme_ovr: Option<i32>,
    pub legacy_score: Option<i32>,
    pub experience_points: Option<i32>,
    pub skill_points: Option<i32>,
    pub contract_salary: Option<i64>,
    pub contract_bonus: Option<i64>,
    pub contract_length: Option<i32>,
    pub contract_years_left: Option<i32>,
    pub cap_hit: Option<i64>,
    pub cap_release_penalty: Option<i64>,
    pub cap_release_net_savings: Option<i64>,
    pub desired_salary: Option<i64>,
    pub desired_bonus: Option<i64>,
    pub desired_length: Option<i32>,
    pub re_sign_status: Option<i32>,
    pub draft_round: Option<i32>,
    pub draft_pick: Option<i32>,
    pub injury_type: Option<i32>,
    pub injury_length: Option<i32>,
    pub is_free_agent: Option<bool>,
    pub is_on_ir: Option<bool>,
    pub is_on_practice_squad: Option<bool>,
    pub is_active: Option<bool>,
    pub portrait_id: Option<i32>,
    pub presentation_id: Option<i64>,
    pub scheme: Option<i32>,
    pub durability_grade: Option<i32>,
    pub intangible_grade: Option<i32>,
    pub physical_grade: Option<i32>,
    pub production_grade: Option<i32>,
    pub size_grade: Option<i32>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::league::Entity",
        from = "Column::LeagueId",
        to = "super::league::Column::Id"
    )]
    League,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id"
    )]
    Team,
    #[sea_orm(has_one = "super::player_trait::Entity")]
    PlayerTrait,
    #[sea_orm(has_one = "super::player_rating::Entity")]
    PlayerRating,
    #[sea_orm(has_many = "super::player_ability::Entity")]
    PlayerAbility,
}

impl Related<super::league::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::League.def()
    }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::player_trait::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerTrait.def()
    }
}

impl Related<super::player_rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerRating.def()
    }
}

impl Related<super::player_ability::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerAbility.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
