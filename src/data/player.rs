use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;
use uuid::Uuid;

use crate::data::BATCH_SIZE;
use crate::import::transform::roster::RosterRows;

/// A player with the attribute rows the roster fan-out created for it.
#[derive(Debug, Serialize)]
pub struct PlayerDetail {
    pub player: entity::player::Model,
    pub traits: Option<entity::player_trait::Model>,
    pub ratings: Option<entity::player_rating::Model>,
    pub abilities: Vec<entity::player_ability::Model>,
}

pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Replace the league's entire roster with the fan-out rows.
    ///
    /// Roster imports are full snapshots, so the whole league partition is
    /// rebuilt: attribute rows first (they reference players), then players,
    /// then batched inserts. Empty input short-circuits without deleting.
    /// Returns the number of player rows written.
    pub async fn replace_league_roster(
        &self,
        league_id: i32,
        rows: RosterRows,
    ) -> Result<usize, DbErr> {
        if rows.players.is_empty() {
            return Ok(0);
        }

        entity::prelude::PlayerAbility::delete_many()
            .filter(entity::player_ability::Column::LeagueId.eq(league_id))
            .exec(self.db)
            .await?;
        entity::prelude::PlayerTrait::delete_many()
            .filter(entity::player_trait::Column::LeagueId.eq(league_id))
            .exec(self.db)
            .await?;
        entity::prelude::PlayerRating::delete_many()
            .filter(entity::player_rating::Column::LeagueId.eq(league_id))
            .exec(self.db)
            .await?;
        entity::prelude::Player::delete_many()
            .filter(entity::player::Column::LeagueId.eq(league_id))
            .exec(self.db)
            .await?;

        let count = rows.players.len();

        for batch in rows.players.chunks(BATCH_SIZE) {
            entity::prelude::Player::insert_many(batch.to_vec())
                .exec(self.db)
                .await?;
        }
        for batch in rows.traits.chunks(BATCH_SIZE) {
            entity::prelude::PlayerTrait::insert_many(batch.to_vec())
                .exec(self.db)
                .await?;
        }
        for batch in rows.ratings.chunks(BATCH_SIZE) {
            entity::prelude::PlayerRating::insert_many(batch.to_vec())
                .exec(self.db)
                .await?;
        }
        for batch in rows.abilities.chunks(BATCH_SIZE) {
            entity::prelude::PlayerAbility::insert_many(batch.to_vec())
                .exec(self.db)
                .await?;
        }

        Ok(count)
    }

    /// List players for a league, optionally narrowed to a team or position.
    pub async fn get_by_league(
        &self,
        league_id: i32,
        team_id: Option<Uuid>,
        position: Option<&str>,
    ) -> Result<Vec<entity::player::Model>, DbErr> {
        let mut query = entity::prelude::Player::find()
            .filter(entity::player::Column::LeagueId.eq(league_id));

        if let Some(team_id) = team_id {
            query = query.filter(entity::player::Column::TeamId.eq(team_id));
        }
        if let Some(position) = position {
            query = query.filter(entity::player::Column::Position.eq(position));
        }

        query
            .order_by_asc(entity::player::Column::LastName)
            .all(self.db)
            .await
    }

    /// One player with traits, ratings, and abilities.
    pub async fn get_detail(
        &self,
        league_id: i32,
        player_id: Uuid,
    ) -> Result<Option<PlayerDetail>, DbErr> {
        let player = entity::prelude::Player::find_by_id(player_id)
            .filter(entity::player::Column::LeagueId.eq(league_id))
            .one(self.db)
            .await?;

        let Some(player) = player else {
            return Ok(None);
        };

        let traits = entity::prelude::PlayerTrait::find_by_id(player.id)
            .one(self.db)
            .await?;
        let ratings = entity::prelude::PlayerRating::find_by_id(player.id)
            .one(self.db)
            .await?;
        let abilities = entity::prelude::PlayerAbility::find()
            .filter(entity::player_ability::Column::PlayerId.eq(player.id))
            .order_by_asc(entity::player_ability::Column::SlotIndex)
            .all(self.db)
            .await?;

        Ok(Some(PlayerDetail {
            player,
            traits,
            ratings,
            abilities,
        }))
    }
}
