use entity::standing;

use crate::data::week_scoped::{WeekScoped, WeeklyRepository};

impl WeekScoped for standing::Entity {
    type Row = standing::ActiveModel;

    fn id_col() -> Self::Column {
        standing::Column::Id
    }

    fn league_col() -> Self::Column {
        standing::Column::LeagueId
    }

    fn natural_id_col() -> Self::Column {
        standing::Column::ExternalTeamId
    }

    fn week_col() -> Self::Column {
        standing::Column::WeekIndex
    }

    fn season_col() -> Self::Column {
        standing::Column::SeasonIndex
    }
}

pub type StandingRepository<'a, C> = WeeklyRepository<'a, C, standing::Entity>;

#[cfg(test)]
mod tests {
    use gridiron_test_utils::prelude::*;
    use sea_orm::ActiveValue::Set;

    use super::StandingRepository;
    use crate::import::week::WeekContext;

    fn row(league_id: i32, team: &str, rank: i32, ctx: WeekContext) -> entity::standing::ActiveModel {
        entity::standing::ActiveModel {
            league_id: Set(league_id),
            external_team_id: Set(team.to_string()),
            week_index: Set(ctx.week_index),
            season_index: Set(ctx.season_index),
            rank: Set(Some(rank)),
            ..Default::default()
        }
    }

    /// At most one standing per team per (week, season)
    #[tokio::test]
    async fn one_standing_per_team_per_week() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::League)
            .with_table(entity::prelude::Standing)
            .build()
            .await?;
        let league = test.insert_league("test-league").await?;
        let ctx = WeekContext { week_index: 5, season_index: 1 };

        let repo = StandingRepository::new(&test.db);
        repo.replace_week(
            league.id,
            ctx,
            vec![row(league.id, "7", 1, ctx), row(league.id, "12", 2, ctx)],
        )
        .await?;

        // Same teams again with new ranks
        repo.replace_week(
            league.id,
            ctx,
            vec![row(league.id, "7", 2, ctx), row(league.id, "12", 1, ctx)],
        )
        .await?;

        let stored = repo.get_week(league.id, ctx).await?;
        assert_eq!(stored.len(), 2);

        let team_7 = stored.iter().find(|s| s.external_team_id == "7").unwrap();
        assert_eq!(team_7.rank, Some(2));

        Ok(())
    }
}
