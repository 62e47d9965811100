//! Week-scoped key declarations and repository aliases for the seven stat
//! tables.

use entity::{
    defensive_stat, kicking_stat, passing_stat, punting_stat, receiving_stat, rushing_stat,
    team_stat,
};

use crate::data::week_scoped::{WeekScoped, WeeklyRepository};

macro_rules! week_scoped_stat {
    ($module:ident, $repository:ident) => {
        impl WeekScoped for $module::Entity {
            type Row = $module::ActiveModel;

            fn id_col() -> Self::Column {
                $module::Column::Id
            }

            fn league_col() -> Self::Column {
                $module::Column::LeagueId
            }

            fn natural_id_col() -> Self::Column {
                $module::Column::ExternalStatId
            }

            fn week_col() -> Self::Column {
                $module::Column::WeekIndex
            }

            fn season_col() -> Self::Column {
                $module::Column::SeasonIndex
            }
        }

        pub type $repository<'a, C> = WeeklyRepository<'a, C, $module::Entity>;
    };
}

week_scoped_stat!(passing_stat, PassingStatRepository);
week_scoped_stat!(rushing_stat, RushingStatRepository);
week_scoped_stat!(receiving_stat, ReceivingStatRepository);
week_scoped_stat!(defensive_stat, DefensiveStatRepository);
week_scoped_stat!(kicking_stat, KickingStatRepository);
week_scoped_stat!(punting_stat, PuntingStatRepository);
week_scoped_stat!(team_stat, TeamStatRepository);
