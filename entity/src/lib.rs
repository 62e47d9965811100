pub mod prelude;

pub mod defensive_stat;
pub mod kicking_stat;
pub mod league;
pub mod passing_stat;
pub mod player;
pub mod player_ability;
pub mod player_rating;
pub mod player_trait;
pub mod punting_stat;
pub mod receiving_stat;
pub mod rushing_stat;
pub mod schedule;
pub mod standing;
pub mod team;
pub mod team_stat;
