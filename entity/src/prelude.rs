pub use super::defensive_stat::Entity as DefensiveStat;
pub use super::kicking_stat::Entity as KickingStat;
pub use super::league::Entity as League;
pub use super::passing_stat::Entity as PassingStat;
pub use super::player::Entity as Player;
pub use super::player_ability::Entity as PlayerAbility;
pub use super::player_rating::Entity as PlayerRating;
pub use super::player_trait::Entity as PlayerTrait;
pub use super::punting_stat::Entity as PuntingStat;
pub use super::receiving_stat::Entity as ReceivingStat;
pub use super::rushing_stat::Entity as RushingStat;
pub use super::schedule::Entity as Schedule;
pub use super::standing::Entity as Standing;
pub use super::team::Entity as Team;
pub use super::team_stat::Entity as TeamStat;
