//! Week/season addressing for weekly imports.

use crate::error::import::ImportError;
use crate::import::record::StandingRecord;

/// The (week, season) partition an import writes into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeekContext {
    pub week_index: i32,
    pub season_index: i32,
}

impl WeekContext {
    /// Build from the weekly route segments.
    ///
    /// The companion app addresses `reg` (regular season) and `post`
    /// (playoffs); anything else (preseason builds) maps to season 0.
    /// The URL is authoritative, so this context later overwrites any
    /// week/season fields carried in record bodies. Week numbers that do
    /// not fit the partition column are a client error.
    pub fn from_route(season_type: &str, week_number: u32) -> Result<Self, ImportError> {
        let season_index = match season_type {
            "reg" => 1,
            "post" => 2,
            _ => 0,
        };

        let week_index =
            i32::try_from(week_number).map_err(|_| ImportError::InvalidWeek(week_number))?;

        Ok(WeekContext {
            week_index,
            season_index,
        })
    }

    /// Infer the partition from the first standings record.
    ///
    /// Standings imports carry no week in the URL, so an empty list leaves
    /// the partition unaddressable and is a client error rather than a
    /// zero-count success.
    pub fn from_first_record(records: &[StandingRecord]) -> Result<Self, ImportError> {
        let first = records.first().ok_or(ImportError::NoData)?;

        Ok(WeekContext {
            week_index: first.week_index.unwrap_or(0),
            season_index: first.season_index.unwrap_or(0),
        })
    }
}

/// Categories servable by the weekly import/read endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatCategory {
    Schedules,
    TeamStats,
    Passing,
    Rushing,
    Receiving,
    Defense,
    Kicking,
    Punting,
}

impl StatCategory {
    /// Parse the `{category}` route segment.
    pub fn from_route(segment: &str) -> Result<Self, ImportError> {
        match segment {
            "schedules" => Ok(StatCategory::Schedules),
            "teamstats" => Ok(StatCategory::TeamStats),
            "passing" => Ok(StatCategory::Passing),
            "rushing" => Ok(StatCategory::Rushing),
            "receiving" => Ok(StatCategory::Receiving),
            "defense" => Ok(StatCategory::Defense),
            "kicking" => Ok(StatCategory::Kicking),
            "punting" => Ok(StatCategory::Punting),
            other => Err(ImportError::UnknownCategory(other.to_string())),
        }
    }

    /// Named list key the companion app wraps this category's records in.
    pub fn list_key(self) -> &'static str {
        match self {
            StatCategory::Schedules => "gameScheduleInfoList",
            StatCategory::TeamStats => "teamStatInfoList",
            StatCategory::Passing => "passingStatInfoList",
            StatCategory::Rushing => "rushingStatInfoList",
            StatCategory::Receiving => "receivingStatInfoList",
            StatCategory::Defense => "defensiveStatInfoList",
            StatCategory::Kicking => "kickingStatInfoList",
            StatCategory::Punting => "puntingStatInfoList",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{StatCategory, WeekContext};
    use crate::error::import::ImportError;
    use crate::import::record::StandingRecord;

    /// reg maps to season 1, post to 2, anything else to 0
    #[test]
    fn maps_season_type_segments() {
        assert_eq!(
            WeekContext::from_route("reg", 3).unwrap(),
            WeekContext { week_index: 3, season_index: 1 }
        );
        assert_eq!(
            WeekContext::from_route("post", 1).unwrap(),
            WeekContext { week_index: 1, season_index: 2 }
        );
        assert_eq!(
            WeekContext::from_route("pre", 2).unwrap(),
            WeekContext { week_index: 2, season_index: 0 }
        );
    }

    /// Week numbers past the partition column range are a validation error
    #[test]
    fn rejects_out_of_range_week() {
        assert!(matches!(
            WeekContext::from_route("reg", u32::MAX),
            Err(ImportError::InvalidWeek(u32::MAX))
        ));
        assert!(WeekContext::from_route("reg", i32::MAX as u32).is_ok());
    }

    /// Standings infer week/season from record 0; empty input is NoData
    #[test]
    fn infers_context_from_standings() {
        let record = StandingRecord {
            week_index: Some(5),
            season_index: Some(1),
            ..Default::default()
        };

        let ctx = WeekContext::from_first_record(std::slice::from_ref(&record)).unwrap();
        assert_eq!(ctx, WeekContext { week_index: 5, season_index: 1 });

        assert!(matches!(
            WeekContext::from_first_record(&[]),
            Err(ImportError::NoData)
        ));
    }

    /// Unknown category segments are a validation error
    #[test]
    fn rejects_unknown_category() {
        assert_eq!(
            StatCategory::from_route("teamstats").unwrap(),
            StatCategory::TeamStats
        );
        assert!(matches!(
            StatCategory::from_route("blocking"),
            Err(ImportError::UnknownCategory(_))
        ));
    }
}
