use entity::league::Platform;
use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    data::league::LeagueRepository,
    error::{auth::AuthError, import::ImportError, Error},
    model::league::{ImportUrlsDto, LeagueDto},
};

pub struct LeagueService<'a> {
    db: &'a DatabaseConnection,
    config: &'a Config,
}

impl<'a> LeagueService<'a> {
    pub fn new(db: &'a DatabaseConnection, config: &'a Config) -> Self {
        Self { db, config }
    }

    /// Create a league for the user, deriving a unique slug from the name.
    pub async fn create_league(
        &self,
        user_id: &str,
        name: &str,
        platform: Platform,
    ) -> Result<LeagueDto, Error> {
        let league_repo = LeagueRepository::new(self.db);

        let base = slugify(name);
        let mut slug = base.clone();
        let mut suffix = 2;
        while league_repo.slug_exists(&slug).await? {
            slug = format!("{base}-{suffix}");
            suffix += 1;
        }

        let league = league_repo.create(user_id, name, &slug, platform).await?;

        Ok(self.to_dto(league))
    }

    /// Leagues owned by the user.
    pub async fn get_user_leagues(&self, user_id: &str) -> Result<Vec<LeagueDto>, Error> {
        let league_repo = LeagueRepository::new(self.db);

        let leagues = league_repo.get_by_user(user_id).await?;

        Ok(leagues.into_iter().map(|l| self.to_dto(l)).collect())
    }

    /// Public league view by slug.
    pub async fn get_league(&self, slug: &str) -> Result<LeagueDto, Error> {
        let league_repo = LeagueRepository::new(self.db);

        let league = league_repo
            .get_by_slug(slug)
            .await?
            .ok_or_else(|| ImportError::LeagueNotFound(slug.to_string()))?;

        Ok(self.to_dto(league))
    }

    /// Delete a league; only the owner may do so.
    pub async fn delete_league(&self, user_id: &str, slug: &str) -> Result<(), Error> {
        let league_repo = LeagueRepository::new(self.db);

        let league = league_repo
            .get_by_slug(slug)
            .await?
            .ok_or_else(|| ImportError::LeagueNotFound(slug.to_string()))?;

        if league.user_id != user_id {
            return Err(AuthError::NotLeagueOwner {
                user_id: user_id.to_string(),
                league_id: league.id,
            }
            .into());
        }

        league_repo.delete(league.id).await?;

        Ok(())
    }

    fn to_dto(&self, league: entity::league::Model) -> LeagueDto {
        let base = self.config.public_app_url.trim_end_matches('/');
        let slug = &league.slug;
        let platform = platform_segment(league.platform);
        let external_id = league.external_league_id.as_deref().unwrap_or("{leagueId}");

        LeagueDto {
            id: league.id,
            name: league.name.clone(),
            slug: league.slug.clone(),
            platform: league.platform,
            external_league_id: league.external_league_id.clone(),
            last_import_at: league.last_import_at,
            import_urls: ImportUrlsDto {
                teams: format!("{base}/api/leagues/{slug}/import/leagueteams"),
                standings: format!("{base}/api/leagues/{slug}/import/standings"),
                roster: format!(
                    "{base}/api/{}/{platform}/{external_id}/leagueroster",
                    league.user_id
                ),
                weekly_base: format!(
                    "{base}/api/leagues/{slug}/import/{platform}/{external_id}/week"
                ),
            },
        }
    }
}

/// Route segment for a platform, matching what the companion app sends.
pub fn platform_segment(platform: Platform) -> &'static str {
    match platform {
        Platform::Xbox => "xbsx",
        Platform::Playstation => "ps5",
    }
}

/// Parse the `{platform}` route segment.
pub fn platform_from_route(segment: &str) -> Result<Platform, ImportError> {
    match segment {
        "xbsx" => Ok(Platform::Xbox),
        "ps5" => Ok(Platform::Playstation),
        other => Err(ImportError::UnknownPlatform(other.to_string())),
    }
}

/// Lowercase, alphanumeric-only slug with single dashes between words.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }

    let slug = slug.trim_end_matches('-').to_string();
    if slug.is_empty() {
        "league".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::{platform_from_route, slugify};

    #[test]
    fn slugifies_names() {
        assert_eq!(slugify("My Franchise"), "my-franchise");
        assert_eq!(slugify("  Bears!! 2026  "), "bears-2026");
        assert_eq!(slugify("***"), "league");
    }

    #[test]
    fn parses_platform_segments() {
        assert!(platform_from_route("xbsx").is_ok());
        assert!(platform_from_route("ps5").is_ok());
        assert!(platform_from_route("pc").is_err());
    }
}
