//! GitHub contribution calendar: GraphQL request, response parsing and the
//! sample-data fallback.
//!
//! The live fetch happens in the client. Everything that decides what the
//! widget ends up showing lives here so it can be tested without a network.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::GithubConfig;

/// Weeks in the sample grid.
pub const SAMPLE_WEEKS: usize = 52;
/// Days per week.
pub const DAYS_PER_WEEK: usize = 7;
/// Largest per-day count in the sample grid.
pub const SAMPLE_MAX_COUNT: u32 = 10;

/// Notice shown next to the grid when it holds sample data.
pub const SAMPLE_NOTICE: &str = "Showing sample data (GitHub API not configured)";

const CALENDAR_QUERY: &str = "query($login: String!) {
  user(login: $login) {
    contributionsCollection {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            contributionCount
            date
          }
        }
      }
    }
  }
}";

#[derive(Debug, Error)]
pub enum ContributionsError {
    #[error("GitHub token not configured")]
    MissingToken,
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },
    #[error("GraphQL error: {0}")]
    Graphql(String),
    #[error("invalid response format from GitHub API: {0}")]
    MalformedResponse(&'static str),
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("network error: {0}")]
    Network(String),
}

/// POST body for the GraphQL endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphqlRequest {
    pub query: &'static str,
    pub variables: QueryVariables,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryVariables {
    pub login: String,
}

impl GraphqlRequest {
    pub fn calendar(config: &GithubConfig) -> Self {
        Self {
            query: CALENDAR_QUERY,
            variables: QueryVariables {
                login: config.login.clone(),
            },
        }
    }
}

/// Value of the `Authorization` header, or `MissingToken`.
pub fn authorization_header(config: &GithubConfig) -> Result<String, ContributionsError> {
    config
        .token()
        .map(|token| format!("Bearer {token}"))
        .ok_or(ContributionsError::MissingToken)
}

/// Rejects any non-2xx status.
pub fn check_status(status: u16, status_text: &str) -> Result<(), ContributionsError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ContributionsError::Http {
            status,
            status_text: status_text.to_string(),
        })
    }
}

// Every level is optional so a partial payload surfaces as
// `MalformedResponse` instead of a decode error.
#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<ResponseData>,
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    user: Option<UserNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserNode {
    contributions_collection: Option<CollectionNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollectionNode {
    contribution_calendar: Option<CalendarNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarNode {
    total_contributions: Option<u32>,
    weeks: Option<Vec<WeekNode>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WeekNode {
    #[serde(default)]
    contribution_days: Vec<DayNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DayNode {
    contribution_count: u32,
    date: Option<String>,
}

/// Parses a response body into a grid.
pub fn parse_response(body: &str) -> Result<ContributionGrid, ContributionsError> {
    let response: GraphqlResponse = serde_json::from_str(body)?;

    if let Some(errors) = response.errors {
        let message = errors
            .into_iter()
            .next()
            .map_or_else(|| "unknown error".to_string(), |e| e.message);
        return Err(ContributionsError::Graphql(message));
    }

    let calendar = response
        .data
        .and_then(|d| d.user)
        .and_then(|u| u.contributions_collection)
        .and_then(|c| c.contribution_calendar)
        .ok_or(ContributionsError::MalformedResponse("missing contribution calendar"))?;
    let weeks = calendar
        .weeks
        .ok_or(ContributionsError::MalformedResponse("missing weeks"))?;

    let weeks: Vec<Vec<ContributionDay>> = weeks
        .into_iter()
        .map(|week| {
            week.contribution_days
                .into_iter()
                .map(|day| ContributionDay {
                    count: day.contribution_count,
                    date: day
                        .date
                        .and_then(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok()),
                })
                .collect()
        })
        .collect();

    let mut grid = ContributionGrid::new(weeks);
    if let Some(total) = calendar.total_contributions {
        grid.total = total;
    }
    Ok(grid)
}

/// One square of the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionDay {
    pub count: u32,
    pub date: Option<NaiveDate>,
}

/// Weeks (columns) of days (rows).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionGrid {
    pub weeks: Vec<Vec<ContributionDay>>,
    pub total: u32,
}

impl ContributionGrid {
    /// Builds a grid, summing the counts for `total`.
    pub fn new(weeks: Vec<Vec<ContributionDay>>) -> Self {
        let total = weeks.iter().flatten().map(|d| d.count).sum();
        Self { weeks, total }
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// Number of day squares.
    pub fn day_count(&self) -> usize {
        self.weeks.iter().map(Vec::len).sum()
    }

    /// Counts in week-major order.
    pub fn counts(&self) -> impl Iterator<Item = u32> + '_ {
        self.weeks.iter().flatten().map(|d| d.count)
    }
}

/// 52 × 7 grid of random counts in `0..=10`, undated.
pub fn sample_grid<R: Rng + ?Sized>(rng: &mut R) -> ContributionGrid {
    let weeks = (0..SAMPLE_WEEKS)
        .map(|_| {
            (0..DAYS_PER_WEEK)
                .map(|_| ContributionDay {
                    count: rng.random_range(0..=SAMPLE_MAX_COUNT),
                    date: None,
                })
                .collect()
        })
        .collect();
    ContributionGrid::new(weeks)
}

/// Where the grid came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContributionSource {
    Live,
    Sample { reason: String },
}

/// What the widget renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributions {
    pub grid: ContributionGrid,
    pub source: ContributionSource,
}

impl Contributions {
    /// Turns a fetch result into something displayable. Any failure,
    /// including a missing token, falls back to a sample grid.
    pub fn resolve<R: Rng + ?Sized>(
        result: Result<ContributionGrid, ContributionsError>,
        rng: &mut R,
    ) -> Self {
        match result {
            Ok(grid) => {
                tracing::debug!(weeks = grid.week_count(), total = grid.total, "contributions loaded");
                Self {
                    grid,
                    source: ContributionSource::Live,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "contributions unavailable, using sample data");
                Self {
                    grid: sample_grid(rng),
                    source: ContributionSource::Sample {
                        reason: e.to_string(),
                    },
                }
            }
        }
    }

    pub fn is_sample(&self) -> bool {
        matches!(self.source, ContributionSource::Sample { .. })
    }

    /// Text to show beside the grid, if any.
    pub fn notice(&self) -> Option<&'static str> {
        self.is_sample().then_some(SAMPLE_NOTICE)
    }
}

/// Colour bucket of a day square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContributionLevel {
    None,
    Low,
    Medium,
    High,
    Max,
}

impl ContributionLevel {
    pub const ALL: [Self; 5] = [Self::None, Self::Low, Self::Medium, Self::High, Self::Max];

    pub fn from_count(count: u32) -> Self {
        match count {
            0 => Self::None,
            1..=3 => Self::Low,
            4..=6 => Self::Medium,
            7..=9 => Self::High,
            _ => Self::Max,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::None => "contrib-level-0",
            Self::Low => "contrib-level-1",
            Self::Medium => "contrib-level-2",
            Self::High => "contrib-level-3",
            Self::Max => "contrib-level-4",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    const LIVE_BODY: &str = r#"{
        "data": {"user": {"contributionsCollection": {"contributionCalendar": {
            "totalContributions": 7,
            "weeks": [
                {"contributionDays": [
                    {"contributionCount": 0, "date": "2024-01-07"},
                    {"contributionCount": 3, "date": "2024-01-08"}
                ]},
                {"contributionDays": [
                    {"contributionCount": 4, "date": "2024-01-14"}
                ]}
            ]
        }}}}
    }"#;

    #[test]
    fn test_no_token_falls_back_to_full_sample() {
        let config = GithubConfig::with_token(None);
        let result = authorization_header(&config).map(|_| unreachable!());
        let contributions = Contributions::resolve(result, &mut rng());

        assert!(contributions.is_sample());
        assert_eq!(contributions.notice(), Some(SAMPLE_NOTICE));
        assert_eq!(contributions.grid.week_count(), 52);
        assert!(contributions.grid.weeks.iter().all(|w| w.len() == 7));
        assert_eq!(contributions.grid.day_count(), 364);
        assert!(contributions.grid.counts().all(|c| c <= 10));
    }

    #[test]
    fn test_non_200_and_missing_weeks_fall_back_identically() {
        let http = check_status(502, "Bad Gateway").map(|()| unreachable!());
        let missing = parse_response(
            r#"{"data": {"user": {"contributionsCollection": {"contributionCalendar": {"totalContributions": 3}}}}}"#,
        );
        assert!(matches!(missing, Err(ContributionsError::MalformedResponse(_))));

        let a = Contributions::resolve(http, &mut rng());
        let b = Contributions::resolve(missing, &mut rng());
        assert!(a.is_sample() && b.is_sample());
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.grid.day_count(), 364);
    }

    #[test]
    fn test_parse_live_response() {
        let grid = parse_response(LIVE_BODY).unwrap();
        assert_eq!(grid.week_count(), 2);
        assert_eq!(grid.day_count(), 3);
        assert_eq!(grid.total, 7);
        assert_eq!(grid.weeks[0][1].date, NaiveDate::from_ymd_opt(2024, 1, 8));

        let contributions = Contributions::resolve(Ok(grid), &mut rng());
        assert_eq!(contributions.source, ContributionSource::Live);
        assert_eq!(contributions.notice(), None);
    }

    #[test]
    fn test_graphql_errors_take_precedence() {
        let body = r#"{"data": null, "errors": [{"message": "Bad credentials"}, {"message": "other"}]}"#;
        match parse_response(body) {
            Err(ContributionsError::Graphql(message)) => assert_eq!(message, "Bad credentials"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        assert!(matches!(parse_response("<html>"), Err(ContributionsError::Decode(_))));
    }

    #[test]
    fn test_check_status() {
        assert!(check_status(200, "OK").is_ok());
        assert!(check_status(204, "No Content").is_ok());
        let err = check_status(401, "Unauthorized").unwrap_err();
        assert_eq!(err.to_string(), "HTTP 401: Unauthorized");
    }

    #[test]
    fn test_request_body() {
        let config = GithubConfig::with_token(Some("t")).login("octocat");
        let body = serde_json::to_value(GraphqlRequest::calendar(&config)).unwrap();
        assert_eq!(body["variables"]["login"], "octocat");
        assert!(body["query"].as_str().unwrap().contains("contributionCalendar"));
        assert_eq!(authorization_header(&config).unwrap(), "Bearer t");
    }

    #[test]
    fn test_levels() {
        assert_eq!(ContributionLevel::from_count(0), ContributionLevel::None);
        assert_eq!(ContributionLevel::from_count(3), ContributionLevel::Low);
        assert_eq!(ContributionLevel::from_count(4), ContributionLevel::Medium);
        assert_eq!(ContributionLevel::from_count(6), ContributionLevel::Medium);
        assert_eq!(ContributionLevel::from_count(9), ContributionLevel::High);
        assert_eq!(ContributionLevel::from_count(10), ContributionLevel::Max);
        assert_eq!(ContributionLevel::from_count(250), ContributionLevel::Max);
    }
}
