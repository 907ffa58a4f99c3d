//! GitHub GraphQL fetch.

use folio_core::contributions::{
    GraphqlRequest, authorization_header, check_status, parse_response,
};
use folio_core::{ContributionGrid, ContributionsError, GithubConfig};
use gloo::net::http::Request;
use tracing::debug;

/// Build-time configuration. A missing or blank `FOLIO_GITHUB_TOKEN` leaves
/// the token unset and the widget shows sample data.
pub fn github_config() -> GithubConfig {
    GithubConfig::with_token(option_env!("FOLIO_GITHUB_TOKEN"))
}

/// Fetches the contribution calendar for `config.login`.
pub async fn fetch_contributions(
    config: &GithubConfig,
) -> Result<ContributionGrid, ContributionsError> {
    let authorization = authorization_header(config)?;

    debug!(endpoint = %config.endpoint, login = %config.login, "fetching contributions");

    let response = Request::post(&config.endpoint)
        .header("Content-Type", "application/json")
        .header("Authorization", &authorization)
        .json(&GraphqlRequest::calendar(config))
        .map_err(|e| ContributionsError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContributionsError::Network(e.to_string()))?;

    check_status(response.status(), &response.status_text())?;

    let body = response
        .text()
        .await
        .map_err(|e| ContributionsError::Network(e.to_string()))?;

    debug!("contributions response: {} bytes", body.len());

    parse_response(&body)
}
