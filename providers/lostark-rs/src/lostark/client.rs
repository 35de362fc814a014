//! Lost Ark HTTP Client
//!
//! HTTP client wrapper for making requests to the Lost Ark REST API.
//! Every request passes through one shared [`AdmissionGate`] so concurrent
//! callers stay inside the quota the server announces in its headers.

use crate::config::{ClientConfig, Credentials};
use crate::error::{LostArkError, Result};
use crate::lostark::types::{
    ArmoryAvatar, ArmoryCard, ArmoryEngraving, ArmoryEquipment, ArmoryGem, ArmoryProfile,
    ArmorySkill, Auction, AuctionOption, ChallengeAbyssDungeon, ChallengeGuardianRaid,
    CharacterInfo, Collectible, ColosseumInfo, ContentsCalendar, Event, GuildRanking,
    MarketItemStats, MarketList, MarketOption, Notice, NoticeType, RequestAuctionItems,
    RequestMarketItems,
};
use crate::ratelimit::{AdmissionGate, QuotaSnapshot};
use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Lost Ark REST API HTTP client
///
/// Wraps reqwest::Client with the API base URL, the bearer token and the
/// rate-limit gate. Clones share the same connection pool and quota window.
#[derive(Clone)]
pub struct LostArkClient {
    /// HTTP client for making requests
    pub(crate) client: Client,
    /// Base URL for the Lost Ark API
    pub(crate) base_url: Url,
    /// Bearer token credentials
    pub(crate) credentials: Credentials,
    /// Admission gate shared by every request of this client
    pub(crate) gate: AdmissionGate,
}

impl std::fmt::Debug for LostArkClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LostArkClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_token", &self.credentials.api_token)
            .field("gate", &self.gate)
            .finish()
    }
}

impl LostArkClient {
    /// Creates a client from explicit credentials and configuration
    ///
    /// # Errors
    /// Returns `LostArkError::Config` if the base URL is invalid or the
    /// underlying HTTP client cannot be built
    pub fn new(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| LostArkError::Config(format!("Invalid base URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(LostArkError::Config(format!(
                "Base URL cannot carry a path: {}",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| LostArkError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            credentials,
            gate: AdmissionGate::with_reset_grace(config.reset_grace),
        })
    }

    /// Creates a client with default settings for the given token
    pub fn with_token(token: impl Into<String>) -> Result<Self> {
        Self::new(Credentials::new(token)?, ClientConfig::default())
    }

    /// Creates a client from `LOSTARK_API_TOKEN` and the `LOSTARK_*` settings
    pub fn from_env() -> Result<Self> {
        Self::new(Credentials::from_env()?, ClientConfig::from_env()?)
    }

    /// Returns the configured base URL
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Returns the client's current view of the server quota
    pub fn rate_limit(&self) -> QuotaSnapshot {
        self.gate.snapshot()
    }

    /// Builds an endpoint URL, percent-encoding each path segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LostArkError::Config("Base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.endpoint(segments)?;
        let request = self.client.request(Method::GET, url.clone()).query(query);
        self.execute(request, &url).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T> {
        let url = self.endpoint(segments)?;
        let request = self.client.request(Method::POST, url.clone()).json(body);
        self.execute(request, &url).await
    }

    /// Sends one request through the rate-limit gate and decodes the body
    ///
    /// The gate sees every response, including errors, before the status is
    /// mapped. A transport failure drops the permit, which frees the slot.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder, url: &Url) -> Result<T> {
        let request = request
            .header(ACCEPT, "application/json")
            .bearer_auth(self.credentials.api_token.expose_secret());

        let permit = self.gate.acquire().await;
        let response = request.send().await?;
        let status = response.status();
        permit.release(status, response.headers());

        debug!(path = url.path(), status = status.as_u16(), "Lost Ark API responded");

        if status != StatusCode::OK {
            return Err(LostArkError::from_status(status, response.headers()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    // ========== News ==========

    /// Returns official notices, optionally filtered by title text and type
    ///
    /// Calls GET /news/notices
    pub async fn fetch_notices(
        &self,
        search_text: Option<&str>,
        notice_type: Option<NoticeType>,
    ) -> Result<Vec<Notice>> {
        let mut query = Vec::new();
        if let Some(text) = search_text {
            query.push(("searchText", text));
        }
        if let Some(kind) = notice_type {
            query.push(("type", kind.as_str()));
        }
        self.get(&["news", "notices"], &query).await
    }

    /// Returns the events in progress
    ///
    /// Calls GET /news/events
    pub async fn fetch_events(&self) -> Result<Vec<Event>> {
        self.get(&["news", "events"], &[]).await
    }

    // ========== Characters ==========

    /// Returns all character profiles of the account owning `character_name`
    ///
    /// Calls GET /characters/{characterName}/siblings. The API answers `null`
    /// for unknown names, which yields an empty list.
    pub async fn fetch_characters(&self, character_name: &str) -> Result<Vec<CharacterInfo>> {
        let siblings: Option<Vec<CharacterInfo>> = self
            .get(&["characters", character_name, "siblings"], &[])
            .await?;
        Ok(siblings.unwrap_or_default())
    }

    // ========== Armories ==========
    //
    // All armory endpoints answer `null` for characters that do not exist.

    async fn armory<T: DeserializeOwned>(
        &self,
        character_name: &str,
        section: &str,
    ) -> Result<Option<T>> {
        self.get(&["armories", "characters", character_name, section], &[])
            .await
    }

    /// Returns a summary of the basic stats of a character
    pub async fn fetch_profile(&self, character_name: &str) -> Result<Option<ArmoryProfile>> {
        self.armory(character_name, "profiles").await
    }

    /// Returns the items equipped by a character
    pub async fn fetch_equipment(
        &self,
        character_name: &str,
    ) -> Result<Option<Vec<ArmoryEquipment>>> {
        self.armory(character_name, "equipment").await
    }

    /// Returns the avatars equipped by a character
    pub async fn fetch_avatars(&self, character_name: &str) -> Result<Option<Vec<ArmoryAvatar>>> {
        self.armory(character_name, "avatars").await
    }

    /// Returns the combat skills of a character
    pub async fn fetch_combat_skills(
        &self,
        character_name: &str,
    ) -> Result<Option<Vec<ArmorySkill>>> {
        self.armory(character_name, "combat-skills").await
    }

    /// Returns the engravings equipped by a character
    pub async fn fetch_engravings(&self, character_name: &str) -> Result<Option<ArmoryEngraving>> {
        self.armory(character_name, "engravings").await
    }

    /// Returns the cards equipped by a character
    pub async fn fetch_cards(&self, character_name: &str) -> Result<Option<ArmoryCard>> {
        self.armory(character_name, "cards").await
    }

    /// Returns the gems equipped by a character
    pub async fn fetch_gems(&self, character_name: &str) -> Result<Option<ArmoryGem>> {
        self.armory(character_name, "gems").await
    }

    /// Returns the proving grounds record of a character
    pub async fn fetch_colosseums(&self, character_name: &str) -> Result<Option<ColosseumInfo>> {
        self.armory(character_name, "colosseums").await
    }

    /// Returns the collectible progress of a character
    pub async fn fetch_collectibles(
        &self,
        character_name: &str,
    ) -> Result<Option<Vec<Collectible>>> {
        self.armory(character_name, "collectibles").await
    }

    // ========== Auctions ==========

    /// Returns search options for the auction house
    ///
    /// Calls GET /auctions/options
    pub async fn fetch_auction_options(&self) -> Result<AuctionOption> {
        self.get(&["auctions", "options"], &[]).await
    }

    /// Returns active auctions matching the search options
    ///
    /// Calls POST /auctions/items
    pub async fn fetch_auction_items(&self, request: &RequestAuctionItems) -> Result<Auction> {
        self.post(&["auctions", "items"], request).await
    }

    // ========== Guilds ==========

    /// Returns guild rankings of a server (e.g. "루페온")
    ///
    /// Calls GET /guilds/rankings?serverName={server}
    pub async fn fetch_guilds(&self, server_name: &str) -> Result<Vec<GuildRanking>> {
        self.get(&["guilds", "rankings"], &[("serverName", server_name)])
            .await
    }

    // ========== Markets ==========

    /// Returns search options for the market
    ///
    /// Calls GET /markets/options
    pub async fn fetch_market_options(&self) -> Result<MarketOption> {
        self.get(&["markets", "options"], &[]).await
    }

    /// Returns the trade history of a market item
    ///
    /// Calls GET /markets/items/{itemId}
    pub async fn fetch_market_item(&self, item_id: i64) -> Result<Vec<MarketItemStats>> {
        let item_id = item_id.to_string();
        self.get(&["markets", "items", &item_id], &[]).await
    }

    /// Returns market listings matching the search options
    ///
    /// Calls POST /markets/items
    pub async fn fetch_market_items(&self, request: &RequestMarketItems) -> Result<MarketList> {
        self.post(&["markets", "items"], request).await
    }

    // ========== Game contents ==========

    /// Returns this week's challenge abyss dungeons
    pub async fn fetch_challenge_abyss_dungeons(&self) -> Result<Vec<ChallengeAbyssDungeon>> {
        self.get(&["gamecontents", "challenge-abyss-dungeons"], &[])
            .await
    }

    /// Returns this week's challenge guardian raids
    pub async fn fetch_challenge_guardian_raids(&self) -> Result<ChallengeGuardianRaid> {
        self.get(&["gamecontents", "challenge-guardian-raids"], &[])
            .await
    }

    /// Returns the weekly contents calendar
    pub async fn fetch_calendar(&self) -> Result<Vec<ContentsCalendar>> {
        self.get(&["gamecontents", "calendar"], &[]).await
    }
}
