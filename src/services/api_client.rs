// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business rules here: build the request, send it, decode the answer.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, File, FormData, RequestCredentials};

use crate::config::CONFIG;
use crate::models::{
    AuctionDetails, BidRecord, BidRequest, BuyNowRequest, FindPasswordRequest, InfoEditRequest,
    SignInRequest, SignInResponse, SignUpRequest, UserInfo,
};
use crate::services::error::ApiError;
use crate::utils::auth_token;

/// Remote marketplace API
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ------------------------------------------------------------------
    // Members
    // ------------------------------------------------------------------

    pub async fn sign_up(&self, payload: &SignUpRequest) -> Result<(), ApiError> {
        log::info!("📝 Signing up member: {}", payload.email);
        let request = with_session(Request::post(&self.url("/members/signup")))
            .json(payload)
            .map_err(|e| ApiError::Build(e.to_string()))?;
        send(request).await.map(|_| ())
    }

    /// Returns the session token issued by the backend
    pub async fn sign_in(&self, payload: &SignInRequest) -> Result<String, ApiError> {
        log::info!("🔐 Signing in: {}", payload.email);
        let request = with_session(Request::post(&self.url("/members/signin")))
            .json(payload)
            .map_err(|e| ApiError::Build(e.to_string()))?;
        let response = send(request).await?;

        if let Some(token) = response.headers().get("Authorization").filter(|t| !t.is_empty()) {
            return Ok(token);
        }

        let body = response.text().await.unwrap_or_default();
        token_from_body(&body).ok_or_else(|| ApiError::Parse("sign-in response carried no token".to_string()))
    }

    pub async fn find_password(&self, payload: &FindPasswordRequest) -> Result<(), ApiError> {
        let request = with_session(Request::post(&self.url("/members/reset-password-request")))
            .json(payload)
            .map_err(|e| ApiError::Build(e.to_string()))?;
        send(request).await.map(|_| ())
    }

    pub async fn my_info(&self) -> Result<UserInfo, ApiError> {
        let response = with_session(Request::get(&self.url("/members/my-info")))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(check(response).await?).await
    }

    /// Multipart profile update: `request` (JSON) plus optional `file`.
    pub async fn info_edit(&self, request: &InfoEditRequest, file: Option<&File>) -> Result<(), ApiError> {
        log::info!("🖊️ Sending profile edit ({} fields, image: {})", request.len(), file.is_some());
        let form = build_info_edit_form(request, file)?;
        let request = with_session(Request::put(&self.url("/members/info-edit")))
            .body(form)
            .map_err(|e| ApiError::Build(e.to_string()))?;
        send(request).await.map(|_| ())
    }

    // ------------------------------------------------------------------
    // Auctions
    // ------------------------------------------------------------------

    pub async fn get_auction(&self, auction_id: &str) -> Result<AuctionDetails, ApiError> {
        log::info!("📋 Fetching auction: {}", auction_id);
        let response = with_session(Request::get(&self.url(&format!("/auctions/{}", auction_id))))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let details: AuctionDetails = decode(check(response).await?).await?;
        log::info!("✅ Auction loaded: {} (current bid {})", details.auction_id, details.current_bid_price);
        Ok(details)
    }

    /// `Ok(false)` means the backend answered but refused the deletion
    pub async fn delete_auction(&self, auction_id: &str) -> Result<bool, ApiError> {
        log::info!("🗑️ Deleting auction: {}", auction_id);
        let response = with_session(Request::delete(&self.url(&format!("/auctions/{}", auction_id))))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(check(response).await?).await
    }

    pub async fn report_auction(&self, auction_id: &str) -> Result<(), ApiError> {
        log::info!("🚩 Reporting auction: {}", auction_id);
        let response = with_session(Request::post(&self.url(&format!("/auctions/{}/report", auction_id))))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check(response).await.map(|_| ())
    }

    pub async fn place_bid(&self, auction_id: &str, payload: &BidRequest) -> Result<(), ApiError> {
        log::info!("💰 Bid of {} on auction {}", payload.bid_price, auction_id);
        let request = with_session(Request::post(&self.url(&format!("/auctions/{}/bids", auction_id))))
            .json(payload)
            .map_err(|e| ApiError::Build(e.to_string()))?;
        send(request).await.map(|_| ())
    }

    pub async fn buy_now(&self, auction_id: &str, payload: &BuyNowRequest) -> Result<(), ApiError> {
        log::info!("🛒 Buy-now on auction {} for {}", auction_id, payload.buy_now_price);
        let request = with_session(Request::post(&self.url(&format!("/auctions/{}/buy-now", auction_id))))
            .json(payload)
            .map_err(|e| ApiError::Build(e.to_string()))?;
        send(request).await.map(|_| ())
    }

    pub async fn bid_history(&self, auction_id: &str) -> Result<Vec<BidRecord>, ApiError> {
        let response = with_session(Request::get(&self.url(&format!("/auctions/{}/bids", auction_id))))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(check(response).await?).await
    }
}

/// Sends the session cookie and mirrors it in the `Authorization` header
fn with_session(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.credentials(RequestCredentials::Include);
    match auth_token() {
        Some(token) => builder.header("Authorization", &token),
        None => builder,
    }
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await
}

async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status == 404 {
        return Err(ApiError::NotFound);
    }
    if !response.ok() {
        let message = match response.text().await {
            Ok(text) if !text.is_empty() => text,
            _ => response.status_text(),
        };
        return Err(ApiError::Http { status, message });
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

fn token_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<SignInResponse>(body)
        .ok()
        .and_then(|response| response.token)
        .filter(|token| !token.is_empty())
}

fn build_info_edit_form(request: &InfoEditRequest, file: Option<&File>) -> Result<FormData, ApiError> {
    let json = serde_json::to_string(request).map_err(|e| ApiError::Build(e.to_string()))?;

    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let parts = js_sys::Array::of1(&JsValue::from_str(&json));
    let request_part = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| ApiError::Browser(format!("{:?}", e)))?;

    let form = FormData::new().map_err(|e| ApiError::Browser(format!("{:?}", e)))?;
    form.append_with_blob("request", &request_part)
        .map_err(|e| ApiError::Browser(format!("{:?}", e)))?;
    if let Some(file) = file {
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|e| ApiError::Browser(format!("{:?}", e)))?;
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::with_base_url("http://api.test/");
        assert_eq!(client.url("/auctions/1"), "http://api.test/auctions/1");
    }

    #[test]
    fn token_is_read_from_json_body() {
        assert_eq!(token_from_body(r#"{"token":"Bearer x"}"#).as_deref(), Some("Bearer x"));
        assert!(token_from_body(r#"{"token":""}"#).is_none());
        assert!(token_from_body("not json").is_none());
    }
}
