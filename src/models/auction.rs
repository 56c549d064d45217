use serde::{Deserialize, Serialize};

/// Auction snapshot as returned by `GET /auctions/{id}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionDetails {
    pub auction_id: String,
    #[serde(default)]
    pub title: String,
    pub auction_user_nickname: String,
    #[serde(default)]
    pub auction_user_rating: Option<f64>,
    pub current_bid_price: u64,
    pub buy_now_price: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub auction_image: Vec<String>,
}

/// One entry of `GET /auctions/{id}/bids`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidRecord {
    pub bidder_nickname: String,
    pub bid_price: u64,
    pub bid_time: String,
}

/// ISO timestamps order lexically, so a string sort is enough
pub fn newest_first(mut bids: Vec<BidRecord>) -> Vec<BidRecord> {
    bids.sort_by(|a, b| b.bid_time.cmp(&a.bid_time));
    bids
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidRequest {
    pub bid_price: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyNowRequest {
    pub buy_now_price: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auction_details_accepts_backend_payload() {
        let json = r#"{
            "auctionId": "42",
            "auctionUserNickname": "seller",
            "auctionUserRating": 4.5,
            "currentBidPrice": 12000,
            "buyNowPrice": 50000,
            "description": "lamp",
            "auctionImage": ["a.png", "b.png"]
        }"#;

        let details: AuctionDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.auction_id, "42");
        assert_eq!(details.title, "");
        assert_eq!(details.auction_user_rating, Some(4.5));
        assert_eq!(details.auction_image.first().map(String::as_str), Some("a.png"));
    }

    #[test]
    fn bids_are_sorted_newest_first() {
        let bid = |price, time: &str| BidRecord {
            bidder_nickname: "b".to_string(),
            bid_price: price,
            bid_time: time.to_string(),
        };
        let sorted = newest_first(vec![
            bid(100, "2024-05-01T10:00:00"),
            bid(300, "2024-05-03T10:00:00"),
            bid(200, "2024-05-02T10:00:00"),
        ]);
        let prices: Vec<u64> = sorted.iter().map(|b| b.bid_price).collect();
        assert_eq!(prices, vec![300, 200, 100]);
    }

    #[test]
    fn missing_rating_and_images_default() {
        let json = r#"{
            "auctionId": "7",
            "auctionUserNickname": "n",
            "currentBidPrice": 1,
            "buyNowPrice": 2
        }"#;

        let details: AuctionDetails = serde_json::from_str(json).unwrap();
        assert!(details.auction_user_rating.is_none());
        assert!(details.auction_image.is_empty());
    }
}
