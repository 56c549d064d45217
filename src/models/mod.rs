pub mod auction;
pub mod member;

pub use auction::{AuctionDetails, BidRecord, BidRequest, BuyNowRequest};
pub use member::{
    FindPasswordRequest, InfoEditRequest, SignInRequest, SignInResponse, SignUpRequest, UserInfo,
};
