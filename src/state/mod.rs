// Pure UI state: no DOM, no network. Components drive these and act on
// what they return.

pub mod auction_detail;
pub mod forms;
pub mod loadable;
pub mod modal;
pub mod profile;

pub use auction_detail::{delete_outcome, ActionIntent, AuctionDetailState, DetailEffect, FetchOutcome, ModalContent};
pub use forms::{validate_bid, validate_sign_in, BidError, FormError, SignUpForm};
pub use loadable::{Loadable, RequestSequence, RequestToken};
pub use modal::ModalHost;
pub use profile::{ProfileDraft, ProfileEditor, ProfileField, ProfileMode, ProfileSubmission};
