// ============================================================================
// AUCTION DETAIL PAGE
// ============================================================================
// Struct component: AuctionDetailState decides, this component performs the
// effects (fetches, navigation, confirms) and owns the two click guards.
// ============================================================================

pub mod bid_form;
pub mod bid_history;
pub mod info;

use yew::prelude::*;

use crate::config::CONFIG;
use crate::context::{use_navigator, use_session};
use crate::models::AuctionDetails;
use crate::router::Route;
use crate::services::{ApiClient, ApiError};
use crate::state::{
    delete_outcome, ActionIntent, AuctionDetailState, DetailEffect, FetchOutcome, Loadable,
    ModalContent, RequestToken,
};
use crate::utils::{confirm, Debouncer};

use super::loading_screen::LoadingScreen;
use super::modal::Modal;
use bid_form::{BidForm, BuyNowForm};
use bid_history::BidHistory;
use info::{AuctionInfo, ImageGallery, ItemDescription, SellerInfo};

const DELETE_PROMPT: &str = "Really delete this auction?";
const REPORT_PROMPT: &str = "Report this auction as inappropriate?";

#[derive(Properties, PartialEq)]
pub struct AuctionDetailRouteProps {
    pub auction_id: Option<AttrValue>,
}

/// Route entry: pulls session and navigation from context
#[function_component(AuctionDetailRoute)]
pub fn auction_detail_route(props: &AuctionDetailRouteProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();

    html! {
        <AuctionDetailPage
            auction_id={props.auction_id.clone()}
            is_logged_in={session.is_logged_in}
            on_navigate={navigator.navigate.clone()}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct AuctionDetailPageProps {
    pub auction_id: Option<AttrValue>,
    pub is_logged_in: bool,
    pub on_navigate: Callback<Route>,
}

pub enum Msg {
    Fetched(RequestToken, Result<AuctionDetails, ApiError>),
    ToggleTrigger,
    BidClicked,
    BuyNowClicked,
    OpenModal(ModalContent),
    ToggleModal,
    CloseModal,
    Delete,
    Deleted(Result<bool, ApiError>),
    Report,
    Reported(Result<(), ApiError>),
}

pub struct AuctionDetailPage {
    state: AuctionDetailState,
    api: ApiClient,
    bid_guard: Debouncer<ModalContent>,
    buy_now_guard: Debouncer<ModalContent>,
}

impl AuctionDetailPage {
    fn guard(ctx: &Context<Self>) -> Debouncer<ModalContent> {
        Debouncer::new(CONFIG.ui_config.debounce_window_ms, ctx.link().callback(Msg::OpenModal))
    }

    /// New snapshot: old guards are dropped together with any pending click
    fn replace_guards(&mut self, ctx: &Context<Self>) {
        self.bid_guard = Self::guard(ctx);
        self.buy_now_guard = Self::guard(ctx);
    }

    fn run(&self, ctx: &Context<Self>, effect: DetailEffect) {
        match effect {
            DetailEffect::Fetch { token, auction_id } => {
                let api = self.api.clone();
                ctx.link().send_future(async move {
                    Msg::Fetched(token, api.get_auction(&auction_id).await)
                });
            }
            DetailEffect::Navigate(route) => ctx.props().on_navigate.emit(route),
        }
    }

    fn route_id(ctx: &Context<Self>) -> Option<String> {
        ctx.props()
            .auction_id
            .as_ref()
            .map(|id| id.to_string())
            .filter(|id| !id.is_empty())
    }

    fn view_loaded(&self, ctx: &Context<Self>, details: &AuctionDetails) -> Html {
        let link = ctx.link();
        let props = ctx.props();
        // Route id: the same one bids, delete and report are sent to
        let auction_id: Option<AttrValue> = self.state.auction_id().map(|id| AttrValue::from(id.to_string()));
        let on_sign_in = {
            let on_navigate = props.on_navigate.clone();
            Callback::from(move |_| on_navigate.emit(Route::SignIn))
        };

        html! {
            <div class="auction-detail">
                <div class="auction-container">
                    <div class="auction-left">
                        <ImageGallery
                            image_urls={details.auction_image.clone()}
                            alt={AttrValue::from(details.title.clone())}
                        />
                    </div>
                    <div class="auction-right">
                        <AuctionInfo
                            details={details.clone()}
                            is_logged_in={props.is_logged_in}
                            on_bid={link.callback(|_| Msg::BidClicked)}
                            on_buy_now={link.callback(|_| Msg::BuyNowClicked)}
                            on_sign_in={on_sign_in}
                        />
                        if props.is_logged_in {
                            if let Some(auction_id) = auction_id {
                                <BidHistory
                                    auction_id={auction_id}
                                    refetch_trigger={self.state.refetch_trigger()}
                                />
                            }
                        }
                    </div>
                </div>
                <div class="auction-functions">
                    // Ownership is checked by the backend on delete
                    <button type="button" class="btn-danger" onclick={link.callback(|_| Msg::Delete)}>
                        {"Delete auction"}
                    </button>
                    <button type="button" class="btn-report" onclick={link.callback(|_| Msg::Report)}>
                        {"Report"}
                    </button>
                </div>
                <ItemDescription description={AttrValue::from(details.description.clone())} />
                <SellerInfo
                    nickname={AttrValue::from(details.auction_user_nickname.clone())}
                    rating={details.auction_user_rating}
                />
                {self.view_modal(ctx)}
            </div>
        }
    }

    fn view_modal(&self, ctx: &Context<Self>) -> Html {
        let Some(content) = self.state.modal().visible_content() else {
            return html! {};
        };

        let on_close = ctx.link().callback(|_| Msg::CloseModal);
        let on_refetch = ctx.link().callback(|_| Msg::ToggleTrigger);

        let (title, body) = match content {
            ModalContent::Bid {
                auction_id,
                current_bid_price,
                buy_now_price,
            } => (
                "Place a bid",
                html! {
                    <BidForm
                        auction_id={AttrValue::from(auction_id.clone())}
                        current_bid_price={*current_bid_price}
                        buy_now_price={*buy_now_price}
                        on_close={on_close}
                        on_refetch={on_refetch}
                    />
                },
            ),
            ModalContent::BuyNow {
                auction_id,
                buy_now_price,
            } => (
                "Buy now",
                html! {
                    <BuyNowForm
                        auction_id={AttrValue::from(auction_id.clone())}
                        buy_now_price={*buy_now_price}
                        on_close={on_close}
                        on_refetch={on_refetch}
                    />
                },
            ),
        };

        html! {
            <Modal title={AttrValue::from(title)} on_close={ctx.link().callback(|_| Msg::ToggleModal)}>
                {body}
            </Modal>
        }
    }
}

impl Component for AuctionDetailPage {
    type Message = Msg;
    type Properties = AuctionDetailPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut page = Self {
            state: AuctionDetailState::new(),
            api: ApiClient::new(),
            bid_guard: Self::guard(ctx),
            buy_now_guard: Self::guard(ctx),
        };
        let effect = page.state.set_route(Self::route_id(ctx));
        page.run(ctx, effect);
        page
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if old_props.auction_id != ctx.props().auction_id {
            log::info!("🔀 Auction id changed: {:?} -> {:?}", old_props.auction_id, ctx.props().auction_id);
            self.replace_guards(ctx);
            let effect = self.state.set_route(Self::route_id(ctx));
            self.run(ctx, effect);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Fetched(token, result) => match self.state.apply_fetch(token, result) {
                FetchOutcome::Ignored => false,
                FetchOutcome::Loaded | FetchOutcome::Failed => {
                    self.replace_guards(ctx);
                    true
                }
                FetchOutcome::Redirect(route) => {
                    ctx.props().on_navigate.emit(route);
                    false
                }
            },
            Msg::ToggleTrigger => {
                let effect = self.state.toggle_trigger();
                self.run(ctx, effect);
                true
            }
            Msg::BidClicked => {
                match self.state.modal_content_for(ActionIntent::Bid) {
                    Some(content) => self.bid_guard.call(content),
                    None => log::debug!("⏳ Bid ignored, auction not loaded yet"),
                }
                false
            }
            Msg::BuyNowClicked => {
                match self.state.modal_content_for(ActionIntent::BuyNow) {
                    Some(content) => self.buy_now_guard.call(content),
                    None => log::debug!("⏳ Buy-now ignored, auction not loaded yet"),
                }
                false
            }
            Msg::OpenModal(content) => {
                self.state.open_modal(content);
                true
            }
            Msg::ToggleModal => {
                self.state.toggle_modal();
                true
            }
            Msg::CloseModal => {
                self.state.close_modal();
                true
            }
            Msg::Delete => {
                if let Some(auction_id) = self.state.auction_id().map(str::to_string) {
                    if confirm(DELETE_PROMPT) {
                        let api = self.api.clone();
                        ctx.link().send_future(async move {
                            Msg::Deleted(api.delete_auction(&auction_id).await)
                        });
                    }
                }
                false
            }
            Msg::Deleted(result) => {
                match delete_outcome(result) {
                    Ok(route) => {
                        log::info!("✅ Auction deleted");
                        ctx.props().on_navigate.emit(route);
                    }
                    Err(e) => log::error!("❌ Could not delete auction: {}", e),
                }
                false
            }
            Msg::Report => {
                if let Some(auction_id) = self.state.auction_id().map(str::to_string) {
                    if confirm(REPORT_PROMPT) {
                        let api = self.api.clone();
                        ctx.link().send_future(async move {
                            Msg::Reported(api.report_auction(&auction_id).await)
                        });
                    }
                }
                false
            }
            // Either way the page stays as it is
            Msg::Reported(result) => {
                match result {
                    Ok(()) => log::info!("🚩 Report submitted"),
                    Err(e) => log::error!("❌ Report failed: {}", e),
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match self.state.details() {
            Loadable::Loading => html! { <LoadingScreen /> },
            Loadable::Failed(reason) => html! {
                <div class="load-error">
                    <p>{"This auction could not be loaded."}</p>
                    <p class="muted">{reason.clone()}</p>
                    <button type="button" class="btn-secondary" onclick={ctx.link().callback(|_| Msg::ToggleTrigger)}>
                        {"Try again"}
                    </button>
                </div>
            },
            Loadable::Loaded(details) => self.view_loaded(ctx, details),
        }
    }
}
