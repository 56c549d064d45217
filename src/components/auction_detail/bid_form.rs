// ============================================================================
// BID / BUY-NOW FORMS - modal children of the auction detail page
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::{BidRequest, BuyNowRequest};
use crate::services::ApiClient;
use crate::state::validate_bid;
use crate::utils::format_price;

#[derive(Properties, PartialEq)]
pub struct BidFormProps {
    pub auction_id: AttrValue,
    pub current_bid_price: u64,
    pub buy_now_price: u64,
    pub on_close: Callback<()>,
    /// Flips the page's re-fetch trigger
    pub on_refetch: Callback<()>,
}

#[function_component(BidForm)]
pub fn bid_form(props: &BidFormProps) -> Html {
    let amount = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_input = {
        let amount = amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let on_submit = {
        let amount = amount.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let auction_id = props.auction_id.to_string();
        let current_bid_price = props.current_bid_price;
        let buy_now_price = props.buy_now_price;
        let on_close = props.on_close.clone();
        let on_refetch = props.on_refetch.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let bid_price = match validate_bid(&amount, current_bid_price, buy_now_price) {
                Ok(price) => price,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            submitting.set(true);
            error.set(None);

            let auction_id = auction_id.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let on_close = on_close.clone();
            let on_refetch = on_refetch.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().place_bid(&auction_id, &BidRequest { bid_price }).await {
                    Ok(()) => {
                        log::info!("✅ Bid placed: {} on {}", bid_price, auction_id);
                        on_close.emit(());
                        on_refetch.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Bid failed: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <form class="bid-form" onsubmit={on_submit}>
            <p class="bid-current">
                {format!("Current bid: {} KRW", format_price(props.current_bid_price))}
            </p>
            <p class="bid-buy-now">
                {format!("Buy now: {} KRW", format_price(props.buy_now_price))}
            </p>
            <input
                type="text"
                inputmode="numeric"
                placeholder="Your bid"
                value={(*amount).clone()}
                oninput={on_input}
            />
            if let Some(message) = &*error {
                <p class="form-error">{message.clone()}</p>
            }
            <div class="form-actions">
                <button type="button" class="btn-secondary" onclick={props.on_close.reform(|_: MouseEvent| ())}>
                    {"Cancel"}
                </button>
                <button type="submit" class="btn-primary" disabled={*submitting}>
                    {"Bid"}
                </button>
            </div>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct BuyNowFormProps {
    pub auction_id: AttrValue,
    pub buy_now_price: u64,
    pub on_close: Callback<()>,
    pub on_refetch: Callback<()>,
}

#[function_component(BuyNowForm)]
pub fn buy_now_form(props: &BuyNowFormProps) -> Html {
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_confirm = {
        let error = error.clone();
        let submitting = submitting.clone();
        let auction_id = props.auction_id.to_string();
        let buy_now_price = props.buy_now_price;
        let on_close = props.on_close.clone();
        let on_refetch = props.on_refetch.clone();

        Callback::from(move |_: MouseEvent| {
            if *submitting {
                return;
            }
            submitting.set(true);
            error.set(None);

            let auction_id = auction_id.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let on_close = on_close.clone();
            let on_refetch = on_refetch.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let request = BuyNowRequest { buy_now_price };
                match ApiClient::new().buy_now(&auction_id, &request).await {
                    Ok(()) => {
                        log::info!("✅ Bought auction {} for {}", auction_id, buy_now_price);
                        on_close.emit(());
                        on_refetch.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Buy-now failed: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="buy-now-form">
            <p>{format!("Buy this item now for {} KRW?", format_price(props.buy_now_price))}</p>
            if let Some(message) = &*error {
                <p class="form-error">{message.clone()}</p>
            }
            <div class="form-actions">
                <button type="button" class="btn-secondary" onclick={props.on_close.reform(|_: MouseEvent| ())}>
                    {"Cancel"}
                </button>
                <button type="button" class="btn-primary" onclick={on_confirm} disabled={*submitting}>
                    {"Buy now"}
                </button>
            </div>
        </div>
    }
}
