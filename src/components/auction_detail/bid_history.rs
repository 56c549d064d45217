use yew::prelude::*;

use crate::hooks::use_bid_history;
use crate::state::Loadable;
use crate::utils::{format_bid_time, format_price};

#[derive(Properties, PartialEq)]
pub struct BidHistoryProps {
    pub auction_id: AttrValue,
    pub refetch_trigger: bool,
}

/// Bids on this auction, newest first. Members only.
#[function_component(BidHistory)]
pub fn bid_history(props: &BidHistoryProps) -> Html {
    let history = use_bid_history(props.auction_id.to_string(), props.refetch_trigger);

    let body = match &history {
        Loadable::Loading => html! { <p class="muted">{"Loading bids..."}</p> },
        Loadable::Failed(_) => html! { <p class="muted">{"Bid history is unavailable"}</p> },
        Loadable::Loaded(bids) if bids.is_empty() => html! { <p class="muted">{"No bids yet"}</p> },
        Loadable::Loaded(bids) => html! {
            <table class="bid-table">
                <thead>
                    <tr><th>{"Bidder"}</th><th>{"Price"}</th><th>{"Time"}</th></tr>
                </thead>
                <tbody>
                    { for bids.iter().map(|bid| html! {
                        <tr>
                            <td>{bid.bidder_nickname.clone()}</td>
                            <td>{format_price(bid.bid_price)}</td>
                            <td>{format_bid_time(&bid.bid_time)}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        },
    };

    html! {
        <section class="bid-history">
            <h3>{"Bid history"}</h3>
            {body}
        </section>
    }
}
