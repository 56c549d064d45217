use yew::prelude::*;

use crate::models::auction::{newest_first, BidRecord};
use crate::services::ApiClient;
use crate::state::{Loadable, RequestSequence};

/// Bid list for `auction_id`, refreshed whenever `refetch_trigger` flips.
#[hook]
pub fn use_bid_history(auction_id: String, refetch_trigger: bool) -> Loadable<Vec<BidRecord>> {
    let state = use_state(Loadable::<Vec<BidRecord>>::default);
    let sequence = use_mut_ref(RequestSequence::new);

    {
        let state = state.clone();
        use_effect_with((auction_id, refetch_trigger), move |(auction_id, _)| {
            let token = sequence.borrow_mut().next();
            let auction_id = auction_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::new().bid_history(&auction_id).await;
                if !sequence.borrow().is_current(token) {
                    return;
                }
                match result {
                    Ok(bids) => {
                        state.set(Loadable::Loaded(newest_first(bids)));
                    }
                    Err(e) => {
                        log::error!("❌ Error loading bid history for {}: {}", auction_id, e);
                        state.set(Loadable::Failed(e.to_string()));
                    }
                }
            });
            || ()
        });
    }

    (*state).clone()
}
