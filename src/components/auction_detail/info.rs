use yew::prelude::*;

use crate::models::AuctionDetails;
use crate::utils::{format_price, format_rating};

#[derive(Properties, PartialEq)]
pub struct ImageGalleryProps {
    pub image_urls: Vec<String>,
    #[prop_or_default]
    pub alt: AttrValue,
}

#[function_component(ImageGallery)]
pub fn image_gallery(props: &ImageGalleryProps) -> Html {
    let selected = use_state(|| 0usize);

    // Keep the index valid when a re-fetch brings fewer images
    let index = (*selected).min(props.image_urls.len().saturating_sub(1));

    if props.image_urls.is_empty() {
        return html! { <div class="image-module empty">{"No images"}</div> };
    }

    html! {
        <div class="image-module">
            <img class="image-main" src={props.image_urls[index].clone()} alt={props.alt.clone()} />
            if props.image_urls.len() > 1 {
                <div class="image-thumbnails">
                    { for props.image_urls.iter().enumerate().map(|(i, url)| {
                        let selected = selected.clone();
                        let class = if i == index { "thumbnail active" } else { "thumbnail" };
                        html! {
                            <img
                                class={class}
                                src={url.clone()}
                                onclick={Callback::from(move |_: MouseEvent| selected.set(i))}
                            />
                        }
                    }) }
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AuctionInfoProps {
    pub details: AuctionDetails,
    pub is_logged_in: bool,
    pub on_bid: Callback<()>,
    pub on_buy_now: Callback<()>,
    pub on_sign_in: Callback<()>,
}

#[function_component(AuctionInfo)]
pub fn auction_info(props: &AuctionInfoProps) -> Html {
    let details = &props.details;

    html! {
        <div class="auction-info">
            if !details.title.is_empty() {
                <h1 class="auction-title">{details.title.clone()}</h1>
            }
            <div class="price-row">
                <span class="price-label">{"Current bid"}</span>
                <span class="price-value">{format!("{} KRW", format_price(details.current_bid_price))}</span>
            </div>
            <div class="price-row">
                <span class="price-label">{"Buy now"}</span>
                <span class="price-value">{format!("{} KRW", format_price(details.buy_now_price))}</span>
            </div>
            if props.is_logged_in {
                <div class="auction-actions">
                    <button type="button" class="btn-primary" onclick={props.on_bid.reform(|_: MouseEvent| ())}>
                        {"Place bid"}
                    </button>
                    <button type="button" class="btn-secondary" onclick={props.on_buy_now.reform(|_: MouseEvent| ())}>
                        {"Buy now"}
                    </button>
                </div>
            } else {
                <button type="button" class="btn-link" onclick={props.on_sign_in.reform(|_: MouseEvent| ())}>
                    {"Sign in to bid"}
                </button>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SellerInfoProps {
    pub nickname: AttrValue,
    pub rating: Option<f64>,
}

#[function_component(SellerInfo)]
pub fn seller_info(props: &SellerInfoProps) -> Html {
    html! {
        <div class="seller-info">
            <span class="seller-nickname">{props.nickname.clone()}</span>
            if let Some(rating) = props.rating {
                <span class="seller-rating">{format_rating(rating)}</span>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ItemDescriptionProps {
    pub description: AttrValue,
}

#[function_component(ItemDescription)]
pub fn item_description(props: &ItemDescriptionProps) -> Html {
    html! {
        <section class="item-description">
            <h3>{"Description"}</h3>
            { for props.description.lines().map(|line| html! { <p>{line.to_string()}</p> }) }
        </section>
    }
}
