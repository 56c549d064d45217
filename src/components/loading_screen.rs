use yew::prelude::*;

#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    html! {
        <div class="loading-screen">
            <div class="spinner"></div>
            <p>{"Loading..."}</p>
        </div>
    }
}
