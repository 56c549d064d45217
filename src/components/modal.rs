use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    pub children: Children,
}

/// Overlay + centered panel. Only mounted while the host is open, so a
/// closed modal never sits on top of the page.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let close = props.on_close.reform(|_: MouseEvent| ());
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal active" role="dialog" aria-modal="true">
            <div class="modal-overlay" onclick={close.clone()}></div>
            <div class="modal-content" onclick={stop}>
                <div class="modal-header">
                    if let Some(title) = &props.title {
                        <h2>{title.clone()}</h2>
                    }
                    <button class="btn-close" onclick={close}>{"✕"}</button>
                </div>
                <div class="modal-body">
                    {props.children.clone()}
                </div>
            </div>
        </div>
    }
}
