use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ResultOverlayProps {
    pub show: bool,
    pub message: String,
    pub actions_taken: usize,
    pub on_dismiss: Callback<()>,
}

#[function_component]
pub fn ResultOverlay(props: &ResultOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let dismiss_cb = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.85); border:2px solid #f0883e; padding:24px 32px; border-radius:12px; text-align:center; min-width:320px; z-index:45;">
            <h2 style="margin:0 0 12px 0; color:#f0883e;">{"Session Ended"}</h2>
            <p style="margin:4px 0;">{ props.message.clone() }</p>
            <p style="margin:4px 0; font-size:12px; opacity:0.7;">{ format!("Actions taken: {}", props.actions_taken) }</p>
            <div style="margin-top:16px; display:flex; gap:12px; justify-content:center;">
                <button onclick={dismiss_cb}>{"Back to Menu"}</button>
            </div>
        </div>
    }
}
