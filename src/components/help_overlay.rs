use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HelpOverlayProps {
    pub show: bool,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn HelpOverlay(props: &HelpOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.87); border:2px solid #30363d; padding:28px 36px; border-radius:14px; max-width:520px; width:90%; box-shadow:0 0 0 1px #1a1f24, 0 6px 18px rgba(0,0,0,0.6); font-size:14px; line-height:1.4; z-index:50;">
            <h2 style="margin:0 0 12px 0; font-size:22px; color:#58a6ff; text-align:center;">{"How to Play"}</h2>
            <ul style="margin:0 0 12px 18px; padding:0; list-style:disc; display:flex; flex-direction:column; gap:4px;">
                <li>{"Only currently-permitted actions appear; the rest are hidden."}</li>
                <li>{"A greyed-out button is visible but not accepting input right now."}</li>
                <li>{"In battle, hover a skill to see its numbers before committing."}</li>
                <li>{"Swap rotates your roster; it needs a benched creature."}</li>
                <li>{"Pausing a match keeps the scoreboard up but blocks serving."}</li>
                <li>{"Press Esc to close this screen or the settings."}</li>
            </ul>
            <div style="display:flex; gap:12px; justify-content:center;">
                <button onclick={close_cb}>{"Close"}</button>
            </div>
        </div>
    }
}
