use crate::model::PayloadError;
use yew::prelude::*;

#[function_component]
pub fn LoadingScreen() -> Html {
    html! {
        <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center;">
            <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:16px 28px; font-size:14px; opacity:0.8;">
                {"Loading…"}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct FaultScreenProps {
    pub error: PayloadError,
}

/// Shown when the payload fails boundary validation; nothing else renders.
#[function_component]
pub fn FaultScreen(props: &FaultScreenProps) -> Html {
    html! {
        <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center;">
            <div style="background:rgba(0,0,0,0.85); border:2px solid #f85149; border-radius:12px; padding:20px 28px; min-width:320px; text-align:center;">
                <h2 style="margin:0 0 10px 0; color:#f85149; font-size:18px;">{"Bad scene payload"}</h2>
                <p style="margin:0; font-size:13px; opacity:0.85;">{ props.error.to_string() }</p>
            </div>
        </div>
    }
}
