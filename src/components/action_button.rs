use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ActionButtonProps {
    /// Opaque automation identifier; attached as `data-hook`, never rendered.
    pub hook_id: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    #[prop_or(true)]
    pub enabled: bool,
    pub on_activate: Callback<()>,
}

#[function_component]
pub fn ActionButton(props: &ActionButtonProps) -> Html {
    let activate = {
        let cb = props.on_activate.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let style = if props.enabled {
        "display:flex; align-items:center; gap:8px; padding:8px 14px; font-size:14px; \
         border:1px solid #30363d; border-radius:8px; background:#1c2128; color:#c9d1d9; cursor:pointer;"
    } else {
        "display:flex; align-items:center; gap:8px; padding:8px 14px; font-size:14px; \
         border:1px solid #21262d; border-radius:8px; background:#161b22; color:#484f58; cursor:not-allowed;"
    };
    html! {
        <button data-hook={props.hook_id.clone()} disabled={!props.enabled} onclick={activate} style={style}>
            { if let Some(icon) = &props.icon { html!{ <span style="width:18px; text-align:center; flex-shrink:0;">{ icon.clone() }</span> } } else { html!{} } }
            <span style="flex:1; text-align:left;">{ props.label.clone() }</span>
        </button>
    }
}
