use yew::prelude::*;

/// Wraps a control and shows a detail card while the pointer rests on it.
#[derive(Properties, PartialEq, Clone)]
pub struct HoverInfoProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub detail: Option<AttrValue>,
    /// Label/value pairs shown under the detail line.
    #[prop_or_default]
    pub lines: Vec<(String, String)>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn HoverInfo(props: &HoverInfoProps) -> Html {
    let hovering = use_state(|| false);
    let enter = {
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| hovering.set(true))
    };
    let leave = {
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| hovering.set(false))
    };
    let card = if *hovering {
        html! {
            <div style="position:absolute; bottom:calc(100% + 8px); left:50%; transform:translateX(-50%); background:#161b22; border:1px solid #30363d; border-radius:8px; padding:10px 12px; min-width:200px; z-index:40; pointer-events:none; font-size:12px; line-height:1.35;">
                <div style="font-weight:600; font-size:13px; margin-bottom:4px;">{ props.title.clone() }</div>
                { if let Some(detail) = &props.detail { html!{ <div style="opacity:0.85; margin-bottom:6px;">{ detail.clone() }</div> } } else { html!{} } }
                { for props.lines.iter().map(|(label, value)| html!{
                    <div style="display:flex; justify-content:space-between; gap:12px;">
                        <span style="opacity:0.7;">{ label.clone() }</span>
                        <span style="font-weight:600;">{ value.clone() }</span>
                    </div>
                }) }
            </div>
        }
    } else {
        html! {}
    };
    html! {
        <div style="position:relative; display:inline-flex;" onmouseenter={enter} onmouseleave={leave}>
            { for props.children.iter() }
            { card }
        </div>
    }
}
