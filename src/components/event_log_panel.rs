use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EventLogPanelProps {
    pub entries: Vec<String>,
    pub show: bool,
}

/// Debug readout of the most recent emitted slugs, newest first.
#[function_component]
pub fn EventLogPanel(props: &EventLogPanelProps) -> Html {
    if !props.show {
        return html! {};
    }
    let recent: Vec<&String> = props.entries.iter().rev().take(8).collect();
    html! {<div style="position:absolute; left:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 10px; min-width:180px; display:flex; flex-direction:column; gap:4px; font-size:12px; line-height:1.3;">
        <div style="font-weight:600; margin-bottom:2px;">{ format!("Emitted ({})", props.entries.len()) }</div>
        { if recent.is_empty() { html!{ <div style="opacity:0.6;">{"(nothing yet)"}</div> } } else { html!{} } }
        { for recent.iter().map(|slug| html!{
            <div style="display:flex; gap:8px;"><span style="opacity:0.5;">{"→"}</span><span style="color:#58a6ff;">{ (*slug).clone() }</span></div>
        }) }
    </div>}
}
