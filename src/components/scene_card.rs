use yew::prelude::*;

/// Card, header and title collapsed into one wrapper. The identifier is only
/// for external automation; everything else passes straight through.
#[derive(Properties, PartialEq, Clone)]
pub struct SceneCardProps {
    pub hook_id: AttrValue,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn SceneCard(props: &SceneCardProps) -> Html {
    html! {
        <div
            data-hook={props.hook_id.clone()}
            style="background:rgba(22,27,34,0.92); border:1px solid #30363d; border-radius:12px; padding:20px 24px; min-width:320px; max-width:520px; display:flex; flex-direction:column; gap:12px;"
        >
            { if let Some(title) = &props.title { html!{
                <div style="display:flex; flex-direction:column; gap:2px;">
                    <h2 style="margin:0; font-size:22px; color:#58a6ff; text-align:center;">{ title.clone() }</h2>
                    { if let Some(sub) = &props.subtitle { html!{ <div style="font-size:12px; opacity:0.7; text-align:center;">{ sub.clone() }</div> } } else { html!{} } }
                </div>
            } } else { html!{} } }
            { for props.children.iter() }
        </div>
    }
}
