use crate::model::Creature;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub creature: Creature,
    pub side_label: AttrValue,
    #[prop_or(false)]
    pub dim: bool,
}

fn stat_icon(key: &str) -> &'static str {
    match key {
        "hp" => "❤",
        "attack" => "⚔",
        "speed" => "💨",
        "defense" => "🛡",
        _ => "•",
    }
}

fn stat_color(key: &str) -> &'static str {
    match key {
        "hp" => "#f85149",
        "attack" => "#d29922",
        "speed" => "#58a6ff",
        "defense" => "#3fb950",
        _ => "#8b949e",
    }
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // icon | label | value
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500; text-transform:capitalize;";
    let value_style =
        "min-width:48px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let opacity = if props.dim { "0.75" } else { "1" };
    html! {
        <div style={format!("background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:220px; display:flex; flex-direction:column; gap:8px; font-size:14px; opacity:{};", opacity)}>
            <div style="display:flex; justify-content:space-between; align-items:baseline; gap:10px;">
                <span style="font-weight:600; font-size:15px;">{ props.creature.display_name() }</span>
                <span style="font-size:11px; opacity:0.7;">{ props.side_label.clone() }</span>
            </div>
            { if !props.creature.description.is_empty() { html!{
                <div style="font-size:12px; opacity:0.75; line-height:1.3;">{ props.creature.description.clone() }</div>
            } } else { html!{} } }
            { for props.creature.stats.iter().map(|(key, value)| {
                let color = stat_color(key);
                html!{
                    <div style={row_style}>
                        <span style={format!("{} color:{};", icon_style, color)}>{ stat_icon(key) }</span>
                        <span style={format!("{} color:{};", label_style, color)}>{ key.clone() }</span>
                        <span style={format!("{} color:{};", value_style, color)}>{ *value }</span>
                    </div>
                }
            }) }
        </div>
    }
}
