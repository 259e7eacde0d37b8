use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct InfectionBarProps {
    /// Display level, already clamped to [0, 100].
    pub level: f64,
    pub locked: bool,
    pub on_reset: Callback<()>,
}

#[function_component(InfectionBar)]
pub fn infection_bar(props: &InfectionBarProps) -> Html {
    let pct = props.level.clamp(0.0, 100.0);
    let label = if props.locked {
        "LOCKED".to_string()
    } else {
        format!("{}%", pct.ceil() as i64)
    };
    let fill = if props.locked { "#f85149" } else { "#2ea043" };
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <div style="display:flex; align-items:center; gap:10px; background:#161b22; border:1px solid #30363d; border-radius:8px; padding:8px 12px;">
            <span style="font-size:13px; white-space:nowrap;">{"Cure meter"}</span>
            <div style="flex:1; height:12px; background:#0e1116; border:1px solid #30363d; border-radius:6px; overflow:hidden;">
                <div style={format!("width:{pct}%; height:100%; background:{fill}; transition:width 0.3s;")}></div>
            </div>
            <span style="font-size:13px; min-width:48px; text-align:right;">{ label }</span>
            <button onclick={reset_cb} style="font-size:12px; padding:4px 8px;">{"Reset Progress"}</button>
        </div>
    }
}
