use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TeamModalProps {
    /// Team names from config, already sorted.
    pub teams: Vec<String>,
    pub on_confirm: Callback<String>,
}

/// Shown at startup when config carries teams and no persisted choice
/// matches. Confirming applies the team's meter overrides and starts the
/// countdown.
#[function_component(TeamModal)]
pub fn team_modal(props: &TeamModalProps) -> Html {
    let selected = use_state(String::new);

    let onchange = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() {
                selected.set(sel.value());
            }
        })
    };
    let onconfirm = {
        let selected = selected.clone();
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| {
            if selected.is_empty() {
                return;
            }
            on_confirm.emit((*selected).clone());
        })
    };

    html! {
        <div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:100;">
            <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:300px; display:flex; flex-direction:column; gap:12px;">
                <h3 style="margin:0; font-size:18px;">{"Choose your team"}</h3>
                <select {onchange} style="padding:6px;">
                    <option value="" disabled={true} selected={selected.is_empty()}>{"Select a team…"}</option>
                    { for props.teams.iter().map(|t| html! {
                        <option key={t.clone()} value={t.clone()}>{ t.clone() }</option>
                    }) }
                </select>
                <button onclick={onconfirm} disabled={selected.is_empty()}>{"Start"}</button>
            </div>
        </div>
    }
}
