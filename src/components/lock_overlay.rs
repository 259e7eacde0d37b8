use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LockOverlayProps {
    pub show: bool,
}

/// Full-screen overlay once the infection countdown hits zero. Crafting
/// stays disabled until the player resets.
#[function_component(LockOverlay)]
pub fn lock_overlay(props: &LockOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    html! {
        <div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.8); z-index:200;">
            <div style="background:#161b22; border:2px solid #f85149; border-radius:12px; padding:28px 36px; text-align:center; max-width:420px;">
                <h2 style="margin:0 0 10px 0; color:#f85149;">{"🧟 The infection won"}</h2>
                <p style="margin:4px 0;">{"The cure meter hit zero. Crafting is disabled."}</p>
                <p style="margin:4px 0; font-size:13px; opacity:0.7;">{"Use Reset Progress to try again."}</p>
            </div>
        </div>
    }
}
