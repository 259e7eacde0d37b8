use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use crate::model::{Notice, NoticeKind};
use crate::util::vibrate;

const TOAST_MS: i32 = 1200;

fn toast_style(kind: NoticeKind) -> String {
    let accent = match kind {
        NoticeKind::Discovered => "#2ea043",
        NoticeKind::Victory => "#d29922",
        NoticeKind::Removed => "#8b949e",
        NoticeKind::Info => "#1f6feb",
    };
    format!(
        "background:#161b22; border:1px solid {accent}; border-left:4px solid {accent}; \
         border-radius:8px; padding:8px 14px; font-size:13px; color:#e6edf3; \
         box-shadow:0 4px 12px rgba(0,0,0,0.4);"
    )
}

#[derive(Properties, PartialEq, Clone)]
struct ToastProps {
    pub notice: Notice,
    pub on_dismiss: Callback<u64>,
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
    // Auto-dismiss after a short delay; discoveries also buzz on mobile.
    {
        let id = props.notice.id;
        let kind = props.notice.kind;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with((), move |_| {
            if kind == NoticeKind::Discovered || kind == NoticeKind::Victory {
                vibrate(50);
            }
            let mut cleanup: Box<dyn FnOnce()> = Box::new(|| {});
            if let Some(win) = web_sys::window() {
                let cb = Closure::wrap(Box::new(move || on_dismiss.emit(id)) as Box<dyn FnMut()>);
                if let Ok(handle) = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                    cb.as_ref().unchecked_ref(),
                    TOAST_MS,
                ) {
                    let win = win.clone();
                    cleanup = Box::new(move || {
                        win.clear_timeout_with_handle(handle);
                        drop(cb);
                    });
                }
            }
            move || cleanup()
        });
    }
    html! { <div style={toast_style(props.notice.kind)}>{ props.notice.text.clone() }</div> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ToastLayerProps {
    pub notices: Vec<Notice>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastLayer)]
pub fn toast_layer(props: &ToastLayerProps) -> Html {
    html! {
        <div style="position:fixed; bottom:18px; left:50%; transform:translateX(-50%); display:flex; flex-direction:column; gap:6px; z-index:300; pointer-events:none;">
            { for props.notices.iter().map(|n| html! {
                <Toast key={n.id} notice={n.clone()} on_dismiss={props.on_dismiss.clone()} />
            }) }
        </div>
    }
}
