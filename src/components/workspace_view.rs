use web_sys::HtmlElement;
use yew::prelude::*;

use crate::model::{InstanceId, PlacedInstance, NODE_H, NODE_W};
use crate::state::DragState;

fn pill_style(x: f64, y: f64, dragging: bool) -> String {
    format!(
        "position:absolute; left:{x}px; top:{y}px; width:{NODE_W}px; height:{NODE_H}px; \
         display:flex; align-items:center; justify-content:center; box-sizing:border-box; \
         background:#1f6feb; color:#fff; border:1px solid #388bfd; border-radius:18px; \
         font-size:13px; padding:0 8px; overflow:hidden; white-space:nowrap; \
         text-overflow:ellipsis; user-select:none; touch-action:none; cursor:{};{}",
        if dragging { "grabbing" } else { "grab" },
        if dragging { " z-index:1000;" } else { "" }
    )
}

#[derive(Properties, PartialEq, Clone)]
pub struct WorkspaceNodeProps {
    pub instance: PlacedInstance,
    pub locked: bool,
    pub workspace_ref: NodeRef,
    /// (id, x, y, workspace width, workspace height) at drag-end.
    pub on_settle: Callback<(InstanceId, f64, f64, f64, f64)>,
}

/// One placed pill. The drag itself is direct DOM (style writes through the
/// node ref); the reducer only hears about the final position at pointer-up.
#[function_component(WorkspaceNode)]
pub fn workspace_node(props: &WorkspaceNodeProps) -> Html {
    let node_ref = use_node_ref();
    let drag = use_mut_ref(DragState::default);

    let onpointerdown = {
        let drag = drag.clone();
        let node_ref = node_ref.clone();
        let workspace_ref = props.workspace_ref.clone();
        let locked = props.locked;
        let (ix, iy) = (props.instance.x, props.instance.y);
        Callback::from(move |e: PointerEvent| {
            if locked {
                return;
            }
            e.prevent_default();
            let Some(ws) = workspace_ref.cast::<HtmlElement>() else {
                return;
            };
            let rect = ws.get_bounding_client_rect();
            if let Some(el) = node_ref.cast::<web_sys::Element>() {
                let _ = el.set_pointer_capture(e.pointer_id());
            }
            let mut d = drag.borrow_mut();
            d.dragging = true;
            d.offset_x = e.client_x() as f64 - rect.left() - ix;
            d.offset_y = e.client_y() as f64 - rect.top() - iy;
            d.pending_x = ix;
            d.pending_y = iy;
        })
    };

    let onpointermove = {
        let drag = drag.clone();
        let node_ref = node_ref.clone();
        let workspace_ref = props.workspace_ref.clone();
        Callback::from(move |e: PointerEvent| {
            let mut d = drag.borrow_mut();
            if !d.dragging {
                return;
            }
            e.prevent_default();
            let Some(ws) = workspace_ref.cast::<HtmlElement>() else {
                return;
            };
            let rect = ws.get_bounding_client_rect();
            d.pending_x = e.client_x() as f64 - rect.left() - d.offset_x;
            d.pending_y = e.client_y() as f64 - rect.top() - d.offset_y;
            if let Some(el) = node_ref.cast::<web_sys::Element>() {
                let _ = el.set_attribute("style", &pill_style(d.pending_x, d.pending_y, true));
            }
        })
    };

    let onpointerup = {
        let drag = drag.clone();
        let workspace_ref = props.workspace_ref.clone();
        let on_settle = props.on_settle.clone();
        let id = props.instance.id;
        Callback::from(move |e: PointerEvent| {
            let mut d = drag.borrow_mut();
            if !d.dragging {
                return;
            }
            e.prevent_default();
            d.dragging = false;
            let (w, h) = workspace_ref
                .cast::<HtmlElement>()
                .map(|ws| {
                    let r = ws.get_bounding_client_rect();
                    (r.width(), r.height())
                })
                .unwrap_or((0.0, 0.0));
            on_settle.emit((id, d.pending_x, d.pending_y, w, h));
        })
    };

    html! {
        <div
            ref={node_ref}
            style={pill_style(props.instance.x, props.instance.y, false)}
            onpointerdown={onpointerdown}
            onpointermove={onpointermove}
            onpointerup={onpointerup.clone()}
            onpointercancel={onpointerup}
        >
            { props.instance.name.clone() }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct WorkspaceViewProps {
    pub instances: Vec<PlacedInstance>,
    pub locked: bool,
    pub workspace_ref: NodeRef,
    /// (name, x, y) for a drop from the inventory.
    pub on_place: Callback<(String, f64, f64)>,
    pub on_settle: Callback<(InstanceId, f64, f64, f64, f64)>,
}

#[function_component(WorkspaceView)]
pub fn workspace_view(props: &WorkspaceViewProps) -> Html {
    let ondragover = Callback::from(|e: DragEvent| e.prevent_default());
    let ondrop = {
        let on_place = props.on_place.clone();
        let workspace_ref = props.workspace_ref.clone();
        let locked = props.locked;
        Callback::from(move |e: DragEvent| {
            if locked {
                return;
            }
            e.prevent_default();
            let Some(dt) = e.data_transfer() else {
                return;
            };
            let Ok(name) = dt.get_data("text/plain") else {
                return;
            };
            if name.is_empty() {
                return;
            }
            let Some(ws) = workspace_ref.cast::<HtmlElement>() else {
                return;
            };
            let rect = ws.get_bounding_client_rect();
            // Center the pill under the cursor.
            let x = (e.client_x() as f64 - rect.left() - NODE_W / 2.0).max(0.0);
            let y = (e.client_y() as f64 - rect.top() - NODE_H / 2.0).max(0.0);
            on_place.emit((name, x, y));
        })
    };

    html! {
        <div
            ref={props.workspace_ref.clone()}
            {ondragover}
            {ondrop}
            style="position:relative; flex:1; overflow:hidden; background:#0e1116; border:1px solid #30363d; border-radius:8px;"
        >
            { if props.instances.is_empty() {
                html! { <div style="position:absolute; top:50%; left:50%; transform:translate(-50%,-50%); color:#8b949e; font-size:14px; text-align:center; pointer-events:none;">
                    {"Drag items from Inventory here. Overlap two to combine."}
                </div> }
            } else { html! {} } }
            { for props.instances.iter().map(|inst| html! {
                <WorkspaceNode
                    key={inst.id}
                    instance={inst.clone()}
                    locked={props.locked}
                    workspace_ref={props.workspace_ref.clone()}
                    on_settle={props.on_settle.clone()}
                />
            }) }
        </div>
    }
}
