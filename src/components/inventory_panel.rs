use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct InventoryPanelProps {
    /// Discovered element names, already in sorted order.
    pub names: Vec<String>,
    pub locked: bool,
    /// Tap-to-add: the app places the element at a random position.
    pub on_spawn: Callback<String>,
}

#[function_component(InventoryPanel)]
pub fn inventory_panel(props: &InventoryPanelProps) -> Html {
    html! {
        <aside style="width:230px; flex:none; display:flex; flex-direction:column; gap:8px; background:#161b22; border:1px solid #30363d; border-radius:8px; padding:10px; overflow-y:auto;">
            <h3 style="margin:0; font-size:15px;">{ format!("Inventory ({})", props.names.len()) }</h3>
            <div style="display:flex; flex-wrap:wrap; gap:6px;">
                { for props.names.iter().map(|name| {
                    let ondragstart = {
                        let name = name.clone();
                        let locked = props.locked;
                        Callback::from(move |e: DragEvent| {
                            if locked {
                                return;
                            }
                            if let Some(dt) = e.data_transfer() {
                                let _ = dt.set_data("text/plain", &name);
                            }
                        })
                    };
                    let onclick = {
                        let name = name.clone();
                        let on_spawn = props.on_spawn.clone();
                        Callback::from(move |_: MouseEvent| on_spawn.emit(name.clone()))
                    };
                    html! {
                        <div
                            key={name.clone()}
                            draggable="true"
                            {ondragstart}
                            {onclick}
                            style="padding:6px 10px; background:#21262d; border:1px solid #30363d; border-radius:14px; font-size:12px; cursor:grab; user-select:none;"
                        >
                            { name.clone() }
                        </div>
                    }
                }) }
            </div>
        </aside>
    }
}
