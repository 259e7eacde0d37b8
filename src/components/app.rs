use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::{
    infection_bar::InfectionBar, inventory_panel::InventoryPanel, lock_overlay::LockOverlay,
    team_modal::TeamModal, toast_layer::ToastLayer, workspace_view::WorkspaceView,
};
use crate::model::{Countdown, InstanceId, LabAction, LabConfig, LabState};
use crate::net;
use crate::storage;
use crate::util::{clog, random_position};

#[function_component(App)]
pub fn app() -> Html {
    let lab = use_reducer(|| {
        LabState::bootstrap(storage::load_discovered_extras(), storage::load_workspace())
    });
    let config = use_state(|| None::<LabConfig>);
    let team = use_state(storage::load_team);
    let show_team_modal = use_state(|| false);
    let workspace_ref = use_node_ref();

    // Read-once fetches. A failed config fetch falls back to built-in
    // defaults and skips team selection; the countdown still starts.
    {
        let lab = lab.clone();
        let config = config.clone();
        let team = team.clone();
        let show_team_modal = show_team_modal.clone();
        use_effect_with((), move |_| {
            {
                let lab = lab.clone();
                spawn_local(async move {
                    match net::fetch_recipes().await {
                        Some(pairs) => lab.dispatch(LabAction::RecipesLoaded { pairs }),
                        None => clog("recipes fetch failed; nothing will combine"),
                    }
                });
            }
            spawn_local(async move {
                let cfg = net::fetch_config().await.unwrap_or_default();
                // A persisted team that is still present skips the modal.
                let saved = (*team).clone().filter(|t| cfg.teams.contains_key(t));
                if cfg.teams.is_empty() || saved.is_some() {
                    let (level, decay) = cfg.meter_for(saved.as_deref());
                    lab.dispatch(LabAction::ApplyTeamConfig {
                        level,
                        decay,
                        proximity: cfg.combine_proximity,
                    });
                } else {
                    show_team_modal.set(true);
                }
                config.set(Some(cfg));
            });
            || ()
        });
    }

    // Countdown interval: armed once per epoch, cleared before re-arming
    // and once the lock engages, so two timers never tick at once.
    {
        let lab = lab.clone();
        let deps = (
            lab.countdown_epoch,
            matches!(lab.countdown, Countdown::Running { .. }),
        );
        use_effect_with(deps, move |(_, running)| {
            let mut cleanup: Box<dyn FnOnce()> = Box::new(|| {});
            if *running {
                if let Some(win) = web_sys::window() {
                    let handle = lab.clone();
                    let tick = Closure::wrap(Box::new(move || {
                        handle.dispatch(LabAction::CountdownTick);
                    }) as Box<dyn FnMut()>);
                    if let Ok(id) = win.set_interval_with_callback_and_timeout_and_arguments_0(
                        tick.as_ref().unchecked_ref(),
                        1000,
                    ) {
                        let win = win.clone();
                        cleanup = Box::new(move || {
                            win.clear_interval_with_handle(id);
                            drop(tick);
                        });
                    }
                }
            }
            move || cleanup()
        });
    }

    // Write-through persistence: the discovery slot after every new
    // discovery, the workspace slot after every structural change.
    {
        let lab = lab.clone();
        use_effect_with(lab.discovered.clone(), move |_| {
            storage::save_discovered_extras(&lab.discovered_extras());
            || ()
        });
    }
    {
        let lab = lab.clone();
        use_effect_with(lab.version, move |_| {
            storage::save_workspace(&lab.snapshot());
            || ()
        });
    }

    let locked = lab.crafting_locked();
    let level = lab.countdown.display_level();
    let names: Vec<String> = lab.discovered.iter().cloned().collect();

    let on_spawn = {
        let lab = lab.clone();
        let workspace_ref = workspace_ref.clone();
        Callback::from(move |name: String| {
            if lab.crafting_locked() {
                return;
            }
            let (w, h) = workspace_ref
                .cast::<HtmlElement>()
                .map(|el| {
                    let r = el.get_bounding_client_rect();
                    (r.width(), r.height())
                })
                .unwrap_or((800.0, 600.0));
            let (x, y) = random_position(w, h);
            lab.dispatch(LabAction::Place { name, x, y });
        })
    };

    let on_place = {
        let lab = lab.clone();
        Callback::from(move |(name, x, y): (String, f64, f64)| {
            lab.dispatch(LabAction::Place { name, x, y });
        })
    };

    let on_settle = {
        let lab = lab.clone();
        Callback::from(move |(id, x, y, width, height): (InstanceId, f64, f64, f64, f64)| {
            lab.dispatch(LabAction::Settle {
                id,
                x,
                y,
                width,
                height,
            });
        })
    };

    let on_dismiss = {
        let lab = lab.clone();
        Callback::from(move |id: u64| lab.dispatch(LabAction::DismissNotice { id }))
    };

    let on_reset = {
        let lab = lab.clone();
        let config = config.clone();
        let team = team.clone();
        Callback::from(move |_: ()| {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message("Reset discovered items and workspace?")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            storage::clear_progress();
            let cfg = (*config).clone().unwrap_or_default();
            let (level, decay) = cfg.meter_for((*team).as_deref());
            lab.dispatch(LabAction::ResetProgress { level, decay });
        })
    };

    let on_confirm_team = {
        let lab = lab.clone();
        let config = config.clone();
        let team = team.clone();
        let show_team_modal = show_team_modal.clone();
        Callback::from(move |name: String| {
            storage::save_team(&name);
            let cfg = (*config).clone().unwrap_or_default();
            let (level, decay) = cfg.meter_for(Some(&name));
            team.set(Some(name));
            show_team_modal.set(false);
            lab.dispatch(LabAction::ApplyTeamConfig {
                level,
                decay,
                proximity: cfg.combine_proximity,
            });
        })
    };

    let team_names: Vec<String> = (*config)
        .as_ref()
        .map(|c| c.teams.keys().cloned().collect())
        .unwrap_or_default();

    html! {
        <div id="root" style="display:flex; gap:10px; width:100vw; height:100vh; box-sizing:border-box; padding:10px; background:#0d1117; color:#e6edf3; font-family:system-ui, sans-serif;">
            <InventoryPanel names={names} locked={locked} on_spawn={on_spawn} />
            <div style="flex:1; display:flex; flex-direction:column; gap:10px; min-width:0;">
                <InfectionBar level={level} locked={locked} on_reset={on_reset} />
                <WorkspaceView
                    instances={lab.instances.clone()}
                    locked={locked}
                    workspace_ref={workspace_ref.clone()}
                    on_place={on_place}
                    on_settle={on_settle}
                />
            </div>
            { if *show_team_modal {
                html! { <TeamModal teams={team_names} on_confirm={on_confirm_team} /> }
            } else { html! {} } }
            <LockOverlay show={locked} />
            <ToastLayer notices={lab.notices.clone()} on_dismiss={on_dismiss} />
        </div>
    }
}
