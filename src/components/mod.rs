pub mod app;
pub mod infection_bar;
pub mod inventory_panel;
pub mod lock_overlay;
pub mod team_modal;
pub mod toast_layer;
pub mod workspace_view;
