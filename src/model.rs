//! Core data model for the cure crafting lab.
//! Everything the session owns lives here: the recipe table, the discovery
//! set, the placed workspace instances, the infection countdown and the
//! pending notices. All mutation goes through the `LabAction` reducer.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;
use yew::Reducible;

/// Pill footprint in workspace-local CSS pixels; adjacency rectangles and
/// out-of-bounds checks use this fixed size.
pub const NODE_W: f64 = 110.0;
pub const NODE_H: f64 = 36.0;

/// Result names containing this marker end the game with a victory notice.
pub const FINAL_CURE_MARKER: &str = "FINAL CURE";

/// Built-in infection meter defaults, used when `/config` is missing or
/// carries no value for the selected team.
pub const DEFAULT_METER_START: f64 = 78.0;
pub const DEFAULT_METER_DECAY: f64 = 2.0;
/// Default center-distance threshold below which two pills combine even
/// without rectangle overlap (looser matching for imprecise pointers).
pub const DEFAULT_PROXIMITY: f64 = 120.0;

/// Starting elements every session begins with. Never written to storage;
/// only discoveries beyond this set are persisted.
pub const BASE_ELEMENTS: &[&str] = &[
    "Slimewater",
    "Rotberry",
    "Ashspice",
    "Ironroot",
    "Glowfungus",
    "Zapgrain",
    "Fumifruit",
    "Brainleaf",
    "Sparkdust",
    "Virmush",
];

pub type InstanceId = u64;

/// A placed occurrence of an element on the workspace. Several instances may
/// share the same name; the id is unique within the session.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedInstance {
    pub id: InstanceId,
    pub name: String,
    pub x: f64,
    pub y: f64,
}

/// Serialized form of a workspace instance (ids are session-local and are
/// reallocated on restore).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedNode {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

/// Immutable unordered-pair lookup, keyed `"A+B"` as served by `/recipes`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipeTable {
    pairs: HashMap<String, String>,
}

impl RecipeTable {
    pub fn from_pairs(pairs: HashMap<String, String>) -> Self {
        Self { pairs }
    }

    /// Resolves an unordered pair; tries both key orderings. A miss is an
    /// expected outcome, not an error.
    pub fn lookup(&self, a: &str, b: &str) -> Option<&str> {
        self.pairs
            .get(&format!("{a}+{b}"))
            .or_else(|| self.pairs.get(&format!("{b}+{a}")))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}

fn default_meter_start() -> f64 {
    DEFAULT_METER_START
}
fn default_meter_decay() -> f64 {
    DEFAULT_METER_DECAY
}
fn default_proximity() -> f64 {
    DEFAULT_PROXIMITY
}

/// Per-team overrides for the infection meter; absent fields fall back to
/// the session-wide values.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TeamMeter {
    #[serde(rename = "zombieMeterStart")]
    pub meter_start: Option<f64>,
    #[serde(rename = "zombieMeterDecay")]
    pub meter_decay: Option<f64>,
}

/// The `/config` payload. Field names match the served JSON; every field is
/// defaulted so a partial (or missing) config still yields a playable session.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LabConfig {
    #[serde(rename = "zombieMeterStart", default = "default_meter_start")]
    pub meter_start: f64,
    #[serde(rename = "zombieMeterDecay", default = "default_meter_decay")]
    pub meter_decay: f64,
    #[serde(rename = "combineProximity", default = "default_proximity")]
    pub combine_proximity: f64,
    #[serde(default)]
    pub teams: BTreeMap<String, TeamMeter>,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            meter_start: DEFAULT_METER_START,
            meter_decay: DEFAULT_METER_DECAY,
            combine_proximity: DEFAULT_PROXIMITY,
            teams: BTreeMap::new(),
        }
    }
}

impl LabConfig {
    /// Resolved (start, decay) pair for the given team, if any.
    pub fn meter_for(&self, team: Option<&str>) -> (f64, f64) {
        let t = team.and_then(|name| self.teams.get(name));
        (
            t.and_then(|t| t.meter_start).unwrap_or(self.meter_start),
            t.and_then(|t| t.meter_decay).unwrap_or(self.meter_decay),
        )
    }
}

/// Infection countdown state machine. `Idle` is the window before config
/// arrives: nothing ticks and crafting is allowed. `Locked` is terminal
/// until an explicit reset re-enters `Running`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Countdown {
    Idle,
    Running { level: f64, decay: f64 },
    Locked,
}

impl Countdown {
    /// Meter value for display, clamped to [0, 100].
    pub fn display_level(&self) -> f64 {
        match self {
            Countdown::Running { level, .. } => level.clamp(0.0, 100.0),
            Countdown::Idle | Countdown::Locked => 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Discovered,
    Victory,
    Removed,
    Info,
}

/// A pending notification for the toast layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

// ---------------- Combination geometry -----------------

fn rects_overlap(a: &PlacedInstance, b: &PlacedInstance) -> bool {
    !(a.x + NODE_W < b.x || a.x > b.x + NODE_W || a.y + NODE_H < b.y || a.y > b.y + NODE_H)
}

fn center_distance(a: &PlacedInstance, b: &PlacedInstance) -> f64 {
    let dx = (a.x + NODE_W / 2.0) - (b.x + NODE_W / 2.0);
    let dy = (a.y + NODE_H / 2.0) - (b.y + NODE_H / 2.0);
    dx.hypot(dy)
}

/// True when the pill rect lies entirely outside the workspace bounds.
pub fn outside_workspace(inst: &PlacedInstance, width: f64, height: f64) -> bool {
    inst.x + NODE_W < 0.0 || inst.x > width || inst.y + NODE_H < 0.0 || inst.y > height
}

/// Finds the combination partner for a settled instance, if any.
///
/// Candidates are other live instances whose pill rect overlaps the moved
/// pill's rect, or whose center distance is below `proximity`. Among the
/// candidates whose pair resolves in the recipe table, the nearest by center
/// distance wins; encounter order only breaks exact ties.
pub fn find_combination(
    instances: &[PlacedInstance],
    moved_id: InstanceId,
    proximity: f64,
    recipes: &RecipeTable,
) -> Option<(InstanceId, String)> {
    let moved = instances.iter().find(|i| i.id == moved_id)?;
    let mut best: Option<(InstanceId, String, f64)> = None;
    for other in instances.iter().filter(|i| i.id != moved_id) {
        let dist = center_distance(moved, other);
        if !(rects_overlap(moved, other) || dist < proximity) {
            continue;
        }
        let Some(result) = recipes.lookup(&moved.name, &other.name) else {
            continue;
        };
        match &best {
            Some((_, _, d)) if *d <= dist => {}
            _ => best = Some((other.id, result.to_string(), dist)),
        }
    }
    best.map(|(id, result, _)| (id, result))
}

// ---------------- Session state, reducer & actions -----------------

/// The whole per-session state, owned by the `App` component through a
/// `use_reducer` handle.
#[derive(Clone, Debug, PartialEq)]
pub struct LabState {
    /// Read-once recipe table; empty until `/recipes` resolves.
    pub recipes: Rc<RecipeTable>,
    /// Every element the player has produced or started with.
    pub discovered: BTreeSet<String>,
    /// Live workspace instances.
    pub instances: Vec<PlacedInstance>,
    pub countdown: Countdown,
    /// Bumped each time the countdown is (re)armed so the interval effect
    /// cancels the previous timer before starting a new one.
    pub countdown_epoch: u32,
    /// Center-distance threshold for loose adjacency, from config.
    pub combine_proximity: f64,
    /// Pending toasts, oldest first.
    pub notices: Vec<Notice>,
    /// Bumped on every structural workspace change; the persistence effect
    /// keys on it.
    pub version: u64,
    next_instance_id: InstanceId,
    next_notice_id: u64,
}

impl LabState {
    /// Session start: base elements plus persisted extras, workspace rebuilt
    /// from the persisted snapshot with fresh ids.
    pub fn bootstrap(extras: Vec<String>, saved: Vec<SavedNode>) -> Self {
        let mut discovered: BTreeSet<String> =
            BASE_ELEMENTS.iter().map(|s| s.to_string()).collect();
        discovered.extend(extras);
        let mut next_instance_id: InstanceId = 1;
        let instances = saved
            .into_iter()
            .map(|n| {
                let id = next_instance_id;
                next_instance_id += 1;
                PlacedInstance {
                    id,
                    name: n.name,
                    x: n.x,
                    y: n.y,
                }
            })
            .collect();
        Self {
            recipes: Rc::new(RecipeTable::default()),
            discovered,
            instances,
            countdown: Countdown::Idle,
            countdown_epoch: 0,
            combine_proximity: DEFAULT_PROXIMITY,
            notices: Vec::new(),
            version: 0,
            next_instance_id,
            next_notice_id: 1,
        }
    }

    pub fn crafting_locked(&self) -> bool {
        matches!(self.countdown, Countdown::Locked)
    }

    /// Set difference against the base elements, in stable (sorted) order.
    /// This is the only part of the discovery set that gets persisted.
    pub fn discovered_extras(&self) -> Vec<String> {
        self.discovered
            .iter()
            .filter(|n| !BASE_ELEMENTS.contains(&n.as_str()))
            .cloned()
            .collect()
    }

    /// Ordered (name, position) sequence for the workspace slot.
    pub fn snapshot(&self) -> Vec<SavedNode> {
        self.instances
            .iter()
            .map(|i| SavedNode {
                name: i.name.clone(),
                x: i.x,
                y: i.y,
            })
            .collect()
    }

    /// Inserts a name into the discovery set; returns whether it was new.
    pub fn record_discovery(&mut self, name: &str) -> bool {
        self.discovered.insert(name.to_string())
    }

    fn alloc_instance_id(&mut self) -> InstanceId {
        let id = self.next_instance_id;
        self.next_instance_id += 1;
        id
    }

    fn push_notice(&mut self, kind: NoticeKind, text: String) {
        let id = self.next_notice_id;
        self.next_notice_id += 1;
        self.notices.push(Notice { id, kind, text });
    }

    /// Drag-end handling: final position, out-of-bounds removal, then at
    /// most one combination. Always bumps the persistence version.
    fn settle(&mut self, id: InstanceId, x: f64, y: f64, width: f64, height: f64) {
        let Some(idx) = self.instances.iter().position(|i| i.id == id) else {
            return;
        };
        self.instances[idx].x = x;
        self.instances[idx].y = y;
        if outside_workspace(&self.instances[idx], width, height) {
            self.instances.remove(idx);
            self.push_notice(NoticeKind::Removed, "Removed from workspace".to_string());
            self.version += 1;
            return;
        }
        if let Some((other_id, result)) =
            find_combination(&self.instances, id, self.combine_proximity, &self.recipes)
        {
            let moved = self.instances[idx].clone();
            let Some(other) = self.instances.iter().find(|i| i.id == other_id).cloned() else {
                return;
            };
            let mx = (moved.x + other.x) / 2.0;
            let my = (moved.y + other.y) / 2.0;
            self.instances.retain(|i| i.id != id && i.id != other_id);
            let new_id = self.alloc_instance_id();
            self.instances.push(PlacedInstance {
                id: new_id,
                name: result.clone(),
                x: mx,
                y: my,
            });
            if self.record_discovery(&result) {
                self.push_notice(NoticeKind::Discovered, format!("Discovered: {result}"));
            }
            if result.contains(FINAL_CURE_MARKER) {
                self.push_notice(
                    NoticeKind::Victory,
                    "You crafted the FINAL CURE! 🎉".to_string(),
                );
            }
        }
        self.version += 1;
    }
}

#[derive(Clone, Debug)]
pub enum LabAction {
    /// Installs the read-once recipe table.
    RecipesLoaded { pairs: HashMap<String, String> },
    /// Applies the resolved meter values and (re)starts the countdown.
    ApplyTeamConfig {
        level: f64,
        decay: f64,
        proximity: f64,
    },
    /// Creates an instance from the inventory. Refused while locked.
    Place { name: String, x: f64, y: f64 },
    /// Drag-end with the final position and the current workspace bounds.
    Settle {
        id: InstanceId,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// One wall-clock second elapsed.
    CountdownTick,
    /// Full reset: discoveries back to base, workspace cleared, countdown
    /// restarted with fresh meter values.
    ResetProgress { level: f64, decay: f64 },
    DismissNotice { id: u64 },
}

impl Reducible for LabState {
    type Action = LabAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use LabAction::*;
        let mut new = (*self).clone();
        match action {
            RecipesLoaded { pairs } => {
                new.recipes = Rc::new(RecipeTable::from_pairs(pairs));
            }
            ApplyTeamConfig {
                level,
                decay,
                proximity,
            } => {
                new.combine_proximity = proximity;
                new.countdown = Countdown::Running { level, decay };
                new.countdown_epoch += 1;
            }
            Place { name, x, y } => {
                if new.crafting_locked() {
                    return self;
                }
                let id = new.alloc_instance_id();
                new.instances.push(PlacedInstance { id, name, x, y });
                new.version += 1;
            }
            Settle {
                id,
                x,
                y,
                width,
                height,
            } => {
                if new.crafting_locked() {
                    return self;
                }
                new.settle(id, x, y, width, height);
            }
            CountdownTick => {
                let Countdown::Running { level, decay } = new.countdown else {
                    return self;
                };
                let next = level - decay;
                new.countdown = if next <= 0.0 {
                    Countdown::Locked
                } else {
                    Countdown::Running { level: next, decay }
                };
            }
            ResetProgress { level, decay } => {
                new.discovered = BASE_ELEMENTS.iter().map(|s| s.to_string()).collect();
                new.instances.clear();
                new.countdown = Countdown::Running { level, decay };
                new.countdown_epoch += 1;
                new.version += 1;
                new.push_notice(NoticeKind::Info, "Progress reset.".to_string());
            }
            DismissNotice { id } => {
                new.notices.retain(|n| n.id != id);
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str, &str)]) -> RecipeTable {
        RecipeTable::from_pairs(
            pairs
                .iter()
                .map(|(a, b, r)| (format!("{a}+{b}"), r.to_string()))
                .collect(),
        )
    }

    fn dispatch(state: LabState, action: LabAction) -> LabState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn fresh() -> LabState {
        LabState::bootstrap(Vec::new(), Vec::new())
    }

    fn with_recipes(state: LabState, pairs: &[(&str, &str, &str)]) -> LabState {
        dispatch(
            state,
            LabAction::RecipesLoaded {
                pairs: pairs
                    .iter()
                    .map(|(a, b, r)| (format!("{a}+{b}"), r.to_string()))
                    .collect(),
            },
        )
    }

    fn place(state: LabState, name: &str, x: f64, y: f64) -> LabState {
        dispatch(
            state,
            LabAction::Place {
                name: name.to_string(),
                x,
                y,
            },
        )
    }

    fn settle(state: LabState, id: InstanceId, x: f64, y: f64) -> LabState {
        dispatch(
            state,
            LabAction::Settle {
                id,
                x,
                y,
                width: 800.0,
                height: 600.0,
            },
        )
    }

    #[test]
    fn lookup_is_symmetric() {
        let t = table(&[("Water", "Earth", "Mud")]);
        assert_eq!(t.lookup("Water", "Earth"), Some("Mud"));
        assert_eq!(t.lookup("Earth", "Water"), Some("Mud"));
    }

    #[test]
    fn lookup_miss_is_none() {
        let t = table(&[("Water", "Earth", "Mud")]);
        assert_eq!(t.lookup("Water", "Fire"), None);
        assert!(table(&[]).is_empty());
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn discovery_is_monotonic_and_reports_newness() {
        let mut s = fresh();
        assert!(s.record_discovery("Mud"));
        assert!(!s.record_discovery("Mud"));
        assert!(s.discovered.contains("Mud"));
    }

    #[test]
    fn extras_never_include_base_elements() {
        let mut s = fresh();
        s.record_discovery("Mud");
        s.record_discovery(BASE_ELEMENTS[0]);
        assert_eq!(s.discovered_extras(), vec!["Mud".to_string()]);
    }

    #[test]
    fn snapshot_restore_round_trip() {
        let mut s = fresh();
        s = place(s, "Slimewater", 10.0, 20.0);
        s = place(s, "Rotberry", 300.0, 40.0);
        s = place(s, "Slimewater", 55.5, 60.25);
        let snap = s.snapshot();
        let restored = LabState::bootstrap(Vec::new(), snap.clone());
        assert_eq!(restored.snapshot(), snap);
    }

    #[test]
    fn combination_consumes_two_and_adds_one() {
        let mut s = with_recipes(fresh(), &[("Water", "Earth", "Mud")]);
        s = place(s, "Water", 50.0, 50.0);
        s = place(s, "Earth", 400.0, 50.0);
        assert_eq!(s.instances.len(), 2);
        let water_id = s.instances[0].id;
        // Settle Water on top of Earth.
        s = settle(s, water_id, 400.0, 50.0);
        assert_eq!(s.instances.len(), 1);
        assert_eq!(s.instances[0].name, "Mud");
        assert_eq!(s.instances[0].x, 400.0);
        assert_eq!(s.instances[0].y, 50.0);
        assert!(s.discovered.contains("Mud"));
        let discovered: Vec<_> = s
            .notices
            .iter()
            .filter(|n| n.kind == NoticeKind::Discovered)
            .collect();
        assert_eq!(discovered.len(), 1);
        assert_eq!(discovered[0].text, "Discovered: Mud");
    }

    #[test]
    fn rediscovery_does_not_notify_again() {
        let mut s = with_recipes(fresh(), &[("Water", "Earth", "Mud")]);
        for _ in 0..2 {
            s = place(s, "Water", 50.0, 50.0);
            s = place(s, "Earth", 400.0, 300.0);
            let id = s.instances[s.instances.len() - 2].id;
            s = settle(s, id, 400.0, 300.0);
        }
        let discovered = s
            .notices
            .iter()
            .filter(|n| n.kind == NoticeKind::Discovered)
            .count();
        assert_eq!(discovered, 1);
    }

    #[test]
    fn result_is_born_at_the_midpoint() {
        let mut s = with_recipes(fresh(), &[("Water", "Earth", "Mud")]);
        s = place(s, "Water", 0.0, 0.0);
        s = place(s, "Earth", 100.0, 30.0);
        let id = s.instances[0].id;
        s = settle(s, id, 60.0, 10.0);
        assert_eq!(s.instances.len(), 1);
        assert_eq!(s.instances[0].x, 80.0);
        assert_eq!(s.instances[0].y, 20.0);
    }

    #[test]
    fn final_cure_result_emits_victory() {
        let mut s = with_recipes(
            fresh(),
            &[(
                "Data Stream Nectar",
                "Caffeine Potion",
                "Encrypted Essence 🎉 (FINAL CURE)",
            )],
        );
        s = place(s, "Data Stream Nectar", 50.0, 50.0);
        s = place(s, "Caffeine Potion", 60.0, 60.0);
        let id = s.instances[0].id;
        s = settle(s, id, 60.0, 60.0);
        assert!(s.notices.iter().any(|n| n.kind == NoticeKind::Victory));
    }

    #[test]
    fn nearest_resolvable_candidate_wins() {
        let t = table(&[("A", "B", "AB"), ("A", "C", "AC")]);
        let instances = vec![
            PlacedInstance {
                id: 1,
                name: "A".to_string(),
                x: 0.0,
                y: 0.0,
            },
            PlacedInstance {
                id: 2,
                name: "B".to_string(),
                x: 100.0,
                y: 0.0,
            },
            PlacedInstance {
                id: 3,
                name: "C".to_string(),
                x: 40.0,
                y: 0.0,
            },
        ];
        let (partner, result) = find_combination(&instances, 1, 120.0, &t).unwrap();
        assert_eq!(partner, 3);
        assert_eq!(result, "AC");
    }

    #[test]
    fn proximity_threshold_is_configurable() {
        let t = table(&[("A", "B", "AB")]);
        // No rect overlap: separated by more than the pill footprint.
        let instances = vec![
            PlacedInstance {
                id: 1,
                name: "A".to_string(),
                x: 0.0,
                y: 0.0,
            },
            PlacedInstance {
                id: 2,
                name: "B".to_string(),
                x: 119.0,
                y: 37.0,
            },
        ];
        assert!(find_combination(&instances, 1, 130.0, &t).is_some());
        // Strict-overlap tuning: threshold 0 finds nothing here.
        assert!(find_combination(&instances, 1, 0.0, &t).is_none());
    }

    #[test]
    fn unmatched_settle_changes_nothing_but_position() {
        let mut s = with_recipes(fresh(), &[("Water", "Earth", "Mud")]);
        s = place(s, "Water", 50.0, 50.0);
        s = place(s, "Fire", 60.0, 60.0);
        let id = s.instances[0].id;
        s = settle(s, id, 62.0, 62.0);
        assert_eq!(s.instances.len(), 2);
        assert_eq!(s.instances[0].x, 62.0);
        assert!(s.notices.is_empty());
    }

    #[test]
    fn settle_outside_bounds_removes_the_instance() {
        let mut s = with_recipes(fresh(), &[("Water", "Earth", "Mud")]);
        s = place(s, "Water", 50.0, 50.0);
        s = place(s, "Earth", 900.0, 50.0);
        let id = s.instances[0].id;
        // Fully right of an 800-wide workspace; must remove, not combine.
        s = settle(s, id, 900.0, 50.0);
        assert_eq!(s.instances.len(), 1);
        assert_eq!(s.instances[0].name, "Earth");
        assert!(s.notices.iter().any(|n| n.kind == NoticeKind::Removed));
    }

    #[test]
    fn countdown_decays_clamps_and_locks() {
        let mut s = dispatch(
            fresh(),
            LabAction::ApplyTeamConfig {
                level: 10.0,
                decay: 3.0,
                proximity: DEFAULT_PROXIMITY,
            },
        );
        for expected in [7.0, 4.0, 1.0] {
            s = dispatch(s, LabAction::CountdownTick);
            assert_eq!(
                s.countdown,
                Countdown::Running {
                    level: expected,
                    decay: 3.0
                }
            );
        }
        s = dispatch(s, LabAction::CountdownTick);
        assert_eq!(s.countdown, Countdown::Locked);
        assert_eq!(s.countdown.display_level(), 0.0);
        // A fifth tick is a no-op.
        let epoch = s.countdown_epoch;
        s = dispatch(s, LabAction::CountdownTick);
        assert_eq!(s.countdown, Countdown::Locked);
        assert_eq!(s.countdown_epoch, epoch);
    }

    #[test]
    fn idle_countdown_never_ticks() {
        let s = dispatch(fresh(), LabAction::CountdownTick);
        assert_eq!(s.countdown, Countdown::Idle);
        assert!(!s.crafting_locked());
    }

    #[test]
    fn lock_gates_placement_and_combination() {
        let mut s = with_recipes(fresh(), &[("Water", "Earth", "Mud")]);
        s = place(s, "Water", 50.0, 50.0);
        s = place(s, "Earth", 60.0, 60.0);
        s = dispatch(
            s,
            LabAction::ApplyTeamConfig {
                level: 1.0,
                decay: 2.0,
                proximity: DEFAULT_PROXIMITY,
            },
        );
        s = dispatch(s, LabAction::CountdownTick);
        assert!(s.crafting_locked());
        let before = s.clone();
        let id = s.instances[0].id;
        s = place(s, "Water", 10.0, 10.0);
        s = settle(s, id, 60.0, 60.0);
        assert_eq!(s.instances, before.instances);
        assert_eq!(s.discovered, before.discovered);
        assert_eq!(s.version, before.version);
    }

    #[test]
    fn reset_restores_base_and_restarts_countdown() {
        let mut s = with_recipes(fresh(), &[("Water", "Earth", "Mud")]);
        s = place(s, "Water", 50.0, 50.0);
        s = place(s, "Earth", 60.0, 60.0);
        let id = s.instances[0].id;
        s = settle(s, id, 60.0, 60.0);
        assert!(!s.discovered_extras().is_empty());
        let epoch = s.countdown_epoch;
        s = dispatch(
            s,
            LabAction::ResetProgress {
                level: 78.0,
                decay: 2.0,
            },
        );
        assert!(s.instances.is_empty());
        assert!(s.discovered_extras().is_empty());
        assert_eq!(s.discovered.len(), BASE_ELEMENTS.len());
        assert_eq!(
            s.countdown,
            Countdown::Running {
                level: 78.0,
                decay: 2.0
            }
        );
        assert_eq!(s.countdown_epoch, epoch + 1);
    }

    #[test]
    fn rearming_bumps_the_epoch() {
        let s = dispatch(
            fresh(),
            LabAction::ApplyTeamConfig {
                level: 50.0,
                decay: 1.0,
                proximity: 90.0,
            },
        );
        assert_eq!(s.countdown_epoch, 1);
        assert_eq!(s.combine_proximity, 90.0);
        let s = dispatch(
            s,
            LabAction::ApplyTeamConfig {
                level: 40.0,
                decay: 1.0,
                proximity: 90.0,
            },
        );
        assert_eq!(s.countdown_epoch, 2);
    }

    #[test]
    fn config_parses_with_team_overrides_and_defaults() {
        let cfg: LabConfig = serde_json::from_str(
            r#"{"zombieMeterStart": 60, "teams": {"alpha": {"zombieMeterDecay": 5}}}"#,
        )
        .unwrap();
        assert_eq!(cfg.meter_start, 60.0);
        assert_eq!(cfg.meter_decay, DEFAULT_METER_DECAY);
        assert_eq!(cfg.combine_proximity, DEFAULT_PROXIMITY);
        assert_eq!(cfg.meter_for(Some("alpha")), (60.0, 5.0));
        assert_eq!(cfg.meter_for(Some("unknown")), (60.0, DEFAULT_METER_DECAY));
        assert_eq!(cfg.meter_for(None), (60.0, DEFAULT_METER_DECAY));
    }

    #[test]
    fn dismissing_a_notice_drops_only_that_notice() {
        let mut s = fresh();
        s.push_notice(NoticeKind::Info, "one".to_string());
        s.push_notice(NoticeKind::Info, "two".to_string());
        let first = s.notices[0].id;
        let s = dispatch(s, LabAction::DismissNotice { id: first });
        assert_eq!(s.notices.len(), 1);
        assert_eq!(s.notices[0].text, "two");
    }
}
