//! Input controller — turns held keys into scene mutations, once per tick.
//!
//! Three independent groups of bindings:
//!
//! ```text
//! rotation   ←/→  yaw  ∓ step      ↑/↓  pitch ∓/± step
//! light      W/S  y ± step         A/D  x ∓/± step
//! switches   1/2  positional on/off    3/4  directional on/off
//! ```
//!
//! Bindings are evaluated in the fixed order of [`BINDINGS`]. Movement is
//! additive, so order never matters there. The switches *set* their flag, so
//! when both keys of a pair are held the later binding wins: `2` beats `1`
//! and `4` beats `3`.
//!
//! Letters and digits are matched by the character the keyboard layout
//! produces (see [`bound_key`]); arrows by their physical position.
//!
//! When no rotation key is held during a tick, the idle spin adds the idle
//! step to both angles instead. Any held rotation key suppresses the idle spin
//! for that tick only.

use crate::config::ControlTuning;
use crate::input::{Input, Key, KeyCode};
use crate::scene::SceneState;

/// What a bound key does while held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    YawLeft,
    YawRight,
    PitchUp,
    PitchDown,
    LightUp,
    LightDown,
    LightLeft,
    LightRight,
    PositionalOn,
    PositionalOff,
    DirectionalOn,
    DirectionalOff,
}

impl Action {
    fn is_rotation(self) -> bool {
        matches!(
            self,
            Action::YawLeft | Action::YawRight | Action::PitchUp | Action::PitchDown
        )
    }
}

/// Key bindings in evaluation order.
pub const BINDINGS: [(KeyCode, Action); 12] = [
    (KeyCode::ArrowLeft, Action::YawLeft),
    (KeyCode::ArrowRight, Action::YawRight),
    (KeyCode::ArrowUp, Action::PitchUp),
    (KeyCode::ArrowDown, Action::PitchDown),
    (KeyCode::KeyW, Action::LightUp),
    (KeyCode::KeyS, Action::LightDown),
    (KeyCode::KeyA, Action::LightLeft),
    (KeyCode::KeyD, Action::LightRight),
    (KeyCode::Digit1, Action::PositionalOn),
    (KeyCode::Digit2, Action::PositionalOff),
    (KeyCode::Digit3, Action::DirectionalOn),
    (KeyCode::Digit4, Action::DirectionalOff),
];

/// Bound characters and the code each one is tracked under.
const CHARACTER_KEYS: [(&str, KeyCode); 8] = [
    ("w", KeyCode::KeyW),
    ("s", KeyCode::KeyS),
    ("a", KeyCode::KeyA),
    ("d", KeyCode::KeyD),
    ("1", KeyCode::Digit1),
    ("2", KeyCode::Digit2),
    ("3", KeyCode::Digit3),
    ("4", KeyCode::Digit4),
];

/// Map a key event to the code [`BINDINGS`] uses.
///
/// A key producing a bound character maps to that character's code, whatever
/// its position: on AZERTY the key labelled `w` (physical `KeyZ`) moves the
/// light. A bound letter position producing some other character maps to
/// nothing. Every other key keeps its physical code, which covers the arrows
/// and digit rows that need Shift to produce digits.
pub fn bound_key(physical: KeyCode, logical: &Key) -> Option<KeyCode> {
    if let Key::Character(text) = logical {
        let text = text.to_lowercase();
        if let Some((_, code)) = CHARACTER_KEYS.iter().find(|(c, _)| *c == text) {
            return Some(*code);
        }
        if matches!(
            physical,
            KeyCode::KeyW | KeyCode::KeyS | KeyCode::KeyA | KeyCode::KeyD
        ) {
            return None;
        }
    }
    Some(physical)
}

/// Run one controller tick. Keys outside [`BINDINGS`] are ignored.
pub fn update_scene(scene: &mut SceneState, keys: &Input<KeyCode>, tuning: &ControlTuning) {
    let was_positional = scene.use_positional_light;
    let was_directional = scene.use_directional_light;
    let mut rotating = false;

    for (key, action) in BINDINGS {
        if !keys.pressed(key) {
            continue;
        }
        rotating |= action.is_rotation();
        apply(scene, action, tuning);
    }

    if !rotating {
        scene.rotation_x += tuning.idle_step;
        scene.rotation_y += tuning.idle_step;
    }

    if scene.use_positional_light != was_positional {
        log::info!("Positional light {}", on_off(scene.use_positional_light));
    }
    if scene.use_directional_light != was_directional {
        log::info!("Directional light {}", on_off(scene.use_directional_light));
    }
}

fn apply(scene: &mut SceneState, action: Action, tuning: &ControlTuning) {
    let turn = tuning.rotation_step;
    let step = tuning.light_step;
    match action {
        Action::YawLeft => scene.rotation_y -= turn,
        Action::YawRight => scene.rotation_y += turn,
        Action::PitchUp => scene.rotation_x -= turn,
        Action::PitchDown => scene.rotation_x += turn,
        Action::LightUp => scene.light.position.y += step,
        Action::LightDown => scene.light.position.y -= step,
        Action::LightLeft => scene.light.position.x -= step,
        Action::LightRight => scene.light.position.x += step,
        Action::PositionalOn => scene.use_positional_light = true,
        Action::PositionalOff => scene.use_positional_light = false,
        Action::DirectionalOn => scene.use_directional_light = true,
        Action::DirectionalOff => scene.use_directional_light = false,
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "enabled" } else { "disabled" }
}
