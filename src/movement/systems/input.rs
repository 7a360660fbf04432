//! Movement domain: keyboard sampling into the per-frame input resource.

use bevy::prelude::*;

use crate::movement::MovementInput;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    let held = |keys: [KeyCode; 2]| keys.into_iter().any(|key| keyboard.pressed(key));

    // Horizontal drives walking and facing; vertical drives climb entry and
    // climb movement.
    let right = held([KeyCode::KeyD, KeyCode::ArrowRight]);
    let left = held([KeyCode::KeyA, KeyCode::ArrowLeft]);
    let up = held([KeyCode::KeyW, KeyCode::ArrowUp]);
    let down = held([KeyCode::KeyS, KeyCode::ArrowDown]);

    input.axis = Vec2::new(
        (right as i32 - left as i32) as f32,
        (up as i32 - down as i32) as f32,
    );
    input.jump_just_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
}
