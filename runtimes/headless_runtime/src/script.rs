use anyhow::{Context, Result, bail};
use translocator::{Action, ActionButton, InputBindings};

/// One scripted input: `action` fires at the start of `frame`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptedInput {
    pub frame: u32,
    pub action: Action,
}

/// Parse `"<frame>:<action>,..."`, e.g. `"0:fire,40:recall,90:fire,120:teleport"`.
pub fn parse_script(script: &str) -> Result<Vec<ScriptedInput>> {
    let mut inputs = Vec::new();

    for entry in script.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (frame, action) = entry
            .split_once(':')
            .with_context(|| format!("Script entry '{entry}' is not <frame>:<action>"))?;

        let frame = frame
            .trim()
            .parse::<u32>()
            .with_context(|| format!("Invalid frame in script entry '{entry}'"))?;

        let action = match action.trim().to_lowercase().as_str() {
            "fire" | "recall" => Action::FireOrRecall,
            "teleport" => Action::ConfirmTeleport,
            other => bail!("Unknown action '{other}' in script entry '{entry}'"),
        };

        inputs.push(ScriptedInput { frame, action });
    }

    inputs.sort_by_key(|input| input.frame);
    Ok(inputs)
}

/// The button to hold for one frame so the tracker emits the event bound to `action`.
/// A release binding fires on the frame after the press.
pub fn scripted_button(action: Action, bindings: &InputBindings) -> ActionButton {
    let event = match action {
        Action::FireOrRecall => bindings.fire_or_recall,
        Action::ConfirmTeleport => bindings.teleport,
    };
    event.button
}

/// Parse `"x,y,z"`.
pub fn parse_vec3(value: &str) -> Result<cgmath::Vector3<f32>> {
    let parts = value
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Unable to parse position '{value}'"))?;

    match parts.as_slice() {
        [x, y, z] => Ok(cgmath::vec3(*x, *y, *z)),
        _ => bail!("Position '{value}' needs exactly three components"),
    }
}
