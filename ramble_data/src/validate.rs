use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a WorldDef.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a WorldDef.
///
/// ```
/// use ramble_data::{GameDef, RoomDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     game: GameDef {
///         title: "Demo".into(),
///         start_room: "start".into(),
///         ..GameDef::default()
///     },
///     rooms: vec![RoomDef {
///         id: "start".into(),
///         ..RoomDef::default()
///     }],
///     ..WorldDef::default()
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut rooms = HashSet::new();
    let mut quests = HashSet::new();
    track_ids("room", world.rooms.iter().map(|r| r.id.as_str()), &mut rooms, &mut errors);
    track_ids("quest", world.quests.iter().map(|q| q.name.as_str()), &mut quests, &mut errors);

    if world.game.start_room.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "game start room missing".to_string(),
        });
    } else {
        check_ref(
            "room",
            &world.game.start_room,
            &rooms,
            "game start room".to_string(),
            &mut errors,
        );
    }

    if world.game.container_item.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "game container item is blank".to_string(),
        });
    }

    for room in &world.rooms {
        validate_room(room, &rooms, &mut errors);
    }

    for quest in &world.quests {
        if let QuestPredicateDef::InRoom { room } = &quest.done_when {
            check_ref("room", room, &rooms, format!("quest '{}'", quest.name), &mut errors);
        }
    }

    errors
}

fn validate_room(room: &RoomDef, rooms: &HashSet<String>, errors: &mut Vec<ValidationError>) {
    let mut exits = HashSet::new();
    for exit in &room.exits {
        check_ref("room", exit, rooms, format!("room '{}' exit", room.id), errors);
        if !exits.insert(exit.as_str()) {
            errors.push(ValidationError::InvalidValue {
                context: format!("room '{}' lists exit '{exit}' more than once", room.id),
            });
        }
    }

    // a locked exit must also be a reachable one
    for blocked in &room.blocked {
        if !exits.contains(blocked.as_str()) {
            errors.push(ValidationError::MissingReference {
                kind: "exit",
                id: blocked.clone(),
                context: format!("room '{}' blocked list", room.id),
            });
        }
    }

    // aliases rename reachable exits only
    for target in room.aliases.keys() {
        if !exits.contains(target.as_str()) {
            errors.push(ValidationError::MissingReference {
                kind: "exit",
                id: target.clone(),
                context: format!("room '{}' alias", room.id),
            });
        }
    }

    for container in &room.containers {
        let mut seen = HashSet::new();
        for item in &container.items {
            if !seen.insert(item.as_str()) {
                errors.push(ValidationError::InvalidValue {
                    context: format!(
                        "room '{}' container '{}' holds '{item}' twice",
                        room.id, container.label
                    ),
                });
            }
        }
    }

    let mut object_names = HashSet::new();
    for object in &room.objects {
        if !object_names.insert(object.name.as_str()) {
            errors.push(ValidationError::DuplicateId {
                kind: "object",
                id: format!("{}/{}", room.id, object.name),
            });
        }
        let mut bound_items = HashSet::new();
        for effect in &object.effects {
            if !bound_items.insert(effect.item()) {
                errors.push(ValidationError::InvalidValue {
                    context: format!(
                        "room '{}' object '{}' has more than one effect for '{}'",
                        room.id,
                        object.name,
                        effect.item()
                    ),
                });
            }
            if let Some(exit) = effect.exit() {
                check_ref(
                    "room",
                    exit,
                    rooms,
                    format!("room '{}' object '{}' effect", room.id, object.name),
                    errors,
                );
            }
        }
    }
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    set: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !set.insert(id.to_string()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_ref(kind: &'static str, id: &str, set: &HashSet<String>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}
