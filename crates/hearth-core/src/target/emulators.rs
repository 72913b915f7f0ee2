//! Emulator selection from `--only`.

use super::{Emulator, TargetName, parse_target_list};

/// Emulators requested by a raw `--only` value.
///
/// Result follows [`Emulator::ALL`] order, not the order the user typed,
/// and contains each emulator at most once.
pub fn filter_only_emulators(only: Option<&str>) -> Vec<Emulator> {
    let Some(only) = only else {
        return Vec::new();
    };
    let requested: Vec<Emulator> = parse_target_list(only)
        .iter()
        .filter_map(|token| match token.target() {
            Some(TargetName::Emulator(emulator)) => Some(emulator),
            _ => None,
        })
        .collect();

    Emulator::ALL
        .into_iter()
        .filter(|e| requested.contains(e))
        .collect()
}
