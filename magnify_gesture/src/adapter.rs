// Copyright 2025 the Magnify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion from `ui-events` pointer events.

use core::time::Duration;

use kurbo::Point;
use smallvec::SmallVec;
use ui_events::pointer::{PointerEvent, PointerId, PointerState};

use crate::interpreter::{PointerInput, PointerPhase};

/// Contact identifier used for `ui-events` input.
pub type UiContact = Option<PointerId>;

/// Interpreter inputs produced by one `ui-events` pointer event.
pub type UiInputs = SmallVec<[PointerInput<UiContact>; 4]>;

/// Converts a `ui-events` pointer event into interpreter input.
///
/// Only presses, moves, releases and cancels are relevant; every other event
/// yields `None`. Positions are logical, timestamps come from the event's
/// nanosecond clock. A cancel carries no state, so its position and time are
/// zero; the interpreter ignores both for cancels.
///
/// A move maps to its `current` state only. Use [`pointer_inputs`] to also
/// replay the coalesced states in between.
pub fn pointer_input(event: &PointerEvent) -> Option<PointerInput<UiContact>> {
    let (contact, phase, state) = match event {
        PointerEvent::Down(e) => (e.pointer.pointer_id, PointerPhase::Down, &e.state),
        PointerEvent::Up(e) => (e.pointer.pointer_id, PointerPhase::Up, &e.state),
        PointerEvent::Move(e) => (e.pointer.pointer_id, PointerPhase::Move, &e.current),
        PointerEvent::Cancel(info) => {
            return Some(PointerInput::new(
                info.pointer_id,
                PointerPhase::Cancel,
                Point::ZERO,
                Duration::ZERO,
            ));
        }
        _ => return None,
    };
    Some(input_from_state(contact, phase, state))
}

/// Like [`pointer_input`], but expands a move into one input per coalesced
/// state followed by the current state.
///
/// Coalesced states at or after the current timestamp are skipped. Feeding
/// every sample keeps the release velocity based on the real sample spacing
/// rather than the frame spacing.
pub fn pointer_inputs(event: &PointerEvent) -> UiInputs {
    let mut out = UiInputs::new();
    if let PointerEvent::Move(update) = event {
        let contact = update.pointer.pointer_id;
        let now = update.current.time;
        out.extend(
            update
                .coalesced
                .iter()
                .filter(|state| state.time < now)
                .map(|state| input_from_state(contact, PointerPhase::Move, state)),
        );
    }
    out.extend(pointer_input(event));
    out
}

fn input_from_state(
    contact: UiContact,
    phase: PointerPhase,
    state: &PointerState,
) -> PointerInput<UiContact> {
    PointerInput::new(
        contact,
        phase,
        state.logical_point(),
        Duration::from_nanos(state.time),
    )
}
