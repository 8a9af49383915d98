//! MIDI planner: which pedals can a controller drive, and how?
//!
//! Rule-based only. Connector types are compared as plain strings; no
//! protocol or channel negotiation is attempted.

use serde::{Serialize, Serializer};
use shootout_common::db::{find_midi_capable_pedals, Jack, MidiControllerDetail, PedalDetail};
use shootout_common::views::{assemble_all, find_view, list_views};
use shootout_common::Result;
use sqlx::SqlitePool;
use std::fmt;
use tracing::debug;

pub const USB_ONLY_NOTE: &str = "Pedal is MIDI-capable but has no standard MIDI input jack";
pub const NO_MIDI_NOTE: &str = "Pedal does not support MIDI";

/// Anything that can send or receive MIDI
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MidiDevice {
    pub id: i64,
    pub model: String,
    pub manufacturer_name: String,
    /// "midi_controller" or "pedal"
    pub product_type: String,
    pub midi_capable: bool,
    pub midi_receive_capabilities: Option<String>,
    pub midi_send_capabilities: Option<String>,
    pub preset_count: Option<i64>,
    pub midi_jacks: Vec<Jack>,
}

/// How a controller reaches one pedal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MidiConnection {
    /// Same connector on both ends
    Direct(String),
    AdapterNeeded,
    UsbOnly,
    None,
}

impl fmt::Display for MidiConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MidiConnection::Direct(connector) => write!(f, "Direct ({})", connector),
            MidiConnection::AdapterNeeded => write!(f, "Adapter needed"),
            MidiConnection::UsbOnly => write!(f, "USB only"),
            MidiConnection::None => write!(f, "None"),
        }
    }
}

impl Serialize for MidiConnection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PedalCompatibility {
    pub id: i64,
    pub model: String,
    pub manufacturer_name: String,
    pub midi_capable: bool,
    pub midi_receive_capabilities: Option<String>,
    pub has_midi_input: bool,
    pub connection_type: MidiConnection,
    /// Empty when there is nothing to add
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    pub controller_id: i64,
    pub controller_model: String,
    pub pedals: Vec<PedalCompatibility>,
    /// Requested ids with no matching pedal
    pub unresolved_pedal_ids: Vec<i64>,
    pub summary: String,
}

fn midi_jacks(jacks: &[Jack]) -> Vec<Jack> {
    jacks.iter().filter(|j| j.is_midi()).cloned().collect()
}

/// All MIDI controllers, then all MIDI-capable pedals
pub async fn list_devices(pool: &SqlitePool) -> Result<Vec<MidiDevice>> {
    let controllers = list_views::<MidiControllerDetail>(pool).await?;
    let pedals = assemble_all(pool, find_midi_capable_pedals(pool).await?).await?;

    let mut devices = Vec::with_capacity(controllers.len() + pedals.len());

    for controller in controllers {
        devices.push(MidiDevice {
            id: controller.product.id,
            midi_jacks: midi_jacks(&controller.jacks),
            model: controller.product.model,
            manufacturer_name: controller.product.manufacturer_name,
            product_type: "midi_controller".to_string(),
            midi_capable: true,
            midi_receive_capabilities: None,
            midi_send_capabilities: None,
            preset_count: controller.detail.total_preset_slots,
        });
    }

    for pedal in pedals {
        let details = pedal.detail.pedal_details;
        devices.push(MidiDevice {
            id: pedal.product.id,
            midi_jacks: midi_jacks(&pedal.jacks),
            model: pedal.product.model,
            manufacturer_name: pedal.product.manufacturer_name,
            product_type: "pedal".to_string(),
            midi_capable: details.is_midi_capable(),
            midi_receive_capabilities: details.midi_receive_capabilities,
            midi_send_capabilities: details.midi_send_capabilities,
            preset_count: details.preset_count,
        });
    }

    Ok(devices)
}

/// Connection from a controller to one pedal
///
/// `pedal_input` is the connector of the pedal's first MIDI input jack.
/// Returns the connection, the note, and whether the pedal counts as
/// compatible.
fn classify(
    midi_capable: bool,
    pedal_input: Option<&str>,
    controller_outputs: &[&str],
) -> (MidiConnection, String, bool) {
    match (midi_capable, pedal_input) {
        (true, Some(connector)) => {
            if controller_outputs.contains(&connector) {
                (MidiConnection::Direct(connector.to_string()), String::new(), true)
            } else if let Some(first_output) = controller_outputs.first() {
                let note = format!(
                    "Controller outputs {}, pedal expects {}",
                    first_output, connector
                );
                (MidiConnection::AdapterNeeded, note, true)
            } else {
                // Controller has no MIDI outputs at all; still counted
                (MidiConnection::None, String::new(), true)
            }
        }
        (true, None) => (MidiConnection::UsbOnly, USB_ONLY_NOTE.to_string(), false),
        (false, _) => (MidiConnection::None, NO_MIDI_NOTE.to_string(), false),
    }
}

/// Check each pedal in `pedal_ids` against controller `controller_id`
pub async fn check_compatibility(
    pool: &SqlitePool,
    controller_id: i64,
    pedal_ids: &[i64],
) -> Result<Option<CompatibilityResult>> {
    let Some(controller) = find_view::<MidiControllerDetail>(pool, controller_id).await? else {
        return Ok(None);
    };

    let controller_outputs: Vec<&str> = controller
        .jacks
        .iter()
        .filter(|j| j.is_midi_output())
        .map(|j| j.connector_type.as_str())
        .collect();

    let mut pedals = Vec::with_capacity(pedal_ids.len());
    let mut unresolved = Vec::new();
    let mut compatible = 0;

    for &pedal_id in pedal_ids {
        let Some(pedal) = find_view::<PedalDetail>(pool, pedal_id).await? else {
            unresolved.push(pedal_id);
            continue;
        };

        let details = pedal.detail.pedal_details;
        let midi_capable = details.is_midi_capable();
        let first_input = pedal.jacks.iter().find(|j| j.is_midi_input());

        let (connection, notes, counts) = classify(
            midi_capable,
            first_input.map(|j| j.connector_type.as_str()),
            &controller_outputs,
        );
        if counts {
            compatible += 1;
        }

        pedals.push(PedalCompatibility {
            id: pedal.product.id,
            model: pedal.product.model,
            manufacturer_name: pedal.product.manufacturer_name,
            midi_capable,
            midi_receive_capabilities: details.midi_receive_capabilities,
            has_midi_input: first_input.is_some(),
            connection_type: connection,
            notes,
        });
    }

    // Denominator is the request size, resolved or not
    let summary = format!(
        "{} of {} pedals are MIDI-compatible with {}.",
        compatible,
        pedal_ids.len(),
        controller.product.model
    );
    debug!("MIDI check controller {}: {}", controller_id, summary);

    Ok(Some(CompatibilityResult {
        controller_id,
        controller_model: controller.product.model.clone(),
        pedals,
        unresolved_pedal_ids: unresolved,
        summary,
    }))
}
