//! # Project Aggregation
//!
//! Rolls per-room physics and material take-offs into one project-level
//! summary: purchasing totals, area-weighted design averages, and the
//! room-prefixed notes an installer reads before anything else.
//!
//! Spacing aggregates collapse to a single value only when every room
//! agrees; otherwise they report "varies" rather than an average that no
//! room actually uses.
//!
//! ## Example
//!
//! ```rust
//! use radiant_core::normalize::normalize;
//! use radiant_core::presets::{InsulationPeriod, Region};
//! use radiant_core::project::ProjectSettings;
//! use radiant_core::summary::aggregate;
//!
//! let mut settings = ProjectSettings::new_for_region(Region::Uk);
//! settings.insulation_period = Some(InsulationPeriod::Y2001To2015);
//! settings.outdoor_design_temp = Some(-3.0);
//! let si = normalize(&settings).unwrap();
//!
//! let summary = aggregate(&[], &si).unwrap();
//! assert_eq!(summary.room_count, 0);
//! assert_eq!(summary.total_heat_loss_w, 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::calculate_room;
use crate::errors::CalcResult;
use crate::materials::select_materials;
use crate::normalize::SettingsSi;
use crate::project::RoomInput;

/// Spacing rolled up across rooms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "mm")]
pub enum SpacingSummary {
    /// Every room that reports this spacing uses the same value
    #[serde(rename = "UNIFORM")]
    Uniform(u32),
    /// Rooms disagree; order per room, not from this summary
    #[serde(rename = "VARIES")]
    Varies,
}

/// Project-level roll-up of room results and material take-offs.
///
/// Averages are area-weighted; a large living room counts for more than a
/// closet. `fin_spacing` / `tubing_spacing` are `None` when no room
/// reports that spacing kind at all.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub room_count: usize,
    pub total_floor_area_m2: f64,

    // === Purchasing totals ===
    pub total_heat_loss_w: f64,
    pub total_tubing_m: u32,
    pub total_fin_pairs: u32,
    /// All hardware kinds summed: supports, open-web clips, top-down
    /// clips and brackets
    pub total_clips: u32,
    pub total_loops: u32,

    // === Area-weighted design averages ===
    pub avg_load_w_per_m2: f64,
    pub avg_water_temp_c: f64,

    // === Spacing aggregates ===
    pub fin_spacing: Option<SpacingSummary>,
    pub tubing_spacing: Option<SpacingSummary>,

    /// Room-prefixed warnings and recommendations, in room order
    pub notes: Vec<String>,
}

/// Run every room through physics and material selection and roll up.
///
/// # Returns
///
/// * `Ok(ProjectSummary)` - Totals, averages, and notes
/// * `Err(CalcError)` - The first per-room failure; a partial summary is
///   never produced
pub fn aggregate(rooms: &[RoomInput], settings: &SettingsSi) -> CalcResult<ProjectSummary> {
    let mut summary = ProjectSummary {
        room_count: rooms.len(),
        ..ProjectSummary::default()
    };

    let mut load_weighted = 0.0;
    let mut water_weighted = 0.0;

    for room in rooms {
        let results = calculate_room(room, settings)?;
        let materials = select_materials(&results, room)?;

        let area = room.floor_area_m2();
        summary.total_floor_area_m2 += area;
        load_weighted += results.load_w_per_m2 * area;
        water_weighted += results.water_temp_c * area;

        summary.total_heat_loss_w += results.q_after_factors_w;
        summary.total_tubing_m += materials.tubing_m;
        summary.total_fin_pairs += materials.fin_pairs;
        summary.total_loops += materials.loops;
        summary.total_clips += materials.hanging_supports
            + materials.open_web_clips
            + materials.topdown_clips
            + materials.topdown_brackets;

        for warning in &results.warnings {
            summary.notes.push(format!("{}: {}", room.name, warning));
        }
        if materials.supplemental_recommended {
            summary.notes.push(format!(
                "{}: Supplemental heat recommended (high load)",
                room.name
            ));
        }

        if let Some(mm) = materials.fin_spacing_mm {
            summary.fin_spacing = fold_spacing(summary.fin_spacing, mm);
        }
        if let Some(mm) = materials.tubing_spacing_mm {
            summary.tubing_spacing = fold_spacing(summary.tubing_spacing, mm);
        }
    }

    if summary.total_floor_area_m2 > 0.0 {
        summary.avg_load_w_per_m2 = load_weighted / summary.total_floor_area_m2;
        summary.avg_water_temp_c = water_weighted / summary.total_floor_area_m2;
    }

    Ok(summary)
}

fn fold_spacing(acc: Option<SpacingSummary>, mm: u32) -> Option<SpacingSummary> {
    match acc {
        None => Some(SpacingSummary::Uniform(mm)),
        Some(SpacingSummary::Uniform(existing)) if existing == mm => acc,
        _ => Some(SpacingSummary::Varies),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::UValuesSi;
    use crate::presets::{
        InstallMethod, InsulationPeriod, JoistSpacing, Region, StandardsMode,
    };

    fn uk_settings() -> SettingsSi {
        SettingsSi {
            region: Region::Uk,
            standards_mode: StandardsMode::BsEn12831,
            insulation_period: InsulationPeriod::Pre1980,
            indoor_temp_c: 21.0,
            outdoor_temp_c: -5.0,
            safety_factor_pct: 12.5,
            heat_up_factor_pct: 27.5,
            psi_allowance_w_per_k: 0.04,
            mech_vent_m3_per_h: 0.4,
            ach: 1.0,
            u: UValuesSi {
                wall: 0.8,
                window: 3.0,
                door: 2.0,
                roof: 0.6,
                floor: 0.6,
            },
        }
    }

    fn room(name: &str) -> RoomInput {
        RoomInput {
            name: name.to_string(),
            length_m: 4.0,
            width_m: 3.0,
            height_m: 2.4,
            exterior_wall_length_m: 7.0,
            window_area_m2: 1.5,
            door_area_m2: 0.0,
            ceiling_exposed: false,
            floor_exposed: false,
            floor_on_ground: false,
            setpoint_c: None,
            install_method: InstallMethod::Drilling,
            joist_spacing: Some(JoistSpacing::In16),
            floor_cover: None,
        }
    }

    #[test]
    fn test_empty_project_is_zero_summary() {
        let summary = aggregate(&[], &uk_settings()).unwrap();
        assert_eq!(summary, ProjectSummary::default());
    }

    #[test]
    fn test_totals_sum_over_rooms() {
        let settings = uk_settings();
        let rooms = vec![room("Kitchen"), room("Dining")];

        let one = aggregate(&rooms[..1], &settings).unwrap();
        let two = aggregate(&rooms, &settings).unwrap();

        assert_eq!(two.room_count, 2);
        assert!((two.total_floor_area_m2 - 24.0).abs() < 1e-9);
        assert!((two.total_heat_loss_w - 2.0 * one.total_heat_loss_w).abs() < 1e-9);
        assert_eq!(two.total_tubing_m, 2 * one.total_tubing_m);
        assert_eq!(two.total_fin_pairs, 2 * one.total_fin_pairs);
        assert_eq!(two.total_loops, 2 * one.total_loops);

        // Identical rooms leave the averages unchanged
        assert!((two.avg_load_w_per_m2 - one.avg_load_w_per_m2).abs() < 1e-9);
        assert!((two.avg_water_temp_c - one.avg_water_temp_c).abs() < 1e-9);
    }

    #[test]
    fn test_averages_are_area_weighted() {
        let settings = uk_settings();
        let small = room("Hall");
        let mut large = room("Lounge");
        large.length_m = 6.0;
        large.width_m = 4.0;

        let r_small = calculate_room(&small, &settings).unwrap();
        let r_large = calculate_room(&large, &settings).unwrap();
        let expected_load =
            (r_small.load_w_per_m2 * 12.0 + r_large.load_w_per_m2 * 24.0) / 36.0;
        let expected_water =
            (r_small.water_temp_c * 12.0 + r_large.water_temp_c * 24.0) / 36.0;

        let summary = aggregate(&[small, large], &settings).unwrap();
        assert!((summary.avg_load_w_per_m2 - expected_load).abs() < 1e-9);
        assert!((summary.avg_water_temp_c - expected_water).abs() < 1e-9);
        // Weighted toward the larger, lower-density room
        assert!(summary.avg_load_w_per_m2 < r_small.load_w_per_m2);
    }

    #[test]
    fn test_uniform_spacing() {
        // Across-joist rooms report tube pitch, no fin spacing
        let summary = aggregate(&[room("A"), room("B")], &uk_settings()).unwrap();
        assert_eq!(summary.fin_spacing, None);
        assert_eq!(summary.tubing_spacing, Some(SpacingSummary::Uniform(330)));
    }

    #[test]
    fn test_mixed_joists_vary() {
        // Two rooms agree, the third does not
        let mut c = room("C");
        c.joist_spacing = Some(JoistSpacing::In19);
        let summary = aggregate(&[room("A"), room("B"), c], &uk_settings()).unwrap();
        assert_eq!(summary.tubing_spacing, Some(SpacingSummary::Varies));
    }

    #[test]
    fn test_spacing_kinds_fold_independently() {
        let mut hung = room("Bedroom");
        hung.install_method = InstallMethod::HangingSnake;
        let summary = aggregate(&[room("Kitchen"), hung], &uk_settings()).unwrap();

        // One room reports each kind; both stay uniform
        assert_eq!(summary.fin_spacing, Some(SpacingSummary::Uniform(330)));
        assert_eq!(summary.tubing_spacing, Some(SpacingSummary::Uniform(330)));
        assert!(summary.total_clips > 0);
    }

    #[test]
    fn test_notes_are_room_prefixed() {
        let mut box_room = room("Box Room");
        box_room.length_m = 2.0;
        box_room.width_m = 1.0;
        box_room.exterior_wall_length_m = 6.0;
        box_room.window_area_m2 = 0.0;

        let summary = aggregate(&[room("Kitchen"), box_room], &uk_settings()).unwrap();
        assert_eq!(summary.notes.len(), 2);
        assert!(summary.notes[0].starts_with("Box Room: High load"));
        assert_eq!(
            summary.notes[1],
            "Box Room: Supplemental heat recommended (high load)"
        );
    }

    #[test]
    fn test_room_error_aborts_aggregate() {
        let mut bad = room("Attic");
        bad.joist_spacing = None;
        let err = aggregate(&[room("Kitchen"), bad], &uk_settings()).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_summary_serialization() {
        let summary = aggregate(&[room("Kitchen")], &uk_settings()).unwrap();
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"kind\":\"UNIFORM\""));
        let roundtrip: ProjectSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, roundtrip);
    }
}
