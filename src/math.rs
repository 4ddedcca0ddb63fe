//! Pure computation helpers extracted for testability.
//!
//! All functions in this module are free of Bevy ECS dependencies and operate
//! on plain numeric / `Vec2` inputs, making them straightforward to unit-test.

use bevy::prelude::{UVec2, Vec2};

/// Linear interpolation between two points: `start + (end - start) * t`.
///
/// # Examples
/// ```
/// # use bevy::prelude::Vec2;
/// # use split_cam::math::lerp_vec2;
/// let p = lerp_vec2(Vec2::ZERO, Vec2::new(10.0, -20.0), 0.5);
/// assert_eq!(p, Vec2::new(5.0, -10.0));
/// ```
pub fn lerp_vec2(start: Vec2, end: Vec2, t: f32) -> Vec2 {
    start + (end - start) * t
}

/// Position a camera must take so that `tracked` sits in the centre of a
/// surface of `surface` pixels.
pub fn centering_target(tracked: Vec2, surface: Vec2) -> Vec2 {
    tracked - surface / 2.0
}

/// Freezes each axis of `target` at `current` when the distance on that axis
/// is within `deadzone`.
///
/// The comparison is inclusive: a delta of exactly `deadzone` does not move.
pub fn apply_deadzone(target: Vec2, current: Vec2, deadzone: Vec2) -> Vec2 {
    let delta = target - current;
    Vec2::new(
        if delta.x.abs() <= deadzone.x {
            current.x
        } else {
            target.x
        },
        if delta.y.abs() <= deadzone.y {
            current.y
        } else {
            target.y
        },
    )
}

/// Rounds each axis to the nearest multiple of `step` (half away from zero).
///
/// A non-positive `step` disables snapping.
pub fn snap_to_grid(v: Vec2, step: f32) -> Vec2 {
    if step <= 0.0 {
        return v;
    }
    Vec2::new((v.x / step).round() * step, (v.y / step).round() * step)
}

/// Keeps a camera's top-left corner inside the scene.
///
/// Per axis the upper bound `scene - view` is applied first and `0` second,
/// so a view larger than the scene always ends up at `0`.
pub fn clamp_to_scene(pos: Vec2, scene: Vec2, view: Vec2) -> Vec2 {
    let max = scene - view;
    let mut out = pos;
    if out.x > max.x {
        out.x = max.x;
    }
    if out.x < 0.0 {
        out.x = 0.0;
    }
    if out.y > max.y {
        out.y = max.y;
    }
    if out.y < 0.0 {
        out.y = 0.0;
    }
    out
}

/// Converts a y-down scene position into y-up Bevy world space.
pub fn scene_to_world(p: Vec2) -> Vec2 {
    Vec2::new(p.x, -p.y)
}

/// Splits a window into `count` side-by-side viewports.
///
/// Returns `(physical_position, physical_size)` per slice, left to right.
/// The last slice absorbs the rounding remainder so the slices always cover
/// the full width. Slices are at least one pixel wide.
pub fn split_viewports(window: UVec2, count: usize) -> Vec<(UVec2, UVec2)> {
    if count == 0 {
        return Vec::new();
    }
    let n = count as u32;
    let base = (window.x / n).max(1);
    (0..n)
        .map(|i| {
            let x = base * i;
            let width = if i + 1 == n {
                window.x.saturating_sub(x).max(1)
            } else {
                base
            };
            (UVec2::new(x, 0), UVec2::new(width, window.y.max(1)))
        })
        .collect()
}

/// Whether two axis-aligned boxes, given as centre and half-extent, overlap.
///
/// Boxes that only touch along an edge do not overlap.
pub fn aabb_overlap(a_center: Vec2, a_half: Vec2, b_center: Vec2, b_half: Vec2) -> bool {
    let d = (a_center - b_center).abs();
    let reach = a_half + b_half;
    d.x < reach.x && d.y < reach.y
}

/// Maps a noise value from the standard `[-1, 1]` range into `[min, max]`.
///
/// # Examples
/// ```
/// # use split_cam::math::map_noise_to_range;
/// assert_eq!(map_noise_to_range(-1.0, 0.0, 10.0), 0.0);
/// assert_eq!(map_noise_to_range( 1.0, 0.0, 10.0), 10.0);
/// ```
pub fn map_noise_to_range(noise_val: f64, min: f32, max: f32) -> f32 {
    min + ((noise_val as f32 + 1.0) / 2.0) * (max - min)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── lerp_vec2 ───────────────────────────────────────────────────

    #[test]
    fn lerp_endpoints() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(5.0, -6.0);
        assert_eq!(lerp_vec2(a, b, 0.0), a);
        assert_eq!(lerp_vec2(a, b, 1.0), b);
    }

    #[test]
    fn lerp_small_factor_moves_a_fraction() {
        let p = lerp_vec2(Vec2::ZERO, Vec2::new(100.0, 200.0), 0.02);
        assert!((p - Vec2::new(2.0, 4.0)).length() < 1e-5);
    }

    // ── centering_target ────────────────────────────────────────────

    #[test]
    fn centering_subtracts_half_surface() {
        let t = centering_target(Vec2::new(500.0, 500.0), Vec2::new(800.0, 600.0));
        assert_eq!(t, Vec2::new(100.0, 200.0));
    }

    // ── apply_deadzone ──────────────────────────────────────────────

    #[test]
    fn deadzone_freezes_each_axis_independently() {
        let current = Vec2::new(10.0, 10.0);
        let target = Vec2::new(25.0, 100.0);
        let out = apply_deadzone(target, current, Vec2::splat(20.0));
        assert_eq!(out, Vec2::new(10.0, 100.0));
    }

    #[test]
    fn deadzone_boundary_is_inclusive() {
        let out = apply_deadzone(Vec2::new(20.0, -20.0), Vec2::ZERO, Vec2::splat(20.0));
        assert_eq!(out, Vec2::ZERO);
    }

    #[test]
    fn outside_deadzone_passes_target_through() {
        let target = Vec2::new(20.5, -40.0);
        assert_eq!(apply_deadzone(target, Vec2::ZERO, Vec2::splat(20.0)), target);
    }

    // ── snap_to_grid ────────────────────────────────────────────────

    #[test]
    fn snap_rounds_to_quarter() {
        let s = snap_to_grid(Vec2::new(1.13, -2.37), 0.25);
        assert_eq!(s, Vec2::new(1.25, -2.25));
    }

    #[test]
    fn snap_half_rounds_away_from_zero() {
        let s = snap_to_grid(Vec2::new(0.125, -0.125), 0.25);
        assert_eq!(s, Vec2::new(0.25, -0.25));
    }

    #[test]
    fn snap_with_zero_step_is_identity() {
        let v = Vec2::new(1.13, 2.71);
        assert_eq!(snap_to_grid(v, 0.0), v);
    }

    // ── clamp_to_scene ──────────────────────────────────────────────

    #[test]
    fn clamp_keeps_inside_positions() {
        let p = Vec2::new(100.0, 200.0);
        let out = clamp_to_scene(p, Vec2::new(2000.0, 1500.0), Vec2::new(800.0, 600.0));
        assert_eq!(out, p);
    }

    #[test]
    fn clamp_limits_to_upper_and_lower_bounds() {
        let scene = Vec2::new(2000.0, 1500.0);
        let view = Vec2::new(800.0, 600.0);
        assert_eq!(
            clamp_to_scene(Vec2::new(5000.0, -3.0), scene, view),
            Vec2::new(1200.0, 0.0)
        );
        assert_eq!(
            clamp_to_scene(Vec2::new(-1.0, 901.0), scene, view),
            Vec2::new(0.0, 900.0)
        );
    }

    #[test]
    fn view_larger_than_scene_clamps_to_origin() {
        let scene = Vec2::new(400.0, 300.0);
        let view = Vec2::new(800.0, 600.0);
        for p in [
            Vec2::new(-50.0, -50.0),
            Vec2::ZERO,
            Vec2::new(123.0, 456.0),
            Vec2::new(1e6, 1e6),
        ] {
            assert_eq!(clamp_to_scene(p, scene, view), Vec2::ZERO);
        }
    }

    #[test]
    fn clamp_result_always_within_bounds() {
        let scene = Vec2::new(1000.0, 700.0);
        let view = Vec2::new(320.0, 240.0);
        for ix in -10..=20 {
            for iy in -10..=20 {
                let p = Vec2::new(ix as f32 * 73.5, iy as f32 * 51.25);
                let out = clamp_to_scene(p, scene, view);
                assert!(out.x >= 0.0 && out.x <= (scene.x - view.x).max(0.0));
                assert!(out.y >= 0.0 && out.y <= (scene.y - view.y).max(0.0));
            }
        }
    }

    // ── scene_to_world ──────────────────────────────────────────────

    #[test]
    fn scene_to_world_flips_y() {
        assert_eq!(scene_to_world(Vec2::new(3.0, 4.0)), Vec2::new(3.0, -4.0));
    }

    // ── split_viewports ─────────────────────────────────────────────

    #[test]
    fn single_viewport_covers_window() {
        let v = split_viewports(UVec2::new(1280, 720), 1);
        assert_eq!(v, vec![(UVec2::ZERO, UVec2::new(1280, 720))]);
    }

    #[test]
    fn slices_are_ordered_and_cover_full_width() {
        let window = UVec2::new(1281, 720);
        let v = split_viewports(window, 2);
        assert_eq!(v.len(), 2);
        assert_eq!(v[0].0.x, 0);
        assert_eq!(v[1].0.x, v[0].1.x);
        assert_eq!(v[1].0.x + v[1].1.x, window.x);
        assert!(v.iter().all(|(_, size)| size.y == window.y));
    }

    #[test]
    fn no_cameras_no_viewports() {
        assert!(split_viewports(UVec2::new(800, 600), 0).is_empty());
    }

    // ── aabb_overlap ────────────────────────────────────────────────

    #[test]
    fn overlapping_boxes() {
        assert!(aabb_overlap(
            Vec2::ZERO,
            Vec2::splat(10.0),
            Vec2::new(15.0, 0.0),
            Vec2::splat(10.0)
        ));
    }

    #[test]
    fn touching_boxes_do_not_overlap() {
        assert!(!aabb_overlap(
            Vec2::ZERO,
            Vec2::splat(10.0),
            Vec2::new(20.0, 0.0),
            Vec2::splat(10.0)
        ));
    }

    // ── map_noise_to_range ──────────────────────────────────────────

    #[test]
    fn noise_zero_maps_to_midpoint() {
        let result = map_noise_to_range(0.0, 2.0, 6.0);
        assert!((result - 4.0).abs() < 1e-6);
    }
}
