#![no_main]

//! Wendet beliebige Edit-Folgen auf ein kleines Gitter an und prüft danach
//! die Knoten-Invarianten.

use coons_mesh_editor::{EdgeFollow, InteriorPolicy, PatchId, PatchMesh, PatchSettings, Rgba};
use glam::DVec2;
use libfuzzer_sys::fuzz_target;

fn coord(byte: u8) -> f64 {
    f64::from(byte) * 2.0 - 128.0
}

fuzz_target!(|data: &[u8]| {
    let Some((&head, ops)) = data.split_first() else {
        return;
    };
    let rows = usize::from(head % 4);
    let cols = usize::from((head >> 2) % 4);
    let settings = PatchSettings {
        interior_policy: if head & 0x10 == 0 {
            InteriorPolicy::Coons
        } else {
            InteriorPolicy::WeightedAverage
        },
        edge_follow: match (head >> 5) % 3 {
            0 => EdgeFollow::Fixed,
            1 => EdgeFollow::Half,
            _ => EdgeFollow::Full,
        },
    };
    let mut mesh = PatchMesh::build_grid(DVec2::ZERO, 40.0, 40.0, rows, cols, settings);

    for op in ops.chunks_exact(5) {
        let pos = DVec2::new(coord(op[3]), coord(op[4]));
        match op[0] % 4 {
            0 => {
                let knot = mesh.knot_id_at(usize::from(op[1] % 5), usize::from(op[2] % 5));
                if let Some(knot) = knot {
                    mesh.set_knot_position(knot, pos);
                }
            }
            1 => {
                let patch = PatchId(usize::from(op[1] % 10));
                mesh.set_boundary_point(patch, usize::from(op[2] % 4), usize::from(op[2] / 4 % 4), pos);
            }
            2 => {
                let patch = PatchId(usize::from(op[1] % 10));
                let color = Rgba::new(
                    f32::from(op[3]) / 255.0,
                    f32::from(op[4]) / 255.0,
                    0.5,
                    1.0,
                );
                mesh.set_corner_color(patch, usize::from(op[2] % 4), usize::from(op[2] / 4 % 4), color);
            }
            _ => {
                let _ = mesh.nearest_knot(pos, f64::from(op[1]));
            }
        }
    }

    if let Err(e) = mesh.validate() {
        panic!("Invariante verletzt: {e:#}");
    }
});
