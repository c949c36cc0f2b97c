use super::*;

fn grid_2x2() -> PatchMesh {
    PatchMesh::build_grid(DVec2::ZERO, 100.0, 100.0, 2, 2, PatchSettings::default())
}

fn corner_of(mesh: &PatchMesh, row: usize, col: usize, corner: Corner) -> DVec2 {
    mesh.patch_at(row, col)
        .expect("Patch erwartet")
        .corner_position(corner)
}

#[test]
fn test_grid_hat_erwartete_anzahl_knoten() {
    let mesh = PatchMesh::build_grid(DVec2::ZERO, 50.0, 40.0, 3, 4, PatchSettings::default());

    assert_eq!(mesh.patches().len(), 12);
    assert_eq!(mesh.knots().len(), 4 * 5);
    assert_eq!(mesh.rows(), 3);
    assert_eq!(mesh.cols(), 4);
    mesh.validate().expect("Mesh sollte konsistent sein");
}

#[test]
fn test_knoten_verbindungen_nach_lage() {
    let mesh = grid_2x2();
    let count = |row, col| {
        let id = mesh.knot_id_at(row, col).expect("Knoten erwartet");
        mesh.knot(id).expect("Knoten erwartet").connections().len()
    };

    assert_eq!(count(0, 0), 1);
    assert_eq!(count(0, 1), 2);
    assert_eq!(count(1, 1), 4);
    assert_eq!(count(2, 2), 1);
}

#[test]
fn test_szenario_mittlerer_knoten_verschieben() {
    let mut mesh = grid_2x2();
    let center = mesh
        .nearest_knot(DVec2::new(100.0, 100.0), 1.0)
        .expect("Knoten bei (100,100) erwartet");
    assert_eq!(center.distance, 0.0);

    assert!(mesh.set_knot_position(center.knot, DVec2::new(120.0, 130.0)));

    let target = DVec2::new(120.0, 130.0);
    assert_eq!(corner_of(&mesh, 0, 0, Corner::BottomRight), target);
    assert_eq!(corner_of(&mesh, 0, 1, Corner::BottomLeft), target);
    assert_eq!(corner_of(&mesh, 1, 0, Corner::TopRight), target);
    assert_eq!(corner_of(&mesh, 1, 1, Corner::TopLeft), target);
    mesh.validate().expect("Mesh sollte konsistent bleiben");
}

#[test]
fn test_verschobene_patches_bleiben_eckexakt() {
    let mut mesh = grid_2x2();
    let center = mesh.knot_id_at(1, 1).expect("Knoten erwartet");
    mesh.set_knot_position(center, DVec2::new(120.0, 130.0));

    let patch = mesh.patch_at(1, 1).expect("Patch erwartet");
    assert!(patch.evaluate_point(0.0, 0.0).distance(DVec2::new(120.0, 130.0)) < 1e-9);
    assert!(patch.evaluate_point(1.0, 1.0).distance(DVec2::new(200.0, 200.0)) < 1e-9);
}

#[test]
fn test_leeres_gitter() {
    let mesh = PatchMesh::build_grid(DVec2::ZERO, 100.0, 100.0, 0, 3, PatchSettings::default());

    assert!(mesh.is_empty());
    assert!(mesh.knots().is_empty());
    assert!(mesh.nearest_knot(DVec2::ZERO, 1000.0).is_none());
    assert!(mesh.knot_id_at(0, 0).is_none());
    assert!(!mesh.control_bounds().is_valid());
    mesh.validate().expect("Leeres Mesh ist konsistent");
}

#[test]
fn test_einzelpatch_nutzt_palette() {
    let mesh = PatchMesh::new_patch(DVec2::new(10.0, 20.0), 100.0, 50.0);
    let palette = CornerPalette::default();
    let patch = mesh.patch(PatchId(0)).expect("Patch erwartet");

    for corner in Corner::ALL {
        assert_eq!(patch.corner_color(corner), palette.color(corner));
    }
    assert_eq!(
        patch.corner_position(Corner::BottomRight),
        DVec2::new(110.0, 70.0)
    );
}

#[test]
fn test_nachbarn_teilen_eckfarben() {
    let mesh = grid_2x2();
    let left = mesh.patch_at(0, 0).expect("Patch erwartet");
    let right = mesh.patch_at(0, 1).expect("Patch erwartet");

    assert_eq!(
        left.corner_color(Corner::TopRight),
        right.corner_color(Corner::TopLeft)
    );
    assert_eq!(
        left.corner_color(Corner::BottomRight),
        right.corner_color(Corner::BottomLeft)
    );
}

#[test]
fn test_nearest_knot_ausserhalb_radius() {
    let mesh = grid_2x2();
    assert!(mesh.nearest_knot(DVec2::new(50.0, 50.0), 10.0).is_none());

    let hit = mesh
        .nearest_knot(DVec2::new(195.0, 3.0), 10.0)
        .expect("Knoten erwartet");
    assert_eq!(Some(hit.knot), mesh.knot_id_at(0, 2));
}

#[test]
fn test_spatial_index_folgt_knoten() {
    let mut mesh = grid_2x2();
    let knot = mesh.knot_id_at(0, 0).expect("Knoten erwartet");
    mesh.set_knot_position(knot, DVec2::new(-40.0, -40.0));

    assert!(mesh.nearest_knot(DVec2::ZERO, 1.0).is_none());
    let hit = mesh
        .nearest_knot(DVec2::new(-40.0, -41.0), 2.0)
        .expect("Knoten erwartet");
    assert_eq!(hit.knot, knot);
}

#[test]
fn test_randpunkt_ecke_laeuft_ueber_knoten() {
    let mut mesh = grid_2x2();
    let patch = mesh.patch_id_at(0, 0).expect("Patch erwartet");

    assert!(mesh.set_boundary_point(patch, 3, 3, DVec2::new(90.0, 95.0)));

    assert_eq!(
        corner_of(&mesh, 1, 1, Corner::TopLeft),
        DVec2::new(90.0, 95.0)
    );
    let center = mesh.knot_id_at(1, 1).expect("Knoten erwartet");
    assert_eq!(
        mesh.knot(center).expect("Knoten erwartet").position(),
        DVec2::new(90.0, 95.0)
    );
    mesh.validate().expect("Mesh sollte konsistent bleiben");
}

#[test]
fn test_kantenpunkt_betrifft_nur_eigenen_patch() {
    let mut mesh = grid_2x2();
    let patch = mesh.patch_id_at(0, 0).expect("Patch erwartet");
    let neighbor_before = mesh.patch_at(0, 1).cloned();

    assert!(mesh.set_boundary_point(patch, 1, 3, DVec2::new(110.0, 33.0)));

    assert_eq!(mesh.patch_at(0, 1).cloned(), neighbor_before);
    let moved = mesh
        .patch(patch)
        .and_then(|p| p.control_point(1, 3))
        .expect("Kontrollpunkt erwartet");
    assert_eq!(moved.position, DVec2::new(110.0, 33.0));
}

#[test]
fn test_innenpunkt_wird_abgelehnt() {
    let mut mesh = grid_2x2();
    let before = mesh.patch_at(0, 0).cloned();

    assert!(!mesh.set_boundary_point(PatchId(0), 1, 2, DVec2::new(1.0, 1.0)));
    assert_eq!(mesh.patch_at(0, 0).cloned(), before);
}

#[test]
fn test_eckfarbe_laeuft_ueber_knoten() {
    let mut mesh = grid_2x2();
    let patch = mesh.patch_id_at(1, 1).expect("Patch erwartet");

    assert!(mesh.set_corner_color(patch, 0, 0, Rgba::WHITE));

    assert_eq!(
        mesh.patch_at(0, 0)
            .expect("Patch erwartet")
            .corner_color(Corner::BottomRight),
        Rgba::WHITE
    );
    mesh.validate().expect("Mesh sollte konsistent bleiben");
}

#[test]
fn test_unbekannte_ids() {
    let mut mesh = grid_2x2();

    assert!(!mesh.set_knot_position(KnotId(99), DVec2::ZERO));
    assert!(!mesh.set_knot_color(KnotId(99), Rgba::WHITE));
    assert!(!mesh.set_boundary_point(PatchId(42), 0, 1, DVec2::ZERO));
    assert!(mesh.patch_id_at(2, 0).is_none());
    assert!(mesh.knot_id_at(3, 0).is_none());
}

#[test]
fn test_knot_for_slot() {
    let mesh = grid_2x2();
    let patch = mesh.patch_id_at(1, 0).expect("Patch erwartet");

    assert_eq!(
        mesh.knot_for_slot(patch, Corner::TopRight),
        mesh.knot_id_at(1, 1)
    );
    assert_eq!(
        mesh.knot_for_slot(patch, Corner::BottomLeft),
        mesh.knot_id_at(2, 0)
    );
}

#[test]
fn test_strategiewechsel_fuer_alle_patches() {
    let mut mesh = grid_2x2();
    mesh.set_interior_policy(InteriorPolicy::WeightedAverage);
    mesh.set_edge_follow(EdgeFollow::Half);

    assert_eq!(mesh.settings().interior_policy, InteriorPolicy::WeightedAverage);
    assert!(mesh
        .patches()
        .iter()
        .all(|p| p.settings().edge_follow == EdgeFollow::Half));
}

#[test]
fn test_control_bounds_ueber_alle_patches() {
    let mesh = grid_2x2();
    let bounds = mesh.control_bounds();

    assert_eq!(bounds.min, DVec2::ZERO);
    assert_eq!(bounds.max, DVec2::new(200.0, 200.0));
}

#[test]
fn test_deckungsgleiche_knoten_bleiben_abfragbar() {
    let mut mesh = PatchMesh::build_grid(DVec2::ZERO, 10.0, 10.0, 6, 6, PatchSettings::default());
    let target = DVec2::new(5.0, 5.0);

    for idx in 0..mesh.knots().len() {
        assert!(mesh.set_knot_position(KnotId(idx), target));
    }

    let hit = mesh
        .nearest_knot(DVec2::new(5.5, 5.0), 1.0)
        .expect("Treffer erwartet");
    assert_eq!(hit.knot, KnotId(0));
    assert_eq!(mesh.knots_within_radius(target, 0.1).len(), 49);
    mesh.validate().expect("Mesh sollte konsistent bleiben");
}
