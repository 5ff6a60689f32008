use overlap3d::math::{Point, Rotation, Vector};
use overlap3d::query;
use overlap3d::shape::{ConvexMesh, Cuboid, TypedShape};
use overlap3d::transform::RigidTransform;

#[test]
fn touching_cubes_overlap() {
    let mesh = ConvexMesh::cube(Vector::repeat(1.0));
    let cuboid = Cuboid::new(Vector::repeat(1.0));
    let pos1 = RigidTransform::identity();
    let pos2 = RigidTransform::from_position(Point::new(2.0, 0.0, 0.0));

    assert_eq!(
        query::intersection_test(&pos1, &mesh, &pos2, TypedShape::Cuboid(&cuboid)),
        Ok(true)
    );
    assert_eq!(
        query::intersection_test(&pos1, &mesh, &pos2, TypedShape::ConvexMesh(&mesh)),
        Ok(true)
    );
}

#[test]
fn separated_cubes_do_not_overlap() {
    let mesh = ConvexMesh::cube(Vector::repeat(1.0));
    let cuboid = Cuboid::new(Vector::repeat(1.0));
    let pos1 = RigidTransform::identity();
    let pos2 = RigidTransform::from_position(Point::new(3.0, 0.0, 0.0));

    assert_eq!(
        query::intersection_test(&pos1, &mesh, &pos2, TypedShape::Cuboid(&cuboid)),
        Ok(false)
    );
    assert_eq!(
        query::intersection_test(&pos1, &mesh, &pos2, TypedShape::ConvexMesh(&mesh)),
        Ok(false)
    );
}

#[test]
fn rotated_cuboid_reaches_further() {
    let mesh = ConvexMesh::cube(Vector::repeat(1.0));
    let cuboid = Cuboid::new(Vector::repeat(1.0));
    let pos1 = RigidTransform::identity();
    let rot = Rotation::from_axis_angle(&Vector::y_axis(), core::f32::consts::FRAC_PI_4);

    // Unrotated, a box at x = 2.3 is out of reach. Rotated by 45 degrees, its edge
    // reaches x = 2.3 - sqrt(2) < 1.
    let pos2 = RigidTransform::from_position(Point::new(2.3, 0.0, 0.0));
    assert_eq!(
        query::intersection_test(&pos1, &mesh, &pos2, TypedShape::Cuboid(&cuboid)),
        Ok(false)
    );

    let pos2 = RigidTransform::from_position_rotation(Point::new(2.3, 0.0, 0.0), rot);
    assert_eq!(
        query::intersection_test(&pos1, &mesh, &pos2, TypedShape::Cuboid(&cuboid)),
        Ok(true)
    );
}

#[test]
fn scaled_origin_mesh() {
    let mesh = ConvexMesh::cube(Vector::repeat(1.0));
    let cuboid = Cuboid::new(Vector::repeat(1.0));
    let pos2 = RigidTransform::from_position(Point::new(4.0, 0.0, 0.0));

    let pos1 = RigidTransform::identity();
    assert_eq!(
        query::intersection_test(&pos1, &mesh, &pos2, TypedShape::Cuboid(&cuboid)),
        Ok(false)
    );

    let pos1 = RigidTransform::from_position_scale(Point::origin(), Vector::new(3.0, 1.0, 1.0));
    assert_eq!(
        query::intersection_test(&pos1, &mesh, &pos2, TypedShape::Cuboid(&cuboid)),
        Ok(true)
    );
}
