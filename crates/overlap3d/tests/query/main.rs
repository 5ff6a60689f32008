mod ball_containment;
mod capsule_degenerate;
mod collider_set_overlap;
mod cuboid_overlap;
mod sat_properties;
