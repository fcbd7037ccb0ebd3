use cgmath::{InnerSpace, Vector3};

/// Index of refraction of every dielectric surface, the surrounding medium is vacuum.
pub const REFRACTIVE_INDEX: f64 = 1.3;

/// Normalizes `v` in place and returns its previous length.
///
/// A zero-length vector turns into NaNs, callers must rule that out.
pub fn normalize_in_place(v: &mut Vector3<f64>) -> f64 {
    let length = v.magnitude();
    *v /= length;

    length
}

/// Mirrors `direction` about `normal`: `d - 2(d.n)n`, both normalized first.
pub fn reflect(direction: Vector3<f64>, normal: Vector3<f64>) -> Vector3<f64> {
    let d = direction.normalize();
    let n = normal.normalize();

    (d - n * (2.0 * d.dot(n))).normalize()
}

/// Snell refraction of `direction` through a surface with outward `normal`.
///
/// The ray is entering when it travels against the normal, in that case the
/// ratio is `1 / REFRACTIVE_INDEX`, otherwise it is leaving and the ratio is
/// inverted. Returns `None` on total internal reflection.
pub fn refract(direction: Vector3<f64>, normal: Vector3<f64>) -> Option<Vector3<f64>> {
    let d = direction.normalize();
    let mut n = normal.normalize();
    let mut c1 = -n.dot(d);
    let mut ratio = 1.0 / REFRACTIVE_INDEX;

    if c1 < 0.0 {
        n = -n;
        c1 = -c1;
        ratio = REFRACTIVE_INDEX;
    }

    let k = 1.0 - ratio * ratio * (1.0 - c1 * c1);
    if k < 0.0 {
        return None;
    }

    let c2 = k.sqrt();

    Some((d * ratio + n * (ratio * c1 - c2)).normalize())
}

/// Flips `normal` so it faces against `direction`.
pub fn face_forward(normal: Vector3<f64>, direction: Vector3<f64>) -> Vector3<f64> {
    if normal.dot(direction) > 0.0 {
        -normal
    } else {
        normal
    }
}

/// Pushes `position` off the surface by `bias`, onto the side `direction` leaves towards.
pub fn offset_origin(
    position: Vector3<f64>,
    normal: Vector3<f64>,
    direction: Vector3<f64>,
    bias: f64,
) -> Vector3<f64> {
    if normal.dot(direction) >= 0.0 {
        position + normal * bias
    } else {
        position - normal * bias
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{ElementWise, Zero};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    const EPS: f64 = 1e-9;

    fn close(a: Vector3<f64>, b: Vector3<f64>) -> bool {
        (a - b).magnitude() < EPS * (1.0 + a.magnitude().max(b.magnitude()))
    }

    fn random_vectors(count: usize) -> Vec<Vector3<f64>> {
        let mut rng = SmallRng::seed_from_u64(7);

        (0..count)
            .map(|_| {
                Vector3::new(
                    rng.gen_range(-100.0..100.0),
                    rng.gen_range(-100.0..100.0),
                    rng.gen_range(-100.0..100.0),
                )
            })
            .collect()
    }

    #[test]
    fn vector_space_identities() {
        let vs = random_vectors(64);

        for w in vs.windows(3) {
            let (a, b, c) = (w[0], w[1], w[2]);

            assert_eq!(a + b, b + a);
            assert!(close((a + b) + c, a + (b + c)));
            assert_eq!(a.dot(b), b.dot(a));
            assert_eq!(a.cross(b), -b.cross(a));
            assert!((a.normalize().magnitude() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn component_and_scalar_operations() {
        let v0 = Vector3::new(2.3, 3.7, 4.4);
        let v1 = Vector3::new(-6.6, 1.2, 2.3);

        assert_eq!(v0 - v1, Vector3::new(2.3 - -6.6, 3.7 - 1.2, 4.4 - 2.3));
        assert_eq!(v0 * 3.5, Vector3::new(2.3 * 3.5, 3.7 * 3.5, 4.4 * 3.5));
        assert_eq!(v0 / 2.0, Vector3::new(1.15, 1.85, 2.2));
        assert_eq!(-v1, Vector3::new(6.6, -1.2, -2.3));
        assert_eq!(
            v0.mul_element_wise(v1),
            Vector3::new(2.3 * -6.6, 3.7 * 1.2, 4.4 * 2.3)
        );
    }

    #[test]
    fn products_and_lengths() {
        let v0 = Vector3::new(1.0, 2.0, -3.0);
        let v1 = Vector3::new(2.0, 3.0, 4.0);

        assert_eq!(v0.dot(v1), -4.0);
        assert_eq!(v0.cross(v1), Vector3::new(17.0, -10.0, -1.0));

        let mut v2 = Vector3::new(1.0, 2.0, -2.0);
        assert_eq!(v2.magnitude2(), 9.0);
        assert_eq!(v2.magnitude(), 3.0);

        let old_length = normalize_in_place(&mut v2);
        assert_eq!(old_length, 3.0);
        assert!((v2.magnitude() - 1.0).abs() < EPS);

        let v3: Vector3<f64> = Vector3::new(1.4, 2.8, -2.6);
        let v4 = v3.normalize();
        assert_eq!(v3, Vector3::new(1.4, 2.8, -2.6));
        assert!((v4.magnitude() - 1.0).abs() < EPS);
    }

    #[test]
    fn equality() {
        let v0 = Vector3::new(2.93, 4.39, 3.27);
        let v1 = Vector3::new(2.93, 4.39, 3.27);
        let v2 = Vector3::new(4.39, 2.93, 3.27);

        assert_eq!(v0, v1);
        assert_ne!(v0, v2);
    }

    #[test]
    fn zero_length_normalization_is_not_finite() {
        let mut v = Vector3::<f64>::zero();
        normalize_in_place(&mut v);

        assert!(v.x.is_nan());
    }

    #[test]
    fn reflection_about_normal() {
        let r = reflect(Vector3::new(1.0, -1.0, 0.0), Vector3::new(0.0, 2.0, 0.0));

        assert!(close(r, Vector3::new(1.0, 1.0, 0.0).normalize()));
    }

    #[test]
    fn refraction_bends_towards_normal_when_entering() {
        let d = Vector3::new(1.0, -1.0, 0.0).normalize();
        let n = Vector3::new(0.0, 1.0, 0.0);

        let t = refract(d, n).unwrap();
        let sin_in = d.x;
        let sin_out = t.x;

        assert!(t.y < 0.0);
        assert!((sin_in - REFRACTIVE_INDEX * sin_out).abs() < 1e-9);
    }

    #[test]
    fn normal_incidence_passes_straight_through() {
        let t = refract(Vector3::new(0.0, -1.0, 0.0), Vector3::new(0.0, 1.0, 0.0)).unwrap();

        assert!(close(t, Vector3::new(0.0, -1.0, 0.0)));
    }

    #[test]
    fn total_internal_reflection_is_detected() {
        // leaving the dense medium at a grazing angle
        let d = Vector3::new(1.0, 0.2, 0.0).normalize();
        let n = Vector3::new(0.0, 1.0, 0.0);

        assert!(refract(d, n).is_none());
    }

    #[test]
    fn offset_follows_the_outgoing_side() {
        let p = Vector3::new(0.0, 0.0, 0.0);
        let n = Vector3::new(0.0, 1.0, 0.0);

        assert_eq!(offset_origin(p, n, Vector3::new(0.0, 1.0, 0.0), 0.5).y, 0.5);
        assert_eq!(offset_origin(p, n, Vector3::new(0.0, -1.0, 0.0), 0.5).y, -0.5);
        assert_eq!(face_forward(n, Vector3::new(0.0, 1.0, 0.0)), -n);
    }
}
