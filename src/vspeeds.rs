//! Closed-form extraction of characteristic V-speeds from composites.
//!
//! The bootstrap polynomial in true airspeed squared has closed-form roots
//! for every named V-speed. Above the absolute ceiling some of those roots
//! stop being real; that is an expected outcome of the model; not a fault,
//! so [`VSpeeds::solve`] never returns `Err`, it returns `None` fields.

use crate::atmosphere;
use crate::composites::Composites;
use crate::units::{Length, Speed, Temperature};

/// The five characteristic calibrated airspeeds at one operating point.
/// Each field is `None` only where the model has no real root at this
/// altitude/weight (at or above the absolute ceiling for Vx/Vy/VM).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VSpeeds {
    /// Best angle of climb.
    pub vx: Option<Speed>,
    /// Best rate of climb.
    pub vy: Option<Speed>,
    /// Max level speed.
    pub vm: Option<Speed>,
    /// Best glide.
    pub vbg: Option<Speed>,
    /// Minimum sink.
    pub vmd: Option<Speed>,
}

impl VSpeeds {
    /// Solve for the five V-speeds given composites at (h, T). Speeds are
    /// returned calibrated (CAS).
    pub fn solve(composites: &Composites, h: Length, oat: Option<Temperature>) -> VSpeeds {
        let to_cas = |v2: f64| -> Option<Speed> {
            if v2 > 0.0 {
                Some(atmosphere::cas_from_tas(Speed::fps(v2.sqrt()), h, oat))
            } else {
                None
            }
        };

        let q = composites.q;
        let r = composites.r;
        let u = composites.u;

        let vx2 = if r < 0.0 { Some((-r).sqrt()) } else { None };

        let vy2 = {
            let radicand = q * q / 36.0 - r / 3.0;
            if radicand >= 0.0 {
                let v2 = -q / 6.0 + radicand.sqrt();
                if v2 > 0.0 {
                    Some(v2)
                } else {
                    None
                }
            } else {
                None
            }
        };

        let vm2 = {
            let radicand = q * q / 4.0 + r;
            if radicand >= 0.0 {
                let v2 = -q / 2.0 + radicand.sqrt();
                if v2 > 0.0 {
                    Some(v2)
                } else {
                    None
                }
            } else {
                None
            }
        };

        let vbg2 = if u > 0.0 { Some(u.sqrt()) } else { None };
        let vmd2 = if u > 0.0 { Some((u / 3.0).sqrt()) } else { None };

        VSpeeds {
            vx: vx2.and_then(to_cas),
            vy: vy2.and_then(to_cas),
            vm: vm2.and_then(to_cas),
            vbg: vbg2.and_then(to_cas),
            vmd: vmd2.and_then(to_cas),
        }
    }
}
