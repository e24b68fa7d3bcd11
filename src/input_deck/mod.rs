//! XTurb input deck model and writer
//!
//! XTurb reads its case definition from a Fortran namelist file
//! (`.inp`): `&SECTION` blocks of `NAME = value,` entries terminated by
//! `&END`. This module models the deck as plain data and renders it in
//! the exact layout the solver expects; defaults reproduce the NREL
//! Phase VI reference turbine.
//!
//! Launching the solver against a written deck is a host-application
//! concern and lives outside this crate.

pub mod writer;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

/// `&BLADE` section: geometry of the blade as radial distributions.
///
/// Field names keep the solver's spelling since they are the wire
/// format. The paired `R*`/value arrays give breakpoints in r/R and the
/// value at each breakpoint; the `N*` counts must match their arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BladeSection {
    /// Case name, written quoted.
    pub name: String,
    /// Number of blades.
    pub bn: i32,
    /// Root cutout as a fraction of radius.
    pub root: f64,
    pub ntaper: i32,
    pub rtaper: Vec<f64>,
    pub ctaper: Vec<f64>,
    pub ntwist: i32,
    pub rtwist: Vec<f64>,
    pub dtwist: Vec<f64>,
    pub nairf: i32,
    pub rairf: Vec<f64>,
    /// Airfoil polar file paths, written quoted.
    pub airfdata: Vec<String>,
    pub blendairf: i32,
    pub percentr: i32,
    pub stalldelay: i32,
    pub viterna: i32,
    pub nsweep: i32,
    pub rsweep: Vec<f64>,
    pub lsweep: Vec<f64>,
    pub ndihed: i32,
    pub rdihed: Vec<f64>,
    pub ldihed: Vec<f64>,
    pub ntwax: i32,
    pub rtwax: Vec<f64>,
    pub ltwax: Vec<f64>,
    pub npiax: i32,
    pub rpiax: Vec<f64>,
    pub lpiax: Vec<f64>,
}

/// `&OPERATION` section: what the solver should run (check, design,
/// analysis, prediction) and the operating points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationSection {
    pub check: i32,
    pub design: i32,
    pub ntsr: i32,
    pub btsr: f64,
    pub etsr: f64,
    pub npitch: i32,
    pub bpitch: f64,
    pub epitch: f64,
    pub analysis: i32,
    pub nana: i32,
    pub tsrana: Vec<f64>,
    pub pitchana: Vec<f64>,
    pub prediction: i32,
    /// Blade radius in meters.
    pub bradius: f64,
    /// Air density in kg/m³.
    pub rhoair: f64,
    /// Dynamic viscosity in kg/(m·s).
    pub muair: f64,
    pub npre: i32,
    pub vwind: Vec<f64>,
    pub rpmpre: Vec<f64>,
    pub pitchpre: Vec<f64>,
}

/// `&SOLVER` section: numerical method selection and discretization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverSection {
    pub method: i32,
    pub jx: i32,
    pub cosdistr: i32,
    pub gnuplot: i32,
}

/// `&HVM` section: helical vortex model parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HvmSection {
    pub wakeexp: i32,
    pub dx0: f64,
    pub xstr: f64,
    pub xtrefftz: f64,
    pub nsec: i32,
    pub ib: i32,
    pub dip: i32,
    pub omrelax: f64,
    pub avisc: f64,
    pub nacmod: i32,
    pub ln: f64,
    pub hn: f64,
    pub xn: f64,
}

/// `&BEMT` section: blade element momentum theory parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BemtSection {
    pub rloss: i32,
    /// Written as `TLOSS`.
    pub tip_loss: i32,
    pub axrelax: f64,
    pub atrelax: f64,
}

/// `&OPTI` section: optimization switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptiSection {
    pub optim: i32,
}

/// A complete XTurb input deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputDeck {
    pub blade: BladeSection,
    pub operation: OperationSection,
    pub solver: SolverSection,
    pub hvm: HvmSection,
    pub bemt: BemtSection,
    pub opti: OptiSection,
}

impl Default for InputDeck {
    /// The NREL Phase VI reference turbine: a two-bladed 5.03 m rotor
    /// with the S809 airfoil, the standard validation case.
    fn default() -> Self {
        Self {
            blade: BladeSection {
                name: "NREL-PhaseVI".to_string(),
                bn: 2,
                root: 0.25,
                ntaper: 2,
                rtaper: vec![0.25, 1.00],
                ctaper: vec![0.1465, 0.0707],
                ntwist: 20,
                rtwist: vec![
                    0.250, 0.267, 0.300, 0.328, 0.388, 0.449, 0.466, 0.509, 0.570, 0.631,
                    0.633, 0.691, 0.752, 0.800, 0.812, 0.873, 0.934, 0.950, 0.994, 1.000,
                ],
                dtwist: vec![
                    20.040, 18.074, 14.292, 11.909, 7.979, 5.308, 4.715, 3.425, 2.083, 1.150,
                    1.115, 0.494, -0.015, -0.381, -0.475, -0.920, -1.352, -1.469, -1.775, -1.816,
                ],
                nairf: 1,
                rairf: vec![0.25],
                airfdata: vec!["./s80905.polar".to_string()],
                blendairf: 0,
                percentr: 2,
                stalldelay: 0,
                viterna: 0,
                nsweep: 2,
                rsweep: vec![0.25, 1.00],
                lsweep: vec![0.00, 0.00],
                ndihed: 2,
                rdihed: vec![0.25, 1.00],
                ldihed: vec![0.00, 0.00],
                ntwax: 2,
                rtwax: vec![0.25, 1.00],
                ltwax: vec![0.30, 0.30],
                npiax: 2,
                rpiax: vec![0.25, 1.00],
                lpiax: vec![0.30, 0.30],
            },
            operation: OperationSection {
                check: 0,
                design: 0,
                ntsr: 10,
                btsr: 2.0,
                etsr: 20.0,
                npitch: 2,
                bpitch: 1.8,
                epitch: 3.0,
                analysis: 0,
                nana: 2,
                tsrana: vec![7.585, 5.418, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0],
                pitchana: vec![3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0],
                prediction: 1,
                bradius: 5.03,
                rhoair: 1.225,
                muair: 1.8e-05,
                npre: 1,
                vwind: vec![7.0, 7.0, 9.0, 10.0, 11.0, 13.0],
                rpmpre: vec![72.0, 72.0, 72.0, 72.0, 72.0, 72.0],
                pitchpre: vec![3.0, 3.0, 3.0, 3.0, 3.0, 3.0],
            },
            solver: SolverSection {
                method: 1,
                jx: 41,
                cosdistr: 1,
                gnuplot: 2,
            },
            hvm: HvmSection {
                wakeexp: 1,
                dx0: 1.0e-04,
                xstr: 1.0,
                xtrefftz: 1.0,
                nsec: 20,
                ib: 2,
                dip: 1,
                omrelax: 0.2,
                avisc: 0.5,
                nacmod: 0,
                ln: 0.05,
                hn: 0.025,
                xn: 0.0,
            },
            bemt: BemtSection {
                rloss: 1,
                tip_loss: 1,
                axrelax: 0.125,
                atrelax: 0.125,
            },
            opti: OptiSection { optim: 0 },
        }
    }
}

impl InputDeck {
    /// Deck with the NREL Phase VI defaults.
    pub fn new() -> Self {
        Self::default()
    }
}
