//! Namelist rendering for input decks
//!
//! Renders an [`InputDeck`] into the exact text layout XTurb reads:
//! CRLF-terminated `&SECTION` blocks, entry names padded to a fixed
//! width, reals at three decimal places, arrays one element per line
//! with continuation indentation, strings quoted.

use std::path::Path;

use tracing::info;

use super::InputDeck;
use crate::constants::{DECK_ARRAY_INDENT, DECK_LINE_TERMINATOR, DECK_REAL_PRECISION};
use crate::{Result, XTurbError};

impl InputDeck {
    /// Render the deck as namelist text.
    pub fn to_deck_string(&self) -> String {
        let mut out = DeckText::new();

        out.section("&BLADE", 3);
        out.string("Name", &self.blade.name);
        out.blank();
        out.int("BN", self.blade.bn);
        out.blank();
        out.real("ROOT", self.blade.root);
        out.blank();
        out.int("NTAPER", self.blade.ntaper);
        out.blank();
        out.real_array("RTAPER", &self.blade.rtaper);
        out.blank();
        out.real_array("CTAPER", &self.blade.ctaper);
        out.blank();
        out.int("NTWIST", self.blade.ntwist);
        out.blank();
        out.real_array("RTWIST", &self.blade.rtwist);
        out.blank();
        out.real_array("DTWIST", &self.blade.dtwist);
        out.blank();
        out.int("NAIRF", self.blade.nairf);
        out.blank();
        out.real_array("RAIRF", &self.blade.rairf);
        out.blank();
        out.string_array("AIRFDATA", &self.blade.airfdata);
        out.blank();
        out.int("BLENDAIRF", self.blade.blendairf);
        out.int("PERCENTR", self.blade.percentr);
        out.int("STALLDELAY", self.blade.stalldelay);
        out.int("VITERNA", self.blade.viterna);
        out.blank();
        out.int("NSWEEP", self.blade.nsweep);
        out.blank();
        out.real_array("RSWEEP", &self.blade.rsweep);
        out.blank();
        out.real_array("LSWEEP", &self.blade.lsweep);
        out.blank();
        out.int("NDIHED", self.blade.ndihed);
        out.blank();
        out.real_array("RDIHED", &self.blade.rdihed);
        out.blank();
        out.real_array("LDIHED", &self.blade.ldihed);
        out.blank();
        out.int("NTWAX", self.blade.ntwax);
        out.blank();
        out.real_array("RTWAX", &self.blade.rtwax);
        out.blank();
        out.real_array("LTWAX", &self.blade.ltwax);
        out.blank();
        out.int("NPIAX", self.blade.npiax);
        out.blank();
        out.real_array("RPIAX", &self.blade.rpiax);
        out.blank();
        out.real_array("LPIAX", &self.blade.lpiax);
        out.blank();
        out.end_section();

        out.section("&OPERATION", 3);
        out.int("CHECK", self.operation.check);
        out.blank();
        out.int("DESIGN", self.operation.design);
        out.blank();
        out.int("NTSR", self.operation.ntsr);
        out.real("BTSR", self.operation.btsr);
        out.real("ETSR", self.operation.etsr);
        out.blank();
        out.int("NPITCH", self.operation.npitch);
        out.real("BPITCH", self.operation.bpitch);
        out.real("EPITCH", self.operation.epitch);
        out.blank();
        out.int("ANALYSIS", self.operation.analysis);
        out.blank();
        out.int("NANA", self.operation.nana);
        out.blank();
        out.real_array("TSRANA", &self.operation.tsrana);
        out.blank();
        out.real_array("PITCHANA", &self.operation.pitchana);
        out.blank();
        out.int("PREDICTION", self.operation.prediction);
        out.blank();
        out.real("BRADIUS", self.operation.bradius);
        out.blank();
        out.real("RHOAIR", self.operation.rhoair);
        out.blank();
        out.real("MUAIR", self.operation.muair);
        out.blank();
        out.int("NPRE", self.operation.npre);
        out.blank();
        out.real_array("VWIND", &self.operation.vwind);
        out.blank();
        out.real_array("RPMPRE", &self.operation.rpmpre);
        out.blank();
        out.real_array("PITCHPRE", &self.operation.pitchpre);
        out.end_section();

        out.section("&SOLVER", 2);
        out.int("METHOD", self.solver.method);
        out.int("JX", self.solver.jx);
        out.int("COSDISTR", self.solver.cosdistr);
        out.int("GNUPLOT", self.solver.gnuplot);
        out.end_section();

        out.section("&HVM", 2);
        out.int("WAKEEXP", self.hvm.wakeexp);
        out.real("DX0", self.hvm.dx0);
        out.real("XSTR", self.hvm.xstr);
        out.real("XTREFFTZ", self.hvm.xtrefftz);
        out.int("NSEC", self.hvm.nsec);
        out.int("IB", self.hvm.ib);
        out.int("DIP", self.hvm.dip);
        out.real("OMRELAX", self.hvm.omrelax);
        out.real("AVISC", self.hvm.avisc);
        out.int("NACMOD", self.hvm.nacmod);
        out.real("LN", self.hvm.ln);
        out.real("HN", self.hvm.hn);
        out.real("XN", self.hvm.xn);
        out.end_section();

        out.section("&BEMT", 2);
        out.int("RLOSS", self.bemt.rloss);
        out.int("TLOSS", self.bemt.tip_loss);
        out.real("AXRELAX", self.bemt.axrelax);
        out.real("ATRELAX", self.bemt.atrelax);
        out.end_section();

        out.section("&OPTI", 2);
        out.int("OPTIM", self.opti.optim);
        out.end_section();

        out.finish()
    }

    /// Write the deck to a `.inp` file.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_deck_string())
            .map_err(|e| XTurbError::deck_write(path, e.to_string()))?;
        info!("Input deck written to {}", path.display());
        Ok(())
    }
}

/// Format a real value for the deck.
///
/// Three decimal places, except that nonzero values which would round
/// to 0.000 keep their exponent form (MUAIR is 1.8e-5; the solver reads
/// either notation).
pub fn format_real(value: f64) -> String {
    if value != 0.0 && value.abs() < 10f64.powi(-(DECK_REAL_PRECISION as i32)) / 2.0 {
        format!("{:.*e}", DECK_REAL_PRECISION, value)
    } else {
        format!("{:.*}", DECK_REAL_PRECISION, value)
    }
}

/// Accumulates deck text, tracking the current section's entry indent.
struct DeckText {
    buf: String,
    indent: usize,
}

impl DeckText {
    fn new() -> Self {
        Self {
            buf: String::new(),
            indent: 3,
        }
    }

    fn section(&mut self, header: &str, indent: usize) {
        self.indent = indent;
        self.buf.push_str(header);
        self.buf.push_str(DECK_LINE_TERMINATOR);
    }

    fn end_section(&mut self) {
        self.buf.push_str("&END");
        self.buf.push_str(DECK_LINE_TERMINATOR);
    }

    fn blank(&mut self) {
        self.buf.push_str(DECK_LINE_TERMINATOR);
    }

    fn entry_prefix(&self, name: &str) -> String {
        format!("{}{:<11}= ", " ".repeat(self.indent), name)
    }

    fn int(&mut self, name: &str, value: i32) {
        let prefix = self.entry_prefix(name);
        self.buf
            .push_str(&format!("{}{},{}", prefix, value, DECK_LINE_TERMINATOR));
    }

    fn real(&mut self, name: &str, value: f64) {
        let prefix = self.entry_prefix(name);
        self.buf.push_str(&format!(
            "{}{},{}",
            prefix,
            format_real(value),
            DECK_LINE_TERMINATOR
        ));
    }

    fn string(&mut self, name: &str, value: &str) {
        let prefix = self.entry_prefix(name);
        self.buf.push_str(&format!(
            "{}'{}',{}",
            prefix, value, DECK_LINE_TERMINATOR
        ));
    }

    fn array(&mut self, name: &str, rendered: impl Iterator<Item = String>) {
        let prefix = self.entry_prefix(name);
        self.buf.push_str(&prefix);
        let elements: Vec<String> = rendered.collect();
        let joined = elements.join(&format!(",{}{}", DECK_LINE_TERMINATOR, DECK_ARRAY_INDENT));
        self.buf.push_str(&joined);
        self.buf.push(',');
        self.buf.push_str(DECK_LINE_TERMINATOR);
    }

    fn real_array(&mut self, name: &str, values: &[f64]) {
        self.array(name, values.iter().map(|v| format_real(*v)));
    }

    fn string_array(&mut self, name: &str, values: &[String]) {
        self.array(name, values.iter().map(|v| format!("'{}'", v)));
    }

    fn finish(self) -> String {
        self.buf
    }
}
