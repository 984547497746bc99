// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Job attribute construction for IPP Print-Job operations.
//
// The builder is pure and only ever emits the attributes a request actually
// needs: an absent key means "use the device default", and over-specified
// attribute sets make some devices reject otherwise-fine jobs.

use presslauf_core::types::DuplexDirective;
use serde::{Deserialize, Serialize};

/// IPP `print-color-mode` values this pipeline emits (PWG 5100.13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorMode {
    Monochrome,
}

impl ColorMode {
    /// IPP keyword for this mode.
    pub fn ipp_keyword(&self) -> &'static str {
        match self {
            Self::Monochrome => "monochrome",
        }
    }
}

/// IPP `sides` values this pipeline emits (RFC 8011 §5.2.8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SidesMode {
    TwoSidedLongEdge,
}

impl SidesMode {
    /// IPP keyword for this mode.
    pub fn ipp_keyword(&self) -> &'static str {
        match self {
            Self::TwoSidedLongEdge => "two-sided-long-edge",
        }
    }
}

/// The job attribute set for one Print-Job operation.
///
/// Built fresh per submission; `Default` is the empty set (everything at
/// device defaults).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JobAttributes {
    pub color_mode: Option<ColorMode>,
    pub sides: Option<SidesMode>,
}

impl JobAttributes {
    /// Map application-level print intent onto protocol attributes.
    ///
    /// Grayscale requests get `print-color-mode = monochrome`; a colour
    /// request emits nothing rather than an explicit "color" value.
    /// Only hardware duplex sets `sides` — manual duplex reaches
    /// two-sidedness through two separate one-sided submissions.
    pub fn for_job(grayscale: bool, duplex: DuplexDirective) -> Self {
        Self {
            color_mode: grayscale.then_some(ColorMode::Monochrome),
            sides: matches!(duplex, DuplexDirective::AutoHardware)
                .then_some(SidesMode::TwoSidedLongEdge),
        }
    }

    /// Whether every attribute is at its device default.
    pub fn is_empty(&self) -> bool {
        self.color_mode.is_none() && self.sides.is_none()
    }

    /// The `(attribute-name, keyword)` pairs to put on the wire.
    pub fn keyword_pairs(&self) -> Vec<(&'static str, &'static str)> {
        let mut pairs = Vec::new();
        if let Some(mode) = self.color_mode {
            pairs.push(("print-color-mode", mode.ipp_keyword()));
        }
        if let Some(sides) = self.sides {
            pairs.push(("sides", sides.ipp_keyword()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grayscale_maps_to_monochrome_only() {
        let attrs = JobAttributes::for_job(true, DuplexDirective::Simplex);
        assert_eq!(attrs.color_mode, Some(ColorMode::Monochrome));
        assert_eq!(attrs.sides, None);
        assert_eq!(attrs.keyword_pairs(), vec![("print-color-mode", "monochrome")]);
    }

    #[test]
    fn hardware_duplex_maps_to_sides_only() {
        let attrs = JobAttributes::for_job(false, DuplexDirective::AutoHardware);
        assert_eq!(attrs.color_mode, None);
        assert_eq!(attrs.sides, Some(SidesMode::TwoSidedLongEdge));
        assert_eq!(attrs.keyword_pairs(), vec![("sides", "two-sided-long-edge")]);
    }

    #[test]
    fn manual_duplex_emits_no_sides_attribute() {
        assert!(JobAttributes::for_job(false, DuplexDirective::ManualOdd).is_empty());
        assert!(JobAttributes::for_job(false, DuplexDirective::ManualEven).is_empty());
    }

    #[test]
    fn colour_simplex_request_emits_nothing() {
        let attrs = JobAttributes::for_job(false, DuplexDirective::Simplex);
        assert!(attrs.is_empty());
        assert!(attrs.keyword_pairs().is_empty());
        assert_eq!(attrs, JobAttributes::default());
    }

    #[test]
    fn grayscale_hardware_duplex_emits_both() {
        let attrs = JobAttributes::for_job(true, DuplexDirective::AutoHardware);
        assert_eq!(
            attrs.keyword_pairs(),
            vec![
                ("print-color-mode", "monochrome"),
                ("sides", "two-sided-long-edge"),
            ]
        );
    }

    #[test]
    fn builder_is_deterministic() {
        let a = JobAttributes::for_job(true, DuplexDirective::ManualOdd);
        let b = JobAttributes::for_job(true, DuplexDirective::ManualOdd);
        assert_eq!(a, b);
    }
}
