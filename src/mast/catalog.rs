use std::fmt;
use std::ops::Deref;

use serde_json::Value;

use crate::error::MastError;
use crate::mast::record::FieldKind::{Float, Int, Text};
use crate::mast::record::{FieldSpec, ModelSpec, Record};

/// One row of a `data_search` result, kept as raw JSON.
///
/// Observation metadata has no field table; downstream data-handling layers
/// interpret these rows.
pub type ObservationRow = serde_json::Map<String, Value>;

macro_rules! fields {
    ($(($wire:literal, $attr:literal, $kind:expr),)*) => {
        &[$(FieldSpec { wire: $wire, attr: $attr, kind: $kind },)*]
    };
}

/// Model spec for Kepler Objects of Interest.
pub static KOI: ModelSpec = ModelSpec {
    name: "KOI",
    identity: "{kepoi}",
    fields: fields![
        ("Kepler ID", "kepid", Int),
        ("KOI Name", "kepoi_name", Text),
        ("KOI Number", "kepoi", Text),
        ("Kepler Disposition", "koi_pdisposition", Text),
        ("NExScI Disposition", "koi_disposition", Text),
        ("RA (J2000)", "degree_ra", Float),
        ("Dec (J2000)", "degree_dec", Float),
        ("Time of Transit Epoch", "koi_time0bk", Float),
        ("Time err1", "koi_time0bk_err1", Float),
        ("Time_err2", "koi_time0bk_err2", Float),
        ("Period", "koi_period", Float),
        ("Period err1", "koi_period_err1", Float),
        ("Period err2", "koi_period_err2", Float),
        ("Transit Depth", "koi_depth", Float),
        ("Depth err1", "koi_depth_err1", Float),
        ("Depth err2", "koi_depth_err2", Float),
        ("Duration", "koi_duration", Float),
        ("Duration err1", "koi_duration_err1", Float),
        ("Duration err2", "koi_duration_err2", Float),
        ("Ingress Duration", "koi_ingress", Float),
        ("Ingress err1", "koi_ingress_err1", Float),
        ("Ingress err2", "koi_ingress_err2", Float),
        ("Impact Parameter", "koi_impact", Float),
        ("Impact Parameter err1", "koi_impact_err1", Float),
        ("Impact Parameter err2", "koi_impact_err2", Float),
        ("Inclination", "koi_incl", Float),
        ("Inclination err1", "koi_incl_err1", Float),
        ("Inclination err2", "koi_incl_err2", Float),
        ("Semi-major Axis", "koi_sma", Float),
        ("Semi-major Axus err1", "koi_sma_err1", Float),
        ("Semi-major Axis err2", "koi_sma_err2", Float),
        ("Eccentricity", "koi_eccen", Float),
        ("Eccentricity err1", "koi_eccen_err1", Float),
        ("Eccentricity err2", "koi_eccen_err2", Float),
        ("Long of Periastron", "koi_longp", Float),
        ("Long err1", "koi_longp_err1", Float),
        ("Long err2", "koi_longp_err2", Float),
        ("r/R", "koi_ror", Float),
        ("r/R err1", "koi_ror_err1", Float),
        ("r/R err2", "koi_ror_err2", Float),
        ("a/R", "koi_dor", Float),
        ("a/R err1", "koi_dor_err1", Float),
        ("a/R err2", "koi_dor_err2", Float),
        ("Planet Radius", "koi_prad", Float),
        ("Planet Radius err1", "koi_prad_err1", Float),
        ("Planet Radius err2", "koi_prad_err2", Float),
        ("Teq", "koi_teq", Int),
        ("Teq err1", "koi_teq_err1", Int),
        ("Teq err2", "koi_teq_err2", Int),
        ("Teff", "koi_steff", Int),
        ("Teff err1", "koi_steff_err1", Int),
        ("Teff err2", "koi_steff_err2", Int),
        ("log(g)", "koi_slogg", Float),
        ("log(g) err1", "koi_slogg_err1", Float),
        ("log(g) err2", "koi_slogg_err2", Float),
        ("Metallicity", "koi_smet", Float),
        ("Metallicity err1", "koi_smet_err1", Float),
        ("Metallicity err2", "koi_smet_err2", Float),
        ("Stellar Radius", "koi_srad", Float),
        ("Stellar Radius err1", "koi_srad_err1", Float),
        ("Stellar Radius err2", "koi_srad_err2", Float),
        ("Stellar Mass", "koi_smass", Float),
        ("Stellar Mass err2", "koi_smass_err2", Float),
        ("Stellar Mass err1", "koi_smass_err1", Float),
        ("Age", "koi_sage", Float),
        ("Age err1", "koi_sage_err1", Float),
        ("Age err2", "koi_sage_err2", Float),
        ("Provenance", "koi_sparprov", Text),
        ("Quarters", "koi_quarters", Text),
        ("Limb Darkening Model", "koi_limbdark_mod", Text),
        ("Limb Darkening Coeff1", "koi_ldm_coeff1", Float),
        ("Limb Darkening Coeff2", "koi_ldm_coeff2", Float),
        ("Limb Darkening Coeff3", "koi_ldm_coeff3", Float),
        ("Limb Darkening Coeff4", "koi_ldm_coeff4", Float),
        ("Transit Number", "koi_num_transits", Int),
        ("Max single event sigma", "koi_max_sngle_ev", Float),
        ("Max Multievent sigma", "koi_max_mult_ev", Float),
        ("KOI count", "koi_count", Int),
        ("Binary Discrimination", "koi_bin_oedp_sig", Float),
        ("False Positive Bkgnd ID", "koi_fp_bkgid", Text),
        ("J-band diff", "koi_fp_djmag", Text),
        ("Comments", "koi_comment", Text),
        ("Transit Model", "koi_trans_mod", Text),
        ("Transit Model SNR", "koi_model_snr", Float),
        ("Transit Model DOF", "koi_model_dof", Float),
        ("Transit Model chisq", "koi_model_chisq", Float),
        ("FWM motion signif.", "koi_fwm_stat_sig", Float),
        ("gmag", "koi_gmag", Float),
        ("gmag err", "koi_gmag_err", Float),
        ("rmag", "koi_rmag", Float),
        ("rmag err", "koi_rmag_err", Float),
        ("imag", "koi_imag", Float),
        ("imag err", "koi_imag_err", Float),
        ("zmag", "koi_zmag", Float),
        ("zmag err", "koi_zmag_err", Float),
        ("Jmag", "koi_jmag", Float),
        ("Jmag err", "koi_jmag_err", Float),
        ("Hmag", "koi_hmag", Float),
        ("Hmag err", "koi_hmag_err", Float),
        ("Kmag", "koi_kmag", Float),
        ("Kmag err", "koi_kmag_err", Float),
        ("kepmag", "koi_kepmag", Float),
        ("kepmag err", "koi_kepmag_err", Float),
        ("Delivery Name", "koi_delivname", Text),
        ("FWM SRA", "koi_fwm_sra", Float),
        ("FWM SRA err", "koi_fwm_sra_err", Float),
        ("FWM SDec", "koi_fwm_sdec", Float),
        ("FWM SDec err", "koi_fwm_sdec_err", Float),
        ("FWM SRAO", "koi_fwm_srao", Float),
        ("FWM SRAO err", "koi_fwm_srao_err", Float),
        ("FWM SDeco", "koi_fwm_sdeco", Float),
        ("FWM SDeco err", "koi_fwm_sdeco_err", Float),
        ("FWM PRAO", "koi_fwm_prao", Float),
        ("FWM PRAO err", "koi_fwm_prao_err", Float),
        ("FWM PDeco", "koi_fwm_pdeco", Float),
        ("FWM PDeco err", "koi_fwm_pdeco_err", Float),
        ("Dicco MRA", "koi_dicco_mra", Float),
        ("Dicco MRA err", "koi_dicco_mra_err", Float),
        ("Dicco MDec", "koi_dicco_mdec", Float),
        ("Dicco MDec err", "koi_dicco_mdec_err", Float),
        ("Dicco MSky", "koi_dicco_msky", Float),
        ("Dicco MSky err", "koi_dicco_msky_err", Float),
        ("Dicco FRA", "koi_dicco_fra", Float),
        ("Dicco FRA err", "koi_dicco_fra_err", Float),
        ("Dicco FDec", "koi_dicco_fdec", Float),
        ("Dicco FDec err", "koi_dicco_fdec_err", Float),
        ("Dicco FSky", "koi_dicco_fsky", Float),
        ("Dicco FSky err", "koi_dicco_fsky_err", Float),
        ("Dikco MRA", "koi_dikco_mra", Float),
        ("Dikco MRA err", "koi_dikco_mra_err", Float),
        ("Dikco MDec", "koi_dikco_mdec", Float),
        ("Dikco MDec err", "koi_dikco_mdec_err", Float),
        ("Dikco MSky", "koi_dikco_msky", Float),
        ("Dikco MSky err", "koi_dikco_msky_err", Float),
        ("Dikco FRA", "koi_dikco_fra", Float),
        ("Dikco FRA err", "koi_dikco_fra_err", Float),
        ("Dikco FDec", "koi_dikco_fdec", Float),
        ("Dikco FDec err", "koi_dikco_fdec_err", Float),
        ("Dikco FSky", "koi_dikco_fsky", Float),
        ("Dikco FSky err", "koi_dikco_fsky_err", Float),
        ("Last Update", "rowupdate", Text),
    ],
};

/// Model spec for confirmed planets.
pub static PLANET: ModelSpec = ModelSpec {
    name: "Planet",
    identity: "\"{kepler_name}\"",
    fields: fields![
        ("Planet Name", "kepler_name", Text),
        ("Kepler ID", "kepid", Int),
        ("KOI Name", "kepoi_name", Text),
        ("Alt Name", "alt_name", Text),
        ("KOI Number", "koi", Text),
        ("RA (J2000)", "degree_ra", Float),
        ("RA Error", "ra_err", Float),
        ("Dec (J2000)", "degree_dec", Float),
        ("Dec Error", "dec_err", Float),
        ("2mass Name", "tm_designation", Text),
        ("Planet temp", "koi_teq", Int),
        ("Planet Radius", "koi_prad", Float),
        ("Transit duration", "koi_duration", Float),
        ("Period", "koi_period", Float),
        ("Period err1", "koi_period_err1", Float),
        ("Ingress Duration", "koi_ingress", Float),
        ("Impact Parameter", "koi_impact", Float),
        ("Inclination", "koi_incl", Float),
        ("Provenance", "koi_sparprov", Text),
        ("a/R", "koi_dor", Float),
        ("Transit Number", "koi_num_transits", Int),
        ("Transit Model", "koi_trans_mod", Text),
        ("Time of transit", "koi_time0bk", Float),
        ("Time of transit err1", "koi_time0bk_err1", Float),
        ("Transit Depth", "koi_depth", Float),
        ("Semi-major Axis", "koi_sma", Float),
        ("r/R", "koi_ror", Float),
        ("r/R err1", "koi_ror_err1", Float),
        ("Age", "koi_sage", Float),
        ("Metallicity", "koi_smet", Float),
        ("Stellar Mass", "koi_smass", Float),
        ("Stellar Radius", "koi_srad", Float),
        ("Stellar Teff", "koi_steff", Int),
        ("Logg", "koi_slogg", Float),
        ("KEP Mag", "koi_kepmag", Float),
        ("g Mag", "koi_gmag", Float),
        ("r Mag", "koi_rmag", Float),
        ("i Mag", "koi_imag", Float),
        ("z Mag", "koi_zmag", Float),
        ("J Mag", "koi_jmag", Float),
        ("H Mag", "koi_hmag", Float),
        ("K Mag", "koi_kmag", Float),
        ("KOI List", "koi_list_flag", Text),
        ("Last Update", "koi_vet_date", Text),
    ],
};

/// A Kepler Object of Interest: a planet candidate from the `koi` table.
#[derive(Debug, Clone)]
pub struct Koi(Record);

impl Koi {
    /// Build a KOI from one raw result row.
    pub fn from_row(row: serde_json::Map<String, Value>) -> Result<Self, MastError> {
        Record::build(&KOI, row).map(Koi)
    }
}

impl Deref for Koi {
    type Target = Record;

    fn deref(&self) -> &Record {
        &self.0
    }
}

impl fmt::Display for Koi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A confirmed planet from the `confirmed_planets` table.
#[derive(Debug, Clone)]
pub struct Planet(Record);

impl Planet {
    /// Build a planet from one raw result row.
    pub fn from_row(row: serde_json::Map<String, Value>) -> Result<Self, MastError> {
        Record::build(&PLANET, row).map(Planet)
    }
}

impl Deref for Planet {
    type Target = Record;

    fn deref(&self) -> &Record {
        &self.0
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
