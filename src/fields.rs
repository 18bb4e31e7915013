//! OCat column codes and their human-readable labels.
//!
//! Pure presentation data: the parser never consults it. Codes whose meaning
//! has not been pinned down carry an empty label and `label()` reports them as
//! unknown.

use std::sync::LazyLock;

use indexmap::IndexMap;

const FIELD_LABELS: &[(&str, &str)] = &[
    ("SEQ_NUM", "Sequence Number"),
    ("STATUS", "Observation Status"),
    ("OBSID", "OBS_ID"),
    ("PR_NUM", "Proposal Number"),
    ("TARGET_NAME", "Target Name"),
    ("GRID_NAME", ""),
    ("INSTR", "Instrument"),
    ("GRAT", "Grating"),
    ("TYPE", ""),
    ("OBS_CYCLE", "Observation Cycle"),
    ("PROP_CYCLE", "Proposal Planning Cycle"),
    ("CHARGE_CYCLE", "Charge Time Cycle"),
    ("START_DATE", "DATE-OBS"),
    ("PUBLIC_AVAIL", "Publicly available"),
    ("READOUT_DETECTOR", "Readout Detector"),
    ("DATAMODE", "DATAMODE"),
    ("JOINT", "Joint Proposal Awarded Time on Other Facilities?"),
    ("HST", ""),
    ("NOAO", ""),
    ("NRAO", ""),
    ("RXTE", ""),
    ("SPITZER", ""),
    ("SUZAKU", ""),
    ("XMM", ""),
    ("SWIFT", ""),
    ("NUSTAR", ""),
    ("CATEGORY", "Object Classification"),
    ("SEG_MAX_NUM", "Maximum number of observation segments"),
    ("PROP_TITLE", "Proposal Title"),
    ("PI_NAME", "Principal Investigator"),
    ("OBSERVER", "Observer"),
    ("APP_EXP", "Approved Exposure Time"),
    ("EXP_TIME", "Actual Exposure Time"),
    ("RA", "Right Ascension (J2000)"),
    ("Dec", "Declination (J2000)"),
    ("SOE_ROLL", "Scheduled Roll"),
    ("TIME_CRIT", "Is this a time critical observation?"),
    ("Y_OFF", ""),
    ("Z_OFF", ""),
    ("X_SIM", ""),
    ("Z_SIM", ""),
    ("RASTER", ""),
    ("OBJ_TYPE", ""),
    ("OBJ", ""),
    ("NUDGE", ""),
    ("PHOTO", ""),
    ("VMAG", "Estimated V magnitude of target"),
    ("EST_CNT_RATE", "Estimated count rate"),
    ("FORDER_CNT_RATE", "First Order count rate"),
    ("COUNT_RATE", "Observed count rate (L2 events)"),
    ("EVENT_COUNT", "Observed number of counts (L2 events)"),
    ("DITHER", "Special dither requested?"),
    ("Y_AMP", ""),
    ("Y_FREQ", ""),
    ("Y_PHASE", ""),
    ("Z_AMP", ""),
    ("Z_FREQ", ""),
    ("Z_PHASE", ""),
    ("ROLL", "Does this observation have a roll constraint?"),
    ("WINDOW", "Does this observation have a temporal window constraint?"),
    ("UNINT", "Does this observation have to happen uninterrupted?"),
    ("MONITOR", "Is this observation part of a monitor sequence?"),
    ("PRE_ID", "Previous obsid in the monitor sequence"),
    ("MON_MIN", "Min lag from previous"),
    ("MON_MAX", "Max lag from previous"),
    ("GROUP_ID", ""),
    ("CONSTR", ""),
    ("EPOCH", "T0 for phase constraint"),
    ("PERIOD", ""),
    ("PSTART", "Period start"),
    ("PS_MARG", "Period start margin"),
    ("PEND", "Period end"),
    ("PE_MARG", "Period end margin"),
    ("MULTITEL", ""),
    ("MULTITEL_OBS", ""),
    ("MULTITEL_INT", ""),
    ("CONSTR_RMK", ""),
    ("TOO_TYPE", ""),
    ("TOO_START", ""),
    ("TOO_STOP", ""),
    ("ALT_GROUP", ""),
    ("ALT_TRIG", ""),
    ("SIMODE", ""),
    ("HRC", ""),
    ("SPECT_MODE", ""),
    ("BLANK_EN", ""),
    ("U_HI", ""),
    ("V_HI", ""),
    ("U_LO", ""),
    ("V_LO", ""),
    ("TIMING", ""),
    ("Z_BLK", ""),
    ("ACIS", ""),
    ("MODE", ""),
    ("BEP_PACK", ""),
    ("DROPPED_CHIP_CNT", ""),
    ("I0", ""),
    ("I1", ""),
    ("I2", ""),
    ("I3", ""),
    ("S0", ""),
    ("S1", ""),
    ("S2", ""),
    ("S3", ""),
    ("S4", ""),
    ("S5", ""),
    ("SPECTRA_MAX_COUNT", ""),
    ("MULTIPLE_SPECTRAL_LINES", ""),
    ("SUBARY", ""),
    ("STRT_ROW", ""),
    ("ROW_CNT", ""),
    ("D_CYC", ""),
    ("SEC_CNT", ""),
    ("PR_TIME", ""),
    ("SEC_TIME", ""),
    ("F_TIME", ""),
    ("OC_SUM", ""),
    ("OC_ROW", ""),
    ("OC_COL", ""),
    ("EVFIL", ""),
    ("EVFIL_LO", ""),
    ("EVFIL_RA", ""),
    ("EFFICIENT", ""),
    ("SPWIN", ""),
];

static LABELS: LazyLock<IndexMap<&'static str, &'static str>> =
    LazyLock::new(|| FIELD_LABELS.iter().copied().collect());

/// Human-readable label for a column code, if one is known.
///
/// Lookup is exact: OCat mixes cases (`Dec` next to `RA`), so codes are not re-cased.
pub fn label(code: &str) -> Option<&'static str> {
    LABELS.get(code).copied().filter(|l| !l.is_empty())
}

/// Whether `code` is a column OCat is known to return.
pub fn is_known(code: &str) -> bool {
    LABELS.contains_key(code)
}

/// Every known code with its label (possibly empty), in catalog order.
pub fn all() -> impl Iterator<Item = (&'static str, &'static str)> {
    LABELS.iter().map(|(k, v)| (*k, *v))
}

/// `CODE (Label)` when a label is known, otherwise just `CODE`.
pub fn display_name(code: &str) -> String {
    match label(code) {
        Some(l) => format!("{code} ({l})"),
        None => code.to_string(),
    }
}
