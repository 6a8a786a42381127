//! Industry risk-tier lookup.
//!
//! The funnel's business-info step shows the applicant's industry and the
//! underwriting risk tier it maps to. The table is static configuration;
//! lookups trim surrounding whitespace and are otherwise exact. Unknown or
//! blank input yields [`RISK_UNKNOWN`].

/// Sentinel returned for blank or unmapped industries.
pub const RISK_UNKNOWN: &str = "—";

/// Canonical industry name → risk tier code.
///
/// Ordered as presented in the funnel's industry selector.
const INDUSTRY_RISK: [(&str, &str); 20] = [
    ("Restaurants & Food Service", "T1"),
    ("Retail", "T1"),
    ("E-commerce", "T1"),
    ("Healthcare & Medical", "T1"),
    ("Professional Services", "T1"),
    ("Beauty & Wellness", "T1"),
    ("Automotive Repair", "T1-T3"),
    ("Construction", "T1-T3"),
    ("Landscaping", "T1-T3"),
    ("Manufacturing", "T1-T3"),
    ("Wholesale & Distribution", "T1-T3"),
    ("Trucking & Logistics", "T1-T3"),
    ("Hospitality & Hotels", "T1-T3"),
    ("Fitness & Gyms", "T1-T3"),
    ("Cleaning Services", "T1-T3"),
    ("Real Estate", "T4"),
    ("Financial Services", "T4"),
    ("Law Firms", "T4"),
    ("Cannabis", "T4"),
    ("Gas Stations & Convenience", "T4"),
];

/// Resolve the risk tier code for a free-text industry name.
///
/// `None`, or input that trims to empty, short-circuits to [`RISK_UNKNOWN`];
/// otherwise the trimmed name is looked up exactly (case-sensitive).
pub fn resolve_industry_risk(name: Option<&str>) -> &'static str {
    let Some(name) = name else {
        return RISK_UNKNOWN;
    };
    let name = name.trim();
    if name.is_empty() {
        return RISK_UNKNOWN;
    }
    INDUSTRY_RISK
        .iter()
        .find(|(industry, _)| *industry == name)
        .map(|(_, risk)| *risk)
        .unwrap_or(RISK_UNKNOWN)
}

/// Ordered list of all recognized industry names, for populating the
/// funnel's industry selection control.
pub fn industry_options() -> impl Iterator<Item = &'static str> {
    INDUSTRY_RISK.iter().map(|(industry, _)| *industry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_missing_input_yield_sentinel() {
        assert_eq!(resolve_industry_risk(None), RISK_UNKNOWN);
        assert_eq!(resolve_industry_risk(Some("")), RISK_UNKNOWN);
        assert_eq!(resolve_industry_risk(Some("   ")), RISK_UNKNOWN);
    }

    #[test]
    fn known_industry_resolves() {
        assert_eq!(resolve_industry_risk(Some("Construction")), "T1-T3");
        assert_eq!(resolve_industry_risk(Some("Retail")), "T1");
        assert_eq!(resolve_industry_risk(Some("Cannabis")), "T4");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(resolve_industry_risk(Some("  Construction  ")), "T1-T3");
    }

    #[test]
    fn unmapped_industry_yields_sentinel() {
        assert_eq!(resolve_industry_risk(Some("Unknown Industry")), RISK_UNKNOWN);
        // Lookup is case-sensitive after trimming.
        assert_eq!(resolve_industry_risk(Some("construction")), RISK_UNKNOWN);
    }

    #[test]
    fn every_option_has_a_table_entry() {
        for name in industry_options() {
            assert_ne!(
                resolve_industry_risk(Some(name)),
                RISK_UNKNOWN,
                "option {name:?} has no risk mapping"
            );
        }
    }
}
