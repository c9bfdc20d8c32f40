//! Static legal tables
//!
//! Read-only lookups of the Dutch occupational health and safety clauses
//! that findings and recommendations cite, plus the abbreviations used in
//! wizard labels. Engines reference clauses by key so a citation text is
//! written in exactly one place.

use serde::Serialize;

/// A citable legal clause
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LegalClause {
    /// Lookup key, e.g. "vibration-limits"
    pub key: &'static str,
    /// Citation as printed in reports
    pub citation: &'static str,
    /// What the clause governs
    pub subject: &'static str,
}

// ── Clauses ──────────────────────────────────────────────────────────

pub const RISK_INVENTORY: LegalClause = LegalClause {
    key: "risk-inventory",
    citation: "Arbowet art. 5",
    subject: "Risico-inventarisatie en -evaluatie (RI&E) met plan van aanpak",
};

pub const OCCUPATIONAL_HYGIENE_STRATEGY: LegalClause = LegalClause {
    key: "occupational-hygiene-strategy",
    citation: "Arbowet art. 3 lid 1 sub b",
    subject: "Arbeidshygiënische strategie: bronaanpak voor collectieve en persoonlijke maatregelen",
};

pub const HEALTH_SURVEILLANCE: LegalClause = LegalClause {
    key: "health-surveillance",
    citation: "Arbowet art. 18",
    subject: "Periodiek arbeidsgezondheidskundig onderzoek (PAGO)",
};

pub const VIBRATION_LIMITS: LegalClause = LegalClause {
    key: "vibration-limits",
    citation: "Arbobesluit art. 6.11b",
    subject: "Grens- en actiewaarden voor hand-arm- en lichaamstrillingen",
};

pub const VIBRATION_ASSESSMENT: LegalClause = LegalClause {
    key: "vibration-assessment",
    citation: "Arbobesluit art. 6.11c",
    subject: "Beoordeling en zo nodig meting van de blootstelling aan trillingen",
};

pub const VIBRATION_MEASURES: LegalClause = LegalClause {
    key: "vibration-measures",
    citation: "Arbobesluit art. 6.11d",
    subject: "Maatregelen bij overschrijding van de actiewaarde voor trillingen",
};

pub const VIBRATION_HEALTH: LegalClause = LegalClause {
    key: "vibration-health",
    citation: "Arbobesluit art. 6.11f",
    subject: "Gezondheidstoezicht bij blootstelling aan trillingen",
};

pub const NOISE_LIMITS: LegalClause = LegalClause {
    key: "noise-limits",
    citation: "Arbobesluit art. 6.6",
    subject: "Grens- en actiewaarden voor blootstelling aan lawaai",
};

pub const NOISE_ASSESSMENT: LegalClause = LegalClause {
    key: "noise-assessment",
    citation: "Arbobesluit art. 6.7",
    subject: "Beoordeling en zo nodig meting van de geluidsblootstelling",
};

pub const NOISE_MEASURES: LegalClause = LegalClause {
    key: "noise-measures",
    citation: "Arbobesluit art. 6.8",
    subject: "Technische en organisatorische maatregelen tegen lawaai",
};

pub const NOISE_PROTECTION: LegalClause = LegalClause {
    key: "noise-protection",
    citation: "Arbobesluit art. 6.9",
    subject: "Beschikbaar stellen en dragen van gehoorbescherming",
};

pub const NOISE_HEALTH: LegalClause = LegalClause {
    key: "noise-health",
    citation: "Arbobesluit art. 6.10",
    subject: "Audiometrisch onderzoek bij blootstelling boven de actiewaarde",
};

/// Every clause, in citation order
pub const CLAUSES: &[LegalClause] = &[
    OCCUPATIONAL_HYGIENE_STRATEGY,
    RISK_INVENTORY,
    HEALTH_SURVEILLANCE,
    NOISE_LIMITS,
    NOISE_ASSESSMENT,
    NOISE_MEASURES,
    NOISE_PROTECTION,
    NOISE_HEALTH,
    VIBRATION_LIMITS,
    VIBRATION_ASSESSMENT,
    VIBRATION_MEASURES,
    VIBRATION_HEALTH,
];

/// Look up a clause by key
pub fn citation(key: &str) -> Option<&'static LegalClause> {
    CLAUSES.iter().find(|c| c.key == key)
}

// ── Abbreviations ────────────────────────────────────────────────────

/// Abbreviations that appear in labels and help texts
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("A(8)", "Dagelijkse trillingsblootstelling genormaliseerd op 8 uur"),
    ("AHS", "Arbeidshygiënische strategie"),
    ("dB(A)", "A-gewogen geluidsdrukniveau in decibel"),
    ("HAV", "Hand-armtrillingen (hand-arm vibration)"),
    ("Lex,8h", "Dagelijkse geluidsblootstelling genormaliseerd op 8 uur"),
    ("PAGO", "Periodiek arbeidsgezondheidskundig onderzoek"),
    ("PBM", "Persoonlijke beschermingsmiddelen"),
    ("RI&E", "Risico-inventarisatie en -evaluatie"),
    ("WBGT", "Wet bulb globe temperature, maat voor hittebelasting"),
    ("WBV", "Lichaamstrillingen (whole-body vibration)"),
];

/// Expand an abbreviation; matching ignores ASCII case
pub fn abbreviation(key: &str) -> Option<&'static str> {
    ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| abbr.eq_ignore_ascii_case(key))
        .map(|(_, meaning)| *meaning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_clause_resolves_by_key() {
        for clause in CLAUSES {
            assert_eq!(citation(clause.key), Some(clause));
        }
        assert!(citation("does-not-exist").is_none());
    }

    #[test]
    fn test_clause_keys_are_unique() {
        let keys: HashSet<_> = CLAUSES.iter().map(|c| c.key).collect();
        assert_eq!(keys.len(), CLAUSES.len());
    }

    #[test]
    fn test_vibration_limits_citation() {
        let clause = citation("vibration-limits").unwrap();
        assert_eq!(clause.citation, "Arbobesluit art. 6.11b");
    }

    #[test]
    fn test_abbreviation_lookup() {
        assert!(abbreviation("PAGO").unwrap().contains("arbeidsgezondheidskundig"));
        assert_eq!(abbreviation("hav"), abbreviation("HAV"));
        assert!(abbreviation("XYZ").is_none());
    }
}
